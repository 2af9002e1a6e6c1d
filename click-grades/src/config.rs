use serde::{Deserialize, Serialize};

use crate::click_model::{ClickModelKind, HeuristicRule};

/// Configuration of [`apply_click_model()`](crate::apply_click_model).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    /// The click model used to grade the records.
    pub click_model_type: ClickModelKind,
    /// Whether the graded records are downsampled.
    pub downsample: bool,
    /// Seed of the generator used for grading and downsampling.
    pub seed: u64,
    pub heuristic_rule: HeuristicRule,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            click_model_type: ClickModelKind::Binary,
            downsample: true,
            seed: 123456,
            heuristic_rule: HeuristicRule::Uniform,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config: Configuration = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn test_json_overrides() {
        let config: Configuration = serde_json::from_str(
            r#"{
                "click_model_type": "heuristic",
                "downsample": false,
                "seed": 7,
                "heuristic_rule": { "rule": "thresholds", "medium": 0.05, "high": 0.2 }
            }"#,
        )
        .unwrap();
        assert_eq!(
            config,
            Configuration {
                click_model_type: ClickModelKind::Heuristic,
                downsample: false,
                seed: 7,
                heuristic_rule: HeuristicRule::Thresholds {
                    medium: 0.05,
                    high: 0.2,
                },
            }
        );
    }

    #[test]
    fn test_json_unknown_click_model() {
        let error = serde_json::from_str::<Configuration>(r#"{"click_model_type": "foo"}"#)
            .unwrap_err();
        assert!(error
            .to_string()
            .contains("Unknown click model `foo`, expected one of `binary`, `ctr` or `heuristic`."));
    }

    #[test]
    fn test_json_unknown_field() {
        assert!(serde_json::from_str::<Configuration>(r#"{"clickmodel": "ctr"}"#).is_err());
    }
}
