use std::{convert::TryFrom, str::FromStr};

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How a click model turns the interaction counters of a record into a grade.
///
/// Every kind is paired with the resampling strategy fitting the grades it
/// produces, see [`ClickModelKind::resampling_strategy()`].
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ClickModelKind {
    /// A record is relevant if it was clicked at least once.
    #[display(fmt = "binary")]
    Binary,
    /// The click-through rate.
    #[display(fmt = "ctr")]
    Ctr,
    /// The click-through rate put into one of a few buckets.
    #[display(fmt = "heuristic")]
    Heuristic,
}

/// How to correct the skew of a graded dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResamplingStrategy {
    /// Draws the same number of records for each distinct grade.
    BucketBalancing,
    /// Draws records weighted by the local density of their grade.
    ContinuousReweighting,
}

impl ClickModelKind {
    pub const ALL: [ClickModelKind; 3] = [
        ClickModelKind::Binary,
        ClickModelKind::Ctr,
        ClickModelKind::Heuristic,
    ];

    pub fn resampling_strategy(self) -> ResamplingStrategy {
        match self {
            ClickModelKind::Binary | ClickModelKind::Heuristic => {
                ResamplingStrategy::BucketBalancing
            }
            ClickModelKind::Ctr => ResamplingStrategy::ContinuousReweighting,
        }
    }
}

impl Default for ClickModelKind {
    fn default() -> Self {
        ClickModelKind::Binary
    }
}

impl FromStr for ClickModelKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "binary" => Ok(ClickModelKind::Binary),
            "ctr" => Ok(ClickModelKind::Ctr),
            "heuristic" => Ok(ClickModelKind::Heuristic),
            _ => Err(Error::InvalidModelKind(name.to_string())),
        }
    }
}

impl TryFrom<String> for ClickModelKind {
    type Error = Error;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<ClickModelKind> for String {
    fn from(kind: ClickModelKind) -> Self {
        kind.to_string()
    }
}

/// How the heuristic click model buckets a click-through rate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "rule")]
pub enum HeuristicRule {
    /// Ignores the click-through rate and draws one of the buckets uniformly.
    Uniform,
    /// Maps rates of at least `high` to `1`, of at least `medium` to `0.5`
    /// and everything else to `0`.
    Thresholds { medium: f32, high: f32 },
}

impl HeuristicRule {
    /// The grades a heuristic click model can assign.
    pub const BUCKETS: [f32; 3] = [0., 0.5, 1.];
}

impl Default for HeuristicRule {
    fn default() -> Self {
        HeuristicRule::Uniform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        for kind in ClickModelKind::ALL {
            assert_eq!(kind.to_string().parse::<ClickModelKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_unknown_kind() {
        let error = "foo".parse::<ClickModelKind>().unwrap_err();
        assert_eq!(error, Error::InvalidModelKind("foo".into()));
        assert_eq!(
            error.to_string(),
            "Unknown click model `foo`, expected one of `binary`, `ctr` or `heuristic`."
        );
        assert!("Binary".parse::<ClickModelKind>().is_err());
    }

    #[test]
    fn test_kind_carries_resampling_strategy() {
        assert_eq!(
            ClickModelKind::Binary.resampling_strategy(),
            ResamplingStrategy::BucketBalancing
        );
        assert_eq!(
            ClickModelKind::Heuristic.resampling_strategy(),
            ResamplingStrategy::BucketBalancing
        );
        assert_eq!(
            ClickModelKind::Ctr.resampling_strategy(),
            ResamplingStrategy::ContinuousReweighting
        );
    }

    #[test]
    fn test_kind_serde() {
        assert_eq!(
            serde_json::to_string(&ClickModelKind::Ctr).unwrap(),
            r#""ctr""#
        );
        let error = serde_json::from_str::<ClickModelKind>(r#""foo""#).unwrap_err();
        assert!(error.to_string().starts_with("Unknown click model `foo`"));
    }

    #[test]
    fn test_heuristic_rule_serde() {
        let rule: HeuristicRule =
            serde_json::from_str(r#"{"rule": "thresholds", "medium": 0.1, "high": 0.4}"#).unwrap();
        assert_eq!(
            rule,
            HeuristicRule::Thresholds {
                medium: 0.1,
                high: 0.4
            }
        );
        let rule: HeuristicRule = serde_json::from_str(r#"{"rule": "uniform"}"#).unwrap();
        assert_eq!(rule, HeuristicRule::Uniform);
    }
}
