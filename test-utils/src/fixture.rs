//! Paths to the data files of the workspace.

use std::{
    env::var_os,
    io::{Error, ErrorKind, Result},
    path::{Path, PathBuf},
};

/// Resolves the path to the requested data relative to the workspace directory.
fn resolve_path(path: &[impl AsRef<Path>]) -> Result<PathBuf> {
    let manifest = var_os("CARGO_MANIFEST_DIR")
        .ok_or_else(|| Error::new(ErrorKind::NotFound, "missing CARGO_MANIFEST_DIR"))?;
    let workspace = PathBuf::from(manifest)
        .parent()
        .ok_or_else(|| Error::new(ErrorKind::NotFound, "missing cargo workspace dir"))?
        .to_path_buf();

    path.iter()
        .fold(workspace, |path, component| path.join(component))
        .canonicalize()
}

/// Gets the path to the csv file with ten ungraded interactions.
///
/// Four of the records have clicks, the columns are `query`, `sku`, `clicks`
/// and `num_impressions`.
pub fn interactions() -> Result<PathBuf> {
    resolve_path(&["data", "interactions.csv"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactions() {
        assert!(interactions().unwrap().is_file());
    }
}
