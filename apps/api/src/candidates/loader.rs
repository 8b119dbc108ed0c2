use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::candidate::Candidate;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct CandidateFile {
    candidates: Vec<Candidate>,
}

/// Reads the data file and returns its `candidates` array in file order.
/// Every call re-reads the file; nothing is cached between requests.
pub async fn load_candidates(path: &Path) -> Result<Vec<Candidate>, LoadError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let candidates = parse_candidates(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded {} candidates from {}", candidates.len(), path.display());
    Ok(candidates)
}

fn parse_candidates(raw: &str) -> Result<Vec<Candidate>, serde_json::Error> {
    serde_json::from_str::<CandidateFile>(raw).map(|f| f.candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_keeps_file_order() {
        let file = write_temp(
            r#"{"candidates": [{"name": "Zed"}, {"name": "Amy"}, {"name": "Kim"}]}"#,
        );
        let loaded = load_candidates(file.path()).await.unwrap();
        let names: Vec<_> = loaded.iter().map(|c| c.text("name")).collect();
        assert_eq!(names, vec!["Zed", "Amy", "Kim"]);
    }

    #[tokio::test]
    async fn test_load_ignores_other_top_level_keys() {
        let file = write_temp(r#"{"version": 2, "candidates": []}"#);
        assert!(load_candidates(file.path()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_candidates(&dir.path().join("nope.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let file = write_temp(r#"{"candidates": [ {"name": "Amy"}, "#);
        let err = load_candidates(file.path()).await.unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_missing_candidates_key_fails() {
        assert!(parse_candidates(r#"{"people": []}"#).is_err());
    }

    #[test]
    fn test_non_object_record_fails() {
        assert!(parse_candidates(r#"{"candidates": [1, 2]}"#).is_err());
    }
}
