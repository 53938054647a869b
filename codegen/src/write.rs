//! Scoped, parallel artifact writes with per-file failure reporting.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use tracing::{error, info};

use crate::emit::write_file;

/// One file to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Destination path.
    pub path: PathBuf,
    /// Full file contents.
    pub contents: String,
}

impl Artifact {
    /// Creates an artifact.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// Outcome of a write batch.
#[derive(Debug, Default)]
pub struct WriteReport {
    /// Paths written successfully, in artifact order.
    pub written: Vec<PathBuf>,
    /// Paths that failed, with the reason.
    pub failed: Vec<(PathBuf, anyhow::Error)>,
}

impl WriteReport {
    /// Returns `true` if every artifact was written.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Writes every artifact on its own scoped thread and waits for all of them.
///
/// A failing write does not stop the others; every failure is logged and
/// recorded in the returned report.
#[must_use]
pub fn write_all(artifacts: &[Artifact]) -> WriteReport {
    let results: Vec<(PathBuf, Result<()>)> = std::thread::scope(|s| {
        let handles: Vec<_> = artifacts
            .iter()
            .map(|artifact| {
                (
                    artifact,
                    s.spawn(move || write_file(&artifact.path, &artifact.contents)),
                )
            })
            .collect();

        handles
            .into_iter()
            .map(|(artifact, handle)| {
                let result = handle
                    .join()
                    .unwrap_or_else(|_| Err(anyhow!("writer thread panicked")));
                (artifact.path.clone(), result)
            })
            .collect()
    });

    let mut report = WriteReport::default();
    for (path, result) in results {
        match result {
            Ok(()) => {
                info!(path = %path.display(), "saved");
                report.written.push(path);
            }
            Err(e) => {
                error!(path = %path.display(), error = %format!("{e:#}"), "write failed");
                report.failed.push((path, e));
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_every_artifact_and_creates_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let artifacts = vec![
            Artifact::new(dir.path().join("ontologies/a.n3"), "a"),
            Artifact::new(dir.path().join("src/globals/b.ts"), "b"),
        ];
        let report = write_all(&artifacts);
        assert!(report.is_success());
        assert_eq!(report.written.len(), 2);
        for artifact in &artifacts {
            let on_disk = std::fs::read_to_string(&artifact.path).expect("written");
            assert_eq!(on_disk, artifact.contents);
        }
    }

    #[test]
    fn one_failure_does_not_stop_the_batch() {
        let dir = tempfile::tempdir().expect("tempdir");
        // A regular file where a directory is needed.
        let blocker = dir.path().join("blocked");
        std::fs::write(&blocker, "").expect("blocker");
        let artifacts = vec![
            Artifact::new(blocker.join("x.json"), "{}"),
            Artifact::new(dir.path().join("ok.json"), "{}"),
        ];
        let report = write_all(&artifacts);
        assert!(!report.is_success());
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, blocker.join("x.json"));
        assert_eq!(report.written, vec![dir.path().join("ok.json")]);
    }
}
