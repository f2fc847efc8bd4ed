//! Submission hand-off
//!
//! Once a selection is final, the session hands a [`Submission`] to a
//! [`SubmissionSink`]. The sink owns everything after that (an on-chain entry,
//! a network call, a file); the session only learns success or failure.

use crate::catalog::ItemId;
use crate::selection::Selection;
use crate::{Amount, DraftkitError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::io::AsyncWriteExt;

/// A finalized contest entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub contest_id: u64,
    pub items: Vec<ItemId>,
    pub spent: Amount,
    /// Unix timestamp (seconds) of the hand-off.
    pub submitted_at: i64,
}

impl Submission {
    /// Stamp a finalized selection for `contest_id` with the current time.
    pub fn new(contest_id: u64, selection: Selection) -> Self {
        Self {
            contest_id,
            items: selection.items,
            spent: selection.spent,
            submitted_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Receiver of finalized entries.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&self, submission: &Submission) -> Result<()>;
}

/// Keeps submissions in memory; clones share the same list.
#[derive(Clone, Debug, Default)]
pub struct MemorySubmissionSink {
    submissions: Arc<Mutex<Vec<Submission>>>,
}

impl MemorySubmissionSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything submitted so far, oldest first.
    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl SubmissionSink for MemorySubmissionSink {
    async fn submit(&self, submission: &Submission) -> Result<()> {
        self.submissions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(submission.clone());
        Ok(())
    }
}

/// Writes each submission as a pretty-printed JSON file.
#[derive(Clone, Debug)]
pub struct FileSubmissionSink {
    base_path: PathBuf,
}

impl FileSubmissionSink {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Path for the `attempt`-th candidate name of a submission.
    ///
    /// Entries of one contest within the same second get a numeric suffix.
    fn submission_path(&self, submission: &Submission, attempt: u32) -> PathBuf {
        let stem = format!(
            "contest-{}-{}",
            submission.contest_id, submission.submitted_at
        );
        let name = if attempt == 0 {
            format!("{}.json", stem)
        } else {
            format!("{}-{}.json", stem, attempt)
        };
        self.base_path.join(name)
    }

    /// Read back every submission stored for `contest_id`.
    pub async fn list(&self, contest_id: u64) -> Result<Vec<Submission>> {
        let prefix = format!("contest-{}-", contest_id);
        let mut submissions = Vec::new();

        let mut entries = match tokio::fs::read_dir(&self.base_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(submissions),
            Err(e) => return Err(e.into()),
        };

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with(&prefix) && name.ends_with(".json") {
                let json = tokio::fs::read_to_string(entry.path()).await?;
                submissions.push(serde_json::from_str(&json)?);
            }
        }

        submissions.sort_by_key(|s: &Submission| s.submitted_at);
        Ok(submissions)
    }
}

#[async_trait]
impl SubmissionSink for FileSubmissionSink {
    async fn submit(&self, submission: &Submission) -> Result<()> {
        tokio::fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| DraftkitError::Submission(e.to_string()))?;

        let json = serde_json::to_string_pretty(submission)?;
        let mut attempt = 0;
        let (path, mut file) = loop {
            let path = self.submission_path(submission, attempt);
            match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => break (path, file),
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => {
                    return Err(DraftkitError::Submission(format!(
                        "{}: {}",
                        path.display(),
                        e
                    )))
                }
            }
        };

        let write_error = |e: std::io::Error| {
            DraftkitError::Submission(format!("{}: {}", path.display(), e))
        };
        file.write_all(json.as_bytes()).await.map_err(write_error)?;
        file.flush().await.map_err(write_error)?;

        tracing::info!(path = %path.display(), "submission written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(contest_id: u64, submitted_at: i64) -> Submission {
        Submission {
            contest_id,
            items: vec!["1".into(), "3".into()],
            spent: Amount::from_units(6700),
            submitted_at,
        }
    }

    #[tokio::test]
    async fn test_memory_sink_records_submissions() {
        let sink = MemorySubmissionSink::new();
        let shared = sink.clone();
        sink.submit(&submission(1, 100)).await.unwrap();

        assert_eq!(shared.submissions(), vec![submission(1, 100)]);
    }

    #[tokio::test]
    async fn test_file_sink_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSubmissionSink::new(dir.path().join("submissions"));

        assert!(sink.list(7).await.unwrap().is_empty());

        sink.submit(&submission(7, 200)).await.unwrap();
        sink.submit(&submission(7, 100)).await.unwrap();
        sink.submit(&submission(8, 150)).await.unwrap();

        let stored = sink.list(7).await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].submitted_at, 100);
        assert_eq!(stored[1].spent, Amount::from_units(6700));
    }

    #[tokio::test]
    async fn test_file_sink_keeps_entries_from_the_same_second() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSubmissionSink::new(dir.path());

        sink.submit(&submission(1, 500)).await.unwrap();
        sink.submit(&submission(1, 500)).await.unwrap();
        sink.submit(&submission(1, 500)).await.unwrap();

        assert_eq!(sink.list(1).await.unwrap().len(), 3);
    }
}
