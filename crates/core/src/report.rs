//! Batch outcome types
//!
//! Every file in a run ends up as exactly one [`FileOutcome`]. The
//! [`BatchReport`] only summarizes them; a run never fails as a whole
//! because of a single file.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileStatus {
    /// The file was rewritten with generated content.
    Succeeded,
    /// The file was left untouched.
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    pub file: String,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn succeeded(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            status: FileStatus::Succeeded,
        }
    }

    pub fn failed(file: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            status: FileStatus::Failed {
                error: error.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, FileStatus::Succeeded)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub documenter: String,
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn new(documenter: impl Into<String>, outcomes: Vec<FileOutcome>) -> Self {
        Self {
            documenter: documenter.into(),
            outcomes,
        }
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            FileStatus::Failed { error } => Some((o.file.as_str(), error.as_str())),
            FileStatus::Succeeded => None,
        })
    }

    /// One line summary printed when the batch is over.
    pub fn summary(&self) -> String {
        format!(
            "Documentation generation completed: {} succeeded, {} failed",
            self.succeeded(),
            self.failed()
        )
    }
}
