use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Running,
    Queued,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Running => "running",
            JobStatus::Queued => "queued",
            JobStatus::Completed => "completed",
            JobStatus::Failed => "failed",
            JobStatus::Unknown => "unknown",
        }
    }
}

/// A unit of build work assigned to a node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Job {
    pub id: String,
    pub name: String,

    /// Display name of the node the job is assigned to.
    pub node: String,

    pub status: JobStatus,

    /// Progress percent, 0-100. A failed job keeps the progress it
    /// reached at the point of failure; 100 with status=failed does
    /// not mean success.
    pub progress: u8,

    /// Pre-formatted display string, e.g. "3m 42s" or "Waiting...".
    pub duration: String,

    pub architecture: String,
}
