use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    Online,
    Busy,
    Offline,
    /// Catch-all for status values this build does not recognize.
    #[serde(other)]
    Unknown,
}

impl NodeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            NodeStatus::Online => "online",
            NodeStatus::Busy => "busy",
            NodeStatus::Offline => "offline",
            NodeStatus::Unknown => "unknown",
        }
    }
}

/// A build agent capable of executing jobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub status: NodeStatus,

    /// Platform identifier, e.g. "linux-x64".
    pub architecture: String,

    pub jobs: u32,
    pub max_jobs: u32,

    /// CPU utilization percent, 0-100.
    pub cpu: u8,
    /// Memory utilization percent, 0-100.
    pub memory: u8,

    /// Pre-formatted display string, e.g. "2 minutes ago".
    pub last_seen: String,
}
