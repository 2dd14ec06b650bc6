use serde::{Deserialize, Serialize};

/// How often jobs from a template are scheduled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Low,
    Medium,
    High,
}

impl Frequency {
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Low => "Low",
            Frequency::Medium => "Medium",
            Frequency::High => "High",
        }
    }
}

/// The set of nodes sharing a platform identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArchitecturePool {
    /// Human-readable name, e.g. "Linux x64".
    pub name: String,

    /// Platform identifier, e.g. "linux-x64".
    pub identifier: String,

    pub nodes: u32,
    pub active_jobs: u32,
    pub total_capacity: u32,

    /// Usage percent as supplied by the data source. Rendered values
    /// come from [`ArchitecturePool::derived_usage`]; a supplied value
    /// that disagrees is reported at the supply boundary.
    pub usage: u8,

    #[serde(default)]
    pub popular: bool,
}

impl ArchitecturePool {
    /// Usage recomputed from active jobs over total capacity, rounded.
    /// Zero capacity yields 0.
    pub fn derived_usage(&self) -> u8 {
        if self.total_capacity == 0 {
            return 0;
        }
        ((self.active_jobs as f64 / self.total_capacity as f64) * 100.0).round() as u8
    }
}

/// A named job definition scoped to a subset of architectures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobTemplate {
    pub name: String,

    /// Compatible platform identifiers. Must be non-empty.
    pub architectures: Vec<String>,

    pub frequency: Frequency,

    /// Pre-formatted display string, e.g. "4m 30s".
    pub avg_duration: String,
}
