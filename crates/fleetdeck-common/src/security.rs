use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MetricStatus {
    Active,
    Warning,
    #[serde(other)]
    Unknown,
}

impl MetricStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MetricStatus::Active => "active",
            MetricStatus::Warning => "warning",
            MetricStatus::Unknown => "unknown",
        }
    }
}

/// Vulnerability criticality level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    #[serde(other)]
    Unknown,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Unknown => "unknown",
        }
    }
}

/// One security posture indicator, e.g. "TLS Encryption".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SecurityMetric {
    pub title: String,
    pub status: MetricStatus,
    pub enabled: bool,
    pub description: String,
}

/// A known security finding against one node or the whole fleet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vulnerability {
    pub id: String,
    pub severity: Severity,
    pub title: String,

    /// Affected node display name, or "All Nodes".
    pub node: String,

    pub description: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SecurityPolicy {
    pub title: String,
    pub description: String,
    pub enabled: bool,
}
