use serde::{Deserialize, Serialize};

use crate::{
    ArchitecturePool, Job, JobTemplate, Node, SecurityMetric, SecurityPolicy, Vulnerability,
};

/// Everything the dashboard renders, as handed over by a data provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FleetSnapshot {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub pools: Vec<ArchitecturePool>,
    #[serde(default)]
    pub templates: Vec<JobTemplate>,
    #[serde(default)]
    pub metrics: Vec<SecurityMetric>,
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
    #[serde(default)]
    pub policies: Vec<SecurityPolicy>,
}
