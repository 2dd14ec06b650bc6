//! Page-level assemblies: one struct per navigable view, built from a
//! snapshot by composing the entity views and aggregates.

use serde::Serialize;

use fleetdeck_common::FleetSnapshot;

use crate::aggregate::{job_status_counts, overview, JobStatusCounts, Overview};
use crate::view::{
    job_view, metric_view, node_view, policy_view, pool_view, template_view, vulnerability_view,
    JobView, MetricView, NodeView, PolicyView, PoolView, TemplateView, VulnerabilityView,
};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OverviewPage {
    pub overview: Overview,
    pub nodes: Vec<NodeView>,
    pub jobs: Vec<JobView>,
    pub job_counts: JobStatusCounts,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SecurityPage {
    pub metrics: Vec<MetricView>,
    pub vulnerabilities: Vec<VulnerabilityView>,
    pub policies: Vec<PolicyView>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArchitecturePage {
    pub pools: Vec<PoolView>,
    pub templates: Vec<TemplateView>,
}

pub fn overview_page(snapshot: &FleetSnapshot) -> OverviewPage {
    OverviewPage {
        overview: overview(snapshot),
        nodes: snapshot.nodes.iter().map(node_view).collect(),
        jobs: snapshot.jobs.iter().map(job_view).collect(),
        job_counts: job_status_counts(&snapshot.jobs),
    }
}

pub fn security_page(snapshot: &FleetSnapshot) -> SecurityPage {
    SecurityPage {
        metrics: snapshot.metrics.iter().map(metric_view).collect(),
        vulnerabilities: snapshot
            .vulnerabilities
            .iter()
            .map(vulnerability_view)
            .collect(),
        policies: snapshot.policies.iter().map(policy_view).collect(),
    }
}

pub fn architecture_page(snapshot: &FleetSnapshot) -> ArchitecturePage {
    ArchitecturePage {
        pools: snapshot.pools.iter().map(pool_view).collect(),
        templates: snapshot
            .templates
            .iter()
            .map(|t| template_view(t, &snapshot.pools))
            .collect(),
    }
}
