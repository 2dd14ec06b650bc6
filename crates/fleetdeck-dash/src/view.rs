//! Entity views: per-record render descriptions. Each function takes
//! one entity and produces a plain serializable struct with the labels,
//! tags and progress values the embedding UI needs, nothing else.

use serde::Serialize;

use fleetdeck_common::{
    ArchitecturePool, Icon, Job, JobTemplate, Node, NodeStatus, SecurityMetric, SecurityPolicy,
    Tag, Vulnerability,
};

use crate::aggregate::find_pool;
use crate::classify::{
    job_status_icon, job_status_tag, metric_status_icon, metric_status_tag, severity_tag,
    status_icon, status_tag, usage_tag,
};

/// Status badge: text plus color and icon tags.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tag: Tag,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NodeAction {
    Connect,
    Pause,
    Resume,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NodeView {
    pub name: String,
    pub architecture: String,
    pub badge: Badge,

    /// "jobs/max_jobs", e.g. "3/8".
    pub jobs_label: String,
    /// Job slot usage as a percent, clamped to [0, 100].
    pub job_progress: f64,

    pub cpu: u8,
    pub cpu_tag: Tag,
    pub memory: u8,
    pub memory_tag: Tag,

    pub last_seen: String,
    pub actions: Vec<NodeAction>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JobView {
    pub name: String,
    pub badge: Badge,
    /// "{node} ({architecture})".
    pub node_label: String,
    pub progress: u8,
    pub duration: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PoolView {
    pub name: String,
    pub identifier: String,
    pub nodes: u32,
    /// "active_jobs/total_capacity".
    pub jobs_label: String,
    pub usage: u8,
    pub usage_tag: Tag,
    pub popular: bool,
}

/// One compatible architecture of a template. `pool_name` is absent
/// when no pool carries the identifier; the raw id still renders.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TemplateArch {
    pub id: String,
    pub pool_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TemplateView {
    pub name: String,
    pub frequency: String,
    pub avg_duration: String,
    pub architectures: Vec<TemplateArch>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MetricView {
    pub title: String,
    pub badge: Badge,
    pub enabled: bool,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VulnerabilityView {
    /// Upper-cased severity, e.g. "MEDIUM".
    pub severity_label: String,
    pub severity_tag: Tag,
    pub title: String,
    pub node: String,
    pub description: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PolicyView {
    pub title: String,
    pub description: String,
    pub enabled: bool,
}

/// Job slot usage as a percent. A node with no slots reports 0.
pub fn job_progress(jobs: u32, max_jobs: u32) -> f64 {
    if max_jobs == 0 {
        return 0.0;
    }
    (jobs as f64 / max_jobs as f64 * 100.0).clamp(0.0, 100.0)
}

fn node_actions(status: NodeStatus) -> Vec<NodeAction> {
    let toggle = if status == NodeStatus::Online {
        NodeAction::Pause
    } else {
        NodeAction::Resume
    };
    vec![NodeAction::Connect, toggle]
}

pub fn node_view(node: &Node) -> NodeView {
    NodeView {
        name: node.name.clone(),
        architecture: node.architecture.clone(),
        badge: Badge {
            label: node.status.label().to_string(),
            tag: status_tag(node.status),
            icon: status_icon(node.status),
        },
        jobs_label: format!("{}/{}", node.jobs, node.max_jobs),
        job_progress: job_progress(node.jobs, node.max_jobs),
        cpu: node.cpu,
        cpu_tag: usage_tag(node.cpu),
        memory: node.memory,
        memory_tag: usage_tag(node.memory),
        last_seen: node.last_seen.clone(),
        actions: node_actions(node.status),
    }
}

pub fn job_view(job: &Job) -> JobView {
    JobView {
        name: job.name.clone(),
        badge: Badge {
            label: job.status.label().to_string(),
            tag: job_status_tag(job.status),
            icon: job_status_icon(job.status),
        },
        node_label: format!("{} ({})", job.node, job.architecture),
        progress: job.progress.min(100),
        duration: job.duration.clone(),
    }
}

pub fn pool_view(pool: &ArchitecturePool) -> PoolView {
    let usage = pool.derived_usage();
    PoolView {
        name: pool.name.clone(),
        identifier: pool.identifier.clone(),
        nodes: pool.nodes,
        jobs_label: format!("{}/{}", pool.active_jobs, pool.total_capacity),
        usage,
        usage_tag: usage_tag(usage),
        popular: pool.popular,
    }
}

pub fn template_view(template: &JobTemplate, pools: &[ArchitecturePool]) -> TemplateView {
    TemplateView {
        name: template.name.clone(),
        frequency: template.frequency.label().to_string(),
        avg_duration: template.avg_duration.clone(),
        architectures: template
            .architectures
            .iter()
            .map(|id| TemplateArch {
                id: id.clone(),
                pool_name: find_pool(pools, id).map(|p| p.name.clone()),
            })
            .collect(),
    }
}

pub fn metric_view(metric: &SecurityMetric) -> MetricView {
    MetricView {
        title: metric.title.clone(),
        badge: Badge {
            label: metric.status.label().to_string(),
            tag: metric_status_tag(metric.status),
            icon: metric_status_icon(metric.status),
        },
        enabled: metric.enabled,
        description: metric.description.clone(),
    }
}

pub fn vulnerability_view(vuln: &Vulnerability) -> VulnerabilityView {
    VulnerabilityView {
        severity_label: vuln.severity.label().to_uppercase(),
        severity_tag: severity_tag(vuln.severity),
        title: vuln.title.clone(),
        node: vuln.node.clone(),
        description: vuln.description.clone(),
        recommendation: vuln.recommendation.clone(),
    }
}

pub fn policy_view(policy: &SecurityPolicy) -> PolicyView {
    PolicyView {
        title: policy.title.clone(),
        description: policy.description.clone(),
        enabled: policy.enabled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetdeck_common::{Frequency, JobStatus, MetricStatus, Severity};

    fn make_node(status: NodeStatus, jobs: u32, max_jobs: u32) -> Node {
        Node {
            id: "node-001".to_string(),
            name: "Ubuntu Build Server".to_string(),
            status,
            architecture: "linux-x64".to_string(),
            jobs,
            max_jobs,
            cpu: 45,
            memory: 62,
            last_seen: "2 minutes ago".to_string(),
        }
    }

    fn make_pool(identifier: &str, name: &str) -> ArchitecturePool {
        ArchitecturePool {
            name: name.to_string(),
            identifier: identifier.to_string(),
            nodes: 1,
            active_jobs: 2,
            total_capacity: 8,
            usage: 25,
            popular: false,
        }
    }

    #[test]
    fn test_job_progress_sample_nodes() {
        assert_eq!(job_progress(3, 8), 37.5);
        assert_eq!(job_progress(5, 5), 100.0);
        assert_eq!(job_progress(0, 4), 0.0);
    }

    #[test]
    fn test_job_progress_zero_capacity() {
        let ratio = job_progress(3, 0);
        assert_eq!(ratio, 0.0);
        assert!(!ratio.is_nan());
    }

    #[test]
    fn test_job_progress_clamped_over_capacity() {
        assert_eq!(job_progress(10, 5), 100.0);
    }

    #[test]
    fn test_node_view_badge_matches_status() {
        let view = node_view(&make_node(NodeStatus::Online, 3, 8));
        assert_eq!(view.badge.label, "online");
        assert_eq!(view.badge.tag, Tag::Success);
        assert_eq!(view.badge.icon, Icon::CheckCircle);
        assert_eq!(view.jobs_label, "3/8");
        assert_eq!(view.job_progress, 37.5);

        let view = node_view(&make_node(NodeStatus::Busy, 5, 5));
        assert_eq!(view.badge.tag, Tag::Warning);
        assert_eq!(view.job_progress, 100.0);

        let view = node_view(&make_node(NodeStatus::Offline, 0, 4));
        assert_eq!(view.badge.tag, Tag::Destructive);
        assert_eq!(view.job_progress, 0.0);
    }

    #[test]
    fn test_node_actions() {
        let online = node_view(&make_node(NodeStatus::Online, 0, 4));
        assert_eq!(online.actions, vec![NodeAction::Connect, NodeAction::Pause]);

        let offline = node_view(&make_node(NodeStatus::Offline, 0, 4));
        assert_eq!(offline.actions, vec![NodeAction::Connect, NodeAction::Resume]);

        let busy = node_view(&make_node(NodeStatus::Busy, 0, 4));
        assert_eq!(busy.actions, vec![NodeAction::Connect, NodeAction::Resume]);
    }

    #[test]
    fn test_job_view() {
        let job = Job {
            id: "job-4".to_string(),
            name: "iOS Build".to_string(),
            node: "macOS Builder".to_string(),
            status: JobStatus::Failed,
            progress: 100,
            duration: "Failed at 2m 30s".to_string(),
            architecture: "darwin-arm64".to_string(),
        };
        let view = job_view(&job);
        assert_eq!(view.badge.tag, Tag::Destructive);
        assert_eq!(view.node_label, "macOS Builder (darwin-arm64)");
        assert_eq!(view.progress, 100);
    }

    #[test]
    fn test_pool_view_renders_derived_usage() {
        // Supplied literal says 89, the numbers say 38.
        let pool = ArchitecturePool {
            usage: 89,
            active_jobs: 3,
            total_capacity: 8,
            ..make_pool("windows-x64", "Windows x64")
        };
        let view = pool_view(&pool);
        assert_eq!(view.usage, 38);
        assert_eq!(view.usage_tag, Tag::Success);
        assert_eq!(view.jobs_label, "3/8");
    }

    #[test]
    fn test_template_view_missing_pool_keeps_raw_id() {
        let template = JobTemplate {
            name: "Docker Images".to_string(),
            architectures: vec!["linux-x64".to_string(), "linux-arm64".to_string()],
            frequency: Frequency::Medium,
            avg_duration: "6m 20s".to_string(),
        };
        let pools = vec![make_pool("linux-x64", "Linux x64")];

        let view = template_view(&template, &pools);
        assert_eq!(view.architectures.len(), 2);
        assert_eq!(view.architectures[0].pool_name.as_deref(), Some("Linux x64"));
        assert_eq!(view.architectures[1].id, "linux-arm64");
        assert_eq!(view.architectures[1].pool_name, None);
    }

    #[test]
    fn test_metric_view() {
        let metric = SecurityMetric {
            title: "Network Segmentation".to_string(),
            status: MetricStatus::Warning,
            enabled: false,
            description: "Some nodes on same subnet".to_string(),
        };
        let view = metric_view(&metric);
        assert_eq!(view.badge.tag, Tag::Warning);
        assert_eq!(view.badge.icon, Icon::AlertTriangle);
        assert!(!view.enabled);
    }

    #[test]
    fn test_vulnerability_view_uppercases_severity() {
        let vuln = Vulnerability {
            id: "vuln-1".to_string(),
            severity: Severity::Medium,
            title: "Outdated Agent Version".to_string(),
            node: "Windows Agent".to_string(),
            description: "Agent version 2.401 has known vulnerabilities".to_string(),
            recommendation: "Update to version 2.414 or later".to_string(),
        };
        let view = vulnerability_view(&vuln);
        assert_eq!(view.severity_label, "MEDIUM");
        assert_eq!(view.severity_tag, Tag::Warning);
    }
}
