//! Aggregate computations over the supplied entity collections:
//! status counts, fleet-wide summary numbers, and the template to
//! pool cross-reference.

use serde::Serialize;

use fleetdeck_common::{
    ArchitecturePool, FleetSnapshot, Job, JobStatus, Node, NodeStatus, Severity, Tag,
    Vulnerability,
};

use crate::classify::usage_tag;

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct NodeStatusCounts {
    pub online: u32,
    pub busy: u32,
    pub offline: u32,
    pub unknown: u32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct JobStatusCounts {
    pub running: u32,
    pub queued: u32,
    pub completed: u32,
    pub failed: u32,
    pub unknown: u32,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SecuritySummary {
    /// True when no critical or high finding is open.
    pub secure: bool,
    pub open_findings: u32,
}

/// Fleet-wide display numbers for the overview header cards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Overview {
    pub total_nodes: u32,
    pub node_counts: NodeStatusCounts,
    /// Sum of jobs currently held by nodes.
    pub active_jobs: u32,
    pub queued_jobs: u32,
    /// Mean CPU percent across reachable (non-offline) nodes.
    pub mean_cpu: u8,
    pub cpu_tag: Tag,
    pub security: SecuritySummary,
}

pub fn node_status_counts(nodes: &[Node]) -> NodeStatusCounts {
    let mut counts = NodeStatusCounts::default();
    for node in nodes {
        match node.status {
            NodeStatus::Online => counts.online += 1,
            NodeStatus::Busy => counts.busy += 1,
            NodeStatus::Offline => counts.offline += 1,
            NodeStatus::Unknown => counts.unknown += 1,
        }
    }
    counts
}

pub fn job_status_counts(jobs: &[Job]) -> JobStatusCounts {
    let mut counts = JobStatusCounts::default();
    for job in jobs {
        match job.status {
            JobStatus::Running => counts.running += 1,
            JobStatus::Queued => counts.queued += 1,
            JobStatus::Completed => counts.completed += 1,
            JobStatus::Failed => counts.failed += 1,
            JobStatus::Unknown => counts.unknown += 1,
        }
    }
    counts
}

pub fn active_jobs(nodes: &[Node]) -> u32 {
    nodes.iter().map(|n| n.jobs).sum()
}

/// Mean CPU percent across non-offline nodes, rounded. An offline node
/// reports 0% and would drag the average; it is excluded instead.
/// Empty input yields 0.
pub fn mean_cpu(nodes: &[Node]) -> u8 {
    let reachable: Vec<u8> = nodes
        .iter()
        .filter(|n| n.status != NodeStatus::Offline)
        .map(|n| n.cpu)
        .collect();
    if reachable.is_empty() {
        return 0;
    }
    let sum: u32 = reachable.iter().map(|&c| c as u32).sum();
    (sum as f64 / reachable.len() as f64).round() as u8
}

pub fn security_summary(vulnerabilities: &[Vulnerability]) -> SecuritySummary {
    let severe = vulnerabilities
        .iter()
        .filter(|v| matches!(v.severity, Severity::Critical | Severity::High))
        .count();
    SecuritySummary {
        secure: severe == 0,
        open_findings: vulnerabilities.len() as u32,
    }
}

pub fn overview(snapshot: &FleetSnapshot) -> Overview {
    let mean = mean_cpu(&snapshot.nodes);
    Overview {
        total_nodes: snapshot.nodes.len() as u32,
        node_counts: node_status_counts(&snapshot.nodes),
        active_jobs: active_jobs(&snapshot.nodes),
        queued_jobs: job_status_counts(&snapshot.jobs).queued,
        mean_cpu: mean,
        cpu_tag: usage_tag(mean),
        security: security_summary(&snapshot.vulnerabilities),
    }
}

/// Look up the pool carrying `identifier`. Absence is a missing
/// reference, not an error; callers render the raw id.
pub fn find_pool<'a>(pools: &'a [ArchitecturePool], identifier: &str) -> Option<&'a ArchitecturePool> {
    pools.iter().find(|p| p.identifier == identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_node(status: NodeStatus, jobs: u32, cpu: u8) -> Node {
        Node {
            id: "n".to_string(),
            name: "n".to_string(),
            status,
            architecture: "linux-x64".to_string(),
            jobs,
            max_jobs: 8,
            cpu,
            memory: 0,
            last_seen: "now".to_string(),
        }
    }

    fn make_job(status: JobStatus) -> Job {
        Job {
            id: "j".to_string(),
            name: "j".to_string(),
            node: "n".to_string(),
            status,
            progress: 0,
            duration: "1m".to_string(),
            architecture: "linux-x64".to_string(),
        }
    }

    fn make_vuln(severity: Severity) -> Vulnerability {
        Vulnerability {
            id: "v".to_string(),
            severity,
            title: "t".to_string(),
            node: "All Nodes".to_string(),
            description: "d".to_string(),
            recommendation: "r".to_string(),
        }
    }

    #[test]
    fn test_node_status_counts_one_of_each() {
        let nodes = vec![
            make_node(NodeStatus::Online, 0, 0),
            make_node(NodeStatus::Busy, 0, 0),
            make_node(NodeStatus::Offline, 0, 0),
        ];
        let counts = node_status_counts(&nodes);
        assert_eq!(counts.online, 1);
        assert_eq!(counts.busy, 1);
        assert_eq!(counts.offline, 1);
        assert_eq!(counts.unknown, 0);
    }

    #[test]
    fn test_node_status_counts_all_online() {
        let nodes = vec![
            make_node(NodeStatus::Online, 0, 0),
            make_node(NodeStatus::Online, 0, 0),
        ];
        let counts = node_status_counts(&nodes);
        assert_eq!(counts.online, 2);
        assert_eq!(counts.busy, 0);
        assert_eq!(counts.offline, 0);
    }

    #[test]
    fn test_node_status_counts_empty() {
        assert_eq!(node_status_counts(&[]), NodeStatusCounts::default());
    }

    #[test]
    fn test_job_status_counts() {
        let jobs = vec![
            make_job(JobStatus::Running),
            make_job(JobStatus::Running),
            make_job(JobStatus::Queued),
            make_job(JobStatus::Failed),
        ];
        let counts = job_status_counts(&jobs);
        assert_eq!(counts.running, 2);
        assert_eq!(counts.queued, 1);
        assert_eq!(counts.completed, 0);
        assert_eq!(counts.failed, 1);
    }

    #[test]
    fn test_active_jobs_sums_node_slots() {
        let nodes = vec![
            make_node(NodeStatus::Online, 3, 45),
            make_node(NodeStatus::Busy, 5, 89),
            make_node(NodeStatus::Offline, 0, 0),
        ];
        assert_eq!(active_jobs(&nodes), 8);
    }

    #[test]
    fn test_mean_cpu_excludes_offline() {
        let nodes = vec![
            make_node(NodeStatus::Online, 3, 45),
            make_node(NodeStatus::Busy, 5, 89),
            make_node(NodeStatus::Offline, 0, 0),
        ];
        assert_eq!(mean_cpu(&nodes), 67);
    }

    #[test]
    fn test_mean_cpu_no_reachable_nodes() {
        assert_eq!(mean_cpu(&[]), 0);
        assert_eq!(mean_cpu(&[make_node(NodeStatus::Offline, 0, 0)]), 0);
    }

    #[test]
    fn test_security_summary() {
        let low_only = vec![make_vuln(Severity::Medium), make_vuln(Severity::Low)];
        let summary = security_summary(&low_only);
        assert!(summary.secure);
        assert_eq!(summary.open_findings, 2);

        let with_high = vec![make_vuln(Severity::High)];
        assert!(!security_summary(&with_high).secure);

        let with_critical = vec![make_vuln(Severity::Low), make_vuln(Severity::Critical)];
        assert!(!security_summary(&with_critical).secure);
    }

    #[test]
    fn test_find_pool_missing_identifier() {
        let pools = vec![ArchitecturePool {
            name: "Linux x64".to_string(),
            identifier: "linux-x64".to_string(),
            nodes: 2,
            active_jobs: 5,
            total_capacity: 16,
            usage: 65,
            popular: true,
        }];
        assert!(find_pool(&pools, "linux-x64").is_some());
        assert!(find_pool(&pools, "riscv64").is_none());
    }
}
