//! The built-in demo dataset: a small mixed fleet with enough variety
//! to exercise every status band and classification branch.

use fleetdeck_common::{
    ArchitecturePool, FleetSnapshot, Frequency, Job, JobStatus, JobTemplate, MetricStatus, Node,
    NodeStatus, SecurityMetric, SecurityPolicy, Severity, Vulnerability,
};

pub fn sample_snapshot() -> FleetSnapshot {
    FleetSnapshot {
        nodes: sample_nodes(),
        jobs: sample_jobs(),
        pools: sample_pools(),
        templates: sample_templates(),
        metrics: sample_metrics(),
        vulnerabilities: sample_vulnerabilities(),
        policies: sample_policies(),
    }
}

fn sample_nodes() -> Vec<Node> {
    vec![
        Node {
            id: "node-001".to_string(),
            name: "Ubuntu Build Server".to_string(),
            status: NodeStatus::Online,
            architecture: "linux-x64".to_string(),
            jobs: 3,
            max_jobs: 8,
            cpu: 45,
            memory: 62,
            last_seen: "2 minutes ago".to_string(),
        },
        Node {
            id: "node-002".to_string(),
            name: "Windows Agent".to_string(),
            status: NodeStatus::Busy,
            architecture: "windows-x64".to_string(),
            jobs: 5,
            max_jobs: 5,
            cpu: 89,
            memory: 78,
            last_seen: "1 minute ago".to_string(),
        },
        Node {
            id: "node-003".to_string(),
            name: "macOS Builder".to_string(),
            status: NodeStatus::Offline,
            architecture: "darwin-arm64".to_string(),
            jobs: 0,
            max_jobs: 4,
            cpu: 0,
            memory: 0,
            last_seen: "1 hour ago".to_string(),
        },
    ]
}

fn sample_jobs() -> Vec<Job> {
    vec![
        Job {
            id: "job-1".to_string(),
            name: "Frontend Build".to_string(),
            node: "Ubuntu Build Server".to_string(),
            status: JobStatus::Running,
            progress: 65,
            duration: "3m 42s".to_string(),
            architecture: "linux-x64".to_string(),
        },
        Job {
            id: "job-2".to_string(),
            name: "Backend Tests".to_string(),
            node: "Windows Agent".to_string(),
            status: JobStatus::Running,
            progress: 89,
            duration: "8m 15s".to_string(),
            architecture: "windows-x64".to_string(),
        },
        Job {
            id: "job-3".to_string(),
            name: "Docker Build".to_string(),
            node: "Ubuntu Build Server".to_string(),
            status: JobStatus::Queued,
            progress: 0,
            duration: "Waiting...".to_string(),
            architecture: "linux-x64".to_string(),
        },
        Job {
            id: "job-4".to_string(),
            name: "iOS Build".to_string(),
            node: "macOS Builder".to_string(),
            status: JobStatus::Failed,
            progress: 100,
            duration: "Failed at 2m 30s".to_string(),
            architecture: "darwin-arm64".to_string(),
        },
    ]
}

fn sample_pools() -> Vec<ArchitecturePool> {
    vec![
        ArchitecturePool {
            name: "Linux x64".to_string(),
            identifier: "linux-x64".to_string(),
            nodes: 2,
            active_jobs: 5,
            total_capacity: 16,
            usage: 65,
            popular: true,
        },
        ArchitecturePool {
            name: "Windows x64".to_string(),
            identifier: "windows-x64".to_string(),
            nodes: 1,
            active_jobs: 3,
            total_capacity: 8,
            usage: 89,
            popular: false,
        },
        ArchitecturePool {
            name: "macOS ARM64".to_string(),
            identifier: "darwin-arm64".to_string(),
            nodes: 1,
            active_jobs: 0,
            total_capacity: 4,
            usage: 0,
            popular: false,
        },
        ArchitecturePool {
            name: "Linux ARM64".to_string(),
            identifier: "linux-arm64".to_string(),
            nodes: 0,
            active_jobs: 0,
            total_capacity: 0,
            usage: 0,
            popular: false,
        },
    ]
}

fn sample_templates() -> Vec<JobTemplate> {
    vec![
        JobTemplate {
            name: "Frontend Build".to_string(),
            architectures: vec![
                "linux-x64".to_string(),
                "windows-x64".to_string(),
                "darwin-arm64".to_string(),
            ],
            frequency: Frequency::High,
            avg_duration: "4m 30s".to_string(),
        },
        JobTemplate {
            name: "Backend API Tests".to_string(),
            architectures: vec!["linux-x64".to_string(), "windows-x64".to_string()],
            frequency: Frequency::Medium,
            avg_duration: "8m 15s".to_string(),
        },
        JobTemplate {
            name: "Mobile App Build".to_string(),
            architectures: vec!["darwin-arm64".to_string()],
            frequency: Frequency::Low,
            avg_duration: "12m 45s".to_string(),
        },
        JobTemplate {
            name: "Docker Images".to_string(),
            architectures: vec!["linux-x64".to_string(), "linux-arm64".to_string()],
            frequency: Frequency::Medium,
            avg_duration: "6m 20s".to_string(),
        },
    ]
}

fn sample_metrics() -> Vec<SecurityMetric> {
    vec![
        SecurityMetric {
            title: "Node Isolation".to_string(),
            status: MetricStatus::Active,
            enabled: true,
            description: "All nodes run in isolated environments".to_string(),
        },
        SecurityMetric {
            title: "TLS Encryption".to_string(),
            status: MetricStatus::Active,
            enabled: true,
            description: "All communication encrypted with TLS 1.3".to_string(),
        },
        SecurityMetric {
            title: "Certificate Auth".to_string(),
            status: MetricStatus::Active,
            enabled: true,
            description: "X.509 certificates for node authentication".to_string(),
        },
        SecurityMetric {
            title: "Network Segmentation".to_string(),
            status: MetricStatus::Warning,
            enabled: false,
            description: "Some nodes on same subnet".to_string(),
        },
    ]
}

fn sample_vulnerabilities() -> Vec<Vulnerability> {
    vec![
        Vulnerability {
            id: "vuln-1".to_string(),
            severity: Severity::Medium,
            title: "Outdated Agent Version".to_string(),
            node: "Windows Agent".to_string(),
            description: "Agent version 2.401 has known vulnerabilities".to_string(),
            recommendation: "Update to version 2.414 or later".to_string(),
        },
        Vulnerability {
            id: "vuln-2".to_string(),
            severity: Severity::Low,
            title: "Weak Password Policy".to_string(),
            node: "All Nodes".to_string(),
            description: "Password complexity requirements not enforced".to_string(),
            recommendation: "Enable strong password policy".to_string(),
        },
    ]
}

fn sample_policies() -> Vec<SecurityPolicy> {
    vec![
        SecurityPolicy {
            title: "Require Agent Authentication".to_string(),
            description: "All agents must authenticate before connecting".to_string(),
            enabled: true,
        },
        SecurityPolicy {
            title: "Audit Logging".to_string(),
            description: "Log all security-related events".to_string(),
            enabled: true,
        },
        SecurityPolicy {
            title: "Network Access Control".to_string(),
            description: "Restrict agent network access to the controller only".to_string(),
            enabled: false,
        },
        SecurityPolicy {
            title: "Regular Security Scans".to_string(),
            description: "Automatically scan nodes for vulnerabilities".to_string(),
            enabled: true,
        },
    ]
}
