//! Classification rules: pure, total mappings from raw statuses and
//! metrics to the closed presentation-tag sets. Unknown inputs always
//! resolve to a neutral fallback so the dashboard stays renderable.

use fleetdeck_common::{Icon, JobStatus, MetricStatus, NodeStatus, Severity, Tag};

pub fn status_tag(status: NodeStatus) -> Tag {
    match status {
        NodeStatus::Online => Tag::Success,
        NodeStatus::Busy => Tag::Warning,
        NodeStatus::Offline => Tag::Destructive,
        NodeStatus::Unknown => Tag::Secondary,
    }
}

pub fn status_icon(status: NodeStatus) -> Icon {
    match status {
        NodeStatus::Online => Icon::CheckCircle,
        NodeStatus::Busy => Icon::AlertTriangle,
        NodeStatus::Offline => Icon::Clock,
        NodeStatus::Unknown => Icon::Server,
    }
}

pub fn job_status_tag(status: JobStatus) -> Tag {
    match status {
        JobStatus::Running => Tag::Info,
        JobStatus::Queued => Tag::Warning,
        JobStatus::Completed => Tag::Success,
        JobStatus::Failed => Tag::Destructive,
        JobStatus::Unknown => Tag::Secondary,
    }
}

pub fn job_status_icon(status: JobStatus) -> Icon {
    match status {
        JobStatus::Running => Icon::Activity,
        JobStatus::Queued => Icon::Clock,
        JobStatus::Completed => Icon::CheckCircle,
        JobStatus::Failed => Icon::AlertCircle,
        JobStatus::Unknown => Icon::Activity,
    }
}

/// Band a utilization percent. Lower bounds are inclusive: 80 is
/// already critical, 60 is already a warning.
pub fn usage_tag(percent: u8) -> Tag {
    if percent >= 80 {
        Tag::Destructive
    } else if percent >= 60 {
        Tag::Warning
    } else {
        Tag::Success
    }
}

pub fn severity_tag(severity: Severity) -> Tag {
    match severity {
        Severity::Critical | Severity::High => Tag::Destructive,
        Severity::Medium => Tag::Warning,
        Severity::Low => Tag::Info,
        Severity::Unknown => Tag::Secondary,
    }
}

pub fn metric_status_tag(status: MetricStatus) -> Tag {
    match status {
        MetricStatus::Active => Tag::Success,
        MetricStatus::Warning => Tag::Warning,
        MetricStatus::Unknown => Tag::Secondary,
    }
}

pub fn metric_status_icon(status: MetricStatus) -> Icon {
    match status {
        MetricStatus::Active => Icon::CheckCircle,
        MetricStatus::Warning | MetricStatus::Unknown => Icon::AlertTriangle,
    }
}
