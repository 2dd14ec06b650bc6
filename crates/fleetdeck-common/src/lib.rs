pub mod architecture;
pub mod job;
pub mod node;
pub mod security;
pub mod snapshot;
pub mod tag;

pub use architecture::{ArchitecturePool, Frequency, JobTemplate};
pub use job::{Job, JobStatus};
pub use node::{Node, NodeStatus};
pub use security::{MetricStatus, SecurityMetric, SecurityPolicy, Severity, Vulnerability};
pub use snapshot::FleetSnapshot;
pub use tag::{Icon, Tag};
