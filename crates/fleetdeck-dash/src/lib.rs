pub mod aggregate;
pub mod classify;
pub mod page;
pub mod shell;
pub mod view;

pub use aggregate::{JobStatusCounts, NodeStatusCounts, Overview, SecuritySummary};
pub use classify::{job_status_tag, severity_tag, status_tag, usage_tag};
pub use page::{ArchitecturePage, OverviewPage, SecurityPage};
pub use shell::{Shell, ViewId};
