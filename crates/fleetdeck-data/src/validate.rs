//! Supply-boundary checks. Incoming snapshots either pass strict
//! validation or get coerced into range, with every coercion logged.

use thiserror::Error;
use tracing::warn;

use fleetdeck_common::FleetSnapshot;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("node {node}: {jobs} jobs exceeds capacity {max_jobs}")]
    NodeOverCapacity {
        node: String,
        jobs: u32,
        max_jobs: u32,
    },

    #[error("pool {pool}: {active_jobs} active jobs exceeds capacity {total_capacity}")]
    PoolOverCapacity {
        pool: String,
        active_jobs: u32,
        total_capacity: u32,
    },

    #[error("{entity} {name}: {field} is {value}%, above 100")]
    PercentOutOfRange {
        entity: &'static str,
        name: String,
        field: &'static str,
        value: u8,
    },

    #[error("template {name}: architecture list is empty")]
    EmptyTemplate { name: String },
}

/// Strict check of the snapshot invariants. Returns the first
/// violation found.
pub fn validate(snapshot: &FleetSnapshot) -> Result<(), ValidationError> {
    for node in &snapshot.nodes {
        if node.jobs > node.max_jobs {
            return Err(ValidationError::NodeOverCapacity {
                node: node.name.clone(),
                jobs: node.jobs,
                max_jobs: node.max_jobs,
            });
        }
        check_percent("node", &node.name, "cpu", node.cpu)?;
        check_percent("node", &node.name, "memory", node.memory)?;
    }

    for job in &snapshot.jobs {
        check_percent("job", &job.name, "progress", job.progress)?;
    }

    for pool in &snapshot.pools {
        if pool.active_jobs > pool.total_capacity {
            return Err(ValidationError::PoolOverCapacity {
                pool: pool.name.clone(),
                active_jobs: pool.active_jobs,
                total_capacity: pool.total_capacity,
            });
        }
        check_percent("pool", &pool.name, "usage", pool.usage)?;
    }

    for template in &snapshot.templates {
        if template.architectures.is_empty() {
            return Err(ValidationError::EmptyTemplate {
                name: template.name.clone(),
            });
        }
    }

    Ok(())
}

fn check_percent(
    entity: &'static str,
    name: &str,
    field: &'static str,
    value: u8,
) -> Result<(), ValidationError> {
    if value > 100 {
        return Err(ValidationError::PercentOutOfRange {
            entity,
            name: name.to_string(),
            field,
            value,
        });
    }
    Ok(())
}

/// Coerce a snapshot into range: clamp counts to their capacities and
/// percents to 100, drop templates with no architectures. Each
/// coercion is logged. Supplied pool usage that disagrees with the
/// derived value is only reported; views render the derived value.
pub fn sanitize(mut snapshot: FleetSnapshot) -> FleetSnapshot {
    for node in &mut snapshot.nodes {
        if node.jobs > node.max_jobs {
            warn!(
                node = %node.name,
                jobs = node.jobs,
                max_jobs = node.max_jobs,
                "node over capacity, clamping job count"
            );
            node.jobs = node.max_jobs;
        }
        node.cpu = clamp_percent(&node.name, "cpu", node.cpu);
        node.memory = clamp_percent(&node.name, "memory", node.memory);
    }

    for job in &mut snapshot.jobs {
        job.progress = clamp_percent(&job.name, "progress", job.progress);
    }

    for pool in &mut snapshot.pools {
        if pool.active_jobs > pool.total_capacity {
            warn!(
                pool = %pool.name,
                active_jobs = pool.active_jobs,
                total_capacity = pool.total_capacity,
                "pool over capacity, clamping active jobs"
            );
            pool.active_jobs = pool.total_capacity;
        }
        pool.usage = clamp_percent(&pool.name, "usage", pool.usage);
        let derived = pool.derived_usage();
        if pool.usage != derived {
            warn!(
                pool = %pool.name,
                supplied = pool.usage,
                derived,
                "supplied usage disagrees with active/capacity ratio"
            );
        }
    }

    snapshot.templates.retain(|t| {
        if t.architectures.is_empty() {
            warn!(template = %t.name, "dropping template with empty architecture list");
            false
        } else {
            true
        }
    });

    snapshot
}

fn clamp_percent(name: &str, field: &str, value: u8) -> u8 {
    if value > 100 {
        warn!(entity = %name, field, value, "percent above 100, clamping");
        100
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetdeck_common::{ArchitecturePool, Frequency, JobTemplate, Node, NodeStatus};

    fn make_node(jobs: u32, max_jobs: u32) -> Node {
        Node {
            id: "node-001".to_string(),
            name: "Ubuntu Build Server".to_string(),
            status: NodeStatus::Online,
            architecture: "linux-x64".to_string(),
            jobs,
            max_jobs,
            cpu: 45,
            memory: 62,
            last_seen: "2 minutes ago".to_string(),
        }
    }

    fn make_pool(active_jobs: u32, total_capacity: u32, usage: u8) -> ArchitecturePool {
        ArchitecturePool {
            name: "Linux x64".to_string(),
            identifier: "linux-x64".to_string(),
            nodes: 2,
            active_jobs,
            total_capacity,
            usage,
            popular: false,
        }
    }

    #[test]
    fn test_validate_accepts_consistent_snapshot() {
        let snapshot = FleetSnapshot {
            nodes: vec![make_node(3, 8)],
            pools: vec![make_pool(5, 16, 31)],
            ..FleetSnapshot::default()
        };
        assert_eq!(validate(&snapshot), Ok(()));
    }

    #[test]
    fn test_validate_rejects_node_over_capacity() {
        let snapshot = FleetSnapshot {
            nodes: vec![make_node(9, 8)],
            ..FleetSnapshot::default()
        };
        assert_eq!(
            validate(&snapshot),
            Err(ValidationError::NodeOverCapacity {
                node: "Ubuntu Build Server".to_string(),
                jobs: 9,
                max_jobs: 8,
            })
        );
    }

    #[test]
    fn test_validate_rejects_pool_over_capacity() {
        let snapshot = FleetSnapshot {
            pools: vec![make_pool(10, 8, 50)],
            ..FleetSnapshot::default()
        };
        assert!(matches!(
            validate(&snapshot),
            Err(ValidationError::PoolOverCapacity { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_percent_above_100() {
        let mut node = make_node(3, 8);
        node.cpu = 120;
        let snapshot = FleetSnapshot {
            nodes: vec![node],
            ..FleetSnapshot::default()
        };
        assert!(matches!(
            validate(&snapshot),
            Err(ValidationError::PercentOutOfRange { field: "cpu", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_template() {
        let snapshot = FleetSnapshot {
            templates: vec![JobTemplate {
                name: "Broken".to_string(),
                architectures: vec![],
                frequency: Frequency::Low,
                avg_duration: "1m".to_string(),
            }],
            ..FleetSnapshot::default()
        };
        assert_eq!(
            validate(&snapshot),
            Err(ValidationError::EmptyTemplate {
                name: "Broken".to_string(),
            })
        );
    }

    #[test]
    fn test_sanitize_clamps_out_of_range_values() {
        let mut node = make_node(9, 8);
        node.memory = 150;
        let snapshot = FleetSnapshot {
            nodes: vec![node],
            pools: vec![make_pool(10, 8, 120)],
            templates: vec![JobTemplate {
                name: "Broken".to_string(),
                architectures: vec![],
                frequency: Frequency::Low,
                avg_duration: "1m".to_string(),
            }],
            ..FleetSnapshot::default()
        };

        let clean = sanitize(snapshot);
        assert_eq!(clean.nodes[0].jobs, 8);
        assert_eq!(clean.nodes[0].memory, 100);
        assert_eq!(clean.pools[0].active_jobs, 8);
        assert_eq!(clean.pools[0].usage, 100);
        assert!(clean.templates.is_empty());
        assert_eq!(validate(&clean), Ok(()));
    }

    #[test]
    fn test_sanitize_keeps_consistent_snapshot_unchanged() {
        let snapshot = FleetSnapshot {
            nodes: vec![make_node(3, 8)],
            pools: vec![make_pool(5, 16, 31)],
            ..FleetSnapshot::default()
        };
        assert_eq!(sanitize(snapshot.clone()), snapshot);
    }
}
