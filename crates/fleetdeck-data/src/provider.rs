use thiserror::Error;

use fleetdeck_common::FleetSnapshot;

use crate::sample::sample_snapshot;
use crate::validate::{sanitize, validate, ValidationError};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("snapshot rejected: {0}")]
    Invalid(#[from] ValidationError),
}

/// Supplies the current fleet picture to the view layer. Synchronous
/// by design: the dashboard renders whatever the provider hands over,
/// there is nothing to await.
pub trait SnapshotProvider {
    fn snapshot(&self) -> Result<FleetSnapshot, ProviderError>;
}

/// Provider over a fixed, in-memory snapshot.
///
/// In coercing mode (the default) out-of-range records are clamped
/// with a logged warning; in strict mode the snapshot is rejected
/// instead.
pub struct StaticProvider {
    data: FleetSnapshot,
    strict: bool,
}

impl StaticProvider {
    pub fn new(data: FleetSnapshot) -> Self {
        Self {
            data,
            strict: false,
        }
    }

    pub fn strict(data: FleetSnapshot) -> Self {
        Self { data, strict: true }
    }

    /// The built-in demo fleet.
    pub fn sample() -> Self {
        Self::new(sample_snapshot())
    }
}

impl SnapshotProvider for StaticProvider {
    fn snapshot(&self) -> Result<FleetSnapshot, ProviderError> {
        if self.strict {
            validate(&self.data)?;
            Ok(self.data.clone())
        } else {
            Ok(sanitize(self.data.clone()))
        }
    }
}
