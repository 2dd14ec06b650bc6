pub mod provider;
pub mod sample;
pub mod validate;

pub use provider::{ProviderError, SnapshotProvider, StaticProvider};
pub use sample::sample_snapshot;
pub use validate::{sanitize, validate, ValidationError};
