//! Repository trait definitions for truck lookups.
//!
//! - [`error`]: Error types for repository operations
//! - [`truck`]: Read operations the map and cart flows need

pub mod error;
pub mod truck;

pub use error::{RepositoryError, RepositoryResult};
pub use truck::TruckRepository;
