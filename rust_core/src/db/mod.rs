//! Document-store seam.
//!
//! The production store is remote (get-by-id, batch get, live queries) and
//! lives outside this crate. Services depend only on the
//! [`repository::TruckRepository`] trait; [`repositories::LocalRepository`]
//! is the in-memory implementation used by tests and local development.

pub mod models;
pub mod repositories;
pub mod repository;

pub use models::{Truck, TruckId, TruckLocation};
pub use repositories::LocalRepository;
pub use repository::{RepositoryError, RepositoryResult, TruckRepository};
