use super::error::RepositoryResult;
use crate::db::models::{Truck, TruckId, TruckLocation};

/// Read access to truck records.
///
/// Implementations wrap a document store. Calls are synchronous; an async
/// store adapter blocks or pre-fetches on its side of the seam.
pub trait TruckRepository: Send + Sync {
    /// Fetch one truck by id.
    ///
    /// # Errors
    /// `RepositoryError::NotFound` when no truck has this id.
    fn get_truck(&self, id: &TruckId) -> RepositoryResult<Truck>;

    /// Batch fetch. Ids with no record are silently absent from the result;
    /// the order of the result is unspecified.
    fn get_trucks_by_ids(&self, ids: &[TruckId]) -> RepositoryResult<Vec<Truck>>;

    /// Lightweight id + coordinate pairs for every truck, for the
    /// proximity pre-filter.
    fn list_locations(&self) -> RepositoryResult<Vec<TruckLocation>>;
}
