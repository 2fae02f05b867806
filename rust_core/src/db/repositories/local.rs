//! In-memory local repository implementation.
//!
//! Stores truck records in a HashMap behind an `RwLock`, providing fast,
//! deterministic and isolated execution for tests and local development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;

use crate::db::models::{Truck, TruckId, TruckLocation};
use crate::db::repository::{RepositoryError, RepositoryResult, TruckRepository};

/// In-memory local repository.
///
/// # Example
/// ```
/// use truckmap_rust::db::{LocalRepository, Truck, TruckId, TruckRepository};
///
/// let repo = LocalRepository::new();
/// repo.insert_truck(Truck {
///     id: TruckId::new("t-1"),
///     name: "Waffle Wagon".to_string(),
///     cuisine: None,
///     location: None,
///     hours: None,
/// })
/// .unwrap();
///
/// assert_eq!(repo.get_truck(&TruckId::new("t-1")).unwrap().name, "Waffle Wagon");
/// ```
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    trucks: HashMap<TruckId, Truck>,

    // Connection health
    is_healthy: bool,

    // Number of batch reads served, for asserting bounded hydration
    batch_reads: usize,

    // Most ids a single batch read accepts, if capped
    batch_limit: Option<usize>,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            trucks: HashMap::new(),
            is_healthy: true,
            batch_reads: 0,
            batch_limit: None,
        }
    }
}

impl LocalData {
    fn ensure_healthy(&self) -> RepositoryResult<()> {
        if self.is_healthy {
            Ok(())
        } else {
            Err(RepositoryError::Unavailable(
                "Local repository marked unhealthy".to_string(),
            ))
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository from raw `(id, document)` pairs.
    pub fn from_documents<I>(documents: I) -> RepositoryResult<Self>
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let repo = Self::new();
        for (id, doc) in documents {
            repo.insert_truck(Truck::from_document(TruckId::new(id), &doc))?;
        }
        Ok(repo)
    }

    /// Add or replace a truck.
    pub fn insert_truck(&self, truck: Truck) -> RepositoryResult<()> {
        self.write()?.trucks.insert(truck.id.clone(), truck);
        Ok(())
    }

    /// Reject batch reads of more than `limit` ids, the way hosted document
    /// stores cap `in` queries.
    pub fn with_batch_limit(self, limit: usize) -> RepositoryResult<Self> {
        self.write()?.batch_limit = Some(limit);
        Ok(self)
    }

    /// Simulate a store outage: every read fails with `Unavailable`.
    pub fn set_healthy(&self, healthy: bool) -> RepositoryResult<()> {
        self.write()?.is_healthy = healthy;
        Ok(())
    }

    /// Number of `get_trucks_by_ids` calls served so far.
    pub fn batch_reads(&self) -> usize {
        self.data.read().map(|d| d.batch_reads).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.data.read().map(|d| d.trucks.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, LocalData>> {
        let data = self
            .data
            .read()
            .map_err(|e| RepositoryError::InternalError(format!("Lock poisoned: {}", e)))?;
        data.ensure_healthy()?;
        Ok(data)
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, LocalData>> {
        self.data
            .write()
            .map_err(|e| RepositoryError::InternalError(format!("Lock poisoned: {}", e)))
    }
}

impl TruckRepository for LocalRepository {
    fn get_truck(&self, id: &TruckId) -> RepositoryResult<Truck> {
        self.read()?
            .trucks
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))
    }

    fn get_trucks_by_ids(&self, ids: &[TruckId]) -> RepositoryResult<Vec<Truck>> {
        let mut data = self.write()?;
        data.ensure_healthy()?;
        if let Some(limit) = data.batch_limit {
            if ids.len() > limit {
                return Err(RepositoryError::Rejected(format!(
                    "batch of {} ids exceeds the limit of {}",
                    ids.len(),
                    limit
                )));
            }
        }

        let trucks = ids
            .iter()
            .filter_map(|id| data.trucks.get(id).cloned())
            .collect();
        data.batch_reads += 1;
        Ok(trucks)
    }

    fn list_locations(&self) -> RepositoryResult<Vec<TruckLocation>> {
        let data = self.read()?;
        let mut locations: Vec<TruckLocation> =
            data.trucks.values().map(Truck::to_location).collect();
        // HashMap iteration order is arbitrary; keep listings deterministic.
        locations.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(locations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_repo() -> LocalRepository {
        LocalRepository::from_documents(vec![
            ("b".to_string(), json!({"name": "Bravo", "lat": 1.0, "lng": 1.0})),
            ("a".to_string(), json!({"name": "Alpha", "lat": 0.0, "lng": 0.0})),
            ("c".to_string(), json!({"name": "Charlie"})),
        ])
        .unwrap()
    }

    #[test]
    fn test_get_truck() {
        let repo = sample_repo();
        assert_eq!(repo.get_truck(&TruckId::new("a")).unwrap().name, "Alpha");
        assert!(matches!(
            repo.get_truck(&TruckId::new("zzz")),
            Err(RepositoryError::NotFound(id)) if id.as_str() == "zzz"
        ));
    }

    #[test]
    fn test_batch_get_skips_unknown_ids() {
        let repo = sample_repo();
        let trucks = repo
            .get_trucks_by_ids(&[TruckId::new("b"), TruckId::new("missing")])
            .unwrap();
        assert_eq!(trucks.len(), 1);
        assert_eq!(trucks[0].name, "Bravo");
        assert_eq!(repo.batch_reads(), 1);
    }

    #[test]
    fn test_list_locations_sorted_by_id() {
        let repo = sample_repo();
        let ids: Vec<String> = repo
            .list_locations()
            .unwrap()
            .into_iter()
            .map(|l| l.id.0)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unhealthy_repository_fails_reads() {
        let repo = sample_repo();
        repo.set_healthy(false).unwrap();
        assert!(matches!(
            repo.list_locations(),
            Err(RepositoryError::Unavailable(_))
        ));
        assert!(repo.get_truck(&TruckId::new("a")).unwrap_err().is_transient());
        repo.set_healthy(true).unwrap();
        assert_eq!(repo.len(), 3);
        assert!(repo.list_locations().is_ok());
    }

    #[test]
    fn test_batch_limit_rejects_oversized_reads() {
        let repo = sample_repo().with_batch_limit(2).unwrap();
        let ids = [TruckId::new("a"), TruckId::new("b"), TruckId::new("c")];

        let err = repo.get_trucks_by_ids(&ids).unwrap_err();
        assert!(matches!(err, RepositoryError::Rejected(_)));
        assert!(!err.is_transient());
        assert_eq!(repo.batch_reads(), 0);

        assert_eq!(repo.get_trucks_by_ids(&ids[..2]).unwrap().len(), 2);
    }

    #[test]
    fn test_poisoned_lock_is_reported_by_every_operation() {
        let repo = sample_repo();
        let poisoner = repo.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.data.write().unwrap();
            panic!("poison the store lock");
        })
        .join();

        let internal = |result: RepositoryResult<()>| {
            matches!(result, Err(RepositoryError::InternalError(_)))
        };
        assert!(internal(repo.set_healthy(false)));
        assert!(internal(repo.get_trucks_by_ids(&[TruckId::new("a")]).map(|_| ())));
        assert!(internal(repo.get_truck(&TruckId::new("a")).map(|_| ())));
        assert!(internal(repo.clone().with_batch_limit(1).map(|_| ())));
        assert_eq!(repo.batch_reads(), 0);
    }
}
