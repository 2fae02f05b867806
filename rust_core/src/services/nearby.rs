//! Filter-then-hydrate lookup for the map.
//!
//! 1. Run the proximity pre-filter over lightweight `TruckLocation`s
//! 2. Batch-fetch full records only for the survivors
//! 3. Evaluate business hours per truck for the open/closed badge
//!
//! The number of store reads is bounded by
//! `ceil(min(candidates_in_range, max_results) / batch_size)`.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Timelike};
use serde::Serialize;

use crate::algorithms::business_hours::is_open_with_policy;
use crate::algorithms::proximity::filter_nearby;
use crate::config::CoreConfig;
use crate::core::domain::{MissingSchedulePolicy, OpenStatus, ProximityQuery};
use crate::db::models::{Truck, TruckId, TruckLocation};
use crate::db::repository::{RepositoryResult, TruckRepository};

/// A hydrated truck with its distance and current status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyTruck {
    pub truck: Truck,
    pub distance_km: f64,
    pub status: OpenStatus,
}

/// Knobs for [`find_nearby`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearbyOptions {
    /// Maximum ids per batch read.
    pub batch_size: usize,
    pub missing_schedule: MissingSchedulePolicy,
}

impl Default for NearbyOptions {
    fn default() -> Self {
        Self::from(&CoreConfig::default())
    }
}

impl From<&CoreConfig> for NearbyOptions {
    fn from(config: &CoreConfig) -> Self {
        Self {
            batch_size: config.proximity.hydrate_batch_size,
            missing_schedule: config.hours.missing_schedule,
        }
    }
}

/// List every truck location from `repo`, then filter and hydrate.
pub fn find_nearby<R, N>(
    repo: &R,
    query: &ProximityQuery,
    now: &N,
    options: &NearbyOptions,
) -> RepositoryResult<Vec<NearbyTruck>>
where
    R: TruckRepository + ?Sized,
    N: Datelike + Timelike,
{
    let candidates = repo.list_locations()?;
    find_nearby_among(repo, query, &candidates, now, options)
}

/// Filter `candidates` and hydrate the survivors from `repo`.
///
/// Results are in ascending distance order. A truck id listed more than once
/// appears once, at its nearest position; the result may then be shorter than
/// `max_results`. A survivor the store no longer returns is skipped.
pub fn find_nearby_among<R, N>(
    repo: &R,
    query: &ProximityQuery,
    candidates: &[TruckLocation],
    now: &N,
    options: &NearbyOptions,
) -> RepositoryResult<Vec<NearbyTruck>>
where
    R: TruckRepository + ?Sized,
    N: Datelike + Timelike,
{
    let mut seen = HashSet::new();
    let survivors: Vec<_> = filter_nearby(query, candidates)
        .into_iter()
        .filter(|scored| seen.insert(scored.entity.id.clone()))
        .collect();
    if survivors.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<TruckId> = survivors.iter().map(|s| s.entity.id.clone()).collect();
    let mut hydrated: HashMap<TruckId, Truck> = HashMap::with_capacity(ids.len());
    for batch in ids.chunks(options.batch_size.max(1)) {
        for truck in repo.get_trucks_by_ids(batch)? {
            hydrated.insert(truck.id.clone(), truck);
        }
    }

    let mut nearby = Vec::with_capacity(survivors.len());
    for scored in survivors {
        let Some(truck) = hydrated.remove(&scored.entity.id) else {
            log::debug!(
                "Truck {} passed the proximity filter but was not returned by the store",
                scored.entity.id
            );
            continue;
        };
        let status = is_open_with_policy(truck.hours.as_ref(), now, options.missing_schedule);
        nearby.push(NearbyTruck {
            truck,
            distance_km: scored.distance_km,
            status,
        });
    }

    Ok(nearby)
}
