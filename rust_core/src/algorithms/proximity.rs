//! Radius pre-filter for map data.
//!
//! Callers run [`filter_nearby`] over lightweight location records before
//! fetching full records from the document store, so the number of follow-up
//! lookups is bounded by `max_results`.
//!
//! ## Algorithm
//! 1. Skip entities without a valid [`GeoPoint`] (missing, non-finite or out
//!    of range).
//! 2. Reject cheaply with a [`BoundingBox`] around the center.
//! 3. Compute the haversine distance and drop anything beyond the radius.
//! 4. Stable ascending sort by distance, then truncate.

use std::f64::consts::PI;

use crate::core::domain::{GeoPoint, ProximityQuery, ScoredEntity};

/// Mean Earth radius used for all distance computations.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Relative slack added to the bounding box so that floating-point rounding
/// never rejects a point the haversine check would keep.
const BOX_SLACK: f64 = 1e-9;

/// Anything that can report where it is.
///
/// Implement this once at the boundary, mapping whatever field names the
/// store uses onto a [`GeoPoint`]. Return `None` when the record has no
/// usable coordinates.
pub trait Locatable {
    fn location(&self) -> Option<GeoPoint>;
}

impl Locatable for GeoPoint {
    fn location(&self) -> Option<GeoPoint> {
        Some(*self)
    }
}

impl Locatable for Option<GeoPoint> {
    fn location(&self) -> Option<GeoPoint> {
        *self
    }
}

impl<T: Locatable + ?Sized> Locatable for &T {
    fn location(&self) -> Option<GeoPoint> {
        (**self).location()
    }
}

/// Great-circle distance in kilometers between two points.
///
/// ```
/// use truckmap_rust::algorithms::proximity::haversine_km;
/// use truckmap_rust::core::domain::GeoPoint;
///
/// let austin = GeoPoint::new(30.2672, -97.7431);
/// let dallas = GeoPoint::new(32.7767, -96.7970);
/// let d = haversine_km(austin, dallas);
/// assert!((d - 293.0).abs() < 3.0);
/// ```
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().atan2((1.0 - h).clamp(0.0, 1.0).sqrt());
    EARTH_RADIUS_KM * c
}

/// Latitude/longitude box enclosing every point within a radius of a center.
///
/// The longitude test is done on the wrapped difference to the center, so a
/// box that crosses the antimeridian needs no special casing. When the circle
/// reaches a pole every longitude is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    center_longitude: f64,
    /// Half-width in degrees; `None` means all longitudes.
    longitude_half_width: Option<f64>,
}

impl BoundingBox {
    /// Box around `center` covering `radius_km`.
    pub fn around(center: GeoPoint, radius_km: f64) -> Self {
        let angular = (radius_km / EARTH_RADIUS_KM) * (1.0 + BOX_SLACK) + BOX_SLACK;
        let lat = center.latitude.to_radians();

        let min_lat = lat - angular;
        let max_lat = lat + angular;

        if min_lat <= -PI / 2.0 || max_lat >= PI / 2.0 || angular >= PI / 2.0 {
            return Self {
                min_latitude: min_lat.to_degrees().max(-90.0),
                max_latitude: max_lat.to_degrees().min(90.0),
                center_longitude: center.longitude,
                longitude_half_width: None,
            };
        }

        let ratio = angular.sin() / lat.cos();
        let half_width = if ratio >= 1.0 {
            None
        } else {
            Some(ratio.asin().to_degrees())
        };

        Self {
            min_latitude: min_lat.to_degrees(),
            max_latitude: max_lat.to_degrees(),
            center_longitude: center.longitude,
            longitude_half_width: half_width,
        }
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        if point.latitude < self.min_latitude || point.latitude > self.max_latitude {
            return false;
        }
        match self.longitude_half_width {
            None => true,
            Some(half_width) => {
                let delta = (point.longitude - self.center_longitude + 540.0).rem_euclid(360.0) - 180.0;
                delta.abs() <= half_width
            }
        }
    }
}

/// Entities within `query.radius_km()` of the center, nearest first.
///
/// Entities at equal distance keep their input order. The result never holds
/// more than `query.max_results()` entries. Pass references to avoid moving
/// the candidates:
///
/// ```
/// use truckmap_rust::algorithms::proximity::filter_nearby;
/// use truckmap_rust::core::domain::{GeoPoint, ProximityQuery};
///
/// let center = GeoPoint::new(33.8283, -98.5795);
/// let query = ProximityQuery::new(center, 50.0, 10).unwrap();
/// let points = vec![GeoPoint::new(34.0, -98.5795), GeoPoint::new(40.0, -98.5795)];
///
/// let nearby = filter_nearby(&query, &points);
/// assert_eq!(nearby.len(), 1);
/// assert!(nearby[0].distance_km < 50.0);
/// ```
pub fn filter_nearby<I, T>(query: &ProximityQuery, entities: I) -> Vec<ScoredEntity<T>>
where
    I: IntoIterator<Item = T>,
    T: Locatable,
{
    let center = query.center();
    let radius_km = query.radius_km();
    let bounds = BoundingBox::around(center, radius_km);

    let mut scored: Vec<ScoredEntity<T>> = entities
        .into_iter()
        .filter_map(|entity| {
            let point = entity.location().filter(GeoPoint::is_valid)?;
            if !bounds.contains(point) {
                return None;
            }
            let distance_km = haversine_km(center, point);
            (distance_km <= radius_km).then_some(ScoredEntity {
                entity,
                distance_km,
            })
        })
        .collect();

    // Vec::sort_by is stable, which gives the input-order tie-break.
    scored.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    scored.truncate(query.max_results());
    scored
}
