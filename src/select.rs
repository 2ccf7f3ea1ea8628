/*
Selection of the entities that lie within a radius of a reference point.

Membership is decided by great-circle distance (exclusive boundary); the kept
entities are then ordered by ascending identifier so the output is
reproducible regardless of how distances tie.
*/

use log::debug;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

use crate::distance::DistanceCalculator;
use crate::geo::Point;

/// Anything with a stable identifier and a location.
pub trait Located {
    type Id: Ord + Debug;

    fn id(&self) -> Self::Id;
    fn location(&self) -> Point;
}

/// An entity kept by `select_with_distances`, with its distance to the
/// reference point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selected<'a, E> {
    pub entity: &'a E,
    pub distance_km: f64,
}

/// Entities strictly closer than `radius_km` to `reference`, sorted by
/// ascending id. Input order breaks id ties.
pub fn select<'a, E, C>(
    entities: &'a [E],
    reference: &Point,
    calculator: &C,
    radius_km: f64,
) -> Vec<&'a E>
where
    E: Located,
    C: DistanceCalculator + ?Sized,
{
    select_with_distances(entities, reference, calculator, radius_km)
        .into_iter()
        .map(|selected| selected.entity)
        .collect()
}

/// Same as `select`, keeping the computed distance next to each entity.
pub fn select_with_distances<'a, E, C>(
    entities: &'a [E],
    reference: &Point,
    calculator: &C,
    radius_km: f64,
) -> Vec<Selected<'a, E>>
where
    E: Located,
    C: DistanceCalculator + ?Sized,
{
    // All distances are computed before anything is sorted.
    let mut kept: Vec<Selected<'a, E>> = entities
        .iter()
        .filter_map(|entity| {
            let distance_km = calculator.great_circle_distance_km(reference, &entity.location());
            debug!("id {:?}: {:.3} km", entity.id(), distance_km);
            (distance_km < radius_km).then_some(Selected {
                entity,
                distance_km,
            })
        })
        .collect();

    // sort_by_key is stable
    kept.sort_by_key(|selected| selected.entity.id());
    kept
}

/// Reorder a selection by ascending distance, ties by ascending id.
pub fn rank_by_distance<E: Located>(selection: &mut [Selected<'_, E>]) {
    selection.sort_by_key(|selected| (OrderedFloat(selected.distance_km), selected.entity.id()));
}
