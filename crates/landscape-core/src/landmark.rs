//! Landmark labels: where they are seeded and what they say.

use crate::constants::{LANDMARK_TOP_CANDIDATES, PER_POINT_LANDMARK_THRESHOLD};
use crate::point::Point;
use crate::viewport::ViewportScales;
use fnv::FnvHashMap;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::cmp::Ordering;

/// A label anchored at a normalized position.
#[derive(Clone, Debug, PartialEq)]
pub struct Landmark {
    pub anchor: Vec2,
    pub text: String,
    /// Measured after layout, in pixels.
    pub width: f32,
    pub height: f32,
}

/// Sums tag weights per category, in the order categories are first seen.
pub fn tally_weights<'a, I>(points: I) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut index: FnvHashMap<&'a str, usize> = FnvHashMap::default();
    let mut tally: Vec<(String, f64)> = Vec::new();
    for point in points {
        let Some(tags) = &point.landmark_tags else {
            continue;
        };
        for tag in tags {
            match index.get(tag.0.as_str()) {
                Some(&i) => tally[i].1 += tag.1,
                None => {
                    index.insert(tag.0.as_str(), tally.len());
                    tally.push((tag.0.clone(), tag.1));
                }
            }
        }
    }
    tally
}

/// Picks one of the three heaviest categories at random.
///
/// Returns `None` when none of the points carries tags.
pub fn pick_text<'a, I, R>(points: I, rng: &mut R) -> Option<String>
where
    I: IntoIterator<Item = &'a Point>,
    R: Rng + ?Sized,
{
    let mut tally = tally_weights(points);
    if tally.is_empty() {
        return None;
    }
    tally.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    let mut top: SmallVec<[(String, f64); LANDMARK_TOP_CANDIDATES]> =
        tally.into_iter().take(LANDMARK_TOP_CANDIDATES).collect();
    let roll = rng.gen_range(0..top.len());
    Some(top.swap_remove(roll).0)
}

/// Candidate anchors for a fresh data set: one per point for small sets,
/// otherwise `max_landmarks` uniformly random positions.
pub fn seed_anchors<R>(points: &[Point], max_landmarks: usize, rng: &mut R) -> Vec<Vec2>
where
    R: Rng + ?Sized,
{
    if points.len() < PER_POINT_LANDMARK_THRESHOLD {
        points.iter().map(|p| Vec2::new(p.x, p.y)).collect()
    } else {
        (0..max_landmarks)
            .map(|_| Vec2::new(rng.gen::<f32>(), rng.gen::<f32>()))
            .collect()
    }
}

/// Points whose scaled position lies strictly within `radius_px` of the
/// scaled anchor.
pub fn points_within<'a>(
    points: &'a [Point],
    anchor: Vec2,
    scales: &ViewportScales,
    radius_px: f32,
) -> Vec<&'a Point> {
    let center = scales.position(anchor);
    points
        .iter()
        .filter(|p| scales.position(Vec2::new(p.x, p.y)).distance(center) < radius_px)
        .collect()
}
