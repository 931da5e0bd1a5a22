// Host-side tests for landmark naming and seeding.

mod common;

use common::lecture;
use landscape_core::landmark::seed_anchors;
use landscape_core::{pick_text, tally_weights, LandmarkTag, Point};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn tagged(tags: &[(&str, f64)]) -> Point {
    let mut p = lecture("t", 0.5, 0.5);
    p.landmark_tags = Some(
        tags.iter()
            .map(|(c, w)| LandmarkTag(c.to_string(), *w))
            .collect(),
    );
    p
}

#[test]
fn weights_accumulate_across_points() {
    let points = [tagged(&[("ai", 5.0)]), tagged(&[("ai", 3.0), ("bio", 2.0)])];
    let tally = tally_weights(&points);
    assert_eq!(tally, vec![("ai".to_string(), 8.0), ("bio".to_string(), 2.0)]);
}

#[test]
fn untagged_points_are_skipped() {
    let mut bare = lecture("b", 0.0, 0.0);
    bare.landmark_tags = None;
    let points = [bare, tagged(&[("bio", 1.0)])];
    assert_eq!(tally_weights(&points), vec![("bio".to_string(), 1.0)]);
}

#[test]
fn no_tags_gives_no_label() {
    let mut bare = lecture("b", 0.0, 0.0);
    bare.landmark_tags = None;
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(pick_text(&[bare], &mut rng), None);
    assert_eq!(pick_text(&[] as &[Point], &mut rng), None);
}

#[test]
fn single_category_is_picked_deterministically() {
    let points = [tagged(&[("ai", 5.0)]), tagged(&[("ai", 3.0)])];
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(pick_text(&points, &mut rng).as_deref(), Some("ai"));
    }
}

#[test]
fn picks_only_among_the_top_three() {
    let points = [tagged(&[("a", 10.0), ("b", 9.0), ("c", 8.0), ("d", 1.0)])];
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen = HashSet::new();
    for _ in 0..300 {
        seen.insert(pick_text(&points, &mut rng).unwrap());
    }
    assert!(!seen.contains("d"));
    assert_eq!(seen.len(), 3);
}

#[test]
fn small_sets_seed_one_anchor_per_point() {
    let points: Vec<Point> = (0..12)
        .map(|i| lecture("p", i as f32 / 12.0, 0.25))
        .collect();
    let mut rng = StdRng::seed_from_u64(0);
    let anchors = seed_anchors(&points, 400, &mut rng);
    assert_eq!(anchors.len(), 12);
    assert_eq!(anchors[3], glam::Vec2::new(3.0 / 12.0, 0.25));
}

#[test]
fn large_sets_seed_capped_random_anchors() {
    let points: Vec<Point> = (0..60).map(|_| lecture("p", 0.5, 0.5)).collect();
    let mut rng = StdRng::seed_from_u64(0);
    let anchors = seed_anchors(&points, 25, &mut rng);
    assert_eq!(anchors.len(), 25);
    assert!(anchors
        .iter()
        .all(|a| (0.0..1.0).contains(&a.x) && (0.0..1.0).contains(&a.y)));
}
