// Shared fixtures for the host-side tests.
#![allow(dead_code)]

use glam::Vec2;
use landscape_core::{
    DurationValue, LandmarkTag, LandmarkToggle, LandscapeGraph, LandscapeOptions, LayoutHost,
    Point,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::rc::Rc;

pub const CHAR_WIDTH: f32 = 7.0;
pub const LABEL_HEIGHT: f32 = 12.0;

pub struct FakeHost {
    pub size: Rc<Cell<Vec2>>,
}

impl LayoutHost for FakeHost {
    fn container_size(&self) -> Vec2 {
        self.size.get()
    }

    fn measure_label(&self, text: &str) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * CHAR_WIDTH, LABEL_HEIGHT)
    }
}

pub struct FakeToggle(pub Rc<Cell<bool>>);

impl LandmarkToggle for FakeToggle {
    fn is_checked(&self) -> bool {
        self.0.get()
    }
}

pub fn lecture(slug: &str, x: f32, y: f32) -> Point {
    Point {
        slug: slug.to_string(),
        title: format!("Lecture {}", slug),
        author: Some(vec!["Ada Lovelace".to_string()]),
        organization: Some("Analytical Society".to_string()),
        description: None,
        language: "en".to_string(),
        categories: None,
        published: "2012-05-31T10:00:00".to_string(),
        duration: DurationValue::Seconds(3661.0),
        views: 0.0,
        x,
        y,
        landmark_tags: Some(vec![LandmarkTag("ai".to_string(), 1.0)]),
    }
}

/// `n` points on a grid, spread over the unit square.
pub fn grid(n: usize) -> Vec<Point> {
    let side = (n as f32).sqrt().ceil().max(1.0) as usize;
    (0..n)
        .map(|i| {
            let x = (i % side) as f32 / side as f32;
            let y = (i / side) as f32 / side as f32;
            let mut p = lecture(&format!("p{}", i), x, y);
            p.views = (i * 10) as f64;
            p
        })
        .collect()
}

pub struct Harness {
    pub graph: LandscapeGraph,
    pub size: Rc<Cell<Vec2>>,
    pub checked: Rc<Cell<bool>>,
}

/// Graph with a 500x500 container, tooltips, landmarks and a checked toggle.
pub fn harness() -> Harness {
    harness_with(LandscapeOptions::default())
}

pub fn harness_with(options: LandscapeOptions) -> Harness {
    let size = Rc::new(Cell::new(Vec2::new(500.0, 500.0)));
    let checked = Rc::new(Cell::new(true));
    let options = options
        .with_host(Box::new(FakeHost { size: size.clone() }))
        .with_landmark_toggle(Box::new(FakeToggle(checked.clone())));
    Harness {
        graph: LandscapeGraph::new(options, StdRng::seed_from_u64(7)),
        size,
        checked,
    }
}
