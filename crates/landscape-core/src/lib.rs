pub mod color;
pub mod config;
pub mod constants;
pub mod debounce;
pub mod error;
pub mod landmark;
pub mod landscape;
pub mod language;
pub mod overlap;
pub mod point;
pub mod scene;
pub mod time;
pub mod tooltip;
pub mod viewport;
pub mod zoom;

pub use color::Rgb;
pub use config::*;
pub use debounce::Coalescer;
pub use error::{LandscapeError, Result};
pub use landmark::{pick_text, tally_weights, Landmark};
pub use landscape::*;
pub use language::LanguageTable;
pub use overlap::{visible_mask, BoundingBox};
pub use point::*;
pub use scene::*;
pub use time::format_duration;
pub use tooltip::TooltipFormatter;
pub use viewport::{LinearScale, Margin, ViewportScales};
pub use zoom::ZoomTransform;
