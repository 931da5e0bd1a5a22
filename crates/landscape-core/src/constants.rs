// Layout and interaction tuning for the landscape view.

// Transitions
pub const TRANSITION_MS: f32 = 1000.0; // enter/update/exit and landmark fade
pub const LANDMARK_REFRESH_DELAY_MS: u32 = 1000; // let a resize transition settle first
pub const RESIZE_DEBOUNCE_MS: u32 = 100;

// Viewport
pub const POINT_PADDING_PX: f32 = 30.0; // keeps edge points from being clipped in half
pub const SPARSE_POINT_THRESHOLD: usize = 10; // below this the layout uses a centered band
pub const RADIUS_MIN_PX: f32 = 2.5;
pub const RADIUS_MAX_PX: f32 = 10.0;
pub const DEFAULT_MARGIN_PX: f32 = 20.0;

// Zoom
pub const ZOOM_SCALE_MIN: f32 = 1.0;
pub const ZOOM_SCALE_MAX: f32 = 10.0;
pub const WHEEL_ZOOM_STEP: f32 = 1.1; // factor per wheel notch

// Landmarks
pub const MAX_LANDMARKS: usize = 400;
pub const PER_POINT_LANDMARK_THRESHOLD: usize = 50; // below this, one landmark per point
pub const LANDMARK_NAMING_RADIUS_PX: f32 = 20.0;
pub const LANDMARK_PRUNE_RADIUS_PX: f32 = 25.0;
pub const LANDMARK_BORDER_PX: f32 = 10.0; // overlap tolerance
pub const LANDMARK_TOP_CANDIDATES: usize = 3;
pub const LANDMARK_FONT_SIZE_PX: f32 = 12.0;
pub const LANDMARK_FONT_WEIGHT: &str = "600";
pub const LANDMARK_FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

// Tooltip
pub const TOOLTIP_VERTICAL_OFFSET_PX: f32 = 60.0;
pub const DESCRIPTION_CUT_OFFSET: usize = 300;
pub const DATABASE_DATE: &str = "24.07.2016";
pub const NOT_FOUND: &str = "not-found";

// Palette and links
pub const DEFAULT_POINT_COLOR: &str = "#CA5252";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";
pub const HOVER_BRIGHTEN: f32 = 1.0;
pub const DETAIL_BASE_URL: &str = "http://videolectures.net/";
