pub const WINDOW_WIDTH: i32 = 960;             // Initial window width
pub const WINDOW_HEIGHT: i32 = 540;            // Initial window height
pub const FPS: u32 = 60;                       // Frames per second

pub const DISPLAY_FACTOR: f32 = 0.7;           // Displayed image fills 70% of the viewport
pub const DEFAULT_ITEM_DURATION_MS: u64 = 1000; // Default time each image is shown (ms)

pub const SPINNER_OUTER_RADIUS: f32 = 28.0;    // Loading indicator outer radius (px)
pub const SPINNER_INNER_RADIUS: f32 = 22.0;    // Loading indicator inner radius (px)
pub const SPINNER_ARC_DEGREES: f32 = 300.0;    // Visible arc of the loading indicator
pub const SPINNER_SEGMENTS: i32 = 48;          // Ring tessellation segments
pub const SPINNER_SPEED: f32 = 240.0;          // Loading indicator spin (degrees per second)
