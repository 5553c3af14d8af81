// Shared layout/camera tuning constants used by the engine and the web frontend.

// Virtual canvas
pub const SPAWN_COUNT: u32 = 40; // duplicates scattered per message
pub const VIRTUAL_HEIGHT_MULTIPLIER: f32 = 10.0; // virtual canvas height = viewport height * this

// Entity sizing
pub const ENTITY_WIDTH_FRACTION: f32 = 0.6; // share of viewport width an entity may span
pub const ENTITY_MAX_WIDTH: f32 = 340.0; // px
pub const BASE_FONT_PX: f32 = 16.0; // 1em
pub const LINE_HEIGHT: f32 = 1.2; // line advance as a multiple of font size
pub const MIN_FONT_EM: f32 = 1.0;
pub const MAX_FONT_EM: f32 = 2.0;
pub const GLYPH_WIDTH_EM: f32 = 0.5; // average glyph advance used for render wrapping

// Collision avoidance
pub const COLLISION_PADDING: f32 = 40.0; // px cushion around every box
pub const MAX_PLACEMENT_TRIES: u32 = 50; // attempts per candidate before overlap is accepted
pub const COLLISION_CELL_SIZE: f32 = 256.0; // grid cell used to index accepted boxes

// Seeding
pub const SPAWN_SEED_STRIDE: i32 = 100_000;
pub const RETRY_SEED_STRIDE: i32 = 1_000;
pub const Y_SEED_OFFSET: i32 = 100;
pub const FONT_SEED_OFFSET: i32 = 2;

// Camera
pub const CAMERA_SPEED_PX_PER_SEC: f64 = 60.0;

// Submissions
pub const SUBMIT_MAX_CHARS: usize = 500;
