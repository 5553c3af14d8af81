/// Page wiring and drawing constants for the web frontend.
///
/// Element ids must match the host page; colours and font are what the canvas
/// surface draws with.
// Element ids
pub const CANVAS_ID: &str = "void-canvas";
pub const FORM_ID: &str = "void-form";
pub const INPUT_ID: &str = "void-input";
pub const COUNTER_ID: &str = "void-count";
pub const STATUS_ID: &str = "void-status";
pub const EMPTY_HINT_ID: &str = "void-empty";

// Canvas drawing
pub const BACKGROUND_COLOR: &str = "#000000";
pub const TEXT_COLOR: &str = "rgba(255, 255, 255, 0.95)";
pub const FONT_FAMILY: &str = "system-ui, sans-serif";
pub const FONT_WEIGHT: u32 = 400;

// Wheel normalisation (DOM_DELTA_LINE events report lines, not pixels)
pub const WHEEL_LINE_PX: f64 = 16.0;

// User-facing copy
pub const EMPTY_HINT_TEXT: &str = "The Void is silent... for now.";
pub const STATUS_SENT: &str = "Your message has been sent to The Void.";
pub const STATUS_FAILED: &str = "Failed to send message. Please try again.";
pub const STATUS_SENDING: &str = "Sending...";
