// Pure input/size helpers; nothing here touches the DOM.

pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

/// Convert a wheel `deltaY` to pixels according to its `deltaMode`.
///
/// Unknown modes are treated as pixels; non-finite deltas become 0.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, line_px: f64, page_px: f64) -> f64 {
    if !delta_y.is_finite() {
        return 0.0;
    }
    match delta_mode {
        DOM_DELTA_LINE => delta_y * line_px,
        DOM_DELTA_PAGE => delta_y * page_px,
        _ => delta_y,
    }
}

/// Backing store size in device pixels for a CSS-sized canvas, at least 1x1.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let w = (css_width.max(0.0) * dpr) as u32;
    let h = (css_height.max(0.0) * dpr) as u32;
    (w.max(1), h.max(1))
}

/// CSS font shorthand for a font size given in em.
#[inline]
pub fn css_font(font_em: f32, base_px: f32, weight: u32, family: &str) -> String {
    format!("{} {:.2}px {}", weight, font_em * base_px, family)
}
