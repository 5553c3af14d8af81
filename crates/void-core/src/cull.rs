use crate::camera::Camera;
use crate::constants::{BASE_FONT_PX, GLYPH_WIDTH_EM};
use crate::layout::{ScatteredEntity, Viewport};
use crate::wrap::{wrap_lines, Lines};
use fnv::FnvHashMap;
use glam::Vec2;
use std::rc::Rc;

/// Screen-space y of a canvas-space `y`, shifted by one canvas height in
/// whichever direction keeps entities near the seam on screen.
#[inline]
pub fn screen_y(y: f64, height: f64, wrapped_offset: f64, virtual_height: f64) -> f64 {
    let mut sy = y - wrapped_offset;
    if sy < -height {
        sy += virtual_height;
    }
    if sy > virtual_height - height {
        sy -= virtual_height;
    }
    sy
}

#[inline]
pub fn is_visible(screen_y: f64, height: f64, viewport_height: f64) -> bool {
    screen_y + height > 0.0 && screen_y < viewport_height
}

/// What the render surface needs to draw one entity.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderItem {
    pub id: String,
    pub screen_position: Vec2,
    pub size: Vec2,
    /// In em.
    pub font_size: f32,
    pub lines: Lines,
}

/// Memoised line wrapping keyed by `(text, chars_per_line)`. Duplicated
/// entities share text, so a handful of entries serve every copy.
#[derive(Debug, Default)]
pub struct LineCache {
    map: FnvHashMap<(Rc<str>, usize), Lines>,
}

impl LineCache {
    pub fn lines_for(&mut self, entity: &ScatteredEntity) -> Lines {
        let chars = chars_per_line(entity.size.x, entity.font_size);
        self.map
            .entry((entity.source_text.clone(), chars))
            .or_insert_with(|| wrap_lines(&entity.source_text, chars))
            .clone()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Characters that fit across `width` px at `font_em`, at least 1.
#[inline]
pub fn chars_per_line(width: f32, font_em: f32) -> usize {
    let glyph_px = font_em * BASE_FONT_PX * GLYPH_WIDTH_EM;
    if glyph_px > 0.0 {
        ((width / glyph_px).floor() as usize).max(1)
    } else {
        1
    }
}

/// Entities intersecting the viewport for the camera's current offset.
pub fn visible(
    entities: &[ScatteredEntity],
    camera: &Camera,
    viewport: Viewport,
    lines: &mut LineCache,
) -> Vec<RenderItem> {
    let virtual_height = camera.virtual_height();
    if viewport.is_degenerate() || !(virtual_height > 0.0) {
        return Vec::new();
    }
    let offset = camera.wrapped_offset();
    let viewport_height = viewport.height as f64;
    entities
        .iter()
        .filter_map(|e| {
            let height = e.size.y as f64;
            let sy = screen_y(e.position.y as f64, height, offset, virtual_height);
            is_visible(sy, height, viewport_height).then(|| RenderItem {
                id: e.id.clone(),
                screen_position: Vec2::new(e.position.x, sy as f32),
                size: e.size,
                font_size: e.font_size,
                lines: lines.lines_for(e),
            })
        })
        .collect()
}
