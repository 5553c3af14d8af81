use crate::constants::*;
use crate::feed::MessageRecord;
use crate::seed::{perturb, seed_for, seeded_random};
use crate::wrap::estimate_line_count;
use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;
use std::rc::Rc;

/// Host viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero, negative or NaN dimensions (e.g. a detached canvas during teardown).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    #[inline]
    pub fn virtual_height(&self, multiplier: f32) -> f32 {
        self.height * multiplier
    }
}

/// How each entity's font size (in em) is chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FontSizing {
    Fixed(f32),
    /// Uniform in `[min_em, max_em)`, driven by the entity's base seed.
    Seeded { min_em: f32, max_em: f32 },
}

impl FontSizing {
    fn font_em(&self, base_seed: i32) -> f32 {
        match *self {
            FontSizing::Fixed(em) => em,
            FontSizing::Seeded { min_em, max_em } => {
                let t = seeded_random(base_seed.wrapping_add(FONT_SEED_OFFSET)) as f32;
                min_em + t * (max_em - min_em)
            }
        }
    }
}

/// Best-effort spacing: a candidate box grown by `padding` on every side must
/// not touch any accepted box (also padded). After `max_tries` attempts the
/// last candidate is taken anyway.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionAvoidance {
    pub padding: f32,
    pub max_tries: u32,
}

impl Default for CollisionAvoidance {
    fn default() -> Self {
        Self {
            padding: COLLISION_PADDING,
            max_tries: MAX_PLACEMENT_TRIES,
        }
    }
}

/// Layout tuning selected when the engine is built.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPolicy {
    pub spawn_count: u32,
    pub height_multiplier: f32,
    pub width_fraction: f32,
    pub max_width: f32,
    pub font: FontSizing,
    pub collision: Option<CollisionAvoidance>,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self {
            spawn_count: SPAWN_COUNT,
            height_multiplier: VIRTUAL_HEIGHT_MULTIPLIER,
            width_fraction: ENTITY_WIDTH_FRACTION,
            max_width: ENTITY_MAX_WIDTH,
            font: FontSizing::Seeded {
                min_em: MIN_FONT_EM,
                max_em: MAX_FONT_EM,
            },
            collision: Some(CollisionAvoidance::default()),
        }
    }
}

impl LayoutPolicy {
    /// Seeded font sizes with no spacing pass; entities may pile up freely.
    pub fn organic() -> Self {
        Self {
            collision: None,
            ..Self::default()
        }
    }

    pub fn entity_width(&self, viewport: Viewport) -> f32 {
        (self.width_fraction * viewport.width).min(self.max_width)
    }

    /// Height from a one-glyph-per-em line estimate. Never NaN or negative.
    pub fn estimate_height(&self, text: &str, width: f32, font_em: f32) -> f32 {
        let font_px = (font_em * BASE_FONT_PX).max(0.0);
        let chars_per_line = if font_px > 0.0 {
            (width / font_px).floor() as usize
        } else {
            1
        };
        let lines = estimate_line_count(text, chars_per_line);
        lines as f32 * font_px * LINE_HEIGHT
    }
}

/// One positioned copy of a message on the virtual canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatteredEntity {
    pub id: String,
    pub source_text: Rc<str>,
    pub position: Vec2,
    pub size: Vec2,
    /// In em; multiply by [`BASE_FONT_PX`] for pixels.
    pub font_size: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScatterStats {
    pub candidates: usize,
    /// Placements that ran out of retries and were accepted overlapping.
    pub exhausted: usize,
    pub max_attempts: u32,
}

#[derive(Clone, Debug, Default)]
pub struct Scatter {
    pub entities: Vec<ScatteredEntity>,
    pub virtual_height: f32,
    pub stats: ScatterStats,
}

/// Scatter `spawn_count` copies of every message across the virtual canvas.
///
/// Iteration is spawn-major (all messages for spawn 0, then spawn 1, ...), so
/// with collision avoidance on, the first copy of every message gets first
/// pick of free space.
pub fn scatter(messages: &[MessageRecord], viewport: Viewport, policy: &LayoutPolicy) -> Scatter {
    if viewport.is_degenerate() {
        log::debug!(
            "[scatter] degenerate viewport {}x{}; nothing placed",
            viewport.width,
            viewport.height
        );
        return Scatter::default();
    }
    let virtual_height = viewport.virtual_height(policy.height_multiplier);
    let mut out = Scatter {
        virtual_height,
        ..Scatter::default()
    };
    if messages.is_empty() {
        return out;
    }

    let width = policy.entity_width(viewport);
    let x_span = (viewport.width - width).max(0.0);
    // One shared allocation per message instead of one per copy
    let texts: Vec<Option<Rc<str>>> = messages
        .iter()
        .map(|m| (!m.text.trim().is_empty()).then(|| Rc::from(m.text.as_str())))
        .collect();
    let mut grid = policy
        .collision
        .map(|_| CollisionGrid::new(COLLISION_CELL_SIZE));

    for spawn in 0..policy.spawn_count {
        for (index, (message, text)) in messages.iter().zip(&texts).enumerate() {
            let Some(text) = text else {
                continue;
            };
            let base_seed = seed_for(&message.seed_key(index), spawn);
            let font_size = policy.font.font_em(base_seed);
            let height = policy.estimate_height(text, width, font_size);
            let size = Vec2::new(width, height);
            let y_span = (virtual_height - height).max(0.0);
            let place = |seed: i32| {
                Vec2::new(
                    seeded_random(seed) as f32 * x_span,
                    seeded_random(seed.wrapping_add(Y_SEED_OFFSET)) as f32 * y_span,
                )
            };
            out.stats.candidates += 1;

            let (position, padded) = match (policy.collision, grid.as_mut()) {
                (Some(avoid), Some(grid)) => {
                    let placed = place_avoiding(grid, avoid, base_seed, size, place);
                    out.stats.max_attempts = out.stats.max_attempts.max(placed.attempts);
                    if !placed.clear {
                        out.stats.exhausted += 1;
                        log::debug!(
                            "[scatter] '{}' spawn {} overlaps after {} tries",
                            message.id,
                            spawn,
                            placed.attempts
                        );
                    }
                    (placed.position, Some(placed.padded))
                }
                _ => (place(base_seed), None),
            };

            if position.y >= virtual_height || position.y + height <= 0.0 {
                continue;
            }
            if let (Some(grid), Some(padded)) = (grid.as_mut(), padded) {
                grid.insert(padded);
            }
            out.entities.push(ScatteredEntity {
                id: format!("scattered-{}", out.entities.len()),
                source_text: text.clone(),
                position,
                size,
                font_size,
            });
        }
    }

    log::debug!(
        "[scatter] {} entities from {} messages over {}px ({} overlapping)",
        out.entities.len(),
        messages.len(),
        virtual_height,
        out.stats.exhausted
    );
    out
}

struct Placement {
    position: Vec2,
    padded: Rect,
    attempts: u32,
    clear: bool,
}

fn place_avoiding(
    grid: &CollisionGrid,
    avoid: CollisionAvoidance,
    base_seed: i32,
    size: Vec2,
    place: impl Fn(i32) -> Vec2,
) -> Placement {
    let max_tries = avoid.max_tries.max(1);
    let mut attempts = 0;
    loop {
        let position = place(perturb(base_seed, attempts));
        attempts += 1;
        let padded = Rect::new(position, size).padded(avoid.padding);
        let clear = !grid.overlaps(&padded);
        if clear || attempts >= max_tries {
            return Placement {
                position,
                padded,
                attempts,
                clear,
            };
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Rect {
    min: Vec2,
    max: Vec2,
}

impl Rect {
    fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            min: position,
            max: position + size,
        }
    }

    fn padded(self, pad: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(pad),
            max: self.max + Vec2::splat(pad),
        }
    }

    #[inline]
    fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Uniform grid over accepted boxes. Answers exactly what a linear scan
/// would, but only looks at boxes sharing a cell with the query.
struct CollisionGrid {
    cell_size: f32,
    cells: FnvHashMap<(i32, i32), SmallVec<[usize; 8]>>,
    boxes: Vec<Rect>,
}

impl CollisionGrid {
    fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            cells: FnvHashMap::default(),
            boxes: Vec::new(),
        }
    }

    /// Inclusive `(col0, row0, col1, row1)` cell range covered by `rect`.
    fn cell_range(&self, rect: &Rect) -> (i32, i32, i32, i32) {
        (
            (rect.min.x / self.cell_size).floor() as i32,
            (rect.min.y / self.cell_size).floor() as i32,
            (rect.max.x / self.cell_size).floor() as i32,
            (rect.max.y / self.cell_size).floor() as i32,
        )
    }

    fn overlaps(&self, rect: &Rect) -> bool {
        let (c0, r0, c1, r1) = self.cell_range(rect);
        (r0..=r1).any(|row| {
            (c0..=c1).any(|col| {
                self.cells.get(&(col, row)).is_some_and(|ids| {
                    ids.iter().any(|&i| self.boxes[i].intersects(rect))
                })
            })
        })
    }

    fn insert(&mut self, rect: Rect) {
        let id = self.boxes.len();
        let (c0, r0, c1, r1) = self.cell_range(&rect);
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.cells.entry((col, row)).or_default().push(id);
            }
        }
        self.boxes.push(rect);
    }
}
