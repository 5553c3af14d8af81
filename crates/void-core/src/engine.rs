//! Per-view engine state. Mutated from one thread; each input handler
//! finishes before the next runs.

use crate::camera::{Camera, CameraConfig};
use crate::cull::{self, LineCache, RenderItem};
use crate::feed::{FeedError, MessageRecord};
use crate::layout::{scatter, LayoutPolicy, ScatterStats, ScatteredEntity, Viewport};
use instant::Instant;

pub struct EngineState {
    messages: Vec<MessageRecord>,
    viewport: Viewport,
    policy: LayoutPolicy,
    entities: Vec<ScatteredEntity>,
    stats: ScatterStats,
    camera: Camera,
    lines: LineCache,
    running: bool,
    last_tick: Option<Instant>,
}

impl EngineState {
    pub fn new(viewport: Viewport, policy: LayoutPolicy, camera: CameraConfig) -> Self {
        let camera = Camera::new(viewport.virtual_height(policy.height_multiplier), camera);
        Self {
            messages: Vec::new(),
            viewport,
            policy,
            entities: Vec::new(),
            stats: ScatterStats::default(),
            camera,
            lines: LineCache::default(),
            running: false,
            last_tick: None,
        }
    }

    /// Replace the snapshot with the feed's latest full list.
    pub fn set_messages(&mut self, messages: Vec<MessageRecord>) {
        log::info!("[feed] snapshot with {} messages", messages.len());
        self.messages = messages;
        self.rescatter();
    }

    /// The feed went away or sent garbage. Keep drawing what we have.
    pub fn feed_error(&mut self, err: &FeedError) {
        log::warn!(
            "[feed] {}; keeping {} entities from the last snapshot",
            err,
            self.entities.len()
        );
    }

    /// New viewport size. The scatter is recomputed from scratch against it;
    /// the camera keeps its offset, wrapped into the new canvas height.
    /// A degenerate size leaves the camera as it was.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        log::debug!(
            "[resize] {}x{} -> {}x{}",
            self.viewport.width,
            self.viewport.height,
            viewport.width,
            viewport.height
        );
        self.viewport = viewport;
        // A collapsed canvas would zero the camera; hold it until a real size returns
        if !viewport.is_degenerate() {
            self.camera
                .set_virtual_height(viewport.virtual_height(self.policy.height_multiplier));
        }
        self.rescatter();
    }

    /// Begin driving the camera from the animation clock. Starting an already
    /// running engine changes nothing.
    pub fn start(&mut self, now: Instant) {
        if self.running {
            return;
        }
        self.running = true;
        self.last_tick = Some(now);
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.last_tick = None;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the camera by the wall-clock time since the previous tick.
    pub fn tick(&mut self, now: Instant) {
        if !self.running {
            return;
        }
        let dt = self
            .last_tick
            .filter(|last| now > *last)
            .map(|last| now - last)
            .unwrap_or_default();
        self.last_tick = Some(now);
        self.camera.advance(dt);
    }

    pub fn scroll(&mut self, delta_y: f64) {
        self.camera.scroll(delta_y);
    }

    /// Entities on screen this frame, in screen coordinates.
    pub fn visible(&mut self) -> Vec<RenderItem> {
        cull::visible(&self.entities, &self.camera, self.viewport, &mut self.lines)
    }

    pub fn entities(&self) -> &[ScatteredEntity] {
        &self.entities
    }

    pub fn messages(&self) -> &[MessageRecord] {
        &self.messages
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn policy(&self) -> &LayoutPolicy {
        &self.policy
    }

    pub fn last_stats(&self) -> ScatterStats {
        self.stats
    }

    fn rescatter(&mut self) {
        let result = scatter(&self.messages, self.viewport, &self.policy);
        if result.stats.exhausted > 0 {
            log::debug!(
                "[scatter] {} of {} placements accepted with overlap",
                result.stats.exhausted,
                result.stats.candidates
            );
        }
        self.entities = result.entities;
        self.stats = result.stats;
        self.lines.clear();
    }
}
