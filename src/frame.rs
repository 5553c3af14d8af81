use crate::render::CanvasSurface;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use void_core::EngineState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<EngineState>>,
    pub surface: CanvasSurface,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let (viewport, items) = {
            let mut engine = self.engine.borrow_mut();
            engine.tick(Instant::now());
            (engine.viewport(), engine.visible())
        };
        self.surface.draw(viewport, &items);
    }

    /// Pick up a new canvas size: backing store first, then the scatter.
    pub fn resize(&mut self) {
        self.surface.resize();
        let viewport = self.surface.viewport();
        self.engine.borrow_mut().resize(viewport);
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame driver. Keeps the pending frame id so `stop` can
/// cancel it; the closure is dropped on stop, which breaks its self-reference.
pub struct AnimationLoop {
    engine: Rc<RefCell<EngineState>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickClosure,
}

impl AnimationLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let engine = frame_ctx.borrow().engine.clone();
        engine.borrow_mut().start(Instant::now());

        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: TickClosure = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let pending_tick = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            frame_ctx.borrow_mut().frame();
            // Stopped during this frame: do not reschedule
            if let Some(cb) = tick_clone.borrow().as_ref() {
                pending_tick.set(request_frame(cb));
            }
        }) as Box<dyn FnMut()>));
        if let Some(cb) = tick.borrow().as_ref() {
            pending.set(request_frame(cb));
        }
        Self {
            engine,
            pending,
            tick,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.tick.borrow().is_some()
    }

    /// Cancel the pending frame and release the tick closure. Safe to call
    /// more than once.
    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
        if let Ok(mut engine) = self.engine.try_borrow_mut() {
            engine.stop();
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    let w = web::window()?;
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame: {:?}", e);
            None
        }
    }
}
