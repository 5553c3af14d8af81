#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use void_core::{parse_snapshot, CameraConfig, EngineState, FeedError, LayoutPolicy};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("void-web starting");
    Ok(())
}

/// One mounted void. The page's feed collaborator pushes snapshots in with
/// `setMessages`, registers the store append with `setSubmitHandler`, and
/// calls `destroy` when the view goes away.
#[wasm_bindgen]
pub struct VoidView {
    document: web::Document,
    engine: Rc<RefCell<EngineState>>,
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    animation: Option<frame::AnimationLoop>,
    listeners: Vec<dom::Listener>,
    submit_handler: events::SubmitHandler,
}

#[wasm_bindgen]
impl VoidView {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: Option<String>) -> Result<VoidView, JsValue> {
        let canvas_id = canvas_id.as_deref().unwrap_or(constants::CANVAS_ID);
        let mut view = Self::build(canvas_id).map_err(to_js)?;
        view.start();
        Ok(view)
    }

    /// Replace the message set with a full snapshot (JSON array of
    /// `{ id, text, createdAt }`, oldest first).
    #[wasm_bindgen(js_name = setMessages)]
    pub fn set_messages(&mut self, snapshot_json: &str) -> Result<(), JsValue> {
        match parse_snapshot(snapshot_json) {
            Ok(messages) => {
                overlay::set_empty_hint(&self.document, messages.is_empty());
                self.engine.borrow_mut().set_messages(messages);
                Ok(())
            }
            Err(e) => {
                self.engine.borrow_mut().feed_error(&e);
                Err(to_js(e))
            }
        }
    }

    /// Report that the feed errored or dropped; the current scatter stays up.
    #[wasm_bindgen(js_name = feedError)]
    pub fn feed_error(&mut self, message: &str) {
        self.engine
            .borrow_mut()
            .feed_error(&FeedError::Unavailable(message.to_owned()));
    }

    #[wasm_bindgen(js_name = setSubmitHandler)]
    pub fn set_submit_handler(&mut self, handler: js_sys::Function) {
        *self.submit_handler.borrow_mut() = Some(handler);
    }

    /// Start (or resume) the animation loop. Never schedules twice.
    pub fn start(&mut self) {
        if self.animation.as_ref().is_some_and(|a| a.is_running()) {
            return;
        }
        self.animation = Some(frame::AnimationLoop::start(self.frame_ctx.clone()));
    }

    pub fn stop(&mut self) {
        if let Some(animation) = self.animation.take() {
            animation.stop();
        }
    }

    /// Stop animating and detach every listener. Idempotent.
    pub fn destroy(&mut self) {
        self.stop();
        self.listeners.clear();
        *self.submit_handler.borrow_mut() = None;
        log::info!("[view] destroyed");
    }

    #[wasm_bindgen(js_name = entityCount)]
    pub fn entity_count(&self) -> usize {
        self.engine.borrow().entities().len()
    }
}

impl VoidView {
    fn build(canvas_id: &str) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, canvas_id)
            .ok_or_else(|| anyhow::anyhow!("missing canvas #{}", canvas_id))?;

        let surface = render::CanvasSurface::new(canvas.clone())?;
        let viewport = surface.viewport();
        let engine = Rc::new(RefCell::new(EngineState::new(
            viewport,
            LayoutPolicy::default(),
            CameraConfig::default(),
        )));
        log::info!(
            "[view] #{} {}x{} (virtual height {})",
            canvas_id,
            viewport.width,
            viewport.height,
            engine.borrow().camera().virtual_height()
        );
        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            engine: engine.clone(),
            surface,
        }));

        let submit_handler: events::SubmitHandler = Rc::new(RefCell::new(None));
        let mut listeners = vec![
            events::wire_resize(frame_ctx.clone())?,
            events::wire_wheel(&canvas, engine.clone())?,
        ];
        listeners.extend(events::wire_form(&document, submit_handler.clone())?);
        overlay::set_empty_hint(&document, true);

        Ok(Self {
            document,
            engine,
            frame_ctx,
            animation: None,
            listeners,
            submit_handler,
        })
    }
}

impl Drop for VoidView {
    fn drop(&mut self) {
        self.stop();
    }
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}
