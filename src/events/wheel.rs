use crate::constants::WHEEL_LINE_PX;
use crate::dom::Listener;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use void_core::EngineState;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wheel input pans the camera. Registered non-passive so the page itself
/// does not scroll underneath the canvas.
pub fn wire_wheel(
    canvas: &web::HtmlCanvasElement,
    engine: Rc<RefCell<EngineState>>,
) -> anyhow::Result<Listener> {
    Listener::active(canvas.as_ref(), "wheel", move |ev: web::Event| {
        let Some(wheel) = ev.dyn_ref::<web::WheelEvent>() else {
            return;
        };
        let page_px = engine.borrow().viewport().height as f64;
        let dy = input::wheel_delta_px(wheel.delta_y(), wheel.delta_mode(), WHEEL_LINE_PX, page_px);
        engine.borrow_mut().scroll(dy);
        ev.prevent_default();
    })
}
