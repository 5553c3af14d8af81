use crate::dom::Listener;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_resize(frame_ctx: Rc<RefCell<FrameContext>>) -> anyhow::Result<Listener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    Listener::new(window.as_ref(), "resize", move |_ev: web::Event| {
        frame_ctx.borrow_mut().resize();
    })
}
