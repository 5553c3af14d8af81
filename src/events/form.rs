use crate::constants::{FORM_ID, INPUT_ID, STATUS_FAILED, STATUS_SENDING, STATUS_SENT};
use crate::dom::{self, Listener};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use void_core::{counter_label, validate_submission, SubmitError};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Page-supplied `(text) => Promise` that appends a message to the store.
pub type SubmitHandler = Rc<RefCell<Option<js_sys::Function>>>;

/// Wire the draft counter and the submit button. Pages without the form get
/// no listeners; the void still drifts.
pub fn wire_form(document: &web::Document, handler: SubmitHandler) -> anyhow::Result<Vec<Listener>> {
    let (Some(form), Some(input)) = (
        dom::element_by_id::<web::HtmlFormElement>(document, FORM_ID),
        dom::element_by_id::<web::HtmlInputElement>(document, INPUT_ID),
    ) else {
        log::info!("[form] #{} / #{} not found; submissions disabled", FORM_ID, INPUT_ID);
        return Ok(Vec::new());
    };

    let counter = {
        let document = document.clone();
        let input = input.clone();
        Listener::new(input.clone().as_ref(), "input", move |_ev: web::Event| {
            let raw = input.value();
            let over = matches!(validate_submission(&raw), Err(SubmitError::TooLong { .. }));
            overlay::set_counter(&document, &counter_label(&raw), over);
        })?
    };

    let submit = {
        let document = document.clone();
        Listener::new(form.as_ref(), "submit", move |ev: web::Event| {
            ev.prevent_default();
            let text = match validate_submission(&input.value()) {
                Ok(text) => text,
                Err(SubmitError::Empty) => return,
                Err(e) => {
                    overlay::set_status(&document, &e.to_string());
                    return;
                }
            };
            let Some(store) = handler.borrow().clone() else {
                log::warn!("[form] no submit handler registered");
                overlay::set_status(&document, STATUS_FAILED);
                return;
            };
            input.set_disabled(true);
            overlay::set_status(&document, STATUS_SENDING);
            let input = input.clone();
            let document = document.clone();
            spawn_local(async move {
                let result = match store.call1(&JsValue::NULL, &JsValue::from_str(&text)) {
                    Ok(ret) => JsFuture::from(js_sys::Promise::resolve(&ret)).await.map(|_| ()),
                    Err(e) => Err(e),
                };
                input.set_disabled(false);
                match result {
                    Ok(()) => {
                        log::info!("[form] sent {} chars", text.chars().count());
                        input.set_value("");
                        overlay::set_counter(&document, &counter_label(""), false);
                        overlay::set_status(&document, STATUS_SENT);
                    }
                    Err(e) => {
                        log::error!("[form] store rejected message: {:?}", e);
                        overlay::set_status(&document, STATUS_FAILED);
                    }
                }
            });
        })?
    };

    Ok(vec![counter, submit])
}
