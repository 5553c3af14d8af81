use crate::constants::{COUNTER_ID, EMPTY_HINT_ID, EMPTY_HINT_TEXT, STATUS_ID};
use web_sys as web;

/// Show the "silent void" hint while there is nothing to scatter.
#[inline]
pub fn set_empty_hint(document: &web::Document, empty: bool) {
    if let Some(el) = document.get_element_by_id(EMPTY_HINT_ID) {
        if empty {
            el.set_text_content(Some(EMPTY_HINT_TEXT));
            _ = el.set_attribute("style", "");
        } else {
            _ = el.set_attribute("style", "display:none");
        }
    }
}

#[inline]
pub fn set_status(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(STATUS_ID) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_counter(document: &web::Document, label: &str, over_limit: bool) {
    if let Some(el) = document.get_element_by_id(COUNTER_ID) {
        el.set_text_content(Some(label));
        _ = el.set_attribute("data-over", if over_limit { "1" } else { "0" });
    }
}
