use crate::constants::{CAPTION_HEADING_ID, CAPTION_SUB_ID};
use app_core::slide_content;
use web_sys as web;

/// Swap the on-screen caption to the copy of the given section.
pub fn update_caption(document: &web::Document, section: usize) {
    let slide = slide_content(section);
    if let Some(el) = document.get_element_by_id(CAPTION_HEADING_ID) {
        el.set_text_content(Some(slide.heading));
    }
    if let Some(el) = document.get_element_by_id(CAPTION_SUB_ID) {
        el.set_text_content(Some(slide.sub));
    }
}
