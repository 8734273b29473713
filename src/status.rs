use crate::constants::{FORM_MESSAGE_ID, PREVIEW_MESSAGE_ID};
use crate::dom;
use figurine_core::order::OrderError;
use figurine_core::PreviewError;
use web_sys as web;

/// Message styles; the names double as CSS classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Loading,
    Success,
    Error,
}

impl MessageKind {
    const ALL: [MessageKind; 3] = [MessageKind::Loading, MessageKind::Success, MessageKind::Error];

    fn class(self) -> &'static str {
        match self {
            MessageKind::Loading => "loading",
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

fn set_message(el: &web::HtmlElement, text: &str, kind: Option<MessageKind>) {
    el.set_text_content(Some(text));
    let classes = el.class_list();
    for k in MessageKind::ALL {
        _ = classes.remove_1(k.class());
    }
    if let Some(kind) = kind {
        _ = classes.add_1(kind.class());
    }
}

pub fn show_preview_message(document: &web::Document, text: &str, kind: MessageKind) {
    if let Some(el) = dom::element::<web::HtmlElement>(document, PREVIEW_MESSAGE_ID) {
        set_message(&el, text, Some(kind));
        _ = el.style().set_property("display", "block");
    }
}

pub fn hide_preview_message(document: &web::Document) {
    dom::set_displayed(document, PREVIEW_MESSAGE_ID, false);
}

pub fn show_form_message(document: &web::Document, text: &str, kind: MessageKind) {
    if let Some(el) = dom::element::<web::HtmlElement>(document, FORM_MESSAGE_ID) {
        set_message(&el, text, Some(kind));
    }
}

pub fn clear_form_message(document: &web::Document) {
    if let Some(el) = dom::element::<web::HtmlElement>(document, FORM_MESSAGE_ID) {
        set_message(&el, "", None);
    }
}

pub fn preview_error_text(e: PreviewError) -> &'static str {
    match e {
        PreviewError::MissingPhoto => "Please upload a photo",
        PreviewError::IncompleteOptions => "Please choose every option",
        PreviewError::PhotoUnreadable => "Could not read the photo, please try another file",
        PreviewError::RendererUnavailable => {
            "3D preview is not available in this browser; showing your photo instead"
        }
    }
}

pub fn order_error_text(e: OrderError) -> &'static str {
    match e {
        OrderError::MissingFields => "Please fill in every field of the form",
        OrderError::InvalidEmail => "Please enter a valid email address",
        OrderError::InvalidPhone => "Please enter a valid phone number",
    }
}

pub const GENERATING_TEXT: &str = "Generating the 3D model...";
pub const READY_TEXT: &str = "Your 3D model is ready! Drag to look at it from every side";
pub const EDIT_TEXT: &str = "Change the options and press \"Generate preview\"";
pub const DESIGN_SAVED_TEXT: &str =
    "Great! Your design is saved. Now fill in the order form for delivery";
pub const ORDER_RECEIVED_TEXT: &str =
    "Thank you! We received your order. A manager will contact you within an hour.";
