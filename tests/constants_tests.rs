// Host-side tests for page wiring constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use std::collections::HashSet;

#[test]
fn element_ids_are_unique_and_non_empty() {
    let ids = [
        PREVIEW_FORM_ID,
        PHOTO_INPUT_ID,
        GENDER_SELECT_ID,
        CLOTHING_SELECT_ID,
        POSE_SELECT_ID,
        COLOR_SELECT_ID,
        PREVIEW_BOX_ID,
        CANVAS_ID,
        CONTROLS_3D_ID,
        PREVIEW_INFO_ID,
        PREVIEW_MESSAGE_ID,
        TOGGLE_3D_ID,
        GENERATE_BUTTON_ID,
        CONFIRM_BUTTON_ID,
        EDIT_BUTTON_ID,
        CONTACT_FORM_ID,
        FORM_MESSAGE_ID,
    ];
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    for id in ids {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "{} must be a bare id", id);
    }
}

#[test]
fn ready_message_clears_before_order_messages() {
    assert_eq!(READY_MESSAGE_MS, 3_000);
    assert_eq!(ORDER_MESSAGE_MS, 5_000);
    assert!(READY_MESSAGE_MS < ORDER_MESSAGE_MS);
}

#[test]
fn photo_border_uses_accent_color() {
    let accent = format!("#{:06x}", figurine_core::constants::ACCENT_LIGHT_COLOR);
    assert!(PHOTO_BORDER_CSS.ends_with(&accent));
}

#[test]
fn order_inputs_fall_back_to_page_order() {
    let named = [
        ORDER_NAME_SELECTOR,
        ORDER_EMAIL_SELECTOR,
        ORDER_PHONE_SELECTOR,
        ORDER_COMPANY_SELECTOR,
    ];
    let unique: HashSet<_> = named.iter().collect();
    assert_eq!(unique.len(), named.len());

    // name, email, phone, company
    assert_eq!(
        [
            ORDER_NAME_INPUT_INDEX,
            ORDER_EMAIL_INPUT_INDEX,
            ORDER_PHONE_INPUT_INDEX,
            ORDER_COMPANY_INPUT_INDEX,
        ],
        [0, 1, 2, 3]
    );
    assert_eq!(ORDER_INPUT_SELECTOR, "input");
}

#[test]
fn toggle_labels_name_the_other_view() {
    assert_ne!(TOGGLE_TO_3D_LABEL, TOGGLE_TO_2D_LABEL);
    assert!(TOGGLE_TO_3D_LABEL.ends_with("3D"));
    assert!(TOGGLE_TO_2D_LABEL.ends_with("2D"));
}
