use crate::constants::*;
use crate::dom;
use figurine_core::{AccessoryKind, ClothingStyle, ColorScheme, Gender, OptionSet, Pose, ViewMode};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Show either the photo box or the 3D canvas with its controls.
pub fn apply_mode(document: &web::Document, mode: ViewMode) {
    let three_d = mode == ViewMode::ThreeD;
    dom::set_displayed(document, PREVIEW_BOX_ID, !three_d);
    dom::set_displayed(document, CANVAS_ID, three_d);
    dom::set_displayed(document, CONTROLS_3D_ID, three_d);
    sync_toggle(document, mode);
}

/// Keep the 2D/3D checkbox and its label in step with the shown view.
/// Checked means the photo is shown.
fn sync_toggle(document: &web::Document, mode: ViewMode) {
    let Some(input) = dom::element::<web::HtmlInputElement>(document, TOGGLE_3D_ID) else {
        return;
    };
    input.set_checked(mode == ViewMode::Flat);
    if let Some(label) = input.next_element_sibling() {
        label.set_text_content(Some(toggle_label(mode)));
    }
}

fn toggle_label(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Flat => TOGGLE_TO_3D_LABEL,
        ViewMode::ThreeD => TOGGLE_TO_2D_LABEL,
    }
}

pub fn set_info_visible(document: &web::Document, shown: bool) {
    dom::set_displayed(document, PREVIEW_INFO_ID, shown);
}

/// Replace the preview box content with the uploaded photo and a caption
/// listing the chosen options.
pub fn show_photo(document: &web::Document, data_url: &str, options: &OptionSet) {
    let Some(preview_box) = dom::element::<web::HtmlElement>(document, PREVIEW_BOX_ID) else {
        return;
    };
    preview_box.set_inner_html("");
    if let Err(e) = build_photo(document, &preview_box, data_url, options) {
        log::error!("[preview] photo overlay failed: {:?}", e);
        return;
    }
    let style = preview_box.style();
    _ = style.set_property("border-radius", "15px");
    _ = style.set_property("overflow", "hidden");
    _ = style.set_property("border", PHOTO_BORDER_CSS);
}

fn build_photo(
    document: &web::Document,
    parent: &web::HtmlElement,
    data_url: &str,
    options: &OptionSet,
) -> Result<(), wasm_bindgen::JsValue> {
    let container = create::<web::HtmlElement>(document, "div")?;
    set_styles(
        &container,
        &[("position", "relative"), ("width", "100%"), ("height", "100%")],
    );

    let img = create::<web::HtmlImageElement>(document, "img")?;
    img.set_src(data_url);
    img.set_alt("Uploaded photo");
    set_styles(
        &img,
        &[
            ("width", "100%"),
            ("height", "100%"),
            ("object-fit", "contain"),
            ("border-radius", "10px"),
        ],
    );
    container.append_child(&img)?;

    let caption = create::<web::HtmlElement>(document, "div")?;
    set_styles(
        &caption,
        &[
            ("position", "absolute"),
            ("bottom", "0"),
            ("left", "0"),
            ("right", "0"),
            (
                "background",
                "linear-gradient(180deg, transparent 0%, rgba(0,0,0,0.8) 100%)",
            ),
            ("padding", "30px 20px 20px"),
            ("color", "white"),
            ("font-size", "13px"),
            ("line-height", "1.8"),
        ],
    );
    for line in caption_lines(options) {
        let row = create::<web::HtmlElement>(document, "div")?;
        row.set_text_content(Some(&line));
        caption.append_child(&row)?;
    }
    container.append_child(&caption)?;
    parent.append_child(&container)?;
    Ok(())
}

fn create<T: JsCast>(document: &web::Document, tag: &str) -> Result<T, wasm_bindgen::JsValue> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|el| el.into())
}

fn set_styles(el: &web::HtmlElement, styles: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in styles {
        _ = style.set_property(name, value);
    }
}

fn caption_lines(options: &OptionSet) -> Vec<String> {
    let mut lines = vec![
        format!("Figure: {}", gender_label(options.gender)),
        format!("Outfit: {}", clothing_label(options.clothing)),
        format!("Pose: {}", pose_label(options.pose)),
        format!("Colors: {}", color_label(options.color_scheme)),
    ];
    if !options.accessories().is_empty() {
        let names: Vec<&str> = options
            .accessories()
            .iter()
            .map(|a| accessory_label(*a))
            .collect();
        lines.push(format!("Extras: {}", names.join(", ")));
    }
    lines
}

fn gender_label(g: Gender) -> &'static str {
    match g {
        Gender::Male => "Man",
        Gender::Female => "Woman",
        Gender::Neutral => "Not specified",
    }
}

fn clothing_label(c: ClothingStyle) -> &'static str {
    match c {
        ClothingStyle::Casual => "Casual",
        ClothingStyle::Formal => "Formal",
        ClothingStyle::Tech => "Tech (hoodie + sneakers)",
        ClothingStyle::Custom => "Custom style",
    }
}

fn pose_label(p: Pose) -> &'static str {
    match p {
        Pose::Standing => "Standing, relaxed",
        Pose::Sitting => "Sitting",
        Pose::Working => "At work",
        Pose::Dynamic => "Dynamic",
    }
}

fn color_label(c: ColorScheme) -> &'static str {
    match c {
        ColorScheme::Vibrant => "Bright and cheerful",
        ColorScheme::Professional => "Professional",
        ColorScheme::Pastel => "Pastel",
        ColorScheme::Dark => "Dark and stylish",
    }
}

fn accessory_label(a: AccessoryKind) -> &'static str {
    match a {
        AccessoryKind::Glasses => "Glasses",
        AccessoryKind::Cap => "Cap",
        AccessoryKind::Laptop => "Laptop",
        AccessoryKind::Coffee => "Coffee mug",
        AccessoryKind::Beard => "Beard",
    }
}
