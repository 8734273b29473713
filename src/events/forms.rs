use crate::app::{self, SharedApp};
use crate::constants::*;
use crate::dom;
use crate::overlay;
use crate::status::{self, MessageKind};
use figurine_core::order::OrderForm;
use figurine_core::{OptionSet, PreviewError, ViewMode};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Raw option values as currently selected in the preview form.
#[derive(Clone, Debug, Default)]
struct FormSnapshot {
    gender: Option<String>,
    clothing: Option<String>,
    pose: Option<String>,
    color: Option<String>,
    accessories: Vec<String>,
}

impl FormSnapshot {
    fn read(document: &web::Document) -> Self {
        Self {
            gender: dom::select_value(document, GENDER_SELECT_ID),
            clothing: dom::select_value(document, CLOTHING_SELECT_ID),
            pose: dom::select_value(document, POSE_SELECT_ID),
            color: dom::select_value(document, COLOR_SELECT_ID),
            accessories: dom::checked_values(document, ACCESSORY_CHECKED_SELECTOR),
        }
    }

    fn is_complete(&self) -> bool {
        self.gender.is_some() && self.clothing.is_some() && self.pose.is_some() && self.color.is_some()
    }

    fn options(&self) -> OptionSet {
        OptionSet::from_form(
            self.gender.as_deref(),
            self.clothing.as_deref(),
            self.pose.as_deref(),
            self.color.as_deref(),
            self.accessories.iter().map(String::as_str),
        )
    }
}

/// Generate / toggle / edit / confirm buttons and the order form.
pub fn wire_page_controls(app: &SharedApp, document: &web::Document) {
    {
        let app = app.clone();
        let doc = document.clone();
        dom::add_click_listener(document, GENERATE_BUTTON_ID, move |ev| {
            ev.prevent_default();
            on_generate(&app, &doc);
        });
    }
    {
        let app = app.clone();
        let doc = document.clone();
        dom::add_listener(document, TOGGLE_3D_ID, "change", move |ev| {
            on_toggle(&app, &doc, &ev);
        });
    }
    {
        let app = app.clone();
        let doc = document.clone();
        dom::add_click_listener(document, EDIT_BUTTON_ID, move |_| on_edit(&app, &doc));
    }
    {
        let app = app.clone();
        let doc = document.clone();
        dom::add_click_listener(document, CONFIRM_BUTTON_ID, move |_| on_confirm(&app, &doc));
    }
    {
        let app = app.clone();
        let doc = document.clone();
        dom::add_listener(document, CONTACT_FORM_ID, "submit", move |ev| {
            ev.prevent_default();
            on_order_submit(&app, &doc);
        });
    }
}

fn on_generate(app: &SharedApp, document: &web::Document) {
    let file = dom::selected_file(document, PHOTO_INPUT_ID);
    let snapshot = FormSnapshot::read(document);
    let begun = app
        .borrow_mut()
        .preview
        .begin(file.is_some(), snapshot.is_complete());
    let file = match (begun, file) {
        (Ok(()), Some(file)) => file,
        (Err(e), _) => {
            log::debug!("[preview] generate rejected: {}", e);
            app::show_preview_status(
                app,
                document,
                status::preview_error_text(e),
                MessageKind::Error,
                None,
            );
            return;
        }
        (Ok(()), None) => return,
    };

    let options = snapshot.options();
    log::info!("[preview] generating with {:?}", options);
    app::show_preview_status(
        app,
        document,
        status::GENERATING_TEXT,
        MessageKind::Loading,
        None,
    );
    overlay::set_info_visible(document, false);
    if let Err(e) = read_photo(app.clone(), &file, options) {
        log::error!("[preview] photo read failed: {:?}", e);
        photo_failed(app, document);
    }
}

fn photo_failed(app: &SharedApp, document: &web::Document) {
    app.borrow_mut().preview.photo_failed();
    app::show_preview_status(
        app,
        document,
        status::preview_error_text(PreviewError::PhotoUnreadable),
        MessageKind::Error,
        None,
    );
}

fn read_photo(app: SharedApp, file: &web::File, options: OptionSet) -> anyhow::Result<()> {
    let reader = web::FileReader::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let reader_done = reader.clone();
    let app_err = app.clone();
    let onload = Closure::once_into_js(move || {
        let data_url = reader_done
            .result()
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default();
        spawn_local(app::finish_generate(app, data_url, options));
    });
    let onerror = Closure::once_into_js(move || {
        log::error!("[preview] FileReader reported an error");
        if let Some(document) = dom::window_document() {
            photo_failed(&app_err, &document);
        }
    });
    reader.set_onload(Some(onload.unchecked_ref()));
    reader.set_onerror(Some(onerror.unchecked_ref()));
    reader
        .read_as_data_url(file)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

fn on_toggle(app: &SharedApp, document: &web::Document, ev: &web::Event) {
    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
    else {
        return;
    };
    // checked means "show the photo"; 3D needs a live scene
    let mode = {
        let mut a = app.borrow_mut();
        let to_3d = !input.checked() && a.preview.scene.is_initialized();
        a.preview.toggle_mode(to_3d)
    };
    overlay::apply_mode(document, mode);
}

fn on_edit(app: &SharedApp, document: &web::Document) {
    app.borrow_mut().preview.edit();
    overlay::set_info_visible(document, false);
    overlay::apply_mode(document, ViewMode::Flat);
    if let Some(form) = document.get_element_by_id(PREVIEW_FORM_ID) {
        dom::scroll_into_view(&form);
    }
    app::show_preview_status(app, document, status::EDIT_TEXT, MessageKind::Loading, None);
}

fn on_confirm(app: &SharedApp, document: &web::Document) {
    let options = FormSnapshot::read(document).options();
    let photo = dom::selected_file(document, PHOTO_INPUT_ID)
        .map(|f| f.name())
        .unwrap_or_else(|| "uploaded_photo.jpg".to_string());
    let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
    log::info!(
        "[order] design confirmed: {:?} photo={} at {}",
        options,
        photo,
        timestamp
    );
    if let Ok(Some(section)) = document.query_selector(CONTACT_SECTION_SELECTOR) {
        dom::scroll_into_view(&section);
    }
    app::show_form_status(
        app,
        document,
        status::DESIGN_SAVED_TEXT,
        MessageKind::Success,
        ORDER_MESSAGE_MS,
    );
}

fn order_input(form: &web::HtmlFormElement, selector: &str, index: u32) -> String {
    dom::field_value_or_nth(form, selector, ORDER_INPUT_SELECTOR, index)
}

fn read_order(form: &web::HtmlFormElement) -> OrderForm {
    OrderForm {
        name: order_input(form, ORDER_NAME_SELECTOR, ORDER_NAME_INPUT_INDEX),
        email: order_input(form, ORDER_EMAIL_SELECTOR, ORDER_EMAIL_INPUT_INDEX),
        phone: order_input(form, ORDER_PHONE_SELECTOR, ORDER_PHONE_INPUT_INDEX),
        company: order_input(form, ORDER_COMPANY_SELECTOR, ORDER_COMPANY_INPUT_INDEX),
        figure_type: dom::field_value(form, ORDER_FIGURE_TYPE_SELECTOR),
        message: dom::field_value(form, ORDER_MESSAGE_SELECTOR),
    }
}

fn on_order_submit(app: &SharedApp, document: &web::Document) {
    let Some(form) = dom::element::<web::HtmlFormElement>(document, CONTACT_FORM_ID) else {
        return;
    };
    let order = read_order(&form);
    match order.validate() {
        Ok(()) => {
            log::info!("[order] received {:?}", order);
            app::show_form_status(
                app,
                document,
                status::ORDER_RECEIVED_TEXT,
                MessageKind::Success,
                ORDER_MESSAGE_MS,
            );
            form.reset();
        }
        Err(e) => {
            log::debug!("[order] rejected: {}", e);
            app::show_form_status(
                app,
                document,
                status::order_error_text(e),
                MessageKind::Error,
                ORDER_MESSAGE_MS,
            );
        }
    }
}
