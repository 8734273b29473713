use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn element<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    add_listener(document, element_id, "click", handler);
}

pub fn add_listener(
    document: &web::Document,
    element_id: &str,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            let closure =
                Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
            _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            closure.forget();
        }
        None => log::warn!("[dom] #{} not found; {} not wired", element_id, event),
    }
}

/// `style.display` toggle; `block` when shown.
pub fn set_displayed(document: &web::Document, id: &str, shown: bool) {
    if let Some(el) = element::<web::HtmlElement>(document, id) {
        _ = el
            .style()
            .set_property("display", if shown { "block" } else { "none" });
    }
}

/// Value of a `<select>`, `None` when missing or empty.
pub fn select_value(document: &web::Document, id: &str) -> Option<String> {
    element::<web::HtmlSelectElement>(document, id)
        .map(|s| s.value())
        .filter(|v| !v.trim().is_empty())
}

pub fn checked_values(document: &web::Document, selector: &str) -> Vec<String> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlInputElement>().ok())
        .map(|input| input.value())
        .collect()
}

/// First selected file of an `<input type=file>`.
pub fn selected_file(document: &web::Document, id: &str) -> Option<web::File> {
    element::<web::HtmlInputElement>(document, id)
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

/// Value of a form control under `form`, read through whichever input type
/// matches.
pub fn field_value(form: &web::HtmlFormElement, selector: &str) -> String {
    match form.query_selector(selector) {
        Ok(Some(el)) => control_value(&el),
        _ => String::new(),
    }
}

/// Like [`field_value`], falling back to the `index`-th match of
/// `fallback` when `selector` finds nothing.
pub fn field_value_or_nth(
    form: &web::HtmlFormElement,
    selector: &str,
    fallback: &str,
    index: u32,
) -> String {
    if let Ok(Some(el)) = form.query_selector(selector) {
        return control_value(&el);
    }
    form.query_selector_all(fallback)
        .ok()
        .and_then(|list| list.item(index))
        .and_then(|node| node.dyn_into::<web::Element>().ok())
        .map(|el| control_value(&el))
        .unwrap_or_default()
}

fn control_value(el: &web::Element) -> String {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

pub fn scroll_into_view(el: &web::Element) {
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

/// CSS width of the canvas container, falling back to the canvas itself.
pub fn container_width(canvas: &web::HtmlCanvasElement) -> u32 {
    let width = canvas
        .parent_element()
        .map(|p| p.client_width())
        .filter(|w| *w > 0)
        .unwrap_or_else(|| canvas.client_width());
    width.max(1) as u32
}
