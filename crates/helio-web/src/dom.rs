//! DOM glue for the control panel, tooltip, and pointer listeners.
//!
//! The host page guarantees the consumed elements exist (controls
//! container, pause button, theme button), so lookups use `expect`; a
//! missing element is a host-page bug, not a recoverable condition.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, MouseEvent};

fn window() -> web_sys::Window {
    web_sys::window().expect("no window")
}

fn document() -> Document {
    window().document().expect("no document")
}

fn body() -> HtmlElement {
    document().body().expect("document has no body")
}

/// Viewport size in CSS pixels.
pub fn viewport_size() -> (f64, f64) {
    let w = window();
    (
        w.inner_width().expect("inner_width").as_f64().unwrap_or(0.0),
        w.inner_height().expect("inner_height").as_f64().unwrap_or(0.0),
    )
}

/// Look up a host-provided element by id.
pub fn element(id: &str) -> HtmlElement {
    document()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("missing required element #{id}"))
        .dyn_into::<HtmlElement>()
        .expect("element is not an HtmlElement")
}

/// Set an element's text content (button labels).
pub fn set_label(id: &str, text: &str) {
    element(id).set_text_content(Some(text));
}

/// Attach a permanent click handler to an element.
pub fn on_click(id: &str, f: Box<dyn Fn()>) {
    let handler = Closure::<dyn FnMut()>::new(move || f());
    element(id)
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .expect("attach click listener");
    handler.forget();
}

/// Append one labeled range input plus a line break to the controls
/// container. `on_input` receives the parsed slider value.
pub fn append_speed_slider(
    controls: &HtmlElement,
    label_text: &str,
    min: f32,
    max: f32,
    step: f32,
    value: f32,
    on_input: Box<dyn Fn(f32)>,
) {
    let doc = document();

    let label = doc.create_element("label").expect("create label");
    label.set_text_content(Some(label_text));

    let slider = doc
        .create_element("input")
        .expect("create input")
        .dyn_into::<HtmlInputElement>()
        .expect("input element");
    slider.set_type("range");
    slider.set_min(&min.to_string());
    slider.set_max(&max.to_string());
    slider.set_step(&step.to_string());
    slider.set_value(&value.to_string());

    let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let Some(target) = event.target() else { return };
        let Ok(input) = target.dyn_into::<HtmlInputElement>() else { return };
        if let Ok(v) = input.value().parse::<f32>() {
            on_input(v);
        }
    });
    slider
        .add_event_listener_with_callback("input", handler.as_ref().unchecked_ref())
        .expect("attach input listener");
    handler.forget();

    controls.append_child(&label).expect("append label");
    controls.append_child(&slider).expect("append slider");
    let br = doc.create_element("br").expect("create br");
    controls.append_child(&br).expect("append br");
}

/// Theme palettes, applied to the document body and every button.
const DARK: (&str, &str, &str, &str) = ("black", "white", "#222", "#fff");
const LIGHT: (&str, &str, &str, &str) = ("white", "black", "#eee", "#000");
const BUTTON_BORDER: &str = "1px solid #888";

/// Restyle the document for the given theme.
pub fn apply_theme(dark: bool) {
    let (bg, fg, button_bg, button_fg) = if dark { DARK } else { LIGHT };

    let style = body().style();
    style.set_property("background-color", bg).expect("body background");
    style.set_property("color", fg).expect("body color");

    let buttons = document().query_selector_all("button").expect("query buttons");
    for i in 0..buttons.length() {
        let Some(node) = buttons.item(i) else { continue };
        let Ok(button) = node.dyn_into::<HtmlElement>() else { continue };
        let style = button.style();
        style.set_property("background-color", button_bg).expect("button background");
        style.set_property("color", button_fg).expect("button color");
        style.set_property("border", BUTTON_BORDER).expect("button border");
    }
}

/// Tooltip overlay, created hidden and shown at a fixed screen position
/// (viewport center, nudged 20px right) rather than at the cursor.
pub struct Tooltip {
    el: HtmlElement,
}

impl Tooltip {
    /// Create the overlay and append it to the document body.
    pub fn mount() -> Self {
        let el = document()
            .create_element("div")
            .expect("create tooltip")
            .dyn_into::<HtmlElement>()
            .expect("tooltip element");
        el.set_class_name("tooltip");
        el.style().set_property("display", "none").expect("hide tooltip");
        body().append_child(&el).expect("append tooltip");
        Self { el }
    }

    pub fn show(&self, text: &str) {
        let (w, h) = viewport_size();
        self.el.set_text_content(Some(text));
        let style = self.el.style();
        style.set_property("display", "block").expect("show tooltip");
        style
            .set_property("top", &format!("{}px", h / 2.0))
            .expect("tooltip top");
        style
            .set_property("left", &format!("{}px", w / 2.0 + 20.0))
            .expect("tooltip left");
    }

    pub fn hide(&self) {
        self.el.style().set_property("display", "none").expect("hide tooltip");
    }
}

/// Window-level pointer-move listener; coordinates are delivered as
/// normalized device coordinates.
pub fn on_pointer_move_ndc(f: Box<dyn Fn(f32, f32)>) {
    window_mouse_listener("mousemove", f);
}

/// Window-level click listener; coordinates are delivered as normalized
/// device coordinates.
pub fn on_click_ndc(f: Box<dyn Fn(f32, f32)>) {
    window_mouse_listener("click", f);
}

fn window_mouse_listener(event_name: &str, f: Box<dyn Fn(f32, f32)>) {
    let handler = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let (w, h) = viewport_size();
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let x = (event.client_x() as f64 / w) * 2.0 - 1.0;
        let y = -(event.client_y() as f64 / h) * 2.0 + 1.0;
        f(x as f32, y as f32);
    });
    window()
        .add_event_listener_with_callback(event_name, handler.as_ref().unchecked_ref())
        .expect("attach pointer listener");
    handler.forget();
}
