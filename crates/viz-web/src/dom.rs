use glam::Vec2;
use viz_core::{fit_canvas, CanvasSize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Typed lookup by id. Missing or mistyped elements are logged and skipped.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    match document.get_element_by_id(id) {
        Some(el) => match el.dyn_into::<T>() {
            Ok(t) => Some(t),
            Err(_) => {
                log::warn!("[dom] #{} has an unexpected element type", id);
                None
            }
        },
        None => {
            log::warn!("[dom] #{} not found", id);
            None
        }
    }
}

/// Every element matching `selector`, as `HtmlElement`s.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn add_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(_)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn add_click_listener(element: &web::HtmlElement, mut handler: impl FnMut() + 'static) {
    add_listener(element, "click", move |_: web::MouseEvent| handler());
}

/// Size the canvas with the shared fit heuristic and return the new backing
/// size. The container is the canvas' parent element.
pub fn fit_canvas_element(canvas: &web::HtmlCanvasElement) -> Option<CanvasSize> {
    let window = web::window()?;
    let viewport = Vec2::new(
        window.inner_width().ok()?.as_f64()? as f32,
        window.inner_height().ok()?.as_f64()? as f32,
    );
    let container = match canvas.parent_element() {
        Some(parent) => {
            let rect = parent.get_bounding_client_rect();
            Some(Vec2::new(rect.width() as f32, rect.height() as f32))
        }
        None => {
            log::warn!("[dom] canvas has no container");
            None
        }
    };
    let size = fit_canvas(viewport, container, window.device_pixel_ratio());
    canvas.set_width(size.width.max(1));
    canvas.set_height(size.height.max(1));
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{}px", size.css.x));
    let _ = style.set_property("height", &format!("{}px", size.css.y));
    Some(size)
}
