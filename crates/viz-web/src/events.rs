use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use viz_core::{command_for_key, InputEvent, VizApp};
use web_sys as web;

use crate::{controls, dom, input};

fn client_uv(canvas: &web::HtmlCanvasElement, x: i32, y: i32) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    input::normalize_client(
        Vec2::new(x as f32, y as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    )
}

fn first_touch_uv(canvas: &web::HtmlCanvasElement, ev: &web::TouchEvent) -> Option<Vec2> {
    ev.touches()
        .get(0)
        .map(|t| client_uv(canvas, t.client_x(), t.client_y()))
}

/// Mouse and touch listeners on the canvas, routed into the tracker.
pub fn wire_pointer(canvas: &web::HtmlCanvasElement, app: &Rc<RefCell<VizApp>>) {
    let mouse = |name: &str, map: fn(Vec2) -> InputEvent| {
        let app_m = app.clone();
        let canvas_m = canvas.clone();
        dom::add_listener(canvas, name, move |ev: web::MouseEvent| {
            let uv = client_uv(&canvas_m, ev.client_x(), ev.client_y());
            app_m.borrow_mut().handle_input(map(uv));
        });
    };
    mouse("mousemove", InputEvent::Move);
    mouse("mousedown", InputEvent::Down);
    mouse("mouseup", |_| InputEvent::Up);
    mouse("mouseenter", |_| InputEvent::Enter);
    mouse("mouseleave", |_| InputEvent::Leave);

    let touch = |name: &str, map: fn(Option<Vec2>) -> Option<InputEvent>| {
        let app_t = app.clone();
        let canvas_t = canvas.clone();
        dom::add_listener(canvas, name, move |ev: web::TouchEvent| {
            // keep the page from scrolling or synthesizing mouse events
            ev.prevent_default();
            if let Some(event) = map(first_touch_uv(&canvas_t, &ev)) {
                app_t.borrow_mut().handle_input(event);
            }
        });
    };
    touch("touchstart", |uv| uv.map(InputEvent::TouchStart));
    touch("touchmove", |uv| uv.map(InputEvent::TouchMove));
    touch("touchend", |_| Some(InputEvent::TouchEnd));
    touch("touchcancel", |_| Some(InputEvent::TouchEnd));
}

/// Global keyboard shortcuts.
pub fn wire_keyboard(document: &web::Document, app: &Rc<RefCell<VizApp>>) {
    let Some(window) = web::window() else {
        return;
    };
    let app_k = app.clone();
    let doc = document.clone();
    dom::add_listener(&window, "keydown", move |ev: web::KeyboardEvent| {
        if ev.repeat() || input::is_browser_chord(ev.ctrl_key(), ev.meta_key(), ev.alt_key()) {
            return;
        }
        let variant = app_k.borrow().variant();
        if let Some(cmd) = command_for_key(&ev.key(), variant) {
            controls::run_and_sync(&doc, &app_k, cmd);
            ev.prevent_default();
        }
    });
}

/// Refit the canvas on window resize and keep the resolution uniform in step.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, app: &Rc<RefCell<VizApp>>) {
    let Some(window) = web::window() else {
        return;
    };
    let app_r = app.clone();
    let canvas_r = canvas.clone();
    dom::add_listener(&window, "resize", move |_: web::Event| {
        if let Some(size) = dom::fit_canvas_element(&canvas_r) {
            app_r.borrow_mut().set_resolution(size.width, size.height);
        }
    });
}
