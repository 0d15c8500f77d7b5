//! Slider, preset and pattern wiring for the control panel.
//!
//! Every lookup is fail-soft: a missing element is logged once at wiring time
//! and the rest of the panel keeps working.

use std::cell::RefCell;
use std::rc::Rc;

use viz_core::{Command, SignalId, SignalSource, SignalSpec, VizApp};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

fn display_id(id: SignalId) -> String {
    format!("{}Value", id.control_id())
}

fn set_display(document: &web::Document, spec: &SignalSpec, value: f32) {
    if let Some(el) = document.get_element_by_id(&display_id(spec.id)) {
        el.set_text_content(Some(&spec.format(value)));
    }
}

/// Push the store's current control values back into the sliders and their
/// displays, e.g. after a preset or reset.
pub fn sync_controls(document: &web::Document, app: &VizApp) {
    let params = app.params();
    for spec in app.variant().controls() {
        let value = params.scalar(spec.id);
        if let Some(input) = document
            .get_element_by_id(spec.id.control_id())
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        {
            input.set_value(&value.to_string());
        }
        set_display(document, spec, value);
    }
    if let Some(pattern) = params.pattern() {
        for button in dom::query_all(document, "[data-pattern]") {
            let active = button.dataset().get("pattern").as_deref() == Some(pattern.name());
            let _ = button.class_list().toggle_with_force("active", active);
        }
    }
}

/// Wire one `input` listener per slider of the app's variant.
pub fn wire_sliders(document: &web::Document, app: &Rc<RefCell<VizApp>>) {
    let variant = app.borrow().variant();
    for spec in variant.controls().filter(|s| s.source == SignalSource::Slider) {
        let Some(input) = dom::element_by_id::<web::HtmlInputElement>(document, spec.id.control_id())
        else {
            continue;
        };
        if document.get_element_by_id(&display_id(spec.id)).is_none() {
            log::warn!("[controls] #{} not found", display_id(spec.id));
        }
        let app_in = app.clone();
        let doc = document.clone();
        let target = input.clone();
        dom::add_listener(&input, "input", move |_: web::Event| {
            let Ok(raw) = target.value().parse::<f32>() else {
                log::debug!("[controls] non-numeric {} value", spec.id.control_id());
                return;
            };
            if let Some(stored) = app_in.borrow_mut().set_control(spec.id, raw) {
                set_display(&doc, spec, stored);
            }
        });
    }
}

/// Buttons carrying `data-preset="<name>"` / `data-pattern="<name>"`, plus the
/// `#reset` and `#randomize` buttons.
pub fn wire_buttons(document: &web::Document, app: &Rc<RefCell<VizApp>>) {
    for button in dom::query_all(document, "[data-preset]") {
        let Some(name) = button.dataset().get("preset") else {
            continue;
        };
        let app_b = app.clone();
        let doc = document.clone();
        dom::add_click_listener(&button, move || {
            let mut app = app_b.borrow_mut();
            if app.apply_preset_named(&name).is_some() {
                sync_controls(&doc, &app);
            }
        });
    }

    for button in dom::query_all(document, "[data-pattern]") {
        let Some(name) = button.dataset().get("pattern") else {
            continue;
        };
        let app_b = app.clone();
        let doc = document.clone();
        dom::add_click_listener(&button, move || {
            let mut app = app_b.borrow_mut();
            if app.select_pattern_named(&name).is_some() {
                sync_controls(&doc, &app);
            }
        });
    }

    for (id, cmd) in [("reset", Command::Reset), ("randomize", Command::Randomize)] {
        let Some(button) = dom::element_by_id::<web::HtmlElement>(document, id) else {
            continue;
        };
        let app_b = app.clone();
        let doc = document.clone();
        dom::add_click_listener(&button, move || run_and_sync(&doc, &app_b, cmd));
    }
}

pub fn run_and_sync(document: &web::Document, app: &Rc<RefCell<VizApp>>, cmd: Command) {
    let mut app = app.borrow_mut();
    app.run(cmd);
    sync_controls(document, &app);
}
