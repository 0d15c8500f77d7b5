#![cfg(target_arch = "wasm32")]
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use viz_core::{GpuContext, Variant, VizApp};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub mod controls;
pub mod dom;
mod events;
mod frame;
mod input;

const CANVAS_ID: &str = "viz-canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("viz-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            // no fallback program; rendering stays halted
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Variant named by the canvas' `data-variant` attribute; flow when absent.
fn canvas_variant(canvas: &web::HtmlCanvasElement) -> Variant {
    match canvas.get_attribute("data-variant") {
        Some(name) => name.parse().unwrap_or_else(|e| {
            log::warn!("{}; using {}", e, Variant::default());
            Variant::default()
        }),
        None => Variant::default(),
    }
}

/// WebGPU when the browser can hand out an adapter, WebGL2 otherwise. A bare
/// `navigator.gpu` is not enough to pick WebGPU.
pub async fn gpu_instance() -> wgpu::Instance {
    wgpu::util::new_instance_with_webgpu_detection(&wgpu::InstanceDescriptor::default()).await
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let variant = canvas_variant(&canvas);
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let app = Rc::new(RefCell::new(VizApp::new(variant, seed)));

    let (width, height) = match dom::fit_canvas_element(&canvas) {
        Some(size) => (size.width, size.height),
        None => (canvas.width().max(1), canvas.height().max(1)),
    };
    app.borrow_mut().set_resolution(width, height);

    let instance = gpu_instance().await;
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
    let gpu = GpuContext::new(&instance, surface, width, height, variant).await?;

    controls::wire_sliders(&document, &app);
    controls::wire_buttons(&document, &app);
    controls::sync_controls(&document, &app.borrow());
    events::wire_pointer(&canvas, &app);
    events::wire_keyboard(&document, &app);
    events::wire_resize(&canvas, &app);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app,
        canvas,
        gpu,
        running: Rc::new(Cell::new(true)),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
