use std::cell::{Cell, RefCell};
use std::rc::Rc;

use viz_core::{GpuContext, VizApp};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

pub struct FrameContext {
    pub app: Rc<RefCell<VizApp>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: GpuContext<'static>,
    /// Cleared to stop the loop; checked at the top of every tick.
    pub running: Rc<Cell<bool>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut app = self.app.borrow_mut();
        app.frame();

        // Keep the surface sized to the canvas backing store
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        match self.gpu.render(app.params()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.gpu.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[frame] out of GPU memory; stopping");
                self.running.set(false);
            }
            Err(e) => log::warn!("[frame] render error: {:?}", e),
        }
    }
}

/// Drive `frame` from `requestAnimationFrame` until `running` is cleared.
/// Page teardown (`pagehide`) clears it as well.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let running = frame_ctx.borrow().running.clone();
    if let Some(w) = web::window() {
        let flag = running.clone();
        dom::add_listener(&w, "pagehide", move |_: web::Event| flag.set(false));
    }

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            log::info!("[frame] loop stopped");
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
