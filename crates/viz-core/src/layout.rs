//! Canvas sizing heuristic shared by the web front end and its tests.

use glam::Vec2;

pub const MOBILE_BREAKPOINT: f32 = 768.0;
pub const MOBILE_HEIGHT_FRACTION: f32 = 0.6;
pub const MOBILE_MARGIN: f32 = 20.0;
pub const PANEL_WIDTH: f32 = 380.0;
pub const DESKTOP_MARGIN: f32 = 40.0;
pub const CONTAINER_BORDER: f32 = 4.0;
pub const CANVAS_ASPECT: f32 = 16.0 / 10.0;
pub const MIN_CANVAS: Vec2 = Vec2::new(400.0, 300.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    /// Display size in CSS pixels.
    pub css: Vec2,
    /// Backing-store size in device pixels.
    pub width: u32,
    pub height: u32,
}

/// Largest 16:10 rectangle that fits the viewport, minus the controls panel on
/// desktop, and inside the container when it has a layout box.
pub fn fit_canvas(viewport: Vec2, container: Option<Vec2>, dpr: f64) -> CanvasSize {
    let (mut max_w, mut max_h) = if viewport.x <= MOBILE_BREAKPOINT {
        (viewport.x - MOBILE_MARGIN, viewport.y * MOBILE_HEIGHT_FRACTION)
    } else {
        (viewport.x - PANEL_WIDTH, viewport.y - DESKTOP_MARGIN)
    };
    if let Some(c) = container.filter(|c| c.x > 0.0 && c.y > 0.0) {
        max_w = max_w.min(c.x - CONTAINER_BORDER);
        max_h = max_h.min(c.y - CONTAINER_BORDER);
    }

    let mut w = max_w;
    let mut h = w / CANVAS_ASPECT;
    if h > max_h {
        h = max_h;
        w = h * CANVAS_ASPECT;
    }
    let css = Vec2::new(w, h).max(MIN_CANVAS);

    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    CanvasSize {
        css,
        width: (css.x as f64 * dpr).floor() as u32,
        height: (css.y as f64 * dpr).floor() as u32,
    }
}
