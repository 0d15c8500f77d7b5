use glam::Vec2;

/// Client-space point to canvas-relative [0,1] coordinates (y down).
/// A canvas without a layout box reports the rest position.
#[inline]
pub fn normalize_client(client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Vec2 {
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        ((client - rect_origin) / rect_size).clamp(Vec2::ZERO, Vec2::ONE)
    } else {
        Vec2::splat(0.5)
    }
}

/// Keys that must reach the browser untouched (reload, devtools, ...).
#[inline]
pub fn is_browser_chord(ctrl: bool, meta: bool, alt: bool) -> bool {
    ctrl || meta || alt
}
