use crate::coords::Vec2;

use super::Edges;

/// Rounded rectangle; the radius is clamped to half the shorter side.
pub(super) fn covers(edges: Edges, radius: f32, p: Vec2) -> bool {
    if !edges.contains(p) {
        return false;
    }

    let r = radius.max(0.0).min(edges.width() * 0.5).min(edges.height() * 0.5);
    if r <= 0.0 {
        return true;
    }

    // Nearest point of the inner (radius-shrunk) rectangle; only the corner
    // regions end up farther than `r` from it.
    let cx = p.x.clamp(edges.left + r, edges.right - r);
    let cy = p.y.clamp(edges.top + r, edges.bottom - r);
    let dx = p.x - cx;
    let dy = p.y - cy;
    dx * dx + dy * dy <= r * r
}
