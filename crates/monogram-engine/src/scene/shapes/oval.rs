use crate::coords::Vec2;

use super::Edges;

/// Ellipse inscribed in `edges`.
pub(super) fn covers(edges: Edges, p: Vec2) -> bool {
    let rx = edges.width() * 0.5;
    let ry = edges.height() * 0.5;
    let dx = (p.x - (edges.left + rx)) / rx;
    let dy = (p.y - (edges.top + ry)) / ry;
    dx * dx + dy * dy <= 1.0
}
