use crate::coords::Vec2;

use super::Edges;

#[inline]
pub(super) fn covers(edges: Edges, p: Vec2) -> bool {
    edges.contains(p)
}
