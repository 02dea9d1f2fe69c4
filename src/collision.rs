//! Player versus terrain collision detection.

use crate::geometry::Aabb;
use crate::terrain::TerrainField;

/// True when `hitbox` overlaps any terrain rectangle. Stops at the first hit.
pub fn check(hitbox: &Aabb, field: &TerrainField) -> bool {
    field.rects().any(|rect| hitbox.intersects(rect))
}
