use super::{Point3, Vector3, TOLERANCE};
use crate::error::GeometryError;

/// Computes the unit normal of a planar polygon using Newell's method.
///
/// The normal follows the right-hand rule over the vertex order: a polygon
/// wound counter-clockwise when viewed from +z yields a normal with positive
/// z-component.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if the polygon has (near-)zero
/// area and no normal can be derived.
pub fn newell_normal(points: &[Point3]) -> Result<Vector3, GeometryError> {
    let n = points.len();
    let mut normal = Vector3::new(0.0, 0.0, 0.0);
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    let len = normal.norm();
    if len < TOLERANCE {
        return Err(GeometryError::Degenerate(
            "polygon has no well-defined normal".into(),
        ));
    }
    Ok(normal / len)
}
