use super::{Point3, TOLERANCE};
use crate::error::GeometryError;

/// Computes the signed area of a polygon in the XY plane (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise (viewed from +z).
/// The z coordinates are ignored, so this works directly on an end-plane
/// quadrilateral sitting at any height.
#[must_use]
pub fn signed_area_2d(points: &[Point3]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Signed area of an end-plane quadrilateral, rejecting degenerate input.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] when the area is zero (collinear
/// or coincident corners).
pub fn quad_signed_area(quad: &[Point3; 4]) -> Result<f64, GeometryError> {
    let area = signed_area_2d(quad);
    if area.abs() < TOLERANCE {
        return Err(GeometryError::Degenerate(
            "zero-area quadrilateral".into(),
        ));
    }
    Ok(area)
}

/// Reorders an end-plane quadrilateral counter-clockwise (viewed from +z).
///
/// Clockwise input is reversed, counter-clockwise input passes through
/// unchanged. With both end quads counter-clockwise, cap and side-wall
/// assembly produces outward-facing normals.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] when the quadrilateral has zero
/// area; meshing a solid with such an end plane is fatal for that build.
pub fn normalize_winding(mut quad: [Point3; 4]) -> Result<[Point3; 4], GeometryError> {
    if quad_signed_area(&quad)? < 0.0 {
        quad.reverse();
    }
    Ok(quad)
}
