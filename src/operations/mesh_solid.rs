use tracing::debug;

use crate::error::{OperationError, Result};
use crate::math::polygon_2d::normalize_winding;
use crate::math::Point3;
use crate::mesh::{Mesh, Polygon, Vertex};
use crate::solid::GenericTrap;

/// Builds the closed boundary mesh of a [`GenericTrap`] solid.
///
/// The two end quadrilaterals are winding-normalized, the volume between
/// them is subdivided into `nstack` horizontal slabs by linearly
/// interpolating the four corners, and the result is assembled into a
/// bottom cap, a top cap, and a ring of side quads per slab. Every build
/// recomputes the mesh from the stored coordinates; nothing is cached and
/// the descriptor is never mutated.
pub struct MeshSolid<'a> {
    solid: &'a GenericTrap,
}

impl<'a> MeshSolid<'a> {
    /// Creates a new `MeshSolid` operation.
    #[must_use]
    pub fn new(solid: &'a GenericTrap) -> Self {
        Self { solid }
    }

    /// Executes the operation, returning the boundary mesh.
    ///
    /// The mesh holds exactly `2 + 4 * nstack` polygons. Either the full
    /// closed polygon set is produced or the build fails before any polygon
    /// is emitted; no partial meshes are returned.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`](crate::error::GeometryError::Degenerate)
    /// if either end quadrilateral has zero area, or
    /// [`OperationError::InvalidInput`] if `dz <= 0` or `nstack == 0`.
    pub fn execute(&self) -> Result<Mesh> {
        let dz = self.solid.dz();
        let nstack = self.solid.nstack();

        if dz <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "half-height dz must be positive, got {dz}"
            ))
            .into());
        }
        if nstack == 0 {
            return Err(
                OperationError::InvalidInput("nstack must be at least 1".into()).into(),
            );
        }

        debug!(solid = self.solid.name(), nstack, "meshing generic trapezoid");

        let mut bottom = [Point3::origin(); 4];
        let mut top = [Point3::origin(); 4];
        for (k, (bot, up)) in bottom.iter_mut().zip(top.iter_mut()).enumerate() {
            *bot = self.solid.vertex(k + 1)?;
            *up = self.solid.vertex(k + 5)?;
        }

        // Both end quads counter-clockwise so caps and side walls come out
        // with outward normals.
        let bottom = normalize_winding(bottom)?;
        let top = normalize_winding(top)?;

        let layers = build_layers(&bottom, &top, dz, nstack);

        let mut polygons = Vec::with_capacity(2 + 4 * nstack);

        // Bottom cap in reverse order: normal faces -z.
        let first = &layers[0];
        polygons.push(Polygon::new(vec![
            Vertex::new(first[3]),
            Vertex::new(first[2]),
            Vertex::new(first[1]),
            Vertex::new(first[0]),
        ])?);

        // Top cap in forward order: normal faces +z.
        let last = &layers[nstack];
        polygons.push(Polygon::new(vec![
            Vertex::new(last[0]),
            Vertex::new(last[1]),
            Vertex::new(last[2]),
            Vertex::new(last[3]),
        ])?);

        // Side walls: one quad per edge between each adjacent layer pair.
        for pair in layers.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            for k in 0..4 {
                let k1 = (k + 1) % 4;
                polygons.push(Polygon::new(vec![
                    Vertex::new(lower[k]),
                    Vertex::new(lower[k1]),
                    Vertex::new(upper[k1]),
                    Vertex::new(upper[k]),
                ])?);
            }
        }

        debug!(polygons = polygons.len(), "assembled boundary mesh");
        Ok(Mesh::from_polygons(polygons))
    }
}

/// Interpolates the `nstack + 1` horizontal layers between the end quads.
///
/// Each side of the solid is treated as a ruled surface between
/// corresponding bottom and top corners, sampled at evenly spaced heights.
/// Layer 0 reproduces the bottom quad exactly and layer `nstack` the top
/// quad; intermediate layers approximate twisted sides piecewise-planar.
#[allow(clippy::cast_precision_loss)]
fn build_layers(
    bottom: &[Point3; 4],
    top: &[Point3; 4],
    dz: f64,
    nstack: usize,
) -> Vec<[Point3; 4]> {
    let mut layers = Vec::with_capacity(nstack + 1);
    for i in 0..=nstack {
        // Normalized height: 0 at the bottom plane, 1 at the top plane.
        let t = i as f64 / nstack as f64;
        let z = -dz + t * (2.0 * dz);

        let mut layer = [Point3::origin(); 4];
        for (corner, (bot, up)) in layer.iter_mut().zip(bottom.iter().zip(top.iter())) {
            *corner = Point3::new(
                bot.x + t * (up.x - bot.x),
                bot.y + t * (up.y - bot.y),
                z,
            );
        }
        layers.push(layer);
    }
    layers
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point2, TOLERANCE};

    fn p2(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    /// Unit square at the bottom, 2x2 square at the top, dz = 1.
    fn tapered_block(nstack: usize) -> GenericTrap {
        GenericTrap::with_nstack(
            "tapered",
            [
                p2(0.0, 0.0),
                p2(1.0, 0.0),
                p2(1.0, 1.0),
                p2(0.0, 1.0),
                p2(0.0, 0.0),
                p2(2.0, 0.0),
                p2(2.0, 2.0),
                p2(0.0, 2.0),
            ],
            1.0,
            nstack,
        )
    }

    // ── polygon counts ─────────────────────────────────────────

    #[test]
    fn polygon_count_matches_nstack() {
        for nstack in [1, 2, 5, 20] {
            let mesh = MeshSolid::new(&tapered_block(nstack)).execute().unwrap();
            assert_eq!(mesh.polygon_count(), 2 + 4 * nstack);
        }
    }

    #[test]
    fn end_to_end_single_slab() {
        let solid = tapered_block(1);
        let mesh = MeshSolid::new(&solid).execute().unwrap();
        assert_eq!(mesh.polygon_count(), 6);

        let bottom = &mesh.polygons()[0];
        for v in bottom.vertices() {
            assert!((v.pos.z + 1.0).abs() < TOLERANCE);
        }
        let top = &mesh.polygons()[1];
        for v in top.vertices() {
            assert!((v.pos.z - 1.0).abs() < TOLERANCE);
        }
    }

    // ── orientation ────────────────────────────────────────────

    #[test]
    fn caps_face_outward() {
        let mesh = MeshSolid::new(&tapered_block(3)).execute().unwrap();
        let bottom_normal = mesh.polygons()[0].normal().unwrap();
        let top_normal = mesh.polygons()[1].normal().unwrap();
        assert!(bottom_normal.z < 0.0);
        assert!(top_normal.z > 0.0);
    }

    #[test]
    fn clockwise_input_meshes_like_counter_clockwise() {
        let ccw = tapered_block(2);
        let cw = GenericTrap::with_nstack(
            "tapered",
            [
                // Both quads supplied clockwise.
                p2(0.0, 1.0),
                p2(1.0, 1.0),
                p2(1.0, 0.0),
                p2(0.0, 0.0),
                p2(0.0, 2.0),
                p2(2.0, 2.0),
                p2(2.0, 0.0),
                p2(0.0, 0.0),
            ],
            1.0,
            2,
        );
        let mesh_ccw = MeshSolid::new(&ccw).execute().unwrap();
        let mesh_cw = MeshSolid::new(&cw).execute().unwrap();
        assert!(mesh_cw.polygons()[0].normal().unwrap().z < 0.0);
        assert!(mesh_cw.polygons()[1].normal().unwrap().z > 0.0);
        // Normalization makes the two descriptions mesh identically.
        assert_eq!(mesh_ccw, mesh_cw);
    }

    #[test]
    fn side_walls_face_outward() {
        // Straight prism over the unit square, centered on the origin.
        let solid = GenericTrap::with_nstack(
            "prism",
            [
                p2(-0.5, -0.5),
                p2(0.5, -0.5),
                p2(0.5, 0.5),
                p2(-0.5, 0.5),
                p2(-0.5, -0.5),
                p2(0.5, -0.5),
                p2(0.5, 0.5),
                p2(-0.5, 0.5),
            ],
            1.0,
            1,
        );
        let mesh = MeshSolid::new(&solid).execute().unwrap();
        for side in &mesh.polygons()[2..] {
            let normal = side.normal().unwrap();
            // Outward on a centered prism: the normal points away from the
            // z axis through the face's centroid.
            let mut cx = 0.0;
            let mut cy = 0.0;
            for v in side.vertices() {
                cx += v.pos.x;
                cy += v.pos.y;
            }
            assert!(normal.x * cx + normal.y * cy > 0.0);
            assert!(normal.z.abs() < TOLERANCE);
        }
    }

    // ── interpolation ──────────────────────────────────────────

    #[test]
    fn middle_layer_is_arithmetic_mean() {
        let solid = tapered_block(2);
        let mesh = MeshSolid::new(&solid).execute().unwrap();

        // With nstack = 2 the lower ring of side quads has its upper edge
        // on the middle layer. Corner 2 goes from (1, 1) at the bottom to
        // (2, 2) at the top, so its midpoint is (1.5, 1.5) at z = 0.
        let side = &mesh.polygons()[3];
        let lower = side.vertices()[1].pos;
        let upper = side.vertices()[2].pos;
        assert!((lower.x - 1.0).abs() < TOLERANCE);
        assert!((lower.y - 1.0).abs() < TOLERANCE);
        assert!(upper.z.abs() < TOLERANCE);
        assert!((upper.x - 1.5).abs() < TOLERANCE);
        assert!((upper.y - 1.5).abs() < TOLERANCE);
    }

    #[test]
    fn layer_endpoints_reproduce_end_quads() {
        let bottom = [
            Point3::new(0.3, 0.7, -2.0),
            Point3::new(1.3, 0.7, -2.0),
            Point3::new(1.3, 1.7, -2.0),
            Point3::new(0.3, 1.7, -2.0),
        ];
        let top = [
            Point3::new(-1.0, 0.0, 2.0),
            Point3::new(2.0, 0.0, 2.0),
            Point3::new(2.0, 3.0, 2.0),
            Point3::new(-1.0, 3.0, 2.0),
        ];
        let layers = build_layers(&bottom, &top, 2.0, 7);
        assert_eq!(layers.len(), 8);
        assert_eq!(layers[0], bottom);
        assert_eq!(layers[7], top);
    }

    // ── validation ─────────────────────────────────────────────

    #[test]
    fn collinear_bottom_quad_is_degenerate() {
        let solid = GenericTrap::new(
            "flat",
            [
                p2(0.0, 0.0),
                p2(1.0, 0.0),
                p2(2.0, 0.0),
                p2(3.0, 0.0),
                p2(0.0, 0.0),
                p2(1.0, 0.0),
                p2(1.0, 1.0),
                p2(0.0, 1.0),
            ],
            1.0,
        );
        assert!(MeshSolid::new(&solid).execute().is_err());
    }

    #[test]
    fn collinear_top_quad_is_degenerate() {
        let solid = GenericTrap::new(
            "flat",
            [
                p2(0.0, 0.0),
                p2(1.0, 0.0),
                p2(1.0, 1.0),
                p2(0.0, 1.0),
                p2(0.0, 0.0),
                p2(1.0, 0.0),
                p2(2.0, 0.0),
                p2(3.0, 0.0),
            ],
            1.0,
        );
        assert!(MeshSolid::new(&solid).execute().is_err());
    }

    #[test]
    fn non_positive_dz_rejected() {
        let flat = GenericTrap::with_nstack(
            "flat",
            [
                p2(0.0, 0.0),
                p2(1.0, 0.0),
                p2(1.0, 1.0),
                p2(0.0, 1.0),
                p2(0.0, 0.0),
                p2(1.0, 0.0),
                p2(1.0, 1.0),
                p2(0.0, 1.0),
            ],
            0.0,
            1,
        );
        assert!(MeshSolid::new(&flat).execute().is_err());
    }

    #[test]
    fn zero_nstack_rejected() {
        assert!(MeshSolid::new(&tapered_block(0)).execute().is_err());
    }

    // ── determinism ────────────────────────────────────────────

    #[test]
    fn repeated_builds_are_identical() {
        let solid = tapered_block(4);
        let first = MeshSolid::new(&solid).execute().unwrap();
        let second = MeshSolid::new(&solid).execute().unwrap();
        assert_eq!(first, second);
    }
}
