use crate::error::{GeometryError, OperationError};
use crate::math::polygon_3d::newell_normal;
use crate::math::{Point3, Vector3};

/// A mesh vertex: a position plus a normal slot reserved for the CSG
/// engine's bookkeeping.
///
/// This crate always emits vertices with the slot unset; the boolean engine
/// fills it in when splitting and re-joining polygons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in 3D space.
    pub pos: Point3,
    /// Reserved for the consuming mesh library; never set by this crate.
    pub normal: Option<Vector3>,
}

impl Vertex {
    /// Creates a vertex at `pos` with the bookkeeping slot unset.
    #[must_use]
    pub fn new(pos: Point3) -> Self {
        Self { pos, normal: None }
    }
}

/// A planar face: an ordered loop of at least 3 vertices.
///
/// The cyclic vertex order encodes the outward-facing normal by the
/// right-hand rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vertex>,
}

impl Polygon {
    /// Creates a polygon from an ordered vertex loop.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if fewer than 3 vertices
    /// are supplied.
    pub fn new(vertices: Vec<Vertex>) -> Result<Self, OperationError> {
        if vertices.len() < 3 {
            return Err(OperationError::InvalidInput(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        Ok(Self { vertices })
    }

    /// The ordered vertex loop.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Unit normal implied by the vertex order (Newell's method).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the loop encloses no area.
    pub fn normal(&self) -> Result<Vector3, GeometryError> {
        let points: Vec<Point3> = self.vertices.iter().map(|v| v.pos).collect();
        newell_normal(&points)
    }
}

/// A closed boundary mesh: the polygon soup handed to the CSG boolean
/// engine.
///
/// Construction from a polygon list is the engine-facing contract; the mesh
/// owns its polygons and they own their vertices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    polygons: Vec<Polygon>,
}

impl Mesh {
    /// Builds a mesh from an ordered polygon list.
    #[must_use]
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// The polygons enclosing the solid's volume.
    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Number of polygons in the mesh.
    #[must_use]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Whether the mesh contains no polygons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}
