use crate::error::GeometryError;
use crate::math::{Point2, Point3};

/// An arbitrary trapezoid, called Arb8 in GDML notation: two quadrilaterals
/// sitting on parallel planes at z = ±dz, joined by ruled side surfaces.
///
/// Vertices 1-4 define the quadrilateral at −dz and vertices 5-8 the one at
/// +dz. Coordinates and the half-height are stored verbatim; geometric
/// validity is checked when the solid is meshed, and the descriptor is
/// immutable after construction, so meshing is side-effect-free and
/// independent descriptors may be meshed on independent threads.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericTrap {
    name: String,
    vertices: [Point2; 8],
    dz: f64,
    nstack: usize,
}

impl GenericTrap {
    /// Default number of height-wise subdivisions.
    pub const DEFAULT_NSTACK: usize = 20;

    /// Creates a descriptor with the default subdivision count.
    #[must_use]
    pub fn new(name: impl Into<String>, vertices: [Point2; 8], dz: f64) -> Self {
        Self::with_nstack(name, vertices, dz, Self::DEFAULT_NSTACK)
    }

    /// Creates a descriptor with an explicit subdivision count.
    ///
    /// More subdivisions give a finer piecewise-planar approximation of
    /// twisted side surfaces at the cost of more polygons.
    #[must_use]
    pub fn with_nstack(
        name: impl Into<String>,
        vertices: [Point2; 8],
        dz: f64,
        nstack: usize,
    ) -> Self {
        Self {
            name: name.into(),
            vertices,
            dz,
            nstack,
        }
    }

    /// The solid's name, used as the unique key when registered.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Half-height along z.
    #[must_use]
    pub fn dz(&self) -> f64 {
        self.dz
    }

    /// Number of height-wise subdivisions used when meshing.
    #[must_use]
    pub fn nstack(&self) -> usize {
        self.nstack
    }

    /// Returns the 3D position of vertex `index` (1-based).
    ///
    /// Indices 1-4 sit at z = −dz, indices 5-8 at z = +dz.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::VertexIndexOutOfRange`] for indices outside
    /// 1..=8. Internal iteration never leaves that range, so hitting this
    /// from meshing indicates a defect in the caller.
    pub fn vertex(&self, index: usize) -> Result<Point3, GeometryError> {
        if !(1..=8).contains(&index) {
            return Err(GeometryError::VertexIndexOutOfRange { index });
        }
        let sign_z = if index <= 4 { -1.0 } else { 1.0 };
        let v = self.vertices[index - 1];
        Ok(Point3::new(v.x, v.y, sign_z * self.dz))
    }
}
