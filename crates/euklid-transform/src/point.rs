use euklid_vector::{Vector2D, Vector3D};

/// A point with a fixed number of leading coordinates read by a [`Transform`](crate::Transform).
///
/// 2D points use the upper-left 2x2 block and the first two entries of the
/// translation row; 3D points use the 3x3 block and three entries.
///
/// The trait is sealed: only [`Vector2D`] and [`Vector3D`] implement it, so
/// `DIM` never reaches the homogeneous row or column.
///
/// ```compile_fail
/// use euklid_transform::HomogeneousPoint;
///
/// #[derive(Clone, Copy)]
/// struct Point4;
///
/// impl HomogeneousPoint for Point4 {
///     const DIM: usize = 4;
///
///     fn coord(&self, _index: usize) -> f64 {
///         0.0
///     }
///
///     fn from_coords(_coords: [f64; 3]) -> Self {
///         Point4
///     }
/// }
/// ```
pub trait HomogeneousPoint: private::Sealed + Copy {
    /// Number of coordinates, at most 3.
    const DIM: usize;

    /// Read coordinate `index`, with `index < DIM`.
    fn coord(&self, index: usize) -> f64;

    /// Build a point from its first `DIM` coordinates.
    fn from_coords(coords: [f64; 3]) -> Self;
}

mod private {
    /// Restricts [`HomogeneousPoint`](super::HomogeneousPoint) to the vector types of this crate.
    pub trait Sealed {}

    impl Sealed for euklid_vector::Vector2D {}
    impl Sealed for euklid_vector::Vector3D {}
}

impl HomogeneousPoint for Vector2D {
    const DIM: usize = Vector2D::DIM;

    #[inline]
    fn coord(&self, index: usize) -> f64 {
        self[index]
    }

    #[inline]
    fn from_coords(coords: [f64; 3]) -> Self {
        Vector2D::new(coords[0], coords[1])
    }
}

impl HomogeneousPoint for Vector3D {
    const DIM: usize = Vector3D::DIM;

    #[inline]
    fn coord(&self, index: usize) -> f64 {
        self[index]
    }

    #[inline]
    fn from_coords(coords: [f64; 3]) -> Self {
        Vector3D::from_array(coords)
    }
}
