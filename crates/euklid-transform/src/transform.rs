use euklid_vector::Vector3D;

use crate::{HomogeneousPoint, NumericTol, TransformError};

/// A 4x4 homogeneous affine transform in double precision.
///
/// The matrix is stored row-major. The upper-left 3x3 block holds the
/// rotation and scale, the last row holds the translation and the corner
/// element `[3][3]` is 1. A point `p` is mapped as
///
/// ```text
/// p'[i] = m[3][i] + sum_j m[i][j] * p[j]
/// ```
///
/// so the linear block is indexed as (output `i`, input `j`) while the
/// offset is read from the last row.
///
/// Example:
///
/// ```
/// use euklid_transform::{Transform, Vector3D};
///
/// let shift = Transform::translation(Vector3D::new(1.0, 0.0, 0.0));
/// let grow = Transform::scale(2.0);
/// let p = shift.chain(&grow).apply(Vector3D::new(1.0, 1.0, 1.0));
/// assert_eq!(p, Vector3D::new(4.0, 2.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: [[f64; 4]; 4],
}

impl Transform {
    /// The zero linear map with the homogeneous corner set.
    ///
    /// This is scratch state for the factories, not a usable transform.
    pub(crate) fn zeroed() -> Self {
        let mut matrix = [[0.0; 4]; 4];
        matrix[3][3] = 1.0;
        Self { matrix }
    }

    /// The transform that maps every point onto itself.
    pub fn identity() -> Self {
        Self::scale(1.0)
    }

    /// Wrap a raw row-major matrix.
    ///
    /// No check is made that the matrix is affine, see [`Transform::is_affine`].
    pub fn from_matrix(matrix: [[f64; 4]; 4]) -> Self {
        Self { matrix }
    }

    /// The row-major backing matrix.
    pub fn matrix(&self) -> &[[f64; 4]; 4] {
        &self.matrix
    }

    /// Rotation by `angle` radians about `axis`.
    ///
    /// The axis may have any non-zero length, it is normalized internally.
    /// A zero axis is not rejected: every entry of the rotation block becomes
    /// NaN. Use [`Transform::try_rotation`] to get an error instead.
    ///
    /// Example:
    ///
    /// ```
    /// use euklid_transform::{Transform, Vector3D};
    ///
    /// let rot = Transform::rotation(std::f64::consts::PI, Vector3D::new(0.0, 0.0, 2.0));
    /// let p = rot.apply(Vector3D::new(1.0, 0.0, 0.0));
    /// assert!((p.x + 1.0).abs() < 1e-12);
    /// ```
    pub fn rotation(angle: f64, axis: Vector3D) -> Self {
        let norm = axis.length();
        if norm == 0.0 || !norm.is_finite() {
            log::warn!("rotation axis has norm {norm}, the resulting transform is not finite");
        }
        Self::rotation_about_unit(angle, axis.normalized())
    }

    /// Rotation by `angle` radians about `axis`, rejecting degenerate axes.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::ZeroAxis`] if the axis norm is not finite or
    /// is below [`NumericTol::axis_eps`] of the default tolerances.
    pub fn try_rotation(angle: f64, axis: Vector3D) -> Result<Self, TransformError> {
        Self::try_rotation_with_tol(angle, axis, &NumericTol::default())
    }

    /// Same as [`Transform::try_rotation`] with explicit tolerances.
    pub fn try_rotation_with_tol(
        angle: f64,
        axis: Vector3D,
        tol: &NumericTol,
    ) -> Result<Self, TransformError> {
        let norm = axis.length();
        if !norm.is_finite() || norm < tol.axis_eps {
            return Err(TransformError::ZeroAxis(norm));
        }
        Ok(Self::rotation_about_unit(angle, axis.normalized()))
    }

    // Euler-Rodrigues parameters: a = cos(angle / 2), (b, c, d) = -sin(angle / 2) * axis
    fn rotation_about_unit(angle: f64, axis: Vector3D) -> Self {
        let (sin_half, cos_half) = (angle / 2.0).sin_cos();

        let a = cos_half;
        let b = -axis.x * sin_half;
        let c = -axis.y * sin_half;
        let d = -axis.z * sin_half;

        let mut result = Self::zeroed();
        let m = &mut result.matrix;

        m[0][0] = a * a + b * b - c * c - d * d;
        m[0][1] = 2.0 * (b * c - a * d);
        m[0][2] = 2.0 * (b * d + a * c);

        m[1][0] = 2.0 * (b * c + a * d);
        m[1][1] = a * a + c * c - b * b - d * d;
        m[1][2] = 2.0 * (c * d - a * b);

        m[2][0] = 2.0 * (b * d - a * c);
        m[2][1] = 2.0 * (c * d + a * b);
        m[2][2] = a * a + d * d - b * b - c * c;

        result
    }

    /// Translation by `offset`.
    ///
    /// Only the leading `P::DIM` diagonal entries are set to 1. A translation
    /// built from a [`Vector2D`](euklid_vector::Vector2D) therefore leaves
    /// `[2][2]` at 0 and is only meant for 2D points.
    pub fn translation<P: HomogeneousPoint>(offset: P) -> Self {
        let mut result = Self::zeroed();
        for i in 0..P::DIM {
            result.matrix[i][i] = 1.0;
            result.matrix[3][i] = offset.coord(i);
        }
        result
    }

    /// Uniform scale by `amount` about the origin.
    pub fn scale(amount: f64) -> Self {
        let mut result = Self::zeroed();
        for i in 0..3 {
            result.matrix[i][i] = amount;
        }
        result
    }

    /// Compose two transforms as the matrix product `self * other`.
    ///
    /// For translations and uniform scales the result applies `self` first
    /// and `other` second. The translation row of `self` is multiplied into
    /// the linear block of `other` as a row vector, so an offset chained in
    /// front of a rotation is carried through the transposed rotation.
    ///
    /// The corner `[3][3]` of the result is reset to 1.
    pub fn chain(&self, other: &Transform) -> Self {
        let mut result = Self::zeroed();
        for row in 0..4 {
            for column in 0..4 {
                result.matrix[row][column] = (0..4)
                    .map(|i| self.matrix[row][i] * other.matrix[i][column])
                    .sum();
            }
        }
        result.matrix[3][3] = 1.0;
        result
    }

    /// Map a point through the transform.
    ///
    /// Only the leading `P::DIM` rows and columns are read, there is no check
    /// that the transform was built for that dimension.
    pub fn apply<P: HomogeneousPoint>(&self, point: P) -> P {
        let mut coords = [0.0; 3];
        for (i, coord) in coords.iter_mut().enumerate().take(P::DIM) {
            *coord = (0..P::DIM).fold(self.matrix[3][i], |acc, j| {
                acc + self.matrix[i][j] * point.coord(j)
            });
        }
        P::from_coords(coords)
    }

    /// Map a set of points into a pre-allocated buffer.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::MismatchedLengths`] if `src` and `dst` differ
    /// in length. `dst` is left untouched in that case.
    pub fn apply_points<P: HomogeneousPoint>(
        &self,
        src: &[P],
        dst: &mut [P],
    ) -> Result<(), TransformError> {
        if src.len() != dst.len() {
            return Err(TransformError::MismatchedLengths(src.len(), dst.len()));
        }
        log::debug!("transforming {} points of dimension {}", src.len(), P::DIM);

        for (point_dst, point_src) in dst.iter_mut().zip(src.iter()) {
            *point_dst = self.apply(*point_src);
        }
        Ok(())
    }

    /// Whether the projective column is zero and the corner is exactly 1.
    pub fn is_affine(&self, tol: &NumericTol) -> bool {
        self.matrix[3][3] == 1.0 && (0..3).all(|i| self.matrix[i][3].abs() <= tol.affine_eps)
    }
}

impl From<[[f64; 4]; 4]> for Transform {
    fn from(matrix: [[f64; 4]; 4]) -> Self {
        Self::from_matrix(matrix)
    }
}

impl std::ops::Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Self::Output {
        self.chain(&rhs)
    }
}
