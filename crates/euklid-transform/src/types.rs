/// Numeric tolerances used when validating transform inputs.
#[derive(Debug, Clone)]
pub struct NumericTol {
    /// Minimum axis norm accepted by [`Transform::try_rotation`](crate::Transform::try_rotation).
    pub axis_eps: f64,
    /// Maximum magnitude allowed in the projective column of an affine transform.
    pub affine_eps: f64,
}

impl Default for NumericTol {
    fn default() -> Self {
        Self {
            axis_eps: 1e-10,
            affine_eps: 1e-12,
        }
    }
}
