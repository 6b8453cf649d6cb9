//! 3D vector (double precision).

define_vector_type!(
    /// 3D vector with double precision components.
    Vector3D,
    glam::DVec3,
    [f64; 3],
    [x, y, z]
);
