//! 2D vector (double precision).

define_vector_type!(
    /// 2D vector with double precision components.
    Vector2D,
    glam::DVec2,
    [f64; 2],
    [x, y]
);
