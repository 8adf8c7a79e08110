//! Scalar type alias for coordinates and field values.
//!
//! Grid coordinates arrive as double-precision radians and the dateline
//! test compares spans against exactly 180°, so everything is `f64`.

/// The floating-point type used for coordinates and cell values.
pub type Scalar = f64;
