//! Geographic constants and rendering defaults.

/// Longitude span (degrees) above which a triangle is treated as crossing
/// the antimeridian. The comparison is strict: a span of exactly 180° is kept.
pub const DATELINE_SPAN_THRESHOLD_DEG: f64 = 180.0;

/// Offset between Kelvin and degrees Celsius.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Number of vertices per grid cell. Geodesic cells are triangles.
pub const VERTICES_PER_CELL: usize = 3;

/// Default figure width in pixels for image surfaces.
pub const DEFAULT_FIGURE_WIDTH: u32 = 1000;

/// Default figure height in pixels for image surfaces.
pub const DEFAULT_FIGURE_HEIGHT: u32 = 1000;

/// Default wireframe line width (points).
pub const DEFAULT_LINE_WIDTH: f64 = 0.2;
