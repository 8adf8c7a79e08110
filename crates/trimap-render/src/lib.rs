//! # trimap-render
//!
//! Maps cell-centered scalar fields onto a masked triangulation and hands
//! the result to a pluggable [`MapSurface`].
//!
//! Provides the [`FieldRenderer`] (flat-shaded faces), the
//! [`WireframeRenderer`] (grid edges), named colormaps with range
//! normalization, and three surfaces: a [`HeadlessSurface`] for tests, a
//! [`JsonSceneExporter`] and an equirectangular [`SvgMapExporter`].

pub mod color;
pub mod colormap;
pub mod context;
pub mod field_renderer;
pub mod json_exporter;
pub mod norm;
pub mod surface;
pub mod svg_exporter;
pub mod wireframe;

pub use color::Rgb;
pub use colormap::{Colormap, ColormapKind};
pub use context::{FieldContext, GridContext};
pub use field_renderer::{FieldRenderer, RenderParams, RenderReport};
pub use json_exporter::JsonSceneExporter;
pub use norm::{Normalize, Saturation};
pub use surface::{ColorLegend, ColoredFace, EdgeDrawCall, FaceDrawCall, HeadlessSurface, MapSurface};
pub use svg_exporter::SvgMapExporter;
pub use wireframe::{WireframeReport, WireframeRenderer, WireframeStyle};
