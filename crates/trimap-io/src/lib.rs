//! # trimap-io
//!
//! Plot-job configuration, on-disk grid/field contracts and job validation.
//!
//! Defines the boundary types that external systems (CLI, model output
//! converters) use to hand grids and fields to the trimap core.

pub mod contract;
pub mod source;
pub mod validator;

pub use contract::{
    FieldFile, FieldSection, GridFile, GridSection, MaskingSection, PlotJob, UnitConversion,
    WireframeSection,
};
pub use source::{FieldDataSource, GridDataSource, JsonFieldSource, JsonGridSource};
pub use validator::{validate_grid_file, validate_job};
