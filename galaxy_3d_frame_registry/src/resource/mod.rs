//! Resource module
//!
//! Engine resources consumed by the frame registry.

pub mod material;

pub use material::{Material, MaterialDesc, MaterialKey, ParamValue};
