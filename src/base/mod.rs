//! Implements the base structures: configuration, file paths, materials, and boundaries

mod boundaries;
mod case_study;
mod config;
mod constants;
mod filepath;
mod material;
pub use crate::base::boundaries::*;
pub use crate::base::case_study::*;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::filepath::*;
pub use crate::base::material::*;
