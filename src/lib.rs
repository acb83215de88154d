pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::builder::LandscapeBuilder;
pub use core::{etl::Engine, logo::LogoResolver, pipeline::LandscapePipeline};
pub use domain::model::{Category, Item, Landscape, ProjectRecord, Subcategory};
pub use utils::error::{LandscapeError, Result};
