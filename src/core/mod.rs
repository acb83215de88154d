pub mod builder;
pub mod etl;
pub mod logo;
pub mod pipeline;

pub use crate::domain::model::{Landscape, ProjectRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
