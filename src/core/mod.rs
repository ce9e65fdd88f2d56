pub mod card;
pub mod dispatcher;
pub mod gallery;
pub mod patterns;
pub mod pipeline;
pub mod rng;
pub mod seed;
pub mod svg;

pub use crate::domain::model::{CardRequest, RenderResult, RenderedCard, ResolvedCard};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
