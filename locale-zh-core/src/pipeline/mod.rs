//! Token pipeline and function registry.
//!
//! A [`Pipeline`] is the ordered list of stages every token passes through
//! after tokenization. A [`FunctionRegistry`] maps stage labels to stages so a
//! persisted pipeline (a list of labels) can be rebuilt when an index is
//! reloaded.
//!
//! Both are plain values owned by a host session. Nothing here is global.

mod persist;
mod registry;
mod run;
mod types;

pub use registry::FunctionRegistry;
pub use types::{Pipeline, PipelineFunction, StageFn};
