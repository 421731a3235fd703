//! Code generation module

mod code_generator;
mod column_generator;
mod model_generator;
mod naming;
mod type_mapper;
mod writer;

pub use code_generator::*;
pub use column_generator::render_column_constants;
pub use model_generator::render_model;
pub use naming::*;
pub use type_mapper::*;
pub use writer::*;
