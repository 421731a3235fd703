//! Settings loading and target resolution

pub mod defaults;
mod resolver;
mod settings;

pub use resolver::*;
pub use settings::*;
