pub mod builder;
pub mod dataset;
pub mod defaults;
pub mod runtime;
pub mod traits;
