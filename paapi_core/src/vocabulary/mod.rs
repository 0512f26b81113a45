//! Closed resource and operation vocabularies of the Product Advertising API

#[macro_use]
mod macros;

pub mod operation;
pub mod resource;

pub use operation::Operation;
pub use resource::Resource;
