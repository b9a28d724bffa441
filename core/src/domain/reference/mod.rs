pub mod catalog;
pub mod entities;
pub mod value_objects;

pub use catalog::ReferenceContext;
pub use entities::*;
pub use value_objects::*;
