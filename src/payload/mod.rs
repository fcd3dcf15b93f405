pub mod document;
pub mod factory;
pub mod node;

pub use document::*;
pub use factory::*;
pub use node::*;
