pub mod builder;
pub mod rebuild;
pub mod types;

pub use builder::*;
pub use rebuild::*;
pub use types::*;
