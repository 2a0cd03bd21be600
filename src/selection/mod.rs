pub mod set;
pub mod tree;

pub use set::*;
pub use tree::*;
