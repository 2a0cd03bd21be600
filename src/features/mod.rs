pub mod aggregate;
pub mod axis;
pub mod extract;
pub mod normalize;

pub use aggregate::*;
pub use axis::*;
pub use extract::*;
pub use normalize::*;
