pub mod error;
pub mod fields;
pub mod label;
pub mod mask;
pub mod solution;

pub use error::*;
pub use fields::*;
pub use label::*;
pub use mask::*;
pub use solution::*;
