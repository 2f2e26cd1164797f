pub mod engine;
pub mod segment;
pub mod subject;
pub mod text;

pub use engine::{parse, reconcile};
pub use segment::Segments;
