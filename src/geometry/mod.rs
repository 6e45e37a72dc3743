pub mod position;
pub mod trajectory;

pub use position::{Position, Side};
pub use trajectory::Trajectory;
