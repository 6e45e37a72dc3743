pub mod error;
pub mod merge;
pub mod projection;
pub mod system;

pub use error::EntanglementError;
pub use merge::merge_and_count;
pub use projection::{pivot_on_side, sort_by_start_alpha};
pub use system::QuantumTriangleSystem;
