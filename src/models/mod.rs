pub mod analysis;
pub mod syllabus;

pub use analysis::*;
pub use syllabus::*;
