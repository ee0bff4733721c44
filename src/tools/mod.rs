//! Tool modules making up the catalog. Each file contributes one router to
//! the registry; the `execute` module is the restricted raw pass-through.

pub mod execute;
pub mod hash;
pub mod list;
pub mod misc;
pub mod string;
