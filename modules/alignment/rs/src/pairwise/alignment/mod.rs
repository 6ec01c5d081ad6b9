pub use alignment::{Alignment, GAP};

pub use dpalign_core_rs::alignment::pairwise::{Op, Step};

#[allow(clippy::module_inception)]
mod alignment;
