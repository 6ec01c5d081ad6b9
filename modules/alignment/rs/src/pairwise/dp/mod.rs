pub use engine::{AlignmentResult, Engine};
pub use matrix::{Cell, Edge, Move, ScoreMatrix};
pub use mode::Mode;
pub use traceback::Traceback;

pub mod algo;
mod engine;
mod matrix;
mod mode;
pub mod storage;
mod traceback;
