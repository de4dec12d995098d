//! Output artifacts.

mod writer;

pub use writer::{DATA_FILE, OutputPaths, SUMMARY_FILE, write_outputs};
