//! bootcamp - coursework calculators and text tools for the terminal
//!
//! # Layout
//!
//! - **exercises**: small prompt-and-print programs (age, awards, cafe stock,
//!   holiday costs, number and word drills, garden-path sentences)
//! - **finance**: interest and mortgage calculators with receipt export
//! - **text**: tokens, stop words, cosine similarity, movie recommender
//! - **sentiment**: parallel review labeling with a PDF report
//! - **console** / **cli**: terminal I/O, menu, arguments and configuration

pub mod app;
pub mod cli;
pub mod console;
pub mod errors;
pub mod exercises;
pub mod finance;
pub mod logging;
pub mod sentiment;
pub mod text;
pub mod viewer;

// Re-export commonly used types
pub use app::dispatch;
pub use cli::{Args, Commands, Config, Verbosity};
pub use console::{DisplaySettings, Terminal};
pub use errors::{BootcampError, Result};
