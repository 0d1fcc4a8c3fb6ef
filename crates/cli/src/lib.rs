//! Typekit command line tools: `fetch-kit` and `kitgen`.

pub mod browser;
pub mod cli;
pub mod error;
pub mod generator;
pub mod logging;

pub use browser::{Browser, Selection};
pub use error::UsageError;
pub use generator::KitPlan;
