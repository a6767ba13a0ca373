pub mod cs;
pub mod error;

pub use cs::{benchmark, coins, dynamic, greedy, timing};
pub use error::{Error, Result};
