pub mod benchmark;
pub mod coins;
pub mod dynamic;
pub mod greedy;
pub mod timing;

// Re-export the change-making algorithms
pub use coins::{Breakdown, Denominations};
pub use dynamic::*;
pub use greedy::*;
