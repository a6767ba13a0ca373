pub mod breakdown;
pub mod denominations;

pub use breakdown::Breakdown;
pub use denominations::{Denominations, STANDARD_DENOMINATIONS};
