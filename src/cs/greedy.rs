pub mod change_making;

pub use change_making::{greedy_change, greedy_change_with_remainder};
