//! Shared test harness.


pub use harness::{TestContext, addr_in_set};
