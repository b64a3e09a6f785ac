//! # Unit Components
//!
//! Organizes the tests for each building block of the simulator, from address
//! decoding up to whole-trace runs.




/// Unit tests for trace parsing and the simulation driver.
pub mod sim;
