/// Whole-trace runs through `Simulator`.
pub mod simulator;
