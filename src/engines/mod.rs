pub mod execution;

pub use execution::{ExecutionEngine, Machine, Outcome, RunContext, RunState};
