//! The run-time half of the interpreter: machine state, the gene-locating
//! state machine and codon dispatch.

pub mod engine;
pub mod machine;
pub mod observer;
pub mod operations;
pub mod seed;

pub use engine::{ExecutionEngine, Flow, Outcome, RunContext, RunState};
pub use machine::Machine;
pub use observer::{ChannelObserver, ExecutionObserver, TraceEvent, TraceObserver};
pub use seed::seed_main_stack;
