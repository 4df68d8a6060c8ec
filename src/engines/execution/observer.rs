use super::engine::RunState;
use super::machine::Machine;
use crate::functions::Opcode;
use crate::genome::{Codon, SearchOutcome};
use crate::types::Value;

/// Hooks the engine calls as it runs.
pub trait ExecutionObserver: Send {
    fn on_scan(&mut self, from: usize, outcome: SearchOutcome);
    fn on_state_change(&mut self, state: RunState, pointer: usize);
    fn on_cycle(&mut self, position: usize, codon: Codon, opcode: Option<Opcode>, machine: &Machine);
    fn on_stop(&mut self, steps: u64);
}

fn render(stack: &[Value]) -> String {
    let items: Vec<String> = stack.iter().map(Value::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Writes the run to the `log` facade.
pub struct TraceObserver;

impl ExecutionObserver for TraceObserver {
    fn on_scan(&mut self, from: usize, outcome: SearchOutcome) {
        match outcome {
            SearchOutcome::Found(end) => log::debug!("Start codon found ending at {} (scan from {})", end, from),
            SearchOutcome::Exhausted(_) => log::trace!("No start codon found scanning from {}", from),
        }
    }

    fn on_state_change(&mut self, state: RunState, pointer: usize) {
        log::debug!("State -> {:?} at pointer {}", state, pointer);
    }

    fn on_cycle(&mut self, position: usize, codon: Codon, opcode: Option<Opcode>, machine: &Machine) {
        log::trace!(
            "{:>6} {} {:<4} {:<34} main={} aux={} vars={}",
            position,
            codon,
            opcode.map_or("", Opcode::amino_acid),
            opcode.map_or("-", Opcode::name),
            render(&machine.main),
            render(&machine.aux),
            machine.variables.len()
        );
    }

    fn on_stop(&mut self, steps: u64) {
        log::debug!("Stop codon reached after {} steps", steps);
    }
}

/// Events forwarded by [`ChannelObserver`].
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    Scanned { from: usize, outcome: SearchOutcome },
    StateChanged { state: RunState, pointer: usize },
    Executed { position: usize, codon: Codon, opcode: Option<Opcode> },
    Stopped { steps: u64 },
}

// For consumers on another thread
pub struct ChannelObserver {
    sender: std::sync::mpsc::Sender<TraceEvent>,
}

impl ChannelObserver {
    pub fn new(sender: std::sync::mpsc::Sender<TraceEvent>) -> Self {
        Self { sender }
    }
}

impl ExecutionObserver for ChannelObserver {
    fn on_scan(&mut self, from: usize, outcome: SearchOutcome) {
        let _ = self.sender.send(TraceEvent::Scanned { from, outcome });
    }

    fn on_state_change(&mut self, state: RunState, pointer: usize) {
        let _ = self.sender.send(TraceEvent::StateChanged { state, pointer });
    }

    fn on_cycle(&mut self, position: usize, codon: Codon, opcode: Option<Opcode>, _machine: &Machine) {
        let _ = self.sender.send(TraceEvent::Executed {
            position,
            codon,
            opcode,
        });
    }

    fn on_stop(&mut self, steps: u64) {
        let _ = self.sender.send(TraceEvent::Stopped { steps });
    }
}
