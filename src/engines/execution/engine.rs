use super::machine::Machine;
use super::observer::{ExecutionObserver, TraceObserver};
use crate::config::InterpreterConfig;
use crate::error::Result;
use crate::functions::OpcodeTable;
use crate::genome::{Chromosome, Codon};
use std::io::Write;

/// Everything fixed for the duration of one run.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub chromosome: Chromosome,
    pub table: OpcodeTable,
    pub config: InterpreterConfig,
}

impl RunContext {
    pub fn new(chromosome: Chromosome, config: InterpreterConfig) -> Self {
        Self {
            chromosome,
            table: OpcodeTable::standard(),
            config,
        }
    }

    /// Sanitize `source` into a chromosome. Fails on an empty chromosome.
    pub fn from_source(source: &str, config: InterpreterConfig) -> Result<Self> {
        Ok(Self::new(Chromosome::from_source(source)?, config))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Looking for the start codon. A chromosome without one never leaves this state.
    Scanning,
    Executing,
}

/// Result of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A stop codon executed.
    Stopped,
    /// The configured step limit ran out first.
    StepLimitReached(u64),
}

/// Drives one chromosome: gene location, then the fetch/dispatch cycle.
pub struct ExecutionEngine<W: Write> {
    pub(super) context: RunContext,
    pub(super) machine: Machine,
    pub(super) pointer: usize,
    pub(super) output: W,
    state: RunState,
    steps: u64,
    observer: Option<Box<dyn ExecutionObserver>>,
}

impl<W: Write> ExecutionEngine<W> {
    pub fn new(context: RunContext, output: W) -> Self {
        let observer: Option<Box<dyn ExecutionObserver>> = if context.config.verbose {
            Some(Box::new(TraceObserver))
        } else {
            None
        };
        Self {
            context,
            machine: Machine::new(),
            pointer: 0,
            output,
            state: RunState::Scanning,
            steps: 0,
            observer,
        }
    }

    /// Start from pre-filled stacks, e.g. seeded from command-line tokens.
    pub fn with_machine(mut self, machine: Machine) -> Self {
        self.machine = machine;
        self
    }

    pub fn with_observer(mut self, observer: Box<dyn ExecutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Next symbol to read, always within `0..chromosome.len()`.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn context(&self) -> &RunContext {
        &self.context
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until a stop codon, or until the step limit if one is configured.
    pub fn run(&mut self) -> Result<Outcome> {
        loop {
            if let Some(limit) = self.context.config.step_limit {
                if self.steps >= limit {
                    log::debug!("Step limit of {} reached at pointer {}", limit, self.pointer);
                    return Ok(Outcome::StepLimitReached(self.steps));
                }
            }
            if self.step()? == Flow::Stop {
                if let Some(observer) = self.observer.as_mut() {
                    observer.on_stop(self.steps);
                }
                self.output.flush()?;
                return Ok(Outcome::Stopped);
            }
        }
    }

    /// One scan for the start codon while scanning, one codon cycle while executing.
    pub fn step(&mut self) -> Result<Flow> {
        self.steps += 1;
        match self.state {
            RunState::Scanning => {
                self.locate_gene();
                Ok(Flow::Continue)
            }
            RunState::Executing => self.execute_cycle(),
        }
    }

    fn locate_gene(&mut self) {
        let from = self.pointer;
        let outcome = self.context.chromosome.look_ahead(from, Codon::START);
        // Found or not, resume one past where the scan stopped.
        self.pointer = self.context.chromosome.wrap(outcome.position() + 1);

        if let Some(observer) = self.observer.as_mut() {
            observer.on_scan(from, outcome);
        }
        if outcome.is_found() {
            self.state = RunState::Executing;
            if let Some(observer) = self.observer.as_mut() {
                observer.on_state_change(self.state, self.pointer);
            }
        }
    }

    fn execute_cycle(&mut self) -> Result<Flow> {
        let position = self.pointer;
        let codon = self.read_codon();
        let opcode = self.context.table.lookup(codon);

        let flow = match opcode {
            Some(op) => self.apply(op, position)?,
            None => Flow::Continue,
        };

        if let Some(observer) = self.observer.as_mut() {
            observer.on_cycle(position, codon, opcode, &self.machine);
        }
        Ok(flow)
    }

    /// Consume the codon at the pointer.
    pub(super) fn read_codon(&mut self) -> Codon {
        let (codon, next) = self.context.chromosome.read_codon(self.pointer);
        self.pointer = next;
        codon
    }
}
