use super::engine::{ExecutionEngine, Flow};
use crate::error::Result;
use crate::functions::{Jump, JumpCondition, JumpDirection, Opcode};
use crate::genome::SearchOutcome;
use crate::types::Value;
use std::io::Write;

impl<W: Write> ExecutionEngine<W> {
    /// Carry out `opcode`, which was read from `opcode_at`.
    ///
    /// The pointer already sits past the opcode. Operations that take an
    /// argument (literal, variable name, jump target) consume one more codon.
    pub(super) fn apply(&mut self, opcode: Opcode, opcode_at: usize) -> Result<Flow> {
        match opcode {
            Opcode::Add
            | Opcode::Subtract
            | Opcode::Multiply
            | Opcode::Power
            | Opcode::Divide
            | Opcode::Modulo => {
                if let Some(primitive) = opcode.primitive() {
                    self.machine.apply_primitive(primitive);
                }
            }
            Opcode::Duplicate => self.machine.duplicate(),
            Opcode::Drop => self.machine.drop_top(),
            Opcode::MoveToAux => self.machine.move_to_aux(),
            Opcode::Merge => self.machine.merge(),
            Opcode::StoreVariable => {
                let name = self.read_codon();
                self.machine.store(name);
            }
            Opcode::LoadVariable => {
                let name = self.read_codon();
                self.machine.load(name);
            }
            Opcode::Literal => {
                let digits = self.read_codon();
                self.machine.main.push(Value::from(digits.quaternary()));
            }
            Opcode::PrintNumber => {
                if let Some(value) = self.machine.main.pop() {
                    writeln!(self.output, "{}", value)?;
                    self.flush_if_configured()?;
                }
            }
            Opcode::PrintChar => {
                if let Some(value) = self.machine.main.pop() {
                    match value.as_char() {
                        Some(c) => {
                            write!(self.output, "{}", c)?;
                            self.flush_if_configured()?;
                        }
                        None => log::trace!("Dropping {} with no character", value),
                    }
                }
            }
            Opcode::Stop => return Ok(Flow::Stop),
            Opcode::JumpIfNonPositiveForward
            | Opcode::JumpIfNonPositiveBackward
            | Opcode::JumpIfEmptyForward
            | Opcode::JumpIfEmptyBackward
            | Opcode::JumpBackward
            | Opcode::JumpForward => {
                if let Some(jump) = opcode.jump() {
                    self.jump(jump, opcode_at);
                }
            }
        }
        Ok(Flow::Continue)
    }

    /// Read the target codon, then, if the condition holds, search for it.
    ///
    /// A forward search starts with the window ending at the post-read pointer;
    /// a backward search starts with the window ending right before the opcode.
    /// Either way a match resumes one past the match. A full lap always meets
    /// the target codon itself, so a target found nowhere else resumes right
    /// after it. The exhausted arms keep the fallbacks: a failed backward
    /// search skips ahead one codon, a failed forward search stays put.
    fn jump(&mut self, jump: Jump, opcode_at: usize) {
        let target = self.read_codon();
        let taken = match jump.condition {
            JumpCondition::MainNonPositive => self.machine.top().is_some_and(Value::is_nonpositive),
            JumpCondition::MainEmpty => self.machine.main.is_empty(),
            JumpCondition::Always => true,
        };
        if !taken {
            return;
        }

        let chromosome = &self.context.chromosome;
        self.pointer = match jump.direction {
            JumpDirection::Forward => match chromosome.look_ahead(self.pointer, target) {
                SearchOutcome::Found(end) => chromosome.wrap(end + 1),
                SearchOutcome::Exhausted(_) => self.pointer,
            },
            JumpDirection::Backward => {
                match chromosome.look_back(chromosome.wrap_back(opcode_at, 1), target) {
                    SearchOutcome::Found(end) => chromosome.wrap(end + 1),
                    SearchOutcome::Exhausted(_) => chromosome.wrap(self.pointer + 3),
                }
            }
        };
    }

    fn flush_if_configured(&mut self) -> Result<()> {
        if self.context.config.flush_each_write {
            self.output.flush()?;
        }
        Ok(())
    }
}
