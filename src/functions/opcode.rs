use crate::functions::primitives::{Add, Divide, Modulo, Multiply, Power, Subtract};
use crate::functions::traits::Primitive;
use std::fmt;

/// Every operation a codon can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Add,
    Subtract,
    Multiply,
    Power,
    Divide,
    Modulo,
    Duplicate,
    Drop,
    MoveToAux,
    Merge,
    StoreVariable,
    LoadVariable,
    Literal,
    PrintNumber,
    PrintChar,
    Stop,
    JumpIfNonPositiveForward,
    JumpIfNonPositiveBackward,
    JumpIfEmptyForward,
    JumpIfEmptyBackward,
    JumpBackward,
    JumpForward,
}

/// What a conditional jump tests before searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpCondition {
    /// Main stack non-empty and its top `<= 0`. The top is not consumed.
    MainNonPositive,
    MainEmpty,
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump {
    pub condition: JumpCondition,
    pub direction: JumpDirection,
}

impl Opcode {
    pub const ALL: [Opcode; 22] = [
        Opcode::Add,
        Opcode::Subtract,
        Opcode::Multiply,
        Opcode::Power,
        Opcode::Divide,
        Opcode::Modulo,
        Opcode::Duplicate,
        Opcode::Drop,
        Opcode::MoveToAux,
        Opcode::Merge,
        Opcode::StoreVariable,
        Opcode::LoadVariable,
        Opcode::Literal,
        Opcode::PrintNumber,
        Opcode::PrintChar,
        Opcode::Stop,
        Opcode::JumpIfNonPositiveForward,
        Opcode::JumpIfNonPositiveBackward,
        Opcode::JumpIfEmptyForward,
        Opcode::JumpIfEmptyBackward,
        Opcode::JumpBackward,
        Opcode::JumpForward,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Opcode::Add => "add",
            Opcode::Subtract => "subtract",
            Opcode::Multiply => "multiply",
            Opcode::Power => "power",
            Opcode::Divide => "divide",
            Opcode::Modulo => "modulo",
            Opcode::Duplicate => "duplicate",
            Opcode::Drop => "drop",
            Opcode::MoveToAux => "move-to-aux",
            Opcode::Merge => "merge",
            Opcode::StoreVariable => "store-variable",
            Opcode::LoadVariable => "load-variable",
            Opcode::Literal => "literal",
            Opcode::PrintNumber => "print-number",
            Opcode::PrintChar => "print-char",
            Opcode::Stop => "stop",
            Opcode::JumpIfNonPositiveForward => "jump-if-main-nonpositive-forward",
            Opcode::JumpIfNonPositiveBackward => "jump-if-main-nonpositive-backward",
            Opcode::JumpIfEmptyForward => "jump-if-main-empty-forward",
            Opcode::JumpIfEmptyBackward => "jump-if-main-empty-backward",
            Opcode::JumpBackward => "unconditional-backward",
            Opcode::JumpForward => "unconditional-forward",
        }
    }

    /// Three-letter amino acid whose codons encode this operation.
    pub fn amino_acid(self) -> &'static str {
        match self {
            Opcode::Add => "Leu",
            Opcode::Subtract => "Ile",
            Opcode::Multiply => "Val",
            Opcode::Power => "Thr",
            Opcode::Divide => "Pro",
            Opcode::Modulo => "Ala",
            Opcode::Duplicate => "Glu",
            Opcode::Drop => "Asp",
            Opcode::MoveToAux => "Gly",
            Opcode::Merge => "Phe",
            Opcode::StoreVariable => "Cys",
            Opcode::LoadVariable => "Gln",
            Opcode::Literal => "His",
            Opcode::PrintNumber => "Lys",
            Opcode::PrintChar => "Arg",
            Opcode::Stop => "Stop",
            Opcode::JumpIfNonPositiveForward | Opcode::JumpIfNonPositiveBackward => "Ser",
            Opcode::JumpIfEmptyForward => "Tyr",
            Opcode::JumpIfEmptyBackward => "Trp",
            Opcode::JumpBackward => "Asn",
            Opcode::JumpForward => "Met",
        }
    }

    /// Arithmetic implementation, for the six binary stack operations.
    pub fn primitive(self) -> Option<&'static dyn Primitive> {
        match self {
            Opcode::Add => Some(&Add),
            Opcode::Subtract => Some(&Subtract),
            Opcode::Multiply => Some(&Multiply),
            Opcode::Power => Some(&Power),
            Opcode::Divide => Some(&Divide),
            Opcode::Modulo => Some(&Modulo),
            _ => None,
        }
    }

    pub fn jump(self) -> Option<Jump> {
        use JumpCondition::*;
        use JumpDirection::*;
        let (condition, direction) = match self {
            Opcode::JumpIfNonPositiveForward => (MainNonPositive, Forward),
            Opcode::JumpIfNonPositiveBackward => (MainNonPositive, Backward),
            Opcode::JumpIfEmptyForward => (MainEmpty, Forward),
            Opcode::JumpIfEmptyBackward => (MainEmpty, Backward),
            Opcode::JumpBackward => (Always, Backward),
            Opcode::JumpForward => (Always, Forward),
            _ => return None,
        };
        Some(Jump { condition, direction })
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_opcodes_have_primitives() {
        let with_primitive: Vec<&str> = Opcode::ALL
            .iter()
            .filter_map(|op| op.primitive())
            .map(|p| p.alias())
            .collect();
        assert_eq!(with_primitive, vec!["add", "sub", "mul", "pow", "div", "mod"]);
    }

    #[test]
    fn test_jump_opcodes() {
        assert_eq!(Opcode::ALL.iter().filter(|op| op.jump().is_some()).count(), 6);
        assert_eq!(
            Opcode::JumpIfEmptyBackward.jump(),
            Some(Jump {
                condition: JumpCondition::MainEmpty,
                direction: JumpDirection::Backward,
            })
        );
        assert!(Opcode::Literal.jump().is_none());
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = Opcode::ALL.iter().map(|op| op.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Opcode::ALL.len());
        assert_eq!(Opcode::JumpForward.to_string(), "unconditional-forward");
    }
}
