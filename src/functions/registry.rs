use super::opcode::Opcode;
use crate::genome::Codon;
use std::collections::HashMap;

/// Codon families, grouped by amino acid as in the standard genetic code.
const GENETIC_CODE: &[(Opcode, &[&str])] = &[
    (Opcode::Add, &["tta", "ttg", "ctt", "ctc", "cta", "ctg"]),
    (Opcode::Subtract, &["att", "atc", "ata"]),
    (Opcode::Multiply, &["gtt", "gtc", "gta", "gtg"]),
    (Opcode::Power, &["act", "acc", "aca", "acg"]),
    (Opcode::Divide, &["cct", "ccc", "cca", "ccg"]),
    (Opcode::Modulo, &["gct", "gcc", "gca", "gcg"]),
    (Opcode::Duplicate, &["gaa", "gag"]),
    (Opcode::Drop, &["gat", "gac"]),
    (Opcode::MoveToAux, &["ggt", "ggc", "gga", "ggg"]),
    (Opcode::Merge, &["ttt", "ttc"]),
    (Opcode::StoreVariable, &["tgt", "tgc"]),
    (Opcode::LoadVariable, &["caa", "cag"]),
    (Opcode::Literal, &["cat", "cac"]),
    (Opcode::PrintNumber, &["aaa", "aag"]),
    (Opcode::PrintChar, &["cgt", "cgc", "cga", "cgg", "aga", "agg"]),
    // ochre, amber, opal
    (Opcode::Stop, &["taa", "tag", "tga"]),
    (Opcode::JumpIfNonPositiveForward, &["tct", "tcc", "tca", "tcg"]),
    (Opcode::JumpIfNonPositiveBackward, &["agt", "agc"]),
    (Opcode::JumpIfEmptyForward, &["tat", "tac"]),
    (Opcode::JumpIfEmptyBackward, &["tgg"]),
    (Opcode::JumpBackward, &["aat", "aac"]),
    (Opcode::JumpForward, &["atg"]),
];

/// Immutable codon -> operation lookup, built once per run.
#[derive(Debug, Clone)]
pub struct OpcodeTable {
    opcodes: HashMap<Codon, Opcode>,
}

impl OpcodeTable {
    /// The standard table covering all 64 codons.
    pub fn standard() -> Self {
        let mut opcodes = HashMap::with_capacity(64);
        for (opcode, codons) in GENETIC_CODE {
            for text in codons.iter() {
                // The table above is static; every entry is a valid codon.
                if let Ok(codon) = Codon::parse(text) {
                    opcodes.insert(codon, *opcode);
                }
            }
        }
        Self { opcodes }
    }

    pub fn lookup(&self, codon: Codon) -> Option<Opcode> {
        self.opcodes.get(&codon).copied()
    }

    /// Codons that dispatch `opcode`, in quaternary order.
    pub fn codons_for(&self, opcode: Opcode) -> Vec<Codon> {
        let mut codons: Vec<Codon> = self
            .opcodes
            .iter()
            .filter(|(_, op)| **op == opcode)
            .map(|(codon, _)| *codon)
            .collect();
        codons.sort();
        codons
    }

    pub fn len(&self) -> usize {
        self.opcodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opcodes.is_empty()
    }
}

impl Default for OpcodeTable {
    fn default() -> Self {
        Self::standard()
    }
}
