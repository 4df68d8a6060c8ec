pub mod opcode;
pub mod primitives;
pub mod registry;
pub mod traits;

pub use opcode::{Jump, JumpCondition, JumpDirection, Opcode};
pub use registry::OpcodeTable;
pub use traits::Primitive;
