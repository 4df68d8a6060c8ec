use crate::types::Value;

/// Binary arithmetic over the tops of the two stacks.
///
/// The left operand comes from the main stack and the right from the aux
/// stack. When a stack is empty its fixed default stands in.
pub trait Primitive: Send + Sync {
    /// Short alias
    fn alias(&self) -> &'static str;

    /// Substitute when the main stack is empty
    fn main_default(&self) -> Value;

    /// Substitute when the aux stack is empty
    fn aux_default(&self) -> Value;

    /// Combine the two operands. Never fails: every irregular input has a
    /// defined result.
    fn execute(&self, main: Value, aux: Value) -> Value;
}
