use crate::functions::traits::Primitive;
use crate::genome::Codon;
use crate::types::Value;
use std::collections::HashMap;

/// Mutable data of a run: the two stacks and the variable store.
///
/// Every operation here is total. Empty stacks and missing variables fall
/// back to a defined no-op or default rather than an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Machine {
    pub main: Vec<Value>,
    pub aux: Vec<Value>,
    pub variables: HashMap<Codon, Value>,
}

impl Machine {
    pub fn new() -> Self {
        Self::default()
    }

    /// A machine whose main stack starts with `seed` (last element on top).
    pub fn seeded(seed: Vec<Value>) -> Self {
        Self {
            main: seed,
            ..Self::default()
        }
    }

    pub fn top(&self) -> Option<&Value> {
        self.main.last()
    }

    /// Pop both tops (or the primitive's defaults) and push the result.
    pub fn apply_primitive(&mut self, primitive: &dyn Primitive) {
        let main = self.main.pop().unwrap_or_else(|| primitive.main_default());
        let aux = self.aux.pop().unwrap_or_else(|| primitive.aux_default());
        self.main.push(primitive.execute(main, aux));
    }

    pub fn duplicate(&mut self) {
        if let Some(top) = self.main.last().cloned() {
            self.main.push(top);
        }
    }

    pub fn drop_top(&mut self) {
        self.main.pop();
    }

    pub fn move_to_aux(&mut self) {
        if let Some(top) = self.main.pop() {
            self.aux.push(top);
        }
    }

    /// Append the whole aux stack onto main, bottom first, leaving aux empty.
    pub fn merge(&mut self) {
        self.main.append(&mut self.aux);
    }

    /// Pop main into `name`, or forget `name` when main is empty.
    pub fn store(&mut self, name: Codon) {
        match self.main.pop() {
            Some(value) => {
                self.variables.insert(name, value);
            }
            None => {
                self.variables.remove(&name);
            }
        }
    }

    /// Move the value held by `name` onto main. Loading consumes the variable.
    pub fn load(&mut self, name: Codon) {
        if let Some(value) = self.variables.remove(&name) {
            self.main.push(value);
        }
    }
}
