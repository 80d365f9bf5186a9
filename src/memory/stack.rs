//! Operand stack
//!
//! A last-in-first-out sequence of signed integers. Befunge never fails on
//! an empty stack: [`OperandStack::pop`] yields `0` instead, so every
//! instruction handler gets the defaulting behavior from one place.

/// A single stack cell
pub type Value = i64;

/// The operand stack
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperandStack {
    values: Vec<Value>,
}

impl OperandStack {
    pub fn new() -> Self {
        OperandStack { values: Vec::new() }
    }

    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Pop the top value, or `0` if the stack is empty
    pub fn pop(&mut self) -> Value {
        self.values.pop().unwrap_or(0)
    }

    /// Pop `a` then `b`, returned as `(b, a)` (i.e. in push order)
    pub fn pop_pair(&mut self) -> (Value, Value) {
        let a = self.pop();
        let b = self.pop();
        (b, a)
    }

    /// Top value without removing it, or `0` if empty
    pub fn peek(&self) -> Value {
        self.values.last().copied().unwrap_or(0)
    }

    /// Duplicate the top value. An empty stack gains a single `0`.
    pub fn duplicate(&mut self) {
        let top = self.peek();
        self.values.push(top);
    }

    /// Swap the top two values, treating missing ones as `0`
    pub fn swap(&mut self) {
        let a = self.pop();
        let b = self.pop();
        self.push(a);
        self.push(b);
    }

    pub fn depth(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values bottom to top
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl From<Vec<Value>> for OperandStack {
    fn from(values: Vec<Value>) -> Self {
        OperandStack { values }
    }
}
