//! The `Operation` capability and the built-in arithmetic plugins.

use num_rational::BigRational;
use num_traits::Zero;

use crate::error::OpError;

/// A binary arithmetic operation the calculator can dispatch to.
///
/// Implementations are self-contained; divide is the only one with a
/// failure mode, and it validates the divisor before dividing.
pub trait Operation {
    fn name(&self) -> &'static str;
    fn apply(&self, a: &BigRational, b: &BigRational) -> Result<BigRational, OpError>;
}

pub struct Add;

impl Operation for Add {
    fn name(&self) -> &'static str {
        "add"
    }

    fn apply(&self, a: &BigRational, b: &BigRational) -> Result<BigRational, OpError> {
        Ok(a + b)
    }
}

pub struct Subtract;

impl Operation for Subtract {
    fn name(&self) -> &'static str {
        "subtract"
    }

    fn apply(&self, a: &BigRational, b: &BigRational) -> Result<BigRational, OpError> {
        Ok(a - b)
    }
}

pub struct Multiply;

impl Operation for Multiply {
    fn name(&self) -> &'static str {
        "multiply"
    }

    fn apply(&self, a: &BigRational, b: &BigRational) -> Result<BigRational, OpError> {
        Ok(a * b)
    }
}

pub struct Divide;

impl Operation for Divide {
    fn name(&self) -> &'static str {
        "divide"
    }

    fn apply(&self, a: &BigRational, b: &BigRational) -> Result<BigRational, OpError> {
        if b.is_zero() {
            return Err(OpError::DivisionByZero);
        }
        Ok(a / b)
    }
}

/// Ordered, name-keyed set of operations.
///
/// Registration order defines the numbered sub-menu the calculator
/// shows. Registering a name twice replaces the instance in place
/// (last registration wins, original menu position kept).
pub struct OperationSet {
    ops: Vec<Box<dyn Operation>>,
}

impl OperationSet {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// The standard four operations, in the order they are presented.
    pub fn with_default_ops() -> Self {
        let mut set = Self::new();
        set.add_op(Box::new(Add));
        set.add_op(Box::new(Subtract));
        set.add_op(Box::new(Multiply));
        set.add_op(Box::new(Divide));
        set
    }

    pub fn add_op(&mut self, op: Box<dyn Operation>) {
        if let Some(slot) = self.ops.iter_mut().find(|o| o.name() == op.name()) {
            *slot = op;
        } else {
            self.ops.push(op);
        }
    }

    /// Resolve a 1-based menu index. `0` and out-of-range indices are
    /// never valid operations.
    pub fn by_index(&self, index: usize) -> Option<&dyn Operation> {
        let position = index.checked_sub(1)?;
        self.ops.get(position).map(|op| op.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ops.iter().map(|op| op.name())
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl Default for OperationSet {
    fn default() -> Self {
        Self::with_default_ops()
    }
}
