//! Arithmetic operation plugins for the calculator shell.
//!
//! Operations are exact: operands and results are `BigRational`, so
//! decimal input like `0.1` never picks up binary floating-point
//! artifacts. The calculator command owns an [`OperationSet`] populated
//! from an explicit registration list, mirrored on the top-level
//! command registry.

mod error;
mod numeric;
mod ops;

pub use error::OpError;
pub use numeric::{format_rational, parse_operand};
pub use ops::{Add, Divide, Multiply, Operation, OperationSet, Subtract};

pub use num_rational::BigRational;

