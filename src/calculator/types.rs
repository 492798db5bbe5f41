use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::CalculationError;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CalculationRequest {
    pub num1: f64,
    pub num2: f64,
    /// Kept as a plain string so unknown names surface as `Invalid operation`
    /// rather than a schema error.
    pub operation: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CalculationResponse {
    pub result: f64,
    pub operation: String,
    pub num1: f64,
    pub num2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    pub fn apply(&self, num1: f64, num2: f64) -> Result<f64, CalculationError> {
        match self {
            Operation::Add => Ok(num1 + num2),
            Operation::Subtract => Ok(num1 - num2),
            Operation::Multiply => Ok(num1 * num2),
            // -0.0 == 0.0, so negative zero is rejected too
            Operation::Divide if num2 == 0.0 => Err(CalculationError::DivisionByZero),
            Operation::Divide => Ok(num1 / num2),
        }
    }
}

impl FromStr for Operation {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or(CalculationError::UnknownOperation)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
