//! Two-operand arithmetic behind the `/calculate` endpoint.

mod types;

pub use types::*;

use thiserror::Error;
use tracing::info;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Invalid operation")]
    UnknownOperation,
}

/// Runs one calculation and echoes the operands back with the result.
///
/// The operation name must match one of `add`, `subtract`, `multiply` or
/// `divide` exactly. Arithmetic is plain IEEE-754 `f64`.
pub fn calculate(request: CalculationRequest) -> Result<CalculationResponse, CalculationError> {
    info!(
        num1 = request.num1,
        num2 = request.num2,
        operation = %request.operation,
        "Received calculation request"
    );

    let operation: Operation = request.operation.parse()?;
    let result = operation.apply(request.num1, request.num2)?;

    Ok(CalculationResponse {
        result,
        operation: request.operation,
        num1: request.num1,
        num2: request.num2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(num1: f64, num2: f64, operation: &str) -> CalculationRequest {
        CalculationRequest {
            num1,
            num2,
            operation: operation.to_string(),
        }
    }

    #[test]
    fn test_add() {
        let response = calculate(request(2.0, 3.0, "add")).unwrap();
        assert_eq!(
            response,
            CalculationResponse {
                result: 5.0,
                operation: "add".to_string(),
                num1: 2.0,
                num2: 3.0,
            }
        );
    }

    #[test]
    fn test_subtract_and_multiply() {
        assert_eq!(calculate(request(10.0, 4.0, "subtract")).unwrap().result, 6.0);
        assert_eq!(calculate(request(6.0, 7.0, "multiply")).unwrap().result, 42.0);
    }

    #[test]
    fn test_divide() {
        let response = calculate(request(7.0, 2.0, "divide")).unwrap();
        assert_eq!(response.result, 3.5);
        assert_eq!(response.operation, "divide");
    }

    #[test]
    fn test_divide_by_zero() {
        let err = calculate(request(5.0, 0.0, "divide")).unwrap_err();
        assert_eq!(err, CalculationError::DivisionByZero);
        assert_eq!(err.to_string(), "Cannot divide by zero");
    }

    #[test]
    fn test_divide_by_negative_zero() {
        assert_eq!(
            calculate(request(5.0, -0.0, "divide")),
            Err(CalculationError::DivisionByZero)
        );
    }

    #[test]
    fn test_zero_divisor_allowed_for_other_operations() {
        assert_eq!(calculate(request(5.0, 0.0, "multiply")).unwrap().result, 0.0);
    }

    #[test]
    fn test_unknown_operation() {
        let err = calculate(request(3.0, 4.0, "power")).unwrap_err();
        assert_eq!(err, CalculationError::UnknownOperation);
        assert_eq!(err.to_string(), "Invalid operation");
    }

    #[test]
    fn test_operation_match_is_case_sensitive() {
        assert_eq!("Add".parse::<Operation>(), Err(CalculationError::UnknownOperation));
        assert_eq!(" add".parse::<Operation>(), Err(CalculationError::UnknownOperation));
        assert_eq!("".parse::<Operation>(), Err(CalculationError::UnknownOperation));
    }

    #[test]
    fn test_operation_names_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.as_str().parse::<Operation>(), Ok(op));
            assert_eq!(op.to_string(), op.as_str());
        }
    }

    #[test]
    fn test_overflow_follows_ieee754() {
        let response = calculate(request(f64::MAX, 2.0, "multiply")).unwrap();
        assert!(response.result.is_infinite());
    }

    #[test]
    fn test_repeated_requests_are_identical() {
        let first = calculate(request(1.5, 2.25, "multiply"));
        let second = calculate(request(1.5, 2.25, "multiply"));
        assert_eq!(first, second);
    }
}
