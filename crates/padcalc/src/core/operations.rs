//! Arithmetic operations
//!
//! Pure binary operations over `f64`. Division by zero yields the NaN
//! sentinel instead of signaling, and NaN absorbs through any further
//! arithmetic, so a degenerate result survives on screen until the user
//! clears it.

use serde::{Deserialize, Serialize};

/// The four operators a keypad button can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
}

impl Operator {
    /// Returns the symbol used on buttons and in the progress line
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Maps a button `data-key` string to an operator
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }
}

/// Applies `op` to an operand pair
///
/// `a / 0` is NaN rather than an error; the widget has no failing
/// arithmetic path.
#[must_use]
pub fn operate(op: Operator, a: f64, b: f64) -> f64 {
    match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                f64::NAN
            } else {
                a / b
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== Operator tests =====

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "-");
        assert_eq!(Operator::Multiply.symbol(), "*");
        assert_eq!(Operator::Divide.symbol(), "/");
    }

    #[test]
    fn test_operator_from_key() {
        assert_eq!(Operator::from_key("+"), Some(Operator::Add));
        assert_eq!(Operator::from_key("-"), Some(Operator::Subtract));
        assert_eq!(Operator::from_key("*"), Some(Operator::Multiply));
        assert_eq!(Operator::from_key("/"), Some(Operator::Divide));
    }

    #[test]
    fn test_operator_from_key_unknown() {
        assert_eq!(Operator::from_key("^"), None);
        assert_eq!(Operator::from_key("%"), None);
        assert_eq!(Operator::from_key(""), None);
        assert_eq!(Operator::from_key("add"), None);
    }

    #[test]
    fn test_operator_from_key_roundtrip() {
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ] {
            assert_eq!(Operator::from_key(op.symbol()), Some(op));
        }
    }

    // ===== operate tests =====

    #[test]
    fn test_operate_add() {
        assert_eq!(operate(Operator::Add, 2.0, 3.0), 5.0);
        assert_eq!(operate(Operator::Add, -2.0, 5.0), 3.0);
    }

    #[test]
    fn test_operate_subtract() {
        assert_eq!(operate(Operator::Subtract, 5.0, 3.0), 2.0);
        assert_eq!(operate(Operator::Subtract, 3.0, 5.0), -2.0);
    }

    #[test]
    fn test_operate_multiply() {
        assert_eq!(operate(Operator::Multiply, 6.0, 7.0), 42.0);
        assert_eq!(operate(Operator::Multiply, -2.0, 3.0), -6.0);
        assert_eq!(operate(Operator::Multiply, 5.0, 0.0), 0.0);
    }

    #[test]
    fn test_operate_divide() {
        assert_eq!(operate(Operator::Divide, 6.0, 2.0), 3.0);
        assert_eq!(operate(Operator::Divide, -6.0, 2.0), -3.0);
        assert_eq!(operate(Operator::Divide, 0.0, 5.0), 0.0);
    }

    #[test]
    fn test_operate_divide_by_zero_is_nan() {
        assert!(operate(Operator::Divide, 10.0, 0.0).is_nan());
        assert!(operate(Operator::Divide, -10.0, 0.0).is_nan());
        assert!(operate(Operator::Divide, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_nan_absorbs() {
        let nan = operate(Operator::Divide, 7.0, 0.0);
        assert!(operate(Operator::Add, nan, 1.0).is_nan());
        assert!(operate(Operator::Subtract, nan, 1.0).is_nan());
        assert!(operate(Operator::Multiply, nan, 0.0).is_nan());
        assert!(operate(Operator::Divide, nan, 2.0).is_nan());
        assert!(operate(Operator::Add, 1.0, nan).is_nan());
    }

    // ===== Property-based tests =====

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e10f64..1e10f64, b in -1e10f64..1e10f64) {
            let r1 = operate(Operator::Add, a, b);
            let r2 = operate(Operator::Add, b, a);
            prop_assert!((r1 - r2).abs() < 1e-10);
        }

        #[test]
        fn prop_multiply_commutative(a in -1e5f64..1e5f64, b in -1e5f64..1e5f64) {
            let r1 = operate(Operator::Multiply, a, b);
            let r2 = operate(Operator::Multiply, b, a);
            prop_assert!((r1 - r2).abs() < 1e-10);
        }

        #[test]
        fn prop_add_identity(a in -1e10f64..1e10f64) {
            prop_assert_eq!(operate(Operator::Add, a, 0.0), a);
        }

        #[test]
        fn prop_multiply_identity(a in -1e10f64..1e10f64) {
            prop_assert_eq!(operate(Operator::Multiply, a, 1.0), a);
        }

        #[test]
        fn prop_divide_by_zero_always_nan(a in -1e10f64..1e10f64) {
            prop_assert!(operate(Operator::Divide, a, 0.0).is_nan());
        }

        #[test]
        fn prop_divide_by_self(a in -1e10f64..1e10f64) {
            prop_assume!(a != 0.0);
            let result = operate(Operator::Divide, a, a);
            prop_assert!((result - 1.0).abs() < 1e-10);
        }
    }
}
