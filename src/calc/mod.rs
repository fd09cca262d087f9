//! Four-function calculator: arithmetic plus the button-event state machine.
//!
//! ## Model
//!
//! [`operate`] is the arithmetic core: one operator applied to two operands,
//! with division by zero as the single failure case. [`Calculator`] layers
//! the button semantics on top - digit entry appends to a display string,
//! pressing an operator chains the pending operation, equals evaluates, and
//! clear resets everything. All of it lives in one explicit state value;
//! there are no ambient globals.
//!
//! ## Division by zero
//!
//! A rejected division leaves the calculator exactly as it was: the display,
//! the pending operand, and the pending operator all survive, so the user
//! can change the right-hand side and try again.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Calculator failure cases.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division with a zero divisor. The operation is rejected and prior
    /// state is unchanged.
    #[error("cannot divide by zero")]
    DivideByZero,
}

/// One of the four arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The conventional symbol for this operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Apply `op` to two operands.
///
/// The only error is [`CalcError::DivideByZero`].
pub fn operate(op: Operator, a: f64, b: f64) -> Result<f64, CalcError> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Subtract => Ok(a - b),
        Operator::Multiply => Ok(a * b),
        Operator::Divide => {
            if b == 0.0 {
                Err(CalcError::DivideByZero)
            } else {
                Ok(a / b)
            }
        }
    }
}

/// Button-driven calculator state.
///
/// The display is a string, not a number: digit entry is textual and the
/// decimal point button must see whether a point is already present. The
/// display parses as `f64` at evaluation time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calculator {
    display: String,
    /// Left-hand operand captured when an operator was pressed.
    pending: Option<f64>,
    operator: Option<Operator>,
    /// Next digit starts a fresh entry instead of appending.
    entry_done: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// A cleared calculator showing `0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            operator: None,
            entry_done: false,
        }
    }

    /// Current display contents.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Current display as a number.
    #[must_use]
    pub fn value(&self) -> f64 {
        // The display only ever holds digit/point sequences or a formatted
        // result, all of which parse.
        self.display.parse().unwrap_or(0.0)
    }

    /// Press a digit button (0-9).
    pub fn press_digit(&mut self, digit: u8) {
        assert!(digit <= 9, "digit buttons are 0-9");
        let digit = char::from(b'0' + digit);

        if self.entry_done {
            self.display.clear();
            self.display.push(digit);
            self.entry_done = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
    }

    /// Press the decimal point button.
    ///
    /// Starts a fresh `0.` entry after an operator or result; otherwise
    /// appends a point only if the entry does not already contain one.
    pub fn press_decimal(&mut self) {
        if self.entry_done {
            self.display = "0.".to_string();
            self.entry_done = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Press an operator button.
    ///
    /// If an operation is already pending and a second operand has been
    /// entered, that operation is evaluated first, so `12 + 7 * 2` chains
    /// left to right. The display value then becomes the left-hand operand
    /// of the new operator.
    pub fn press_operator(&mut self, op: Operator) -> Result<(), CalcError> {
        if let (Some(prev), Some(left)) = (self.operator, self.pending) {
            if !self.entry_done {
                let result = operate(prev, left, self.value())?;
                self.display = format_value(result);
            }
        }
        self.pending = Some(self.value());
        self.operator = Some(op);
        self.entry_done = true;
        Ok(())
    }

    /// Press the equals button.
    ///
    /// Evaluates the pending operation against the display. A second press
    /// is a no-op because the pending operator is consumed.
    pub fn press_equals(&mut self) -> Result<(), CalcError> {
        let (Some(op), Some(left)) = (self.operator, self.pending) else {
            return Ok(());
        };
        let result = operate(op, left, self.value())?;
        self.display = format_value(result);
        self.pending = None;
        self.operator = None;
        self.entry_done = true;
        Ok(())
    }

    /// Press the clear button: back to a fresh calculator.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

/// Format a result for the display.
///
/// Whole numbers print without a trailing `.0` so `6 * 2` shows `12`, the
/// way a calculator display would.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operate_basics() {
        assert_eq!(operate(Operator::Add, 2.0, 3.0), Ok(5.0));
        assert_eq!(operate(Operator::Subtract, 2.0, 3.0), Ok(-1.0));
        assert_eq!(operate(Operator::Multiply, 2.0, 3.0), Ok(6.0));
        assert_eq!(operate(Operator::Divide, 6.0, 3.0), Ok(2.0));
    }

    #[test]
    fn test_operate_divide_by_zero() {
        assert_eq!(
            operate(Operator::Divide, 1.0, 0.0),
            Err(CalcError::DivideByZero)
        );
    }

    #[test]
    fn test_digit_entry_appends() {
        let mut calc = Calculator::new();
        assert_eq!(calc.display(), "0");

        calc.press_digit(1);
        calc.press_digit(2);
        calc.press_digit(3);
        assert_eq!(calc.display(), "123");
    }

    #[test]
    fn test_leading_zero_is_replaced() {
        let mut calc = Calculator::new();
        calc.press_digit(0);
        assert_eq!(calc.display(), "0");
        calc.press_digit(7);
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_simple_addition() {
        let mut calc = Calculator::new();
        calc.press_digit(1);
        calc.press_digit(2);
        calc.press_operator(Operator::Add).unwrap();
        calc.press_digit(7);
        calc.press_equals().unwrap();

        assert_eq!(calc.display(), "19");
        assert_eq!(calc.value(), 19.0);
    }

    #[test]
    fn test_operator_chains_left_to_right() {
        // 12 + 7 * 2 evaluates as (12 + 7) * 2, no precedence.
        let mut calc = Calculator::new();
        calc.press_digit(1);
        calc.press_digit(2);
        calc.press_operator(Operator::Add).unwrap();
        calc.press_digit(7);
        calc.press_operator(Operator::Multiply).unwrap();
        assert_eq!(calc.display(), "19");

        calc.press_digit(2);
        calc.press_equals().unwrap();
        assert_eq!(calc.display(), "38");
    }

    #[test]
    fn test_decimal_entry() {
        let mut calc = Calculator::new();
        calc.press_digit(3);
        calc.press_decimal();
        calc.press_digit(5);
        assert_eq!(calc.display(), "3.5");

        // A second point in the same entry is ignored.
        calc.press_decimal();
        calc.press_digit(5);
        assert_eq!(calc.display(), "3.55");
    }

    #[test]
    fn test_decimal_starts_fresh_entry_after_operator() {
        let mut calc = Calculator::new();
        calc.press_digit(1);
        calc.press_operator(Operator::Add).unwrap();
        calc.press_decimal();
        assert_eq!(calc.display(), "0.");
        calc.press_digit(5);
        calc.press_equals().unwrap();
        assert_eq!(calc.display(), "1.5");
    }

    #[test]
    fn test_divide_by_zero_leaves_state_unchanged() {
        let mut calc = Calculator::new();
        calc.press_digit(8);
        calc.press_operator(Operator::Divide).unwrap();
        calc.press_digit(0);

        let before = calc.clone();
        assert_eq!(calc.press_equals(), Err(CalcError::DivideByZero));
        assert_eq!(calc, before);

        // Recoverable: replace the divisor and evaluate again.
        calc.press_digit(2);
        assert_eq!(calc.display(), "2");
        calc.press_equals().unwrap();
        assert_eq!(calc.display(), "4");
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        let mut calc = Calculator::new();
        calc.press_digit(4);
        calc.press_equals().unwrap();
        assert_eq!(calc.display(), "4");
    }

    #[test]
    fn test_equals_twice_does_not_repeat() {
        let mut calc = Calculator::new();
        calc.press_digit(5);
        calc.press_operator(Operator::Add).unwrap();
        calc.press_digit(3);
        calc.press_equals().unwrap();
        assert_eq!(calc.display(), "8");

        calc.press_equals().unwrap();
        assert_eq!(calc.display(), "8");
    }

    #[test]
    fn test_digit_after_equals_starts_fresh() {
        let mut calc = Calculator::new();
        calc.press_digit(5);
        calc.press_operator(Operator::Add).unwrap();
        calc.press_digit(3);
        calc.press_equals().unwrap();

        calc.press_digit(9);
        assert_eq!(calc.display(), "9");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut calc = Calculator::new();
        calc.press_digit(5);
        calc.press_operator(Operator::Add).unwrap();
        calc.press_digit(3);

        calc.clear();
        assert_eq!(calc, Calculator::new());
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_fractional_result_display() {
        let mut calc = Calculator::new();
        calc.press_digit(1);
        calc.press_operator(Operator::Divide).unwrap();
        calc.press_digit(4);
        calc.press_equals().unwrap();
        assert_eq!(calc.display(), "0.25");
    }
}
