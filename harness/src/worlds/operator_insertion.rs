//! `OperatorInsertion`: `+`, `-` or nothing between consecutive digits.
//!
//! With `n` digits there are `n - 1` gaps and `3^(n-1)` expressions. Without
//! a target every expression is a solution; with a target only expressions
//! that evaluate to it are.

use combsearch_search::SearchProblemV1;

use crate::contract::{Variant, WorldV1};
use crate::input::InputError;

/// Target of the "1 to 9 sums to 100" exercise.
pub const HUNDRED: i64 = 100;

/// What goes into a gap between two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Concat,
}

impl Operator {
    /// Exploration order: `+`, `-`, then concatenation.
    pub const ALL: [Operator; 3] = [Self::Plus, Self::Minus, Self::Concat];

    /// Text inserted into the expression.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Concat => "",
        }
    }
}

/// Operator-insertion world over a digit string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorInsertion {
    digits: Vec<u8>,
    target: Option<i64>,
    world_id: String,
}

/// Expression built so far and the index of the next digit to place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionState {
    pub next_digit: usize,
    pub expression: String,
}

impl OperatorInsertion {
    /// Construct a world. `target = None` accepts every full expression.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::DigitOutOfRange`] for the first entry of `digits`
    /// above 9.
    pub fn new(digits: Vec<u8>, target: Option<i64>) -> Result<Self, InputError> {
        if let Some(position) = digits.iter().position(|d| *d > 9) {
            return Err(InputError::DigitOutOfRange {
                value: digits[position],
                position: position + 1,
            });
        }
        let digit_text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        let world_id = match target {
            Some(t) => format!("operator_insertion:v1:{digit_text}:t{t}"),
            None => format!("operator_insertion:v1:{digit_text}"),
        };
        Ok(Self {
            digits,
            target,
            world_id,
        })
    }

    fn digit_char(&self, index: usize) -> char {
        char::from(b'0' + self.digits[index])
    }
}

/// Number of `+` and `-` signs in an expression.
#[must_use]
pub fn operator_count(expression: &str) -> usize {
    expression.chars().filter(|c| matches!(c, '+' | '-')).count()
}

/// Evaluate a left-to-right `+`/`-` expression of unsigned integer terms.
///
/// Returns `None` for an empty or malformed expression, or on overflow.
#[must_use]
pub fn evaluate(expression: &str) -> Option<i64> {
    let mut total: i64 = 0;
    let mut term: Option<i64> = None;
    let mut sign: i64 = 1;

    for ch in expression.chars() {
        match ch {
            '0'..='9' => {
                let digit = i64::from(ch.to_digit(10)?);
                term = Some(term.unwrap_or(0).checked_mul(10)?.checked_add(digit)?);
            }
            '+' | '-' => {
                total = total.checked_add(sign.checked_mul(term?)?)?;
                term = None;
                sign = if ch == '+' { 1 } else { -1 };
            }
            _ => return None,
        }
    }
    total.checked_add(sign.checked_mul(term?)?)
}

impl SearchProblemV1 for OperatorInsertion {
    type State = ExpressionState;
    type Candidate = Operator;
    type Solution = String;

    fn problem_id(&self) -> &str {
        &self.world_id
    }

    fn root(&self) -> ExpressionState {
        if self.digits.is_empty() {
            return ExpressionState {
                next_digit: 0,
                expression: String::new(),
            };
        }
        ExpressionState {
            next_digit: 1,
            expression: self.digit_char(0).to_string(),
        }
    }

    fn candidates(&self, state: &ExpressionState) -> Vec<Operator> {
        if state.next_digit < self.digits.len() {
            Operator::ALL.to_vec()
        } else {
            Vec::new()
        }
    }

    fn extend(&self, state: &ExpressionState, candidate: &Operator) -> ExpressionState {
        let mut expression = String::with_capacity(state.expression.len() + 2);
        expression.push_str(&state.expression);
        expression.push_str(candidate.as_str());
        expression.push(self.digit_char(state.next_digit));
        ExpressionState {
            next_digit: state.next_digit + 1,
            expression,
        }
    }

    fn is_goal(&self, state: &ExpressionState) -> bool {
        if self.digits.is_empty() || state.next_digit < self.digits.len() {
            return false;
        }
        match self.target {
            Some(target) => evaluate(&state.expression) == Some(target),
            None => true,
        }
    }

    fn is_prunable(&self, _state: &ExpressionState) -> bool {
        false
    }

    fn solution(&self, state: &ExpressionState) -> String {
        state.expression.clone()
    }

    fn solution_json(&self, solution: &String) -> serde_json::Value {
        serde_json::json!(solution)
    }
}

impl WorldV1 for OperatorInsertion {
    fn variant(&self) -> Variant {
        Variant::OperatorInsertion
    }

    fn render(&self, solution: &String) -> String {
        solution.clone()
    }
}
