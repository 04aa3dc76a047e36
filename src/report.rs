//! Вывод подсказок и итогового сообщения.

use std::io::{self, Write};

use crate::operation::{EvalError, Value};

/// Заголовок, печатаемый перед первой подсказкой.
pub const BANNER: &str = "Simple Calculator";
/// Подсказка перед первым операндом.
pub const PROMPT_FIRST: &str = "Enter first number: ";
/// Подсказка перед оператором.
pub const PROMPT_OPERATOR: &str = "Enter operation (+, -, *, /): ";
/// Подсказка перед вторым операндом.
pub const PROMPT_SECOND: &str = "Enter second number: ";

/// Форматирует итог операции одной строкой без перевода строки.
///
/// ```
/// use simple_calculator::operation::{EvalError, Value};
/// use simple_calculator::report::format_outcome;
///
/// assert_eq!(format_outcome(&Ok(Value::Integer(8))), "Result: 8");
/// assert_eq!(format_outcome(&Ok(Value::Float(4.5))), "Result: 4.50");
/// assert_eq!(
///     format_outcome(&Err(EvalError::DivisionByZero)),
///     "Error: Division by zero!"
/// );
/// ```
#[must_use]
pub fn format_outcome(outcome: &Result<Value, EvalError>) -> String {
    match outcome {
        Ok(value) => format!("Result: {value}"),
        Err(err) => format!("Error: {err}"),
    }
}

/// Печатает ровно одну строку с итогом.
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибке записи.
pub fn write_outcome(out: &mut impl Write, outcome: &Result<Value, EvalError>) -> io::Result<()> {
    writeln!(out, "{}", format_outcome(outcome))?;
    out.flush()
}

/// Печатает подсказку без перевода строки и сбрасывает буфер,
/// чтобы она была видна до блокирующего чтения.
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибке записи.
pub fn write_prompt(out: &mut impl Write, prompt: &str) -> io::Result<()> {
    write!(out, "{prompt}")?;
    out.flush()
}
