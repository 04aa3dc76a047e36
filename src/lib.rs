//! # simple_calculator
//!
//! Простой консольный калькулятор на одну операцию.
//!
//! Читает два целых операнда (i64) и символ оператора, выполняет одну из
//! операций `+`, `-`, `*`, `/` и печатает результат или сообщение об ошибке.
//!
//! # Пример использования
//!
//! ```
//! use simple_calculator::{evaluate, operation::Value};
//!
//! assert_eq!(evaluate("5 + 3").unwrap(), Value::Integer(8));
//! assert_eq!(evaluate("9 / 2").unwrap(), Value::Float(4.5));
//! assert!(evaluate("9 / 0").is_err());
//! ```

pub mod cli;
pub mod input;
pub mod operation;
pub mod report;

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::input::{InputError, InputReader, Position};
use crate::operation::{EvalError, Value, dispatch};
use crate::report::{BANNER, PROMPT_FIRST, PROMPT_OPERATOR, PROMPT_SECOND};

/// Итог одной операции: значение или арифметическая ошибка.
pub type Outcome = Result<Value, EvalError>;

/// Общий тип ошибки калькулятора.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    /// Ошибка чтения ввода.
    #[error("{0}")]
    Input(#[from] InputError),

    /// Ошибка вычисления (неизвестный оператор, деление на ноль, переполнение).
    #[error("{0}")]
    Eval(#[from] EvalError),

    /// Ошибка записи вывода.
    #[error("{0}")]
    Io(#[from] io::Error),
}

impl CalcError {
    /// Возвращает позицию ошибки во вводе, если она известна.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::Input(ie) => ie.position(),
            Self::Eval(_) | Self::Io(_) => None,
        }
    }
}

/// Вычисляет строку вида `<число> <оператор> <число>`.
///
/// Всё, что идёт после второго операнда, игнорируется.
///
/// # Ошибки
///
/// Возвращает [`CalcError`] при ошибке чтения или вычисления.
///
/// # Примеры
///
/// ```
/// use simple_calculator::{evaluate, operation::Value};
///
/// assert_eq!(evaluate("7 * -3").unwrap(), Value::Integer(-21));
/// assert!(evaluate("5 % 2").is_err());
/// assert!(evaluate("5 +").is_err());
/// ```
pub fn evaluate(input: &str) -> Result<Value, CalcError> {
    let mut reader = InputReader::new(input.as_bytes());
    let left = reader.read_operand()?;
    let symbol = reader.read_operator()?;
    let right = reader.read_operand()?;
    Ok(dispatch(left, symbol, right)?)
}

/// Выполняет один сеанс калькулятора.
///
/// Печатает заголовок и подсказки (если `prompts`), читает первый операнд,
/// оператор и второй операнд, затем печатает ровно одну строку итога.
/// Арифметические ошибки — это обычный итог и возвращаются в [`Outcome`].
///
/// # Ошибки
///
/// Возвращает [`CalcError::Input`], если ввод не удалось прочитать,
/// и [`CalcError::Io`] при ошибке записи.
pub fn run(input: impl BufRead, output: &mut impl Write, prompts: bool) -> Result<Outcome, CalcError> {
    let mut reader = InputReader::new(input);

    if prompts {
        writeln!(output, "{BANNER}")?;
    }

    prompt(output, prompts, PROMPT_FIRST)?;
    let left = reader.read_operand()?;

    prompt(output, prompts, PROMPT_OPERATOR)?;
    let symbol = reader.read_operator()?;

    prompt(output, prompts, PROMPT_SECOND)?;
    let right = reader.read_operand()?;

    let outcome = dispatch(left, symbol, right);
    report::write_outcome(output, &outcome)?;
    debug!(?outcome, "session finished");

    Ok(outcome)
}

fn prompt(output: &mut impl Write, enabled: bool, text: &str) -> io::Result<()> {
    if enabled {
        report::write_prompt(output, text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_simple() {
        assert_eq!(evaluate("1 + 2").unwrap(), Value::Integer(3));
        assert_eq!(evaluate("10 - 3").unwrap(), Value::Integer(7));
        assert_eq!(evaluate("4 * 5").unwrap(), Value::Integer(20));
        assert_eq!(evaluate("15 / 3").unwrap(), Value::Float(5.0));
    }

    #[test]
    fn evaluate_i64_bounds() {
        assert_eq!(
            evaluate("-9223372036854775808 + 0").unwrap(),
            Value::Integer(i64::MIN)
        );
        assert_eq!(
            evaluate("9223372036854775807 * 1").unwrap(),
            Value::Integer(i64::MAX)
        );
    }

    #[test]
    fn evaluate_errors() {
        assert!(matches!(
            evaluate("1 / 0"),
            Err(CalcError::Eval(EvalError::DivisionByZero))
        ));
        assert!(matches!(
            evaluate("1 ^ 2"),
            Err(CalcError::Eval(EvalError::InvalidOperation('^')))
        ));
        assert!(matches!(evaluate("1 +"), Err(CalcError::Input(_))));
        assert!(matches!(evaluate(""), Err(CalcError::Input(_))));
    }

    #[test]
    fn error_has_position() {
        let err = evaluate("1 + x").unwrap_err();
        assert_eq!(err.position(), Some(Position { line: 1, column: 4 }));

        // Ошибка вычисления не имеет позиции
        let err = evaluate("1 / 0").unwrap_err();
        assert_eq!(err.position(), None);
    }

    #[test]
    fn run_without_prompts_prints_only_outcome() {
        let mut out = Vec::new();
        let outcome = run("6 * 7".as_bytes(), &mut out, false).unwrap();
        assert_eq!(outcome, Ok(Value::Integer(42)));
        assert_eq!(String::from_utf8(out).unwrap(), "Result: 42\n");
    }

    #[test]
    fn run_with_prompts() {
        let mut out = Vec::new();
        run("5\n+\n3\n".as_bytes(), &mut out, true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{BANNER}\n{PROMPT_FIRST}{PROMPT_OPERATOR}{PROMPT_SECOND}Result: 8\n")
        );
    }

    #[test]
    fn run_reports_input_error() {
        let mut out = Vec::new();
        let err = run("5 + nine".as_bytes(), &mut out, false).unwrap_err();
        assert!(matches!(err, CalcError::Input(InputError::InvalidNumber { .. })));
        assert!(out.is_empty());
    }
}
