//! Арифметические операции и диспетчер оператора.
//!
//! Поддерживает ровно четыре оператора: `+`, `-`, `*`, `/`. Сложение,
//! вычитание и умножение дают целое число, деление — число с плавающей точкой.
//!
//! # Примеры
//!
//! ```
//! use simple_calculator::operation::{dispatch, EvalError, Value};
//!
//! assert_eq!(dispatch(5, '+', 3), Ok(Value::Integer(8)));
//! assert_eq!(dispatch(9, '/', 2), Ok(Value::Float(4.5)));
//! assert_eq!(dispatch(9, '/', 0), Err(EvalError::DivisionByZero));
//! assert_eq!(dispatch(5, '%', 2), Err(EvalError::InvalidOperation('%')));
//! ```

use std::fmt::Display;

use thiserror::Error;
use tracing::debug;

/// Ошибки при выполнении операции.
///
/// Текст ошибки выводится пользователю как есть, после префикса `Error: `.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// Оператор не входит в `{+, -, *, /}`.
    #[error("Invalid operation!")]
    InvalidOperation(char),
    /// Деление на ноль.
    #[error("Division by zero!")]
    DivisionByZero,
    /// Целочисленное переполнение.
    #[error("Overflow!")]
    Overflow,
}

/// Распознанные операторы.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Сложение.
    Add,
    /// Вычитание.
    Sub,
    /// Умножение.
    Mul,
    /// Деление с плавающей точкой.
    Div,
}

impl Operator {
    /// Сопоставляет символ оператору.
    ///
    /// # Ошибки
    ///
    /// Возвращает [`EvalError::InvalidOperation`] для любого символа вне
    /// `{+, -, *, /}`.
    pub const fn from_symbol(symbol: char) -> Result<Self, EvalError> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            other => Err(EvalError::InvalidOperation(other)),
        }
    }

    /// Символ оператора.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Применить оператор к операндам.
    ///
    /// Делитель проверяется здесь, до вызова [`divide`].
    ///
    /// # Ошибки
    ///
    /// - [`EvalError::DivisionByZero`] при делении на ноль.
    /// - [`EvalError::Overflow`] при переполнении.
    pub fn apply(self, left: i64, right: i64) -> Result<Value, EvalError> {
        match self {
            Self::Add => add(left, right).map(Value::Integer),
            Self::Sub => subtract(left, right).map(Value::Integer),
            Self::Mul => multiply(left, right).map(Value::Integer),
            Self::Div => {
                if right == 0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(Value::Float(divide(left, right)))
                }
            }
        }
    }
}

/// Результат успешной операции.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Результат `+`, `-`, `*`.
    Integer(i64),
    /// Результат `/`.
    Float(f64),
}

impl Display for Value {
    /// Целые печатаются как есть, дробные — с двумя знаками после точки.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:.2}"),
        }
    }
}

/// Выбирает операцию по символу и выполняет её ровно один раз.
///
/// # Ошибки
///
/// - [`EvalError::InvalidOperation`] для неизвестного символа.
/// - [`EvalError::DivisionByZero`] для `/` с нулевым делителем.
/// - [`EvalError::Overflow`] при переполнении `i64`.
pub fn dispatch(left: i64, symbol: char, right: i64) -> Result<Value, EvalError> {
    let result = Operator::from_symbol(symbol).and_then(|op| op.apply(left, right));
    debug!(left, %symbol, right, ?result, "dispatched");
    result
}

/// Сложение.
///
/// # Ошибки
///
/// [`EvalError::Overflow`], если сумма не помещается в `i64`.
pub const fn add(a: i64, b: i64) -> Result<i64, EvalError> {
    match a.checked_add(b) {
        Some(v) => Ok(v),
        None => Err(EvalError::Overflow),
    }
}

/// Вычитание.
///
/// # Ошибки
///
/// [`EvalError::Overflow`], если разность не помещается в `i64`.
pub const fn subtract(a: i64, b: i64) -> Result<i64, EvalError> {
    match a.checked_sub(b) {
        Some(v) => Ok(v),
        None => Err(EvalError::Overflow),
    }
}

/// Умножение. Корректно и для отрицательного множителя.
///
/// # Ошибки
///
/// [`EvalError::Overflow`], если произведение не помещается в `i64`.
pub const fn multiply(a: i64, b: i64) -> Result<i64, EvalError> {
    match a.checked_mul(b) {
        Some(v) => Ok(v),
        None => Err(EvalError::Overflow),
    }
}

/// Деление с плавающей точкой. Делитель не проверяется.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn divide(a: i64, b: i64) -> f64 {
    a as f64 / b as f64
}
