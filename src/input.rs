//! Чтение операндов и оператора из текстового потока.
//!
//! Токены читаются по одному и строки подтягиваются из источника только по
//! мере необходимости, поэтому перед каждым чтением можно вывести подсказку.
//! Пробелы и переводы строк между токенами пропускаются. Операнд — это
//! необязательный знак и десятичные цифры; он заканчивается на первой
//! не-цифре, так что `5+3` читается как `5`, `+`, `3`.
//!
//! # Пример
//!
//! ```
//! use simple_calculator::input::InputReader;
//!
//! let mut reader = InputReader::new("  7\n*  -3".as_bytes());
//! assert_eq!(reader.read_operand().unwrap(), 7);
//! assert_eq!(reader.read_operator().unwrap(), '*');
//! assert_eq!(reader.read_operand().unwrap(), -3);
//! ```

use std::{fmt::Display, io, io::BufRead, ops::Range};

use thiserror::Error;
use tracing::{debug, warn};

/// Позиция токена во входном потоке.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Номер строки, начиная с 1.
    pub line: usize,
    /// Смещение в байтах от начала строки.
    pub column: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Ошибки чтения ввода.
#[derive(Error, Debug)]
pub enum InputError {
    /// Поток закончился раньше, чем был прочитан токен.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// На месте операнда нет цифр.
    #[error("invalid number '{found}' at {pos}")]
    InvalidNumber {
        /// Позиция токена.
        pos: Position,
        /// Что было найдено вместо числа.
        found: String,
    },

    /// Число не помещается в `i64`.
    #[error("number out of range at {pos}")]
    NumberOutOfRange {
        /// Позиция числа.
        pos: Position,
    },

    /// Ошибка нижележащего потока.
    #[error("{0}")]
    Io(#[from] io::Error),
}

impl InputError {
    /// Возвращает позицию ошибки, если она известна.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::InvalidNumber { pos, .. } | Self::NumberOutOfRange { pos } => Some(*pos),
            Self::UnexpectedEof | Self::Io(_) => None,
        }
    }
}

/// Построчный читатель токенов.
pub struct InputReader<R> {
    source: R,
    line: String,
    offset: usize,
    line_no: usize,
}

impl<R: BufRead> InputReader<R> {
    /// Создаёт читатель поверх источника.
    pub const fn new(source: R) -> Self {
        Self {
            source,
            line: String::new(),
            offset: 0,
            line_no: 0,
        }
    }

    fn rest(&self) -> &str {
        &self.line[self.offset..]
    }

    fn position(&self) -> Position {
        Position {
            line: self.line_no,
            column: self.offset,
        }
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) -> Range<usize> {
        let start = self.offset;
        let byte_len: usize = self
            .rest()
            .chars()
            .take_while(|&c| predicate(c))
            .map(char::len_utf8)
            .sum();

        self.offset += byte_len;
        start..self.offset
    }

    /// Пропускает пробелы, при необходимости дочитывая новые строки.
    fn skip_whitespace(&mut self) -> Result<(), InputError> {
        loop {
            self.advance_while(char::is_whitespace);
            if !self.rest().is_empty() {
                return Ok(());
            }

            self.line.clear();
            self.offset = 0;
            if self.source.read_line(&mut self.line)? == 0 {
                warn!(line = self.line_no, "input ended before the next token");
                return Err(InputError::UnexpectedEof);
            }
            self.line_no += 1;
        }
    }

    /// Читает целый операнд: необязательный знак и десятичные цифры.
    ///
    /// # Ошибки
    ///
    /// - [`InputError::UnexpectedEof`], если поток закончился.
    /// - [`InputError::InvalidNumber`], если нет ни одной цифры.
    /// - [`InputError::NumberOutOfRange`], если число не помещается в `i64`.
    /// - [`InputError::Io`] при ошибке чтения.
    pub fn read_operand(&mut self) -> Result<i64, InputError> {
        self.skip_whitespace()?;

        let pos = self.position();
        let start = self.offset;
        if self.rest().starts_with(['+', '-']) {
            self.offset += 1;
        }

        if self.advance_while(|c| c.is_ascii_digit()).is_empty() {
            let found = self.line[start..]
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_owned();
            warn!(%pos, %found, "operand is not a number");
            return Err(InputError::InvalidNumber { pos, found });
        }

        let text = &self.line[start..self.offset];
        let value: i64 = text.parse().map_err(|_| {
            warn!(%pos, text, "operand out of range");
            InputError::NumberOutOfRange { pos }
        })?;

        debug!(%pos, value, "read operand");
        Ok(value)
    }

    /// Читает один непробельный символ оператора.
    ///
    /// Символ не проверяется: неизвестные операторы отсекает диспетчер.
    ///
    /// # Ошибки
    ///
    /// [`InputError::UnexpectedEof`] или [`InputError::Io`].
    pub fn read_operator(&mut self) -> Result<char, InputError> {
        self.skip_whitespace()?;

        let pos = self.position();
        let symbol = self.rest().chars().next().ok_or(InputError::UnexpectedEof)?;
        self.offset += symbol.len_utf8();

        debug!(%pos, %symbol, "read operator");
        Ok(symbol)
    }
}
