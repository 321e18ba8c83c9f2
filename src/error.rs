//! Centralised error hierarchy for the **Lox interpreter core**.
//!
//! The resolver and the runtime convert their failure modes into one of the
//! variants defined here, which gives the crate a uniform `Result<T>` alias.
//! Static diagnostics are accumulated by the resolver and handed back as a
//! single [`LoxError::Static`]; runtime errors abort the run at the first one.
//!
//! The module **does not** print diagnostics itself

use std::io;
use thiserror::Error;

use log::info;

use crate::token::{Token, TokenType};

/// Canonical error type used throughout the interpreter.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoxError {
    /// One static‑analysis (resolution) diagnostic.
    #[error("[line {line}] Error{location}: {message}")]
    Resolve {
        /// Human‑readable description.
        message: String,

        /// 1‑based line where the error occurred.
        line: usize,

        /// ` at 'lexeme'`, or ` at end` for the EOF token.
        location: String,
    },

    /// Every diagnostic reported by one resolver pass, in source order.
    #[error("{}", render_lines(.0))]
    Static(Vec<LoxError>),

    /// Runtime evaluation error, carrying the offending token.
    #[error("{message}\n[line {}]", .token.line)]
    Runtime { token: Token, message: String },

    /// A host function could not produce its result.
    #[error("Native function '{name}' failed: {message}")]
    Native {
        name: &'static str,
        message: String,
    },

    /// The resolution table and the environment chain disagree.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Wrapper around `std::io::Error` (transparent). Raised when `print`
    /// output cannot be written.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl LoxError {
    /// Helper constructor for the **resolver**.
    pub fn resolve<S: Into<String>>(token: &Token, msg: S) -> Self {
        let message: String = msg.into();

        info!(
            "Creating Resolve error: line={}, msg={}",
            token.line, message
        );

        let location = if token.token_type == TokenType::EOF {
            " at end".to_string()
        } else {
            format!(" at '{}'", token.lexeme)
        };

        LoxError::Resolve {
            message,
            line: token.line,
            location,
        }
    }

    /// Helper constructor for the **runtime**.
    pub fn runtime<S: Into<String>>(token: &Token, msg: S) -> Self {
        let message: String = msg.into();

        info!(
            "Creating Runtime error: line={}, msg={}",
            token.line, message
        );

        LoxError::Runtime {
            token: token.clone(),
            message,
        }
    }

    /// Line of the offending token, when the error has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoxError::Resolve { line, .. } => Some(*line),
            LoxError::Runtime { token, .. } => Some(token.line),
            _ => None,
        }
    }
}

fn render_lines(errors: &[LoxError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Crate‑wide `Result` alias.
pub type Result<T> = std::result::Result<T, LoxError>;
