/*
 *
 *  *
 *  *      Copyright (c) 2018-2025, SnackCloud All rights reserved.
 *  *
 *  *   Redistribution and use in source and binary forms, with or without
 *  *   modification, are permitted provided that the following conditions are met:
 *  *
 *  *   Redistributions of source code must retain the above copyright notice,
 *  *   this list of conditions and the following disclaimer.
 *  *   Redistributions in binary form must reproduce the above copyright
 *  *   notice, this list of conditions and the following disclaimer in the
 *  *   documentation and/or other materials provided with the distribution.
 *  *   Neither the name of the www.snackcloud.cn developer nor the names of its
 *  *   contributors may be used to endorse or promote products derived from
 *  *   this software without specific prior written permission.
 *  *   Author: SnackCloud
 *  *
 *
 */

//! Errors raised by the classifier, the parser, and the tabular models.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum DsvError {
    /// Invalid argument at call time, raised before any side effect.
    Parameter { message: String, received: Option<String> },
    /// Numeric parameter out of admissible bounds.
    Range { message: String, lower: Option<i64>, upper: Option<i64> },
    /// Parseable text but semantically unsupported (bad encoding name, etc).
    Format { message: String, detail: Option<String> },
    /// Structural constraint failure (empty input when non-empty required, etc).
    Validation { message: String },
    /// I/O failure. Always carries the path.
    File { path: PathBuf, source: std::io::Error },
}

impl DsvError {
    pub fn parameter<M: Into<String>>(message: M) -> Self {
        DsvError::Parameter { message: message.into(), received: None }
    }

    pub fn parameter_with<M: Into<String>, R: fmt::Debug>(message: M, received: R) -> Self {
        DsvError::Parameter {
            message: message.into(),
            received: Some(format!("{:?}", received)),
        }
    }

    pub fn range<M: Into<String>>(message: M, lower: Option<i64>, upper: Option<i64>) -> Self {
        DsvError::Range { message: message.into(), lower, upper }
    }

    pub fn format<M: Into<String>>(message: M, detail: Option<String>) -> Self {
        DsvError::Format { message: message.into(), detail }
    }

    pub fn validation<M: Into<String>>(message: M) -> Self {
        DsvError::Validation { message: message.into() }
    }

    pub fn file<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        DsvError::File { path: path.into(), source }
    }
}

impl fmt::Display for DsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DsvError::Parameter { message, received } => match received {
                Some(r) => write!(f, "Parameter error: {message} (received: {r})"),
                None => write!(f, "Parameter error: {message}"),
            },
            DsvError::Range { message, lower, upper } => {
                write!(f, "Range error: {message}")?;
                match (lower, upper) {
                    (Some(l), Some(u)) => write!(f, " (valid bounds: {l}..={u})"),
                    (Some(l), None) => write!(f, " (valid lower bound: {l})"),
                    (None, Some(u)) => write!(f, " (valid upper bound: {u})"),
                    (None, None) => Ok(()),
                }
            }
            DsvError::Format { message, detail } => match detail {
                Some(d) => write!(f, "Format error: {message} ({d})"),
                None => write!(f, "Format error: {message}"),
            },
            DsvError::Validation { message } => write!(f, "Validation error: {message}"),
            DsvError::File { path, source } => {
                write!(f, "File error on `{}`: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DsvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DsvError::File { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DsvError>;
