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

//! `Cell` is the typed value produced by projecting a raw text token
//! through the classifier for a known column `DataType`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::classify;
use crate::types::DataType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    Text(String),
    None,
}

impl Cell {
    /// Convert a raw token to the `Cell` representation of `target`,
    /// using the crate-wide defaults: the natural zero/identity value
    /// for empty numeric/boolean cells, `None` everywhere else for
    /// empty or none-like cells. Falls back to `Cell::Text` when the
    /// token does not actually conform to `target` (a caller-supplied
    /// type mismatch never panics or raises; it degrades to text,
    /// matching the crate's return-default-on-failure policy for
    /// cell-level conversions).
    pub fn from_raw(raw: &str, target: DataType, trim: bool) -> Self {
        Self::from_raw_with_defaults(raw, target, trim, &TypeConfig::default_empty(target), &Cell::None)
    }

    /// Convert a raw token to `target`'s `Cell` representation, using
    /// `empty_default`/`none_default` in place of the crate's built-in
    /// defaults for empty-like and none-like text respectively. This is
    /// the primitive [`TypeConfig`]-driven typed projection builds on.
    pub fn from_raw_with_defaults(
        raw: &str,
        target: DataType,
        trim: bool,
        empty_default: &Cell,
        none_default: &Cell,
    ) -> Self {
        if classify::is_empty_like(raw, trim) {
            return empty_default.clone();
        }
        if classify::is_none_like(Some(raw), trim) {
            return none_default.clone();
        }
        if target == DataType::Mixed {
            return Cell::Text(raw.to_string());
        }
        match target {
            DataType::Integer => classify::to_int(raw, trim).map(Cell::Integer),
            DataType::Float => classify::to_float(raw, trim).map(Cell::Float),
            DataType::Boolean => classify::to_bool(raw, trim).map(Cell::Boolean),
            DataType::Date => classify::to_date(raw, trim).map(Cell::Date),
            DataType::Time => classify::to_time(raw, trim).map(Cell::Time),
            DataType::DateTime => classify::to_datetime(raw, trim).map(Cell::DateTime),
            DataType::Empty | DataType::None | DataType::String | DataType::Mixed => None,
        }
        .unwrap_or_else(|| Cell::Text(raw.to_string()))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Cell::None)
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Cell::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Cell::Float(v) => Some(*v),
            Cell::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Cell::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(v) => Some(v),
            _ => None,
        }
    }

    /// The `DataType` variant this cell was produced as.
    pub fn data_type(&self) -> DataType {
        match self {
            Cell::Integer(_) => DataType::Integer,
            Cell::Float(_) => DataType::Float,
            Cell::Boolean(_) => DataType::Boolean,
            Cell::Date(_) => DataType::Date,
            Cell::Time(_) => DataType::Time,
            Cell::DateTime(_) => DataType::DateTime,
            Cell::Text(_) => DataType::String,
            Cell::None => DataType::None,
        }
    }
}

/// Per-`DataType` `(empty_default, none_default)` overrides for the
/// typed projection (table §4.6). Columns whose type has no override
/// fall back to the crate's built-in defaults: the natural
/// zero/identity value for empty numeric/boolean cells, `Cell::None`
/// for empty temporal/string/mixed cells and for every none-like cell.
#[derive(Clone, Debug, Default)]
pub struct TypeConfig {
    overrides: HashMap<DataType, (Cell, Cell)>,
}

impl TypeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override both the empty-default and the none-default for `dt`.
    pub fn set(mut self, dt: DataType, empty_default: Cell, none_default: Cell) -> Self {
        self.overrides.insert(dt, (empty_default, none_default));
        self
    }

    /// Override `dt` with a single sentinel used for both empty-like
    /// and none-like cells.
    pub fn set_sentinel(mut self, dt: DataType, sentinel: Cell) -> Self {
        self.overrides.insert(dt, (sentinel.clone(), sentinel));
        self
    }

    /// The built-in empty-default for `dt`, absent any override: the
    /// natural zero/identity value for numeric/boolean types, `None`
    /// for everything else.
    pub fn default_empty(dt: DataType) -> Cell {
        match dt {
            DataType::Integer => Cell::Integer(0),
            DataType::Float => Cell::Float(0.0),
            DataType::Boolean => Cell::Boolean(false),
            DataType::Date
            | DataType::Time
            | DataType::DateTime
            | DataType::String
            | DataType::Mixed
            | DataType::Empty
            | DataType::None => Cell::None,
        }
    }

    /// The effective `(empty_default, none_default)` pair for `dt`.
    pub fn defaults_for(&self, dt: DataType) -> (Cell, Cell) {
        self.overrides
            .get(&dt)
            .cloned()
            .unwrap_or_else(|| (Self::default_empty(dt), Cell::None))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Integer(v) => write!(f, "{v}"),
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Boolean(v) => write!(f, "{v}"),
            Cell::Date(v) => write!(f, "{v}"),
            Cell::Time(v) => write!(f, "{v}"),
            Cell::DateTime(v) => write!(f, "{v}"),
            Cell::Text(v) => write!(f, "{v}"),
            Cell::None => write!(f, ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_produces_integer() {
        let cell = Cell::from_raw("42", DataType::Integer, true);
        assert_eq!(cell, Cell::Integer(42));
    }

    #[test]
    fn from_raw_falls_back_to_text_on_mismatch() {
        let cell = Cell::from_raw("abc", DataType::Integer, true);
        assert_eq!(cell, Cell::Text("abc".to_string()));
    }

    #[test]
    fn from_raw_recognizes_none_regardless_of_target() {
        let cell = Cell::from_raw("none", DataType::Integer, true);
        assert!(cell.is_none());
    }

    #[test]
    fn as_float_coerces_integer() {
        let cell = Cell::Integer(7);
        assert_eq!(cell.as_float(), Some(7.0));
    }

    #[test]
    fn data_type_round_trips_variant() {
        assert_eq!(Cell::Boolean(true).data_type(), DataType::Boolean);
        assert_eq!(Cell::None.data_type(), DataType::None);
    }

    #[test]
    fn empty_integer_cell_uses_the_natural_zero_by_default() {
        let cell = Cell::from_raw("", DataType::Integer, true);
        assert_eq!(cell, Cell::Integer(0));
    }

    #[test]
    fn empty_string_column_defaults_to_none() {
        let cell = Cell::from_raw("", DataType::String, true);
        assert_eq!(cell, Cell::None);
    }

    #[test]
    fn type_config_overrides_the_empty_default() {
        let config = TypeConfig::new().set(DataType::Integer, Cell::Integer(-1), Cell::None);
        let (empty_default, none_default) = config.defaults_for(DataType::Integer);
        let cell = Cell::from_raw_with_defaults("", DataType::Integer, true, &empty_default, &none_default);
        assert_eq!(cell, Cell::Integer(-1));
    }

    #[test]
    fn type_config_sentinel_covers_both_empty_and_none() {
        let config = TypeConfig::new().set_sentinel(DataType::Integer, Cell::Integer(-9));
        let (empty_default, none_default) = config.defaults_for(DataType::Integer);
        assert_eq!(
            Cell::from_raw_with_defaults("", DataType::Integer, true, &empty_default, &none_default),
            Cell::Integer(-9)
        );
        assert_eq!(
            Cell::from_raw_with_defaults("none", DataType::Integer, true, &empty_default, &none_default),
            Cell::Integer(-9)
        );
    }

    #[test]
    fn mixed_column_returns_raw_text_except_for_none_like_cells() {
        let (empty_default, none_default) = TypeConfig::new().defaults_for(DataType::Mixed);
        assert_eq!(
            Cell::from_raw_with_defaults("abc", DataType::Mixed, true, &empty_default, &none_default),
            Cell::Text("abc".to_string())
        );
        assert_eq!(
            Cell::from_raw_with_defaults("none", DataType::Mixed, true, &empty_default, &none_default),
            Cell::None
        );
    }
}
