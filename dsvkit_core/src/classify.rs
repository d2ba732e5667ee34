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

//! Per-token type classification: the predicates (`is_*_like`), the
//! converters (`to_*`) and `infer_type`, which picks the single most
//! specific `DataType` a raw token can be read as.
//!
//! A regex match only ever gates a *candidate* shape; DATE/TIME/DATETIME
//! classification additionally requires the candidate to parse against
//! one of a fixed list of calendar formats, so `"2023-13-45"` is rejected
//! even though it has the right punctuation skeleton.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::DataType;

static FLOAT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-+]?(\d+)?\.(\d+)?$").unwrap());
static INTEGER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-+]?\d+$").unwrap());
static DATE_YMD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}[-/.]?\d{2}[-/.]?\d{2}$").unwrap());
static DATE_MDY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}[-/.]?\d{2}[-/.]?\d{4}$").unwrap());
static DATETIME_YMD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}[-/.]?\d{2}[-/.]?\d{2}[T]?\d{2}[:]?\d{2}([:]?\d{2}([.]?\d{1,6})?)?$")
        .unwrap()
});
static DATETIME_MDY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}[-/.]?\d{2}[-/.]?\d{4}[T]?\d{2}[:]?\d{2}([:]?\d{2}([.]?\d{1,6})?)?$")
        .unwrap()
});
static TIME_24H_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})(:(\d{2})([.](\d+))?)?$").unwrap());
static TIME_12H_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{2})(:(\d{2})([.](\d+))?)?\s*(AM|PM|am|pm)$").unwrap()
});
static TIME_COMPACT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{2})(\d{2})(\d{2})?$").unwrap());

const DATE_PATTERNS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y%m%d",
    "%Y-%d-%m", "%Y/%d/%m", "%Y.%d.%m", "%Y%d%m",
    "%m-%d-%Y", "%m/%d/%Y", "%m.%d.%Y", "%m%d%Y",
];

const TIME_PATTERNS: &[&str] = &[
    "%H:%M:%S", "%H:%M:%S%.f", "%H:%M", "%H%M", "%H%M%S",
    "%I:%M:%S%.f %p", "%I:%M:%S %p", "%I:%M %p", "%I:%M:%S%p", "%I:%M%p",
];

const DATETIME_PATTERNS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S", "%Y/%m/%dT%H:%M:%S", "%Y.%m.%dT%H:%M:%S", "%Y%m%d%H%M%S",
    "%Y-%d-%mT%H:%M:%S", "%Y/%d/%mT%H:%M:%S", "%Y.%d.%mT%H:%M:%S", "%Y%d%m%H%M%S",
    "%m-%d-%YT%H:%M:%S", "%m/%d/%YT%H:%M:%S", "%m.%d.%YT%H:%M:%S", "%m%d%Y%H%M%S",
    "%Y-%m-%dT%H:%M:%S%.f", "%Y/%m/%dT%H:%M:%S%.f", "%Y.%m.%dT%H:%M:%S%.f", "%Y%m%d%H%M%S%.f",
    "%Y-%d-%mT%H:%M:%S%.f", "%Y/%d/%mT%H:%M:%S%.f", "%Y.%d.%mT%H:%M:%S%.f", "%Y%d%m%H%M%S%.f",
    "%m-%d-%YT%H:%M:%S%.f", "%m/%d/%YT%H:%M:%S%.f", "%m.%d.%YT%H:%M:%S%.f", "%m%d%Y%H%M%S%.f",
];

fn prepared(value: &str, trim: bool) -> &str {
    if trim { value.trim() } else { value }
}

/// True for the literal `"none"`/`"null"`, case-insensitively.
pub fn is_none_like(value: Option<&str>, trim: bool) -> bool {
    match value {
        None => true,
        Some(v) => {
            let v = prepared(v, trim).to_lowercase();
            v == "none" || v == "null"
        }
    }
}

/// True if `value` is empty, or (when `trim`) only whitespace.
pub fn is_empty_like(value: &str, trim: bool) -> bool {
    if trim { value.trim().is_empty() } else { value.is_empty() }
}

/// True for `"true"`/`"false"`, case-insensitively.
pub fn is_bool_like(value: &str, trim: bool) -> bool {
    let v = prepared(value, trim).to_lowercase();
    v == "true" || v == "false"
}

/// True if `value` matches the float grammar: optional sign, and a
/// mandatory decimal point with at least one digit on either side.
pub fn is_float_like(value: &str, trim: bool) -> bool {
    FLOAT_RE.is_match(prepared(value, trim))
}

/// True if `value` matches the integer grammar: optional sign, digits only.
pub fn is_int_like(value: &str, trim: bool) -> bool {
    INTEGER_RE.is_match(prepared(value, trim))
}

/// True if integer-like or float-like.
pub fn is_numeric_like(value: &str, trim: bool) -> bool {
    is_float_like(value, trim) || is_int_like(value, trim)
}

/// True if not numeric-like (categorical).
pub fn is_category_like(value: &str, trim: bool) -> bool {
    !is_numeric_like(value, trim)
}

/// True if the trimmed value starts with `'0'`.
pub fn has_leading_zero(value: &str, trim: bool) -> bool {
    prepared(value, trim).starts_with('0')
}

fn parse_date_candidate(value: &str) -> Option<NaiveDate> {
    DATE_PATTERNS.iter().find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

fn parse_time_candidate(value: &str) -> Option<NaiveTime> {
    TIME_PATTERNS.iter().find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
}

fn parse_datetime_candidate(value: &str) -> Option<NaiveDateTime> {
    DATETIME_PATTERNS.iter().find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// True if `value`'s shape and calendar value both resolve to a date.
pub fn is_date_like(value: &str, trim: bool) -> bool {
    let v = prepared(value, trim);
    if v.is_empty() {
        return false;
    }
    (DATE_YMD_RE.is_match(v) || DATE_MDY_RE.is_match(v)) && parse_date_candidate(v).is_some()
}

/// True if `value`'s shape and calendar value both resolve to a time of day.
pub fn is_time_like(value: &str, trim: bool) -> bool {
    let v = prepared(value, trim);
    if v.is_empty() {
        return false;
    }
    (TIME_24H_RE.is_match(v) || TIME_12H_RE.is_match(v) || TIME_COMPACT_RE.is_match(v))
        && parse_time_candidate(v).is_some()
}

/// True if `value`'s shape and calendar value both resolve to a combined date and time.
pub fn is_datetime_like(value: &str, trim: bool) -> bool {
    let v = prepared(value, trim);
    if v.is_empty() {
        return false;
    }
    (DATETIME_YMD_RE.is_match(v) || DATETIME_MDY_RE.is_match(v))
        && parse_datetime_candidate(v).is_some()
}

pub fn to_bool(value: &str, trim: bool) -> Option<bool> {
    if is_bool_like(value, trim) {
        Some(prepared(value, trim).to_lowercase() == "true")
    } else {
        None
    }
}

pub fn to_int(value: &str, trim: bool) -> Option<i64> {
    if is_int_like(value, trim) { prepared(value, trim).parse().ok() } else { None }
}

pub fn to_float(value: &str, trim: bool) -> Option<f64> {
    if is_float_like(value, trim) { prepared(value, trim).parse().ok() } else { None }
}

pub fn to_date(value: &str, trim: bool) -> Option<NaiveDate> {
    if !is_date_like(value, trim) {
        return None;
    }
    parse_date_candidate(prepared(value, trim))
}

pub fn to_time(value: &str, trim: bool) -> Option<NaiveTime> {
    if !is_time_like(value, trim) {
        return None;
    }
    parse_time_candidate(prepared(value, trim))
}

pub fn to_datetime(value: &str, trim: bool) -> Option<NaiveDateTime> {
    if !is_datetime_like(value, trim) {
        return None;
    }
    parse_datetime_candidate(prepared(value, trim))
}

/// Infer the single most specific `DataType` for a raw token, in
/// precedence order: NONE, BOOLEAN, DATETIME, TIME, DATE, INTEGER,
/// FLOAT, EMPTY, STRING.
pub fn infer_type(value: Option<&str>, trim: bool) -> DataType {
    if is_none_like(value, trim) {
        return DataType::None;
    }
    let value = value.expect("is_none_like(None) returns true above");

    if is_bool_like(value, trim) {
        return DataType::Boolean;
    }
    if is_datetime_like(value, trim) {
        return DataType::DateTime;
    }
    if is_time_like(value, trim) {
        return DataType::Time;
    }
    if is_date_like(value, trim) {
        return DataType::Date;
    }
    if is_int_like(value, trim) {
        return DataType::Integer;
    }
    if is_float_like(value, trim) {
        return DataType::Float;
    }
    if is_empty_like(value, trim) {
        return DataType::Empty;
    }
    DataType::String
}

/// String form of `infer_type`'s result, convenient for diagnostics.
pub fn infer_type_name(value: Option<&str>, trim: bool) -> &'static str {
    infer_type(value, trim).name()
}
