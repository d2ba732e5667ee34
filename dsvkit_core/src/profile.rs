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

//! Collection-level type profiling: given a whole column's worth of raw
//! tokens, determine the single `DataType` that best describes all of
//! them (or `MIXED` if none does).

use crate::classify::{infer_type, is_empty_like, is_int_like};
use crate::types::DataType;

/// Rows beyond this size enable checkpointed early termination.
const INCREMENTAL_TYPECHECK_THRESHOLD: usize = 10_000;

#[derive(Default)]
struct Counts {
    boolean: usize,
    date: usize,
    time: usize,
    datetime: usize,
    integer: usize,
    float: usize,
    string: usize,
    empty: usize,
    none: usize,
}

impl Counts {
    fn bump(&mut self, dt: DataType) {
        match dt {
            DataType::Boolean => self.boolean += 1,
            DataType::Date => self.date += 1,
            DataType::Time => self.time += 1,
            DataType::DateTime => self.datetime += 1,
            DataType::Integer => self.integer += 1,
            DataType::Float => self.float += 1,
            DataType::String => self.string += 1,
            DataType::Empty => self.empty += 1,
            DataType::None => self.none += 1,
            DataType::Mixed => unreachable!("infer_type never returns MIXED"),
        }
    }
}

/// "Safe" tier: conclusions that hold regardless of how much of the
/// collection has been seen so far, used for the 25/50/75% checkpoints.
fn determine_safe(counts: &Counts, count: usize) -> Option<DataType> {
    if counts.empty == count {
        return Some(DataType::Empty);
    }
    if counts.none == count {
        return Some(DataType::None);
    }
    if counts.none + counts.empty == count {
        return Some(DataType::None);
    }
    if counts.boolean + counts.empty == count {
        return Some(DataType::Boolean);
    }
    if counts.string + counts.empty == count {
        return Some(DataType::String);
    }
    None
}

/// "Full" tier: additionally covers single-type temporal/numeric
/// collections, only valid once every value has been seen.
fn determine_full(counts: &Counts, count: usize) -> Option<DataType> {
    if let Some(dt) = determine_safe(counts, count) {
        return Some(dt);
    }
    if counts.date + counts.empty == count {
        return Some(DataType::Date);
    }
    if counts.datetime + counts.empty == count {
        return Some(DataType::DateTime);
    }
    if counts.time + counts.empty == count {
        return Some(DataType::Time);
    }
    if counts.integer + counts.empty == count {
        return Some(DataType::Integer);
    }
    if counts.float + counts.integer + counts.empty == count {
        return Some(DataType::Float);
    }
    None
}

/// Infer the most appropriate `DataType` for a collection of raw
/// tokens. Returns `DataType::Empty` for an empty collection.
///
/// `use_incremental` requests checkpointed early termination at the
/// 25%, 50% and 75% marks; it only actually takes effect once the
/// collection exceeds [`INCREMENTAL_TYPECHECK_THRESHOLD`] items, so a
/// caller can leave it `true` unconditionally (the common case) and
/// still get a single full pass over small collections, which keeps
/// the all-digit special case below reachable for them.
pub fn profile_values<'a, I>(values: I, trim: bool, use_incremental: bool) -> DataType
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let values: Vec<Option<&'a str>> = values.into_iter().collect();
    if values.is_empty() {
        return DataType::Empty;
    }

    let total = values.len();
    let use_incremental = use_incremental && total > INCREMENTAL_TYPECHECK_THRESHOLD;
    let checkpoints: [usize; 3] = [
        (total as f64 * 0.25).floor() as usize,
        (total as f64 * 0.50).floor() as usize,
        (total as f64 * 0.75).floor() as usize,
    ];

    let mut counts = Counts::default();
    let mut seen = 0usize;

    for value in &values {
        counts.bump(infer_type(*value, trim));
        seen += 1;

        if use_incremental && checkpoints.contains(&seen) {
            let numeric_temporal =
                counts.integer + counts.float + counts.date + counts.datetime + counts.time;
            if numeric_temporal > 0 && counts.string > 0 {
                return DataType::Mixed;
            }
            if let Some(dt) = determine_safe(&counts, seen) {
                return dt;
            }
        }
    }

    if let Some(dt) = determine_full(&counts, total) {
        return dt;
    }

    // All-digit special case: a heterogeneous mix of DATE/TIME/DATETIME/
    // INTEGER tokens collapses to INTEGER if every non-empty value also
    // parses as a plain integer (e.g. "20230101" matches DATE *and*
    // INTEGER shape).
    let temporal_and_integer_only =
        counts.date + counts.time + counts.datetime + counts.integer + counts.empty == total
            && (counts.date > 0 || counts.time > 0 || counts.datetime > 0 || counts.empty > 0);

    if temporal_and_integer_only {
        let all_digit = values.iter().all(|value| match value {
            Some(v) => is_empty_like(v, trim) || is_int_like(v, trim),
            None => false,
        });
        if all_digit {
            return DataType::Integer;
        }
    }

    DataType::Mixed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(items: &[&str]) -> Vec<Option<&str>> {
        items.iter().map(|s| Some(*s)).collect()
    }

    #[test]
    fn empty_collection_is_empty() {
        assert_eq!(profile_values(Vec::<Option<&str>>::new(), true, true), DataType::Empty);
    }

    #[test]
    fn all_empty_strings_is_empty() {
        assert_eq!(profile_values(values(&["", "  ", ""]), true, true), DataType::Empty);
    }

    #[test]
    fn uniform_integers() {
        assert_eq!(profile_values(values(&["1", "2", "3"]), true, true), DataType::Integer);
    }

    #[test]
    fn mixed_int_and_float_resolves_to_float() {
        assert_eq!(profile_values(values(&["1", "2.5", "3"]), true, true), DataType::Float);
    }

    #[test]
    fn mixed_numeric_and_string_is_mixed() {
        assert_eq!(profile_values(values(&["1", "2", "abc"]), true, true), DataType::Mixed);
    }

    #[test]
    fn uniform_booleans_tolerate_empty_values() {
        assert_eq!(profile_values(values(&["true", "", "false"]), true, true), DataType::Boolean);
    }

    #[test]
    fn all_digit_dates_and_integers_prefer_integer() {
        // "20230101" parses as both DATE (YYYYMMDD) and INTEGER shape.
        assert_eq!(
            profile_values(values(&["20230101", "12345678", "20240101"]), true, true),
            DataType::Integer
        );
    }

    #[test]
    fn genuine_dates_mixed_with_non_digit_times_stay_mixed() {
        assert_eq!(
            profile_values(values(&["2023-01-01", "2:30 PM"]), true, true),
            DataType::Mixed
        );
    }

    #[test]
    fn incremental_and_full_agree_on_a_large_uniform_collection() {
        let data: Vec<String> = (0..12_000).map(|i| i.to_string()).collect();
        let as_opts: Vec<Option<&str>> = data.iter().map(|s| Some(s.as_str())).collect();
        let incremental = profile_values(as_opts.iter().copied(), true, true);
        let full = profile_values(as_opts.iter().copied(), true, false);
        assert_eq!(incremental, full);
        assert_eq!(incremental, DataType::Integer);
    }

    #[test]
    fn incremental_and_full_agree_on_a_large_mixed_collection() {
        let mut data: Vec<String> = (0..11_000).map(|i| i.to_string()).collect();
        data.push("not-a-number".to_string());
        let as_opts: Vec<Option<&str>> = data.iter().map(|s| Some(s.as_str())).collect();
        let incremental = profile_values(as_opts.iter().copied(), true, true);
        let full = profile_values(as_opts.iter().copied(), true, false);
        assert_eq!(incremental, full);
        assert_eq!(incremental, DataType::Mixed);
    }

    #[test]
    fn small_collection_ignores_use_incremental_request() {
        let with_request = profile_values(values(&["1", "2", "3"]), true, true);
        let without_request = profile_values(values(&["1", "2", "3"]), true, false);
        assert_eq!(with_request, without_request);
    }
}
