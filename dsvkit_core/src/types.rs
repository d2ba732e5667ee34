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

//! The closed semantic type lattice produced by the classifier and the
//! collection profiler.

use std::fmt;

/// Semantic classification of a single raw text token or of a whole
/// column's worth of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DataType {
    String,
    Integer,
    Float,
    Boolean,
    Date,
    Time,
    DateTime,
    /// More than one non-empty type is present in the same collection.
    Mixed,
    /// All values in the collection are the empty string.
    Empty,
    /// The collection itself has no values.
    None,
}

impl DataType {
    pub fn name(&self) -> &'static str {
        match self {
            DataType::String => "STRING",
            DataType::Integer => "INTEGER",
            DataType::Float => "FLOAT",
            DataType::Boolean => "BOOLEAN",
            DataType::Date => "DATE",
            DataType::Time => "TIME",
            DataType::DateTime => "DATETIME",
            DataType::Mixed => "MIXED",
            DataType::Empty => "EMPTY",
            DataType::None => "NONE",
        }
    }

    /// True for INTEGER and FLOAT.
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Integer | DataType::Float)
    }

    /// True for DATE, TIME and DATETIME.
    pub fn is_temporal(&self) -> bool {
        matches!(self, DataType::Date | DataType::Time | DataType::DateTime)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_classification() {
        assert!(DataType::Integer.is_numeric());
        assert!(DataType::Float.is_numeric());
        assert!(!DataType::Boolean.is_numeric());
    }

    #[test]
    fn temporal_classification() {
        assert!(DataType::Date.is_temporal());
        assert!(DataType::Time.is_temporal());
        assert!(DataType::DateTime.is_temporal());
        assert!(!DataType::String.is_temporal());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(DataType::Mixed.to_string(), "MIXED");
    }
}
