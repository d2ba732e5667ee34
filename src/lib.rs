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

//! This crate offers:
//!
//! *   A delimiter-aware line tokenizer with bookend stripping;
//! *   A line-oriented file reader: count, preview, full load, chunked stream;
//! *   A DSV parser built on the tokenizer and the reader;
//! *   Random-access and streaming tabular models with type inference.
//!
//! ## Quick start
//!
//! ```no_run
//! use dsvkit::prelude::*;
//!
//! let options = ParseOptions::new();
//! let rows = DsvParser::parse_file("data.csv", ",", &options, 1, 0).unwrap();
//! let table = Table::new(rows, 1, true).unwrap();
//! let typed = table.to_typed().unwrap();
//! ```

pub mod collaborators;
mod config;
mod parser;
mod reader;
mod streaming;
mod table;
mod tokenizer;

#[doc(inline)]
pub use crate::config::*;
pub use crate::parser::DsvParser;
pub use crate::reader::TextFileReader;
pub use crate::streaming::{StreamTable, StreamTableRows};
pub use crate::table::{Table, TypedTable};
pub use crate::tokenizer::{parse as tokenize, parses as tokenize_lines, remove_bookends};

// re-export
pub use dsvkit_core::*;

pub mod prelude;
