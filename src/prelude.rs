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

#[doc(inline)]
pub use crate::config::{ParseOptions, StreamOptions, TableOptions};
pub use crate::parser::DsvParser;
pub use crate::reader::TextFileReader;
pub use crate::streaming::{StreamTable, StreamTableRows};
pub use crate::table::{Table, TypedTable};
pub use crate::tokenizer::{parse as tokenize, parses as tokenize_lines, remove_bookends};

pub use dsvkit_core::{profile_values, Cell, DataType, DsvError, TypeConfig};
