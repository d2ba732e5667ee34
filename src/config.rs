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

//! Builder-style configuration for the parser, the reader and the
//! tabular models. Minimum viable `chunk_size` is validated at
//! construction time rather than at first use.

use dsvkit_core::DsvError;

/// Lines are considered valid if readable in one of these encodings.
/// The crate does not transcode; it only validates the name before
/// opening a file.
pub const SUPPORTED_ENCODINGS: &[&str] = &["utf-8", "ascii"];

/// Minimum accepted chunk size for both the parser's file-streaming
/// surface and the streaming table model's internal buffer.
pub const MIN_CHUNK_SIZE: usize = 100;

#[derive(Clone, Debug)]
pub struct ParseOptions {
    pub strip: bool,
    pub bookend: Option<char>,
    pub bookend_strip: bool,
    pub encoding: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            strip: true,
            bookend: None,
            bookend_strip: true,
            encoding: "utf-8".to_string(),
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_strip(mut self, strip: bool) -> Self {
        self.strip = strip;
        self
    }

    pub fn set_bookend(mut self, bookend: Option<char>) -> Self {
        self.bookend = bookend;
        self
    }

    pub fn set_bookend_strip(mut self, bookend_strip: bool) -> Self {
        self.bookend_strip = bookend_strip;
        self
    }

    pub fn set_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn validate(&self) -> Result<(), DsvError> {
        if !SUPPORTED_ENCODINGS.contains(&self.encoding.as_str()) {
            return Err(DsvError::format(
                "unsupported encoding",
                Some(self.encoding.clone()),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub header_rows: usize,
    pub skip_empty_rows: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions { header_rows: 1, skip_empty_rows: true }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_header_rows(mut self, header_rows: usize) -> Self {
        self.header_rows = header_rows;
        self
    }

    pub fn set_skip_empty_rows(mut self, skip_empty_rows: bool) -> Self {
        self.skip_empty_rows = skip_empty_rows;
        self
    }
}

#[derive(Clone, Copy, Debug)]
pub struct StreamOptions {
    pub chunk_size: usize,
    pub skip_header_rows: usize,
    pub skip_footer_rows: usize,
}

impl Default for StreamOptions {
    fn default() -> Self {
        StreamOptions {
            chunk_size: MIN_CHUNK_SIZE,
            skip_header_rows: 0,
            skip_footer_rows: 0,
        }
    }
}

impl StreamOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn set_skip_header_rows(mut self, skip_header_rows: usize) -> Self {
        self.skip_header_rows = skip_header_rows;
        self
    }

    pub fn set_skip_footer_rows(mut self, skip_footer_rows: usize) -> Self {
        self.skip_footer_rows = skip_footer_rows;
        self
    }

    pub fn validate(&self) -> Result<(), DsvError> {
        if self.chunk_size < MIN_CHUNK_SIZE {
            return Err(DsvError::range(
                "chunk_size must be at least the minimum",
                Some(MIN_CHUNK_SIZE as i64),
                None,
            ));
        }
        Ok(())
    }
}
