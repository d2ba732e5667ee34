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

//! Forward-only tabular model over a chunk-producing iterator: column
//! names are resolved from a bounded header scan, and the column list
//! grows monotonically if a later row turns out wider than any header.

use dsvkit_core::DsvError;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::config::MIN_CHUNK_SIZE;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

fn placeholder(index: usize) -> String {
    format!("column_{index}")
}

fn normalize_header_name(raw: &str, index: usize) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(raw, " ");
    let trimmed = collapsed.trim();
    if trimmed.is_empty() {
        placeholder(index)
    } else {
        trimmed.to_string()
    }
}

fn is_row_empty(row: &[String]) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}

fn merge_header_rows(header_rows: &[Vec<String>]) -> Vec<String> {
    let width = header_rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let mut merged = vec![String::new(); width];
    for row in header_rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            if merged[i].is_empty() {
                merged[i] = cell.clone();
            } else {
                merged[i] = format!("{}_{}", merged[i], cell);
            }
        }
    }
    merged
}

/// A table view over a chunk iterator. Consumed once; column names are
/// resolved during construction from a bounded scan of the upstream
/// chunks, carrying any leftover data rows from that scan into an
/// internal buffer.
pub struct StreamTable<I>
where
    I: Iterator<Item = Result<Vec<Vec<String>>, DsvError>>,
{
    stream: I,
    header_rows: usize,
    skip_empty_rows: bool,
    header_data: Vec<Vec<String>>,
    column_names: Vec<String>,
    column_index: IndexMap<String, usize>,
    buffer: Vec<Vec<String>>,
    reset_requested: bool,
}

impl<I> StreamTable<I>
where
    I: Iterator<Item = Result<Vec<Vec<String>>, DsvError>>,
{
    pub fn new(stream: I, header_rows: usize, skip_empty_rows: bool, chunk_size: usize) -> Result<Self, DsvError> {
        if chunk_size < MIN_CHUNK_SIZE {
            return Err(DsvError::range(
                "chunk_size must be at least the minimum",
                Some(MIN_CHUNK_SIZE as i64),
                None,
            ));
        }

        let mut model = StreamTable {
            stream,
            header_rows,
            skip_empty_rows,
            header_data: Vec::new(),
            column_names: Vec::new(),
            column_index: IndexMap::new(),
            buffer: Vec::new(),
            reset_requested: false,
        };
        model.initialize()?;
        info!(header_rows, "streaming table model initialized");
        Ok(model)
    }

    fn initialize(&mut self) -> Result<(), DsvError> {
        let mut header_data: Vec<Vec<String>> = Vec::new();

        // Pull chunks unconditionally, even when `header_rows == 0`, so a
        // zero-header stream still buffers its first chunk's rows and can
        // synthesize placeholder names from the first one below.
        'outer: loop {
            let chunk = match self.stream.next() {
                Some(chunk) => chunk?,
                None => break,
            };
            let mut rows = chunk.into_iter();
            while let Some(row) = rows.next() {
                if header_data.len() < self.header_rows {
                    header_data.push(row);
                } else {
                    if !(self.skip_empty_rows && is_row_empty(&row)) {
                        self.buffer.push(row);
                    }
                    for remaining in rows.by_ref() {
                        if !(self.skip_empty_rows && is_row_empty(&remaining)) {
                            self.buffer.push(remaining);
                        }
                    }
                    break 'outer;
                }
            }
            if header_data.len() >= self.header_rows {
                break;
            }
        }

        self.header_data = header_data;

        if self.header_rows > 0 {
            let raw_names = if self.header_data.len() > 1 {
                merge_header_rows(&self.header_data)
            } else if self.header_data.len() == 1 {
                self.header_data[0].clone()
            } else {
                Vec::new()
            };
            let width = self.header_data.iter().map(|r| r.len()).max().unwrap_or(0);
            let mut names: Vec<String> =
                raw_names.iter().enumerate().map(|(i, n)| normalize_header_name(n, i)).collect();
            while names.len() < width {
                names.push(placeholder(names.len()));
            }
            self.column_names = names;
        } else if let Some(first) = self.buffer.first() {
            self.column_names = (0..first.len()).map(placeholder).collect();
        }

        self.rebuild_index();
        Ok(())
    }

    fn rebuild_index(&mut self) {
        self.column_index.clear();
        for (i, name) in self.column_names.iter().enumerate() {
            self.column_index.entry(name.clone()).or_insert(i);
        }
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    pub fn column_index(&self, name: &str) -> Result<usize, DsvError> {
        self.column_index
            .get(name)
            .copied()
            .ok_or_else(|| DsvError::validation(format!("column name `{name}` not found")))
    }

    fn grow_columns_to(&mut self, width: usize) {
        while self.column_names.len() < width {
            let name = placeholder(self.column_names.len());
            self.column_index.insert(name.clone(), self.column_names.len());
            self.column_names.push(name);
        }
    }

    fn normalize(&mut self, mut row: Vec<String>) -> Vec<String> {
        if row.len() < self.column_names.len() {
            row.resize(self.column_names.len(), String::new());
        } else if row.len() > self.column_names.len() {
            self.grow_columns_to(row.len());
        }
        row
    }

    /// Discard any rows staged from the header scan, freeing memory
    /// without affecting rows still to come from upstream.
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    /// Flag this model as wanting a reset. The model does not retain
    /// its source and cannot itself rewind `stream`; the caller must
    /// construct a fresh `StreamTable` over a new upstream iterator and
    /// consult [`Self::reset_requested`] to decide whether to do so.
    pub fn request_reset(&mut self) {
        self.reset_requested = true;
    }

    pub fn reset_requested(&self) -> bool {
        self.reset_requested
    }

    /// Pull and yield the next row, draining the header-scan buffer
    /// first. Returns `None` once both the buffer and the upstream
    /// iterator are exhausted.
    pub fn next_row(&mut self) -> Option<Result<Vec<String>, DsvError>> {
        if !self.buffer.is_empty() {
            let row = self.buffer.remove(0);
            return Some(Ok(self.normalize(row)));
        }

        loop {
            let chunk = match self.stream.next()? {
                Ok(chunk) => chunk,
                Err(e) => return Some(Err(e)),
            };
            for row in chunk {
                if self.skip_empty_rows && is_row_empty(&row) {
                    continue;
                }
                return Some(Ok(self.normalize(row)));
            }
        }
    }

    pub fn rows(self) -> StreamTableRows<I> {
        StreamTableRows { model: self }
    }
}

/// Forward iterator handed out by [`StreamTable::rows`].
pub struct StreamTableRows<I>
where
    I: Iterator<Item = Result<Vec<Vec<String>>, DsvError>>,
{
    model: StreamTable<I>,
}

impl<I> Iterator for StreamTableRows<I>
where
    I: Iterator<Item = Result<Vec<Vec<String>>, DsvError>>,
{
    type Item = Result<Vec<String>, DsvError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.model.next_row()
    }
}
