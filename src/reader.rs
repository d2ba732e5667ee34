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

//! Line-oriented file access: count, preview, fully load, or stream in
//! line chunks. All surfaces validate the requested encoding before
//! opening the file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use dsvkit_core::DsvError;

use crate::config::{ParseOptions, SUPPORTED_ENCODINGS};

pub struct TextFileReader;

impl TextFileReader {
    /// Count the lines in `path` without materializing them.
    pub fn line_count(path: impl AsRef<Path>) -> Result<usize, DsvError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DsvError::file(path, e))?;
        let reader = BufReader::new(file);
        let mut count = 0usize;
        for line in reader.lines() {
            line.map_err(|e| DsvError::file(path, e))?;
            count += 1;
        }
        Ok(count)
    }

    /// Read up to `max_lines` lines from the start of `path`.
    pub fn preview(path: impl AsRef<Path>, max_lines: usize, strip: bool) -> Result<Vec<String>, DsvError> {
        let path = path.as_ref();
        if max_lines == 0 {
            return Err(DsvError::parameter_with("max_lines must be at least 1", max_lines));
        }
        let file = File::open(path).map_err(|e| DsvError::file(path, e))?;
        let reader = BufReader::new(file);
        let mut lines = Vec::with_capacity(max_lines.min(1024));
        for line in reader.lines().take(max_lines) {
            let line = line.map_err(|e| DsvError::file(path, e))?;
            lines.push(if strip { line.trim().to_string() } else { line });
        }
        Ok(lines)
    }

    /// Load the full file, applying header/footer skipping and the
    /// options' encoding validation.
    pub fn load(
        path: impl AsRef<Path>,
        options: &ParseOptions,
        skip_header_rows: usize,
        skip_footer_rows: usize,
    ) -> Result<Vec<String>, DsvError> {
        options.validate()?;
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DsvError::file(path, e))?;
        let reader = BufReader::new(file);

        let mut all_lines = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| DsvError::file(path, e))?;
            all_lines.push(if options.strip { line.trim().to_string() } else { line });
        }

        let start = skip_header_rows.min(all_lines.len());
        let end = all_lines.len().saturating_sub(skip_footer_rows).max(start);
        Ok(all_lines[start..end].to_vec())
    }

    /// Stream `path` in line chunks of `chunk_size`, honoring header
    /// and footer skipping. Mirrors `DsvParser::parse_stream`'s
    /// bounded footer lag-buffer but yields raw lines rather than
    /// tokenized rows.
    pub fn stream(
        path: impl AsRef<Path>,
        options: ParseOptions,
        stream_options: crate::config::StreamOptions,
    ) -> Result<impl Iterator<Item = Result<Vec<String>, DsvError>>, DsvError> {
        options.validate()?;
        stream_options.validate()?;
        if !SUPPORTED_ENCODINGS.contains(&options.encoding.as_str()) {
            return Err(DsvError::format("unsupported encoding", Some(options.encoding.clone())));
        }
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|e| DsvError::file(&path, e))?;
        Ok(LineChunks::new(BufReader::new(file), path, options, stream_options))
    }
}

struct LineChunks {
    reader: BufReader<File>,
    path: std::path::PathBuf,
    strip: bool,
    chunk_size: usize,
    skip_footer_rows: usize,
    footer_lag: std::collections::VecDeque<String>,
    done: bool,
    header_skipped: bool,
    skip_header_rows: usize,
}

impl LineChunks {
    fn new(
        reader: BufReader<File>,
        path: std::path::PathBuf,
        options: ParseOptions,
        stream_options: crate::config::StreamOptions,
    ) -> Self {
        LineChunks {
            reader,
            path,
            strip: options.strip,
            chunk_size: stream_options.chunk_size,
            skip_footer_rows: stream_options.skip_footer_rows,
            footer_lag: std::collections::VecDeque::new(),
            done: false,
            header_skipped: false,
            skip_header_rows: stream_options.skip_header_rows,
        }
    }

    fn read_line(&mut self) -> Result<Option<String>, DsvError> {
        let mut raw = String::new();
        let bytes = self.reader.read_line(&mut raw).map_err(|e| DsvError::file(&self.path, e))?;
        if bytes == 0 {
            return Ok(None);
        }
        let trimmed_newline = raw.trim_end_matches(['\n', '\r']);
        Ok(Some(if self.strip { trimmed_newline.trim().to_string() } else { trimmed_newline.to_string() }))
    }

    fn skip_header(&mut self) -> Result<(), DsvError> {
        for _ in 0..self.skip_header_rows {
            if self.read_line()?.is_none() {
                self.done = true;
                break;
            }
        }
        self.header_skipped = true;
        Ok(())
    }
}

impl Iterator for LineChunks {
    type Item = Result<Vec<String>, DsvError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.header_skipped {
            if let Err(e) = self.skip_header() {
                self.done = true;
                return Some(Err(e));
            }
        }
        if self.done {
            return None;
        }

        let mut chunk = Vec::new();
        loop {
            match self.read_line() {
                Ok(Some(line)) => {
                    if self.skip_footer_rows > 0 {
                        self.footer_lag.push_back(line);
                        if self.footer_lag.len() > self.skip_footer_rows {
                            chunk.push(self.footer_lag.pop_front().expect("just checked len"));
                        }
                    } else {
                        chunk.push(line);
                    }
                    if chunk.len() == self.chunk_size {
                        return Some(Ok(chunk));
                    }
                }
                Ok(None) => {
                    self.done = true;
                    return if chunk.is_empty() { None } else { Some(Ok(chunk)) };
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
