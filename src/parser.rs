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

//! Delimited-text parsing built on the line tokenizer: strings, lists
//! of strings, whole files, and a chunked file stream.

use std::path::Path;

use dsvkit_core::DsvError;
use tracing::info;

use crate::config::ParseOptions;
use crate::reader::TextFileReader;
use crate::tokenizer;

pub struct DsvParser;

impl DsvParser {
    /// Tokenize a single string, optionally stripping a bookend off
    /// every resulting token.
    pub fn parse(content: &str, delimiter: &str, options: &ParseOptions) -> Result<Vec<String>, DsvError> {
        let tokens = tokenizer::parse(Some(content), delimiter, options.strip)?;
        Ok(Self::strip_bookends(tokens, options))
    }

    /// Tokenize each line independently.
    pub fn parses(content: &[String], delimiter: &str, options: &ParseOptions) -> Result<Vec<Vec<String>>, DsvError> {
        content
            .iter()
            .map(|line| Self::parse(line, delimiter, options))
            .collect()
    }

    /// Load and tokenize a whole file, honoring header/footer skipping.
    pub fn parse_file(
        path: impl AsRef<Path>,
        delimiter: &str,
        options: &ParseOptions,
        skip_header_rows: usize,
        skip_footer_rows: usize,
    ) -> Result<Vec<Vec<String>>, DsvError> {
        if delimiter.is_empty() {
            return Err(DsvError::parameter("delimiter must not be empty"));
        }
        let lines = TextFileReader::load(path, options, skip_header_rows, skip_footer_rows)?;
        Self::parses(&lines, delimiter, options)
    }

    /// Stream-parse a file in row chunks. `chunk_size` bounds both the
    /// reader's line-chunking and the working row chunk yielded here;
    /// it is unrelated to any buffer a downstream streaming table
    /// model may additionally impose.
    pub fn parse_stream(
        path: impl AsRef<Path>,
        delimiter: String,
        options: ParseOptions,
        skip_header_rows: usize,
        skip_footer_rows: usize,
        chunk_size: usize,
    ) -> Result<impl Iterator<Item = Result<Vec<Vec<String>>, DsvError>>, DsvError> {
        if delimiter.is_empty() {
            return Err(DsvError::parameter("delimiter must not be empty"));
        }
        let stream_options = crate::config::StreamOptions::new()
            .set_chunk_size(chunk_size)
            .set_skip_header_rows(skip_header_rows)
            .set_skip_footer_rows(skip_footer_rows);
        stream_options.validate()?;

        info!(chunk_size, skip_header_rows, skip_footer_rows, "starting parse_stream");
        let lines = TextFileReader::stream(path, options.clone(), stream_options)?;
        Ok(lines.map(move |chunk| {
            let chunk = chunk?;
            Self::parses(&chunk, &delimiter, &options)
        }))
    }

    fn strip_bookends(tokens: Vec<String>, options: &ParseOptions) -> Vec<String> {
        match options.bookend {
            Some(bookend) => {
                let bookend = bookend.to_string();
                tokens
                    .into_iter()
                    .map(|t| tokenizer::remove_bookends(&t, &bookend, options.bookend_strip))
                    .collect()
            }
            None => tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_splits_and_strips_bookends() {
        let options = ParseOptions::new().set_bookend(Some('"'));
        let tokens = DsvParser::parse("\"a\",\"b\",\"c\"", ",", &options).unwrap();
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn parses_handles_multiple_lines() {
        let options = ParseOptions::new();
        let lines = vec!["a,b".to_string(), "c,d".to_string()];
        let rows = DsvParser::parses(&lines, ",", &options).unwrap();
        assert_eq!(rows, vec![vec!["a".to_string(), "b".to_string()], vec!["c".to_string(), "d".to_string()]]);
    }

    #[test]
    fn parse_stream_yields_rows_in_source_order_excluding_header_and_footer() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for i in 0..10 {
            writeln!(file, "{i},{i}").unwrap();
        }
        file.flush().unwrap();

        let iter = DsvParser::parse_stream(
            file.path(),
            ",".to_string(),
            ParseOptions::new(),
            2,
            2,
            100,
        )
        .unwrap();
        let rows: Vec<Vec<String>> = iter.collect::<Result<Vec<_>, _>>().unwrap().into_iter().flatten().collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], vec!["2".to_string(), "2".to_string()]);
        assert_eq!(rows[5], vec!["7".to_string(), "7".to_string()]);
    }

    #[test]
    fn parse_stream_rejects_small_chunk_size() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let result = DsvParser::parse_stream(file.path(), ",".to_string(), ParseOptions::new(), 0, 0, 10);
        assert!(result.is_err());
    }

    #[test]
    fn parse_file_rejects_empty_delimiter_before_touching_the_file() {
        // A path that does not exist: if the delimiter check ran after
        // I/O, this would fail with a file-not-found error instead.
        let options = ParseOptions::new();
        let result = DsvParser::parse_file("/nonexistent/path/does-not-exist.csv", "", &options, 0, 0);
        assert!(matches!(result, Err(DsvError::Parameter { .. })));
    }
}
