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

//! Single-line tokenization: split on a delimiter and, optionally, trim
//! a matching bookend off each token.

use dsvkit_core::DsvError;

/// Split `content` on `delimiter`, preserving empty tokens.
///
/// Returns an empty sequence when `content` is `None`, or when `strip`
/// is set and the entire input is whitespace. The latter mirrors the
/// tokenizer this crate's line-splitting is modeled on: a blank line
/// produces zero tokens, not one empty token, when trimming is active.
pub fn parse(content: Option<&str>, delimiter: &str, strip: bool) -> Result<Vec<String>, DsvError> {
    if delimiter.is_empty() {
        return Err(DsvError::parameter("delimiter must not be empty"));
    }

    let content = match content {
        Some(c) => c,
        None => return Ok(Vec::new()),
    };

    if strip && content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let tokens: Vec<String> = content.split(delimiter).map(|t| t.to_string()).collect();
    Ok(if strip {
        tokens.into_iter().map(|t| t.trim().to_string()).collect()
    } else {
        tokens
    })
}

/// Tokenize each line in `content` independently.
pub fn parses(content: &[String], delimiter: &str, strip: bool) -> Result<Vec<Vec<String>>, DsvError> {
    if delimiter.is_empty() {
        return Err(DsvError::parameter("delimiter must not be empty"));
    }
    content.iter().map(|line| parse(Some(line), delimiter, strip)).collect()
}

/// Strip a single matching `bookend` off both ends of `content`, if
/// present. Does not unescape doubled bookends; the interior is
/// returned untouched otherwise.
pub fn remove_bookends(content: &str, bookend: &str, strip: bool) -> String {
    let value = if strip { content.trim() } else { content };
    if bookend.is_empty() {
        return value.to_string();
    }
    if value.starts_with(bookend)
        && value.ends_with(bookend)
        && value.len() > 2 * bookend.len() - 1
    {
        value[bookend.len()..value.len() - bookend.len()].to_string()
    } else {
        value.to_string()
    }
}
