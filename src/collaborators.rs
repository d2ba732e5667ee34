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

//! Documents the two external collaborator interfaces this crate is
//! designed to sit next to, without calling either of them.
//!
//! Neither is implemented here: text normalization and record
//! validation are both out of scope for the ingestion/inference/tabular
//! core this crate provides. A consumer pre-cleans raw text before
//! handing it to [`crate::DsvParser`], and filters a [`crate::Table`]'s
//! typed rows after the fact; this crate never calls into either shape
//! itself.
//!
//! A text normalizer has this shape:
//!
//! ```ignore
//! fn normalize(input: &str) -> String;
//! ```
//!
//! applied by the caller to raw tokens before parsing (case folding,
//! accent stripping, quote/whitespace normalization — whatever the
//! caller's pipeline needs).
//!
//! A record validator has this shape:
//!
//! ```ignore
//! fn validate(record: &[dsvkit_core::Cell]) -> (bool, Vec<String>);
//! ```
//!
//! applied by the caller to a [`crate::TypedTable`] row, returning
//! pass/fail plus a list of error messages. Neither trait is defined as
//! a concrete Rust type in this crate; the shapes above are
//! documentation, not an API surface.
