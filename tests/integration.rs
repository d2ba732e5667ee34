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

use std::io::Write;

use dsvkit::prelude::*;

fn write_csv(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn single_cell_inference_matches_expected_types() {
    let cases = [
        ("true", DataType::Boolean),
        ("2023-01-15", DataType::Date),
        ("14:30:00", DataType::Time),
        ("2023-01-15T14:30:00", DataType::DateTime),
        ("123", DataType::Integer),
        ("1.5", DataType::Float),
        ("abc", DataType::String),
        ("", DataType::Empty),
        ("null", DataType::None),
    ];
    for (raw, expected) in cases {
        assert_eq!(dsvkit_core::infer_type(Some(raw), true), expected, "input {raw:?}");
    }
}

#[test]
fn collection_profiling_distinguishes_pure_from_mixed_all_digit() {
    let date_like = ["20230101", "20230102", "20230103"];
    let time_like = ["143000", "154500", "120000"];
    let int_like = ["20230101", "143000", "12345"];
    let mixed = ["20230101", "143000", "abc"];

    assert_eq!(profile_values(date_like.iter().map(|s| Some(*s)), true, true), DataType::Date);
    assert_eq!(profile_values(time_like.iter().map(|s| Some(*s)), true, true), DataType::Time);
    assert_eq!(profile_values(int_like.iter().map(|s| Some(*s)), true, true), DataType::Integer);
    assert_eq!(profile_values(mixed.iter().map(|s| Some(*s)), true, true), DataType::Mixed);
}

#[test]
fn profile_values_agrees_across_incremental_and_full_analysis() {
    let mut data: Vec<String> = (0..12_000).map(|i| i.to_string()).collect();
    data.push("not-a-number".to_string());
    let as_opts: Vec<Option<&str>> = data.iter().map(|s| Some(s.as_str())).collect();

    let incremental = profile_values(as_opts.iter().copied(), true, true);
    let full = profile_values(as_opts.iter().copied(), true, false);
    assert_eq!(incremental, full);
}

#[test]
fn file_parses_into_a_table_with_uniform_row_width() {
    let file = write_csv(&["Name,Age,City", "John,30,NY", "Jane,25", "Bob"]);
    let options = ParseOptions::new();
    let rows = DsvParser::parse_file(file.path(), ",", &options, 0, 0).unwrap();
    let table = Table::new(rows, 1, false).unwrap();

    for i in 0..table.row_count() {
        assert_eq!(table.row_as_list(i).unwrap().len(), table.column_count());
    }
    for name in table.column_names() {
        assert!(!name.is_empty());
        assert!(table.column_index(name).is_ok());
    }
}

#[test]
fn end_to_end_typed_projection_infers_numeric_column() {
    let file = write_csv(&["id,label", "1,a", "2,b", "3,c"]);
    let options = ParseOptions::new();
    let rows = DsvParser::parse_file(file.path(), ",", &options, 0, 0).unwrap();
    let table = Table::new(rows, 1, true).unwrap();
    let typed = table.to_typed().unwrap();

    assert_eq!(typed.row(0).unwrap()[0], Cell::Integer(1));
    assert_eq!(typed.row(2).unwrap()[1], Cell::Text("c".to_string()));
}

#[test]
fn typed_projection_honors_a_custom_empty_default() {
    let file = write_csv(&["id,label", "1,a", ",b"]);
    let options = ParseOptions::new();
    let rows = DsvParser::parse_file(file.path(), ",", &options, 0, 0).unwrap();
    let table = Table::new(rows, 1, false).unwrap();

    let defaulted = table.to_typed().unwrap();
    assert_eq!(defaulted.row(1).unwrap()[0], Cell::Integer(0));

    let config = TypeConfig::new().set(DataType::Integer, Cell::Integer(-1), Cell::None);
    let overridden = table.to_typed_with(&config).unwrap();
    assert_eq!(overridden.row(1).unwrap()[0], Cell::Integer(-1));
}

#[test]
fn streaming_skips_header_and_footer_rows_end_to_end() {
    let lines: Vec<String> = (0..10).map(|i| i.to_string()).collect();
    let refs: Vec<&str> = lines.iter().map(|s| s.as_str()).collect();
    let file = write_csv(&refs);

    let iter = DsvParser::parse_stream(file.path(), ",".to_string(), ParseOptions::new(), 2, 2, 100).unwrap();
    let rows: Vec<Vec<String>> = iter.collect::<Result<Vec<_>, _>>().unwrap().into_iter().flatten().collect();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows.first().unwrap()[0], "2");
    assert_eq!(rows.last().unwrap()[0], "7");
}

#[test]
fn bookend_removal_round_trips_and_preserves_doubled_interior() {
    let tokens = tokenize_lines(&["\"a\",\"b\",\"c\"".to_string()], ",", true).unwrap();
    let options = ParseOptions::new().set_bookend(Some('"'));
    let stripped: Vec<String> = tokens[0]
        .iter()
        .map(|t| remove_bookends(t, "\"", options.bookend_strip))
        .collect();
    assert_eq!(stripped, vec!["a", "b", "c"]);

    let escaped = "\"he said \"\"hi\"\"\"";
    assert_eq!(remove_bookends(escaped, "\"", false), "he said \"\"hi\"\"");
}

#[test]
fn to_bool_follows_the_is_bool_like_predicate() {
    assert!(!dsvkit_core::is_bool_like("yes", true));
    assert_eq!(dsvkit_core::to_bool("yes", true), None);
    assert!(dsvkit_core::is_bool_like("true", true));
    assert_eq!(dsvkit_core::to_bool("true", true), Some(true));
}
