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

//! Random-access tabular model built from a finite, already-parsed
//! sequence of rows: multi-row header merging, width normalization,
//! memoized column-type inference, and a typed projection.

use std::sync::OnceLock;

use dsvkit_core::{profile_values, Cell, DataType, DsvError, TypeConfig};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

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

fn merge_header_rows(header_rows: &[Vec<String>], width: usize) -> Vec<String> {
    let mut merged = vec![String::new(); width];
    for row in header_rows {
        for (i, cell) in row.iter().enumerate() {
            if i >= merged.len() {
                merged.push(String::new());
            }
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

fn is_row_empty(row: &[String]) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}

fn normalize_rows(rows: Vec<Vec<String>>, width: usize, skip_empty_rows: bool) -> Vec<Vec<String>> {
    let filtered: Vec<Vec<String>> = if skip_empty_rows {
        rows.into_iter().filter(|r| !is_row_empty(r)).collect()
    } else {
        rows
    };
    filtered
        .into_iter()
        .map(|mut row| {
            if row.len() < width {
                row.resize(width, String::new());
            }
            row
        })
        .collect()
}

/// A random-access table over a finite, already-parsed row sequence.
pub struct Table {
    header_data: Vec<Vec<String>>,
    column_names: Vec<String>,
    column_index: IndexMap<String, usize>,
    data: Vec<Vec<String>>,
    column_type_cache: Vec<OnceLock<DataType>>,
}

impl Table {
    /// Build a table from `rows`, splitting off the first `header_rows`
    /// as header material and merging them into column names.
    pub fn new(rows: Vec<Vec<String>>, header_rows: usize, skip_empty_rows: bool) -> Result<Self, DsvError> {
        if rows.is_empty() {
            return Err(DsvError::validation("table construction requires at least one row"));
        }

        let header_rows_count = header_rows.min(rows.len());
        let (header_data, data_rows): (Vec<Vec<String>>, Vec<Vec<String>>) = {
            let mut rows = rows;
            let data_rows = rows.split_off(header_rows_count);
            (rows, data_rows)
        };

        let data_width = data_rows.iter().map(|r| r.len()).max();
        let header_width = header_data.iter().map(|r| r.len()).max().unwrap_or(0);
        let width = data_width.unwrap_or(header_width);

        let data = normalize_rows(data_rows, width, skip_empty_rows);

        let raw_names: Vec<String> = if header_data.len() > 1 {
            merge_header_rows(&header_data, width)
        } else if header_data.len() == 1 {
            header_data[0].clone()
        } else {
            Vec::new()
        };

        let mut column_names: Vec<String> = if raw_names.is_empty() {
            (0..width).map(placeholder).collect()
        } else {
            let mut names: Vec<String> =
                raw_names.iter().enumerate().map(|(i, n)| normalize_header_name(n, i)).collect();
            while names.len() < width {
                names.push(placeholder(names.len()));
            }
            names
        };
        for (i, name) in column_names.iter_mut().enumerate() {
            if name.is_empty() {
                *name = placeholder(i);
            }
        }

        let mut column_index = IndexMap::with_capacity(column_names.len());
        for (i, name) in column_names.iter().enumerate() {
            column_index.entry(name.clone()).or_insert(i);
        }

        let column_type_cache = (0..column_names.len()).map(|_| OnceLock::new()).collect();

        Ok(Table { header_data, column_names, column_index, data, column_type_cache })
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    pub fn header_data(&self) -> &[Vec<String>] {
        &self.header_data
    }

    pub fn column_index(&self, name: &str) -> Result<usize, DsvError> {
        self.column_index
            .get(name)
            .copied()
            .ok_or_else(|| DsvError::validation(format!("column name `{name}` not found")))
    }

    fn check_row_index(&self, index: usize) -> Result<(), DsvError> {
        if index >= self.data.len() {
            return Err(DsvError::range(
                "row index out of range",
                Some(0),
                Some(self.data.len().saturating_sub(1) as i64),
            ));
        }
        Ok(())
    }

    pub fn row_as_list(&self, index: usize) -> Result<&[String], DsvError> {
        self.check_row_index(index)?;
        Ok(&self.data[index])
    }

    pub fn row_as_tuple(&self, index: usize) -> Result<Vec<String>, DsvError> {
        Ok(self.row_as_list(index)?.to_vec())
    }

    pub fn row(&self, index: usize) -> Result<IndexMap<String, String>, DsvError> {
        let row = self.row_as_list(index)?;
        Ok(self
            .column_names
            .iter()
            .cloned()
            .zip(row.iter().cloned())
            .collect())
    }

    pub fn cell_value(&self, name: &str, index: usize) -> Result<&str, DsvError> {
        let col = self.column_index(name)?;
        let row = self.row_as_list(index)?;
        Ok(row.get(col).map(|s| s.as_str()).unwrap_or(""))
    }

    pub fn column_values(&self, name: &str) -> Result<Vec<&str>, DsvError> {
        let col = self.column_index(name)?;
        Ok(self.data.iter().map(|row| row.get(col).map(|s| s.as_str()).unwrap_or("")).collect())
    }

    /// The column's inferred `DataType`, computed once and cached.
    pub fn column_type(&self, name: &str) -> Result<DataType, DsvError> {
        let col = self.column_index(name)?;
        let cached = self.column_type_cache[col].get_or_init(|| {
            let values = self.data.iter().map(|row| row.get(col).map(|s| s.as_str()));
            profile_values(values, true, true)
        });
        Ok(*cached)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[String]> {
        self.data.iter().map(|r| r.as_slice())
    }

    pub fn iter_rows_as_maps(&self) -> impl Iterator<Item = IndexMap<String, String>> + '_ {
        self.data.iter().map(move |row| {
            self.column_names.iter().cloned().zip(row.iter().cloned()).collect()
        })
    }

    /// Project every cell through the classifier according to each
    /// column's inferred type, using the crate's built-in empty/none
    /// defaults (see [`TypeConfig::default_empty`]).
    pub fn to_typed(&self) -> Result<TypedTable, DsvError> {
        self.to_typed_with(&TypeConfig::new())
    }

    /// Project every cell through the classifier according to each
    /// column's inferred type, using `type_configs` to override the
    /// empty-default and none-default per `DataType` where present.
    pub fn to_typed_with(&self, type_configs: &TypeConfig) -> Result<TypedTable, DsvError> {
        let mut columns_types = Vec::with_capacity(self.column_names.len());
        for name in &self.column_names {
            columns_types.push(self.column_type(name)?);
        }
        let defaults: Vec<(Cell, Cell)> =
            columns_types.iter().map(|dt| type_configs.defaults_for(*dt)).collect();

        let rows: Vec<Vec<Cell>> = self
            .data
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(i, raw)| {
                        let (empty_default, none_default) = &defaults[i];
                        Cell::from_raw_with_defaults(raw, columns_types[i], true, empty_default, none_default)
                    })
                    .collect()
            })
            .collect();

        Ok(TypedTable { column_names: self.column_names.clone(), rows })
    }
}

/// A typed projection of a `Table`: every cell has been converted to
/// its column's inferred `DataType`.
pub struct TypedTable {
    column_names: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl TypedTable {
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|r| r.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_has_width_equal_to_column_count() {
        let rows = vec![
            vec!["Name".to_string(), "Age".to_string()],
            vec!["John".to_string(), "30".to_string()],
            vec!["Jane".to_string()],
        ];
        let table = Table::new(rows, 1, false).unwrap();
        for i in 0..table.row_count() {
            assert_eq!(table.row_as_list(i).unwrap().len(), table.column_count());
        }
    }

    #[test]
    fn multi_row_header_merge() {
        let rows = vec![
            vec!["Employee".to_string(), "Employee".to_string(), "Location".to_string()],
            vec!["First".to_string(), "Last".to_string(), "City".to_string()],
            vec!["John".to_string(), "Doe".to_string(), "NY".to_string()],
        ];
        let table = Table::new(rows, 2, false).unwrap();
        assert_eq!(
            table.column_names(),
            &["Employee_First".to_string(), "Employee_Last".to_string(), "Location_City".to_string()]
        );
        let row0 = table.row(0).unwrap();
        assert_eq!(row0.get("Employee_First").unwrap(), "John");
    }

    #[test]
    fn uneven_rows_and_empty_header_cell_get_placeholder() {
        let rows = vec![
            vec!["Name".to_string(), "".to_string(), "City".to_string()],
            vec!["John".to_string(), "30".to_string(), "NY".to_string()],
            vec!["Jane".to_string(), "25".to_string()],
            vec!["Bob".to_string()],
        ];
        let table = Table::new(rows, 1, false).unwrap();
        assert_eq!(
            table.column_names(),
            &["Name".to_string(), "column_1".to_string(), "City".to_string()]
        );
        let row1 = table.row(1).unwrap();
        assert_eq!(row1.get("Name").unwrap(), "Jane");
        assert_eq!(row1.get("column_1").unwrap(), "25");
        assert_eq!(row1.get("City").unwrap(), "");

        let row2 = table.row(2).unwrap();
        assert_eq!(row2.get("Name").unwrap(), "Bob");
        assert_eq!(row2.get("column_1").unwrap(), "");
        assert_eq!(row2.get("City").unwrap(), "");
    }

    #[test]
    fn column_type_is_memoized_and_correct() {
        let rows = vec![
            vec!["n".to_string()],
            vec!["1".to_string()],
            vec!["2".to_string()],
            vec!["3".to_string()],
        ];
        let table = Table::new(rows, 1, false).unwrap();
        assert_eq!(table.column_type("n").unwrap(), DataType::Integer);
        // second call hits the cache and returns the same result
        assert_eq!(table.column_type("n").unwrap(), DataType::Integer);
    }

    #[test]
    fn row_out_of_range_is_an_error() {
        let rows = vec![vec!["a".to_string()], vec!["1".to_string()]];
        let table = Table::new(rows, 1, false).unwrap();
        assert!(table.row_as_list(5).is_err());
    }

    #[test]
    fn to_typed_converts_numeric_columns() {
        let rows = vec![
            vec!["n".to_string()],
            vec!["1".to_string()],
            vec!["2".to_string()],
        ];
        let table = Table::new(rows, 1, false).unwrap();
        let typed = table.to_typed().unwrap();
        let row0 = typed.row(0).unwrap();
        assert_eq!(row0[0], Cell::Integer(1));
    }

    #[test]
    fn to_typed_defaults_empty_numeric_cells_to_zero() {
        let rows = vec![
            vec!["n".to_string()],
            vec!["1".to_string()],
            vec!["".to_string()],
        ];
        let table = Table::new(rows, 1, false).unwrap();
        let typed = table.to_typed().unwrap();
        assert_eq!(typed.row(1).unwrap()[0], Cell::Integer(0));
    }

    #[test]
    fn to_typed_with_overrides_the_empty_default() {
        let rows = vec![
            vec!["n".to_string()],
            vec!["1".to_string()],
            vec!["".to_string()],
        ];
        let table = Table::new(rows, 1, false).unwrap();
        let config = TypeConfig::new().set(DataType::Integer, Cell::Integer(-1), Cell::None);
        let typed = table.to_typed_with(&config).unwrap();
        assert_eq!(typed.row(1).unwrap()[0], Cell::Integer(-1));
    }
}
