// ABOUTME: Food dataset loader that reads the nutrition CSV once at startup
// ABOUTME: Validates required columns, imputes missing values, and keeps extra columns verbatim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dataset loading
//!
//! Missing values are resolved here, once, so the recommendation filter only
//! ever sees fully typed rows:
//!
//! - `BMI_Range` blank, `Unknown` or non-numeric: most frequent known code
//!   (smallest code on ties, `0` when the column has no known codes)
//! - `Veg/NonVeg` blank: `-1`
//! - `Sugars` blank: mean of the present values (`None` when there are none)
//!
//! A cell is missing when it is blank or holds one of the conventional
//! missing-value markers (`NA`, `NaN`, `null`, `#N/A`, ...). Missing meal-slot
//! indicators count as "not in this slot". Any other non-numeric value in a
//! required column fails the load.

use meal_core::constants::{columns, UNKNOWN_DIET_CLASS};
use meal_core::errors::AppError;
use meal_core::models::{FoodDataset, FoodItem, Nutrients};
use serde_json::{Map, Number, Value};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Dataset loading failures; all of them are fatal at startup
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot open dataset {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("line {line}: column '{column}' has non-numeric value '{value}'")]
    InvalidValue {
        line: u64,
        column: &'static str,
        value: String,
    },
}

impl From<DatasetError> for AppError {
    fn from(err: DatasetError) -> Self {
        Self::dataset(err.to_string()).with_source(err)
    }
}

/// Load and validate the dataset at `path`
///
/// # Errors
///
/// Returns a [`DatasetError`] if the file cannot be opened, is not valid CSV,
/// lacks a required column, or holds a non-numeric required value
pub fn load_dataset(path: &Path) -> Result<FoodDataset, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Open {
        path: path.display().to_string(),
        source,
    })?;
    load_dataset_from_reader(file)
}

/// Load and validate a dataset from any CSV source
///
/// # Errors
///
/// Same as [`load_dataset`], minus the open failure
pub fn load_dataset_from_reader<R: Read>(reader: R) -> Result<FoodDataset, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let header: Vec<String> = csv_reader.headers()?.iter().map(str::to_owned).collect();
    let index = ColumnIndex::resolve(&header)?;

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        rows.push(index.parse_row(&record, line)?);
    }

    let bmi_fill = most_frequent_code(rows.iter().filter_map(|row| row.bmi_range));
    let sugars_fill = mean(rows.iter().filter_map(|row| row.sugars));

    let imputed_bmi = rows.iter().filter(|row| row.bmi_range.is_none()).count();
    let imputed_sugars = rows.iter().filter(|row| row.sugars.is_none()).count();
    if imputed_bmi > 0 || imputed_sugars > 0 {
        debug!(
            imputed_bmi,
            imputed_sugars,
            bmi_fill,
            sugars_fill = ?sugars_fill,
            "Imputed missing dataset values"
        );
    }
    if sugars_fill.is_none() && imputed_sugars > 0 {
        warn!("Sugars column has no values; sugars will be reported as null");
    }

    let items = rows
        .into_iter()
        .map(|row| FoodItem {
            name: row.name,
            breakfast: row.breakfast,
            lunch: row.lunch,
            dinner: row.dinner,
            veg_non_veg: row.veg_non_veg,
            bmi_range: row.bmi_range.unwrap_or(bmi_fill),
            sugars: row.sugars.or(sugars_fill),
            nutrients: row.nutrients,
            extra: row.extra,
        })
        .collect();

    Ok(FoodDataset::new(items, header))
}

/// A parsed row before column-wide imputation
struct RawRow {
    name: String,
    breakfast: bool,
    lunch: bool,
    dinner: bool,
    veg_non_veg: i64,
    bmi_range: Option<i64>,
    sugars: Option<f64>,
    nutrients: Nutrients,
    extra: Map<String, Value>,
}

/// Header positions of the required columns plus the pass-through columns
struct ColumnIndex {
    required: HashMap<&'static str, usize>,
    extra: Vec<(usize, String)>,
}

impl ColumnIndex {
    fn resolve(header: &[String]) -> Result<Self, DatasetError> {
        let mut required = HashMap::with_capacity(columns::REQUIRED.len());
        for name in columns::REQUIRED {
            let position = header
                .iter()
                .position(|column| column == name)
                .ok_or(DatasetError::MissingColumn(name))?;
            required.insert(name, position);
        }

        let extra = header
            .iter()
            .enumerate()
            .filter(|(_, column)| !columns::REQUIRED.contains(&column.as_str()))
            .map(|(position, column)| (position, column.clone()))
            .collect();

        Ok(Self { required, extra })
    }

    fn cell<'r>(&self, record: &'r csv::StringRecord, column: &'static str) -> &'r str {
        self.required
            .get(column)
            .and_then(|&position| record.get(position))
            .unwrap_or("")
    }

    fn parse_row(&self, record: &csv::StringRecord, line: u64) -> Result<RawRow, DatasetError> {
        let number = |column: &'static str| -> Result<Option<f64>, DatasetError> {
            let raw = self.cell(record, column);
            if is_missing(raw) {
                return Ok(None);
            }
            parse_number(raw)
                .map(Some)
                .ok_or_else(|| DatasetError::InvalidValue {
                    line,
                    column,
                    value: raw.to_owned(),
                })
        };
        let required_number = |column: &'static str| -> Result<f64, DatasetError> {
            number(column)?.ok_or_else(|| DatasetError::InvalidValue {
                line,
                column,
                value: self.cell(record, column).to_owned(),
            })
        };
        let indicator = |column: &'static str| -> Result<bool, DatasetError> {
            Ok(number(column)?.is_some_and(|value| (value - 1.0).abs() < f64::EPSILON))
        };

        let veg_non_veg = number(columns::VEG_NON_VEG)?
            .map_or(UNKNOWN_DIET_CLASS, |value| value as i64);

        // Unknown or non-numeric categories are imputed, never rejected
        let bmi_cell = self.cell(record, columns::BMI_RANGE);
        let bmi_range = Some(bmi_cell)
            .filter(|raw| !is_missing(raw))
            .and_then(parse_number)
            .filter(|value| value.fract().abs() < f64::EPSILON)
            .map(|value| value as i64);

        let extra = self
            .extra
            .iter()
            .map(|(position, column)| {
                (
                    column.clone(),
                    passthrough_value(record.get(*position).unwrap_or("")),
                )
            })
            .collect();

        Ok(RawRow {
            name: self.cell(record, columns::FOOD_ITEMS).to_owned(),
            breakfast: indicator(columns::BREAKFAST)?,
            lunch: indicator(columns::LUNCH)?,
            dinner: indicator(columns::DINNER)?,
            veg_non_veg,
            bmi_range,
            sugars: number(columns::SUGARS)?,
            nutrients: Nutrients::new(
                required_number(columns::CALORIES)?,
                required_number(columns::PROTEINS)?,
                required_number(columns::FATS)?,
                required_number(columns::CARBOHYDRATES)?,
            ),
            extra,
        })
    }
}

/// Markers read as "no value", matching what common CSV tooling emits for NA
const MISSING_VALUE_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(raw: &str) -> bool {
    raw.is_empty() || MISSING_VALUE_MARKERS.contains(&raw)
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// JSON value for a pass-through cell: numbers stay numbers, missing cells become null
fn passthrough_value(raw: &str) -> Value {
    if is_missing(raw) {
        return Value::Null;
    }
    if let Ok(integer) = raw.parse::<i64>() {
        return Value::Number(integer.into());
    }
    parse_number(raw)
        .and_then(Number::from_f64)
        .map_or_else(|| Value::String(raw.to_owned()), Value::Number)
}

fn most_frequent_code(codes: impl Iterator<Item = i64>) -> i64 {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for code in codes {
        *counts.entry(code).or_default() += 1;
    }

    // BTreeMap iterates in ascending code order, so strict `>` keeps the smallest on ties
    let mut best = (0, 0);
    for (code, count) in counts {
        if count > best.1 {
            best = (code, count);
        }
    }
    best.0
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0_u32), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / f64::from(count))
}
