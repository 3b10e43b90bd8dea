// ABOUTME: Dietary profile model and decoder for the fixed-width parameter string
// ABOUTME: Turns strings like "F1652101065" into gender, height, age, diet, activity, goal, and weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Parameter decoding
//!
//! The request parameter is a positional string, not a delimited one:
//!
//! ```text
//! offset  0     1-3     4-5   6     7         8     suffix
//!         sex   height  age   diet  activity  goal  weight
//! ```
//!
//! The weight is the last two characters when the whole string is exactly
//! eleven characters long and the last three characters otherwise. Range
//! checks on diet, activity, and goal happen downstream; decoding only
//! guarantees that every numeric slot parsed.

use crate::constants::param_layout;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Gender used to pick the BMR constant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    /// Male gender (+5 constant)
    Male,
    /// Female gender (-161 constant)
    Female,
}

impl Gender {
    /// `F` selects female; every other character is treated as male
    #[must_use]
    pub const fn from_code(code: char) -> Self {
        if code == param_layout::FEMALE_CODE {
            Self::Female
        } else {
            Self::Male
        }
    }
}

/// Body metrics and preferences decoded from one request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DietaryProfile {
    /// Gender
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: i32,
    /// Age in years
    pub age_years: i32,
    /// 0 = non-vegetarian, 1 = vegetarian (validated by the filter)
    pub diet_flag: i32,
    /// 1-5 (validated by the energy estimator)
    pub activity_code: i32,
    /// 0 = maintain, 1 = gain, 2 = lose (validated by the filter)
    pub goal_code: i32,
    /// Weight in kilograms
    pub weight_kg: i32,
}

impl DietaryProfile {
    /// Decode a fixed-width parameter string
    ///
    /// # Errors
    ///
    /// Returns `MalformedInput` if the string is shorter than the fixed slots
    /// or any numeric slot is not an integer
    pub fn decode(raw: &str) -> AppResult<Self> {
        let chars: Vec<char> = raw.chars().collect();
        if chars.len() < param_layout::MIN_LENGTH {
            return Err(AppError::malformed_input(format!(
                "Parameter string '{raw}' is too short: expected at least {} characters",
                param_layout::MIN_LENGTH
            )));
        }

        let weight_width = if chars.len() == param_layout::SHORT_WEIGHT_LENGTH {
            2
        } else {
            3
        };

        Ok(Self {
            gender: Gender::from_code(chars[param_layout::GENDER]),
            height_cm: parse_slot(&chars, param_layout::HEIGHT.0, param_layout::HEIGHT.1, "height")?,
            age_years: parse_slot(&chars, param_layout::AGE.0, param_layout::AGE.1, "age")?,
            diet_flag: parse_slot(&chars, param_layout::DIET, param_layout::DIET + 1, "diet")?,
            activity_code: parse_slot(
                &chars,
                param_layout::ACTIVITY,
                param_layout::ACTIVITY + 1,
                "activity",
            )?,
            goal_code: parse_slot(&chars, param_layout::GOAL, param_layout::GOAL + 1, "goal")?,
            weight_kg: parse_slot(&chars, chars.len() - weight_width, chars.len(), "weight")?,
        })
    }
}

/// Decode a fixed-width parameter string into a [`DietaryProfile`]
///
/// # Errors
///
/// See [`DietaryProfile::decode`]
pub fn decode_params(raw: &str) -> AppResult<DietaryProfile> {
    DietaryProfile::decode(raw)
}

fn parse_slot(chars: &[char], start: usize, end: usize, field: &str) -> AppResult<i32> {
    let slice: String = chars[start..end].iter().collect();
    slice.parse::<i32>().map_err(|e| {
        AppError::malformed_input(format!(
            "Invalid {field} value '{slice}' at positions {start}..{end}"
        ))
        .with_source(e)
    })
}
