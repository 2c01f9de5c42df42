// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Functions for correctness checks similar to the *design by contract* philosophy.
//!
//! Each check returns an `anyhow::Result` describing the violated condition, so callers can
//! either propagate it (`new_checked` constructors) or panic with [`FAILED`] (`new` constructors).

use std::fmt::Display;

/// A message prefix that can be used with calls to `expect` or other assertion-related functions.
///
/// This constant provides a standard message that can be used to indicate a failure condition
/// when a predicate or condition does not hold true.
pub const FAILED: &str = "Condition failed";

/// Checks the `predicate` is true.
///
/// # Errors
///
/// Returns an error if the validation check fails.
#[inline(always)]
pub fn check_predicate_true(predicate: bool, fail_msg: &str) -> anyhow::Result<()> {
    if !predicate {
        anyhow::bail!("{fail_msg}")
    }
    Ok(())
}

/// Checks the string `s` has semantic meaning and contains only ASCII characters.
///
/// # Errors
///
/// Returns an error if:
/// - `s` is an empty string.
/// - `s` consists solely of whitespace characters.
/// - `s` contains one or more non-ASCII characters.
#[inline(always)]
pub fn check_valid_string_ascii<T: AsRef<str>>(s: T, param: &str) -> anyhow::Result<()> {
    let s = s.as_ref();

    if s.is_empty() {
        anyhow::bail!("invalid string for '{param}', was empty");
    }

    if s.chars().all(char::is_whitespace) {
        anyhow::bail!("invalid string for '{param}', was all whitespace");
    }

    if !s.is_ascii() {
        anyhow::bail!("invalid string for '{param}' contained a non-ASCII char, was '{s}'");
    }

    Ok(())
}

/// Checks the string `s` is a usable designator: non-empty and free of whitespace.
///
/// Unlike [`check_valid_string_ascii`], non-ASCII characters are permitted since currency
/// symbols such as `£` or `€` are outside the ASCII range.
///
/// # Errors
///
/// Returns an error if `s` is empty or contains any whitespace character.
#[inline(always)]
pub fn check_valid_designator<T: AsRef<str>>(s: T, param: &str) -> anyhow::Result<()> {
    let s = s.as_ref();

    if s.is_empty() {
        anyhow::bail!("invalid designator for '{param}', was empty");
    }

    if s.chars().any(char::is_whitespace) {
        anyhow::bail!("invalid designator for '{param}' contained whitespace, was '{s}'");
    }

    Ok(())
}

/// Checks the `u8` value is in range [`l`, `r`] (inclusive).
///
/// # Errors
///
/// Returns an error if the validation check fails.
#[inline(always)]
pub fn check_in_range_inclusive_u8(value: u8, l: u8, r: u8, param: &str) -> anyhow::Result<()> {
    if value < l || value > r {
        anyhow::bail!("invalid u8 for '{param}' not in range [{l}, {r}], was {value}")
    }
    Ok(())
}

/// Checks the `value` is not already present in `existing`.
///
/// # Errors
///
/// Returns an error naming the duplicated `value` if found.
pub fn check_unique<'a, T>(
    value: &T,
    existing: impl IntoIterator<Item = &'a T>,
    param: &str,
) -> anyhow::Result<()>
where
    T: PartialEq + Display + ?Sized + 'a,
{
    if existing.into_iter().any(|item| item == value) {
        anyhow::bail!("duplicate value for '{param}', was '{value}'")
    }
    Ok(())
}
