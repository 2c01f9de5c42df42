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

//! Exact decimal formatting for fixed-point integers.
//!
//! All rendering is performed with integer division and string padding, never through
//! floating-point, so the output is always the exact value represented by the integer.

use std::fmt::Write;

/// The largest scale whose power of ten fits in a `u128`.
pub const MAX_FORMAT_SCALE: u8 = 38;

/// Formats a fixed-point `value` with `scale` implied decimal places.
///
/// The result has exactly `scale` digits after the decimal point (no point at all when
/// `scale` is zero) and a leading `-` for negative values.
///
/// # Examples
///
/// ```
/// use ledgerkit_core::formatting::format_fixed;
///
/// assert_eq!(format_fixed(1_050, 2), "10.50");
/// assert_eq!(format_fixed(-5, 2), "-0.05");
/// assert_eq!(format_fixed(1_000, 0), "1000");
/// ```
///
/// # Panics
///
/// Panics if `scale` exceeds [`MAX_FORMAT_SCALE`].
#[must_use]
pub fn format_fixed(value: i128, scale: u8) -> String {
    let magnitude = value.unsigned_abs();
    let mut out = String::with_capacity(42);

    if value < 0 {
        out.push('-');
    }

    if scale == 0 {
        let _ = write!(out, "{magnitude}");
        return out;
    }

    assert!(
        scale <= MAX_FORMAT_SCALE,
        "`scale` exceeded maximum {MAX_FORMAT_SCALE}, was {scale}"
    );
    let divisor = 10_u128.pow(u32::from(scale));
    let major = magnitude / divisor;
    let minor = magnitude % divisor;
    let width = usize::from(scale);
    let _ = write!(out, "{major}.{minor:0>width$}");
    out
}

fn separate_with(s: &str, sep: char) -> String {
    let (neg, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let (int_part, dec_part) = match digits.find('.') {
        Some(pos) => (&digits[..pos], Some(&digits[pos..])),
        None => (digits, None),
    };

    let mut result = String::with_capacity(s.len() + int_part.len() / 3);

    if neg {
        result.push('-');
    }

    let chars: Vec<char> = int_part.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i).is_multiple_of(3) {
            result.push(sep);
        }
        result.push(*c);
    }

    if let Some(dec) = dec_part {
        result.push_str(dec);
    }

    result
}

/// Extension trait for grouping the integer digits of a rendered number.
///
/// Only the digits before the decimal point are grouped, the fractional part is kept verbatim.
pub trait Separable {
    /// Formats the number with commas as thousand separators.
    fn separate_with_commas(&self) -> String;
}

impl Separable for String {
    fn separate_with_commas(&self) -> String {
        separate_with(self, ',')
    }
}
