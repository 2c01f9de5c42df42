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

//! Functions for handling fixed-point minor-unit arithmetic.
//!
//! An [`Amount`](crate::types::Amount) stores its value as a signed integer count of minor
//! units. This module owns the single scaling rule used everywhere a major-unit value becomes a
//! minor-unit quantity:
//!
//! ```text
//! quantity = integer_part * 10^fraction_digits + fraction_part (right-padded to fraction_digits)
//! ```
//!
//! The parser composes through [`compose_minor_units`] and the convenience constructors through
//! [`major_to_minor`]. Both scale by the same [`scale_factor`], so a value built from `10` major
//! units is always identical to the value parsed from `"10"`.
//!
//! # No floating-point
//!
//! Nothing in this module touches `f32`/`f64`. Decimal literals are split into digit strings and
//! accumulated with checked integer arithmetic, so every representable literal converts exactly.

use ledgerkit_core::correctness::check_in_range_inclusive_u8;

use crate::error::ParseFailure;

/// The raw integer type backing an amount quantity (minor units).
pub type AmountRaw = i128;

/// The maximum number of fraction digits a token may declare.
///
/// At 18 digits an `i64` major-unit count still fits an [`AmountRaw`] after scaling
/// (`9.2e18 * 1e18 < 1.7e38`), which keeps [`major_to_minor`] infallible.
pub const MAX_FRACTION_DIGITS: u8 = 18;

/// Precomputed powers of 10 for scale lookup.
///
/// Index i contains 10^i. Table covers 10^0 through 10^18 (sufficient for MAX_FRACTION_DIGITS).
const POWERS_OF_10: [AmountRaw; 19] = [
    1,                         // 10^0
    10,                        // 10^1
    100,                       // 10^2
    1_000,                     // 10^3
    10_000,                    // 10^4
    100_000,                   // 10^5
    1_000_000,                 // 10^6
    10_000_000,                // 10^7
    100_000_000,               // 10^8
    1_000_000_000,             // 10^9
    10_000_000_000,            // 10^10
    100_000_000_000,           // 10^11
    1_000_000_000_000,         // 10^12
    10_000_000_000_000,        // 10^13
    100_000_000_000_000,       // 10^14
    1_000_000_000_000_000,     // 10^15
    10_000_000_000_000_000,    // 10^16
    100_000_000_000_000_000,   // 10^17
    1_000_000_000_000_000_000, // 10^18
];

const _: () = assert!(
    (MAX_FRACTION_DIGITS as usize) < POWERS_OF_10.len(),
    "MAX_FRACTION_DIGITS exceeds POWERS_OF_10 table size"
);

/// Checks if a given `fraction_digits` value is within the allowed range.
///
/// # Errors
///
/// Returns an error if `fraction_digits` exceeds [`MAX_FRACTION_DIGITS`].
pub fn check_fraction_digits(fraction_digits: u8) -> anyhow::Result<()> {
    check_in_range_inclusive_u8(fraction_digits, 0, MAX_FRACTION_DIGITS, "fraction_digits")
}

/// Returns the number of minor units in one major unit (`10^fraction_digits`).
///
/// # Panics
///
/// Panics if `fraction_digits` exceeds [`MAX_FRACTION_DIGITS`].
#[inline]
#[must_use]
pub fn scale_factor(fraction_digits: u8) -> AmountRaw {
    assert!(
        fraction_digits <= MAX_FRACTION_DIGITS,
        "`fraction_digits` exceeded maximum {MAX_FRACTION_DIGITS}, was {fraction_digits}"
    );
    POWERS_OF_10[usize::from(fraction_digits)]
}

/// Combines an integer part and an already right-padded fraction part into minor units.
///
/// The sign of the result follows `integer`; `fraction` must be non-negative and strictly less
/// than [`scale_factor`]. Returns `None` on overflow.
///
/// # Panics
///
/// Panics if `fraction_digits` exceeds [`MAX_FRACTION_DIGITS`].
#[inline]
#[must_use]
pub fn compose_minor_units(
    integer: AmountRaw,
    fraction: AmountRaw,
    fraction_digits: u8,
) -> Option<AmountRaw> {
    let scale = scale_factor(fraction_digits);
    debug_assert!((0..scale).contains(&fraction), "fraction out of range");
    integer.checked_mul(scale)?.checked_add(fraction)
}

/// Converts a whole number of major units into minor units.
///
/// This cannot overflow for any `i64` input while `fraction_digits` is within
/// [`MAX_FRACTION_DIGITS`].
///
/// # Panics
///
/// Panics if `fraction_digits` exceeds [`MAX_FRACTION_DIGITS`].
#[must_use]
pub fn major_to_minor(major: i64, fraction_digits: u8) -> AmountRaw {
    let scale = scale_factor(fraction_digits);
    AmountRaw::from(major) * scale
}

/// Parses a decimal literal into an exact count of minor units.
///
/// Accepted grammar: `[+|-] digits ['.' digits]`. The fractional part may have at most
/// `fraction_digits` digits; no rounding or truncation is ever applied.
///
/// # Errors
///
/// Returns a [`ParseFailure`] if:
/// - The literal is empty, is a bare sign, or has no digits on either side of the point.
/// - A character other than an ASCII digit (or the single decimal point) is found.
/// - The fraction has more digits than `fraction_digits`.
/// - The value does not fit an [`AmountRaw`].
///
/// # Panics
///
/// Panics if `fraction_digits` exceeds [`MAX_FRACTION_DIGITS`].
pub fn parse_minor_units(literal: &str, fraction_digits: u8) -> Result<AmountRaw, ParseFailure> {
    let (negative, unsigned) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };

    let (int_digits, frac_digits) = match unsigned.split_once('.') {
        Some((int_digits, frac_digits)) => (int_digits, Some(frac_digits)),
        None => (unsigned, None),
    };

    let integer = accumulate_digits(int_digits)?;

    let fraction = match frac_digits {
        None => 0,
        Some(digits) => {
            check_digits(digits)?;
            if digits.len() > usize::from(fraction_digits) {
                return Err(ParseFailure::ExcessPrecision {
                    found: digits.len(),
                    max: fraction_digits,
                });
            }
            let value = accumulate_digits(digits)?;
            // Right-pad "5" at 2dp to 50 minor units
            let pad = fraction_digits - digits.len() as u8;
            value * scale_factor(pad)
        }
    };

    let magnitude =
        compose_minor_units(integer, fraction, fraction_digits).ok_or(ParseFailure::OutOfRange)?;

    Ok(if negative { -magnitude } else { magnitude })
}

fn check_digits(digits: &str) -> Result<(), ParseFailure> {
    if digits.is_empty() {
        return Err(ParseFailure::MissingDigits);
    }
    match digits.chars().find(|c| !c.is_ascii_digit()) {
        Some(c) => Err(ParseFailure::InvalidCharacter(c)),
        None => Ok(()),
    }
}

fn accumulate_digits(digits: &str) -> Result<AmountRaw, ParseFailure> {
    if digits.is_empty() {
        return Err(ParseFailure::MissingDigits);
    }

    digits.chars().try_fold(0 as AmountRaw, |acc, c| {
        let digit = c.to_digit(10).ok_or(ParseFailure::InvalidCharacter(c))?;
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(AmountRaw::from(digit)))
            .ok_or(ParseFailure::OutOfRange)
    })
}
