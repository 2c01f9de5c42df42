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

//! Parsing of human-written amount strings.
//!
//! Two shapes are accepted:
//!
//! | Shape                                         | Example      |
//! |-----------------------------------------------|--------------|
//! | `symbol [ws] [sign] digits ['.' digits]`      | `£11`, `US$ 2.50` |
//! | `[sign] digits ['.' digits] ws code`          | `10 GBP`, `-0.05 gbp` |
//!
//! Parsing happens in two steps. [`designate`] splits the text into a designator and a literal
//! without touching the number, then the designator is resolved through a [`TokenRegistry`] and
//! the literal is scaled exactly into minor units of the resolved token.

use super::{
    Amount,
    fixed::parse_minor_units,
    registry::{TokenRegistry, default_registry},
    token::{is_code_like, is_literal_start},
};
use crate::error::{AmountError, ParseFailure};

/// The designator found in an amount string, together with the unparsed literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Designation<'a> {
    /// A symbol prefixes the literal, for example `£11`.
    LeadingSymbol { symbol: &'a str, literal: &'a str },
    /// A code follows the literal after whitespace, for example `10 GBP`.
    TrailingCode { code: &'a str, literal: &'a str },
    /// No designator could be located.
    Malformed,
}

/// Splits trimmed `text` into a designator and its literal.
///
/// Registered symbols are matched first, longest first. A trailing whitespace-separated word is
/// taken as a code when it is shaped like one. Any other non-numeric prefix is reported as a
/// symbol candidate so that it can be rejected as unknown.
#[must_use]
pub fn designate<'a>(registry: &TokenRegistry, text: &'a str) -> Designation<'a> {
    if let Some((symbol, _)) = registry.match_symbol_prefix(text) {
        let (symbol, literal) = text.split_at(symbol.len());
        return Designation::LeadingSymbol {
            symbol,
            literal: literal.trim_start(),
        };
    }

    if let Some((literal, code)) = text.rsplit_once(char::is_whitespace)
        && is_code_like(code)
    {
        return Designation::TrailingCode {
            code,
            literal: literal.trim_end(),
        };
    }

    let split = text.find(is_literal_start).unwrap_or(text.len());
    let (prefix, literal) = text.split_at(split);
    let prefix = prefix.trim_end();
    if prefix.is_empty() || is_code_like(prefix) || prefix.contains(char::is_whitespace) {
        return Designation::Malformed;
    }

    Designation::LeadingSymbol {
        symbol: prefix,
        literal,
    }
}

/// Parses `input` into an [`Amount`] using the default registry.
///
/// # Errors
///
/// Returns an error if:
/// - The input is empty, has no designator, or its literal is malformed ([`AmountError::Parse`]).
/// - The literal has more fractional digits than the token allows ([`AmountError::Parse`]).
/// - The designator is not registered ([`AmountError::UnknownToken`]).
///
/// # Examples
///
/// ```
/// use ledgerkit_model::types::{parse_currency, pounds};
///
/// assert_eq!(parse_currency("10 GBP").unwrap(), pounds(10));
/// assert_eq!(parse_currency("£11").unwrap(), pounds(11));
/// ```
pub fn parse_currency(input: &str) -> Result<Amount, AmountError> {
    parse_currency_with(default_registry(), input)
}

/// Parses `input` into an [`Amount`] using the given `registry`.
///
/// # Errors
///
/// See [`parse_currency`].
pub fn parse_currency_with(registry: &TokenRegistry, input: &str) -> Result<Amount, AmountError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(AmountError::parse(input, ParseFailure::Empty));
    }

    let designation = designate(registry, text);
    log::trace!("Designated '{text}' as {designation:?}");

    let (token, literal) = match designation {
        Designation::LeadingSymbol { symbol, literal } => {
            let token = registry
                .lookup_symbol(symbol)
                .ok_or_else(|| AmountError::UnknownToken(symbol.to_string()))?;
            (token, literal)
        }
        Designation::TrailingCode { code, literal } => {
            let token = registry
                .lookup_code(code)
                .ok_or_else(|| AmountError::UnknownToken(code.to_string()))?;
            (token, literal)
        }
        Designation::Malformed => {
            return Err(AmountError::parse(text, ParseFailure::MissingDesignator));
        }
    };

    let quantity = parse_minor_units(literal, token.fraction_digits)
        .map_err(|reason| AmountError::parse(text, reason))?;

    Ok(Amount::from_minor(quantity, token))
}
