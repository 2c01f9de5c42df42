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

//! Represents a unit of value (a currency or other token) and its minor-unit scale.

use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    sync::Arc,
};

use ledgerkit_core::{
    Serializable,
    correctness::{
        FAILED, check_predicate_true, check_unique, check_valid_designator,
        check_valid_string_ascii,
    },
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, FromRepr};
use ustr::Ustr;

use crate::{
    config::TokenConfig,
    types::fixed::{AmountRaw, check_fraction_digits, scale_factor},
};

/// The broad class of value a token represents.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
    StrumDisplay,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// A government issued currency.
    #[default]
    Fiat = 1,
    /// A cryptocurrency or other digital token.
    Crypto = 2,
    /// A unit backed by a physical commodity.
    Commodity = 3,
}

/// Represents a unit of value such as a currency.
///
/// A token is identified by its `code` and scale: two tokens are equal when they share the code
/// and `fraction_digits`, regardless of name, symbols or kind. Redefining a code at another scale
/// therefore yields a distinct token. Codes are normalized to ASCII uppercase.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "TokenConfig", into = "TokenConfig")]
pub struct Token {
    /// The unique code, for example `GBP`.
    pub code: Ustr,
    /// The human readable name.
    pub name: Ustr,
    /// The symbols which may prefix a literal, for example `£`.
    pub symbols: Vec<Ustr>,
    /// The number of decimal digits one minor unit represents.
    pub fraction_digits: u8,
    /// The class of value.
    pub kind: TokenKind,
}

/// A thread-safe shared pointer to a [`Token`], enabling efficient reuse across many amounts.
pub type SharedToken = Arc<Token>;

impl Token {
    /// Creates a new [`Token`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `code` is not a non-empty ASCII alphanumeric string starting with a letter.
    /// - `name` is empty or only whitespace.
    /// - A symbol is empty, contains whitespace, starts like a numeric literal, or is repeated.
    /// - `fraction_digits` exceeds [`MAX_FRACTION_DIGITS`](crate::types::fixed::MAX_FRACTION_DIGITS).
    pub fn new_checked<T: AsRef<str>>(
        code: T,
        name: T,
        symbols: &[T],
        fraction_digits: u8,
        kind: TokenKind,
    ) -> anyhow::Result<Self> {
        let code = code.as_ref();
        let name = name.as_ref();
        check_valid_string_ascii(code, "code")?;
        check_predicate_true(
            is_code_like(code),
            &format!("invalid code '{code}', expected ASCII alphanumerics starting with a letter"),
        )?;
        check_predicate_true(
            !name.trim().is_empty(),
            &format!("invalid name for token '{code}', was empty"),
        )?;
        check_fraction_digits(fraction_digits)?;

        let mut checked: Vec<Ustr> = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            let symbol = symbol.as_ref();
            check_valid_designator(symbol, "symbol")?;
            check_predicate_true(
                !symbol.starts_with(is_literal_start),
                &format!("invalid symbol '{symbol}', cannot start like a numeric literal"),
            )?;
            let symbol = Ustr::from(symbol);
            check_unique(&symbol, &checked, "symbol")?;
            checked.push(symbol);
        }

        Ok(Self {
            code: Ustr::from(&code.to_ascii_uppercase()),
            name: Ustr::from(name.trim()),
            symbols: checked,
            fraction_digits,
            kind,
        })
    }

    /// Creates a new [`Token`] instance.
    ///
    /// # Panics
    ///
    /// Panics if any argument fails the checks of [`Token::new_checked`].
    #[must_use]
    pub fn new<T: AsRef<str>>(
        code: T,
        name: T,
        symbols: &[T],
        fraction_digits: u8,
        kind: TokenKind,
    ) -> Self {
        Self::new_checked(code, name, symbols, fraction_digits, kind).expect(FAILED)
    }

    /// Returns the fraction of one major unit that one minor unit represents.
    ///
    /// This is exactly `10^-fraction_digits`, for example `0.01` for a two digit currency.
    #[must_use]
    pub fn display_token_size(&self) -> Decimal {
        Decimal::new(1, u32::from(self.fraction_digits))
    }

    /// Returns the number of minor units in one major unit.
    #[must_use]
    pub fn scale_factor(&self) -> AmountRaw {
        scale_factor(self.fraction_digits)
    }

    /// Returns true if `designator` matches this token's code, ignoring ASCII case.
    #[must_use]
    pub fn matches_code(&self, designator: &str) -> bool {
        self.code.as_str().eq_ignore_ascii_case(designator)
    }

    /// Returns true if `symbol` is one of this token's symbols (exact match).
    #[must_use]
    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s.as_str() == symbol)
    }

    /// Returns the first declared symbol, if any.
    #[must_use]
    pub fn primary_symbol(&self) -> Option<&str> {
        self.symbols.first().map(Ustr::as_str)
    }

    /// Returns true if every attribute (not only the code) equals `other`.
    #[must_use]
    pub fn same_definition(&self, other: &Self) -> bool {
        self.code == other.code
            && self.name == other.name
            && self.symbols == other.symbols
            && self.fraction_digits == other.fraction_digits
            && self.kind == other.kind
    }
}

/// Returns true if `s` is shaped like a token code: ASCII alphanumerics starting with a letter.
pub(crate) fn is_code_like(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Returns true if `c` may begin a numeric literal.
pub(crate) fn is_literal_start(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '.')
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.fraction_digits == other.fraction_digits
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
        self.fraction_digits.hash(state);
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(code='{}', name='{}', symbols={:?}, fraction_digits={}, kind={})",
            stringify!(Token),
            self.code,
            self.name,
            self.symbols.iter().map(Ustr::as_str).collect::<Vec<_>>(),
            self.fraction_digits,
            self.kind,
        )
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl TryFrom<TokenConfig> for Token {
    type Error = anyhow::Error;

    fn try_from(config: TokenConfig) -> Result<Self, Self::Error> {
        let symbols: Vec<&str> = config.symbols.iter().map(String::as_str).collect();
        Self::new_checked(
            config.code.as_str(),
            config.name.as_str(),
            &symbols,
            config.fraction_digits,
            config.kind,
        )
    }
}

impl From<Token> for TokenConfig {
    fn from(token: Token) -> Self {
        Self {
            code: token.code.to_string(),
            name: token.name.to_string(),
            symbols: token.symbols.iter().map(ToString::to_string).collect(),
            fraction_digits: token.fraction_digits,
            kind: token.kind,
        }
    }
}

impl Serializable for Token {}
