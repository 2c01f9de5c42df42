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

//! Error types for amount parsing, token resolution and arithmetic.
//!
//! Every error here is a deterministic function of its inputs: none is retryable, and all are
//! returned to the immediate caller rather than logged.

use ustr::Ustr;

/// The reason a decimal literal or amount string could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    /// The input was empty or only whitespace.
    #[error("input is empty")]
    Empty,
    /// Neither a leading symbol nor a trailing code was found.
    #[error("no leading currency symbol or trailing currency code")]
    MissingDesignator,
    /// The numeric literal had no digits where digits are required.
    #[error("missing digits")]
    MissingDigits,
    /// A character outside the literal grammar was found.
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),
    /// The fractional part has more digits than the token supports.
    #[error("{found} fraction digits exceeds the {max} supported by the token")]
    ExcessPrecision { found: usize, max: u8 },
    /// The value does not fit the quantity integer range.
    #[error("value is out of the representable range")]
    OutOfRange,
}

/// An error raised by amount operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// Malformed literal, excess precision or missing designator.
    #[error("invalid amount '{input}': {reason}")]
    Parse { input: String, reason: ParseFailure },
    /// No registered token matches the designator.
    #[error("unknown token designator '{0}'")]
    UnknownToken(String),
    /// Arithmetic or comparison across two different tokens.
    #[error("token mismatch: cannot combine {left} with {right}")]
    TokenMismatch { left: Ustr, right: Ustr },
    /// Arithmetic result exceeds the quantity integer range.
    #[error("overflow in {operation} of {token} amounts")]
    Overflow {
        operation: &'static str,
        token: Ustr,
    },
    /// The code or symbol is already claimed by another registered token.
    #[error("designator '{designator}' is already registered to {existing}")]
    DuplicateDesignator { designator: String, existing: Ustr },
}

impl AmountError {
    pub(crate) fn parse(input: impl Into<String>, reason: ParseFailure) -> Self {
        Self::Parse {
            input: input.into(),
            reason,
        }
    }

    /// Returns true if this is a parse error.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Returns true if this is an unknown token error.
    #[must_use]
    pub fn is_unknown_token(&self) -> bool {
        matches!(self, Self::UnknownToken(_))
    }

    /// Returns true if this is a token mismatch error.
    #[must_use]
    pub fn is_token_mismatch(&self) -> bool {
        matches!(self, Self::TokenMismatch { .. })
    }

    /// Returns true if this is an overflow error.
    #[must_use]
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }

    /// Returns the parse failure reason, if this is a parse error.
    #[must_use]
    pub fn parse_failure(&self) -> Option<&ParseFailure> {
        match self {
            Self::Parse { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_parse_error_display() {
        let err = AmountError::parse(
            "10.001 GBP",
            ParseFailure::ExcessPrecision { found: 3, max: 2 },
        );
        assert_eq!(
            err.to_string(),
            "invalid amount '10.001 GBP': 3 fraction digits exceeds the 2 supported by the token"
        );
        assert!(err.is_parse());
        assert_eq!(
            err.parse_failure(),
            Some(&ParseFailure::ExcessPrecision { found: 3, max: 2 })
        );
    }

    #[rstest]
    fn test_token_mismatch_display() {
        let err = AmountError::TokenMismatch {
            left: Ustr::from("GBP"),
            right: Ustr::from("USD"),
        };
        assert_eq!(err.to_string(), "token mismatch: cannot combine GBP with USD");
        assert!(err.is_token_mismatch());
        assert!(!err.is_overflow());
        assert_eq!(err.parse_failure(), None);
    }

    #[rstest]
    fn test_overflow_display() {
        let err = AmountError::Overflow {
            operation: "addition",
            token: Ustr::from("JPY"),
        };
        assert_eq!(err.to_string(), "overflow in addition of JPY amounts");
        assert!(err.is_overflow());
    }

    #[rstest]
    fn test_unknown_token_display() {
        let err = AmountError::UnknownToken("XYZ".to_string());
        assert_eq!(err.to_string(), "unknown token designator 'XYZ'");
        assert!(err.is_unknown_token());
    }
}
