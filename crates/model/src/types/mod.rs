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

//! Value types for tokenized monetary amounts.
//!
//! This module provides the [`Token`] identity, the [`TokenRegistry`] that resolves codes and
//! symbols, and the [`Amount`] value. Amounts use fixed-point arithmetic on an integer count of
//! minor units, so parsing, arithmetic and rendering are exact.
//!
//! # Immutability
//!
//! Amounts are **immutable**. Arithmetic returns new instances rather than modifying existing
//! ones, and the token is shared behind an `Arc`, so amounts are cheap to clone and safe to send
//! between threads.
//!
//! # Arithmetic operations
//!
//! The `checked_*` methods return an [`AmountError`](crate::error::AmountError) instead of
//! panicking. The standard operator traits are provided for same-token code:
//!
//! | Operation         | Result   | Notes                                            |
//! |-------------------|----------|--------------------------------------------------|
//! | `Amount + Amount` | `Amount` | Panics if tokens don't match or on overflow.     |
//! | `Amount - Amount` | `Amount` | Panics if tokens don't match or on overflow.     |
//! | `Amount * i64`    | `Amount` | Panics on overflow.                              |
//! | `-Amount`         | `Amount` | Panics on overflow.                              |
//!
//! # Precision
//!
//! Each token fixes its number of fraction digits, up to [`fixed::MAX_FRACTION_DIGITS`]. A literal
//! with more fractional digits than its token allows is rejected, never rounded.
//!
//! # Constraints
//!
//! - Amounts are signed: negative values represent debits.
//! - Amounts of different tokens never combine or order against each other.

pub mod amount;
pub mod constructors;
pub mod currencies;
pub mod fixed;
pub mod parse;
pub mod registry;
pub mod token;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use amount::Amount;
pub use constructors::{bitcoin, dollars, euros, pounds, swiss_francs, yen};
pub use fixed::{AmountRaw, MAX_FRACTION_DIGITS};
pub use parse::{Designation, designate, parse_currency, parse_currency_with};
pub use registry::{TokenRegistry, default_registry};
pub use token::{SharedToken, Token, TokenKind};
