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

//! Tokenized fixed-point monetary amounts.
//!
//! An [`Amount`] is an exact integer count of minor units of a [`Token`], such as pence of the
//! British pound. Amounts are parsed from text like `"10 GBP"` or `"£11"` against a
//! [`TokenRegistry`], and combine only with amounts of the same token.
//!
//! ```
//! use ledgerkit_model::{parse_currency, pounds};
//!
//! let total = parse_currency("£10.50").unwrap().checked_add(&pounds(2)).unwrap();
//! assert_eq!(total.to_string(), "12.50 GBP");
//! ```
//!
//! # Feature flags
//!
//! - `stubs`: Enables the `rstest` fixtures in `types::stubs` for use by other crates' tests.

#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod types;

pub use crate::{
    config::{RegistryConfig, TokenConfig},
    error::{AmountError, ParseFailure},
    types::{
        Amount, SharedToken, Token, TokenKind, TokenRegistry, bitcoin, default_registry, dollars,
        euros, parse_currency, pounds, swiss_francs, yen,
    },
};
