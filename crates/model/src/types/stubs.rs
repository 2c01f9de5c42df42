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

//! Helper functions for stubbing tokens, registries and amounts in tests.

use rstest::fixture;

use super::{
    Amount, TokenRegistry,
    currencies::{gbp, usd},
    dollars, pounds,
    token::{Token, TokenKind},
};
use crate::config::{RegistryConfig, TokenConfig};

#[fixture]
pub fn token_gbp() -> Token {
    gbp().as_ref().clone()
}

#[fixture]
pub fn token_usd() -> Token {
    usd().as_ref().clone()
}

#[fixture]
pub fn registry() -> TokenRegistry {
    TokenRegistry::with_defaults()
}

/// A registry without the default tokens, holding a three digit dinar and whole points.
///
/// # Panics
///
/// Panics if the fixture configuration is rejected.
#[fixture]
pub fn custom_registry() -> TokenRegistry {
    let config = RegistryConfig {
        include_defaults: false,
        tokens: vec![
            TokenConfig {
                code: "KWD".to_string(),
                name: "Kuwaiti dinar".to_string(),
                symbols: vec!["KD".to_string()],
                fraction_digits: 3,
                kind: TokenKind::Fiat,
            },
            TokenConfig {
                code: "PTS".to_string(),
                name: "Loyalty points".to_string(),
                symbols: vec![],
                fraction_digits: 0,
                kind: TokenKind::Commodity,
            },
        ],
    };
    TokenRegistry::from_config(&config).unwrap()
}

#[fixture]
pub fn amount_ten_pounds() -> Amount {
    pounds(10)
}

#[fixture]
pub fn amount_five_dollars() -> Amount {
    dollars(5)
}
