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

//! The default token set.
//!
//! Each token is built once on first use and shared, so every default amount of a given code
//! points at the same [`Token`] allocation.

use std::sync::{Arc, LazyLock};

use super::token::{SharedToken, Token, TokenKind};

static GBP: LazyLock<SharedToken> =
    LazyLock::new(|| Arc::new(Token::new("GBP", "British pound", &["£"], 2, TokenKind::Fiat)));
static USD: LazyLock<SharedToken> = LazyLock::new(|| {
    Arc::new(Token::new(
        "USD",
        "US dollar",
        &["$", "US$"],
        2,
        TokenKind::Fiat,
    ))
});
static EUR: LazyLock<SharedToken> =
    LazyLock::new(|| Arc::new(Token::new("EUR", "Euro", &["€"], 2, TokenKind::Fiat)));
static CHF: LazyLock<SharedToken> =
    LazyLock::new(|| Arc::new(Token::new("CHF", "Swiss franc", &[], 2, TokenKind::Fiat)));
static JPY: LazyLock<SharedToken> =
    LazyLock::new(|| Arc::new(Token::new("JPY", "Japanese yen", &["¥"], 0, TokenKind::Fiat)));
static BTC: LazyLock<SharedToken> =
    LazyLock::new(|| Arc::new(Token::new("BTC", "Bitcoin", &["₿"], 8, TokenKind::Crypto)));
static XAU: LazyLock<SharedToken> = LazyLock::new(|| {
    Arc::new(Token::new(
        "XAU",
        "Gold (troy ounce)",
        &[],
        2,
        TokenKind::Commodity,
    ))
});

/// Returns the British pound token.
#[must_use]
pub fn gbp() -> SharedToken {
    GBP.clone()
}

/// Returns the US dollar token.
#[must_use]
pub fn usd() -> SharedToken {
    USD.clone()
}

/// Returns the Euro token.
#[must_use]
pub fn eur() -> SharedToken {
    EUR.clone()
}

/// Returns the Swiss franc token.
#[must_use]
pub fn chf() -> SharedToken {
    CHF.clone()
}

/// Returns the Japanese yen token.
#[must_use]
pub fn jpy() -> SharedToken {
    JPY.clone()
}

/// Returns the Bitcoin token.
#[must_use]
pub fn btc() -> SharedToken {
    BTC.clone()
}

/// Returns the gold (troy ounce) token.
#[must_use]
pub fn xau() -> SharedToken {
    XAU.clone()
}

/// Returns every token of the default set.
#[must_use]
pub fn default_tokens() -> Vec<SharedToken> {
    vec![gbp(), usd(), eur(), chf(), jpy(), btc(), xau()]
}
