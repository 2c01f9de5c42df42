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

//! Constructors for whole amounts of the default tokens.
//!
//! `pounds(10)` builds the same value as parsing `"10 GBP"`: both scale through
//! [`major_to_minor`](super::fixed::major_to_minor).

use super::{
    Amount,
    currencies::{btc, chf, eur, gbp, jpy, usd},
};

/// Returns `major` British pounds.
#[must_use]
pub fn pounds(major: i64) -> Amount {
    Amount::from_major(major, gbp())
}

/// Returns `major` US dollars.
#[must_use]
pub fn dollars(major: i64) -> Amount {
    Amount::from_major(major, usd())
}

/// Returns `major` euros.
#[must_use]
pub fn euros(major: i64) -> Amount {
    Amount::from_major(major, eur())
}

/// Returns `major` Swiss francs.
#[must_use]
pub fn swiss_francs(major: i64) -> Amount {
    Amount::from_major(major, chf())
}

/// Returns `major` Japanese yen.
#[must_use]
pub fn yen(major: i64) -> Amount {
    Amount::from_major(major, jpy())
}

/// Returns `major` whole bitcoin.
#[must_use]
pub fn bitcoin(major: i64) -> Amount {
    Amount::from_major(major, btc())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::types::{fixed::AmountRaw, parse_currency};

    #[rstest]
    #[case(pounds(10), 1_000, "GBP")]
    #[case(dollars(10), 1_000, "USD")]
    #[case(euros(10), 1_000, "EUR")]
    #[case(swiss_francs(10), 1_000, "CHF")]
    #[case(yen(10), 10, "JPY")]
    #[case(bitcoin(10), 1_000_000_000, "BTC")]
    #[case(pounds(-3), -300, "GBP")]
    #[case(pounds(0), 0, "GBP")]
    fn test_constructor_scales(
        #[case] amount: Amount,
        #[case] quantity: AmountRaw,
        #[case] code: &str,
    ) {
        assert_eq!(amount.quantity(), quantity);
        assert_eq!(amount.code().as_str(), code);
    }

    #[rstest]
    #[case(pounds(10), "10 GBP")]
    #[case(pounds(11), "£11")]
    #[case(dollars(3), "US$3")]
    #[case(euros(4), "4 EUR")]
    #[case(swiss_francs(5), "5 chf")]
    #[case(yen(6), "¥6")]
    #[case(bitcoin(7), "₿7")]
    fn test_constructor_matches_parse(#[case] amount: Amount, #[case] input: &str) {
        assert_eq!(parse_currency(input).unwrap(), amount);
    }

    #[rstest]
    #[case(i64::MAX)]
    #[case(i64::MIN)]
    fn test_constructor_extremes_do_not_overflow(#[case] major: i64) {
        let amount = bitcoin(major);
        assert_eq!(amount.quantity(), AmountRaw::from(major) * 100_000_000);
        assert_eq!(amount.to_string().parse::<Amount>().unwrap(), amount);
    }
}
