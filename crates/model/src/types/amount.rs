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

//! Represents an exact amount of a [`Token`](super::Token), counted in minor units.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    ops::{Add, Mul, Neg, Sub},
    str::FromStr,
};

use ledgerkit_core::{
    Separable, Serializable,
    formatting::format_fixed,
    serialization::{deserialize_from_str, serialize_display},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ustr::Ustr;

use super::{
    fixed::{AmountRaw, major_to_minor},
    parse::parse_currency,
    token::SharedToken,
};
use crate::error::{AmountError, ParseFailure};

/// Represents an exact amount of a token.
///
/// The quantity is an integer count of the token's minor units, so `10.00 GBP` is held as
/// `1000` pence. Amounts of different tokens never combine: arithmetic and ordering between them
/// fail with [`AmountError::TokenMismatch`].
///
/// Tokens match when they share both code and scale, so an amount of a code redefined at another
/// number of fraction digits never combines with amounts of the original definition.
///
/// Equality is total. Two amounts are equal when they have matching tokens and the same quantity.
#[derive(Clone)]
pub struct Amount {
    quantity: AmountRaw,
    token: SharedToken,
}

impl Amount {
    /// Creates a new [`Amount`] from a raw count of minor units.
    #[must_use]
    pub fn from_minor(quantity: AmountRaw, token: SharedToken) -> Self {
        Self { quantity, token }
    }

    /// Creates a new [`Amount`] of a whole number of major units.
    #[must_use]
    pub fn from_major(major: i64, token: SharedToken) -> Self {
        let quantity = major_to_minor(major, token.fraction_digits);
        Self::from_minor(quantity, token)
    }

    /// Creates a new zero [`Amount`] of the given `token`.
    #[must_use]
    pub fn zero(token: SharedToken) -> Self {
        Self::from_minor(0, token)
    }

    /// Returns the quantity in minor units.
    #[must_use]
    pub fn quantity(&self) -> AmountRaw {
        self.quantity
    }

    /// Returns the token.
    #[must_use]
    pub fn token(&self) -> &SharedToken {
        &self.token
    }

    /// Returns the token code.
    #[must_use]
    pub fn code(&self) -> Ustr {
        self.token.code
    }

    /// Returns true if both amounts are of the same token (code and scale).
    #[must_use]
    pub fn same_token(&self, other: &Self) -> bool {
        self.token == other.token
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.quantity == 0
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.quantity > 0
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.quantity < 0
    }

    /// Adds `other` to this amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokens differ or the result overflows.
    pub fn checked_add(&self, other: &Self) -> Result<Self, AmountError> {
        self.check_same_token(other)?;
        self.quantity
            .checked_add(other.quantity)
            .map(|quantity| self.with_quantity(quantity))
            .ok_or_else(|| self.overflow("addition"))
    }

    /// Subtracts `other` from this amount. The result may be negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokens differ or the result overflows.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, AmountError> {
        self.check_same_token(other)?;
        self.quantity
            .checked_sub(other.quantity)
            .map(|quantity| self.with_quantity(quantity))
            .ok_or_else(|| self.overflow("subtraction"))
    }

    /// Multiplies this amount by an integer `factor`.
    ///
    /// # Errors
    ///
    /// Returns an error if the result overflows.
    pub fn checked_mul(&self, factor: i64) -> Result<Self, AmountError> {
        self.quantity
            .checked_mul(AmountRaw::from(factor))
            .map(|quantity| self.with_quantity(quantity))
            .ok_or_else(|| self.overflow("multiplication"))
    }

    /// Multiplies this amount by an exact decimal `factor`.
    ///
    /// The product must be a whole number of minor units, it is never rounded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The product needs more fractional digits than the token has ([`ParseFailure::ExcessPrecision`]).
    /// - The result overflows.
    pub fn checked_mul_decimal(&self, factor: Decimal) -> Result<Self, AmountError> {
        let factor = factor.normalize();
        let scale = factor.scale();
        let product = self
            .quantity
            .checked_mul(factor.mantissa())
            .ok_or_else(|| self.overflow("multiplication"))?;

        let divisor = 10_i128.pow(scale);
        if product % divisor != 0 {
            let mut excess = scale;
            let mut remaining = product;
            while remaining % 10 == 0 {
                remaining /= 10;
                excess -= 1;
            }
            return Err(AmountError::parse(
                format!("{self} * {factor}"),
                ParseFailure::ExcessPrecision {
                    found: usize::from(self.token.fraction_digits) + excess as usize,
                    max: self.token.fraction_digits,
                },
            ));
        }

        Ok(self.with_quantity(product / divisor))
    }

    /// Returns the negated amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the quantity is the minimum representable value.
    pub fn checked_neg(&self) -> Result<Self, AmountError> {
        self.quantity
            .checked_neg()
            .map(|quantity| self.with_quantity(quantity))
            .ok_or_else(|| self.overflow("negation"))
    }

    /// Returns the absolute amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the quantity is the minimum representable value.
    pub fn abs(&self) -> Result<Self, AmountError> {
        self.quantity
            .checked_abs()
            .map(|quantity| self.with_quantity(quantity))
            .ok_or_else(|| self.overflow("absolute value"))
    }

    /// Compares two amounts of the same token.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokens differ.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, AmountError> {
        self.check_same_token(other)?;
        Ok(self.quantity.cmp(&other.quantity))
    }

    /// Sums `amounts`, all of which must be of `token`.
    ///
    /// An empty iterator yields zero of `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if any amount is of another token or the sum overflows.
    pub fn sum<'a, I>(token: SharedToken, amounts: I) -> Result<Self, AmountError>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        amounts
            .into_iter()
            .try_fold(Self::zero(token), |total, amount| total.checked_add(amount))
    }

    /// Returns the exact value in major units as a [`Decimal`].
    ///
    /// # Errors
    ///
    /// Returns an error if the quantity exceeds the 96-bit [`Decimal`] mantissa.
    pub fn as_decimal(&self) -> Result<Decimal, AmountError> {
        Decimal::try_from_i128_with_scale(self.quantity, u32::from(self.token.fraction_digits))
            .map_err(|_| self.overflow("decimal conversion"))
    }

    /// Returns the amount with thousands separators, for example `1,234.56 GBP`.
    ///
    /// The output is for display only and is not accepted by the parser.
    #[must_use]
    pub fn to_formatted_string(&self) -> String {
        format!(
            "{} {}",
            format_fixed(self.quantity, self.token.fraction_digits).separate_with_commas(),
            self.token.code,
        )
    }

    fn with_quantity(&self, quantity: AmountRaw) -> Self {
        Self::from_minor(quantity, self.token.clone())
    }

    fn check_same_token(&self, other: &Self) -> Result<(), AmountError> {
        if self.same_token(other) {
            Ok(())
        } else {
            Err(AmountError::TokenMismatch {
                left: self.token.code,
                right: other.token.code,
            })
        }
    }

    fn overflow(&self, operation: &'static str) -> AmountError {
        AmountError::Overflow {
            operation,
            token: self.token.code,
        }
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.quantity == other.quantity && self.same_token(other)
    }
}

impl Eq for Amount {}

impl Hash for Amount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.quantity.hash(state);
        self.token.hash(state);
    }
}

impl PartialOrd for Amount {
    /// Returns `None` for amounts of different tokens.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl Add for Amount {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the tokens differ or the result overflows.
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Sub for Amount {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the tokens differ or the result overflows.
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Mul<i64> for Amount {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the result overflows.
    fn mul(self, rhs: i64) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Neg for Amount {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the quantity is the minimum representable value.
    fn neg(self) -> Self::Output {
        self.checked_neg().unwrap_or_else(|e| panic!("{e}"))
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_currency(s)
    }
}

impl Debug for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}, {})",
            stringify!(Amount),
            format_fixed(self.quantity, self.token.fraction_digits),
            self.token.code,
        )
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            format_fixed(self.quantity, self.token.fraction_digits),
            self.token.code,
        )
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_display(self, serializer)
    }
}

/// Deserializes an amount from its canonical string, resolved against [`default_registry`].
///
/// Amounts of tokens registered only in another registry (or of a code redefined there) do not
/// resolve here and fail with an unknown or mismatched token. Deserialize such values as a string
/// and parse them with [`TokenRegistry::parse_currency`] instead.
///
/// [`default_registry`]: super::default_registry
/// [`TokenRegistry::parse_currency`]: super::TokenRegistry::parse_currency
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_from_str(deserializer)
    }
}

impl Serializable for Amount {}

#[cfg(test)]
mod tests {
    use std::{
        collections::{HashSet, hash_map::DefaultHasher},
        sync::Arc,
    };

    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{
        config::{RegistryConfig, TokenConfig},
        types::{
            TokenKind, TokenRegistry,
            currencies::{gbp, jpy, usd},
            dollars, pounds,
            stubs::*,
            yen,
        },
    };

    #[rstest]
    fn test_from_major(amount_ten_pounds: Amount) {
        assert_eq!(amount_ten_pounds.quantity(), 1_000);
        assert_eq!(amount_ten_pounds.code().as_str(), "GBP");
        assert!(Arc::ptr_eq(amount_ten_pounds.token(), &gbp()));
    }

    #[rstest]
    fn test_zero() {
        let zero = Amount::zero(usd());
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());
        assert_eq!(zero.to_string(), "0.00 USD");
    }

    #[rstest]
    fn test_add(amount_ten_pounds: Amount) {
        let total = amount_ten_pounds.checked_add(&pounds(5)).unwrap();
        assert_eq!(total.quantity(), 1_500);
        assert_eq!(total, pounds(15));
        assert_eq!(pounds(10) + pounds(5), pounds(15));
    }

    #[rstest]
    fn test_sub_may_go_negative() {
        let diff = pounds(5).checked_sub(&pounds(10)).unwrap();
        assert_eq!(diff.quantity(), -500);
        assert!(diff.is_negative());
        assert_eq!(diff.to_string(), "-5.00 GBP");
        assert_eq!(pounds(10) - pounds(5), pounds(5));
    }

    #[rstest]
    #[case(pounds(10), pounds(3))]
    #[case(pounds(-7), pounds(12))]
    #[case(Amount::from_minor(1, gbp()), Amount::from_minor(99, gbp()))]
    fn test_add_then_sub_is_identity(#[case] a: Amount, #[case] b: Amount) {
        assert_eq!(a.checked_add(&b).unwrap().checked_sub(&b).unwrap(), a);
    }

    #[rstest]
    fn test_token_mismatch(amount_ten_pounds: Amount, amount_five_dollars: Amount) {
        let expected = AmountError::TokenMismatch {
            left: Ustr::from("GBP"),
            right: Ustr::from("USD"),
        };
        assert_eq!(
            amount_ten_pounds.checked_add(&amount_five_dollars),
            Err(expected.clone())
        );
        assert_eq!(
            amount_ten_pounds.checked_sub(&amount_five_dollars),
            Err(expected.clone())
        );
        assert_eq!(amount_ten_pounds.try_cmp(&amount_five_dollars), Err(expected));
    }

    #[rstest]
    #[should_panic(expected = "token mismatch: cannot combine GBP with USD")]
    fn test_add_operator_panics_on_mismatch() {
        let _ = pounds(10) + dollars(5);
    }

    #[rstest]
    fn test_overflow() {
        let max = Amount::from_minor(AmountRaw::MAX, jpy());
        let one = yen(1);
        let err = max.checked_add(&one).unwrap_err();
        assert_eq!(err.to_string(), "overflow in addition of JPY amounts");
        assert!(max.checked_mul(2).unwrap_err().is_overflow());

        let min = Amount::from_minor(AmountRaw::MIN, jpy());
        assert!(min.checked_sub(&one).unwrap_err().is_overflow());
        assert!(min.checked_neg().unwrap_err().is_overflow());
        assert!(min.abs().unwrap_err().is_overflow());
    }

    #[rstest]
    #[should_panic(expected = "overflow in multiplication of JPY amounts")]
    fn test_mul_operator_panics_on_overflow() {
        let _ = Amount::from_minor(AmountRaw::MAX, jpy()) * 2;
    }

    #[rstest]
    fn test_mul_and_neg() {
        assert_eq!(pounds(3) * 4, pounds(12));
        assert_eq!(pounds(3).checked_mul(-2).unwrap(), pounds(-6));
        assert_eq!(-pounds(3), pounds(-3));
        assert_eq!(pounds(-3).abs().unwrap(), pounds(3));
    }

    #[rstest]
    #[case(dec!(0.5), 500)]
    #[case(dec!(1.5), 1_500)]
    #[case(dec!(0.125), 125)]
    #[case(dec!(-2), -2_000)]
    #[case(dec!(2.000), 2_000)]
    fn test_mul_decimal(#[case] factor: Decimal, #[case] expected: AmountRaw) {
        let result = pounds(10).checked_mul_decimal(factor).unwrap();
        assert_eq!(result.quantity(), expected);
    }

    #[rstest]
    fn test_mul_decimal_rejects_excess_precision() {
        let err = Amount::from_minor(1, gbp())
            .checked_mul_decimal(dec!(0.5))
            .unwrap_err();
        assert_eq!(
            err.parse_failure(),
            Some(&ParseFailure::ExcessPrecision { found: 3, max: 2 })
        );
        assert_eq!(
            err.to_string(),
            "invalid amount '0.01 GBP * 0.5': 3 fraction digits exceeds the 2 supported by the token"
        );
    }

    #[rstest]
    fn test_ordering_same_token() {
        assert!(pounds(5) < pounds(10));
        assert!(pounds(-1) < Amount::zero(gbp()));
        assert_eq!(pounds(5).try_cmp(&pounds(5)).unwrap(), Ordering::Equal);
        assert_eq!(pounds(5).partial_cmp(&pounds(6)), Some(Ordering::Less));
    }

    #[rstest]
    fn test_ordering_across_tokens_is_undefined(
        amount_ten_pounds: Amount,
        amount_five_dollars: Amount,
    ) {
        assert_eq!(amount_ten_pounds.partial_cmp(&amount_five_dollars), None);
        assert!(!(amount_ten_pounds < amount_five_dollars));
        assert!(!(amount_ten_pounds > amount_five_dollars));
    }

    #[rstest]
    fn test_equality_is_total(amount_ten_pounds: Amount) {
        assert_eq!(amount_ten_pounds, pounds(10));
        assert_ne!(amount_ten_pounds, pounds(11));
        assert_ne!(Amount::from_minor(1_000, gbp()), Amount::from_minor(1_000, usd()));
    }

    #[rstest]
    fn test_hash_consistent_with_eq() {
        let hash = |a: &Amount| {
            let mut hasher = DefaultHasher::new();
            a.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(&pounds(10)), hash(&"£10".parse().unwrap()));

        let set: HashSet<Amount> = [pounds(1), pounds(1), dollars(1)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[rstest]
    fn test_sum() {
        let amounts = [pounds(1), pounds(2), pounds(3)];
        assert_eq!(Amount::sum(gbp(), &amounts).unwrap(), pounds(6));
        assert_eq!(Amount::sum(gbp(), std::iter::empty()).unwrap(), Amount::zero(gbp()));

        let mixed = [pounds(1), dollars(2)];
        assert!(Amount::sum(gbp(), &mixed).unwrap_err().is_token_mismatch());
    }

    #[rstest]
    #[case(Amount::from_minor(1_050, gbp()), "10.50 GBP")]
    #[case(Amount::from_minor(-5, gbp()), "-0.05 GBP")]
    #[case(yen(1_000), "1000 JPY")]
    #[case(Amount::from_minor(1, crate::types::currencies::btc()), "0.00000001 BTC")]
    fn test_display(#[case] amount: Amount, #[case] expected: &str) {
        assert_eq!(amount.to_string(), expected);
    }

    #[rstest]
    fn test_debug(amount_ten_pounds: Amount) {
        assert_eq!(format!("{amount_ten_pounds:?}"), "Amount(10.00, GBP)");
    }

    #[rstest]
    #[case(Amount::from_minor(123_456, gbp()), "1,234.56 GBP")]
    #[case(Amount::from_minor(-123_456_789, gbp()), "-1,234,567.89 GBP")]
    #[case(yen(1_000_000), "1,000,000 JPY")]
    #[case(pounds(1), "1.00 GBP")]
    fn test_to_formatted_string(#[case] amount: Amount, #[case] expected: &str) {
        assert_eq!(amount.to_formatted_string(), expected);
    }

    #[rstest]
    #[case(pounds(10))]
    #[case(pounds(-10))]
    #[case(Amount::from_minor(-5, gbp()))]
    #[case(dollars(0))]
    #[case(yen(123_456))]
    fn test_display_parses_back(#[case] amount: Amount) {
        assert_eq!(amount.to_string().parse::<Amount>().unwrap(), amount);
    }

    #[rstest]
    fn test_as_decimal() {
        assert_eq!(Amount::from_minor(1_050, gbp()).as_decimal().unwrap(), dec!(10.50));
        assert_eq!(yen(-3).as_decimal().unwrap(), dec!(-3));
        let max = Amount::from_minor(AmountRaw::MAX, gbp());
        assert!(max.as_decimal().unwrap_err().is_overflow());
    }

    #[rstest]
    fn test_json(amount_ten_pounds: Amount) {
        let bytes = amount_ten_pounds.to_json_bytes().unwrap();
        assert_eq!(bytes.as_ref(), br#""10.00 GBP""#);
        assert_eq!(Amount::from_json_bytes(&bytes).unwrap(), amount_ten_pounds);
        assert!(Amount::from_json_bytes(br#""10 XYZ""#).is_err());
    }

    #[rstest]
    fn test_json_of_custom_token_resolves_through_its_registry(custom_registry: TokenRegistry) {
        let dinars = custom_registry.parse_currency("KD 1.234").unwrap();
        let bytes = dinars.to_json_bytes().unwrap();
        assert_eq!(bytes.as_ref(), br#""1.234 KWD""#);
        assert!(Amount::from_json_bytes(&bytes).unwrap_err().to_string().contains("KWD"));

        let text: String = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(custom_registry.parse_currency(&text).unwrap(), dinars);
    }

    #[rstest]
    fn test_code_redefined_at_other_scale_does_not_mix() {
        let config = RegistryConfig {
            include_defaults: true,
            tokens: vec![TokenConfig {
                code: "GBP".to_string(),
                name: "British pound (mils)".to_string(),
                symbols: vec!["£".to_string()],
                fraction_digits: 3,
                kind: TokenKind::Fiat,
            }],
        };
        let registry = TokenRegistry::from_config(&config).unwrap();

        let rescaled = registry.parse_currency("1 GBP").unwrap();
        assert_eq!(rescaled.quantity(), 1_000);
        assert_eq!(rescaled.to_string(), "1.000 GBP");

        // Same code and same raw quantity, but a different scale
        let ten_pounds = pounds(10);
        assert_eq!(ten_pounds.quantity(), 1_000);
        assert_ne!(rescaled, ten_pounds);
        assert!(!rescaled.same_token(&ten_pounds));
        assert!(rescaled.checked_add(&ten_pounds).unwrap_err().is_token_mismatch());
        assert!(rescaled.try_cmp(&ten_pounds).unwrap_err().is_token_mismatch());
        assert_eq!(rescaled.partial_cmp(&ten_pounds), None);

        assert_eq!(registry.parse_currency("1 GBP").unwrap(), rescaled);
        assert_eq!(parse_currency("1 GBP").unwrap(), pounds(1));
    }

    #[rstest]
    fn test_amount_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Amount>();
    }
}
