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

//! Common serialization traits and functions.
//!
//! Value types with a canonical string form (such as amounts rendered as `"10.00 GBP"`) are
//! serialized through their `Display` implementation and parsed back through `FromStr`, so the
//! JSON representation is the same text a person would type.

use std::{fmt::Display, str::FromStr};

use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

/// Represents types which are serializable to and from JSON.
pub trait Serializable: Serialize + for<'de> Deserialize<'de> {
    /// Deserialize an object from JSON encoded bytes.
    ///
    /// # Errors
    ///
    /// Returns serialization errors.
    fn from_json_bytes(data: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(data)
    }

    /// Serialize an object to JSON encoded bytes.
    ///
    /// # Errors
    ///
    /// Returns serialization errors.
    fn to_json_bytes(&self) -> Result<Bytes, serde_json::Error> {
        serde_json::to_vec(self).map(Bytes::from)
    }
}

/// Serializes `value` as the string produced by its `Display` implementation.
///
/// # Errors
///
/// Returns an error if the underlying serializer fails.
pub fn serialize_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

/// Deserializes a value from a string using its `FromStr` implementation.
///
/// # Errors
///
/// Returns an error if the input is not a string or `FromStr` rejects it.
pub fn deserialize_from_str<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromStr,
    T::Err: Display,
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse::<T>().map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use rstest::rstest;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Percent(u8);

    impl Display for Percent {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}%", self.0)
        }
    }

    impl FromStr for Percent {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            s.strip_suffix('%')
                .and_then(|digits| digits.parse().ok())
                .map(Self)
                .ok_or_else(|| format!("invalid percent '{s}'"))
        }
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Fee {
        name: String,
        #[serde(
            serialize_with = "serialize_display",
            deserialize_with = "deserialize_from_str"
        )]
        rate: Percent,
    }

    impl Serializable for Fee {}

    #[rstest]
    fn test_json_bytes_roundtrip() {
        let fee = Fee {
            name: "stamp".to_string(),
            rate: Percent(5),
        };

        let bytes = fee.to_json_bytes().unwrap();
        assert_eq!(bytes.as_ref(), br#"{"name":"stamp","rate":"5%"}"#);
        assert_eq!(Fee::from_json_bytes(&bytes).unwrap(), fee);
    }

    #[rstest]
    fn test_deserialize_from_str_reports_parse_error() {
        let err = Fee::from_json_bytes(br#"{"name":"stamp","rate":"five"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid percent 'five'"));
    }
}
