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

//! Token registry configuration types and loading.
//!
//! A registry can be described in JSON:
//!
//! ```json
//! {
//!   "include_defaults": true,
//!   "tokens": [
//!     { "code": "KWD", "name": "Kuwaiti dinar", "symbols": ["KD"], "fraction_digits": 3 },
//!     { "code": "PTS", "name": "Loyalty points", "fraction_digits": 0, "kind": "COMMODITY" }
//!   ]
//! }
//! ```
//!
//! | Key                | Type        | Description                                          |
//! |--------------------|-------------|------------------------------------------------------|
//! | `include_defaults` | Boolean     | Start from the default token set (default: true).    |
//! | `tokens`           | Array       | Additional tokens, overriding defaults by code.      |
//!
//! The path of such a file may be supplied through the `LEDGERKIT_TOKENS` environment variable,
//! see [`RegistryConfig::from_env`].

use std::{env, fs, path::Path};

use anyhow::Context;
use ledgerkit_core::Serializable;
use serde::{Deserialize, Serialize};

use crate::types::token::TokenKind;

/// The environment variable holding the path of a JSON registry configuration file.
pub const TOKENS_ENV_VAR: &str = "LEDGERKIT_TOKENS";

/// Configuration for a single token definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenConfig {
    /// The unique token code.
    pub code: String,
    /// The human readable name.
    pub name: String,
    /// The symbols which may prefix a literal.
    #[serde(default)]
    pub symbols: Vec<String>,
    /// The number of decimal digits of the minor unit.
    pub fraction_digits: u8,
    /// The class of value.
    #[serde(default)]
    pub kind: TokenKind,
}

/// Configuration for a [`TokenRegistry`](crate::types::TokenRegistry).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// If the default token set is registered before the configured tokens.
    #[serde(default = "default_true")]
    pub include_defaults: bool,
    /// The configured tokens.
    #[serde(default)]
    pub tokens: Vec<TokenConfig>,
}

fn default_true() -> bool {
    true
}

impl Default for RegistryConfig {
    /// Creates a new default [`RegistryConfig`] instance: the default token set only.
    fn default() -> Self {
        Self {
            include_defaults: true,
            tokens: Vec::new(),
        }
    }
}

impl RegistryConfig {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or contains unknown fields.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid token registry configuration")
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read token registry config {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in file {}", path.display()))
    }

    /// Loads the configuration named by [`TOKENS_ENV_VAR`], or the default when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is set and the file cannot be read or parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        match env::var_os(TOKENS_ENV_VAR) {
            Some(path) => {
                log::debug!("Loading token registry config from {TOKENS_ENV_VAR}={path:?}");
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}

impl Serializable for RegistryConfig {}
