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

//! A registry resolving currency codes and symbols to [`Token`]s.
//!
//! The registry is an explicit value: build one, populate it, then share `&TokenRegistry` with
//! any number of readers. Registration needs `&mut self`, so the borrow checker rules out
//! registration racing with lookups. [`default_registry`] provides a process-wide instance holding
//! the default token set, initialized on first use and read-only afterwards.

use std::sync::OnceLock;

use ahash::AHashMap;
use ledgerkit_core::correctness::{FAILED, check_unique};
use ustr::Ustr;

use super::{
    Amount,
    currencies::default_tokens,
    parse::parse_currency_with,
    token::{SharedToken, Token},
};
use crate::{config::RegistryConfig, error::AmountError};

static DEFAULT_REGISTRY: OnceLock<TokenRegistry> = OnceLock::new();

/// Returns the process-wide registry holding the default token set.
#[must_use]
pub fn default_registry() -> &'static TokenRegistry {
    DEFAULT_REGISTRY.get_or_init(TokenRegistry::with_defaults)
}

/// Maps token codes and symbols to shared [`Token`] definitions.
#[derive(Clone, Debug, Default)]
pub struct TokenRegistry {
    by_code: AHashMap<Ustr, SharedToken>,
    by_symbol: AHashMap<Ustr, SharedToken>,
    // Longest first, so "US$" is tried before "$"
    symbols_by_len: Vec<Ustr>,
}

impl TokenRegistry {
    /// Creates a new empty [`TokenRegistry`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`TokenRegistry`] populated with the default token set.
    ///
    /// # Panics
    ///
    /// Panics if the default token set contains conflicting designators.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for token in default_tokens() {
            registry.register_token(token).expect(FAILED);
        }
        log::debug!("Built default token registry with {} tokens", registry.len());
        registry
    }

    /// Creates a new [`TokenRegistry`] from the given `config`.
    ///
    /// Configured tokens replace default tokens of the same code.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured token is invalid, a code is configured twice, or a
    /// designator conflicts with another token.
    pub fn from_config(config: &RegistryConfig) -> anyhow::Result<Self> {
        let mut registry = if config.include_defaults {
            Self::with_defaults()
        } else {
            Self::new()
        };

        let mut configured: Vec<Ustr> = Vec::with_capacity(config.tokens.len());
        for token_config in &config.tokens {
            let token = Token::try_from(token_config.clone())?;
            check_unique(&token.code, &configured, "code")?;
            configured.push(token.code);

            if registry.contains(token.code.as_str()) {
                registry.register_token_overwrite(token)?;
            } else {
                registry.register_token(token)?;
            }
        }

        log::debug!(
            "Built token registry from config with {} tokens ({} configured)",
            registry.len(),
            configured.len(),
        );
        Ok(registry)
    }

    /// Registers the given `token`, returning the shared instance now held by the registry.
    ///
    /// Registering a token whose definition is identical to the one already registered under its
    /// code is a no-op returning the existing instance.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::DuplicateDesignator`] if the code is registered with a different
    /// definition, or if the code or one of the symbols is already claimed by another token.
    pub fn register_token(
        &mut self,
        token: impl Into<SharedToken>,
    ) -> Result<SharedToken, AmountError> {
        let token = token.into();

        if let Some(existing) = self.by_code.get(&token.code) {
            if existing.same_definition(&token) {
                return Ok(existing.clone());
            }
            return Err(AmountError::DuplicateDesignator {
                designator: token.code.to_string(),
                existing: existing.code,
            });
        }

        self.check_designators_free(&token)?;
        self.insert(token.clone());
        log::debug!("Registered token {token:?}");
        Ok(token)
    }

    /// Registers the given `token`, replacing any definition with the same code.
    ///
    /// The symbols of the replaced definition are released.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::DuplicateDesignator`] if one of the designators is claimed by a
    /// token with a different code. The registry is left unchanged in that case.
    pub fn register_token_overwrite(
        &mut self,
        token: impl Into<SharedToken>,
    ) -> Result<SharedToken, AmountError> {
        let token = token.into();
        self.check_designators_free(&token)?;

        if let Some(previous) = self.by_code.remove(&token.code) {
            for symbol in &previous.symbols {
                self.by_symbol.remove(symbol);
            }
            log::warn!("Overwriting token {previous:?} with {token:?}");
        }

        self.insert(token.clone());
        Ok(token)
    }

    /// Resolves a designator: a code (ASCII case-insensitive) or a symbol (exact match).
    ///
    /// Surrounding whitespace is ignored. Codes are tried before symbols.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::UnknownToken`] if no registered token matches.
    pub fn lookup(&self, designator: &str) -> Result<SharedToken, AmountError> {
        let designator = designator.trim();
        self.lookup_code(designator)
            .or_else(|| self.lookup_symbol(designator))
            .ok_or_else(|| AmountError::UnknownToken(designator.to_string()))
    }

    /// Resolves a code, ignoring ASCII case.
    #[must_use]
    pub fn lookup_code(&self, code: &str) -> Option<SharedToken> {
        // Only already interned strings can be registered codes, so unknown input is never interned
        let code = Ustr::from_existing(&code.to_ascii_uppercase())?;
        self.by_code.get(&code).cloned()
    }

    /// Resolves a symbol (exact match).
    #[must_use]
    pub fn lookup_symbol(&self, symbol: &str) -> Option<SharedToken> {
        let symbol = Ustr::from_existing(symbol)?;
        self.by_symbol.get(&symbol).cloned()
    }

    /// Returns the longest registered symbol prefixing `input`, with its token.
    #[must_use]
    pub fn match_symbol_prefix(&self, input: &str) -> Option<(Ustr, SharedToken)> {
        self.symbols_by_len
            .iter()
            .find(|symbol| input.starts_with(symbol.as_str()))
            .and_then(|symbol| {
                self.by_symbol
                    .get(symbol)
                    .map(|token| (*symbol, token.clone()))
            })
    }

    /// Parses `input` into an [`Amount`] using this registry.
    ///
    /// # Errors
    ///
    /// See [`parse_currency`](crate::types::parse_currency).
    pub fn parse_currency(&self, input: &str) -> Result<Amount, AmountError> {
        parse_currency_with(self, input)
    }

    /// Returns true if `designator` resolves to a registered token.
    #[must_use]
    pub fn contains(&self, designator: &str) -> bool {
        self.lookup(designator).is_ok()
    }

    /// Returns the number of registered tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// Returns true if no token is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// Returns all registered tokens ordered by code.
    #[must_use]
    pub fn tokens(&self) -> Vec<SharedToken> {
        let mut tokens: Vec<SharedToken> = self.by_code.values().cloned().collect();
        tokens.sort_by(|a, b| a.code.as_str().cmp(b.code.as_str()));
        tokens
    }

    /// Returns all registered symbols, longest first.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols_by_len.iter().map(|symbol| symbol.as_str())
    }

    fn check_designators_free(&self, token: &Token) -> Result<(), AmountError> {
        // A code must not shadow another token's symbol, and vice versa
        if let Some(owner) = self.lookup_symbol(token.code.as_str())
            && owner.code != token.code
        {
            return Err(AmountError::DuplicateDesignator {
                designator: token.code.to_string(),
                existing: owner.code,
            });
        }

        for symbol in &token.symbols {
            let owner = self
                .lookup_symbol(symbol.as_str())
                .or_else(|| self.lookup_code(symbol.as_str()));
            if let Some(owner) = owner
                && owner.code != token.code
            {
                return Err(AmountError::DuplicateDesignator {
                    designator: symbol.to_string(),
                    existing: owner.code,
                });
            }
        }

        Ok(())
    }

    fn insert(&mut self, token: SharedToken) {
        for symbol in &token.symbols {
            self.by_symbol.insert(*symbol, token.clone());
        }
        self.by_code.insert(token.code, token);

        self.symbols_by_len = self.by_symbol.keys().copied().collect();
        self.symbols_by_len.sort_by(|a, b| {
            b.len()
                .cmp(&a.len())
                .then_with(|| a.as_str().cmp(b.as_str()))
        });
    }
}
