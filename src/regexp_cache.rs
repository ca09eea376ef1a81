// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use dashmap::DashMap;
use regex::{Regex, RegexBuilder};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct ErrorInvalidRegex(#[from] regex::Error);

/// Regexes that must match a whole national number, compiled from the
/// numbering-plan patterns they are keyed by.
#[derive(Debug, Default)]
pub struct RegexCache {
    cache: DashMap<String, Arc<Regex>>,
}

impl RegexCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    /// Metadata patterns are written in free-spacing mode and only describe
    /// the digits, so the compiled regex is anchored at both ends.
    pub fn get_full_match_regex(&self, pattern: &str) -> Result<Arc<Regex>, ErrorInvalidRegex> {
        if let Some(regex) = self.cache.get(pattern) {
            Ok(regex.value().clone())
        } else {
            let entry = self.cache.entry(pattern.to_string()).or_try_insert_with(|| {
                RegexBuilder::new(&fast_cat::concat_str!("^(?:", pattern, ")$"))
                    .ignore_whitespace(true)
                    .build()
                    .map(Arc::new)
            })?;
            Ok(entry.value().clone())
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::RegexCache;

    #[test]
    fn patterns_match_whole_numbers_only() {
        let cache = RegexCache::new();
        let regex = cache.get_full_match_regex(r"0\d{5,10}|3\d{8}").unwrap();
        assert!(regex.is_match("0212345678"));
        assert!(regex.is_match("347123456"));
        assert!(!regex.is_match("3471234567"));
        assert!(!regex.is_match("10212345678"));
    }

    #[test]
    fn whitespace_in_patterns_is_ignored() {
        let cache = RegexCache::new();
        let regex = cache
            .get_full_match_regex("
                [2-9]\\d{2}
                [2-9]\\d{6}
            ")
            .unwrap();
        assert!(regex.is_match("2015550123"));
    }

    #[test]
    fn compiled_regexes_are_reused() {
        let cache = RegexCache::new();
        let first = cache.get_full_match_regex(r"\d{4}").unwrap();
        let second = cache.get_full_match_regex(r"\d{4}").unwrap();
        assert!(std::sync::Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert!(cache.get_full_match_regex("(").is_err());
    }
}
