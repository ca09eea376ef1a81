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

use std::sync::{Arc, OnceLock};

use dashmap::DashMap;

use crate::PhoneNumberType;

/// Returns the value of `cell`, computing it first if nobody has yet.
///
/// The computation runs outside of the cell's lock; when two threads race,
/// the first published value wins and the other one is dropped.
pub(crate) fn memoized<T>(cell: &OnceLock<T>, compute: impl FnOnce() -> T) -> &T {
    if let Some(value) = cell.get() {
        return value;
    }
    let value = compute();
    cell.get_or_init(|| value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum LocalizedProperty {
    CarrierName,
    CountryName,
    Description,
}

/// Per-language results of the name lookups.
#[derive(Debug, Clone, Default)]
pub(crate) struct LocalizedCache {
    cache: DashMap<(LocalizedProperty, String), Arc<str>>,
}

impl LocalizedCache {
    pub fn get_or_compute(
        &self,
        property: LocalizedProperty,
        lang: &str,
        compute: impl FnOnce() -> String,
    ) -> Arc<str> {
        let key = (property, lang.to_owned());
        if let Some(value) = self.cache.get(&key) {
            return value.value().clone();
        }
        let computed: Arc<str> = Arc::from(compute());
        self.cache.entry(key).or_insert(computed).value().clone()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cache.len()
    }
}

/// Everything a [`PhoneNumber`](crate::PhoneNumber) learns from its engine.
/// Each cell is filled at most once.
#[derive(Debug, Clone, Default)]
pub(crate) struct DerivedCache {
    pub number_type: OnceLock<PhoneNumberType>,
    pub possible: OnceLock<bool>,
    pub valid: OnceLock<bool>,
    pub formats: [OnceLock<String>; 4],
    pub national_significant_number: OnceLock<String>,
    pub ndc_length: OnceLock<usize>,
    pub region_code: OnceLock<Option<String>>,
    pub timezones: OnceLock<Vec<String>>,
    pub geographical: OnceLock<bool>,
    pub localized: LocalizedCache,
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn memoized_computes_once() {
        let cell = OnceLock::new();
        let calls = Cell::new(0);
        for _ in 0..3 {
            let value = memoized(&cell, || {
                calls.set(calls.get() + 1);
                42
            });
            assert_eq!(*value, 42);
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn localized_values_are_keyed_by_property_and_language() {
        let cache = LocalizedCache::default();
        let calls = Cell::new(0);
        let lookup = |property, lang: &str, value: &str| {
            cache.get_or_compute(property, lang, || {
                calls.set(calls.get() + 1);
                value.to_owned()
            })
        };

        assert_eq!(&*lookup(LocalizedProperty::CountryName, "en", "Italy"), "Italy");
        assert_eq!(&*lookup(LocalizedProperty::CountryName, "en", "ignored"), "Italy");
        assert_eq!(&*lookup(LocalizedProperty::CountryName, "de", "Italien"), "Italien");
        assert_eq!(&*lookup(LocalizedProperty::Description, "en", "Milan"), "Milan");
        assert_eq!(calls.get(), 3);
        assert_eq!(cache.len(), 3);
    }
}
