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

use crate::{
    PhoneNumber,
    memo_cache::{LocalizedProperty, memoized},
};

impl PhoneNumber {
    /// The national significant number: the digits after the country calling
    /// code, including any leading zeros, without extension or formatting.
    pub fn national_significant_number(&self) -> &str {
        memoized(&self.cache.national_significant_number, || {
            self.engine().national_significant_number_raw(self.raw())
        })
        .as_str()
    }

    /// Length of the national destination code, never longer than the
    /// national significant number.
    pub fn national_destination_code_length(&self) -> usize {
        let length = *memoized(&self.cache.ndc_length, || {
            self.engine().ndc_length_raw(self.raw())
        });
        length.min(self.national_significant_number().len())
    }

    fn split_national_significant_number(&self) -> (&str, &str) {
        let national_significant_number = self.national_significant_number();
        national_significant_number
            .split_at_checked(self.national_destination_code_length())
            .unwrap_or((national_significant_number, ""))
    }

    /// The leading part of the national significant number that selects an
    /// area or network, e.g. `201` for `+1 201-555-0123`. Empty when the
    /// numbering plan has none.
    pub fn national_destination_code(&self) -> &str {
        self.split_national_significant_number().0
    }

    /// The rest of the national significant number after the destination
    /// code.
    pub fn subscriber_number(&self) -> &str {
        self.split_national_significant_number().1
    }

    /// CLDR region of the number, `None` for non-geographical entities and
    /// unknown country codes.
    pub fn region_code(&self) -> Option<&str> {
        memoized(&self.cache.region_code, || self.engine().region_for_raw(self.raw())).as_deref()
    }

    /// IANA time zones the number may be in.
    pub fn timezones(&self) -> &[String] {
        memoized(&self.cache.timezones, || {
            self.engine().timezones_for_raw(self.raw())
        })
        .as_slice()
    }

    pub fn is_geographical(&self) -> bool {
        *memoized(&self.cache.geographical, || {
            self.engine().is_geographical_raw(self.raw())
        })
    }

    /// Name of the carrier that originally held the number's range, in the
    /// given language. Empty when unknown or when the number is not mobile.
    pub fn carrier_name(&self, lang: &str) -> Arc<str> {
        self.cache.localized.get_or_compute(LocalizedProperty::CarrierName, lang, || {
            self.engine().carrier_name_for_raw(self.raw(), lang)
        })
    }

    pub fn country_name(&self, lang: &str) -> Arc<str> {
        self.cache.localized.get_or_compute(LocalizedProperty::CountryName, lang, || {
            self.engine().country_name_for_raw(self.raw(), lang)
        })
    }

    /// A text describing the geographic area of the number, falling back to
    /// the country name.
    pub fn description(&self, lang: &str) -> Arc<str> {
        self.cache.localized.get_or_compute(LocalizedProperty::Description, lang, || {
            self.engine().description_for_raw(self.raw(), lang)
        })
    }
}
