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

use crate::{generated::PrefixData, i18n};

impl PrefixData {
    /// Finds the description of the longest prefix of `digits` present in
    /// the table.
    pub fn lookup(&self, digits: &str) -> Option<&'static str> {
        let max_len = self.longest_prefix.min(digits.len());
        (1..=max_len).rev().find_map(|len| {
            let prefix: u64 = digits.get(..len)?.parse().ok()?;
            self.entries
                .binary_search_by_key(&prefix, |(entry_prefix, _)| *entry_prefix)
                .ok()
                .map(|index| self.entries[index].1)
        })
    }
}

/// Looks `digits` up in the table of the requested language, falling back
/// to english where that makes sense.
pub(crate) fn localized_prefix_lookup(
    tables: &'static [(&'static str, PrefixData)],
    lang: &str,
    digits: &str,
) -> Option<&'static str> {
    i18n::lookup_languages(lang).iter().find_map(|language| {
        tables
            .iter()
            .find(|(table_lang, _)| *table_lang == language.as_str())
            .and_then(|(_, data)| data.lookup(digits))
            .filter(|description| !description.is_empty())
    })
}

/// Display name of a region in the requested language.
pub(crate) fn localized_region_name(
    tables: &'static [(&'static str, &'static [(&'static str, &'static str)])],
    lang: &str,
    region_code: &str,
) -> Option<&'static str> {
    if !i18n::RegionCode::is_displayable(region_code) {
        return None;
    }
    i18n::lookup_languages(lang).iter().find_map(|language| {
        tables
            .iter()
            .find(|(table_lang, _)| *table_lang == language.as_str())
            .and_then(|(_, names)| {
                names
                    .binary_search_by_key(&region_code, |(region, _)| *region)
                    .ok()
                    .map(|index| names[index].1)
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    static DATA: PrefixData = PrefixData {
        longest_prefix: 4,
        entries: &[(1, "one"), (39, "Italy"), (1201, "New Jersey"), (3902, "Milan")],
    };

    static TABLES: &[(&str, PrefixData)] = &[
        ("de", PrefixData { longest_prefix: 4, entries: &[(3902, "Mailand")] }),
        ("en", PrefixData { longest_prefix: 4, entries: &[(39, "Italy"), (3902, "Milan")] }),
    ];

    static NAMES: &[(&str, &[(&str, &str)])] = &[
        ("de", &[("IT", "Italien")]),
        ("en", &[("IT", "Italy"), ("US", "United States")]),
    ];

    #[test]
    fn longest_prefix_wins() {
        assert_eq!(DATA.lookup("12015550123"), Some("New Jersey"));
        assert_eq!(DATA.lookup("12125550123"), Some("one"));
        assert_eq!(DATA.lookup("390212345678"), Some("Milan"));
        assert_eq!(DATA.lookup("39061234"), Some("Italy"));
        assert_eq!(DATA.lookup("44207"), None);
        assert_eq!(DATA.lookup(""), None);
    }

    #[test]
    fn localized_lookup_falls_back_to_english() {
        assert_eq!(localized_prefix_lookup(TABLES, "de-DE", "390212345678"), Some("Mailand"));
        assert_eq!(localized_prefix_lookup(TABLES, "de", "39061234"), Some("Italy"));
        assert_eq!(localized_prefix_lookup(TABLES, "fr", "390212345678"), Some("Milan"));
        assert_eq!(localized_prefix_lookup(TABLES, "ja", "390212345678"), None);
    }

    #[test]
    fn region_names() {
        assert_eq!(localized_region_name(NAMES, "de", "IT"), Some("Italien"));
        assert_eq!(localized_region_name(NAMES, "de", "US"), Some("United States"));
        assert_eq!(localized_region_name(NAMES, "en", "ZZ"), None);
        assert_eq!(localized_region_name(NAMES, "en", "001"), None);
    }
}
