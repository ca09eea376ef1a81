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

use crate::phonenumberutil::helper_constants::{DEFAULT_LANGUAGE, NO_ENGLISH_FALLBACK_LANGUAGES};

/// Reduces a language tag such as `de-CH` or `pt_BR` to its lowercased
/// primary subtag.
pub fn primary_language(tag: &str) -> String {
    tag.split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Languages to try, in order, when looking up localized data.
pub fn lookup_languages(tag: &str) -> Vec<String> {
    let language = primary_language(tag);
    let may_fall_back_to_english = language != DEFAULT_LANGUAGE
        && !NO_ENGLISH_FALLBACK_LANGUAGES.contains(&language.as_str());
    let mut languages = vec![language];
    if may_fall_back_to_english {
        languages.push(DEFAULT_LANGUAGE.to_owned());
    }
    languages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_subtag_is_lowercased() {
        assert_eq!(primary_language("de-CH"), "de");
        assert_eq!(primary_language("pt_BR"), "pt");
        assert_eq!(primary_language("EN"), "en");
        assert_eq!(primary_language(""), "");
    }

    #[test]
    fn english_fallback_except_for_cjk() {
        assert_eq!(lookup_languages("de"), ["de", "en"]);
        assert_eq!(lookup_languages("en-GB"), ["en"]);
        assert_eq!(lookup_languages("zh-Hant"), ["zh"]);
        assert_eq!(lookup_languages("ja"), ["ja"]);
        assert_eq!(lookup_languages("ko"), ["ko"]);
    }
}
