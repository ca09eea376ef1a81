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

use log::trace;

use crate::{MatchType, NumberInput, ParseError, PhoneNumber};

impl PhoneNumber {
    /// Compares this number with another number or with text that still has
    /// to be parsed.
    ///
    /// Text is parsed without a region first. If that fails on the country
    /// code, it is parsed again as if dialled from this number's region, in
    /// which case the best possible outcome is [`MatchType::NsnMatch`]. Text
    /// that cannot be parsed yields [`MatchType::NotANumber`].
    ///
    /// # Panics
    /// Panics if the engine reports an unclassified failure while parsing
    /// the text, as that indicates a library bug.
    pub fn match_with<'a>(&self, other: impl Into<NumberInput<'a>>) -> MatchType {
        match other.into() {
            NumberInput::Number(number) => self.engine().match_raw(self.raw(), number.raw()),
            NumberInput::Text(text) => self.match_text(text),
        }
    }

    fn match_text(&self, text: &str) -> MatchType {
        let err = match self.util().parse(text, None) {
            Ok(other) => return self.engine().match_raw(self.raw(), other.raw()),
            Err(err) => err.into_user_error(),
        };
        if !matches!(err, ParseError::InvalidCountryCode(_)) {
            trace!("'{text}' is not a number: {err}");
            return MatchType::NotANumber;
        }
        // The second number has no country calling code. Parse it as if it
        // were dialled from the region of the first one.
        let Some(region) = self.engine().region_for_country_code(self.country_code()) else {
            trace!("No region for country code {}, cannot interpret '{text}'", self.country_code());
            return MatchType::NotANumber;
        };
        match self.util().parse(text, Some(&region)) {
            Ok(other) => match self.engine().match_raw(self.raw(), other.raw()) {
                MatchType::ExactMatch => MatchType::NsnMatch,
                match_type => match_type,
            },
            Err(err) => {
                let err = err.into_user_error();
                trace!("'{text}' is not a number in {region}: {err}");
                MatchType::NotANumber
            }
        }
    }

    pub fn is_exact_match<'a>(&self, other: impl Into<NumberInput<'a>>) -> bool {
        self.match_with(other) == MatchType::ExactMatch
    }

    pub fn is_nsn_match<'a>(&self, other: impl Into<NumberInput<'a>>) -> bool {
        self.match_with(other) == MatchType::NsnMatch
    }

    pub fn is_short_nsn_match<'a>(&self, other: impl Into<NumberInput<'a>>) -> bool {
        self.match_with(other) == MatchType::ShortNsnMatch
    }

    /// Either an NSN match or a short NSN match.
    pub fn is_any_nsn_match<'a>(&self, other: impl Into<NumberInput<'a>>) -> bool {
        matches!(
            self.match_with(other),
            MatchType::NsnMatch | MatchType::ShortNsnMatch
        )
    }

    /// Any positive outcome, from a short NSN match up to an exact match.
    pub fn is_any_match<'a>(&self, other: impl Into<NumberInput<'a>>) -> bool {
        self.match_with(other) >= MatchType::ShortNsnMatch
    }

    /// Whether the numbers do not match. When `strict` is false, text that is
    /// not a number counts as no match as well.
    pub fn is_no_match<'a>(&self, other: impl Into<NumberInput<'a>>, strict: bool) -> bool {
        match self.match_with(other) {
            MatchType::NoMatch => true,
            MatchType::NotANumber => !strict,
            _ => false,
        }
    }
}
