// Copyright (C) 2009 The Libphonenumber Authors
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

use std::{
    borrow::Cow,
    fmt,
    sync::{Arc, LazyLock},
};

use log::{error, trace};

use crate::{
    PhoneNumber, PhoneNumberFields, PhoneNumberTuple,
    engine::BundledEngine,
    interfaces::MetadataEngine,
    phonenumberutil::{
        MatchType, NumberInput, PhoneNumberFormat, PhoneNumberType, errors::ParseError,
    },
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, ParseError>;

static BUNDLED_ENGINE: LazyLock<Arc<dyn MetadataEngine>> =
    LazyLock::new(|| Arc::new(BundledEngine::new()));

/// The metadata context numbers are parsed with.
///
/// Holds the [`MetadataEngine`] that owns the numbering-plan data. Cloning is
/// cheap and every [`PhoneNumber`] keeps a clone of the context it came from.
#[derive(Clone)]
pub struct PhoneNumberUtil {
    engine: Arc<dyn MetadataEngine>,
}

impl fmt::Debug for PhoneNumberUtil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneNumberUtil").finish_non_exhaustive()
    }
}

impl PhoneNumberUtil {
    pub fn new(engine: Arc<dyn MetadataEngine>) -> Self {
        Self { engine }
    }

    /// A context over the metadata compiled into this crate. All bundled
    /// contexts share one engine.
    pub fn bundled() -> Self {
        Self::new(Arc::clone(&BUNDLED_ENGINE))
    }

    pub fn engine(&self) -> &dyn MetadataEngine {
        self.engine.as_ref()
    }

    /// Parses a string and returns it as a phone number.
    ///
    /// `region` is the CLDR region the number is expected to be dialled
    /// from. It only matters for numbers not written in international form,
    /// i.e. not starting with `+`.
    ///
    /// ```
    /// use phonevalue::{ParseError, PhoneNumberUtil};
    ///
    /// let util = PhoneNumberUtil::bundled();
    /// let number = util.parse("+1 (201) 555-0123", None).unwrap();
    /// assert_eq!(number.country_code(), 1);
    /// assert_eq!(number.national_number(), 2015550123);
    /// assert_eq!(number.to_e164(), "+12015550123");
    ///
    /// assert!(matches!(util.parse("foo", None), Err(ParseError::NotANumber(_))));
    /// ```
    pub fn parse(&self, text: &str, region: Option<&str>) -> Result<PhoneNumber> {
        self.parse_helper(text, region, false)
    }

    /// Like [`Self::parse`], but also records the raw input, how the country
    /// calling code was found and the preferred domestic carrier code.
    pub fn parse_and_keep_raw_input(&self, text: &str, region: Option<&str>) -> Result<PhoneNumber> {
        self.parse_helper(text, region, true)
    }

    fn parse_helper(
        &self,
        text: &str,
        region: Option<&str>,
        keep_raw_input: bool,
    ) -> Result<PhoneNumber> {
        match self.engine.parse_raw(text, region, keep_raw_input) {
            Ok(fields) => Ok(PhoneNumber::from_raw_fields(self.clone(), fields)),
            Err(failure) => {
                let err = ParseError::from_failure(failure);
                if err.is_user_error() {
                    trace!("Could not parse '{text}': {err}");
                } else {
                    error!("Unclassified failure while parsing '{text}': {err}");
                }
                Err(err)
            }
        }
    }

    /// Gets a valid number of the given type for the region, if the metadata
    /// has an example for it.
    pub fn example_number(&self, region: &str, number_type: PhoneNumberType) -> Option<PhoneNumber> {
        if number_type == PhoneNumberType::Unknown {
            return None;
        }
        self.engine
            .example_raw(region, number_type)
            .map(|fields| PhoneNumber::from_raw_fields(self.clone(), fields))
    }

    /// Checks if this is a region under the North American Numbering Plan
    /// Administration (NANPA).
    pub fn is_nanpa_region(&self, region: &str) -> bool {
        self.engine.is_nanpa_region(region)
    }

    /// Returns the main region for the country calling code, if any.
    pub fn region_for_country_code(&self, country_code: u32) -> Option<String> {
        self.engine.region_for_country_code(country_code)
    }

    /// Borrows a number or parses text without a region.
    fn resolve<'a>(&self, input: NumberInput<'a>) -> Result<Cow<'a, PhoneNumber>> {
        match input {
            NumberInput::Number(number) => Ok(Cow::Borrowed(number)),
            NumberInput::Text(text) => self.parse(text, None).map(Cow::Owned),
        }
    }

    pub fn format<'a>(
        &self,
        number: impl Into<NumberInput<'a>>,
        format: PhoneNumberFormat,
    ) -> Result<String> {
        Ok(self.resolve(number.into())?.format(format).to_owned())
    }

    pub fn to_e164<'a>(&self, number: impl Into<NumberInput<'a>>) -> Result<String> {
        self.format(number, PhoneNumberFormat::E164)
    }

    pub fn to_international<'a>(&self, number: impl Into<NumberInput<'a>>) -> Result<String> {
        self.format(number, PhoneNumberFormat::International)
    }

    pub fn to_national<'a>(&self, number: impl Into<NumberInput<'a>>) -> Result<String> {
        self.format(number, PhoneNumberFormat::National)
    }

    pub fn to_rfc3966<'a>(&self, number: impl Into<NumberInput<'a>>) -> Result<String> {
        self.format(number, PhoneNumberFormat::RFC3966)
    }

    pub fn number_type<'a>(&self, number: impl Into<NumberInput<'a>>) -> Result<PhoneNumberType> {
        Ok(self.resolve(number.into())?.number_type())
    }

    pub fn region_code<'a>(&self, number: impl Into<NumberInput<'a>>) -> Result<Option<String>> {
        Ok(self.resolve(number.into())?.region_code().map(str::to_owned))
    }

    pub fn timezones<'a>(&self, number: impl Into<NumberInput<'a>>) -> Result<Vec<String>> {
        Ok(self.resolve(number.into())?.timezones().to_vec())
    }

    pub fn is_toll_free<'a>(&self, number: impl Into<NumberInput<'a>>) -> Result<bool> {
        Ok(self.resolve(number.into())?.is_toll_free())
    }

    pub fn is_possible<'a>(&self, number: impl Into<NumberInput<'a>>) -> Result<bool> {
        Ok(self.resolve(number.into())?.is_possible())
    }

    pub fn is_valid<'a>(&self, number: impl Into<NumberInput<'a>>) -> Result<bool> {
        Ok(self.resolve(number.into())?.is_valid())
    }

    pub fn country_name<'a>(&self, number: impl Into<NumberInput<'a>>, lang: &str) -> Result<String> {
        Ok(self.resolve(number.into())?.country_name(lang).to_string())
    }

    pub fn description<'a>(&self, number: impl Into<NumberInput<'a>>, lang: &str) -> Result<String> {
        Ok(self.resolve(number.into())?.description(lang).to_string())
    }

    pub fn to_tuple<'a>(&self, number: impl Into<NumberInput<'a>>) -> Result<PhoneNumberTuple> {
        Ok(self.resolve(number.into())?.to_tuple())
    }

    pub fn to_fields<'a>(&self, number: impl Into<NumberInput<'a>>) -> Result<PhoneNumberFields> {
        Ok(self.resolve(number.into())?.to_fields())
    }

    /// Compares two numbers. The first one must resolve to a number, the
    /// second one may be any text, see [`PhoneNumber::match_with`].
    pub fn is_number_match<'a, 'b>(
        &self,
        first: impl Into<NumberInput<'a>>,
        second: impl Into<NumberInput<'b>>,
    ) -> Result<MatchType> {
        Ok(self.resolve(first.into())?.match_with(second))
    }
}
