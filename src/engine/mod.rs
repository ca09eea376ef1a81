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

//! [`MetadataEngine`] backed by the libphonenumber metadata shipped with the
//! `phonenumber` crate, plus the carrier, geocoding, time zone and region
//! name tables compiled from `/resources`.

mod number_metadata;
mod prefix_lookup;

use std::sync::LazyLock;

use log::{trace, warn};
use phonenumber::{self as lib, Mode, country, metadata::DATABASE};
use regex::Regex;

use crate::{
    generated,
    i18n::RegionCode,
    interfaces::{FailureCode, MetadataEngine, RawFields},
    phonenumberutil::{
        PhoneNumberFormat, PhoneNumberType,
        helper_constants::{
            DEFAULT_EXTN_PREFIX, NANPA_COUNTRY_CODE, PLUS_SIGN, RFC3966_EXTN_PREFIX,
            UNKNOWN_TIMEZONE,
        },
        helper_functions,
    },
    regexp_cache::RegexCache,
};

use self::prefix_lookup::{localized_prefix_lookup, localized_region_name};

/// Failure code for library errors this adapter does not know about.
const UNRECOGNIZED_FAILURE: i32 = -1;

static NON_DIGITS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\D+").expect("NON_DIGITS_PATTERN is a valid regex"));

/// Parsing and formatting are delegated to the `phonenumber` crate.
/// Classification, region resolution and validation run on its metadata
/// here, so that leading zeros of the national number take part.
#[derive(Debug, Default)]
pub struct BundledEngine {
    regexp_cache: RegexCache,
}

impl BundledEngine {
    pub fn new() -> Self {
        Self {
            regexp_cache: RegexCache::new(),
        }
    }

    /// Turns a field set back into a number of the numbering-plan library.
    /// The extension is left out; formatting appends it on its own.
    fn rebuild(&self, fields: &RawFields) -> Option<lib::PhoneNumber> {
        let country_code = fields.country_code.filter(|code| *code != 0)?;
        let mut buf = itoa::Buffer::new();
        let national_significant_number = helper_functions::national_significant_number(fields);
        let text = fast_cat::concat_str!(
            PLUS_SIGN,
            buf.format(country_code),
            &national_significant_number
        );
        match lib::parse(None, &text) {
            Ok(number) => Some(number),
            Err(err) => {
                trace!("Could not rebuild number '{text}': {err}");
                None
            }
        }
    }

    /// Country calling code followed by the national significant number,
    /// the key of every prefix table.
    fn prefix_digits(fields: &RawFields) -> String {
        let mut buf = itoa::Buffer::new();
        let national_significant_number = helper_functions::national_significant_number(fields);
        fast_cat::concat_str!(
            buf.format(fields.country_code.unwrap_or(0)),
            &national_significant_number
        )
    }

    fn region_codes_for_country_code(country_code: Option<u32>) -> Vec<&'static str> {
        country_code
            .and_then(|code| u16::try_from(code).ok())
            .and_then(|code| DATABASE.region(&code))
            .unwrap_or_default()
    }

    fn format_fallback(fields: &RawFields, format: PhoneNumberFormat) -> String {
        let national_significant_number = helper_functions::national_significant_number(fields);
        if format != PhoneNumberFormat::E164 {
            return national_significant_number;
        }
        let mut buf = itoa::Buffer::new();
        fast_cat::concat_str!(
            PLUS_SIGN,
            buf.format(fields.country_code.unwrap_or(0)),
            &national_significant_number
        )
    }
}

fn raw_fields_from_library(number: &lib::PhoneNumber, raw_input: Option<&str>) -> RawFields {
    let zeros = number.national().zeros() as u32;
    let keep_raw_input = raw_input.is_some();
    RawFields {
        country_code: Some(number.code().value() as u32),
        national_number: Some(number.national().value()),
        extension: number.extension().map(|extension| extension.to_string()),
        italian_leading_zero: zeros > 0,
        number_of_leading_zeros: (zeros > 1).then_some(zeros),
        raw_input: raw_input.map(str::to_owned),
        // Provenance is only recorded when the raw input is kept.
        country_code_source: if keep_raw_input {
            country_code_source_ordinal(number.code().source())
        } else {
            0
        },
        preferred_domestic_carrier_code: number
            .carrier()
            .filter(|_| keep_raw_input)
            .map(|carrier| carrier.to_string()),
    }
}

fn country_code_source_ordinal(source: country::Source) -> i32 {
    #[allow(unreachable_patterns)]
    match source {
        country::Source::Plus => 1,
        country::Source::Idd => 5,
        country::Source::Number => 10,
        country::Source::Default => 20,
        _ => 0,
    }
}

fn failure_from_library(err: lib::ParseError) -> FailureCode {
    #[allow(unreachable_patterns)]
    let code = match &err {
        lib::ParseError::NoNumber => FailureCode::NOT_A_NUMBER,
        lib::ParseError::InvalidCountryCode => FailureCode::INVALID_COUNTRY_CODE,
        lib::ParseError::TooShortAfterIdd => FailureCode::TOO_SHORT_AFTER_IDD,
        lib::ParseError::TooShortNsn => FailureCode::TOO_SHORT_NSN,
        lib::ParseError::TooLong => FailureCode::TOO_LONG,
        // A digit run that does not fit an integer is not a number either.
        lib::ParseError::MalformedInteger(_) => FailureCode::NOT_A_NUMBER,
        _ => UNRECOGNIZED_FAILURE,
    };
    FailureCode::new(code, err.to_string())
}

fn library_mode(format: PhoneNumberFormat) -> Mode {
    match format {
        PhoneNumberFormat::E164 => Mode::E164,
        PhoneNumberFormat::International => Mode::International,
        PhoneNumberFormat::National => Mode::National,
        PhoneNumberFormat::RFC3966 => Mode::Rfc3966,
    }
}

impl MetadataEngine for BundledEngine {
    fn parse_raw(
        &self,
        text: &str,
        region: Option<&str>,
        keep_raw_input: bool,
    ) -> Result<RawFields, FailureCode> {
        let country = match region {
            Some(region) => match region.parse::<country::Id>() {
                Ok(id) => Some(id),
                Err(_) => {
                    warn!("Invalid or unknown region code provided: {region}");
                    None
                }
            },
            None => None,
        };
        let number = lib::parse(country, text).map_err(failure_from_library)?;
        Ok(raw_fields_from_library(&number, keep_raw_input.then_some(text)))
    }

    fn format_raw(&self, fields: &RawFields, format: PhoneNumberFormat) -> String {
        if fields.national_number.unwrap_or(0) == 0 {
            if let Some(raw_input) = fields.raw_input.as_deref().filter(|raw| !raw.is_empty()) {
                // Unparseable numbers that kept their raw input are formatted
                // as that raw input.
                return raw_input.to_owned();
            }
        }
        let Some(number) = self.rebuild(fields) else {
            return Self::format_fallback(fields, format);
        };
        let formatted = number.format().mode(library_mode(format)).to_string();
        match fields.extension.as_deref().filter(|extension| !extension.is_empty()) {
            Some(extension) if format != PhoneNumberFormat::E164 => {
                let prefix = if format == PhoneNumberFormat::RFC3966 {
                    RFC3966_EXTN_PREFIX
                } else {
                    DEFAULT_EXTN_PREFIX
                };
                fast_cat::concat_str!(&formatted, prefix, extension)
            }
            _ => formatted,
        }
    }

    fn classify_raw(&self, fields: &RawFields) -> PhoneNumberType {
        let country_code = fields.country_code.unwrap_or(0);
        let national_significant_number = helper_functions::national_significant_number(fields);
        let Some(metadata) = self
            .region_for_number(country_code, &national_significant_number)
            .and_then(|region| Self::metadata_for_region_or_calling_code(country_code, region))
        else {
            return PhoneNumberType::Unknown;
        };
        self.number_type_for_metadata(&national_significant_number, metadata)
    }

    fn is_possible_raw(&self, fields: &RawFields) -> bool {
        let Some(metadata) =
            Self::main_metadata_for_country_code(fields.country_code.unwrap_or(0))
        else {
            return false;
        };
        let national_significant_number = helper_functions::national_significant_number(fields);
        Self::is_possible_length(metadata, &national_significant_number)
    }

    fn is_valid_raw(&self, fields: &RawFields, region: Option<&str>) -> bool {
        let country_code = fields.country_code.unwrap_or(0);
        let national_significant_number = helper_functions::national_significant_number(fields);
        let Some(region) =
            region.or_else(|| self.region_for_number(country_code, &national_significant_number))
        else {
            return false;
        };
        let Some(metadata) = Self::metadata_for_region_or_calling_code(country_code, region) else {
            trace!("No metadata for region {region}");
            return false;
        };
        if region != RegionCode::un001() && u32::from(metadata.country_code()) != country_code {
            // Either the region code was invalid, or the country calling code
            // for this number does not match that of the region code.
            return false;
        }
        self.number_type_for_metadata(&national_significant_number, metadata)
            != PhoneNumberType::Unknown
    }

    fn region_for_raw(&self, fields: &RawFields) -> Option<String> {
        let national_significant_number = helper_functions::national_significant_number(fields);
        self.region_for_number(fields.country_code.unwrap_or(0), &national_significant_number)
            .filter(|region| RegionCode::is_displayable(region))
            .map(str::to_owned)
    }

    fn region_for_country_code(&self, country_code: u32) -> Option<String> {
        // The main country for a code is listed first.
        Self::region_codes_for_country_code(Some(country_code))
            .into_iter()
            .find(|region| RegionCode::is_displayable(region))
            .map(str::to_owned)
    }

    fn is_nanpa_region(&self, region: &str) -> bool {
        DATABASE
            .by_id(region)
            .is_some_and(|metadata| u32::from(metadata.country_code()) == NANPA_COUNTRY_CODE)
    }

    fn is_geographical_raw(&self, fields: &RawFields) -> bool {
        helper_functions::is_geographical_type(
            fields.country_code.unwrap_or(0),
            self.classify_raw(fields),
        )
    }

    fn ndc_length_raw(&self, fields: &RawFields) -> usize {
        let Some(number) = self.rebuild(fields) else {
            return 0;
        };
        let international = number.format().mode(Mode::International).to_string();
        // The pattern will start with "+COUNTRY_CODE " so the first group
        // will always be the empty string (before the + symbol) and the
        // second group will be the country calling code. The third group
        // will be area code if it is not the last group.
        let number_groups: Vec<&str> = NON_DIGITS_PATTERN.split(&international).collect();
        if number_groups.len() <= 3 {
            return 0;
        }
        let country_code = fields.country_code.unwrap_or(0);
        if helper_functions::mobile_token(country_code).is_some()
            && self.classify_raw(fields) == PhoneNumberType::Mobile
        {
            // For example Argentinian mobile numbers, when formatted in the
            // international format, are in the form of +54 9 NDC XXXX...
            // As the mobile token is part of the NSN it is counted too.
            return number_groups[2].len() + number_groups[3].len();
        }
        number_groups[2].len()
    }

    fn timezones_for_raw(&self, fields: &RawFields) -> Vec<String> {
        let number_type = self.classify_raw(fields);
        let country_code = fields.country_code.unwrap_or(0);
        let zones = if number_type == PhoneNumberType::Unknown {
            None
        } else if !helper_functions::is_geographical_type(country_code, number_type) {
            let mut buf = itoa::Buffer::new();
            generated::TIMEZONES.lookup(buf.format(country_code))
        } else {
            generated::TIMEZONES.lookup(&Self::prefix_digits(fields))
        };
        match zones {
            Some(zones) => zones.split('&').map(str::to_owned).collect(),
            None => vec![UNKNOWN_TIMEZONE.to_owned()],
        }
    }

    fn carrier_name_for_raw(&self, fields: &RawFields, lang: &str) -> String {
        let is_mobile = matches!(
            self.classify_raw(fields),
            PhoneNumberType::Mobile | PhoneNumberType::FixedLineOrMobile | PhoneNumberType::Pager
        );
        if !is_mobile || !self.is_valid_raw(fields, None) {
            return String::new();
        }
        localized_prefix_lookup(generated::CARRIERS, lang, &Self::prefix_digits(fields))
            .unwrap_or_default()
            .to_owned()
    }

    fn country_name_for_raw(&self, fields: &RawFields, lang: &str) -> String {
        let region_codes = Self::region_codes_for_country_code(fields.country_code);
        let region = match region_codes.as_slice() {
            [single] => Some((*single).to_owned()),
            _ => self.region_for_raw(fields),
        };
        region
            .and_then(|region| localized_region_name(generated::COUNTRY_NAMES, lang, &region))
            .unwrap_or_default()
            .to_owned()
    }

    fn description_for_raw(&self, fields: &RawFields, lang: &str) -> String {
        let number_type = self.classify_raw(fields);
        if number_type == PhoneNumberType::Unknown {
            return String::new();
        }
        let country_code = fields.country_code.unwrap_or(0);
        if helper_functions::is_geographical_type(country_code, number_type) {
            if let Some(area) =
                localized_prefix_lookup(generated::GEOCODING, lang, &Self::prefix_digits(fields))
            {
                return area.to_owned();
            }
        }
        self.country_name_for_raw(fields, lang)
    }

    fn example_raw(&self, region: &str, number_type: PhoneNumberType) -> Option<RawFields> {
        let metadata = DATABASE.by_id(region)?;
        let descriptors = metadata.descriptors();
        let descriptor = match number_type {
            PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile => {
                descriptors.fixed_line()
            }
            PhoneNumberType::Mobile => descriptors.mobile(),
            PhoneNumberType::TollFree => descriptors.toll_free(),
            PhoneNumberType::PremiumRate => descriptors.premium_rate(),
            PhoneNumberType::SharedCost => descriptors.shared_cost(),
            PhoneNumberType::VoIP => descriptors.voip(),
            PhoneNumberType::PersonalNumber => descriptors.personal_number(),
            PhoneNumberType::Pager => descriptors.pager(),
            PhoneNumberType::UAN => descriptors.uan(),
            PhoneNumberType::VoiceMail => descriptors.voicemail(),
            PhoneNumberType::Unknown => None,
        }?;
        let example = descriptor.example()?;
        let id = region.parse::<country::Id>().ok()?;
        match lib::parse(Some(id), example) {
            Ok(number) => Some(raw_fields_from_library(&number, None)),
            Err(err) => {
                warn!("Example number '{example}' for {region} does not parse: {err}");
                None
            }
        }
    }
}
