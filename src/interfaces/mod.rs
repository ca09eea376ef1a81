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

//! The seam between phone number values and the telephony metadata engine
//! that owns numbering-plan data.

use thiserror::Error;

use crate::phonenumberutil::{
    MatchType, PhoneNumberFormat, PhoneNumberType, helper_functions,
};

/// Field set exchanged with a [`MetadataEngine`].
///
/// Mirrors the wire shape of a libphonenumber `PhoneNumber` message: the
/// country code and national number may be absent and the country code
/// source is a plain ordinal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    pub country_code: Option<u32>,
    pub national_number: Option<u64>,
    pub extension: Option<String>,
    pub italian_leading_zero: bool,
    pub number_of_leading_zeros: Option<u32>,
    pub raw_input: Option<String>,
    pub country_code_source: i32,
    pub preferred_domestic_carrier_code: Option<String>,
}

/// Failure reported by [`MetadataEngine::parse_raw`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("engine failure {code}: {message}")]
pub struct FailureCode {
    pub code: i32,
    pub message: String,
}

impl FailureCode {
    /// The country calling code is not recognized.
    pub const INVALID_COUNTRY_CODE: i32 = 0;
    /// The text holds no extractable digit sequence.
    pub const NOT_A_NUMBER: i32 = 1;
    /// Too few digits remain once an international dialing prefix is stripped.
    pub const TOO_SHORT_AFTER_IDD: i32 = 2;
    /// The national significant number is shorter than any numbering plan allows.
    pub const TOO_SHORT_NSN: i32 = 3;
    /// The digit sequence exceeds the maximum significant-digit length.
    pub const TOO_LONG: i32 = 4;

    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

/// Internal phonenumber metadata API used to isolate the numbering-plan
/// implementation and allow different engines to be swapped in easily.
///
/// Every method is pure: the same fields always produce the same answer and
/// no state is retained across calls.
pub trait MetadataEngine: Send + Sync {
    /// Extracts and normalizes a phone number from `text`. `region` is the
    /// CLDR region the number is expected to be dialled from.
    fn parse_raw(
        &self,
        text: &str,
        region: Option<&str>,
        keep_raw_input: bool,
    ) -> Result<RawFields, FailureCode>;

    fn format_raw(&self, fields: &RawFields, format: PhoneNumberFormat) -> String;

    fn classify_raw(&self, fields: &RawFields) -> PhoneNumberType;

    fn is_possible_raw(&self, fields: &RawFields) -> bool;

    /// Validates against `region` when given, otherwise against whichever
    /// region the country calling code resolves to.
    fn is_valid_raw(&self, fields: &RawFields, region: Option<&str>) -> bool;

    /// Compares the core fields of two numbers, ignoring provenance.
    fn match_raw(&self, first: &RawFields, second: &RawFields) -> MatchType {
        helper_functions::match_core_fields(first, second)
    }

    fn region_for_raw(&self, fields: &RawFields) -> Option<String>;

    /// Returns the main region for a country calling code, e.g. `US` for 1.
    fn region_for_country_code(&self, country_code: u32) -> Option<String>;

    /// Whether the region belongs to the North American Numbering Plan.
    fn is_nanpa_region(&self, region: &str) -> bool;

    fn is_geographical_raw(&self, fields: &RawFields) -> bool;

    fn national_significant_number_raw(&self, fields: &RawFields) -> String {
        helper_functions::national_significant_number(fields)
    }

    fn ndc_length_raw(&self, fields: &RawFields) -> usize;

    /// Ordered IANA zone identifiers.
    fn timezones_for_raw(&self, fields: &RawFields) -> Vec<String>;

    fn carrier_name_for_raw(&self, fields: &RawFields, lang: &str) -> String;

    fn country_name_for_raw(&self, fields: &RawFields, lang: &str) -> String;

    fn description_for_raw(&self, fields: &RawFields, lang: &str) -> String;

    /// Example number of the given type for a region, if the metadata has one.
    fn example_raw(&self, region: &str, number_type: PhoneNumberType) -> Option<RawFields>;
}
