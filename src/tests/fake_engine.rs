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

//! A small deterministic engine that counts how often each method is asked.
//!
//! Grammar: `+<cc><digits>[x<ext>]` with country codes 1, 39 and 44, or bare
//! digits with a region. `fail:<code>` fails with that code and `odd:` yields
//! a field set without country code, national number or valid source.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use crate::{
    PhoneNumberFormat, PhoneNumberType, PhoneNumberUtil,
    interfaces::{FailureCode, MetadataEngine, RawFields},
    phonenumberutil::helper_functions,
};

const COUNTRIES: [(u32, &str); 3] = [(1, "US"), (39, "IT"), (44, "GB")];

#[derive(Default)]
pub struct FakeEngine {
    calls: Mutex<BTreeMap<&'static str, usize>>,
}

impl FakeEngine {
    pub fn calls(&self, method: &str) -> usize {
        self.calls
            .lock()
            .map(|calls| calls.get(method).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    fn record(&self, method: &'static str) {
        if let Ok(mut calls) = self.calls.lock() {
            *calls.entry(method).or_default() += 1;
        }
    }

    fn region(country_code: u32) -> Option<&'static str> {
        COUNTRIES
            .iter()
            .find(|(code, _)| *code == country_code)
            .map(|(_, region)| *region)
    }

    fn country_code(region: &str) -> Option<u32> {
        COUNTRIES
            .iter()
            .find(|(_, known)| *known == region)
            .map(|(code, _)| *code)
    }
}

/// A util over a fresh fake engine, and the engine to inspect the counters.
pub fn fake_util() -> (PhoneNumberUtil, Arc<FakeEngine>) {
    super::init_logging();
    let engine = Arc::new(FakeEngine::default());
    (PhoneNumberUtil::new(engine.clone()), engine)
}

impl MetadataEngine for FakeEngine {
    fn parse_raw(
        &self,
        text: &str,
        region: Option<&str>,
        keep_raw_input: bool,
    ) -> Result<RawFields, FailureCode> {
        self.record("parse_raw");
        if let Some(code) = text.strip_prefix("fail:") {
            return Err(FailureCode::new(code.parse().unwrap_or(-1), "fake failure"));
        }
        if text.starts_with("odd:") {
            return Ok(RawFields {
                country_code_source: 7,
                ..Default::default()
            });
        }

        let (number, extension) = match text.split_once('x') {
            Some((number, extension)) => (number, Some(extension.trim().to_owned())),
            None => (text, None),
        };
        let digits: String = number.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(FailureCode::new(FailureCode::NOT_A_NUMBER, "no digits"));
        }

        let with_plus = number.trim_start().starts_with('+');
        let (country_code, national) = if with_plus {
            COUNTRIES
                .iter()
                .map(|(code, _)| (*code, code.to_string()))
                .find(|(_, code)| digits.starts_with(code.as_str()))
                .map(|(code, prefix)| (code, digits[prefix.len()..].to_owned()))
                .ok_or_else(|| FailureCode::new(FailureCode::INVALID_COUNTRY_CODE, "unknown code"))?
        } else {
            let code = region
                .and_then(Self::country_code)
                .ok_or_else(|| FailureCode::new(FailureCode::INVALID_COUNTRY_CODE, "no region"))?;
            (code, digits)
        };
        if national.len() < 2 {
            return Err(FailureCode::new(FailureCode::TOO_SHORT_NSN, "too short"));
        }
        if national.len() > 17 {
            return Err(FailureCode::new(FailureCode::TOO_LONG, "too long"));
        }

        let zeros = national.chars().take_while(|c| *c == '0').count() as u32;
        Ok(RawFields {
            country_code: Some(country_code),
            national_number: Some(national.parse().unwrap_or(0)),
            extension,
            italian_leading_zero: zeros > 0,
            number_of_leading_zeros: (zeros > 1).then_some(zeros),
            raw_input: keep_raw_input.then(|| text.to_owned()),
            country_code_source: match (keep_raw_input, with_plus) {
                (false, _) => 0,
                (true, true) => 1,
                (true, false) => 20,
            },
            preferred_domestic_carrier_code: None,
        })
    }

    fn format_raw(&self, fields: &RawFields, format: PhoneNumberFormat) -> String {
        self.record("format_raw");
        let country_code = fields.country_code.unwrap_or(0);
        let nsn = helper_functions::national_significant_number(fields);
        let formatted = match format {
            PhoneNumberFormat::E164 => format!("+{country_code}{nsn}"),
            PhoneNumberFormat::International => format!("+{country_code} {nsn}"),
            PhoneNumberFormat::National => nsn,
            PhoneNumberFormat::RFC3966 => format!("tel:+{country_code}-{nsn}"),
        };
        match (&fields.extension, format) {
            (Some(extension), PhoneNumberFormat::RFC3966) => format!("{formatted};ext={extension}"),
            (Some(extension), PhoneNumberFormat::International | PhoneNumberFormat::National) => {
                format!("{formatted} ext. {extension}")
            }
            _ => formatted,
        }
    }

    fn classify_raw(&self, fields: &RawFields) -> PhoneNumberType {
        self.record("classify_raw");
        let nsn = helper_functions::national_significant_number(fields);
        if fields.country_code.and_then(Self::region).is_none() {
            PhoneNumberType::Unknown
        } else if nsn.starts_with("800") {
            PhoneNumberType::TollFree
        } else if nsn.starts_with('3') {
            PhoneNumberType::Mobile
        } else {
            PhoneNumberType::FixedLine
        }
    }

    fn is_possible_raw(&self, fields: &RawFields) -> bool {
        self.record("is_possible_raw");
        let length = helper_functions::national_significant_number(fields).len();
        fields.country_code.unwrap_or(0) != 0 && (2..=17).contains(&length)
    }

    fn is_valid_raw(&self, fields: &RawFields, region: Option<&str>) -> bool {
        self.record("is_valid_raw");
        region.is_some_and(|region| Self::country_code(region) == fields.country_code)
    }

    fn region_for_raw(&self, fields: &RawFields) -> Option<String> {
        self.record("region_for_raw");
        fields.country_code.and_then(Self::region).map(str::to_owned)
    }

    fn region_for_country_code(&self, country_code: u32) -> Option<String> {
        Self::region(country_code).map(str::to_owned)
    }

    fn is_nanpa_region(&self, region: &str) -> bool {
        matches!(region, "US" | "CA")
    }

    fn is_geographical_raw(&self, fields: &RawFields) -> bool {
        self.record("is_geographical_raw");
        helper_functions::is_geographical_type(
            fields.country_code.unwrap_or(0),
            self.classify_raw(fields),
        )
    }

    fn national_significant_number_raw(&self, fields: &RawFields) -> String {
        self.record("national_significant_number_raw");
        helper_functions::national_significant_number(fields)
    }

    fn ndc_length_raw(&self, _fields: &RawFields) -> usize {
        self.record("ndc_length_raw");
        3
    }

    fn timezones_for_raw(&self, fields: &RawFields) -> Vec<String> {
        self.record("timezones_for_raw");
        match fields.country_code {
            Some(1) => vec!["America/New_York".to_owned()],
            _ => vec!["Etc/Unknown".to_owned()],
        }
    }

    fn carrier_name_for_raw(&self, fields: &RawFields, lang: &str) -> String {
        self.record("carrier_name_for_raw");
        if helper_functions::national_significant_number(fields).starts_with('3') {
            format!("FakeTel-{lang}")
        } else {
            String::new()
        }
    }

    fn country_name_for_raw(&self, fields: &RawFields, lang: &str) -> String {
        self.record("country_name_for_raw");
        match fields.country_code.and_then(Self::region) {
            Some(region) => format!("{region}-{lang}"),
            None => String::new(),
        }
    }

    fn description_for_raw(&self, _fields: &RawFields, lang: &str) -> String {
        self.record("description_for_raw");
        format!("Area-{lang}")
    }

    fn example_raw(&self, region: &str, number_type: PhoneNumberType) -> Option<RawFields> {
        self.record("example_raw");
        (region == "US" && number_type == PhoneNumberType::FixedLine).then(|| RawFields {
            country_code: Some(1),
            national_number: Some(2015550123),
            ..Default::default()
        })
    }
}
