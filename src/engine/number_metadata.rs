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

//! Region resolution, classification and length checks run directly
//! against the numbering-plan descriptors, on the national significant
//! number with its leading zeros.

use log::{trace, warn};
use phonenumber::metadata::{DATABASE, Descriptor, Metadata};

use crate::{i18n::RegionCode, phonenumberutil::PhoneNumberType};

use super::BundledEngine;

/// Descriptors whose possible lengths make up the general description.
fn type_descriptors(metadata: &Metadata) -> [Option<&Descriptor>; 10] {
    let descriptors = metadata.descriptors();
    [
        descriptors.fixed_line(),
        descriptors.mobile(),
        descriptors.toll_free(),
        descriptors.premium_rate(),
        descriptors.shared_cost(),
        descriptors.personal_number(),
        descriptors.voip(),
        descriptors.pager(),
        descriptors.uan(),
        descriptors.voicemail(),
    ]
}

fn length_of(national_number: &str) -> Option<u16> {
    u16::try_from(national_number.len()).ok()
}

impl BundledEngine {
    /// Returns the metadata of `region`, or of the country calling code for
    /// non-geographical entities such as +800.
    pub(super) fn metadata_for_region_or_calling_code(
        country_calling_code: u32,
        region_code: &str,
    ) -> Option<&'static Metadata> {
        if region_code == RegionCode::un001() {
            Self::main_metadata_for_country_code(country_calling_code)
        } else {
            DATABASE.by_id(region_code)
        }
    }

    /// The main country for a calling code is listed first.
    pub(super) fn main_metadata_for_country_code(
        country_calling_code: u32,
    ) -> Option<&'static Metadata> {
        u16::try_from(country_calling_code)
            .ok()
            .and_then(|code| DATABASE.by_code(&code))
            .and_then(|metadata| metadata.into_iter().next())
    }

    /// Finds the region whose numbering plan the number belongs to. Returns
    /// `001` for non-geographical entities and `None` when no region
    /// claims the number.
    pub(super) fn region_for_number(
        &self,
        country_calling_code: u32,
        national_number: &str,
    ) -> Option<&'static str> {
        let region_codes = Self::region_codes_for_country_code(Some(country_calling_code));
        match region_codes.as_slice() {
            [] => {
                trace!("Missing/invalid country calling code ({country_calling_code})");
                None
            }
            [region_code] => Some(*region_code),
            _ => self.region_for_number_from_region_list(national_number, &region_codes),
        }
    }

    fn region_for_number_from_region_list(
        &self,
        national_number: &str,
        region_codes: &[&'static str],
    ) -> Option<&'static str> {
        for region_code in region_codes {
            // The region codes come from the calling code map, so the metadata
            // is always there.
            let Some(metadata) = DATABASE.by_id(*region_code) else {
                continue;
            };
            if let Some(leading_digits) = metadata.leading_digits() {
                if leading_digits
                    .find(national_number)
                    .is_some_and(|found| found.start() == 0)
                {
                    return Some(*region_code);
                }
            } else if self.number_type_for_metadata(national_number, metadata)
                != PhoneNumberType::Unknown
            {
                return Some(*region_code);
            }
        }
        None
    }

    pub(super) fn number_type_for_metadata(
        &self,
        national_number: &str,
        metadata: &Metadata,
    ) -> PhoneNumberType {
        let descriptors = metadata.descriptors();
        if !self.is_number_matching_desc(national_number, Some(descriptors.general())) {
            trace!("Number '{national_number}' type unknown - doesn't match general national number pattern");
            return PhoneNumberType::Unknown;
        }
        if self.is_number_matching_desc(national_number, descriptors.premium_rate()) {
            trace!("Number '{national_number}' is a premium number.");
            return PhoneNumberType::PremiumRate;
        }
        if self.is_number_matching_desc(national_number, descriptors.toll_free()) {
            trace!("Number '{national_number}' is a toll-free number.");
            return PhoneNumberType::TollFree;
        }
        if self.is_number_matching_desc(national_number, descriptors.shared_cost()) {
            trace!("Number '{national_number}' is a shared cost number.");
            return PhoneNumberType::SharedCost;
        }
        if self.is_number_matching_desc(national_number, descriptors.voip()) {
            trace!("Number '{national_number}' is a VOIP (Voice over IP) number.");
            return PhoneNumberType::VoIP;
        }
        if self.is_number_matching_desc(national_number, descriptors.personal_number()) {
            trace!("Number '{national_number}' is a personal number.");
            return PhoneNumberType::PersonalNumber;
        }
        if self.is_number_matching_desc(national_number, descriptors.pager()) {
            trace!("Number '{national_number}' is a pager number.");
            return PhoneNumberType::Pager;
        }
        if self.is_number_matching_desc(national_number, descriptors.uan()) {
            trace!("Number '{national_number}' is a UAN.");
            return PhoneNumberType::UAN;
        }
        if self.is_number_matching_desc(national_number, descriptors.voicemail()) {
            trace!("Number '{national_number}' is a voicemail number.");
            return PhoneNumberType::VoiceMail;
        }

        let same_mobile_and_fixed_line_pattern = match (descriptors.fixed_line(), descriptors.mobile()) {
            (Some(fixed_line), Some(mobile)) => {
                fixed_line.national_number().as_str() == mobile.national_number().as_str()
            }
            _ => false,
        };
        if self.is_number_matching_desc(national_number, descriptors.fixed_line()) {
            if same_mobile_and_fixed_line_pattern {
                trace!("Number '{national_number}': fixed-line and mobile patterns equal, number is fixed-line or mobile");
                return PhoneNumberType::FixedLineOrMobile;
            } else if self.is_number_matching_desc(national_number, descriptors.mobile()) {
                trace!("Number '{national_number}': fixed-line and mobile patterns differ, but number is still fixed-line or mobile");
                return PhoneNumberType::FixedLineOrMobile;
            }
            trace!("Number '{national_number}' is a fixed line number.");
            return PhoneNumberType::FixedLine;
        }
        // Otherwise, test to see if the number is mobile. Only do this if certain
        // that the patterns for mobile and fixed line aren't the same.
        if !same_mobile_and_fixed_line_pattern
            && self.is_number_matching_desc(national_number, descriptors.mobile())
        {
            trace!("Number '{national_number}' is a mobile number.");
            return PhoneNumberType::Mobile;
        }
        trace!("Number '{national_number}' type unknown - doesn't match any specific number type pattern.");
        PhoneNumberType::Unknown
    }

    fn is_number_matching_desc(&self, national_number: &str, number_desc: Option<&Descriptor>) -> bool {
        let Some(number_desc) = number_desc else {
            return false;
        };
        // Possible lengths are checked first so the pattern is only run on
        // numbers that could match. Absent lengths mean the general ones,
        // which the general pattern already covers.
        let possible_length = number_desc.possible_length();
        if !possible_length.is_empty()
            && !length_of(national_number).is_some_and(|length| possible_length.contains(&length))
        {
            return false;
        }
        match self
            .regexp_cache
            .get_full_match_regex(number_desc.national_number().as_str())
        {
            Ok(regex) => regex.is_match(national_number),
            Err(err) => {
                warn!("Skipping numbering-plan pattern: {err}");
                false
            }
        }
    }

    /// Length check against every length a number of any type may have in
    /// the region, local-only lengths included.
    pub(super) fn is_possible_length(metadata: &Metadata, national_number: &str) -> bool {
        let Some(length) = length_of(national_number) else {
            return false;
        };
        let matches_length = |desc: &Descriptor| {
            desc.possible_length().contains(&length) || desc.possible_local_length().contains(&length)
        };
        let general = metadata.descriptors().general();
        if !general.possible_length().is_empty() {
            return matches_length(general);
        }
        // The general description carries no lengths of its own: they are the
        // union of the lengths of all number types.
        type_descriptors(metadata)
            .into_iter()
            .flatten()
            .any(matches_length)
    }
}
