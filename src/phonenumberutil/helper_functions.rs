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

use log::trace;

use crate::{
    interfaces::RawFields,
    phonenumberutil::{
        MatchType, PhoneNumberType,
        helper_constants::{GEO_MOBILE_COUNTRIES, MAX_LENGTH_FOR_NSN, MOBILE_TOKEN_MAPPINGS},
        helper_types::CoreFields,
    },
};

/// Gets the national significant number of a phone number. Note a national
/// significant number doesn't contain a national prefix or any formatting.
pub(crate) fn national_significant_number(fields: &RawFields) -> String {
    // If leading zero(s) have been set, we prefix this now. Note this is not a
    // national prefix. No numbering plan has more zeros than digits.
    let zeros_start = if fields.italian_leading_zero {
        let number_of_leading_zeros = fields.number_of_leading_zeros.unwrap_or(1) as usize;
        "0".repeat(number_of_leading_zeros.min(MAX_LENGTH_FOR_NSN))
    } else {
        String::new()
    };

    let mut buf = itoa::Buffer::new();
    let national_number = buf.format(fields.national_number.unwrap_or(0));

    fast_cat::concat_str!(&zeros_start, national_number)
}

/// Returns the mobile token for the provided country calling code if it has
/// one. A mobile token is a number inserted before the area code when dialing
/// a mobile number from that country from abroad.
pub(crate) fn mobile_token(country_calling_code: u32) -> Option<&'static str> {
    MOBILE_TOKEN_MAPPINGS
        .iter()
        .find(|(code, _)| *code == country_calling_code)
        .map(|(_, token)| *token)
}

/// Tests whether a phone number has a geographical association: fixed-line
/// numbers always do, mobile numbers only in a few countries.
pub(crate) fn is_geographical_type(country_calling_code: u32, number_type: PhoneNumberType) -> bool {
    matches!(
        number_type,
        PhoneNumberType::FixedLine | PhoneNumberType::FixedLineOrMobile
    ) || (number_type == PhoneNumberType::Mobile
        && GEO_MOBILE_COUNTRIES.contains(&country_calling_code))
}

/// Returns true when one national number is a decimal suffix of the other,
/// e.g. 6502530000 and 16502530000.
pub(crate) fn is_national_number_suffix_of_the_other(
    first_number: &CoreFields,
    second_number: &CoreFields,
) -> bool {
    let mut first_buf = itoa::Buffer::new();
    let first_national_number = first_buf.format(first_number.national_number);
    let mut second_buf = itoa::Buffer::new();
    let second_national_number = second_buf.format(second_number.national_number);
    // Note that end_with returns true if the numbers are equal.
    first_national_number.ends_with(second_national_number)
        || second_national_number.ends_with(first_national_number)
}

/// Compares two numbers on their core fields only.
///
/// Numbers that carry different extensions never match. When both country
/// codes are known the result is either an exact, a short NSN or no match.
/// Otherwise the unknown country code is taken over from the other side and
/// the numbers can match on their national significant number at best.
pub(crate) fn match_core_fields(first: &RawFields, second: &RawFields) -> MatchType {
    let mut first_number = CoreFields::new(first);
    let second_number = CoreFields::new(second);

    // Early exit if both had extensions and these are different.
    if let (Some(first_ext), Some(second_ext)) = (&first_number.extension, &second_number.extension) {
        if first_ext != second_ext {
            trace!("Extensions differ: {first_ext} vs {second_ext}");
            return MatchType::NoMatch;
        }
    }

    let first_number_country_code = first_number.country_code;
    let second_number_country_code = second_number.country_code;
    // Both had country calling code specified.
    if first_number_country_code != 0 && second_number_country_code != 0 {
        if first_number == second_number {
            return MatchType::ExactMatch;
        } else if first_number_country_code == second_number_country_code
            && is_national_number_suffix_of_the_other(&first_number, &second_number)
        {
            // A SHORT_NSN_MATCH occurs if there is a difference because of the
            // presence or absence of an 'Italian leading zero', the presence or
            // absence of an extension, or one NSN being a shorter variant of the
            // other.
            return MatchType::ShortNsnMatch;
        }
        // This is not a match.
        return MatchType::NoMatch;
    }
    // Checks cases where one or both country calling codes were not
    // specified. To make equality checks easier, we first set the country
    // calling codes to be equal.
    first_number.country_code = second_number_country_code;
    // If all else was the same, then this is an NSN_MATCH.
    if first_number == second_number {
        return MatchType::NsnMatch;
    }
    if is_national_number_suffix_of_the_other(&first_number, &second_number) {
        return MatchType::ShortNsnMatch;
    }
    MatchType::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(country_code: u32, national_number: u64) -> RawFields {
        RawFields {
            country_code: Some(country_code),
            national_number: Some(national_number),
            ..Default::default()
        }
    }

    #[test]
    fn national_significant_number_keeps_leading_zeros() {
        let mut italian = fields(39, 236618300);
        italian.italian_leading_zero = true;
        assert_eq!(national_significant_number(&italian), "0236618300");

        italian.number_of_leading_zeros = Some(3);
        assert_eq!(national_significant_number(&italian), "000236618300");

        // The count means nothing without the flag.
        italian.italian_leading_zero = false;
        assert_eq!(national_significant_number(&italian), "236618300");
    }

    #[test]
    fn leading_zeros_are_bounded() {
        let mut italian = fields(39, 236618300);
        italian.italian_leading_zero = true;
        italian.number_of_leading_zeros = Some(u32::MAX);
        let national_significant_number = national_significant_number(&italian);
        assert_eq!(national_significant_number.len(), MAX_LENGTH_FOR_NSN + 9);
        assert!(national_significant_number.ends_with("236618300"));
    }

    #[test]
    fn absent_fields_are_zero() {
        assert_eq!(national_significant_number(&RawFields::default()), "0");
    }

    #[test]
    fn geographical_types() {
        assert!(is_geographical_type(1, PhoneNumberType::FixedLineOrMobile));
        assert!(is_geographical_type(39, PhoneNumberType::FixedLine));
        assert!(is_geographical_type(54, PhoneNumberType::Mobile));
        assert!(!is_geographical_type(39, PhoneNumberType::Mobile));
        assert!(!is_geographical_type(1, PhoneNumberType::TollFree));
        assert!(!is_geographical_type(1, PhoneNumberType::Unknown));
    }

    #[test]
    fn mobile_tokens() {
        assert_eq!(mobile_token(54), Some("9"));
        assert_eq!(mobile_token(1), None);
    }

    #[test]
    fn exact_and_short_matches() {
        let number = fields(1, 6502530000);
        assert_eq!(match_core_fields(&number, &number.clone()), MatchType::ExactMatch);

        let mut with_extension = number.clone();
        with_extension.extension = Some("1234".to_owned());
        assert_eq!(match_core_fields(&number, &with_extension), MatchType::ShortNsnMatch);

        let mut other_extension = number.clone();
        other_extension.extension = Some("4321".to_owned());
        assert_eq!(match_core_fields(&with_extension, &other_extension), MatchType::NoMatch);

        assert_eq!(match_core_fields(&number, &fields(1, 2530000)), MatchType::ShortNsnMatch);
        assert_eq!(match_core_fields(&number, &fields(44, 6502530000)), MatchType::NoMatch);
    }

    #[test]
    fn empty_extension_is_ignored() {
        let number = fields(1, 6502530000);
        let mut empty_extension = number.clone();
        empty_extension.extension = Some(String::new());
        assert_eq!(match_core_fields(&number, &empty_extension), MatchType::ExactMatch);
    }

    #[test]
    fn unknown_country_code_matches_on_nsn() {
        let number = fields(1, 6502530000);
        assert_eq!(match_core_fields(&number, &fields(0, 6502530000)), MatchType::NsnMatch);
        assert_eq!(match_core_fields(&fields(0, 6502530000), &number), MatchType::NsnMatch);
        assert_eq!(match_core_fields(&number, &fields(0, 2530000)), MatchType::ShortNsnMatch);
        assert_eq!(match_core_fields(&number, &fields(0, 1234567)), MatchType::NoMatch);
    }

    #[test]
    fn leading_zero_representation_is_a_short_match() {
        let plain = fields(39, 236618300);
        let mut italian = plain.clone();
        italian.italian_leading_zero = true;
        assert_eq!(match_core_fields(&plain, &italian), MatchType::ShortNsnMatch);

        let mut explicit_one = italian.clone();
        explicit_one.number_of_leading_zeros = Some(1);
        assert_eq!(match_core_fields(&italian, &explicit_one), MatchType::ExactMatch);
    }
}
