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

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Defines the various standardized formats for representing phone numbers.
///
/// `INTERNATIONAL` and `NATIONAL` formats align with the ITU-T E.123 recommendation,
/// but use local conventions like hyphens (-) instead of spaces for separators.
///
/// For example, the Google Switzerland office number would be:
/// - **INTERNATIONAL**: `+41 44 668 1800`
/// - **NATIONAL**: `044 668 1800`
/// - **E164**: `+41446681800` (international format without formatting)
/// - **RFC3966**: `tel:+41-44-668-1800` (hyphen-separated with a "tel:" prefix)
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// **E.164 format.**
    /// This is a standardized international format with no spaces or symbols,
    /// always starting with a `+` followed by the country code.
    /// Example: `+41446681800`.
    E164,
    /// **International format.**
    /// This format includes the country code and is formatted with spaces
    /// for readability, as recommended for international display.
    /// Example: `+41 44 668 1800`.
    International,
    /// **National format.**
    /// This format is used for dialing within the number's own country.
    /// It may include a national prefix (like '0') and uses local formatting conventions.
    /// Example: `044 668 1800`.
    National,
    /// **RFC3966 format.**
    /// A technical format used in contexts like web links. It starts with "tel:",
    /// uses hyphens as separators, and can include extensions.
    /// Example: `tel:+41-44-668-1800`.
    RFC3966,
}

impl PhoneNumberFormat {
    /// Position of the format in a per-instance memo table.
    pub(crate) const fn slot(self) -> usize {
        match self {
            PhoneNumberFormat::E164 => 0,
            PhoneNumberFormat::International => 1,
            PhoneNumberFormat::National => 2,
            PhoneNumberFormat::RFC3966 => 3,
        }
    }
}

/// Categorizes phone numbers based on their primary use.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberType {
    /// **Fixed-line numbers.**
    /// These are traditional landline telephone numbers tied to a specific geographic location.
    FixedLine,
    /// **Mobile numbers.**
    /// These numbers are assigned to wireless devices like mobile phones.
    Mobile,
    /// **Fixed-line or mobile.**
    /// Used in regions (e.g., the USA) where it's impossible to distinguish between
    /// fixed-line and mobile numbers by looking at the phone number itself.
    FixedLineOrMobile,
    /// **Toll-free numbers.**
    /// Calls to these numbers are free for the caller, with the cost being paid by the recipient.
    /// Examples include "800" or "888" numbers in the US.
    TollFree,
    /// **Premium-rate numbers.**
    /// These numbers charge a higher rate than normal calls.
    PremiumRate,
    /// **Shared-cost numbers.**
    /// The cost of the call is split between the caller and the recipient.
    SharedCost,
    /// **Voice over IP (VoIP) numbers.**
    VoIP,
    /// **Personal numbers.**
    /// A number associated with a person, not a location or device.
    PersonalNumber,
    /// **Pagers.**
    Pager,
    /// **Universal Access Numbers (UAN).**
    /// A single number that a company can use to route calls to different offices or departments.
    UAN,
    /// **Voicemail access numbers.**
    VoiceMail,
    /// **Unknown type.**
    /// The number does not match any of the known patterns for its region and its type
    /// cannot be determined.
    Unknown,
}

/// Describes the degree of similarity between two phone numbers.
///
/// Variants are ordered from the weakest to the strongest outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchType {
    /// **Not a number.**
    /// The operand given as text could not be parsed as a phone number.
    NotANumber,
    /// **No match.**
    /// The two numbers are entirely different.
    NoMatch,
    /// **Short National Significant Number match.**
    /// One number is a shorter version of the other's National Significant Number (NSN),
    /// or they only differ in an extension present on one side or in the
    /// representation of leading zeros.
    /// For example, `6502530000` is a short match for `16502530000`.
    ShortNsnMatch,
    /// **National Significant Number (NSN) match.**
    /// The numbers share the same NSN while the country code is unspecified on
    /// at least one side.
    NsnMatch,
    /// **Exact match.**
    /// The two numbers are identical in every aspect, including country code, NSN, and
    /// any specified extensions.
    ExactMatch,
}

/// Tells how the country calling code of a parsed number was determined.
///
/// The discriminants are the ordinals used by libphonenumber-style engines.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum CountryCodeSource {
    /// The source is unknown, or the number was not parsed with
    /// `keep_raw_input`.
    #[default]
    Unspecified = 0,
    /// The number started with a plus sign, e.g. `+1 650 253 0000`.
    FromNumberWithPlusSign = 1,
    /// The number started with an international dialing prefix, e.g.
    /// `011 1 650 253 0000` dialled from the US.
    FromNumberWithIdd = 5,
    /// The number started with the country calling code itself, without any
    /// prefix, e.g. `1 650 253 0000`.
    FromNumberWithoutPlusSign = 10,
    /// The country calling code came from the default region.
    FromDefaultCountry = 20,
}

impl TryFrom<i32> for CountryCodeSource {
    type Error = i32;

    fn try_from(ordinal: i32) -> Result<Self, Self::Error> {
        match ordinal {
            0 => Ok(CountryCodeSource::Unspecified),
            1 => Ok(CountryCodeSource::FromNumberWithPlusSign),
            5 => Ok(CountryCodeSource::FromNumberWithIdd),
            10 => Ok(CountryCodeSource::FromNumberWithoutPlusSign),
            20 => Ok(CountryCodeSource::FromDefaultCountry),
            unknown => Err(unknown),
        }
    }
}

impl From<CountryCodeSource> for i32 {
    fn from(source: CountryCodeSource) -> Self {
        source as i32
    }
}
