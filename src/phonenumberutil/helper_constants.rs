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


pub const PLUS_SIGN: &'static str = "+";
pub const RFC3966_EXTN_PREFIX: &'static str = ";ext=";

// Default extension prefix to use when formatting. This will be put in front of
// any extension component of the number, after the main national number is
// formatted.
pub const DEFAULT_EXTN_PREFIX: &'static str = " ext. ";

pub const NANPA_COUNTRY_CODE: u32 = 1;

// The maximum length of the national significant number.
pub const MAX_LENGTH_FOR_NSN: usize = 17;

/// Zone reported when a number cannot be mapped to any time zone.
pub const UNKNOWN_TIMEZONE: &'static str = "Etc/Unknown";

// Countries where mobile numbers are still tied to a geographic area.
pub const GEO_MOBILE_COUNTRIES: [u32; 4] = [
    52, // Mexico
    54, // Argentina
    55, // Brazil
    62, // Indonesia: some prefixes are only valid for a certain area.
];

// Tokens dialled between the country code and the area code of mobile
// numbers, e.g. the 9 in +54 9 11 1234 5678.
pub const MOBILE_TOKEN_MAPPINGS: [(u32, &'static str); 1] = [(54, "9")];

pub const DEFAULT_LANGUAGE: &'static str = "en";

// Languages that never fall back to english data.
pub const NO_ENGLISH_FALLBACK_LANGUAGES: [&'static str; 3] = ["zh", "ja", "ko"];
