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
    fmt,
    hash::{Hash, Hasher},
};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    CountryCodeSource, PhoneNumberUtil,
    interfaces::{MetadataEngine, RawFields},
    memo_cache::DerivedCache,
};

/// An immutable, parsed phone number.
///
/// Instances are created by [`PhoneNumberUtil::parse`] and friends or by
/// [`PhoneNumber::derive`]. Every field is fixed at construction, there is no
/// way to change a number afterwards:
///
/// ```compile_fail
/// let util = phonevalue::PhoneNumberUtil::bundled();
/// let number = util.parse("+1 201 555 0123", None).unwrap();
/// number.country_code = 44;
/// ```
///
/// Derived properties (formats, type, time zones, names) are computed on
/// first use and remembered for the lifetime of the instance.
#[derive(Clone)]
pub struct PhoneNumber {
    fields: RawFields,
    util: PhoneNumberUtil,
    pub(super) cache: DerivedCache,
}

/// The eight fields of a [`PhoneNumber`] in their canonical order.
pub type PhoneNumberTuple = (
    u32,
    u64,
    Option<String>,
    bool,
    Option<u32>,
    Option<String>,
    CountryCodeSource,
    Option<String>,
);

/// Keyed projection of a [`PhoneNumber`] for serialization and interop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumberFields {
    pub country_code: u32,
    pub national_number: u64,
    pub extension: Option<String>,
    pub italian_leading_zero: bool,
    pub number_of_leading_zeros: Option<u32>,
    pub raw_input: Option<String>,
    pub country_code_source: CountryCodeSource,
    pub preferred_domestic_carrier_code: Option<String>,
}

impl PhoneNumber {
    /// Wraps the fields an engine produced. Absent numeric fields become
    /// zero and an unknown country code source becomes unspecified.
    pub(crate) fn from_raw_fields(util: PhoneNumberUtil, mut fields: RawFields) -> Self {
        if fields.country_code.is_none() {
            debug!("Engine returned no country code, defaulting to 0");
            fields.country_code = Some(0);
        }
        if fields.national_number.is_none() {
            debug!("Engine returned no national number, defaulting to 0");
            fields.national_number = Some(0);
        }
        if let Err(ordinal) = CountryCodeSource::try_from(fields.country_code_source) {
            warn!("Unknown country code source ordinal {ordinal}, using unspecified");
            fields.country_code_source = CountryCodeSource::Unspecified.into();
        }
        Self {
            fields,
            util,
            cache: DerivedCache::default(),
        }
    }

    pub(crate) fn raw(&self) -> &RawFields {
        &self.fields
    }

    pub(crate) fn engine(&self) -> &dyn MetadataEngine {
        self.util.engine()
    }

    /// The metadata context this number was created with.
    pub fn util(&self) -> &PhoneNumberUtil {
        &self.util
    }

    pub fn country_code(&self) -> u32 {
        self.fields.country_code.unwrap_or(0)
    }

    pub fn national_number(&self) -> u64 {
        self.fields.national_number.unwrap_or(0)
    }

    pub fn extension(&self) -> Option<&str> {
        self.fields.extension.as_deref()
    }

    pub fn italian_leading_zero(&self) -> bool {
        self.fields.italian_leading_zero
    }

    /// Only meaningful when [`Self::italian_leading_zero`] is set.
    pub fn number_of_leading_zeros(&self) -> Option<u32> {
        self.fields.number_of_leading_zeros
    }

    /// The text this number was parsed from, kept only by
    /// [`PhoneNumberUtil::parse_and_keep_raw_input`].
    pub fn raw_input(&self) -> Option<&str> {
        self.fields.raw_input.as_deref()
    }

    pub fn country_code_source(&self) -> CountryCodeSource {
        CountryCodeSource::try_from(self.fields.country_code_source).unwrap_or_default()
    }

    pub fn preferred_domestic_carrier_code(&self) -> Option<&str> {
        self.fields.preferred_domestic_carrier_code.as_deref()
    }

    pub fn to_tuple(&self) -> PhoneNumberTuple {
        (
            self.country_code(),
            self.national_number(),
            self.fields.extension.clone(),
            self.italian_leading_zero(),
            self.number_of_leading_zeros(),
            self.fields.raw_input.clone(),
            self.country_code_source(),
            self.fields.preferred_domestic_carrier_code.clone(),
        )
    }

    pub fn to_fields(&self) -> PhoneNumberFields {
        PhoneNumberFields {
            country_code: self.country_code(),
            national_number: self.national_number(),
            extension: self.fields.extension.clone(),
            italian_leading_zero: self.italian_leading_zero(),
            number_of_leading_zeros: self.number_of_leading_zeros(),
            raw_input: self.fields.raw_input.clone(),
            country_code_source: self.country_code_source(),
            preferred_domestic_carrier_code: self.fields.preferred_domestic_carrier_code.clone(),
        }
    }
}

impl From<&PhoneNumber> for PhoneNumberFields {
    fn from(number: &PhoneNumber) -> Self {
        number.to_fields()
    }
}

// Provenance (raw input, country code source, carrier code) says how a
// number was written down, not which number it is.
impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.country_code() == other.country_code()
            && self.national_number() == other.national_number()
            && self.extension() == other.extension()
            && self.italian_leading_zero() == other.italian_leading_zero()
            && self.number_of_leading_zeros() == other.number_of_leading_zeros()
    }
}

impl Eq for PhoneNumber {}

impl Hash for PhoneNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.country_code().hash(state);
        self.national_number().hash(state);
        self.extension().hash(state);
        self.italian_leading_zero().hash(state);
        self.number_of_leading_zeros().hash(state);
    }
}

impl fmt::Debug for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneNumber")
            .field("country_code", &self.country_code())
            .field("national_number", &self.national_number())
            .field("extension", &self.extension())
            .field("italian_leading_zero", &self.italian_leading_zero())
            .field("number_of_leading_zeros", &self.number_of_leading_zeros())
            .field("raw_input", &self.raw_input())
            .field("country_code_source", &self.country_code_source())
            .field(
                "preferred_domestic_carrier_code",
                &self.preferred_domestic_carrier_code(),
            )
            .finish()
    }
}

/// Renders the E.164 form.
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_e164())
    }
}
