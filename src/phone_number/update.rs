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

use crate::{PhoneNumber, interfaces::RawFields};

/// A field of [`PhoneNumberUpdate`]: either left as it is or replaced.
///
/// For optional fields `Set(None)` clears the value, which is not the same
/// as leaving it untouched with `Keep`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update<T> {
    Keep,
    Set(T),
}

impl<T> Default for Update<T> {
    fn default() -> Self {
        Update::Keep
    }
}

impl<T> Update<T> {
    fn apply(self, current: T) -> T {
        match self {
            Update::Keep => current,
            Update::Set(value) => value,
        }
    }
}

/// Changes to apply with [`PhoneNumber::derive`].
///
/// ```
/// use phonevalue::{PhoneNumberUpdate, PhoneNumberUtil};
///
/// let util = PhoneNumberUtil::bundled();
/// let number = util.parse("+1 201-555-0123", None).unwrap();
/// let with_extension = number.derive(PhoneNumberUpdate::new().extension("42"));
/// let cleared = with_extension.derive(PhoneNumberUpdate::new().clear_extension());
///
/// assert_eq!(with_extension.extension(), Some("42"));
/// assert_eq!(cleared.extension(), None);
/// assert_eq!(cleared, number);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneNumberUpdate {
    pub country_code: Update<u32>,
    pub national_number: Update<u64>,
    pub extension: Update<Option<String>>,
    pub italian_leading_zero: Update<bool>,
    pub number_of_leading_zeros: Update<Option<u32>>,
}

impl PhoneNumberUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country_code(mut self, country_code: u32) -> Self {
        self.country_code = Update::Set(country_code);
        self
    }

    pub fn national_number(mut self, national_number: u64) -> Self {
        self.national_number = Update::Set(national_number);
        self
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Update::Set(Some(extension.into()));
        self
    }

    pub fn clear_extension(mut self) -> Self {
        self.extension = Update::Set(None);
        self
    }

    pub fn italian_leading_zero(mut self, italian_leading_zero: bool) -> Self {
        self.italian_leading_zero = Update::Set(italian_leading_zero);
        self
    }

    pub fn number_of_leading_zeros(mut self, number_of_leading_zeros: u32) -> Self {
        self.number_of_leading_zeros = Update::Set(Some(number_of_leading_zeros));
        self
    }

    pub fn clear_number_of_leading_zeros(mut self) -> Self {
        self.number_of_leading_zeros = Update::Set(None);
        self
    }
}

impl PhoneNumber {
    /// Returns a new number with the given changes applied to a copy of this
    /// one. The receiver is left untouched.
    ///
    /// The result keeps the metadata context but none of the provenance:
    /// raw input, country code source and carrier code are not carried over,
    /// as they described how the original text was written.
    pub fn derive(&self, update: PhoneNumberUpdate) -> PhoneNumber {
        let fields = RawFields {
            country_code: Some(update.country_code.apply(self.country_code())),
            national_number: Some(update.national_number.apply(self.national_number())),
            extension: update
                .extension
                .apply(self.extension().map(str::to_owned)),
            italian_leading_zero: update
                .italian_leading_zero
                .apply(self.italian_leading_zero()),
            number_of_leading_zeros: update
                .number_of_leading_zeros
                .apply(self.number_of_leading_zeros()),
            ..Default::default()
        };
        PhoneNumber::from_raw_fields(self.util().clone(), fields)
    }
}
