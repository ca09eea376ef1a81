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

use std::borrow::Cow;

use crate::{PhoneNumber, interfaces::RawFields};

/// Either operand accepted by matching and the convenience functions of
/// [`PhoneNumberUtil`](crate::PhoneNumberUtil): an already parsed number or
/// text that still needs parsing.
#[derive(Debug, Clone, Copy)]
pub enum NumberInput<'a> {
    Number(&'a PhoneNumber),
    Text(&'a str),
}

impl<'a> From<&'a PhoneNumber> for NumberInput<'a> {
    fn from(number: &'a PhoneNumber) -> Self {
        NumberInput::Number(number)
    }
}

impl<'a> From<&'a str> for NumberInput<'a> {
    fn from(text: &'a str) -> Self {
        NumberInput::Text(text)
    }
}

impl<'a> From<&'a String> for NumberInput<'a> {
    fn from(text: &'a String) -> Self {
        NumberInput::Text(text.as_str())
    }
}

/// The fields that identify a subscriber, without any of the context in
/// which the number was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CoreFields<'a> {
    pub country_code: u32,
    pub national_number: u64,
    pub extension: Option<Cow<'a, str>>,
    pub number_of_leading_zeros: Option<u32>,
}

impl<'a> CoreFields<'a> {
    pub fn new(fields: &'a RawFields) -> Self {
        Self {
            country_code: fields.country_code.unwrap_or(0),
            national_number: fields.national_number.unwrap_or(0),
            extension: fields
                .extension
                .as_deref()
                .filter(|extension| !extension.is_empty())
                .map(Cow::Borrowed),
            // This field is only relevant if there are leading zeros at all.
            number_of_leading_zeros: fields
                .italian_leading_zero
                .then(|| fields.number_of_leading_zeros.unwrap_or(1)),
        }
    }
}
