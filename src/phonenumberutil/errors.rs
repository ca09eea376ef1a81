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

use thiserror::Error;

use crate::interfaces::FailureCode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid country code: {0}")]
    InvalidCountryCode(String), // INVALID_COUNTRY_CODE in the java version.
    #[error("Not a number: {0}")]
    NotANumber(String),
    #[error("Too long: {0}")]
    TooLong(String), // TOO_LONG in the java version.
    #[error("{0}")]
    TooShort(#[from] TooShortError),
    /// The engine reported a failure code outside the known set. This is an
    /// integration defect, never a problem with the caller's input.
    #[error("Unclassified engine failure: {0}")]
    Unclassified(FailureCode),
}

/// Refinements of a number that has too few digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TooShortError {
    #[error("Too short after idd: {0}")]
    AfterIdd(String),
    #[error("Too short nsn: {0}")]
    Nsn(String),
}

impl From<FailureCode> for ParseError {
    fn from(failure: FailureCode) -> Self {
        ParseError::from_failure(failure)
    }
}

impl ParseError {
    /// Maps an engine failure onto the taxonomy. Codes outside the fixed set
    /// are kept unchanged in [`ParseError::Unclassified`].
    pub fn from_failure(failure: FailureCode) -> Self {
        let FailureCode { code, message } = failure;
        match code {
            FailureCode::INVALID_COUNTRY_CODE => ParseError::InvalidCountryCode(message),
            FailureCode::NOT_A_NUMBER => ParseError::NotANumber(message),
            FailureCode::TOO_SHORT_AFTER_IDD => TooShortError::AfterIdd(message).into(),
            FailureCode::TOO_SHORT_NSN => TooShortError::Nsn(message).into(),
            FailureCode::TOO_LONG => ParseError::TooLong(message),
            _ => ParseError::Unclassified(FailureCode { code, message }),
        }
    }

    /// The diagnostic message reported by the engine.
    pub fn message(&self) -> &str {
        match self {
            ParseError::InvalidCountryCode(message)
            | ParseError::NotANumber(message)
            | ParseError::TooLong(message)
            | ParseError::TooShort(TooShortError::AfterIdd(message))
            | ParseError::TooShort(TooShortError::Nsn(message)) => message,
            ParseError::Unclassified(failure) => &failure.message,
        }
    }

    pub fn is_too_short(&self) -> bool {
        matches!(self, ParseError::TooShort(_))
    }

    /// `false` only for failures that signal an engine contract change.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, ParseError::Unclassified(_))
    }

    /// Returns the error if it describes bad input.
    ///
    /// # Panics
    /// Panics on [`ParseError::Unclassified`]: the engine broke its contract
    /// and this indicates a library bug.
    pub fn into_user_error(self) -> ParseError {
        match self {
            ParseError::Unclassified(failure) => {
                panic!("A known failure code is expected from the metadata engine; this indicates a library bug! {}", failure)
            }
            err => err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_are_mapped() {
        let cases = [
            (FailureCode::INVALID_COUNTRY_CODE, ParseError::InvalidCountryCode("m".into())),
            (FailureCode::NOT_A_NUMBER, ParseError::NotANumber("m".into())),
            (FailureCode::TOO_SHORT_AFTER_IDD, TooShortError::AfterIdd("m".into()).into()),
            (FailureCode::TOO_SHORT_NSN, TooShortError::Nsn("m".into()).into()),
            (FailureCode::TOO_LONG, ParseError::TooLong("m".into())),
        ];
        for (code, expected) in cases {
            let err = ParseError::from_failure(FailureCode::new(code, "m"));
            assert_eq!(err, expected);
            assert!(err.is_user_error());
            assert_eq!(err.message(), "m");
        }
    }

    #[test]
    fn unknown_code_is_kept_unchanged() {
        let failure = FailureCode::new(42, "engine changed");
        let err = ParseError::from_failure(failure.clone());
        assert_eq!(err, ParseError::Unclassified(failure));
        assert!(!err.is_user_error());
        assert!(!err.is_too_short());
        assert_eq!(err.message(), "engine changed");
    }

    #[test]
    fn too_short_is_one_kind_with_two_refinements() {
        let after_idd = ParseError::from_failure(FailureCode::new(FailureCode::TOO_SHORT_AFTER_IDD, "a"));
        let nsn = ParseError::from_failure(FailureCode::new(FailureCode::TOO_SHORT_NSN, "b"));
        assert!(after_idd.is_too_short());
        assert!(nsn.is_too_short());
        assert!(matches!(nsn, ParseError::TooShort(TooShortError::Nsn(_))));
    }

    #[test]
    #[should_panic(expected = "library bug")]
    fn unclassified_is_not_a_user_error() {
        ParseError::Unclassified(FailureCode::new(99, "boom")).into_user_error();
    }
}
