//! Immutable, typed phone number values.
//!
//! Numbers are parsed through an explicit metadata context,
//! [`PhoneNumberUtil`], and then queried for their type, formats,
//! sub-components and localized names. Every derived property is computed on
//! first use and remembered by the instance.
//!
//! ```
//! use phonevalue::{MatchType, PhoneNumberType, PhoneNumberUtil};
//!
//! let util = PhoneNumberUtil::bundled();
//! let number = util.parse("+1 (201) 555-0123", None).unwrap();
//!
//! assert_eq!(number.to_national(), "(201) 555-0123");
//! assert_eq!(number.region_code(), Some("US"));
//! assert_eq!(number.national_destination_code(), "201");
//! assert_eq!(number.subscriber_number(), "5550123");
//! assert_eq!(number.match_with("+12015550123"), MatchType::ExactMatch);
//!
//! let toll_free = util.parse("+1 (800) 234-5678", None).unwrap();
//! assert_eq!(toll_free.number_type(), PhoneNumberType::TollFree);
//! ```

mod engine;
mod generated;
mod memo_cache;
mod phone_number;
mod phonenumberutil;
mod regexp_cache;
pub mod i18n;
pub mod interfaces;

pub use engine::BundledEngine;
pub use interfaces::{FailureCode, MetadataEngine, RawFields};
pub use phone_number::{
    PhoneNumber, PhoneNumberFields, PhoneNumberTuple, PhoneNumberUpdate, Update,
};
pub use phonenumberutil::{
    CountryCodeSource, MatchType, NumberInput, ParseError, PhoneNumberFormat, PhoneNumberType,
    PhoneNumberUtil, TooShortError,
};

#[cfg(test)]
mod tests;
