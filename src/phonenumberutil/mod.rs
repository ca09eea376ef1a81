mod helper_types;
pub mod enums;
pub mod errors;
pub(crate) mod helper_constants;
pub(crate) mod helper_functions;
pub mod phonenumberutil;

pub use enums::{CountryCodeSource, MatchType, PhoneNumberFormat, PhoneNumberType};
pub use errors::{ParseError, TooShortError};
pub use helper_types::NumberInput;
pub use phonenumberutil::PhoneNumberUtil;
