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

use crate::{PhoneNumber, PhoneNumberType, memo_cache::memoized};

impl PhoneNumber {
    /// The type of the number according to the numbering plan of its
    /// country. Asked of the engine once per instance.
    pub fn number_type(&self) -> PhoneNumberType {
        *memoized(&self.cache.number_type, || {
            self.engine().classify_raw(self.raw())
        })
    }

    pub fn is_fixed_line(&self) -> bool {
        self.number_type() == PhoneNumberType::FixedLine
    }

    pub fn is_mobile(&self) -> bool {
        self.number_type() == PhoneNumberType::Mobile
    }

    /// True only for the combined type used where the two kinds cannot be
    /// told apart, not for plain fixed-line or mobile numbers.
    pub fn is_fixed_line_or_mobile(&self) -> bool {
        self.number_type() == PhoneNumberType::FixedLineOrMobile
    }

    pub fn is_toll_free(&self) -> bool {
        self.number_type() == PhoneNumberType::TollFree
    }

    pub fn is_premium_rate(&self) -> bool {
        self.number_type() == PhoneNumberType::PremiumRate
    }

    pub fn is_shared_cost(&self) -> bool {
        self.number_type() == PhoneNumberType::SharedCost
    }

    pub fn is_voip(&self) -> bool {
        self.number_type() == PhoneNumberType::VoIP
    }

    pub fn is_personal_number(&self) -> bool {
        self.number_type() == PhoneNumberType::PersonalNumber
    }

    pub fn is_pager(&self) -> bool {
        self.number_type() == PhoneNumberType::Pager
    }

    pub fn is_uan(&self) -> bool {
        self.number_type() == PhoneNumberType::UAN
    }

    pub fn is_voicemail(&self) -> bool {
        self.number_type() == PhoneNumberType::VoiceMail
    }

    /// Checks the length of the number only, which is much faster than full
    /// validation.
    pub fn is_possible(&self) -> bool {
        *memoized(&self.cache.possible, || self.engine().is_possible_raw(self.raw()))
    }

    /// Validates the number against the region it belongs to, or against its
    /// country calling code when no region can be determined.
    pub fn is_valid(&self) -> bool {
        *memoized(&self.cache.valid, || {
            self.engine().is_valid_raw(self.raw(), self.region_code())
        })
    }

    /// Whether the number belongs to the North American Numbering Plan.
    pub fn is_nanpa_country(&self) -> bool {
        self.region_code()
            .is_some_and(|region| self.engine().is_nanpa_region(region))
    }
}
