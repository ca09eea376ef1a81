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

use crate::{PhoneNumber, PhoneNumberFormat, memo_cache::memoized};

impl PhoneNumber {
    /// Formats the number in the requested format. Each format is produced
    /// by the engine once per instance.
    pub fn format(&self, format: PhoneNumberFormat) -> &str {
        memoized(&self.cache.formats[format.slot()], || {
            self.engine().format_raw(self.raw(), format)
        })
        .as_str()
    }

    /// E.g. `+12015550123`.
    pub fn to_e164(&self) -> &str {
        self.format(PhoneNumberFormat::E164)
    }

    /// E.g. `+1 201-555-0123`.
    pub fn to_international(&self) -> &str {
        self.format(PhoneNumberFormat::International)
    }

    /// E.g. `(201) 555-0123`.
    pub fn to_national(&self) -> &str {
        self.format(PhoneNumberFormat::National)
    }

    /// E.g. `tel:+1-201-555-0123`.
    pub fn to_rfc3966(&self) -> &str {
        self.format(PhoneNumberFormat::RFC3966)
    }
}
