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

//! Prefix tables compiled by `build/rust_build.rs` from `/resources`.

/// Descriptions keyed by the leading digits of an E.164 number, sorted by
/// prefix.
#[derive(Debug)]
pub struct PrefixData {
    /// Number of digits of the longest prefix in `entries`.
    pub longest_prefix: usize,
    pub entries: &'static [(u64, &'static str)],
}

include!(concat!(env!("OUT_DIR"), "/prefix_tables.rs"));
