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

/**
 * Compiles the `prefix|description` tables under /resources into static
 * Rust slices, the same line format libphonenumber uses for its carrier,
 * geocoding and timezone data.
 */

use std::{
    collections::BTreeMap,
    env,
    fmt::Write as _,
    fs::{self, File},
    io::{BufRead, BufReader},
    num::ParseIntError,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Error)]
enum BuildError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("Line {line_num} of {path} is too long (max is {max_len} bytes)")]
    LineTooLong {
        path: String,
        line_num: usize,
        max_len: usize,
    },

    #[error("Failed to parse prefix '{prefix}' in {path}: {source}")]
    PrefixParseError {
        path: String,
        prefix: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("Failed to write generated code: {0}")]
    Fmt(#[from] std::fmt::Error),
}

const MAX_LINE_LENGTH: usize = 2 * 1024;

/// Reads `key|description` lines, skipping blanks and `#` comments.
fn parse_entries(path: &Path) -> Result<BTreeMap<String, String>, BuildError> {
    let mut entries = BTreeMap::new();

    let input = File::open(path)?;
    let mut reader = BufReader::new(input);
    let mut line_buffer = String::with_capacity(MAX_LINE_LENGTH);
    let mut line_number = 0;

    loop {
        line_number += 1;
        line_buffer.clear();

        let bytes_read = reader.read_line(&mut line_buffer)?;
        if bytes_read == 0 {
            break;
        }

        if bytes_read > MAX_LINE_LENGTH {
            return Err(BuildError::LineTooLong {
                path: path.display().to_string(),
                line_num: line_number,
                max_len: MAX_LINE_LENGTH,
            });
        }

        let line = line_buffer.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, desc)) = line.split_once('|') {
            if key.is_empty() {
                continue;
            }
            entries.insert(key.to_string(), desc.to_string());
        }
    }

    Ok(entries)
}

fn parse_prefixes(path: &Path) -> Result<BTreeMap<u64, String>, BuildError> {
    let mut prefixes = BTreeMap::new();
    for (prefix_str, desc) in parse_entries(path)? {
        let prefix_code = prefix_str.parse().map_err(|e| BuildError::PrefixParseError {
            path: path.display().to_string(),
            prefix: prefix_str.clone(),
            source: e,
        })?;
        prefixes.insert(prefix_code, desc);
    }
    Ok(prefixes)
}

/// Lists `<lang>.txt` files of a table directory sorted by language.
fn language_files(dir: &Path) -> Result<Vec<(String, PathBuf)>, BuildError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "txt") {
            if let Some(lang) = path.file_stem().and_then(|s| s.to_str()) {
                files.push((lang.to_string(), path.clone()));
            }
        }
    }
    files.sort();
    Ok(files)
}

fn write_prefix_data(out: &mut String, prefixes: &BTreeMap<u64, String>) -> Result<(), BuildError> {
    let longest_prefix = prefixes
        .keys()
        .map(|prefix| prefix.to_string().len())
        .max()
        .unwrap_or(0);
    writeln!(out, "PrefixData {{")?;
    writeln!(out, "    longest_prefix: {longest_prefix},")?;
    writeln!(out, "    entries: &[")?;
    for (prefix, desc) in prefixes {
        writeln!(out, "        ({prefix}, {desc:?}),")?;
    }
    write!(out, "    ],\n}}")?;
    Ok(())
}

fn write_localized_prefix_tables(
    out: &mut String,
    name: &str,
    dir: &Path,
) -> Result<(), BuildError> {
    writeln!(out, "pub static {name}: &[(&str, PrefixData)] = &[")?;
    for (lang, path) in language_files(dir)? {
        let prefixes = parse_prefixes(&path)?;
        write!(out, "    ({lang:?}, ")?;
        write_prefix_data(out, &prefixes)?;
        writeln!(out, "),")?;
    }
    writeln!(out, "];\n")?;
    Ok(())
}

fn write_region_name_tables(out: &mut String, name: &str, dir: &Path) -> Result<(), BuildError> {
    writeln!(out, "pub static {name}: &[(&str, &[(&str, &str)])] = &[")?;
    for (lang, path) in language_files(dir)? {
        writeln!(out, "    ({lang:?}, &[")?;
        for (region, desc) in parse_entries(&path)? {
            writeln!(out, "        ({region:?}, {desc:?}),")?;
        }
        writeln!(out, "    ]),")?;
    }
    writeln!(out, "];\n")?;
    Ok(())
}

fn main() -> Result<(), BuildError> {
    let resources = Path::new("resources");
    println!("cargo:rerun-if-changed=resources");

    let mut out = String::new();
    writeln!(out, "// @generated by build/rust_build.rs from /resources\n")?;

    let timezones = parse_prefixes(&resources.join("timezones").join("map_data.txt"))?;
    write!(out, "pub static TIMEZONES: PrefixData = ")?;
    write_prefix_data(&mut out, &timezones)?;
    writeln!(out, ";\n")?;

    write_localized_prefix_tables(&mut out, "CARRIERS", &resources.join("carrier"))?;
    write_localized_prefix_tables(&mut out, "GEOCODING", &resources.join("geocoding"))?;
    write_region_name_tables(&mut out, "COUNTRY_NAMES", &resources.join("countries"))?;

    let out_dir = env::var("OUT_DIR").map_err(|_| BuildError::MissingEnv("OUT_DIR"))?;
    fs::write(Path::new(&out_dir).join("prefix_tables.rs"), out)?;
    Ok(())
}
