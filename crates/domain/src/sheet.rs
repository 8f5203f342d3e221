// crates/domain/src/sheet.rs
//! Sheet id extraction.
//!
//! Drawing sets carry many revisions of one logical sheet (`A101.pdf`,
//! `A101-Rev2.pdf`, ...). The sheet id is the key those revisions share.
//!
//! Grammar, matched against the start of the file stem (the name without its
//! final extension):
//!
//! ```text
//! sheet  := letter{1,3} digit body suffix?
//! body   := ( digit | "." | "-" )*
//! suffix := letter        only directly after a digit, and only when the
//!                         next character is not a letter
//! ```
//!
//! Trailing `.` and `-` are trimmed from the match and the result is
//! lowercased. A stem without a sheet-like prefix falls back to the whole
//! stem, lowercased.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use sheet_scan_shared_kernel::FileName;

static SHEET_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{1,3}[0-9][0-9.\-]*").expect("sheet prefix pattern compiles"));

/// Lowercase grouping key shared by all revisions of one sheet.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct SheetId(String);

impl SheetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derives the sheet id of `file_name`. Never fails.
pub fn sheet_id(file_name: &str) -> SheetId {
    let name = FileName::from(file_name);
    let stem = name.stem();

    let Some(prefix) = SHEET_PREFIX.find(stem) else {
        return SheetId(stem.to_lowercase());
    };

    let mut end = prefix.end();
    if accepts_suffix(prefix.as_str(), &stem[end..]) {
        end += 1;
    }
    let id = stem[..end].trim_end_matches(['.', '-']);
    SheetId(id.to_lowercase())
}

fn accepts_suffix(matched: &str, rest: &str) -> bool {
    let mut rest = rest.chars();
    let follows_digit = matched.ends_with(|c: char| c.is_ascii_digit());
    let is_letter = rest.next().is_some_and(|c| c.is_ascii_alphabetic());
    let next_is_letter = rest.next().is_some_and(|c| c.is_ascii_alphabetic());
    follows_digit && is_letter && !next_is_letter
}
