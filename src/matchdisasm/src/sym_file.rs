/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

//! Line-oriented symbol table persistence.
//!
//! The core itself keeps no state between runs; drivers may serialize the
//! symbol list with this format and feed it back as user symbols on the next
//! run. One line per symbol, `#` comments allowed:
//!
//! ```text
//! # name,vram,type,size,segment
//! func_80000400,80000400,func,,text
//! D_80001000,80001000,u32,4,data
//! ```

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::{error, fmt};

use crate::addresses::{Size, Vram};
use crate::metadata::SymbolType;
use crate::section_type::SectionType;

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct SymFileEntry {
    pub name: String,
    pub vram: Vram,
    pub sym_type: Option<SymbolType>,
    pub size: Option<Size>,
    pub section: Option<SectionType>,
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum SymFileParseError {
    MissingField { line_number: usize, field: &'static str },
    InvalidVram { line_number: usize },
    InvalidType { line_number: usize },
    InvalidSize { line_number: usize },
    InvalidSection { line_number: usize },
}

impl fmt::Display for SymFileParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymFileParseError::MissingField { line_number, field } => {
                write!(f, "Line {}: missing field '{}'", line_number, field)
            }
            SymFileParseError::InvalidVram { line_number } => {
                write!(f, "Line {}: vram is not a hex address", line_number)
            }
            SymFileParseError::InvalidType { line_number } => {
                write!(f, "Line {}: unknown symbol type", line_number)
            }
            SymFileParseError::InvalidSize { line_number } => {
                write!(f, "Line {}: size is not a hex number", line_number)
            }
            SymFileParseError::InvalidSection { line_number } => {
                write!(f, "Line {}: unknown section", line_number)
            }
        }
    }
}
impl error::Error for SymFileParseError {}

/// Parse the whole symbols file.
///
/// Empty lines and `#` comments are skipped; a `#` may also trail a symbol
/// line.
pub fn parse(text: &str) -> Result<Vec<SymFileEntry>, SymFileParseError> {
    let mut entries = Vec::new();

    for (line_index, line) in text.lines().enumerate() {
        let line_number = line_index + 1;
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(',').map(str::trim);

        let name = fields
            .next()
            .filter(|x| !x.is_empty())
            .ok_or(SymFileParseError::MissingField {
                line_number,
                field: "name",
            })?
            .to_string();

        let vram_text = fields.next().filter(|x| !x.is_empty()).ok_or(
            SymFileParseError::MissingField {
                line_number,
                field: "vram",
            },
        )?;
        let vram_text = vram_text.trim_start_matches("0x");
        let vram = u32::from_str_radix(vram_text, 16)
            .map(Vram::new)
            .map_err(|_| SymFileParseError::InvalidVram { line_number })?;

        let sym_type = match fields.next().map(str::trim).filter(|x| !x.is_empty()) {
            None => None,
            Some(type_text) => Some(
                SymbolType::from_name(type_text)
                    .ok_or(SymFileParseError::InvalidType { line_number })?,
            ),
        };

        let size = match fields.next().map(str::trim).filter(|x| !x.is_empty()) {
            None => None,
            Some(size_text) => {
                let size_text = size_text.trim_start_matches("0x");
                Some(
                    u32::from_str_radix(size_text, 16)
                        .map(Size::new)
                        .map_err(|_| SymFileParseError::InvalidSize { line_number })?,
                )
            }
        };

        let section = match fields.next().map(str::trim).filter(|x| !x.is_empty()) {
            None => None,
            Some(section_text) => Some(
                SectionType::from_name(section_text)
                    .ok_or(SymFileParseError::InvalidSection { line_number })?,
            ),
        };

        entries.push(SymFileEntry {
            name,
            vram,
            sym_type,
            size,
            section,
        });
    }

    Ok(entries)
}

/// Serialize entries back into the same format [`parse`] reads.
pub fn write(entries: &[SymFileEntry]) -> String {
    let mut out = String::from("# name,vram,type,size,segment\n");

    for entry in entries {
        out.push_str(&entry.name);
        out.push(',');
        out.push_str(&format!("{:08X}", entry.vram.inner()));
        out.push(',');
        if let Some(sym_type) = entry.sym_type {
            out.push_str(sym_type.name());
        }
        out.push(',');
        if let Some(size) = entry.size {
            out.push_str(&format!("0x{:X}", size.inner()));
        }
        out.push(',');
        if let Some(section) = entry.section {
            out.push_str(section.as_str().trim_start_matches('.'));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_file() {
        let text = "\
# a comment
func_80000400,80000400,func,,text

D_80001000,0x80001000,u32,4,data # trailing comment
STR_80010000,80010000,asciz,,rodata
";

        let entries = parse(text).unwrap();
        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0].name, "func_80000400");
        assert_eq!(entries[0].vram, Vram::new(0x80000400));
        assert_eq!(entries[0].sym_type, Some(SymbolType::Function));
        assert_eq!(entries[0].size, None);
        assert_eq!(entries[0].section, Some(SectionType::Text));

        assert_eq!(entries[1].size, Some(Size::new(4)));
        assert_eq!(entries[2].sym_type, Some(SymbolType::CString));
    }

    #[test]
    fn rejects_bad_vram() {
        assert_eq!(
            parse("some_sym,not_hex"),
            Err(SymFileParseError::InvalidVram { line_number: 1 })
        );
    }

    #[test]
    fn round_trips() {
        let entries = vec![SymFileEntry {
            name: "func_80000400".into(),
            vram: Vram::new(0x80000400),
            sym_type: Some(SymbolType::Function),
            size: Some(Size::new(0x20)),
            section: Some(SectionType::Text),
        }];

        let text = write(&entries);
        assert_eq!(parse(&text).unwrap(), entries);
    }
}
