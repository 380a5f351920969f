/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::string::String;
use core::fmt;

use crate::addresses::Size;
use crate::metadata::SymbolType;
use crate::symbols::processed::DataSymProcessed;
use crate::symbols::RomSymbol;

#[derive(Debug, Clone, Hash, PartialEq, Eq, Default)]
pub struct SymDataDisplaySettings {
    line_end: Option<String>,
}

impl SymDataDisplaySettings {
    #[must_use]
    pub fn new() -> Self {
        Self { line_end: None }
    }

    pub(crate) fn line_end(&self) -> &str {
        self.line_end.as_deref().unwrap_or("\n")
    }
}

/// Renders one data symbol with directives matching its inferred type.
#[derive(Debug, Clone, Copy)]
pub struct SymDataDisplay<'sym, 'flg> {
    sym: &'sym DataSymProcessed,
    settings: &'flg SymDataDisplaySettings,
}

impl<'sym, 'flg> SymDataDisplay<'sym, 'flg> {
    pub(crate) fn new(sym: &'sym DataSymProcessed, settings: &'flg SymDataDisplaySettings) -> Self {
        Self { sym, settings }
    }

    fn fmt_c_string(&self, f: &mut fmt::Formatter<'_>) -> Option<fmt::Result> {
        let bytes = self.sym.raw_bytes();
        let line_end = self.settings.line_end();

        let terminator = bytes.iter().position(|x| *x == 0)?;
        // Padding must be NUL all the way up to the next word boundary for
        // `.balign` to reproduce the original bytes.
        if bytes[terminator..].iter().any(|x| *x != 0) {
            return None;
        }

        let escaped = self.sym.encoding().decode_escaped(&bytes[..terminator]).ok()?;

        Some(write!(
            f,
            ".asciz \"{}\"{}.balign 4{}",
            escaped, line_end, line_end
        ))
    }

    fn fmt_floats(&self, f: &mut fmt::Formatter<'_>) -> Option<fmt::Result> {
        let bytes = self.sym.raw_bytes();
        let line_end = self.settings.line_end();

        if bytes.len() % 4 != 0 {
            return None;
        }

        let mut lines = String::new();
        for word_bytes in bytes.chunks_exact(4) {
            let word = self.sym.endian().word_from_bytes(word_bytes);
            let value = f32::from_bits(word);
            if !value.is_finite() || (value != 0.0 && !value.is_normal()) {
                return None;
            }
            lines.push_str(&format!(".float {:?}{}", value, line_end));
        }

        Some(write!(f, "{}", lines))
    }

    fn fmt_doubles(&self, f: &mut fmt::Formatter<'_>) -> Option<fmt::Result> {
        let bytes = self.sym.raw_bytes();
        let line_end = self.settings.line_end();

        if bytes.len() % 8 != 0 {
            return None;
        }

        let mut lines = String::new();
        for dword_bytes in bytes.chunks_exact(8) {
            let dword = self.sym.endian().dword_from_bytes(dword_bytes);
            let value = f64::from_bits(dword);
            if !value.is_finite() || (value != 0.0 && !value.is_normal()) {
                return None;
            }
            lines.push_str(&format!(".double {:?}{}", value, line_end));
        }

        Some(write!(f, "{}", lines))
    }

    fn fmt_words(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.sym.raw_bytes();
        let line_end = self.settings.line_end();
        let rom_start = self.sym.rom_vram_range().rom().start();

        let word_chunks = bytes.chunks_exact(4);
        let remainder = word_chunks.remainder();

        for (i, word_bytes) in word_chunks.enumerate() {
            let word_rom = rom_start + Size::new(i as u32 * 4);

            if let Some(reloc) = self.sym.word_relocs().get(&word_rom) {
                write!(f, ".word {}{}", reloc.display_str(), line_end)?;
            } else {
                let word = self.sym.endian().word_from_bytes(word_bytes);
                write!(f, ".word 0x{:08X}{}", word, line_end)?;
            }
        }

        for byte in remainder {
            write!(f, ".byte 0x{:02X}{}", byte, line_end)?;
        }

        Ok(())
    }

    fn fmt_shorts(&self, f: &mut fmt::Formatter<'_>) -> Option<fmt::Result> {
        let bytes = self.sym.raw_bytes();
        let line_end = self.settings.line_end();

        if bytes.len() % 2 != 0 {
            return None;
        }

        let mut lines = String::new();
        for short_bytes in bytes.chunks_exact(2) {
            let value = self.sym.endian().short_from_bytes(short_bytes);
            lines.push_str(&format!(".short 0x{:04X}{}", value, line_end));
        }

        Some(write!(f, "{}", lines))
    }

    fn fmt_bytes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line_end = self.settings.line_end();

        for byte in self.sym.raw_bytes() {
            write!(f, ".byte 0x{:02X}{}", byte, line_end)?;
        }
        Ok(())
    }
}

impl fmt::Display for SymDataDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line_end = self.settings.line_end();

        write!(f, "glabel {}{}", self.sym.name(), line_end)?;

        // Typed renderings fall back to raw words whenever the bytes don't
        // satisfy the type's constraints, keeping the output matching.
        match self.sym.sym_type() {
            Some(SymbolType::CString) => match self.fmt_c_string(f) {
                Some(result) => result,
                None => self.fmt_words(f),
            },
            Some(SymbolType::Float32) => match self.fmt_floats(f) {
                Some(result) => result,
                None => self.fmt_words(f),
            },
            Some(SymbolType::Float64) => match self.fmt_doubles(f) {
                Some(result) => result,
                None => self.fmt_words(f),
            },
            Some(SymbolType::Short) => match self.fmt_shorts(f) {
                Some(result) => result,
                None => self.fmt_words(f),
            },
            Some(SymbolType::Byte) => self.fmt_bytes(f),
            _ => self.fmt_words(f),
        }
    }
}
