/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::fmt;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum SectionType {
    Text = 1,
    Data,
    Rodata,
    Bss,
}

impl SectionType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SectionType::Text => ".text",
            SectionType::Data => ".data",
            SectionType::Rodata => ".rodata",
            SectionType::Bss => ".bss",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            ".text" | "text" => Some(SectionType::Text),
            ".data" | "data" => Some(SectionType::Data),
            ".rodata" | "rodata" => Some(SectionType::Rodata),
            ".bss" | "bss" => Some(SectionType::Bss),
            _ => None,
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
