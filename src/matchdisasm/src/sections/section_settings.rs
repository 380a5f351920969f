/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use crate::analysis::StringGuesserLevel;
use crate::config::Compiler;
use crate::isa::InstructionFlags;
use crate::str_decoding::Encoding;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExecutableSectionSettings {
    compiler: Option<Compiler>,
    instruction_flags: InstructionFlags,
    is_handwritten: bool,

    /// Merge the redundant unreferenced `jr $ra; nop` pairs IDO generates at
    /// the end of functions when compiling with `-g` back into the previous
    /// function.
    detect_redundant_end: bool,
}

impl ExecutableSectionSettings {
    #[must_use]
    pub fn new(compiler: Option<Compiler>, instruction_flags: InstructionFlags) -> Self {
        Self {
            compiler,
            instruction_flags,
            is_handwritten: false,
            detect_redundant_end: false,
        }
    }

    #[must_use]
    pub const fn compiler(&self) -> Option<Compiler> {
        self.compiler
    }
    #[must_use]
    pub const fn instruction_flags(&self) -> InstructionFlags {
        self.instruction_flags
    }
    #[must_use]
    pub const fn is_handwritten(&self) -> bool {
        self.is_handwritten
    }
    #[must_use]
    pub fn detect_redundant_end(&self) -> bool {
        self.compiler == Some(Compiler::IDO) && self.detect_redundant_end
    }

    pub fn set_is_handwritten(&mut self, is_handwritten: bool) {
        self.is_handwritten = is_handwritten;
    }
    pub fn set_detect_redundant_end(&mut self, detect_redundant_end: bool) {
        self.detect_redundant_end = detect_redundant_end;
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DataSectionSettings {
    compiler: Option<Compiler>,
    string_guesser_level: StringGuesserLevel,
    encoding: Encoding,
}

impl DataSectionSettings {
    #[must_use]
    pub fn new(compiler: Option<Compiler>) -> Self {
        Self {
            compiler,
            string_guesser_level: StringGuesserLevel::default(),
            encoding: Encoding::default(),
        }
    }

    #[must_use]
    pub const fn compiler(&self) -> Option<Compiler> {
        self.compiler
    }

    #[must_use]
    pub const fn string_guesser_level(&self) -> StringGuesserLevel {
        self.string_guesser_level
    }
    pub fn set_string_guesser_level(&mut self, string_guesser_level: StringGuesserLevel) {
        self.string_guesser_level = string_guesser_level;
    }
    #[must_use]
    pub fn with_string_guesser_level(self, string_guesser_level: StringGuesserLevel) -> Self {
        Self {
            string_guesser_level,
            ..self
        }
    }

    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }
    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.encoding = encoding;
    }
    #[must_use]
    pub fn with_encoding(self, encoding: Encoding) -> Self {
        Self { encoding, ..self }
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct NoloadSectionSettings {
    compiler: Option<Compiler>,
}

impl NoloadSectionSettings {
    #[must_use]
    pub fn new(compiler: Option<Compiler>) -> Self {
        Self { compiler }
    }

    #[must_use]
    pub const fn compiler(&self) -> Option<Compiler> {
        self.compiler
    }
}
