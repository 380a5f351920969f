/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::string::String;
use core::fmt;

use crate::symbols::processed::NoloadSymProcessed;
use crate::symbols::Symbol;

#[derive(Debug, Clone, Hash, PartialEq, Eq, Default)]
pub struct SymNoloadDisplaySettings {
    line_end: Option<String>,
}

impl SymNoloadDisplaySettings {
    #[must_use]
    pub fn new() -> Self {
        Self { line_end: None }
    }

    pub(crate) fn line_end(&self) -> &str {
        self.line_end.as_deref().unwrap_or("\n")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SymNoloadDisplay<'sym, 'flg> {
    sym: &'sym NoloadSymProcessed,
    settings: &'flg SymNoloadDisplaySettings,
}

impl<'sym, 'flg> SymNoloadDisplay<'sym, 'flg> {
    pub(crate) fn new(
        sym: &'sym NoloadSymProcessed,
        settings: &'flg SymNoloadDisplaySettings,
    ) -> Self {
        Self { sym, settings }
    }
}

impl fmt::Display for SymNoloadDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line_end = self.settings.line_end();
        let size = self.sym.vram_range().size();

        write!(f, "glabel {}{}", self.sym.name(), line_end)?;
        write!(f, ".space 0x{:X}{}", size.inner(), line_end)
    }
}
