/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::string::String;
use core::fmt;

use crate::addresses::Size;
use crate::isa::InstructionDisplayFlags;
use crate::symbols::processed::FunctionSymProcessed;
use crate::symbols::RomSymbol;

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct FunctionDisplaySettings {
    display_flags: InstructionDisplayFlags,
    line_end: Option<String>,
}

impl FunctionDisplaySettings {
    #[must_use]
    pub fn new(display_flags: InstructionDisplayFlags) -> Self {
        Self {
            display_flags,
            line_end: None,
        }
    }

    #[must_use]
    pub const fn display_flags(&self) -> &InstructionDisplayFlags {
        &self.display_flags
    }

    pub(crate) fn line_end(&self) -> &str {
        self.line_end.as_deref().unwrap_or("\n")
    }
}

/// Renders one function as assembly: label, branch/jumptable labels and
/// instructions with their symbolic operands.
#[derive(Debug, Clone, Copy)]
pub struct FunctionDisplay<'sym, 'flg> {
    sym: &'sym FunctionSymProcessed,
    settings: &'flg FunctionDisplaySettings,
}

impl<'sym, 'flg> FunctionDisplay<'sym, 'flg> {
    pub(crate) fn new(
        sym: &'sym FunctionSymProcessed,
        settings: &'flg FunctionDisplaySettings,
    ) -> Self {
        Self { sym, settings }
    }
}

impl fmt::Display for FunctionDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line_end = self.settings.line_end();
        let ranges = self.sym.rom_vram_range();

        write!(f, "glabel {}{}", self.sym.name(), line_end)?;

        for (index, instr) in self.sym.instructions().iter().enumerate() {
            let current_vram = ranges.vram().start() + Size::new(index as u32 * 4);
            let current_rom = ranges.rom().start() + Size::new(index as u32 * 4);

            if let Some(label) = self.sym.labels().get(&current_vram) {
                write!(f, "{}:{}", label, line_end)?;
            }

            if self.sym.skipped_instrs().contains(&index) {
                continue;
            }

            let imm_override = self
                .sym
                .relocs()
                .get(&current_rom)
                .map(|reloc| reloc.display_str());

            let display_flags = if self.sym.two_operand_divs().contains(&index) {
                self.settings.display_flags.with_two_operand_div(true)
            } else {
                self.settings.display_flags
            };

            write!(
                f,
                "    {}{}",
                instr.display(&display_flags, imm_override.as_deref(), 0),
                line_end
            )?;
        }

        Ok(())
    }
}
