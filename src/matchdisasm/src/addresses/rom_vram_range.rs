/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use super::{AddressRange, Rom, Size, Vram};

/// The rom and vram ranges spanned by one chunk of the binary.
///
/// Both ranges are expected to have the same length.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RomVramRange {
    rom: AddressRange<Rom>,
    vram: AddressRange<Vram>,
}

impl RomVramRange {
    #[must_use]
    pub fn new(rom: AddressRange<Rom>, vram: AddressRange<Vram>) -> Self {
        debug_assert!(rom.size() == vram.size());
        Self { rom, vram }
    }

    #[must_use]
    pub const fn rom(&self) -> &AddressRange<Rom> {
        &self.rom
    }

    #[must_use]
    pub const fn vram(&self) -> &AddressRange<Vram> {
        &self.vram
    }

    #[must_use]
    pub fn in_rom_range(&self, rom: Rom) -> bool {
        self.rom.in_range(rom)
    }

    #[must_use]
    pub fn in_vram_range(&self, vram: Vram) -> bool {
        self.vram.in_range(vram)
    }

    #[must_use]
    pub fn rom_from_vram(&self, vram: Vram) -> Option<Rom> {
        if self.vram.in_range(vram) {
            Some(self.rom.start() + vram.sub_vram(&self.vram.start()))
        } else {
            None
        }
    }

    #[must_use]
    pub fn vram_from_rom(&self, rom: Rom) -> Option<Vram> {
        if self.rom.in_range(rom) {
            Some(self.vram.start() + rom.sub_rom(&self.rom.start()))
        } else {
            None
        }
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.rom.size()
    }
}
