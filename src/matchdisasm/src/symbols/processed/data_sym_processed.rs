/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{collections::btree_map::BTreeMap, sync::Arc};
use core::hash;

use crate::addresses::{AddressRange, Rom, RomVramRange, Size, Vram};
use crate::collections::addended_ordered_map::FindSettings;
use crate::config::Endian;
use crate::context::Context;
use crate::metadata::SymbolType;
use crate::parent_segment_info::ParentSegmentInfo;
use crate::relocation::{RelocReferencedSym, RelocationInfo, RelocationType};
use crate::section_type::SectionType;
use crate::str_decoding::Encoding;
use crate::symbols::display::{SymDataDisplay, SymDataDisplaySettings};
use crate::symbols::{RomSymbol, Symbol, SymbolPostProcessError};

/// A data symbol ready for emission: typed, named, with pointer words
/// resolved.
#[derive(Debug, Clone)]
pub struct DataSymProcessed {
    ranges: RomVramRange,
    raw_bytes: Arc<[u8]>,
    parent_segment_info: ParentSegmentInfo,
    section_type: SectionType,

    name: Arc<str>,
    sym_type: Option<SymbolType>,
    /// Pointer rewrites for `.word` emission, keyed by word rom.
    word_relocs: BTreeMap<Rom, RelocationInfo>,
    encoding: Encoding,
    endian: Endian,
}

impl DataSymProcessed {
    pub(crate) fn new(
        context: &mut Context,
        ranges: RomVramRange,
        raw_bytes: Arc<[u8]>,
        parent_segment_info: ParentSegmentInfo,
        section_type: SectionType,
        encoding: Encoding,
    ) -> Result<Self, SymbolPostProcessError> {
        let name_settings = *context.global_config().name_generation();
        let endian = context.global_config().endian();
        let vram = ranges.vram().start();

        let (name, sym_type) = {
            let owned_segment = context.find_owned_segment(&parent_segment_info)?;
            let metadata = owned_segment
                .find_symbol(vram, FindSettings::new(false))
                .expect("The symbol was registered during section analysis");
            (
                Arc::from(metadata.display_name(&name_settings)),
                metadata.sym_type(),
            )
        };

        let mut word_relocs = BTreeMap::new();
        let words_may_be_pointers = match sym_type {
            Some(sym_type) => sym_type.can_reference_symbols(),
            None => true,
        };
        if words_may_be_pointers && vram.inner() % 4 == 0 {
            for (i, word_bytes) in raw_bytes.chunks_exact(4).enumerate() {
                let word_vram = Vram::new(endian.word_from_bytes(word_bytes));
                let word_rom = ranges.rom().start() + Size::new(i as u32 * 4);

                let reloc = context
                    .find_symbol_from_any_segment(
                        word_vram,
                        &parent_segment_info,
                        FindSettings::new(false),
                    )
                    .filter(|metadata| {
                        // Labels live inside an already-defined function, so
                        // they don't carry the defined flag themselves.
                        metadata.is_defined()
                            || metadata.is_user_declared()
                            || metadata
                                .sym_type()
                                .is_some_and(|sym_type| sym_type.valid_branch_target())
                    })
                    .map(|metadata| {
                        RelocationType::R_MIPS_32.new_reloc_info(RelocReferencedSym::new_name(
                            Arc::from(metadata.display_name(&name_settings)),
                            0,
                        ))
                    });

                if let Some(reloc) = reloc {
                    word_relocs.insert(word_rom, reloc);
                }
            }
        }

        Ok(Self {
            ranges,
            raw_bytes,
            parent_segment_info,
            section_type,
            name,
            sym_type,
            word_relocs,
            encoding,
            endian,
        })
    }
}

impl DataSymProcessed {
    #[must_use]
    pub fn name(&self) -> Arc<str> {
        self.name.clone()
    }

    #[must_use]
    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw_bytes
    }

    #[must_use]
    pub const fn sym_type(&self) -> Option<SymbolType> {
        self.sym_type
    }

    #[must_use]
    pub fn word_relocs(&self) -> &BTreeMap<Rom, RelocationInfo> {
        &self.word_relocs
    }

    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    #[must_use]
    pub const fn endian(&self) -> Endian {
        self.endian
    }

    #[must_use]
    pub fn display<'sym, 'flg>(
        &'sym self,
        settings: &'flg SymDataDisplaySettings,
    ) -> SymDataDisplay<'sym, 'flg> {
        SymDataDisplay::new(self, settings)
    }
}

impl Symbol for DataSymProcessed {
    fn vram_range(&self) -> &AddressRange<Vram> {
        self.ranges.vram()
    }

    fn parent_segment_info(&self) -> &ParentSegmentInfo {
        &self.parent_segment_info
    }

    fn section_type(&self) -> SectionType {
        self.section_type
    }
}
impl RomSymbol for DataSymProcessed {
    fn rom_vram_range(&self) -> &RomVramRange {
        &self.ranges
    }
}

impl hash::Hash for DataSymProcessed {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.parent_segment_info.hash(state);
        self.ranges.hash(state);
    }
}
impl PartialEq for DataSymProcessed {
    fn eq(&self, other: &Self) -> bool {
        self.parent_segment_info == other.parent_segment_info && self.ranges == other.ranges
    }
}
