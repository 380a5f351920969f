/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{sync::Arc, vec::Vec};
use core::hash;

use crate::addresses::{AddressRange, Rom, RomVramRange, Size, Vram};
use crate::config::Compiler;
use crate::context::{Context, Diagnostic};
use crate::metadata::{GeneratedBy, ParentSectionMetadata, SymbolType};
use crate::parent_segment_info::ParentSegmentInfo;
use crate::section_type::SectionType;
use crate::str_decoding::Encoding;
use crate::symbols::processed::DataSymProcessed;
use crate::symbols::{RomSymbol, Symbol, SymbolCreationError, SymbolPostProcessError};

/// One data/rodata symbol and the bytes it owns.
#[derive(Debug, Clone)]
pub struct DataSym {
    ranges: RomVramRange,
    raw_bytes: Arc<[u8]>,
    parent_segment_info: ParentSegmentInfo,
    section_type: SectionType,
    encoding: Encoding,
}

impl DataSym {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        context: &mut Context,
        raw_bytes: Arc<[u8]>,
        rom: Rom,
        vram: Vram,
        parent_segment_info: ParentSegmentInfo,
        section_type: SectionType,
        properties: DataSymProperties,
    ) -> Result<Self, SymbolCreationError> {
        let size = Size::new(raw_bytes.len() as u32);
        let rom_range = AddressRange::new(rom, rom + size);
        let vram_range = AddressRange::new(vram, vram + size);
        let ranges = RomVramRange::new(rom_range, vram_range);

        let encoding = properties.encoding;
        let detected_type = properties.detected_type;

        let type_conflict = {
            let owned_segment = context.find_owned_segment_mut(&parent_segment_info)?;
            let metadata = owned_segment.add_symbol(vram, GeneratedBy::Autogenerated, false);

            metadata.update_rom(Some(rom));
            metadata.set_defined();
            metadata.update_section_type(Some(section_type));
            metadata.set_autodetected_size(size);
            properties.apply_to_metadata(metadata);

            match detected_type {
                Some(detected_type) if !metadata.try_promote_type(detected_type) => metadata
                    .sym_type()
                    .map(|existing| Diagnostic::TypeConflict {
                        vram,
                        existing,
                        attempted: detected_type,
                    }),
                _ => None,
            }
        };
        if let Some(diagnostic) = type_conflict {
            context.add_diagnostic(diagnostic);
        }

        let slf = Self {
            ranges,
            raw_bytes,
            parent_segment_info,
            section_type,
            encoding,
        };

        slf.process_jumptable(context)?;

        Ok(slf)
    }

    /// A jumptable's entries are labels into its owner function.
    fn process_jumptable(&self, context: &mut Context) -> Result<(), SymbolCreationError> {
        let endian = context.global_config().endian();
        let vram = self.ranges.vram().start();

        let is_jumptable = {
            let owned_segment = context.find_owned_segment(&self.parent_segment_info)?;
            owned_segment
                .find_symbol(
                    vram,
                    crate::collections::addended_ordered_map::FindSettings::new(false),
                )
                .is_some_and(|x| x.sym_type() == Some(SymbolType::Jumptable))
        };
        if !is_jumptable {
            return Ok(());
        }

        let targets: Vec<Vram> = self
            .raw_bytes
            .chunks_exact(4)
            .map(|word_bytes| Vram::new(endian.word_from_bytes(word_bytes)))
            .collect();

        for target in &targets {
            if let Some(segment) =
                context.find_referenced_segment_mut(*target, &self.parent_segment_info)
            {
                segment.add_jumptable_label(*target, None, GeneratedBy::Autogenerated);
            }
        }

        let owned_segment = context.find_owned_segment_mut(&self.parent_segment_info)?;
        if let Some(metadata) = owned_segment.find_symbol_mut(
            vram,
            crate::collections::addended_ordered_map::FindSettings::new(false),
        ) {
            for target in targets {
                metadata.add_table_label(target);
            }
        }

        Ok(())
    }
}

impl DataSym {
    #[must_use]
    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw_bytes
    }

    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub(crate) fn post_process(
        self,
        context: &mut Context,
    ) -> Result<DataSymProcessed, SymbolPostProcessError> {
        DataSymProcessed::new(
            context,
            self.ranges,
            self.raw_bytes,
            self.parent_segment_info,
            self.section_type,
            self.encoding,
        )
    }
}

impl Symbol for DataSym {
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
impl RomSymbol for DataSym {
    fn rom_vram_range(&self) -> &RomVramRange {
        &self.ranges
    }
}

impl hash::Hash for DataSym {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.parent_segment_info.hash(state);
        self.ranges.hash(state);
    }
}
impl PartialEq for DataSym {
    fn eq(&self, other: &Self) -> bool {
        self.parent_segment_info == other.parent_segment_info && self.ranges == other.ranges
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DataSymProperties {
    pub parent_metadata: ParentSectionMetadata,
    pub compiler: Option<Compiler>,
    pub detected_type: Option<SymbolType>,
    pub encoding: Encoding,
    pub is_late_rodata: bool,
}

impl DataSymProperties {
    fn apply_to_metadata(&self, metadata: &mut crate::metadata::SymbolMetadata) {
        metadata.set_parent_metadata(self.parent_metadata.clone());

        if let Some(compiler) = self.compiler {
            metadata.set_compiler(compiler);
        }
        if self.is_late_rodata {
            metadata.set_late_rodata();
        }
    }
}
