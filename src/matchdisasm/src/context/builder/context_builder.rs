/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{string::String, sync::Arc, vec::Vec};

use crate::addresses::{AddressRange, Rom, RomVramRange, Size, Vram};
use crate::analysis::{InstrAnalysisInfo, InstructionAnalyzer};
use crate::collections::unordered_map::UnorderedMap;
use crate::config::GlobalConfig;
use crate::isa::Instruction;
use crate::metadata::{
    GeneratedBy, OverlayCategory, OverlayCategoryName, RodataMigrationBehavior, SegmentMetadata,
    SymbolType,
};
use crate::sections::{DataSectionSettings, ExecutableSectionSettings};

use super::{AddOverlayError, AddUserSymbolError};
use crate::context::Context;

/// Optional attributes of a user-provided symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSymbolAttributes {
    sym_type: Option<SymbolType>,
    size: Option<Size>,
    migration_behavior: Option<RodataMigrationBehavior>,
}

impl UserSymbolAttributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_type(self, sym_type: SymbolType) -> Self {
        Self {
            sym_type: Some(sym_type),
            ..self
        }
    }

    #[must_use]
    pub fn with_size(self, size: Size) -> Self {
        Self {
            size: Some(size),
            ..self
        }
    }

    #[must_use]
    pub fn with_migration_behavior(self, migration_behavior: RodataMigrationBehavior) -> Self {
        Self {
            migration_behavior: Some(migration_behavior),
            ..self
        }
    }
}

/// Builds a [`Context`]: user symbols and overlay layout go in first, then
/// optional preheats warm the symbol table up with a quick scan of each
/// section, improving the quality of the real analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextBuilder {
    global_config: GlobalConfig,
    global_segment: SegmentMetadata,
    overlay_segments: UnorderedMap<OverlayCategoryName, OverlayCategory>,
}

impl ContextBuilder {
    #[must_use]
    pub fn new(global_config: GlobalConfig, global_ranges: RomVramRange) -> Self {
        Self {
            global_config,
            global_segment: SegmentMetadata::new(global_ranges, None, None),
            overlay_segments: UnorderedMap::new(),
        }
    }

    #[must_use]
    pub const fn global_config(&self) -> &GlobalConfig {
        &self.global_config
    }
}

// User symbols.
impl ContextBuilder {
    pub fn add_user_symbol(
        &mut self,
        name: String,
        vram: Vram,
        attributes: UserSymbolAttributes,
    ) -> Result<(), AddUserSymbolError> {
        if !self.global_segment.in_vram_range(vram) {
            return Err(AddUserSymbolError::OutOfRange { name, vram });
        }

        Self::check_symbol_overlap(&self.global_segment, &name, vram, attributes.size.as_ref())?;

        let sym = self
            .global_segment
            .add_symbol(vram, GeneratedBy::UserDeclared, false);
        sym.set_user_declared_name(name);
        if let Some(sym_type) = attributes.sym_type {
            sym.set_type(sym_type, GeneratedBy::UserDeclared);
        }
        if let Some(size) = attributes.size {
            sym.set_user_declared_size(size);
        }
        if let Some(migration_behavior) = attributes.migration_behavior {
            sym.set_rodata_migration_behavior(migration_behavior);
        }
        Ok(())
    }

    /// Ask the analyzers to never create symbols inside `range`.
    pub fn add_ignored_vram_range(&mut self, range: AddressRange<Vram>) {
        self.global_segment.add_ignored_range(range);
    }

    /// Like [`add_user_symbol`], but for a symbol living in an overlay.
    ///
    /// [`add_user_symbol`]: ContextBuilder::add_user_symbol
    pub fn add_overlay_user_symbol(
        &mut self,
        category_name: &OverlayCategoryName,
        segment_rom: Rom,
        name: String,
        vram: Vram,
        attributes: UserSymbolAttributes,
    ) -> Result<(), AddUserSymbolError> {
        let segment = self
            .overlay_segments
            .get_mut(category_name)
            .and_then(|category| category.segments_mut().get_mut(&segment_rom));
        let Some(segment) = segment else {
            return Err(AddUserSymbolError::UnknownOverlaySegment {
                name,
                vram,
                category_name: category_name.clone(),
                segment_rom,
            });
        };

        if !segment.in_vram_range(vram) {
            return Err(AddUserSymbolError::OutOfRange { name, vram });
        }

        Self::check_symbol_overlap(segment, &name, vram, attributes.size.as_ref())?;

        let sym = segment.add_symbol(vram, GeneratedBy::UserDeclared, false);
        sym.set_user_declared_name(name);
        if let Some(sym_type) = attributes.sym_type {
            sym.set_type(sym_type, GeneratedBy::UserDeclared);
        }
        if let Some(size) = attributes.size {
            sym.set_user_declared_size(size);
        }
        if let Some(migration_behavior) = attributes.migration_behavior {
            sym.set_rodata_migration_behavior(migration_behavior);
        }
        Ok(())
    }

    fn check_symbol_overlap(
        segment: &SegmentMetadata,
        name: &str,
        vram: Vram,
        size: Option<&Size>,
    ) -> Result<(), AddUserSymbolError> {
        use crate::collections::addended_ordered_map::FindSettings;

        // The new symbol must not land inside an existing sized symbol.
        if let Some(other) = segment.find_symbol(vram, FindSettings::new(true)) {
            if other.vram() != vram && other.is_user_declared() {
                return Err(AddUserSymbolError::Overlap {
                    name: name.into(),
                    vram,
                    other_name: other.user_declared_name().unwrap_or_default().into(),
                    other_vram: other.vram(),
                });
            }
        }

        // And existing symbols must not land inside the new one.
        if let Some(size) = size {
            if let Some((other_vram, other)) = segment
                .find_symbols_range(vram + Size::new(1), vram + *size)
                .next()
            {
                if other.is_user_declared() {
                    return Err(AddUserSymbolError::Overlap {
                        name: name.into(),
                        vram,
                        other_name: other.user_declared_name().unwrap_or_default().into(),
                        other_vram: *other_vram,
                    });
                }
            }
        }

        Ok(())
    }
}

// Overlays.
impl ContextBuilder {
    /// Declare a category of overlays sharing the `vram_range` window.
    pub fn add_overlay_category(
        &mut self,
        category_name: OverlayCategoryName,
        vram_range: AddressRange<Vram>,
    ) {
        // The placeholder has no rom backing; give it an impossible rom range
        // right past everything else.
        let placeholder_rom = AddressRange::new(
            Rom::new(u32::MAX - vram_range.size().inner()),
            Rom::new(u32::MAX),
        );
        let placeholder = SegmentMetadata::new(
            RomVramRange::new(placeholder_rom, vram_range),
            None,
            Some(category_name.clone()),
        );

        self.overlay_segments
            .insert(category_name, OverlayCategory::new(placeholder));
    }

    pub fn add_overlay(
        &mut self,
        category_name: &OverlayCategoryName,
        name: Arc<str>,
        ranges: RomVramRange,
    ) -> Result<(), AddOverlayError> {
        let Some(category) = self.overlay_segments.get_mut(category_name) else {
            return Err(AddOverlayError::UnknownCategory {
                category_name: category_name.clone(),
            });
        };

        let segment_rom = ranges.rom().start();
        if category.segments().contains_key(&segment_rom) {
            return Err(AddOverlayError::DuplicatedRom {
                category_name: category_name.clone(),
                segment_rom,
            });
        }

        let segment = SegmentMetadata::new(ranges, Some(name), Some(category_name.clone()));
        category.segments_mut().insert(segment_rom, segment);
        Ok(())
    }

    /// Whitelist `overlay_name` as referenceable from the overlay at
    /// (`category_name`, `segment_rom`), even though they live in different
    /// categories.
    pub fn add_prioritised_overlay(
        &mut self,
        category_name: &OverlayCategoryName,
        segment_rom: Rom,
        overlay_name: Arc<str>,
    ) -> Result<(), AddOverlayError> {
        let Some(category) = self.overlay_segments.get_mut(category_name) else {
            return Err(AddOverlayError::UnknownCategory {
                category_name: category_name.clone(),
            });
        };
        let Some(segment) = category.segments_mut().get_mut(&segment_rom) else {
            return Err(AddOverlayError::DuplicatedRom {
                category_name: category_name.clone(),
                segment_rom,
            });
        };

        segment.add_prioritised_overlay(overlay_name);
        Ok(())
    }
}

// Preheats.
impl ContextBuilder {
    /// Quick pass over a text section, seeding function symbols for every
    /// call target and data symbols for every paired address.
    ///
    /// The real analysis will re-do this work with full context; preheating
    /// exists so the data analyzers already know which addresses are
    /// referenced by code.
    pub fn preheat_text(
        &mut self,
        settings: &ExecutableSectionSettings,
        raw_bytes: &[u8],
        rom: Rom,
        vram: Vram,
    ) {
        let endian = self.global_config.endian();
        let instrs: Vec<Instruction> = raw_bytes
            .chunks_exact(4)
            .enumerate()
            .map(|(i, bytes)| {
                let word = endian.word_from_bytes(bytes);
                Instruction::new(
                    word,
                    vram + Size::new(i as u32 * 4),
                    settings.instruction_flags(),
                )
            })
            .collect();
        if instrs.is_empty() {
            return;
        }

        let size = Size::new((instrs.len() * 4) as u32);
        let ranges = RomVramRange::new(
            AddressRange::new(rom, rom + size),
            AddressRange::new(vram, vram + size),
        );
        let result = InstructionAnalyzer::analyze(self.global_config.gp_config(), ranges, &instrs);

        for target_vram in result.func_calls().values() {
            if let Some(segment) = self.segment_for_vram_mut(*target_vram) {
                segment
                    .add_function(*target_vram, None, GeneratedBy::Autogenerated)
                    .add_reference();
            }
        }

        for info in result.instr_infos() {
            if let InstrAnalysisInfo::PairedLo { address, .. } = info {
                if let Some(segment) = self.segment_for_vram_mut(*address) {
                    let sym = segment.add_symbol(*address, GeneratedBy::Autogenerated, true);
                    sym.add_reference();
                    if let Some(access_info) = result.access_info_per_address().get(address) {
                        sym.set_access_type_if_unset(access_info.0, access_info.1);
                    }
                }
            }
        }

        for jumptable_vram in result.referenced_jumptables().values() {
            if let Some(segment) = self.segment_for_vram_mut(*jumptable_vram) {
                segment
                    .add_jumptable(*jumptable_vram, GeneratedBy::Autogenerated)
                    .add_reference();
            }
        }
    }

    /// Quick pass over a data section, remembering every word that looks
    /// like a pointer into a known segment.
    pub fn preheat_data(&mut self, _settings: &DataSectionSettings, raw_bytes: &[u8], rom: Rom, vram: Vram) {
        let endian = self.global_config.endian();

        for (i, word_bytes) in raw_bytes.chunks_exact(4).enumerate() {
            let word = endian.word_from_bytes(word_bytes);
            let word_vram = Vram::new(word);
            let current_rom = rom + Size::new(i as u32 * 4);
            let _ = vram;

            if let Some(segment) = self.segment_for_vram_mut(word_vram) {
                segment.add_possible_pointer_in_data(word_vram, current_rom);
            }
        }
    }

    fn segment_for_vram_mut(&mut self, vram: Vram) -> Option<&mut SegmentMetadata> {
        if self.global_segment.in_vram_range(vram) {
            return Some(&mut self.global_segment);
        }
        None
    }
}

impl ContextBuilder {
    #[must_use]
    pub fn build(self) -> Context {
        Context::new(
            self.global_config,
            self.global_segment,
            self.overlay_segments,
        )
    }
}
