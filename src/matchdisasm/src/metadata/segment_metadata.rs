/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{collections::btree_map::BTreeMap, sync::Arc, vec::Vec};

use crate::addresses::{AddressRange, Rom, RomVramRange, Vram};
use crate::collections::addended_ordered_map::{AddendedOrderedMap, FindSettings, Range};
use crate::section_type::SectionType;

use super::{GeneratedBy, OverlayCategoryName, SymbolMetadata, SymbolType};

/// All the symbols of one contiguous segment, keyed by vram.
///
/// Within one segment a vram maps to at most one symbol. Vram collisions
/// across segments are fine as long as they belong to different overlay
/// categories.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentMetadata {
    name: Option<Arc<str>>,
    ranges: RomVramRange,
    category_name: Option<OverlayCategoryName>,

    symbols: AddendedOrderedMap<Vram, SymbolMetadata>,

    /// Words in data that look like pointers into a not-yet-analyzed section.
    new_pointer_in_data: BTreeMap<Vram, Vec<Rom>>,

    /// Vram ranges the user asked the analyzers to not touch.
    ignored_ranges: Vec<AddressRange<Vram>>,

    /// Overlays (by name) whose symbols may be referenced from this segment
    /// even though they live in other categories.
    prioritised_overlays: Vec<Arc<str>>,
}

impl SegmentMetadata {
    pub(crate) fn new(
        ranges: RomVramRange,
        name: Option<Arc<str>>,
        category_name: Option<OverlayCategoryName>,
    ) -> Self {
        Self {
            name,
            ranges,
            category_name,
            symbols: AddendedOrderedMap::new(),
            new_pointer_in_data: BTreeMap::new(),
            ignored_ranges: Vec::new(),
            prioritised_overlays: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub const fn rom_vram_range(&self) -> &RomVramRange {
        &self.ranges
    }
    pub const fn rom_range(&self) -> &AddressRange<Rom> {
        self.ranges.rom()
    }
    pub const fn vram_range(&self) -> &AddressRange<Vram> {
        self.ranges.vram()
    }
    pub fn in_rom_range(&self, rom: Rom) -> bool {
        self.ranges.in_rom_range(rom)
    }
    pub fn in_vram_range(&self, vram: Vram) -> bool {
        self.ranges.in_vram_range(vram)
    }

    pub const fn category_name(&self) -> Option<&OverlayCategoryName> {
        self.category_name.as_ref()
    }

    pub const fn symbols(&self) -> &AddendedOrderedMap<Vram, SymbolMetadata> {
        &self.symbols
    }

    pub fn is_vram_ignored(&self, vram: Vram) -> bool {
        self.ignored_ranges.iter().any(|x| x.in_range(vram))
    }
    pub(crate) fn add_ignored_range(&mut self, range: AddressRange<Vram>) {
        self.ignored_ranges.push(range);
    }

    pub fn prioritised_overlays(&self) -> &[Arc<str>] {
        &self.prioritised_overlays
    }
    pub(crate) fn add_prioritised_overlay(&mut self, overlay_name: Arc<str>) {
        self.prioritised_overlays.push(overlay_name);
    }
}

impl SegmentMetadata {
    /// Get-or-create the symbol for `vram`.
    ///
    /// With `allow_addend` a vram falling inside a sized symbol resolves to
    /// that symbol instead of creating a new one.
    pub(crate) fn add_symbol(
        &mut self,
        vram: Vram,
        generated_by: GeneratedBy,
        allow_addend: bool,
    ) -> &mut SymbolMetadata {
        let (sym, _is_new) = self.symbols.find_mut_or_insert_with(
            vram,
            FindSettings::new(allow_addend),
            || (vram, SymbolMetadata::new(generated_by, vram)),
        );
        sym
    }

    pub(crate) fn add_function(
        &mut self,
        vram: Vram,
        rom: Option<Rom>,
        generated_by: GeneratedBy,
    ) -> &mut SymbolMetadata {
        let sym = self.add_symbol(vram, generated_by, false);
        sym.update_rom(rom);
        sym.update_section_type(Some(SectionType::Text));
        sym.set_type(SymbolType::Function, generated_by);
        sym
    }

    pub(crate) fn add_branch_label(
        &mut self,
        vram: Vram,
        rom: Option<Rom>,
        generated_by: GeneratedBy,
    ) -> &mut SymbolMetadata {
        let sym = self.add_symbol(vram, generated_by, false);
        sym.update_rom(rom);
        sym.update_section_type(Some(SectionType::Text));
        match sym.sym_type() {
            // Functions and jumptable labels take precedence over plain
            // branch labels.
            Some(SymbolType::Function) | Some(SymbolType::JumptableLabel) => {}
            _ => sym.set_type(SymbolType::BranchLabel, generated_by),
        }
        sym
    }

    pub(crate) fn add_jumptable(
        &mut self,
        vram: Vram,
        generated_by: GeneratedBy,
    ) -> &mut SymbolMetadata {
        let sym = self.add_symbol(vram, generated_by, false);
        sym.update_section_type(Some(SectionType::Rodata));
        sym.set_type(SymbolType::Jumptable, generated_by);
        sym
    }

    pub(crate) fn add_jumptable_label(
        &mut self,
        vram: Vram,
        rom: Option<Rom>,
        generated_by: GeneratedBy,
    ) -> &mut SymbolMetadata {
        let sym = self.add_symbol(vram, generated_by, false);
        sym.update_rom(rom);
        sym.update_section_type(Some(SectionType::Text));
        match sym.sym_type() {
            // Functions take precedence over jumptable labels.
            Some(SymbolType::Function) => {}
            _ => sym.set_type(SymbolType::JumptableLabel, generated_by),
        }
        sym
    }
}

impl SegmentMetadata {
    #[must_use]
    pub fn find_symbol(&self, vram: Vram, settings: FindSettings) -> Option<&SymbolMetadata> {
        self.symbols.find(&vram, settings)
    }

    #[must_use]
    pub(crate) fn find_symbol_mut(
        &mut self,
        vram: Vram,
        settings: FindSettings,
    ) -> Option<&mut SymbolMetadata> {
        self.symbols.find_mut(&vram, settings)
    }

    pub(crate) fn find_symbols_range(
        &self,
        vram_start: Vram,
        vram_end: Vram,
    ) -> Range<'_, Vram, SymbolMetadata> {
        self.symbols.range(vram_start..vram_end)
    }
}

impl SegmentMetadata {
    pub(crate) fn add_possible_pointer_in_data(&mut self, possible_pointer: Vram, referenced_from: Rom) {
        self.new_pointer_in_data
            .entry(possible_pointer)
            .or_default()
            .push(referenced_from);
    }

    pub(crate) fn is_vram_a_possible_pointer_in_data(&self, vram: Vram) -> bool {
        self.new_pointer_in_data.contains_key(&vram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addresses::Size;

    fn test_segment() -> SegmentMetadata {
        let rom_range = AddressRange::new(Rom::new(0), Rom::new(0x10000));
        let vram_range = AddressRange::new(Vram::new(0x80000000), Vram::new(0x80010000));
        SegmentMetadata::new(RomVramRange::new(rom_range, vram_range), None, None)
    }

    #[test]
    fn symbol_bounds() {
        let mut segment = test_segment();

        let sym = segment.add_symbol(Vram::new(0x80001000), GeneratedBy::Autogenerated, false);
        sym.set_autodetected_size(Size::new(0x10));
        segment.add_symbol(Vram::new(0x80001010), GeneratedBy::Autogenerated, false);

        assert_eq!(
            segment
                .find_symbol(Vram::new(0x80001004), FindSettings::new(true))
                .map(|x| x.vram()),
            Some(Vram::new(0x80001000))
        );
        assert_eq!(
            segment
                .find_symbol(Vram::new(0x80001004), FindSettings::new(false))
                .map(|x| x.vram()),
            None,
        );
        // The second symbol has no size, so an interior address does not
        // resolve to it.
        assert_eq!(
            segment
                .find_symbol(Vram::new(0x80001014), FindSettings::new(true))
                .map(|x| x.vram()),
            None,
        );
        assert_eq!(
            segment
                .find_symbol(
                    Vram::new(0x80001014),
                    FindSettings::new(true).with_reject_sizeless_addended(false)
                )
                .map(|x| x.vram()),
            Some(Vram::new(0x80001010)),
        );
    }

    #[test]
    fn label_precedence() {
        let mut segment = test_segment();

        segment.add_function(Vram::new(0x80002000), None, GeneratedBy::Autogenerated);
        let sym = segment.add_branch_label(Vram::new(0x80002000), None, GeneratedBy::Autogenerated);

        assert_eq!(sym.sym_type(), Some(SymbolType::Function));
    }
}
