/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{collections::btree_map::BTreeMap, sync::Arc, vec::Vec};
use core::{cmp::Ordering, hash};

use crate::addresses::{AddressRange, Rom, RomVramRange, Size, Vram};
use crate::collections::addended_ordered_map::FindSettings;
use crate::collections::unordered_set::UnorderedSet;
use crate::config::Compiler;
use crate::context::Context;
use crate::isa::AccessType;
use crate::metadata::{ParentSectionMetadata, SymbolType};
use crate::parent_segment_info::ParentSegmentInfo;
use crate::section_type::SectionType;
use crate::sections::processed::DataSectionProcessed;
use crate::sections::{
    DataSectionSettings, RomSection, Section, SectionCreationError, SectionPostProcessError,
};
use crate::symbols::before_proc::data_sym::DataSymProperties;
use crate::symbols::DataSym;

/// A `.data`/`.rodata` section: tentatively types its words and splits them
/// into symbols.
#[derive(Debug, Clone)]
#[must_use]
pub struct DataSection {
    name: Arc<str>,
    ranges: RomVramRange,
    parent_segment_info: ParentSegmentInfo,
    section_type: SectionType,

    data_symbols: Vec<DataSym>,
    symbol_vrams: UnorderedSet<Vram>,
}

impl DataSection {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        context: &mut Context,
        settings: &DataSectionSettings,
        name: Arc<str>,
        raw_bytes: &[u8],
        rom: Rom,
        vram: Vram,
        parent_segment_info: ParentSegmentInfo,
        section_type: SectionType,
    ) -> Result<Self, SectionCreationError> {
        if raw_bytes.is_empty() {
            return Err(SectionCreationError::EmptySection { name });
        }

        let size = Size::new(raw_bytes.len() as u32);
        let ranges = RomVramRange::new(
            AddressRange::new(rom, rom + size),
            AddressRange::new(vram, vram + size),
        );

        let (symbols_info, late_rodata_start, maybe_pointers_to_other_sections) =
            find_symbols_in_bytes(
                context,
                settings,
                raw_bytes,
                ranges,
                &parent_segment_info,
                section_type,
            )?;

        let mut data_symbols = Vec::new();
        let mut symbol_vrams = UnorderedSet::new();

        let symbols_info_vec: Vec<(Vram, Option<SymbolType>)> = symbols_info.into_iter().collect();
        for (i, (new_sym_vram, sym_type)) in symbols_info_vec.iter().enumerate() {
            let start = new_sym_vram.sub_vram(&vram).inner() as usize;
            let end = if i + 1 < symbols_info_vec.len() {
                symbols_info_vec[i + 1].0.sub_vram(&vram).inner() as usize
            } else {
                raw_bytes.len()
            };
            debug_assert!(start < end, "{:?} {} {} {}", rom, vram, start, end);

            let sym_rom = rom + Size::new(start as u32);

            symbol_vrams.insert(*new_sym_vram);

            let properties = DataSymProperties {
                parent_metadata: ParentSectionMetadata::new(
                    name.clone(),
                    vram,
                    parent_segment_info.clone(),
                ),
                compiler: settings.compiler(),
                detected_type: *sym_type,
                encoding: settings.encoding(),
                is_late_rodata: late_rodata_start.is_some_and(|late| *new_sym_vram >= late),
            };
            let sym = DataSym::new(
                context,
                raw_bytes[start..end].into(),
                sym_rom,
                *new_sym_vram,
                parent_segment_info.clone(),
                section_type,
                properties,
            )?;

            data_symbols.push(sym);
        }

        let owned_segment_mut = context.find_owned_segment_mut(&parent_segment_info)?;
        for (possible_pointer, referenced_from) in maybe_pointers_to_other_sections {
            owned_segment_mut.add_possible_pointer_in_data(possible_pointer, referenced_from);
        }

        Ok(Self {
            name,
            ranges,
            parent_segment_info,
            section_type,
            data_symbols,
            symbol_vrams,
        })
    }
}

type SymbolsInBytes = (
    BTreeMap<Vram, Option<SymbolType>>,
    Option<Vram>,
    Vec<(Vram, Rom)>,
);

/// Walk the section's words, deciding where symbols start and which type
/// each candidate looks like.
fn find_symbols_in_bytes(
    context: &mut Context,
    settings: &DataSectionSettings,
    raw_bytes: &[u8],
    ranges: RomVramRange,
    parent_segment_info: &ParentSegmentInfo,
    section_type: SectionType,
) -> Result<SymbolsInBytes, SectionCreationError> {
    let vram = ranges.vram().start();
    let rom = ranges.rom().start();
    let endian = context.global_config().endian();
    let features = *context.global_config().features();

    let mut symbols_info: BTreeMap<Vram, Option<SymbolType>> = BTreeMap::new();
    // Ensure there's a symbol at the beginning of the section.
    context
        .find_owned_segment_mut(parent_segment_info)?
        .add_symbol(vram, crate::metadata::GeneratedBy::Autogenerated, false);
    symbols_info.insert(vram, None);

    let owned_segment = context.find_owned_segment(parent_segment_info)?;

    let mut maybe_pointers_to_other_sections = Vec::new();

    let mut remaining_string_size: i32 = 0;
    let mut prev_sym_type: Option<SymbolType> = None;
    let mut late_rodata_start: Option<Vram> = None;

    // Words before the first 4-byte boundary can't be pointers.
    let displacement = (4 - (vram.inner() % 4) as usize) % 4;
    for (i, word_bytes) in raw_bytes[displacement..].chunks_exact(4).enumerate() {
        let local_offset = i * 4 + displacement;

        let current_vram = vram + Size::new(local_offset as u32);
        let current_rom = rom + Size::new(local_offset as u32);
        let b_vram = current_vram + Size::new(1);
        let c_vram = current_vram + Size::new(2);
        let d_vram = current_vram + Size::new(3);

        // Avoid symbols in the middle of strings.
        if remaining_string_size <= 0
            && features.string_detection()
            && !owned_segment.is_vram_ignored(current_vram)
        {
            let current_ref = owned_segment.find_symbol(current_vram, FindSettings::new(true));

            if current_ref.is_none_or(|x| x.vram() == current_vram) {
                if let Ok(str_size) = settings.string_guesser_level().guess(
                    current_ref,
                    current_vram,
                    &raw_bytes[local_offset..],
                    settings.encoding(),
                    settings.compiler(),
                    late_rodata_start.is_some(),
                ) {
                    let str_sym_size = str_size.next_multiple_of(4);
                    let in_between_sym = owned_segment.find_symbol(
                        current_vram + Size::new(str_sym_size as u32 - 1),
                        FindSettings::new(true).with_reject_sizeless_addended(false),
                    );

                    // Check there isn't another symbol inside the string's
                    // span, in which case this can't be a string.
                    if in_between_sym.is_none_or(|x| {
                        let other_sym_vram = x.vram();

                        match other_sym_vram.cmp(&current_vram) {
                            Ordering::Greater => false,
                            Ordering::Equal => true,
                            Ordering::Less => x
                                .size()
                                .is_some_and(|x| other_sym_vram + x <= current_vram),
                        }
                    }) {
                        remaining_string_size = str_size as i32;

                        symbols_info.insert(current_vram, Some(SymbolType::CString));

                        let next_vram = current_vram + Size::new(str_sym_size as u32);
                        if ((next_vram - vram).inner() as usize) < raw_bytes.len()
                            && !owned_segment.is_vram_ignored(next_vram)
                        {
                            // Avoid generating a symbol at the end of the
                            // section.
                            symbols_info.entry(next_vram).or_default();
                        }

                        // The next symbol should not be affected by this
                        // string.
                        prev_sym_type = None;
                    }
                }
            }
        }

        if remaining_string_size <= 0 {
            let a = owned_segment.find_symbol(current_vram, FindSettings::new(false));
            let b = owned_segment.find_symbol(b_vram, FindSettings::new(false));
            let c = owned_segment.find_symbol(c_vram, FindSettings::new(false));
            let d = owned_segment.find_symbol(d_vram, FindSettings::new(false));

            if b.is_none() && c.is_none() && d.is_none() {
                // There's no symbol in between.

                let current_type = match a {
                    None => prev_sym_type,
                    Some(metadata) => type_from_metadata(metadata, &features),
                };
                let should_search_for_address =
                    current_type.is_none_or(|x| x.can_reference_symbols());

                if should_search_for_address {
                    let word = endian.word_from_bytes(word_bytes);
                    let word_vram = Vram::new(word);

                    if ranges.vram().in_range(word_vram) {
                        // The word points into this very section.
                        if let Some(reference) =
                            owned_segment.find_symbol(word_vram, FindSettings::new(true))
                        {
                            if reference.vram() == word_vram
                                && !owned_segment.is_vram_ignored(word_vram)
                            {
                                // Only count this symbol if it doesn't have
                                // an addend; otherwise it may be part of a
                                // larger symbol.
                                symbols_info.entry(word_vram).or_default();
                            }
                        } else if !owned_segment.is_vram_ignored(word_vram) {
                            symbols_info.entry(word_vram).or_default();
                        }
                    } else if word_vram.inner() >= 0x80000000
                        && context
                            .find_symbol_from_any_segment(
                                word_vram,
                                parent_segment_info,
                                FindSettings::new(true),
                            )
                            .is_none()
                    {
                        maybe_pointers_to_other_sections.push((word_vram, current_rom));
                    }
                }

                if let Some(a) = a {
                    prev_sym_type = type_from_metadata(a, &features);
                } else if symbols_info.contains_key(&current_vram) {
                    prev_sym_type = current_type;
                }
            }

            for (x_vram, x) in [(current_vram, a), (b_vram, b), (c_vram, c), (d_vram, d)] {
                if owned_segment.is_vram_ignored(x_vram) {
                    continue;
                }
                if let Some(reference) = x {
                    symbols_info
                        .entry(reference.vram())
                        .or_insert_with(|| type_from_metadata(reference, &features));
                    if let Some(size) = reference.user_declared_size() {
                        let next_vram = reference.vram() + size;
                        if ((next_vram - vram).inner() as usize) < raw_bytes.len() {
                            symbols_info.entry(next_vram).or_default();
                        }
                    }
                } else if owned_segment.is_vram_a_possible_pointer_in_data(x_vram) {
                    symbols_info.entry(x_vram).or_default();
                }
            }

            // Jumptables mark the start of IDO's late rodata.
            if late_rodata_start.is_none()
                && section_type == SectionType::Rodata
                && settings.compiler() == Some(Compiler::IDO)
                && prev_sym_type == Some(SymbolType::Jumptable)
            {
                late_rodata_start = Some(current_vram);
            }
        }

        remaining_string_size -= 4;
    }

    Ok((
        symbols_info,
        late_rodata_start,
        maybe_pointers_to_other_sections,
    ))
}

/// The type a data symbol should be rendered as, combining explicit typing
/// with the access widths observed in code.
fn type_from_metadata(
    metadata: &crate::metadata::SymbolMetadata,
    features: &crate::config::AnalysisFeatures,
) -> Option<SymbolType> {
    if let Some(sym_type) = metadata.sym_type() {
        return Some(sym_type);
    }

    let (access_type, unsigned) = metadata.access_type()?;
    match access_type {
        AccessType::FLOAT | AccessType::DOUBLEFLOAT if !features.float_detection() => None,
        _ => SymbolType::from_access_type(access_type, unsigned),
    }
}

impl DataSection {
    #[must_use]
    pub fn data_symbols(&self) -> &[DataSym] {
        &self.data_symbols
    }

    pub fn post_process(
        self,
        context: &mut Context,
    ) -> Result<DataSectionProcessed, SectionPostProcessError> {
        DataSectionProcessed::new(
            context,
            self.name,
            self.ranges,
            self.parent_segment_info,
            self.section_type,
            self.data_symbols,
            self.symbol_vrams,
        )
    }
}

impl Section for DataSection {
    fn name(&self) -> Arc<str> {
        self.name.clone()
    }

    fn vram_range(&self) -> &AddressRange<Vram> {
        self.ranges.vram()
    }

    fn parent_segment_info(&self) -> &ParentSegmentInfo {
        &self.parent_segment_info
    }

    fn section_type(&self) -> SectionType {
        self.section_type
    }

    fn symbols_vrams(&self) -> &UnorderedSet<Vram> {
        &self.symbol_vrams
    }
}
impl RomSection for DataSection {
    fn rom_vram_range(&self) -> &RomVramRange {
        &self.ranges
    }
}

impl hash::Hash for DataSection {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.parent_segment_info.hash(state);
        self.ranges.hash(state);
    }
}
impl PartialEq for DataSection {
    fn eq(&self, other: &Self) -> bool {
        self.parent_segment_info == other.parent_segment_info && self.ranges == other.ranges
    }
}
