/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{sync::Arc, vec::Vec};
use core::hash;

use crate::addresses::{AddressRange, Rom, RomVramRange, Size, Vram};
use crate::collections::addended_ordered_map::FindSettings;
use crate::collections::unordered_set::UnorderedSet;
use crate::context::{Context, Diagnostic};
use crate::isa::Instruction;
use crate::metadata::{ParentSectionMetadata, SegmentMetadata, SymbolType};
use crate::parent_segment_info::ParentSegmentInfo;
use crate::section_type::SectionType;
use crate::sections::processed::ExecutableSectionProcessed;
use crate::sections::{
    ExecutableSectionSettings, RomSection, Section, SectionCreationError, SectionPostProcessError,
};
use crate::symbols::before_proc::function_sym::FunctionSymProperties;
use crate::symbols::FunctionSym;

/// A `.text` section: splits its bytes into functions and analyzes each one.
#[derive(Debug, Clone)]
#[must_use]
pub struct ExecutableSection {
    name: Arc<str>,
    ranges: RomVramRange,
    parent_segment_info: ParentSegmentInfo,

    functions: Vec<FunctionSym>,
    symbol_vrams: UnorderedSet<Vram>,
}

impl ExecutableSection {
    pub(crate) fn new(
        context: &mut Context,
        settings: &ExecutableSectionSettings,
        name: Arc<str>,
        raw_bytes: &[u8],
        rom: Rom,
        vram: Vram,
        parent_segment_info: ParentSegmentInfo,
    ) -> Result<Self, SectionCreationError> {
        if raw_bytes.is_empty() {
            return Err(SectionCreationError::EmptySection { name });
        }
        if raw_bytes.len() % 4 != 0 {
            return Err(SectionCreationError::BadBytesSize {
                name,
                size: raw_bytes.len(),
                multiple_of: 4,
            });
        }
        if vram.inner() % 4 != 0 {
            return Err(SectionCreationError::UnalignedVram {
                name,
                vram,
                multiple_of: 4,
            });
        }
        if rom.inner() % 4 != 0 {
            return Err(SectionCreationError::UnalignedRom {
                name,
                rom,
                multiple_of: 4,
            });
        }

        let size = Size::new(raw_bytes.len() as u32);
        let ranges = RomVramRange::new(
            AddressRange::new(rom, rom + size),
            AddressRange::new(vram, vram + size),
        );

        let endian = context.global_config().endian();
        let instrs: Vec<Instruction> = raw_bytes
            .chunks_exact(4)
            .enumerate()
            .map(|(i, word_bytes)| {
                let word = endian.word_from_bytes(word_bytes);
                Instruction::new(
                    word,
                    vram + Size::new(i as u32 * 4),
                    settings.instruction_flags(),
                )
            })
            .collect();

        let owned_segment = context.find_owned_segment(&parent_segment_info)?;
        let (func_starts, last_function_is_open) =
            find_functions(settings, owned_segment, ranges, &instrs);

        if last_function_is_open {
            let function_vram = vram + Size::new(*func_starts.last().unwrap_or(&0) as u32 * 4);
            context.add_diagnostic(Diagnostic::BoundaryAmbiguity {
                section_name: name.clone(),
                function_vram,
            });
        }

        let mut functions = Vec::new();
        let mut symbol_vrams = UnorderedSet::new();

        for (i, start) in func_starts.iter().enumerate() {
            let end = if i + 1 < func_starts.len() {
                func_starts[i + 1]
            } else {
                instrs.len()
            };
            debug_assert!(*start < end, "{:?} {} {} {}", rom, vram, *start, end);

            let local_offset = Size::new(*start as u32 * 4);
            let current_vram = vram + local_offset;
            let current_rom = rom + local_offset;

            symbol_vrams.insert(current_vram);

            let properties = FunctionSymProperties {
                parent_metadata: ParentSectionMetadata::new(
                    name.clone(),
                    vram,
                    parent_segment_info.clone(),
                ),
                compiler: settings.compiler(),
            };
            let func = FunctionSym::new(
                context,
                instrs[*start..end].into(),
                current_rom,
                current_vram,
                parent_segment_info.clone(),
                properties,
            )?;

            functions.push(func);
        }

        Ok(Self {
            name,
            ranges,
            parent_segment_info,
            functions,
            symbol_vrams,
        })
    }
}

impl ExecutableSection {
    #[must_use]
    pub fn functions(&self) -> &[FunctionSym] {
        &self.functions
    }

    pub fn post_process(
        self,
        context: &mut Context,
    ) -> Result<ExecutableSectionProcessed, SectionPostProcessError> {
        ExecutableSectionProcessed::new(
            context,
            self.name,
            self.ranges,
            self.parent_segment_info,
            self.functions,
            self.symbol_vrams,
        )
    }
}

impl Section for ExecutableSection {
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
        SectionType::Text
    }

    fn symbols_vrams(&self) -> &UnorderedSet<Vram> {
        &self.symbol_vrams
    }
}
impl RomSection for ExecutableSection {
    fn rom_vram_range(&self) -> &RomVramRange {
        &self.ranges
    }
}

impl hash::Hash for ExecutableSection {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.parent_segment_info.hash(state);
        self.ranges.hash(state);
    }
}
impl PartialEq for ExecutableSection {
    fn eq(&self, other: &Self) -> bool {
        self.parent_segment_info == other.parent_segment_info && self.ranges == other.ranges
    }
}

/// Split the section's instructions into functions.
///
/// A function starts at a known function symbol, at the section start, or
/// after the previous function's `jr $ra` plus delay slot (skipping
/// alignment nops). Forward branches keep a function open past early
/// returns.
///
/// Returns the start indices plus whether the last function ran into the end
/// of the section without a terminator.
fn find_functions(
    settings: &ExecutableSectionSettings,
    owned_segment: &SegmentMetadata,
    section_ranges: RomVramRange,
    instrs: &[Instruction],
) -> (Vec<usize>, bool) {
    let mut starts = Vec::new();

    let find_function_ref = |index: usize| {
        let current_vram = section_ranges.vram().start() + Size::new(index as u32 * 4);
        owned_segment
            .find_symbol(current_vram, FindSettings::new(false))
            .filter(|x| x.sym_type() == Some(SymbolType::Function))
    };

    let mut index = 0;

    // Leading alignment nops that nothing references get their own block.
    if instrs[0].is_nop() {
        while index < instrs.len() && instrs[index].is_nop() && find_function_ref(index).is_none()
        {
            index += 1;
        }
        if index != 0 && index < instrs.len() {
            starts.push(0);
        } else if index >= instrs.len() {
            return (vec![0], false);
        }
    }

    let mut prev_start = index;
    let mut farthest_branch = index;
    let mut function_ended_by_return = false;

    while index < instrs.len() {
        let instr = &instrs[index];

        if index == prev_start {
            function_ended_by_return = false;
        }

        // A known function entry always splits, even mid-flow.
        if index != prev_start && find_function_ref(index).is_some() {
            starts.push(prev_start);
            prev_start = index;
            farthest_branch = index;
            function_ended_by_return = false;
        }

        if let Some(branch_offset) = instr.get_branch_offset_generic() {
            let target = index as i64 + (branch_offset.inner() / 4) as i64;
            if target > farthest_branch as i64 && target < instrs.len() as i64 {
                farthest_branch = target as usize;
            }
        }

        if instr.is_return() && farthest_branch <= index {
            let mut ends_here = true;

            if settings.detect_redundant_end() && index + 3 < instrs.len() {
                // IDO with `-g` can generate a redundant unreferenced
                // `jr $ra; nop` pair at the end of a function, which would
                // otherwise be split into its own empty function.
                if instrs[index + 1].is_nop()
                    && instrs[index + 2].is_return()
                    && instrs[index + 3].is_nop()
                    && find_function_ref(index + 2).is_none()
                {
                    ends_here = false;
                }
            }

            if ends_here {
                // Consume the delay slot, then any alignment nops.
                index += 2;
                while index < instrs.len()
                    && instrs[index].is_nop()
                    && find_function_ref(index).is_none()
                {
                    index += 1;
                }

                starts.push(prev_start);
                prev_start = index;
                farthest_branch = index;
                function_ended_by_return = true;
                continue;
            }
        }

        index += 1;
    }

    let last_function_is_open = if prev_start < instrs.len() {
        starts.push(prev_start);
        !function_ended_by_return
    } else {
        false
    };

    (starts, last_function_is_open)
}
