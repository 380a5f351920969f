/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{
    collections::{btree_set::BTreeSet, vec_deque::VecDeque},
    vec::Vec,
};

use crate::addresses::Vram;
use crate::collections::addended_ordered_map::FindSettings;
use crate::context::Context;
use crate::metadata::{RodataMigrationBehavior, SymbolMetadata, SymbolType};
use crate::sections::{DataSection, ExecutableSection};
use crate::symbols::{DataSym, FunctionSym, Symbol};

/// One entry of the interleaved functions/rodata emission order.
///
/// `Pairing` entries carry the rodata symbols migrated into the function:
/// symbols referenced by that function and nothing else, emitted together
/// with it. Symbols that can't be migrated anywhere become `SingleRodata`
/// entries at their original position.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum FuncRodataPairing {
    SingleFunction {
        function_index: usize,
    },
    SingleRodata {
        rodata_index: usize,
    },
    Pairing {
        function_index: usize,
        rodata_indices: Vec<usize>,
        late_rodata_indices: Vec<usize>,
    },
}

impl FuncRodataPairing {
    /// Pair every function of `text_section` with the rodata symbols it
    /// uniquely references, preserving the original ordering of both
    /// sections.
    pub fn pair_sections(
        context: &Context,
        text_section: Option<&ExecutableSection>,
        rodata_section: Option<&DataSection>,
    ) -> Vec<Self> {
        let mut all_entries = Vec::new();

        if !context.global_config().features().rodata_migration() {
            // Migration disabled: everything keeps its own entry, in order.
            if let Some(text_section) = text_section {
                for function_index in 0..text_section.functions().len() {
                    all_entries.push(FuncRodataPairing::SingleFunction { function_index });
                }
            }
            if let Some(rodata_section) = rodata_section {
                for rodata_index in 0..rodata_section.data_symbols().len() {
                    all_entries.push(FuncRodataPairing::SingleRodata { rodata_index });
                }
            }
            return all_entries;
        }

        // The simplest way to know which symbols have not been migrated yet
        // while preserving order is keeping a queue of the rodata symbols and
        // dropping the ones that get handled.
        let mut remaining_rodata_symbols: VecDeque<(usize, &DataSym)> = rodata_section
            .iter()
            .flat_map(|x| x.data_symbols().iter().enumerate())
            .collect();
        let mut handled_symbols = BTreeSet::new();

        let all_rodata_syms: &[DataSym] = rodata_section.map_or(&[], |x| x.data_symbols());

        for (function_index, function) in text_section
            .iter()
            .flat_map(|x| x.functions().iter().enumerate())
        {
            let entry = Self::pair_function_to_rodata_section(
                context,
                function_index,
                function,
                rodata_section,
            );

            if let FuncRodataPairing::Pairing {
                rodata_indices,
                late_rodata_indices,
                ..
            } = &entry
            {
                for rodata_index in rodata_indices.iter().chain(late_rodata_indices.iter()) {
                    handled_symbols
                        .insert(all_rodata_syms[*rodata_index].vram_range().start());
                }

                // Everything that comes before the migrated symbols and
                // couldn't be migrated anywhere keeps its original position.
                if let Some(first_rodata_index) = rodata_indices.first() {
                    let first_rodata_vram =
                        all_rodata_syms[*first_rodata_index].vram_range().start();

                    while let Some((rodata_index, rodata_sym)) =
                        remaining_rodata_symbols.front()
                    {
                        let rodata_vram = rodata_sym.vram_range().start();

                        if handled_symbols.contains(&rodata_vram) {
                            remaining_rodata_symbols.pop_front();
                            continue;
                        }
                        if rodata_vram >= first_rodata_vram {
                            break;
                        }

                        all_entries.push(FuncRodataPairing::SingleRodata {
                            rodata_index: *rodata_index,
                        });
                        handled_symbols.insert(rodata_vram);
                        remaining_rodata_symbols.pop_front();
                    }
                }
            }

            all_entries.push(entry);
        }

        for (rodata_index, rodata_sym) in remaining_rodata_symbols {
            if !handled_symbols.contains(&rodata_sym.vram_range().start()) {
                all_entries.push(FuncRodataPairing::SingleRodata { rodata_index });
            }
        }

        all_entries
    }

    fn pair_function_to_rodata_section(
        context: &Context,
        function_index: usize,
        function: &FunctionSym,
        rodata_section: Option<&DataSection>,
    ) -> Self {
        let Some(rodata_section) = rodata_section else {
            return FuncRodataPairing::SingleFunction { function_index };
        };

        let mut rodata_indices = Vec::new();
        let mut late_rodata_indices = Vec::new();

        let function_vram = function.vram_range().start();
        let func_name = Self::function_name(context, function);

        let mut migrated_some = false;
        let mut maybe_migrable_indices = Vec::new();
        let mut blocked = false;

        for (rodata_index, rodata_sym) in rodata_section.data_symbols().iter().enumerate() {
            if blocked {
                break;
            }

            let Some(rodata_metadata) = Self::rodata_metadata(context, rodata_sym) else {
                continue;
            };

            if Self::should_migrate_rodata_symbol_to_function(
                rodata_metadata,
                function_vram,
                &func_name,
            ) {
                // Unreferenced symbols sandwiched between two migrated ones
                // come along.
                if rodata_metadata.is_late_rodata() {
                    late_rodata_indices.append(&mut maybe_migrable_indices);
                    late_rodata_indices.push(rodata_index);
                } else {
                    rodata_indices.append(&mut maybe_migrable_indices);
                    rodata_indices.push(rodata_index);
                }
                migrated_some = true;
            } else if migrated_some {
                if rodata_metadata.reference_counter() > 0 {
                    // Referenced by something else: the run of symbols
                    // belonging to this function is over.
                    blocked = true;
                } else if rodata_metadata.is_migrable() {
                    maybe_migrable_indices.push(rodata_index);
                } else {
                    blocked = true;
                }
            }
        }

        if rodata_indices.is_empty() && late_rodata_indices.is_empty() {
            FuncRodataPairing::SingleFunction { function_index }
        } else {
            FuncRodataPairing::Pairing {
                function_index,
                rodata_indices,
                late_rodata_indices,
            }
        }
    }

    /// Migration requires exclusivity: the symbol must be referenced by this
    /// function and nothing else. Jumptables always migrate into their
    /// referencing function since their labels are function-local. User
    /// overrides bypass all of it.
    fn should_migrate_rodata_symbol_to_function(
        rodata_metadata: &SymbolMetadata,
        function_vram: Vram,
        func_name: &str,
    ) -> bool {
        match rodata_metadata.rodata_migration_behavior() {
            RodataMigrationBehavior::MigrateToSpecificFunction(owner_name) => {
                return owner_name == func_name;
            }
            RodataMigrationBehavior::ForceNotMigrate => return false,
            RodataMigrationBehavior::ForceMigrate => {
                return rodata_metadata
                    .reference_functions()
                    .contains(&function_vram);
            }
            RodataMigrationBehavior::Default => {}
        }

        if !rodata_metadata.is_migrable() {
            return false;
        }
        if !rodata_metadata
            .reference_functions()
            .contains(&function_vram)
        {
            return false;
        }

        if rodata_metadata.sym_type() == Some(SymbolType::Jumptable) {
            return true;
        }

        rodata_metadata.reference_functions().len() == 1
    }

    fn rodata_metadata<'ctx>(
        context: &'ctx Context,
        rodata_sym: &DataSym,
    ) -> Option<&'ctx SymbolMetadata> {
        let owned_segment = context
            .find_owned_segment(rodata_sym.parent_segment_info())
            .ok()?;
        owned_segment.find_symbol(rodata_sym.vram_range().start(), FindSettings::new(false))
    }

    fn function_name(context: &Context, function: &FunctionSym) -> alloc::string::String {
        let name_settings = context.global_config().name_generation();

        context
            .find_owned_segment(function.parent_segment_info())
            .ok()
            .and_then(|segment| {
                segment.find_symbol(function.vram_range().start(), FindSettings::new(false))
            })
            .map(|metadata| metadata.display_name(name_settings))
            .unwrap_or_default()
    }
}
