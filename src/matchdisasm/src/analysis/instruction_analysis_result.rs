/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{
    collections::{btree_map::BTreeMap, btree_set::BTreeSet},
    vec::Vec,
};

use crate::addresses::{Rom, RomVramRange, Size, Vram};
use crate::isa::AccessType;

/// What the analysis concluded about one instruction.
///
/// This is the immutable overlay consulted at emission time: the decoded
/// instructions themselves are never rewritten.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum InstrAnalysisInfo {
    /// Nothing interesting.
    No,

    /// `jal` to this address.
    DirectCall { target_vram: Vram },
    /// `bal`-style linking branch.
    BranchLink { target_vram: Vram },
    /// A `j` that may be a tail call.
    MaybeTailCall { target_vram: Vram },

    /// In-function branch.
    Branch { target_vram: Vram },
    /// Branch out of the function's range.
    BranchOutside { target_vram: Vram },

    /// A `jr` driven by a jumptable load.
    Jumptable { jumptable_vram: Vram },

    /// `lui` paired as the `%hi` of this address.
    PairedHi { address: Vram },
    /// `%lo` half of this address. `gp_rel` pairs were formed against `$gp`
    /// instead of a `lui`.
    PairedLo { address: Vram, gp_rel: bool },

    /// `lui` paired with an `ori`: upper half of a constant.
    ConstantHi { constant: u32 },
    /// `ori` completing a 32-bit constant.
    ConstantLo { constant: u32 },
}

/// Per-function analysis output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionAnalysisResult {
    ranges: RomVramRange,

    /// One entry per instruction.
    instr_infos: Vec<InstrAnalysisInfo>,

    /// Every address this function references.
    referenced_vrams: BTreeSet<Vram>,

    /// Key is the rom of the branch instruction.
    branch_targets: BTreeMap<Rom, Vram>,

    /// Key is the rom of the `jal`.
    func_calls: BTreeMap<Rom, Vram>,

    /// Key is the rom of the instruction that loaded the jumptable pointer.
    referenced_jumptables: BTreeMap<Rom, Vram>,

    /// Load/store width used for each referenced address.
    access_info_per_address: BTreeMap<Vram, (AccessType, bool)>,

    /// Addresses reached through `$gp`.
    gp_rel_addresses: BTreeSet<Vram>,

    is_likely_handwritten: bool,
    has_standard_prologue: bool,
}

impl InstructionAnalysisResult {
    pub(crate) fn new(ranges: RomVramRange, instr_count: usize) -> Self {
        Self {
            ranges,
            instr_infos: vec![InstrAnalysisInfo::No; instr_count],
            referenced_vrams: BTreeSet::new(),
            branch_targets: BTreeMap::new(),
            func_calls: BTreeMap::new(),
            referenced_jumptables: BTreeMap::new(),
            access_info_per_address: BTreeMap::new(),
            gp_rel_addresses: BTreeSet::new(),
            is_likely_handwritten: false,
            has_standard_prologue: false,
        }
    }

    #[must_use]
    pub const fn ranges(&self) -> &RomVramRange {
        &self.ranges
    }

    #[must_use]
    pub fn instr_infos(&self) -> &[InstrAnalysisInfo] {
        &self.instr_infos
    }

    #[must_use]
    pub fn referenced_vrams(&self) -> &BTreeSet<Vram> {
        &self.referenced_vrams
    }

    #[must_use]
    pub fn branch_targets(&self) -> &BTreeMap<Rom, Vram> {
        &self.branch_targets
    }

    #[must_use]
    pub fn func_calls(&self) -> &BTreeMap<Rom, Vram> {
        &self.func_calls
    }

    #[must_use]
    pub fn referenced_jumptables(&self) -> &BTreeMap<Rom, Vram> {
        &self.referenced_jumptables
    }

    #[must_use]
    pub fn access_info_per_address(&self) -> &BTreeMap<Vram, (AccessType, bool)> {
        &self.access_info_per_address
    }

    #[must_use]
    pub fn gp_rel_addresses(&self) -> &BTreeSet<Vram> {
        &self.gp_rel_addresses
    }

    /// Contains opcodes compilers don't emit.
    #[must_use]
    pub const fn is_likely_handwritten(&self) -> bool {
        self.is_likely_handwritten
    }

    /// Starts by allocating stack space and saving callee-saved registers.
    ///
    /// Advisory only: a function missing it was likely written by hand.
    #[must_use]
    pub const fn has_standard_prologue(&self) -> bool {
        self.has_standard_prologue
    }
}

// Mutation entry points for the analyzer.
impl InstructionAnalysisResult {
    pub(crate) fn index_from_rom(&self, rom: Rom) -> usize {
        ((rom - self.ranges.rom().start()).inner() / 4) as usize
    }

    pub(crate) fn rom_from_index(&self, index: usize) -> Rom {
        self.ranges.rom().start() + Size::new(index as u32 * 4)
    }

    pub(crate) fn set_info(&mut self, index: usize, info: InstrAnalysisInfo) {
        self.instr_infos[index] = info;
    }

    pub(crate) fn info(&self, index: usize) -> InstrAnalysisInfo {
        self.instr_infos[index]
    }

    pub(crate) fn add_referenced_vram(&mut self, vram: Vram) {
        self.referenced_vrams.insert(vram);
    }

    pub(crate) fn add_branch_target(&mut self, rom: Rom, target: Vram) {
        self.branch_targets.insert(rom, target);
    }

    pub(crate) fn add_func_call(&mut self, rom: Rom, target: Vram) {
        self.func_calls.insert(rom, target);
    }

    pub(crate) fn add_referenced_jumptable(&mut self, load_rom: Rom, jumptable: Vram) {
        self.referenced_jumptables.insert(load_rom, jumptable);
    }

    pub(crate) fn add_access_info(&mut self, vram: Vram, access_info: (AccessType, bool)) {
        self.access_info_per_address.entry(vram).or_insert(access_info);
    }

    pub(crate) fn add_gp_rel_address(&mut self, vram: Vram) {
        self.gp_rel_addresses.insert(vram);
    }

    pub(crate) fn set_likely_handwritten(&mut self) {
        self.is_likely_handwritten = true;
    }

    pub(crate) fn set_standard_prologue(&mut self) {
        self.has_standard_prologue = true;
    }
}
