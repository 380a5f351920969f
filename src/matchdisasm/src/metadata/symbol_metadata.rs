/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{collections::btree_set::BTreeSet, string::String, vec::Vec};
use core::fmt;

use crate::addresses::{Rom, Size, SizedAddress, Vram};
use crate::config::Compiler;
use crate::isa::AccessType;
use crate::section_type::SectionType;

use super::{AutogenPrefixMode, ParentSectionMetadata, SymbolNameGenerationSettings, SymbolType};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum GeneratedBy {
    /// This symbol was automatically generated by the disassembler.
    Autogenerated,
    /// Declared externally by the user, but it may have not been found yet.
    UserDeclared,
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[non_exhaustive]
pub enum RodataMigrationBehavior {
    /// Let the migration pass decide.
    #[default]
    Default,

    /// Migrate this symbol to any function which references it, ignoring the
    /// usual rules.
    ForceMigrate,
    /// Never migrate this symbol.
    ForceNotMigrate,

    /// Migrate only to the function with this name.
    ///
    /// Useful for unreferenced symbols that should be emitted in-between
    /// actually referenced ones.
    MigrateToSpecificFunction(String),
}

/// The authoritative record for one named address.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolMetadata {
    generated_by: GeneratedBy,
    vram: Vram,
    rom: Option<Rom>,

    user_declared_name: Option<String>,

    user_declared_size: Option<Size>,
    autodetected_size: Option<Size>,

    user_declared_type: Option<SymbolType>,
    autodetected_type: Option<SymbolType>,

    section_type: Option<SectionType>,

    /// This symbol was found in one of the analyzed sections, as opposed to
    /// only being referenced from them.
    is_defined: bool,

    access_type: Option<(AccessType, bool)>,

    reference_counter: usize,
    /// Vram of every function referencing this symbol.
    reference_functions: BTreeSet<Vram>,

    /// For jumptables, the label entries contained in the table.
    table_labels: Vec<Vram>,

    parent_metadata: Option<ParentSectionMetadata>,
    compiler: Option<Compiler>,
    auto_created_pad_by: Option<Vram>,

    rodata_migration_behavior: RodataMigrationBehavior,
    is_late_rodata: bool,
    accessed_as_gp_rel: bool,
}

impl SymbolMetadata {
    pub(crate) fn new(generated_by: GeneratedBy, vram: Vram) -> Self {
        Self {
            generated_by,
            vram,
            rom: None,
            user_declared_name: None,
            user_declared_size: None,
            autodetected_size: None,
            user_declared_type: None,
            autodetected_type: None,
            section_type: None,
            is_defined: false,
            access_type: None,
            reference_counter: 0,
            reference_functions: BTreeSet::new(),
            table_labels: Vec::new(),
            parent_metadata: None,
            compiler: None,
            auto_created_pad_by: None,
            rodata_migration_behavior: RodataMigrationBehavior::Default,
            is_late_rodata: false,
            accessed_as_gp_rel: false,
        }
    }

    pub const fn generated_by(&self) -> GeneratedBy {
        self.generated_by
    }
    pub fn is_user_declared(&self) -> bool {
        self.generated_by == GeneratedBy::UserDeclared
    }

    pub const fn vram(&self) -> Vram {
        self.vram
    }

    pub const fn rom(&self) -> Option<Rom> {
        self.rom
    }
    pub fn update_rom(&mut self, new_rom: Option<Rom>) {
        if self.rom.is_none() {
            self.rom = new_rom;
        }
    }
    pub(crate) fn set_rom(&mut self, rom: Rom) {
        self.rom = Some(rom);
    }

    pub fn user_declared_name(&self) -> Option<&str> {
        self.user_declared_name.as_deref()
    }
    pub fn set_user_declared_name(&mut self, name: String) {
        self.user_declared_name = Some(name);
    }

    pub const fn user_declared_size(&self) -> Option<Size> {
        self.user_declared_size
    }
    pub fn set_user_declared_size(&mut self, size: Size) {
        self.user_declared_size = Some(size);
    }
    pub const fn autodetected_size(&self) -> Option<Size> {
        self.autodetected_size
    }
    pub fn set_autodetected_size(&mut self, size: Size) {
        self.autodetected_size = Some(size);
    }

    pub fn sym_type(&self) -> Option<SymbolType> {
        self.user_declared_type.or(self.autodetected_type)
    }
    pub const fn user_declared_type(&self) -> Option<SymbolType> {
        self.user_declared_type
    }
    pub const fn autodetected_type(&self) -> Option<SymbolType> {
        self.autodetected_type
    }

    /// Type setting is monotonic: autogenerated info never overrides
    /// user-declared info, and the user slot is only written by user
    /// configuration.
    pub fn set_type(&mut self, new_type: SymbolType, generated_by: GeneratedBy) {
        match generated_by {
            GeneratedBy::Autogenerated => self.autodetected_type = Some(new_type),
            GeneratedBy::UserDeclared => self.user_declared_type = Some(new_type),
        }
    }

    /// Promote an UNKNOWN (untyped) symbol to `new_type`.
    ///
    /// Returns `false` when the existing type wins, which callers record as a
    /// non-fatal type-conflict diagnostic.
    pub fn try_promote_type(&mut self, new_type: SymbolType) -> bool {
        if self.user_declared_type.is_some() {
            return self.user_declared_type == Some(new_type);
        }
        match self.autodetected_type {
            None => {
                self.autodetected_type = Some(new_type);
                true
            }
            Some(current) => current == new_type,
        }
    }

    pub const fn section_type(&self) -> Option<SectionType> {
        self.section_type
    }
    pub fn update_section_type(&mut self, new_section_type: Option<SectionType>) {
        if self.section_type.is_none() {
            self.section_type = new_section_type;
        }
    }

    pub const fn is_defined(&self) -> bool {
        self.is_defined
    }
    pub(crate) fn set_defined(&mut self) {
        self.is_defined = true;
    }

    pub const fn access_type(&self) -> Option<(AccessType, bool)> {
        self.access_type
    }
    pub fn set_access_type_if_unset(&mut self, access_type: AccessType, unsigned: bool) {
        if self.access_type.is_none() && !access_type.is_unaligned_part() {
            self.access_type = Some((access_type, unsigned));
        }
    }

    pub const fn reference_counter(&self) -> usize {
        self.reference_counter
    }
    pub fn reference_functions(&self) -> &BTreeSet<Vram> {
        &self.reference_functions
    }
    pub(crate) fn add_reference_function(&mut self, function_vram: Vram) {
        self.reference_counter += 1;
        self.reference_functions.insert(function_vram);
    }
    pub(crate) fn add_reference(&mut self) {
        self.reference_counter += 1;
    }

    pub fn table_labels(&self) -> &[Vram] {
        &self.table_labels
    }
    pub(crate) fn add_table_label(&mut self, label_vram: Vram) {
        if !self.table_labels.contains(&label_vram) {
            self.table_labels.push(label_vram);
        }
    }

    pub(crate) fn set_parent_metadata(&mut self, parent_metadata: ParentSectionMetadata) {
        self.parent_metadata = Some(parent_metadata);
    }
    pub const fn compiler(&self) -> Option<Compiler> {
        self.compiler
    }
    pub(crate) fn set_compiler(&mut self, compiler: Compiler) {
        self.compiler = Some(compiler);
    }

    pub const fn auto_created_pad_by(&self) -> Option<Vram> {
        self.auto_created_pad_by
    }
    pub(crate) fn set_auto_created_pad_by(&mut self, pad_by: Vram) {
        self.auto_created_pad_by = Some(pad_by);
    }

    pub fn rodata_migration_behavior(&self) -> &RodataMigrationBehavior {
        &self.rodata_migration_behavior
    }
    pub fn set_rodata_migration_behavior(&mut self, behavior: RodataMigrationBehavior) {
        self.rodata_migration_behavior = behavior;
    }

    pub const fn is_late_rodata(&self) -> bool {
        self.is_late_rodata
    }
    pub(crate) fn set_late_rodata(&mut self) {
        self.is_late_rodata = true;
    }

    pub const fn accessed_as_gp_rel(&self) -> bool {
        self.accessed_as_gp_rel
    }
    pub(crate) fn set_accessed_as_gp_rel(&mut self) {
        self.accessed_as_gp_rel = true;
    }
}

impl SymbolMetadata {
    /// Believable function starts: declared by the user or actually found in
    /// an analyzed text section.
    pub fn is_trustable_function(&self) -> bool {
        self.sym_type() == Some(SymbolType::Function)
            && (self.is_user_declared() || self.is_defined)
    }

    pub fn is_migrable(&self) -> bool {
        match &self.rodata_migration_behavior {
            RodataMigrationBehavior::ForceMigrate
            | RodataMigrationBehavior::MigrateToSpecificFunction(_) => true,
            RodataMigrationBehavior::ForceNotMigrate => false,
            RodataMigrationBehavior::Default => match self.sym_type() {
                Some(SymbolType::Function)
                | Some(SymbolType::BranchLabel)
                | Some(SymbolType::JumptableLabel) => false,
                Some(SymbolType::Jumptable) => true,
                _ => true,
            },
        }
    }

    /// The size this symbol is believed to span, if any source knows it.
    pub fn size(&self) -> Option<Size> {
        self.user_declared_size
            .or(self.autodetected_size)
            .or_else(|| self.sym_type().and_then(|x| x.fixed_size()))
    }

    /// User-set name, or the autogenerated one.
    pub fn display_name(&self, settings: &SymbolNameGenerationSettings) -> String {
        if let Some(name) = &self.user_declared_name {
            return name.clone();
        }

        let vram = self.vram.inner();
        match self.sym_type() {
            Some(SymbolType::Function) => format!("func_{:08X}", vram),
            Some(SymbolType::BranchLabel) => format!(".L{:08X}", vram),
            Some(SymbolType::JumptableLabel) => format!("L{:08X}", vram),
            Some(SymbolType::Jumptable) => format!("jtbl_{:08X}", vram),
            sym_type => match self.section_type {
                Some(SectionType::Bss) => format!("B_{:08X}", vram),
                Some(SectionType::Rodata) => match settings.prefix_mode() {
                    AutogenPrefixMode::Section => format!("RO_{:08X}", vram),
                    AutogenPrefixMode::Type => match sym_type {
                        Some(SymbolType::CString) => format!("STR_{:08X}", vram),
                        Some(SymbolType::Float32) => format!("FLT_{:08X}", vram),
                        Some(SymbolType::Float64) => format!("DBL_{:08X}", vram),
                        _ => format!("RO_{:08X}", vram),
                    },
                },
                _ => format!("D_{:08X}", vram),
            },
        }
    }
}

impl SizedAddress for SymbolMetadata {
    fn size(&self) -> Option<Size> {
        SymbolMetadata::size(self)
    }
}

impl fmt::Display for SymbolMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SymbolMetadata {{ vram: {}, type: {:?} }}",
            self.vram,
            self.sym_type()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_promotion_is_monotonic() {
        let mut sym = SymbolMetadata::new(GeneratedBy::Autogenerated, Vram::new(0x80000100));

        assert!(sym.sym_type().is_none());
        assert!(sym.try_promote_type(SymbolType::Word));
        assert_eq!(sym.sym_type(), Some(SymbolType::Word));

        // Incompatible promotion is rejected, the existing type wins.
        assert!(!sym.try_promote_type(SymbolType::Float32));
        assert_eq!(sym.sym_type(), Some(SymbolType::Word));
    }

    #[test]
    fn user_type_is_authoritative() {
        let mut sym = SymbolMetadata::new(GeneratedBy::UserDeclared, Vram::new(0x80000100));
        sym.set_type(SymbolType::Float64, GeneratedBy::UserDeclared);

        assert!(!sym.try_promote_type(SymbolType::Word));
        sym.set_type(SymbolType::Word, GeneratedBy::Autogenerated);
        assert_eq!(sym.sym_type(), Some(SymbolType::Float64));
    }

    #[test]
    fn autogenerated_names() {
        let settings = SymbolNameGenerationSettings::new();
        let typed = settings.with_prefix_mode(AutogenPrefixMode::Type);

        let mut func = SymbolMetadata::new(GeneratedBy::Autogenerated, Vram::new(0x80000400));
        func.set_type(SymbolType::Function, GeneratedBy::Autogenerated);
        assert_eq!(func.display_name(&settings), "func_80000400");

        let mut stringy = SymbolMetadata::new(GeneratedBy::Autogenerated, Vram::new(0x80010000));
        stringy.update_section_type(Some(SectionType::Rodata));
        stringy.set_type(SymbolType::CString, GeneratedBy::Autogenerated);
        assert_eq!(stringy.display_name(&settings), "RO_80010000");
        assert_eq!(stringy.display_name(&typed), "STR_80010000");

        let bss = {
            let mut sym = SymbolMetadata::new(GeneratedBy::Autogenerated, Vram::new(0x80020000));
            sym.update_section_type(Some(SectionType::Bss));
            sym
        };
        assert_eq!(bss.display_name(&settings), "B_80020000");
    }
}
