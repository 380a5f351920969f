/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use crate::addresses::Size;
use crate::config::Compiler;
use crate::isa::AccessType;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum SymbolType {
    Function,
    BranchLabel,
    Jumptable,
    JumptableLabel,

    Byte,
    Short,
    Word,
    DWord,

    Float32,
    Float64,
    CString,

    UserCustom,
}

impl SymbolType {
    pub fn valid_branch_target(&self) -> bool {
        matches!(
            self,
            SymbolType::Function | SymbolType::BranchLabel | SymbolType::JumptableLabel
        )
    }

    /// Can data words typed like this be interpreted as pointers to other
    /// symbols?
    pub fn can_reference_symbols(&self) -> bool {
        match self {
            SymbolType::Function | SymbolType::BranchLabel | SymbolType::JumptableLabel => false,
            SymbolType::Jumptable => true,
            SymbolType::Byte | SymbolType::Short => false,
            SymbolType::Word => true,
            SymbolType::DWord => false,
            SymbolType::Float32 | SymbolType::Float64 => false,
            SymbolType::CString => false,
            SymbolType::UserCustom => true,
        }
    }

    /// Size implied by the type itself, when it has one.
    pub fn fixed_size(&self) -> Option<Size> {
        match self {
            SymbolType::Byte => Some(Size::new(1)),
            SymbolType::Short => Some(Size::new(2)),
            SymbolType::Word | SymbolType::Float32 => Some(Size::new(4)),
            SymbolType::DWord | SymbolType::Float64 => Some(Size::new(8)),
            _ => None,
        }
    }

    pub fn is_late_rodata(&self, compiler: Option<Compiler>) -> bool {
        compiler.is_some_and(|x| x.has_late_rodata())
            && matches!(
                self,
                SymbolType::Jumptable | SymbolType::Float32 | SymbolType::Float64
            )
    }

    pub fn from_access_type(access_type: AccessType, unsigned: bool) -> Option<Self> {
        let _ = unsigned;
        match access_type {
            AccessType::BYTE => Some(SymbolType::Byte),
            AccessType::SHORT => Some(SymbolType::Short),
            AccessType::WORD => Some(SymbolType::Word),
            AccessType::DOUBLEWORD => Some(SymbolType::DWord),
            AccessType::FLOAT => Some(SymbolType::Float32),
            AccessType::DOUBLEFLOAT => Some(SymbolType::Float64),
            _ => None,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            SymbolType::Function => "func",
            SymbolType::BranchLabel => "branchlabel",
            SymbolType::Jumptable => "jtbl",
            SymbolType::JumptableLabel => "jtbllabel",
            SymbolType::Byte => "u8",
            SymbolType::Short => "u16",
            SymbolType::Word => "u32",
            SymbolType::DWord => "u64",
            SymbolType::Float32 => "f32",
            SymbolType::Float64 => "f64",
            SymbolType::CString => "asciz",
            SymbolType::UserCustom => "custom",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "func" => Some(SymbolType::Function),
            "branchlabel" => Some(SymbolType::BranchLabel),
            "jtbl" => Some(SymbolType::Jumptable),
            "jtbllabel" => Some(SymbolType::JumptableLabel),
            "u8" | "s8" => Some(SymbolType::Byte),
            "u16" | "s16" => Some(SymbolType::Short),
            "u32" | "s32" => Some(SymbolType::Word),
            "u64" | "s64" => Some(SymbolType::DWord),
            "f32" | "float" => Some(SymbolType::Float32),
            "f64" | "double" => Some(SymbolType::Float64),
            "asciz" | "char*" => Some(SymbolType::CString),
            "custom" => Some(SymbolType::UserCustom),
            _ => None,
        }
    }
}
