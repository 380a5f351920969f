/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

pub mod before_proc;
pub mod display;
pub mod processed;
mod symbol_errors;

pub use before_proc::{DataSym, FunctionSym, NoloadSym};
pub use processed::{DataSymProcessed, FunctionSymProcessed, NoloadSymProcessed};
pub use symbol_errors::{SymbolCreationError, SymbolPostProcessError};

use crate::addresses::{AddressRange, RomVramRange, Vram};
use crate::parent_segment_info::ParentSegmentInfo;
use crate::section_type::SectionType;

/// Common interface of every analyzed symbol.
pub trait Symbol {
    fn vram_range(&self) -> &AddressRange<Vram>;
    fn parent_segment_info(&self) -> &ParentSegmentInfo;
    fn section_type(&self) -> SectionType;
}

/// Symbols that are backed by actual bytes in the binary.
pub trait RomSymbol: Symbol {
    fn rom_vram_range(&self) -> &RomVramRange;
}
