/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

mod address_range;
mod gp_value;
mod rom;
mod rom_vram_range;
mod size;
mod vram;

pub use address_range::AddressRange;
pub use gp_value::GpValue;
pub use rom::Rom;
pub use rom_vram_range::RomVramRange;
pub use size::Size;
pub use vram::{Vram, VramOffset};

/// An address-like value which may know how many bytes it spans.
///
/// Used by the interval-aware containers to answer "does this entry contain
/// the queried address" questions.
pub trait SizedAddress {
    fn size(&self) -> Option<Size>;
}
