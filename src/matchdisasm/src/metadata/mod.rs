/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

mod overlay_category;
mod overlay_category_name;
mod parent_section_metadata;
pub mod segment_metadata;
mod symbol_metadata;
mod symbol_name_generation;
mod symbol_type;

pub use overlay_category::OverlayCategory;
pub use overlay_category_name::OverlayCategoryName;
pub use parent_section_metadata::ParentSectionMetadata;
pub use segment_metadata::SegmentMetadata;
pub use symbol_metadata::{GeneratedBy, RodataMigrationBehavior, SymbolMetadata};
pub use symbol_name_generation::{AutogenPrefixMode, SymbolNameGenerationSettings};
pub use symbol_type::SymbolType;
