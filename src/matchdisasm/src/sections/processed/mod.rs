/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

pub mod data_section_processed;
pub mod executable_section_processed;
pub mod noload_section_processed;

pub use data_section_processed::DataSectionProcessed;
pub use executable_section_processed::ExecutableSectionProcessed;
pub use noload_section_processed::NoloadSectionProcessed;
