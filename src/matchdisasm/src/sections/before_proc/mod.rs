/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

pub mod data_section;
pub mod executable_section;
pub mod noload_section;

pub use data_section::DataSection;
pub use executable_section::ExecutableSection;
pub use noload_section::NoloadSection;
