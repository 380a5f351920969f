/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

mod analysis_features;
mod compiler;
mod endian;
mod global_config;
mod gp_config;

pub use analysis_features::AnalysisFeatures;
pub use compiler::Compiler;
pub use endian::Endian;
pub use global_config::GlobalConfig;
pub use gp_config::GpConfig;
