/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use crate::isa::Abi;
use crate::metadata::SymbolNameGenerationSettings;

use super::{AnalysisFeatures, Endian, GpConfig};

/// Run-wide configuration consumed by every analyzer.
///
/// Defaults live here rather than being scattered across call sites; every
/// toggle is an explicit field.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct GlobalConfig {
    endian: Endian,
    abi: Abi,
    gp_config: Option<GpConfig>,
    name_generation: SymbolNameGenerationSettings,
    features: AnalysisFeatures,
}

impl GlobalConfig {
    pub fn new(endian: Endian) -> Self {
        Self {
            endian,
            abi: Abi::O32,
            gp_config: None,
            name_generation: SymbolNameGenerationSettings::new(),
            features: AnalysisFeatures::new(),
        }
    }
}

impl GlobalConfig {
    pub const fn endian(&self) -> Endian {
        self.endian
    }
    pub const fn with_endian(self, endian: Endian) -> Self {
        Self { endian, ..self }
    }

    pub const fn abi(&self) -> Abi {
        self.abi
    }
    pub const fn with_abi(self, abi: Abi) -> Self {
        Self { abi, ..self }
    }

    pub const fn gp_config(&self) -> Option<GpConfig> {
        self.gp_config
    }
    pub const fn with_gp_config(self, gp_config: Option<GpConfig>) -> Self {
        Self { gp_config, ..self }
    }

    pub const fn name_generation(&self) -> &SymbolNameGenerationSettings {
        &self.name_generation
    }
    pub const fn with_name_generation(
        self,
        name_generation: SymbolNameGenerationSettings,
    ) -> Self {
        Self {
            name_generation,
            ..self
        }
    }

    pub const fn features(&self) -> &AnalysisFeatures {
        &self.features
    }
    pub const fn with_features(self, features: AnalysisFeatures) -> Self {
        Self { features, ..self }
    }
}
