/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

/// Every analysis toggle, enumerated in one place.
///
/// Defaults are part of the contract: everything is enabled except features
/// that are known to misfire on unusual inputs, which callers opt into per
/// project.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct AnalysisFeatures {
    string_detection: bool,
    float_detection: bool,
    jumptable_detection: bool,
    pseudo_instructions: bool,
    handwritten_function_detection: bool,
    rodata_migration: bool,
    section_boundary_detection: bool,
}

impl AnalysisFeatures {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            string_detection: true,
            float_detection: true,
            jumptable_detection: true,
            pseudo_instructions: true,
            handwritten_function_detection: true,
            rodata_migration: true,
            section_boundary_detection: false,
        }
    }

    #[must_use]
    pub const fn string_detection(&self) -> bool {
        self.string_detection
    }
    #[must_use]
    pub const fn with_string_detection(self, string_detection: bool) -> Self {
        Self {
            string_detection,
            ..self
        }
    }

    #[must_use]
    pub const fn float_detection(&self) -> bool {
        self.float_detection
    }
    #[must_use]
    pub const fn with_float_detection(self, float_detection: bool) -> Self {
        Self {
            float_detection,
            ..self
        }
    }

    #[must_use]
    pub const fn jumptable_detection(&self) -> bool {
        self.jumptable_detection
    }
    #[must_use]
    pub const fn with_jumptable_detection(self, jumptable_detection: bool) -> Self {
        Self {
            jumptable_detection,
            ..self
        }
    }

    #[must_use]
    pub const fn pseudo_instructions(&self) -> bool {
        self.pseudo_instructions
    }
    #[must_use]
    pub const fn with_pseudo_instructions(self, pseudo_instructions: bool) -> Self {
        Self {
            pseudo_instructions,
            ..self
        }
    }

    #[must_use]
    pub const fn handwritten_function_detection(&self) -> bool {
        self.handwritten_function_detection
    }
    #[must_use]
    pub const fn with_handwritten_function_detection(
        self,
        handwritten_function_detection: bool,
    ) -> Self {
        Self {
            handwritten_function_detection,
            ..self
        }
    }

    #[must_use]
    pub const fn rodata_migration(&self) -> bool {
        self.rodata_migration
    }
    #[must_use]
    pub const fn with_rodata_migration(self, rodata_migration: bool) -> Self {
        Self {
            rodata_migration,
            ..self
        }
    }

    #[must_use]
    pub const fn section_boundary_detection(&self) -> bool {
        self.section_boundary_detection
    }
    #[must_use]
    pub const fn with_section_boundary_detection(self, section_boundary_detection: bool) -> Self {
        Self {
            section_boundary_detection,
            ..self
        }
    }
}

impl Default for AnalysisFeatures {
    fn default() -> Self {
        Self::new()
    }
}
