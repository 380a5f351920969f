/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

/// Which prefix family autogenerated names use.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum AutogenPrefixMode {
    /// Prefix derived from the owning section (`RO_` for every rodata
    /// symbol).
    Section,
    /// Prefix derived from the inferred type (`STR_`/`FLT_`/`DBL_` for typed
    /// rodata symbols).
    Type,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SymbolNameGenerationSettings {
    prefix_mode: AutogenPrefixMode,
}

impl SymbolNameGenerationSettings {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prefix_mode: AutogenPrefixMode::Section,
        }
    }

    #[must_use]
    pub const fn prefix_mode(&self) -> AutogenPrefixMode {
        self.prefix_mode
    }

    #[must_use]
    pub const fn with_prefix_mode(self, prefix_mode: AutogenPrefixMode) -> Self {
        Self { prefix_mode }
    }
}

impl Default for SymbolNameGenerationSettings {
    fn default() -> Self {
        Self::new()
    }
}
