/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

/// Register naming convention.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Abi {
    /// Plain register numbers (`$5`).
    Numeric,
    O32,
    N32,
    N64,
}

impl Abi {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "numeric" | "NUMERIC" => Some(Abi::Numeric),
            "o32" | "O32" => Some(Abi::O32),
            "n32" | "N32" => Some(Abi::N32),
            "n64" | "N64" => Some(Abi::N64),
            _ => None,
        }
    }
}

impl Default for Abi {
    fn default() -> Self {
        Abi::O32
    }
}
