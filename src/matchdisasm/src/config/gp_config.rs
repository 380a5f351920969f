/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use crate::addresses::GpValue;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct GpConfig {
    gp_value: GpValue,
}

impl GpConfig {
    #[must_use]
    pub const fn new(gp_value: GpValue) -> Self {
        Self { gp_value }
    }

    #[must_use]
    pub const fn gp_value(&self) -> GpValue {
        self.gp_value
    }
}
