/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{string::String, sync::Arc};
use core::fmt;

/// Name of a group of overlays which may share vram space.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct OverlayCategoryName {
    inner: Arc<str>,
}

impl OverlayCategoryName {
    pub fn new(name: String) -> Self {
        Self { inner: name.into() }
    }

    pub fn inner(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for OverlayCategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}
