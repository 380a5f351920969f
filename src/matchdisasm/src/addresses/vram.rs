/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::{fmt, ops};

use super::Size;

/// A 32-bit virtual address.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Vram {
    inner: u32,
}

impl Vram {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self { inner: value }
    }

    #[must_use]
    pub const fn inner(&self) -> u32 {
        self.inner
    }

    #[must_use]
    pub const fn add_size(&self, size: &Size) -> Self {
        Self {
            inner: self.inner + size.inner(),
        }
    }

    /// Distance to a lower or equal `Vram`.
    #[must_use]
    pub const fn sub_vram(&self, rhs: &Vram) -> Size {
        Size::new(self.inner - rhs.inner)
    }

    #[must_use]
    pub const fn add_offset(&self, offset: &VramOffset) -> Self {
        Self {
            inner: self.inner.wrapping_add_signed(offset.inner()),
        }
    }
}

impl ops::Add<Size> for Vram {
    type Output = Vram;

    fn add(self, rhs: Size) -> Self::Output {
        self.add_size(&rhs)
    }
}

impl ops::Add<VramOffset> for Vram {
    type Output = Vram;

    fn add(self, rhs: VramOffset) -> Self::Output {
        self.add_offset(&rhs)
    }
}

impl ops::AddAssign<VramOffset> for Vram {
    fn add_assign(&mut self, rhs: VramOffset) {
        *self = self.add_offset(&rhs);
    }
}

impl ops::Sub<Vram> for Vram {
    type Output = VramOffset;

    fn sub(self, rhs: Vram) -> Self::Output {
        VramOffset::new((self.inner as i64 - rhs.inner as i64) as i32)
    }
}

impl fmt::Debug for Vram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vram {{ 0x{:08X} }}", self.inner)
    }
}

impl fmt::Display for Vram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.inner)
    }
}

/// A signed distance between two [`Vram`]s.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct VramOffset {
    inner: i32,
}

impl VramOffset {
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self { inner: value }
    }

    #[must_use]
    pub const fn inner(&self) -> i32 {
        self.inner
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.inner < 0
    }

    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.inner > 0
    }
}

impl fmt::Debug for VramOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VramOffset {{ {} }}", self.inner)
    }
}
