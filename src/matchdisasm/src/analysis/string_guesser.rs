/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::{error, fmt};

use crate::addresses::Vram;
use crate::config::Compiler;
use crate::metadata::{SymbolMetadata, SymbolType};
use crate::str_decoding::Encoding;

/// Aggressiveness of the rodata C string guesser. Lower levels are more
/// conservative; [`No`] disables guessing entirely.
///
/// A C string must start on a properly aligned boundary, must be
/// `'\0'`-terminated and is padded with `'\0'`s up to the next word boundary.
/// There is no way to bypass this hard restriction; the levels only relax
/// which *candidates* are considered.
///
/// The numeric thresholds baked into each level are tunables, not exact
/// science: they were calibrated on compiler output and default to
/// [`MultipleReferences`].
///
/// [`No`]: StringGuesserLevel::No
/// [`MultipleReferences`]: StringGuesserLevel::MultipleReferences
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum StringGuesserLevel {
    /// Completely disable the guessing feature.
    No,

    /// Only guess unreferenced-once, untyped, non-empty candidates.
    Conservative,

    /// A string no longer needs to be referenced only once to be considered
    /// a candidate. Deduplication optimizations produce those.
    MultipleReferences,

    /// Allow empty strings. Likely to yield false positives.
    EmptyStrings,

    /// Guess even if type information was autodetected by other means.
    IgnoreDetectedType,

    /// Guess everything that is not explicitly typed by the user.
    Full,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum StringGuessError {
    UserTypeIsNotCString,
    UserTypeMissingTerminatorAndNoGivenSize,
    ReachedLateRodata,
    NotProperAlignment,
    GuesserDisabled,
    ReferencedMoreThanOnce,
    EmptyString,
    HasAutodetectedType,
    HasBeenDereferenced,
    InvalidString,
}

impl fmt::Display for StringGuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringGuessError::UserTypeIsNotCString => {
                write!(f, "the user typed this symbol as a non-string")
            }
            StringGuessError::UserTypeMissingTerminatorAndNoGivenSize => {
                write!(f, "user-declared string has no terminator and no size")
            }
            StringGuessError::ReachedLateRodata => write!(f, "inside late rodata"),
            StringGuessError::NotProperAlignment => write!(f, "not properly aligned"),
            StringGuessError::GuesserDisabled => write!(f, "string guessing is disabled"),
            StringGuessError::ReferencedMoreThanOnce => {
                write!(f, "referenced more than once")
            }
            StringGuessError::EmptyString => write!(f, "empty string"),
            StringGuessError::HasAutodetectedType => {
                write!(f, "symbol already has a detected type")
            }
            StringGuessError::HasBeenDereferenced => {
                write!(f, "symbol has been dereferenced")
            }
            StringGuessError::InvalidString => write!(f, "bytes do not form a valid string"),
        }
    }
}
impl error::Error for StringGuessError {}

impl StringGuesserLevel {
    pub const fn default() -> Self {
        StringGuesserLevel::MultipleReferences
    }

    /// Decide if the bytes at `vram` look like a C string.
    ///
    /// Returns the string size in bytes, terminator included.
    pub(crate) fn guess(
        &self,
        metadata: Option<&SymbolMetadata>,
        vram: Vram,
        bytes: &[u8],
        encoding: Encoding,
        compiler: Option<Compiler>,
        reached_late_rodata: bool,
    ) -> Result<usize, StringGuessError> {
        if let Some(metadata) = metadata {
            // User-declared info wins over every heuristic.
            if metadata.user_declared_type() == Some(SymbolType::CString) {
                let size = if let Some(size) = metadata.user_declared_size() {
                    size.inner() as usize
                } else if let Some(str_end) = bytes.iter().position(|x| *x == 0) {
                    str_end + 1
                } else {
                    return Err(StringGuessError::UserTypeMissingTerminatorAndNoGivenSize);
                };

                return Ok(size);
            } else if metadata.user_declared_type().is_some() {
                return Err(StringGuessError::UserTypeIsNotCString);
            }
        }

        if reached_late_rodata {
            return Err(StringGuessError::ReachedLateRodata);
        }

        let expected_alignment = {
            let alignment_shift = compiler
                .and_then(|x| x.prev_align_for_type(SymbolType::CString))
                .unwrap_or(2);

            1 << alignment_shift
        };
        if vram.inner() % expected_alignment != 0 {
            return Err(StringGuessError::NotProperAlignment);
        }

        if *self <= Self::No {
            return Err(StringGuessError::GuesserDisabled);
        }

        if metadata.is_some_and(|x| x.reference_counter() > 1)
            && *self < Self::MultipleReferences
        {
            return Err(StringGuessError::ReferencedMoreThanOnce);
        }

        if bytes.first() == Some(&b'\0') && *self < Self::EmptyStrings {
            // Empty strings are pretty rare and unlikely.
            return Err(StringGuessError::EmptyString);
        }

        if metadata.is_some_and(|x| {
            x.autodetected_type()
                .is_some_and(|x| x != SymbolType::CString)
        }) && *self < Self::IgnoreDetectedType
        {
            return Err(StringGuessError::HasAutodetectedType);
        }

        if metadata.is_some_and(|x| {
            x.access_type()
                .is_some_and(|(access, _)| !access.is_unaligned_part())
        }) && *self < Self::IgnoreDetectedType
        {
            // Something dereferenced this symbol directly, so it is unlikely
            // to be a string. Unaligned halves are fine, those show up when
            // copying strings onto the stack.
            return Err(StringGuessError::HasBeenDereferenced);
        }

        encoding
            .check_valid(bytes)
            .map_err(|_| StringGuessError::InvalidString)
    }
}

impl Default for StringGuesserLevel {
    fn default() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_string_ending_in_word_of_zeroes() {
        static BYTES: [u8; 16] = [
            0x54, 0x68, 0x61, 0x74, 0x20, 0x77, 0x61, 0x79, 0x21, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00,
        ];
        let guesser = StringGuesserLevel::MultipleReferences;

        let maybe_size = guesser.guess(
            None,
            Vram::new(0x80000000),
            &BYTES,
            Encoding::Ascii,
            None,
            false,
        );

        assert_eq!(maybe_size, Ok(10));
    }

    #[test]
    fn guess_string_ending_tight() {
        static BYTES: [u8; 4] = [0x4E, 0x41, 0x4E, 0x00];
        let guesser = StringGuesserLevel::MultipleReferences;

        let maybe_size = guesser.guess(
            None,
            Vram::new(0x80000000),
            &BYTES,
            Encoding::Ascii,
            None,
            false,
        );

        assert_eq!(maybe_size, Ok(4));
    }

    #[test]
    fn unaligned_candidate_is_rejected() {
        static BYTES: [u8; 4] = [0x4E, 0x41, 0x4E, 0x00];
        let guesser = StringGuesserLevel::Full;

        let maybe_size = guesser.guess(
            None,
            Vram::new(0x80000001),
            &BYTES,
            Encoding::Ascii,
            None,
            false,
        );

        assert_eq!(maybe_size, Err(StringGuessError::NotProperAlignment));
    }
}
