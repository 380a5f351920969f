/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::string::String;
use core::{error, fmt};

/// Character encoding used to validate and decode C string candidates.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Encoding {
    Ascii,
    ShiftJis,
    EucJp,
    EucCn,
}

// Escape characters that are unlikely to appear in a real string. A candidate
// containing any of these is rejected.
static BANNED_ESCAPE_CHARACTERS: [u8; 25] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, //
    // 0x07 '\a', 0x09 '\t', 0x0A '\n', 0x0C '\f', 0x0D '\r' are fine
    0x08, 0x0B, //
    0x0E, 0x0F, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, //
    // 0x1A and 0x1B are used as escape prefixes by some games
    0x1C, 0x1D, 0x1E, 0x1F,
];

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum DecodingError {
    AsciiOutOfRange { index: usize, character: u8 },
    InvalidFirstByteOfMultibyte { index: usize, character: u8 },
    TruncatedMultibyte { index: usize },
    BannedCharacter { index: usize, character: u8 },
    MissingTerminator,
    DecodeFailed,
}

impl fmt::Display for DecodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodingError::AsciiOutOfRange { index, character } => {
                write!(f, "Byte 0x{:02X} at {} is not ascii", character, index)
            }
            DecodingError::InvalidFirstByteOfMultibyte { index, character } => write!(
                f,
                "Byte 0x{:02X} at {} is not a valid multibyte start",
                character, index
            ),
            DecodingError::TruncatedMultibyte { index } => {
                write!(f, "Truncated multibyte sequence at {}", index)
            }
            DecodingError::BannedCharacter { index, character } => write!(
                f,
                "Control character 0x{:02X} at {} is unlikely to be part of a real string",
                character, index
            ),
            DecodingError::MissingTerminator => write!(f, "No NUL terminator found"),
            DecodingError::DecodeFailed => write!(f, "Bytes do not decode in this encoding"),
        }
    }
}
impl error::Error for DecodingError {}

impl Encoding {
    pub const fn default() -> Self {
        Encoding::Ascii
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ASCII" => Some(Encoding::Ascii),
            "SHIFT-JIS" => Some(Encoding::ShiftJis),
            "EUC-JP" => Some(Encoding::EucJp),
            "EUC-CN" | "GB2312" => Some(Encoding::EucCn),
            _ => None,
        }
    }

    const fn as_encoding_rs(&self) -> &'static encoding_rs::Encoding {
        match self {
            // `encoding_rs` has no dedicated ascii decoder; windows-1252 is
            // its ascii-compatible superset. Bytes above 0x7F are rejected
            // before decoding.
            Encoding::Ascii => encoding_rs::WINDOWS_1252,
            Encoding::ShiftJis => encoding_rs::SHIFT_JIS,
            Encoding::EucJp => encoding_rs::EUC_JP,
            Encoding::EucCn => encoding_rs::GBK,
        }
    }

    /// Check that `bytes` starts with a valid NUL-terminated string in this
    /// encoding.
    ///
    /// Returns the size of the string *including* the terminator.
    pub(crate) fn check_valid(&self, bytes: &[u8]) -> Result<usize, DecodingError> {
        let mut i = 0;

        while i < bytes.len() && bytes[i] != 0 {
            let character = bytes[i];

            if character > 0x7F {
                let sequence_length = self.multibyte_len(bytes, i)?;
                i += sequence_length;
                continue;
            }

            if BANNED_ESCAPE_CHARACTERS.contains(&character) {
                return Err(DecodingError::BannedCharacter {
                    index: i,
                    character,
                });
            }

            i += 1;
        }

        if i >= bytes.len() {
            return Err(DecodingError::MissingTerminator);
        }

        Ok(i + 1)
    }

    fn multibyte_len(&self, bytes: &[u8], index: usize) -> Result<usize, DecodingError> {
        let character = bytes[index];

        let sequence_length = match self {
            Encoding::Ascii => {
                return Err(DecodingError::AsciiOutOfRange {
                    index,
                    character,
                });
            }
            Encoding::ShiftJis => match character {
                // Single-byte halfwidth katakana.
                0xA1..=0xDF => 1,
                0x80 | 0xA0 | 0xFD..=0xFF => {
                    return Err(DecodingError::InvalidFirstByteOfMultibyte {
                        index,
                        character,
                    });
                }
                _ => 2,
            },
            Encoding::EucJp | Encoding::EucCn => match character {
                0x8E | 0x8F => 2,
                0xA1..=0xFE => 2,
                _ => {
                    return Err(DecodingError::InvalidFirstByteOfMultibyte {
                        index,
                        character,
                    });
                }
            },
        };

        if index + sequence_length > bytes.len() || bytes[index + sequence_length - 1] == 0 {
            return Err(DecodingError::TruncatedMultibyte { index });
        }

        Ok(sequence_length)
    }

    /// Decode a validated string (without its terminator) into an escaped
    /// form suitable for an `.asciz` directive.
    pub(crate) fn decode_escaped(&self, bytes: &[u8]) -> Result<String, DecodingError> {
        let (decoded, _, had_errors) = self.as_encoding_rs().decode(bytes);
        if had_errors {
            return Err(DecodingError::DecodeFailed);
        }

        let mut escaped = String::with_capacity(decoded.len());
        for c in decoded.chars() {
            match c {
                '"' => escaped.push_str("\\\""),
                '\\' => escaped.push_str("\\\\"),
                '\x07' => escaped.push_str("\\a"),
                '\t' => escaped.push_str("\\t"),
                '\n' => escaped.push_str("\\n"),
                '\x0C' => escaped.push_str("\\f"),
                '\r' => escaped.push_str("\\r"),
                _ => escaped.push(c),
            }
        }
        Ok(escaped)
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_string_with_padding() {
        static BYTES: [u8; 8] = [0x48, 0x65, 0x6C, 0x6C, 0x6F, 0x00, 0x00, 0x00];

        assert_eq!(Encoding::Ascii.check_valid(&BYTES), Ok(6));
        assert_eq!(
            Encoding::Ascii.decode_escaped(&BYTES[..5]).as_deref(),
            Ok("Hello")
        );
    }

    #[test]
    fn unterminated_string_is_rejected() {
        static BYTES: [u8; 4] = [0x48, 0x65, 0x6C, 0x6C];

        assert_eq!(
            Encoding::Ascii.check_valid(&BYTES),
            Err(DecodingError::MissingTerminator)
        );
    }

    #[test]
    fn binary_data_is_rejected() {
        static BYTES: [u8; 8] = [0x02, 0x48, 0x65, 0x6C, 0x6C, 0x6F, 0x00, 0x00];

        assert_eq!(
            Encoding::Ascii.check_valid(&BYTES),
            Err(DecodingError::BannedCharacter {
                index: 0,
                character: 0x02
            })
        );
    }

    #[test]
    fn shift_jis_multibyte() {
        // "テスト\0"
        static BYTES: [u8; 8] = [0x83, 0x65, 0x83, 0x58, 0x83, 0x67, 0x00, 0x00];

        assert_eq!(Encoding::ShiftJis.check_valid(&BYTES), Ok(7));
        assert_eq!(Encoding::Ascii.check_valid(&BYTES).is_ok(), false);
    }
}
