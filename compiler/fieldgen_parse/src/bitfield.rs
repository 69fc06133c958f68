//! Bitfield marker detection.
//!
//! Schema dumps spell a bitfield member's type as `bitfield:<width>` instead
//! of naming an integer type. The width becomes the descriptor's
//! `bitfield_width` and a [`BitfieldTypePolicy`] picks the declared type.

use crate::FieldParseError;

/// Prefix marking a bitfield type string.
pub const BITFIELD_PREFIX: &str = "bitfield:";

/// Chooses the declared integer type for a bitfield of a given width.
pub trait BitfieldTypePolicy {
    /// The type name for a `width`-bit bitfield, or `None` if no type is wide enough.
    fn type_for_width(&self, width: usize) -> Option<&str>;
}

/// The smallest fixed-width unsigned integer that holds the width.
///
/// `0..=8 → uint8_t`, `..=16 → uint16_t`, `..=32 → uint32_t`, `..=64 → uint64_t`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SmallestUnsigned;

impl BitfieldTypePolicy for SmallestUnsigned {
    fn type_for_width(&self, width: usize) -> Option<&str> {
        match width {
            0..=8 => Some("uint8_t"),
            9..=16 => Some("uint16_t"),
            17..=32 => Some("uint32_t"),
            33..=64 => Some("uint64_t"),
            _ => None,
        }
    }
}

impl<P: BitfieldTypePolicy + ?Sized> BitfieldTypePolicy for &P {
    fn type_for_width(&self, width: usize) -> Option<&str> {
        (**self).type_for_width(width)
    }
}

/// Extract the bitfield width from a type string.
///
/// Returns `Ok(None)` when the string does not start with [`BITFIELD_PREFIX`]
/// (including strings shorter than the prefix). The width must be a decimal
/// integer; surrounding whitespace is tolerated, anything else is an error.
pub(crate) fn bitfield_width(type_name: &str) -> Result<Option<usize>, FieldParseError> {
    let Some(width) = type_name.strip_prefix(BITFIELD_PREFIX) else {
        return Ok(None);
    };

    parse_width(width)
        .map(Some)
        .ok_or_else(|| FieldParseError::MalformedBitfieldWidth {
            type_name: type_name.to_owned(),
            width: width.to_owned(),
        })
}

fn parse_width(text: &str) -> Option<usize> {
    let digits = text.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
