//! Hex color codec
//!
//! The strip family in use (SK6812/WS2812) expects green first on the wire,
//! so parsed colors are stored as green, red, blue.

/// A color in the strip's native channel order (green, red, blue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NativeColor {
    pub g: u8,
    pub r: u8,
    pub b: u8,
}

impl NativeColor {
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    /// Build a native color from channels given in red, green, blue order.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { g, r, b }
    }

    /// Channels in wire order.
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.g, self.r, self.b]
    }

    /// Scale every channel by the global brightness register.
    ///
    /// 255 keeps the color unchanged, 0 yields black.
    #[must_use]
    pub const fn scaled(self, brightness: u8) -> Self {
        Self {
            g: scale8(self.g, brightness),
            r: scale8(self.r, brightness),
            b: scale8(self.b, brightness),
        }
    }
}

/// Convert `RRGGBB` (optionally `#`-prefixed) into the native channel order.
///
/// Never fails: a channel whose two digits do not start with a hex digit, or
/// that lies past the end of the input, becomes 0.
pub fn hex_to_native_color(input: &str) -> NativeColor {
    let digits = input.strip_prefix('#').unwrap_or(input).as_bytes();

    let red = parse_channel(digits, 0);
    let green = parse_channel(digits, 2);
    let blue = parse_channel(digits, 4);

    NativeColor::from_rgb(red, green, blue)
}

/// Parse the two-digit group at `offset`, stopping at the first non-hex byte.
fn parse_channel(digits: &[u8], offset: usize) -> u8 {
    let Some(group) = digits.get(offset..) else {
        return 0;
    };

    group
        .iter()
        .take(2)
        .map_while(|&byte| hex_value(byte))
        .fold(0u8, |acc, nibble| (acc << 4) | nibble)
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Fixed variant: a factor of 255 is the identity.
#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (scale as u16 + 1)) >> 8) as u8
}
