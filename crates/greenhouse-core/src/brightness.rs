/// Strip brightness in percent, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct BrightnessLevel(u8);

impl BrightnessLevel {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Clamp an arbitrary integer into the percent range.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn clamped(value: i32) -> Self {
        if value <= 0 {
            Self::MIN
        } else if value >= 100 {
            Self::MAX
        } else {
            Self(value as u8)
        }
    }

    /// Percent value.
    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Linear map to the 8-bit hardware register, truncating.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn to_register(self) -> u8 {
        (self.0 as u16 * 255 / 100) as u8
    }

    /// Recover the percent from a register value, rounding to nearest.
    ///
    /// Inverse of [`Self::to_register`] for every percent.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_register(register: u8) -> Self {
        Self(((register as u16 * 100 + 127) / 255) as u8)
    }
}
