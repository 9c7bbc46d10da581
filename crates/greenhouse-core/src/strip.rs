//! LED strip buffer and driver abstraction
//!
//! The buffer keeps unscaled pixel colors plus a global brightness register.
//! Brightness is applied to a copy of the buffer at flush time, so changing
//! it never loses the chosen color.

use crate::color::NativeColor;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Colors arrive already scaled and in wire order.
pub trait LedDriver<const N: usize> {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[NativeColor; N]);
}

/// Pixel buffer of an addressable strip with `N` LEDs
pub struct LedStrip<D: LedDriver<N>, const N: usize> {
    driver: D,
    pixels: [NativeColor; N],
    brightness: u8,
}

impl<D: LedDriver<N>, const N: usize> LedStrip<D, N> {
    /// Create a dark strip with the given brightness register.
    ///
    /// Nothing is written to the hardware until the first flush.
    pub const fn new(driver: D, brightness: u8) -> Self {
        Self {
            driver,
            pixels: [NativeColor::BLACK; N],
            brightness,
        }
    }

    /// Write the same color into every pixel and flush.
    pub fn fill(&mut self, color: NativeColor) {
        self.pixels = [color; N];
        self.show();
    }

    /// Change the global brightness register and flush.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
        self.show();
    }

    /// Push the buffer to the hardware with brightness applied.
    pub fn show(&mut self) {
        let brightness = self.brightness;
        let frame = self.pixels.map(|pixel| pixel.scaled(brightness));
        self.driver.write(&frame);
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn pixels(&self) -> &[NativeColor; N] {
        &self.pixels
    }
}
