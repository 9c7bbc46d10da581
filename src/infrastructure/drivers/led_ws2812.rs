use esp_hal::{gpio::interconnect::PeripheralOutput, peripherals::RMT, rmt::Rmt, time::Rate};
use esp_hal_smartled::{SmartLedsAdapter, buffer_size, smart_led_buffer};
use greenhouse_core::{LedDriver, NativeColor};
use log::warn;
use smart_leds::{RGB8, SmartLedsWrite};
use static_cell::make_static;

use crate::config::LED_COUNT;

/// SK6812/WS2812 strip on the RMT peripheral
///
/// The adapter sends pixels in GRB order on the wire, so native colors are
/// handed over channel for channel.
pub(crate) struct EspLedDriver<'a> {
    adapter: SmartLedsAdapter<'a, { buffer_size(LED_COUNT) }>,
}

impl<'a> EspLedDriver<'a> {
    /// Create a new driver on RMT channel 0.
    pub(crate) fn new<O>(rmt: RMT<'a>, pin: O) -> Self
    where
        O: PeripheralOutput<'a>,
    {
        let rmt = Rmt::new(rmt, Rate::from_mhz(80)).unwrap();

        let rmt_buffer = make_static!(smart_led_buffer!(LED_COUNT));
        let adapter = SmartLedsAdapter::new(rmt.channel0, pin, rmt_buffer);

        Self { adapter }
    }
}

impl LedDriver<LED_COUNT> for EspLedDriver<'static> {
    fn write(&mut self, colors: &[NativeColor; LED_COUNT]) {
        let pixels = colors.iter().map(|color| RGB8 {
            r: color.r,
            g: color.g,
            b: color.b,
        });
        let result = critical_section::with(|_| self.adapter.write(pixels));
        if let Err(e) = result {
            warn!("led_strip: write failed: {:?}", e);
        }
    }
}
