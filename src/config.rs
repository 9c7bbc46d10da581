pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// Pixels on the strip
pub const LED_COUNT: usize = 64;

/// TCP port of the control page and API
pub const HTTP_PORT: u16 = 80;
