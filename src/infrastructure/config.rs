use core::net::Ipv4Addr;

pub(crate) struct AccessPointConfig {
    pub ssid: &'static str,
    pub password: &'static str,
    pub address: Ipv4Addr,
    pub prefix_len: u8,
}

pub(crate) struct I2cBusConfig {
    pub frequency_khz: u32,
    pub bh1750_address: u8,
}

pub(crate) struct ServoConfig {
    pub frequency_hz: u32,
}

pub(crate) const ACCESS_POINT: AccessPointConfig = AccessPointConfig {
    ssid: match option_env!("TEPLICA_AP_SSID") {
        Some(ssid) => ssid,
        None => "ESP32_AP",
    },
    password: match option_env!("TEPLICA_AP_PASSWORD") {
        Some(password) => password,
        None => "12345678",
    },
    address: Ipv4Addr::new(192, 168, 4, 1),
    prefix_len: 24,
};

// The BME280 sits on the secondary address (0x77).
pub(crate) const I2C_BUS: I2cBusConfig = I2cBusConfig {
    frequency_khz: 100,
    bh1750_address: 0x23,
};

pub(crate) const SERVO: ServoConfig = ServoConfig { frequency_hz: 50 };

#[macro_export]
macro_rules! pump_gpio {
    ($p:expr) => {
        $p.GPIO17
    };
}

#[macro_export]
macro_rules! fan_gpio {
    ($p:expr) => {
        $p.GPIO16
    };
}

#[macro_export]
macro_rules! servo_gpio {
    ($p:expr) => {
        $p.GPIO19
    };
}

#[macro_export]
macro_rules! strip_gpio {
    ($p:expr) => {
        $p.GPIO18
    };
}

#[macro_export]
macro_rules! light_gpio {
    ($p:expr) => {
        $p.GPIO23
    };
}

#[macro_export]
macro_rules! i2c_sda_gpio {
    ($p:expr) => {
        $p.GPIO21
    };
}

#[macro_export]
macro_rules! i2c_scl_gpio {
    ($p:expr) => {
        $p.GPIO22
    };
}
