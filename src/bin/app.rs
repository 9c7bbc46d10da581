#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};
use log::{error, info};
use teplica_greenhouse::{
    config,
    controllers::init_controllers,
    fan_gpio,
    i2c_scl_gpio,
    i2c_sda_gpio,
    infrastructure::{drivers::start_wifi_ap, hardware::GreenhouseHardware, tasks::http_server_task},
    light_gpio,
    pump_gpio,
    servo_gpio,
    strip_gpio,
};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Allocate heap memory (64 + 32 KB)
    esp_alloc::heap_allocator!(
        #[unsafe(link_section = ".dram2_uninit")] size: 64 * 1024
    );
    esp_alloc::heap_allocator!(size: 32 * 1024);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Actuators go to their boot state before the network comes up
    let controller = init_controllers(GreenhouseHardware {
        pump: pump_gpio!(peripherals).into(),
        fan: fan_gpio!(peripherals).into(),
        light: light_gpio!(peripherals).into(),
        servo: servo_gpio!(peripherals).into(),
        strip: strip_gpio!(peripherals).into(),
        sda: i2c_sda_gpio!(peripherals).into(),
        scl: i2c_scl_gpio!(peripherals).into(),
        ledc: peripherals.LEDC,
        rmt: peripherals.RMT,
        i2c: peripherals.I2C0,
    });

    match start_wifi_ap(spawner, peripherals.WIFI).await {
        Ok(stack) => {
            spawner.spawn(http_server_task(stack, controller)).ok();
            info!("greenhouse: serving on port {}", config::HTTP_PORT);
        }
        Err(e) => error!("greenhouse: access point failed: {:?}", e),
    }

    loop {
        Timer::after(Duration::from_secs(5)).await;
    }
}
