// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Port-Traits aus soil-core
// für die ESP32-C6 Peripherie.

pub mod adc_sensor;
pub mod lcd_display;
pub mod led_output;
pub mod uart_port;

pub use adc_sensor::AdcMoistureSensor;
pub use lcd_display::Lcd1602;
pub use led_output::LedOutput;
pub use uart_port::UartSerialPort;
