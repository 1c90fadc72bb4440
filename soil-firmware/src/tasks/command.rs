// Kommando Task - Beantwortet Text-Kommandos über UART
use defmt::{Debug2Format, debug, error, info, warn};
use embassy_time::Delay;
use esp_hal::uart::{Config as UartConfig, Uart};

use crate::config::{SERIAL_BAUDRATE, SERIAL_POLL_PERIOD_MS};
use crate::hal::UartSerialPort;
use crate::tasks::RUN_FOREVER;
use crate::{CommandChannel, SensorCell, SerialPort, StopSignal, run_periodic};

/// Kommando Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Liest alle anliegenden Bytes, beantwortet fertige Zeilen und schläft
/// 20 ms wenn nichts mehr anliegt. Der Zeilenpuffer gehört nur diesem Task.
///
/// # Parameter
/// - `serial`: Serielle Schnittstelle (Hardware oder Mock)
/// - `cell`: Shared State mit dem letzten Rohwert
/// - `stop`: Stop-Signal (auf dem Gerät nie gesetzt)
pub async fn command_logic<S: SerialPort>(mut serial: S, cell: &SensorCell, stop: &StopSignal) {
    let mut channel = CommandChannel::new();
    info!("Serial: Ready for commands ({} baud)", SERIAL_BAUDRATE);

    run_periodic(stop, &mut Delay, SERIAL_POLL_PERIOD_MS, || {
        match channel.poll(&mut serial, cell) {
            Ok(0) => {}
            Ok(responses) => debug!("Serial: {} response(s) sent", responses),
            Err(e) => warn!("Serial: I/O failed: {}", e),
        }
    })
    .await;
}

/// Kommando Task - Embassy Task für parallele Ausführung
///
/// # Parameter
/// - `uart0`: UART0 Peripheral
/// - `tx` / `rx`: UART-Pins
/// - `cell`: Shared State mit dem letzten Rohwert
#[embassy_executor::task]
pub async fn command_task(
    uart0: esp_hal::peripherals::UART0<'static>,
    tx: esp_hal::peripherals::GPIO16<'static>,
    rx: esp_hal::peripherals::GPIO17<'static>,
    cell: &'static SensorCell,
) {
    let config = UartConfig::default().with_baudrate(SERIAL_BAUDRATE);
    let uart = match Uart::new(uart0, config) {
        Ok(uart) => uart.with_tx(tx).with_rx(rx),
        Err(e) => {
            error!("Serial: Invalid UART configuration: {}", Debug2Format(&e));
            return;
        }
    };

    command_logic(UartSerialPort::new(uart), cell, &RUN_FOREVER).await;
}
