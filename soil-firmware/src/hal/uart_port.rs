// Serielle Schnittstelle für den Command Channel

use esp_hal::Blocking;
use esp_hal::uart::Uart;
use soil_core::{PortError, SerialPort};

/// Real Hardware UART
///
/// Lesen ist non-blocking (prüft vorher den RX-FIFO),
/// Schreiben blockiert bis alle Bytes im TX-FIFO sind.
pub struct UartSerialPort<'d> {
    uart: Uart<'d, Blocking>,
}

impl<'d> UartSerialPort<'d> {
    pub fn new(uart: Uart<'d, Blocking>) -> Self {
        Self { uart }
    }
}

impl SerialPort for UartSerialPort<'_> {
    fn read_byte(&mut self) -> Result<Option<u8>, PortError> {
        if !self.uart.read_ready() {
            return Ok(None);
        }

        let mut byte = [0u8; 1];
        match self.uart.read(&mut byte) {
            Ok(1) => Ok(Some(byte[0])),
            Ok(_) => Ok(None),
            Err(_) => Err(PortError::ReadFailed),
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), PortError> {
        let mut remaining = bytes;
        while !remaining.is_empty() {
            let written = self
                .uart
                .write(remaining)
                .map_err(|_| PortError::WriteFailed)?;
            remaining = &remaining[written..];
        }

        self.uart.flush().map_err(|_| PortError::WriteFailed)
    }
}
