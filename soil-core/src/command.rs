//! Command Channel - zeilenbasiertes Text-Protokoll über die serielle Schnittstelle
//!
//! | Eingabe (case-insensitive) | Antwort                               |
//! |----------------------------|---------------------------------------|
//! | `GET SENSOR`               | `Valor Sensor: <rohwert>\r\n`         |
//! | alles andere               | `Comando desconhecido: <EINGABE>\r\n` |

use core::fmt::Write as _;

use heapless::{String, Vec};

use crate::state::SensorCell;
use crate::traits::{PortError, SerialPort};

/// Maximale Länge einer Kommandozeile in Bytes
///
/// Weitere Bytes bis zum Zeilenende werden verworfen.
pub const COMMAND_BUFFER_CAPACITY: usize = 32;

const GET_SENSOR: &[u8] = b"GET SENSOR";
const SENSOR_PREFIX: &str = "Valor Sensor: ";
const UNKNOWN_PREFIX: &[u8] = b"Comando desconhecido: ";
const LINE_END: &[u8] = b"\r\n";

/// Normalisierter Kommando-Text (getrimmt, Großbuchstaben)
pub type CommandText = Vec<u8, COMMAND_BUFFER_CAPACITY>;

/// Geparste Kommandozeile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Aktuellen Sensor-Rohwert abfragen
    GetSensor,
    /// Unbekanntes Kommando, wird in der Antwort zurückgegeben
    Unknown(CommandText),
}

impl Command {
    /// Parst eine Zeile (ohne Zeilenende)
    ///
    /// ASCII-Whitespace am Rand wird entfernt, Kleinbuchstaben werden zu
    /// Großbuchstaben.
    pub fn parse(line: &[u8]) -> Self {
        let mut text = CommandText::new();
        for byte in line.trim_ascii() {
            if text.push(byte.to_ascii_uppercase()).is_err() {
                break;
            }
        }

        if text.as_slice() == GET_SENSOR {
            Command::GetSensor
        } else {
            Command::Unknown(text)
        }
    }

    /// Schreibt die Antwort auf dieses Kommando
    pub fn respond<S: SerialPort>(&self, serial: &mut S, cell: &SensorCell) -> Result<(), PortError> {
        match self {
            Command::GetSensor => {
                // "Valor Sensor: 65535\r\n" = 21 Bytes
                let mut line: String<24> = String::new();
                write!(line, "{}{}\r\n", SENSOR_PREFIX, cell.read())
                    .map_err(|_| PortError::WriteFailed)?;
                serial.write_bytes(line.as_bytes())
            }
            Command::Unknown(text) => {
                serial.write_bytes(UNKNOWN_PREFIX)?;
                serial.write_bytes(text)?;
                serial.write_bytes(LINE_END)
            }
        }
    }
}

/// Zustandsmaschine für eingehende Bytes
///
/// Sammelt Bytes bis `\r` oder `\n`, dann wird die Zeile geparst und der
/// Puffer geleert. Ein Zeilenende bei leerem Puffer wird ignoriert (z.B. das
/// `\n` nach `\r`). Der Puffer gehört exklusiv dem Kommando-Task.
#[derive(Debug, Default)]
pub struct CommandChannel {
    buffer: CommandText,
}

impl CommandChannel {
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
        }
    }

    /// Verarbeitet ein Byte, liefert ein Kommando sobald eine Zeile fertig ist
    pub fn feed(&mut self, byte: u8) -> Option<Command> {
        match byte {
            b'\r' | b'\n' if self.buffer.is_empty() => None,
            b'\r' | b'\n' => {
                let command = Command::parse(&self.buffer);
                self.buffer.clear();
                Some(command)
            }
            _ => {
                // Puffer voll: überzählige Bytes gehen verloren
                let _ = self.buffer.push(byte);
                None
            }
        }
    }

    /// Bisher gesammelte Bytes der aktuellen Zeile
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Liest alle anliegenden Bytes und beantwortet fertige Zeilen
    ///
    /// Kehrt sofort zurück, wenn kein Byte anliegt.
    ///
    /// # Rückgabe
    /// Anzahl der geschriebenen Antworten
    pub fn poll<S: SerialPort>(&mut self, serial: &mut S, cell: &SensorCell) -> Result<usize, PortError> {
        let mut responses = 0;

        while let Some(byte) = serial.read_byte()? {
            if let Some(command) = self.feed(byte) {
                command.respond(serial, cell)?;
                responses += 1;
            }
        }

        Ok(responses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(channel: &mut CommandChannel, bytes: &[u8]) -> Option<Command> {
        let mut last = None;
        for &byte in bytes {
            if let Some(command) = channel.feed(byte) {
                last = Some(command);
            }
        }
        last
    }

    #[test]
    fn test_parse_get_sensor_case_insensitive() {
        assert_eq!(Command::parse(b"GET SENSOR"), Command::GetSensor);
        assert_eq!(Command::parse(b"get sensor"), Command::GetSensor);
        assert_eq!(Command::parse(b"  Get Sensor "), Command::GetSensor);
    }

    #[test]
    fn test_parse_unknown_is_normalized() {
        match Command::parse(b" foo ") {
            Command::Unknown(text) => assert_eq!(text.as_slice(), b"FOO"),
            _ => panic!("Expected Unknown variant"),
        }
    }

    #[test]
    fn test_feed_dispatches_on_terminator() {
        let mut channel = CommandChannel::new();
        assert_eq!(feed_all(&mut channel, b"GET SENSOR"), None);
        assert_eq!(channel.pending(), b"GET SENSOR");
        assert_eq!(channel.feed(b'\r'), Some(Command::GetSensor));
        assert!(channel.pending().is_empty());
        assert_eq!(channel.feed(b'\n'), None);
    }

    #[test]
    fn test_feed_empty_line_is_noop() {
        let mut channel = CommandChannel::new();
        assert_eq!(channel.feed(b'\n'), None);
        assert_eq!(channel.feed(b'\r'), None);
    }

    #[test]
    fn test_feed_drops_bytes_past_capacity() {
        let mut channel = CommandChannel::new();
        for _ in 0..COMMAND_BUFFER_CAPACITY + 10 {
            assert_eq!(channel.feed(b'a'), None);
        }
        assert_eq!(channel.pending().len(), COMMAND_BUFFER_CAPACITY);

        match channel.feed(b'\n') {
            Some(Command::Unknown(text)) => {
                assert_eq!(text.len(), COMMAND_BUFFER_CAPACITY);
                assert!(text.iter().all(|&b| b == b'A'));
            }
            other => panic!("Expected Unknown command, got {:?}", other),
        }

        // Nächste Zeile wird wieder normal verarbeitet
        assert_eq!(feed_all(&mut channel, b"get sensor\n"), Some(Command::GetSensor));
    }
}
