// LCD 16x2 (HD44780) über PCF8574 I2C-Backpack
//
// Den Treiber (Init-Sequenz, 4-Bit Transfer) liefert lcd-lcm1602-i2c,
// hier wird er nur an den TextDisplay Port angepasst.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use lcd_lcm1602_i2c::sync_lcd::Lcd;
use soil_core::{PortError, TextDisplay};

/// Zeilen des LCD
const LCD_ROWS: u8 = 2;

/// Real Hardware Display
///
/// Leiht sich I2C-Bus und Delay für seine gesamte Lebensdauer,
/// beide werden im Display-Task erstellt.
pub struct Lcd1602<'a, I, D>
where
    I: I2c,
    D: DelayNs,
{
    lcd: Lcd<'a, I, D>,
}

impl<'a, I, D> Lcd1602<'a, I, D>
where
    I: I2c,
    D: DelayNs,
{
    /// Initialisiert das LCD (2 Zeilen, Cursor aus)
    ///
    /// # Parameter
    /// - `i2c`: I2C-Bus zum PCF8574
    /// - `delay`: Delay für die Init-Sequenz
    /// - `address`: I2C-Adresse des Backpacks (meist 0x27)
    ///
    /// # Fehlerbehandlung
    /// Gibt PortError::WriteFailed zurück wenn das Backpack nicht antwortet.
    /// Kann danach mit denselben Ressourcen erneut aufgerufen werden.
    pub fn init(i2c: &'a mut I, delay: &'a mut D, address: u8) -> Result<Self, PortError> {
        let lcd = Lcd::new(i2c, delay)
            .with_address(address)
            .with_cursor_on(false)
            .with_rows(LCD_ROWS)
            .init()
            .map_err(|_| PortError::WriteFailed)?;

        Ok(Self { lcd })
    }
}

impl<I, D> TextDisplay for Lcd1602<'_, I, D>
where
    I: I2c + Send,
    D: DelayNs + Send,
{
    fn clear(&mut self) -> Result<(), PortError> {
        self.lcd.clear().map_err(|_| PortError::WriteFailed)
    }

    fn write_at(&mut self, col: u8, row: u8, text: &str) -> Result<(), PortError> {
        self.lcd
            .set_cursor(row % LCD_ROWS, col)
            .map_err(|_| PortError::WriteFailed)?;
        self.lcd.write_str(text).map_err(|_| PortError::WriteFailed)
    }
}
