// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use soil_core::CalibrationBounds;

// ============================================================================
// Sensor Konfiguration
// ============================================================================

/// GPIO-Pin für den kapazitiven Bodenfeuchte-Sensor (ADC1)
pub const SENSOR_GPIO_PIN: u8 = 4;

/// Kalibrierung des Sensors (Rohwerte)
/// Trocken (Luft) = 4095, Nass (Wasser) = 1800 → höherer Wert = trockener
pub const CALIBRATION: CalibrationBounds = CalibrationBounds::new(4095, 1800);

/// Abtast-Intervall des Sensor-Tasks in Millisekunden
pub const SENSOR_SAMPLE_PERIOD_MS: u32 = 1000;

// ============================================================================
// Display Konfiguration
// ============================================================================

/// I2C-Pins für das LCD (PCF8574 Backpack)
pub const I2C_SDA_GPIO_PIN: u8 = 21;
pub const I2C_SCL_GPIO_PIN: u8 = 22;

/// I2C-Adresse des PCF8574 Backpacks
pub const LCD_I2C_ADDRESS: u8 = 0x27;

/// I2C Taktfrequenz in kHz
pub const I2C_FREQUENCY_KHZ: u32 = 100;

/// Aktualisierungs-Intervall des Displays in Millisekunden
pub const DISPLAY_REFRESH_PERIOD_MS: u32 = 2000;

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die externe Warn-LED
pub const LED_GPIO_PIN: u8 = 2;

/// Intervall des LED-Tasks in Millisekunden
/// Schneller als das Display, damit die LED sofort reagiert
pub const ACTUATOR_PERIOD_MS: u32 = 100;

// ============================================================================
// Serielle Schnittstelle
// ============================================================================

/// UART Baudrate
pub const SERIAL_BAUDRATE: u32 = 115_200;

/// UART-Pins (UART0)
pub const UART_TX_GPIO_PIN: u8 = 16;
pub const UART_RX_GPIO_PIN: u8 = 17;

/// Poll-Intervall des Kommando-Tasks in Millisekunden (wenn kein Byte anliegt)
pub const SERIAL_POLL_PERIOD_MS: u32 = 20;

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_SSID: &str = env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// WiFi Passwort
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

/// Wartezeit nach WiFi-Fehler vor erneutem Versuch
pub const WIFI_RETRY_DELAY_SECS: u64 = 5;

// ============================================================================
// MQTT Konfiguration
// ============================================================================

/// MQTT Broker Hostname oder IP-Adresse
/// Wird zur Build-Zeit aus der Environment Variable MQTT_BROKER geladen
pub const MQTT_BROKER: &str = env!(
    "MQTT_BROKER",
    "MQTT Broker nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// MQTT Broker Port
/// Standard: 1883 (unverschlüsselt), 8883 (TLS)
pub const MQTT_PORT: u16 = 1883;

/// MQTT Client ID
/// Eindeutige Kennung für diesen Sensor-Knoten
pub const MQTT_CLIENT_ID: &str = env!(
    "MQTT_CLIENT_ID",
    "MQTT Client ID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// MQTT Client ID der Auswahl-Verbindung (eigene Session neben der Telemetrie)
pub const MQTT_SUBSCRIBER_CLIENT_ID: &str = concat!(
    env!(
        "MQTT_CLIENT_ID",
        "MQTT Client ID nicht gesetzt! Erstelle .env file (siehe .env.example)"
    ),
    "-sub"
);

/// MQTT Publish Topic für Telemetrie-Datensätze (JSON)
pub const MQTT_TOPIC_TELEMETRY: &str = env!(
    "MQTT_TOPIC_TELEMETRY",
    "MQTT Topic Telemetry nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// MQTT Subscribe Topic für die Pflanzen-Auswahl (Payload: "1".."3")
pub const MQTT_TOPIC_PLANT_TYPE: &str = env!(
    "MQTT_TOPIC_PLANT_TYPE",
    "MQTT Topic Plant Type nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Intervall für Telemetrie-Uploads in Sekunden
pub const TELEMETRY_INTERVAL_SECS: u64 = 10;

/// MQTT Reconnect Delay in Sekunden
/// Wartezeit nach Verbindungsfehler vor erneutem Versuch
pub const MQTT_RECONNECT_DELAY_SECS: u64 = 5;

/// MQTT Keep-Alive der Telemetrie-Verbindung in Sekunden
/// Der Publish alle 10 s hält die Session offen
pub const MQTT_TELEMETRY_KEEP_ALIVE_SECS: u16 = 30;

/// TCP Keep-Alive der Auswahl-Verbindung in Sekunden
/// Diese Verbindung sendet selbst nichts, tote Verbindungen fallen über TCP auf
pub const MQTT_TCP_KEEP_ALIVE_SECS: u64 = 30;

/// MQTT Buffer-Größe in Bytes
/// Muss groß genug für MQTT-Pakete sein
pub const MQTT_BUFFER_SIZE: usize = 1024;

/// TCP RX/TX Buffer-Größe für die MQTT-Verbindung
pub const MQTT_TCP_BUFFER_SIZE: usize = 2048;

/// JSON Serialisierungs-Buffer für Telemetrie
/// Für {"plantType":1,"plantName":"...","umidade":47,"precisaDeAgua":false,"timestamp":...}
pub const JSON_TELEMETRY_BUFFER_SIZE: usize = 160;

/// DNS Query Timeout in Sekunden
pub const DNS_TIMEOUT_SECS: u64 = 10;
