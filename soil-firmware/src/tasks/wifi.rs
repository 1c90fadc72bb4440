// WiFi Tasks - Station-Verbindung, Netzwerk-Stack und DHCP
//
// Die Messung läuft unabhängig vom WLAN. Fällt die Verbindung aus,
// arbeiten Sensor, Display, LED und Serielle weiter, nur die Telemetrie pausiert.
use defmt::{Debug2Format, error, info, warn};
use embassy_net::{Runner, Stack};
use embassy_time::{Duration, Timer};
use esp_radio::wifi::{ClientConfig, ModeConfig, WifiController, WifiDevice, WifiError, WifiEvent};

use crate::config::{WIFI_PASSWORD, WIFI_RETRY_DELAY_SECS, WIFI_SSID};

/// WiFi Connection Task
///
/// Startet den Controller im Station-Modus, verbindet mit dem Access Point
/// und verbindet nach einem Disconnect automatisch neu.
#[embassy_executor::task]
pub async fn connection_task(mut controller: WifiController<'static>) {
    info!("WiFi: Starting connection task");

    loop {
        if matches!(controller.is_started(), Ok(false)) {
            if let Err(e) = start_station(&mut controller).await {
                error!("WiFi: Failed to start station: {}", Debug2Format(&e));
                retry_delay().await;
                continue;
            }
            info!("WiFi: Station started");
        }

        info!("WiFi: Connecting to '{}'...", WIFI_SSID);
        if let Err(e) = controller.connect_async().await {
            error!("WiFi: Connection failed: {}", Debug2Format(&e));
            retry_delay().await;
            continue;
        }
        info!("WiFi: Connected");

        controller.wait_for_event(WifiEvent::StaDisconnected).await;
        warn!("WiFi: Disconnected, reconnecting in {}s...", WIFI_RETRY_DELAY_SECS);
        retry_delay().await;
    }
}

/// Setzt SSID/Passwort und startet den Controller
async fn start_station(controller: &mut WifiController<'static>) -> Result<(), WifiError> {
    let client_config = ModeConfig::Client(
        ClientConfig::default()
            .with_ssid(WIFI_SSID.into())
            .with_password(WIFI_PASSWORD.into()),
    );

    controller.set_config(&client_config)?;
    controller.start_async().await
}

async fn retry_delay() {
    Timer::after(Duration::from_secs(WIFI_RETRY_DELAY_SECS)).await;
}

/// Network Task - prozessiert die Pakete des embassy-net Stacks
#[embassy_executor::task]
pub async fn net_task(mut runner: Runner<'static, WifiDevice<'static>>) -> ! {
    runner.run().await
}

/// DHCP Monitor Task
///
/// Loggt die Netzwerk-Konfiguration, sobald eine IP-Adresse vorliegt.
/// Der MQTT Task wartet selbst auf das Netzwerk, dieser Task ist nur Diagnose.
#[embassy_executor::task]
pub async fn dhcp_task(stack: &'static Stack<'static>) {
    stack.wait_config_up().await;

    if let Some(config) = stack.config_v4() {
        info!("WiFi: IP {}", Debug2Format(&config.address.address()));
        info!("WiFi: Gateway {}", Debug2Format(&config.gateway));
    }
}
