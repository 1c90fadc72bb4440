// MQTT Tasks - Telemetrie-Upload und Pflanzen-Auswahl über MQTT Broker
//
// Zwei getrennte Verbindungen: der Telemetrie-Client published nur,
// der Auswahl-Client wartet nur auf Nachrichten. So wird ein laufendes
// `receive_message()` nie abgebrochen und der Paket-Stream bleibt synchron.
use defmt::{Debug2Format, error, info, warn};
use embassy_net::{IpAddress, Stack, dns::DnsQueryType, tcp::TcpSocket};
use embassy_time::{Duration, Instant, Timer, with_timeout};

use rust_mqtt::client::client::MqttClient;
use rust_mqtt::client::client_config::{ClientConfig, MqttVersion};
use rust_mqtt::packet::v5::publish_packet::QualityOfService;
use rust_mqtt::utils::rng_generator::CountingRng;
use rust_mqtt::utils::types::EncodedString;

use crate::config::*;
use crate::{PlantSelection, SensorCell, TelemetryRecord, lookup};

/// MQTT Client über eine embassy-net TCP-Verbindung
type Client<'a> = MqttClient<'a, TcpSocket<'a>, 5, CountingRng>;

/// Telemetrie Task - läuft parallel zu anderen Tasks
///
/// Dieser Task übernimmt den Upload:
/// - Wartet auf Netzwerk-Verbindung
/// - Verbindet sich mit MQTT Broker
/// - Published alle 10 s einen Telemetrie-Datensatz (JSON)
/// - Automatisches Reconnect bei Fehlern
///
/// # Parameter
/// - `stack`: embassy-net Stack für Netzwerk-Zugriff
/// - `cell`: Shared State mit dem letzten Rohwert (nur lesend)
/// - `selection`: Pflanzen-Auswahl (nur lesend)
#[embassy_executor::task]
pub async fn mqtt_task(
    stack: &'static Stack<'static>,
    cell: &'static SensorCell,
    selection: &'static PlantSelection,
) {
    info!("MQTT: Telemetry task started, waiting for network...");
    wait_for_network(stack).await;
    info!("MQTT: Network ready");

    loop {
        match publish_telemetry(stack, cell, selection).await {
            Ok(_) => warn!("MQTT: Telemetry connection closed normally"),
            Err(e) => error!("MQTT: Telemetry error: {}", e),
        }
        info!("MQTT: Reconnecting in {}s...", MQTT_RECONNECT_DELAY_SECS);
        Timer::after(Duration::from_secs(MQTT_RECONNECT_DELAY_SECS)).await;
    }
}

/// Pflanzen-Auswahl Task - einziger Schreiber der PlantSelection
///
/// Abonniert `MQTT_TOPIC_PLANT_TYPE` und übernimmt gültige Typen ("1".."3").
/// Ungültige Nachrichten werden geloggt und ignoriert.
#[embassy_executor::task]
pub async fn plant_type_task(stack: &'static Stack<'static>, selection: &'static PlantSelection) {
    info!("MQTT: Plant type task started, waiting for network...");
    wait_for_network(stack).await;

    loop {
        match receive_plant_types(stack, selection).await {
            Ok(_) => warn!("MQTT: Subscription closed normally"),
            Err(e) => error!("MQTT: Subscription error: {}", e),
        }
        info!("MQTT: Resubscribing in {}s...", MQTT_RECONNECT_DELAY_SECS);
        Timer::after(Duration::from_secs(MQTT_RECONNECT_DELAY_SECS)).await;
    }
}

/// Wartet bis Netzwerk-Verbindung verfügbar ist
///
/// Prüft kontinuierlich Link-Status und DHCP-Konfiguration.
async fn wait_for_network(stack: &'static Stack<'static>) {
    loop {
        if stack.is_link_up() && stack.config_v4().is_some() {
            break;
        }
        Timer::after(Duration::from_millis(500)).await;
    }
}

/// Published Telemetrie bis ein Fehler auftritt
///
/// Bei jedem Verbindungsfehler wird die Funktion beendet und der Task-Loop
/// startet automatisch einen Reconnect-Versuch.
async fn publish_telemetry(
    stack: &'static Stack<'static>,
    cell: &SensorCell,
    selection: &PlantSelection,
) -> Result<(), MqttError> {
    let mut rx_buffer = [0u8; MQTT_TCP_BUFFER_SIZE];
    let mut tx_buffer = [0u8; MQTT_TCP_BUFFER_SIZE];
    let mut send_buffer = [0u8; MQTT_BUFFER_SIZE];
    let mut recv_buffer = [0u8; MQTT_BUFFER_SIZE];

    let socket = open_socket(stack, &mut rx_buffer, &mut tx_buffer).await?;
    let mut client = open_session(
        socket,
        &mut send_buffer,
        &mut recv_buffer,
        MQTT_CLIENT_ID,
        MQTT_TELEMETRY_KEEP_ALIVE_SECS,
    )
    .await?;

    loop {
        // Typ und Profil aus EINEM Lesezugriff, damit Name und Typ zusammenpassen
        let plant_type = selection.current_type();
        let record = TelemetryRecord::capture(
            cell.read(),
            plant_type,
            lookup(i32::from(plant_type)),
            CALIBRATION,
            Instant::now().as_millis(),
        );

        let mut json = [0u8; JSON_TELEMETRY_BUFFER_SIZE];
        match serde_json_core::to_slice(&record, &mut json) {
            Ok(len) => {
                client
                    .send_message(
                        MQTT_TOPIC_TELEMETRY,
                        &json[..len],
                        QualityOfService::QoS0,
                        false,
                    )
                    .await
                    .map_err(|_| MqttError::PublishFailed)?;
                info!("MQTT: Published {}", record);
            }
            Err(_) => error!("MQTT: Telemetry does not fit into JSON buffer"),
        }

        Timer::after(Duration::from_secs(TELEMETRY_INTERVAL_SECS)).await;
    }
}

/// Empfängt Pflanzen-Typen bis ein Fehler auftritt
///
/// Der Client wartet ausschließlich in `receive_message()`. MQTT Keep-Alive
/// ist aus, tote Verbindungen erkennt TCP Keep-Alive mit Socket-Timeout.
async fn receive_plant_types(
    stack: &'static Stack<'static>,
    selection: &PlantSelection,
) -> Result<(), MqttError> {
    let mut rx_buffer = [0u8; MQTT_TCP_BUFFER_SIZE];
    let mut tx_buffer = [0u8; MQTT_TCP_BUFFER_SIZE];
    let mut send_buffer = [0u8; MQTT_BUFFER_SIZE];
    let mut recv_buffer = [0u8; MQTT_BUFFER_SIZE];

    let mut socket = open_socket(stack, &mut rx_buffer, &mut tx_buffer).await?;
    socket.set_keep_alive(Some(Duration::from_secs(MQTT_TCP_KEEP_ALIVE_SECS)));

    let mut client = open_session(
        socket,
        &mut send_buffer,
        &mut recv_buffer,
        MQTT_SUBSCRIBER_CLIENT_ID,
        0,
    )
    .await?;

    client
        .subscribe_to_topic(MQTT_TOPIC_PLANT_TYPE)
        .await
        .map_err(|_| MqttError::SubscribeFailed)?;
    info!("MQTT: Subscribed to '{}'", MQTT_TOPIC_PLANT_TYPE);

    loop {
        let (_topic, payload) = client
            .receive_message()
            .await
            .map_err(|_| MqttError::ReceiveFailed)?;

        match selection.apply_message(payload) {
            Some(profile) => info!("MQTT: Active plant: {}", profile),
            None => warn!(
                "MQTT: Ignoring plant type payload, keeping {}",
                selection.current()
            ),
        }
    }
}

/// DNS-Auflösung des Brokers und TCP-Verbindung
async fn open_socket<'a>(
    stack: &'static Stack<'static>,
    rx_buffer: &'a mut [u8],
    tx_buffer: &'a mut [u8],
) -> Result<TcpSocket<'a>, MqttError> {
    info!("MQTT: Resolving '{}'...", MQTT_BROKER);
    let broker_ip = resolve_hostname(stack, MQTT_BROKER).await?;
    info!("MQTT: Resolved to {}", Debug2Format(&broker_ip));

    let mut socket = TcpSocket::new(*stack, rx_buffer, tx_buffer);
    socket.set_timeout(Some(Duration::from_secs(60)));

    socket
        .connect((broker_ip, MQTT_PORT))
        .await
        .map_err(|_| MqttError::ConnectionFailed)?;
    info!("MQTT: TCP connected");

    Ok(socket)
}

/// MQTT CONNECT auf einer offenen TCP-Verbindung
///
/// `keep_alive_secs = 0` schaltet das MQTT Keep-Alive ab.
async fn open_session<'a>(
    socket: TcpSocket<'a>,
    send_buffer: &'a mut [u8],
    recv_buffer: &'a mut [u8],
    client_id: &'a str,
    keep_alive_secs: u16,
) -> Result<Client<'a>, MqttError> {
    let rng = CountingRng(20000);
    let mut config = ClientConfig::<5, _>::new(MqttVersion::MQTTv5, rng);
    config.client_id = EncodedString {
        string: client_id,
        len: client_id.len() as u16,
    };
    config.keep_alive = keep_alive_secs;
    config.max_packet_size = MQTT_BUFFER_SIZE as u32;

    let send_len = send_buffer.len();
    let recv_len = recv_buffer.len();
    let mut client = MqttClient::<_, 5, _>::new(
        socket,
        send_buffer,
        send_len,
        recv_buffer,
        recv_len,
        config,
    );

    client
        .connect_to_broker()
        .await
        .map_err(|_| MqttError::ProtocolError)?;
    info!("MQTT: '{}' connected to broker", client_id);

    Ok(client)
}

/// Löst Hostname zu IPv4-Adresse auf
///
/// Nutzt embassy-net DNS-Stack mit konfigurierbarem Timeout.
async fn resolve_hostname(
    stack: &'static Stack<'static>,
    hostname: &str,
) -> Result<embassy_net::Ipv4Address, MqttError> {
    let result = with_timeout(
        Duration::from_secs(DNS_TIMEOUT_SECS),
        stack.dns_query(hostname, DnsQueryType::A),
    )
    .await;

    match result {
        Ok(Ok(addrs)) => addrs
            .iter()
            .find_map(|addr| match addr {
                IpAddress::Ipv4(ipv4) => Some(*ipv4),
            })
            .ok_or(MqttError::DnsResolutionFailed),
        Ok(Err(_)) => Err(MqttError::DnsResolutionFailed),
        Err(_) => Err(MqttError::DnsTimeout),
    }
}

/// MQTT Fehler-Typen
///
/// Alle möglichen Fehler die während MQTT-Operationen auftreten können.
/// Jeder Fehler führt zu einem Reconnect.
#[derive(Debug)]
enum MqttError {
    DnsResolutionFailed,
    DnsTimeout,
    ConnectionFailed,
    ProtocolError,
    SubscribeFailed,
    ReceiveFailed,
    PublishFailed,
}

impl defmt::Format for MqttError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            MqttError::DnsResolutionFailed => defmt::write!(fmt, "DNS failed"),
            MqttError::DnsTimeout => defmt::write!(fmt, "DNS timeout"),
            MqttError::ConnectionFailed => defmt::write!(fmt, "Connection failed"),
            MqttError::ProtocolError => defmt::write!(fmt, "Protocol error"),
            MqttError::SubscribeFailed => defmt::write!(fmt, "Subscribe failed"),
            MqttError::ReceiveFailed => defmt::write!(fmt, "Receive failed"),
            MqttError::PublishFailed => defmt::write!(fmt, "Publish failed"),
        }
    }
}
