// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Heap Allocator (WiFi benötigt dynamischen Speicher)
extern crate alloc;

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_net::{Config as NetConfig, Stack, StackResources};
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::rng::Rng;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use defmt::info;
use static_cell::StaticCell;

// Projekt-Module und Konfiguration
use soil_monitor::config::{EXTRA_HEAP_SIZE, WIFI_HEAP_SIZE};
use soil_monitor::tasks::{
    actuator_task, command_task, connection_task, dhcp_task, display_task, mqtt_task, net_task,
    plant_type_task, sensor_task,
};
use soil_monitor::{PlantSelection, SensorCell};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, WiFi, startet Embassy Runtime und spawnt Tasks.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Heap Allocator initialisieren (WiFi braucht dynamischen Speicher!)
    esp_alloc::heap_allocator!(
        #[esp_hal::ram(reclaimed)]
        size: WIFI_HEAP_SIZE
    );
    esp_alloc::heap_allocator!(size: EXTRA_HEAP_SIZE);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("Soil monitor starting");

    // Shared State: letzter Rohwert + aktive Pflanze
    // Vor dem Spawnen initialisiert, damit jeder Task einen gültigen Wert sieht
    static SENSOR_CELL: StaticCell<SensorCell> = StaticCell::new();
    let cell = &*SENSOR_CELL.init(SensorCell::new());

    static PLANT_SELECTION: StaticCell<PlantSelection> = StaticCell::new();
    let selection = &*PLANT_SELECTION.init(PlantSelection::new());
    info!("Active plant: {}", selection.current());

    // Mess- und Anzeige-Tasks (laufen auch ohne WLAN)
    spawner
        .spawn(sensor_task(peripherals.ADC1, peripherals.GPIO4, cell))
        .unwrap();
    spawner
        .spawn(display_task(
            peripherals.I2C0,
            peripherals.GPIO21,
            peripherals.GPIO22,
            cell,
            selection,
        ))
        .unwrap();
    spawner
        .spawn(actuator_task(peripherals.GPIO2, cell, selection))
        .unwrap();
    spawner
        .spawn(command_task(
            peripherals.UART0,
            peripherals.GPIO16,
            peripherals.GPIO17,
            cell,
        ))
        .unwrap();

    // WiFi Hardware initialisieren
    static RADIO_INIT: StaticCell<esp_radio::Controller> = StaticCell::new();
    let radio_init =
        RADIO_INIT.init(esp_radio::init().expect("Failed to initialize Wi-Fi/BLE controller"));

    let (wifi_controller, wifi_interface) =
        esp_radio::wifi::new(radio_init, peripherals.WIFI, Default::default())
            .expect("Failed to initialize Wi-Fi");

    // Random seed für TCP/IP Stack (von Hardware RNG)
    let rng = Rng::new();
    let seed = (rng.random() as u64) << 32 | rng.random() as u64;

    // MQTT Telemetrie + MQTT Auswahl (2 TCP) + DNS + DHCP
    static RESOURCES: StaticCell<StackResources<5>> = StaticCell::new();
    let resources = RESOURCES.init(StackResources::new());

    let (stack, runner) = embassy_net::new(
        wifi_interface.sta,
        NetConfig::dhcpv4(Default::default()),
        resources,
        seed,
    );

    // Stack muss 'static sein für Tasks
    static STACK: StaticCell<Stack<'static>> = StaticCell::new();
    let stack = &*STACK.init(stack);

    // Spawn WiFi Tasks
    spawner.spawn(connection_task(wifi_controller)).unwrap();
    spawner.spawn(net_task(runner)).unwrap();
    spawner.spawn(dhcp_task(stack)).unwrap();

    // Spawn MQTT Tasks (Telemetrie + Pflanzen-Auswahl, je eine Verbindung)
    spawner.spawn(mqtt_task(stack, cell, selection)).unwrap();
    spawner.spawn(plant_type_task(stack, selection)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
