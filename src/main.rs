//! FoodGuard Firmware — Main Entry Point
//!
//! Hexagonal architecture with two core-pinned perpetual tasks.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  SensorAdapter     IndicatorAdapter   LogReportSink            │
//! │  (MQ-135 + DHT11)  (3 discrete LEDs)  MqttReportSink (retained)│
//! │  WifiAdapter       TeeSink                                     │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │   monitor core (pure logic)                            │    │
//! │  │   calibration · classifier · shared region             │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  control task (core 1) · sampling task (core 0)                │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
mod error;
mod pins;
mod signals;

pub mod app;
mod adapters;
mod drivers;
mod sensors;
pub mod tasks;

mod esp_link_shims;

// ── Imports ───────────────────────────────────────────────────
use std::sync::Arc;

use anyhow::Result;
use log::{info, warn};

use adapters::fanout::TeeSink;
use adapters::hardware::{IndicatorAdapter, SensorAdapter};
use adapters::log_sink::LogReportSink;
use adapters::mqtt::MqttReportSink;
use adapters::wifi::{ConnectivityPort, WifiAdapter};
use app::commands::AppCommand;
use app::food::FoodType;
use app::service;
use app::shared::{SensorCell, SharedRegion};
use app::state::SystemState;
use config::SystemConfig;
use drivers::indicator::TriColorLed;
use sensors::climate::ClimateSensor;
use sensors::gas::GasSensor;
use sensors::SensorHub;

// ── Deployment settings ───────────────────────────────────────
//
// The prototype hard-codes these; a provisioning channel replaces them
// once the enclosure design settles.

const WIFI_SSID: &str = "FOODGUARD_NET";
const WIFI_PASSWORD: &str = "change-me-before-flashing";
const MQTT_BROKER_URL: &str = "mqtt://192.168.1.13:1883";
const MQTT_CLIENT_ID: &str = "foodguard-monitor";

/// Food profile for this deployment; adjusts threshold sensitivity.
const FOOD_PROFILE: FoodType = FoodType::Generic;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  FoodGuard v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Hardware peripherals ───────────────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    if let Err(e) = drivers::hw_init::init_isr_service() {
        log::error!("ISR service init failed: {} — button will be inert", e);
    }

    let config = SystemConfig::default();

    // ── 3. Connectivity (telemetry variant) ───────────────────
    //
    // Console reporting always works; the MQTT leg is attached only when
    // the network comes up.  A failed association degrades the build to
    // the console-only variant instead of blocking the monitor.
    let mut wifi = WifiAdapter::new();
    let mqtt = match wifi.set_credentials(WIFI_SSID, WIFI_PASSWORD) {
        Ok(()) => match wifi.connect() {
            Ok(()) => {
                MqttReportSink::connect(MQTT_BROKER_URL, MQTT_CLIENT_ID, config.report_topic.clone())
                    .map_err(|e| warn!("MQTT sink unavailable: {} — console only", e))
                    .ok()
            }
            Err(e) => {
                warn!("WiFi association failed: {} — console only", e);
                None
            }
        },
        Err(e) => {
            warn!("WiFi credentials invalid: {} — console only", e);
            None
        }
    };
    let sink = TeeSink::new(LogReportSink::new(), mqtt);

    // ── 4. Adapters ───────────────────────────────────────────
    let sensors = Arc::new(SensorCell::new(SensorAdapter::new(SensorHub::new(
        GasSensor::new(pins::GAS_ADC_GPIO),
        ClimateSensor::new(pins::DHT_GPIO),
    ))));
    let indicator = IndicatorAdapter::new(TriColorLed::new());

    // ── 5. Shared region + tasks ──────────────────────────────
    let shared = Arc::new(SharedRegion::new(
        SystemState::new(&config),
        indicator,
        sink,
    ));
    service::handle_command(&shared, AppCommand::SelectFood(FOOD_PROFILE));

    let (_control, _sampler) = tasks::spawn_tasks(shared, sensors, &config);

    info!("=== FoodGuard READY ===");
    info!(
        "Procedure: leave the probe in ambient air, press the button, wait {} ms for \
         calibration, then approach the probe to the product.",
        config.calibration_duration_ms
    );

    // ── 6. Supervision loop ───────────────────────────────────
    //
    // The monitoring work lives entirely in the two tasks; this thread
    // only babysits the network association.
    loop {
        wifi.poll();
        std::thread::sleep(std::time::Duration::from_secs(1));
    }
}
