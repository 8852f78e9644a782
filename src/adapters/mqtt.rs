//! MQTT report sink adapter.
//!
//! Implements [`ReportSink`] by publishing every verdict report to a
//! single topic with **retained** semantics: the broker keeps the latest
//! record, so a subscriber that connects between ticks immediately sees
//! the last verdict.
//!
//! Delivery is fire-and-forget.  When the transport is down the publish
//! for the current tick is skipped with a warning — the next tick carries
//! fresh data, so nothing is buffered or retried.  Lifecycle notices
//! (calibration, on/off) stay on the console sink; only `Report` events
//! go over the wire, matching the prototype's telemetry.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: `esp-idf-svc` MQTT client with an event callback tracking
//! broker connectivity.
//! On host/test: an in-memory stand-in that models the broker's
//! retained-message slot.

#[cfg(target_os = "espidf")]
use log::info;
use log::warn;

use crate::app::events::AppEvent;
use crate::app::ports::ReportSink;
use crate::error::{CommsError, Error, Result};

#[cfg(target_os = "espidf")]
use std::sync::atomic::{AtomicBool, Ordering};
#[cfg(target_os = "espidf")]
use std::sync::Arc;

/// Retained-publish report sink.
pub struct MqttReportSink {
    topic: heapless::String<64>,
    #[cfg(target_os = "espidf")]
    client: esp_idf_svc::mqtt::client::EspMqttClient<'static>,
    #[cfg(target_os = "espidf")]
    connected: Arc<AtomicBool>,
    #[cfg(not(target_os = "espidf"))]
    sim: SimBroker,
}

// ── ESP-IDF implementation ───────────────────────────────────

#[cfg(target_os = "espidf")]
impl MqttReportSink {
    /// Connect to `broker_url` (e.g. `mqtt://192.168.1.13:1883`).
    ///
    /// The client reconnects on its own; this adapter only tracks the
    /// connection state so publishes can be skipped while offline.
    pub fn connect(
        broker_url: &str,
        client_id: &str,
        topic: heapless::String<64>,
    ) -> Result<Self> {
        use esp_idf_svc::mqtt::client::{EspMqttClient, EventPayload, MqttClientConfiguration};

        let connected = Arc::new(AtomicBool::new(false));
        let conf = MqttClientConfiguration {
            client_id: Some(client_id),
            ..Default::default()
        };

        let state = connected.clone();
        let client = EspMqttClient::new_cb(broker_url, &conf, move |event| {
            match event.payload() {
                EventPayload::Connected(_) => {
                    info!("MQTT: connected");
                    state.store(true, Ordering::Release);
                }
                EventPayload::Disconnected => {
                    warn!("MQTT: disconnected, reports skipped until reconnect");
                    state.store(false, Ordering::Release);
                }
                _ => {}
            }
        })
        .map_err(|e| {
            warn!("MQTT: client init failed: {e}");
            Error::Comms(CommsError::MqttConnectFailed)
        })?;

        Ok(Self {
            topic,
            client,
            connected,
        })
    }

    fn publish_retained(&mut self, payload: &[u8]) -> Result<()> {
        use esp_idf_svc::mqtt::client::QoS;

        if !self.connected.load(Ordering::Acquire) {
            return Err(CommsError::WifiDisconnected.into());
        }
        // enqueue() hands the frame to the transport without blocking the
        // critical section.
        self.client
            .enqueue(self.topic.as_str(), QoS::AtMostOnce, true, payload)
            .map(|_| ())
            .map_err(|_| CommsError::MqttPublishFailed.into())
    }
}

// ── Host simulation ──────────────────────────────────────────

/// In-memory broker stand-in: one retained slot per topic, plus a publish
/// counter so tests can assert on delivery.
#[cfg(not(target_os = "espidf"))]
#[derive(Default)]
struct SimBroker {
    connected: bool,
    retained: Option<String>,
    publish_count: u32,
}

#[cfg(not(target_os = "espidf"))]
impl MqttReportSink {
    pub fn connect(
        _broker_url: &str,
        _client_id: &str,
        topic: heapless::String<64>,
    ) -> Result<Self> {
        Ok(Self {
            topic,
            sim: SimBroker {
                connected: true,
                ..Default::default()
            },
        })
    }

    /// Simulate the broker connection dropping or recovering.
    pub fn sim_set_connected(&mut self, connected: bool) {
        self.sim.connected = connected;
    }

    /// The broker's retained message, as a new subscriber would see it.
    pub fn sim_retained(&self) -> Option<&str> {
        self.sim.retained.as_deref()
    }

    pub fn sim_publish_count(&self) -> u32 {
        self.sim.publish_count
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    fn publish_retained(&mut self, payload: &[u8]) -> Result<()> {
        if !self.sim.connected {
            return Err(CommsError::WifiDisconnected.into());
        }
        self.sim.retained = Some(String::from_utf8_lossy(payload).into_owned());
        self.sim.publish_count += 1;
        Ok(())
    }
}

// ── ReportSink ───────────────────────────────────────────────

impl ReportSink for MqttReportSink {
    fn emit(&mut self, event: &AppEvent) {
        let AppEvent::Report(report) = event else {
            return;
        };
        let payload = match serde_json::to_vec(report) {
            Ok(p) => p,
            Err(e) => {
                warn!("MQTT: report serialization failed: {e}");
                return;
            }
        };
        if let Err(e) = self.publish_retained(&payload) {
            warn!("MQTT: publish skipped: {e}");
        }
    }
}

#[cfg(all(test, not(target_os = "espidf")))]
mod tests {
    use super::*;
    use crate::app::classifier::{Measurement, Verdict};
    use crate::app::events::ReportData;
    use crate::app::food::FoodType;

    fn report(gas: u16) -> AppEvent {
        AppEvent::Report(ReportData {
            verdict: Verdict::Fresh,
            measurement: Measurement {
                gas_raw: gas,
                temperature_c: Some(4.0),
                humidity_pct: Some(50.0),
            },
            baseline: 200.0,
            food: FoodType::Generic,
        })
    }

    fn make_sink() -> MqttReportSink {
        MqttReportSink::connect(
            "mqtt://broker.local:1883",
            "foodguard-test",
            heapless::String::try_from("food/monitor").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn report_lands_in_retained_slot() {
        let mut sink = make_sink();
        sink.emit(&report(210));
        sink.emit(&report(260));
        // Latest-value semantics: a new subscriber sees only the last one.
        let retained = sink.sim_retained().unwrap();
        assert!(retained.contains("\"gas_raw\":260"));
        assert_eq!(sink.sim_publish_count(), 2);
    }

    #[test]
    fn lifecycle_events_are_not_published() {
        let mut sink = make_sink();
        sink.emit(&AppEvent::MonitoringStarted);
        sink.emit(&AppEvent::SystemOff);
        assert_eq!(sink.sim_publish_count(), 0);
        assert!(sink.sim_retained().is_none());
    }

    #[test]
    fn disconnected_broker_drops_without_buffering() {
        let mut sink = make_sink();
        sink.sim_set_connected(false);
        sink.emit(&report(300));
        assert_eq!(sink.sim_publish_count(), 0);

        // Recovery: the next tick publishes fresh data; the dropped
        // report is never replayed.
        sink.sim_set_connected(true);
        sink.emit(&report(310));
        assert_eq!(sink.sim_publish_count(), 1);
        assert!(sink.sim_retained().unwrap().contains("\"gas_raw\":310"));
    }
}
