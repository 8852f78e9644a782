//! Inter-task wake signals.
//!
//! Both are `embassy-sync` signals: single-slot, *collapsing*
//! notifications.  If the producer fires more than once before the
//! consumer wakes, the extra firings merge into one pending wake — a
//! binary signal, not a counting queue.  That is exactly the activation
//! contract: extra button presses while the control task is busy are
//! dropped, never replayed.
//!
//! ```text
//! button ISR ──ACTIVATION──▶ control task ──SAMPLER_WAKE──▶ sampling task
//! ```
//!
//! `Signal::signal` is lock-free apart from one critical section, so it is
//! safe from ISR context with the interrupt-masking critical-section
//! implementation in [`esp_link_shims`](crate::esp_link_shims).

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Activation edge: fired by the button ISR, consumed by the control task.
pub static ACTIVATION: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Monitoring-may-begin: fired by the control task when the activation
/// preamble completes, consumed by the sampling task in single-shot mode.
pub static SAMPLER_WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_firings_collapse_to_one() {
        let sig: Signal<CriticalSectionRawMutex, ()> = Signal::new();
        sig.signal(());
        sig.signal(());
        sig.signal(());
        assert!(sig.try_take().is_some());
        assert!(sig.try_take().is_none(), "extra firings must not queue");
    }
}
