//! ISR-debounced activation button.
//!
//! ## Hardware
//!
//! Active-low momentary switch with the internal pull-up enabled. GPIO
//! fires on the falling edge; the ISR does the minimal possible work — a
//! lock-free debounce check against the previous accepted edge, then one
//! firing of the collapsing [`ACTIVATION`] signal.  All further logic
//! (toggling, calibration, the indicator sequence) runs in the control
//! task, never in interrupt context.
//!
//! Edges inside the debounce window are ignored; edges that arrive while
//! a wake is already pending collapse into it.  Either way a physical
//! press is consumed at most once.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::signals::ACTIVATION;

/// Minimum spacing between accepted edges (milliseconds).
const DEBOUNCE_MS: u32 = 50;

/// Timestamp of the last accepted edge (milliseconds since boot,
/// truncated to u32).  Written and read only by the ISR path.
static LAST_EDGE_MS: AtomicU32 = AtomicU32::new(0);

/// ISR handler — register this on the button GPIO falling edge.
/// Safe to call from interrupt context: one atomic compare plus one
/// signal firing, no blocking.
pub fn button_isr_handler(now_ms: u32) {
    let last = LAST_EDGE_MS.load(Ordering::Acquire);
    if last != 0 && now_ms.wrapping_sub(last) < DEBOUNCE_MS {
        return; // bounce within the window — absorbed
    }
    LAST_EDGE_MS.store(now_ms.max(1), Ordering::Release);
    ACTIVATION.signal(());
}

#[cfg(test)]
mod tests {
    use super::*;

    // ACTIVATION and LAST_EDGE_MS are process-wide; serialize the tests
    // that touch them.
    static TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    fn reset() {
        LAST_EDGE_MS.store(0, Ordering::SeqCst);
        let _ = ACTIVATION.try_take();
    }

    #[test]
    fn first_edge_signals() {
        let _guard = TEST_LOCK.lock().unwrap();
        reset();
        button_isr_handler(1_000);
        assert!(ACTIVATION.try_take().is_some());
    }

    #[test]
    fn bounce_within_window_is_absorbed() {
        let _guard = TEST_LOCK.lock().unwrap();
        reset();
        button_isr_handler(1_000);
        let _ = ACTIVATION.try_take();
        button_isr_handler(1_020); // 20 ms later: contact bounce
        assert!(ACTIVATION.try_take().is_none());
    }

    #[test]
    fn distinct_presses_both_signal() {
        let _guard = TEST_LOCK.lock().unwrap();
        reset();
        button_isr_handler(1_000);
        assert!(ACTIVATION.try_take().is_some());
        button_isr_handler(2_000);
        assert!(ACTIVATION.try_take().is_some());
    }

    #[test]
    fn unconsumed_presses_collapse() {
        let _guard = TEST_LOCK.lock().unwrap();
        reset();
        button_isr_handler(1_000);
        button_isr_handler(2_000);
        button_isr_handler(3_000);
        assert!(ACTIVATION.try_take().is_some());
        assert!(ACTIVATION.try_take().is_none(), "wakes must not queue");
    }
}
