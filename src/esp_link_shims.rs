//! ESP-IDF runtime symbol providers for third-party crates.
//!
//! `embassy-sync` primitives (the activation signal and the shared-state
//! mutex) are generic over a `critical-section` implementation.  On the
//! host, tests pull in the `critical-section/std` implementation; on
//! ESP-IDF the symbols below provide one backed by a FreeRTOS port
//! spinlock, which masks interrupts on the acquiring core — the same
//! primitive `portENTER_CRITICAL` uses.  That makes the activation
//! signal safe to fire from the button ISR.
//!
//! FreeRTOS critical sections nest natively, so the restore token is
//! unused.

#[cfg(target_os = "espidf")]
static mut CS_SPINLOCK: esp_idf_svc::sys::portMUX_TYPE = esp_idf_svc::sys::portMUX_TYPE {
    owner: esp_idf_svc::sys::SPINLOCK_FREE,
    count: 0,
};

/// Runtime-backed critical-section acquire used by `critical-section` 1.x.
#[cfg(target_os = "espidf")]
#[unsafe(no_mangle)]
pub extern "C" fn _critical_section_1_0_acquire() -> u8 {
    // SAFETY: vPortEnterCritical takes the spinlock and masks interrupts
    // on this core; valid from both task and ISR context on Xtensa.
    unsafe { esp_idf_svc::sys::vPortEnterCritical(&raw mut CS_SPINLOCK) };
    0
}

/// Runtime-backed critical-section release used by `critical-section` 1.x.
#[cfg(target_os = "espidf")]
#[unsafe(no_mangle)]
pub extern "C" fn _critical_section_1_0_release(_token: u8) {
    // SAFETY: paired with the acquire above on the same core.
    unsafe { esp_idf_svc::sys::vPortExitCritical(&raw mut CS_SPINLOCK) };
}
