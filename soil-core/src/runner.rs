//! Periodische Task-Schleife mit Stop-Signal
//!
//! Auf dem Gerät laufen alle Tasks endlos. Für Tests lässt sich jede
//! Schleife über ein [`StopSignal`] nach einer festen Zahl Zyklen beenden.

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal_async::delay::DelayNs;

/// Stop-Signal für periodische Tasks
///
/// Wird vor jedem Zyklus geprüft. Auf dem Gerät nie gesetzt.
/// Alles, was vor `stop()` geschrieben wurde, ist nach `is_stopped() == true`
/// sichtbar.
#[derive(Debug, Default)]
pub struct StopSignal {
    stopped: AtomicBool,
}

impl StopSignal {
    pub const fn new() -> Self {
        Self {
            stopped: AtomicBool::new(false),
        }
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}

/// Führt `step` periodisch aus, bis `stop` gesetzt wird
///
/// Pro Zyklus: Stop-Signal prüfen, `step()` ausführen, `period_ms` schlafen.
/// Der Delay gibt die CPU an die anderen Tasks zurück.
///
/// # Rückgabe
/// Anzahl der ausgeführten Zyklen
pub async fn run_periodic<D, F>(stop: &StopSignal, delay: &mut D, period_ms: u32, mut step: F) -> u32
where
    D: DelayNs,
    F: FnMut(),
{
    let mut cycles: u32 = 0;

    while !stop.is_stopped() {
        step();
        cycles = cycles.wrapping_add(1);
        delay.delay_ms(period_ms).await;
    }

    cycles
}
