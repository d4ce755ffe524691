use std::sync::atomic::{AtomicBool, Ordering};

/// Global single-flight latch over create and vote writes.
///
/// At most one mutating write may be in flight at a time, across the whole
/// list — a global lock, not per-fact. While held, the submission form and
/// every vote control reject new attempts. Fetches are not gated.
#[derive(Debug, Default)]
pub struct MutationGate {
    uploading: AtomicBool,
}

impl MutationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate. Returns `None` if a write is already in flight.
    /// The returned permit releases the gate when dropped, so release is
    /// guaranteed on every exit path, success or failure.
    pub fn try_begin(&self) -> Option<MutationPermit<'_>> {
        self.uploading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| MutationPermit { gate: self })
    }

    /// Whether a create or vote write is currently outstanding. Drives the
    /// disabled state of the form and vote controls.
    pub fn is_uploading(&self) -> bool {
        self.uploading.load(Ordering::Acquire)
    }
}

#[derive(Debug)]
pub struct MutationPermit<'a> {
    gate: &'a MutationGate,
}

impl Drop for MutationPermit<'_> {
    fn drop(&mut self) {
        self.gate.uploading.store(false, Ordering::Release);
    }
}
