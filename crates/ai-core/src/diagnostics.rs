//! Reporting policy for [`AiError`]s.
//!
//! Errors are logged where they originate. With fail-fast enabled (the "debugger attached" mode)
//! they panic on the spot instead of being returned, so the offending frame is on the stack.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::AiError;

static FAIL_FAST: AtomicBool = AtomicBool::new(false);

/// Process-wide switch. Off by default.
pub fn set_fail_fast(enabled: bool) {
    FAIL_FAST.store(enabled, Ordering::Relaxed);
}

pub fn fail_fast() -> bool {
    FAIL_FAST.load(Ordering::Relaxed)
}

/// Log `err` and hand it back for propagation, or panic when fail-fast is enabled.
pub fn report(err: AiError) -> AiError {
    tracing::error!(error = %err, "ai error");
    if fail_fast() {
        panic!("{err}");
    }
    err
}
