// Throttled debug logging
//
// Scroll and intersection handlers fire many times per second; logging each
// event would flood the browser console.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Viewport tracking diagnostics (scroll offsets, section visibility)
pub const DEBUG_VIEWPORT: bool = false;

static LOG_COUNT: AtomicUsize = AtomicUsize::new(0);
const MAX_LOGS_PER_WINDOW: usize = 5;
const WINDOW_SIZE: usize = 100;

/// Prints at most 5 of every 100 calls.
pub fn debug_throttled(message: &str) {
    if LOG_COUNT.load(Ordering::Relaxed) >= WINDOW_SIZE {
        LOG_COUNT.store(0, Ordering::Relaxed);
    }

    let count = LOG_COUNT.fetch_add(1, Ordering::Relaxed);
    if count < MAX_LOGS_PER_WINDOW {
        zoon::println!("[THROTTLED] {message}");
    } else if count == MAX_LOGS_PER_WINDOW {
        zoon::println!("[THROTTLED] Log rate limit reached, suppressing further messages...");
    }
}

macro_rules! debug_viewport {
    ($($arg:tt)*) => {
        if $crate::debug_utils::DEBUG_VIEWPORT {
            $crate::debug_utils::debug_throttled(&format!($($arg)*));
        }
    };
}

pub(crate) use debug_viewport;
