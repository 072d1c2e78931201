//! Thread safety verification utilities for fieldcap.
//!
//! Widget state in this kit must only be mutated on the main (UI) thread.
//! This module provides debug assertions to verify that discipline without
//! any release-mode cost.
//!
//! # Usage
//!
//! The host records the main thread once at startup, then widget code
//! asserts affinity at mutation points:
//!
//! ```
//! use fieldcap_core::{set_main_thread, is_main_thread};
//!
//! set_main_thread();
//! assert!(is_main_thread());
//! ```
//!
//! ```ignore
//! fn set_label_text(&mut self, text: &str) {
//!     fieldcap_core::debug_assert_main_thread!();
//!     // ... update widget state ...
//! }
//! ```
//!
//! If `set_main_thread()` was never called, the checks pass: a host that
//! does not opt in to affinity tracking is not penalized.
//!
//! # Object Thread Affinity
//!
//! For objects that must stay on the thread that created them, use
//! [`ThreadAffinity`]:
//!
//! ```
//! use fieldcap_core::ThreadAffinity;
//!
//! struct Coordinator {
//!     affinity: ThreadAffinity,
//! }
//!
//! impl Coordinator {
//!     fn new() -> Self {
//!         Self { affinity: ThreadAffinity::current() }
//!     }
//!
//!     fn update(&self) {
//!         self.affinity.debug_assert_same_thread();
//!         // ... safe to update ...
//!     }
//! }
//! ```

use std::sync::OnceLock;
use std::thread::ThreadId;

/// Global storage for the main thread ID.
static MAIN_THREAD_ID: OnceLock<ThreadId> = OnceLock::new();

/// Record the current thread as the main (UI) thread.
///
/// Should be called once, from the main thread, at host startup.
///
/// # Panics
///
/// Panics if called again from a different thread.
pub fn set_main_thread() {
    let current = std::thread::current().id();
    if MAIN_THREAD_ID.set(current).is_err() && MAIN_THREAD_ID.get() != Some(&current) {
        panic!(
            "set_main_thread() called from different thread than original. \
             The main thread ID can only be set once."
        );
    }
}

/// Get the main thread ID if it has been set.
#[inline]
pub fn main_thread_id() -> Option<ThreadId> {
    MAIN_THREAD_ID.get().copied()
}

/// Check if the current thread is the main (UI) thread.
///
/// Returns `true` if we are on the main thread, or if the main thread has
/// not been recorded yet (graceful fallback during early initialization).
#[inline]
pub fn is_main_thread() -> bool {
    match MAIN_THREAD_ID.get() {
        Some(&main_id) => std::thread::current().id() == main_id,
        None => true,
    }
}

/// Panic helper for the assertion macro. Not intended for direct use.
#[doc(hidden)]
#[cold]
pub fn panic_not_main_thread(msg: &str, file: &str, line: u32) -> ! {
    panic!(
        "{msg} (at {file}:{line}, current thread: {:?}, main thread: {:?})",
        std::thread::current().id(),
        main_thread_id()
    );
}

/// Assert that the current thread is the main thread, in debug builds only.
///
/// Compiles to nothing in release builds.
#[macro_export]
macro_rules! debug_assert_main_thread {
    () => {
        $crate::debug_assert_main_thread!("widget state must be mutated on the main thread")
    };
    ($msg:expr) => {
        #[cfg(debug_assertions)]
        {
            if !$crate::thread_check::is_main_thread() {
                $crate::thread_check::panic_not_main_thread($msg, file!(), line!());
            }
        }
    };
}

/// Records the thread an object was created on and asserts later accesses
/// happen on the same thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadAffinity {
    thread_id: ThreadId,
}

impl ThreadAffinity {
    /// Capture the current thread.
    pub fn current() -> Self {
        Self {
            thread_id: std::thread::current().id(),
        }
    }

    /// Check whether the current thread matches the captured one.
    #[inline]
    pub fn is_same_thread(&self) -> bool {
        std::thread::current().id() == self.thread_id
    }

    /// Assert same-thread access in debug builds.
    #[inline]
    pub fn debug_assert_same_thread(&self) {
        debug_assert!(
            self.is_same_thread(),
            "object accessed from {:?} but is bound to {:?}",
            std::thread::current().id(),
            self.thread_id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_main_thread_passes() {
        // Before any set_main_thread() call, checks pass everywhere.
        // (Other tests may have set it; either way this must not panic.)
        let _ = is_main_thread();
    }

    #[test]
    fn test_affinity_same_thread() {
        let affinity = ThreadAffinity::current();
        assert!(affinity.is_same_thread());
        affinity.debug_assert_same_thread();
    }

    #[test]
    fn test_affinity_other_thread() {
        let affinity = ThreadAffinity::current();
        let handle = std::thread::spawn(move || affinity.is_same_thread());
        assert!(!handle.join().unwrap());
    }
}
