//! Operating system abstraction layer (Linux)
//!
//! This module provides access to the Linux services this crate depends on.
//!
//! At present it exposes a single function that reads cryptographically
//! secure random bytes from the kernel through the `getrandom` system call.
//! The bytes are used to seed the per-thread generators behind random prime
//! generation and Miller–Rabin witness selection.
//!
//! `getrandom` draws directly from the kernel entropy pool and is suitable
//! for seeding key-generation randomness.

use libc::{c_void, getrandom};

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// The `getrandom` system call is invoked repeatedly until the whole buffer
/// is filled; short reads caused by signal interruption are handled
/// transparently.
///
/// # Panics
/// Panics if `getrandom` reports an error. Entropy starvation at this level
/// is an operating-system failure and is treated as unrecoverable, since
/// every key produced afterwards would be suspect.
pub(crate) fn sys_random(buf: &mut [u8]) {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            panic!("getrandom() failed");
        }

        filled += ret as usize;
    }
}
