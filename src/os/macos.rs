//! Operating system abstraction layer (macOS)
//!
//! This module provides access to the macOS services this crate depends on.
//!
//! It currently exposes one function that obtains cryptographically secure
//! random bytes from the system, used for seeding the per-thread generators
//! behind random prime generation.
//!
//! On macOS, randomness comes from `arc4random_buf`, which is backed by the
//! operating system and suitable for cryptographic use.

use libc::arc4random_buf;

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// `arc4random_buf` cannot fail and always fully initializes the buffer.
pub(crate) fn sys_random(buf: &mut [u8]) {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut libc::c_void, buf.len());
    }
}
