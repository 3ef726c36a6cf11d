//! Operating system abstraction layer (Windows)
//!
//! This module provides access to the Windows services this crate depends
//! on.
//!
//! It currently exposes one function that obtains cryptographically secure
//! random bytes from the system's preferred generator through the CNG API,
//! used for seeding the per-thread generators behind random prime
//! generation.

use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
};

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// # Panics
/// Panics if the underlying system call fails. Such a failure indicates a
/// critical operating-system error and is treated as unrecoverable.
pub(crate) fn sys_random(buf: &mut [u8]) {
    let status = unsafe {
        BCryptGenRandom(
            std::ptr::null_mut(),
            buf.as_mut_ptr(),
            buf.len() as u32,
            BCRYPT_USE_SYSTEM_PREFERRED_RNG,
        )
    };

    if status != 0 {
        panic!("BCryptGenRandom failed with status {status}");
    }
}
