//! Provider-specific structured-output clients

#[cfg(feature = "google")]
pub mod google;
