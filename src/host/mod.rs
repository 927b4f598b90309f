use std::ffi::OsString;

use crate::error::LocateError;

/// The pieces of host state the locator reads besides the filesystem.
pub trait Host {
    /// Reads a string value from `HKEY_LOCAL_MACHINE\<key>`. Any failure is `None`.
    fn registry_value(&self, key: &str, value: &str) -> Option<String>;
    fn env_var(&self, name: &str) -> Option<OsString>;
}

#[cfg(target_os = "windows")]
mod registry;

/// The real machine.
#[derive(Debug)]
pub struct SystemHost {
    _private: (),
}

impl SystemHost {
    #[cfg(target_os = "windows")]
    pub fn new() -> Result<Self, LocateError> {
        Ok(SystemHost { _private: () })
    }

    #[cfg(not(target_os = "windows"))]
    pub fn new() -> Result<Self, LocateError> {
        Err(LocateError::UnsupportedPlatform)
    }
}

impl Host for SystemHost {
    #[cfg(target_os = "windows")]
    fn registry_value(&self, key: &str, value: &str) -> Option<String> {
        registry::read_registry_string(key, value)
    }

    #[cfg(not(target_os = "windows"))]
    fn registry_value(&self, _key: &str, _value: &str) -> Option<String> {
        None
    }

    fn env_var(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }
}
