use std::ops::Deref;
use std::{fmt, ptr};

/// SecString overwrites its bytes when dropped, so a replaced or discarded
/// password does not linger in memory
#[derive(Default, PartialEq, Eq, Clone)]
pub struct SecString(String);

impl SecString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn wipe(&mut self) {
        // SAFETY: zero bytes are valid utf-8, so the string stays well formed
        unsafe {
            for byte in self.0.as_bytes_mut() {
                ptr::write_volatile(byte, 0);
            }
        }
        self.0.clear();
    }
}

impl Deref for SecString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<String> for SecString {
    fn from(data: String) -> Self {
        Self(data)
    }
}

impl<'a> From<&'a str> for SecString {
    fn from(data: &'a str) -> Self {
        Self(String::from(data))
    }
}

impl fmt::Debug for SecString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecString(<{} chars>)", self.0.chars().count())
    }
}

impl Drop for SecString {
    fn drop(&mut self) {
        if !self.0.is_empty() {
            self.wipe();
        }
    }
}
