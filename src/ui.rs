//! Boundary capabilities the session talks to: user alerts and the
//! clipboard. The session never touches the terminal or the platform
//! clipboard directly.

use std::io::{self, Write};

use crate::error::PwgenResult;

/// Interrupts the user with a message
pub trait Alert {
    fn alert(&mut self, message: &str);
}

/// Receives the password on a copy action
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> PwgenResult<()>;
}

/// Prints alerts on stderr
pub struct StderrAlert;

impl Alert for StderrAlert {
    fn alert(&mut self, message: &str) {
        let _ = writeln!(io::stderr(), "{}", message);
    }
}

#[cfg(feature = "clipboard")]
pub use system::SystemClipboard;

#[cfg(feature = "clipboard")]
mod system {
    use clipboard::{ClipboardContext, ClipboardProvider};

    use crate::error::{PwgenError, PwgenResult};

    /// The platform clipboard
    pub struct SystemClipboard(ClipboardContext);

    impl SystemClipboard {
        pub fn new() -> PwgenResult<Self> {
            let ctx: ClipboardContext = ClipboardProvider::new()
                .map_err(|e| PwgenError::Clipboard(format!("init: {}", e)))?;

            Ok(Self(ctx))
        }
    }

    impl super::Clipboard for SystemClipboard {
        fn write_text(&mut self, text: &str) -> PwgenResult<()> {
            self.0
                .set_contents(text.to_string())
                .map_err(|e| PwgenError::Clipboard(format!("set: {}", e)))
        }
    }
}
