use std::mem;

use tracing::trace;

use crate::error::{PwgenError, PwgenResult};
use crate::password::generator::Generator;
use crate::password::GenerationConfig;
use crate::security::SecString;
use crate::ui::{Alert, Clipboard};

pub const NO_CLASS_ALERT: &str = "Please select at least one option";

/// A single field update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetPassword(SecString),
    SetLength(usize),
    SetIncludeUppercase(bool),
    SetIncludeLowercase(bool),
    SetIncludeNumbers(bool),
    SetIncludeSymbols(bool),
}

/// The current parameters and the last generated password
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    config: GenerationConfig,
    password: SecString,
}

impl Session {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            password: SecString::default(),
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Replaces exactly one field and keeps the rest
    pub fn apply(self, action: Action) -> Self {
        trace!(action = action_name(&action), "applying action");

        let Session { config, password } = self;
        match action {
            Action::SetPassword(password) => Self { config, password },
            Action::SetLength(length) => Self {
                config: GenerationConfig { length, ..config },
                password,
            },
            Action::SetIncludeUppercase(include_uppercase) => Self {
                config: GenerationConfig {
                    include_uppercase,
                    ..config
                },
                password,
            },
            Action::SetIncludeLowercase(include_lowercase) => Self {
                config: GenerationConfig {
                    include_lowercase,
                    ..config
                },
                password,
            },
            Action::SetIncludeNumbers(include_numbers) => Self {
                config: GenerationConfig {
                    include_numbers,
                    ..config
                },
                password,
            },
            Action::SetIncludeSymbols(include_symbols) => Self {
                config: GenerationConfig {
                    include_symbols,
                    ..config
                },
                password,
            },
        }
    }

    pub fn update(&mut self, action: Action) {
        *self = mem::take(self).apply(action);
    }

    pub fn set_length(&mut self, length: usize) {
        self.update(Action::SetLength(length));
    }
    pub fn set_include_uppercase(&mut self, include: bool) {
        self.update(Action::SetIncludeUppercase(include));
    }
    pub fn set_include_lowercase(&mut self, include: bool) {
        self.update(Action::SetIncludeLowercase(include));
    }
    pub fn set_include_numbers(&mut self, include: bool) {
        self.update(Action::SetIncludeNumbers(include));
    }
    pub fn set_include_symbols(&mut self, include: bool) {
        self.update(Action::SetIncludeSymbols(include));
    }

    // only the generation trigger stores passwords
    fn set_password(&mut self, password: SecString) {
        self.update(Action::SetPassword(password));
    }

    /// Generates from the current config and stores the result. When no
    /// class is selected the user is alerted and the old password stays.
    pub fn trigger_generation(
        &mut self,
        generator: &mut Generator,
        alert: &mut dyn Alert,
    ) -> PwgenResult<()> {
        match generator.generate(&self.config) {
            Ok(password) => {
                self.set_password(password);
                Ok(())
            }
            Err(PwgenError::NoCharacterClassSelected) => {
                alert.alert(NO_CLASS_ALERT);
                Err(PwgenError::NoCharacterClassSelected)
            }
            Err(error) => Err(error),
        }
    }

    pub fn copy_password(&self, clipboard: &mut dyn Clipboard) -> PwgenResult<()> {
        clipboard.write_text(&self.password)
    }
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::SetPassword(_) => "set_password",
        Action::SetLength(_) => "set_length",
        Action::SetIncludeUppercase(_) => "set_include_uppercase",
        Action::SetIncludeLowercase(_) => "set_include_lowercase",
        Action::SetIncludeNumbers(_) => "set_include_numbers",
        Action::SetIncludeSymbols(_) => "set_include_symbols",
    }
}
