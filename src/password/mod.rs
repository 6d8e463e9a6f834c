pub mod generator;
pub mod random;

use serde::{Deserialize, Serialize};

use crate::error::{PwgenError, PwgenResult};

/// The longest password the input controls accept
pub const MAX_LENGTH: usize = 20;
pub const DEFAULT_LENGTH: usize = 8;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+=";

/// A fixed alphabet that can be toggled on or off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// Pool assembly order
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }
}

/// The user controlled generation parameters
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
        }
    }
}

impl GenerationConfig {
    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Numbers => self.include_numbers,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    /// The enabled classes, in pool order
    pub fn classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .iter()
            .copied()
            .filter(move |class| self.includes(*class))
    }

    /// Concatenates the enabled alphabets. Empty when nothing is selected.
    pub fn pool(&self) -> Vec<char> {
        self.classes()
            .flat_map(|class| class.alphabet().chars())
            .collect()
    }

    /// Rejects lengths the input controls would never produce
    pub fn validate(&self) -> PwgenResult<()> {
        if self.length > MAX_LENGTH {
            return Err(PwgenError::LengthOutOfRange(self.length));
        }

        Ok(())
    }
}
