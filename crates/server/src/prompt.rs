//! Coaching instructions and outbound prompt composition.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chess_core::PlayerColor;

/// Static coaching instructions, loaded once at startup and prepended
/// unchanged to every outbound prompt.
#[derive(Clone, Debug)]
pub struct PromptTemplate {
    system: String,
}

impl PromptTemplate {
    pub fn new(system: String) -> Self {
        Self { system }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let system = fs::read_to_string(path)
            .with_context(|| format!("read prompt template {}", path.display()))?;
        Ok(Self::new(system))
    }

    /// Compose the full prompt: instructions first, then the side the user
    /// played, then the raw transcript last.
    pub fn compose(&self, color: PlayerColor, pgn: &str) -> String {
        format!(
            "{system}\n\n### User input\nI played as {color}\n{pgn}",
            system = self.system,
        )
    }
}
