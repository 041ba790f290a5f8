//! The four generator handlers.
//!
//! Each handler draws independently from its tables and builds the matching
//! [`ToolResult`] variant. Draws are never coordinated: two scenes in a row
//! may share any element.

use rand::Rng;

use crate::tables::{self, WordList};
use crate::tool::{NameResult, PromptResult, SceneResult, ToolId, ToolResult, WordResult};

/// The word lists the handlers draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolTables {
    /// Scene locations.
    pub locations: WordList,
    /// Scene relationships.
    pub relationships: WordList,
    /// Scene conflicts.
    pub conflicts: WordList,
    /// Character first names.
    pub first_names: WordList,
    /// Character last names.
    pub last_names: WordList,
    /// Improv prompts.
    pub prompts: WordList,
    /// Word-association starters.
    pub words: WordList,
}

impl Default for ToolTables {
    fn default() -> Self {
        Self {
            locations: tables::LOCATIONS,
            relationships: tables::RELATIONSHIPS,
            conflicts: tables::CONFLICTS,
            first_names: tables::FIRST_NAMES,
            last_names: tables::LAST_NAMES,
            prompts: tables::PROMPTS,
            words: tables::WORDS,
        }
    }
}

/// Draw a location, a relationship, and a conflict.
pub fn generate_scene<R: Rng + ?Sized>(tables: &ToolTables, rng: &mut R) -> SceneResult {
    SceneResult {
        location: tables.locations.pick(rng).to_string(),
        relationship: tables.relationships.pick(rng).to_string(),
        conflict: tables.conflicts.pick(rng).to_string(),
    }
}

/// Draw a first and a last name and join them with one space.
pub fn generate_name<R: Rng + ?Sized>(tables: &ToolTables, rng: &mut R) -> NameResult {
    let first = tables.first_names.pick(rng);
    let last = tables.last_names.pick(rng);
    NameResult {
        full_name: format!("{first} {last}"),
    }
}

/// Spin for an improv prompt.
pub fn generate_prompt<R: Rng + ?Sized>(tables: &ToolTables, rng: &mut R) -> PromptResult {
    PromptResult {
        text: tables.prompts.pick(rng).to_string(),
    }
}

/// Draw a word-association starter.
pub fn generate_word<R: Rng + ?Sized>(tables: &ToolTables, rng: &mut R) -> WordResult {
    WordResult {
        text: tables.words.pick(rng).to_string(),
    }
}

/// Run the handler for `tool`.
pub fn generate<R: Rng + ?Sized>(tool: ToolId, tables: &ToolTables, rng: &mut R) -> ToolResult {
    match tool {
        ToolId::Scene => ToolResult::Scene(generate_scene(tables, rng)),
        ToolId::Name => ToolResult::Name(generate_name(tables, rng)),
        ToolId::Prompt => ToolResult::Prompt(generate_prompt(tables, rng)),
        ToolId::Word => ToolResult::Word(generate_word(tables, rng)),
    }
}
