//! Per-tool display state.
//!
//! The board holds one slot per tool. A slot starts empty, becomes populated
//! on the first trigger, and is overwritten by every later trigger. There is
//! no way back to empty.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::ToolsConfig;
use crate::generator::{self, ToolTables};
use crate::tool::{ToolId, ToolResult};

/// State of one tool's result region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ToolSlot {
    /// Nothing generated yet.
    #[default]
    Empty,
    /// The most recent result.
    Populated(ToolResult),
}

impl ToolSlot {
    /// The result, if any.
    pub fn result(&self) -> Option<&ToolResult> {
        match self {
            Self::Empty => None,
            Self::Populated(r) => Some(r),
        }
    }
}

/// The four tools' current results, plus the tables and RNG that feed them.
pub struct ToolBoard {
    scene: ToolSlot,
    name: ToolSlot,
    prompt: ToolSlot,
    word: ToolSlot,
    /// Trigger count per tool, indexed by [`ToolId::index`].
    generations: [u64; 4],
    tables: ToolTables,
    rng: StdRng,
}

impl ToolBoard {
    /// Create an empty board over the built-in tables.
    pub fn new(config: &ToolsConfig) -> Self {
        Self::with_tables(config, ToolTables::default())
    }

    /// Create an empty board over custom tables.
    pub fn with_tables(config: &ToolsConfig, tables: ToolTables) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            scene: ToolSlot::Empty,
            name: ToolSlot::Empty,
            prompt: ToolSlot::Empty,
            word: ToolSlot::Empty,
            generations: [0; 4],
            tables,
            rng,
        }
    }

    /// Run `tool`'s generator and replace its slot with the new result.
    pub fn trigger(&mut self, tool: ToolId) -> ToolResult {
        let result = generator::generate(tool, &self.tables, &mut self.rng);
        *self.slot_mut(tool) = ToolSlot::Populated(result.clone());
        self.generations[tool.index()] += 1;
        tracing::debug!(
            tool = tool.slug(),
            generation = self.generations[tool.index()],
            "generated"
        );
        result
    }

    /// Current slot for `tool`.
    pub fn slot(&self, tool: ToolId) -> &ToolSlot {
        match tool {
            ToolId::Scene => &self.scene,
            ToolId::Name => &self.name,
            ToolId::Prompt => &self.prompt,
            ToolId::Word => &self.word,
        }
    }

    fn slot_mut(&mut self, tool: ToolId) -> &mut ToolSlot {
        match tool {
            ToolId::Scene => &mut self.scene,
            ToolId::Name => &mut self.name,
            ToolId::Prompt => &mut self.prompt,
            ToolId::Word => &mut self.word,
        }
    }

    /// Current result for `tool`, if one has been generated.
    pub fn result(&self, tool: ToolId) -> Option<&ToolResult> {
        self.slot(tool).result()
    }

    /// Whether `tool` has been triggered at least once.
    pub fn is_populated(&self, tool: ToolId) -> bool {
        self.result(tool).is_some()
    }

    /// How many times `tool` has been triggered.
    pub fn generation(&self, tool: ToolId) -> u64 {
        self.generations[tool.index()]
    }

    /// The tables this board draws from.
    pub fn tables(&self) -> &ToolTables {
        &self.tables
    }
}
