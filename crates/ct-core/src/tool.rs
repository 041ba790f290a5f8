//! Tool identifiers and the results each tool produces.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::marker::{Marker, SCENE_MARKER};

/// One of the four generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    /// Location, relationship, and conflict for a scene.
    Scene,
    /// An absurd character name.
    Name,
    /// An improv prompt.
    Prompt,
    /// A word-association starter.
    Word,
}

impl ToolId {
    /// All tools in display order.
    pub const ALL: [ToolId; 4] = [ToolId::Scene, ToolId::Name, ToolId::Prompt, ToolId::Word];

    /// Stable lowercase identifier.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Scene => "scene",
            Self::Name => "name",
            Self::Prompt => "prompt",
            Self::Word => "word",
        }
    }

    /// Card title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Scene => "Scene Generator",
            Self::Name => "Character Name Generator",
            Self::Prompt => "Prompt Spinner",
            Self::Word => "Word Association",
        }
    }

    /// Card description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Scene => "Generate random scene elements for improv or sketch writing.",
            Self::Name => "Create absurd character names for your sketches.",
            Self::Prompt => "Get random improv prompts and suggestions.",
            Self::Word => "Quick-fire word game - say the first thing that comes to mind!",
        }
    }

    /// Label of the trigger control.
    pub fn action(self) -> &'static str {
        match self {
            Self::Scene => "Generate Scene",
            Self::Name => "Generate Name",
            Self::Prompt => "Spin Prompt",
            Self::Word => "New Word",
        }
    }

    /// The hidden marker carried by this tool's card, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Self::Scene => Some(SCENE_MARKER),
            _ => None,
        }
    }

    /// Position of this tool in [`ToolId::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Scene => 0,
            Self::Name => 1,
            Self::Prompt => 2,
            Self::Word => 3,
        }
    }

    /// Next tool in display order (wrapping).
    pub fn next(self) -> ToolId {
        ToolId::ALL[(self.index() + 1) % ToolId::ALL.len()]
    }

    /// Previous tool in display order (wrapping).
    pub fn prev(self) -> ToolId {
        ToolId::ALL[(self.index() + ToolId::ALL.len() - 1) % ToolId::ALL.len()]
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ToolId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scene" | "scenes" => Ok(Self::Scene),
            "name" | "names" | "character" => Ok(Self::Name),
            "prompt" | "prompts" | "spinner" => Ok(Self::Prompt),
            "word" | "words" | "association" => Ok(Self::Word),
            _ => Err(CoreError::UnknownTool(s.to_string())),
        }
    }
}

/// Generated scene elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneResult {
    /// Where the scene happens.
    pub location: String,
    /// Who the characters are to each other.
    pub relationship: String,
    /// What is at stake.
    pub conflict: String,
}

/// A generated character name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameResult {
    /// First and last name joined by a single space.
    pub full_name: String,
}

/// A generated improv prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptResult {
    /// The prompt text.
    pub text: String,
}

/// A generated word-association starter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordResult {
    /// The starting word.
    pub text: String,
}

/// The current output of one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolResult {
    /// Output of the scene generator.
    Scene(SceneResult),
    /// Output of the name generator.
    Name(NameResult),
    /// Output of the prompt spinner.
    Prompt(PromptResult),
    /// Output of word association.
    Word(WordResult),
}

impl ToolResult {
    /// The tool that produced this result.
    pub fn tool(&self) -> ToolId {
        match self {
            Self::Scene(_) => ToolId::Scene,
            Self::Name(_) => ToolId::Name,
            Self::Prompt(_) => ToolId::Prompt,
            Self::Word(_) => ToolId::Word,
        }
    }

    /// Displayable fields as `(label, value)` pairs. Single-value results
    /// have no label.
    pub fn fields(&self) -> Vec<(Option<&'static str>, &str)> {
        match self {
            Self::Scene(s) => vec![
                (Some("Location"), s.location.as_str()),
                (Some("Relationship"), s.relationship.as_str()),
                (Some("Conflict"), s.conflict.as_str()),
            ],
            Self::Name(n) => vec![(None, n.full_name.as_str())],
            Self::Prompt(p) => vec![(None, p.text.as_str())],
            Self::Word(w) => vec![(None, w.text.as_str())],
        }
    }
}

impl fmt::Display for ToolResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, value)) in self.fields().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match label {
                Some(label) => write!(f, "{label}: {value}")?,
                None => write!(f, "{value}")?,
            }
        }
        Ok(())
    }
}
