//! Static word tables for the generators.
//!
//! Seven fixed lists, one per generation dimension. Each is wrapped in a
//! [`WordList`], which is guaranteed non-empty.

use rand::Rng;

use crate::error::{CoreError, CoreResult};
use crate::select;

/// An ordered, immutable, non-empty list of candidate strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordList {
    name: &'static str,
    words: &'static [&'static str],
}

impl WordList {
    /// Create a word list, rejecting an empty one.
    pub fn new(name: &'static str, words: &'static [&'static str]) -> CoreResult<Self> {
        if words.is_empty() {
            return Err(CoreError::EmptyWordList {
                list: name.to_string(),
            });
        }
        Ok(Self { name, words })
    }

    /// Const constructor for the built-in tables. Fails at compile time
    /// when the list is empty.
    const fn from_static(name: &'static str, words: &'static [&'static str]) -> Self {
        assert!(!words.is_empty(), "built-in word list is empty");
        Self { name, words }
    }

    /// Short identifier of this list (e.g. `location`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The entries, in table order.
    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }

    /// Number of entries (always at least 1).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` is one of the entries.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| *w == word)
    }

    /// Pick one entry uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        tracing::trace!(list = self.name, "drawing");
        *select::pick(self.words, rng)
    }

    /// Look up a built-in list by name.
    pub fn builtin(name: &str) -> CoreResult<Self> {
        let wanted = name.to_lowercase().replace('_', "-");
        ALL_TABLES
            .iter()
            .find(|t| t.name == wanted || format!("{}s", t.name) == wanted)
            .copied()
            .ok_or_else(|| CoreError::UnknownTable(name.to_string()))
    }
}

/// Scene locations.
pub const LOCATIONS: WordList = WordList::from_static(
    "location",
    &[
        "A haunted DMV",
        "The world's saddest birthday party",
        "A submarine with a leak",
        "An escape room for babies",
        "A funeral for a pet rock",
        "A grocery store at 3am",
        "A time traveler's support group",
        "An elevator stuck between floors",
        "A yoga class in a prison",
        "A silent disco on a train",
    ],
);

/// Relationships between the two scene characters.
pub const RELATIONSHIPS: WordList = WordList::from_static(
    "relationship",
    &[
        "Divorced clowns",
        "Rival magicians",
        "Estranged father and robot son",
        "Ex-best friends at a reunion",
        "Boss and employee who are secretly twins",
        "Ghost and reluctant roommate",
        "Former superhero and their nemesis",
        "Two people who peaked in high school",
        "Long-lost pen pals",
        "Competitive neighbors",
    ],
);

/// Scene conflicts.
pub const CONFLICTS: WordList = WordList::from_static(
    "conflict",
    &[
        "One of them has a secret they can't reveal",
        "They both want the last piece of cake",
        "They're trapped together and need to escape",
        "One owes the other a huge favor",
        "They're competing for the same promotion",
        "One is hiding a supernatural ability",
        "They remember the past completely differently",
        "Neither wants to admit they were wrong",
        "One is leaving forever in 5 minutes",
        "They both think the other is an imposter",
    ],
);

/// First halves of character names.
pub const FIRST_NAMES: WordList = WordList::from_static(
    "first-name",
    &[
        "Bartholomew",
        "Danger",
        "Cinnamon",
        "Professor",
        "Grandpa",
        "Tiny",
        "Sir",
        "Doctor",
        "Captain",
        "Chad",
        "Moonbeam",
        "Justice",
    ],
);

/// Second halves of character names.
pub const LAST_NAMES: WordList = WordList::from_static(
    "last-name",
    &[
        "Thunderpants",
        "Skellington",
        "von Fluffernutter",
        "McScreamface",
        "Bonkowitz",
        "Spaghettiarms",
        "Mysterio Jr.",
        "O'Problemo",
        "Wafflestein",
        "Doomwhisper",
        "Bananagrabber",
        "Cactushead",
    ],
);

/// Improv prompts.
pub const PROMPTS: WordList = WordList::from_static(
    "prompt",
    &[
        "The scene takes place entirely in slow motion",
        "Everyone speaks in rhymes",
        "Emotions are the opposite of what they should be",
        "Someone has to incorporate a famous movie quote",
        "The scene must include an unexpected dance break",
        "Characters can only speak in questions",
        "There's an invisible third character everyone reacts to",
        "The stakes keep escalating every 30 seconds",
        "Someone discovers a mysterious object",
        "One character knows something the others don't",
        "The scene is a musical now",
        "Everyone is allergic to a common word",
    ],
);

/// Word-association starters.
pub const WORDS: WordList = WordList::from_static(
    "word",
    &[
        "Banana",
        "Thunder",
        "Whisper",
        "Castle",
        "Pickle",
        "Dragon",
        "Pancake",
        "Mystery",
        "Tornado",
        "Penguin",
        "Lasagna",
        "Spaceship",
    ],
);

/// Every built-in table in display order.
pub const ALL_TABLES: [WordList; 7] = [
    LOCATIONS,
    RELATIONSHIPS,
    CONFLICTS,
    FIRST_NAMES,
    LAST_NAMES,
    PROMPTS,
    WORDS,
];
