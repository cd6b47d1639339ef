//! Part-of-speech categories and tag classification

use std::fmt;
use std::str::FromStr;

/// Coarse part-of-speech category used as the top-level dictionary key.
///
/// Variants are declared in the alphabetical order of their keys so that the
/// derived `Ord` matches the order of the generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartOfSpeech {
    /// Adjective
    Adj,
    /// Adposition
    Adp,
    /// Adverb
    Adv,
    /// Conjunction
    Conj,
    /// Determiner
    Det,
    /// Interjection
    Intj,
    /// Noun
    Noun,
    /// Pronoun
    Pron,
    /// Verb
    Verb,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 9] = [
        PartOfSpeech::Adj,
        PartOfSpeech::Adp,
        PartOfSpeech::Adv,
        PartOfSpeech::Conj,
        PartOfSpeech::Det,
        PartOfSpeech::Intj,
        PartOfSpeech::Noun,
        PartOfSpeech::Pron,
        PartOfSpeech::Verb,
    ];

    /// Classify a morphological tag by its first character.
    /// Returns None for tags outside the known categories.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.chars().next()? {
            'D' => Some(PartOfSpeech::Det),
            'A' => Some(PartOfSpeech::Adj),
            'N' => Some(PartOfSpeech::Noun),
            'V' => Some(PartOfSpeech::Verb),
            'R' => Some(PartOfSpeech::Adv),
            'S' => Some(PartOfSpeech::Adp),
            'C' => Some(PartOfSpeech::Conj),
            'P' => Some(PartOfSpeech::Pron),
            'I' => Some(PartOfSpeech::Intj),
            _ => None,
        }
    }

    /// Key used in generated dictionaries
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Conj => "CONJ",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Intj => "INTJ",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Verb => "VERB",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartOfSpeech {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        PartOfSpeech::ALL
            .into_iter()
            .find(|pos| pos.as_str() == upper)
            .ok_or_else(|| {
                format!(
                    "Invalid part of speech: '{}'. Valid values are: ADJ, ADP, ADV, CONJ, DET, INTJ, NOUN, PRON, VERB",
                    s
                )
            })
    }
}
