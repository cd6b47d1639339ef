//! Per-part-of-speech form to lemma dictionaries
//!
//! Entries are merged with "first occurrence wins": once a form is known for a
//! category, later entries for the same form are ignored. Every freshly inserted
//! form that carries accents also registers its accent-stripped spelling, unless
//! that spelling is already present.

use crate::domain::accents::remove_accents;
use crate::domain::entry::Entry;
use crate::domain::PartOfSpeech;
use crate::error::{Result, VocabError};
use std::collections::btree_map::{self, BTreeMap};
use std::path::Path;

/// Form to lemma relations of a single part of speech
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    forms: BTreeMap<String, String>,
}

impl Dictionary {
    pub fn get(&self, form: &str) -> Option<&str> {
        self.forms.get(form).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Iterate over (form, lemma) pairs sorted by form
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.forms.iter().map(|(f, l)| (f.as_str(), l.as_str()))
    }

    /// Insert only when the form is absent. Returns true if inserted.
    fn insert_first(&mut self, form: &str, lemma: &str) -> bool {
        match self.forms.entry(form.to_string()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(lemma.to_string());
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }
}

/// Outcome of merging one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// Form added; `accent_variant` tells whether a stripped spelling was added too
    Inserted { accent_variant: bool },
    /// Form already known for this part of speech
    Duplicate,
    /// Tag outside the known categories
    Skipped,
}

/// Counters collected while loading dictionary sources
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub lines: usize,
    pub inserted: usize,
    pub accent_variants: usize,
    pub duplicates: usize,
    pub skipped: usize,
}

impl LoadStats {
    fn record(&mut self, insertion: Insertion) {
        match insertion {
            Insertion::Inserted { accent_variant } => {
                self.inserted += 1;
                if accent_variant {
                    self.accent_variants += 1;
                }
            }
            Insertion::Duplicate => self.duplicates += 1,
            Insertion::Skipped => self.skipped += 1,
        }
    }
}

impl std::ops::AddAssign for LoadStats {
    fn add_assign(&mut self, other: Self) {
        self.lines += other.lines;
        self.inserted += other.inserted;
        self.accent_variants += other.accent_variants;
        self.duplicates += other.duplicates;
        self.skipped += other.skipped;
    }
}

/// Dictionaries of all parts of speech, keyed by category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionaries {
    entries: BTreeMap<PartOfSpeech, Dictionary>,
}

impl Dictionaries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a single entry
    pub fn insert(&mut self, entry: &Entry<'_>) -> Insertion {
        let Some(pos) = PartOfSpeech::from_tag(entry.tag) else {
            return Insertion::Skipped;
        };

        let dict = self.entries.entry(pos).or_default();
        if !dict.insert_first(entry.form, entry.lemma) {
            return Insertion::Duplicate;
        }

        let stripped = remove_accents(entry.form);
        let accent_variant = stripped != entry.form && dict.insert_first(&stripped, entry.lemma);

        Insertion::Inserted { accent_variant }
    }

    /// Merge every line of `content`, read from `source`.
    ///
    /// Aborts on the first malformed line; entries merged before it are kept.
    pub fn load_str(&mut self, content: &str, source: &Path) -> Result<LoadStats> {
        let mut stats = LoadStats::default();

        for (idx, line) in content.lines().enumerate() {
            let entry = match Entry::parse(line) {
                Ok(Some(entry)) => entry,
                Ok(None) => continue,
                Err(fields) => {
                    return Err(VocabError::MalformedEntry {
                        path: source.to_path_buf(),
                        line: idx + 1,
                        entry: line.trim_end().to_string(),
                        fields,
                    })
                }
            };

            stats.lines += 1;
            stats.record(self.insert(&entry));
        }

        Ok(stats)
    }

    pub fn get(&self, pos: PartOfSpeech) -> Option<&Dictionary> {
        self.entries.get(&pos)
    }

    /// Look up the lemma of `form` within the `pos` dictionary
    pub fn lemma(&self, pos: PartOfSpeech, form: &str) -> Option<&str> {
        self.get(pos)?.get(form)
    }

    /// Number of forms across all categories
    pub fn len(&self) -> usize {
        self.entries.values().map(Dictionary::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over categories in key order
    pub fn iter(&self) -> impl Iterator<Item = (PartOfSpeech, &Dictionary)> {
        self.entries.iter().map(|(pos, dict)| (*pos, dict))
    }
}
