/// Mode for performing replacements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementMode {
    /// Compute changes without writing them
    Preview,
    /// Write changed files back to disk
    Apply,
}

/// One literal token substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

/// Text after substitution plus how many occurrences were replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substituted {
    pub content: String,
    pub replacements: usize,
}

/// Ordered table of literal old -> new tokens
///
/// Matching is plain substring search: no regex, no word boundaries. Tables
/// are expected to use keys that never contain one another, so the order the
/// entries are applied in does not affect the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementTable {
    entries: Vec<Replacement>,
}

impl ReplacementTable {
    pub fn new<I, F, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, T)>,
        F: Into<String>,
        T: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(from, to)| Replacement {
                from: from.into(),
                to: to.into(),
            })
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Apply every entry, in order, to the same buffer
    pub fn apply(&self, content: &str) -> Substituted {
        let mut current = content.to_string();
        let mut replacements = 0;

        for entry in &self.entries {
            // An empty key would match between every character
            if entry.from.is_empty() {
                continue;
            }

            let count = current.matches(entry.from.as_str()).count();
            if count > 0 {
                current = current.replace(entry.from.as_str(), &entry.to);
                replacements += count;
            }
        }

        Substituted {
            content: current,
            replacements,
        }
    }
}
