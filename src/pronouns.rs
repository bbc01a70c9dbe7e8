use serde::{Deserialize, Serialize};

/// A named grammatical person/number class with its ordered pronoun list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PronounClass {
    /// Human-readable class name, e.g. "1st person singular"
    pub name: String,
    /// Members in declaration order; casing is significant ("I" stays uppercase)
    pub members: Vec<String>,
}

impl PronounClass {
    pub fn new(name: &str, members: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Exact string membership test, no case folding
    pub fn contains(&self, term: &str) -> bool {
        self.members.iter().any(|m| m == term)
    }
}

/// Fixed pronoun class tables, immutable after construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PronounLexicon {
    /// Classes in declaration order; expansion iterates them in this order
    pub classes: Vec<PronounClass>,
}

impl Default for PronounLexicon {
    fn default() -> Self {
        // WHY: these word lists are compatibility-critical and must be
        // reproduced verbatim, including the uppercase "I"
        Self {
            classes: vec![
                PronounClass::new("1st person singular", &["I", "me", "my", "mine", "myself"]),
                PronounClass::new("1st person plural", &["we", "us", "our", "ours", "ourselves"]),
                PronounClass::new("2nd person singular", &["you", "your", "yourself"]),
            ],
        }
    }
}

impl PronounLexicon {
    /// Collect the full member list of every class that any input term belongs to.
    ///
    /// Classes are tested independently in declaration order; a term triggers
    /// exactly the classes it literally belongs to, and a triggered class
    /// contributes ALL of its members (the originally supplied term is not
    /// privileged). The result is flattened and may contain duplicates across
    /// classes; callers deduplicate when merging with the requested terms.
    pub fn class_expansions(&self, terms: &[String]) -> Vec<String> {
        let mut expanded = Vec::new();

        for class in &self.classes {
            if terms.iter().any(|term| class.contains(term)) {
                expanded.extend(class.members.iter().cloned());
            }
        }

        expanded
    }
}
