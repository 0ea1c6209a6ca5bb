use serde::{Deserialize, Serialize};
use tracing::debug;

use sarf_index::{InOrderIter, RootIndex, RootKey, RootKeyError, RootNode};
use sarf_schemes::{SchemeEntry, SchemeTable};
use sarf_text::Normalizer;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("invalid root form: {0}")]
    InvalidRoot(#[from] RootKeyError),

    #[error("derived word cannot be empty")]
    EmptyWord,
}

/// The morphology lexicon: one balanced root index plus one scheme table.
///
/// The two structures are independent, schemes never reference tree nodes,
/// and the lexicon owns both. An optional [`Normalizer`] folds spelling
/// variants before roots and words reach the index; lookups fold their
/// argument the same way, so callers see one consistent orthography.
#[derive(Debug, Default)]
pub struct Lexicon {
    roots: RootIndex,
    schemes: SchemeTable,
    normalizer: Option<Normalizer>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lexicon preloaded with the built-in scheme inventory.
    pub fn with_builtin_schemes() -> Self {
        Self {
            schemes: SchemeTable::with_builtin(),
            ..Self::default()
        }
    }

    /// Replace the scheme table wholesale, e.g. with one loaded from a file.
    pub fn with_schemes(mut self, schemes: SchemeTable) -> Self {
        self.schemes = schemes;
        self
    }

    /// Fold roots and words through `normalizer` before storing or looking
    /// them up.
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    fn fold(&self, text: &str) -> String {
        match &self.normalizer {
            Some(normalizer) => normalizer.normalize(text),
            None => text.to_string(),
        }
    }

    /// Record one observation of `word` derived from `root`.
    ///
    /// Inserts the root when absent and bumps the word's frequency on the
    /// located node. Returns true when the root was newly added.
    pub fn record(&mut self, root: &str, word: &str) -> Result<bool, LexiconError> {
        if word.trim().is_empty() {
            return Err(LexiconError::EmptyWord);
        }
        let key: RootKey = self.fold(root).parse()?;
        let word = self.fold(word);

        let added = self.roots.insert(key.clone());
        if added {
            debug!("Indexed new root \"{}\"", key);
        }
        self.roots
            .get_mut(&key)
            .expect("root present after insert")
            .add_derived_word(&word);
        Ok(added)
    }

    /// Look up a root form, folding it the same way [`Lexicon::record`]
    /// does. `None` means the root is not indexed.
    pub fn lookup(&self, root: &str) -> Option<&RootNode> {
        let key: RootKey = self.fold(root).parse().ok()?;
        self.roots.get(&key)
    }

    /// All indexed roots in ascending order.
    pub fn roots(&self) -> InOrderIter<'_> {
        self.roots.iter()
    }

    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    pub fn tree_height(&self) -> u32 {
        self.roots.height()
    }

    /// Drop every indexed root. Schemes are untouched.
    pub fn clear_roots(&mut self) {
        self.roots.clear();
    }

    /// Define a scheme. A repeated name shadows the older definition until
    /// it is removed.
    pub fn define_scheme(&mut self, name: &str, pattern: &str) {
        debug!("Defined scheme \"{}\"", name);
        self.schemes.insert(name, pattern);
    }

    /// The scheme registered under `name`, newest definition first.
    pub fn scheme(&self, name: &str) -> Option<&SchemeEntry> {
        self.schemes.get(name)
    }

    pub fn update_scheme(&mut self, name: &str, pattern: &str) -> bool {
        self.schemes.update(name, pattern)
    }

    pub fn remove_scheme(&mut self, name: &str) -> bool {
        self.schemes.remove(name)
    }

    /// Every defined scheme, in table order.
    pub fn schemes(&self) -> impl Iterator<Item = &SchemeEntry> {
        self.schemes.entries()
    }

    pub fn scheme_count(&self) -> usize {
        self.schemes.len()
    }

    /// Point-in-time summary of both structures.
    pub fn stats(&self) -> LexiconStats {
        LexiconStats {
            root_count: self.roots.len(),
            tree_height: self.roots.height(),
            scheme_count: self.schemes.len(),
            scheme_load_factor: self.schemes.load_factor(),
            scheme_collisions: self.schemes.collision_count(),
        }
    }
}

/// Summary counters for reporting, serialized as-is by the demo's JSON
/// output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconStats {
    pub root_count: usize,
    pub tree_height: u32,
    pub scheme_count: usize,
    pub scheme_load_factor: f64,
    pub scheme_collisions: usize,
}
