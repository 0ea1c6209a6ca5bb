use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

mod builtin;

pub use builtin::BUILTIN_SCHEMES;

/// Number of buckets. Prime, to spread small key sets; the table never
/// resizes.
pub const BUCKET_COUNT: usize = 101;

#[derive(Debug, thiserror::Error)]
pub enum SchemeFileError {
    #[error("failed to read scheme file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected `name pattern`, got {text:?}")]
    Malformed { line: usize, text: String },
}

/// One scheme definition: a name such as فاعل and its slot pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeEntry {
    pub name: String,
    pub pattern: String,
}

/// Sum of the name's UTF-8 byte values, reduced mod the bucket count.
/// Insensitive to letter order, so anagram names always share a bucket.
fn bucket_of(name: &str) -> usize {
    let sum: u64 = name.bytes().map(u64::from).sum();
    (sum % BUCKET_COUNT as u64) as usize
}

/// Chained hash table of morphological schemes.
///
/// Capacity is fixed at [`BUCKET_COUNT`]; every bucket holds a chain ordered
/// newest first, so an insert under an existing name shadows the older entry
/// until the newer one is removed. Lookups, updates and removals all act on
/// the first chain entry whose name matches.
#[derive(Debug, Clone)]
pub struct SchemeTable {
    buckets: Vec<Vec<SchemeEntry>>,
    element_count: usize,
    collision_count: usize,
}

impl Default for SchemeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemeTable {
    /// Empty table with all buckets allocated up front.
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); BUCKET_COUNT],
            element_count: 0,
            collision_count: 0,
        }
    }

    /// Table preloaded with [`BUILTIN_SCHEMES`].
    pub fn with_builtin() -> Self {
        let mut table = Self::new();
        for (name, pattern) in BUILTIN_SCHEMES {
            table.insert(name, pattern);
        }
        table
    }

    /// Load `name pattern` lines from a file.
    ///
    /// Blank lines and `#` comments are skipped. The first whitespace run
    /// separates the name from the pattern, so patterns may themselves
    /// contain spaces.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemeFileError> {
        let content = fs::read_to_string(path)?;
        let mut table = Self::new();
        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.split_once(char::is_whitespace) {
                Some((name, pattern)) => table.insert(name, pattern.trim_start()),
                None => {
                    return Err(SchemeFileError::Malformed {
                        line: idx + 1,
                        text: line.to_string(),
                    })
                }
            }
        }
        Ok(table)
    }

    /// Insert a scheme at the head of its bucket's chain.
    ///
    /// Duplicate names are allowed; the newest entry shadows older ones on
    /// lookup. Counts a collision whenever the target bucket already held
    /// any entry, matching name or not.
    pub fn insert(&mut self, name: &str, pattern: &str) {
        let bucket = &mut self.buckets[bucket_of(name)];
        if !bucket.is_empty() {
            self.collision_count += 1;
        }
        bucket.insert(
            0,
            SchemeEntry {
                name: name.to_string(),
                pattern: pattern.to_string(),
            },
        );
        self.element_count += 1;
    }

    /// First entry matching `name`, scanning from the chain head.
    pub fn get(&self, name: &str) -> Option<&SchemeEntry> {
        self.buckets[bucket_of(name)]
            .iter()
            .find(|entry| entry.name == name)
    }

    /// Rewrite the pattern of the first entry matching `name` in place.
    /// Returns false, changing nothing, when the name is absent.
    pub fn update(&mut self, name: &str, pattern: &str) -> bool {
        match self.buckets[bucket_of(name)]
            .iter_mut()
            .find(|entry| entry.name == name)
        {
            Some(entry) => {
                entry.pattern = pattern.to_string();
                true
            }
            None => false,
        }
    }

    /// Splice out the first entry matching `name`. Returns false when the
    /// name is absent. Removing a shadowing duplicate reveals the next
    /// older entry under the same name.
    pub fn remove(&mut self, name: &str) -> bool {
        let bucket = &mut self.buckets[bucket_of(name)];
        match bucket.iter().position(|entry| entry.name == name) {
            Some(idx) => {
                bucket.remove(idx);
                self.element_count -= 1;
                true
            }
            None => false,
        }
    }

    /// Every entry, bucket by bucket, newest first within a bucket.
    pub fn entries(&self) -> impl Iterator<Item = &SchemeEntry> {
        self.buckets.iter().flatten()
    }

    /// Total stored entries, shadowed duplicates included.
    pub fn len(&self) -> usize {
        self.element_count
    }

    pub fn is_empty(&self) -> bool {
        self.element_count == 0
    }

    /// Entries per bucket. Exceeds 1.0 once chains outgrow the fixed
    /// capacity.
    pub fn load_factor(&self) -> f64 {
        self.element_count as f64 / BUCKET_COUNT as f64
    }

    /// Running count of inserts that landed in an already-occupied bucket.
    pub fn collision_count(&self) -> usize {
        self.collision_count
    }
}
