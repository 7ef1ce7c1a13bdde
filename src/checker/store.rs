use ahash::RandomState;

// Fixed seeds so a word lands in the same bucket on every run.
const HASH_SEEDS: (u64, u64, u64, u64) = (
    0x6157_6f72_6457_6973,
    0x6520_6469_6374_696f,
    0x6e61_7279_2073_746f,
    0x7265_2073_6565_6473,
);

#[derive(Debug)]
struct Entry {
    word: String,
    score: i64,
}

/// Chained hash map from word to an auxiliary score.
///
/// The bucket count is fixed at construction and never grows; collision
/// chains grow per bucket instead. Within a bucket the newest insertion
/// shadows older ones during enumeration, so `iter` walks each chain
/// newest-first. Ranking relies on that order for tie-breaking.
pub struct WordStore {
    buckets: Vec<Vec<Entry>>,
    hasher: RandomState,
    len: usize,
}

impl WordStore {
    /// Create an empty store with `capacity` buckets.
    ///
    /// `capacity` must be non-zero; the CLI validates this before
    /// construction.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "bucket capacity must be non-zero");
        Self {
            buckets: (0..capacity).map(|_| Vec::new()).collect(),
            hasher: RandomState::with_seeds(
                HASH_SEEDS.0,
                HASH_SEEDS.1,
                HASH_SEEDS.2,
                HASH_SEEDS.3,
            ),
            len: 0,
        }
    }

    fn bucket_index(&self, word: &str) -> usize {
        (self.hasher.hash_one(word) % self.buckets.len() as u64) as usize
    }

    /// Insert `word` with `score` unless it is already present.
    ///
    /// A duplicate insert leaves the existing entry untouched, score
    /// included, and returns `false`. Callers pass already-lowercased
    /// words; lookup is byte-exact.
    pub fn insert_or_init(&mut self, word: &str, score: i64) -> bool {
        let idx = self.bucket_index(word);
        let bucket = &mut self.buckets[idx];
        if bucket.iter().any(|e| e.word == word) {
            return false;
        }
        bucket.push(Entry {
            word: word.to_owned(),
            score,
        });
        self.len += 1;
        true
    }

    pub fn contains_key(&self, word: &str) -> bool {
        let idx = self.bucket_index(word);
        self.buckets[idx].iter().any(|e| e.word == word)
    }

    /// Overwrite the score of an existing entry. Returns `false` when the
    /// word is absent.
    pub fn set_score(&mut self, word: &str, score: i64) -> bool {
        let idx = self.bucket_index(word);
        match self.buckets[idx].iter_mut().find(|e| e.word == word) {
            Some(entry) => {
                entry.score = score;
                true
            }
            None => false,
        }
    }

    pub fn score(&self, word: &str) -> Option<i64> {
        let idx = self.bucket_index(word);
        self.buckets[idx]
            .iter()
            .find(|e| e.word == word)
            .map(|e| e.score)
    }

    /// Enumerate every entry: bucket-index ascending, newest insertion
    /// first within a bucket.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().rev().map(|e| (e.word.as_str(), e.score)))
    }

    /// Number of entries (not buckets).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets (not entries).
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut store = WordStore::with_capacity(64);
        assert!(store.insert_or_init("hello", 0));
        assert!(store.insert_or_init("world", 0));

        assert!(store.contains_key("hello"));
        assert!(store.contains_key("world"));
        assert!(!store.contains_key("notfound"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_duplicate_insert_is_a_noop() {
        let mut store = WordStore::with_capacity(64);
        assert!(store.insert_or_init("hello", 7));
        assert!(!store.insert_or_init("hello", 99));

        assert_eq!(store.len(), 1);
        assert_eq!(store.score("hello"), Some(7));
    }

    #[test]
    fn test_set_score() {
        let mut store = WordStore::with_capacity(64);
        store.insert_or_init("hello", 0);

        assert!(store.set_score("hello", 3));
        assert_eq!(store.score("hello"), Some(3));

        assert!(!store.set_score("absent", 1));
        assert_eq!(store.score("absent"), None);
    }

    #[test]
    fn test_capacity_is_bucket_count() {
        let mut store = WordStore::with_capacity(8);
        store.insert_or_init("a", 0);
        store.insert_or_init("b", 0);

        assert_eq!(store.capacity(), 8);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_chain_enumerates_newest_first() {
        // A single bucket forces every word onto one chain.
        let mut store = WordStore::with_capacity(1);
        store.insert_or_init("first", 0);
        store.insert_or_init("second", 0);
        store.insert_or_init("third", 0);

        let words: Vec<&str> = store.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_iter_yields_scores() {
        let mut store = WordStore::with_capacity(4);
        store.insert_or_init("one", 1);
        store.insert_or_init("two", 2);

        let mut pairs: Vec<(String, i64)> =
            store.iter().map(|(w, s)| (w.to_owned(), s)).collect();
        pairs.sort();
        assert_eq!(pairs, vec![("one".to_owned(), 1), ("two".to_owned(), 2)]);
    }

    #[test]
    fn test_empty_store() {
        let store = WordStore::with_capacity(16);
        assert!(store.is_empty());
        assert_eq!(store.iter().count(), 0);
    }
}
