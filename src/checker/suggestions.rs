use crate::checker::distance::levenshtein;
use crate::checker::store::WordStore;

/// A dictionary entry paired with its distance to the current query.
/// Borrowed from the store and rebuilt fresh per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub word: &'a str,
    pub distance: usize,
}

/// Compute the edit distance from `query` to every entry in the store.
///
/// Candidates come back in store enumeration order, which `top_k` depends
/// on for tie-breaking. Every entry is scored before any ranking happens;
/// there is no early exit.
pub fn score_all<'a>(store: &'a WordStore, query: &str) -> Vec<Candidate<'a>> {
    store
        .iter()
        .map(|(word, _)| Candidate {
            word,
            distance: levenshtein(query, word),
        })
        .collect()
}

/// Greedy single-pass selection of up to `k` low-distance candidates.
///
/// Each candidate takes the first empty slot, or evicts the first occupant
/// with a strictly greater distance. An evicted occupant is discarded, not
/// reseated, so this is an approximation of a true top-k: the result
/// depends on candidate order and can skip moderately-close words. That
/// behavior is intentional and pinned by tests; do not replace it with an
/// exact selection.
pub fn top_k<'a>(candidates: &[Candidate<'a>], k: usize) -> Vec<Candidate<'a>> {
    let mut slots: Vec<Option<Candidate<'a>>> = vec![None; k];

    for &candidate in candidates {
        for slot in slots.iter_mut() {
            let takes_slot = match slot {
                None => true,
                Some(held) => candidate.distance < held.distance,
            };
            if takes_slot {
                *slot = Some(candidate);
                break;
            }
        }
    }

    slots.into_iter().flatten().collect()
}

/// Score the whole store against `query` and pick up to `k` suggestions.
pub fn suggest<'a>(store: &'a WordStore, query: &str, k: usize) -> Vec<Candidate<'a>> {
    top_k(&score_all(store, query), k)
}
