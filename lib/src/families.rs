use std::collections::HashMap;
use std::sync::Arc;

/// Where a letter sits in a word: the ordered list of zero-based positions,
/// or nowhere at all.
///
/// Two candidates belong to the same family for a guess exactly when their
/// signatures for that letter are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Signature {
    /// The letter does not occur in the word.
    Absent,
    /// The letter occurs at exactly these positions. Never empty.
    At(Vec<u8>),
}

impl Signature {
    /// Computes the signature of `word` for `letter`.
    pub fn of(word: &str, letter: char) -> Signature {
        let positions: Vec<u8> = word
            .char_indices()
            .filter(|(_, other)| *other == letter)
            .map(|(index, _)| index as u8)
            .collect();
        if positions.is_empty() {
            Signature::Absent
        } else {
            Signature::At(positions)
        }
    }

    pub fn is_absent(&self) -> bool {
        *self == Signature::Absent
    }
}

/// One group of candidates sharing a signature for the guessed letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    pub signature: Signature,
    /// Members, in pool order.
    pub words: Vec<Arc<str>>,
}

impl Family {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Splits `words` into families by their signature for `letter`.
///
/// Families come back in first-seen order. Every input word lands in exactly
/// one family, so the family sizes always sum back to `words.len()`.
pub fn partition(words: &[Arc<str>], letter: char) -> Vec<Family> {
    let mut index_by_signature: HashMap<Signature, usize> = HashMap::new();
    let mut families: Vec<Family> = Vec::new();
    for word in words {
        let signature = Signature::of(word, letter);
        let index = match index_by_signature.get(&signature) {
            Some(&index) => index,
            None => {
                index_by_signature.insert(signature.clone(), families.len());
                families.push(Family {
                    signature,
                    words: Vec::new(),
                });
                families.len() - 1
            }
        };
        families[index].words.push(Arc::clone(word));
    }
    families
}

/// Picks the family the adversary keeps: the first-seen family whose size no
/// later family strictly exceeds.
///
/// The input comes from the pool, which stays lexicographically sorted, so
/// "first seen" is well defined: on a tie, the family whose first member
/// sorts earliest wins. Returns `None` only for an empty input.
pub fn largest_family(words: &[Arc<str>], letter: char) -> Option<Family> {
    partition(words, letter)
        .into_iter()
        .reduce(|best, next| if next.len() > best.len() { next } else { best })
}
