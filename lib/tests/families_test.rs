use rs_evil_hangman::*;

fn pool_of(words: Vec<&str>, length: usize) -> CandidatePool {
    CandidatePool::from_bank(&WordBank::from_iterator(words), length)
}

#[test]
fn partition_covers_the_whole_pool_for_every_letter() {
    let pool = pool_of(
        vec!["allot", "alpha", "begot", "below", "endow", "ingot"],
        5,
    );

    for letter in 'a'..='z' {
        let families = partition(pool.words(), letter);
        let total: usize = families.iter().map(Family::len).sum();
        assert_eq!(total, pool.len(), "families for '{}' must cover the pool", letter);
        assert!(families.iter().all(|family| !family.is_empty()));
    }
}

#[test]
fn largest_family_beats_every_other_family() {
    let pool = pool_of(
        vec!["allot", "alpha", "begot", "below", "endow", "ingot"],
        5,
    );

    for letter in 'a'..='z' {
        let families = partition(pool.words(), letter);
        let winner = largest_family(pool.words(), letter).unwrap();
        assert!(
            families.iter().all(|family| family.len() <= winner.len()),
            "winner for '{}' must be maximal",
            letter
        );
    }
}

#[test]
fn narrowing_by_the_winner_keeps_the_pool_consistent() {
    // Drive the narrowing loop by hand: every surviving word must keep
    // matching the pattern after each step.
    let mut pool = pool_of(vec!["bead", "bear", "beat", "fear", "feat"], 4);
    let mut pattern = Pattern::new(4);

    for letter in ['e', 'a', 'r', 't'] {
        let family = largest_family(pool.words(), letter).unwrap();
        match family.signature {
            Signature::Absent => pool.filter_by_absence(letter),
            Signature::At(positions) => {
                pattern.reveal_at(&positions, letter);
                pool.filter_by_pattern(&positions, letter, &pattern);
            }
        }
        assert!(
            pool.words().iter().all(|word| pattern.agrees_with(word)),
            "pool inconsistent after '{}'",
            letter
        );
        assert!(pool.words().iter().all(|word| word.len() == 4));
    }

    assert_eq!(pattern.to_string(), "-eat");
    assert_eq!(pool.len(), 2);
}

#[test]
fn absent_winner_never_changes_the_pattern() {
    let pool = pool_of(vec!["bead", "bear", "beat", "fear", "feat"], 4);

    let winner = largest_family(pool.words(), 'r').unwrap();

    assert!(winner.signature.is_absent());
    assert_eq!(winner.len(), 3);
}
