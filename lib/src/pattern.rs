use std::fmt;

/// The player-visible partial word: one cell per letter position, revealed
/// in place as the game narrows.
///
/// Cells only ever go from hidden to revealed. A pattern is created once per
/// session and never reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    cells: Vec<Option<char>>,
}

impl Pattern {
    /// Creates an all-hidden pattern of the given length.
    pub fn new(length: usize) -> Pattern {
        Pattern {
            cells: vec![None; length],
        }
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` once every cell is revealed.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the revealed letter at `index`, if any.
    pub fn letter_at(&self, index: usize) -> Option<char> {
        self.cells[index]
    }

    /// Sets `letter` at every listed position.
    pub fn reveal_at(&mut self, positions: &[u8], letter: char) {
        for &index in positions {
            self.cells[index as usize] = Some(letter);
        }
    }

    /// Returns `true` iff `word` matches every revealed cell. Hidden cells
    /// match any letter.
    pub fn agrees_with(&self, word: &str) -> bool {
        word.len() == self.cells.len()
            && self
                .cells
                .iter()
                .zip(word.chars())
                .all(|(cell, letter)| cell.map_or(true, |revealed| revealed == letter))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.unwrap_or('-'))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn new_pattern_is_all_hidden() {
        let pattern = Pattern::new(4);

        assert_eq!(pattern.len(), 4);
        assert_eq!(pattern.to_string(), "----");
        assert!(!pattern.is_complete());
        assert_eq!(pattern.letter_at(2), None);
    }

    #[test]
    fn reveal_at_sets_every_listed_cell() {
        let mut pattern = Pattern::new(5);

        pattern.reveal_at(&[2, 3], 'l');

        assert_eq!(pattern.to_string(), "--ll-");
        assert_eq!(pattern.letter_at(2), Some('l'));
        assert_eq!(pattern.letter_at(0), None);
        assert!(!pattern.is_complete());
    }

    #[test]
    fn pattern_completes_when_no_cell_is_hidden() {
        let mut pattern = Pattern::new(3);

        pattern.reveal_at(&[0, 2], 'a');
        assert!(!pattern.is_complete());

        pattern.reveal_at(&[1], 'h');
        assert!(pattern.is_complete());
        assert_eq!(pattern.to_string(), "aha");
    }

    #[test]
    fn agrees_with_checks_only_revealed_cells() {
        let mut pattern = Pattern::new(4);
        pattern.reveal_at(&[1], 'e');
        pattern.reveal_at(&[2], 'a');

        assert!(pattern.agrees_with("bear"));
        assert!(pattern.agrees_with("feat"));
        assert!(!pattern.agrees_with("bore"));
        // Length always has to match.
        assert!(!pattern.agrees_with("beats"));
        assert!(!pattern.agrees_with("ea"));
    }
}
