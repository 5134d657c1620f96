use crate::content::ContentError;

/// Period of the hero title rotation.
pub const WORD_ROTATION_INTERVAL_MS: u32 = 3000;

/// Fixed, non-empty list of display strings with a wrapping cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct WordCycle {
    words: Vec<String>,
    index: usize,
}

impl WordCycle {
    pub fn new(words: Vec<String>) -> Result<Self, ContentError> {
        if words.is_empty() {
            return Err(ContentError::EmptyTitles);
        }
        Ok(Self { words, index: 0 })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn current(&self) -> &str {
        &self.words[self.index]
    }

    /// Word for an index previously produced by this cycle.
    pub fn word_at(&self, index: usize) -> &str {
        &self.words[index % self.words.len()]
    }

    /// Moves to the next word, wrapping after the last, and returns the new index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.words.len();
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles() -> WordCycle {
        WordCycle::new(
            ["Web Developer", "Designer", "Graphic Artist", "Kupal"]
                .map(String::from)
                .to_vec(),
        )
        .unwrap()
    }

    #[test]
    fn test_starts_at_first_word() {
        let cycle = titles();
        assert_eq!(cycle.index(), 0);
        assert_eq!(cycle.current(), "Web Developer");
    }

    #[test]
    fn test_wraps_after_full_cycle() {
        let mut cycle = titles();
        let visited: Vec<usize> = (0..cycle.len()).map(|_| cycle.advance()).collect();
        assert_eq!(visited, vec![1, 2, 3, 0]);
        assert_eq!(cycle.current(), "Web Developer");
    }

    #[test]
    fn test_single_word_stays_put() {
        let mut cycle = WordCycle::new(vec!["Designer".to_string()]).unwrap();
        assert_eq!(cycle.advance(), 0);
        assert_eq!(cycle.current(), "Designer");
    }

    #[test]
    fn test_empty_list_is_rejected() {
        assert!(matches!(
            WordCycle::new(Vec::new()),
            Err(ContentError::EmptyTitles)
        ));
    }

    #[test]
    fn test_word_at_never_goes_out_of_range() {
        let cycle = titles();
        assert_eq!(cycle.word_at(3), "Kupal");
        assert_eq!(cycle.word_at(5), "Designer");
    }
}
