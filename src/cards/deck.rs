use super::card::Card;
use super::hand::Hand;

/// A mutable deck of cards supporting random draws.
///
/// Wraps the [`Hand`] of cards still undealt. Used to generate random
/// holdings and boards for tests and benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw(&mut self) -> Card {
        debug_assert!(self.size() > 0);
        let i = rand::random_range(0..self.size());
        let mut rest = self.0;
        let card = rest.nth(i).expect("index within deck size");
        self.0.remove(card);
        card
    }
    /// Draws `n` cards at once.
    pub fn deal(&mut self, n: usize) -> Hand {
        (0..n)
            .map(|_| self.draw())
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.size() {
            0 => None,
            _ => Some(self.draw()),
        }
    }
}
