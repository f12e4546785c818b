use super::card::Card;

/// An unordered set of cards stored as a 52-bit mask.
///
/// Parsed-log fields list cards as comma-separated tokens. A `Hand` forgets
/// the order they were written in; [`Display`] always renders the tokens in
/// code-point order, which is the normalized form decision keys are built
/// from.
///
/// [`Display`]: std::fmt::Display
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const DELIMITER: char = ',';

    pub fn empty() -> Self {
        Self(0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn overlaps(lhs: &Self, rhs: &Self) -> bool {
        lhs.0 & rhs.0 != 0
    }
    /// Union of two disjoint hands. Panics in debug if they share a card.
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(!Self::overlaps(&lhs, &rhs));
        Self(lhs.0 | rhs.0)
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// drains the set from the lowest encoded card upward
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.size() {
            0 => None,
            _ => {
                let card = Card::from(self.0.trailing_zeros() as u8);
                self.remove(card);
                Some(card)
            }
        }
    }
}

/// u64 isomorphism
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> u64 {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// cards in code-point order of their tokens
impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        let mut cards = hand.collect::<Vec<Card>>();
        cards.sort_by_key(Card::ascii);
        cards
    }
}

/// str isomorphism
/// "7D,7C" -> {7C, 7D}
/// empty or blank input is the empty hand (preflop board)
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split(Self::DELIMITER)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(Card::try_from)
            .try_fold(Self::empty(), |hand, card| {
                let card = card?;
                match hand.contains(&card) {
                    true => Err(format!("duplicate card: {}", card)),
                    false => Ok(Self::add(hand, Self::from(card))),
                }
            })
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Vec::<Card>::from(*self)
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<String>>()
                .join(",")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck::Deck;

    #[test]
    fn display_is_sorted_by_code_point() {
        let hand = Hand::try_from("TH,QS,KH,8C").unwrap();
        assert_eq!(hand.to_string(), "8C,KH,QS,TH");
    }

    #[test]
    fn parse_tolerates_spacing_and_case() {
        let hand = Hand::try_from(" 3c , 2D,5s").unwrap();
        assert_eq!(hand.to_string(), "2D,3C,5S");
    }

    #[test]
    fn blank_is_empty() {
        assert_eq!(Hand::try_from("").unwrap(), Hand::empty());
        assert_eq!(Hand::empty().to_string(), "");
    }

    #[test]
    fn rejects_duplicates() {
        assert!(Hand::try_from("7C,7C").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(Hand::try_from("7C,ZZ").is_err());
    }

    #[test]
    fn bijective_str() {
        let hand = Deck::new().deal(5);
        assert_eq!(hand, Hand::try_from(hand.to_string().as_str()).unwrap());
    }

    #[test]
    fn iterator_drains_every_card() {
        let hand = Deck::new().deal(4);
        assert_eq!(hand.count(), 4);
    }
}
