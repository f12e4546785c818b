use super::key::Key;
use crate::Arbitrary;
use crate::AverageRank;
use crate::Count;
use crate::cards::Deck;

/// One digested decision: the action taken holding `cards` on `board`,
/// with the average showdown rank it led to and how many times it was seen.
///
/// Field names follow the CSV header written by the log digester.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct DecisionRecord {
    #[serde(rename = "Cards")]
    cards: String,
    #[serde(rename = "Board")]
    board: String,
    #[serde(rename = "Action")]
    action: String,
    #[serde(rename = "AverageRank")]
    average_rank: AverageRank,
    #[serde(rename = "Count")]
    count: Count,
}

impl DecisionRecord {
    /// Header columns, in the order the digester writes them.
    pub const COLUMNS: [&'static str; 5] = ["Cards", "Board", "Action", "AverageRank", "Count"];

    pub fn new(
        cards: &str,
        board: &str,
        action: &str,
        average_rank: AverageRank,
        count: Count,
    ) -> Self {
        Self {
            cards: cards.to_string(),
            board: board.to_string(),
            action: action.to_string(),
            average_rank,
            count,
        }
        .normalized()
    }
    pub fn cards(&self) -> &str {
        &self.cards
    }
    pub fn board(&self) -> &str {
        &self.board
    }
    pub fn action(&self) -> &str {
        &self.action
    }
    pub fn average_rank(&self) -> AverageRank {
        self.average_rank
    }
    pub fn count(&self) -> Count {
        self.count
    }
    pub fn key(&self) -> Key {
        Key::from((self.cards.as_str(), self.board.as_str()))
    }
    /// Rewrites cards and board into code-point order.
    pub(crate) fn normalized(self) -> Self {
        Self {
            cards: Key::normalize(&self.cards),
            board: Key::normalize(&self.board),
            action: self.action.trim().to_string(),
            ..self
        }
    }
}

/// disjoint hole and board, board at 0/3/4/5 cards
impl Arbitrary for DecisionRecord {
    fn random() -> Self {
        const ACTIONS: [&str; 4] = ["check", "fold", "call", "raise"];
        let mut deck = Deck::new();
        let cards = deck.deal(2);
        let board = deck.deal([0, 3, 4, 5][rand::random_range(0..4)]);
        Self::new(
            &cards.to_string(),
            &board.to_string(),
            ACTIONS[rand::random_range(0..ACTIONS.len())],
            rand::random_range(1.0..50.0),
            rand::random_range(1..100),
        )
    }
}

impl std::fmt::Display for DecisionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<8} avg rank {:.4} over {} hand(s)",
            self.action, self.average_rank, self.count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;

    #[test]
    fn new_normalizes() {
        let record = DecisionRecord::new("7D,7C", "TH,QS,KH,8C", "check", 19.2367992401123, 1);
        assert_eq!(record.cards(), "7C,7D");
        assert_eq!(record.board(), "8C,KH,QS,TH");
        assert_eq!(record.key().as_str(), "7C,7D;8C,KH,QS,TH");
    }

    #[test]
    fn random_is_well_formed() {
        let record = DecisionRecord::random();
        let cards = Hand::try_from(record.cards()).unwrap();
        let board = Hand::try_from(record.board()).unwrap();
        assert_eq!(cards.size(), 2);
        assert!([0, 3, 4, 5].contains(&board.size()));
        assert!(!Hand::overlaps(&cards, &board));
    }

    #[test]
    fn deserializes_from_digest_row() {
        let data = "Cards,Board,Action,AverageRank,Count\n\"7C,7D\",\"8C,KH,QS,TH\",check,19.2367992401123,1\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let record = reader
            .deserialize::<DecisionRecord>()
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(record.action(), "check");
        assert_eq!(record.count(), 1);
        assert!((record.average_rank() - 19.2367992401123).abs() < 1e-12);
    }
}
