use crate::cards::Hand;

/// Composite lookup key: `cards + ";" + board`.
///
/// Both sides are normalized on construction: split on `,`, trimmed, blanks
/// dropped, sorted by code point and re-joined. Input that is already sorted
/// passes through unchanged, so keys built by callers who sort their own
/// tokens match keys built here.
///
/// Tokens are treated as opaque text. Card validity is checked by the loader
/// only when asked to.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Key(String);

impl Key {
    pub const SEPARATOR: char = ';';
    pub const DELIMITER: char = ',';

    /// Sorts the comma-separated tokens of one side of the key.
    pub fn normalize(side: &str) -> String {
        let mut tokens = side
            .split(Self::DELIMITER)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect::<Vec<&str>>();
        tokens.sort_unstable();
        tokens.join(",")
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    pub fn cards(&self) -> &str {
        self.split().0
    }
    pub fn board(&self) -> &str {
        self.split().1
    }
    fn split(&self) -> (&str, &str) {
        self.0
            .split_once(Self::SEPARATOR)
            .unwrap_or((self.0.as_str(), ""))
    }
}

impl From<(&str, &str)> for Key {
    fn from((cards, board): (&str, &str)) -> Self {
        Self(format!(
            "{}{}{}",
            Self::normalize(cards),
            Self::SEPARATOR,
            Self::normalize(board)
        ))
    }
}

/// Hand already renders in normalized order.
impl From<(&Hand, &Hand)> for Key {
    fn from((cards, board): (&Hand, &Hand)) -> Self {
        Self(format!("{}{}{}", cards, Self::SEPARATOR, board))
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_format() {
        let key = Key::from(("7C,7D", "8C,KH,QS,TH"));
        assert_eq!(key.as_str(), "7C,7D;8C,KH,QS,TH");
        assert_eq!(key.cards(), "7C,7D");
        assert_eq!(key.board(), "8C,KH,QS,TH");
    }

    #[test]
    fn sorts_by_code_point() {
        assert_eq!(Key::normalize("3C,2D,5S"), "2D,3C,5S");
        assert_eq!(Key::normalize("TH,AS,KH"), "AS,KH,TH");
    }

    #[test]
    fn sorted_input_is_unchanged() {
        assert_eq!(Key::normalize("5C,AS"), "5C,AS");
        assert_eq!(Key::normalize("8C,KH,QS,TH"), "8C,KH,QS,TH");
    }

    #[test]
    fn strips_whitespace_and_blanks() {
        assert_eq!(Key::normalize(" 7D , 7C,"), "7C,7D");
        assert_eq!(Key::normalize(""), "");
    }

    #[test]
    fn opaque_tokens() {
        assert_eq!(Key::from(("A", "B")).as_str(), "A;B");
    }

    #[test]
    fn agrees_with_hands() {
        let cards = Hand::try_from("7D,7C").unwrap();
        let board = Hand::try_from("TH,8C,QS,KH").unwrap();
        assert_eq!(
            Key::from((&cards, &board)),
            Key::from(("7D,7C", "TH,8C,QS,KH"))
        );
    }

    #[test]
    fn preflop_board() {
        let key = Key::from(("AS,KH", ""));
        assert_eq!(key.as_str(), "AS,KH;");
        assert_eq!(key.board(), "");
    }
}
