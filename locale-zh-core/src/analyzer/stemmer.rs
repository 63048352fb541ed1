//! Identity stemmer.
//!
//! Chinese has no inflection to strip. The stage exists so the pipeline keeps
//! the trimmer → stop-word filter → stemmer shape hosts expect.

use locale_zh_types::Token;

/// Returns the token unchanged.
#[inline(always)]
pub fn stem(token: Token) -> Option<Token> {
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use locale_zh_types::{Position, TokenMetadata};
    use proptest::prelude::*;

    #[test]
    fn keeps_metadata() {
        let meta = TokenMetadata {
            position: Some(Position::new(0, 2)),
            index: 0,
        };
        let token = Token::with_metadata("中文", meta);
        assert_eq!(stem(token.clone()), Some(token));
    }

    proptest! {
        #[test]
        fn identity(s in "\\PC*") {
            let token = Token::new(s);
            prop_assert_eq!(stem(token.clone()), Some(token));
        }
    }
}
