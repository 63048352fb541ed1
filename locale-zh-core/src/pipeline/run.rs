//! Running tokens through the pipeline.

use locale_zh_types::Token;

use crate::pipeline::types::Pipeline;

impl Pipeline {
    /// Runs every stage over `tokens`, in stage order.
    ///
    /// A token is dropped as soon as a stage returns `None` or leaves it
    /// empty; later stages never see it.
    pub fn run(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        for stage in &self.stages {
            tokens = tokens
                .into_iter()
                .filter_map(|token| stage.apply(token))
                .filter(|token| !token.is_empty())
                .collect();

            if tokens.is_empty() {
                break;
            }
        }
        tokens
    }

    /// Runs the pipeline over one string and returns the surviving texts.
    pub fn run_str(&self, text: &str) -> Vec<String> {
        self.run(vec![Token::new(text)])
            .into_iter()
            .map(Token::into_string)
            .collect()
    }
}
