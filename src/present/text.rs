use crate::challenge::Challenge;
use crate::core::Token;
use crate::round::TokenView;

use super::{prompt, Presenter};

/// Plain text: colors as hex codes, token state as a suffix mark.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextPresenter;

impl Presenter for TextPresenter {
    fn challenge(&self, challenge: &Challenge) -> String {
        prompt(challenge, ToString::to_string)
    }

    fn token(&self, token: &Token, view: TokenView) -> String {
        let mark = match view {
            TokenView::Pending => "",
            TokenView::Correct => "+",
            TokenView::Incorrect => "x",
        };
        format!("[{} {}]{}", token.value, token.color, mark)
    }
}
