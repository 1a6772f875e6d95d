use crate::challenge::Challenge;
use crate::core::{Color, Token};
use crate::round::TokenView;

use super::{prompt, Presenter};

const RESET: &str = "\x1b[0m";

/// Terminal output with 24-bit color swatches.
///
/// Colors in the prompt and token backgrounds are painted with their
/// palette color. Checked tokens are underlined; wrong ones are also
/// struck through.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnsiPresenter;

fn background(color: &Color) -> String {
    format!("\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

fn swatch(color: &Color) -> String {
    format!("{}  {}{RESET}", background(color), color)
}

impl Presenter for AnsiPresenter {
    fn challenge(&self, challenge: &Challenge) -> String {
        prompt(challenge, swatch)
    }

    fn token(&self, token: &Token, view: TokenView) -> String {
        let style = match view {
            TokenView::Pending => "",
            TokenView::Correct => "\x1b[4m",
            TokenView::Incorrect => "\x1b[4;9m",
        };
        format!("{}{style} {} {RESET}", background(&token.color), token.value)
    }
}
