// src/ports/fence.rs
use crate::constants::{CODE_BLOCK_STYLE, LINE_BREAK};
use crate::ports::markup::{rebuild_children, render, Element, Rewrite};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use scraper::Html;
use tracing::warn;

lazy_static! {
    // Non-greedy across lines: the first open delimiter pairs with the next one
    static ref FENCE_REGEX: Regex =
        Regex::new(r"(?s)```(.*?)```").expect("Failed to compile code fence regex");
}

const FENCE_DELIMITER: &str = "```";

/// Replace triple-backtick fences in serialized cell HTML with monospace blocks.
///
/// Line breaks are treated as newlines while matching so a fence may span
/// several lines of the cell; afterwards every newline becomes `<br/>` again.
pub fn render_code_fences(html: &str) -> String {
    let text = html.replace(LINE_BREAK, "\n");

    let delimiters = text.matches(FENCE_DELIMITER).count();
    if delimiters % 2 == 1 {
        warn!(delimiters, "Odd number of code fence delimiters, last fence stays literal");
    }

    let fenced = FENCE_REGEX.replace_all(&text, |caps: &Captures| code_block(&caps[1]));

    fenced.replace('\n', LINE_BREAK)
}

/// Wrap fence content in the code block element. The content is re-parsed
/// because a fence may cut through elements; text colors survive, background
/// colors do not.
fn code_block(inner: &str) -> String {
    let fragment = Html::parse_fragment(inner);
    let strip_background = |mut element: Element| {
        element.strip_background_color();
        Rewrite::Keep(element)
    };
    let nodes = rebuild_children(*fragment.root_element(), &strip_background);

    format!("<div style=\"{CODE_BLOCK_STYLE}\">{}</div>", render(&nodes))
}
