// src/util/text.rs
use scraper::ElementRef;

/// Visible text of an element.
///
/// Every descendant text node is trimmed, empty pieces are dropped and the
/// rest are joined with `separator`. All markup and attributes disappear.
///
/// # Examples
///
/// ```
/// use notion2anki::util::text::visible_text;
/// use scraper::Html;
///
/// let fragment = Html::parse_fragment("<p><b>What</b> is <i>a tree</i>?</p>");
/// let text = visible_text(fragment.root_element(), " ");
/// assert_eq!(text, "What is a tree ?");
/// ```
pub fn visible_text(element: ElementRef<'_>, separator: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
