// src/ports/sanitizer.rs
use crate::constants::{ALLOWED_TAGS, LINE_BREAK};
use crate::ports::color_classes::normalize_color_classes;
use crate::ports::fence::render_code_fences;
use crate::ports::markup::{rebuild_children, render, Element, Rewrite};
use crate::util::text::visible_text;
use lazy_static::lazy_static;
use regex::Regex;
use scraper::ElementRef;
use tracing::instrument;

lazy_static! {
    static ref LINE_BREAK_REGEX: Regex =
        Regex::new(r"<br\s*/?>").expect("Failed to compile line break regex");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizeMode {
    /// Visible text only
    StripAll,
    /// Restricted HTML subset Anki renders safely
    Rich,
}

/// Turns Notion table cells into Anki field content
#[derive(Debug, Default)]
pub struct CellSanitizer;

impl CellSanitizer {
    pub fn new() -> Self {
        Self
    }

    pub fn sanitize(&self, cell: ElementRef<'_>, mode: SanitizeMode) -> String {
        match mode {
            SanitizeMode::StripAll => self.plain_text(cell),
            SanitizeMode::Rich => self.rich_html(cell),
        }
    }

    #[instrument(level = "trace", skip(self, cell), ret)]
    pub fn plain_text(&self, cell: ElementRef<'_>) -> String {
        visible_text(cell, " ")
    }

    #[instrument(level = "trace", skip(self, cell), ret)]
    pub fn rich_html(&self, cell: ElementRef<'_>) -> String {
        let nodes = rebuild_children(*cell, &sanitize_element);
        let html = normalize_line_breaks(&render(&nodes));
        render_code_fences(&html)
    }
}

fn sanitize_element(mut element: Element) -> Rewrite {
    // Anki would render <mark> with a yellow highlight
    if element.name == "mark" {
        element.name = "span".to_string();
    }

    if !ALLOWED_TAGS.contains(&element.name.as_str()) {
        return Rewrite::Unwrap(element.children);
    }

    match element.name.as_str() {
        "span" => normalize_color_classes(&mut element),
        "a" => keep_only_href(&mut element),
        _ => {}
    }
    element.strip_background_color();

    Rewrite::Keep(element)
}

fn keep_only_href(element: &mut Element) {
    let href = element
        .attr("href")
        .filter(|href| !href.is_empty())
        .map(str::to_string);

    element.attrs.clear();
    if let Some(href) = href {
        element.set_attr("href", href);
    }
}

fn normalize_line_breaks(html: &str) -> String {
    LINE_BREAK_REGEX.replace_all(html, LINE_BREAK).into_owned()
}
