//! Companion-text fragments and the `<main>` region splice.
//!
//! Chapter pages are reconstructed from a plain-text companion file: its
//! front matter is discarded, the first real line becomes the chapter
//! heading, and the rest become spaced paragraph blocks. The rendered
//! fragment then replaces the document's `<main>` region.
//!
//! Everything in this module is pure string-to-string work; reading the
//! companion and the document is the transformer's job.
//!
//! ## Front matter and the skip boundary
//!
//! Companion files from the source site start with a few boilerplate lines:
//! site name, breadcrumbs, a "scan code to read on mobile" banner, then the
//! chapter heading (a line containing `章`). The first eight lines are
//! probed for the banner or a chapter marker; the last hit is the skip
//! boundary, and every line up to and including it is dropped. With no hit
//! the boundary stays 0, so the first line is dropped regardless.

use maud::{Markup, PreEscaped, html};
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

/// How many leading companion lines are probed for skip markers.
const FRONT_MATTER_WINDOW: usize = 8;

/// Boilerplate banner line ("scan the code to read on mobile").
const SCAN_CODE_SENTINEL: &str = "手機掃碼閱讀";

/// Chapter-heading marker character.
const CHAPTER_MARKER: char = '章';

/// Index of the last front-matter line to discard.
pub fn skip_boundary<S: AsRef<str>>(lines: &[S]) -> usize {
    let mut boundary = 0;
    for (i, line) in lines.iter().take(FRONT_MATTER_WINDOW).enumerate() {
        let line = line.as_ref().trim();
        if line == SCAN_CODE_SENTINEL || line.contains(CHAPTER_MARKER) {
            boundary = i;
        }
    }
    boundary
}

/// Build the injected body fragment from companion lines.
///
/// Lines at or before the [`skip_boundary`] are discarded. The first
/// surviving non-blank line (trimmed) becomes the `<h2>` heading; each later
/// non-blank line becomes a spaced `<div>` block. Blank lines produce
/// nothing. Text is HTML-escaped.
pub fn build_fragment<S: AsRef<str>>(lines: &[S]) -> String {
    let boundary = skip_boundary(lines);
    let mut heading: Option<&str> = None;
    let mut paragraphs: Vec<&str> = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if i <= boundary {
            continue;
        }
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        match heading {
            None => heading = Some(line),
            Some(_) => paragraphs.push(line),
        }
    }

    let markup: Markup = html! {
        @if let Some(heading) = heading {
            h2 { (heading) }
            "\n"
        }
        @for para in &paragraphs {
            div style="margin-bottom:20px;" { (para) }
            "\n"
        }
    };
    markup.into_string()
}

/// The `<main ...>...</main>` region: case-insensitive, first opening tag
/// through the first closing tag after it, spanning lines.
fn main_region() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        RegexBuilder::new(r"<main[^>]*>.*?</main>")
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .expect("main region pattern")
    })
}

/// Splice a rendered fragment into an HTML document.
///
/// The first `<main>` region is replaced with the article-wrapped fragment;
/// any later `<main>` regions are left alone. A document without one gets a
/// bare `<main>` block appended at the end instead.
pub fn splice_into_document(document: &str, fragment: &str) -> String {
    let re = main_region();
    if re.is_match(document) {
        let replacement = article_wrapper(fragment);
        re.replace(document, regex::NoExpand(&replacement))
            .into_owned()
    } else {
        format!("{document}\n<main>\n{fragment}</main>")
    }
}

/// Reader-mode wrapper around the fragment: a focusable, padded article
/// holding the new `<main>` element.
fn article_wrapper(fragment: &str) -> String {
    let markup: Markup = html! {
        article id="content"
            style="line-height: 2.4; outline: 0px; font-size: x-large; padding-left: 10%; padding-right: 10%;"
            class="scrollbox"
            tabindex="1" {
            main {
                "\n"
                (PreEscaped(fragment))
            }
        }
    };
    markup.into_string()
}
