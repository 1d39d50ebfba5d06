//! Manual page renderer.
//!
//! DESIGN
//! ======
//! The page is fixed markup: a title, a heading, three paragraphs and one
//! link per downloadable manual. The shared chrome is passed in by value so
//! rendering stays pure and can be done once at startup.

use crate::chrome::Chrome;

pub const TITLE: &str = "Manual";

/// Downloadable manuals as `(href, label)`, in display order.
pub const MANUAL_LINKS: [(&str, &str); 2] = [
    ("docs/manual_en.pdf", "English manual"),
    ("docs/manual_de.pdf", "German manual"),
];

const PARAGRAPHS: [&str; 3] = [
    "There's an on-going effort to write a manual for using Code::Blocks. This is a \
     community-driven effort and contributions/criticism/suggestions are welcomed.",
    "The initial documentation had started as an internal project of HighTec EDV-Systeme GmbH \
     who is now making it yet another contribution to the community.",
    "The documentation is provided in English and German, in PDF format. More formats will \
     follow soon.",
];

/// Render the page body without chrome.
#[must_use]
pub fn render_body() -> String {
    let mut out = String::new();
    out.push_str(&format!("<title>{TITLE}</title>\n"));
    out.push_str(&format!("<h1>{TITLE}</h1>\n"));

    for paragraph in PARAGRAPHS {
        out.push_str(&format!("<p>{paragraph}</p>\n"));
    }

    out.push_str("<p>\n");
    for (href, label) in MANUAL_LINKS {
        out.push_str(&format!("<a href=\"{href}\">{label}</a><br>\n"));
    }
    out.push_str("</p>\n");

    out
}

/// Render the full document: chrome header, page body, chrome footer.
#[must_use]
pub fn render(chrome: &Chrome) -> String {
    let body = render_body();
    let mut out = String::with_capacity(chrome.header.len() + body.len() + chrome.footer.len());
    out.push_str(&chrome.header);
    out.push_str(&body);
    out.push_str(&chrome.footer);
    out
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
