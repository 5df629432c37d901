//! Per-site adapters and the selector helpers they share.

mod jobsdb;
mod jobthai;
mod linkedin;

pub use jobsdb::JobsDbSource;
pub use jobthai::JobThaiSource;
pub use linkedin::LinkedInSource;

use scraper::{ElementRef, Selector};

/// First non-empty trimmed text under `scope` matching `selector`.
pub(crate) fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .map(|el| el.text().collect::<String>().trim().to_owned())
        .find(|text| !text.is_empty())
}

/// First `href` attribute under `scope` matching `selector`.
pub(crate) fn first_href(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .find_map(|el| el.value().attr("href"))
        .map(str::to_owned)
}

/// Resolves a possibly-relative listing link against the site base URL.
pub(crate) fn absolutize(base_url: &str, link: &str) -> String {
    if link.starts_with("http") {
        link.to_owned()
    } else {
        format!("{base_url}{link}")
    }
}

/// Fallback-pass company extraction: walk up from the title anchor to its
/// nearest card-ish container, then take the first text node that isn't the
/// title itself. Looser than the primary selectors; only runs when the
/// primary pass matched nothing.
pub(crate) fn company_near_anchor(anchor: ElementRef<'_>, title: &str) -> Option<String> {
    let container = anchor
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| matches!(el.value().name(), "div" | "article" | "li"))?;

    let candidates = Selector::parse("span, div").expect("valid selector");
    container
        .select(&candidates)
        .map(|el| el.text().collect::<String>().trim().to_owned())
        .find(|text| !text.is_empty() && text != title)
}
