//! LinkedIn guest job search.
//!
//! Uses the unauthenticated `jobs-guest` search endpoint, which serves a
//! server-rendered card list without a session. LinkedIn restricts scraping
//! aggressively; the pacing delay between keywords is what keeps this
//! adapter alive, not cleverness.

use async_trait::async_trait;
use chrono::NaiveDate;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use scraper::{Html, Selector};

use jobsweep_core::{dedupe_jobs, JobLevel, ScrapedJob, Screener, Source};

use crate::error::ScrapeError;
use crate::fetch::FetchClient;
use crate::source::JobSource;
use crate::sources::{absolutize, first_href, first_text};

pub const DEFAULT_BASE_URL: &str = "https://www.linkedin.com";

const SEARCH_KEYWORDS: &[&str] = &[
    "developer",
    "software engineer",
    "data engineer",
    "devops engineer",
    "cloud engineer",
];

pub struct LinkedInSource {
    fetch: FetchClient,
    screener: Screener,
    delay_ms: u64,
    base_url: String,
}

impl LinkedInSource {
    #[must_use]
    pub fn new(fetch: FetchClient, screener: Screener, delay_ms: u64) -> Self {
        Self {
            fetch,
            screener,
            delay_ms,
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Points the adapter at a different host. Used by tests to target a
    /// local mock server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn search_url(&self, keyword: &str) -> String {
        let encoded = utf8_percent_encode(keyword, NON_ALPHANUMERIC);
        format!(
            "{}/jobs-guest/jobs/api/seeMoreJobPostings/search?keywords={encoded}&location=Thailand&start=0",
            self.base_url
        )
    }

    /// Extracts screened candidates from one search response.
    ///
    /// Primary pass reads the `.job-search-card` markup; when that matches
    /// nothing (LinkedIn reshuffles class names periodically) a looser
    /// `.base-card` pass runs instead.
    fn parse_search_page(&self, html: &str) -> Vec<ScrapedJob> {
        let document = Html::parse_document(html);
        let root = document.root_element();

        let card_sel = Selector::parse(".job-search-card").expect("valid selector");
        let title_sel = Selector::parse(".base-search-card__title").expect("valid selector");
        let company_sel = Selector::parse(".base-search-card__subtitle").expect("valid selector");
        let location_sel = Selector::parse(".job-search-card__location").expect("valid selector");
        let link_sel = Selector::parse("a.base-card__full-link").expect("valid selector");
        let date_sel = Selector::parse("time.job-search-card__listdate").expect("valid selector");

        let mut jobs = Vec::new();
        for card in root.select(&card_sel) {
            let Some(title) = first_text(card, &title_sel) else {
                continue;
            };
            let Some(company) = first_text(card, &company_sel) else {
                continue;
            };
            let Some(link) = first_href(card, &link_sel) else {
                continue;
            };

            if !self.screener.is_target_title(&title) {
                continue;
            }
            let level = self.screener.classify(&title, None);
            if level == JobLevel::Senior {
                continue;
            }

            let posted_at = card
                .select(&date_sel)
                .find_map(|el| el.value().attr("datetime"))
                .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc());

            let mut job = ScrapedJob::new(title, company, clean_listing_url(&link));
            job.level = level;
            job.location = first_text(card, &location_sel);
            job.posted_at = posted_at;
            jobs.push(job);
        }

        if jobs.is_empty() {
            let loose_card_sel = Selector::parse(".base-card").expect("valid selector");
            let loose_title_sel = Selector::parse("h3").expect("valid selector");
            let loose_company_sel = Selector::parse("h4").expect("valid selector");
            let loose_link_sel =
                Selector::parse(r#"a[href*="/jobs/view/"]"#).expect("valid selector");

            for card in root.select(&loose_card_sel) {
                let Some(title) = first_text(card, &loose_title_sel) else {
                    continue;
                };
                let Some(company) = first_text(card, &loose_company_sel) else {
                    continue;
                };
                let Some(link) = first_href(card, &loose_link_sel) else {
                    continue;
                };

                if !self.screener.is_target_title(&title) {
                    continue;
                }
                let level = self.screener.classify(&title, None);
                if level == JobLevel::Senior {
                    continue;
                }

                // The loose pass can surface relative hrefs; the stored URL
                // must be absolute or reconciliation against later primary-pass
                // sightings of the same listing falls apart.
                let url = clean_listing_url(&absolutize(&self.base_url, &link));
                let mut job = ScrapedJob::new(title, company, url);
                job.level = level;
                jobs.push(job);
            }
        }

        jobs
    }
}

/// Strips the tracking query string LinkedIn appends to listing links.
fn clean_listing_url(link: &str) -> String {
    link.split('?').next().unwrap_or(link).to_owned()
}

#[async_trait]
impl JobSource for LinkedInSource {
    fn source(&self) -> Source {
        Source::LinkedIn
    }

    async fn scrape(&self) -> Result<Vec<ScrapedJob>, ScrapeError> {
        let mut all_jobs = Vec::new();

        for keyword in SEARCH_KEYWORDS {
            let url = self.search_url(keyword);
            match self.fetch.fetch_html(&url).await {
                Ok(body) => {
                    let jobs = self.parse_search_page(&body);
                    tracing::debug!(keyword, count = jobs.len(), "linkedin keyword done");
                    all_jobs.extend(jobs);
                }
                Err(e) => {
                    tracing::warn!(keyword, error = %e, "linkedin search target failed; skipping");
                }
            }
            if self.delay_ms > 0 {
                tokio::time::sleep(std::time::Duration::from_millis(self.delay_ms)).await;
            }
        }

        Ok(dedupe_jobs(all_jobs))
    }
}

#[cfg(test)]
#[path = "linkedin_test.rs"]
mod tests;
