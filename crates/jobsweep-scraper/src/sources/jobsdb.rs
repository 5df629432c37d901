//! JobsDB Thailand listing pages.
//!
//! Scrapes the fixed per-role listing URLs rather than the search endpoint;
//! they render server-side and paginate the freshest postings first.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use scraper::{Html, Selector};

use jobsweep_core::{dedupe_jobs, JobLevel, ScrapedJob, Screener, Source};

use crate::dates::parse_relative_en;
use crate::error::ScrapeError;
use crate::fetch::FetchClient;
use crate::source::JobSource;
use crate::sources::{absolutize, company_near_anchor, first_href, first_text};

pub const DEFAULT_BASE_URL: &str = "https://th.jobsdb.com";

const SEARCH_PATHS: &[&str] = &[
    "developer-jobs",
    "software-engineer-jobs",
    "data-engineer-jobs",
    "devops-engineer-jobs",
    "cloud-engineer-jobs",
];

pub struct JobsDbSource {
    fetch: FetchClient,
    screener: Screener,
    delay_ms: u64,
    base_url: String,
}

impl JobsDbSource {
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

    /// Extracts screened candidates from one listing page.
    ///
    /// Primary pass reads the `data-testid` card markup; when it matches
    /// nothing, a looser pass walks bare `/job/` anchors and guesses the
    /// company from the surrounding container.
    fn parse_listing_page(&self, html: &str, now: DateTime<Utc>) -> Vec<ScrapedJob> {
        let document = Html::parse_document(html);
        let root = document.root_element();

        let card_sel = Selector::parse(r#"article[data-testid="job-card"]"#).expect("valid selector");
        let title_sel = Selector::parse("h3 a").expect("valid selector");
        let company_sel = Selector::parse(r#"[data-testid="company-name"]"#).expect("valid selector");
        let location_sel = Selector::parse(r#"[data-testid="job-location"]"#).expect("valid selector");
        let date_sel = Selector::parse(r#"[data-testid="job-listing-date"]"#).expect("valid selector");

        let mut jobs = Vec::new();
        for card in root.select(&card_sel) {
            let Some(title) = first_text(card, &title_sel) else {
                continue;
            };
            let Some(company) = first_text(card, &company_sel) else {
                continue;
            };
            let Some(link) = first_href(card, &title_sel) else {
                continue;
            };

            if !self.screener.is_target_title(&title) {
                continue;
            }
            let level = self.screener.classify(&title, None);
            if level == JobLevel::Senior {
                continue;
            }

            let posted_at = first_text(card, &date_sel)
                .and_then(|text| parse_relative_en(&text, now));

            let mut job = ScrapedJob::new(title, company, absolutize(&self.base_url, &link));
            job.level = level;
            job.location = first_text(card, &location_sel);
            job.posted_at = posted_at;
            jobs.push(job);
        }

        if jobs.is_empty() {
            let anchor_sel = Selector::parse(r#"a[href*="/job/"]"#).expect("valid selector");
            for anchor in root.select(&anchor_sel) {
                let title = anchor.text().collect::<String>().trim().to_owned();
                let Some(link) = anchor.value().attr("href") else {
                    continue;
                };
                if title.is_empty() {
                    continue;
                }
                let Some(company) = company_near_anchor(anchor, &title) else {
                    continue;
                };

                if !self.screener.is_target_title(&title) {
                    continue;
                }
                let level = self.screener.classify(&title, None);
                if level == JobLevel::Senior {
                    continue;
                }

                let mut job = ScrapedJob::new(title, company, absolutize(&self.base_url, link));
                job.level = level;
                jobs.push(job);
            }
        }

        jobs
    }
}

#[async_trait]
impl JobSource for JobsDbSource {
    fn source(&self) -> Source {
        Source::JobsDb
    }

    async fn scrape(&self) -> Result<Vec<ScrapedJob>, ScrapeError> {
        let mut all_jobs = Vec::new();

        for search_path in SEARCH_PATHS {
            let url = format!("{}/{search_path}", self.base_url);
            match self.fetch.fetch_html(&url).await {
                Ok(body) => {
                    let jobs = self.parse_listing_page(&body, Utc::now());
                    tracing::debug!(target_url = %url, count = jobs.len(), "jobsdb listing done");
                    all_jobs.extend(jobs);
                }
                Err(e) => {
                    tracing::warn!(target_url = %url, error = %e, "jobsdb listing failed; skipping");
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
#[path = "jobsdb_test.rs"]
mod tests;
