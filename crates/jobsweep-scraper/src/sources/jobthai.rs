//! JobThai keyword search.
//!
//! Thai-first markup: class names vary between renders, so the primary
//! selectors are attribute-substring matches rather than exact classes, and
//! posted dates arrive as Thai relative phrases.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use scraper::{Html, Selector};

use jobsweep_core::{dedupe_jobs, JobLevel, ScrapedJob, Screener, Source};

use crate::dates::parse_relative_th;
use crate::error::ScrapeError;
use crate::fetch::FetchClient;
use crate::source::JobSource;
use crate::sources::{absolutize, company_near_anchor, first_href, first_text};

pub const DEFAULT_BASE_URL: &str = "https://www.jobthai.com";

const ACCEPT_LANGUAGE: &str = "th,en-US;q=0.7,en;q=0.3";

const SEARCH_KEYWORDS: &[&str] = &[
    "developer",
    "programmer",
    "software engineer",
    "data engineer",
    "devops",
    "cloud",
];

pub struct JobThaiSource {
    fetch: FetchClient,
    screener: Screener,
    delay_ms: u64,
    base_url: String,
}

impl JobThaiSource {
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
        format!("{}/th/job-search/{encoded}", self.base_url)
    }

    /// Extracts screened candidates from one search response.
    fn parse_search_page(&self, html: &str, now: DateTime<Utc>) -> Vec<ScrapedJob> {
        let document = Html::parse_document(html);
        let root = document.root_element();

        let card_sel = Selector::parse(r#".job-card, [class*="JobCard"], .jlt-result"#)
            .expect("valid selector");
        let title_sel = Selector::parse(r#"a[href*="/job/"]"#).expect("valid selector");
        let company_sel = Selector::parse(r#".company-name, [class*="company"], .employer-name"#)
            .expect("valid selector");
        let location_sel = Selector::parse(r#".location, [class*="location"], .job-location"#)
            .expect("valid selector");
        let salary_sel = Selector::parse(r#".salary, [class*="salary"], .job-salary"#)
            .expect("valid selector");
        let date_sel = Selector::parse(r#".posted-date, [class*="posted"], .job-date"#)
            .expect("valid selector");

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
                .and_then(|text| parse_relative_th(&text, now));

            let mut job = ScrapedJob::new(title, company, absolutize(&self.base_url, &link));
            job.level = level;
            job.location = first_text(card, &location_sel);
            job.salary = first_text(card, &salary_sel);
            job.posted_at = posted_at;
            jobs.push(job);
        }

        if jobs.is_empty() {
            for anchor in root.select(&title_sel) {
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
impl JobSource for JobThaiSource {
    fn source(&self) -> Source {
        Source::JobThai
    }

    async fn scrape(&self) -> Result<Vec<ScrapedJob>, ScrapeError> {
        let mut all_jobs = Vec::new();

        for keyword in SEARCH_KEYWORDS {
            let url = self.search_url(keyword);
            match self.fetch.fetch_html_localized(&url, ACCEPT_LANGUAGE).await {
                Ok(body) => {
                    let jobs = self.parse_search_page(&body, Utc::now());
                    tracing::debug!(keyword, count = jobs.len(), "jobthai keyword done");
                    all_jobs.extend(jobs);
                }
                Err(e) => {
                    tracing::warn!(keyword, error = %e, "jobthai search target failed; skipping");
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
#[path = "jobthai_test.rs"]
mod tests;
