//! Intra-run deduplication of scraped candidates.

use std::collections::HashSet;

use crate::jobs::ScrapedJob;

/// Collapses candidates sharing the same `(title, company)` fingerprint,
/// keeping the first occurrence in encounter order.
///
/// The fingerprint is deliberately NOT `source_url`: two listings with the
/// same title and company collapse to one even if their URLs differ, and a
/// recurring URL with a changed title survives to the persistence layer,
/// where the URL uniqueness constraint has the final say.
#[must_use]
pub fn dedupe_jobs(jobs: Vec<ScrapedJob>) -> Vec<ScrapedJob> {
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(jobs.len());
    jobs.into_iter()
        .filter(|job| seen.insert((job.title.clone(), job.company.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::JobLevel;

    #[test]
    fn keeps_first_occurrence_of_duplicate_fingerprint() {
        let mut a = ScrapedJob::new("Junior Developer", "Acme", "https://x/1");
        a.location = Some("Bangkok".to_owned());
        let mut b = ScrapedJob::new("Junior Developer", "Acme", "https://x/2");
        b.location = Some("Chiang Mai".to_owned());

        let out = dedupe_jobs(vec![a.clone(), b]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0], a);
    }

    #[test]
    fn distinct_fingerprints_all_survive_in_order() {
        let jobs = vec![
            ScrapedJob::new("Junior Developer", "Acme", "https://x/1"),
            ScrapedJob::new("Junior Developer", "Globex", "https://x/2"),
            ScrapedJob::new("Backend Developer", "Acme", "https://x/3"),
        ];
        let out = dedupe_jobs(jobs.clone());
        assert_eq!(out, jobs);
    }

    #[test]
    fn dedupe_is_idempotent() {
        let jobs = vec![
            ScrapedJob::new("Junior Developer", "Acme", "https://x/1"),
            ScrapedJob::new("Junior Developer", "Acme", "https://x/2"),
            ScrapedJob::new("DevOps Engineer", "Globex", "https://x/3"),
        ];
        let once = dedupe_jobs(jobs);
        let twice = dedupe_jobs(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn same_url_different_title_is_not_collapsed() {
        let mut a = ScrapedJob::new("Junior Developer", "Acme", "https://x/1");
        a.level = JobLevel::Junior;
        let b = ScrapedJob::new("Backend Developer", "Acme", "https://x/1");

        let out = dedupe_jobs(vec![a, b]);
        assert_eq!(out.len(), 2);
    }
}
