use super::*;
use chrono::{Duration, TimeZone};
use jobsweep_core::TieBreak;

fn adapter() -> JobsDbSource {
    let fetch = FetchClient::new(5, "test-agent/1.0").unwrap();
    JobsDbSource::new(fetch, Screener::new(TieBreak::Fixed(JobLevel::Entry)), 0)
}

fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
}

const PRIMARY_PAGE: &str = r#"
<main>
  <article data-testid="job-card">
    <h3><a href="/job/junior-developer-1001">Junior Developer</a></h3>
    <span data-testid="company-name">Acme Co</span>
    <span data-testid="job-location">Bangkok</span>
    <span data-testid="job-listing-date">3 days ago</span>
  </article>
  <article data-testid="job-card">
    <h3><a href="/job/lead-engineer-1002">Lead Engineer</a></h3>
    <span data-testid="company-name">Globex</span>
  </article>
  <article data-testid="job-card">
    <h3><a href="/job/nurse-1003">Registered Nurse</a></h3>
    <span data-testid="company-name">City Hospital</span>
  </article>
</main>
"#;

#[test]
fn primary_pass_extracts_and_screens_cards() {
    let jobs = adapter().parse_listing_page(PRIMARY_PAGE, reference());

    // Lead (senior signal) and non-target title are dropped.
    assert_eq!(jobs.len(), 1);
    let job = &jobs[0];
    assert_eq!(job.title, "Junior Developer");
    assert_eq!(job.company, "Acme Co");
    assert_eq!(job.location.as_deref(), Some("Bangkok"));
    assert_eq!(job.level, JobLevel::Entry);
}

#[test]
fn primary_pass_absolutizes_relative_links() {
    let jobs = adapter().parse_listing_page(PRIMARY_PAGE, reference());
    assert_eq!(
        jobs[0].source_url,
        "https://th.jobsdb.com/job/junior-developer-1001"
    );
}

#[test]
fn primary_pass_parses_relative_posted_date() {
    let jobs = adapter().parse_listing_page(PRIMARY_PAGE, reference());
    assert_eq!(jobs[0].posted_at, Some(reference() - Duration::days(3)));
}

#[test]
fn fallback_pass_guesses_company_from_container() {
    let html = r#"
      <li>
        <a href="/job/junior-backend-42">Junior Backend Developer</a>
        <span>Initech</span>
      </li>
    "#;
    let jobs = adapter().parse_listing_page(html, reference());
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "Junior Backend Developer");
    assert_eq!(jobs[0].company, "Initech");
    assert_eq!(
        jobs[0].source_url,
        "https://th.jobsdb.com/job/junior-backend-42"
    );
}

#[test]
fn fallback_anchor_without_company_text_is_skipped() {
    let html = r#"<div><a href="/job/junior-dev-7">Junior Developer</a></div>"#;
    let jobs = adapter().parse_listing_page(html, reference());
    assert!(jobs.is_empty());
}

#[tokio::test]
async fn scrape_continues_past_server_errors() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/developer-jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PRIMARY_PAGE))
        .mount(&server)
        .await;
    // Every other listing path 500s; the adapter must still return the
    // candidates from the one good page.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let jobs = adapter()
        .with_base_url(server.uri())
        .scrape()
        .await
        .unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "Junior Developer");
}

#[tokio::test]
async fn scrape_returns_empty_when_every_target_fails() {
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let jobs = adapter()
        .with_base_url(server.uri())
        .scrape()
        .await
        .unwrap();
    assert!(jobs.is_empty());
}
