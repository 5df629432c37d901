use super::*;
use jobsweep_core::TieBreak;

fn adapter() -> LinkedInSource {
    let fetch = FetchClient::new(5, "test-agent/1.0").unwrap();
    LinkedInSource::new(fetch, Screener::new(TieBreak::Fixed(JobLevel::Junior)), 0)
}

const PRIMARY_PAGE: &str = r#"
<ul>
  <li>
    <div class="base-card job-search-card">
      <a class="base-card__full-link" href="https://www.linkedin.com/jobs/view/junior-dev-123?refId=abc&trk=guest"></a>
      <h3 class="base-search-card__title"> Junior Developer </h3>
      <h4 class="base-search-card__subtitle"> Acme Co </h4>
      <span class="job-search-card__location">Bangkok, Thailand</span>
      <time class="job-search-card__listdate" datetime="2026-03-10">3 days ago</time>
    </div>
  </li>
  <li>
    <div class="base-card job-search-card">
      <a class="base-card__full-link" href="https://www.linkedin.com/jobs/view/senior-dev-456"></a>
      <h3 class="base-search-card__title">Senior Developer</h3>
      <h4 class="base-search-card__subtitle">Globex</h4>
    </div>
  </li>
  <li>
    <div class="base-card job-search-card">
      <a class="base-card__full-link" href="https://www.linkedin.com/jobs/view/barista-789"></a>
      <h3 class="base-search-card__title">Barista</h3>
      <h4 class="base-search-card__subtitle">Coffee House</h4>
    </div>
  </li>
</ul>
"#;

#[test]
fn primary_pass_extracts_and_screens_cards() {
    let jobs = adapter().parse_search_page(PRIMARY_PAGE);

    // Senior posting and non-target title are both dropped.
    assert_eq!(jobs.len(), 1);
    let job = &jobs[0];
    assert_eq!(job.title, "Junior Developer");
    assert_eq!(job.company, "Acme Co");
    assert_eq!(job.location.as_deref(), Some("Bangkok, Thailand"));
    assert_eq!(job.level, JobLevel::Junior);
}

#[test]
fn primary_pass_strips_tracking_query_from_url() {
    let jobs = adapter().parse_search_page(PRIMARY_PAGE);
    assert_eq!(
        jobs[0].source_url,
        "https://www.linkedin.com/jobs/view/junior-dev-123"
    );
}

#[test]
fn primary_pass_parses_datetime_attribute() {
    let jobs = adapter().parse_search_page(PRIMARY_PAGE);
    let posted = jobs[0].posted_at.expect("posted_at should parse");
    assert_eq!(posted.to_rfc3339(), "2026-03-10T00:00:00+00:00");
}

#[test]
fn card_without_company_is_skipped() {
    let html = r#"
      <div class="job-search-card">
        <a class="base-card__full-link" href="https://www.linkedin.com/jobs/view/1"></a>
        <h3 class="base-search-card__title">Junior Developer</h3>
      </div>
    "#;
    assert!(adapter().parse_search_page(html).is_empty());
}

#[test]
fn fallback_pass_runs_when_primary_matches_nothing() {
    let html = r#"
      <div class="base-card">
        <a href="/jobs/view/junior-backend-42">see job</a>
        <h3>Junior Backend Developer</h3>
        <h4>Initech</h4>
      </div>
    "#;
    let jobs = adapter().parse_search_page(html);
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "Junior Backend Developer");
    assert_eq!(jobs[0].company, "Initech");
    assert_eq!(
        jobs[0].source_url,
        "https://www.linkedin.com/jobs/view/junior-backend-42"
    );
}

#[test]
fn fallback_pass_absolutizes_relative_links_against_base_url() {
    let html = r#"
      <div class="base-card">
        <a href="/jobs/view/junior-backend-42?trk=guest">see job</a>
        <h3>Junior Backend Developer</h3>
        <h4>Initech</h4>
      </div>
    "#;
    let jobs = adapter()
        .with_base_url("https://example.test")
        .parse_search_page(html);
    assert_eq!(
        jobs[0].source_url,
        "https://example.test/jobs/view/junior-backend-42"
    );
}

#[test]
fn search_url_encodes_keyword() {
    let url = adapter().search_url("software engineer");
    assert_eq!(
        url,
        "https://www.linkedin.com/jobs-guest/jobs/api/seeMoreJobPostings/search?keywords=software%20engineer&location=Thailand&start=0"
    );
}

#[tokio::test]
async fn scrape_skips_failing_targets_and_dedupes() {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let server = MockServer::start().await;
    // One keyword gets throttled; the adapter must log and move on.
    Mock::given(method("GET"))
        .and(path("/jobs-guest/jobs/api/seeMoreJobPostings/search"))
        .and(query_param("keywords", "devops engineer"))
        .respond_with(ResponseTemplate::new(429))
        .with_priority(1)
        .mount(&server)
        .await;
    // The rest serve the primary fixture, so the one junior card recurs and
    // collapses to a single candidate.
    Mock::given(method("GET"))
        .and(path("/jobs-guest/jobs/api/seeMoreJobPostings/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PRIMARY_PAGE))
        .with_priority(5)
        .mount(&server)
        .await;

    let jobs = adapter()
        .with_base_url(server.uri())
        .scrape()
        .await
        .unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].company, "Acme Co");
}
