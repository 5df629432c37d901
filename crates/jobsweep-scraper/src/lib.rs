pub mod dates;
pub mod error;
pub mod fetch;
pub mod source;
pub mod sources;

pub use error::ScrapeError;
pub use fetch::FetchClient;
pub use source::JobSource;
pub use sources::{JobThaiSource, JobsDbSource, LinkedInSource};
