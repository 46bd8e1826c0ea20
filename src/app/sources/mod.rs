pub mod headhunter;
pub mod superjob;

pub use headhunter::HeadHunterSource;
pub use superjob::SuperJobSource;

use crate::utils::error::{Result, SalaryError};
use reqwest::{Client, Response};

/// hh.ru refuses requests that carry no User-Agent.
pub const USER_AGENT: &str = concat!("salary-stats/", env!("CARGO_PKG_VERSION"));

pub fn build_client() -> Result<Client> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}

/// Turns a non-success status into an error without reading the body.
pub(crate) fn ensure_success(source_name: &str, response: Response) -> Result<Response> {
    let status = response.status();
    tracing::debug!("{} response status: {}", source_name, status);

    if status.is_success() {
        Ok(response)
    } else {
        Err(SalaryError::UpstreamStatusError {
            source_name: source_name.to_string(),
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}
