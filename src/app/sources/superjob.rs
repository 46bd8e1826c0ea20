use crate::app::sources::{build_client, ensure_success};
use crate::config::settings::QueryParams;
use crate::core::salary::predict_rub_salary_for_superjob;
use crate::domain::model::{SuperJobSearchPage, VacancyPage};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

pub const APP_ID_HEADER: &str = "X-Api-App-Id";

/// SuperJob vacancy search, authenticated with an app secret key.
pub struct SuperJobSource {
    client: Client,
    endpoint: String,
    token: String,
    params: QueryParams,
}

impl SuperJobSource {
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        params: QueryParams,
    ) -> Result<Self> {
        Ok(Self::with_client(build_client()?, endpoint, token, params))
    }

    pub fn with_client(
        client: Client,
        endpoint: impl Into<String>,
        token: impl Into<String>,
        params: QueryParams,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
            params,
        }
    }
}

#[async_trait]
impl VacancySource for SuperJobSource {
    fn name(&self) -> &str {
        "superjob"
    }

    async fn fetch_page(&self, keyword: &str, page: u64) -> Result<VacancyPage> {
        let mut query = vec![
            ("keyword".to_string(), keyword.to_string()),
            ("page".to_string(), page.to_string()),
        ];
        query.extend(self.params.pairs().iter().cloned());

        let response = self
            .client
            .get(&self.endpoint)
            .header(APP_ID_HEADER, &self.token)
            .query(&query)
            .send()
            .await?;
        let response = ensure_success(self.name(), response)?;
        let body: SuperJobSearchPage = response.json().await?;

        let estimates: Vec<Option<u64>> = body
            .objects
            .iter()
            .map(|vacancy| vacancy.as_ref().and_then(predict_rub_salary_for_superjob))
            .collect();

        // `more` alone is not trusted: an empty page or a zero total ends the search.
        let has_more = body.more && body.total > 0 && !estimates.is_empty();

        Ok(VacancyPage {
            found: body.total,
            estimates,
            has_more,
        })
    }
}
