use crate::app::sources::{build_client, ensure_success};
use crate::config::settings::QueryParams;
use crate::core::salary::predict_rub_salary;
use crate::domain::model::{HhSearchPage, VacancyPage};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// hh.ru vacancy search. Pages are 0-based and the response carries `pages`.
pub struct HeadHunterSource {
    client: Client,
    endpoint: String,
    params: QueryParams,
}

impl HeadHunterSource {
    pub fn new(endpoint: impl Into<String>, params: QueryParams) -> Result<Self> {
        Ok(Self::with_client(build_client()?, endpoint, params))
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>, params: QueryParams) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            params,
        }
    }
}

#[async_trait]
impl VacancySource for HeadHunterSource {
    fn name(&self) -> &str {
        "hh"
    }

    async fn fetch_page(&self, keyword: &str, page: u64) -> Result<VacancyPage> {
        let mut query = vec![
            ("text".to_string(), keyword.to_string()),
            ("page".to_string(), page.to_string()),
        ];
        query.extend(self.params.pairs().iter().cloned());

        let response = self
            .client
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await?;
        let response = ensure_success(self.name(), response)?;
        let body: HhSearchPage = response.json().await?;

        Ok(VacancyPage {
            found: body.found,
            estimates: body.items.iter().map(predict_rub_salary).collect(),
            has_more: page + 1 < body.pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pipeline::collect_keyword_stats;
    use crate::domain::model::KeywordStats;
    use crate::utils::error::SalaryError;
    use httpmock::prelude::*;

    fn params() -> QueryParams {
        QueryParams::from_json("--hh-params", r#"{"area": "1", "per_page": 2}"#).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_page_estimates_rub_salaries_only() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/vacancies")
                .query_param("text", "Python")
                .query_param("page", "0")
                .query_param("area", "1")
                .query_param("per_page", "2")
                .header_exists("user-agent");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "found": 3,
                    "pages": 2,
                    "page": 0,
                    "items": [
                        {"id": "1", "salary": {"from": 100000, "to": 200000, "currency": "RUR"}},
                        {"id": "2", "salary": {"from": 3000, "to": null, "currency": "USD"}}
                    ]
                }));
        });

        let source = HeadHunterSource::new(server.url("/vacancies"), params()).unwrap();
        let page = source.fetch_page("Python", 0).await.unwrap();

        api_mock.assert();
        assert_eq!(page.found, 3);
        assert_eq!(page.estimates, vec![Some(150000), None]);
        assert!(page.has_more);
    }

    #[tokio::test]
    async fn test_last_page_has_no_more() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/vacancies").query_param("page", "1");
            then.status(200).json_body(serde_json::json!({
                "found": 3,
                "pages": 2,
                "page": 1,
                "items": [{"id": "3", "salary": null}]
            }));
        });

        let source = HeadHunterSource::new(server.url("/vacancies"), params()).unwrap();
        let page = source.fetch_page("Python", 1).await.unwrap();

        assert_eq!(page.estimates, vec![None]);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/vacancies");
            then.status(400).body("bad request");
        });

        let source = HeadHunterSource::new(server.url("/vacancies"), params()).unwrap();
        let err = source.fetch_page("Python", 0).await.unwrap_err();

        api_mock.assert();
        assert!(matches!(
            err,
            SalaryError::UpstreamStatusError { status: 400, .. }
        ));
    }

    #[tokio::test]
    async fn test_undecodable_body_fails_keyword() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/vacancies");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("not json");
        });

        let source = HeadHunterSource::new(server.url("/vacancies"), params()).unwrap();
        let err = source.fetch_page("Python", 0).await.unwrap_err();
        assert!(matches!(err, SalaryError::ApiError(_)));

        let stats = collect_keyword_stats(&source, "Python").await;
        assert_eq!(stats, KeywordStats::failed());
        api_mock.assert_hits(2);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_fails_keyword() {
        // Bind and release a port so nothing listens on it.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let endpoint = format!("http://127.0.0.1:{}/vacancies", port);

        let source = HeadHunterSource::new(endpoint, params()).unwrap();
        let stats = collect_keyword_stats(&source, "Python").await;

        assert_eq!(stats, KeywordStats::failed());
    }

    #[tokio::test]
    async fn test_estimate_flooring_to_zero_is_not_processed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/vacancies");
            then.status(200).json_body(serde_json::json!({
                "found": 1,
                "pages": 1,
                "items": [{"id": "1", "salary": {"from": null, "to": 1, "currency": "RUR"}}]
            }));
        });

        let source = HeadHunterSource::new(server.url("/vacancies"), params()).unwrap();
        let stats = collect_keyword_stats(&source, "Python").await;

        assert_eq!(stats.vacancies_found, Some(1));
        assert_eq!(stats.vacancies_processed, Some(0));
        assert_eq!(stats.average_salary, Some(0));
    }
}
