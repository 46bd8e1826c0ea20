use crate::domain::model::VacancyPage;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Destination for exported report files.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// A paginated vacancy search API.
#[async_trait]
pub trait VacancySource: Send + Sync {
    /// Short identifier used in logs and export file names.
    fn name(&self) -> &str;

    /// Fetches page `page` (0-based) for `keyword`. A non-success status is an error.
    async fn fetch_page(&self, keyword: &str, page: u64) -> Result<VacancyPage>;
}
