use crate::core::pipeline::collect_report;
use crate::core::table::{project, StatsTable};
use crate::domain::model::SalaryReport;
use crate::domain::ports::VacancySource;

struct SourceJob {
    source: Box<dyn VacancySource>,
    title: String,
    header: Option<Vec<String>>,
}

/// Result of running one source over all keywords.
#[derive(Debug, Clone)]
pub struct SourceRun {
    pub report: SalaryReport,
    pub header: Option<Vec<String>>,
    pub table: StatsTable,
}

impl SourceRun {
    pub fn render(&self) -> String {
        self.table.render(Some(&self.report.title))
    }
}

/// Runs every registered source over the same keywords, strictly one after another.
pub struct SalaryEngine {
    keywords: Vec<String>,
    jobs: Vec<SourceJob>,
}

impl SalaryEngine {
    pub fn new(keywords: Vec<String>) -> Self {
        Self {
            keywords,
            jobs: Vec::new(),
        }
    }

    pub fn with_source<S>(
        mut self,
        source: S,
        title: impl Into<String>,
        header: Option<Vec<String>>,
    ) -> Self
    where
        S: VacancySource + 'static,
    {
        self.jobs.push(SourceJob {
            source: Box::new(source),
            title: title.into(),
            header,
        });
        self
    }

    pub async fn run(&self) -> Vec<SourceRun> {
        tracing::info!(
            "🚀 Collecting salaries for {} keywords from {} sources",
            self.keywords.len(),
            self.jobs.len()
        );

        let mut runs = Vec::with_capacity(self.jobs.len());
        for job in &self.jobs {
            tracing::info!("📥 Querying {}", job.source.name());
            let report = collect_report(job.source.as_ref(), &job.title, &self.keywords).await;

            let failed = report.entries.iter().filter(|e| e.stats.is_failed()).count();
            if failed > 0 {
                tracing::warn!(
                    "⚠️ {}: {} of {} keywords could not be fetched",
                    job.source.name(),
                    failed,
                    report.len()
                );
            }

            let table = project(&report, job.header.as_deref());
            runs.push(SourceRun {
                report,
                header: job.header.clone(),
                table,
            });
        }

        runs
    }
}
