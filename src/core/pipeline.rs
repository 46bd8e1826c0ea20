use crate::core::salary::SalaryAccumulator;
use crate::domain::model::{KeywordStats, SalaryReport};
use crate::domain::ports::VacancySource;
use std::collections::HashSet;

/// Pages through `source` for one keyword and folds every listing into stats.
///
/// The first failing page turns the whole keyword into [`KeywordStats::failed`];
/// already accumulated pages are discarded.
pub async fn collect_keyword_stats<S>(source: &S, keyword: &str) -> KeywordStats
where
    S: VacancySource + ?Sized,
{
    let mut accumulator = SalaryAccumulator::new();
    let mut found: Option<u64> = None;
    let mut page = 0;

    loop {
        tracing::debug!("{}: requesting page {} for '{}'", source.name(), page, keyword);

        let vacancy_page = match source.fetch_page(keyword, page).await {
            Ok(vacancy_page) => vacancy_page,
            Err(e) => {
                tracing::warn!(
                    "⚠️ {}: '{}' failed on page {}: {}",
                    source.name(),
                    keyword,
                    page,
                    e
                );
                return KeywordStats::failed();
            }
        };

        if found.is_none() {
            found = Some(vacancy_page.found);
        }

        for estimate in &vacancy_page.estimates {
            accumulator.add(*estimate);
        }

        tracing::debug!(
            "{}: page {} for '{}' had {} listings, more={}",
            source.name(),
            page,
            keyword,
            vacancy_page.estimates.len(),
            vacancy_page.has_more
        );

        if !vacancy_page.has_more {
            break;
        }
        page += 1;
    }

    KeywordStats {
        vacancies_found: Some(found.unwrap_or(0)),
        vacancies_processed: Some(accumulator.processed()),
        average_salary: Some(accumulator.average()),
    }
}

/// Runs [`collect_keyword_stats`] for every keyword, one after another.
///
/// Repeated keywords are queried once, at the position of their first occurrence.
pub async fn collect_report<S>(source: &S, title: &str, keywords: &[String]) -> SalaryReport
where
    S: VacancySource + ?Sized,
{
    let mut report = SalaryReport::new(source.name(), title);
    let mut seen = HashSet::new();

    for keyword in keywords {
        if !seen.insert(keyword.as_str()) {
            tracing::debug!("{}: skipping repeated keyword '{}'", source.name(), keyword);
            continue;
        }

        let stats = collect_keyword_stats(source, keyword).await;
        if stats.is_failed() {
            tracing::info!("{}: '{}' -> no data", source.name(), keyword);
        } else {
            tracing::info!(
                "{}: '{}' -> found {}, processed {}, average {}",
                source.name(),
                keyword,
                stats.vacancies_found.unwrap_or(0),
                stats.vacancies_processed.unwrap_or(0),
                stats.average_salary.unwrap_or(0)
            );
        }
        report.push(keyword.clone(), stats);
    }

    report
}
