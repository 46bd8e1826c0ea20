use serde::{Deserialize, Serialize};

/// Salary block of a HeadHunter vacancy. `from`/`to` may be null independently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HhSalary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
    #[serde(default)]
    pub gross: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HhVacancy {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub salary: Option<HhSalary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HhSearchPage {
    pub found: u64,
    pub pages: u64,
    #[serde(default)]
    pub items: Vec<HhVacancy>,
}

/// SuperJob reports a missing bound as `0` rather than null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuperJobVacancy {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub payment_from: Option<f64>,
    #[serde(default)]
    pub payment_to: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuperJobSearchPage {
    pub total: u64,
    #[serde(default)]
    pub more: bool,
    #[serde(default)]
    pub objects: Vec<Option<SuperJobVacancy>>,
}

/// One page of a vacancy search, normalized across sources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VacancyPage {
    /// Total number of vacancies the source reports for the keyword.
    pub found: u64,
    /// One entry per listing on this page.
    pub estimates: Vec<Option<u64>>,
    pub has_more: bool,
}

/// Per-keyword summary. All fields `None` means the upstream fetch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordStats {
    pub vacancies_found: Option<u64>,
    pub vacancies_processed: Option<u64>,
    pub average_salary: Option<u64>,
}

impl KeywordStats {
    pub fn failed() -> Self {
        Self {
            vacancies_found: None,
            vacancies_processed: None,
            average_salary: None,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.vacancies_found.is_none()
            && self.vacancies_processed.is_none()
            && self.average_salary.is_none()
    }

    /// Values in fixed column order: found, processed, average.
    pub fn values(&self) -> [Option<u64>; 3] {
        [
            self.vacancies_found,
            self.vacancies_processed,
            self.average_salary,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    #[serde(flatten)]
    pub stats: KeywordStats,
}

/// Ordered keyword → stats mapping for one source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryReport {
    pub source: String,
    pub title: String,
    pub entries: Vec<KeywordEntry>,
}

impl SalaryReport {
    pub fn new(source: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, keyword: impl Into<String>, stats: KeywordStats) {
        self.entries.push(KeywordEntry {
            keyword: keyword.into(),
            stats,
        });
    }

    pub fn get(&self, keyword: &str) -> Option<&KeywordStats> {
        self.entries
            .iter()
            .find(|entry| entry.keyword == keyword)
            .map(|entry| &entry.stats)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hh_page_deserializes_null_salary() {
        let page: HhSearchPage = serde_json::from_value(serde_json::json!({
            "found": 2,
            "pages": 1,
            "page": 0,
            "items": [
                {"id": "1", "name": "Rust developer", "salary": null},
                {"id": "2", "name": "Go developer",
                 "salary": {"from": 100000, "to": null, "currency": "RUR", "gross": true}}
            ]
        }))
        .unwrap();

        assert_eq!(page.items.len(), 2);
        assert!(page.items[0].salary.is_none());
        let salary = page.items[1].salary.as_ref().unwrap();
        assert_eq!(salary.from, Some(100000.0));
        assert_eq!(salary.to, None);
    }

    #[test]
    fn test_superjob_page_tolerates_null_objects() {
        let page: SuperJobSearchPage = serde_json::from_value(serde_json::json!({
            "total": 1,
            "more": false,
            "objects": [null, {"payment_from": 0, "payment_to": 90000, "currency": "rub"}]
        }))
        .unwrap();

        assert_eq!(page.objects.len(), 2);
        assert!(page.objects[0].is_none());
        assert_eq!(page.objects[1].as_ref().unwrap().payment_to, Some(90000.0));
    }

    #[test]
    fn test_failed_stats() {
        assert!(KeywordStats::failed().is_failed());
        let ok = KeywordStats {
            vacancies_found: Some(0),
            vacancies_processed: Some(0),
            average_salary: Some(0),
        };
        assert!(!ok.is_failed());
    }

    #[test]
    fn test_report_keeps_insertion_order() {
        let mut report = SalaryReport::new("hh", "hh for moscow");
        report.push(
            "Программист Python",
            KeywordStats {
                vacancies_found: Some(0),
                vacancies_processed: Some(0),
                average_salary: Some(0),
            },
        );
        report.push("Программист Go", KeywordStats::failed());

        let keywords: Vec<&str> = report.entries.iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["Программист Python", "Программист Go"]);
        assert!(report.get("Программист Go").unwrap().is_failed());
    }
}
