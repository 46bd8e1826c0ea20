use crate::domain::model::SalaryReport;

pub const COLUMNS: usize = 4;

/// Placeholder for a stat that could not be fetched.
pub const MISSING_CELL: &str = "-";

pub fn default_header() -> Vec<String> {
    ["keywords", "total", "total processed", "average salary"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Row-oriented view of a report, optionally led by a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsTable {
    rows: Vec<Vec<String>>,
    has_header: bool,
}

/// Header first (if any), then `[keyword, found, processed, average]` per keyword.
pub fn project(report: &SalaryReport, header: Option<&[String]>) -> StatsTable {
    let mut rows = Vec::with_capacity(report.len() + 1);

    if let Some(header) = header {
        rows.push(header.to_vec());
    }

    for entry in &report.entries {
        let mut row = Vec::with_capacity(COLUMNS);
        row.push(entry.keyword.clone());
        row.extend(entry.stats.values().iter().map(|value| match value {
            Some(v) => v.to_string(),
            None => MISSING_CELL.to_string(),
        }));
        rows.push(row);
    }

    StatsTable {
        rows,
        has_header: header.is_some(),
    }
}

impl StatsTable {
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn header(&self) -> Option<&[String]> {
        if self.has_header {
            self.rows.first().map(|row| row.as_slice())
        } else {
            None
        }
    }

    pub fn body(&self) -> &[Vec<String>] {
        if self.has_header {
            &self.rows[1..]
        } else {
            &self.rows
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        let columns = self.rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut widths = vec![0; columns];
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        widths
    }

    /// Draws the table with `+-|` borders. The title sits inside the top
    /// border and is dropped when it does not fit.
    pub fn render(&self, title: Option<&str>) -> String {
        let widths = self.column_widths();
        let rule = border(&widths);

        let top = match title {
            Some(title) if !title.is_empty() && title.chars().count() + 2 <= rule.chars().count() => {
                let tail: String = rule.chars().skip(title.chars().count() + 1).collect();
                format!("+{}{}", title, tail)
            }
            _ => rule.clone(),
        };

        let mut lines = vec![top];
        for (i, row) in self.rows.iter().enumerate() {
            lines.push(render_row(row, &widths));
            if i == 0 && self.has_header && self.rows.len() > 1 {
                lines.push(rule.clone());
            }
        }
        lines.push(rule);

        lines.join("\n")
    }
}

fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn render_row(row: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (i, width) in widths.iter().enumerate() {
        let cell = row.get(i).map(String::as_str).unwrap_or("");
        let pad = width - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(pad + 1));
        line.push('|');
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::KeywordStats;

    fn report() -> SalaryReport {
        let mut report = SalaryReport::new("hh", "hh for moscow");
        report.push(
            "Python",
            KeywordStats {
                vacancies_found: Some(1200),
                vacancies_processed: Some(300),
                average_salary: Some(180000),
            },
        );
        report.push("Go", KeywordStats::failed());
        report
    }

    #[test]
    fn test_row_count_with_and_without_header() {
        let header = default_header();
        assert_eq!(project(&report(), Some(&header)).len(), 3);
        assert_eq!(project(&report(), None).len(), 2);
    }

    #[test]
    fn test_rows_follow_report_order() {
        let header = default_header();
        let table = project(&report(), Some(&header));

        assert_eq!(table.header().unwrap(), header.as_slice());
        assert_eq!(table.body()[0], vec!["Python", "1200", "300", "180000"]);
        assert_eq!(table.body()[1], vec!["Go", "-", "-", "-"]);
    }

    #[test]
    fn test_render_layout() {
        let header: Vec<String> = ["k", "f", "p", "a"].iter().map(|s| s.to_string()).collect();
        let table = project(&report(), Some(&header));

        let expected = "\
+title---+------+-----+--------+
| k      | f    | p   | a      |
+--------+------+-----+--------+
| Python | 1200 | 300 | 180000 |
| Go     | -    | -   | -      |
+--------+------+-----+--------+";
        assert_eq!(table.render(Some("title")), expected);
    }

    #[test]
    fn test_render_drops_oversized_title() {
        let table = project(&report(), None);
        let rendered = table.render(Some(&"x".repeat(200)));
        assert!(rendered.starts_with("+--------+"));
        assert!(!rendered.contains('x'));
    }

    #[test]
    fn test_render_counts_cyrillic_as_single_width() {
        let mut report = SalaryReport::new("hh", "hh");
        report.push(
            "Программист",
            KeywordStats {
                vacancies_found: Some(0),
                vacancies_processed: Some(0),
                average_salary: Some(0),
            },
        );
        let rendered = project(&report, None).render(None);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
    }
}
