pub mod engine;
pub mod pipeline;
pub mod salary;
pub mod table;

pub use crate::domain::model::{KeywordStats, SalaryReport, VacancyPage};
pub use crate::domain::ports::{Storage, VacancySource};
pub use crate::utils::error::Result;
