//! Midpoint-with-skew salary estimation.
//!
//! A vacancy usually publishes a range. When only one bound is known the
//! estimate is skewed: a lower bound alone is bumped up by 20%, an upper
//! bound alone is cut by 20%.

use crate::domain::model::{HhVacancy, SuperJobVacancy};

/// Currency code HeadHunter uses for rubles.
pub const LOCAL_CURRENCY: &str = "RUR";

const LOWER_BOUND_FACTOR: f64 = 1.2;
const UPPER_BOUND_FACTOR: f64 = 0.8;

// Zero and non-finite bounds carry no information.
fn known(bound: Option<f64>) -> Option<f64> {
    bound.filter(|v| v.is_finite() && *v != 0.0)
}

// An estimate that floors to zero is no estimate.
fn floor_to_u64(value: f64) -> Option<u64> {
    if value.is_sign_negative() {
        return None;
    }
    Some(value.floor() as u64).filter(|v| *v > 0)
}

pub fn predict_salary(payment_from: Option<f64>, payment_to: Option<f64>) -> Option<u64> {
    match (known(payment_from), known(payment_to)) {
        (Some(from), Some(to)) => floor_to_u64((from + to) / 2.0),
        (Some(from), None) => floor_to_u64(from * LOWER_BOUND_FACTOR),
        (None, Some(to)) => floor_to_u64(to * UPPER_BOUND_FACTOR),
        (None, None) => None,
    }
}

/// Estimate for a HeadHunter vacancy; `None` unless the salary is in rubles.
pub fn predict_rub_salary(vacancy: &HhVacancy) -> Option<u64> {
    let salary = vacancy.salary.as_ref()?;
    if salary.currency.as_deref() != Some(LOCAL_CURRENCY) {
        return None;
    }
    predict_salary(salary.from, salary.to)
}

/// SuperJob listings are taken as rubles without checking `currency`.
pub fn predict_rub_salary_for_superjob(vacancy: &SuperJobVacancy) -> Option<u64> {
    predict_salary(vacancy.payment_from, vacancy.payment_to)
}

/// Running sum of non-null, non-zero estimates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SalaryAccumulator {
    sum: u64,
    count: u64,
}

impl SalaryAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, estimate: Option<u64>) {
        if let Some(value) = estimate.filter(|v| *v > 0) {
            self.sum = self.sum.saturating_add(value);
            self.count += 1;
        }
    }

    pub fn processed(&self) -> u64 {
        self.count
    }

    /// Floor average, 0 when nothing was processed.
    pub fn average(&self) -> u64 {
        if self.count == 0 {
            0
        } else {
            self.sum / self.count
        }
    }
}
