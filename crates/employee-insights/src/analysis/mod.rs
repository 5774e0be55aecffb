pub mod stats;
mod summary;

pub use summary::{AnalysisSummary, DepartmentCountEntry, SalaryStats};

use crate::dataset::{Department, EmployeeTable};
use stats::StatsError;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("cannot summarize an empty employee table")]
    EmptyDataset,
    #[error("statistic could not be computed: {0}")]
    Statistic(#[from] StatsError),
}

/// Computes the descriptive statistics for `table`.
///
/// Fails on an empty table. Per-department standard deviations and the
/// age/salary correlation are `None` where they are undefined.
pub fn analyze(table: &EmployeeTable) -> Result<AnalysisSummary, AnalysisError> {
    if table.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let ages = table.ages();
    let salaries = table.salaries();

    let mut salaries_by_department: BTreeMap<Department, Vec<f64>> = BTreeMap::new();
    for record in table.records() {
        salaries_by_department
            .entry(record.department)
            .or_default()
            .push(record.salary);
    }

    let department_counts = salaries_by_department
        .iter()
        .map(|(&department, group)| (department, group.len()))
        .collect();

    let mut salary_by_department = BTreeMap::new();
    for (department, group) in &salaries_by_department {
        let stats = SalaryStats {
            mean: stats::mean(group)?,
            std_dev: undefined_as_none(stats::sample_std_dev(group))?,
        };
        salary_by_department.insert(*department, stats);
    }

    let summary = AnalysisSummary {
        total_employees: table.len(),
        avg_age: stats::mean(&ages)?,
        avg_salary: stats::mean(&salaries)?,
        department_counts,
        salary_by_department,
        correlation_age_salary: undefined_as_none(stats::pearson(&ages, &salaries))?,
    };

    debug!(
        rows = summary.total_employees,
        departments = summary.department_counts.len(),
        "analyzed employee table"
    );
    Ok(summary)
}

fn undefined_as_none(result: Result<f64, StatsError>) -> Result<Option<f64>, StatsError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(StatsError::InsufficientVariance { .. }) => Ok(None),
        Err(err) => Err(err),
    }
}
