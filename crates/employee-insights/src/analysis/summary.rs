use crate::dataset::Department;
use serde::Serialize;
use std::collections::BTreeMap;

/// Salary mean and sample standard deviation within one department.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalaryStats {
    pub mean: f64,
    /// `None` when the department has a single employee.
    pub std_dev: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepartmentCountEntry {
    pub department: Department,
    pub count: usize,
}

/// Descriptive statistics derived from one table snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub total_employees: usize,
    pub avg_age: f64,
    pub avg_salary: f64,
    pub department_counts: BTreeMap<Department, usize>,
    pub salary_by_department: BTreeMap<Department, SalaryStats>,
    /// `None` when fewer than two rows exist or either column is constant.
    pub correlation_age_salary: Option<f64>,
}

impl AnalysisSummary {
    /// Counts ordered most-frequent first; ties keep the generator's department order.
    pub fn department_counts_by_frequency(&self) -> Vec<DepartmentCountEntry> {
        let mut entries: Vec<DepartmentCountEntry> = self
            .department_counts
            .iter()
            .map(|(&department, &count)| DepartmentCountEntry { department, count })
            .collect();
        entries.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.department.rank().cmp(&b.department.rank()))
        });
        entries
    }
}
