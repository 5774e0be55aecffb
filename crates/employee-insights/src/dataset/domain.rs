use super::DatasetError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Column names of an exported table, in schema order.
pub const COLUMNS: [&str; 6] = [
    "id",
    "name",
    "age",
    "salary",
    "department",
    "experience_years",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Sales,
    Marketing,
    #[serde(rename = "HR")]
    HumanResources,
}

impl Department {
    /// Sampling order used by the generator.
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Engineering,
            Self::Sales,
            Self::Marketing,
            Self::HumanResources,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Sales => "Sales",
            Self::Marketing => "Marketing",
            Self::HumanResources => "HR",
        }
    }

    pub(crate) fn rank(self) -> usize {
        match self {
            Self::Engineering => 0,
            Self::Sales => 1,
            Self::Marketing => 2,
            Self::HumanResources => 3,
        }
    }
}

// Grouped output is keyed alphabetically by label.
impl Ord for Department {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label().cmp(other.label())
    }
}

impl PartialOrd for Department {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One synthetic employee row. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub salary: f64,
    pub department: Department,
    pub experience_years: u32,
}

impl EmployeeRecord {
    pub fn display_name(id: u32) -> String {
        format!("User_{id}")
    }
}

/// Ordered, immutable collection of records with ids `1..=len`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmployeeTable {
    records: Vec<EmployeeRecord>,
}

impl EmployeeTable {
    /// Builds a table, rejecting rows whose id does not match its 1-based position.
    pub fn from_records(records: Vec<EmployeeRecord>) -> Result<Self, DatasetError> {
        for (position, record) in records.iter().enumerate() {
            let expected = position as u64 + 1;
            if u64::from(record.id) != expected {
                return Err(DatasetError::NonSequentialId {
                    position,
                    id: record.id,
                });
            }
        }

        Ok(Self { records })
    }

    pub(crate) fn from_generated(records: Vec<EmployeeRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), COLUMNS.len())
    }

    pub fn head(&self, count: usize) -> &[EmployeeRecord] {
        &self.records[..count.min(self.records.len())]
    }

    pub fn ages(&self) -> Vec<f64> {
        self.records
            .iter()
            .map(|record| f64::from(record.age))
            .collect()
    }

    pub fn salaries(&self) -> Vec<f64> {
        self.records.iter().map(|record| record.salary).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, department: Department) -> EmployeeRecord {
        EmployeeRecord {
            id,
            name: EmployeeRecord::display_name(id),
            age: 30,
            salary: 50_000.0,
            department,
            experience_years: 3,
        }
    }

    #[test]
    fn departments_sort_alphabetically_by_label() {
        let mut departments = Department::ordered().to_vec();
        departments.sort();
        let labels: Vec<_> = departments.iter().map(|d| d.label()).collect();
        assert_eq!(labels, ["Engineering", "HR", "Marketing", "Sales"]);
    }

    #[test]
    fn from_records_rejects_out_of_order_ids() {
        let error = EmployeeTable::from_records(vec![
            record(1, Department::Sales),
            record(3, Department::Sales),
        ])
        .expect_err("gap in ids");

        match error {
            DatasetError::NonSequentialId { position, id } => {
                assert_eq!(position, 1);
                assert_eq!(id, 3);
            }
            other => panic!("expected id error, got {other:?}"),
        }
    }

    #[test]
    fn head_is_clamped_to_table_length() {
        let table = EmployeeTable::from_records(vec![
            record(1, Department::Engineering),
            record(2, Department::HumanResources),
        ])
        .expect("valid table");

        assert_eq!(table.head(5).len(), 2);
        assert_eq!(table.head(1)[0].id, 1);
        assert_eq!(table.shape(), (2, 6));
    }
}
