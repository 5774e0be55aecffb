//! Seeded generation of the synthetic employee table.

use super::domain::{Department, EmployeeRecord, EmployeeTable};
use super::DatasetError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::ops::Range;
use tracing::debug;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_ROWS: i64 = 100;
/// Largest accepted row count. The whole table is built in memory at once.
pub const MAX_ROWS: i64 = 10_000_000;

const AGE_RANGE: Range<u32> = 18..80;
const EXPERIENCE_RANGE: Range<u32> = 0..20;
const SALARY_MEAN: f64 = 50_000.0;
const SALARY_STD_DEV: f64 = 15_000.0;

/// Generates `rows` employee records from a single RNG stream seeded with `seed`.
///
/// Columns are drawn one at a time (ages, salaries, departments, experience) so
/// the same seed and row count always yield the same table. Salaries are not
/// clamped and can be negative. `rows` must lie in `0..=MAX_ROWS`.
pub fn generate(seed: u64, rows: i64) -> Result<EmployeeTable, DatasetError> {
    let count = u32::try_from(rows)
        .ok()
        .filter(|_| rows <= MAX_ROWS)
        .ok_or(DatasetError::InvalidRowCount { requested: rows })?;
    let salary_distribution = Normal::new(SALARY_MEAN, SALARY_STD_DEV)?;
    let mut rng = StdRng::seed_from_u64(seed);

    let ages: Vec<u32> = (0..count).map(|_| rng.gen_range(AGE_RANGE)).collect();
    let salaries: Vec<f64> = (0..count)
        .map(|_| salary_distribution.sample(&mut rng))
        .collect();
    let departments = Department::ordered();
    let sampled_departments: Vec<Department> = (0..count)
        .map(|_| departments[rng.gen_range(0..departments.len())])
        .collect();
    let experience: Vec<u32> = (0..count)
        .map(|_| rng.gen_range(EXPERIENCE_RANGE))
        .collect();

    let records = ages
        .into_iter()
        .zip(salaries)
        .zip(sampled_departments)
        .zip(experience)
        .zip(1..=count)
        .map(
            |((((age, salary), department), experience_years), id)| EmployeeRecord {
                id,
                name: EmployeeRecord::display_name(id),
                age,
                salary,
                department,
                experience_years,
            },
        )
        .collect();

    debug!(seed, rows = count, "generated employee table");
    Ok(EmployeeTable::from_generated(records))
}
