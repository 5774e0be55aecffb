use employee_insights::analysis::AnalysisSummary;
use employee_insights::dataset::{EmployeeRecord, EmployeeTable};
use employee_insights::error::AppError;
use std::path::Path;

pub(crate) fn render_text(
    table: &EmployeeTable,
    summary: &AnalysisSummary,
    preview_rows: usize,
    export_path: Option<&Path>,
) {
    println!("{}", text_report(table, summary, preview_rows, export_path));
}

pub(crate) fn render_json(summary: &AnalysisSummary) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

fn text_report(
    table: &EmployeeTable,
    summary: &AnalysisSummary,
    preview_rows: usize,
    export_path: Option<&Path>,
) -> String {
    let (rows, columns) = table.shape();
    let mut lines = vec![
        "Employee insights".to_string(),
        "=".repeat(50),
        format!("Dataset shape: ({rows}, {columns})"),
        format!("Columns: {}", table.columns().join(", ")),
    ];

    let preview = table.head(preview_rows);
    if !preview.is_empty() {
        lines.push(String::new());
        lines.push(format!("First {} rows", preview.len()));
        lines.push(format!(
            "{:>4}  {:<10} {:>3}  {:>12}  {:<12} {:>10}",
            "id", "name", "age", "salary", "department", "experience"
        ));
        lines.extend(preview.iter().map(preview_row));
    }

    lines.push(String::new());
    lines.push("Analysis results".to_string());
    lines.push(format!("Total employees: {}", summary.total_employees));
    lines.push(format!("Average age: {:.1} years", summary.avg_age));
    lines.push(format!(
        "Average salary: {}",
        format_currency(summary.avg_salary)
    ));
    lines.push(format!(
        "Age-salary correlation: {}",
        summary
            .correlation_age_salary
            .map(|r| format!("{r:.3}"))
            .unwrap_or_else(|| "undefined".to_string())
    ));

    lines.push(String::new());
    lines.push("Department distribution".to_string());
    for entry in summary.department_counts_by_frequency() {
        lines.push(format!(
            "- {}: {} employees",
            entry.department.label(),
            entry.count
        ));
    }

    lines.push(String::new());
    lines.push("Average salary by department".to_string());
    for (department, stats) in &summary.salary_by_department {
        let spread = stats
            .std_dev
            .map(format_currency)
            .unwrap_or_else(|| "undefined".to_string());
        lines.push(format!(
            "- {}: {} (± {})",
            department.label(),
            format_currency(stats.mean),
            spread
        ));
    }

    lines.push(String::new());
    match export_path {
        Some(path) => lines.push(format!("Data saved to {}", path.display())),
        None => lines.push("Export skipped".to_string()),
    }
    lines.push("Run completed".to_string());

    lines.join("\n")
}

fn preview_row(record: &EmployeeRecord) -> String {
    format!(
        "{:>4}  {:<10} {:>3}  {:>12.2}  {:<12} {:>10}",
        record.id,
        record.name,
        record.age,
        record.salary,
        record.department.label(),
        record.experience_years
    )
}

/// Formats as dollars with thousands separators and two decimals, e.g. `-$1,234.50`.
fn format_currency(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && formatted != "0.00" {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{fraction}")
}
