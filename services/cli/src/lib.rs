mod cli;
mod report;

use employee_insights::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
