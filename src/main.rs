use contact_book::prelude::{AppError, run_app};

fn main() -> Result<(), AppError> {
    run_app()
}
