use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Json(serde_json::Error),
    DuplicateEmail(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing the contacts file: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Invalid contacts data: {}", e)
            }
            AppError::DuplicateEmail(email) => {
                write!(f, "Contact with email '{}' already exists", email)
            }
        }
    }
}
