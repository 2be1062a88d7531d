//! Error handlers
//!
//! Reporting for errors that end the process.

use crate::error::types::AppError;
use log::error;

/// Log an application error
pub fn handle_error(err: &AppError) {
    error!("CorteYa login error: {}", err);
}

/// Convert error to a process exit code (sysexits.h values)
pub fn error_to_exit_code(err: &AppError) -> i32 {
    match err {
        AppError::Config(_) => 78,
        AppError::IoError(_) => 74,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn exit_codes_distinguish_config_from_io() {
        let config_err = AppError::from(config::ConfigError::Message("bad".into()));
        let io_err = AppError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(error_to_exit_code(&config_err), 78);
        assert_eq!(error_to_exit_code(&io_err), 74);
    }
}
