use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Load error: {message}")]
    LoadError { message: String },

    #[error("Mapping sheet '{sheet}' has {columns} usable columns, need at least 3")]
    MapFormatError { sheet: String, columns: usize },

    #[error("Write error: {message}")]
    WriteError { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Workbook read error: {0}")]
    WorkbookError(#[from] calamine::Error),

    #[error("Worksheet write error: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SplitError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Mapping,
    Output,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SplitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SplitError::LoadError { .. }
            | SplitError::CsvError(_)
            | SplitError::WorkbookError(_) => ErrorCategory::Input,
            SplitError::MapFormatError { .. } => ErrorCategory::Mapping,
            SplitError::WriteError { .. }
            | SplitError::XlsxError(_)
            | SplitError::ZipError(_) => ErrorCategory::Output,
            SplitError::ConfigError { .. } | SplitError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            SplitError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Config => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Mapping | ErrorCategory::Output => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SplitError::LoadError { message } => {
                format!("Could not read the uploaded data: {}", message)
            }
            SplitError::MapFormatError { sheet, .. } => format!(
                "Sheet '{}' of the region workbook does not look like a County/Zip/Region table",
                sheet
            ),
            SplitError::WriteError { message } => {
                format!("Could not assemble the output archive: {}", message)
            }
            SplitError::CsvError(_) => "The member export is not a readable CSV file".to_string(),
            SplitError::WorkbookError(_) => {
                "The region file is not a readable Excel workbook".to_string()
            }
            SplitError::XlsxError(_) | SplitError::ZipError(_) => {
                "Writing the output files failed".to_string()
            }
            SplitError::IoError(e) => format!("File system error: {}", e),
            SplitError::ConfigError { message } => message.clone(),
            SplitError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Input => {
                "Check that the member export is a CSV with a 'Zip' column and the region file is an .xls/.xlsx workbook".to_string()
            }
            ErrorCategory::Mapping => {
                "Every sheet needs at least three columns: County, Zip and Region".to_string()
            }
            ErrorCategory::Output => {
                "Re-run the split; if it keeps failing, check free disk space".to_string()
            }
            ErrorCategory::Config => "Run with --help to see the expected options".to_string(),
            ErrorCategory::System => {
                "Check file permissions and that the output directory is writable".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let load = SplitError::LoadError {
            message: "no Zip column".to_string(),
        };
        assert_eq!(load.category(), ErrorCategory::Input);
        assert_eq!(load.severity(), ErrorSeverity::High);

        let map = SplitError::MapFormatError {
            sheet: "Sheet1".to_string(),
            columns: 2,
        };
        assert_eq!(map.category(), ErrorCategory::Mapping);

        let write = SplitError::WriteError {
            message: "archive truncated".to_string(),
        };
        assert_eq!(write.category(), ErrorCategory::Output);

        let config = SplitError::ConfigError {
            message: "missing output path".to_string(),
        };
        assert_eq!(config.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_messages_mention_the_offending_part() {
        let map = SplitError::MapFormatError {
            sheet: "Region 5".to_string(),
            columns: 1,
        };
        assert!(map.to_string().contains("Region 5"));
        assert!(map.user_friendly_message().contains("Region 5"));
    }
}
