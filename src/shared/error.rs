use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow build jobs to distinguish between a clean scan,
/// a scan that produced incomplete records, and outright failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every descriptor yielded a complete component record
    Success = 0,
    /// At least one record lacks vendor or name and `--fail-on-incomplete` was given
    IncompleteComponents = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing workspace, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::IncompleteComponents => write!(f, "Incomplete Components (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors raised around the descriptor parser.
///
/// The parser itself absorbs stream and markup failures; these errors
/// cover the workspace, file access, and output concerns of the driver.
#[derive(Debug, Error)]
pub enum DcdefError {
    #[error("Workspace not found: {path}\n\n💡 Hint: {suggestion}")]
    WorkspaceNotFound { path: PathBuf, suggestion: String },

    #[error("Invalid workspace path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a directory containing development components")]
    InvalidWorkspacePath { path: PathBuf, reason: String },

    #[error("Failed to open descriptor: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    DescriptorReadError { path: PathBuf, details: String },

    #[error("No descriptor files named '{descriptor_name}' found below {path}\n\n💡 Hint: Check the workspace path or use --descriptor-name")]
    NoDescriptorsFound {
        path: PathBuf,
        descriptor_name: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::IncompleteComponents.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::IncompleteComponents),
            "Incomplete Components (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_workspace_not_found_display() {
        let error = DcdefError::WorkspaceNotFound {
            path: PathBuf::from("/work/nwdi"),
            suggestion: "Test suggestion".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Workspace not found"));
        assert!(display.contains("/work/nwdi"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Test suggestion"));
    }

    #[test]
    fn test_descriptor_read_error_display() {
        let error = DcdefError::DescriptorReadError {
            path: PathBuf::from("/work/DCs/sap.com/dc1/_comp/.dcdef"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to open descriptor"));
        assert!(display.contains("_comp/.dcdef"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_no_descriptors_found_display() {
        let error = DcdefError::NoDescriptorsFound {
            path: PathBuf::from("/work"),
            descriptor_name: ".dcdef".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("No descriptor files named '.dcdef'"));
        assert!(display.contains("--descriptor-name"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = DcdefError::FileWriteError {
            path: PathBuf::from("/test/components.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/components.json"));
    }
}
