mod cli;

use cli::Args;
use nwdi_dcdef::adapters::outbound::console::StderrProgressReporter;
use nwdi_dcdef::adapters::outbound::filesystem::FileSystemDescriptorSource;
use nwdi_dcdef::application::dto::{
    OutputFormat, ReadMetadata, ReadRequest, ReadResponse, DEFAULT_DESCRIPTOR_NAME,
};
use nwdi_dcdef::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use nwdi_dcdef::application::use_cases::ReadComponentsUseCase;
use nwdi_dcdef::config::{self, ConfigFile};
use nwdi_dcdef::logging::init_logging;
use nwdi_dcdef::shared::error::{DcdefError, ExitCode};
use nwdi_dcdef::shared::security::validate_not_symlink;
use nwdi_dcdef::shared::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = init_logging(args.verbose, args.log_json) {
        eprintln!("{}", e);
        process::exit(ExitCode::ApplicationError.as_i32());
    }

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Effective settings after merging the config file into the CLI arguments
#[derive(Debug, PartialEq)]
struct Settings {
    format: OutputFormat,
    exclude: Vec<String>,
    jobs: usize,
    descriptor_name: String,
    fail_on_incomplete: bool,
}

/// CLI values win over config values; exclusion patterns are merged
fn resolve_settings(args: &Args, config: Option<ConfigFile>) -> Result<Settings> {
    let config = config.unwrap_or_default();
    let config_format = config.output_format()?;

    let mut exclude = config.exclude_components.unwrap_or_default();
    for pattern in &args.exclude {
        if !exclude.contains(pattern) {
            exclude.push(pattern.clone());
        }
    }

    Ok(Settings {
        format: args.format.or(config_format).unwrap_or_default(),
        exclude,
        jobs: args.jobs.or(config.jobs).unwrap_or(0),
        descriptor_name: args
            .descriptor_name
            .clone()
            .or(config.descriptor_name)
            .unwrap_or_else(|| DEFAULT_DESCRIPTOR_NAME.to_string()),
        fail_on_incomplete: args.fail_on_incomplete || config.fail_on_incomplete.unwrap_or(false),
    })
}

fn run(args: Args) -> Result<ExitCode> {
    let coordinates = match args.component_coordinates().transpose() {
        Ok(coordinates) => coordinates,
        Err(message) => {
            eprintln!("{}", message);
            return Ok(ExitCode::InvalidArguments);
        }
    };

    let workspace = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_workspace_path(&workspace)?;

    let config = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&workspace)?,
    };
    let settings = resolve_settings(&args, config)?;

    // Create adapters (Dependency Injection)
    let use_case =
        ReadComponentsUseCase::new(FileSystemDescriptorSource::new(), StderrProgressReporter::new());

    let response = match coordinates {
        Some((vendor, name)) => {
            let component = use_case.read_component(&workspace, vendor, name)?;
            ReadResponse::new(vec![component], ReadMetadata::new(workspace), Vec::new())
        }
        None => {
            let request = ReadRequest::new(workspace)
                .with_descriptor_name(settings.descriptor_name.clone())
                .with_exclude_patterns(settings.exclude.clone())
                .with_jobs(settings.jobs);
            use_case.execute(request)?
        }
    };

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatted_output = FormatterFactory::create(settings.format).format(&response)?;

    PresenterFactory::create(PresenterType::from_output(args.output)).present(&formatted_output)?;

    if settings.fail_on_incomplete && response.has_incomplete_components() {
        eprintln!(
            "{}",
            format!(
                "⚠️  {} component(s) without vendor or name",
                response.incomplete_count()
            )
            .yellow()
        );
        return Ok(ExitCode::IncompleteComponents);
    }

    Ok(ExitCode::Success)
}

fn validate_workspace_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DcdefError::WorkspaceNotFound {
            path: path.to_path_buf(),
            suggestion: "Specify an existing workspace directory with --path".to_string(),
        }
        .into());
    }

    validate_not_symlink(path, "reading a workspace").map_err(|e| {
        DcdefError::InvalidWorkspacePath {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    if !path.is_dir() {
        return Err(DcdefError::InvalidWorkspacePath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    path.canonicalize()
        .map_err(|e| DcdefError::InvalidWorkspacePath {
            path: path.to_path_buf(),
            reason: format!("Failed to canonicalize path: {}", e),
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("nwdi-dcdef").chain(extra.iter().copied())).unwrap()
    }

    #[test]
    fn test_validate_workspace_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_workspace_path(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_workspace_path_nonexistent() {
        let err = validate_workspace_path(Path::new("/nonexistent/workspace")).unwrap_err();
        assert!(err.to_string().contains("Workspace not found"));
    }

    #[test]
    fn test_validate_workspace_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join(".dcdef");
        fs::write(&file_path, "<development-component/>").unwrap();

        let err = validate_workspace_path(&file_path).unwrap_err();
        assert!(err.to_string().contains("Not a directory"));
    }

    #[test]
    fn test_settings_defaults_without_config() {
        let settings = resolve_settings(&args(&[]), None).unwrap();
        assert_eq!(
            settings,
            Settings {
                format: OutputFormat::Json,
                exclude: Vec::new(),
                jobs: 0,
                descriptor_name: ".dcdef".to_string(),
                fail_on_incomplete: false,
            }
        );
    }

    #[test]
    fn test_settings_cli_overrides_config() {
        let config = ConfigFile {
            format: Some("markdown".to_string()),
            exclude_components: Some(vec!["a".to_string(), "b".to_string()]),
            jobs: Some(2),
            descriptor_name: Some("component.xml".to_string()),
            fail_on_incomplete: Some(true),
            ..Default::default()
        };

        let settings = resolve_settings(
            &args(&["-f", "json", "-e", "b", "-e", "c", "-j", "8"]),
            Some(config),
        )
        .unwrap();

        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.exclude, vec!["a", "b", "c"]);
        assert_eq!(settings.jobs, 8);
        assert_eq!(settings.descriptor_name, "component.xml");
        assert!(settings.fail_on_incomplete);
    }
}
