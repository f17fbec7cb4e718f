use clap::Parser;
use nwdi_dcdef::application::dto::OutputFormat;
use std::path::PathBuf;

/// Read SAP NetWeaver development component definitions (.dcdef)
#[derive(Parser, Debug)]
#[command(name = "nwdi-dcdef")]
#[command(version)]
#[command(
    about = "Read SAP NetWeaver development component definitions (.dcdef) and report components and their dependencies",
    long_about = None
)]
pub struct Args {
    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to the workspace directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exclude components matching patterns (supports wildcards: *)
    /// Patterns containing '/' match "vendor/name", others match the name only.
    /// Can be specified multiple times: -e "sap.com/tc/*" -e "*test*"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Read only this component, located at DCs/<vendor>/<name>/_comp/.dcdef
    #[arg(long, value_name = "VENDOR/NAME", conflicts_with = "exclude")]
    pub component: Option<String>,

    /// Number of parser threads (0 = one per CPU)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// File name that identifies a descriptor
    #[arg(long, value_name = "NAME")]
    pub descriptor_name: Option<String>,

    /// Path to a config file (defaults to nwdi-dcdef.config.yml in the workspace)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when a component lacks vendor or name
    #[arg(long)]
    pub fail_on_incomplete: bool,

    /// Show debug diagnostics
    #[arg(short, long)]
    pub verbose: bool,

    /// Write diagnostics as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Splits `--component` into vendor and name at the first '/'
    pub fn component_coordinates(&self) -> Option<Result<(&str, &str), String>> {
        self.component.as_deref().map(|coordinates| {
            coordinates
                .split_once('/')
                .filter(|(vendor, name)| !vendor.is_empty() && !name.is_empty())
                .ok_or_else(|| {
                    format!(
                        "Invalid component '{}'. Expected <vendor>/<name>, e.g. sap.com/tc/bl/logging",
                        coordinates
                    )
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("nwdi-dcdef").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert!(args.format.is_none());
        assert!(args.path.is_none());
        assert!(args.exclude.is_empty());
        assert!(!args.fail_on_incomplete);
        assert!(args.component_coordinates().is_none());
    }

    #[test]
    fn test_all_options() {
        let args = parse(&[
            "-f",
            "md",
            "-p",
            "/ws",
            "-o",
            "out.md",
            "-e",
            "a*",
            "-e",
            "sap.com/b",
            "-j",
            "4",
            "--descriptor-name",
            "component.xml",
            "-c",
            "cfg.yml",
            "--fail-on-incomplete",
            "-v",
            "--log-json",
        ]);
        assert_eq!(args.format, Some(OutputFormat::Markdown));
        assert_eq!(args.path, Some(PathBuf::from("/ws")));
        assert_eq!(args.output, Some(PathBuf::from("out.md")));
        assert_eq!(args.exclude, vec!["a*", "sap.com/b"]);
        assert_eq!(args.jobs, Some(4));
        assert_eq!(args.descriptor_name.as_deref(), Some("component.xml"));
        assert_eq!(args.config, Some(PathBuf::from("cfg.yml")));
        assert!(args.fail_on_incomplete && args.verbose && args.log_json);
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let result = Args::try_parse_from(["nwdi-dcdef", "-f", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_component_coordinates() {
        let args = parse(&["--component", "sap.com/tc/bl/logging"]);
        assert_eq!(
            args.component_coordinates(),
            Some(Ok(("sap.com", "tc/bl/logging")))
        );

        let args = parse(&["--component", "no-vendor"]);
        assert!(args.component_coordinates().unwrap().is_err());
    }

    #[test]
    fn test_component_conflicts_with_exclude() {
        let result =
            Args::try_parse_from(["nwdi-dcdef", "--component", "v/n", "-e", "x"]);
        assert!(result.is_err());
    }
}
