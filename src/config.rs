// src/config.rs
use crate::constants::SUMMARY_LENGTH_ENV;
use crate::error::AppError;
use crate::output::OutputTarget;
use crate::types::{PostTitle, SummaryLength};
use clap::Parser;
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Block-tree JSON files saved by the fetch step (list envelope, array or page export)
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// JSON object mapping original image URLs to re-hosted URLs
    #[arg(short = 'm', long)]
    pub image_map: Option<PathBuf>,

    /// Post title (defaults to the document's title, then the file name)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Explicit excerpt; when absent one is summarised from the body
    #[arg(short, long)]
    pub excerpt: Option<String>,

    /// Maximum excerpt length in characters (env: NOTION2WP_SUMMARY_LENGTH, default 160)
    #[arg(short = 's', long)]
    pub summary_length: Option<usize>,

    /// Write <slug>.html and <slug>.json for each input into this directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Pipe mode - print the drafts as JSON to stdout (the default without --output-dir)
    #[arg(short = 'p', long, default_value_t = false, conflicts_with = "output_dir")]
    pub pipe: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved pipeline configuration, validated and ready to drive all stages.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub inputs: Vec<PathBuf>,
    pub image_map: Option<PathBuf>,
    pub title: Option<PostTitle>,
    pub excerpt: Option<String>,
    pub summary_length: SummaryLength,
    pub target: OutputTarget,
    pub verbose: bool,
}

impl PipelineConfig {
    /// Resolves configuration from CLI input and the process environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let env_length = std::env::var(SUMMARY_LENGTH_ENV).ok();
        Self::resolve_with_env(cli, env_length.as_deref())
    }

    /// Resolves configuration with an explicit value for the summary-length
    /// environment variable. The command line wins over the environment.
    pub fn resolve_with_env(
        cli: CommandLineInput,
        env_summary_length: Option<&str>,
    ) -> Result<Self, AppError> {
        if cli.inputs.is_empty() {
            return Err(AppError::MissingConfiguration(
                "at least one input file is required".to_string(),
            ));
        }

        let summary_length = match (cli.summary_length, env_summary_length) {
            (Some(n), _) => SummaryLength::new(n)?,
            (None, Some(raw)) => {
                let n = raw.trim().parse::<usize>().map_err(|_| {
                    AppError::MissingConfiguration(format!(
                        "{} must be a positive integer, got '{}'",
                        SUMMARY_LENGTH_ENV, raw
                    ))
                })?;
                SummaryLength::new(n)?
            }
            (None, None) => SummaryLength::default(),
        };

        let title = cli.title.map(PostTitle::new).transpose()?;

        let target = match cli.output_dir {
            Some(dir) if !cli.pipe => OutputTarget::Directory(dir),
            _ => OutputTarget::Stdout,
        };

        Ok(PipelineConfig {
            inputs: cli.inputs,
            image_map: cli.image_map,
            title,
            excerpt: cli.excerpt,
            summary_length,
            target,
            verbose: cli.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> CommandLineInput {
        let mut argv = vec!["notion2wp"];
        argv.extend_from_slice(args);
        CommandLineInput::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::resolve_with_env(cli(&["page.json"]), None).unwrap();
        assert_eq!(config.summary_length.get(), 160);
        assert_eq!(config.target, OutputTarget::Stdout);
        assert!(config.title.is_none());
    }

    #[test]
    fn test_environment_overrides_default_but_not_flag() {
        let from_env = PipelineConfig::resolve_with_env(cli(&["a.json"]), Some("80")).unwrap();
        assert_eq!(from_env.summary_length.get(), 80);

        let from_flag =
            PipelineConfig::resolve_with_env(cli(&["a.json", "-s", "200"]), Some("80")).unwrap();
        assert_eq!(from_flag.summary_length.get(), 200);
    }

    #[test]
    fn test_invalid_lengths_are_rejected() {
        assert!(PipelineConfig::resolve_with_env(cli(&["a.json"]), Some("lots")).is_err());
        assert!(PipelineConfig::resolve_with_env(cli(&["a.json", "-s", "0"]), None).is_err());
    }

    #[test]
    fn test_output_dir_and_blank_title() {
        let config =
            PipelineConfig::resolve_with_env(cli(&["a.json", "b.json", "-o", "out"]), None).unwrap();
        assert_eq!(config.inputs.len(), 2);
        assert_eq!(config.target, OutputTarget::Directory(PathBuf::from("out")));

        assert!(PipelineConfig::resolve_with_env(cli(&["a.json", "-t", "  "]), None).is_err());
    }
}
