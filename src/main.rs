// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion2wp::config::{CommandLineInput, PipelineConfig};
use notion2wp::constants::LOG_FILE_NAME;
use notion2wp::output::{DeliveryTarget, OutputReport, OutputTarget};
use notion2wp::pipeline::{
    compose_all, load_image_map, HtmlPostComposer, JsonFileSource, PlannedDelivery, PostDelivery,
};
use notion2wp::{ImageUrlMap, PostDraft};
use std::fs;

/// Sets up logging configuration.
///
/// Console output goes to stderr so pipe mode keeps stdout clean.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join(LOG_FILE_NAME);
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)
        .with_context(|| format!("opening log file {}", log_file_path.display()))?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )
        .context("building logging configuration")?;

    log4rs::init_config(config).context("installing logger")?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Executes the three-stage pipeline: load → compose → deliver.
fn execute_pipeline(config: &PipelineConfig) -> anyhow::Result<()> {
    let images = match &config.image_map {
        Some(path) => load_image_map(path)
            .with_context(|| format!("loading image map {}", path.display()))?,
        None => ImageUrlMap::new(),
    };

    let source = JsonFileSource {
        title: config.title.clone(),
        excerpt: config.excerpt.clone(),
    };
    let composer = HtmlPostComposer {
        images,
        summary_length: config.summary_length,
    };
    let delivery = PlannedDelivery {
        target: config.target.clone(),
    };

    log::info!("Composing {} document(s)", config.inputs.len());
    let drafts = compose_all(&source, &composer, &config.inputs)
        .with_context(|| format!("composing {} document(s)", config.inputs.len()))?;
    let report = delivery.deliver(&drafts).context("delivering drafts")?;
    report_completion(config, &drafts, &report);

    Ok(())
}

/// Reports completion to the user. Silent in pipe mode.
fn report_completion(config: &PipelineConfig, drafts: &[PostDraft], report: &OutputReport) {
    if config.target == OutputTarget::Stdout {
        return;
    }

    for draft in drafts {
        let faq_count = draft.faq.len();
        println!(
            "📝 {} → {} ({} bytes of HTML{})",
            draft.title,
            draft.slug,
            draft.content.len(),
            if faq_count > 0 {
                format!(", {} FAQ entries", faq_count)
            } else {
                String::new()
            }
        );
        if !draft.pending_uploads.is_empty() {
            eprintln!(
                "⚠️  {} image(s) in '{}' are not in the image map and still point at the source.",
                draft.pending_uploads.len(),
                draft.slug
            );
        }
    }

    for completed in &report.completed {
        if let DeliveryTarget::WriteFile { path, .. } = &completed.operation {
            println!("✓ Saved {}", path.display());
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = PipelineConfig::resolve(cli).context("resolving configuration")?;

    execute_pipeline(&config)?;

    Ok(())
}
