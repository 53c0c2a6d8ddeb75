// src/pipeline.rs
//! Pipeline capability traits: load, compose, deliver.
//!
//! Each trait describes a single capability so each stage can be tested in
//! isolation. The file-based implementations back the command-line tool.

use crate::api::parse_document;
use crate::compose::{compose, PostDraft};
use crate::error::AppError;
use crate::model::SourcePage;
use crate::output::{deliver, plan_delivery, OutputReport, OutputTarget};
use crate::types::{ImageUrlMap, PageId, PostTitle, SummaryLength};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

/// Loads one source page with its fully populated block tree.
pub trait DocumentSource {
    fn load(&self, location: &Path) -> Result<SourcePage, AppError>;
}

/// Turns a source page into a publishable draft.
pub trait PostComposer {
    fn compose(&self, page: &SourcePage) -> PostDraft;
}

/// Delivers composed drafts to their destination.
pub trait PostDelivery {
    fn deliver(&self, drafts: &[PostDraft]) -> Result<OutputReport, AppError>;
}

/// Reads block-tree JSON files written by the fetch step.
#[derive(Debug, Clone, Default)]
pub struct JsonFileSource {
    pub title: Option<PostTitle>,
    pub excerpt: Option<String>,
}

impl DocumentSource for JsonFileSource {
    fn load(&self, location: &Path) -> Result<SourcePage, AppError> {
        let body = fs::read_to_string(location)?;
        let doc = parse_document(&body).map_err(|e| match e {
            AppError::MalformedDocument(message) => {
                AppError::MalformedDocument(format!("{}: {}", location.display(), message))
            }
            other => other,
        })?;

        let title = match &self.title {
            Some(title) => title.clone(),
            None => {
                let fallback = location
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
                PostTitle::new(doc.title.clone().unwrap_or(fallback))?
            }
        };

        let mut page = SourcePage::new(title, doc.blocks);
        page.id = doc.page_id.or_else(|| page_id_from_file_name(location));
        page.slug = doc.slug;
        page.date = doc.date;
        page.cover_url = doc.cover_url;
        page.excerpt = self.excerpt.clone().or(doc.excerpt);

        log::info!(
            "Loaded '{}' from {} ({} top-level blocks)",
            page.title,
            location.display(),
            page.blocks.len()
        );
        Ok(page)
    }
}

fn page_id_from_file_name(location: &Path) -> Option<PageId> {
    let stem = location.file_stem()?.to_string_lossy();
    let tail = stem.rsplit(['-', '_', ' ']).next()?;
    PageId::parse(tail).ok()
}

/// Composes drafts as HTML with the given substitution map.
#[derive(Debug, Clone, Default)]
pub struct HtmlPostComposer {
    pub images: ImageUrlMap,
    pub summary_length: SummaryLength,
}

impl PostComposer for HtmlPostComposer {
    fn compose(&self, page: &SourcePage) -> PostDraft {
        compose(page, &self.images, self.summary_length)
    }
}

/// Plans and executes delivery to an [`OutputTarget`].
#[derive(Debug, Clone)]
pub struct PlannedDelivery {
    pub target: OutputTarget,
}

impl PostDelivery for PlannedDelivery {
    fn deliver(&self, drafts: &[PostDraft]) -> Result<OutputReport, AppError> {
        let plan = plan_delivery(drafts, &self.target)?;
        let report = deliver(plan);
        if report.is_success() {
            Ok(report)
        } else {
            Err(AppError::DeliveryFailed {
                failures: report.failure_messages(),
            })
        }
    }
}

/// Reads a substitution map file: a JSON object of original → re-hosted URL.
pub fn load_image_map(path: &Path) -> Result<ImageUrlMap, AppError> {
    let body = fs::read_to_string(path)?;
    let map: ImageUrlMap = serde_json::from_str(&body).map_err(|source| AppError::JsonParseError {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded {} image substitutions from {}", map.len(), path.display());
    Ok(map)
}

/// Loads and composes every input. Inputs are independent trees, so they
/// are processed in parallel; the result keeps input order.
pub fn compose_all<S, C, P>(source: &S, composer: &C, inputs: &[P]) -> Result<Vec<PostDraft>, AppError>
where
    S: DocumentSource + Sync,
    C: PostComposer + Sync,
    P: AsRef<Path> + Sync,
{
    inputs
        .par_iter()
        .map(|input| {
            let page = source.load(input.as_ref())?;
            Ok(composer.compose(&page))
        })
        .collect()
}
