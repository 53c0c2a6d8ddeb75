// src/output/planner.rs
//! Turns composed drafts into an output plan. No I/O happens here.

use super::types::{DeliveryTarget, OutputPlan};
use crate::compose::PostDraft;
use crate::error::AppError;
use std::collections::HashSet;
use std::path::PathBuf;

/// Where composed drafts go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// `<slug>.html` and `<slug>.json` per draft.
    Directory(PathBuf),
    /// Every draft as one JSON array on stdout.
    Stdout,
}

/// Plans the delivery of every draft to `target`.
pub fn plan_delivery(drafts: &[PostDraft], target: &OutputTarget) -> Result<OutputPlan, AppError> {
    match target {
        OutputTarget::Stdout => {
            let content = to_json(&drafts)?;
            Ok(OutputPlan::new().with_operation(DeliveryTarget::PrintToStdout { content }))
        }
        OutputTarget::Directory(dir) => {
            let mut plan =
                OutputPlan::new().with_operation(DeliveryTarget::CreateDirectory { path: dir.clone() });
            let mut taken = HashSet::new();
            for draft in drafts {
                let stem = unique_stem(&sanitize_file_stem(&draft.slug), &mut taken);
                plan = plan
                    .with_operation(DeliveryTarget::WriteFile {
                        path: dir.join(format!("{}.html", stem)),
                        content: draft.content.as_str().to_string(),
                    })
                    .with_operation(DeliveryTarget::WriteFile {
                        path: dir.join(format!("{}.json", stem)),
                        content: to_json(draft)?,
                    });
            }
            Ok(plan)
        }
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::InternalError {
        message: "Failed to serialize post draft".to_string(),
        source: Some(Box::new(e)),
    })
}

/// Makes a slug safe as a file stem on every platform.
pub fn sanitize_file_stem(slug: &str) -> String {
    let safe: String = slug
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let safe = safe.trim().trim_matches('.');
    if safe.is_empty() {
        "post".to_string()
    } else {
        safe.to_string()
    }
}

/// Appends `-2`, `-3`, ... until the stem is unused.
fn unique_stem(stem: &str, taken: &mut HashSet<String>) -> String {
    let mut candidate = stem.to_string();
    let mut n = 2;
    while !taken.insert(candidate.clone()) {
        candidate = format!("{}-{}", stem, n);
        n += 1;
    }
    candidate
}
