// src/output/types.rs
//! Planned deliveries and the report of carrying them out.

use std::path::PathBuf;

/// Everything to deliver, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputPlan {
    pub operations: Vec<DeliveryTarget>,
}

impl OutputPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operation(mut self, operation: DeliveryTarget) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// A single delivery step.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryTarget {
    CreateDirectory { path: PathBuf },
    WriteFile { path: PathBuf, content: String },
    PrintToStdout { content: String },
}

impl DeliveryTarget {
    /// Short human-readable description for logs and failure lists.
    pub fn describe(&self) -> String {
        match self {
            DeliveryTarget::CreateDirectory { path } => format!("mkdir {}", path.display()),
            DeliveryTarget::WriteFile { path, .. } => format!("write {}", path.display()),
            DeliveryTarget::PrintToStdout { .. } => "stdout".to_string(),
        }
    }
}

/// Outcome of executing an [`OutputPlan`].
#[derive(Debug, Clone, Default)]
pub struct OutputReport {
    pub completed: Vec<CompletedOperation>,
    pub failed: Vec<FailedOperation>,
    pub bytes_written: usize,
    pub total_duration_ms: u64,
}

impl OutputReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_completed(mut self, operation: CompletedOperation) -> Self {
        self.bytes_written += operation.bytes_written;
        self.completed.push(operation);
        self
    }

    pub fn with_failed(mut self, operation: FailedOperation) -> Self {
        self.failed.push(operation);
        self
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// One entry per failure, `"<operation>: <error>"`.
    pub fn failure_messages(&self) -> Vec<String> {
        self.failed
            .iter()
            .map(|f| format!("{}: {}", f.operation.describe(), f.error))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct CompletedOperation {
    pub operation: DeliveryTarget,
    pub bytes_written: usize,
}

#[derive(Debug, Clone)]
pub struct FailedOperation {
    pub operation: DeliveryTarget,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_accumulates() {
        let report = OutputReport::new()
            .with_completed(CompletedOperation {
                operation: DeliveryTarget::PrintToStdout {
                    content: "abc".to_string(),
                },
                bytes_written: 3,
            })
            .with_failed(FailedOperation {
                operation: DeliveryTarget::WriteFile {
                    path: PathBuf::from("out/a.html"),
                    content: String::new(),
                },
                error: "denied".to_string(),
            });
        assert_eq!(report.bytes_written, 3);
        assert!(!report.is_success());
        assert_eq!(report.failure_messages(), vec!["write out/a.html: denied"]);
    }
}
