//! Generate command report data structures.

use std::path::{Path, PathBuf};

use super::output::{Output, Report};

/// Printed when a class file exists and `--force` was not given.
pub const SKIP_WARNING: &str = "Class already exists - not over-writing";

/// Report data from a generation batch.
#[derive(Debug)]
pub struct GenerateReport {
    /// Model definition file the classes come from.
    pub model_path: PathBuf,

    /// Base directory for generated classes.
    pub output_dir: PathBuf,

    /// Whether this was a dry run.
    pub dry_run: bool,

    /// Classes in document order.
    pub classes: Vec<GeneratedClass>,

    /// What stopped the batch early, if anything.
    pub failure: Option<BatchFailure>,
}

/// Why a batch stopped before its last entry.
#[derive(Debug)]
pub enum BatchFailure {
    /// A class definition failed validation.
    InvalidEntry(Box<classgen_manifest::Error>),
    /// A class file could not be written.
    Write(eyre::Report),
}

/// One generated class.
#[derive(Debug)]
pub struct GeneratedClass {
    /// Target file path.
    pub path: PathBuf,
    /// Rendered source.
    pub content: String,
    pub outcome: ClassOutcome,
}

/// What happened to a generated class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassOutcome {
    Written,
    /// The file already existed and was left untouched.
    Skipped,
    /// Dry run, nothing written.
    Previewed,
    /// Writing the file failed.
    Failed,
}

/// Per-outcome counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSummary {
    pub written: usize,
    pub skipped: usize,
    pub previewed: usize,
}

impl GenerateReport {
    pub fn new(model_path: &Path, output_dir: &Path, dry_run: bool) -> Self {
        Self {
            model_path: model_path.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            dry_run,
            classes: Vec::new(),
            failure: None,
        }
    }

    pub fn summary(&self) -> GenerateSummary {
        self.classes
            .iter()
            .fold(GenerateSummary::default(), |mut summary, class| {
                match class.outcome {
                    ClassOutcome::Written => summary.written += 1,
                    ClassOutcome::Skipped => summary.skipped += 1,
                    ClassOutcome::Previewed => summary.previewed += 1,
                    ClassOutcome::Failed => {}
                }
                summary
            })
    }

    /// Consume the report, keeping only what stopped the batch.
    pub fn into_failure(self) -> Option<BatchFailure> {
        self.failure
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for class in &self.classes {
            if self.dry_run {
                out.divider(&class.path.display().to_string());
            }
            out.source(&class.content);
            if class.outcome == ClassOutcome::Skipped {
                out.warning(SKIP_WARNING);
            }
        }

        let summary = self.summary();
        if self.dry_run {
            out.divider("Summary");
            out.preformatted(&format!(
                "{} classes would be generated",
                summary.previewed
            ));
        } else {
            out.key_value(
                "Generated",
                &format!(
                    "{} from {} ({} written, {} skipped)",
                    self.output_dir.display(),
                    self.model_path.display(),
                    summary.written,
                    summary.skipped
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collects rendered lines for assertions.
    #[derive(Default)]
    struct Recorder {
        lines: Vec<String>,
    }

    impl Output for Recorder {
        fn key_value(&mut self, key: &str, value: &str) {
            self.lines.push(format!("{}: {}", key, value));
        }

        fn warning(&mut self, msg: &str) {
            self.lines.push(format!("warning {}", msg));
        }

        fn divider(&mut self, label: &str) {
            self.lines.push(format!("-- {}", label));
        }

        fn preformatted(&mut self, text: &str) {
            self.lines.push(text.to_string());
        }

        fn source(&mut self, text: &str) {
            self.lines.push(format!("source {}", text.lines().next().unwrap_or("")));
        }
    }

    fn class(name: &str, outcome: ClassOutcome) -> GeneratedClass {
        GeneratedClass {
            path: PathBuf::from("App").join(format!("{}.php", name)),
            content: format!("class {} {{\n}}\n", name),
            outcome,
        }
    }

    #[test]
    fn test_skip_warning_follows_echo() {
        let report = GenerateReport {
            model_path: PathBuf::from("models.yaml"),
            output_dir: PathBuf::from("out"),
            dry_run: false,
            classes: vec![
                class("User", ClassOutcome::Skipped),
                class("Tag", ClassOutcome::Written),
            ],
            failure: None,
        };

        let mut out = Recorder::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "source class User {".to_string(),
                format!("warning {}", SKIP_WARNING),
                "source class Tag {".to_string(),
                "Generated: out from models.yaml (1 written, 1 skipped)".to_string(),
            ]
        );
    }

    #[test]
    fn test_dry_run_preview() {
        let mut report = GenerateReport::new(Path::new("models.yaml"), Path::new("."), true);
        report.classes.push(class("User", ClassOutcome::Previewed));

        let mut out = Recorder::default();
        report.render(&mut out);

        assert_eq!(out.lines.len(), 4);
        assert!(out.lines[0].starts_with("-- App"));
        assert_eq!(out.lines[3], "1 classes would be generated");
        assert_eq!(
            report.summary(),
            GenerateSummary {
                written: 0,
                skipped: 0,
                previewed: 1,
            }
        );
    }

    #[test]
    fn test_failed_class_is_still_echoed() {
        let mut report = GenerateReport::new(Path::new("models.yaml"), Path::new("out"), false);
        report.classes.push(class("User", ClassOutcome::Written));
        report.classes.push(class("Tag", ClassOutcome::Failed));

        let mut out = Recorder::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "source class User {".to_string(),
                "source class Tag {".to_string(),
                "Generated: out from models.yaml (1 written, 0 skipped)".to_string(),
            ]
        );
    }
}
