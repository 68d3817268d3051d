//! Generate operation - one class file per model entry.

use std::path::Path;

use classgen_codegen_php::Generator;
use classgen_core::{FileRules, GeneratedFile, WriteResult};
use classgen_manifest::{ModelFile, extract};
use eyre::Context;

use crate::reports::{BatchFailure, ClassOutcome, GenerateReport, GeneratedClass};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Base directory for generated classes.
    pub output_dir: &'a Path,
    /// Whether existing classes are overwritten.
    pub force: bool,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Entries are processed in document order. The first invalid entry or
/// failed write stops the batch and is recorded as the report's failure;
/// classes generated before it stay on disk and stay in the report.
pub fn generate(
    model: &ModelFile,
    generator: &Generator,
    opts: GenerateOptions,
) -> GenerateReport {
    let rules = FileRules::forced(opts.force);
    let mut report = GenerateReport::new(model.path(), opts.output_dir, opts.dry_run);

    for (index, entry) in model.entries().iter().enumerate() {
        let class = match extract(entry, index) {
            Ok(class) => class,
            Err(error) => {
                report.failure = Some(BatchFailure::InvalidEntry(error));
                break;
            }
        };

        let file = generator.generate(&class, rules);
        let written = if opts.dry_run {
            Ok(ClassOutcome::Previewed)
        } else {
            file.write(opts.output_dir)
                .map(|result| match result {
                    WriteResult::Written => ClassOutcome::Written,
                    WriteResult::Skipped => ClassOutcome::Skipped,
                })
                .wrap_err_with(|| format!("Failed to generate class {}", file.fqn()))
        };
        let (outcome, failure) = match written {
            Ok(outcome) => (outcome, None),
            Err(error) => (ClassOutcome::Failed, Some(BatchFailure::Write(error))),
        };

        report.classes.push(GeneratedClass {
            path: file.path(opts.output_dir),
            content: file.content().to_string(),
            outcome,
        });

        if failure.is_some() {
            report.failure = failure;
            break;
        }
    }

    report
}
