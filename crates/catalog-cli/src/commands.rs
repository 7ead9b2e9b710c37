use std::fs::File;
use std::io::{self, BufWriter, Read};

use anyhow::{Context, Result};
use catalog_cli::summary::apply_table_style;
use catalog_index::{ImportOptions, ImportReport, Importer, JsonLinesSink, MemorySink};
use catalog_ingest::namespaces::prefix_for;
use catalog_ingest::{CaptureMode, ElementName, RuleAction, rules};
use comfy_table::Table;
use tracing::{info, info_span};

use crate::cli::ImportArgs;

/// Result of the `import` command.
pub struct ImportOutcome {
    pub source: String,
    pub report: ImportReport,
}

pub fn run_import(args: &ImportArgs) -> Result<ImportOutcome> {
    let source = if args.reads_stdin() {
        "<stdin>".to_string()
    } else {
        args.feed.display().to_string()
    };
    let span = info_span!("import", feed = %source);
    let _guard = span.enter();

    let options = ImportOptions::new()
        .with_buffer_size(args.buffer_size)
        .with_identifier_base(args.identifier_base.clone());
    let importer = Importer::new(options);

    let input: Box<dyn Read> = if args.reads_stdin() {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&args.feed)
            .with_context(|| format!("open catalog feed {}", args.feed.display()))?;
        Box::new(file)
    };

    let report = if args.dry_run {
        let mut sink = MemorySink::new();
        let report = importer.run(input, &mut sink).context("import catalog")?;
        info!(documents = sink.documents().count(), "dry run, nothing written");
        report
    } else if let Some(path) = &args.output {
        let file = File::create(path)
            .with_context(|| format!("create output file {}", path.display()))?;
        let mut sink = JsonLinesSink::new(BufWriter::new(file));
        importer.run(input, &mut sink).context("import catalog")?
    } else {
        let mut sink = JsonLinesSink::new(BufWriter::new(io::stdout().lock()));
        importer.run(input, &mut sink).context("import catalog")?
    };

    Ok(ImportOutcome { source, report })
}

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Context", "Element", "Source", "Field"]);
    apply_table_style(&mut table);
    for rule in rules() {
        let element = display_name(&rule.element);
        match rule.action {
            RuleAction::Capture(capture) => {
                table.add_row(vec![
                    rule.context.to_string(),
                    element,
                    source_label(capture.mode),
                    capture.field.to_string(),
                ]);
            }
            RuleAction::Exclude(scoped) => {
                for inner in scoped {
                    table.add_row(vec![
                        rule.context.to_string(),
                        format!("{element} / {}", display_name(&inner.element)),
                        source_label(inner.capture.mode),
                        inner.capture.field.to_string(),
                    ]);
                }
            }
        }
    }
    println!("{table}");
    Ok(())
}

fn display_name(element: &ElementName) -> String {
    match prefix_for(element.namespace) {
        Some(prefix) => format!("{prefix}:{}", element.local_name),
        None => format!("{{{}}}{}", element.namespace, element.local_name),
    }
}

fn source_label(mode: CaptureMode) -> String {
    match mode {
        CaptureMode::Text => "text".to_string(),
        CaptureMode::Attribute(name) => format!("@{name}"),
    }
}
