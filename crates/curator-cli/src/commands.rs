//! Subcommand implementations. Output goes to the given writer; logs go to
//! stderr through tracing.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use curator_archive::{read_report, write_report, BatchScanner, MovePlan};
use curator_classifier::ClassifierEngine;
use curator_core::{Action, CuratorConfig, Topic};

use crate::cli::Commands;

pub fn dispatch<W: Write>(command: Commands, config: &CuratorConfig, out: &mut W) -> Result<()> {
    match command {
        Commands::Classify {
            file,
            topic,
            explain,
        } => classify(config, &file, topic.as_deref(), explain, out),
        Commands::Scan {
            dir,
            output,
            sequential,
        } => scan(config, dir, output, sequential, out),
        Commands::Plan { report } => plan(config, report, out),
        Commands::Topics => topics(config, out),
        Commands::CheckConfig => check_config(config, out),
    }
}

fn scanner(config: &CuratorConfig) -> Result<BatchScanner> {
    BatchScanner::from_config(config).context("building classifier from configuration")
}

pub fn classify<W: Write>(
    config: &CuratorConfig,
    file: &Path,
    topic: Option<&str>,
    explain: bool,
    out: &mut W,
) -> Result<()> {
    let scanner = scanner(config)?;
    let current = topic
        .map(Topic::new)
        .transpose()
        .context("invalid --topic")?;
    let outcome = scanner
        .classify_file_as(file, current.as_ref())
        .with_context(|| format!("classifying {}", file.display()))?;

    writeln!(out, "{}", outcome.record())?;
    if explain {
        if let Some(author) = &outcome.author {
            writeln!(out, "  author: {author}")?;
        }
        for hit in &outcome.hits {
            writeln!(
                out,
                "  {} +{} {} /{}/ matched {:?}",
                hit.topic, hit.weight, hit.field, hit.pattern, hit.matched
            )?;
        }
    }
    Ok(())
}

pub fn scan<W: Write>(
    config: &CuratorConfig,
    dir: Option<PathBuf>,
    output: Option<PathBuf>,
    sequential: bool,
    out: &mut W,
) -> Result<()> {
    let dir = dir.unwrap_or_else(|| PathBuf::from(&config.archive.posts_dir));
    let output = output.unwrap_or_else(|| PathBuf::from(&config.archive.report_path));

    let mut scanner = scanner(config)?;
    if sequential {
        scanner = scanner.with_parallel(false);
    }
    let report = scanner
        .scan(&dir)
        .with_context(|| format!("scanning {}", dir.display()))?;
    write_report(&output, &report.records())
        .with_context(|| format!("writing report {}", output.display()))?;

    for entry in &report.tally {
        writeln!(out, "{:<4} {:>5}  {}", entry.topic, entry.count, entry.name)?;
    }
    writeln!(
        out,
        "{} classified ({} keep, {} move, {} eval), {} skipped; report written to {}",
        report.outcomes.len(),
        report.count(Action::Keep),
        report.count(Action::Move),
        report.count(Action::Eval),
        report.skipped.len(),
        output.display()
    )?;
    for skipped in &report.skipped {
        writeln!(out, "skipped {}: {}", skipped.file_name, skipped.reason)?;
    }
    Ok(())
}

pub fn plan<W: Write>(config: &CuratorConfig, report: Option<PathBuf>, out: &mut W) -> Result<()> {
    let path = report.unwrap_or_else(|| PathBuf::from(&config.archive.report_path));
    let parsed = read_report(&path).with_context(|| format!("reading report {}", path.display()))?;
    for malformed in &parsed.malformed {
        tracing::warn!(error = %malformed, "ignoring report line");
    }

    let engine = ClassifierEngine::from_config(&config.classifier)
        .context("building classifier from configuration")?;
    let plan = MovePlan::from_records(&parsed.records, engine.table());
    for request in &plan.requests {
        writeln!(out, "{request}")?;
    }
    for rejected in &plan.rejected {
        tracing::warn!(post = %rejected.post_id, reason = %rejected.reason, "move rejected");
    }
    writeln!(
        out,
        "{} moves planned, {} rejected, {} malformed lines",
        plan.len(),
        plan.rejected.len(),
        parsed.malformed.len()
    )?;
    Ok(())
}

pub fn topics<W: Write>(config: &CuratorConfig, out: &mut W) -> Result<()> {
    let engine = ClassifierEngine::from_config(&config.classifier)
        .context("building classifier from configuration")?;
    let table = engine.table();
    for descriptor in table.topics() {
        writeln!(
            out,
            "{:<4} {:>3} matchers  {}",
            descriptor.topic,
            table.matchers_for(&descriptor.topic).count(),
            descriptor.name
        )?;
    }
    Ok(())
}

pub fn check_config<W: Write>(config: &CuratorConfig, out: &mut W) -> Result<()> {
    let scanner = scanner(config)?;
    let table = scanner.engine().table();
    if table.is_empty() {
        bail!("configuration yields no matchers");
    }
    let weights = scanner.engine().weights();
    writeln!(
        out,
        "configuration ok: {} topics, {} matchers, weights title={} body={}",
        table.len(),
        table.matcher_count(),
        weights.title,
        weights.body
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::{fixture_path, list_fixtures};

    fn run(command: Commands, config: &CuratorConfig) -> String {
        let mut out = Vec::new();
        dispatch(command, config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn classify_prints_record_and_evidence() {
        let file = fixture_path("posts/2020-07-15-tap003-flashsystem-9100.html");
        let text = run(
            Commands::Classify {
                file,
                topic: None,
                explain: true,
            },
            &CuratorConfig::default(),
        );
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("MOVE fla 8 "));
        assert_eq!(lines.next(), Some("  author: Tony Pearson"));
        assert!(text.contains("fla +3 title /NVMe/"));
    }

    #[test]
    fn scan_then_plan() {
        let posts = tempfile::tempdir().unwrap();
        for path in list_fixtures("posts", "html") {
            std::fs::copy(&path, posts.path().join(path.file_name().unwrap())).unwrap();
        }
        let report = posts.path().join("out.txt");
        let config = CuratorConfig::default();

        let text = run(
            Commands::Scan {
                dir: Some(posts.path().to_path_buf()),
                output: Some(report.clone()),
                sequential: true,
            },
            &config,
        );
        assert!(text.contains("3 classified (1 keep, 1 move, 1 eval), 1 skipped"));
        assert!(text.contains("skipped 2021-02-01-misc.html"));

        let text = run(Commands::Plan { report: Some(report) }, &config);
        assert!(text.contains("-> Flash Storage (fla)"));
        assert!(text.ends_with("1 moves planned, 0 rejected, 0 malformed lines\n"));
    }

    #[test]
    fn topics_lists_builtin_table() {
        let text = run(Commands::Topics, &CuratorConfig::default());
        assert_eq!(text.lines().count(), 7);
        assert!(text.lines().next().unwrap().starts_with("dpr"));
    }

    #[test]
    fn check_config_rejects_bad_pattern() {
        let config = CuratorConfig::from_toml(
            r#"
            [[classifier.topics]]
            key = "fla"
            patterns = ["(unclosed"]
            "#,
        )
        .unwrap();
        let mut out = Vec::new();
        let err = dispatch(Commands::CheckConfig, &config, &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("(unclosed"));
    }

    #[test]
    fn check_config_accepts_defaults() {
        let text = run(Commands::CheckConfig, &CuratorConfig::default());
        assert!(text.starts_with("configuration ok: 7 topics"));
    }
}
