use std::io::Read;
use std::path::Path;

use anyhow::Context;
use coalesce_merge::{IntervalMerger, InvalidInput, MergeConfig, MergeError};
use coalesce_types::{Interval, IntervalSet};
use colored::Colorize;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Merge(args) => cmd_merge(&args, config, cli.format),
        Command::Check(args) => cmd_check(&args, cli.format),
    }
}

fn cmd_merge(args: &InputArgs, config: MergeConfig, format: OutputFormat) -> anyhow::Result<()> {
    let pairs = parse_pairs(&read_input(args.path().map(|p| p.as_path()))?)?;
    let merged = IntervalMerger::new(config).merge_pairs(pairs)?;
    println!("{}", render(&merged, format)?);
    Ok(())
}

fn cmd_check(args: &InputArgs, format: OutputFormat) -> anyhow::Result<()> {
    let pairs = parse_pairs(&read_input(args.path().map(|p| p.as_path()))?)?;
    let set = to_set(pairs)?;
    if set.is_empty() {
        return Err(MergeError::from(InvalidInput::Empty).into());
    }
    let normalized = set.is_normalized();
    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "normalized": normalized, "intervals": set.len() })
        ),
        OutputFormat::Text if normalized => {
            println!("{} Already merged ({} intervals)", "✓".green().bold(), set.len())
        }
        OutputFormat::Text => println!("{} Not merged ({} intervals)", "✗".red().bold(), set.len()),
    }
    if !normalized {
        anyhow::bail!("interval set is not merged");
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<MergeConfig> {
    let Some(path) = path else {
        return Ok(MergeConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = toml::from_str(&raw)
        .with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading input {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("reading input from stdin")?;
            Ok(raw)
        }
    }
}

fn parse_pairs(raw: &str) -> anyhow::Result<Vec<(i64, i64)>> {
    serde_json::from_str(raw).context("expected a JSON array of [start, end] pairs")
}

fn to_set(pairs: Vec<(i64, i64)>) -> anyhow::Result<IntervalSet<i64>> {
    pairs
        .into_iter()
        .enumerate()
        .map(|(index, pair)| {
            Interval::try_from(pair).with_context(|| format!("interval {index}"))
        })
        .collect()
}

fn render(set: &IntervalSet<i64>, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(set)?,
        OutputFormat::Text => set
            .iter()
            .map(|iv| iv.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::ffi::OsString;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn input_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    fn input_args(file: &NamedTempFile) -> InputArgs {
        InputArgs {
            input: Some(file.path().to_path_buf()),
        }
    }

    fn merge_error(err: &anyhow::Error) -> Option<&MergeError> {
        err.downcast_ref::<MergeError>()
    }

    #[test]
    fn parse_pairs_accepts_nested_arrays() {
        let pairs = parse_pairs("[[1,3],[2,6],[8,10],[15,18]]").unwrap();
        assert_eq!(pairs, vec![(1, 3), (2, 6), (8, 10), (15, 18)]);
    }

    #[test]
    fn parse_pairs_rejects_garbage() {
        assert!(parse_pairs("[1, 2, 3]").is_err());
        assert!(parse_pairs("not json").is_err());
    }

    #[test]
    fn render_text_and_json() {
        let set = IntervalMerger::default()
            .merge_pairs(vec![(1, 3), (2, 6), (8, 10)])
            .unwrap();
        assert_eq!(render(&set, OutputFormat::Text).unwrap(), "[1, 6]\n[8, 10]");
        assert_eq!(render(&set, OutputFormat::Json).unwrap(), "[[1,6],[8,10]]");
    }

    #[test]
    fn to_set_reports_reversed_index() {
        let err = to_set(vec![(1, 2), (5, 4)]).unwrap_err();
        assert_eq!(err.to_string(), "interval 1");
        assert!(to_set(vec![(1, 2), (4, 5)]).unwrap().is_normalized());
    }

    #[test]
    fn config_defaults_without_file() {
        assert_eq!(load_config(None).unwrap(), MergeConfig::default());
    }

    #[test]
    fn config_loads_from_toml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "max_intervals = 3").unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config, MergeConfig::with_max_intervals(3));
    }

    #[test]
    fn read_input_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[[1,4],[4,5]]").unwrap();
        let raw = read_input(Some(file.path())).unwrap();
        assert_eq!(parse_pairs(&raw).unwrap(), vec![(1, 4), (4, 5)]);
    }

    // -----------------------------------------------------------------------
    // Subcommands
    // -----------------------------------------------------------------------

    #[test]
    fn check_fails_on_touching_intervals() {
        let file = input_file("[[1,4],[4,5]]");
        let err = cmd_check(&input_args(&file), OutputFormat::Text).unwrap_err();
        assert_eq!(err.to_string(), "interval set is not merged");
    }

    #[test]
    fn check_passes_on_merged_intervals() {
        let file = input_file("[[1,3],[5,7]]");
        assert!(cmd_check(&input_args(&file), OutputFormat::Text).is_ok());
        assert!(cmd_check(&input_args(&file), OutputFormat::Json).is_ok());
    }

    #[test]
    fn check_and_merge_both_reject_empty_input() {
        let file = input_file("[]");
        let empty = MergeError::InvalidInput(InvalidInput::Empty);

        let err = cmd_check(&input_args(&file), OutputFormat::Text).unwrap_err();
        assert_eq!(merge_error(&err), Some(&empty));

        let err = cmd_merge(&input_args(&file), MergeConfig::default(), OutputFormat::Text)
            .unwrap_err();
        assert_eq!(merge_error(&err), Some(&empty));
    }

    #[test]
    fn merge_succeeds_on_valid_input() {
        let file = input_file("[[1,3],[2,6],[8,10],[15,18]]");
        assert!(cmd_merge(&input_args(&file), MergeConfig::default(), OutputFormat::Json).is_ok());
    }

    #[test]
    fn merge_applies_config_limit() {
        let mut config = NamedTempFile::new().unwrap();
        writeln!(config, "max_intervals = 1").unwrap();
        let input = input_file("[[1,3],[2,6]]");

        let argv: Vec<OsString> = vec![
            "coalesce".into(),
            "--config".into(),
            config.path().into(),
            "merge".into(),
            input.path().into(),
        ];
        let cli = Cli::try_parse_from(argv).unwrap();
        let err = run_command(cli).unwrap_err();
        assert_eq!(
            merge_error(&err),
            Some(&MergeError::InvalidInput(InvalidInput::TooManyIntervals {
                limit: 1,
                actual: 2,
            }))
        );
    }
}
