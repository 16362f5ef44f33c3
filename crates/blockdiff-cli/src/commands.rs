use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use tracing::debug;

use blockdiff_sdk::{
    ContentBlock, Decoration, DelimiterKind, DiffOp, DiffScript, DiffSide, EngineConfig,
    StructuralDiff, TextDiff,
};
use blockdiff_structure::diff_block_structure;
use blockdiff_words::diff_with_config;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Diff(args) => cmd_diff(args, cli.format),
        Command::Words(args) => cmd_words(args, cli.format),
        Command::Blocks(args) => cmd_blocks(args, cli.format),
    }
}

fn cmd_diff(args: DiffArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref(), args.lines)?;
    let before = read_text(&args.before)?;
    let after = read_text(&args.after)?;
    let report = TextDiff::compute(&before, &after, &config)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report.summary())?);
        }
        OutputFormat::Text => {
            let sides: &[DiffSide] = match args.side {
                SideArg::Before => &[DiffSide::Before],
                SideArg::After => &[DiffSide::After],
                SideArg::Both => &[DiffSide::Before, DiffSide::After],
            };
            for &side in sides {
                if args.side == SideArg::Both {
                    println!("{}", side_header(side));
                }
                print!("{}", render_side(&report, side));
            }
        }
    }
    Ok(())
}

fn cmd_words(args: WordsArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref(), args.lines)?;
    let before = read_text(&args.before)?;
    let after = read_text(&args.after)?;
    let script = diff_with_config(&before, &after, &config.words)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&script)?),
        OutputFormat::Text => print!("{}", render_script(&script)),
    }
    Ok(())
}

fn cmd_blocks(args: BlocksArgs, format: OutputFormat) -> anyhow::Result<()> {
    let before = parse_block_file(&read_text(&args.before)?)
        .with_context(|| format!("invalid block file {}", args.before.display()))?;
    let after = parse_block_file(&read_text(&args.after)?)
        .with_context(|| format!("invalid block file {}", args.after.display()))?;
    let structure = diff_block_structure(&before, &after)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&structure)?),
        OutputFormat::Text => print!("{}", render_structure(&structure)),
    }
    Ok(())
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_config(path: Option<&Path>, lines: bool) -> anyhow::Result<EngineConfig> {
    let mut config = match path {
        Some(path) => EngineConfig::from_toml_str(&read_text(path)?)
            .with_context(|| format!("invalid config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if lines {
        config.words.delimiter = DelimiterKind::Newline;
    }
    debug!(config = ?config, "configuration loaded");
    Ok(config)
}

/// Parse `key<TAB>text` lines into blocks. Blank lines are skipped.
fn parse_block_file(text: &str) -> anyhow::Result<Vec<ContentBlock>> {
    let mut blocks = Vec::new();
    for (n, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let Some((key, body)) = line.split_once('\t') else {
            bail!("line {}: expected `key<TAB>text`", n + 1);
        };
        if key.is_empty() {
            bail!("line {}: empty block key", n + 1);
        }
        blocks.push(ContentBlock::new(key, body));
    }
    Ok(blocks)
}

fn side_header(side: DiffSide) -> String {
    match side {
        DiffSide::Before => "--- before".red().bold().to_string(),
        DiffSide::After => "+++ after".green().bold().to_string(),
    }
}

/// One line per block of `side`.
fn render_side(report: &TextDiff, side: DiffSide) -> String {
    let decorations = report.decorations(side);
    let mut rest = decorations.as_slice();
    let mut out = String::new();
    for block in report.blocks(side) {
        let count = rest.iter().take_while(|d| d.key == block.key).count();
        let (own, tail) = rest.split_at(count);
        out.push_str(&render_block(&block.text, own));
        out.push('\n');
        rest = tail;
    }
    out
}

/// Paint `text` with its decorations, which must be ordered and disjoint.
fn render_block(text: &str, decorations: &[Decoration]) -> String {
    let chars: Vec<char> = text.chars().collect();
    let slice = |start: usize, end: usize| -> String {
        chars[start.min(chars.len())..end.min(chars.len())].iter().collect()
    };

    let mut out = String::new();
    let mut pos = 0;
    for d in decorations {
        if d.range.start > pos {
            out.push_str(&slice(pos, d.range.start));
        }
        out.push_str(&paint(d.op, &slice(d.range.start, d.range.end)));
        pos = d.range.end;
    }
    if pos < chars.len() {
        out.push_str(&slice(pos, chars.len()));
    }
    out
}

fn paint(op: DiffOp, text: &str) -> String {
    match op {
        DiffOp::Equal => text.to_string(),
        DiffOp::Insert => text.green().to_string(),
        DiffOp::Delete => text.red().strikethrough().to_string(),
    }
}

fn render_script(script: &DiffScript) -> String {
    let mut out = String::new();
    for entry in script {
        let op = format!("{:>6}", entry.op.as_str());
        let op = match entry.op {
            DiffOp::Equal => op.dimmed(),
            DiffOp::Insert => op.green(),
            DiffOp::Delete => op.red(),
        };
        out.push_str(&format!("{} {:?}\n", op, entry.text));
    }
    out
}

fn render_structure(structure: &StructuralDiff) -> String {
    if structure.is_empty() {
        return "No structural changes.\n".to_string();
    }
    let mut out = String::new();
    for (sign, key) in structure.signed() {
        let marker = format!("{sign:+}");
        let marker = if sign > 0 { marker.green() } else { marker.red() };
        out.push_str(&format!("{} {}\n", marker, key));
    }
    out
}
