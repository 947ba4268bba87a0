//! Command-line interface
//!
//! Supports:
//! - Looking up the subword boundary reached from an offset
//! - Walking a file with a subword command, printing every caret stop
//! - Classifying characters

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ropey::Rope;
use serde::Serialize;

use crate::classify::{classify, Category};
use crate::config::{OutputFormat, SubwordConfig};
use crate::editable::{SubwordCommand, SubwordEditor};
use crate::navigator::NavigatorKind;
use crate::search::SubwordNavigation;

/// Subword boundary navigation for identifier-like text
#[derive(Parser, Debug)]
#[command(name = "subword", version, about = "Subword boundary navigation")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommand,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use Rust syntax structure for enclosing spans
    #[arg(long, global = true)]
    pub syntax: bool,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Print the subword boundary reached from an offset
    Boundary {
        /// File to read (`-` for stdin)
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Character offset to search from
        #[arg(long, value_name = "N")]
        offset: usize,

        /// Search toward the start of the text
        #[arg(long)]
        backward: bool,
    },

    /// Repeatedly run a subword command and print every caret stop
    Walk {
        /// File to read (`-` for stdin)
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Initial caret offset
        #[arg(long, value_name = "N", default_value_t = 0)]
        from: usize,

        /// Command to repeat (e.g. subword-next, subword-delete-previous)
        #[arg(long, default_value = "subword-next")]
        command: SubwordCommand,

        /// Stop after N commands
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Print the category of each character in TEXT
    Classify {
        #[arg(value_name = "TEXT")]
        text: String,
    },
}

/// One caret stop produced by `walk`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stop {
    pub caret: usize,
    pub anchor: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<String>,
}

/// Settings resolved from CLI flags layered over the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    pub output: OutputFormat,
    pub navigator: NavigatorKind,
}

impl CliArgs {
    /// Flags override config values
    pub fn settings(&self, config: &SubwordConfig) -> RunSettings {
        RunSettings {
            output: if self.json {
                OutputFormat::Json
            } else {
                config.output
            },
            navigator: if self.syntax {
                NavigatorKind::Syntax
            } else {
                config.navigator
            },
        }
    }

    /// Execute the command, writing results to `out`
    pub fn run(self, config: &SubwordConfig, out: &mut impl Write) -> Result<()> {
        let settings = self.settings(config);

        match self.command {
            CliCommand::Boundary {
                path,
                offset,
                backward,
            } => {
                let rope = read_rope(&path)?;
                anyhow::ensure!(
                    offset <= rope.len_chars(),
                    "Offset {} is past the end of the text ({} chars)",
                    offset,
                    rope.len_chars()
                );
                let boundary = settings
                    .navigator
                    .build(&rope)
                    .subword_boundary(offset, !backward);
                tracing::info!(offset, backward, ?boundary, "Boundary lookup");

                match settings.output {
                    OutputFormat::Json => {
                        serde_json::to_writer(&mut *out, &serde_json::json!({
                            "offset": offset,
                            "forward": !backward,
                            "boundary": boundary,
                        }))?;
                        writeln!(out)?;
                    }
                    OutputFormat::Plain => match boundary {
                        Some(pos) => writeln!(out, "{}", pos)?,
                        None => writeln!(out, "none")?,
                    },
                }
            }
            CliCommand::Walk {
                path,
                from,
                command,
                limit,
            } => {
                let rope = read_rope(&path)?;
                let mut editor = SubwordEditor::from_rope(rope).with_navigator(settings.navigator);
                editor.set_caret(from);
                let stops = walk(&mut editor, command, limit);

                match settings.output {
                    OutputFormat::Json => {
                        serde_json::to_writer(&mut *out, &stops)?;
                        writeln!(out)?;
                    }
                    OutputFormat::Plain => {
                        for stop in &stops {
                            match &stop.deleted {
                                Some(text) => writeln!(out, "{}\t{:?}", stop.caret, text)?,
                                None if stop.anchor != stop.caret => {
                                    writeln!(out, "{}\t{}", stop.anchor, stop.caret)?
                                }
                                None => writeln!(out, "{}", stop.caret)?,
                            }
                        }
                    }
                }
            }
            CliCommand::Classify { text } => {
                let categories: Vec<(char, Category)> =
                    text.chars().map(|ch| (ch, classify(ch))).collect();

                match settings.output {
                    OutputFormat::Json => {
                        let names: Vec<String> = categories
                            .iter()
                            .map(|(_, category)| format!("{:?}", category))
                            .collect();
                        serde_json::to_writer(&mut *out, &names)?;
                        writeln!(out)?;
                    }
                    OutputFormat::Plain => {
                        for (ch, category) in categories {
                            writeln!(out, "{:?}\t{:?}", ch, category)?;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

/// Run `command` until the caret stops moving (or nothing is left to
/// delete), or `limit` commands have run.
pub fn walk(editor: &mut SubwordEditor, command: SubwordCommand, limit: Option<usize>) -> Vec<Stop> {
    let mut stops = Vec::new();
    let max = limit.unwrap_or(usize::MAX);

    while stops.len() < max {
        let before = editor.selection();
        let deleted = editor.execute(command);

        let progressed = match &deleted {
            Some(text) => !text.is_empty(),
            None => editor.selection() != before,
        };
        if !progressed {
            break;
        }

        let selection = editor.selection();
        stops.push(Stop {
            caret: selection.head,
            anchor: selection.anchor,
            deleted,
        });
    }

    stops
}

fn read_rope(path: &Path) -> Result<Rope> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        return Ok(Rope::from_str(&content));
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Rope::from_str(&content))
}
