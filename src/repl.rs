//! Interactive loop over any line source, so tests can drive it with a
//! byte buffer instead of a terminal.

use crate::commands::{Command, HELP};
use crate::engine::Orchestrator;
use crate::postprocessing::{emoji_sentiment_scale, format_sentiment_breakdown};
use crate::session::{batch_process, default_file_name, save_session_json};
use chrono::Local;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

const ALTERNATIVE_COUNT: usize = 3;

/// Printed when the loop ends, whether by command, end of input or Ctrl-C.
pub const GOODBYE: &str = "👋 Goodbye!";

enum Flow {
    Continue,
    Quit,
}

enum Input {
    Line(String),
    /// The line was consumed but is not UTF-8.
    Unreadable,
    End,
}

pub struct Repl<R: BufRead, W: Write> {
    orchestrator: Orchestrator,
    input: R,
    output: W,
    save_dir: Option<PathBuf>,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(orchestrator: Orchestrator, input: R, output: W) -> Self {
        Self {
            orchestrator,
            input,
            output,
            save_dir: None,
        }
    }

    /// Session files go here instead of the working directory.
    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = Some(dir.into());
        self
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    /// Runs until a quit command or end of input.
    pub async fn run(&mut self) -> io::Result<()> {
        self.banner()?;

        loop {
            let line = match self.read_line("\n💭 Enter text (or command): ")? {
                Input::Line(line) => line,
                Input::Unreadable => {
                    self.unreadable()?;
                    continue;
                }
                Input::End => {
                    writeln!(self.output)?;
                    break;
                }
            };

            match self.handle(Command::parse(&line)).await? {
                Flow::Continue => continue,
                Flow::Quit => return Ok(()),
            }
        }

        writeln!(self.output, "{}", GOODBYE.green())?;
        Ok(())
    }

    fn banner(&mut self) -> io::Result<()> {
        let rule = "=".repeat(50);
        writeln!(self.output, "{}", "🎭 SASSBOT INTERACTIVE MOOD ANALYZER".cyan())?;
        writeln!(self.output, "{}", rule.cyan())?;
        writeln!(
            self.output,
            "Commands: 'help', 'scale', 'batch', 'save', 'more', 'breakdown', 'quit'"
        )?;
        writeln!(self.output, "{}", rule.cyan())
    }

    /// Reads raw bytes up to the newline so a bad line can be skipped
    /// without losing the ones after it.
    fn read_line(&mut self, prompt: &str) -> io::Result<Input> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(Input::End);
        }

        match String::from_utf8(buf) {
            Ok(line) => Ok(Input::Line(line.trim_end_matches(['\r', '\n']).to_string())),
            Err(e) => {
                debug!(error = %e, "Skipping non UTF-8 input line");
                Ok(Input::Unreadable)
            }
        }
    }

    fn unreadable(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "{}",
            "❌ Please enter valid text (input is not valid UTF-8)".red()
        )
    }

    async fn handle(&mut self, command: Command) -> io::Result<Flow> {
        debug!(?command, "REPL command");

        match command {
            Command::Quit => {
                writeln!(self.output, "{}", GOODBYE.green())?;
                return Ok(Flow::Quit);
            }
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Scale => {
                let scale = emoji_sentiment_scale(self.orchestrator.thresholds());
                writeln!(self.output, "{}", scale.yellow())?;
            }
            Command::Batch => self.batch().await?,
            Command::Save => self.save()?,
            Command::More => self.more().await?,
            Command::Breakdown => {
                let breakdown = self
                    .orchestrator
                    .last_turn()
                    .map(|turn| format_sentiment_breakdown(&turn.analysis));
                match breakdown {
                    Some(breakdown) => writeln!(self.output, "{}", breakdown)?,
                    None => self.nothing_yet()?,
                }
            }
            Command::Analyze(text) => self.analyze(&text).await?,
        }
        Ok(Flow::Continue)
    }

    async fn analyze(&mut self, text: &str) -> io::Result<()> {
        match self.orchestrator.turn(text).await {
            Ok(turn) => {
                writeln!(
                    self.output,
                    "{}",
                    format!("\n📊 {}", turn.analysis.summary()).blue()
                )?;
                writeln!(
                    self.output,
                    "{}",
                    format!("💬 {}", turn.quote.formatted_output).purple()
                )?;
                writeln!(
                    self.output,
                    "📱 Generated via: {}",
                    turn.quote.generation_method.as_str().to_uppercase()
                )
            }
            Err(e) => writeln!(
                self.output,
                "{}",
                format!("❌ Please enter valid text ({})", e).red()
            ),
        }
    }

    async fn batch(&mut self) -> io::Result<()> {
        writeln!(self.output, "Enter texts (one per line, empty line to finish):")?;

        let mut texts = Vec::new();
        loop {
            let line = match self.read_line("Text: ")? {
                Input::Line(line) => line.trim().to_string(),
                Input::Unreadable => {
                    self.unreadable()?;
                    continue;
                }
                Input::End => break,
            };
            if line.is_empty() {
                break;
            }
            texts.push(line);
        }

        if texts.is_empty() {
            return writeln!(self.output, "{}", "No texts entered".yellow());
        }

        let entries = batch_process(&mut self.orchestrator, &texts).await;
        for entry in &entries {
            match (entry.sass_quote(), entry.error()) {
                (Some(quote), _) => {
                    writeln!(self.output, "{}. {}", entry.index, quote.formatted_output)?
                }
                (None, Some(error)) => writeln!(
                    self.output,
                    "{}",
                    format!("{}. ❌ {}", entry.index, error).red()
                )?,
                (None, None) => {}
            }
        }
        Ok(())
    }

    fn save(&mut self) -> io::Result<()> {
        if self.orchestrator.session().is_empty() {
            return writeln!(self.output, "{}", "No results to save".yellow());
        }

        let path = self.save_dir.as_ref().map(|dir| {
            dir.join(default_file_name("sassbot_session", "json", Local::now()))
        });

        match save_session_json(self.orchestrator.session(), path.as_deref()) {
            Ok(path) => writeln!(
                self.output,
                "{}",
                format!("Session saved to {}", path.display()).green()
            ),
            Err(e) => writeln!(
                self.output,
                "{}",
                format!("❌ Failed to save session: {}", e).red()
            ),
        }
    }

    async fn more(&mut self) -> io::Result<()> {
        let Some(analysis) = self.orchestrator.last_turn().map(|t| t.analysis.clone()) else {
            return self.nothing_yet();
        };

        let quotes = self
            .orchestrator
            .alternatives(&analysis, ALTERNATIVE_COUNT)
            .await;
        writeln!(self.output, "\n🎭 ALTERNATIVE SASS QUOTES:")?;
        for (i, quote) in quotes.iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, quote.formatted_output)?;
        }
        Ok(())
    }

    fn nothing_yet(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "{}",
            "Nothing analyzed yet, enter some text first".yellow()
        )
    }
}
