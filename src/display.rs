//! @ai:module:intent Render menus, prompts and results to the terminal
//! @ai:module:layer presentation
//! @ai:module:public_api Presenter, TerminalPresenter, stats_fields, format_field
//! @ai:module:depends_on config, stats

use crate::config::{DisplayConfig, OutputFormat, Pace};
use crate::error::Result;
use crate::stats::SessionStats;
use colored::{ColoredString, Colorize};
use std::io::Write;

const WIDTH: usize = 60;
const BANNER: &str = "⚡ NUMBER PROCESSING TERMINAL ⚡";
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";
const INPUT_ERROR_INDENT: &str = "     ";

/// @ai:intent Pluggable presentation strategy used by the session loop
pub trait Presenter {
    /// @ai:intent Clear the screen and draw the banner with a title
    fn header(&mut self, title: &str) -> Result<()>;

    /// @ai:intent Print a plain line
    fn line(&mut self, text: &str) -> Result<()>;

    /// @ai:intent Report a recoverable error to the user
    fn error(&mut self, text: &str) -> Result<()>;

    /// @ai:intent Report a rejected value, indented under its input prompt
    fn input_error(&mut self, text: &str) -> Result<()>;

    /// @ai:intent Print a prompt without a trailing newline
    fn prompt(&mut self, text: &str) -> Result<()>;

    /// @ai:intent Show a short progress animation
    fn loader(&mut self, message: &str) -> Result<()>;

    /// @ai:intent Print the summary of one session
    fn stats(&mut self, stats: &SessionStats) -> Result<()>;

    /// @ai:intent Print a horizontal separator
    fn rule(&mut self) -> Result<()>;

    /// @ai:intent Wait for a cosmetic pause
    /// @ai:effects time
    fn pause(&mut self, pace: Pace);
}

/// @ai:intent Labelled values shown for a session, in display order
/// @ai:effects pure
pub fn stats_fields(stats: &SessionStats) -> [(&'static str, String); 6] {
    [
        ("Numbers Entered:", stats.numbers.to_string()),
        ("Total Sum:", stats.total_sum.to_string()),
        ("Even Count:", stats.even_count.to_string()),
        ("Sum of Evens:", stats.even_sum.to_string()),
        ("Odd Count:", stats.odd_count.to_string()),
        ("Sum of Odds:", stats.odd_sum.to_string()),
    ]
}

/// @ai:intent Format one labelled result line
/// @ai:effects pure
pub fn format_field(label: &str, value: &str) -> String {
    format!("  ➡ {:<20} {}", label, value)
}

/// @ai:intent Presenter writing ANSI text to any writer
pub struct TerminalPresenter<W: Write> {
    out: W,
    config: DisplayConfig,
}

impl<W: Write> TerminalPresenter<W> {
    /// @ai:intent Create a presenter over a writer
    /// @ai:effects pure
    pub fn new(out: W, config: DisplayConfig) -> Self {
        Self { out, config }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn styled(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.config.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn stats_text(&mut self, stats: &SessionStats) -> Result<()> {
        for (label, value) in stats_fields(stats) {
            self.pause(Pace::Field);
            writeln!(self.out, "{}", format_field(label, &value))?;
            self.out.flush()?;
        }
        Ok(())
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn header(&mut self, title: &str) -> Result<()> {
        if self.config.clear_screen {
            write!(self.out, "{}", CLEAR_SCREEN)?;
        }

        let rule = "=".repeat(WIDTH);
        let banner = self.styled(&format!("{:^width$}", BANNER, width = WIDTH), |s| {
            s.bold().yellow()
        });

        writeln!(self.out, "\n{}", rule)?;
        writeln!(self.out, "{}", banner)?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "\n{:^width$}\n", title, width = WIDTH)?;
        writeln!(self.out, "{}", "-".repeat(WIDTH))?;
        self.out.flush()?;
        Ok(())
    }

    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    fn error(&mut self, text: &str) -> Result<()> {
        let tag = self.styled("[❌ ERROR]", |s| s.red().bold());
        writeln!(self.out, "{} {}", tag, text)?;
        self.out.flush()?;
        Ok(())
    }

    fn input_error(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{}", INPUT_ERROR_INDENT)?;
        self.error(text)
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    fn loader(&mut self, message: &str) -> Result<()> {
        for step in 1..=3 {
            write!(self.out, "{}{}\r", message, ".".repeat(step))?;
            self.out.flush()?;
            self.pause(Pace::LoaderStep);
        }

        let done = self.styled("Done!", |s| s.green().bold());
        writeln!(self.out, "{}... {}", message, done)?;
        Ok(())
    }

    fn stats(&mut self, stats: &SessionStats) -> Result<()> {
        match self.config.format {
            OutputFormat::Text => self.stats_text(stats),
            OutputFormat::Json => {
                self.pause(Pace::Field);
                writeln!(self.out, "{}", serde_json::to_string_pretty(stats)?)?;
                Ok(())
            }
        }
    }

    fn rule(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "-".repeat(WIDTH))?;
        Ok(())
    }

    fn pause(&mut self, pace: Pace) {
        if let Some(delay) = self.config.pacing.delay_for(pace) {
            std::thread::sleep(delay);
        }
    }
}
