//! @ai:module:intent Interactive session loop tying input, aggregation and history together
//! @ai:module:layer application
//! @ai:module:public_api Session
//! @ai:module:depends_on input, stats, history, display
//! @ai:module:stateless false

use crate::config::Pace;
use crate::display::Presenter;
use crate::error::{Error, Result};
use crate::history::HistoryStore;
use crate::input::{collect_number_set, LineReader, MenuChoice, NextStep};
use crate::stats::{StatsAggregator, StatsAggregatorTrait, SET_SIZE};
use std::io::BufRead;

/// @ai:intent One run of the terminal; owns the history for its lifetime
pub struct Session<R: BufRead, P: Presenter, A: StatsAggregatorTrait = StatsAggregator> {
    reader: LineReader<R>,
    presenter: P,
    aggregator: A,
    history: HistoryStore,
}

impl<R: BufRead, P: Presenter> Session<R, P> {
    /// @ai:intent Create a session with the default aggregator and empty history
    /// @ai:effects pure
    pub fn new(input: R, presenter: P) -> Self {
        Self::with_aggregator(input, presenter, StatsAggregator::new())
    }
}

impl<R: BufRead, P: Presenter, A: StatsAggregatorTrait> Session<R, P, A> {
    /// @ai:intent Create a session with a custom aggregator
    /// @ai:effects pure
    pub fn with_aggregator(input: R, presenter: P, aggregator: A) -> Self {
        Self {
            reader: LineReader::new(input),
            presenter,
            aggregator,
            history: HistoryStore::new(),
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Consume the session, returning its history and presenter.
    pub fn into_parts(self) -> (HistoryStore, P) {
        (self.history, self.presenter)
    }

    /// @ai:intent Run the main menu until the user exits or input closes
    /// @ai:effects io, state:write
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("session started");

        match self.main_menu() {
            Err(Error::InputClosed) => {
                tracing::info!(sessions = self.history.len(), "input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu(&mut self) -> Result<()> {
        loop {
            self.presenter.header("MAIN MENU")?;
            self.presenter.line("Select an option:")?;
            self.presenter.line("  1. Analyze Numbers")?;
            self.presenter.line("  2. View History")?;
            self.presenter.line("  3. Exit")?;
            self.presenter.prompt("\n➡ Enter your choice [1-3]: ")?;

            let choice = self.reader.read_line()?;

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::Analyze) => self.analyze()?,
                Some(MenuChoice::History) => self.show_history()?,
                Some(MenuChoice::Exit) => {
                    self.presenter.header("Thank You!")?;
                    self.presenter
                        .line("💻 Exiting the Number Processing Terminal. See you next time!")?;
                    tracing::info!(sessions = self.history.len(), "session finished");
                    return Ok(());
                }
                None => {
                    tracing::warn!(choice = %choice, "invalid main menu choice");
                    self.presenter.line("")?;
                    self.presenter
                        .error("Invalid choice. Please select a valid option.")?;
                    self.presenter.pause(Pace::Error);
                }
            }
        }
    }

    /// @ai:intent Collect, aggregate, display and record number sets until the user returns
    /// @ai:effects io, state:write
    fn analyze(&mut self) -> Result<()> {
        loop {
            self.presenter.header("Welcome to the Digital Processor")?;
            self.presenter
                .line(&format!("🔢 Input {} numbers to analyze:", SET_SIZE))?;

            let numbers = collect_number_set(&mut self.reader, &mut self.presenter)?;

            self.presenter.loader("Processing numbers")?;
            let stats = self.aggregator.aggregate(&numbers);

            self.presenter.header("Processing Complete")?;
            self.presenter.line("📜 Results Summary:")?;
            self.presenter.stats(&stats)?;
            self.presenter.rule()?;

            self.history.record(stats);
            tracing::debug!(sessions = self.history.len(), "recorded session");

            self.presenter.line("\n🔄 Would you like to:")?;
            self.presenter.line("  1. Input another set of numbers")?;
            self.presenter.line("  2. Return to the Main Menu")?;
            self.presenter.prompt("➡ Enter your choice [1-2]: ")?;

            let choice = self.reader.read_line()?;

            match NextStep::parse(&choice) {
                Some(NextStep::Repeat) => self.presenter.loader("Reloading for new input")?,
                Some(NextStep::Return) => {
                    self.presenter.line("Returning to Main Menu...")?;
                    self.presenter.pause(Pace::Notice);
                    return Ok(());
                }
                None => {
                    tracing::warn!(choice = %choice, "invalid post-analysis choice");
                    self.presenter
                        .error("Invalid choice. Returning to Main Menu.")?;
                    self.presenter.pause(Pace::Notice);
                    return Ok(());
                }
            }
        }
    }

    /// @ai:intent Show every recorded session in order
    /// @ai:effects io
    fn show_history(&mut self) -> Result<()> {
        self.presenter.header("📜 History of Sessions")?;

        if self.history.is_empty() {
            self.presenter
                .line("No previous sessions found. Start analyzing numbers!")?;
        } else {
            for (number, stats) in self.history.iter() {
                self.presenter.line(&format!("Session {}:", number))?;
                self.presenter.stats(stats)?;
                self.presenter.rule()?;
                self.presenter.pause(Pace::SessionGap);
            }
        }

        self.presenter
            .prompt("\nPress Enter to return to the main menu...")?;
        self.reader.read_line()?;
        Ok(())
    }
}
