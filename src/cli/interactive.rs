use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::cli::command::{self, Command};
use crate::config::Config;
use crate::display;
use crate::error::{Result, WriterError};
use crate::models::Record;
use crate::parser::{self, DEFAULT_LIMIT};
use crate::renderer::Renderer;

/// Whether the session keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Terminated,
}

/// Run an interactive session on stdin/stdout
pub fn run(config: &Config) -> Result<()> {
    let styled = display::should_use_colors(config.display.color);
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    Session::new(config, stdin, stdout, styled).run()
}

/// Line-oriented editing session over one record
pub struct Session<'a, R, W> {
    config: &'a Config,
    input: R,
    out: W,
    record: Record,
    styled: bool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(config: &'a Config, input: R, out: W, styled: bool) -> Self {
        Self {
            config,
            input,
            out,
            record: Record::new(config.variant),
            styled,
        }
    }

    #[allow(dead_code)]
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Read and dispatch lines until quit, `:x`, or end of input.
    ///
    /// Unknown commands are always reported and skipped. A bad argument is
    /// reported and skipped only when the config recovers from errors;
    /// otherwise it ends the session with the error.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "Interactive mode!")?;
        self.out.flush()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input, leaving interactive mode");
                break;
            }

            match self.dispatch(&line) {
                Ok(State::Running) => {}
                Ok(State::Terminated) => break,
                Err(e @ WriterError::UnknownCommand(_)) => {
                    writeln!(self.out, "{}", e)?;
                }
                Err(e) if e.is_input_error() && self.config.recovers_from_errors() => {
                    info!("Rejected input {:?}: {}", line.trim(), e);
                    writeln!(self.out, "{}", e)?;
                }
                Err(e) => return Err(e),
            }
            self.out.flush()?;
        }

        Ok(())
    }

    fn dispatch(&mut self, line: &str) -> Result<State> {
        let tokens = parser::split_command(line, DEFAULT_LIMIT);
        let Some(&token) = tokens.first() else {
            return Ok(State::Running);
        };
        let argument = tokens.get(1).copied();

        let command = Command::parse(token, self.config.variant)?;
        debug!(?command, ?argument, "Dispatching command");

        match command {
            Command::Quit => {
                writeln!(self.out, "Quitting!")?;
                Ok(State::Terminated)
            }
            Command::Write => {
                Renderer::new(&self.record).write(&mut self.out)?;
                Ok(State::Running)
            }
            Command::Exit => {
                Renderer::new(&self.record).write(&mut self.out)?;
                Ok(State::Terminated)
            }
            Command::Help => {
                let help = command::help_text(self.config.variant);
                write!(
                    self.out,
                    "{}",
                    display::format_markdown(&help, self.styled)
                )?;
                Ok(State::Running)
            }
            Command::Set(field) => {
                self.record.set(field, argument)?;
                Ok(State::Running)
            }
        }
    }
}
