//! Interactive browse session

use anyhow::Result;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};
use futures::future::{FutureExt, LocalBoxFuture, OptionFuture};
use poke_gallery_engine::{GalleryController, Outcome, Rejection};
use std::io::IsTerminal;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::mpsc;

use crate::commands::rejection_message;
use crate::output::OutputWriter;
use crate::renderer::TerminalRenderer;

/// One line of user input inside `browse`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    More,
    Search(String),
    Show(String),
    Close,
    List,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "" => Self::Empty,
            "more" | "m" | "next" => Self::More,
            "search" | "s" | "/" => Self::Search(rest.to_string()),
            "show" | "open" | "o" => Self::Show(rest.to_string()),
            "close" | "c" => Self::Close,
            "list" | "ls" | "l" => Self::List,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

const HELP: &[(&str, &str)] = &[
    ("more", "Load the next page"),
    ("search <name>", "Look up one pokémon by name or number"),
    ("show <n|name>", "Open the stats view of a card on screen"),
    ("close", "Close the stats view"),
    ("list", "Reprint the gallery"),
    ("help", "Show this help"),
    ("quit", "Leave the gallery"),
];

fn print_help() {
    for (command, text) in HELP {
        println!("  {:<16} {}", command.cyan(), text);
    }
}

/// Where session input comes from
enum InputSource {
    Terminal,
    Piped(Lines<BufReader<Stdin>>),
}

impl InputSource {
    fn detect() -> Self {
        if std::io::stdin().is_terminal() {
            Self::Terminal
        } else {
            Self::Piped(BufReader::new(tokio::io::stdin()).lines())
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }

    async fn next_line(&mut self) -> Result<Option<String>> {
        match self {
            Self::Terminal => {
                let line = tokio::task::spawn_blocking(|| {
                    Input::<String>::with_theme(&ColorfulTheme::default())
                        .with_prompt("gallery")
                        .allow_empty(true)
                        .interact_text()
                })
                .await??;
                Ok(Some(line))
            }
            Self::Piped(lines) => Ok(lines.next_line().await?),
        }
    }

    /// Read lines on their own task. Stops after forwarding `quit`.
    fn spawn_reader(mut self) -> mpsc::Receiver<String> {
        let (tx, rx) = mpsc::channel(INPUT_BUFFER);
        tokio::spawn(async move {
            loop {
                match self.next_line().await {
                    Ok(Some(line)) => {
                        let quit = SessionCommand::parse(&line) == SessionCommand::Quit;
                        if tx.send(line).await.is_err() || quit {
                            break;
                        }
                    }
                    Ok(None) => break,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read session input");
                        break;
                    }
                }
            }
        });
        rx
    }
}

const INPUT_BUFFER: usize = 16;

/// A page load or search the session started and has not yet reported
pub type PendingFetch<'a> = LocalBoxFuture<'a, Outcome>;

/// What the session does after one command
pub enum Step<'a> {
    Continue,
    Fetch(PendingFetch<'a>),
    Quit,
}

/// Runs the gallery until the user quits or input ends
pub struct Session<'a> {
    controller: &'a GalleryController,
    renderer: &'a TerminalRenderer,
    output: &'a OutputWriter,
}

impl<'a> Session<'a> {
    pub fn new(
        controller: &'a GalleryController,
        renderer: &'a TerminalRenderer,
        output: &'a OutputWriter,
    ) -> Self {
        Self {
            controller,
            renderer,
            output,
        }
    }

    pub async fn run(&self) -> Result<()> {
        self.output
            .info("Type `help` for commands, `quit` to leave.");

        let input = InputSource::detect();
        let overlap = input.is_terminal();
        self.drive(input.spawn_reader(), overlap).await;
        Ok(())
    }

    /// Feed input lines to the gallery, starting with the first page load.
    ///
    /// With `overlap` set, input keeps flowing while a fetch is in flight, so
    /// `show`, `close` and `list` act on the cards already on screen and a
    /// second `more` or `search` is turned away as busy. Without it each
    /// fetch settles before the next line is read.
    pub async fn drive(&self, mut lines: mpsc::Receiver<String>, overlap: bool) {
        let mut pending: Option<PendingFetch<'a>> = Some(self.page_load());

        loop {
            tokio::select! {
                Some(outcome) = OptionFuture::from(pending.as_mut()), if pending.is_some() => {
                    pending = None;
                    self.report(outcome);
                }
                line = lines.recv(), if overlap || pending.is_none() => {
                    let Some(line) = line else { break };
                    match self.dispatch(SessionCommand::parse(&line)).await {
                        Step::Continue => {}
                        Step::Quit => break,
                        Step::Fetch(fetch) if pending.is_some() => self.report(fetch.await),
                        Step::Fetch(fetch) => pending = Some(fetch),
                    }
                }
            }
        }

        if pending.is_some() {
            tracing::debug!("Session ended with a fetch in flight; abandoning it");
        }
    }

    /// Act on one command. Page loads and searches come back unstarted.
    pub async fn dispatch(&self, command: SessionCommand) -> Step<'a> {
        if !matches!(command, SessionCommand::Show(_) | SessionCommand::Empty) {
            self.controller.close_detail();
        }

        match command {
            SessionCommand::More => return Step::Fetch(self.page_load()),
            SessionCommand::Search(query) => {
                let controller = self.controller;
                return Step::Fetch(async move { controller.search(&query).await }.boxed_local());
            }
            SessionCommand::Show(key) => {
                if self.controller.open_rendered(&key).await.is_none() {
                    self.output
                        .error(&format!("No card \"{}\" in the gallery", key.trim()));
                }
            }
            SessionCommand::Close | SessionCommand::Empty => {}
            SessionCommand::List => {
                if let Err(e) = self.output.write_cards(&self.renderer.cards()) {
                    self.output.error(&e.to_string());
                }
            }
            SessionCommand::Help => print_help(),
            SessionCommand::Quit => return Step::Quit,
            SessionCommand::Unknown(verb) => {
                self.output
                    .error(&format!("Unknown command `{}`. Type `help`.", verb));
            }
        }
        Step::Continue
    }

    fn page_load(&self) -> PendingFetch<'a> {
        self.controller.load_next_page().boxed_local()
    }

    fn report(&self, outcome: Outcome) {
        tracing::debug!(?outcome, "Session command settled");
        match outcome {
            // The renderer has already prompted for an empty query.
            Outcome::Rejected(Rejection::EmptyQuery) => {}
            Outcome::Rejected(rejection) => self.output.info(rejection_message(rejection)),
            _ => {}
        }
    }
}
