//! Shell commands and their dispatch onto the controller.

use std::io::Write;

use anyhow::{bail, Context, Result};
use shared::domain::MovieRecordInput;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{
    controller::{state::FetchState, MovieController},
    ui::render,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    FetchMovies,
    AddMovie,
    ShowView,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Option<UiCommand> {
    match line.trim().to_ascii_lowercase().as_str() {
        "fetch" | "f" => Some(UiCommand::FetchMovies),
        "add" | "a" => Some(UiCommand::AddMovie),
        "view" | "v" | "list" => Some(UiCommand::ShowView),
        "help" | "h" | "?" => Some(UiCommand::Help),
        "quit" | "q" | "exit" => Some(UiCommand::Quit),
        _ => None,
    }
}

pub const HELP_TEXT: &str = "commands: fetch, add, view, help, quit";

/// Reads commands line by line until `quit` or end of input.
pub async fn run_shell<R, W>(controller: &MovieController, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    writeln!(out, "{HELP_TEXT}")?;
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = parse_command(&line) else {
            writeln!(out, "unknown command '{}'; {HELP_TEXT}", line.trim())?;
            continue;
        };
        tracing::debug!(?command, "shell command");

        match command {
            UiCommand::FetchMovies => fetch_and_show(controller, out).await?,
            UiCommand::AddMovie => {
                let Some(input) = read_movie_form(&mut lines, out).await? else {
                    break;
                };
                submit_and_report(controller, input, out).await?;
            }
            UiCommand::ShowView => writeln!(out, "{}", render::render_view(&controller.view()))?,
            UiCommand::Help => writeln!(out, "{HELP_TEXT}")?,
            UiCommand::Quit => break,
        }
    }
    Ok(())
}

pub async fn fetch_and_show<W: Write>(controller: &MovieController, out: &mut W) -> Result<()> {
    let Some(task) = controller.trigger_fetch() else {
        return Ok(());
    };
    writeln!(out, "{}", render::render_view(&controller.view()))?;
    task.await.context("fetch task panicked")?;
    writeln!(out, "{}", render::render_view(&controller.view()))?;
    Ok(())
}

/// One-shot fetch for the CLI. A failed fetch is an error in both output
/// modes; text mode still prints the error view first.
pub async fn run_fetch<W: Write>(
    controller: &MovieController,
    json: bool,
    out: &mut W,
) -> Result<()> {
    if json {
        if let Some(task) = controller.trigger_fetch() {
            task.await.context("fetch task panicked")?;
        }
    } else {
        fetch_and_show(controller, out).await?;
    }
    match controller.state() {
        FetchState::Loaded(movies) => {
            if json {
                serde_json::to_writer_pretty(&mut *out, &movies)?;
                writeln!(out)?;
            }
            Ok(())
        }
        FetchState::Failed(message) => bail!(message),
        other => bail!("fetch did not settle: {other:?}"),
    }
}

pub async fn submit_and_report<W: Write>(
    controller: &MovieController,
    input: MovieRecordInput,
    out: &mut W,
) -> Result<bool> {
    match controller.submit_new_movie(input).await {
        Ok(()) => {
            writeln!(out, "Movie added.")?;
            Ok(true)
        }
        Err(error) => {
            writeln!(out, "Could not add movie: {}", error.user_message())?;
            Ok(false)
        }
    }
}

async fn read_movie_form<R, W>(
    lines: &mut tokio::io::Lines<R>,
    out: &mut W,
) -> Result<Option<MovieRecordInput>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let Some(title) = prompt(lines, out, "Title").await? else {
        return Ok(None);
    };
    let Some(opening_text) = prompt(lines, out, "Opening Text").await? else {
        return Ok(None);
    };
    let Some(release_date) = prompt(lines, out, "Release Date").await? else {
        return Ok(None);
    };
    Ok(Some(MovieRecordInput {
        title,
        opening_text,
        release_date,
    }))
}

async fn prompt<R, W>(
    lines: &mut tokio::io::Lines<R>,
    out: &mut W,
    label: &str,
) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{label}: ")?;
    out.flush()?;
    Ok(lines.next_line().await?.map(|value| value.trim().to_string()))
}

#[cfg(test)]
#[path = "../tests/orchestration_tests.rs"]
mod tests;
