use crate::presentation::Locale;
use game_core::GameSession;
use game_types::SubmissionResult;
use std::io::{self, BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewGame,
    ShowWords,
    ShowScore,
    Help,
    Quit,
    Submit(String),
}

impl Command {
    /// Parse one line of input; blank lines are `None`
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let command = match line {
            ":new" | ":n" => Command::NewGame,
            ":words" | ":w" => Command::ShowWords,
            ":score" | ":s" => Command::ShowScore,
            ":quit" | ":q" => Command::Quit,
            _ if line.starts_with(':') => Command::Help,
            _ => Command::Submit(line.to_string()),
        };
        Some(command)
    }
}

/// Drive `session` from `input` until `:quit` or end of input
pub fn run<R, W>(session: &mut GameSession, locale: Locale, input: R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", locale.root_word_line(session.root_word()))?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = Command::parse(&line) else {
            continue;
        };
        debug!(?command, "Read command");

        match command {
            Command::NewGame => {
                session.start_new_game();
                writeln!(output, "{}", locale.root_word_line(session.root_word()))?;
            }
            Command::ShowWords => write_words(session, locale, output)?,
            Command::ShowScore => writeln!(output, "{}", locale.score_line(session.score()))?,
            Command::Help => writeln!(output, "{}", locale.help_text())?,
            Command::Quit => break,
            Command::Submit(candidate) => match session.submit(&candidate) {
                SubmissionResult::Accepted { word, points, score } => {
                    writeln!(output, "+{points} {word}  {}", locale.score_line(score))?;
                }
                SubmissionResult::Rejected { word, rejection } => {
                    let text = locale.rejection_message(rejection, &word, session.root_word());
                    writeln!(output, "{}", text.title)?;
                    writeln!(output, "  {}", text.message)?;
                }
            },
        }
        output.flush()?;
    }

    writeln!(output, "{}", locale.score_line(session.score()))?;
    output.flush()
}

fn write_words<W: Write>(session: &GameSession, locale: Locale, output: &mut W) -> io::Result<()> {
    let snapshot = session.snapshot();
    if snapshot.used_words.is_empty() {
        return writeln!(output, "{}", locale.no_words_line());
    }

    for used in &snapshot.used_words {
        writeln!(output, "{:>2} {}", used.points, used.word)?;
    }
    Ok(())
}
