//! Terminal input handling for the Blackwood REPL.
//!
//! Wraps rustyline configuration and completion tailored to the game's
//! command vocabulary, with a plain stdin fallback for non-interactive use.

use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::BARE_DIRECTIONS;

/// Outcome of reading a line from the REPL input.
#[derive(Debug, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

lazy_static! {
    static ref COMMAND_TERMS: Vec<String> = build_command_terms();
}

const VERBS: &[&str] = &[
    "attack",
    "examine",
    "fight",
    "go",
    "grab",
    "help",
    "inspect",
    "inv",
    "inventory",
    "kill",
    "look",
    "move",
    "pick up",
    "quit",
    "take",
    "use",
    "walk",
];

type ReplEditor = rustyline::Editor<BlackwoodHelper, DefaultHistory>;

/// Tab completion over the command vocabulary.
#[derive(Default)]
pub struct BlackwoodHelper;

impl Helper for BlackwoodHelper {}

impl Completer for BlackwoodHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_prefix(line, pos);
        if prefix.is_empty() {
            return Ok((start, Vec::new()));
        }
        let lower = prefix.to_lowercase();
        let pairs = COMMAND_TERMS
            .iter()
            .filter(|term| term.starts_with(&lower))
            .map(|term| Pair {
                display: term.clone(),
                replacement: term.clone(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for BlackwoodHelper {
    type Hint = String;
}

impl Highlighter for BlackwoodHelper {}

impl Validator for BlackwoodHelper {}

fn current_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start_matches(char::is_whitespace);
    let start = pos - trimmed.len();
    (start, trimmed.to_string())
}

fn build_command_terms() -> Vec<String> {
    let mut terms: Vec<String> = VERBS.iter().map(ToString::to_string).collect();
    for dir in BARE_DIRECTIONS {
        terms.push(dir.to_string());
        terms.push(format!("go {dir}"));
    }
    terms.sort_unstable();
    terms.dedup();
    terms
}

/// Where player commands come from: a line editor with completion and history
/// on a terminal, plain buffered stdin when input is piped.
pub enum InputManager {
    Editor {
        editor: Box<ReplEditor>,
        history: Option<PathBuf>,
    },
    Piped,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        if !io::stdin().is_terminal() {
            info!("stdin is not a terminal; reading commands line by line");
            return InputManager::Piped;
        }
        match rustyline::Editor::<BlackwoodHelper, _>::new() {
            Ok(mut editor) => {
                editor.set_helper(Some(BlackwoodHelper));
                let history = history_file_path();
                if let Some(path) = &history {
                    load_history(&mut editor, path);
                }
                InputManager::Editor {
                    editor: Box::new(editor),
                    history,
                }
            },
            Err(err) => {
                warn!("line editor unavailable ({err}); reading plain stdin");
                InputManager::Piped
            },
        }
    }

    /// Prompt for and read one line of input.
    ///
    /// # Errors
    /// - if the terminal or stdin can't be read
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            InputManager::Editor { editor, history } => match editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        remember(editor, history.as_deref(), &line);
                    }
                    Ok(InputEvent::Line(line))
                },
                Err(err) => convert_readline_error(err),
            },
            InputManager::Piped => {
                print!("{prompt}");
                io::stdout().flush()?;
                read_plain_line(&mut io::stdin().lock())
            },
        }
    }
}

fn load_history(editor: &mut ReplEditor, path: &Path) {
    if let Some(dir) = path.parent()
        && let Err(err) = fs::create_dir_all(dir)
    {
        warn!("failed to create history directory {}: {err}", dir.display());
    }
    match editor.load_history(path) {
        Ok(()) => info!("command history loaded from {}", path.display()),
        Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {},
        Err(err) => warn!("failed to load history from {}: {err}", path.display()),
    }
}

fn remember(editor: &mut ReplEditor, history: Option<&Path>, line: &str) {
    if let Err(err) = editor.add_history_entry(line) {
        warn!("failed to add history entry: {err}");
    }
    if let Some(path) = history
        && let Err(err) = editor.save_history(path)
    {
        warn!("failed to save history to {}: {err}", path.display());
    }
}

/// Read one line without its line ending; zero bytes read means end of input.
fn read_plain_line(reader: &mut impl BufRead) -> io::Result<InputEvent> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(InputEvent::Eof);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(InputEvent::Line(line))
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| build_history_path(&base))
}

fn build_history_path(base: &Path) -> PathBuf {
    base.join("blackwood").join("history.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_readline_ctrl_c_to_interrupt() {
        let result = convert_readline_error(ReadlineError::Interrupted).unwrap();
        assert!(matches!(result, InputEvent::Interrupted));
    }

    #[test]
    fn converts_readline_eof() {
        let result = convert_readline_error(ReadlineError::Eof).unwrap();
        assert!(matches!(result, InputEvent::Eof));
    }

    #[test]
    fn plain_lines_lose_their_line_endings() {
        let mut input = io::Cursor::new("look\r\ngo north\n\nquit");
        assert_eq!(read_plain_line(&mut input).unwrap(), InputEvent::Line("look".into()));
        assert_eq!(read_plain_line(&mut input).unwrap(), InputEvent::Line("go north".into()));
        assert_eq!(read_plain_line(&mut input).unwrap(), InputEvent::Line(String::new()));
        assert_eq!(read_plain_line(&mut input).unwrap(), InputEvent::Line("quit".into()));
        assert_eq!(read_plain_line(&mut input).unwrap(), InputEvent::Eof);
    }

    #[test]
    fn history_path_appends_components() {
        let base = PathBuf::from("/tmp/blackwood-test");
        let path = build_history_path(&base);
        assert!(path.ends_with(Path::new("blackwood/history.txt")));
    }

    #[test]
    fn command_terms_cover_vocabulary() {
        assert!(COMMAND_TERMS.iter().any(|term| term == "inventory"));
        assert!(COMMAND_TERMS.iter().any(|term| term == "take"));
        assert!(COMMAND_TERMS.iter().any(|term| term == "secret"));
        assert!(COMMAND_TERMS.iter().any(|term| term == "go north"));
    }

    #[test]
    fn prefix_skips_leading_whitespace() {
        assert_eq!(current_prefix("   ta", 5), (3, "ta".to_string()));
    }
}
