//! REPL loop with rustyline.
//!
//! Interactive mode: prompt, history, `quit`/`exit` sentinel.
//! Pipe mode: read query lines from stdin, evaluate each.
//!
//! The loop never dies on a bad query — parsing degrades gracefully and
//! evaluation cannot fail, so every iteration prints whatever the evaluator
//! returned and re-prompts.

use std::io::{self, BufRead};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use linedex_search::{search, InvertedIndex, Query};

use crate::format::{format_results, OutputMode};

const PROMPT: &str = "linedex> ";

/// Evaluate one raw query line and print the results.
pub fn run_query(raw: &str, index: &InvertedIndex, mode: OutputMode) {
    let results = search(&Query::parse(raw), index);
    let formatted = format_results(&results, mode);
    if !formatted.is_empty() {
        println!("{}", formatted);
    }
}

/// Run the interactive REPL.
pub fn run_repl(index: &InvertedIndex, mode: OutputMode) {
    let mut rl = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("(error) failed to initialize line editor: {}", err);
            return;
        }
    };

    // Load history
    let history_path = history_file();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                if is_quit(trimmed) {
                    break;
                }
                if trimmed == "help" {
                    print_help();
                    continue;
                }

                run_query(trimmed, index, mode);
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C — just show a new prompt
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D — exit
                break;
            }
            Err(err) => {
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    // Save history
    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
}

/// Run in pipe mode: read query lines from stdin, evaluate each.
pub fn run_pipe(index: &InvertedIndex, mode: OutputMode) -> i32 {
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if is_quit(trimmed) {
            break;
        }

        run_query(trimmed, index, mode);
    }

    0
}

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit")
}

fn history_file() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|home| format!("{}/.linedex_history", home))
}

fn print_help() {
    println!("Query syntax:");
    println!("  +term        term must be present");
    println!("  +(a b c)     at least one of the group must be present");
    println!("  term         optional, raises the score of lines containing it");
    println!();
    println!("Meta-commands:");
    println!("  help         Show this help");
    println!("  quit / exit  Exit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_sentinel_case_insensitive() {
        assert!(is_quit("quit"));
        assert!(is_quit("QUIT"));
        assert!(is_quit("exit"));
        assert!(!is_quit("quitting"));
    }

    #[test]
    fn test_history_file_under_home() {
        if std::env::var("HOME").is_ok() {
            assert!(history_file().unwrap().ends_with(".linedex_history"));
        }
    }
}
