//! linedex CLI — full-text line search over a directory of text files.
//!
//! Three modes:
//! - **Shell mode**: `linedex --dir DIR QUERY...` — single query, exit
//! - **REPL mode**: `linedex --dir DIR` — interactive prompt (if stdin is a TTY)
//! - **Pipe mode**: `echo "+foo bar" | linedex --dir DIR` — line-by-line from stdin
//!
//! The index is built once at startup from every recognized file under
//! `--dir`; queries only ever read it.

mod format;
mod repl;
mod walker;

use std::io::IsTerminal;
use std::path::Path;
use std::process;

use clap::{Arg, ArgAction, Command};
use linedex_search::InvertedIndex;
use tracing_subscriber::EnvFilter;

use format::OutputMode;

fn main() {
    // Logs go to stderr so result output stays clean in pipe mode.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let root = matches
        .get_one::<String>("dir")
        .cloned()
        .unwrap_or_default();
    let extensions: Vec<String> = matches
        .get_many::<String>("ext")
        .map(|values| values.cloned().collect())
        .unwrap_or_else(|| vec!["txt".to_string()]);

    let docs = match walker::collect_doc_lines(Path::new(&root), &extensions) {
        Ok(docs) => docs,
        Err(err) => {
            eprintln!("(error) {}", err);
            process::exit(1);
        }
    };

    let index = InvertedIndex::build(docs);
    let stats = index.stats();
    eprintln!(
        "Indexed {} files in {} ({} lines, {} distinct tokens)",
        stats.files, root, stats.lines, stats.tokens
    );

    if let Some(words) = matches.get_many::<String>("query") {
        // Shell mode: one query from the command line, then exit.
        let raw = words.cloned().collect::<Vec<_>>().join(" ");
        repl::run_query(&raw, &index, output_mode);
    } else if std::io::stdin().is_terminal() {
        repl::run_repl(&index, output_mode);
    } else {
        process::exit(repl::run_pipe(&index, output_mode));
    }
}

fn build_cli() -> Command {
    Command::new("linedex")
        .about("In-memory full-text line search over a directory of text files")
        .arg(
            Arg::new("dir")
                .long("dir")
                .required(true)
                .help("Directory to index and search"),
        )
        .arg(
            Arg::new("ext")
                .long("ext")
                .action(ArgAction::Append)
                .help("File extension to index (repeatable, default: txt)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("JSON output mode"),
        )
        .arg(
            Arg::new("query")
                .num_args(1..)
                .trailing_var_arg(true)
                .help("Run a single query and exit instead of starting the REPL"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_requires_dir() {
        let result = build_cli().try_get_matches_from(["linedex"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_query_words() {
        let matches = build_cli()
            .try_get_matches_from(["linedex", "--dir", "notes", "+foo", "bar"])
            .unwrap();
        let words: Vec<&String> = matches.get_many::<String>("query").unwrap().collect();
        assert_eq!(words, ["+foo", "bar"]);
    }

    #[test]
    fn test_cli_repeatable_ext() {
        let matches = build_cli()
            .try_get_matches_from(["linedex", "--dir", "notes", "--ext", "txt", "--ext", "md"])
            .unwrap();
        let exts: Vec<&String> = matches.get_many::<String>("ext").unwrap().collect();
        assert_eq!(exts, ["txt", "md"]);
    }
}
