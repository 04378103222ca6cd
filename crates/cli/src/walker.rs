//! Document source: recursive directory walk.
//!
//! Enumerates files under a root directory whose extension is recognized,
//! reads them line by line, and hands the search core a flat sequence of
//! `DocLine`s. A file that cannot be read is logged and skipped — it never
//! aborts the walk. Only an unusable root propagates an error.

use linedex_core::{DocLine, Error, Result};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Collect every line of every matching file under `root`.
///
/// Entries are visited in sorted name order so the resulting scan order (and
/// therefore posting order within the index) is reproducible.
pub fn collect_doc_lines(root: &Path, extensions: &[String]) -> Result<Vec<DocLine>> {
    if !root.is_dir() {
        return Err(Error::InvalidRoot(root.to_path_buf()));
    }

    let mut docs = Vec::new();
    walk(root, extensions, &mut docs)?;
    Ok(docs)
}

fn walk(dir: &Path, extensions: &[String], docs: &mut Vec<DocLine>) -> Result<()> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.filter_map(|entry| entry.ok()).collect();
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            if let Err(err) = walk(&path, extensions, docs) {
                warn!(
                    target: "linedex::walker",
                    directory = %path.display(),
                    error = %err,
                    "Skipping unreadable directory"
                );
            }
        } else if has_recognized_extension(&path, extensions) {
            read_file_lines(&path, docs);
        }
    }

    Ok(())
}

fn has_recognized_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|wanted| wanted == ext))
        .unwrap_or(false)
}

/// Read one file into `docs`. Unreadable files are logged and skipped.
fn read_file_lines(path: &Path, docs: &mut Vec<DocLine>) {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            warn!(
                target: "linedex::walker",
                file = %path.display(),
                error = %err,
                "Skipping unreadable file"
            );
            return;
        }
    };

    let directory = path
        .parent()
        .map(|parent| parent.display().to_string())
        .unwrap_or_default();
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    for (offset, text) in contents.lines().enumerate() {
        docs.push(DocLine {
            directory: directory.clone(),
            filename: filename.clone(),
            line_number: offset + 1,
            text: text.to_string(),
        });
    }
}
