//! Heuristic project-name extraction from CMakeLists.txt text.
//!
//! This is a resilient partial-match scanner, not a parser: it hunts for a
//! `project(...)` construct with a plain text search and tolerates false
//! negatives. The goal is a best-effort default that never blocks the user,
//! so every failed candidate resumes the scan instead of aborting it.

use std::path::Path;

const TOKEN: &str = "project";

/// Scan `text` for a `project(...)` declaration and extract its first
/// argument.
///
/// Returns `None` when no syntactically valid construct exists anywhere.
/// The first valid construct wins even when the extracted name is empty
/// (`Some("")`) — the scan does not keep looking for a better match. Note
/// also that the token search has no word-boundary check, so `xproject(A)`
/// yields `A`. Both quirks are long-standing behavior that downstream
/// tooling relies on; do not "fix" them here.
pub fn guess_from_text(text: &str) -> Option<String> {
    // Byte offsets in the ASCII-lowercased copy line up with the original,
    // so we search one and slice the other.
    let lower = text.to_ascii_lowercase();
    let mut cursor = 0;

    loop {
        let hit = lower[cursor..].find(TOKEN)?;
        cursor += hit + TOKEN.len();

        let rest = text[cursor..].trim_start();
        let Some(after_open) = rest.strip_prefix('(') else {
            // Not a call — e.g. `project_version = 2`. Resume after the token.
            continue;
        };

        let Some(close) = after_open.find(')') else {
            // Unbalanced parenthesis; this candidate is unusable.
            continue;
        };

        let arguments = after_open[..close].trim();
        return Some(parse_name(arguments));
    }
}

/// Guess a project name for an existing CMakeLists.txt file.
///
/// Falls back to the name of the file's containing directory when the text
/// yields nothing. An empty result is a normal miss, not an error; callers
/// prompt for a name instead of proceeding.
pub fn guess(cmake_file: &Path, text: &str) -> String {
    if let Some(name) = guess_from_text(text) {
        return name;
    }

    cmake_file
        .parent()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Pull the name out of the trimmed argument string.
///
/// A leading double-quote switches to string mode (name runs to the next
/// quote, spaces preserved); otherwise the name runs to the first
/// whitespace character or the end of the arguments.
fn parse_name(arguments: &str) -> String {
    if let Some(quoted) = arguments.strip_prefix('"') {
        match quoted.find('"') {
            Some(end) => quoted[..end].to_string(),
            None => quoted.to_string(),
        }
    } else {
        arguments
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string()
    }
}
