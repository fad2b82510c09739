use std::fs;
use std::path::{Path, PathBuf};

use filefox_core::FileCandidate;

/// One line of user input, parsed. Anything that is not a slash command is
/// a question for the send flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ask(String),
    Upload(PathBuf),
    Clear,
    Quit,
    Empty,
    /// Recognized slash syntax with missing arguments, or an unknown one.
    Usage(&'static str),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }
        let mut parts = line.splitn(2, char::is_whitespace);
        let head = parts.next().unwrap_or("");
        let rest = parts.next().map(str::trim).unwrap_or("");
        match head {
            "/upload" if rest.is_empty() => Command::Usage("usage: /upload <path>"),
            "/upload" => Command::Upload(PathBuf::from(rest)),
            "/clear" => Command::Clear,
            "/quit" | "/exit" => Command::Quit,
            _ if head.starts_with('/') => {
                Command::Usage("unknown command; try /upload <path>, /clear or /quit")
            }
            _ => Command::Ask(line.to_string()),
        }
    }
}

/// Inspect a path the user wants to upload. Only metadata is gathered here;
/// the bytes are read later by the client handle. The MIME type is declared
/// from the extension, which is what the validation gate checks.
pub fn candidate_from_path(path: &Path) -> Result<FileCandidate, String> {
    let metadata =
        fs::metadata(path).map_err(|err| format!("cannot read {}: {err}", path.display()))?;
    if !metadata.is_file() {
        return Err(format!("{} is not a file", path.display()));
    }

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| format!("{} has no file name", path.display()))?;
    let mime = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
        .to_string();

    Ok(FileCandidate {
        path: path.to_path_buf(),
        name,
        len: metadata.len(),
        mime,
    })
}
