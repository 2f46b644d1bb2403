//! Test builders — ergonomic constructors for subjects, catalogs, and keyword
//! files. These panic on invalid input rather than returning `Result`; they
//! are for test readability, not production use.

use munpul_core::Subject;
use std::io::Write;

/// Shorthand for `Subject::new`.
pub fn subject(title: &str, description: &str) -> Subject {
    Subject::new(title, description)
}

/// A catalog from `(title, description)` pairs, preserving order.
pub fn catalog_of(entries: &[(&str, &str)]) -> Vec<Subject> {
    entries
        .iter()
        .map(|(title, description)| Subject::new(*title, *description))
        .collect()
}

/// Write a newline-separated keyword file and return its tempfile handle.
/// The file is deleted when the handle drops.
pub fn keyword_file(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create keyword file");
    for line in lines {
        writeln!(file, "{line}").expect("write keyword line");
    }
    file.flush().expect("flush keyword file");
    file
}

/// Write `content` to a tempfile with the given suffix (e.g. `".txt"`).
pub fn upload_file(suffix: &str, content: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create upload file");
    file.write_all(content).expect("write upload content");
    file.flush().expect("flush upload file");
    file
}
