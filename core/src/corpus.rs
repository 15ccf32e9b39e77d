use crate::config::MissingInputs;
use crate::error::{Error, Result};
use crate::index::InvertedIndexEntry;
use crate::persist::{read_optional_text, read_text};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

const FIELD_SEPARATOR: &str = " - ";
const DOCUMENT_SEPARATOR: &str = ", ";

/// Source of a document's token occurrence list.
pub trait TokenSource: Sync {
    fn tokens(&self, document: &str) -> Result<Vec<String>>;
}

/// `tokens/<document>.txt` files, one token per CRLF-terminated line.
pub struct TokenDir {
    root: PathBuf,
    missing: MissingInputs,
}

impl TokenDir {
    pub fn new<P: AsRef<Path>>(root: P, missing: MissingInputs) -> Self {
        Self { root: root.as_ref().to_path_buf(), missing }
    }
    pub fn path_for(&self, document: &str) -> PathBuf { self.root.join(format!("{document}.txt")) }
}

impl TokenSource for TokenDir {
    fn tokens(&self, document: &str) -> Result<Vec<String>> {
        let text = read_optional_text(&self.path_for(document), self.missing)?;
        Ok(text.as_deref().map(split_tokens).unwrap_or_default())
    }
}

/// In-memory corpus keyed by document name.
impl TokenSource for HashMap<String, Vec<String>> {
    fn tokens(&self, document: &str) -> Result<Vec<String>> {
        self.get(document)
            .cloned()
            .ok_or_else(|| Error::DataConsistency(format!("no tokens for document {document:?}")))
    }
}

/// Non-blank lines of the trimmed file.
fn records(text: &str) -> impl Iterator<Item = &str> {
    text.trim().split('\n').map(str::trim).filter(|l| !l.is_empty())
}

/// Document names in index order, taken from the field before ` - `.
pub fn parse_index(text: &str) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for line in records(text) {
        let name = line.split_once(FIELD_SEPARATOR).map_or(line, |(name, _)| name);
        if !seen.insert(name) {
            return Err(Error::DataConsistency(format!("document {name:?} listed twice in the index")));
        }
        names.push(name.to_string());
    }
    Ok(names)
}

/// Entries of `token - doc1, doc2, ...`. Document lists are kept verbatim, duplicates included.
pub fn parse_inverted_index(text: &str) -> Vec<InvertedIndexEntry> {
    records(text)
        .map(|line| {
            let (token, docs) = line
                .split_once(FIELD_SEPARATOR)
                .or_else(|| line.strip_suffix(FIELD_SEPARATOR.trim_end()).map(|t| (t, "")))
                .unwrap_or((line, ""));
            let documents = docs
                .split(DOCUMENT_SEPARATOR)
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(String::from)
                .collect();
            InvertedIndexEntry { token: token.to_string(), documents }
        })
        .collect()
}

/// Token occurrence list. An empty file is a document with zero tokens.
pub fn split_tokens(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    text.lines().map(String::from).collect()
}

pub fn load_document_names(path: &Path) -> Result<Vec<String>> {
    parse_index(&read_text(path)?)
}

pub fn load_inverted_index(path: &Path) -> Result<Vec<InvertedIndexEntry>> {
    Ok(parse_inverted_index(&read_text(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_names_come_before_separator() {
        let names = parse_index("  doc1 - https://a.example\ndoc2 - b - c\n\ndoc3\n").unwrap();
        assert_eq!(names, vec!["doc1", "doc2", "doc3"]);
    }

    #[test]
    fn index_rejects_duplicate_names() {
        assert!(matches!(parse_index("a - 1\na - 2"), Err(Error::DataConsistency(_))));
    }

    #[test]
    fn inverted_index_keeps_literal_document_list() {
        let entries = parse_inverted_index("x - doc1, doc2, doc1\r\ny - doc1\n");
        assert_eq!(entries[0].token, "x");
        assert_eq!(entries[0].document_frequency(), 3);
        assert_eq!(entries[1].documents, vec!["doc1"]);
    }

    #[test]
    fn inverted_index_line_without_documents_has_zero_frequency() {
        let entries = parse_inverted_index("lonely -\nbare\n");
        assert_eq!(entries[0].token, "lonely");
        assert_eq!(entries[0].document_frequency(), 0);
        assert_eq!(entries[1].token, "bare");
        assert_eq!(entries[1].document_frequency(), 0);
    }

    #[test]
    fn tokens_split_on_crlf() {
        assert_eq!(split_tokens("a\r\nb\r\na\r\n"), vec!["a", "b", "a"]);
        assert!(split_tokens("  \r\n").is_empty());
    }

    #[test]
    fn strict_token_dir_surfaces_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let strict = TokenDir::new(dir.path(), MissingInputs::Strict);
        assert!(matches!(strict.tokens("absent"), Err(Error::Io { .. })));
        let lenient = TokenDir::new(dir.path(), MissingInputs::Lenient);
        assert!(lenient.tokens("absent").unwrap().is_empty());
    }
}
