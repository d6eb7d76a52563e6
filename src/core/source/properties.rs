//! Properties file source.
//!
//! Immutable snapshot of a Java-style `.properties` file such as
//! `key.properties`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::CredentialSource;
use crate::error::SourceError;

/// A parsed `.properties` file.
#[derive(Debug, Clone, Default)]
pub struct PropertiesSource {
    name: String,
    entries: BTreeMap<String, String>,
    path: Option<PathBuf>,
}

impl PropertiesSource {
    /// Load a properties file from disk.
    ///
    /// The file is decoded as ISO-8859-1, like `java.util.Properties`;
    /// other characters need `\uXXXX` escapes.
    ///
    /// A missing file yields an empty source named after the path, so a
    /// project without `key.properties` simply resolves nothing from it.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::ReadFile` if the file exists but cannot be
    /// read, or `SourceError::Malformed` on a bad `\u` escape.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let name = display_name(path);

        if !path.exists() {
            debug!(path = %path.display(), "properties file not found, using empty source");
            return Ok(Self {
                name,
                entries: BTreeMap::new(),
                path: Some(path.to_path_buf()),
            });
        }

        let bytes = std::fs::read(path).map_err(|source| SourceError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        // ISO-8859-1: every byte is the code point of the same value
        let contents: String = bytes.iter().map(|&b| char::from(b)).collect();

        let entries = parse(&contents).map_err(|(line, reason)| SourceError::Malformed {
            path: path.display().to_string(),
            line,
            reason,
        })?;

        debug!(path = %path.display(), keys = entries.len(), "properties loaded");

        Ok(Self {
            name,
            entries,
            path: Some(path.to_path_buf()),
        })
    }

    /// Parse properties from a string.
    pub fn parse(name: impl Into<String>, contents: &str) -> Result<Self, SourceError> {
        let name = name.into();
        let entries = parse(contents).map_err(|(line, reason)| SourceError::Malformed {
            path: name.clone(),
            line,
            reason,
        })?;

        Ok(Self {
            name,
            entries,
            path: None,
        })
    }

    /// Build a source from key-value pairs.
    pub fn from_pairs<K, V>(name: impl Into<String>, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            path: None,
        }
    }

    /// Path the source was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CredentialSource for PropertiesSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse `.properties` content into a map. Errors carry a 1-based line.
fn parse(contents: &str) -> Result<BTreeMap<String, String>, (usize, String)> {
    let mut entries = BTreeMap::new();
    let mut lines = contents.lines().enumerate();

    while let Some((idx, raw)) = lines.next() {
        let line = raw.trim_start();

        // Skip blank lines and comments
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let mut logical = line.to_string();
        while has_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical);
        let key = unescape(key).map_err(|reason| (idx + 1, reason))?;
        let value = unescape(value).map_err(|reason| (idx + 1, reason))?;

        // Later entries win
        entries.insert(key, value);
    }

    Ok(entries)
}

/// A line continues when it ends in an odd number of backslashes.
fn has_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split a logical line at the first unescaped `=`, `:` or whitespace.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();

    for (i, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if c.is_whitespace() => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let rest = line[key_end..].trim_start();
    let rest = rest
        .strip_prefix('=')
        .or_else(|| rest.strip_prefix(':'))
        .unwrap_or(rest);

    (key, rest.trim_start())
}

fn unescape(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut units: Vec<u16> = Vec::new();
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            flush_units(&mut units, &mut out)?;
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                if hex.chars().count() != 4 {
                    return Err(format!("truncated unicode escape \\u{}", hex));
                }
                if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(format!("invalid unicode escape \\u{}", hex));
                }
                let unit = u16::from_str_radix(&hex, 16)
                    .map_err(|_| format!("invalid unicode escape \\u{}", hex))?;
                units.push(unit);
            }
            Some(other) => {
                flush_units(&mut units, &mut out)?;
                out.push(match other {
                    't' => '\t',
                    'n' => '\n',
                    'r' => '\r',
                    'f' => '\u{c}',
                    c => c,
                });
            }
            // A trailing lone backslash is dropped
            None => {}
        }
    }

    flush_units(&mut units, &mut out)?;
    Ok(out)
}

/// Decode pending `\uXXXX` code units, which may form surrogate pairs.
fn flush_units(units: &mut Vec<u16>, out: &mut String) -> Result<(), String> {
    for decoded in char::decode_utf16(units.drain(..)) {
        let ch = decoded.map_err(|e| {
            format!("unpaired surrogate \\u{:04X}", e.unpaired_surrogate())
        })?;
        out.push(ch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parsed(contents: &str) -> PropertiesSource {
        PropertiesSource::parse("test.properties", contents).unwrap()
    }

    #[test]
    fn test_load_key_properties() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("key.properties");
        fs::write(
            &path,
            "storeFile=/keys/release.jks\nkeyAlias=prod\nkeyPassword=pw1\nstorePassword=pw2\n",
        )
        .unwrap();

        let source = PropertiesSource::load(&path).unwrap();

        assert_eq!(source.name(), "key.properties");
        assert_eq!(source.len(), 4);
        assert_eq!(source.path(), Some(path.as_path()));
        assert_eq!(source.lookup("storeFile"), Some("/keys/release.jks".to_string()));
        assert_eq!(source.lookup("keyAlias"), Some("prod".to_string()));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("key.properties");

        let source = PropertiesSource::load(&path).unwrap();

        assert!(source.is_empty());
        assert_eq!(source.name(), "key.properties");
        assert_eq!(source.lookup("storeFile"), None);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let source = parsed("# comment\n! also a comment\n\n   \nstoreFile=a.jks\n");

        assert_eq!(source.len(), 1);
        assert_eq!(source.lookup("storeFile"), Some("a.jks".to_string()));
    }

    #[test]
    fn test_separators() {
        let source = parsed("a=1\nb:2\nc 3\nd = 4\ne  :  5\nf\n");

        assert_eq!(source.lookup("a"), Some("1".to_string()));
        assert_eq!(source.lookup("b"), Some("2".to_string()));
        assert_eq!(source.lookup("c"), Some("3".to_string()));
        assert_eq!(source.lookup("d"), Some("4".to_string()));
        assert_eq!(source.lookup("e"), Some("5".to_string()));
        assert_eq!(source.lookup("f"), Some(String::new()));
    }

    #[test]
    fn test_value_keeps_later_separators_and_trailing_space() {
        let source = parsed("storePassword=a=b:c \n");

        assert_eq!(source.lookup("storePassword"), Some("a=b:c ".to_string()));
    }

    #[test]
    fn test_line_continuation() {
        let source = parsed("storeFile=/very/long/\\\n    path/release.jks\nkeyAlias=prod\n");

        assert_eq!(
            source.lookup("storeFile"),
            Some("/very/long/path/release.jks".to_string())
        );
        assert_eq!(source.lookup("keyAlias"), Some("prod".to_string()));
    }

    #[test]
    fn test_escaped_backslash_is_not_continuation() {
        let source = parsed("storeFile=C:\\\\keys\\\\\nkeyAlias=prod\n");

        assert_eq!(source.lookup("storeFile"), Some("C:\\keys\\".to_string()));
        assert_eq!(source.lookup("keyAlias"), Some("prod".to_string()));
    }

    #[test]
    fn test_escapes() {
        let source = parsed("my\\ key=tab\\there\nunicode=caf\\u00e9\nemoji=\\uD83D\\uDE00\n");

        assert_eq!(source.lookup("my key"), Some("tab\there".to_string()));
        assert_eq!(source.lookup("unicode"), Some("café".to_string()));
        assert_eq!(source.lookup("emoji"), Some("😀".to_string()));
    }

    #[test]
    fn test_later_duplicate_wins() {
        let source = parsed("keyAlias=first\nkeyAlias=second\n");

        assert_eq!(source.lookup("keyAlias"), Some("second".to_string()));
    }

    #[test]
    fn test_truncated_unicode_escape_is_malformed() {
        let err = PropertiesSource::parse("key.properties", "ok=1\nbad=\\u12\n").unwrap_err();

        match err {
            SourceError::Malformed { path, line, .. } => {
                assert_eq!(path, "key.properties");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_decodes_latin1() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("key.properties");
        fs::write(&path, b"storeFile=a.jks\nkeyPassword=caf\xE9\n").unwrap();

        let source = PropertiesSource::load(&path).unwrap();

        assert_eq!(source.lookup("keyPassword"), Some("caf\u{e9}".to_string()));
    }

    #[test]
    fn test_signed_unicode_escape_is_malformed() {
        let err = PropertiesSource::parse("p", "k=\\u+041\n").unwrap_err();

        assert!(err.to_string().contains("invalid unicode escape"));
    }

    #[test]
    fn test_unpaired_surrogate_is_malformed() {
        let err = PropertiesSource::parse("p", "bad=\\uD83D\n").unwrap_err();

        assert!(err.to_string().contains("unpaired surrogate"));
    }

    #[test]
    fn test_from_pairs() {
        let source = PropertiesSource::from_pairs("memory", [("storeFile", "x.jks")]);

        assert_eq!(source.name(), "memory");
        assert_eq!(source.lookup("storeFile"), Some("x.jks".to_string()));
        assert_eq!(source.path(), None);
    }
}
