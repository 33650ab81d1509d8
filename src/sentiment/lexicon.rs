use std::{collections::BTreeSet, fmt, fs, io, path::Path, str::FromStr};

use crate::error::{Error, Result};

/// Text encoding of a lexicon file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexiconEncoding {
    /// ISO-8859-1; every byte decodes to the code point of the same value.
    #[default]
    Latin1,
    Utf8,
}

impl LexiconEncoding {
    fn decode(self, path: &Path, bytes: Vec<u8>) -> Result<String> {
        match self {
            Self::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
            Self::Utf8 => String::from_utf8(bytes).map_err(|e| Error::Decode {
                path: path.to_path_buf(),
                source: e.utf8_error(),
            }),
        }
    }
}

impl FromStr for LexiconEncoding {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "latin1" | "latin-1" | "iso-8859-1" => Ok(Self::Latin1),
            "utf8" | "utf-8" => Ok(Self::Utf8),
            _ => Err(Error::InvalidEncoding(name.to_string())),
        }
    }
}

impl fmt::Display for LexiconEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latin1 => f.write_str("latin1"),
            Self::Utf8 => f.write_str("utf8"),
        }
    }
}

/// A fixed set of terms sharing one polarity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    terms: BTreeSet<String>,
}

impl Lexicon {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads one term per line. Lines are taken as they are, without their
    /// line terminator; empty lines are ignored.
    pub fn from_path(path: &Path, encoding: LexiconEncoding) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::IO(e),
        })?;
        let text = encoding.decode(path, bytes)?;

        Ok(Self::new(text.lines().filter(|line| !line.is_empty())))
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.iter().map(String::as_str)
    }

    /// Terms present in both lexicons.
    pub fn overlap<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = &'a str> + 'a {
        self.terms.intersection(&other.terms).map(String::as_str)
    }
}

pub fn load_lexicon(path: &Path, encoding: LexiconEncoding) -> Result<Lexicon> {
    Lexicon::from_path(path, encoding)
}
