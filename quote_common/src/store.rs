//! JSON quote store.
//!
//! The store is a single pretty-printed JSON array of [`Quote`] records. It is
//! always written wholesale and read back in full; there is no incremental update.
//! Non-ASCII text is written verbatim.
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::quote::Quote;
use crate::result::Result;

/// Indentation used by the on-disk format.
const INDENT: &[u8] = b"    ";

/// Overwrites `path` with `quotes` as an indented JSON array.
pub fn save_quotes(path: &Path, quotes: &[Quote]) -> Result<()> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    quotes.serialize(&mut ser)?;
    fs::write(path, buf)?;
    Ok(())
}

/// Reads every quote from `path`. A missing file is an empty store.
pub fn load_quotes(path: &Path) -> Result<Vec<Quote>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&text)?)
}
