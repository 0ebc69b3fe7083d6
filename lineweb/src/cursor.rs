//! Rotation cursor persistence.
//!
//! One decimal integer in one text file: the index of the next corpus
//! line to serve. The store is deliberately fail-soft — a missing or
//! garbled file reads as 0, and it never checks the value against the
//! corpus length. Bounding the index (mod corpus size) belongs to the
//! caller, which applies it right before use and again when computing
//! the successor.
//!
use std::{fs, io, path::PathBuf};

/// File-backed store for the rotation cursor
pub(crate) struct CursorStore {
    /// Location of the one-line counter file
    path: PathBuf,
}

impl CursorStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the persisted index, self-healing to 0 on anything suspect
    ///
    /// An absent file reads as 0 and is recreated holding `0` so later
    /// writes land somewhere sensible; failure to recreate it is logged
    /// and ignored. Unparsable content also reads as 0 without
    /// propagating an error to the client.
    pub(crate) fn read(&self) -> usize {
        match fs::read_to_string(&self.path) {
            Ok(content) => match content.trim().parse::<usize>() {
                Ok(index) => index,
                Err(_) => {
                    println!(
                        "⚠️ Invalid content in {}, resetting index to 0",
                        self.path.display()
                    );
                    0
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                println!("⚠️ {} not found, starting index at 0", self.path.display());
                if let Err(e) = fs::write(&self.path, "0") {
                    println!(
                        "❌ Unable to create index file {}: {e}",
                        self.path.display()
                    );
                }
                0
            }
            Err(e) => {
                println!(
                    "⚠️ Error reading {}: {e}, using index 0",
                    self.path.display()
                );
                0
            }
        }
    }

    /// Overwrite the persisted index with a new value
    ///
    /// Failures bubble up so the caller can log them; by the time this
    /// runs the response is already on its way, so they are never fatal.
    pub(crate) fn write(&self, index: usize) -> io::Result<()> {
        fs::write(&self.path, index.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A missing file reads as 0 and is recreated holding 0
    #[test]
    fn missing_file_reads_zero_and_recreates() {
        let dir = tempfile::tempdir().unwrap();
        let store = CursorStore::new(dir.path().join("line_index.txt"));

        assert_eq!(store.read(), 0);
        let content = fs::read_to_string(dir.path().join("line_index.txt")).unwrap();
        assert_eq!(content, "0");
    }

    /// Garbage content reads as 0 instead of erroring
    #[test]
    fn garbage_content_reads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("line_index.txt");
        fs::write(&path, "banana").unwrap();

        assert_eq!(CursorStore::new(path).read(), 0);
    }

    /// A negative value is not a non-negative integer, so it reads as 0
    #[test]
    fn negative_content_reads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("line_index.txt");
        fs::write(&path, "-3").unwrap();

        assert_eq!(CursorStore::new(path).read(), 0);
    }

    /// Written values round-trip, surrounding whitespace is tolerated
    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("line_index.txt");
        let store = CursorStore::new(path.clone());

        store.write(42).unwrap();
        assert_eq!(store.read(), 42);

        fs::write(&path, " 7 \n").unwrap();
        assert_eq!(store.read(), 7);
    }

    /// Out-of-range values are stored as-is; bounding is the caller's job
    #[test]
    fn stores_out_of_range_values_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let store = CursorStore::new(dir.path().join("line_index.txt"));

        store.write(9999).unwrap();
        assert_eq!(store.read(), 9999);
    }
}
