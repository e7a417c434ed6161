//! Range table module
//!
//! Maps a request offset to one of the pre-chunked data files. The table is
//! built once at startup and shared read-only by every connection.

use std::ops::Range;
use std::path::{Path, PathBuf};

/// Upper bound of the last chunk, used as "infinity" for practical offsets
pub const OFFSET_SENTINEL: i64 = 999_999_999;

/// Chunk boundaries in ascending order; chunk `n` covers
/// `[BOUNDARIES[n], BOUNDARIES[n + 1])` and is served from `{n + 1}.json`.
const BOUNDARIES: [i64; 21] = [
    0,
    658_330_804,
    658_330_908,
    658_331_014,
    658_331_126,
    658_331_229,
    658_331_343,
    658_331_445,
    658_331_549,
    658_331_651,
    658_331_757,
    658_331_858,
    658_331_964,
    658_332_068,
    658_332_175,
    658_332_277,
    658_332_383,
    658_332_486,
    658_332_594,
    658_332_699,
    OFFSET_SENTINEL,
];

const FILENAMES: [&str; 20] = [
    "1.json", "2.json", "3.json", "4.json", "5.json", "6.json", "7.json", "8.json", "9.json",
    "10.json", "11.json", "12.json", "13.json", "14.json", "15.json", "16.json", "17.json",
    "18.json", "19.json", "20.json",
];

/// A half-open offset interval bound to its backing file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeEntry {
    /// Lower bound of the range (informational, equals `range.start`)
    pub offset: i64,
    /// Backing file, relative to the data directory
    pub filename: &'static str,
    /// `[start, end)`
    pub range: Range<i64>,
}

impl RangeEntry {
    pub const fn new(filename: &'static str, range: Range<i64>) -> Self {
        Self {
            offset: range.start,
            filename,
            range,
        }
    }

    pub const fn contains(&self, id: i64) -> bool {
        self.range.start <= id && id < self.range.end
    }
}

/// Ordered, immutable collection of all range entries
#[derive(Debug, Clone)]
pub struct RangeTable {
    entries: Vec<RangeEntry>,
}

impl RangeTable {
    /// Build the fixed 20-entry table
    pub fn builtin() -> Self {
        let entries = FILENAMES
            .into_iter()
            .zip(BOUNDARIES.windows(2))
            .map(|(filename, bounds)| RangeEntry::new(filename, bounds[0]..bounds[1]))
            .collect();
        Self { entries }
    }

    /// Return the first entry whose range contains `id`.
    ///
    /// Linear scan in table order. Offsets below zero or at/after
    /// [`OFFSET_SENTINEL`] match nothing.
    pub fn find(&self, id: i64) -> Option<&RangeEntry> {
        self.entries.iter().find(|entry| entry.contains(id))
    }

    pub fn entries(&self) -> &[RangeEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RangeEntry> {
        self.entries().iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Backing files that do not exist under `dir`.
    ///
    /// Startup diagnostic only; lookups never consult the filesystem.
    pub fn missing_files(&self, dir: &Path) -> Vec<PathBuf> {
        self.entries
            .iter()
            .map(|entry| dir.join(entry.filename))
            .filter(|path| !path.is_file())
            .collect()
    }
}

impl<'a> IntoIterator for &'a RangeTable {
    type Item = &'a RangeEntry;
    type IntoIter = std::slice::Iter<'a, RangeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
