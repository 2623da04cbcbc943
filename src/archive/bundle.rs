//! In-memory archive contents.

/// One named file destined for the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub data: Vec<u8>,
}

/// Ordered name-to-content mapping consumed by [`crate::archive::pack`].
///
/// Entries are written in insertion order. Names are not checked for
/// duplicates.
#[derive(Debug, Clone, Default)]
pub struct ArchiveBundle {
    entries: Vec<ArchiveEntry>,
}

impl ArchiveBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, data: Vec<u8>) {
        self.entries.push(ArchiveEntry {
            name: name.into(),
            data,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Total size of all entry contents in bytes.
    pub fn total_bytes(&self) -> u64 {
        self.entries.iter().map(|entry| entry.data.len() as u64).sum()
    }

    pub fn into_entries(self) -> Vec<ArchiveEntry> {
        self.entries
    }
}

impl FromIterator<(String, Vec<u8>)> for ArchiveBundle {
    fn from_iter<I: IntoIterator<Item = (String, Vec<u8>)>>(iter: I) -> Self {
        let mut bundle = ArchiveBundle::new();
        for (name, data) in iter {
            bundle.insert(name, data);
        }
        bundle
    }
}
