use crate::error::Result;
use fs2::FileExt;
use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// The persistent set of phone numbers already exported, stored as one
/// digit-string per line.
///
/// The file is the sole source of truth; a loaded snapshot is valid
/// only as of load time. Mutations take a scoped exclusive lock so
/// that concurrent append and remove cannot interleave a
/// read-modify-write. Membership is set-semantics: duplicate physical
/// lines are tolerated on read.
#[derive(Debug, Clone)]
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the current snapshot. A missing or unreadable file is
    /// treated as a first run and yields an empty set.
    pub fn load(&self) -> HashSet<String> {
        let Ok(file) = File::open(&self.path) else {
            return HashSet::new();
        };
        let _ = file.lock_shared();
        let mut contents = String::new();
        let mut file = file;
        if file.read_to_string(&mut contents).is_err() {
            return HashSet::new();
        }
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn contains(&self, phone: &str) -> bool {
        self.load().contains(phone)
    }

    /// Appends one line per phone. A no-op on an empty set; existing
    /// content is never rewritten. Write failures are surfaced because
    /// ledger integrity drives future dedup correctness.
    pub fn append(&self, phones: &HashSet<String>) -> Result<()> {
        if phones.is_empty() {
            return Ok(());
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.lock_exclusive()?;

        let mut out = String::new();
        for phone in phones {
            out.push_str(phone);
            out.push('\n');
        }
        let mut file = file;
        file.write_all(out.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    /// Rewrites the store keeping only lines whose trimmed value is
    /// not in the removal set. Used when previously-seen numbers are
    /// pulled back in for re-export.
    pub fn remove(&self, phones: &HashSet<String>) -> Result<()> {
        if phones.is_empty() || !self.path.exists() {
            return Ok(());
        }

        let mut file = OpenOptions::new().read(true).write(true).open(&self.path)?;
        file.lock_exclusive()?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let mut kept = String::with_capacity(contents.len());
        for line in contents.lines() {
            if !phones.contains(line.trim()) {
                kept.push_str(line);
                kept.push('\n');
            }
        }

        file.seek(SeekFrom::Start(0))?;
        file.set_len(0)?;
        file.write_all(kept.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}
