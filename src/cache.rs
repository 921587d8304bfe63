//! Persistent score cache keyed by board fingerprint.
//!
//! Scores are perspective-dependent, so each searcher owns its own cache;
//! sharing one file between both sides would alias positions to the wrong
//! sign.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use parking_lot::RwLock;

/// Thread-safe fingerprint-to-score map with optional file persistence.
#[derive(Debug, Default)]
pub struct ScoreCache {
    entries: RwLock<HashMap<u64, f64>>,
}

impl ScoreCache {
    #[must_use]
    pub fn new() -> Self {
        ScoreCache {
            entries: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn get(&self, fingerprint: u64) -> Option<f64> {
        self.entries.read().get(&fingerprint).copied()
    }

    /// Insert a score. Re-inserting the same fingerprint overwrites, which
    /// is idempotent because scores are a pure function of the position.
    pub fn put(&self, fingerprint: u64, score: f64) {
        self.entries.write().insert(fingerprint, score);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Load entries from `path`, one `fingerprint:score` pair per line.
    /// A missing file is an empty cache, not an error. Malformed lines are
    /// skipped with a warning.
    pub fn load(&self, path: &Path) -> io::Result<usize> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(err) => return Err(err),
        };
        let mut loaded = 0;
        let mut entries = self.entries.write();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let parsed = line.split_once(':').and_then(|(key, value)| {
                let key = key.trim().parse::<u64>().ok()?;
                let value = value.trim().parse::<f64>().ok()?;
                Some((key, value))
            });
            match parsed {
                Some((fingerprint, score)) => {
                    entries.insert(fingerprint, score);
                    loaded += 1;
                }
                None => log::warn!("skipping malformed cache line: {:?}", line),
            }
        }
        Ok(loaded)
    }

    /// Write all entries to `path`, replacing any previous contents.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let entries = self.entries.read();
        let mut out = String::with_capacity(entries.len() * 24);
        for (fingerprint, score) in entries.iter() {
            out.push_str(&format!("{}:{}\n", fingerprint, score));
        }
        fs::write(path, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_put() {
        let cache = ScoreCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.get(42), None);
        cache.put(42, 3.5);
        assert_eq!(cache.get(42), Some(3.5));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_put_is_idempotent() {
        let cache = ScoreCache::new();
        cache.put(7, -1.25);
        cache.put(7, -1.25);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(7), Some(-1.25));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let cache = ScoreCache::new();
        let path = std::env::temp_dir().join("woodpusher-cache-test-missing.txt");
        let _ = std::fs::remove_file(&path);
        assert_eq!(cache.load(&path).unwrap(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let cache = ScoreCache::new();
        cache.put(1, 0.5);
        cache.put(18_446_744_073_709_551_615, -200.0);
        let path = std::env::temp_dir().join("woodpusher-cache-test-roundtrip.txt");
        cache.save(&path).unwrap();

        let restored = ScoreCache::new();
        assert_eq!(restored.load(&path).unwrap(), 2);
        assert_eq!(restored.get(1), Some(0.5));
        assert_eq!(restored.get(18_446_744_073_709_551_615), Some(-200.0));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let path = std::env::temp_dir().join("woodpusher-cache-test-malformed.txt");
        std::fs::write(&path, "10:1.5\nnot a line\n:3\n11:2.5\n\n").unwrap();
        let cache = ScoreCache::new();
        assert_eq!(cache.load(&path).unwrap(), 2);
        assert_eq!(cache.get(10), Some(1.5));
        assert_eq!(cache.get(11), Some(2.5));
        let _ = std::fs::remove_file(&path);
    }
}
