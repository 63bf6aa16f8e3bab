// crates/infra/src/cache.rs
use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use log::{debug, warn};
use remote_index_domain::{Index, IndexSummary};
use remote_index_ports::{DirectoryScanner, IndexCache};
use remote_index_shared_kernel::{CacheError, CacheResult, ResolvedPath};

#[derive(Debug)]
struct Snapshot {
    index: Arc<Index>,
    /// When the scan producing `index` started.
    taken_at: Instant,
}

impl Snapshot {
    /// Usable by a caller that arrived at `arrived`: either the scan began after
    /// the caller did, or it is younger than `max_age`.
    fn satisfies(&self, arrived: Instant, max_age: Duration) -> bool {
        self.taken_at > arrived || self.taken_at.elapsed() < max_age
    }
}

type Slot = Arc<Mutex<Option<Snapshot>>>;

/// In-memory index cache with per-path staleness.
///
/// Each resolved path owns a slot guarded by its own lock. A lookup holds the
/// slot lock across a rescan, so concurrent lookups of one path queue behind a
/// single scan and then reuse its result, even with a zero threshold, as long
/// as that scan started after they arrived. Lookups of different paths never
/// wait on each other.
pub struct CachedIndex<S> {
    scanner: S,
    slots: Mutex<HashMap<PathBuf, Slot>>,
}

impl<S: DirectoryScanner> CachedIndex<S> {
    pub fn new(scanner: S) -> Self {
        Self { scanner, slots: Mutex::new(HashMap::new()) }
    }

    fn slot(&self, path: &ResolvedPath) -> CacheResult<Slot> {
        let mut slots = self.slots.lock().map_err(|_| CacheError::Poisoned { path: path.to_path_buf() })?;
        Ok(Arc::clone(slots.entry(path.to_path_buf()).or_default()))
    }

    fn snapshot(&self, path: &ResolvedPath, max_age: Duration) -> CacheResult<Arc<Index>> {
        let arrived = Instant::now();
        let slot = self.slot(path)?;
        let mut guard = match slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                // A scan panicked mid-refresh; whatever it left behind is not trusted.
                warn!("discarding snapshot of {path} after a panicked scan");
                slot.clear_poison();
                let mut guard = poisoned.into_inner();
                *guard = None;
                guard
            }
        };

        if let Some(snapshot) = guard.as_ref()
            && snapshot.satisfies(arrived, max_age)
        {
            debug!("index cache hit for {path} (age {:?})", snapshot.taken_at.elapsed());
            return Ok(Arc::clone(&snapshot.index));
        }

        debug!("rescanning {path} (max age {max_age:?})");
        let started = Instant::now();
        let index = Arc::new(self.scanner.scan(path)?);
        *guard = Some(Snapshot { index: Arc::clone(&index), taken_at: started });
        Ok(index)
    }
}

impl<S: DirectoryScanner> IndexCache for CachedIndex<S> {
    fn summary(&self, path: &ResolvedPath, max_age: Duration) -> CacheResult<IndexSummary> {
        self.snapshot(path, max_age).map(|index| index.summary())
    }

    fn full(&self, path: &ResolvedPath, max_age: Duration) -> CacheResult<Index> {
        self.snapshot(path, max_age).map(|index| Index::clone(&index))
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        path::Path,
        sync::atomic::{AtomicBool, AtomicUsize, Ordering},
        thread,
    };

    use remote_index_domain::IndexEntry;
    use remote_index_shared_kernel::{HomeDir, PathResolver};
    use tempfile::TempDir;

    use super::*;

    /// Counts scans and reports the scan number as the size of a single file.
    #[derive(Default)]
    struct CountingScanner {
        scans: AtomicUsize,
        delay: Duration,
        fail: AtomicBool,
    }

    impl CountingScanner {
        fn slow(delay: Duration) -> Self {
            Self { delay, ..Self::default() }
        }

        fn scans(&self) -> usize {
            self.scans.load(Ordering::SeqCst)
        }
    }

    impl DirectoryScanner for CountingScanner {
        fn scan(&self, root: &ResolvedPath) -> CacheResult<Index> {
            thread::sleep(self.delay);
            if self.fail.load(Ordering::SeqCst) {
                return Err(CacheError::Scan { path: root.to_path_buf(), source: std::io::Error::other("nope") });
            }
            let n = self.scans.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(Index::from_entries(root.as_path(), [IndexEntry::new("scan", n as u64)]))
        }
    }

    /// Number of paths that currently hold a snapshot.
    fn cached_paths<S: DirectoryScanner>(cache: &CachedIndex<S>) -> usize {
        let slots: Vec<Slot> = cache.slots.lock().unwrap().values().cloned().collect();
        slots.iter().filter(|slot| slot.lock().unwrap().is_some()).count()
    }

    fn resolve(dir: &Path) -> ResolvedPath {
        PathResolver::new(HomeDir::new(dir).unwrap()).resolve(dir.to_str().unwrap()).unwrap()
    }

    #[test]
    fn fresh_snapshot_is_reused() {
        let temp = TempDir::new().unwrap();
        let path = resolve(temp.path());
        let cache = CachedIndex::new(CountingScanner::default());

        let first = cache.summary(&path, Duration::from_secs(60)).unwrap();
        let second = cache.summary(&path, Duration::from_secs(60)).unwrap();

        assert_eq!(cache.scanner.scans(), 1);
        assert_eq!(first, second);
        assert_eq!(cached_paths(&cache), 1);
    }

    #[test]
    fn zero_threshold_always_rescans() {
        let temp = TempDir::new().unwrap();
        let path = resolve(temp.path());
        let cache = CachedIndex::new(CountingScanner::default());

        cache.full(&path, Duration::from_secs(60)).unwrap();
        thread::sleep(Duration::from_millis(2));
        let index = cache.full(&path, Duration::ZERO).unwrap();
        thread::sleep(Duration::from_millis(2));
        cache.full(&path, Duration::ZERO).unwrap();

        assert_eq!(cache.scanner.scans(), 3);
        assert_eq!(index.get("scan").map(|e| e.size.bytes()), Some(2));
    }

    #[test]
    fn stale_snapshot_is_refreshed() {
        let temp = TempDir::new().unwrap();
        let path = resolve(temp.path());
        let cache = CachedIndex::new(CountingScanner::default());

        cache.full(&path, Duration::from_secs(60)).unwrap();
        thread::sleep(Duration::from_millis(30));
        let index = cache.full(&path, Duration::from_millis(10)).unwrap();

        assert_eq!(cache.scanner.scans(), 2);
        assert_eq!(index.get("scan").map(|e| e.size.bytes()), Some(2));
    }

    #[test]
    fn concurrent_lookups_share_one_scan() {
        let temp = TempDir::new().unwrap();
        let path = resolve(temp.path());
        let cache = CachedIndex::new(CountingScanner::slow(Duration::from_millis(50)));

        thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| cache.full(&path, Duration::from_secs(60)).unwrap());
            }
        });

        assert_eq!(cache.scanner.scans(), 1);
    }

    #[test]
    fn zero_threshold_lookups_queued_behind_a_scan_reuse_it() {
        let temp = TempDir::new().unwrap();
        let path = resolve(temp.path());
        let cache = CachedIndex::new(CountingScanner::slow(Duration::from_millis(50)));

        thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| cache.summary(&path, Duration::ZERO).unwrap());
            }
        });

        // Callers arriving after the first scan began trigger at most one more.
        assert!(cache.scanner.scans() <= 2, "{} scans", cache.scanner.scans());
        assert_eq!(cached_paths(&cache), 1);
    }

    #[test]
    fn lookup_after_a_scan_completes_still_rescans_at_zero() {
        let temp = TempDir::new().unwrap();
        let path = resolve(temp.path());
        let cache = CachedIndex::new(CountingScanner::default());

        cache.summary(&path, Duration::ZERO).unwrap();
        thread::sleep(Duration::from_millis(2));
        let summary = cache.summary(&path, Duration::ZERO).unwrap();

        assert_eq!(cache.scanner.scans(), 2);
        assert_eq!(summary.disk_size.bytes(), 2);
    }

    #[test]
    fn different_paths_are_cached_separately() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("a")).unwrap();
        fs::create_dir(temp.path().join("b")).unwrap();
        let a = resolve(&temp.path().join("a"));
        let b = resolve(&temp.path().join("b"));
        let cache = CachedIndex::new(CountingScanner::default());

        let index_a = cache.full(&a, Duration::from_secs(60)).unwrap();
        let index_b = cache.full(&b, Duration::from_secs(60)).unwrap();

        assert_eq!(cache.scanner.scans(), 2);
        assert_eq!(index_a.root().as_path(), a.as_path());
        assert_eq!(index_b.root().as_path(), b.as_path());
    }

    #[test]
    fn failed_rescan_keeps_previous_snapshot() {
        let temp = TempDir::new().unwrap();
        let path = resolve(temp.path());
        let cache = CachedIndex::new(CountingScanner::default());

        cache.full(&path, Duration::from_secs(60)).unwrap();
        cache.scanner.fail.store(true, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(2));
        assert!(matches!(cache.full(&path, Duration::ZERO), Err(CacheError::Scan { .. })));

        let index = cache.full(&path, Duration::from_secs(60)).unwrap();
        assert_eq!(index.get("scan").map(|e| e.size.bytes()), Some(1));
    }
}
