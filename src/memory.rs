use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Counting wrapper around the system allocator.
///
/// Installed as the crate's `#[global_allocator]` so the benchmark harness
/// can sample peak heap usage per run. Keeps a live-bytes counter and a
/// high-water mark; [`AllocationSpan`] reads both.
pub struct TrackingAllocator;

static LIVE: AtomicUsize = AtomicUsize::new(0);
static PEAK: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            let live = LIVE.fetch_add(layout.size(), Ordering::Relaxed) + layout.size();
            PEAK.fetch_max(live, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        LIVE.fetch_sub(layout.size(), Ordering::Relaxed);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            if new_size >= layout.size() {
                let grown = new_size - layout.size();
                let live = LIVE.fetch_add(grown, Ordering::Relaxed) + grown;
                PEAK.fetch_max(live, Ordering::Relaxed);
            } else {
                LIVE.fetch_sub(layout.size() - new_size, Ordering::Relaxed);
            }
        }
        new_ptr
    }
}

static MEASUREMENT_LOCK: Mutex<()> = Mutex::new(());

/// Scoped handle over one measured run: begin resets the high-water mark to
/// the current live count, finishing reads the peak delta.
///
/// A span holds a global lock for its lifetime. Measured workloads therefore
/// never overlap, which keeps each run's peak reading isolated from the
/// previous one instead of growing monotonically across repetitions.
pub struct AllocationSpan {
    baseline: usize,
    _guard: MutexGuard<'static, ()>,
}

impl AllocationSpan {
    pub fn begin() -> Self {
        let guard = MEASUREMENT_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let baseline = LIVE.load(Ordering::Relaxed);
        PEAK.store(baseline, Ordering::Relaxed);
        AllocationSpan {
            baseline,
            _guard: guard,
        }
    }

    /// Peak bytes allocated above the baseline since `begin`.
    pub fn peak_bytes(self) -> usize {
        PEAK.load(Ordering::Relaxed).saturating_sub(self.baseline)
    }
}
