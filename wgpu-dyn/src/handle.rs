//! Ownership of native handles and the optional leak tracker.
//!
//! Every object the façade hands out owns exactly one native reference through a
//! [`RawHandle`]. Releasing is idempotent: the first release untracks the handle,
//! calls the native release entry point and zeroes the slot; later releases see
//! the zero and return.
//!
//! The tracker counts references, not addresses. Two handles at the same address
//! (a queue fetched twice, say) are two entries until both are released.
//! References the binding takes for itself are never tracked.

use std::{
    collections::BTreeMap,
    fmt,
    sync::atomic::{AtomicBool, Ordering},
};

use parking_lot::Mutex;

use crate::{ffi::Procedure, Error, Result};

static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

struct Tracker {
    /// Kind and reference count per address.
    live: BTreeMap<usize, (&'static str, usize)>,
    /// References per kind.
    counts: BTreeMap<&'static str, usize>,
}

static TRACKER: Mutex<Tracker> = parking_lot::const_mutex(Tracker {
    live: BTreeMap::new(),
    counts: BTreeMap::new(),
});

/// Snapshot of the native objects that are still alive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeakReport {
    /// Number of outstanding objects across all kinds.
    pub total: usize,
    /// Outstanding objects per kind, e.g. `"Buffer"`.
    pub kinds: BTreeMap<&'static str, usize>,
}

impl fmt::Display for LeakReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} leaked", self.total)?;
        let mut sep = ": ";
        for (kind, count) in &self.kinds {
            write!(f, "{sep}{kind} x{count}")?;
            sep = ", ";
        }
        Ok(())
    }
}

/// Turns leak tracking on or off.
///
/// Objects created while tracking is off are never counted, even if tracking is
/// turned on later.
pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::Relaxed);
}

/// Returns `true` if leak tracking is on.
pub fn debug_mode() -> bool {
    DEBUG_MODE.load(Ordering::Relaxed)
}

/// Returns the outstanding objects, or `None` if there are none or tracking is off.
pub fn report_leaks() -> Option<LeakReport> {
    if !debug_mode() {
        return None;
    }
    let tracker = TRACKER.lock();
    if tracker.live.is_empty() {
        return None;
    }
    Some(LeakReport {
        total: tracker.counts.values().sum(),
        kinds: tracker.counts.clone(),
    })
}

/// Forgets every tracked object.
pub fn reset_leak_tracker() {
    let mut tracker = TRACKER.lock();
    tracker.live.clear();
    tracker.counts.clear();
}

/// Records one reference. Returns `false` if nothing was recorded.
fn track(raw: usize, kind: &'static str) -> bool {
    if raw == 0 || !debug_mode() {
        return false;
    }
    let mut tracker = TRACKER.lock();
    tracker.live.entry(raw).or_insert((kind, 0)).1 += 1;
    *tracker.counts.entry(kind).or_default() += 1;
    true
}

/// Drops one reference recorded by [`track`].
fn untrack(raw: usize) {
    let mut tracker = TRACKER.lock();
    let (kind, remaining) = match tracker.live.get_mut(&raw) {
        Some((kind, refs)) => {
            *refs -= 1;
            (*kind, *refs)
        }
        // Forgotten by a reset.
        None => return,
    };
    if remaining == 0 {
        tracker.live.remove(&raw);
    }
    if let Some(count) = tracker.counts.get_mut(kind) {
        *count -= 1;
        if *count == 0 {
            tracker.counts.remove(kind);
        }
    }
}

/// One owned reference to a native object.
pub(crate) struct RawHandle {
    raw: usize,
    kind: &'static str,
    release: &'static Procedure,
    /// Whether this reference is counted by the leak tracker.
    tracked: bool,
}

impl fmt::Debug for RawHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:#x})", self.kind, self.raw)
    }
}

impl RawHandle {
    /// Takes ownership of a reference returned by a native factory.
    ///
    /// A null handle means creation failed.
    pub fn new(raw: usize, kind: &'static str, release: &'static Procedure) -> Result<Self> {
        if raw == 0 {
            log::debug!("Creating {} returned null", kind);
            return Err(Error::CreationFailed { kind });
        }
        let tracked = track(raw, kind);
        log::debug!("Created {} {:#x}", kind, raw);
        Ok(Self {
            raw,
            kind,
            release,
            tracked,
        })
    }

    /// Takes ownership of an internal reference, which is never tracked.
    pub fn retained(raw: usize, kind: &'static str, release: &'static Procedure) -> Self {
        Self {
            raw,
            kind,
            release,
            tracked: false,
        }
    }

    /// A handle in the released state.
    pub const fn null(kind: &'static str, release: &'static Procedure) -> Self {
        Self {
            raw: 0,
            kind,
            release,
            tracked: false,
        }
    }

    pub fn raw(&self) -> usize {
        self.raw
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn is_released(&self) -> bool {
        self.raw == 0
    }

    /// The raw handle, or [`Error::Released`] if there is none.
    pub fn get(&self) -> Result<usize> {
        match self.raw {
            0 => Err(Error::Released { kind: self.kind }),
            raw => Ok(raw),
        }
    }

    pub fn release(&mut self) {
        let raw = self.raw;
        if raw == 0 {
            return;
        }
        if self.tracked {
            untrack(raw);
            self.tracked = false;
        }
        // SAFETY: `raw` is a live reference owned by this handle.
        if let Err(e) = unsafe { self.release.invoke(&[raw]) } {
            log::warn!("Releasing {} {:#x} failed: {}", self.kind, raw, e);
        }
        log::debug!("Released {} {:#x}", self.kind, raw);
        self.raw = 0;
    }
}

impl Drop for RawHandle {
    fn drop(&mut self) {
        self.release();
    }
}

/// Implements the handle accessors every façade type shares.
macro_rules! impl_handle {
    ($ty:ident) => {
        impl $ty {
            /// The native handle, or zero once released.
            pub fn raw(&self) -> usize {
                self.handle.raw()
            }

            /// Returns `true` once the native reference has been given up.
            pub fn is_released(&self) -> bool {
                self.handle.is_released()
            }

            /// Gives up the native reference.
            ///
            /// Calling this more than once does nothing. Dropping the object
            /// releases it too.
            pub fn release(&mut self) {
                self.handle.release();
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.handle.raw() == other.handle.raw()
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.handle.raw().hash(state)
            }
        }
    };
}
pub(crate) use impl_handle;

#[cfg(test)]
pub(crate) mod tests {
    use parking_lot::{Mutex, MutexGuard};

    use super::*;
    use crate::ffi::{procs, Cif, Ret};

    static SERIAL: Mutex<()> = parking_lot::const_mutex(());

    /// The tracker is process-wide; tests touching it run one at a time.
    pub(crate) fn serial() -> MutexGuard<'static, ()> {
        let guard = SERIAL.lock();
        reset_leak_tracker();
        guard
    }

    /// A handle that was never live, so releasing it never reaches the library.
    fn fake(raw: usize, kind: &'static str) -> RawHandle {
        let tracked = track(raw, kind);
        RawHandle {
            raw,
            kind,
            release: &procs::BUFFER_RELEASE,
            tracked,
        }
    }

    fn forget(mut handle: RawHandle) {
        if handle.tracked {
            untrack(handle.raw);
        }
        handle.raw = 0;
    }

    #[test]
    fn null_is_never_tracked() {
        let _guard = serial();
        set_debug_mode(true);
        assert!(matches!(
            RawHandle::new(0, "Buffer", &procs::BUFFER_RELEASE),
            Err(Error::CreationFailed { kind: "Buffer" })
        ));
        assert_eq!(report_leaks(), None);
        set_debug_mode(false);
    }

    #[test]
    fn released_handle_is_inert() {
        let mut handle = RawHandle::null("Texture", &procs::TEXTURE_RELEASE);
        assert!(handle.is_released());
        assert!(matches!(handle.get(), Err(Error::Released { kind: "Texture" })));
        handle.release();
        handle.release();
        assert_eq!(handle.raw(), 0);
    }

    #[test]
    fn counts_decrement_once() {
        let _guard = serial();
        set_debug_mode(true);
        let a = fake(0x1000, "Buffer");
        let b = fake(0x2000, "Buffer");
        let c = fake(0x3000, "Sampler");

        let report = report_leaks().unwrap();
        assert_eq!(report.total, 3);
        assert_eq!(report.kinds["Buffer"], 2);
        assert_eq!(report.kinds["Sampler"], 1);

        forget(a);
        // Already untracked.
        untrack(0x1000);
        let report = report_leaks().unwrap();
        assert_eq!(report.total, 2);
        assert_eq!(report.kinds["Buffer"], 1);

        forget(b);
        let report = report_leaks().unwrap();
        assert_eq!(report.to_string(), "1 leaked: Sampler x1");
        forget(c);
        assert_eq!(report_leaks(), None);
        set_debug_mode(false);
    }

    #[test]
    fn retained_reference_leaves_owner_tracked() {
        // Never exported, so releasing cannot reach a loaded library.
        static NOT_EXPORTED: Procedure =
            Procedure::new("wgpuNotExported", b"wgpuNotExported\0", Cif::words(1, Ret::Void));

        let _guard = serial();
        set_debug_mode(true);
        let device = fake(0x9000, "Device");
        let mut parent = RawHandle::retained(0x9000, "Device", &NOT_EXPORTED);
        parent.release();
        assert!(parent.is_released());

        let report = report_leaks().unwrap();
        assert_eq!(report.total, 1);
        assert_eq!(report.kinds["Device"], 1);

        forget(device);
        assert_eq!(report_leaks(), None);
        set_debug_mode(false);
    }

    #[test]
    fn each_reference_to_an_address_is_counted() {
        let _guard = serial();
        set_debug_mode(true);
        let first = fake(0xA000, "Queue");
        let second = fake(0xA000, "Queue");
        assert_eq!(report_leaks().unwrap().total, 2);

        forget(first);
        let report = report_leaks().unwrap();
        assert_eq!(report.total, 1);
        assert_eq!(report.kinds["Queue"], 1);

        forget(second);
        assert_eq!(report_leaks(), None);
        set_debug_mode(false);
    }

    #[test]
    fn reset_then_release_does_not_underflow() {
        let _guard = serial();
        set_debug_mode(true);
        let stale = fake(0xB000, "Sampler");
        reset_leak_tracker();
        let fresh = fake(0xC000, "Sampler");
        forget(stale);
        assert_eq!(report_leaks().unwrap().kinds["Sampler"], 1);
        forget(fresh);
        assert_eq!(report_leaks(), None);
        set_debug_mode(false);
    }

    #[test]
    fn tracking_off_is_never_counted() {
        let _guard = serial();
        set_debug_mode(false);
        let handle = fake(0x4000, "QuerySet");
        set_debug_mode(true);
        assert_eq!(report_leaks(), None);
        forget(handle);
        set_debug_mode(false);
    }

    #[test]
    fn reset_forgets_everything() {
        let _guard = serial();
        set_debug_mode(true);
        let handle = fake(0x5000, "Device");
        assert!(report_leaks().is_some());
        reset_leak_tracker();
        assert_eq!(report_leaks(), None);
        forget(handle);
        set_debug_mode(false);
    }
}
