//! Pending requests for entry points that answer through a callback.
//!
//! Each operation kind has its own [`Registry`] mapping a token to the request
//! waiting for it. The token travels through the native library in the first
//! user-data slot of the callback info; the trampoline in [`crate::callback`]
//! hands the result back by token. Nothing that lives in host memory is ever
//! given to the native side.

use std::{
    collections::BTreeMap,
    fmt,
    future::Future,
    marker::PhantomData,
    pin::Pin,
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc,
    },
    task::{Context, Poll},
    thread,
};

use parking_lot::Mutex;

use crate::{
    ffi::{self, procs},
    native, wire, Result,
};

/// What a trampoline delivers: the status, one result word and the message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Completion {
    pub status: u32,
    /// A handle for adapter and device requests, the error type for error scopes.
    pub value: usize,
    pub message: String,
}

#[derive(Default)]
struct Pending {
    done: AtomicBool,
    slot: Mutex<Option<Completion>>,
}

impl Pending {
    fn take(&self) -> Option<Completion> {
        if self.done.load(Ordering::Acquire) {
            self.slot.lock().take()
        } else {
            None
        }
    }
}

/// Requests of one operation kind still waiting for their callback.
pub(crate) struct Registry {
    name: &'static str,
    next: AtomicU64,
    map: Mutex<BTreeMap<u64, Arc<Pending>>>,
}

impl Registry {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            next: AtomicU64::new(1),
            map: parking_lot::const_mutex(BTreeMap::new()),
        }
    }

    fn insert(&self) -> (u64, Arc<Pending>) {
        let token = self.next.fetch_add(1, Ordering::Relaxed);
        let pending = Arc::new(Pending::default());
        self.map.lock().insert(token, Arc::clone(&pending));
        (token, pending)
    }

    /// Delivers `completion` to the request waiting on `token`.
    ///
    /// Returns `false` if no request is waiting, e.g. because it was dropped.
    pub fn complete(&self, token: u64, completion: Completion) -> bool {
        let pending = self.map.lock().remove(&token);
        match pending {
            Some(pending) => {
                *pending.slot.lock() = Some(completion);
                pending.done.store(true, Ordering::Release);
                true
            }
            None => {
                log::warn!("{} callback for unknown request {}", self.name, token);
                false
            }
        }
    }

    fn cancel(&self, token: u64) {
        self.map.lock().remove(&token);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.map.lock().len()
    }
}

pub(crate) static ADAPTER_REQUESTS: Registry = Registry::new("RequestAdapter");
pub(crate) static DEVICE_REQUESTS: Registry = Registry::new("RequestDevice");
pub(crate) static MAP_REQUESTS: Registry = Registry::new("MapAsync");
pub(crate) static ERROR_SCOPE_POPS: Registry = Registry::new("PopErrorScope");

/// How a request makes progress.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Pump {
    /// `wgpuInstanceProcessEvents` on this instance.
    Instance(usize),
    /// `wgpuDevicePoll` without waiting on this device.
    Device(usize),
}

impl Pump {
    fn run(self) -> Result<()> {
        // SAFETY: the handle is kept alive by the borrow the request holds.
        unsafe {
            match self {
                Self::Instance(instance) => procs::INSTANCE_PROCESS_EVENTS.invoke(&[instance]),
                Self::Device(device) => {
                    procs::DEVICE_POLL.invoke(&[device, native::FALSE as usize, 0])
                }
            }
        }
        .map(|_| ())
    }
}

/// Turns a completion into the request's result. `context` is a word the caller
/// stashed when issuing the request.
pub(crate) type Finish<T> = fn(usize, Completion) -> Result<T>;

/// A request that completes through a native callback.
///
/// Call [`wait`](Self::wait) to block until the result arrives, poll it
/// with [`try_take`](Self::try_take), or `.await` it. Either way the request makes
/// progress only while it is being waited on, since the binding asks the native
/// library to run callbacks from event processing alone.
///
/// Dropping an unfinished request abandons it.
#[must_use = "requests make progress only while waited on"]
pub struct Request<'a, T> {
    token: u64,
    pending: Arc<Pending>,
    registry: &'static Registry,
    pump: Pump,
    context: usize,
    finish: Finish<T>,
    taken: bool,
    _parent: PhantomData<&'a ()>,
}

impl<T> fmt::Debug for Request<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("kind", &self.registry.name)
            .field("token", &self.token)
            .field("pump", &self.pump)
            .finish()
    }
}

impl<'a, T> Request<'a, T> {
    /// Registers a request and issues it.
    ///
    /// `issue` receives the callback info to pass to the native entry point. If it
    /// fails, the registration is withdrawn.
    pub(crate) fn issue(
        registry: &'static Registry,
        callback: usize,
        pump: Pump,
        context: usize,
        finish: Finish<T>,
        issue: impl FnOnce(wire::CallbackInfo) -> Result<usize>,
    ) -> Result<Self> {
        let (token, pending) = registry.insert();
        let info = wire::CallbackInfo {
            mode: native::callback_mode::ALLOW_PROCESS_EVENTS,
            callback,
            userdata1: token as usize,
            ..Default::default()
        };
        match issue(info) {
            Ok(future) => {
                log::trace!("{} request {} issued as future {}", registry.name, token, future);
                Ok(Self {
                    token,
                    pending,
                    registry,
                    pump,
                    context,
                    finish,
                    taken: false,
                    _parent: PhantomData,
                })
            }
            Err(e) => {
                registry.cancel(token);
                Err(e)
            }
        }
    }

    fn take(&mut self) -> Option<Result<T>> {
        if self.taken {
            return None;
        }
        let completion = self.pending.take()?;
        self.taken = true;
        Some((self.finish)(self.context, completion))
    }

    /// Pumps events once and returns the result if it has arrived.
    ///
    /// Returns `None` while the request is outstanding, and after the result has
    /// been taken.
    pub fn try_take(&mut self) -> Option<Result<T>> {
        if let Some(result) = self.take() {
            return Some(result);
        }
        if self.taken {
            return None;
        }
        if let Err(e) = self.pump.run() {
            return Some(Err(e));
        }
        self.take()
    }

    /// Pumps events until the result arrives.
    pub fn wait(mut self) -> Result<T> {
        loop {
            if let Some(result) = self.try_take() {
                return result;
            }
            thread::yield_now();
        }
    }
}

impl<T> Future for Request<'_, T> {
    type Output = Result<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match this.try_take() {
            Some(result) => Poll::Ready(result),
            None => {
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }
}

impl<T> Drop for Request<'_, T> {
    fn drop(&mut self) {
        if self.taken {
            return;
        }
        self.registry.cancel(self.token);
        // A result that arrived but was never taken may own a native handle.
        if let Some(result) = self.take() {
            drop(result);
        }
    }
}

/// Issues `proc` with `args` followed by a callback info naming `callback` and a
/// fresh token of `registry`.
///
/// # Safety
///
/// `args` must be valid for `proc`, and `callback` must be the trampoline that
/// completes requests of `registry`.
pub(crate) unsafe fn call_async<'a, T>(
    proc: &'static ffi::Procedure,
    args: &[usize],
    registry: &'static Registry,
    callback: usize,
    pump: Pump,
    context: usize,
    finish: Finish<T>,
) -> Result<Request<'a, T>> {
    Request::issue(registry, callback, pump, context, finish, |info| {
        // SAFETY: forwarded from the caller.
        unsafe { proc.call_with(args, info) }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Barrier;

    use super::*;

    static TEST_REQUESTS: Registry = Registry::new("Test");

    fn finish_value(context: usize, c: Completion) -> Result<usize> {
        Ok(context * 1000 + c.value)
    }

    fn request(context: usize) -> Request<'static, usize> {
        Request::issue(
            &TEST_REQUESTS,
            0,
            Pump::Instance(0),
            context,
            finish_value,
            |_| Ok(0),
        )
        .unwrap()
    }

    #[test]
    fn complete_delivers_once() {
        let mut req = request(1);
        assert!(TEST_REQUESTS.complete(
            req.token,
            Completion {
                status: 1,
                value: 7,
                message: String::new(),
            }
        ));
        assert!(!TEST_REQUESTS.complete(req.token, Completion::default()));
        assert_eq!(req.take().unwrap().unwrap(), 1007);
        assert!(req.take().is_none());
    }

    #[test]
    fn failed_issue_withdraws() {
        let before = TEST_REQUESTS.next.load(Ordering::Relaxed);
        let err = Request::<usize>::issue(
            &TEST_REQUESTS,
            0,
            Pump::Instance(0),
            0,
            finish_value,
            |_| Err(crate::Error::MissingSymbol("wgpuTest")),
        )
        .unwrap_err();
        assert!(matches!(err, crate::Error::MissingSymbol(_)));
        assert!(!TEST_REQUESTS.map.lock().contains_key(&before));
    }

    #[test]
    fn dropped_request_is_cancelled() {
        let req = request(0);
        let token = req.token;
        drop(req);
        assert!(!TEST_REQUESTS.complete(token, Completion::default()));
    }

    #[test]
    fn concurrent_requests_are_isolated() {
        static ISOLATED: Registry = Registry::new("Isolated");
        const THREADS: usize = 16;
        const PER_THREAD: usize = 64;

        let mut requests: Vec<_> = (0..THREADS * PER_THREAD)
            .map(|i| {
                Request::issue(&ISOLATED, 0, Pump::Instance(0), i, finish_value, |_| Ok(0))
                    .unwrap()
            })
            .collect();
        let tokens: Vec<(u64, usize)> = requests.iter().map(|r| (r.token, r.context)).collect();

        let barrier = Barrier::new(THREADS);
        thread::scope(|s| {
            for chunk in tokens.chunks(PER_THREAD) {
                let barrier = &barrier;
                s.spawn(move || {
                    barrier.wait();
                    for &(token, context) in chunk.iter().rev() {
                        assert!(ISOLATED.complete(
                            token,
                            Completion {
                                status: 1,
                                value: context,
                                message: format!("{context}"),
                            }
                        ));
                    }
                });
            }
        });

        assert_eq!(ISOLATED.len(), 0);
        for req in &mut requests {
            let context = req.context;
            assert_eq!(req.take().unwrap().unwrap(), context * 1000 + context);
        }
    }
}
