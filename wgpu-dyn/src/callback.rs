//! Stable `extern "C"` entry points the native library calls back into.
//!
//! One trampoline per operation kind. Each recovers the request token from the
//! first user-data slot, copies the message out of native memory and hands the
//! result to the matching [`Registry`](crate::request::Registry). None of them
//! unwind into the native caller.

use std::{
    panic::{self, AssertUnwindSafe},
    sync::OnceLock,
};

use crate::{
    ffi::procs,
    native,
    request::{self, Completion},
    wire::StringView,
};

/// Messages this long or longer are taken to be garbage and dropped.
pub(crate) const MAX_MESSAGE_LEN: usize = 1 << 20;

/// Addresses of the trampolines, fixed for the life of the process.
#[derive(Debug)]
pub(crate) struct Trampolines {
    pub request_adapter: usize,
    pub request_device: usize,
    pub buffer_map: usize,
    pub pop_error_scope: usize,
    pub device_lost: usize,
    pub uncaptured_error: usize,
    pub log: usize,
}

static TRAMPOLINES: OnceLock<Trampolines> = OnceLock::new();

pub(crate) fn trampolines() -> &'static Trampolines {
    TRAMPOLINES.get_or_init(|| {
        let trampolines = Trampolines {
            request_adapter: request_adapter as usize,
            request_device: request_device as usize,
            buffer_map: buffer_map as usize,
            pop_error_scope: pop_error_scope as usize,
            device_lost: device_lost as usize,
            uncaptured_error: uncaptured_error as usize,
            log: native_log as usize,
        };
        log::debug!("Callback trampolines at {:x?}", trampolines);
        trampolines
    })
}

/// Copies a callback message into host memory.
///
/// # Safety
///
/// `message` must be a string view the native library just passed in.
unsafe fn read_message(message: StringView) -> String {
    if message.is_null() {
        return String::new();
    }
    if message.length != native::STRLEN && message.length >= MAX_MESSAGE_LEN {
        log::warn!("Dropping callback message of {} bytes", message.length);
        return String::new();
    }
    // SAFETY: forwarded from the caller.
    let len = unsafe { message.resolved_len() };
    if len >= MAX_MESSAGE_LEN {
        log::warn!("Dropping callback message of {} bytes", len);
        return String::new();
    }
    // SAFETY: forwarded from the caller.
    unsafe { message.to_string_lossy() }
}

fn guarded(name: &str, body: impl FnOnce()) {
    if panic::catch_unwind(AssertUnwindSafe(body)).is_err() {
        log::error!("Panic in {} callback", name);
    }
}

pub(crate) extern "C" fn request_adapter(
    status: u32,
    adapter: usize,
    message: StringView,
    userdata1: usize,
    _userdata2: usize,
) {
    guarded("RequestAdapter", || {
        // SAFETY: the view is valid for the duration of the callback.
        let message = unsafe { read_message(message) };
        let delivered = request::ADAPTER_REQUESTS.complete(
            userdata1 as u64,
            Completion {
                status,
                value: adapter,
                message,
            },
        );
        if !delivered && adapter != 0 {
            // SAFETY: nobody else will ever see this reference.
            let _ = unsafe { procs::ADAPTER_RELEASE.invoke(&[adapter]) };
        }
    })
}

pub(crate) extern "C" fn request_device(
    status: u32,
    device: usize,
    message: StringView,
    userdata1: usize,
    _userdata2: usize,
) {
    guarded("RequestDevice", || {
        // SAFETY: the view is valid for the duration of the callback.
        let message = unsafe { read_message(message) };
        let delivered = request::DEVICE_REQUESTS.complete(
            userdata1 as u64,
            Completion {
                status,
                value: device,
                message,
            },
        );
        if !delivered && device != 0 {
            // SAFETY: nobody else will ever see this reference.
            let _ = unsafe { procs::DEVICE_RELEASE.invoke(&[device]) };
        }
    })
}

pub(crate) extern "C" fn buffer_map(
    status: u32,
    message: StringView,
    userdata1: usize,
    _userdata2: usize,
) {
    guarded("MapAsync", || {
        // SAFETY: the view is valid for the duration of the callback.
        let message = unsafe { read_message(message) };
        request::MAP_REQUESTS.complete(
            userdata1 as u64,
            Completion {
                status,
                value: 0,
                message,
            },
        );
    })
}

pub(crate) extern "C" fn pop_error_scope(
    status: u32,
    ty: u32,
    message: StringView,
    userdata1: usize,
    _userdata2: usize,
) {
    guarded("PopErrorScope", || {
        // SAFETY: the view is valid for the duration of the callback.
        let message = unsafe { read_message(message) };
        request::ERROR_SCOPE_POPS.complete(
            userdata1 as u64,
            Completion {
                status,
                value: ty as usize,
                message,
            },
        );
    })
}

pub(crate) extern "C" fn device_lost(
    _device: *const usize,
    reason: u32,
    message: StringView,
    _userdata1: usize,
    _userdata2: usize,
) {
    guarded("DeviceLost", || {
        // SAFETY: the view is valid for the duration of the callback.
        let message = unsafe { read_message(message) };
        match reason {
            native::device_lost_reason::DESTROYED | native::device_lost_reason::INSTANCE_DROPPED => {
                log::debug!("Device lost ({}): {}", reason, message)
            }
            _ => log::warn!("Device lost ({}): {}", reason, message),
        }
    })
}

pub(crate) extern "C" fn uncaptured_error(
    _device: *const usize,
    ty: u32,
    message: StringView,
    _userdata1: usize,
    _userdata2: usize,
) {
    guarded("UncapturedError", || {
        // SAFETY: the view is valid for the duration of the callback.
        let message = unsafe { read_message(message) };
        match crate::conv::map_error_kind(ty) {
            Some(kind) => log::error!("Uncaptured {} error: {}", kind, message),
            None => log::debug!("Uncaptured error callback without error: {}", message),
        }
    })
}

pub(crate) extern "C" fn native_log(level: u32, message: StringView, _userdata: usize) {
    guarded("Log", || {
        // SAFETY: the view is valid for the duration of the callback.
        let message = unsafe { read_message(message) };
        let level = match level {
            native::log_level::ERROR => log::Level::Error,
            native::log_level::WARN => log::Level::Warn,
            native::log_level::INFO => log::Level::Info,
            native::log_level::DEBUG => log::Level::Debug,
            _ => log::Level::Trace,
        };
        log::log!(target: crate::logging::TARGET, level, "{}", message);
    })
}

#[cfg(test)]
mod tests {
    use std::{sync::Barrier, thread};

    use super::*;
    use crate::{
        native::request_device_status,
        request::{Pump, Request},
        Result,
    };

    fn finish(_: usize, c: Completion) -> Result<(u32, usize, String)> {
        Ok((c.status, c.value, c.message))
    }

    #[test]
    fn trampolines_are_stable() {
        let first = trampolines() as *const Trampolines;
        let second = trampolines() as *const Trampolines;
        assert_eq!(first, second);
        assert_eq!(trampolines().buffer_map, buffer_map as usize);
    }

    #[test]
    fn oversized_message_is_dropped() {
        let bytes = b"x";
        let view = StringView {
            data: bytes.as_ptr(),
            length: MAX_MESSAGE_LEN,
        };
        assert_eq!(unsafe { read_message(view) }, "");
        let view = StringView {
            data: bytes.as_ptr(),
            length: 1,
        };
        assert_eq!(unsafe { read_message(view) }, "x");
        assert_eq!(unsafe { read_message(StringView::NULL) }, "");
    }

    #[test]
    fn map_trampoline_completes_request() {
        let mut request = Request::issue(
            &request::MAP_REQUESTS,
            trampolines().buffer_map,
            Pump::Device(0),
            0,
            finish,
            |info| {
                let message = "mapped";
                buffer_map(
                    native::map_async_status::SUCCESS,
                    StringView::new(message),
                    info.userdata1,
                    info.userdata2,
                );
                Ok(0)
            },
        )
        .unwrap();
        let (status, _, message) = request.try_take().unwrap().unwrap();
        assert_eq!(status, native::map_async_status::SUCCESS);
        assert_eq!(message, "mapped");
    }

    #[test]
    fn concurrent_device_callbacks_do_not_cross() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 32;

        // Failed requests carry no handle, so nothing is released.
        let mut requests: Vec<_> = (0..THREADS * PER_THREAD)
            .map(|_| {
                let mut userdata = 0;
                let request = Request::issue(
                    &request::DEVICE_REQUESTS,
                    trampolines().request_device,
                    Pump::Instance(0),
                    0,
                    finish,
                    |info| {
                        userdata = info.userdata1;
                        Ok(0)
                    },
                )
                .unwrap();
                (userdata, request)
            })
            .collect();

        let barrier = Barrier::new(THREADS);
        thread::scope(|s| {
            for chunk in requests.chunks(PER_THREAD) {
                let barrier = &barrier;
                let tokens: Vec<usize> = chunk.iter().map(|(token, _)| *token).collect();
                s.spawn(move || {
                    barrier.wait();
                    for token in tokens {
                        let message = format!("request {token}");
                        request_device(
                            request_device_status::ERROR,
                            0,
                            StringView::new(&message),
                            token,
                            0,
                        );
                    }
                });
            }
        });

        for (token, request) in &mut requests {
            let (status, device, message) = request.try_take().unwrap().unwrap();
            assert_eq!(status, request_device_status::ERROR);
            assert_eq!(device, 0);
            assert_eq!(message, format!("request {token}"));
        }
    }

    #[test]
    fn unknown_token_is_ignored() {
        pop_error_scope(1, 2, StringView::NULL, usize::MAX, 0);
        buffer_map(1, StringView::new("late"), usize::MAX - 1, 0);
        native_log(native::log_level::WARN, StringView::new("from native"), 0);
    }
}
