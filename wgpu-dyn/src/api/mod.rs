//! Types and functions which define our public api and their
//! helper functionality.
//!
//! # Conventions
//!
//! Every object owns one native reference through a [`RawHandle`] and gives it up
//! on [`release`](Buffer::release) or on drop, whichever comes first. Operations
//! on a released object fail with [`Error::Released`] without reaching the
//! native library; record-only encoder commands, which have no result, are
//! skipped with a log message instead.
//!
//! Releasing a parent before its children is allowed by the binding but left to
//! the native reference counting. Nothing is cascaded.

mod adapter;
mod bind_group;
mod bind_group_layout;
mod buffer;
mod command_buffer;
mod command_encoder;
mod compute_pass;
mod compute_pipeline;
mod device;
mod instance;
mod pipeline_layout;
mod query_set;
mod queue;
mod render_bundle;
mod render_bundle_encoder;
mod render_pass;
mod render_pipeline;
mod sampler;
mod shader_module;
mod surface;
mod texture;
mod texture_view;

pub use adapter::*;
pub use bind_group::*;
pub use bind_group_layout::*;
pub use buffer::*;
pub use command_buffer::*;
pub use command_encoder::*;
pub use compute_pass::*;
pub use compute_pipeline::*;
pub use device::*;
pub use instance::*;
pub use pipeline_layout::*;
pub use query_set::*;
pub use queue::*;
pub use render_bundle::*;
pub use render_bundle_encoder::*;
pub use render_pass::*;
pub use render_pipeline::*;
pub use sampler::*;
pub use shader_module::*;
pub use surface::*;
pub use texture::*;
pub use texture_view::*;

use crate::{
    ffi::Procedure,
    handle::RawHandle,
    wire::{self, StringView},
    Error,
};

/// Object debugging label.
pub type Label<'a> = Option<&'a str>;

/// Records one command through an entry point that has no result.
///
/// A released receiver or argument object is skipped; errors the native
/// library finds in the command land in the device error scope.
///
/// # Safety
///
/// Every pointer `args` produces must be valid for the duration of the call.
pub(crate) unsafe fn record<const N: usize>(
    handle: &RawHandle,
    proc: &'static Procedure,
    args: impl FnOnce(usize) -> crate::Result<[usize; N]>,
) {
    let args = match handle.get().and_then(args) {
        Ok(args) => args,
        Err(e) => return skipped(proc, e),
    };
    // SAFETY: forwarded from the caller.
    if let Err(e) = unsafe { proc.invoke(&args) } {
        log::warn!("{} failed: {}", proc.name(), e);
    }
}

/// Records a debug marker or group label.
pub(crate) fn record_label(handle: &RawHandle, proc: &'static Procedure, label: &str) {
    let raw = match handle.get() {
        Ok(raw) => raw,
        Err(e) => return skipped(proc, e),
    };
    // SAFETY: the view borrows `label`, which outlives the call.
    if let Err(e) = unsafe { proc.call_with(&[raw], StringView::new(label)) } {
        log::warn!("{} failed: {}", proc.name(), e);
    }
}

fn skipped(proc: &'static Procedure, error: Error) {
    match error {
        Error::Released { kind } => {
            log::debug!("Skipping {} on a released {}", proc.name(), kind)
        }
        other => log::warn!("Skipping {}: {}", proc.name(), other),
    }
}

/// Raw handle of an optional object, zero for `None`.
pub(crate) fn optional_raw(handle: Option<&RawHandle>) -> crate::Result<wire::Handle> {
    handle.map_or(Ok(0), RawHandle::get)
}
