use std::{ptr, slice};

use crate::{
    callback,
    ffi::procs,
    handle::{impl_handle, RawHandle},
    native,
    request::{self, Completion, Pump},
    *,
};

/// Handle to a GPU-accessible buffer.
///
/// Created with [`Device::create_buffer`] or
/// [`DeviceExt::create_buffer_init`](util::DeviceExt::create_buffer_init).
///
/// # Mapping buffers
///
/// A buffer is mapped with [`map_async`](Self::map_async), which blocks until
/// the device reports the mapping, or with [`request_map`](Self::request_map),
/// which returns the pending [`Request`]. While mapped, the contents are read
/// with [`read_mapped`](Self::read_mapped) and written with
/// [`write_mapped`](Self::write_mapped). Call [`unmap`](Self::unmap) before
/// the GPU touches the buffer again.
///
/// Corresponds to [WebGPU `GPUBuffer`](https://gpuweb.github.io/gpuweb/#buffer-interface).
#[derive(Debug)]
pub struct Buffer {
    pub(crate) handle: RawHandle,
    /// Reference on the device that pumps map requests.
    pub(crate) device: RawHandle,
}
static_assertions::assert_impl_all!(Buffer: Send, Sync);

impl_handle!(Buffer);

/// Describes a [`Buffer`].
///
/// For use with [`Device::create_buffer`].
///
/// Corresponds to [WebGPU `GPUBufferDescriptor`](
/// https://gpuweb.github.io/gpuweb/#dictdef-gpubufferdescriptor).
pub type BufferDescriptor<'a> = wgt::BufferDescriptor<Label<'a>>;
static_assertions::assert_impl_all!(BufferDescriptor<'_>: Send, Sync);

impl Buffer {
    /// Return the binding view of the entire buffer.
    pub fn as_entire_binding(&self) -> BindingResource<'_> {
        BindingResource::Buffer(self.as_entire_buffer_binding())
    }

    /// Return the binding view of the entire buffer.
    pub fn as_entire_buffer_binding(&self) -> BufferBinding<'_> {
        BufferBinding {
            buffer: self,
            offset: 0,
            size: None,
        }
    }

    /// Maps `size` bytes at `offset`, or everything past `offset` for `None`,
    /// blocking until the device reports the result.
    pub fn map_async(&self, mode: MapMode, offset: u64, size: Option<u64>) -> Result<()> {
        self.request_map(mode, offset, size)?.wait()
    }

    /// Starts mapping a range and returns the request unfinished.
    ///
    /// The request is pumped by polling the device without waiting.
    pub fn request_map(
        &self,
        mode: MapMode,
        offset: u64,
        size: Option<u64>,
    ) -> Result<Request<'_, ()>> {
        let buffer = self.handle.get()?;
        let device = self.device.get()?;
        let size = match size {
            Some(size) => usize::try_from(size)
                .map_err(|_| Error::InvalidArgument("map size does not fit in usize"))?,
            None => native::WHOLE_MAP_SIZE,
        };
        let offset = usize::try_from(offset)
            .map_err(|_| Error::InvalidArgument("map offset does not fit in usize"))?;
        log::trace!("Mapping buffer {:#x} at {} ({:?})", buffer, offset, mode);
        // SAFETY: plain arguments; the trampoline completes map requests.
        unsafe {
            request::call_async(
                &procs::BUFFER_MAP_ASYNC,
                &[buffer, conv::map_map_mode(mode) as usize, offset, size],
                &request::MAP_REQUESTS,
                callback::trampolines().buffer_map,
                Pump::Device(device),
                0,
                finish_map,
            )
        }
    }

    /// Returns the native pointer to a mapped writable range.
    ///
    /// The pointer is null if the range is not mapped for writing. It stays
    /// valid until [`unmap`](Self::unmap).
    pub fn get_mapped_range(&self, offset: u64, size: u64) -> Result<*mut u8> {
        let buffer = self.handle.get()?;
        let [offset, size] = mapped_range(offset, size)?;
        // SAFETY: plain arguments.
        let data = unsafe { procs::BUFFER_GET_MAPPED_RANGE.invoke(&[buffer, offset, size]) }?;
        Ok(data as *mut u8)
    }

    /// Returns the native pointer to a mapped range, for reading.
    ///
    /// The pointer is null if the range is not mapped.
    pub fn get_const_mapped_range(&self, offset: u64, size: u64) -> Result<*const u8> {
        let buffer = self.handle.get()?;
        let [offset, size] = mapped_range(offset, size)?;
        // SAFETY: plain arguments.
        let data = unsafe { procs::BUFFER_GET_CONST_MAPPED_RANGE.invoke(&[buffer, offset, size]) }?;
        Ok(data as *const u8)
    }

    /// Copies `len` bytes at `offset` out of the mapped buffer.
    pub fn read_mapped(&self, offset: u64, len: usize) -> Result<Vec<u8>> {
        self.check_mapped(offset, len)?;
        if len == 0 {
            return Ok(Vec::new());
        }
        let data = self.get_const_mapped_range(offset, len as u64)?;
        if data.is_null() {
            return Err(Error::InvalidArgument("range is not mapped"));
        }
        // SAFETY: the native library mapped `len` readable bytes at `data`, and
        // they stay mapped while `self` is borrowed.
        Ok(unsafe { slice::from_raw_parts(data, len) }.to_vec())
    }

    /// Copies `contents` into the mapped buffer at `offset`.
    pub fn write_mapped(&self, offset: u64, contents: &[u8]) -> Result<()> {
        self.check_mapped(offset, contents.len())?;
        if contents.is_empty() {
            return Ok(());
        }
        let data = self.get_mapped_range(offset, contents.len() as u64)?;
        if data.is_null() {
            return Err(Error::InvalidArgument("range is not mapped for writing"));
        }
        // SAFETY: the native library mapped `contents.len()` writable bytes at
        // `data`, which cannot overlap host memory.
        unsafe { ptr::copy_nonoverlapping(contents.as_ptr(), data, contents.len()) };
        Ok(())
    }

    fn check_mapped(&self, offset: u64, len: usize) -> Result<()> {
        if self.map_state()? != Some(BufferMapState::Mapped) {
            return Err(Error::InvalidArgument("buffer is not mapped"));
        }
        let end = offset
            .checked_add(len as u64)
            .ok_or(Error::InvalidArgument("range overflows"))?;
        if end > self.size()? {
            return Err(Error::InvalidArgument("range exceeds the buffer"));
        }
        Ok(())
    }

    /// Flushes any pending write operations and unmaps the buffer from host memory.
    pub fn unmap(&self) -> Result<()> {
        let buffer = self.handle.get()?;
        // SAFETY: plain handle argument.
        unsafe { procs::BUFFER_UNMAP.invoke(&[buffer]) }.map(|_| ())
    }

    /// Destroy the associated native resources as soon as possible.
    pub fn destroy(&self) -> Result<()> {
        let buffer = self.handle.get()?;
        // SAFETY: plain handle argument.
        unsafe { procs::BUFFER_DESTROY.invoke(&[buffer]) }.map(|_| ())
    }

    /// Returns the length of the buffer allocation in bytes.
    pub fn size(&self) -> Result<u64> {
        let buffer = self.handle.get()?;
        // SAFETY: plain handle argument.
        Ok(unsafe { procs::BUFFER_GET_SIZE.invoke(&[buffer]) }? as u64)
    }

    /// Returns the allowed usages for this `Buffer`.
    pub fn usage(&self) -> Result<BufferUsages> {
        let buffer = self.handle.get()?;
        // SAFETY: plain handle argument.
        let usage = unsafe { procs::BUFFER_GET_USAGE.invoke(&[buffer]) }?;
        Ok(conv::buffer_usages_from_native(usage as u64))
    }

    /// Returns the current mapping state, or `None` for a state this crate does not know.
    pub fn map_state(&self) -> Result<Option<BufferMapState>> {
        let buffer = self.handle.get()?;
        // SAFETY: plain handle argument.
        let state = unsafe { procs::BUFFER_GET_MAP_STATE.invoke(&[buffer]) }?;
        Ok(BufferMapState::from_raw(state as u32))
    }
}

fn mapped_range(offset: u64, size: u64) -> Result<[usize; 2]> {
    let offset = usize::try_from(offset)
        .map_err(|_| Error::InvalidArgument("range offset does not fit in usize"))?;
    let size = usize::try_from(size)
        .map_err(|_| Error::InvalidArgument("range size does not fit in usize"))?;
    Ok([offset, size])
}

fn finish_map(_: usize, completion: Completion) -> Result<()> {
    if completion.status != native::map_async_status::SUCCESS {
        return Err(Error::MapAsync {
            status: completion.status,
            message: completion.message,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn released() -> Buffer {
        Buffer {
            handle: RawHandle::null("Buffer", &procs::BUFFER_RELEASE),
            device: RawHandle::null("Device", &procs::DEVICE_RELEASE),
        }
    }

    #[test]
    fn released_buffer_does_not_reach_native() {
        let buffer = released();
        assert!(matches!(buffer.size(), Err(Error::Released { kind: "Buffer" })));
        assert!(matches!(buffer.map_state(), Err(Error::Released { .. })));
        assert!(matches!(
            buffer.map_async(MapMode::READ, 0, None),
            Err(Error::Released { .. })
        ));
        assert!(matches!(buffer.read_mapped(0, 4), Err(Error::Released { .. })));
        assert!(matches!(buffer.write_mapped(0, &[1]), Err(Error::Released { .. })));
        assert!(matches!(buffer.unmap(), Err(Error::Released { .. })));
    }

    #[test]
    fn failed_map_carries_status() {
        let err = finish_map(
            0,
            Completion {
                status: native::map_async_status::ERROR,
                value: 0,
                message: "already mapped".to_string(),
            },
        )
        .unwrap_err();
        match err {
            Error::MapAsync { status, message } => {
                assert_eq!(status, native::map_async_status::ERROR);
                assert_eq!(message, "already mapped");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(finish_map(
            0,
            Completion {
                status: native::map_async_status::SUCCESS,
                ..Default::default()
            }
        )
        .is_ok());
    }

    #[test]
    fn mapped_range_fits_the_address_space() {
        assert_eq!(mapped_range(256, 64).unwrap(), [256, 64]);
        let too_wide = usize::try_from(u64::MAX).is_err();
        assert_eq!(mapped_range(u64::MAX, 4).is_err(), too_wide);
        assert_eq!(mapped_range(0, u64::MAX).is_err(), too_wide);
    }
}
