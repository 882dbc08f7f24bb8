use smallvec::SmallVec;

use crate::{
    ffi::{self, procs},
    handle::{impl_handle, RawHandle},
    wire, *,
};

/// Handle to a command queue on a device.
///
/// A `Queue` executes recorded [`CommandBuffer`] objects and provides convenience methods
/// for writing to [buffers](Queue::write_buffer) and [textures](Queue::write_texture).
/// It can be created along with a [`Device`] by calling [`Device::get_queue`].
///
/// Corresponds to [WebGPU `GPUQueue`](https://gpuweb.github.io/gpuweb/#gpu-queue).
#[derive(Debug)]
pub struct Queue {
    pub(crate) handle: RawHandle,
}
static_assertions::assert_impl_all!(Queue: Send, Sync);

impl_handle!(Queue);

impl Queue {
    /// Schedule a data write into `buffer` starting at `offset`.
    ///
    /// The data is copied out of `data` before this returns. The write happens
    /// at the start of the next [`submit`](Self::submit).
    pub fn write_buffer(&self, buffer: &Buffer, offset: u64, data: &[u8]) -> Result<()> {
        let queue = self.handle.get()?;
        let buffer = buffer.handle.get()?;
        // SAFETY: `data` outlives the call, which copies it.
        unsafe {
            procs::QUEUE_WRITE_BUFFER.invoke(&[
                queue,
                buffer,
                offset as usize,
                ffi::slice_addr(data),
                data.len(),
            ])
        }
        .map(|_| ())
    }

    /// Schedule a write of some data into a texture.
    ///
    /// * `data` contains the texels to be written, which must be in
    ///   [the same format as the texture](TextureFormat).
    /// * `data_layout` describes the memory layout of `data`, which does not necessarily
    ///   have to have tightly packed rows.
    /// * `texture` specifies the texture to write into, and the location within the
    ///   texture (coordinate offset, mip level) that will be overwritten.
    /// * `size` is the size, in texels, of the region to be written.
    pub fn write_texture(
        &self,
        texture: TexelCopyTextureInfo<'_>,
        data: &[u8],
        data_layout: TexelCopyBufferLayout,
        size: Extent3d,
    ) -> Result<()> {
        let queue = self.handle.get()?;
        let destination = map_texture_copy(&texture)?;
        let layout = wire::TexelCopyBufferLayout::from(data_layout);
        let size = wire::Extent3d::from(size);
        // SAFETY: every pointer references a local or `data`, all of which outlive the call.
        unsafe {
            procs::QUEUE_WRITE_TEXTURE.invoke(&[
                queue,
                ffi::addr(&destination),
                ffi::slice_addr(data),
                data.len(),
                ffi::addr(&layout),
                ffi::addr(&size),
            ])
        }
        .map(|_| ())
    }

    /// Submits a series of finished command buffers for execution.
    ///
    /// The command buffers are consumed: each is released once the native
    /// queue has taken it.
    pub fn submit<I: IntoIterator<Item = CommandBuffer>>(&self, command_buffers: I) -> Result<()> {
        let queue = self.handle.get()?;
        let command_buffers: SmallVec<[CommandBuffer; 4]> = command_buffers.into_iter().collect();
        let raw = command_buffers
            .iter()
            .map(|cb| cb.handle.get())
            .collect::<Result<SmallVec<[wire::Handle; 4]>>>()?;
        log::trace!("Submitting {} command buffers", raw.len());
        // SAFETY: the handle array outlives the call.
        unsafe { procs::QUEUE_SUBMIT.invoke(&[queue, raw.len(), ffi::slice_addr(&raw)]) }?;
        drop(command_buffers);
        Ok(())
    }
}

pub(crate) fn map_texture_copy(copy: &TexelCopyTextureInfo<'_>) -> Result<wire::TexelCopyTextureInfo> {
    Ok(wire::TexelCopyTextureInfo {
        texture: copy.texture.handle.get()?,
        mip_level: copy.mip_level,
        origin: copy.origin.into(),
        aspect: conv::texture_aspect_to_native(copy.aspect.to_raw()),
        _pad: 0,
    })
}

pub(crate) fn map_buffer_copy(copy: &TexelCopyBufferInfo<'_>) -> Result<wire::TexelCopyBufferInfo> {
    Ok(wire::TexelCopyBufferInfo {
        layout: copy.layout.into(),
        buffer: copy.buffer.handle.get()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_queue_does_not_reach_native() {
        let queue = Queue {
            handle: RawHandle::null("Queue", &procs::QUEUE_RELEASE),
        };
        let buffer = Buffer {
            handle: RawHandle::null("Buffer", &procs::BUFFER_RELEASE),
            device: RawHandle::null("Device", &procs::DEVICE_RELEASE),
        };
        assert!(matches!(
            queue.write_buffer(&buffer, 0, &[0; 4]),
            Err(Error::Released { kind: "Queue" })
        ));
        assert!(matches!(
            queue.submit(std::iter::empty()),
            Err(Error::Released { kind: "Queue" })
        ));
    }
}
