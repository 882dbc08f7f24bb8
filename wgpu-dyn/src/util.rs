//! Utility structures and functions that are built on top of the main API.
//!
//! Nothing in this module is a part of the WebGPU API specification;
//! they are unique to this binding.

use std::{borrow::Cow, mem::size_of, ops::Range};

use crate::*;

/// Describes a [`Buffer`] when allocating.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct BufferInitDescriptor<'a> {
    /// Debug label of a buffer. This will show up in graphics debuggers for easy identification.
    pub label: Label<'a>,
    /// Contents of a buffer on creation.
    pub contents: &'a [u8],
    /// Usages of a buffer. If the buffer is used in any way that isn't specified here, the operation
    /// will panic.
    pub usage: BufferUsages,
}

/// Utility methods not meant to be in the main API.
pub trait DeviceExt {
    /// Creates a [`Buffer`] with data to initialize it.
    fn create_buffer_init(&self, desc: &BufferInitDescriptor<'_>) -> Result<Buffer>;

    /// Copies `size` bytes at `offset` of `buffer` into host memory, blocking
    /// until the copy has been executed.
    ///
    /// `buffer` needs [`BufferUsages::COPY_SRC`].
    fn read_buffer(&self, queue: &Queue, buffer: &Buffer, offset: u64, size: u64) -> Result<Vec<u8>>;
}

impl DeviceExt for Device {
    fn create_buffer_init(&self, descriptor: &BufferInitDescriptor<'_>) -> Result<Buffer> {
        // Skip mapping if the buffer is zero sized
        if descriptor.contents.is_empty() {
            let wgt_descriptor = BufferDescriptor {
                label: descriptor.label,
                size: 0,
                usage: descriptor.usage,
                mapped_at_creation: false,
            };

            return self.create_buffer(&wgt_descriptor);
        }

        let unpadded_size = descriptor.contents.len() as BufferAddress;
        // Mapped-at-creation sizes must be a non-zero multiple of COPY_BUFFER_ALIGNMENT.
        let align_mask = COPY_BUFFER_ALIGNMENT - 1;
        let padded_size = ((unpadded_size + align_mask) & !align_mask).max(COPY_BUFFER_ALIGNMENT);

        let wgt_descriptor = BufferDescriptor {
            label: descriptor.label,
            size: padded_size,
            usage: descriptor.usage,
            mapped_at_creation: true,
        };

        let buffer = self.create_buffer(&wgt_descriptor)?;
        buffer.write_mapped(0, descriptor.contents)?;
        buffer.unmap()?;

        Ok(buffer)
    }

    fn read_buffer(&self, queue: &Queue, buffer: &Buffer, offset: u64, size: u64) -> Result<Vec<u8>> {
        let len = usize::try_from(size)
            .map_err(|_| Error::InvalidArgument("read size does not fit in usize"))?;
        if len == 0 {
            return Ok(Vec::new());
        }
        let staging = self.create_buffer(&BufferDescriptor {
            label: Some("read_buffer staging"),
            size,
            usage: BufferUsages::COPY_DST | BufferUsages::MAP_READ,
            mapped_at_creation: false,
        })?;

        let mut encoder = self.create_command_encoder(&CommandEncoderDescriptor {
            label: Some("read_buffer"),
        })?;
        encoder.copy_buffer_to_buffer(buffer, offset, &staging, 0, size);
        queue.submit(Some(encoder.finish()?))?;

        staging.map_async(MapMode::READ, 0, Some(size))?;
        let contents = staging.read_mapped(0, len)?;
        staging.unmap()?;
        Ok(contents)
    }
}

/// Treat the given byte slice as a SPIR-V module.
///
/// Fails if the input is empty, its length isn't a multiple of 4, or the
/// SPIR-V magic number is missing from the beginning of the stream.
pub fn make_spirv(data: &[u8]) -> Result<ShaderSource<'_>> {
    make_spirv_raw(data).map(ShaderSource::SpirV)
}

/// Version of [`make_spirv`] returning the raw words.
///
/// Byte-swapped modules are swapped back to native endianness.
pub fn make_spirv_raw(data: &[u8]) -> Result<Cow<'_, [u32]>> {
    const MAGIC_NUMBER: u32 = 0x0723_0203;
    if data.len() % size_of::<u32>() != 0 {
        return Err(Error::InvalidArgument("SPIR-V size is not a multiple of 4"));
    }
    if data.is_empty() {
        return Err(Error::InvalidArgument("SPIR-V module is empty"));
    }

    // Aligned data is borrowed as words; anything else is copied.
    let mut words: Cow<'_, [u32]> = match cast_words(data) {
        Some(words) => Cow::Borrowed(words),
        None => Cow::Owned(
            data.chunks_exact(size_of::<u32>())
                .map(|b| u32::from_ne_bytes([b[0], b[1], b[2], b[3]]))
                .collect(),
        ),
    };

    // Before checking if the data starts with the magic, check if it starts
    // with the magic in non-native endianness, own & swap the data if so.
    if words[0] == MAGIC_NUMBER.swap_bytes() {
        for word in Cow::to_mut(&mut words) {
            *word = word.swap_bytes();
        }
    }

    if words[0] != MAGIC_NUMBER {
        log::warn!("Wrong SPIR-V magic word {:#x}", words[0]);
        return Err(Error::InvalidArgument("SPIR-V magic number is missing"));
    }

    Ok(words)
}

/// Reinterprets `data` as words when it is suitably aligned.
fn cast_words(data: &[u8]) -> Option<&[u32]> {
    // SAFETY: every bit pattern is a valid `u32`.
    let (pre, words, post) = unsafe { data.align_to::<u32>() };
    (pre.is_empty() && post.is_empty()).then_some(words)
}

/// Methods shared by [`RenderPass`] and [`RenderBundleEncoder`].
pub trait RenderEncoder {
    /// Sets the active bind group for a given bind group index.
    fn set_bind_group(&mut self, index: u32, bind_group: Option<&BindGroup>, offsets: &[DynamicOffset]);

    /// Sets the active render pipeline.
    fn set_pipeline(&mut self, pipeline: &RenderPipeline);

    /// Sets the active index buffer.
    fn set_index_buffer(
        &mut self,
        buffer: &Buffer,
        index_format: IndexFormat,
        offset: BufferAddress,
        size: Option<BufferAddress>,
    );

    /// Assign a vertex buffer to a slot.
    fn set_vertex_buffer(
        &mut self,
        slot: u32,
        buffer: &Buffer,
        offset: BufferAddress,
        size: Option<BufferAddress>,
    );

    /// Draws primitives from the active vertex buffer(s).
    fn draw(&mut self, vertices: Range<u32>, instances: Range<u32>);

    /// Draws indexed primitives using the active index buffer and the active vertex buffers.
    fn draw_indexed(&mut self, indices: Range<u32>, base_vertex: i32, instances: Range<u32>);

    /// Draws primitives based on the contents of the `indirect_buffer`.
    fn draw_indirect(&mut self, indirect_buffer: &Buffer, indirect_offset: BufferAddress);

    /// Draws indexed primitives based on the contents of the `indirect_buffer`.
    fn draw_indexed_indirect(&mut self, indirect_buffer: &Buffer, indirect_offset: BufferAddress);
}

macro_rules! impl_render_encoder {
    ($ty:ty) => {
        impl RenderEncoder for $ty {
            fn set_bind_group(
                &mut self,
                index: u32,
                bind_group: Option<&BindGroup>,
                offsets: &[DynamicOffset],
            ) {
                <$ty>::set_bind_group(self, index, bind_group, offsets);
            }

            fn set_pipeline(&mut self, pipeline: &RenderPipeline) {
                <$ty>::set_pipeline(self, pipeline);
            }

            fn set_index_buffer(
                &mut self,
                buffer: &Buffer,
                index_format: IndexFormat,
                offset: BufferAddress,
                size: Option<BufferAddress>,
            ) {
                <$ty>::set_index_buffer(self, buffer, index_format, offset, size);
            }

            fn set_vertex_buffer(
                &mut self,
                slot: u32,
                buffer: &Buffer,
                offset: BufferAddress,
                size: Option<BufferAddress>,
            ) {
                <$ty>::set_vertex_buffer(self, slot, buffer, offset, size);
            }

            fn draw(&mut self, vertices: Range<u32>, instances: Range<u32>) {
                <$ty>::draw(self, vertices, instances);
            }

            fn draw_indexed(&mut self, indices: Range<u32>, base_vertex: i32, instances: Range<u32>) {
                <$ty>::draw_indexed(self, indices, base_vertex, instances);
            }

            fn draw_indirect(&mut self, indirect_buffer: &Buffer, indirect_offset: BufferAddress) {
                <$ty>::draw_indirect(self, indirect_buffer, indirect_offset);
            }

            fn draw_indexed_indirect(&mut self, indirect_buffer: &Buffer, indirect_offset: BufferAddress) {
                <$ty>::draw_indexed_indirect(self, indirect_buffer, indirect_offset);
            }
        }
    };
}

impl_render_encoder!(RenderPass<'_>);
impl_render_encoder!(RenderBundleEncoder);

#[cfg(test)]
mod tests {
    use super::*;

    const MAGIC: [u8; 4] = 0x0723_0203u32.to_ne_bytes();

    #[test]
    fn spirv_words() {
        let mut data = MAGIC.to_vec();
        data.extend_from_slice(&0x0001_0000u32.to_ne_bytes());
        let words = make_spirv_raw(&data).unwrap();
        assert_eq!(&*words, &[0x0723_0203, 0x0001_0000]);
    }

    #[test]
    fn swapped_spirv_is_swapped_back() {
        let mut data = 0x0723_0203u32.swap_bytes().to_ne_bytes().to_vec();
        data.extend_from_slice(&0x0000_0100u32.to_ne_bytes());
        let words = make_spirv_raw(&data).unwrap();
        assert_eq!(&*words, &[0x0723_0203, 0x0001_0000]);
    }

    #[test]
    fn malformed_spirv() {
        assert!(make_spirv_raw(&[]).is_err());
        assert!(make_spirv_raw(&MAGIC[..3]).is_err());
        assert!(make_spirv_raw(&[0; 8]).is_err());
    }

    #[test]
    fn unaligned_input_is_copied() {
        let mut data = vec![0u8];
        data.extend_from_slice(&MAGIC);
        let words = make_spirv_raw(&data[1..]).unwrap();
        assert_eq!(&*words, &[0x0723_0203]);
    }
}
