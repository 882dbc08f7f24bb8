use std::ops::Range;

use crate::{
    api::render_pass::RenderCommands,
    ffi::{self, procs},
    handle::{impl_handle, RawHandle},
    wire, *,
};

/// Encodes a series of GPU operations into a reusable "render bundle".
///
/// It only supports a handful of render commands, but it makes them reusable.
/// It can be created with [`Device::create_render_bundle_encoder`].
/// It can be executed onto a [`CommandEncoder`] using [`RenderPass::execute_bundles`].
///
/// Executing a [`RenderBundle`] is often more efficient than issuing the underlying commands
/// manually.
///
/// Corresponds to [WebGPU `GPURenderBundleEncoder`](
/// https://gpuweb.github.io/gpuweb/#gpurenderbundleencoder).
#[derive(Debug)]
pub struct RenderBundleEncoder {
    pub(crate) handle: RawHandle,
}
static_assertions::assert_impl_all!(RenderBundleEncoder: Send, Sync);

impl_handle!(RenderBundleEncoder);

static RENDER_BUNDLE_COMMANDS: RenderCommands = RenderCommands {
    set_bind_group: &procs::RENDER_BUNDLE_ENCODER_SET_BIND_GROUP,
    set_pipeline: &procs::RENDER_BUNDLE_ENCODER_SET_PIPELINE,
    set_vertex_buffer: &procs::RENDER_BUNDLE_ENCODER_SET_VERTEX_BUFFER,
    set_index_buffer: &procs::RENDER_BUNDLE_ENCODER_SET_INDEX_BUFFER,
    draw: &procs::RENDER_BUNDLE_ENCODER_DRAW,
    draw_indexed: &procs::RENDER_BUNDLE_ENCODER_DRAW_INDEXED,
    draw_indirect: &procs::RENDER_BUNDLE_ENCODER_DRAW_INDIRECT,
    draw_indexed_indirect: &procs::RENDER_BUNDLE_ENCODER_DRAW_INDEXED_INDIRECT,
};

impl RenderBundleEncoder {
    /// Finishes recording and returns a [`RenderBundle`] that can be executed in other render passes.
    ///
    /// The encoder is released either way.
    pub fn finish(mut self, desc: &RenderBundleDescriptor<'_>) -> Result<RenderBundle> {
        let encoder = self.handle.get()?;
        let raw_desc = wire::LabelDescriptor::new(desc.label);
        // SAFETY: the descriptor lives until the call returns.
        let raw = unsafe {
            procs::RENDER_BUNDLE_ENCODER_FINISH.invoke(&[encoder, ffi::addr(&raw_desc)])
        };
        self.handle.release();
        Ok(RenderBundle {
            handle: RawHandle::new(raw?, "RenderBundle", &procs::RENDER_BUNDLE_RELEASE)?,
        })
    }

    /// Sets the active bind group for a given bind group index. The bind group layout
    /// in the active pipeline when any `draw()` function is called must match the layout of this bind group.
    ///
    /// If the bind group have dynamic offsets, provide them in the binding order.
    pub fn set_bind_group(
        &mut self,
        index: u32,
        bind_group: Option<&BindGroup>,
        offsets: &[DynamicOffset],
    ) {
        RENDER_BUNDLE_COMMANDS.set_bind_group(&self.handle, index, bind_group, offsets);
    }

    /// Sets the active render pipeline.
    ///
    /// Subsequent draw calls will exhibit the behavior defined by `pipeline`.
    pub fn set_pipeline(&mut self, pipeline: &RenderPipeline) {
        RENDER_BUNDLE_COMMANDS.set_pipeline(&self.handle, pipeline);
    }

    /// Sets the active index buffer.
    ///
    /// Subsequent calls to [`draw_indexed`](RenderBundleEncoder::draw_indexed) on this
    /// [`RenderBundleEncoder`] will use `buffer` as the source index buffer.
    pub fn set_index_buffer(
        &mut self,
        buffer: &Buffer,
        index_format: IndexFormat,
        offset: BufferAddress,
        size: Option<BufferAddress>,
    ) {
        RENDER_BUNDLE_COMMANDS.set_index_buffer(&self.handle, buffer, index_format, offset, size);
    }

    /// Assign a vertex buffer to a slot.
    ///
    /// The `slot` refers to the index of the matching descriptor in
    /// [`VertexState::buffers`].
    pub fn set_vertex_buffer(
        &mut self,
        slot: u32,
        buffer: &Buffer,
        offset: BufferAddress,
        size: Option<BufferAddress>,
    ) {
        RENDER_BUNDLE_COMMANDS.set_vertex_buffer(&self.handle, slot, buffer, offset, size);
    }

    /// Draws primitives from the active vertex buffer(s).
    pub fn draw(&mut self, vertices: Range<u32>, instances: Range<u32>) {
        RENDER_BUNDLE_COMMANDS.draw(&self.handle, vertices, instances);
    }

    /// Draws indexed primitives using the active index buffer and the active vertex buffer(s).
    pub fn draw_indexed(&mut self, indices: Range<u32>, base_vertex: i32, instances: Range<u32>) {
        RENDER_BUNDLE_COMMANDS.draw_indexed(&self.handle, indices, base_vertex, instances);
    }

    /// Draws primitives from the active vertex buffer(s) based on the contents of the `indirect_buffer`.
    ///
    /// The structure expected in `indirect_buffer` must conform to [`DrawIndirectArgs`].
    pub fn draw_indirect(&mut self, indirect_buffer: &Buffer, indirect_offset: BufferAddress) {
        RENDER_BUNDLE_COMMANDS.draw_indirect(
            RENDER_BUNDLE_COMMANDS.draw_indirect,
            &self.handle,
            indirect_buffer,
            indirect_offset,
        );
    }

    /// Draws indexed primitives based on the contents of the `indirect_buffer`.
    ///
    /// The structure expected in `indirect_buffer` must conform to [`DrawIndexedIndirectArgs`].
    pub fn draw_indexed_indirect(&mut self, indirect_buffer: &Buffer, indirect_offset: BufferAddress) {
        RENDER_BUNDLE_COMMANDS.draw_indirect(
            RENDER_BUNDLE_COMMANDS.draw_indexed_indirect,
            &self.handle,
            indirect_buffer,
            indirect_offset,
        );
    }

    /// Inserts debug marker.
    pub fn insert_debug_marker(&mut self, label: &str) {
        api::record_label(&self.handle, &procs::RENDER_BUNDLE_ENCODER_INSERT_DEBUG_MARKER, label);
    }

    /// Start record commands and group it into debug marker group.
    pub fn push_debug_group(&mut self, label: &str) {
        api::record_label(&self.handle, &procs::RENDER_BUNDLE_ENCODER_PUSH_DEBUG_GROUP, label);
    }

    /// Stops command recording and creates debug group.
    pub fn pop_debug_group(&mut self) {
        // SAFETY: plain handle argument.
        unsafe {
            api::record(&self.handle, &procs::RENDER_BUNDLE_ENCODER_POP_DEBUG_GROUP, |e| Ok([e]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_encoder() {
        let mut encoder = RenderBundleEncoder {
            handle: RawHandle::null("RenderBundleEncoder", &procs::RENDER_BUNDLE_ENCODER_RELEASE),
        };
        encoder.draw(0..3, 0..1);
        encoder.set_bind_group(0, None, &[]);
        assert!(matches!(
            encoder.finish(&RenderBundleDescriptor::default()),
            Err(Error::Released { kind: "RenderBundleEncoder" })
        ));
    }
}
