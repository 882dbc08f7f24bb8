use std::{marker::PhantomData, ops::Range};

use smallvec::SmallVec;

use crate::{
    ffi::{self, procs, Procedure},
    handle::RawHandle,
    native, wire, *,
};

/// In-progress recording of a render pass: a list of render commands in a [`CommandEncoder`].
///
/// It can be created with [`CommandEncoder::begin_render_pass()`], whose [`RenderPassDescriptor`]
/// specifies the attachments (textures) that will be rendered to.
///
/// Most of the methods on `RenderPass` serve one of two purposes, identifiable by their names:
///
/// * `draw_*()`: Drawing (that is, encoding a render command, which, when executed by the GPU, will
///   rasterize something and execute shaders).
/// * `set_*()`: Setting part of the [render state](https://gpuweb.github.io/gpuweb/#renderstate)
///   for future drawing commands.
///
/// A render pass may contain any number of drawing commands, and before/between each command the
/// render state may be updated however you wish; each drawing command will be executed using the
/// render state that has been set when the `draw_*()` function is called.
///
/// Corresponds to [WebGPU `GPURenderPassEncoder`](
/// https://gpuweb.github.io/gpuweb/#render-pass-encoder).
#[derive(Debug)]
pub struct RenderPass<'encoder> {
    pub(crate) handle: RawHandle,
    pub(crate) _encoder: PhantomData<&'encoder mut CommandEncoder>,
}
static_assertions::assert_impl_all!(RenderPass<'_>: Send, Sync);

/// Entry points of the commands render passes and render bundle encoders share.
pub(crate) struct RenderCommands {
    pub set_bind_group: &'static Procedure,
    pub set_pipeline: &'static Procedure,
    pub set_vertex_buffer: &'static Procedure,
    pub set_index_buffer: &'static Procedure,
    pub draw: &'static Procedure,
    pub draw_indexed: &'static Procedure,
    pub draw_indirect: &'static Procedure,
    pub draw_indexed_indirect: &'static Procedure,
}

static RENDER_PASS_COMMANDS: RenderCommands = RenderCommands {
    set_bind_group: &procs::RENDER_PASS_SET_BIND_GROUP,
    set_pipeline: &procs::RENDER_PASS_SET_PIPELINE,
    set_vertex_buffer: &procs::RENDER_PASS_SET_VERTEX_BUFFER,
    set_index_buffer: &procs::RENDER_PASS_SET_INDEX_BUFFER,
    draw: &procs::RENDER_PASS_DRAW,
    draw_indexed: &procs::RENDER_PASS_DRAW_INDEXED,
    draw_indirect: &procs::RENDER_PASS_DRAW_INDIRECT,
    draw_indexed_indirect: &procs::RENDER_PASS_DRAW_INDEXED_INDIRECT,
};

impl RenderCommands {
    pub fn set_bind_group(
        &self,
        handle: &RawHandle,
        index: u32,
        bind_group: Option<&BindGroup>,
        offsets: &[DynamicOffset],
    ) {
        // SAFETY: `offsets` outlives the call.
        unsafe {
            api::record(handle, self.set_bind_group, |raw| {
                Ok([
                    raw,
                    index as usize,
                    api::optional_raw(bind_group.map(|g| &g.handle))?,
                    offsets.len(),
                    ffi::slice_addr(offsets),
                ])
            })
        }
    }

    pub fn set_pipeline(&self, handle: &RawHandle, pipeline: &RenderPipeline) {
        // SAFETY: plain arguments.
        unsafe {
            api::record(handle, self.set_pipeline, |raw| {
                Ok([raw, pipeline.handle.get()?])
            })
        }
    }

    pub fn set_vertex_buffer(
        &self,
        handle: &RawHandle,
        slot: u32,
        buffer: &Buffer,
        offset: BufferAddress,
        size: Option<BufferAddress>,
    ) {
        // SAFETY: plain arguments.
        unsafe {
            api::record(handle, self.set_vertex_buffer, |raw| {
                Ok([
                    raw,
                    slot as usize,
                    buffer.handle.get()?,
                    offset as usize,
                    size.unwrap_or(native::WHOLE_SIZE) as usize,
                ])
            })
        }
    }

    pub fn set_index_buffer(
        &self,
        handle: &RawHandle,
        buffer: &Buffer,
        index_format: IndexFormat,
        offset: BufferAddress,
        size: Option<BufferAddress>,
    ) {
        let format = conv::index_format_to_native(index_format.to_raw());
        // SAFETY: plain arguments.
        unsafe {
            api::record(handle, self.set_index_buffer, |raw| {
                Ok([
                    raw,
                    buffer.handle.get()?,
                    format as usize,
                    offset as usize,
                    size.unwrap_or(native::WHOLE_SIZE) as usize,
                ])
            })
        }
    }

    pub fn draw(&self, handle: &RawHandle, vertices: Range<u32>, instances: Range<u32>) {
        // SAFETY: plain arguments.
        unsafe {
            api::record(handle, self.draw, |raw| {
                Ok([
                    raw,
                    vertices.len(),
                    instances.len(),
                    vertices.start as usize,
                    instances.start as usize,
                ])
            })
        }
    }

    pub fn draw_indexed(
        &self,
        handle: &RawHandle,
        indices: Range<u32>,
        base_vertex: i32,
        instances: Range<u32>,
    ) {
        // SAFETY: plain arguments.
        unsafe {
            api::record(handle, self.draw_indexed, |raw| {
                Ok([
                    raw,
                    indices.len(),
                    instances.len(),
                    indices.start as usize,
                    base_vertex as u32 as usize,
                    instances.start as usize,
                ])
            })
        }
    }

    pub fn draw_indirect(
        &self,
        proc: &'static Procedure,
        handle: &RawHandle,
        indirect_buffer: &Buffer,
        indirect_offset: BufferAddress,
    ) {
        // SAFETY: plain arguments.
        unsafe {
            api::record(handle, proc, |raw| {
                Ok([raw, indirect_buffer.handle.get()?, indirect_offset as usize])
            })
        }
    }
}

impl RenderPass<'_> {
    /// Sets the active bind group for a given bind group index. The bind group layout
    /// in the active pipeline when any `draw_*()` method is called must match the layout of
    /// this bind group.
    ///
    /// If the bind group have dynamic offsets, provide them in binding order.
    /// These offsets have to be aligned to [`Limits::min_uniform_buffer_offset_alignment`]
    /// or [`Limits::min_storage_buffer_offset_alignment`] appropriately.
    pub fn set_bind_group(
        &mut self,
        index: u32,
        bind_group: Option<&BindGroup>,
        offsets: &[DynamicOffset],
    ) {
        RENDER_PASS_COMMANDS.set_bind_group(&self.handle, index, bind_group, offsets);
    }

    /// Sets the active render pipeline.
    ///
    /// Subsequent draw calls will exhibit the behavior defined by `pipeline`.
    pub fn set_pipeline(&mut self, pipeline: &RenderPipeline) {
        RENDER_PASS_COMMANDS.set_pipeline(&self.handle, pipeline);
    }

    /// Sets the blend color as used by some of the blending modes.
    ///
    /// Subsequent blending tests will test against this value.
    /// If this method has not been called, the blend constant defaults to [`Color::TRANSPARENT`]
    /// (all components zero).
    pub fn set_blend_constant(&mut self, color: Color) {
        let color = wire::Color::from(color);
        // SAFETY: `color` outlives the call.
        unsafe {
            api::record(&self.handle, &procs::RENDER_PASS_SET_BLEND_CONSTANT, |pass| {
                Ok([pass, ffi::addr(&color)])
            })
        }
    }

    /// Sets the active index buffer.
    ///
    /// Subsequent calls to [`draw_indexed`](RenderPass::draw_indexed) on this [`RenderPass`] will
    /// use `buffer` as the source index buffer. `size` of `None` binds everything past `offset`.
    pub fn set_index_buffer(
        &mut self,
        buffer: &Buffer,
        index_format: IndexFormat,
        offset: BufferAddress,
        size: Option<BufferAddress>,
    ) {
        RENDER_PASS_COMMANDS.set_index_buffer(&self.handle, buffer, index_format, offset, size);
    }

    /// Assign a vertex buffer to a slot.
    ///
    /// Subsequent calls to [`draw`] and [`draw_indexed`] on this
    /// [`RenderPass`] will use `buffer` as one of the source vertex buffers.
    ///
    /// The `slot` refers to the index of the matching descriptor in
    /// [`VertexState::buffers`].
    ///
    /// [`draw`]: RenderPass::draw
    /// [`draw_indexed`]: RenderPass::draw_indexed
    pub fn set_vertex_buffer(
        &mut self,
        slot: u32,
        buffer: &Buffer,
        offset: BufferAddress,
        size: Option<BufferAddress>,
    ) {
        RENDER_PASS_COMMANDS.set_vertex_buffer(&self.handle, slot, buffer, offset, size);
    }

    /// Sets the scissor rectangle used during the rasterization stage.
    /// After transformation into [viewport coordinates](https://www.w3.org/TR/webgpu/#viewport-coordinates).
    ///
    /// Subsequent draw calls will discard any fragments which fall outside the scissor rectangle.
    /// If this method has not been called, the scissor rectangle defaults to the entire bounds of
    /// the render targets.
    pub fn set_scissor_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        // SAFETY: plain arguments.
        unsafe {
            api::record(&self.handle, &procs::RENDER_PASS_SET_SCISSOR_RECT, |pass| {
                Ok([pass, x as usize, y as usize, width as usize, height as usize])
            })
        }
    }

    /// Sets the viewport used during the rasterization stage to linearly map
    /// from [normalized device coordinates](https://www.w3.org/TR/webgpu/#ndc) to [viewport coordinates](https://www.w3.org/TR/webgpu/#viewport-coordinates).
    ///
    /// Subsequent draw calls will only draw within this region.
    /// If this method has not been called, the viewport defaults to the entire bounds of the render
    /// targets.
    pub fn set_viewport(&mut self, x: f32, y: f32, w: f32, h: f32, min_depth: f32, max_depth: f32) {
        // SAFETY: plain arguments.
        unsafe {
            api::record(&self.handle, &procs::RENDER_PASS_SET_VIEWPORT, |pass| {
                Ok([
                    pass,
                    ffi::float(x),
                    ffi::float(y),
                    ffi::float(w),
                    ffi::float(h),
                    ffi::float(min_depth),
                    ffi::float(max_depth),
                ])
            })
        }
    }

    /// Sets the stencil reference.
    ///
    /// Subsequent stencil tests will test against this value.
    /// If this method has not been called, the stencil reference value defaults to `0`.
    pub fn set_stencil_reference(&mut self, reference: u32) {
        // SAFETY: plain arguments.
        unsafe {
            api::record(&self.handle, &procs::RENDER_PASS_SET_STENCIL_REFERENCE, |pass| {
                Ok([pass, reference as usize])
            })
        }
    }

    /// Inserts debug marker.
    pub fn insert_debug_marker(&mut self, label: &str) {
        api::record_label(&self.handle, &procs::RENDER_PASS_INSERT_DEBUG_MARKER, label);
    }

    /// Start record commands and group it into debug marker group.
    pub fn push_debug_group(&mut self, label: &str) {
        api::record_label(&self.handle, &procs::RENDER_PASS_PUSH_DEBUG_GROUP, label);
    }

    /// Stops command recording and creates debug group.
    pub fn pop_debug_group(&mut self) {
        // SAFETY: plain handle argument.
        unsafe { api::record(&self.handle, &procs::RENDER_PASS_POP_DEBUG_GROUP, |p| Ok([p])) }
    }

    /// Draws primitives from the active vertex buffer(s).
    ///
    /// The active vertex buffer(s) can be set with [`RenderPass::set_vertex_buffer`].
    /// Does not use an Index Buffer. If you need this see [`RenderPass::draw_indexed`]
    pub fn draw(&mut self, vertices: Range<u32>, instances: Range<u32>) {
        RENDER_PASS_COMMANDS.draw(&self.handle, vertices, instances);
    }

    /// Draws indexed primitives using the active index buffer and the active vertex buffers.
    ///
    /// The active index buffer can be set with [`RenderPass::set_index_buffer`]
    /// The active vertex buffers can be set with [`RenderPass::set_vertex_buffer`].
    pub fn draw_indexed(&mut self, indices: Range<u32>, base_vertex: i32, instances: Range<u32>) {
        RENDER_PASS_COMMANDS.draw_indexed(&self.handle, indices, base_vertex, instances);
    }

    /// Draws primitives from the active vertex buffer(s) based on the contents of the `indirect_buffer`.
    ///
    /// The structure expected in `indirect_buffer` must conform to [`DrawIndirectArgs`].
    pub fn draw_indirect(&mut self, indirect_buffer: &Buffer, indirect_offset: BufferAddress) {
        RENDER_PASS_COMMANDS.draw_indirect(
            RENDER_PASS_COMMANDS.draw_indirect,
            &self.handle,
            indirect_buffer,
            indirect_offset,
        );
    }

    /// Draws indexed primitives using the active index buffer and the active vertex buffers,
    /// based on the contents of the `indirect_buffer`.
    ///
    /// The structure expected in `indirect_buffer` must conform to [`DrawIndexedIndirectArgs`].
    pub fn draw_indexed_indirect(&mut self, indirect_buffer: &Buffer, indirect_offset: BufferAddress) {
        RENDER_PASS_COMMANDS.draw_indirect(
            RENDER_PASS_COMMANDS.draw_indexed_indirect,
            &self.handle,
            indirect_buffer,
            indirect_offset,
        );
    }

    /// Execute a [render bundle][RenderBundle], which is a set of pre-recorded commands
    /// that can be run together.
    ///
    /// Commands in the bundle do not inherit this render pass's current render state, and after the
    /// bundle has executed, the state is **cleared** (reset to defaults, not the previous state).
    pub fn execute_bundles<'a, I: IntoIterator<Item = &'a RenderBundle>>(&mut self, render_bundles: I) {
        let bundles = render_bundles
            .into_iter()
            .map(|b| b.handle.get())
            .collect::<Result<SmallVec<[wire::Handle; 4]>>>();
        // SAFETY: the handle array outlives the call.
        unsafe {
            api::record(&self.handle, &procs::RENDER_PASS_EXECUTE_BUNDLES, |pass| {
                let bundles = bundles.as_ref().map_err(Clone::clone)?;
                Ok([pass, bundles.len(), ffi::slice_addr(bundles)])
            })
        }
    }

    /// Start a occlusion query on this render pass. It can be ended with
    /// [`end_occlusion_query`](Self::end_occlusion_query).
    /// Occlusion queries may not be nested.
    pub fn begin_occlusion_query(&mut self, query_index: u32) {
        // SAFETY: plain arguments.
        unsafe {
            api::record(&self.handle, &procs::RENDER_PASS_BEGIN_OCCLUSION_QUERY, |pass| {
                Ok([pass, query_index as usize])
            })
        }
    }

    /// End the occlusion query on this render pass. It can be started with
    /// [`begin_occlusion_query`](Self::begin_occlusion_query).
    /// Occlusion queries may not be nested.
    pub fn end_occlusion_query(&mut self) {
        // SAFETY: plain handle argument.
        unsafe { api::record(&self.handle, &procs::RENDER_PASS_END_OCCLUSION_QUERY, |p| Ok([p])) }
    }

    /// Issue a timestamp command at this point in the queue. The
    /// timestamp will be written to the specified query set, at the specified index.
    pub fn write_timestamp(&mut self, query_set: &QuerySet, query_index: u32) {
        // SAFETY: plain arguments.
        unsafe {
            api::record(&self.handle, &procs::RENDER_PASS_WRITE_TIMESTAMP, |pass| {
                Ok([pass, query_set.handle.get()?, query_index as usize])
            })
        }
    }

    /// Ends the pass, handing the encoder back.
    pub fn end(mut self) {
        self.end_pass();
    }

    fn end_pass(&mut self) {
        // SAFETY: plain handle argument.
        unsafe { api::record(&self.handle, &procs::RENDER_PASS_END, |p| Ok([p])) }
        self.handle.release();
    }
}

impl Drop for RenderPass<'_> {
    fn drop(&mut self) {
        if !self.handle.is_released() {
            self.end_pass();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_pass_skips_commands() {
        let mut pass = RenderPass {
            handle: RawHandle::null("RenderPass", &procs::RENDER_PASS_RELEASE),
            _encoder: PhantomData,
        };
        pass.set_viewport(0.0, 0.0, 64.0, 64.0, 0.0, 1.0);
        pass.set_blend_constant(Color::WHITE);
        pass.draw(0..3, 0..1);
        pass.draw_indexed(0..6, -2, 0..1);
        pass.execute_bundles(std::iter::empty());
        pass.end();
    }

    #[test]
    fn float_arguments_keep_their_bits() {
        assert_eq!(ffi::float(1.0), 0x3f80_0000);
        assert_eq!(ffi::float(-0.0), 0x8000_0000);
    }
}
