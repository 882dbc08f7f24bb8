use std::{marker::PhantomData, ops::Range, ptr};

use arrayvec::ArrayVec;

use crate::{
    api::queue::{map_buffer_copy, map_texture_copy},
    ffi::{self, procs},
    handle::{impl_handle, RawHandle},
    native,
    wire::{self, StringView},
    *,
};

/// Encodes a series of GPU operations.
///
/// A command encoder can record [`RenderPass`]es, [`ComputePass`]es,
/// and transfer operations between driver-managed resources like [`Buffer`]s and [`Texture`]s.
///
/// When finished recording, call [`CommandEncoder::finish`] to obtain a [`CommandBuffer`] which may
/// be submitted for execution.
///
/// Corresponds to [WebGPU `GPUCommandEncoder`](https://gpuweb.github.io/gpuweb/#command-encoder).
#[derive(Debug)]
pub struct CommandEncoder {
    pub(crate) handle: RawHandle,
}
static_assertions::assert_impl_all!(CommandEncoder: Send, Sync);

impl_handle!(CommandEncoder);

/// Describes a [`CommandEncoder`].
///
/// For use with [`Device::create_command_encoder`].
///
/// Corresponds to [WebGPU `GPUCommandEncoderDescriptor`](
/// https://gpuweb.github.io/gpuweb/#dictdef-gpucommandencoderdescriptor).
pub type CommandEncoderDescriptor<'a> = wgt::CommandEncoderDescriptor<Label<'a>>;
static_assertions::assert_impl_all!(CommandEncoderDescriptor<'_>: Send, Sync);

/// Describes a [`CommandBuffer`].
///
/// For use with [`CommandEncoder::finish_with_descriptor`].
pub type CommandBufferDescriptor<'a> = wgt::CommandBufferDescriptor<Label<'a>>;
static_assertions::assert_impl_all!(CommandBufferDescriptor<'_>: Send, Sync);

/// Describes the timestamp writes of a pass.
///
/// Corresponds to [WebGPU `GPUComputePassTimestampWrites`](
/// https://gpuweb.github.io/gpuweb/#dictdef-gpucomputepasstimestampwrites) and its render
/// pass counterpart.
#[derive(Clone, Debug)]
pub struct PassTimestampWrites<'a> {
    /// The query set to write to.
    pub query_set: &'a QuerySet,
    /// The index of the query set at which a start timestamp of this pass is written, if any.
    pub beginning_of_pass_write_index: Option<u32>,
    /// The index of the query set at which an end timestamp of this pass is written, if any.
    pub end_of_pass_write_index: Option<u32>,
}
static_assertions::assert_impl_all!(PassTimestampWrites<'_>: Send, Sync);

/// Describes the attributes of a compute pass.
///
/// For use with [`CommandEncoder::begin_compute_pass`].
///
/// Corresponds to [WebGPU `GPUComputePassDescriptor`](
/// https://gpuweb.github.io/gpuweb/#dictdef-gpucomputepassdescriptor).
#[derive(Clone, Default, Debug)]
pub struct ComputePassDescriptor<'a> {
    /// Debug label of the compute pass. This will show up in graphics debuggers for easy identification.
    pub label: Label<'a>,
    /// Defines which timestamp values will be written for this pass, and where to write them to.
    pub timestamp_writes: Option<PassTimestampWrites<'a>>,
}
static_assertions::assert_impl_all!(ComputePassDescriptor<'_>: Send, Sync);

/// Describes a color attachment to a [`RenderPass`].
///
/// For use with [`RenderPassDescriptor`].
///
/// Corresponds to [WebGPU `GPURenderPassColorAttachment`](
/// https://gpuweb.github.io/gpuweb/#color-attachments).
#[derive(Clone, Debug)]
pub struct RenderPassColorAttachment<'a> {
    /// The view to use as an attachment.
    pub view: &'a TextureView,
    /// The depth slice of a 3D view to render into. `None` for any other view.
    pub depth_slice: Option<u32>,
    /// The view that will receive the resolved output if multisampling is used.
    pub resolve_target: Option<&'a TextureView>,
    /// What to do with the attachment at the start of the pass.
    pub load_op: LoadOp,
    /// What to do with the attachment at the end of the pass.
    pub store_op: StoreOp,
    /// The value the attachment is cleared to when `load_op` is [`LoadOp::Clear`].
    pub clear_value: Color,
}
static_assertions::assert_impl_all!(RenderPassColorAttachment<'_>: Send, Sync);

/// Describes a depth/stencil attachment to a [`RenderPass`].
///
/// Load and store operations of an aspect that is not used, or is read-only,
/// are left [`Undefined`](LoadOp::Undefined).
///
/// Corresponds to [WebGPU `GPURenderPassDepthStencilAttachment`](
/// https://gpuweb.github.io/gpuweb/#depth-stencil-attachments).
#[derive(Clone, Debug)]
pub struct RenderPassDepthStencilAttachment<'a> {
    /// The view to use as an attachment.
    pub view: &'a TextureView,
    /// What to do with the depth aspect at the start of the pass.
    pub depth_load_op: LoadOp,
    /// What to do with the depth aspect at the end of the pass.
    pub depth_store_op: StoreOp,
    /// The value the depth aspect is cleared to.
    pub depth_clear_value: f32,
    /// The depth aspect is only read.
    pub depth_read_only: bool,
    /// What to do with the stencil aspect at the start of the pass.
    pub stencil_load_op: LoadOp,
    /// What to do with the stencil aspect at the end of the pass.
    pub stencil_store_op: StoreOp,
    /// The value the stencil aspect is cleared to.
    pub stencil_clear_value: u32,
    /// The stencil aspect is only read.
    pub stencil_read_only: bool,
}
static_assertions::assert_impl_all!(RenderPassDepthStencilAttachment<'_>: Send, Sync);

/// Describes the attachments of a render pass.
///
/// For use with [`CommandEncoder::begin_render_pass`].
///
/// Corresponds to [WebGPU `GPURenderPassDescriptor`](
/// https://gpuweb.github.io/gpuweb/#dictdef-gpurenderpassdescriptor).
#[derive(Clone, Debug, Default)]
pub struct RenderPassDescriptor<'a> {
    /// Debug label of the render pass. This will show up in graphics debuggers for easy identification.
    pub label: Label<'a>,
    /// The color attachments of the render pass. `None` leaves a hole.
    pub color_attachments: &'a [Option<RenderPassColorAttachment<'a>>],
    /// The depth and stencil attachment of the render pass, if any.
    pub depth_stencil_attachment: Option<RenderPassDepthStencilAttachment<'a>>,
    /// Defines which timestamp values will be written for this pass, and where to write them to.
    pub timestamp_writes: Option<PassTimestampWrites<'a>>,
    /// Defines where the occlusion query results will be stored for this pass.
    pub occlusion_query_set: Option<&'a QuerySet>,
}
static_assertions::assert_impl_all!(RenderPassDescriptor<'_>: Send, Sync);

impl CommandEncoder {
    /// Finishes recording and returns a [`CommandBuffer`] that can be submitted for execution.
    pub fn finish(self) -> Result<CommandBuffer> {
        self.finish_with_descriptor(&CommandBufferDescriptor::default())
    }

    /// Like [`finish`](Self::finish), labelling the command buffer.
    ///
    /// The encoder is released either way.
    pub fn finish_with_descriptor(mut self, desc: &CommandBufferDescriptor<'_>) -> Result<CommandBuffer> {
        let encoder = self.handle.get()?;
        let raw_desc = wire::LabelDescriptor::new(desc.label);
        // SAFETY: the descriptor lives until the call returns.
        let raw = unsafe { procs::COMMAND_ENCODER_FINISH.invoke(&[encoder, ffi::addr(&raw_desc)]) };
        self.handle.release();
        Ok(CommandBuffer {
            handle: RawHandle::new(raw?, "CommandBuffer", &procs::COMMAND_BUFFER_RELEASE)?,
        })
    }

    /// Begins recording of a compute pass.
    ///
    /// This function returns a [`ComputePass`] object which records a single compute pass.
    /// The encoder is borrowed until the pass is ended or dropped.
    pub fn begin_compute_pass<'encoder>(
        &'encoder mut self,
        desc: &ComputePassDescriptor<'_>,
    ) -> Result<ComputePass<'encoder>> {
        let encoder = self.handle.get()?;
        let timestamp_writes = desc.timestamp_writes.as_ref().map(map_timestamp_writes).transpose()?;
        let raw_desc = wire::ComputePassDescriptor {
            next_in_chain: ptr::null(),
            label: StringView::from_label(desc.label),
            timestamp_writes: wire::opt_ptr(timestamp_writes.as_ref()),
        };
        // SAFETY: the descriptor and its timestamp writes live until the call returns.
        let raw = unsafe {
            procs::COMMAND_ENCODER_BEGIN_COMPUTE_PASS.invoke(&[encoder, ffi::addr(&raw_desc)])
        }?;
        Ok(ComputePass {
            handle: RawHandle::new(raw, "ComputePass", &procs::COMPUTE_PASS_RELEASE)?,
            _encoder: PhantomData,
        })
    }

    /// Begins recording of a render pass.
    ///
    /// This function returns a [`RenderPass`] object which records a single render pass.
    /// The encoder is borrowed until the pass is ended or dropped.
    pub fn begin_render_pass<'encoder>(
        &'encoder mut self,
        desc: &RenderPassDescriptor<'_>,
    ) -> Result<RenderPass<'encoder>> {
        let encoder = self.handle.get()?;
        if desc.color_attachments.len() > wgt::MAX_COLOR_ATTACHMENTS {
            return Err(Error::InvalidArgument("too many color attachments"));
        }
        let color_attachments = desc
            .color_attachments
            .iter()
            .map(|ca| ca.as_ref().map_or(Ok(hole()), map_color_attachment))
            .collect::<Result<ArrayVec<_, { wgt::MAX_COLOR_ATTACHMENTS }>>>()?;
        let depth_stencil = desc
            .depth_stencil_attachment
            .as_ref()
            .map(map_depth_stencil_attachment)
            .transpose()?;
        let timestamp_writes = desc.timestamp_writes.as_ref().map(map_timestamp_writes).transpose()?;
        let raw_desc = wire::RenderPassDescriptor {
            next_in_chain: ptr::null(),
            label: StringView::from_label(desc.label),
            color_attachment_count: color_attachments.len(),
            color_attachments: wire::array_ptr(&color_attachments),
            depth_stencil_attachment: wire::opt_ptr(depth_stencil.as_ref()),
            occlusion_query_set: api::optional_raw(desc.occlusion_query_set.map(|q| &q.handle))?,
            timestamp_writes: wire::opt_ptr(timestamp_writes.as_ref()),
        };
        // SAFETY: the descriptor and everything it points to are locals of this function.
        let raw = unsafe {
            procs::COMMAND_ENCODER_BEGIN_RENDER_PASS.invoke(&[encoder, ffi::addr(&raw_desc)])
        }?;
        Ok(RenderPass {
            handle: RawHandle::new(raw, "RenderPass", &procs::RENDER_PASS_RELEASE)?,
            _encoder: PhantomData,
        })
    }

    /// Copy data from one buffer to another.
    pub fn copy_buffer_to_buffer(
        &mut self,
        source: &Buffer,
        source_offset: BufferAddress,
        destination: &Buffer,
        destination_offset: BufferAddress,
        copy_size: BufferAddress,
    ) {
        // SAFETY: plain arguments.
        unsafe {
            api::record(&self.handle, &procs::COMMAND_ENCODER_COPY_BUFFER_TO_BUFFER, |encoder| {
                Ok([
                    encoder,
                    source.handle.get()?,
                    source_offset as usize,
                    destination.handle.get()?,
                    destination_offset as usize,
                    copy_size as usize,
                ])
            })
        }
    }

    /// Copy data from a buffer to a texture.
    pub fn copy_buffer_to_texture(
        &mut self,
        source: TexelCopyBufferInfo<'_>,
        destination: TexelCopyTextureInfo<'_>,
        copy_size: Extent3d,
    ) {
        let copy_size = wire::Extent3d::from(copy_size);
        let copy = map_buffer_copy(&source).and_then(|s| Ok((s, map_texture_copy(&destination)?)));
        // SAFETY: the copy descriptions are locals that outlive the call.
        unsafe {
            api::record(&self.handle, &procs::COMMAND_ENCODER_COPY_BUFFER_TO_TEXTURE, |encoder| {
                let (source, destination) = copy.as_ref().map_err(Clone::clone)?;
                Ok([encoder, ffi::addr(source), ffi::addr(destination), ffi::addr(&copy_size)])
            })
        }
    }

    /// Copy data from a texture to a buffer.
    pub fn copy_texture_to_buffer(
        &mut self,
        source: TexelCopyTextureInfo<'_>,
        destination: TexelCopyBufferInfo<'_>,
        copy_size: Extent3d,
    ) {
        let copy_size = wire::Extent3d::from(copy_size);
        let copy = map_texture_copy(&source).and_then(|s| Ok((s, map_buffer_copy(&destination)?)));
        // SAFETY: the copy descriptions are locals that outlive the call.
        unsafe {
            api::record(&self.handle, &procs::COMMAND_ENCODER_COPY_TEXTURE_TO_BUFFER, |encoder| {
                let (source, destination) = copy.as_ref().map_err(Clone::clone)?;
                Ok([encoder, ffi::addr(source), ffi::addr(destination), ffi::addr(&copy_size)])
            })
        }
    }

    /// Copy data from one texture to another.
    pub fn copy_texture_to_texture(
        &mut self,
        source: TexelCopyTextureInfo<'_>,
        destination: TexelCopyTextureInfo<'_>,
        copy_size: Extent3d,
    ) {
        let copy_size = wire::Extent3d::from(copy_size);
        let copy = map_texture_copy(&source).and_then(|s| Ok((s, map_texture_copy(&destination)?)));
        // SAFETY: the copy descriptions are locals that outlive the call.
        unsafe {
            api::record(&self.handle, &procs::COMMAND_ENCODER_COPY_TEXTURE_TO_TEXTURE, |encoder| {
                let (source, destination) = copy.as_ref().map_err(Clone::clone)?;
                Ok([encoder, ffi::addr(source), ffi::addr(destination), ffi::addr(&copy_size)])
            })
        }
    }

    /// Clears buffer to zero.
    ///
    /// `size` of `None` clears everything past `offset`.
    pub fn clear_buffer(&mut self, buffer: &Buffer, offset: BufferAddress, size: Option<BufferAddress>) {
        // SAFETY: plain arguments.
        unsafe {
            api::record(&self.handle, &procs::COMMAND_ENCODER_CLEAR_BUFFER, |encoder| {
                Ok([
                    encoder,
                    buffer.handle.get()?,
                    offset as usize,
                    size.unwrap_or(native::WHOLE_SIZE) as usize,
                ])
            })
        }
    }

    /// Inserts debug marker.
    pub fn insert_debug_marker(&mut self, label: &str) {
        api::record_label(&self.handle, &procs::COMMAND_ENCODER_INSERT_DEBUG_MARKER, label);
    }

    /// Start record commands and group it into debug marker group.
    pub fn push_debug_group(&mut self, label: &str) {
        api::record_label(&self.handle, &procs::COMMAND_ENCODER_PUSH_DEBUG_GROUP, label);
    }

    /// Stops command recording and creates debug group.
    pub fn pop_debug_group(&mut self) {
        // SAFETY: plain handle argument.
        unsafe { api::record(&self.handle, &procs::COMMAND_ENCODER_POP_DEBUG_GROUP, |e| Ok([e])) }
    }

    /// Resolves a query set, writing the results into the supplied destination buffer.
    ///
    /// Occlusion and timestamp queries are 8 bytes each.
    pub fn resolve_query_set(
        &mut self,
        query_set: &QuerySet,
        query_range: Range<u32>,
        destination: &Buffer,
        destination_offset: BufferAddress,
    ) {
        let count = query_range.end.saturating_sub(query_range.start);
        // SAFETY: plain arguments.
        unsafe {
            api::record(&self.handle, &procs::COMMAND_ENCODER_RESOLVE_QUERY_SET, |encoder| {
                Ok([
                    encoder,
                    query_set.handle.get()?,
                    query_range.start as usize,
                    count as usize,
                    destination.handle.get()?,
                    destination_offset as usize,
                ])
            })
        }
    }

    /// Issue a timestamp command at this point in the queue.
    /// The timestamp will be written to the specified query set, at the specified index.
    pub fn write_timestamp(&mut self, query_set: &QuerySet, query_index: u32) {
        // SAFETY: plain arguments.
        unsafe {
            api::record(&self.handle, &procs::COMMAND_ENCODER_WRITE_TIMESTAMP, |encoder| {
                Ok([encoder, query_set.handle.get()?, query_index as usize])
            })
        }
    }
}

/// A color attachment slot that is not used.
fn hole() -> wire::RenderPassColorAttachment {
    wire::RenderPassColorAttachment {
        depth_slice: native::DEPTH_SLICE_UNDEFINED,
        ..Default::default()
    }
}

fn map_color_attachment(
    attachment: &RenderPassColorAttachment<'_>,
) -> Result<wire::RenderPassColorAttachment> {
    Ok(wire::RenderPassColorAttachment {
        next_in_chain: ptr::null(),
        view: attachment.view.handle.get()?,
        depth_slice: attachment
            .depth_slice
            .unwrap_or(native::DEPTH_SLICE_UNDEFINED),
        _pad: 0,
        resolve_target: api::optional_raw(attachment.resolve_target.map(|v| &v.handle))?,
        load_op: conv::load_op_to_native(attachment.load_op.to_raw()),
        store_op: conv::store_op_to_native(attachment.store_op.to_raw()),
        clear_value: attachment.clear_value.into(),
    })
}

fn map_depth_stencil_attachment(
    attachment: &RenderPassDepthStencilAttachment<'_>,
) -> Result<wire::RenderPassDepthStencilAttachment> {
    Ok(wire::RenderPassDepthStencilAttachment {
        view: attachment.view.handle.get()?,
        depth_load_op: conv::load_op_to_native(attachment.depth_load_op.to_raw()),
        depth_store_op: conv::store_op_to_native(attachment.depth_store_op.to_raw()),
        depth_clear_value: attachment.depth_clear_value,
        depth_read_only: conv::map_bool(attachment.depth_read_only),
        stencil_load_op: conv::load_op_to_native(attachment.stencil_load_op.to_raw()),
        stencil_store_op: conv::store_op_to_native(attachment.stencil_store_op.to_raw()),
        stencil_clear_value: attachment.stencil_clear_value,
        stencil_read_only: conv::map_bool(attachment.stencil_read_only),
    })
}

fn map_timestamp_writes(writes: &PassTimestampWrites<'_>) -> Result<wire::PassTimestampWrites> {
    Ok(wire::PassTimestampWrites {
        query_set: writes.query_set.handle.get()?,
        beginning_of_pass_write_index: writes
            .beginning_of_pass_write_index
            .unwrap_or(native::QUERY_SET_INDEX_UNDEFINED),
        end_of_pass_write_index: writes
            .end_of_pass_write_index
            .unwrap_or(native::QUERY_SET_INDEX_UNDEFINED),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn released() -> CommandEncoder {
        CommandEncoder {
            handle: RawHandle::null("CommandEncoder", &procs::COMMAND_ENCODER_RELEASE),
        }
    }

    #[test]
    fn released_encoder_skips_commands() {
        let mut encoder = released();
        let buffer = Buffer {
            handle: RawHandle::null("Buffer", &procs::BUFFER_RELEASE),
            device: RawHandle::null("Device", &procs::DEVICE_RELEASE),
        };
        encoder.clear_buffer(&buffer, 0, None);
        encoder.copy_buffer_to_buffer(&buffer, 0, &buffer, 0, 4);
        encoder.insert_debug_marker("marker");
        encoder.pop_debug_group();
        assert!(matches!(
            encoder.begin_compute_pass(&Default::default()),
            Err(Error::Released { kind: "CommandEncoder" })
        ));
        assert!(matches!(
            encoder.finish(),
            Err(Error::Released { kind: "CommandEncoder" })
        ));
    }

    #[test]
    fn color_attachment_count_is_bounded() {
        let mut encoder = CommandEncoder {
            handle: RawHandle::retained(0x1, "CommandEncoder", &procs::COMMAND_ENCODER_RELEASE),
        };
        let attachments = vec![None; wgt::MAX_COLOR_ATTACHMENTS + 1];
        let rejected = matches!(
            encoder.begin_render_pass(&RenderPassDescriptor {
                color_attachments: &attachments,
                ..Default::default()
            }),
            Err(Error::InvalidArgument(_))
        );
        assert!(rejected);
        // Never live, so nothing must reach the library on drop.
        std::mem::forget(encoder);
    }

    #[test]
    fn unused_color_slot() {
        let raw = hole();
        assert_eq!(raw.view, 0);
        assert_eq!(raw.depth_slice, native::DEPTH_SLICE_UNDEFINED);
        assert_eq!(raw.load_op, 0);
    }
}
