use std::marker::PhantomData;

use crate::{
    ffi::{self, procs},
    handle::RawHandle,
    *,
};

/// In-progress recording of a compute pass.
///
/// It can be created with [`CommandEncoder::begin_compute_pass`].
///
/// Corresponds to [WebGPU `GPUComputePassEncoder`](
/// https://gpuweb.github.io/gpuweb/#compute-pass-encoder).
#[derive(Debug)]
pub struct ComputePass<'encoder> {
    pub(crate) handle: RawHandle,
    pub(crate) _encoder: PhantomData<&'encoder mut CommandEncoder>,
}
static_assertions::assert_impl_all!(ComputePass<'_>: Send, Sync);

impl ComputePass<'_> {
    /// Sets the active bind group for a given bind group index. The bind group layout
    /// in the active pipeline when the `dispatch()` function is called must match the layout of this bind group.
    ///
    /// If the bind group have dynamic offsets, provide them in the binding order.
    /// `None` unbinds the index.
    pub fn set_bind_group(
        &mut self,
        index: u32,
        bind_group: Option<&BindGroup>,
        offsets: &[DynamicOffset],
    ) {
        // SAFETY: `offsets` outlives the call.
        unsafe {
            api::record(&self.handle, &procs::COMPUTE_PASS_SET_BIND_GROUP, |pass| {
                Ok([
                    pass,
                    index as usize,
                    api::optional_raw(bind_group.map(|g| &g.handle))?,
                    offsets.len(),
                    ffi::slice_addr(offsets),
                ])
            })
        }
    }

    /// Sets the active compute pipeline.
    pub fn set_pipeline(&mut self, pipeline: &ComputePipeline) {
        // SAFETY: plain arguments.
        unsafe {
            api::record(&self.handle, &procs::COMPUTE_PASS_SET_PIPELINE, |pass| {
                Ok([pass, pipeline.handle.get()?])
            })
        }
    }

    /// Inserts debug marker.
    pub fn insert_debug_marker(&mut self, label: &str) {
        api::record_label(&self.handle, &procs::COMPUTE_PASS_INSERT_DEBUG_MARKER, label);
    }

    /// Start record commands and group it into debug marker group.
    pub fn push_debug_group(&mut self, label: &str) {
        api::record_label(&self.handle, &procs::COMPUTE_PASS_PUSH_DEBUG_GROUP, label);
    }

    /// Stops command recording and creates debug group.
    pub fn pop_debug_group(&mut self) {
        // SAFETY: plain handle argument.
        unsafe { api::record(&self.handle, &procs::COMPUTE_PASS_POP_DEBUG_GROUP, |p| Ok([p])) }
    }

    /// Dispatches compute work operations.
    ///
    /// `x`, `y` and `z` denote the number of work groups to dispatch in each dimension.
    pub fn dispatch_workgroups(&mut self, x: u32, y: u32, z: u32) {
        // SAFETY: plain arguments.
        unsafe {
            api::record(&self.handle, &procs::COMPUTE_PASS_DISPATCH_WORKGROUPS, |pass| {
                Ok([pass, x as usize, y as usize, z as usize])
            })
        }
    }

    /// Dispatches compute work operations, based on the contents of the `indirect_buffer`.
    ///
    /// The structure expected in `indirect_buffer` must conform to [`DispatchIndirectArgs`].
    pub fn dispatch_workgroups_indirect(
        &mut self,
        indirect_buffer: &Buffer,
        indirect_offset: BufferAddress,
    ) {
        // SAFETY: plain arguments.
        unsafe {
            api::record(&self.handle, &procs::COMPUTE_PASS_DISPATCH_WORKGROUPS_INDIRECT, |pass| {
                Ok([pass, indirect_buffer.handle.get()?, indirect_offset as usize])
            })
        }
    }

    /// Issue a timestamp command at this point in the queue. The
    /// timestamp will be written to the specified query set, at the specified index.
    ///
    /// Absolute values have no meaning, but timestamps can be subtracted to
    /// get the time it takes for a string of operations to complete.
    pub fn write_timestamp(&mut self, query_set: &QuerySet, query_index: u32) {
        // SAFETY: plain arguments.
        unsafe {
            api::record(&self.handle, &procs::COMPUTE_PASS_WRITE_TIMESTAMP, |pass| {
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
        unsafe { api::record(&self.handle, &procs::COMPUTE_PASS_END, |p| Ok([p])) }
        self.handle.release();
    }
}

impl Drop for ComputePass<'_> {
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
        let mut pass = ComputePass {
            handle: RawHandle::null("ComputePass", &procs::COMPUTE_PASS_RELEASE),
            _encoder: PhantomData,
        };
        pass.dispatch_workgroups(1, 1, 1);
        pass.set_bind_group(0, None, &[]);
        pass.push_debug_group("group");
        pass.pop_debug_group();
        pass.end();
    }
}
