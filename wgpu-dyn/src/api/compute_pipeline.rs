use crate::{
    ffi::procs,
    handle::{impl_handle, RawHandle},
    *,
};

/// Handle to a compute pipeline.
///
/// A `ComputePipeline` object represents a compute pipeline and its single shader stage.
/// It can be created with [`Device::create_compute_pipeline`].
///
/// Corresponds to [WebGPU `GPUComputePipeline`](https://gpuweb.github.io/gpuweb/#compute-pipeline).
#[derive(Debug)]
pub struct ComputePipeline {
    pub(crate) handle: RawHandle,
}
static_assertions::assert_impl_all!(ComputePipeline: Send, Sync);

impl_handle!(ComputePipeline);

impl ComputePipeline {
    /// Get an object representing the bind group layout at a given index.
    ///
    /// If this pipeline was created with a default layout, then bind groups
    /// created with the returned `BindGroupLayout` can only be used with this
    /// pipeline.
    pub fn get_bind_group_layout(&self, index: u32) -> Result<BindGroupLayout> {
        let raw = self.handle.get()?;
        // SAFETY: plain arguments.
        let layout = unsafe {
            procs::COMPUTE_PIPELINE_GET_BIND_GROUP_LAYOUT.invoke(&[raw, index as usize])
        }?;
        Ok(BindGroupLayout {
            handle: RawHandle::new(layout, "BindGroupLayout", &procs::BIND_GROUP_LAYOUT_RELEASE)?,
        })
    }
}

/// Describes a compute pipeline.
///
/// For use with [`Device::create_compute_pipeline`].
///
/// Corresponds to [WebGPU `GPUComputePipelineDescriptor`](
/// https://gpuweb.github.io/gpuweb/#dictdef-gpucomputepipelinedescriptor).
#[derive(Clone, Debug)]
pub struct ComputePipelineDescriptor<'a> {
    /// Debug label of the pipeline. This will show up in graphics debuggers for easy identification.
    pub label: Label<'a>,
    /// The layout of bind groups for this pipeline.
    ///
    /// If this is set, then [`Device::create_compute_pipeline`] will raise a validation error if
    /// the layout doesn't match what the shader module(s) expect.
    ///
    /// If this is `None`, the layout is derived from the shader, and can be
    /// retrieved with [`ComputePipeline::get_bind_group_layout`].
    pub layout: Option<&'a PipelineLayout>,
    /// The compiled shader module for this stage.
    pub module: &'a ShaderModule,
    /// The name of the entry point in the compiled shader to use.
    ///
    /// If `None`, the module must contain exactly one compute entry point.
    pub entry_point: Option<&'a str>,
    /// Advanced options for when this pipeline is compiled.
    pub compilation_options: PipelineCompilationOptions<'a>,
}
static_assertions::assert_impl_all!(ComputePipelineDescriptor<'_>: Send, Sync);

/// Advanced options for use when a pipeline is compiled.
///
/// This implements `Default`, and for most users can be set to `Default::default()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PipelineCompilationOptions<'a> {
    /// Specifies the values of pipeline-overridable constants in the shader module.
    ///
    /// Each key must be the string representation of a pipeline-overridable
    /// constant's numeric ID or its name.
    pub constants: &'a [(&'a str, f64)],
}
static_assertions::assert_impl_all!(PipelineCompilationOptions<'_>: Send, Sync);
