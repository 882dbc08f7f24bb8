use std::ptr;

use smallvec::SmallVec;

use crate::{
    callback,
    ffi::{self, procs},
    handle::{impl_handle, RawHandle},
    native::{self, texture_format as ntf},
    request::{self, Completion, Pump},
    wire::{self, StringView},
    *,
};

/// Open connection to a graphics and/or compute device.
///
/// Responsible for the creation of most rendering and compute resources.
/// These are then used in commands, which are submitted to a [`Queue`].
///
/// A device may be requested from an adapter with [`Adapter::request_device`].
///
/// Corresponds to [WebGPU `GPUDevice`](https://gpuweb.github.io/gpuweb/#gpu-device).
#[derive(Debug)]
pub struct Device {
    pub(crate) handle: RawHandle,
}
static_assertions::assert_impl_all!(Device: Send, Sync);

impl_handle!(Device);

/// Wraps the result of a native factory, mapping null to [`Error::CreationFailed`].
macro_rules! created {
    ($ty:ident, $raw:expr, $release:ident) => {
        $ty {
            handle: RawHandle::new($raw, stringify!($ty), &procs::$release)?,
        }
    };
}

impl Device {
    /// Returns the queue of this device.
    ///
    /// Each call hands out a new reference to the same native queue.
    pub fn get_queue(&self) -> Result<Queue> {
        let device = self.handle.get()?;
        // SAFETY: plain handle argument.
        let queue = unsafe { procs::DEVICE_GET_QUEUE.invoke(&[device]) }?;
        Ok(created!(Queue, queue, QUEUE_RELEASE))
    }

    /// Takes a second native reference on the device, for objects that pump it.
    fn retain(&self) -> Result<RawHandle> {
        let device = self.handle.get()?;
        // SAFETY: plain handle argument.
        unsafe { procs::DEVICE_ADD_REF.invoke(&[device]) }?;
        Ok(RawHandle::retained(device, "Device", &procs::DEVICE_RELEASE))
    }

    /// Creates a new [`Buffer`].
    pub fn create_buffer(&self, desc: &BufferDescriptor<'_>) -> Result<Buffer> {
        let device = self.handle.get()?;
        let raw_desc = wire::BufferDescriptor {
            next_in_chain: ptr::null(),
            label: StringView::from_label(desc.label),
            usage: conv::map_buffer_usages(desc.usage),
            size: desc.size,
            mapped_at_creation: conv::map_bool(desc.mapped_at_creation),
            _pad: 0,
        };
        // SAFETY: the descriptor lives until the call returns.
        let raw = unsafe { procs::DEVICE_CREATE_BUFFER.invoke(&[device, ffi::addr(&raw_desc)]) }?;
        let handle = RawHandle::new(raw, "Buffer", &procs::BUFFER_RELEASE)?;
        Ok(Buffer {
            handle,
            device: self.retain()?,
        })
    }

    /// Creates a new [`Texture`].
    ///
    /// `desc` specifies the general format of the texture.
    pub fn create_texture(&self, desc: &TextureDescriptor<'_>) -> Result<Texture> {
        let device = self.handle.get()?;
        let view_formats: SmallVec<[u32; 4]> = desc
            .view_formats
            .iter()
            .map(|&f| conv::map_texture_format(f))
            .collect();
        let raw_desc = wire::TextureDescriptor {
            next_in_chain: ptr::null(),
            label: StringView::from_label(desc.label),
            usage: conv::map_texture_usages(desc.usage),
            dimension: conv::texture_dimension_to_native(desc.dimension.to_raw()),
            size: desc.size.into(),
            format: conv::map_texture_format(desc.format),
            mip_level_count: desc.mip_level_count,
            sample_count: desc.sample_count,
            _pad: 0,
            view_format_count: view_formats.len(),
            view_formats: wire::array_ptr(&view_formats),
        };
        // SAFETY: the descriptor and its view formats live until the call returns.
        let raw = unsafe { procs::DEVICE_CREATE_TEXTURE.invoke(&[device, ffi::addr(&raw_desc)]) }?;
        Ok(created!(Texture, raw, TEXTURE_RELEASE))
    }

    /// Creates a new [`Sampler`].
    ///
    /// `desc` specifies the behavior of the sampler.
    pub fn create_sampler(&self, desc: &SamplerDescriptor<'_>) -> Result<Sampler> {
        let device = self.handle.get()?;
        let raw_desc = wire::SamplerDescriptor {
            next_in_chain: ptr::null(),
            label: StringView::from_label(desc.label),
            address_mode_u: conv::address_mode_to_native(desc.address_mode_u.to_raw()),
            address_mode_v: conv::address_mode_to_native(desc.address_mode_v.to_raw()),
            address_mode_w: conv::address_mode_to_native(desc.address_mode_w.to_raw()),
            mag_filter: conv::filter_mode_to_native(desc.mag_filter.to_raw()),
            min_filter: conv::filter_mode_to_native(desc.min_filter.to_raw()),
            mipmap_filter: conv::mipmap_filter_mode_to_native(desc.mipmap_filter.to_raw()),
            lod_min_clamp: desc.lod_min_clamp,
            lod_max_clamp: desc.lod_max_clamp,
            compare: desc
                .compare
                .map_or(0, |c| conv::compare_function_to_native(c.to_raw())),
            max_anisotropy: desc.anisotropy_clamp,
            _pad: 0,
        };
        // SAFETY: the descriptor lives until the call returns.
        let raw = unsafe { procs::DEVICE_CREATE_SAMPLER.invoke(&[device, ffi::addr(&raw_desc)]) }?;
        Ok(created!(Sampler, raw, SAMPLER_RELEASE))
    }

    /// Creates a new [`QuerySet`].
    pub fn create_query_set(&self, desc: &QuerySetDescriptor<'_>) -> Result<QuerySet> {
        let device = self.handle.get()?;
        let raw_desc = wire::QuerySetDescriptor {
            next_in_chain: ptr::null(),
            label: StringView::from_label(desc.label),
            ty: conv::query_type_to_native(desc.ty.to_raw()),
            count: desc.count,
        };
        // SAFETY: the descriptor lives until the call returns.
        let raw = unsafe { procs::DEVICE_CREATE_QUERY_SET.invoke(&[device, ffi::addr(&raw_desc)]) }?;
        Ok(created!(QuerySet, raw, QUERY_SET_RELEASE))
    }

    /// Creates a shader module from either SPIR-V or WGSL source code.
    ///
    /// Compilation errors are reported through the device error scope, and the
    /// call fails with [`Error::CreationFailed`] if no module came back.
    pub fn create_shader_module(&self, desc: ShaderModuleDescriptor<'_>) -> Result<ShaderModule> {
        let device = self.handle.get()?;
        let wgsl;
        let spirv;
        let chain = match desc.source {
            ShaderSource::Wgsl(ref code) => {
                wgsl = wire::ShaderSourceWgsl {
                    chain: wire::ChainedStruct::new(native::s_type::SHADER_SOURCE_WGSL),
                    code: StringView::new(code),
                };
                &wgsl.chain
            }
            ShaderSource::SpirV(ref words) => {
                let code_size = u32::try_from(words.len())
                    .map_err(|_| Error::InvalidArgument("SPIR-V module has too many words"))?;
                spirv = wire::ShaderSourceSpirv {
                    chain: wire::ChainedStruct::new(native::s_type::SHADER_SOURCE_SPIRV),
                    code_size,
                    _pad: 0,
                    code: wire::array_ptr(words),
                };
                &spirv.chain
            }
        };
        let raw_desc = wire::ShaderModuleDescriptor {
            next_in_chain: chain,
            label: StringView::from_label(desc.label),
        };
        // SAFETY: the descriptor, its source chain and the code live until the call returns.
        let raw =
            unsafe { procs::DEVICE_CREATE_SHADER_MODULE.invoke(&[device, ffi::addr(&raw_desc)]) }?;
        Ok(created!(ShaderModule, raw, SHADER_MODULE_RELEASE))
    }

    /// Creates a [`BindGroupLayout`].
    pub fn create_bind_group_layout(
        &self,
        desc: &BindGroupLayoutDescriptor<'_>,
    ) -> Result<BindGroupLayout> {
        let device = self.handle.get()?;
        let entries: SmallVec<[wire::BindGroupLayoutEntry; 8]> =
            desc.entries.iter().map(map_bind_group_layout_entry).collect();
        let raw_desc = wire::BindGroupLayoutDescriptor {
            next_in_chain: ptr::null(),
            label: StringView::from_label(desc.label),
            entry_count: entries.len(),
            entries: wire::array_ptr(&entries),
        };
        // SAFETY: the descriptor and its entries live until the call returns.
        let raw = unsafe {
            procs::DEVICE_CREATE_BIND_GROUP_LAYOUT.invoke(&[device, ffi::addr(&raw_desc)])
        }?;
        Ok(created!(BindGroupLayout, raw, BIND_GROUP_LAYOUT_RELEASE))
    }

    /// Creates a new [`BindGroup`].
    pub fn create_bind_group(&self, desc: &BindGroupDescriptor<'_>) -> Result<BindGroup> {
        let device = self.handle.get()?;
        let entries = desc
            .entries
            .iter()
            .map(map_bind_group_entry)
            .collect::<Result<SmallVec<[wire::BindGroupEntry; 8]>>>()?;
        let raw_desc = wire::BindGroupDescriptor {
            next_in_chain: ptr::null(),
            label: StringView::from_label(desc.label),
            layout: desc.layout.handle.get()?,
            entry_count: entries.len(),
            entries: wire::array_ptr(&entries),
        };
        // SAFETY: the descriptor and its entries live until the call returns.
        let raw = unsafe { procs::DEVICE_CREATE_BIND_GROUP.invoke(&[device, ffi::addr(&raw_desc)]) }?;
        Ok(created!(BindGroup, raw, BIND_GROUP_RELEASE))
    }

    /// Creates a [`PipelineLayout`].
    pub fn create_pipeline_layout(
        &self,
        desc: &PipelineLayoutDescriptor<'_>,
    ) -> Result<PipelineLayout> {
        let device = self.handle.get()?;
        let layouts = desc
            .bind_group_layouts
            .iter()
            .map(|l| l.handle.get())
            .collect::<Result<SmallVec<[wire::Handle; 4]>>>()?;
        let raw_desc = wire::PipelineLayoutDescriptor {
            next_in_chain: ptr::null(),
            label: StringView::from_label(desc.label),
            bind_group_layout_count: layouts.len(),
            bind_group_layouts: wire::array_ptr(&layouts),
        };
        // SAFETY: the descriptor and its layouts live until the call returns.
        let raw = unsafe {
            procs::DEVICE_CREATE_PIPELINE_LAYOUT.invoke(&[device, ffi::addr(&raw_desc)])
        }?;
        Ok(created!(PipelineLayout, raw, PIPELINE_LAYOUT_RELEASE))
    }

    /// Creates a [`ComputePipeline`].
    pub fn create_compute_pipeline(
        &self,
        desc: &ComputePipelineDescriptor<'_>,
    ) -> Result<ComputePipeline> {
        let device = self.handle.get()?;
        let constants = map_constants(&desc.compilation_options);
        let raw_desc = wire::ComputePipelineDescriptor {
            next_in_chain: ptr::null(),
            label: StringView::from_label(desc.label),
            layout: api::optional_raw(desc.layout.map(|l| &l.handle))?,
            compute: wire::ProgrammableStageDescriptor {
                next_in_chain: ptr::null(),
                module: desc.module.handle.get()?,
                entry_point: StringView::from_label(desc.entry_point),
                constant_count: constants.len(),
                constants: wire::array_ptr(&constants),
            },
        };
        // SAFETY: the descriptor and its constants live until the call returns.
        let raw = unsafe {
            procs::DEVICE_CREATE_COMPUTE_PIPELINE.invoke(&[device, ffi::addr(&raw_desc)])
        }?;
        Ok(created!(ComputePipeline, raw, COMPUTE_PIPELINE_RELEASE))
    }

    /// Creates a [`RenderPipeline`].
    pub fn create_render_pipeline(
        &self,
        desc: &RenderPipelineDescriptor<'_>,
    ) -> Result<RenderPipeline> {
        let device = self.handle.get()?;

        let attributes: SmallVec<[SmallVec<[wire::VertexAttribute; 8]>; 4]> = desc
            .vertex
            .buffers
            .iter()
            .map(|b| b.attributes.iter().map(map_vertex_attribute).collect())
            .collect();
        let buffers: SmallVec<[wire::VertexBufferLayout; 4]> = desc
            .vertex
            .buffers
            .iter()
            .zip(&attributes)
            .map(|(b, attributes)| wire::VertexBufferLayout {
                step_mode: conv::vertex_step_mode_to_native(b.step_mode.to_raw()),
                _pad: 0,
                array_stride: b.array_stride,
                attribute_count: attributes.len(),
                attributes: wire::array_ptr(attributes),
            })
            .collect();
        let vertex_constants = map_constants(&desc.vertex.compilation_options);
        let vertex = wire::VertexState {
            next_in_chain: ptr::null(),
            module: desc.vertex.module.handle.get()?,
            entry_point: StringView::from_label(desc.vertex.entry_point),
            constant_count: vertex_constants.len(),
            constants: wire::array_ptr(&vertex_constants),
            buffer_count: buffers.len(),
            buffers: wire::array_ptr(&buffers),
        };

        let depth_stencil = desc.depth_stencil.as_ref().map(map_depth_stencil_state);

        let (fragment_constants, blends) = match desc.fragment {
            Some(ref fragment) => (
                map_constants(&fragment.compilation_options),
                fragment
                    .targets
                    .iter()
                    .map(|t| t.as_ref().and_then(|t| t.blend).map(map_blend_state))
                    .collect(),
            ),
            None => (SmallVec::new(), SmallVec::<[Option<wire::BlendState>; 4]>::new()),
        };
        // Blend states are pointed to, so the targets are built only once they stay put.
        let targets: SmallVec<[wire::ColorTargetState; 4]> = desc
            .fragment
            .iter()
            .flat_map(|f| f.targets.iter())
            .zip(&blends)
            .map(|(target, blend)| match *target {
                Some(ref target) => wire::ColorTargetState {
                    next_in_chain: ptr::null(),
                    format: conv::map_texture_format(target.format),
                    _pad: 0,
                    blend: wire::opt_ptr(blend.as_ref()),
                    write_mask: conv::map_color_writes(target.write_mask),
                },
                None => wire::ColorTargetState {
                    format: ntf::UNDEFINED,
                    ..Default::default()
                },
            })
            .collect();
        let fragment = match desc.fragment {
            Some(ref fragment) => Some(wire::FragmentState {
                next_in_chain: ptr::null(),
                module: fragment.module.handle.get()?,
                entry_point: StringView::from_label(fragment.entry_point),
                constant_count: fragment_constants.len(),
                constants: wire::array_ptr(&fragment_constants),
                target_count: targets.len(),
                targets: wire::array_ptr(&targets),
            }),
            None => None,
        };

        let raw_desc = wire::RenderPipelineDescriptor {
            next_in_chain: ptr::null(),
            label: StringView::from_label(desc.label),
            layout: api::optional_raw(desc.layout.map(|l| &l.handle))?,
            vertex,
            primitive: map_primitive_state(&desc.primitive),
            depth_stencil: wire::opt_ptr(depth_stencil.as_ref()),
            multisample: wire::MultisampleState {
                next_in_chain: ptr::null(),
                count: desc.multisample.count,
                mask: desc.multisample.mask,
                alpha_to_coverage_enabled: conv::map_bool(desc.multisample.alpha_to_coverage_enabled),
                _pad: 0,
            },
            fragment: wire::opt_ptr(fragment.as_ref()),
        };
        // SAFETY: the descriptor and every array and struct it points to are locals
        // of this function.
        let raw = unsafe {
            procs::DEVICE_CREATE_RENDER_PIPELINE.invoke(&[device, ffi::addr(&raw_desc)])
        }?;
        Ok(created!(RenderPipeline, raw, RENDER_PIPELINE_RELEASE))
    }

    /// Creates an empty [`CommandEncoder`].
    pub fn create_command_encoder(
        &self,
        desc: &CommandEncoderDescriptor<'_>,
    ) -> Result<CommandEncoder> {
        let device = self.handle.get()?;
        let raw_desc = wire::LabelDescriptor::new(desc.label);
        // SAFETY: the descriptor lives until the call returns.
        let raw = unsafe {
            procs::DEVICE_CREATE_COMMAND_ENCODER.invoke(&[device, ffi::addr(&raw_desc)])
        }?;
        Ok(created!(CommandEncoder, raw, COMMAND_ENCODER_RELEASE))
    }

    /// Creates an empty [`RenderBundleEncoder`].
    pub fn create_render_bundle_encoder(
        &self,
        desc: &RenderBundleEncoderDescriptor<'_>,
    ) -> Result<RenderBundleEncoder> {
        let device = self.handle.get()?;
        let color_formats: SmallVec<[u32; 4]> = desc
            .color_formats
            .iter()
            .map(|&f| conv::map_texture_format_opt(f))
            .collect();
        let depth_stencil = desc.depth_stencil.as_ref();
        let raw_desc = wire::RenderBundleEncoderDescriptor {
            next_in_chain: ptr::null(),
            label: StringView::from_label(desc.label),
            color_format_count: color_formats.len(),
            color_formats: wire::array_ptr(&color_formats),
            depth_stencil_format: conv::map_texture_format_opt(depth_stencil.map(|ds| ds.format)),
            sample_count: desc.sample_count,
            depth_read_only: conv::map_bool(depth_stencil.is_some_and(|ds| ds.depth_read_only)),
            stencil_read_only: conv::map_bool(depth_stencil.is_some_and(|ds| ds.stencil_read_only)),
        };
        // SAFETY: the descriptor and its formats live until the call returns.
        let raw = unsafe {
            procs::DEVICE_CREATE_RENDER_BUNDLE_ENCODER.invoke(&[device, ffi::addr(&raw_desc)])
        }?;
        Ok(RenderBundleEncoder {
            handle: RawHandle::new(raw, "RenderBundleEncoder", &procs::RENDER_BUNDLE_ENCODER_RELEASE)?,
        })
    }

    /// Pushes an error scope onto the device's error scope stack.
    ///
    /// Errors of the `filter` kind raised by later operations are captured by
    /// the scope until [`pop_error_scope`](Self::pop_error_scope).
    pub fn push_error_scope(&self, filter: ErrorFilter) -> Result<()> {
        let device = self.handle.get()?;
        let filter = conv::error_filter_to_native(filter.to_raw());
        // SAFETY: plain arguments.
        unsafe { procs::DEVICE_PUSH_ERROR_SCOPE.invoke(&[device, filter as usize]) }.map(|_| ())
    }

    /// Pops the innermost error scope, blocking until the native library answers.
    ///
    /// Returns the first error the scope captured, or `None` if it captured none.
    ///
    /// Nothing checks the stack depth host-side. Some native builds abort when
    /// the stack is empty instead of answering with
    /// [`PopErrorScopeError::EmptyStack`]; keep pushes and pops balanced.
    pub fn pop_error_scope(&self) -> Result<Option<Error>> {
        self.pop_error_scope_async()?.wait()
    }

    /// Pops the innermost error scope and returns the request unfinished.
    ///
    /// An empty stack reported by the native library completes the request with
    /// [`PopErrorScopeError::EmptyStack`].
    pub fn pop_error_scope_async(&self) -> Result<Request<'_, Option<Error>>> {
        let device = self.handle.get()?;
        // SAFETY: the trampoline completes error scope pops.
        unsafe {
            request::call_async(
                &procs::DEVICE_POP_ERROR_SCOPE,
                &[device],
                &request::ERROR_SCOPE_POPS,
                callback::trampolines().pop_error_scope,
                Pump::Device(device),
                0,
                finish_pop_error_scope,
            )
        }
    }

    /// Check for resource cleanups and mapping callbacks.
    ///
    /// With `wait`, blocks until all submitted work has finished. Returns `true`
    /// if the queue is empty afterwards.
    pub fn poll(&self, wait: bool) -> Result<bool> {
        let device = self.handle.get()?;
        // SAFETY: plain arguments; no submission index is waited on.
        let empty =
            unsafe { procs::DEVICE_POLL.invoke(&[device, conv::map_bool(wait) as usize, 0]) }?;
        Ok(empty as u32 != native::FALSE)
    }

    /// List all limits that were requested of this device.
    pub fn limits(&self) -> Result<Limits> {
        let device = self.handle.get()?;
        read_limits(&procs::DEVICE_GET_LIMITS, device, "Device::limits")
    }

    /// The features which can be used on this device.
    pub fn features(&self) -> Result<Vec<FeatureName>> {
        let device = self.handle.get()?;
        read_features(&procs::DEVICE_GET_FEATURES, device)
    }

    /// Returns `true` if `feature` is enabled on this device.
    pub fn has_feature(&self, feature: FeatureName) -> Result<bool> {
        let device = self.handle.get()?;
        let raw = conv::feature_name_to_native(feature.to_raw());
        // SAFETY: plain arguments.
        let enabled = unsafe { procs::DEVICE_HAS_FEATURE.invoke(&[device, raw as usize]) }?;
        Ok(enabled as u32 != native::FALSE)
    }

    /// Destroy this device.
    ///
    /// The handle stays valid; operations on objects of a destroyed device
    /// report device-lost errors.
    pub fn destroy(&self) -> Result<()> {
        let device = self.handle.get()?;
        // SAFETY: plain handle argument.
        unsafe { procs::DEVICE_DESTROY.invoke(&[device]) }.map(|_| ())
    }
}

/// Describes a [`RenderBundleEncoder`].
///
/// For use with [`Device::create_render_bundle_encoder`].
///
/// Corresponds to [WebGPU `GPURenderBundleEncoderDescriptor`](
/// https://gpuweb.github.io/gpuweb/#dictdef-gpurenderbundleencoderdescriptor).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RenderBundleEncoderDescriptor<'a> {
    /// Debug label of the render bundle encoder. This will show up in graphics debuggers for easy identification.
    pub label: Label<'a>,
    /// The formats of the color attachments that this render bundle is capable to rendering to. This
    /// must match the formats of the color attachments in the render pass this render bundle is executed in.
    pub color_formats: &'a [Option<TextureFormat>],
    /// Information about the depth attachment that this render bundle is capable to rendering to. This
    /// must match the format of the depth attachments in the render pass this render bundle is executed in.
    pub depth_stencil: Option<RenderBundleDepthStencil>,
    /// Sample count this render bundle is capable of rendering to. This must match the pipelines and
    /// the render passes it is used in.
    pub sample_count: u32,
}
static_assertions::assert_impl_all!(RenderBundleEncoderDescriptor<'_>: Send, Sync);

/// Describes the depth/stencil attachment for render bundles.
///
/// Corresponds to a portion of [WebGPU `GPURenderBundleEncoderDescriptor`](
/// https://gpuweb.github.io/gpuweb/#dictdef-gpurenderbundleencoderdescriptor).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct RenderBundleDepthStencil {
    /// Format of the attachment.
    pub format: TextureFormat,
    /// If the depth aspect is not used by the bundle.
    pub depth_read_only: bool,
    /// If the stencil aspect is not used by the bundle.
    pub stencil_read_only: bool,
}

fn finish_pop_error_scope(_: usize, completion: Completion) -> Result<Option<Error>> {
    use native::pop_error_scope_status as s;
    match completion.status {
        s::SUCCESS => Ok(conv::map_error_kind(completion.value as u32).map(|kind| {
            Error::Operation(OperationError {
                operation: "Device::pop_error_scope",
                kind,
                message: completion.message,
            })
        })),
        s::EMPTY_STACK => Err(PopErrorScopeError::EmptyStack.into()),
        s::INSTANCE_DROPPED => Err(PopErrorScopeError::InstanceDropped.into()),
        other => Err(PopErrorScopeError::Other(other).into()),
    }
}

fn map_bind_group_layout_entry(entry: &BindGroupLayoutEntry) -> wire::BindGroupLayoutEntry {
    let layouts = conv::map_binding_type(&entry.ty);
    wire::BindGroupLayoutEntry {
        next_in_chain: ptr::null(),
        binding: entry.binding,
        _pad: 0,
        visibility: conv::map_shader_stages(entry.visibility),
        buffer: wire::BufferBindingLayout {
            next_in_chain: ptr::null(),
            ty: layouts.buffer,
            has_dynamic_offset: layouts.has_dynamic_offset,
            min_binding_size: layouts.min_binding_size,
        },
        sampler: wire::SamplerBindingLayout {
            next_in_chain: ptr::null(),
            ty: layouts.sampler,
            _pad: 0,
        },
        texture: wire::TextureBindingLayout {
            next_in_chain: ptr::null(),
            sample_type: layouts.texture_sample_type,
            view_dimension: layouts.texture_view_dimension,
            multisampled: layouts.multisampled,
            _pad: 0,
        },
        storage_texture: wire::StorageTextureBindingLayout {
            next_in_chain: ptr::null(),
            access: layouts.storage_access,
            format: layouts.storage_format,
            view_dimension: layouts.storage_view_dimension,
            _pad: 0,
        },
    }
}

fn map_bind_group_entry(entry: &BindGroupEntry<'_>) -> Result<wire::BindGroupEntry> {
    let mut raw = wire::BindGroupEntry {
        binding: entry.binding,
        ..Default::default()
    };
    match entry.resource {
        BindingResource::Buffer(ref binding) => {
            raw.buffer = binding.buffer.handle.get()?;
            raw.offset = binding.offset;
            raw.size = binding.size.unwrap_or(native::WHOLE_SIZE);
        }
        BindingResource::Sampler(sampler) => raw.sampler = sampler.handle.get()?,
        BindingResource::TextureView(view) => raw.texture_view = view.handle.get()?,
    }
    Ok(raw)
}

fn map_constants(options: &PipelineCompilationOptions<'_>) -> SmallVec<[wire::ConstantEntry; 4]> {
    options
        .constants
        .iter()
        .map(|&(key, value)| wire::ConstantEntry {
            next_in_chain: ptr::null(),
            key: StringView::new(key),
            value,
        })
        .collect()
}

fn map_vertex_attribute(attribute: &VertexAttribute) -> wire::VertexAttribute {
    wire::VertexAttribute {
        format: conv::map_vertex_format(attribute.format),
        _pad0: 0,
        offset: attribute.offset,
        shader_location: attribute.shader_location,
        _pad1: 0,
    }
}

fn map_primitive_state(state: &PrimitiveState) -> wire::PrimitiveState {
    wire::PrimitiveState {
        next_in_chain: ptr::null(),
        topology: conv::primitive_topology_to_native(state.topology.to_raw()),
        strip_index_format: state
            .strip_index_format
            .map_or(0, |f| conv::index_format_to_native(f.to_raw())),
        front_face: conv::front_face_to_native(state.front_face.to_raw()),
        cull_mode: conv::cull_mode_to_native(state.cull_mode.to_raw()),
        unclipped_depth: conv::map_bool(state.unclipped_depth),
        _pad: 0,
    }
}

fn map_stencil_face(face: &StencilFaceState) -> wire::StencilFaceState {
    wire::StencilFaceState {
        compare: conv::compare_function_to_native(face.compare.to_raw()),
        fail_op: conv::stencil_operation_to_native(face.fail_op.to_raw()),
        depth_fail_op: conv::stencil_operation_to_native(face.depth_fail_op.to_raw()),
        pass_op: conv::stencil_operation_to_native(face.pass_op.to_raw()),
    }
}

fn map_depth_stencil_state(state: &DepthStencilState) -> wire::DepthStencilState {
    wire::DepthStencilState {
        next_in_chain: ptr::null(),
        format: conv::map_texture_format(state.format),
        depth_write_enabled: conv::map_optional_bool(Some(state.depth_write_enabled)),
        depth_compare: conv::compare_function_to_native(state.depth_compare.to_raw()),
        stencil_front: map_stencil_face(&state.stencil.front),
        stencil_back: map_stencil_face(&state.stencil.back),
        stencil_read_mask: state.stencil.read_mask,
        stencil_write_mask: state.stencil.write_mask,
        depth_bias: state.bias.constant,
        depth_bias_slope_scale: state.bias.slope_scale,
        depth_bias_clamp: state.bias.clamp,
    }
}

fn map_blend_component(component: &BlendComponent) -> wire::BlendComponent {
    wire::BlendComponent {
        operation: conv::blend_operation_to_native(component.operation.to_raw()),
        src_factor: conv::blend_factor_to_native(component.src_factor.to_raw()),
        dst_factor: conv::blend_factor_to_native(component.dst_factor.to_raw()),
    }
}

fn map_blend_state(state: BlendState) -> wire::BlendState {
    wire::BlendState {
        color: map_blend_component(&state.color),
        alpha: map_blend_component(&state.alpha),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn released() -> Device {
        Device {
            handle: RawHandle::null("Device", &procs::DEVICE_RELEASE),
        }
    }

    #[test]
    fn released_device_does_not_reach_native() {
        let device = released();
        assert!(matches!(device.get_queue(), Err(Error::Released { kind: "Device" })));
        assert!(matches!(
            device.create_buffer(&BufferDescriptor {
                label: None,
                size: 4,
                usage: BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }),
            Err(Error::Released { .. })
        ));
        assert!(matches!(
            device.push_error_scope(ErrorFilter::Validation),
            Err(Error::Released { .. })
        ));
        assert!(matches!(device.pop_error_scope(), Err(Error::Released { .. })));
        assert!(matches!(device.poll(true), Err(Error::Released { .. })));
    }

    fn popped(status: u32, error_type: u32, message: &str) -> Result<Option<Error>> {
        finish_pop_error_scope(
            0,
            Completion {
                status,
                value: error_type as usize,
                message: message.to_string(),
            },
        )
    }

    #[test]
    fn pop_error_scope_results() {
        use native::{error_type, pop_error_scope_status as s};

        assert!(popped(s::SUCCESS, error_type::NO_ERROR, "").unwrap().is_none());

        let err = popped(s::SUCCESS, error_type::VALIDATION, "bad buffer")
            .unwrap()
            .unwrap();
        assert!(err.is(ErrorKind::Validation));
        assert!(!err.is(ErrorKind::OutOfMemory));
        assert!(err.to_string().contains("bad buffer"));

        assert!(matches!(
            popped(s::EMPTY_STACK, 0, ""),
            Err(Error::PopErrorScope(PopErrorScopeError::EmptyStack))
        ));
        assert!(matches!(
            popped(s::INSTANCE_DROPPED, 0, ""),
            Err(Error::PopErrorScope(PopErrorScopeError::InstanceDropped))
        ));
    }

    #[test]
    fn bind_group_layout_entry_uses_one_sub_layout() {
        let entry = map_bind_group_layout_entry(&BindGroupLayoutEntry {
            binding: 3,
            visibility: ShaderStages::COMPUTE,
            ty: BindingType::Buffer {
                ty: BufferBindingType::Storage,
                has_dynamic_offset: false,
                min_binding_size: 16,
            },
        });
        assert_eq!(entry.binding, 3);
        assert_eq!(entry.visibility, ShaderStages::COMPUTE.bits() as u64);
        assert_ne!(entry.buffer.ty, native::BINDING_NOT_USED);
        assert_eq!(entry.buffer.min_binding_size, 16);
        assert_eq!(entry.sampler.ty, native::BINDING_NOT_USED);
        assert_eq!(entry.texture.sample_type, native::BINDING_NOT_USED);
        assert_eq!(entry.storage_texture.access, native::BINDING_NOT_USED);
    }

    #[test]
    fn depth_write_is_an_optional_bool() {
        let state = map_depth_stencil_state(&DepthStencilState {
            format: TextureFormat::Depth32Float,
            depth_write_enabled: true,
            depth_compare: CompareFunction::Less,
            stencil: Default::default(),
            bias: Default::default(),
        });
        assert_eq!(state.depth_write_enabled, native::optional_bool::TRUE);
        assert_eq!(state.format, ntf::DEPTH32_FLOAT);
    }
}
