//! Byte-exact images of the native descriptor structs.
//!
//! Field order follows the C header. Padding the C compiler would insert is spelled
//! out as `_pad` fields so the layout can be read off the declaration. Handles are
//! plain words; pointers reference storage owned by the caller of the entry point
//! and must outlive the call.
//!
//! None of these types are exposed publicly. The façade builds fresh values for
//! every call.

use std::{ffi::c_void, mem, ptr, slice};

use static_assertions::const_assert_eq;

use crate::{ffi::Aggregate, native};

pub type Handle = usize;

macro_rules! zeroed_default {
    ($($ty:ident),* $(,)?) => {$(
        impl Default for $ty {
            fn default() -> Self {
                // SAFETY: made only of integers, floats and raw pointers, all of which
                // are valid when zeroed.
                unsafe { mem::zeroed() }
            }
        }
    )*};
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct StringView {
    pub data: *const u8,
    pub length: usize,
}

impl StringView {
    pub const NULL: Self = Self {
        data: ptr::null(),
        length: 0,
    };

    pub fn new(s: &str) -> Self {
        Self {
            data: s.as_ptr(),
            length: s.len(),
        }
    }

    pub fn from_label(label: Option<&str>) -> Self {
        label.map_or(Self::NULL, Self::new)
    }

    pub fn is_null(&self) -> bool {
        self.data.is_null()
    }

    /// Number of bytes the view covers, resolving the nul-terminated form.
    ///
    /// # Safety
    ///
    /// `data` must point to `length` readable bytes, or to a nul-terminated string
    /// when `length` is [`native::STRLEN`].
    pub unsafe fn resolved_len(&self) -> usize {
        if self.data.is_null() {
            0
        } else if self.length == native::STRLEN {
            // SAFETY: forwarded from the caller.
            unsafe { std::ffi::CStr::from_ptr(self.data.cast()) }
                .to_bytes()
                .len()
        } else {
            self.length
        }
    }

    /// Copies the referenced bytes into an owned string, replacing invalid UTF-8.
    ///
    /// # Safety
    ///
    /// See [`resolved_len`](Self::resolved_len).
    pub unsafe fn to_string_lossy(&self) -> String {
        // SAFETY: forwarded from the caller.
        let len = unsafe { self.resolved_len() };
        if len == 0 {
            return String::new();
        }
        // SAFETY: `len` bytes are readable.
        let bytes = unsafe { slice::from_raw_parts(self.data, len) };
        String::from_utf8_lossy(bytes).into_owned()
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ChainedStruct {
    pub next: *const ChainedStruct,
    pub s_type: u32,
    pub _pad: u32,
}

impl ChainedStruct {
    pub const fn new(s_type: u32) -> Self {
        Self {
            next: ptr::null(),
            s_type,
            _pad: 0,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ChainedStructOut {
    pub next: *mut ChainedStructOut,
    pub s_type: u32,
    pub _pad: u32,
}

/// Shared layout of every `WGPU*CallbackInfo` with a mode field.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CallbackInfo {
    pub next_in_chain: *const ChainedStruct,
    pub mode: u32,
    pub _pad: u32,
    pub callback: usize,
    pub userdata1: usize,
    pub userdata2: usize,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct UncapturedErrorCallbackInfo {
    pub next_in_chain: *const ChainedStruct,
    pub callback: usize,
    pub userdata1: usize,
    pub userdata2: usize,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct InstanceCapabilities {
    pub next_in_chain: *mut ChainedStructOut,
    pub timed_wait_any_enable: u32,
    pub _pad: u32,
    pub timed_wait_any_max_count: usize,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct InstanceDescriptor {
    pub next_in_chain: *const ChainedStruct,
    pub features: InstanceCapabilities,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct InstanceExtras {
    pub chain: ChainedStruct,
    pub backends: u64,
    pub flags: u64,
    pub dx12_shader_compiler: u32,
    pub gles3_minor_version: u32,
    pub dxil_path: StringView,
    pub dxc_path: StringView,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RequestAdapterOptions {
    pub next_in_chain: *const ChainedStruct,
    pub feature_level: u32,
    pub power_preference: u32,
    pub force_fallback_adapter: u32,
    pub backend_type: u32,
    pub compatible_surface: Handle,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct Limits {
    pub next_in_chain: *mut ChainedStructOut,
    pub max_texture_dimension_1d: u32,
    pub max_texture_dimension_2d: u32,
    pub max_texture_dimension_3d: u32,
    pub max_texture_array_layers: u32,
    pub max_bind_groups: u32,
    pub max_bind_groups_plus_vertex_buffers: u32,
    pub max_bindings_per_bind_group: u32,
    pub max_dynamic_uniform_buffers_per_pipeline_layout: u32,
    pub max_dynamic_storage_buffers_per_pipeline_layout: u32,
    pub max_sampled_textures_per_shader_stage: u32,
    pub max_samplers_per_shader_stage: u32,
    pub max_storage_buffers_per_shader_stage: u32,
    pub max_storage_textures_per_shader_stage: u32,
    pub max_uniform_buffers_per_shader_stage: u32,
    pub max_uniform_buffer_binding_size: u64,
    pub max_storage_buffer_binding_size: u64,
    pub min_uniform_buffer_offset_alignment: u32,
    pub min_storage_buffer_offset_alignment: u32,
    pub max_vertex_buffers: u32,
    pub _pad0: u32,
    pub max_buffer_size: u64,
    pub max_vertex_attributes: u32,
    pub max_vertex_buffer_array_stride: u32,
    pub max_inter_stage_shader_variables: u32,
    pub max_color_attachments: u32,
    pub max_color_attachment_bytes_per_sample: u32,
    pub max_compute_workgroup_storage_size: u32,
    pub max_compute_invocations_per_workgroup: u32,
    pub max_compute_workgroup_size_x: u32,
    pub max_compute_workgroup_size_y: u32,
    pub max_compute_workgroup_size_z: u32,
    pub max_compute_workgroups_per_dimension: u32,
    pub _pad1: u32,
}

macro_rules! limits_fields {
    ($m:ident) => {
        $m!(
            max_texture_dimension_1d,
            max_texture_dimension_2d,
            max_texture_dimension_3d,
            max_texture_array_layers,
            max_bind_groups,
            max_bind_groups_plus_vertex_buffers,
            max_bindings_per_bind_group,
            max_dynamic_uniform_buffers_per_pipeline_layout,
            max_dynamic_storage_buffers_per_pipeline_layout,
            max_sampled_textures_per_shader_stage,
            max_samplers_per_shader_stage,
            max_storage_buffers_per_shader_stage,
            max_storage_textures_per_shader_stage,
            max_uniform_buffers_per_shader_stage,
            max_uniform_buffer_binding_size,
            max_storage_buffer_binding_size,
            min_uniform_buffer_offset_alignment,
            min_storage_buffer_offset_alignment,
            max_vertex_buffers,
            max_buffer_size,
            max_vertex_attributes,
            max_vertex_buffer_array_stride,
            max_inter_stage_shader_variables,
            max_color_attachments,
            max_color_attachment_bytes_per_sample,
            max_compute_workgroup_storage_size,
            max_compute_invocations_per_workgroup,
            max_compute_workgroup_size_x,
            max_compute_workgroup_size_y,
            max_compute_workgroup_size_z,
            max_compute_workgroups_per_dimension
        )
    };
}

impl From<&wgt::Limits> for Limits {
    fn from(limits: &wgt::Limits) -> Self {
        macro_rules! copy {
            ($($field:ident),*) => {
                Limits {
                    $($field: limits.$field,)*
                    ..Default::default()
                }
            };
        }
        limits_fields!(copy)
    }
}

impl From<&Limits> for wgt::Limits {
    fn from(limits: &Limits) -> Self {
        macro_rules! copy {
            ($($field:ident),*) => {
                wgt::Limits {
                    $($field: limits.$field,)*
                }
            };
        }
        limits_fields!(copy)
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct AdapterInfo {
    pub next_in_chain: *mut ChainedStructOut,
    pub vendor: StringView,
    pub architecture: StringView,
    pub device: StringView,
    pub description: StringView,
    pub backend_type: u32,
    pub adapter_type: u32,
    pub vendor_id: u32,
    pub device_id: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SupportedFeatures {
    pub feature_count: usize,
    pub features: *const u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct QueueDescriptor {
    pub next_in_chain: *const ChainedStruct,
    pub label: StringView,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DeviceDescriptor {
    pub next_in_chain: *const ChainedStruct,
    pub label: StringView,
    pub required_feature_count: usize,
    pub required_features: *const u32,
    pub required_limits: *const Limits,
    pub default_queue: QueueDescriptor,
    pub device_lost_callback_info: CallbackInfo,
    pub uncaptured_error_callback_info: UncapturedErrorCallbackInfo,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SurfaceDescriptor {
    pub next_in_chain: *const ChainedStruct,
    pub label: StringView,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SurfaceSourceMetalLayer {
    pub chain: ChainedStruct,
    pub layer: *mut c_void,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SurfaceSourceWindowsHwnd {
    pub chain: ChainedStruct,
    pub hinstance: *mut c_void,
    pub hwnd: *mut c_void,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SurfaceSourceXlibWindow {
    pub chain: ChainedStruct,
    pub display: *mut c_void,
    pub window: u64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SurfaceSourceWaylandSurface {
    pub chain: ChainedStruct,
    pub display: *mut c_void,
    pub surface: *mut c_void,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SurfaceSourceAndroidNativeWindow {
    pub chain: ChainedStruct,
    pub window: *mut c_void,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SurfaceSourceXcbWindow {
    pub chain: ChainedStruct,
    pub connection: *mut c_void,
    pub window: u32,
    pub _pad: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SurfaceConfiguration {
    pub next_in_chain: *const ChainedStruct,
    pub device: Handle,
    pub format: u32,
    pub _pad: u32,
    pub usage: u64,
    pub width: u32,
    pub height: u32,
    pub view_format_count: usize,
    pub view_formats: *const u32,
    pub alpha_mode: u32,
    pub present_mode: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SurfaceCapabilities {
    pub next_in_chain: *mut ChainedStructOut,
    pub usages: u64,
    pub format_count: usize,
    pub formats: *const u32,
    pub present_mode_count: usize,
    pub present_modes: *const u32,
    pub alpha_mode_count: usize,
    pub alpha_modes: *const u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SurfaceTexture {
    pub next_in_chain: *mut ChainedStructOut,
    pub texture: Handle,
    pub status: u32,
    pub _pad: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct BufferDescriptor {
    pub next_in_chain: *const ChainedStruct,
    pub label: StringView,
    pub usage: u64,
    pub size: u64,
    pub mapped_at_creation: u32,
    pub _pad: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Extent3d {
    pub width: u32,
    pub height: u32,
    pub depth_or_array_layers: u32,
}

impl From<wgt::Extent3d> for Extent3d {
    fn from(e: wgt::Extent3d) -> Self {
        Self {
            width: e.width,
            height: e.height,
            depth_or_array_layers: e.depth_or_array_layers,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Origin3d {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl From<wgt::Origin3d> for Origin3d {
    fn from(o: wgt::Origin3d) -> Self {
        Self {
            x: o.x,
            y: o.y,
            z: o.z,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct TextureDescriptor {
    pub next_in_chain: *const ChainedStruct,
    pub label: StringView,
    pub usage: u64,
    pub dimension: u32,
    pub size: Extent3d,
    pub format: u32,
    pub mip_level_count: u32,
    pub sample_count: u32,
    pub _pad: u32,
    pub view_format_count: usize,
    pub view_formats: *const u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct TextureViewDescriptor {
    pub next_in_chain: *const ChainedStruct,
    pub label: StringView,
    pub format: u32,
    pub dimension: u32,
    pub base_mip_level: u32,
    pub mip_level_count: u32,
    pub base_array_layer: u32,
    pub array_layer_count: u32,
    pub aspect: u32,
    pub _pad: u32,
    pub usage: u64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SamplerDescriptor {
    pub next_in_chain: *const ChainedStruct,
    pub label: StringView,
    pub address_mode_u: u32,
    pub address_mode_v: u32,
    pub address_mode_w: u32,
    pub mag_filter: u32,
    pub min_filter: u32,
    pub mipmap_filter: u32,
    pub lod_min_clamp: f32,
    pub lod_max_clamp: f32,
    pub compare: u32,
    pub max_anisotropy: u16,
    pub _pad: u16,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ShaderModuleDescriptor {
    pub next_in_chain: *const ChainedStruct,
    pub label: StringView,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ShaderSourceWgsl {
    pub chain: ChainedStruct,
    pub code: StringView,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ShaderSourceSpirv {
    pub chain: ChainedStruct,
    pub code_size: u32,
    pub _pad: u32,
    pub code: *const u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct BufferBindingLayout {
    pub next_in_chain: *const ChainedStruct,
    pub ty: u32,
    pub has_dynamic_offset: u32,
    pub min_binding_size: u64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SamplerBindingLayout {
    pub next_in_chain: *const ChainedStruct,
    pub ty: u32,
    pub _pad: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct TextureBindingLayout {
    pub next_in_chain: *const ChainedStruct,
    pub sample_type: u32,
    pub view_dimension: u32,
    pub multisampled: u32,
    pub _pad: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct StorageTextureBindingLayout {
    pub next_in_chain: *const ChainedStruct,
    pub access: u32,
    pub format: u32,
    pub view_dimension: u32,
    pub _pad: u32,
}

/// One sub-layout per binding kind; the one with a non-zero type is in use.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct BindGroupLayoutEntry {
    pub next_in_chain: *const ChainedStruct,
    pub binding: u32,
    pub _pad: u32,
    pub visibility: u64,
    pub buffer: BufferBindingLayout,
    pub sampler: SamplerBindingLayout,
    pub texture: TextureBindingLayout,
    pub storage_texture: StorageTextureBindingLayout,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct BindGroupLayoutDescriptor {
    pub next_in_chain: *const ChainedStruct,
    pub label: StringView,
    pub entry_count: usize,
    pub entries: *const BindGroupLayoutEntry,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct BindGroupEntry {
    pub next_in_chain: *const ChainedStruct,
    pub binding: u32,
    pub _pad: u32,
    pub buffer: Handle,
    pub offset: u64,
    pub size: u64,
    pub sampler: Handle,
    pub texture_view: Handle,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct BindGroupDescriptor {
    pub next_in_chain: *const ChainedStruct,
    pub label: StringView,
    pub layout: Handle,
    pub entry_count: usize,
    pub entries: *const BindGroupEntry,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PipelineLayoutDescriptor {
    pub next_in_chain: *const ChainedStruct,
    pub label: StringView,
    pub bind_group_layout_count: usize,
    pub bind_group_layouts: *const Handle,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ConstantEntry {
    pub next_in_chain: *const ChainedStruct,
    pub key: StringView,
    pub value: f64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ProgrammableStageDescriptor {
    pub next_in_chain: *const ChainedStruct,
    pub module: Handle,
    pub entry_point: StringView,
    pub constant_count: usize,
    pub constants: *const ConstantEntry,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ComputePipelineDescriptor {
    pub next_in_chain: *const ChainedStruct,
    pub label: StringView,
    pub layout: Handle,
    pub compute: ProgrammableStageDescriptor,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct VertexAttribute {
    pub format: u32,
    pub _pad0: u32,
    pub offset: u64,
    pub shader_location: u32,
    pub _pad1: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct VertexBufferLayout {
    pub step_mode: u32,
    pub _pad: u32,
    pub array_stride: u64,
    pub attribute_count: usize,
    pub attributes: *const VertexAttribute,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct VertexState {
    pub next_in_chain: *const ChainedStruct,
    pub module: Handle,
    pub entry_point: StringView,
    pub constant_count: usize,
    pub constants: *const ConstantEntry,
    pub buffer_count: usize,
    pub buffers: *const VertexBufferLayout,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PrimitiveState {
    pub next_in_chain: *const ChainedStruct,
    pub topology: u32,
    pub strip_index_format: u32,
    pub front_face: u32,
    pub cull_mode: u32,
    pub unclipped_depth: u32,
    pub _pad: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct StencilFaceState {
    pub compare: u32,
    pub fail_op: u32,
    pub depth_fail_op: u32,
    pub pass_op: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DepthStencilState {
    pub next_in_chain: *const ChainedStruct,
    pub format: u32,
    pub depth_write_enabled: u32,
    pub depth_compare: u32,
    pub stencil_front: StencilFaceState,
    pub stencil_back: StencilFaceState,
    pub stencil_read_mask: u32,
    pub stencil_write_mask: u32,
    pub depth_bias: i32,
    pub depth_bias_slope_scale: f32,
    pub depth_bias_clamp: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct MultisampleState {
    pub next_in_chain: *const ChainedStruct,
    pub count: u32,
    pub mask: u32,
    pub alpha_to_coverage_enabled: u32,
    pub _pad: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct BlendComponent {
    pub operation: u32,
    pub src_factor: u32,
    pub dst_factor: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct BlendState {
    pub color: BlendComponent,
    pub alpha: BlendComponent,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ColorTargetState {
    pub next_in_chain: *const ChainedStruct,
    pub format: u32,
    pub _pad: u32,
    pub blend: *const BlendState,
    pub write_mask: u64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct FragmentState {
    pub next_in_chain: *const ChainedStruct,
    pub module: Handle,
    pub entry_point: StringView,
    pub constant_count: usize,
    pub constants: *const ConstantEntry,
    pub target_count: usize,
    pub targets: *const ColorTargetState,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RenderPipelineDescriptor {
    pub next_in_chain: *const ChainedStruct,
    pub label: StringView,
    pub layout: Handle,
    pub vertex: VertexState,
    pub primitive: PrimitiveState,
    pub depth_stencil: *const DepthStencilState,
    pub multisample: MultisampleState,
    pub fragment: *const FragmentState,
}

/// Layout shared by the command encoder, command buffer and render bundle descriptors.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct LabelDescriptor {
    pub next_in_chain: *const ChainedStruct,
    pub label: StringView,
}

impl LabelDescriptor {
    pub fn new(label: Option<&str>) -> Self {
        Self {
            next_in_chain: ptr::null(),
            label: StringView::from_label(label),
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PassTimestampWrites {
    pub query_set: Handle,
    pub beginning_of_pass_write_index: u32,
    pub end_of_pass_write_index: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ComputePassDescriptor {
    pub next_in_chain: *const ChainedStruct,
    pub label: StringView,
    pub timestamp_writes: *const PassTimestampWrites,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl From<wgt::Color> for Color {
    fn from(c: wgt::Color) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RenderPassColorAttachment {
    pub next_in_chain: *const ChainedStruct,
    pub view: Handle,
    pub depth_slice: u32,
    pub _pad: u32,
    pub resolve_target: Handle,
    pub load_op: u32,
    pub store_op: u32,
    pub clear_value: Color,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RenderPassDepthStencilAttachment {
    pub view: Handle,
    pub depth_load_op: u32,
    pub depth_store_op: u32,
    pub depth_clear_value: f32,
    pub depth_read_only: u32,
    pub stencil_load_op: u32,
    pub stencil_store_op: u32,
    pub stencil_clear_value: u32,
    pub stencil_read_only: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RenderPassDescriptor {
    pub next_in_chain: *const ChainedStruct,
    pub label: StringView,
    pub color_attachment_count: usize,
    pub color_attachments: *const RenderPassColorAttachment,
    pub depth_stencil_attachment: *const RenderPassDepthStencilAttachment,
    pub occlusion_query_set: Handle,
    pub timestamp_writes: *const PassTimestampWrites,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RenderBundleEncoderDescriptor {
    pub next_in_chain: *const ChainedStruct,
    pub label: StringView,
    pub color_format_count: usize,
    pub color_formats: *const u32,
    pub depth_stencil_format: u32,
    pub sample_count: u32,
    pub depth_read_only: u32,
    pub stencil_read_only: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct QuerySetDescriptor {
    pub next_in_chain: *const ChainedStruct,
    pub label: StringView,
    pub ty: u32,
    pub count: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct TexelCopyBufferLayout {
    pub offset: u64,
    pub bytes_per_row: u32,
    pub rows_per_image: u32,
}

impl From<wgt::TexelCopyBufferLayout> for TexelCopyBufferLayout {
    fn from(layout: wgt::TexelCopyBufferLayout) -> Self {
        Self {
            offset: layout.offset,
            bytes_per_row: layout.bytes_per_row.unwrap_or(native::COPY_STRIDE_UNDEFINED),
            rows_per_image: layout.rows_per_image.unwrap_or(native::COPY_STRIDE_UNDEFINED),
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct TexelCopyBufferInfo {
    pub layout: TexelCopyBufferLayout,
    pub buffer: Handle,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct TexelCopyTextureInfo {
    pub texture: Handle,
    pub mip_level: u32,
    pub origin: Origin3d,
    pub aspect: u32,
    pub _pad: u32,
}

zeroed_default!(
    ChainedStructOut,
    CallbackInfo,
    UncapturedErrorCallbackInfo,
    InstanceCapabilities,
    InstanceDescriptor,
    RequestAdapterOptions,
    Limits,
    AdapterInfo,
    SupportedFeatures,
    DeviceDescriptor,
    SurfaceConfiguration,
    SurfaceCapabilities,
    SurfaceTexture,
    BufferDescriptor,
    TextureDescriptor,
    TextureViewDescriptor,
    SamplerDescriptor,
    BufferBindingLayout,
    SamplerBindingLayout,
    TextureBindingLayout,
    StorageTextureBindingLayout,
    BindGroupLayoutEntry,
    BindGroupEntry,
    ProgrammableStageDescriptor,
    VertexState,
    PrimitiveState,
    DepthStencilState,
    MultisampleState,
    ColorTargetState,
    FragmentState,
    RenderPipelineDescriptor,
    RenderPassColorAttachment,
    RenderPassDepthStencilAttachment,
    RenderPassDescriptor,
    RenderBundleEncoderDescriptor,
);

// SAFETY: all `repr(C)` images of the structs the native entry points take by value.
unsafe impl Aggregate for StringView {}
unsafe impl Aggregate for CallbackInfo {}
unsafe impl Aggregate for AdapterInfo {}
unsafe impl Aggregate for SupportedFeatures {}
unsafe impl Aggregate for SurfaceCapabilities {}

/// Pointer half of a `(count, pointer)` pair; null for an empty array.
pub fn array_ptr<T>(values: &[T]) -> *const T {
    if values.is_empty() {
        ptr::null()
    } else {
        values.as_ptr()
    }
}

/// Optional struct pointer; null for `None`.
pub fn opt_ptr<T>(value: Option<&T>) -> *const T {
    value.map_or(ptr::null(), |v| v as *const T)
}

/// Reads a native-owned `(count, pointer)` array into a vector.
///
/// # Safety
///
/// `data` must point to `count` readable elements, or be null.
pub unsafe fn read_array<T: Copy>(data: *const T, count: usize) -> Vec<T> {
    if data.is_null() || count == 0 {
        return Vec::new();
    }
    // SAFETY: forwarded from the caller.
    unsafe { slice::from_raw_parts(data, count) }.to_vec()
}

macro_rules! assert_size {
    ($($ty:ty => $size:expr),* $(,)?) => {$(
        const_assert_eq!(mem::size_of::<$ty>(), $size);
    )*};
}

assert_size!(
    StringView => 16,
    ChainedStruct => 16,
    ChainedStructOut => 16,
    CallbackInfo => 40,
    UncapturedErrorCallbackInfo => 32,
    InstanceDescriptor => 32,
    InstanceExtras => 72,
    RequestAdapterOptions => 32,
    Limits => 152,
    AdapterInfo => 88,
    SupportedFeatures => 16,
    DeviceDescriptor => 144,
    SurfaceDescriptor => 24,
    SurfaceSourceMetalLayer => 24,
    SurfaceSourceWindowsHwnd => 32,
    SurfaceSourceXlibWindow => 32,
    SurfaceSourceWaylandSurface => 32,
    SurfaceSourceAndroidNativeWindow => 24,
    SurfaceSourceXcbWindow => 32,
    SurfaceConfiguration => 64,
    SurfaceCapabilities => 64,
    SurfaceTexture => 24,
    BufferDescriptor => 48,
    Extent3d => 12,
    TextureDescriptor => 80,
    TextureViewDescriptor => 64,
    SamplerDescriptor => 64,
    ShaderModuleDescriptor => 24,
    ShaderSourceWgsl => 32,
    ShaderSourceSpirv => 32,
    BindGroupLayoutEntry => 112,
    BindGroupLayoutDescriptor => 40,
    BindGroupEntry => 56,
    BindGroupDescriptor => 48,
    PipelineLayoutDescriptor => 40,
    ConstantEntry => 32,
    ProgrammableStageDescriptor => 48,
    ComputePipelineDescriptor => 80,
    VertexAttribute => 24,
    VertexBufferLayout => 32,
    VertexState => 64,
    PrimitiveState => 32,
    StencilFaceState => 16,
    DepthStencilState => 72,
    MultisampleState => 24,
    BlendComponent => 12,
    BlendState => 24,
    ColorTargetState => 32,
    FragmentState => 64,
    RenderPipelineDescriptor => 168,
    LabelDescriptor => 24,
    PassTimestampWrites => 16,
    ComputePassDescriptor => 32,
    Color => 32,
    RenderPassColorAttachment => 72,
    RenderPassDepthStencilAttachment => 40,
    RenderPassDescriptor => 64,
    RenderBundleEncoderDescriptor => 56,
    QuerySetDescriptor => 32,
    TexelCopyBufferLayout => 16,
    TexelCopyBufferInfo => 24,
    TexelCopyTextureInfo => 32,
    wgt::DrawIndirectArgs => 16,
    wgt::DrawIndexedIndirectArgs => 20,
    wgt::DispatchIndirectArgs => 12,
);

const_assert_eq!(mem::offset_of!(BindGroupLayoutEntry, visibility), 16);
const_assert_eq!(mem::offset_of!(SurfaceConfiguration, usage), 24);
const_assert_eq!(mem::offset_of!(BufferBindingLayout, min_binding_size), 16);
const_assert_eq!(mem::offset_of!(ColorTargetState, write_mask), 24);
const_assert_eq!(mem::offset_of!(RenderPassColorAttachment, depth_slice), 16);

#[cfg(test)]
mod tests {
    use std::mem::offset_of;

    use super::*;

    #[test]
    fn bind_group_layout_entry_offsets() {
        assert_eq!(offset_of!(BindGroupLayoutEntry, binding), 8);
        assert_eq!(offset_of!(BindGroupLayoutEntry, buffer), 24);
        assert_eq!(offset_of!(BindGroupLayoutEntry, sampler), 48);
        assert_eq!(offset_of!(BindGroupLayoutEntry, texture), 64);
        assert_eq!(offset_of!(BindGroupLayoutEntry, storage_texture), 88);
        assert_eq!(offset_of!(TextureBindingLayout, multisampled), 16);
        assert_eq!(offset_of!(StorageTextureBindingLayout, view_dimension), 16);
    }

    #[test]
    fn render_pipeline_offsets() {
        assert_eq!(offset_of!(RenderPipelineDescriptor, layout), 24);
        assert_eq!(offset_of!(RenderPipelineDescriptor, vertex), 32);
        assert_eq!(offset_of!(RenderPipelineDescriptor, primitive), 96);
        assert_eq!(offset_of!(RenderPipelineDescriptor, depth_stencil), 128);
        assert_eq!(offset_of!(RenderPipelineDescriptor, multisample), 136);
        assert_eq!(offset_of!(RenderPipelineDescriptor, fragment), 160);
        assert_eq!(offset_of!(VertexState, buffers), 56);
        assert_eq!(offset_of!(VertexBufferLayout, array_stride), 8);
        assert_eq!(offset_of!(VertexAttribute, shader_location), 16);
        assert_eq!(offset_of!(DepthStencilState, stencil_back), 36);
        assert_eq!(offset_of!(DepthStencilState, depth_bias_clamp), 68);
    }

    #[test]
    fn descriptor_offsets() {
        assert_eq!(offset_of!(Limits, max_uniform_buffer_binding_size), 64);
        assert_eq!(offset_of!(Limits, max_buffer_size), 96);
        assert_eq!(offset_of!(Limits, max_compute_workgroups_per_dimension), 144);
        assert_eq!(offset_of!(AdapterInfo, backend_type), 72);
        assert_eq!(offset_of!(DeviceDescriptor, default_queue), 48);
        assert_eq!(offset_of!(DeviceDescriptor, device_lost_callback_info), 72);
        assert_eq!(offset_of!(DeviceDescriptor, uncaptured_error_callback_info), 112);
        assert_eq!(offset_of!(TextureDescriptor, size), 36);
        assert_eq!(offset_of!(TextureDescriptor, view_formats), 72);
        assert_eq!(offset_of!(TextureViewDescriptor, usage), 56);
        assert_eq!(offset_of!(SamplerDescriptor, max_anisotropy), 60);
        assert_eq!(offset_of!(SurfaceConfiguration, present_mode), 60);
        assert_eq!(offset_of!(SurfaceSourceXlibWindow, window), 24);
        assert_eq!(offset_of!(RenderPassColorAttachment, clear_value), 40);
        assert_eq!(offset_of!(RenderPassDescriptor, timestamp_writes), 56);
        assert_eq!(offset_of!(RenderBundleEncoderDescriptor, stencil_read_only), 52);
        assert_eq!(offset_of!(TexelCopyTextureInfo, aspect), 24);
        assert_eq!(offset_of!(CallbackInfo, userdata1), 24);
    }

    #[test]
    fn string_view() {
        assert!(StringView::from_label(None).is_null());
        let label = "buffer";
        let view = StringView::from_label(Some(label));
        assert_eq!(view.length, 6);
        assert_eq!(unsafe { view.to_string_lossy() }, "buffer");

        let terminated = b"native\0";
        let view = StringView {
            data: terminated.as_ptr(),
            length: native::STRLEN,
        };
        assert_eq!(unsafe { view.resolved_len() }, 6);
        assert_eq!(unsafe { StringView::NULL.to_string_lossy() }, "");
    }

    #[test]
    fn limits_round_trip() {
        let limits = wgt::Limits {
            max_buffer_size: 1 << 40,
            max_compute_workgroups_per_dimension: 7,
            ..Default::default()
        };
        let wire = Limits::from(&limits);
        assert!(wire.next_in_chain.is_null());
        assert_eq!(wire.max_buffer_size, 1 << 40);
        assert_eq!(wgt::Limits::from(&wire), limits);
    }
}
