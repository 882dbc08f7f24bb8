/*! This library describes the public types of the `wgpu-dyn` binding.
 *
 *  Enum discriminants follow the published WebGPU header the API was designed
 *  against. The native library has since renumbered several of them; the
 *  binding rewrites values at the FFI boundary, so nothing in here needs to
 *  know about the native numbering.
 */

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![allow(
    // We don't use syntax sugar where it's not necessary.
    clippy::match_like_matches_macro,
)]
#![warn(missing_docs, unsafe_op_in_unsafe_fn)]

mod format;

pub use format::{TextureFormat, VertexFormat};

/// Declares a `#[repr(u32)]` enum with explicit discriminants plus a
/// checked conversion back from the raw value.
macro_rules! host_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[repr(u32)]
        #[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Returns the variant whose discriminant is `raw`.
            pub const fn from_raw(raw: u32) -> Option<Self> {
                match raw {
                    $($value => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// The discriminant of this variant.
            pub const fn to_raw(self) -> u32 {
                self as u32
            }
        }
    };
}
pub(crate) use host_enum;

host_enum! {
    /// Power Preference when choosing a physical adapter.
    #[derive(Default)]
    pub enum PowerPreference {
        /// Let the implementation decide.
        #[default]
        Undefined = 0,
        /// Adapter that uses the least possible power. This is often an integrated GPU.
        LowPower = 1,
        /// Adapter that has the highest performance. This is often a discrete GPU.
        HighPerformance = 2,
    }
}

host_enum! {
    /// Graphics API an adapter is driven through.
    #[derive(Default)]
    pub enum BackendType {
        /// No preference or unknown.
        #[default]
        Undefined = 0,
        /// Dummy backend, used for testing.
        Null = 1,
        /// WebGPU in the browser.
        WebGpu = 2,
        /// Direct3D 11.
        D3d11 = 3,
        /// Direct3D 12.
        D3d12 = 4,
        /// Metal API (Apple platforms).
        Metal = 5,
        /// Vulkan API.
        Vulkan = 6,
        /// OpenGL 3.3+ (desktop).
        OpenGl = 7,
        /// OpenGL ES 3.0+.
        OpenGlEs = 8,
    }
}

host_enum! {
    /// Supported physical device types.
    pub enum AdapterType {
        /// Discrete GPU, separate from the CPU.
        DiscreteGpu = 0,
        /// Integrated GPU with shared CPU/GPU memory.
        IntegratedGpu = 1,
        /// Cpu / Software Rendering.
        Cpu = 2,
        /// Other or unknown.
        Unknown = 3,
    }
}

host_enum! {
    /// Optional features an adapter may expose and a device may require.
    pub enum FeatureName {
        /// Not a feature.
        Undefined = 0,
        /// Allows disabling depth clipping in [`PrimitiveState::unclipped_depth`].
        DepthClipControl = 1,
        /// Allows [`TextureFormat::Depth32FloatStencil8`].
        Depth32FloatStencil8 = 2,
        /// Allows timestamp queries.
        TimestampQuery = 3,
        /// BCn compressed texture formats.
        TextureCompressionBc = 4,
        /// ETC2 and EAC compressed texture formats.
        TextureCompressionEtc2 = 5,
        /// ASTC compressed texture formats.
        TextureCompressionAstc = 6,
        /// Non-zero `first_instance` in indirect draws.
        IndirectFirstInstance = 7,
        /// `f16` in shaders.
        ShaderF16 = 8,
        /// [`TextureFormat::Rg11b10Ufloat`] as a render attachment.
        Rg11b10UfloatRenderable = 9,
        /// [`TextureFormat::Bgra8Unorm`] as a storage texture.
        Bgra8UnormStorage = 10,
        /// Filtering samplers on 32-bit float textures.
        Float32Filterable = 11,
    }
}

host_enum! {
    /// Filter for error scopes.
    pub enum ErrorFilter {
        /// Catch only validation errors.
        Validation = 0,
        /// Catch only out-of-memory errors.
        OutOfMemory = 1,
        /// Catch only internal errors.
        Internal = 2,
    }
}

host_enum! {
    /// Type of query contained in a query set.
    pub enum QueryType {
        /// Query returns a single 64-bit number, serving as an occlusion boolean.
        Occlusion = 0,
        /// Query returns a 64-bit number indicating the GPU timestamp where all
        /// previous commands have finished executing.
        Timestamp = 1,
    }
}

host_enum! {
    /// Whether a vertex buffer is indexed by vertex or by instance.
    #[derive(Default)]
    pub enum VertexStepMode {
        /// Let the implementation decide.
        Undefined = 0,
        /// The slot is present in the layout but no buffer is bound to it.
        VertexBufferNotUsed = 1,
        /// Vertex data is advanced every vertex.
        #[default]
        Vertex = 2,
        /// Vertex data is advanced every instance.
        Instance = 3,
    }
}

host_enum! {
    /// Operation to perform to the output attachment at the start of a render pass.
    #[derive(Default)]
    pub enum LoadOp {
        /// Not specified.
        Undefined = 0,
        /// Clears the attachment to the pass's clear value.
        Clear = 1,
        /// Loads the existing value of the attachment.
        #[default]
        Load = 2,
    }
}

host_enum! {
    /// Operation to perform to the output attachment at the end of a render pass.
    #[derive(Default)]
    pub enum StoreOp {
        /// Not specified.
        Undefined = 0,
        /// Stores the resulting value of the render pass.
        #[default]
        Store = 1,
        /// Discards the resulting value of the render pass.
        Discard = 2,
    }
}

host_enum! {
    /// Specific type of a buffer binding.
    #[derive(Default)]
    pub enum BufferBindingType {
        /// The binding slot is not a buffer.
        Undefined = 0,
        /// A uniform buffer.
        #[default]
        Uniform = 1,
        /// A read-write storage buffer.
        Storage = 2,
        /// A storage buffer the shader may only read.
        ReadOnlyStorage = 3,
    }
}

host_enum! {
    /// Specific type of a sampler binding.
    #[derive(Default)]
    pub enum SamplerBindingType {
        /// The binding slot is not a sampler.
        Undefined = 0,
        /// The sampling result is produced based on more than a single color sample from a texture.
        #[default]
        Filtering = 1,
        /// The sampling result is produced based on a single color sample from a texture.
        NonFiltering = 2,
        /// Use as a comparison sampler instead of a normal sampler.
        Comparison = 3,
    }
}

host_enum! {
    /// Specific type of a sample in a texture binding.
    #[derive(Default)]
    pub enum TextureSampleType {
        /// The binding slot is not a sampled texture.
        Undefined = 0,
        /// Sampling returns floats.
        #[default]
        Float = 1,
        /// Sampling returns floats, but filtering samplers are not allowed.
        UnfilterableFloat = 2,
        /// Sampling does the depth reference comparison.
        Depth = 3,
        /// Sampling returns signed integers.
        Sint = 4,
        /// Sampling returns unsigned integers.
        Uint = 5,
    }
}

host_enum! {
    /// Specific type of a storage texture binding.
    #[derive(Default)]
    pub enum StorageTextureAccess {
        /// The binding slot is not a storage texture.
        Undefined = 0,
        /// The texture can only be written in the shader.
        #[default]
        WriteOnly = 1,
        /// The texture can only be read in the shader.
        ReadOnly = 2,
        /// The texture can be both read and written in the shader.
        ReadWrite = 3,
    }
}

host_enum! {
    /// Dimensions of a particular texture view.
    #[derive(Default)]
    pub enum TextureViewDimension {
        /// Derived from the texture.
        #[default]
        Undefined = 0,
        /// A one dimensional texture.
        D1 = 1,
        /// A two dimensional texture.
        D2 = 2,
        /// A two dimensional array texture.
        D2Array = 3,
        /// A cubemap texture.
        Cube = 4,
        /// A cubemap array texture.
        CubeArray = 5,
        /// A three dimensional texture.
        D3 = 6,
    }
}

host_enum! {
    /// Dimensionality of a texture.
    #[derive(Default)]
    pub enum TextureDimension {
        /// Not specified.
        Undefined = 0,
        /// 1D texture.
        D1 = 1,
        /// 2D texture.
        #[default]
        D2 = 2,
        /// 3D texture.
        D3 = 3,
    }
}

host_enum! {
    /// Kind of data the texture holds.
    #[derive(Default)]
    pub enum TextureAspect {
        /// Derived from the texture.
        Undefined = 0,
        /// Depth, Stencil, and Color.
        #[default]
        All = 1,
        /// Stencil.
        StencilOnly = 2,
        /// Depth.
        DepthOnly = 3,
    }
}

host_enum! {
    /// How edges should be handled in texture addressing.
    #[derive(Default)]
    pub enum AddressMode {
        /// Not specified.
        Undefined = 0,
        /// Clamp the value to the edge of the texture.
        #[default]
        ClampToEdge = 1,
        /// Repeat the texture in a tiling fashion.
        Repeat = 2,
        /// Repeat the texture, mirroring it every repeat.
        MirrorRepeat = 3,
    }
}

host_enum! {
    /// Texel mixing mode when sampling between texels.
    #[derive(Default)]
    pub enum FilterMode {
        /// Not specified.
        Undefined = 0,
        /// Nearest neighbor sampling.
        #[default]
        Nearest = 1,
        /// Linear Interpolation.
        Linear = 2,
    }
}

host_enum! {
    /// Texel mixing mode when sampling between mip levels.
    #[derive(Default)]
    pub enum MipmapFilterMode {
        /// Not specified.
        Undefined = 0,
        /// Nearest mip level.
        #[default]
        Nearest = 1,
        /// Linear interpolation between mip levels.
        Linear = 2,
    }
}

host_enum! {
    /// Comparison function used for depth and stencil operations.
    pub enum CompareFunction {
        /// Not specified.
        Undefined = 0,
        /// Function never passes.
        Never = 1,
        /// Function passes if new value less than existing value.
        Less = 2,
        /// Function passes if new value is equal to existing value.
        Equal = 3,
        /// Function passes if new value is less than or equal to existing value.
        LessEqual = 4,
        /// Function passes if new value is greater than existing value.
        Greater = 5,
        /// Function passes if new value is not equal to existing value.
        NotEqual = 6,
        /// Function passes if new value is greater than or equal to existing value.
        GreaterEqual = 7,
        /// Function always passes.
        Always = 8,
    }
}

host_enum! {
    /// Alpha blend operation.
    #[derive(Default)]
    pub enum BlendOperation {
        /// Not specified.
        Undefined = 0,
        /// Src + Dst
        #[default]
        Add = 1,
        /// Src - Dst
        Subtract = 2,
        /// Dst - Src
        ReverseSubtract = 3,
        /// min(Src, Dst)
        Min = 4,
        /// max(Src, Dst)
        Max = 5,
    }
}

host_enum! {
    /// Alpha blend factor.
    pub enum BlendFactor {
        /// Not specified.
        Undefined = 0,
        /// 0.0
        Zero = 1,
        /// 1.0
        One = 2,
        /// S.component
        Src = 3,
        /// 1.0 - S.component
        OneMinusSrc = 4,
        /// S.alpha
        SrcAlpha = 5,
        /// 1.0 - S.alpha
        OneMinusSrcAlpha = 6,
        /// D.component
        Dst = 7,
        /// 1.0 - D.component
        OneMinusDst = 8,
        /// D.alpha
        DstAlpha = 9,
        /// 1.0 - D.alpha
        OneMinusDstAlpha = 10,
        /// min(S.alpha, 1.0 - D.alpha)
        SrcAlphaSaturated = 11,
        /// Constant
        Constant = 12,
        /// 1.0 - Constant
        OneMinusConstant = 13,
        /// S1.component
        Src1 = 14,
        /// 1.0 - S1.component
        OneMinusSrc1 = 15,
        /// S1.alpha
        Src1Alpha = 16,
        /// 1.0 - S1.alpha
        OneMinusSrc1Alpha = 17,
    }
}

host_enum! {
    /// Vertex winding order which classifies the "front" face of a triangle.
    #[derive(Default)]
    pub enum FrontFace {
        /// Not specified.
        Undefined = 0,
        /// Triangles with vertices in counter clockwise order are considered the front face.
        #[default]
        Ccw = 1,
        /// Triangles with vertices in clockwise order are considered the front face.
        Cw = 2,
    }
}

host_enum! {
    /// Face of a vertex.
    #[derive(Default)]
    pub enum CullMode {
        /// Not specified.
        Undefined = 0,
        /// No culling.
        #[default]
        None = 1,
        /// Front face.
        Front = 2,
        /// Back face.
        Back = 3,
    }
}

host_enum! {
    /// Operation to perform on the stencil value.
    #[derive(Default)]
    pub enum StencilOperation {
        /// Not specified.
        Undefined = 0,
        /// Keep stencil value unchanged.
        #[default]
        Keep = 1,
        /// Set stencil value to zero.
        Zero = 2,
        /// Replace stencil value with value provided by the stencil reference.
        Replace = 3,
        /// Bitwise inverts stencil value.
        Invert = 4,
        /// Increments stencil value by one, clamping on overflow.
        IncrementClamp = 5,
        /// Decrements stencil value by one, clamping on underflow.
        DecrementClamp = 6,
        /// Increments stencil value by one, wrapping on overflow.
        IncrementWrap = 7,
        /// Decrements stencil value by one, wrapping on underflow.
        DecrementWrap = 8,
    }
}

host_enum! {
    /// Primitive type the input mesh is composed of.
    #[derive(Default)]
    pub enum PrimitiveTopology {
        /// Not specified.
        Undefined = 0,
        /// Vertex data is a list of points. Each vertex is a new point.
        PointList = 1,
        /// Vertex data is a list of lines. Each pair of vertices composes a new line.
        LineList = 2,
        /// Vertex data is a strip of lines.
        LineStrip = 3,
        /// Vertex data is a list of triangles. Each set of 3 vertices composes a new triangle.
        #[default]
        TriangleList = 4,
        /// Vertex data is a triangle strip.
        TriangleStrip = 5,
    }
}

host_enum! {
    /// Format of indices used with pipeline.
    #[derive(Default)]
    pub enum IndexFormat {
        /// Not specified.
        Undefined = 0,
        /// Indices are 16 bit unsigned integers.
        Uint16 = 1,
        /// Indices are 32 bit unsigned integers.
        #[default]
        Uint32 = 2,
    }
}

host_enum! {
    /// Behavior of the presentation engine based on frame rate.
    #[derive(Default)]
    pub enum PresentMode {
        /// Let the implementation pick.
        Undefined = 0,
        /// Presentation frames are kept in a First-In-First-Out queue.
        #[default]
        Fifo = 1,
        /// Like `Fifo`, but a late frame is presented immediately.
        FifoRelaxed = 2,
        /// Presentation frames are not queued at all.
        Immediate = 3,
        /// Presentation frames are kept in a single-frame queue.
        Mailbox = 4,
    }
}

host_enum! {
    /// How the alpha channel of textures should be handled during compositing.
    #[derive(Default)]
    pub enum CompositeAlphaMode {
        /// Chooses either `Opaque` or `Inherit` automatically.
        #[default]
        Auto = 0,
        /// The alpha channel, if it exists, of the textures is ignored.
        Opaque = 1,
        /// The non-alpha channels are expected to already be multiplied by alpha.
        Premultiplied = 2,
        /// The compositor will multiply the non-alpha channels by alpha.
        Unpremultiplied = 3,
        /// The alpha behavior is inherited from the native surface.
        Inherit = 4,
    }
}

host_enum! {
    /// Mapping state of a buffer as reported by the native library.
    pub enum BufferMapState {
        /// No mapping is active or pending.
        Unmapped = 1,
        /// A `map_async` is in flight.
        Pending = 2,
        /// The buffer is mapped and its range can be accessed.
        Mapped = 3,
    }
}

host_enum! {
    /// Selects which DX12 shader compiler to use.
    #[derive(Default)]
    pub enum Dx12Compiler {
        /// Let the native library decide.
        #[default]
        Undefined = 0,
        /// The Fxc compiler (default) is old, slow and unmaintained.
        Fxc = 1,
        /// The Dxc compiler is new, fast and maintained.
        Dxc = 2,
    }
}

host_enum! {
    /// Selects which OpenGL ES 3 minor version to request.
    #[derive(Default)]
    pub enum Gles3MinorVersion {
        /// No explicit minor version is requested.
        #[default]
        Automatic = 0,
        /// Request an ES 3.0 context.
        Version0 = 1,
        /// Request an ES 3.1 context.
        Version1 = 2,
        /// Request an ES 3.2 context.
        Version2 = 3,
    }
}

bitflags::bitflags! {
    /// Represents the backends that the native library will use.
    #[repr(transparent)]
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Backends: u32 {
        /// Supported on Windows, Linux/Android, and macOS/iOS via Vulkan Portability
        const VULKAN = 1 << 1;
        /// Supported on macOS/iOS
        const METAL = 1 << 2;
        /// Supported on Windows 10
        const DX12 = 1 << 3;
        /// Supported on Linux/Android, and Windows and macOS/iOS via ANGLE
        const GL = 1 << 4;
        /// Supported when targeting the web through webassembly
        const BROWSER_WEBGPU = 1 << 5;
        /// Vulkan + Metal + DX12 + Browser WebGPU
        const PRIMARY = Self::VULKAN.bits()
            | Self::METAL.bits()
            | Self::DX12.bits()
            | Self::BROWSER_WEBGPU.bits();
        /// OpenGL
        const SECONDARY = Self::GL.bits();
    }
}

impl Default for Backends {
    fn default() -> Self {
        Self::all()
    }
}

bitflags::bitflags! {
    /// Instance debugging flags.
    #[repr(transparent)]
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct InstanceFlags: u32 {
        /// Generate debug information in shaders and objects.
        const DEBUG = 1 << 0;
        /// Enable validation, if possible.
        const VALIDATION = 1 << 1;
        /// Don't pass labels to the backend.
        const DISCARD_HAL_LABELS = 1 << 2;
    }
}

bitflags::bitflags! {
    /// Different ways that you can use a buffer.
    ///
    /// The usages determine what kind of memory the buffer is allocated from and what
    /// actions the buffer can partake in.
    #[repr(transparent)]
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct BufferUsages: u32 {
        /// Allow a buffer to be mapped for reading.
        const MAP_READ = 1 << 0;
        /// Allow a buffer to be mapped for writing.
        const MAP_WRITE = 1 << 1;
        /// Allow a buffer to be the source buffer for a copy operation.
        const COPY_SRC = 1 << 2;
        /// Allow a buffer to be the destination buffer for a copy or `Queue::write_buffer`.
        const COPY_DST = 1 << 3;
        /// Allow a buffer to be the index buffer in a draw operation.
        const INDEX = 1 << 4;
        /// Allow a buffer to be the vertex buffer in a draw operation.
        const VERTEX = 1 << 5;
        /// Allow a buffer to be a uniform binding in a bind group.
        const UNIFORM = 1 << 6;
        /// Allow a buffer to be a storage binding in a bind group.
        const STORAGE = 1 << 7;
        /// Allow a buffer to be the indirect buffer in an indirect draw or dispatch.
        const INDIRECT = 1 << 8;
        /// Allow a buffer to be the destination of a query set resolve.
        const QUERY_RESOLVE = 1 << 9;
    }
}

bitflags::bitflags! {
    /// Different ways that you can use a texture.
    #[repr(transparent)]
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TextureUsages: u32 {
        /// Allows a texture to be the source in a copy operation.
        const COPY_SRC = 1 << 0;
        /// Allows a texture to be the destination in a copy operation or `Queue::write_texture`.
        const COPY_DST = 1 << 1;
        /// Allows a texture to be a sampled texture in a bind group.
        const TEXTURE_BINDING = 1 << 2;
        /// Allows a texture to be a storage texture in a bind group.
        const STORAGE_BINDING = 1 << 3;
        /// Allows a texture to be an output attachment of a render pass.
        const RENDER_ATTACHMENT = 1 << 4;
    }
}

bitflags::bitflags! {
    /// Describes the shader stages that a binding will be visible from.
    #[repr(transparent)]
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ShaderStages: u32 {
        /// Binding is not visible from any shader stage.
        const NONE = 0;
        /// Binding is visible from the vertex shader of a render pipeline.
        const VERTEX = 1 << 0;
        /// Binding is visible from the fragment shader of a render pipeline.
        const FRAGMENT = 1 << 1;
        /// Binding is visible from the compute shader of a compute pipeline.
        const COMPUTE = 1 << 2;
        /// Binding is visible from the vertex and fragment shaders of a render pipeline.
        const VERTEX_FRAGMENT = Self::VERTEX.bits() | Self::FRAGMENT.bits();
    }
}

bitflags::bitflags! {
    /// Color write mask. Disabled color channels will not be written to.
    #[repr(transparent)]
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ColorWrites: u32 {
        /// Enable red channel writes
        const RED = 1 << 0;
        /// Enable green channel writes
        const GREEN = 1 << 1;
        /// Enable blue channel writes
        const BLUE = 1 << 2;
        /// Enable alpha channel writes
        const ALPHA = 1 << 3;
        /// Enable red, green, and blue channel writes
        const COLOR = Self::RED.bits() | Self::GREEN.bits() | Self::BLUE.bits();
        /// Enable writes to all channels.
        const ALL = Self::RED.bits() | Self::GREEN.bits() | Self::BLUE.bits() | Self::ALPHA.bits();
    }
}

impl Default for ColorWrites {
    fn default() -> Self {
        Self::ALL
    }
}

bitflags::bitflags! {
    /// Type of buffer mapping.
    #[repr(transparent)]
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MapMode: u32 {
        /// Map only for reading
        const READ = 1 << 0;
        /// Map only for writing
        const WRITE = 1 << 1;
    }
}

/// Represents the sets of limits an adapter/device supports.
///
/// Field order matches the native limits block.
#[repr(C)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct Limits {
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
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_texture_dimension_1d: 8192,
            max_texture_dimension_2d: 8192,
            max_texture_dimension_3d: 2048,
            max_texture_array_layers: 256,
            max_bind_groups: 4,
            max_bind_groups_plus_vertex_buffers: 24,
            max_bindings_per_bind_group: 1000,
            max_dynamic_uniform_buffers_per_pipeline_layout: 8,
            max_dynamic_storage_buffers_per_pipeline_layout: 4,
            max_sampled_textures_per_shader_stage: 16,
            max_samplers_per_shader_stage: 16,
            max_storage_buffers_per_shader_stage: 8,
            max_storage_textures_per_shader_stage: 4,
            max_uniform_buffers_per_shader_stage: 12,
            max_uniform_buffer_binding_size: 64 << 10,
            max_storage_buffer_binding_size: 128 << 20,
            min_uniform_buffer_offset_alignment: 256,
            min_storage_buffer_offset_alignment: 256,
            max_vertex_buffers: 8,
            max_buffer_size: 256 << 20,
            max_vertex_attributes: 16,
            max_vertex_buffer_array_stride: 2048,
            max_inter_stage_shader_variables: 16,
            max_color_attachments: 8,
            max_color_attachment_bytes_per_sample: 32,
            max_compute_workgroup_storage_size: 16384,
            max_compute_invocations_per_workgroup: 256,
            max_compute_workgroup_size_x: 256,
            max_compute_workgroup_size_y: 256,
            max_compute_workgroup_size_z: 64,
            max_compute_workgroups_per_dimension: 65535,
        }
    }
}

/// Information about an adapter.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdapterInfo {
    /// Vendor name, e.g. "NVIDIA" or "Intel".
    pub vendor: String,
    /// Architecture of the adapter, may be empty.
    pub architecture: String,
    /// Adapter name.
    pub device: String,
    /// Driver or implementation description, may be empty.
    pub description: String,
    /// Backend used for the device.
    pub backend_type: BackendType,
    /// Type of device.
    pub adapter_type: AdapterType,
    /// PCI id of the adapter's vendor.
    pub vendor_id: u32,
    /// PCI id of the adapter.
    pub device_id: u32,
}

/// Defines the capabilities of a given surface and adapter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceCapabilities {
    /// Bitflag of supported texture usages for the surface.
    pub usages: TextureUsages,
    /// List of supported formats, the first one is preferred.
    pub formats: Vec<TextureFormat>,
    /// List of supported presentation modes.
    pub present_modes: Vec<PresentMode>,
    /// List of supported alpha modes.
    pub alpha_modes: Vec<CompositeAlphaMode>,
}

/// Extent of a texture related operation.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent3d {
    /// Width of the extent
    pub width: u32,
    /// Height of the extent
    pub height: u32,
    /// The depth of the extent or the number of array layers
    pub depth_or_array_layers: u32,
}

impl Default for Extent3d {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            depth_or_array_layers: 1,
        }
    }
}

/// Origin of a copy to/from a texture.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct Origin3d {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Origin3d {
    /// Zero origin.
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };
}

/// RGBA double precision color.
///
/// This is not to be used as a generic color type, only for specific API calls.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

#[allow(missing_docs)]
impl Color {
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const RED: Self = Self {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const GREEN: Self = Self {
        r: 0.0,
        g: 1.0,
        b: 0.0,
        a: 1.0,
    };
    pub const BLUE: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    };
}

/// Describes a buffer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BufferDescriptor<L> {
    /// Debug label of a buffer.
    pub label: L,
    /// Size of a buffer, in bytes.
    pub size: u64,
    /// Usages of a buffer.
    pub usage: BufferUsages,
    /// Allows a buffer to be mapped immediately after they are made.
    pub mapped_at_creation: bool,
}

/// Describes a texture.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextureDescriptor<L, V> {
    /// Debug label of the texture.
    pub label: L,
    /// Size of the texture.
    pub size: Extent3d,
    /// Mip count of texture.
    pub mip_level_count: u32,
    /// Sample count of texture.
    pub sample_count: u32,
    /// Dimensions of the texture.
    pub dimension: TextureDimension,
    /// Format of the texture.
    pub format: TextureFormat,
    /// Allowed usages of the texture.
    pub usage: TextureUsages,
    /// Formats views of this texture may be created with, besides `format`.
    pub view_formats: V,
}

/// Describes a texture view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextureViewDescriptor<L> {
    /// Debug label of the texture view.
    pub label: L,
    /// Format of the texture view. Defaults to the format of the texture.
    pub format: Option<TextureFormat>,
    /// The dimension of the texture view. Defaults to the texture's dimension.
    pub dimension: Option<TextureViewDimension>,
    /// Allowed usages of the view. Defaults to the texture's usages.
    pub usage: Option<TextureUsages>,
    /// Aspect of the texture.
    pub aspect: TextureAspect,
    /// Base mip level.
    pub base_mip_level: u32,
    /// Mip level count. `None` covers every level from the base.
    pub mip_level_count: Option<u32>,
    /// Base array layer.
    pub base_array_layer: u32,
    /// Layer count. `None` covers every layer from the base.
    pub array_layer_count: Option<u32>,
}

/// Describes a sampler.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerDescriptor<L> {
    /// Debug label of the sampler.
    pub label: L,
    /// How to deal with out of bounds accesses in the u (i.e. x) direction
    pub address_mode_u: AddressMode,
    /// How to deal with out of bounds accesses in the v (i.e. y) direction
    pub address_mode_v: AddressMode,
    /// How to deal with out of bounds accesses in the w (i.e. z) direction
    pub address_mode_w: AddressMode,
    /// How to filter the texture when it needs to be magnified (made larger)
    pub mag_filter: FilterMode,
    /// How to filter the texture when it needs to be minified (made smaller)
    pub min_filter: FilterMode,
    /// How to filter between mip map levels
    pub mipmap_filter: MipmapFilterMode,
    /// Minimum level of detail (i.e. mip level) to use
    pub lod_min_clamp: f32,
    /// Maximum level of detail (i.e. mip level) to use
    pub lod_max_clamp: f32,
    /// If this is enabled, this is a comparison sampler using the given comparison function.
    pub compare: Option<CompareFunction>,
    /// Must be at least 1.
    pub anisotropy_clamp: u16,
}

impl<L: Default> Default for SamplerDescriptor<L> {
    fn default() -> Self {
        Self {
            label: Default::default(),
            address_mode_u: Default::default(),
            address_mode_v: Default::default(),
            address_mode_w: Default::default(),
            mag_filter: Default::default(),
            min_filter: Default::default(),
            mipmap_filter: Default::default(),
            lod_min_clamp: 0.0,
            lod_max_clamp: 32.0,
            compare: None,
            anisotropy_clamp: 1,
        }
    }
}

/// Describes a query set.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuerySetDescriptor<L> {
    /// Debug label for the query set.
    pub label: L,
    /// Kind of query that this query set should contain.
    pub ty: QueryType,
    /// Total count of queries the set contains.
    pub count: u32,
}

/// Describes a command encoder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandEncoderDescriptor<L> {
    /// Debug label for the command encoder.
    pub label: L,
}

/// Describes a command buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandBufferDescriptor<L> {
    /// Debug label of this command buffer.
    pub label: L,
}

/// Describes a render bundle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderBundleDescriptor<L> {
    /// Debug label of the render bundle.
    pub label: L,
}

/// Specific type of a binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BindingType {
    /// A buffer binding.
    Buffer {
        /// Sub-type of the buffer binding.
        ty: BufferBindingType,
        /// Indicates that the binding has a dynamic offset.
        has_dynamic_offset: bool,
        /// Minimum size of the corresponding buffer binding, 0 if unchecked.
        min_binding_size: u64,
    },
    /// A sampler that can be used to sample a texture.
    Sampler(SamplerBindingType),
    /// A texture binding.
    Texture {
        /// Sample type of the texture binding.
        sample_type: TextureSampleType,
        /// Dimension of the texture view that is going to be sampled.
        view_dimension: TextureViewDimension,
        /// True if the texture has a sample count greater than 1.
        multisampled: bool,
    },
    /// A storage texture.
    StorageTexture {
        /// Allowed access to this texture.
        access: StorageTextureAccess,
        /// Format of the texture.
        format: TextureFormat,
        /// Dimension of the texture view that is going to be sampled.
        view_dimension: TextureViewDimension,
    },
}

/// Describes a single binding inside a bind group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BindGroupLayoutEntry {
    /// Binding index. Must match shader index and be unique inside a BindGroupLayout.
    pub binding: u32,
    /// Which shader stages can see this binding.
    pub visibility: ShaderStages,
    /// The type of the binding
    pub ty: BindingType,
}

/// Vertex inputs (attributes) to shaders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexAttribute {
    /// Format of the input
    pub format: VertexFormat,
    /// Byte offset of the start of the input
    pub offset: u64,
    /// Location for this input. Must match the location in the shader.
    pub shader_location: u32,
}

/// Describes the state of primitive assembly and rasterization in a render pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrimitiveState {
    /// The primitive topology used to interpret vertices.
    pub topology: PrimitiveTopology,
    /// Index format of strip topologies.
    pub strip_index_format: Option<IndexFormat>,
    /// The face to consider the front for the purpose of culling and stencil operations.
    pub front_face: FrontFace,
    /// The face culling mode.
    pub cull_mode: CullMode,
    /// If set to true, the polygon depth is not clipped to 0-1 before rasterization.
    ///
    /// Requires [`FeatureName::DepthClipControl`].
    pub unclipped_depth: bool,
}

/// Describes the multi-sampling state of a render pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultisampleState {
    /// The number of samples calculated per pixel.
    pub count: u32,
    /// Bitmask that restricts the samples of a pixel modified by this pipeline.
    pub mask: u32,
    /// When enabled, produces another sample mask per pixel based on the alpha output value.
    pub alpha_to_coverage_enabled: bool,
}

impl Default for MultisampleState {
    fn default() -> Self {
        MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        }
    }
}

/// Describes stencil state in a render pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StencilFaceState {
    /// Comparison function that determines if the fail_op or pass_op is used on the stencil buffer.
    pub compare: CompareFunction,
    /// Operation that is performed when stencil test fails.
    pub fail_op: StencilOperation,
    /// Operation that is performed when depth test fails but stencil test succeeds.
    pub depth_fail_op: StencilOperation,
    /// Operation that is performed when stencil test success.
    pub pass_op: StencilOperation,
}

impl StencilFaceState {
    /// Ignore the stencil state for the face.
    pub const IGNORE: Self = StencilFaceState {
        compare: CompareFunction::Always,
        fail_op: StencilOperation::Keep,
        depth_fail_op: StencilOperation::Keep,
        pass_op: StencilOperation::Keep,
    };
}

impl Default for StencilFaceState {
    fn default() -> Self {
        Self::IGNORE
    }
}

/// State of the stencil operation (fixed-pipeline stage).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StencilState {
    /// Front face mode.
    pub front: StencilFaceState,
    /// Back face mode.
    pub back: StencilFaceState,
    /// Stencil values are AND'd with this mask when reading and writing from the stencil buffer.
    pub read_mask: u32,
    /// Stencil values are AND'd with this mask when writing to the stencil buffer.
    pub write_mask: u32,
}

/// Describes the biasing setting for the depth target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepthBiasState {
    /// Constant depth biasing factor, in basic units of the depth format.
    pub constant: i32,
    /// Slope depth biasing factor.
    pub slope_scale: f32,
    /// Depth bias clamp value (absolute).
    pub clamp: f32,
}

/// Describes the depth/stencil state in a render pipeline.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepthStencilState {
    /// Format of the depth/stencil buffer, must be special depth format.
    pub format: TextureFormat,
    /// If disabled, depth will not be written to.
    pub depth_write_enabled: bool,
    /// Comparison function used to compare depth values in the depth test.
    pub depth_compare: CompareFunction,
    /// Stencil state.
    pub stencil: StencilState,
    /// Depth bias state.
    pub bias: DepthBiasState,
}

/// Describes a blend component of a [`BlendState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlendComponent {
    /// Multiplier for the source, which is produced by the fragment shader.
    pub src_factor: BlendFactor,
    /// Multiplier for the destination, which is stored in the target.
    pub dst_factor: BlendFactor,
    /// The binary operation applied to the source and destination.
    pub operation: BlendOperation,
}

impl BlendComponent {
    /// Default blending state that replaces destination with the source.
    pub const REPLACE: Self = Self {
        src_factor: BlendFactor::One,
        dst_factor: BlendFactor::Zero,
        operation: BlendOperation::Add,
    };

    /// Blend state of (1 * src) + ((1 - src_alpha) * dst)
    pub const OVER: Self = Self {
        src_factor: BlendFactor::One,
        dst_factor: BlendFactor::OneMinusSrcAlpha,
        operation: BlendOperation::Add,
    };
}

impl Default for BlendComponent {
    fn default() -> Self {
        Self::REPLACE
    }
}

/// Describe the blend state of a render pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlendState {
    /// Color equation.
    pub color: BlendComponent,
    /// Alpha equation.
    pub alpha: BlendComponent,
}

impl BlendState {
    /// Blend mode that does no color blending, just overwrites the output with the contents of the shader.
    pub const REPLACE: Self = Self {
        color: BlendComponent::REPLACE,
        alpha: BlendComponent::REPLACE,
    };

    /// Blend mode that does standard alpha blending with non-premultiplied alpha.
    pub const ALPHA_BLENDING: Self = Self {
        color: BlendComponent {
            src_factor: BlendFactor::SrcAlpha,
            dst_factor: BlendFactor::OneMinusSrcAlpha,
            operation: BlendOperation::Add,
        },
        alpha: BlendComponent::OVER,
    };
}

/// Describes the color state of a render pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorTargetState {
    /// The [`TextureFormat`] of the image that this pipeline will render to.
    pub format: TextureFormat,
    /// The blending that is used for this pipeline.
    pub blend: Option<BlendState>,
    /// Mask which enables/disables writes to different color/alpha channel.
    pub write_mask: ColorWrites,
}

impl From<TextureFormat> for ColorTargetState {
    fn from(format: TextureFormat) -> Self {
        Self {
            format,
            blend: None,
            write_mask: ColorWrites::ALL,
        }
    }
}

/// Layout of a texture in a buffer's memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TexelCopyBufferLayout {
    /// Offset into the buffer that is the start of the texture.
    pub offset: u64,
    /// Bytes per "row" in an image. Required if there are multiple rows.
    pub bytes_per_row: Option<u32>,
    /// "Rows" that make up a single "image". Required if there are multiple images.
    pub rows_per_image: Option<u32>,
}

/// Maximum number of color attachments of a render pass, render pipeline or render bundle.
pub const MAX_COLOR_ATTACHMENTS: usize = 8;

/// Integral type used for buffer offsets.
pub type BufferAddress = u64;
/// Integral type used for dynamic bind group offsets.
pub type DynamicOffset = u32;

/// Buffer to buffer copy, buffer clear and mapped-at-creation sizes must be a
/// multiple of this.
pub const COPY_BUFFER_ALIGNMENT: u64 = 4;

/// Offsets and sizes passed to buffer mapping must be a multiple of this.
pub const MAP_ALIGNMENT: u64 = 8;

/// Options for creating an instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceDescriptor {
    /// Which backends to enable.
    pub backends: Backends,
    /// Flags to tune the behavior of the instance.
    pub flags: InstanceFlags,
    /// Which DX12 shader compiler to use.
    pub dx12_shader_compiler: Dx12Compiler,
    /// Which OpenGL ES 3 minor version to request.
    pub gles_minor_version: Gles3MinorVersion,
    /// Path to `dxil.dll`, for the DXC compiler.
    pub dxil_path: Option<String>,
    /// Path to `dxcompiler.dll`, for the DXC compiler.
    pub dxc_path: Option<String>,
}

impl InstanceDescriptor {
    /// Returns `true` if every field has its default value, in which case no
    /// native extras need to be sent.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Options for requesting adapter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestAdapterOptions<S> {
    /// Power preference for the adapter.
    pub power_preference: PowerPreference,
    /// Indicates that only a fallback adapter can be returned.
    pub force_fallback_adapter: bool,
    /// Restricts the search to adapters of one backend.
    pub backend_type: BackendType,
    /// Surface that is required to be presentable with the requested adapter.
    pub compatible_surface: Option<S>,
}

impl<S> Default for RequestAdapterOptions<S> {
    fn default() -> Self {
        Self {
            power_preference: PowerPreference::default(),
            force_fallback_adapter: false,
            backend_type: BackendType::Undefined,
            compatible_surface: None,
        }
    }
}

/// Describes a device.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceDescriptor<L> {
    /// Debug label for the device.
    pub label: L,
    /// Features the device must support.
    pub required_features: Vec<FeatureName>,
    /// Limits the device must support. `None` asks for the defaults.
    pub required_limits: Option<Limits>,
}

/// Configures a surface for presentation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceConfiguration<V> {
    /// The usage of the swap chain.
    pub usage: TextureUsages,
    /// The texture format of the swap chain.
    pub format: TextureFormat,
    /// Width of the swap chain. Must be the same size as the surface, and nonzero.
    pub width: u32,
    /// Height of the swap chain. Must be the same size as the surface, and nonzero.
    pub height: u32,
    /// Presentation mode of the swap chain.
    pub present_mode: PresentMode,
    /// Specifies how the alpha channel of the textures should be handled during compositing.
    pub alpha_mode: CompositeAlphaMode,
    /// Formats views of the surface textures may use, in addition to `format`.
    pub view_formats: V,
}

/// View of a buffer which can be used to copy to/from a texture.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TexelCopyBufferInfo<B> {
    /// The buffer to be copied to/from.
    pub buffer: B,
    /// The layout of the texture data in this buffer.
    pub layout: TexelCopyBufferLayout,
}

/// View of a texture which can be used to copy to/from a buffer/texture.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TexelCopyTextureInfo<T> {
    /// The texture to be copied to/from.
    pub texture: T,
    /// The target mip level of the texture.
    pub mip_level: u32,
    /// The base texel of the texture in the selected `mip_level`.
    pub origin: Origin3d,
    /// The copy aspect.
    pub aspect: TextureAspect,
}

/// Describes the segment of a buffer to bind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BufferBinding<B> {
    /// The buffer to bind.
    pub buffer: B,
    /// Base offset of the buffer, in bytes.
    pub offset: u64,
    /// Size of the binding in bytes, or `None` for using the rest of the buffer.
    pub size: Option<u64>,
}

/// Argument buffer layout for `draw_indirect` commands.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawIndirectArgs {
    /// The number of vertices to draw.
    pub vertex_count: u32,
    /// The number of instances to draw.
    pub instance_count: u32,
    /// The Index of the first vertex to draw.
    pub first_vertex: u32,
    /// The instance ID of the first instance to draw.
    pub first_instance: u32,
}

/// Argument buffer layout for `draw_indexed_indirect` commands.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawIndexedIndirectArgs {
    /// The number of indices to draw.
    pub index_count: u32,
    /// The number of instances to draw.
    pub instance_count: u32,
    /// The first index within the index buffer.
    pub first_index: u32,
    /// The value added to the vertex index before indexing into the vertex buffer.
    pub base_vertex: i32,
    /// The instance ID of the first instance to draw.
    pub first_instance: u32,
}

/// Argument buffer layout for `dispatch_workgroups_indirect` commands.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchIndirectArgs {
    /// The number of work groups in X dimension.
    pub x: u32,
    /// The number of work groups in Y dimension.
    pub y: u32,
    /// The number of work groups in Z dimension.
    pub z: u32,
}

macro_rules! impl_as_bytes {
    ($($ty:ty),*) => {$(
        impl $ty {
            /// Returns the bytes representation of the struct, ready to be written in a buffer.
            pub fn as_bytes(&self) -> &[u8] {
                // SAFETY: the type is `repr(C)` and made only of 32-bit integers, so it has no
                // padding and every byte is initialized.
                #[allow(unsafe_code)]
                unsafe {
                    std::slice::from_raw_parts(
                        (self as *const Self).cast::<u8>(),
                        std::mem::size_of::<Self>(),
                    )
                }
            }
        }
    )*};
}

impl_as_bytes!(DrawIndirectArgs, DrawIndexedIndirectArgs, DispatchIndirectArgs);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_matches_discriminants() {
        for &mode in LoadOp::ALL {
            assert_eq!(LoadOp::from_raw(mode as u32), Some(mode));
        }
        assert_eq!(LoadOp::from_raw(3), None);
        assert_eq!(BlendFactor::from_raw(17), Some(BlendFactor::OneMinusSrc1Alpha));
        assert_eq!(CompareFunction::from_raw(u32::MAX), None);
    }

    #[test]
    fn indirect_args_bytes() {
        let args = DispatchIndirectArgs { x: 1, y: 2, z: 3 };
        let bytes = args.as_bytes();
        assert_eq!(bytes.len(), 12);
        assert_eq!(&bytes[4..8], &2u32.to_ne_bytes());

        let args = DrawIndexedIndirectArgs {
            base_vertex: -1,
            ..Default::default()
        };
        assert_eq!(args.as_bytes().len(), 20);
        assert_eq!(&args.as_bytes()[12..16], &(-1i32).to_ne_bytes());
    }

    #[test]
    fn backends_default_is_everything() {
        assert!(Backends::default().contains(Backends::PRIMARY | Backends::SECONDARY));
    }
}
