//! Enum numbering, flag bits and structure-type tags of the pinned native headers
//! (`webgpu.h` + `wgpu.h` of wgpu-native 24.0).
//!
//! Only values the binding writes or interprets are listed.

/// Value of `WGPU_STRLEN`: a string view whose length is this is nul-terminated.
pub const STRLEN: usize = usize::MAX;
pub const WHOLE_SIZE: u64 = u64::MAX;
pub const WHOLE_MAP_SIZE: usize = usize::MAX;
pub const MIP_LEVEL_COUNT_UNDEFINED: u32 = u32::MAX;
pub const ARRAY_LAYER_COUNT_UNDEFINED: u32 = u32::MAX;
pub const COPY_STRIDE_UNDEFINED: u32 = u32::MAX;
pub const DEPTH_SLICE_UNDEFINED: u32 = u32::MAX;
pub const QUERY_SET_INDEX_UNDEFINED: u32 = u32::MAX;

pub const FALSE: u32 = 0;
pub const TRUE: u32 = 1;

pub mod s_type {
    pub const SHADER_SOURCE_SPIRV: u32 = 0x0000_0001;
    pub const SHADER_SOURCE_WGSL: u32 = 0x0000_0002;
    pub const SURFACE_SOURCE_METAL_LAYER: u32 = 0x0000_0004;
    pub const SURFACE_SOURCE_WINDOWS_HWND: u32 = 0x0000_0005;
    pub const SURFACE_SOURCE_XLIB_WINDOW: u32 = 0x0000_0006;
    pub const SURFACE_SOURCE_WAYLAND_SURFACE: u32 = 0x0000_0007;
    pub const SURFACE_SOURCE_ANDROID_NATIVE_WINDOW: u32 = 0x0000_0008;
    pub const SURFACE_SOURCE_XCB_WINDOW: u32 = 0x0000_0009;
    pub const INSTANCE_EXTRAS: u32 = 0x0003_0006;
}

pub mod status {
    pub const SUCCESS: u32 = 1;
}

pub mod callback_mode {
    pub const ALLOW_PROCESS_EVENTS: u32 = 2;
    pub const ALLOW_SPONTANEOUS: u32 = 3;
}

pub mod request_adapter_status {
    pub const SUCCESS: u32 = 1;
    #[cfg(test)]
    pub const UNAVAILABLE: u32 = 3;
}

pub mod request_device_status {
    pub const SUCCESS: u32 = 1;
    #[cfg(test)]
    pub const ERROR: u32 = 3;
}

pub mod map_async_status {
    pub const SUCCESS: u32 = 1;
    #[cfg(test)]
    pub const ERROR: u32 = 3;
}

pub mod pop_error_scope_status {
    pub const SUCCESS: u32 = 1;
    pub const INSTANCE_DROPPED: u32 = 2;
    pub const EMPTY_STACK: u32 = 3;
}

pub mod error_type {
    pub const NO_ERROR: u32 = 1;
    pub const VALIDATION: u32 = 2;
    pub const OUT_OF_MEMORY: u32 = 3;
    pub const INTERNAL: u32 = 4;
}

pub mod device_lost_reason {
    pub const DESTROYED: u32 = 2;
    pub const INSTANCE_DROPPED: u32 = 3;
}

pub mod surface_get_current_texture_status {
    pub const SUCCESS_OPTIMAL: u32 = 1;
    pub const SUCCESS_SUBOPTIMAL: u32 = 2;
    pub const TIMEOUT: u32 = 3;
    pub const OUTDATED: u32 = 4;
    pub const LOST: u32 = 5;
    pub const OUT_OF_MEMORY: u32 = 6;
    pub const DEVICE_LOST: u32 = 7;
}

pub mod feature_level {
    pub const CORE: u32 = 2;
}

pub mod optional_bool {
    pub const FALSE: u32 = 0;
    pub const TRUE: u32 = 1;
    pub const UNDEFINED: u32 = 2;
}

pub mod log_level {
    pub const OFF: u32 = 0;
    pub const ERROR: u32 = 1;
    pub const WARN: u32 = 2;
    pub const INFO: u32 = 3;
    pub const DEBUG: u32 = 4;
    pub const TRACE: u32 = 5;
}

/// `WGPUInstanceBackend` bits.
pub mod backend {
    pub const ALL: u64 = 0;
    pub const VULKAN: u64 = 1 << 0;
    pub const GL: u64 = 1 << 1;
    pub const METAL: u64 = 1 << 2;
    pub const DX12: u64 = 1 << 3;
    pub const BROWSER_WEBGPU: u64 = 1 << 5;
}

pub mod feature_name {
    pub const DEPTH_CLIP_CONTROL: u32 = 0x01;
    pub const DEPTH32_FLOAT_STENCIL8: u32 = 0x02;
    pub const TIMESTAMP_QUERY: u32 = 0x03;
    pub const TEXTURE_COMPRESSION_BC: u32 = 0x04;
    pub const TEXTURE_COMPRESSION_ETC2: u32 = 0x06;
    pub const TEXTURE_COMPRESSION_ASTC: u32 = 0x07;
    pub const INDIRECT_FIRST_INSTANCE: u32 = 0x09;
    pub const SHADER_F16: u32 = 0x0A;
    pub const RG11B10_UFLOAT_RENDERABLE: u32 = 0x0B;
    pub const BGRA8_UNORM_STORAGE: u32 = 0x0C;
    pub const FLOAT32_FILTERABLE: u32 = 0x0D;
}

pub mod load_op {
    pub const LOAD: u32 = 1;
    pub const CLEAR: u32 = 2;
}

pub mod vertex_step_mode {
    pub const VERTEX_BUFFER_NOT_USED: u32 = 0;
    pub const UNDEFINED: u32 = 1;
}

/// Shared by the four binding-type enums.
pub const BINDING_NOT_USED: u32 = 0;

pub mod vertex_format {
    pub const UINT8X2: u32 = 0x02;
    pub const UINT8X4: u32 = 0x03;
    pub const SINT8X2: u32 = 0x05;
    pub const SINT8X4: u32 = 0x06;
    pub const UNORM8X2: u32 = 0x08;
    pub const UNORM8X4: u32 = 0x09;
    pub const SNORM8X2: u32 = 0x0B;
    pub const SNORM8X4: u32 = 0x0C;
    pub const UINT16X2: u32 = 0x0E;
    pub const UINT16X4: u32 = 0x0F;
    pub const SINT16X2: u32 = 0x11;
    pub const SINT16X4: u32 = 0x12;
    pub const UNORM16X2: u32 = 0x14;
    pub const UNORM16X4: u32 = 0x15;
    pub const SNORM16X2: u32 = 0x17;
    pub const SNORM16X4: u32 = 0x18;
    pub const FLOAT16X2: u32 = 0x1A;
    pub const FLOAT16X4: u32 = 0x1B;
    pub const FLOAT32: u32 = 0x1C;
    pub const FLOAT32X2: u32 = 0x1D;
    pub const FLOAT32X3: u32 = 0x1E;
    pub const FLOAT32X4: u32 = 0x1F;
    pub const UINT32: u32 = 0x20;
    pub const UINT32X2: u32 = 0x21;
    pub const UINT32X3: u32 = 0x22;
    pub const UINT32X4: u32 = 0x23;
    pub const SINT32: u32 = 0x24;
    pub const SINT32X2: u32 = 0x25;
    pub const SINT32X3: u32 = 0x26;
    pub const SINT32X4: u32 = 0x27;
    pub const UNORM10_10_10_2: u32 = 0x28;
}

pub mod texture_format {
    pub const UNDEFINED: u32 = 0x00;
    pub const R8_UNORM: u32 = 0x01;
    pub const R8_SNORM: u32 = 0x02;
    pub const R8_UINT: u32 = 0x03;
    pub const R8_SINT: u32 = 0x04;
    pub const R16_UINT: u32 = 0x05;
    pub const R16_SINT: u32 = 0x06;
    pub const R16_FLOAT: u32 = 0x07;
    pub const RG8_UNORM: u32 = 0x08;
    pub const RG8_SNORM: u32 = 0x09;
    pub const RG8_UINT: u32 = 0x0A;
    pub const RG8_SINT: u32 = 0x0B;
    pub const R32_FLOAT: u32 = 0x0C;
    pub const R32_UINT: u32 = 0x0D;
    pub const R32_SINT: u32 = 0x0E;
    pub const RG16_UINT: u32 = 0x0F;
    pub const RG16_SINT: u32 = 0x10;
    pub const RG16_FLOAT: u32 = 0x11;
    pub const RGBA8_UNORM: u32 = 0x12;
    pub const RGBA8_UNORM_SRGB: u32 = 0x13;
    pub const RGBA8_SNORM: u32 = 0x14;
    pub const RGBA8_UINT: u32 = 0x15;
    pub const RGBA8_SINT: u32 = 0x16;
    pub const BGRA8_UNORM: u32 = 0x17;
    pub const BGRA8_UNORM_SRGB: u32 = 0x18;
    pub const RGB10A2_UINT: u32 = 0x19;
    pub const RGB10A2_UNORM: u32 = 0x1A;
    pub const RG11B10_UFLOAT: u32 = 0x1B;
    pub const RGB9E5_UFLOAT: u32 = 0x1C;
    pub const RG32_FLOAT: u32 = 0x1D;
    pub const RG32_UINT: u32 = 0x1E;
    pub const RG32_SINT: u32 = 0x1F;
    pub const RGBA16_UINT: u32 = 0x20;
    pub const RGBA16_SINT: u32 = 0x21;
    pub const RGBA16_FLOAT: u32 = 0x22;
    pub const RGBA32_FLOAT: u32 = 0x23;
    pub const RGBA32_UINT: u32 = 0x24;
    pub const RGBA32_SINT: u32 = 0x25;
    pub const STENCIL8: u32 = 0x26;
    pub const DEPTH16_UNORM: u32 = 0x27;
    pub const DEPTH24_PLUS: u32 = 0x28;
    pub const DEPTH24_PLUS_STENCIL8: u32 = 0x29;
    pub const DEPTH32_FLOAT: u32 = 0x2A;
    pub const DEPTH32_FLOAT_STENCIL8: u32 = 0x2B;
    pub const BC1_RGBA_UNORM: u32 = 0x2C;
    pub const BC1_RGBA_UNORM_SRGB: u32 = 0x2D;
    pub const BC2_RGBA_UNORM: u32 = 0x2E;
    pub const BC2_RGBA_UNORM_SRGB: u32 = 0x2F;
    pub const BC3_RGBA_UNORM: u32 = 0x30;
    pub const BC3_RGBA_UNORM_SRGB: u32 = 0x31;
    pub const BC4_R_UNORM: u32 = 0x32;
    pub const BC4_R_SNORM: u32 = 0x33;
    pub const BC5_RG_UNORM: u32 = 0x34;
    pub const BC5_RG_SNORM: u32 = 0x35;
    pub const BC6H_RGB_UFLOAT: u32 = 0x36;
    pub const BC6H_RGB_FLOAT: u32 = 0x37;
    pub const BC7_RGBA_UNORM: u32 = 0x38;
    pub const BC7_RGBA_UNORM_SRGB: u32 = 0x39;
    pub const ETC2_RGB8_UNORM: u32 = 0x3A;
    pub const ETC2_RGB8_UNORM_SRGB: u32 = 0x3B;
    pub const ETC2_RGB8A1_UNORM: u32 = 0x3C;
    pub const ETC2_RGB8A1_UNORM_SRGB: u32 = 0x3D;
    pub const ETC2_RGBA8_UNORM: u32 = 0x3E;
    pub const ETC2_RGBA8_UNORM_SRGB: u32 = 0x3F;
    pub const EAC_R11_UNORM: u32 = 0x40;
    pub const EAC_R11_SNORM: u32 = 0x41;
    pub const EAC_RG11_UNORM: u32 = 0x42;
    pub const EAC_RG11_SNORM: u32 = 0x43;
    pub const ASTC_4X4_UNORM: u32 = 0x44;
    pub const ASTC_4X4_UNORM_SRGB: u32 = 0x45;
    pub const ASTC_5X4_UNORM: u32 = 0x46;
    pub const ASTC_5X4_UNORM_SRGB: u32 = 0x47;
    pub const ASTC_5X5_UNORM: u32 = 0x48;
    pub const ASTC_5X5_UNORM_SRGB: u32 = 0x49;
    pub const ASTC_6X5_UNORM: u32 = 0x4A;
    pub const ASTC_6X5_UNORM_SRGB: u32 = 0x4B;
    pub const ASTC_6X6_UNORM: u32 = 0x4C;
    pub const ASTC_6X6_UNORM_SRGB: u32 = 0x4D;
    pub const ASTC_8X5_UNORM: u32 = 0x4E;
    pub const ASTC_8X5_UNORM_SRGB: u32 = 0x4F;
    pub const ASTC_8X6_UNORM: u32 = 0x50;
    pub const ASTC_8X6_UNORM_SRGB: u32 = 0x51;
    pub const ASTC_8X8_UNORM: u32 = 0x52;
    pub const ASTC_8X8_UNORM_SRGB: u32 = 0x53;
    pub const ASTC_10X5_UNORM: u32 = 0x54;
    pub const ASTC_10X5_UNORM_SRGB: u32 = 0x55;
    pub const ASTC_10X6_UNORM: u32 = 0x56;
    pub const ASTC_10X6_UNORM_SRGB: u32 = 0x57;
    pub const ASTC_10X8_UNORM: u32 = 0x58;
    pub const ASTC_10X8_UNORM_SRGB: u32 = 0x59;
    pub const ASTC_10X10_UNORM: u32 = 0x5A;
    pub const ASTC_10X10_UNORM_SRGB: u32 = 0x5B;
    pub const ASTC_12X10_UNORM: u32 = 0x5C;
    pub const ASTC_12X10_UNORM_SRGB: u32 = 0x5D;
    pub const ASTC_12X12_UNORM: u32 = 0x5E;
    pub const ASTC_12X12_UNORM_SRGB: u32 = 0x5F;

    // wgpu.h native formats
    pub const R16_UNORM: u32 = 0x0003_0001;
    pub const R16_SNORM: u32 = 0x0003_0002;
    pub const RG16_UNORM: u32 = 0x0003_0003;
    pub const RG16_SNORM: u32 = 0x0003_0004;
    pub const RGBA16_UNORM: u32 = 0x0003_0005;
    pub const RGBA16_SNORM: u32 = 0x0003_0006;
}
