//! Enum and flag translation between the public types and the native numbering.
//!
//! The raw translators take and return `u32` and are total: a value outside the
//! translated domain comes back unchanged, so native extension values survive a
//! trip through them. The typed helpers at the bottom are what the façade calls.

use wgt::{TextureFormat as Tf, VertexFormat as Vf};

use crate::{
    error::{ErrorKind, SurfaceError},
    native::{self, texture_format as ntf, vertex_format as nvf},
};

/// Formats that do not survive `host -> native -> host`.
///
/// They map to native extension values, which the inverse translator leaves alone.
pub const NON_ROUND_TRIPPABLE_FORMATS: [Tf; 6] = [
    Tf::R16Unorm,
    Tf::R16Snorm,
    Tf::Rg16Unorm,
    Tf::Rg16Snorm,
    Tf::Rgba16Unorm,
    Tf::Rgba16Snorm,
];

/// Native numbering inserts `BindingNotUsed = 0` and shifts every other value up.
macro_rules! binding_type {
    ($to:ident, $from:ident, $last:literal, $native_last:literal) => {
        pub fn $to(host: u32) -> u32 {
            match host {
                0 => native::BINDING_NOT_USED,
                1..=$last => host + 1,
                _ => host,
            }
        }

        pub fn $from(raw: u32) -> u32 {
            match raw {
                // `BindingNotUsed` and `Undefined` both collapse onto the host's `Undefined`.
                0 | 1 => 0,
                2..=$native_last => raw - 1,
                _ => raw,
            }
        }
    };
}

binding_type!(buffer_binding_type_to_native, buffer_binding_type_from_native, 3, 4);
binding_type!(sampler_binding_type_to_native, sampler_binding_type_from_native, 3, 4);
binding_type!(texture_sample_type_to_native, texture_sample_type_from_native, 5, 6);
binding_type!(storage_texture_access_to_native, storage_texture_access_from_native, 3, 4);

pub fn load_op_to_native(host: u32) -> u32 {
    match host {
        x if x == wgt::LoadOp::Clear as u32 => native::load_op::CLEAR,
        x if x == wgt::LoadOp::Load as u32 => native::load_op::LOAD,
        other => other,
    }
}

pub fn load_op_from_native(raw: u32) -> u32 {
    match raw {
        native::load_op::CLEAR => wgt::LoadOp::Clear as u32,
        native::load_op::LOAD => wgt::LoadOp::Load as u32,
        other => other,
    }
}

pub fn vertex_step_mode_to_native(host: u32) -> u32 {
    match host {
        x if x == wgt::VertexStepMode::Undefined as u32 => native::vertex_step_mode::UNDEFINED,
        x if x == wgt::VertexStepMode::VertexBufferNotUsed as u32 => {
            native::vertex_step_mode::VERTEX_BUFFER_NOT_USED
        }
        other => other,
    }
}

pub fn vertex_step_mode_from_native(raw: u32) -> u32 {
    match raw {
        native::vertex_step_mode::UNDEFINED => wgt::VertexStepMode::Undefined as u32,
        native::vertex_step_mode::VERTEX_BUFFER_NOT_USED => {
            wgt::VertexStepMode::VertexBufferNotUsed as u32
        }
        other => other,
    }
}

macro_rules! pass_through {
    ($($to:ident, $from:ident;)*) => {$(
        pub fn $to(host: u32) -> u32 {
            host
        }

        pub fn $from(raw: u32) -> u32 {
            raw
        }
    )*};
}

pass_through! {
    store_op_to_native, store_op_from_native;
    texture_view_dimension_to_native, texture_view_dimension_from_native;
    texture_dimension_to_native, texture_dimension_from_native;
    texture_aspect_to_native, texture_aspect_from_native;
    present_mode_to_native, present_mode_from_native;
    composite_alpha_mode_to_native, composite_alpha_mode_from_native;
    compare_function_to_native, compare_function_from_native;
    blend_operation_to_native, blend_operation_from_native;
    blend_factor_to_native, blend_factor_from_native;
    front_face_to_native, front_face_from_native;
    cull_mode_to_native, cull_mode_from_native;
    stencil_operation_to_native, stencil_operation_from_native;
    primitive_topology_to_native, primitive_topology_from_native;
    index_format_to_native, index_format_from_native;
    filter_mode_to_native, filter_mode_from_native;
    mipmap_filter_mode_to_native, mipmap_filter_mode_from_native;
    address_mode_to_native, address_mode_from_native;
    power_preference_to_native, power_preference_from_native;
    backend_type_to_native, backend_type_from_native;
}

/// The native header prepends nothing but starts counting at one.
macro_rules! shifted_by_one {
    ($to:ident, $from:ident, $last:literal, $native_last:literal) => {
        pub fn $to(host: u32) -> u32 {
            match host {
                0..=$last => host + 1,
                _ => host,
            }
        }

        pub fn $from(raw: u32) -> u32 {
            match raw {
                1..=$native_last => raw - 1,
                _ => raw,
            }
        }
    };
}

shifted_by_one!(adapter_type_to_native, adapter_type_from_native, 3, 4);
shifted_by_one!(error_filter_to_native, error_filter_from_native, 2, 3);
shifted_by_one!(query_type_to_native, query_type_from_native, 1, 2);

pub fn texture_format_to_native(host: u32) -> u32 {
    match Tf::from_raw(host) {
        Some(format) => format_to_native(format),
        None => host,
    }
}

fn format_to_native(format: Tf) -> u32 {
    match format {
        Tf::Undefined => ntf::UNDEFINED,
        Tf::R8Unorm => ntf::R8_UNORM,
        Tf::R8Snorm => ntf::R8_SNORM,
        Tf::R8Uint => ntf::R8_UINT,
        Tf::R8Sint => ntf::R8_SINT,
        Tf::R16Uint => ntf::R16_UINT,
        Tf::R16Sint => ntf::R16_SINT,
        Tf::R16Unorm => ntf::R16_UNORM,
        Tf::R16Snorm => ntf::R16_SNORM,
        Tf::R16Float => ntf::R16_FLOAT,
        Tf::Rg8Unorm => ntf::RG8_UNORM,
        Tf::Rg8Snorm => ntf::RG8_SNORM,
        Tf::Rg8Uint => ntf::RG8_UINT,
        Tf::Rg8Sint => ntf::RG8_SINT,
        Tf::R32Float => ntf::R32_FLOAT,
        Tf::R32Uint => ntf::R32_UINT,
        Tf::R32Sint => ntf::R32_SINT,
        Tf::Rg16Uint => ntf::RG16_UINT,
        Tf::Rg16Sint => ntf::RG16_SINT,
        Tf::Rg16Unorm => ntf::RG16_UNORM,
        Tf::Rg16Snorm => ntf::RG16_SNORM,
        Tf::Rg16Float => ntf::RG16_FLOAT,
        Tf::Rgba8Unorm => ntf::RGBA8_UNORM,
        Tf::Rgba8UnormSrgb => ntf::RGBA8_UNORM_SRGB,
        Tf::Rgba8Snorm => ntf::RGBA8_SNORM,
        Tf::Rgba8Uint => ntf::RGBA8_UINT,
        Tf::Rgba8Sint => ntf::RGBA8_SINT,
        Tf::Bgra8Unorm => ntf::BGRA8_UNORM,
        Tf::Bgra8UnormSrgb => ntf::BGRA8_UNORM_SRGB,
        Tf::Rgb10a2Uint => ntf::RGB10A2_UINT,
        Tf::Rgb10a2Unorm => ntf::RGB10A2_UNORM,
        Tf::Rg11b10Ufloat => ntf::RG11B10_UFLOAT,
        Tf::Rgb9e5Ufloat => ntf::RGB9E5_UFLOAT,
        Tf::Rg32Float => ntf::RG32_FLOAT,
        Tf::Rg32Uint => ntf::RG32_UINT,
        Tf::Rg32Sint => ntf::RG32_SINT,
        Tf::Rgba16Uint => ntf::RGBA16_UINT,
        Tf::Rgba16Sint => ntf::RGBA16_SINT,
        Tf::Rgba16Unorm => ntf::RGBA16_UNORM,
        Tf::Rgba16Snorm => ntf::RGBA16_SNORM,
        Tf::Rgba16Float => ntf::RGBA16_FLOAT,
        Tf::Rgba32Float => ntf::RGBA32_FLOAT,
        Tf::Rgba32Uint => ntf::RGBA32_UINT,
        Tf::Rgba32Sint => ntf::RGBA32_SINT,
        Tf::Stencil8 => ntf::STENCIL8,
        Tf::Depth16Unorm => ntf::DEPTH16_UNORM,
        Tf::Depth24Plus => ntf::DEPTH24_PLUS,
        Tf::Depth24PlusStencil8 => ntf::DEPTH24_PLUS_STENCIL8,
        Tf::Depth32Float => ntf::DEPTH32_FLOAT,
        Tf::Depth32FloatStencil8 => ntf::DEPTH32_FLOAT_STENCIL8,
        Tf::Bc1RgbaUnorm => ntf::BC1_RGBA_UNORM,
        Tf::Bc1RgbaUnormSrgb => ntf::BC1_RGBA_UNORM_SRGB,
        Tf::Bc2RgbaUnorm => ntf::BC2_RGBA_UNORM,
        Tf::Bc2RgbaUnormSrgb => ntf::BC2_RGBA_UNORM_SRGB,
        Tf::Bc3RgbaUnorm => ntf::BC3_RGBA_UNORM,
        Tf::Bc3RgbaUnormSrgb => ntf::BC3_RGBA_UNORM_SRGB,
        Tf::Bc4RUnorm => ntf::BC4_R_UNORM,
        Tf::Bc4RSnorm => ntf::BC4_R_SNORM,
        Tf::Bc5RgUnorm => ntf::BC5_RG_UNORM,
        Tf::Bc5RgSnorm => ntf::BC5_RG_SNORM,
        Tf::Bc6hRgbUfloat => ntf::BC6H_RGB_UFLOAT,
        Tf::Bc6hRgbFloat => ntf::BC6H_RGB_FLOAT,
        Tf::Bc7RgbaUnorm => ntf::BC7_RGBA_UNORM,
        Tf::Bc7RgbaUnormSrgb => ntf::BC7_RGBA_UNORM_SRGB,
        Tf::Etc2Rgb8Unorm => ntf::ETC2_RGB8_UNORM,
        Tf::Etc2Rgb8UnormSrgb => ntf::ETC2_RGB8_UNORM_SRGB,
        Tf::Etc2Rgb8A1Unorm => ntf::ETC2_RGB8A1_UNORM,
        Tf::Etc2Rgb8A1UnormSrgb => ntf::ETC2_RGB8A1_UNORM_SRGB,
        Tf::Etc2Rgba8Unorm => ntf::ETC2_RGBA8_UNORM,
        Tf::Etc2Rgba8UnormSrgb => ntf::ETC2_RGBA8_UNORM_SRGB,
        Tf::EacR11Unorm => ntf::EAC_R11_UNORM,
        Tf::EacR11Snorm => ntf::EAC_R11_SNORM,
        Tf::EacRg11Unorm => ntf::EAC_RG11_UNORM,
        Tf::EacRg11Snorm => ntf::EAC_RG11_SNORM,
        Tf::Astc4x4Unorm => ntf::ASTC_4X4_UNORM,
        Tf::Astc4x4UnormSrgb => ntf::ASTC_4X4_UNORM_SRGB,
        Tf::Astc5x4Unorm => ntf::ASTC_5X4_UNORM,
        Tf::Astc5x4UnormSrgb => ntf::ASTC_5X4_UNORM_SRGB,
        Tf::Astc5x5Unorm => ntf::ASTC_5X5_UNORM,
        Tf::Astc5x5UnormSrgb => ntf::ASTC_5X5_UNORM_SRGB,
        Tf::Astc6x5Unorm => ntf::ASTC_6X5_UNORM,
        Tf::Astc6x5UnormSrgb => ntf::ASTC_6X5_UNORM_SRGB,
        Tf::Astc6x6Unorm => ntf::ASTC_6X6_UNORM,
        Tf::Astc6x6UnormSrgb => ntf::ASTC_6X6_UNORM_SRGB,
        Tf::Astc8x5Unorm => ntf::ASTC_8X5_UNORM,
        Tf::Astc8x5UnormSrgb => ntf::ASTC_8X5_UNORM_SRGB,
        Tf::Astc8x6Unorm => ntf::ASTC_8X6_UNORM,
        Tf::Astc8x6UnormSrgb => ntf::ASTC_8X6_UNORM_SRGB,
        Tf::Astc8x8Unorm => ntf::ASTC_8X8_UNORM,
        Tf::Astc8x8UnormSrgb => ntf::ASTC_8X8_UNORM_SRGB,
        Tf::Astc10x5Unorm => ntf::ASTC_10X5_UNORM,
        Tf::Astc10x5UnormSrgb => ntf::ASTC_10X5_UNORM_SRGB,
        Tf::Astc10x6Unorm => ntf::ASTC_10X6_UNORM,
        Tf::Astc10x6UnormSrgb => ntf::ASTC_10X6_UNORM_SRGB,
        Tf::Astc10x8Unorm => ntf::ASTC_10X8_UNORM,
        Tf::Astc10x8UnormSrgb => ntf::ASTC_10X8_UNORM_SRGB,
        Tf::Astc10x10Unorm => ntf::ASTC_10X10_UNORM,
        Tf::Astc10x10UnormSrgb => ntf::ASTC_10X10_UNORM_SRGB,
        Tf::Astc12x10Unorm => ntf::ASTC_12X10_UNORM,
        Tf::Astc12x10UnormSrgb => ntf::ASTC_12X10_UNORM_SRGB,
        Tf::Astc12x12Unorm => ntf::ASTC_12X12_UNORM,
        Tf::Astc12x12UnormSrgb => ntf::ASTC_12X12_UNORM_SRGB,
    }
}

pub fn texture_format_from_native(raw: u32) -> u32 {
    let format = match raw {
        ntf::UNDEFINED => Tf::Undefined,
        ntf::R8_UNORM => Tf::R8Unorm,
        ntf::R8_SNORM => Tf::R8Snorm,
        ntf::R8_UINT => Tf::R8Uint,
        ntf::R8_SINT => Tf::R8Sint,
        ntf::R16_UINT => Tf::R16Uint,
        ntf::R16_SINT => Tf::R16Sint,
        ntf::R16_FLOAT => Tf::R16Float,
        ntf::RG8_UNORM => Tf::Rg8Unorm,
        ntf::RG8_SNORM => Tf::Rg8Snorm,
        ntf::RG8_UINT => Tf::Rg8Uint,
        ntf::RG8_SINT => Tf::Rg8Sint,
        ntf::R32_FLOAT => Tf::R32Float,
        ntf::R32_UINT => Tf::R32Uint,
        ntf::R32_SINT => Tf::R32Sint,
        ntf::RG16_UINT => Tf::Rg16Uint,
        ntf::RG16_SINT => Tf::Rg16Sint,
        ntf::RG16_FLOAT => Tf::Rg16Float,
        ntf::RGBA8_UNORM => Tf::Rgba8Unorm,
        ntf::RGBA8_UNORM_SRGB => Tf::Rgba8UnormSrgb,
        ntf::RGBA8_SNORM => Tf::Rgba8Snorm,
        ntf::RGBA8_UINT => Tf::Rgba8Uint,
        ntf::RGBA8_SINT => Tf::Rgba8Sint,
        ntf::BGRA8_UNORM => Tf::Bgra8Unorm,
        ntf::BGRA8_UNORM_SRGB => Tf::Bgra8UnormSrgb,
        ntf::RGB10A2_UINT => Tf::Rgb10a2Uint,
        ntf::RGB10A2_UNORM => Tf::Rgb10a2Unorm,
        ntf::RG11B10_UFLOAT => Tf::Rg11b10Ufloat,
        ntf::RGB9E5_UFLOAT => Tf::Rgb9e5Ufloat,
        ntf::RG32_FLOAT => Tf::Rg32Float,
        ntf::RG32_UINT => Tf::Rg32Uint,
        ntf::RG32_SINT => Tf::Rg32Sint,
        ntf::RGBA16_UINT => Tf::Rgba16Uint,
        ntf::RGBA16_SINT => Tf::Rgba16Sint,
        ntf::RGBA16_FLOAT => Tf::Rgba16Float,
        ntf::RGBA32_FLOAT => Tf::Rgba32Float,
        ntf::RGBA32_UINT => Tf::Rgba32Uint,
        ntf::RGBA32_SINT => Tf::Rgba32Sint,
        ntf::STENCIL8 => Tf::Stencil8,
        ntf::DEPTH16_UNORM => Tf::Depth16Unorm,
        ntf::DEPTH24_PLUS => Tf::Depth24Plus,
        ntf::DEPTH24_PLUS_STENCIL8 => Tf::Depth24PlusStencil8,
        ntf::DEPTH32_FLOAT => Tf::Depth32Float,
        ntf::DEPTH32_FLOAT_STENCIL8 => Tf::Depth32FloatStencil8,
        ntf::BC1_RGBA_UNORM => Tf::Bc1RgbaUnorm,
        ntf::BC1_RGBA_UNORM_SRGB => Tf::Bc1RgbaUnormSrgb,
        ntf::BC2_RGBA_UNORM => Tf::Bc2RgbaUnorm,
        ntf::BC2_RGBA_UNORM_SRGB => Tf::Bc2RgbaUnormSrgb,
        ntf::BC3_RGBA_UNORM => Tf::Bc3RgbaUnorm,
        ntf::BC3_RGBA_UNORM_SRGB => Tf::Bc3RgbaUnormSrgb,
        ntf::BC4_R_UNORM => Tf::Bc4RUnorm,
        ntf::BC4_R_SNORM => Tf::Bc4RSnorm,
        ntf::BC5_RG_UNORM => Tf::Bc5RgUnorm,
        ntf::BC5_RG_SNORM => Tf::Bc5RgSnorm,
        ntf::BC6H_RGB_UFLOAT => Tf::Bc6hRgbUfloat,
        ntf::BC6H_RGB_FLOAT => Tf::Bc6hRgbFloat,
        ntf::BC7_RGBA_UNORM => Tf::Bc7RgbaUnorm,
        ntf::BC7_RGBA_UNORM_SRGB => Tf::Bc7RgbaUnormSrgb,
        ntf::ETC2_RGB8_UNORM => Tf::Etc2Rgb8Unorm,
        ntf::ETC2_RGB8_UNORM_SRGB => Tf::Etc2Rgb8UnormSrgb,
        ntf::ETC2_RGB8A1_UNORM => Tf::Etc2Rgb8A1Unorm,
        ntf::ETC2_RGB8A1_UNORM_SRGB => Tf::Etc2Rgb8A1UnormSrgb,
        ntf::ETC2_RGBA8_UNORM => Tf::Etc2Rgba8Unorm,
        ntf::ETC2_RGBA8_UNORM_SRGB => Tf::Etc2Rgba8UnormSrgb,
        ntf::EAC_R11_UNORM => Tf::EacR11Unorm,
        ntf::EAC_R11_SNORM => Tf::EacR11Snorm,
        ntf::EAC_RG11_UNORM => Tf::EacRg11Unorm,
        ntf::EAC_RG11_SNORM => Tf::EacRg11Snorm,
        ntf::ASTC_4X4_UNORM => Tf::Astc4x4Unorm,
        ntf::ASTC_4X4_UNORM_SRGB => Tf::Astc4x4UnormSrgb,
        ntf::ASTC_5X4_UNORM => Tf::Astc5x4Unorm,
        ntf::ASTC_5X4_UNORM_SRGB => Tf::Astc5x4UnormSrgb,
        ntf::ASTC_5X5_UNORM => Tf::Astc5x5Unorm,
        ntf::ASTC_5X5_UNORM_SRGB => Tf::Astc5x5UnormSrgb,
        ntf::ASTC_6X5_UNORM => Tf::Astc6x5Unorm,
        ntf::ASTC_6X5_UNORM_SRGB => Tf::Astc6x5UnormSrgb,
        ntf::ASTC_6X6_UNORM => Tf::Astc6x6Unorm,
        ntf::ASTC_6X6_UNORM_SRGB => Tf::Astc6x6UnormSrgb,
        ntf::ASTC_8X5_UNORM => Tf::Astc8x5Unorm,
        ntf::ASTC_8X5_UNORM_SRGB => Tf::Astc8x5UnormSrgb,
        ntf::ASTC_8X6_UNORM => Tf::Astc8x6Unorm,
        ntf::ASTC_8X6_UNORM_SRGB => Tf::Astc8x6UnormSrgb,
        ntf::ASTC_8X8_UNORM => Tf::Astc8x8Unorm,
        ntf::ASTC_8X8_UNORM_SRGB => Tf::Astc8x8UnormSrgb,
        ntf::ASTC_10X5_UNORM => Tf::Astc10x5Unorm,
        ntf::ASTC_10X5_UNORM_SRGB => Tf::Astc10x5UnormSrgb,
        ntf::ASTC_10X6_UNORM => Tf::Astc10x6Unorm,
        ntf::ASTC_10X6_UNORM_SRGB => Tf::Astc10x6UnormSrgb,
        ntf::ASTC_10X8_UNORM => Tf::Astc10x8Unorm,
        ntf::ASTC_10X8_UNORM_SRGB => Tf::Astc10x8UnormSrgb,
        ntf::ASTC_10X10_UNORM => Tf::Astc10x10Unorm,
        ntf::ASTC_10X10_UNORM_SRGB => Tf::Astc10x10UnormSrgb,
        ntf::ASTC_12X10_UNORM => Tf::Astc12x10Unorm,
        ntf::ASTC_12X10_UNORM_SRGB => Tf::Astc12x10UnormSrgb,
        ntf::ASTC_12X12_UNORM => Tf::Astc12x12Unorm,
        ntf::ASTC_12X12_UNORM_SRGB => Tf::Astc12x12UnormSrgb,
        other => return other,
    };
    format as u32
}

pub fn vertex_format_to_native(host: u32) -> u32 {
    match Vf::from_raw(host) {
        Some(format) => vertex_to_native(format),
        None => host,
    }
}

fn vertex_to_native(format: Vf) -> u32 {
    match format {
        Vf::Undefined => 0,
        Vf::Uint8x2 => nvf::UINT8X2,
        Vf::Uint8x4 => nvf::UINT8X4,
        Vf::Sint8x2 => nvf::SINT8X2,
        Vf::Sint8x4 => nvf::SINT8X4,
        Vf::Unorm8x2 => nvf::UNORM8X2,
        Vf::Unorm8x4 => nvf::UNORM8X4,
        Vf::Snorm8x2 => nvf::SNORM8X2,
        Vf::Snorm8x4 => nvf::SNORM8X4,
        Vf::Uint16x2 => nvf::UINT16X2,
        Vf::Uint16x4 => nvf::UINT16X4,
        Vf::Sint16x2 => nvf::SINT16X2,
        Vf::Sint16x4 => nvf::SINT16X4,
        Vf::Unorm16x2 => nvf::UNORM16X2,
        Vf::Unorm16x4 => nvf::UNORM16X4,
        Vf::Snorm16x2 => nvf::SNORM16X2,
        Vf::Snorm16x4 => nvf::SNORM16X4,
        Vf::Float16x2 => nvf::FLOAT16X2,
        Vf::Float16x4 => nvf::FLOAT16X4,
        Vf::Float32 => nvf::FLOAT32,
        Vf::Float32x2 => nvf::FLOAT32X2,
        Vf::Float32x3 => nvf::FLOAT32X3,
        Vf::Float32x4 => nvf::FLOAT32X4,
        Vf::Uint32 => nvf::UINT32,
        Vf::Uint32x2 => nvf::UINT32X2,
        Vf::Uint32x3 => nvf::UINT32X3,
        Vf::Uint32x4 => nvf::UINT32X4,
        Vf::Sint32 => nvf::SINT32,
        Vf::Sint32x2 => nvf::SINT32X2,
        Vf::Sint32x3 => nvf::SINT32X3,
        Vf::Sint32x4 => nvf::SINT32X4,
        Vf::Unorm10_10_10_2 => nvf::UNORM10_10_10_2,
    }
}

pub fn vertex_format_from_native(raw: u32) -> u32 {
    let format = match raw {
        0 => Vf::Undefined,
        nvf::UINT8X2 => Vf::Uint8x2,
        nvf::UINT8X4 => Vf::Uint8x4,
        nvf::SINT8X2 => Vf::Sint8x2,
        nvf::SINT8X4 => Vf::Sint8x4,
        nvf::UNORM8X2 => Vf::Unorm8x2,
        nvf::UNORM8X4 => Vf::Unorm8x4,
        nvf::SNORM8X2 => Vf::Snorm8x2,
        nvf::SNORM8X4 => Vf::Snorm8x4,
        nvf::UINT16X2 => Vf::Uint16x2,
        nvf::UINT16X4 => Vf::Uint16x4,
        nvf::SINT16X2 => Vf::Sint16x2,
        nvf::SINT16X4 => Vf::Sint16x4,
        nvf::UNORM16X2 => Vf::Unorm16x2,
        nvf::UNORM16X4 => Vf::Unorm16x4,
        nvf::SNORM16X2 => Vf::Snorm16x2,
        nvf::SNORM16X4 => Vf::Snorm16x4,
        nvf::FLOAT16X2 => Vf::Float16x2,
        nvf::FLOAT16X4 => Vf::Float16x4,
        nvf::FLOAT32 => Vf::Float32,
        nvf::FLOAT32X2 => Vf::Float32x2,
        nvf::FLOAT32X3 => Vf::Float32x3,
        nvf::FLOAT32X4 => Vf::Float32x4,
        nvf::UINT32 => Vf::Uint32,
        nvf::UINT32X2 => Vf::Uint32x2,
        nvf::UINT32X3 => Vf::Uint32x3,
        nvf::UINT32X4 => Vf::Uint32x4,
        nvf::SINT32 => Vf::Sint32,
        nvf::SINT32X2 => Vf::Sint32x2,
        nvf::SINT32X3 => Vf::Sint32x3,
        nvf::SINT32X4 => Vf::Sint32x4,
        nvf::UNORM10_10_10_2 => Vf::Unorm10_10_10_2,
        other => return other,
    };
    format as u32
}

pub fn feature_name_to_native(host: u32) -> u32 {
    use native::feature_name as nf;
    use wgt::FeatureName as F;
    match F::from_raw(host) {
        Some(F::Undefined) => 0,
        Some(F::DepthClipControl) => nf::DEPTH_CLIP_CONTROL,
        Some(F::Depth32FloatStencil8) => nf::DEPTH32_FLOAT_STENCIL8,
        Some(F::TimestampQuery) => nf::TIMESTAMP_QUERY,
        Some(F::TextureCompressionBc) => nf::TEXTURE_COMPRESSION_BC,
        Some(F::TextureCompressionEtc2) => nf::TEXTURE_COMPRESSION_ETC2,
        Some(F::TextureCompressionAstc) => nf::TEXTURE_COMPRESSION_ASTC,
        Some(F::IndirectFirstInstance) => nf::INDIRECT_FIRST_INSTANCE,
        Some(F::ShaderF16) => nf::SHADER_F16,
        Some(F::Rg11b10UfloatRenderable) => nf::RG11B10_UFLOAT_RENDERABLE,
        Some(F::Bgra8UnormStorage) => nf::BGRA8_UNORM_STORAGE,
        Some(F::Float32Filterable) => nf::FLOAT32_FILTERABLE,
        None => host,
    }
}

pub fn feature_name_from_native(raw: u32) -> u32 {
    use native::feature_name as nf;
    use wgt::FeatureName as F;
    let feature = match raw {
        0 => F::Undefined,
        nf::DEPTH_CLIP_CONTROL => F::DepthClipControl,
        nf::DEPTH32_FLOAT_STENCIL8 => F::Depth32FloatStencil8,
        nf::TIMESTAMP_QUERY => F::TimestampQuery,
        nf::TEXTURE_COMPRESSION_BC => F::TextureCompressionBc,
        nf::TEXTURE_COMPRESSION_ETC2 => F::TextureCompressionEtc2,
        nf::TEXTURE_COMPRESSION_ASTC => F::TextureCompressionAstc,
        nf::INDIRECT_FIRST_INSTANCE => F::IndirectFirstInstance,
        nf::SHADER_F16 => F::ShaderF16,
        nf::RG11B10_UFLOAT_RENDERABLE => F::Rg11b10UfloatRenderable,
        nf::BGRA8_UNORM_STORAGE => F::Bgra8UnormStorage,
        nf::FLOAT32_FILTERABLE => F::Float32Filterable,
        other => return other,
    };
    feature as u32
}

pub fn map_backends(backends: wgt::Backends) -> u64 {
    use native::backend;
    if backends.contains(wgt::Backends::all()) {
        return backend::ALL;
    }
    let mut raw = 0;
    for (host, bit) in [
        (wgt::Backends::VULKAN, backend::VULKAN),
        (wgt::Backends::GL, backend::GL),
        (wgt::Backends::METAL, backend::METAL),
        (wgt::Backends::DX12, backend::DX12),
        (wgt::Backends::BROWSER_WEBGPU, backend::BROWSER_WEBGPU),
    ] {
        if backends.contains(host) {
            raw |= bit;
        }
    }
    raw
}

pub fn map_instance_flags(flags: wgt::InstanceFlags) -> u64 {
    u64::from(flags.bits())
}

pub fn map_buffer_usages(usage: wgt::BufferUsages) -> u64 {
    u64::from(usage.bits())
}

pub fn map_texture_usages(usage: wgt::TextureUsages) -> u64 {
    u64::from(usage.bits())
}

/// Truncates native bits the public flags do not know.
pub fn texture_usages_from_native(raw: u64) -> wgt::TextureUsages {
    wgt::TextureUsages::from_bits_truncate(raw as u32)
}

pub fn buffer_usages_from_native(raw: u64) -> wgt::BufferUsages {
    wgt::BufferUsages::from_bits_truncate(raw as u32)
}

pub fn map_shader_stages(stages: wgt::ShaderStages) -> u64 {
    u64::from(stages.bits())
}

pub fn map_color_writes(mask: wgt::ColorWrites) -> u64 {
    u64::from(mask.bits())
}

pub fn map_map_mode(mode: wgt::MapMode) -> u64 {
    u64::from(mode.bits())
}

pub fn map_bool(value: bool) -> u32 {
    if value {
        native::TRUE
    } else {
        native::FALSE
    }
}

pub fn map_optional_bool(value: Option<bool>) -> u32 {
    match value {
        Some(true) => native::optional_bool::TRUE,
        Some(false) => native::optional_bool::FALSE,
        None => native::optional_bool::UNDEFINED,
    }
}

pub fn map_texture_format(format: wgt::TextureFormat) -> u32 {
    texture_format_to_native(format as u32)
}

pub fn map_texture_format_opt(format: Option<wgt::TextureFormat>) -> u32 {
    format.map_or(ntf::UNDEFINED, map_texture_format)
}

/// Reads a native texture format back into the public enum.
///
/// Unlike [`texture_format_from_native`] this recognizes the native 16-bit
/// normalized formats. Values with no public equivalent yield `None`.
pub fn texture_format_from_raw(raw: u32) -> Option<wgt::TextureFormat> {
    match raw {
        ntf::R16_UNORM => Some(Tf::R16Unorm),
        ntf::R16_SNORM => Some(Tf::R16Snorm),
        ntf::RG16_UNORM => Some(Tf::Rg16Unorm),
        ntf::RG16_SNORM => Some(Tf::Rg16Snorm),
        ntf::RGBA16_UNORM => Some(Tf::Rgba16Unorm),
        ntf::RGBA16_SNORM => Some(Tf::Rgba16Snorm),
        ntf::UNDEFINED..=ntf::ASTC_12X12_UNORM_SRGB => Tf::from_raw(texture_format_from_native(raw)),
        _ => None,
    }
}

pub fn map_vertex_format(format: wgt::VertexFormat) -> u32 {
    vertex_format_to_native(format as u32)
}

pub fn map_binding_type(ty: &wgt::BindingType) -> BindingLayouts {
    let mut layouts = BindingLayouts::default();
    match *ty {
        wgt::BindingType::Buffer {
            ty,
            has_dynamic_offset,
            min_binding_size,
        } => {
            layouts.buffer = buffer_binding_type_to_native(ty as u32);
            layouts.has_dynamic_offset = map_bool(has_dynamic_offset);
            layouts.min_binding_size = min_binding_size;
        }
        wgt::BindingType::Sampler(ty) => {
            layouts.sampler = sampler_binding_type_to_native(ty as u32);
        }
        wgt::BindingType::Texture {
            sample_type,
            view_dimension,
            multisampled,
        } => {
            layouts.texture_sample_type = texture_sample_type_to_native(sample_type as u32);
            layouts.texture_view_dimension = texture_view_dimension_to_native(view_dimension as u32);
            layouts.multisampled = map_bool(multisampled);
        }
        wgt::BindingType::StorageTexture {
            access,
            format,
            view_dimension,
        } => {
            layouts.storage_access = storage_texture_access_to_native(access as u32);
            layouts.storage_format = map_texture_format(format);
            layouts.storage_view_dimension = texture_view_dimension_to_native(view_dimension as u32);
        }
    }
    layouts
}

/// Native values of the four sub-layouts of a bind group layout entry.
///
/// Sub-layouts that are not in use keep `BindingNotUsed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BindingLayouts {
    pub buffer: u32,
    pub has_dynamic_offset: u32,
    pub min_binding_size: u64,
    pub sampler: u32,
    pub texture_sample_type: u32,
    pub texture_view_dimension: u32,
    pub multisampled: u32,
    pub storage_access: u32,
    pub storage_format: u32,
    pub storage_view_dimension: u32,
}

pub fn map_error_kind(raw: u32) -> Option<ErrorKind> {
    use native::error_type;
    match raw {
        error_type::NO_ERROR => None,
        error_type::VALIDATION => Some(ErrorKind::Validation),
        error_type::OUT_OF_MEMORY => Some(ErrorKind::OutOfMemory),
        error_type::INTERNAL => Some(ErrorKind::Internal),
        _ => Some(ErrorKind::Unknown),
    }
}

/// Outcome of a native surface texture status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceStatus {
    /// A texture is available; `suboptimal` mirrors the native hint.
    Good { suboptimal: bool },
    /// A texture is available, but the surface needs reconfiguring.
    Outdated,
    /// No texture is available.
    Failed(SurfaceError),
}

pub fn map_surface_status(raw: u32) -> SurfaceStatus {
    use native::surface_get_current_texture_status as s;
    match raw {
        s::SUCCESS_OPTIMAL => SurfaceStatus::Good { suboptimal: false },
        s::SUCCESS_SUBOPTIMAL => SurfaceStatus::Good { suboptimal: true },
        s::OUTDATED => SurfaceStatus::Outdated,
        s::TIMEOUT => SurfaceStatus::Failed(SurfaceError::Timeout),
        s::LOST => SurfaceStatus::Failed(SurfaceError::Lost),
        s::OUT_OF_MEMORY => SurfaceStatus::Failed(SurfaceError::OutOfMemory),
        s::DEVICE_LOST => SurfaceStatus::Failed(SurfaceError::DeviceLost),
        other => SurfaceStatus::Failed(SurfaceError::Other(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Translator = fn(u32) -> u32;

    /// Every translator pair with the host domain it covers.
    fn translators() -> Vec<(&'static str, Translator, Translator, Vec<u32>)> {
        fn domain<T: Copy>(all: &[T], raw: fn(T) -> u32) -> Vec<u32> {
            all.iter().map(|&v| raw(v)).collect()
        }
        vec![
            (
                "buffer binding",
                buffer_binding_type_to_native,
                buffer_binding_type_from_native,
                domain(wgt::BufferBindingType::ALL, |v| v as u32),
            ),
            (
                "sampler binding",
                sampler_binding_type_to_native,
                sampler_binding_type_from_native,
                domain(wgt::SamplerBindingType::ALL, |v| v as u32),
            ),
            (
                "texture sample",
                texture_sample_type_to_native,
                texture_sample_type_from_native,
                domain(wgt::TextureSampleType::ALL, |v| v as u32),
            ),
            (
                "storage access",
                storage_texture_access_to_native,
                storage_texture_access_from_native,
                domain(wgt::StorageTextureAccess::ALL, |v| v as u32),
            ),
            (
                "load op",
                load_op_to_native,
                load_op_from_native,
                domain(wgt::LoadOp::ALL, |v| v as u32),
            ),
            (
                "store op",
                store_op_to_native,
                store_op_from_native,
                domain(wgt::StoreOp::ALL, |v| v as u32),
            ),
            (
                "vertex step mode",
                vertex_step_mode_to_native,
                vertex_step_mode_from_native,
                domain(wgt::VertexStepMode::ALL, |v| v as u32),
            ),
            (
                "vertex format",
                vertex_format_to_native,
                vertex_format_from_native,
                domain(wgt::VertexFormat::ALL, |v| v as u32),
            ),
            (
                "texture format",
                texture_format_to_native,
                texture_format_from_native,
                wgt::TextureFormat::ALL
                    .iter()
                    .filter(|f| !NON_ROUND_TRIPPABLE_FORMATS.contains(*f))
                    .map(|&f| f as u32)
                    .collect(),
            ),
            (
                "feature name",
                feature_name_to_native,
                feature_name_from_native,
                domain(wgt::FeatureName::ALL, |v| v as u32),
            ),
            (
                "adapter type",
                adapter_type_to_native,
                adapter_type_from_native,
                domain(wgt::AdapterType::ALL, |v| v as u32),
            ),
            (
                "error filter",
                error_filter_to_native,
                error_filter_from_native,
                domain(wgt::ErrorFilter::ALL, |v| v as u32),
            ),
            (
                "query type",
                query_type_to_native,
                query_type_from_native,
                domain(wgt::QueryType::ALL, |v| v as u32),
            ),
            (
                "texture view dimension",
                texture_view_dimension_to_native,
                texture_view_dimension_from_native,
                domain(wgt::TextureViewDimension::ALL, |v| v as u32),
            ),
            (
                "texture dimension",
                texture_dimension_to_native,
                texture_dimension_from_native,
                domain(wgt::TextureDimension::ALL, |v| v as u32),
            ),
            (
                "present mode",
                present_mode_to_native,
                present_mode_from_native,
                domain(wgt::PresentMode::ALL, |v| v as u32),
            ),
            (
                "composite alpha",
                composite_alpha_mode_to_native,
                composite_alpha_mode_from_native,
                domain(wgt::CompositeAlphaMode::ALL, |v| v as u32),
            ),
            (
                "compare function",
                compare_function_to_native,
                compare_function_from_native,
                domain(wgt::CompareFunction::ALL, |v| v as u32),
            ),
            (
                "blend operation",
                blend_operation_to_native,
                blend_operation_from_native,
                domain(wgt::BlendOperation::ALL, |v| v as u32),
            ),
            (
                "blend factor",
                blend_factor_to_native,
                blend_factor_from_native,
                domain(wgt::BlendFactor::ALL, |v| v as u32),
            ),
            (
                "front face",
                front_face_to_native,
                front_face_from_native,
                domain(wgt::FrontFace::ALL, |v| v as u32),
            ),
            (
                "cull mode",
                cull_mode_to_native,
                cull_mode_from_native,
                domain(wgt::CullMode::ALL, |v| v as u32),
            ),
            (
                "stencil operation",
                stencil_operation_to_native,
                stencil_operation_from_native,
                domain(wgt::StencilOperation::ALL, |v| v as u32),
            ),
            (
                "primitive topology",
                primitive_topology_to_native,
                primitive_topology_from_native,
                domain(wgt::PrimitiveTopology::ALL, |v| v as u32),
            ),
            (
                "index format",
                index_format_to_native,
                index_format_from_native,
                domain(wgt::IndexFormat::ALL, |v| v as u32),
            ),
            (
                "filter mode",
                filter_mode_to_native,
                filter_mode_from_native,
                domain(wgt::FilterMode::ALL, |v| v as u32),
            ),
            (
                "mipmap filter",
                mipmap_filter_mode_to_native,
                mipmap_filter_mode_from_native,
                domain(wgt::MipmapFilterMode::ALL, |v| v as u32),
            ),
            (
                "address mode",
                address_mode_to_native,
                address_mode_from_native,
                domain(wgt::AddressMode::ALL, |v| v as u32),
            ),
        ]
    }

    #[test]
    fn round_trip() {
        for (name, to, from, domain) in translators() {
            for host in domain {
                assert_eq!(from(to(host)), host, "{name}: {host}");
            }
        }
    }

    #[test]
    fn removed_formats_do_not_round_trip() {
        for format in NON_ROUND_TRIPPABLE_FORMATS {
            let raw = texture_format_to_native(format as u32);
            assert!(raw >= 0x0003_0001, "{format:?}");
            assert_eq!(texture_format_from_native(raw), raw);
            assert_ne!(texture_format_from_native(raw), format as u32);
            assert_eq!(texture_format_from_raw(raw), Some(format));
        }
    }

    fn is_removed_format(translator: &str, value: u32) -> bool {
        translator == "texture format"
            && NON_ROUND_TRIPPABLE_FORMATS.iter().any(|&f| f as u32 == value)
    }

    #[test]
    fn totality_and_pass_through() {
        let samples = (0..=512u32)
            .chain((0..=u32::MAX).step_by(65_521))
            .chain(0x0003_0000..=0x0003_0010)
            .chain([u32::MAX - 1, u32::MAX]);
        let translators = translators();
        for value in samples {
            for (name, to, from, domain) in &translators {
                let native = to(value);
                let _ = from(value);
                if !domain.contains(&value) && !is_removed_format(name, value) {
                    assert_eq!(native, value, "{name}: {value} must pass through");
                }
            }
        }
    }

    #[test]
    fn specific_values() {
        assert_eq!(buffer_binding_type_to_native(0), 0);
        assert_eq!(buffer_binding_type_to_native(wgt::BufferBindingType::Uniform as u32), 2);
        assert_eq!(load_op_to_native(wgt::LoadOp::Clear as u32), native::load_op::CLEAR);
        assert_eq!(load_op_to_native(wgt::LoadOp::Load as u32), native::load_op::LOAD);
        assert_eq!(
            vertex_step_mode_to_native(wgt::VertexStepMode::VertexBufferNotUsed as u32),
            0
        );
        assert_eq!(map_vertex_format(Vf::Float32x3), 0x1E);
        assert_eq!(map_texture_format(Tf::Bgra8UnormSrgb), 0x18);
        assert_eq!(map_texture_format(Tf::Rgba16Float), 0x22);
        assert_eq!(map_texture_format(Tf::Astc12x12UnormSrgb), 0x5F);
        assert_eq!(map_texture_format(Tf::R16Unorm), 0x0003_0001);
        assert_eq!(texture_format_from_raw(0x17), Some(Tf::Bgra8Unorm));
        assert_eq!(texture_format_from_raw(0x60), None);
        assert_eq!(texture_format_from_raw(0x0004_0000), None);
        assert_eq!(
            feature_name_to_native(wgt::FeatureName::TextureCompressionEtc2 as u32),
            native::feature_name::TEXTURE_COMPRESSION_ETC2
        );
    }

    #[test]
    fn flags_widen() {
        assert_eq!(map_color_writes(wgt::ColorWrites::ALL), 0xF);
        assert_eq!(map_shader_stages(wgt::ShaderStages::COMPUTE), 4);
        assert_eq!(map_buffer_usages(wgt::BufferUsages::QUERY_RESOLVE), 0x200);
        assert_eq!(map_backends(wgt::Backends::all()), native::backend::ALL);
        assert_eq!(
            map_backends(wgt::Backends::VULKAN | wgt::Backends::GL),
            native::backend::VULKAN | native::backend::GL
        );
    }

    #[test]
    fn binding_layouts() {
        let layouts = map_binding_type(&wgt::BindingType::Buffer {
            ty: wgt::BufferBindingType::Storage,
            has_dynamic_offset: false,
            min_binding_size: 4,
        });
        assert_eq!(layouts.buffer, 3);
        assert_eq!(layouts.sampler, native::BINDING_NOT_USED);
        assert_eq!(layouts.texture_sample_type, native::BINDING_NOT_USED);
        assert_eq!(layouts.storage_access, native::BINDING_NOT_USED);
    }

    #[test]
    fn surface_status() {
        assert_eq!(map_surface_status(1), SurfaceStatus::Good { suboptimal: false });
        assert_eq!(map_surface_status(4), SurfaceStatus::Outdated);
        assert_eq!(map_surface_status(5), SurfaceStatus::Failed(SurfaceError::Lost));
        assert_eq!(map_surface_status(99), SurfaceStatus::Failed(SurfaceError::Other(99)));
    }
}
