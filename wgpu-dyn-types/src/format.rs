use crate::{host_enum, TextureAspect};

host_enum! {
    /// Underlying texture data format.
    ///
    /// If there is a conversion in the format (such as srgb -> linear), the conversion listed here
    /// is for loading from texture in a shader. When writing to the texture, the opposite
    /// conversion takes place.
    pub enum TextureFormat {
        /// Not specified.
        Undefined = 0,
        /// Red channel only. 8 bit integer per channel. [0, 255] converted to/from float [0, 1] in shader.
        R8Unorm = 1,
        /// Red channel only. 8 bit integer per channel. [-127, 127] converted to/from float [-1, 1] in shader.
        R8Snorm = 2,
        /// Red channel only. 8 bit integer per channel. Unsigned in shader.
        R8Uint = 3,
        /// Red channel only. 8 bit integer per channel. Signed in shader.
        R8Sint = 4,
        /// Red channel only. 16 bit integer per channel. Unsigned in shader.
        R16Uint = 5,
        /// Red channel only. 16 bit integer per channel. Signed in shader.
        R16Sint = 6,
        /// Red channel only. 16 bit integer per channel. [0, 65535] converted to/from float [0, 1] in shader.
        R16Unorm = 7,
        /// Red channel only. 16 bit integer per channel. [-32767, 32767] converted to/from float [-1, 1] in shader.
        R16Snorm = 8,
        /// Red channel only. 16 bit float per channel. Float in shader.
        R16Float = 9,
        /// Red and green channels. 8 bit integer per channel. [0, 255] converted to/from float [0, 1] in shader.
        Rg8Unorm = 10,
        /// Red and green channels. 8 bit integer per channel. [-127, 127] converted to/from float [-1, 1] in shader.
        Rg8Snorm = 11,
        /// Red and green channels. 8 bit integer per channel. Unsigned in shader.
        Rg8Uint = 12,
        /// Red and green channels. 8 bit integer per channel. Signed in shader.
        Rg8Sint = 13,
        /// Red channel only. 32 bit float per channel. Float in shader.
        R32Float = 14,
        /// Red channel only. 32 bit integer per channel. Unsigned in shader.
        R32Uint = 15,
        /// Red channel only. 32 bit integer per channel. Signed in shader.
        R32Sint = 16,
        /// Red and green channels. 16 bit integer per channel. Unsigned in shader.
        Rg16Uint = 17,
        /// Red and green channels. 16 bit integer per channel. Signed in shader.
        Rg16Sint = 18,
        /// Red and green channels. 16 bit integer per channel. [0, 65535] converted to/from float [0, 1] in shader.
        Rg16Unorm = 19,
        /// Red and green channels. 16 bit integer per channel. [-32767, 32767] converted to/from float [-1, 1] in shader.
        Rg16Snorm = 20,
        /// Red and green channels. 16 bit float per channel. Float in shader.
        Rg16Float = 21,
        /// Red, green, blue, and alpha channels. 8 bit integer per channel. [0, 255] converted to/from float [0, 1] in shader.
        Rgba8Unorm = 22,
        /// Red, green, blue, and alpha channels. 8 bit integer per channel. Srgb-color [0, 255] converted to/from linear-color float [0, 1] in shader.
        Rgba8UnormSrgb = 23,
        /// Red, green, blue, and alpha channels. 8 bit integer per channel. [-127, 127] converted to/from float [-1, 1] in shader.
        Rgba8Snorm = 24,
        /// Red, green, blue, and alpha channels. 8 bit integer per channel. Unsigned in shader.
        Rgba8Uint = 25,
        /// Red, green, blue, and alpha channels. 8 bit integer per channel. Signed in shader.
        Rgba8Sint = 26,
        /// Blue, green, red, and alpha channels. 8 bit integer per channel. [0, 255] converted to/from float [0, 1] in shader.
        Bgra8Unorm = 27,
        /// Blue, green, red, and alpha channels. 8 bit integer per channel. Srgb-color [0, 255] converted to/from linear-color float [0, 1] in shader.
        Bgra8UnormSrgb = 28,
        /// Red, green, blue, and alpha channels. 10 bit integer for RGB channels, 2 bit integer for alpha channel. Unsigned in shader.
        Rgb10a2Uint = 29,
        /// Red, green, blue, and alpha channels. 10 bit integer for RGB channels, 2 bit integer for alpha channel. [0, 1023] ([0, 3] for alpha) converted to/from float [0, 1] in shader.
        Rgb10a2Unorm = 30,
        /// Red, green, and blue channels. 11 bit float with no sign bit for RG channels. 10 bit float with no sign bit for blue channel. Float in shader.
        Rg11b10Ufloat = 31,
        /// Packed unsigned float with 9 bits mantisa for each RGB component, then a common 5 bits exponent
        Rgb9e5Ufloat = 32,
        /// Red and green channels. 32 bit float per channel. Float in shader.
        Rg32Float = 33,
        /// Red and green channels. 32 bit integer per channel. Unsigned in shader.
        Rg32Uint = 34,
        /// Red and green channels. 32 bit integer per channel. Signed in shader.
        Rg32Sint = 35,
        /// Red, green, blue, and alpha channels. 16 bit integer per channel. Unsigned in shader.
        Rgba16Uint = 36,
        /// Red, green, blue, and alpha channels. 16 bit integer per channel. Signed in shader.
        Rgba16Sint = 37,
        /// Red, green, blue, and alpha channels. 16 bit integer per channel. [0, 65535] converted to/from float [0, 1] in shader.
        Rgba16Unorm = 38,
        /// Red, green, blue, and alpha. 16 bit integer per channel. [-32767, 32767] converted to/from float [-1, 1] in shader.
        Rgba16Snorm = 39,
        /// Red, green, blue, and alpha channels. 16 bit float per channel. Float in shader.
        Rgba16Float = 40,
        /// Red, green, blue, and alpha channels. 32 bit float per channel. Float in shader.
        Rgba32Float = 41,
        /// Red, green, blue, and alpha channels. 32 bit integer per channel. Unsigned in shader.
        Rgba32Uint = 42,
        /// Red, green, blue, and alpha channels. 32 bit integer per channel. Signed in shader.
        Rgba32Sint = 43,
        /// Stencil format with 8 bit integer stencil.
        Stencil8 = 44,
        /// Special depth format with 16 bit integer depth.
        Depth16Unorm = 45,
        /// Special depth format with at least 24 bit integer depth.
        Depth24Plus = 46,
        /// Special depth/stencil format with at least 24 bit integer depth and 8 bits integer stencil.
        Depth24PlusStencil8 = 47,
        /// Special depth format with 32 bit floating point depth.
        Depth32Float = 48,
        /// Special depth/stencil format with 32 bit floating point depth and 8 bits integer stencil.
        ///
        /// [`FeatureName::Depth32FloatStencil8`](crate::FeatureName::Depth32FloatStencil8) must be enabled to use this texture format.
        Depth32FloatStencil8 = 49,
        /// 4x4 block compressed texture. 8 bytes per block (4 bit/px). 4 color + alpha pallet. 5 bit R + 6 bit G + 5 bit B + 1 bit alpha.
        Bc1RgbaUnorm = 50,
        /// 4x4 block compressed texture. 8 bytes per block (4 bit/px). Srgb-color.
        Bc1RgbaUnormSrgb = 51,
        /// 4x4 block compressed texture. 16 bytes per block (8 bit/px). 4 color pallet. 5 bit R + 6 bit G + 5 bit B + 4 bit alpha.
        Bc2RgbaUnorm = 52,
        /// 4x4 block compressed texture. 16 bytes per block (8 bit/px). Srgb-color.
        Bc2RgbaUnormSrgb = 53,
        /// 4x4 block compressed texture. 16 bytes per block (8 bit/px). 4 color pallet + 8 alpha pallet.
        Bc3RgbaUnorm = 54,
        /// 4x4 block compressed texture. 16 bytes per block (8 bit/px). Srgb-color.
        Bc3RgbaUnormSrgb = 55,
        /// 4x4 block compressed texture. 8 bytes per block (4 bit/px). 8 color pallet. 8 bit R.
        Bc4RUnorm = 56,
        /// 4x4 block compressed texture. 8 bytes per block (4 bit/px). 8 color pallet. 8 bit R, signed.
        Bc4RSnorm = 57,
        /// 4x4 block compressed texture. 16 bytes per block (8 bit/px). 8 color red pallet + 8 color green pallet.
        Bc5RgUnorm = 58,
        /// 4x4 block compressed texture. 16 bytes per block (8 bit/px). Signed.
        Bc5RgSnorm = 59,
        /// 4x4 block compressed texture. 16 bytes per block (8 bit/px). Variable sized pallet. 16 bit unsigned float RGB.
        Bc6hRgbUfloat = 60,
        /// 4x4 block compressed texture. 16 bytes per block (8 bit/px). Variable sized pallet. 16 bit signed float RGB.
        Bc6hRgbFloat = 61,
        /// 4x4 block compressed texture. 16 bytes per block (8 bit/px). Variable sized pallet. 8 bit integer RGBA.
        Bc7RgbaUnorm = 62,
        /// 4x4 block compressed texture. 16 bytes per block (8 bit/px). Srgb-color.
        Bc7RgbaUnormSrgb = 63,
        /// 4x4 block compressed texture. 8 bytes per block (4 bit/px). Complex pallet. 8 bit integer RGB.
        Etc2Rgb8Unorm = 64,
        /// 4x4 block compressed texture. 8 bytes per block (4 bit/px). Srgb-color.
        Etc2Rgb8UnormSrgb = 65,
        /// 4x4 block compressed texture. 8 bytes per block (4 bit/px). 8 bit integer RGB + 1 bit alpha.
        Etc2Rgb8A1Unorm = 66,
        /// 4x4 block compressed texture. 8 bytes per block (4 bit/px). Srgb-color.
        Etc2Rgb8A1UnormSrgb = 67,
        /// 4x4 block compressed texture. 16 bytes per block (8 bit/px). 8 bit integer RGB + 8 bit alpha.
        Etc2Rgba8Unorm = 68,
        /// 4x4 block compressed texture. 16 bytes per block (8 bit/px). Srgb-color.
        Etc2Rgba8UnormSrgb = 69,
        /// 4x4 block compressed texture. 8 bytes per block (4 bit/px). 11 bit integer R.
        EacR11Unorm = 70,
        /// 4x4 block compressed texture. 8 bytes per block (4 bit/px). 11 bit integer R, signed.
        EacR11Snorm = 71,
        /// 4x4 block compressed texture. 16 bytes per block (8 bit/px). 11 bit integer R + 11 bit integer G.
        EacRg11Unorm = 72,
        /// 4x4 block compressed texture. 16 bytes per block (8 bit/px). Signed.
        EacRg11Snorm = 73,
        /// 4x4 block ASTC texture, linear.
        Astc4x4Unorm = 74,
        /// 4x4 block ASTC texture, srgb.
        Astc4x4UnormSrgb = 75,
        /// 5x4 block ASTC texture, linear.
        Astc5x4Unorm = 76,
        /// 5x4 block ASTC texture, srgb.
        Astc5x4UnormSrgb = 77,
        /// 5x5 block ASTC texture, linear.
        Astc5x5Unorm = 78,
        /// 5x5 block ASTC texture, srgb.
        Astc5x5UnormSrgb = 79,
        /// 6x5 block ASTC texture, linear.
        Astc6x5Unorm = 80,
        /// 6x5 block ASTC texture, srgb.
        Astc6x5UnormSrgb = 81,
        /// 6x6 block ASTC texture, linear.
        Astc6x6Unorm = 82,
        /// 6x6 block ASTC texture, srgb.
        Astc6x6UnormSrgb = 83,
        /// 8x5 block ASTC texture, linear.
        Astc8x5Unorm = 84,
        /// 8x5 block ASTC texture, srgb.
        Astc8x5UnormSrgb = 85,
        /// 8x6 block ASTC texture, linear.
        Astc8x6Unorm = 86,
        /// 8x6 block ASTC texture, srgb.
        Astc8x6UnormSrgb = 87,
        /// 8x8 block ASTC texture, linear.
        Astc8x8Unorm = 88,
        /// 8x8 block ASTC texture, srgb.
        Astc8x8UnormSrgb = 89,
        /// 10x5 block ASTC texture, linear.
        Astc10x5Unorm = 90,
        /// 10x5 block ASTC texture, srgb.
        Astc10x5UnormSrgb = 91,
        /// 10x6 block ASTC texture, linear.
        Astc10x6Unorm = 92,
        /// 10x6 block ASTC texture, srgb.
        Astc10x6UnormSrgb = 93,
        /// 10x8 block ASTC texture, linear.
        Astc10x8Unorm = 94,
        /// 10x8 block ASTC texture, srgb.
        Astc10x8UnormSrgb = 95,
        /// 10x10 block ASTC texture, linear.
        Astc10x10Unorm = 96,
        /// 10x10 block ASTC texture, srgb.
        Astc10x10UnormSrgb = 97,
        /// 12x10 block ASTC texture, linear.
        Astc12x10Unorm = 98,
        /// 12x10 block ASTC texture, srgb.
        Astc12x10UnormSrgb = 99,
        /// 12x12 block ASTC texture, linear.
        Astc12x12Unorm = 100,
        /// 12x12 block ASTC texture, srgb.
        Astc12x12UnormSrgb = 101,
    }
}

impl TextureFormat {
    /// Returns `true` for the 16-bit normalized formats that are only reachable through
    /// native extensions.
    pub fn is_native_extension(self) -> bool {
        matches!(
            self,
            Self::R16Unorm
                | Self::R16Snorm
                | Self::Rg16Unorm
                | Self::Rg16Snorm
                | Self::Rgba16Unorm
                | Self::Rgba16Snorm
        )
    }

    /// Returns `true` if `self` is a depth or stencil component of the given [`TextureAspect`].
    pub fn has_aspect(self, aspect: TextureAspect) -> bool {
        let depth = matches!(
            self,
            Self::Depth16Unorm
                | Self::Depth24Plus
                | Self::Depth24PlusStencil8
                | Self::Depth32Float
                | Self::Depth32FloatStencil8
        );
        let stencil = matches!(
            self,
            Self::Stencil8 | Self::Depth24PlusStencil8 | Self::Depth32FloatStencil8
        );
        match aspect {
            TextureAspect::Undefined | TextureAspect::All => true,
            TextureAspect::DepthOnly => depth,
            TextureAspect::StencilOnly => stencil,
        }
    }

    /// Returns `true` for the sRGB-encoded formats.
    pub fn is_srgb(self) -> bool {
        matches!(
            self,
            Self::Rgba8UnormSrgb
                | Self::Bgra8UnormSrgb
                | Self::Bc1RgbaUnormSrgb
                | Self::Bc2RgbaUnormSrgb
                | Self::Bc3RgbaUnormSrgb
                | Self::Bc7RgbaUnormSrgb
                | Self::Etc2Rgb8UnormSrgb
                | Self::Etc2Rgb8A1UnormSrgb
                | Self::Etc2Rgba8UnormSrgb
                | Self::Astc4x4UnormSrgb
                | Self::Astc5x4UnormSrgb
                | Self::Astc5x5UnormSrgb
                | Self::Astc6x5UnormSrgb
                | Self::Astc6x6UnormSrgb
                | Self::Astc8x5UnormSrgb
                | Self::Astc8x6UnormSrgb
                | Self::Astc8x8UnormSrgb
                | Self::Astc10x5UnormSrgb
                | Self::Astc10x6UnormSrgb
                | Self::Astc10x8UnormSrgb
                | Self::Astc10x10UnormSrgb
                | Self::Astc12x10UnormSrgb
                | Self::Astc12x12UnormSrgb
        )
    }

    /// Size in bytes of one texel, for the uncompressed single-plane color formats.
    pub fn block_copy_size(self) -> Option<u32> {
        Some(match self {
            Self::R8Unorm | Self::R8Snorm | Self::R8Uint | Self::R8Sint | Self::Stencil8 => 1,
            Self::R16Uint
            | Self::R16Sint
            | Self::R16Unorm
            | Self::R16Snorm
            | Self::R16Float
            | Self::Rg8Unorm
            | Self::Rg8Snorm
            | Self::Rg8Uint
            | Self::Rg8Sint
            | Self::Depth16Unorm => 2,
            Self::R32Float
            | Self::R32Uint
            | Self::R32Sint
            | Self::Rg16Uint
            | Self::Rg16Sint
            | Self::Rg16Unorm
            | Self::Rg16Snorm
            | Self::Rg16Float
            | Self::Rgba8Unorm
            | Self::Rgba8UnormSrgb
            | Self::Rgba8Snorm
            | Self::Rgba8Uint
            | Self::Rgba8Sint
            | Self::Bgra8Unorm
            | Self::Bgra8UnormSrgb
            | Self::Rgb10a2Uint
            | Self::Rgb10a2Unorm
            | Self::Rg11b10Ufloat
            | Self::Rgb9e5Ufloat
            | Self::Depth32Float => 4,
            Self::Rg32Float
            | Self::Rg32Uint
            | Self::Rg32Sint
            | Self::Rgba16Uint
            | Self::Rgba16Sint
            | Self::Rgba16Unorm
            | Self::Rgba16Snorm
            | Self::Rgba16Float => 8,
            Self::Rgba32Float | Self::Rgba32Uint | Self::Rgba32Sint => 16,
            _ => return None,
        })
    }
}

host_enum! {
    /// Vertex Format for a [`VertexAttribute`](crate::VertexAttribute) (input).
    pub enum VertexFormat {
        /// Not specified.
        Undefined = 0,
        /// Two unsigned bytes (u8). `vec2<u32>` in shaders.
        Uint8x2 = 1,
        /// Four unsigned bytes (u8). `vec4<u32>` in shaders.
        Uint8x4 = 2,
        /// Two signed bytes (i8). `vec2<i32>` in shaders.
        Sint8x2 = 3,
        /// Four signed bytes (i8). `vec4<i32>` in shaders.
        Sint8x4 = 4,
        /// Two unsigned bytes (u8). [0, 255] converted to float [0, 1] `vec2<f32>` in shaders.
        Unorm8x2 = 5,
        /// Four unsigned bytes (u8). [0, 255] converted to float [0, 1] `vec4<f32>` in shaders.
        Unorm8x4 = 6,
        /// Two signed bytes (i8). [-127, 127] converted to float [-1, 1] `vec2<f32>` in shaders.
        Snorm8x2 = 7,
        /// Four signed bytes (i8). [-127, 127] converted to float [-1, 1] `vec4<f32>` in shaders.
        Snorm8x4 = 8,
        /// Two unsigned shorts (u16). `vec2<u32>` in shaders.
        Uint16x2 = 9,
        /// Four unsigned shorts (u16). `vec4<u32>` in shaders.
        Uint16x4 = 10,
        /// Two signed shorts (i16). `vec2<i32>` in shaders.
        Sint16x2 = 11,
        /// Four signed shorts (i16). `vec4<i32>` in shaders.
        Sint16x4 = 12,
        /// Two unsigned shorts (u16). [0, 65535] converted to float [0, 1] `vec2<f32>` in shaders.
        Unorm16x2 = 13,
        /// Four unsigned shorts (u16). [0, 65535] converted to float [0, 1] `vec4<f32>` in shaders.
        Unorm16x4 = 14,
        /// Two signed shorts (i16). [-32767, 32767] converted to float [-1, 1] `vec2<f32>` in shaders.
        Snorm16x2 = 15,
        /// Four signed shorts (i16). [-32767, 32767] converted to float [-1, 1] `vec4<f32>` in shaders.
        Snorm16x4 = 16,
        /// Two half-precision floats (no Rust equiv). `vec2<f32>` in shaders.
        Float16x2 = 17,
        /// Four half-precision floats (no Rust equiv). `vec4<f32>` in shaders.
        Float16x4 = 18,
        /// One single-precision float (f32). `f32` in shaders.
        Float32 = 19,
        /// Two single-precision floats (f32). `vec2<f32>` in shaders.
        Float32x2 = 20,
        /// Three single-precision floats (f32). `vec3<f32>` in shaders.
        Float32x3 = 21,
        /// Four single-precision floats (f32). `vec4<f32>` in shaders.
        Float32x4 = 22,
        /// One unsigned int (u32). `u32` in shaders.
        Uint32 = 23,
        /// Two unsigned ints (u32). `vec2<u32>` in shaders.
        Uint32x2 = 24,
        /// Three unsigned ints (u32). `vec3<u32>` in shaders.
        Uint32x3 = 25,
        /// Four unsigned ints (u32). `vec4<u32>` in shaders.
        Uint32x4 = 26,
        /// One signed int (i32). `i32` in shaders.
        Sint32 = 27,
        /// Two signed ints (i32). `vec2<i32>` in shaders.
        Sint32x2 = 28,
        /// Three signed ints (i32). `vec3<i32>` in shaders.
        Sint32x3 = 29,
        /// Four signed ints (i32). `vec4<i32>` in shaders.
        Sint32x4 = 30,
        /// Three unsigned 10-bit integers and one 2-bit integer, packed into a 32-bit integer (u32).
        Unorm10_10_10_2 = 31,
    }
}

impl VertexFormat {
    /// Returns the byte size of the format.
    pub const fn size(&self) -> u64 {
        match self {
            Self::Undefined => 0,
            Self::Uint8x2 | Self::Sint8x2 | Self::Unorm8x2 | Self::Snorm8x2 => 2,
            Self::Uint8x4
            | Self::Sint8x4
            | Self::Unorm8x4
            | Self::Snorm8x4
            | Self::Uint16x2
            | Self::Sint16x2
            | Self::Unorm16x2
            | Self::Snorm16x2
            | Self::Float16x2
            | Self::Float32
            | Self::Uint32
            | Self::Sint32
            | Self::Unorm10_10_10_2 => 4,
            Self::Uint16x4
            | Self::Sint16x4
            | Self::Unorm16x4
            | Self::Snorm16x4
            | Self::Float16x4
            | Self::Float32x2
            | Self::Uint32x2
            | Self::Sint32x2 => 8,
            Self::Float32x3 | Self::Uint32x3 | Self::Sint32x3 => 12,
            Self::Float32x4 | Self::Uint32x4 | Self::Sint32x4 => 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_are_dense() {
        for (i, &format) in TextureFormat::ALL.iter().enumerate() {
            assert_eq!(format as u32, i as u32, "{format:?}");
        }
        for (i, &format) in VertexFormat::ALL.iter().enumerate() {
            assert_eq!(format as u32, i as u32, "{format:?}");
        }
    }

    #[test]
    fn extension_formats() {
        let count = TextureFormat::ALL
            .iter()
            .filter(|f| f.is_native_extension())
            .count();
        assert_eq!(count, 6);
    }

    #[test]
    fn aspects() {
        assert!(TextureFormat::Depth24PlusStencil8.has_aspect(TextureAspect::StencilOnly));
        assert!(!TextureFormat::Depth32Float.has_aspect(TextureAspect::StencilOnly));
        assert!(TextureFormat::Rgba8Unorm.has_aspect(TextureAspect::All));
    }
}
