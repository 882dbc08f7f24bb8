use std::ptr;

use crate::{
    ffi::{self, procs},
    handle::{impl_handle, RawHandle},
    native,
    wire::{self, StringView},
    *,
};

/// Handle to a texture on the GPU.
///
/// It can be created with [`Device::create_texture`], or acquired from a
/// [`Surface`] with [`Surface::get_current_texture`].
///
/// Corresponds to [WebGPU `GPUTexture`](https://gpuweb.github.io/gpuweb/#texture-interface).
#[derive(Debug)]
pub struct Texture {
    pub(crate) handle: RawHandle,
}
static_assertions::assert_impl_all!(Texture: Send, Sync);

impl_handle!(Texture);

/// Describes a [`Texture`].
///
/// For use with [`Device::create_texture`].
///
/// Corresponds to [WebGPU `GPUTextureDescriptor`](
/// https://gpuweb.github.io/gpuweb/#dictdef-gputexturedescriptor).
pub type TextureDescriptor<'a> = wgt::TextureDescriptor<Label<'a>, &'a [TextureFormat]>;
static_assertions::assert_impl_all!(TextureDescriptor<'_>: Send, Sync);

/// View of a texture which can be used to copy to/from a buffer/texture.
///
/// Corresponds to [WebGPU `GPUTexelCopyTextureInfo`](
/// https://gpuweb.github.io/gpuweb/#dictdef-gpuimagecopytexture).
pub type TexelCopyTextureInfo<'a> = wgt::TexelCopyTextureInfo<&'a Texture>;
static_assertions::assert_impl_all!(TexelCopyTextureInfo<'_>: Send, Sync);

/// View of a buffer which can be used to copy to/from a texture.
///
/// Corresponds to [WebGPU `GPUTexelCopyBufferInfo`](
/// https://gpuweb.github.io/gpuweb/#dictdef-gpuimagecopybuffer).
pub type TexelCopyBufferInfo<'a> = wgt::TexelCopyBufferInfo<&'a Buffer>;
static_assertions::assert_impl_all!(TexelCopyBufferInfo<'_>: Send, Sync);

impl Texture {
    /// Creates a view of this texture.
    ///
    /// `None` fields of `desc` are derived from the texture.
    pub fn create_view(&self, desc: &TextureViewDescriptor<'_>) -> Result<TextureView> {
        let texture = self.handle.get()?;
        let raw_desc = map_view_descriptor(desc);
        // SAFETY: the descriptor lives until the call returns.
        let raw = unsafe { procs::TEXTURE_CREATE_VIEW.invoke(&[texture, ffi::addr(&raw_desc)]) }?;
        Ok(TextureView {
            handle: RawHandle::new(raw, "TextureView", &procs::TEXTURE_VIEW_RELEASE)?,
        })
    }

    /// Destroy the associated native resources as soon as possible.
    pub fn destroy(&self) -> Result<()> {
        let texture = self.handle.get()?;
        // SAFETY: plain handle argument.
        unsafe { procs::TEXTURE_DESTROY.invoke(&[texture]) }.map(|_| ())
    }

    /// Make a `TexelCopyTextureInfo` representing the whole texture.
    pub fn as_image_copy(&self) -> TexelCopyTextureInfo<'_> {
        TexelCopyTextureInfo {
            texture: self,
            mip_level: 0,
            origin: Origin3d::ZERO,
            aspect: TextureAspect::All,
        }
    }

    fn get_u32(&self, proc: &'static ffi::Procedure) -> Result<u32> {
        let texture = self.handle.get()?;
        // SAFETY: plain handle argument.
        Ok(unsafe { proc.invoke(&[texture]) }? as u32)
    }

    /// Returns the size of this `Texture`.
    pub fn size(&self) -> Result<Extent3d> {
        Ok(Extent3d {
            width: self.width()?,
            height: self.height()?,
            depth_or_array_layers: self.depth_or_array_layers()?,
        })
    }

    /// Returns the width of this `Texture`.
    pub fn width(&self) -> Result<u32> {
        self.get_u32(&procs::TEXTURE_GET_WIDTH)
    }

    /// Returns the height of this `Texture`.
    pub fn height(&self) -> Result<u32> {
        self.get_u32(&procs::TEXTURE_GET_HEIGHT)
    }

    /// Returns the depth or layer count of this `Texture`.
    pub fn depth_or_array_layers(&self) -> Result<u32> {
        self.get_u32(&procs::TEXTURE_GET_DEPTH_OR_ARRAY_LAYERS)
    }

    /// Returns the mip_level_count of this `Texture`.
    pub fn mip_level_count(&self) -> Result<u32> {
        self.get_u32(&procs::TEXTURE_GET_MIP_LEVEL_COUNT)
    }

    /// Returns the sample_count of this `Texture`.
    pub fn sample_count(&self) -> Result<u32> {
        self.get_u32(&procs::TEXTURE_GET_SAMPLE_COUNT)
    }

    /// Returns the dimension of this `Texture`.
    pub fn dimension(&self) -> Result<Option<TextureDimension>> {
        let raw = self.get_u32(&procs::TEXTURE_GET_DIMENSION)?;
        Ok(TextureDimension::from_raw(conv::texture_dimension_from_native(raw)))
    }

    /// Returns the format of this `Texture`, or `None` for a native format
    /// without a public name.
    pub fn format(&self) -> Result<Option<TextureFormat>> {
        let raw = self.get_u32(&procs::TEXTURE_GET_FORMAT)?;
        Ok(conv::texture_format_from_raw(raw))
    }

    /// Returns the allowed usages of this `Texture`.
    pub fn usage(&self) -> Result<TextureUsages> {
        let texture = self.handle.get()?;
        // SAFETY: plain handle argument.
        let usage = unsafe { procs::TEXTURE_GET_USAGE.invoke(&[texture]) }?;
        Ok(conv::texture_usages_from_native(usage as u64))
    }
}

fn map_view_descriptor(desc: &TextureViewDescriptor<'_>) -> wire::TextureViewDescriptor {
    wire::TextureViewDescriptor {
        next_in_chain: ptr::null(),
        label: StringView::from_label(desc.label),
        format: conv::map_texture_format_opt(desc.format),
        dimension: desc
            .dimension
            .map_or(0, |d| conv::texture_view_dimension_to_native(d.to_raw())),
        base_mip_level: desc.base_mip_level,
        mip_level_count: desc
            .mip_level_count
            .unwrap_or(native::MIP_LEVEL_COUNT_UNDEFINED),
        base_array_layer: desc.base_array_layer,
        array_layer_count: desc
            .array_layer_count
            .unwrap_or(native::ARRAY_LAYER_COUNT_UNDEFINED),
        aspect: conv::texture_aspect_to_native(desc.aspect.to_raw()),
        _pad: 0,
        usage: desc.usage.map_or(0, conv::map_texture_usages),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_is_derived_from_the_texture() {
        let raw = map_view_descriptor(&TextureViewDescriptor::default());
        assert!(raw.label.is_null());
        assert_eq!(raw.format, native::texture_format::UNDEFINED);
        assert_eq!(raw.dimension, 0);
        assert_eq!(raw.mip_level_count, native::MIP_LEVEL_COUNT_UNDEFINED);
        assert_eq!(raw.array_layer_count, native::ARRAY_LAYER_COUNT_UNDEFINED);
        assert_eq!(raw.usage, 0);
    }

    #[test]
    fn explicit_view() {
        let raw = map_view_descriptor(&TextureViewDescriptor {
            label: Some("mip 2"),
            dimension: Some(TextureViewDimension::D2Array),
            base_mip_level: 2,
            mip_level_count: Some(1),
            array_layer_count: Some(6),
            ..Default::default()
        });
        assert_eq!(raw.label.length, 5);
        assert_eq!(raw.base_mip_level, 2);
        assert_eq!(raw.mip_level_count, 1);
        assert_eq!(raw.array_layer_count, 6);
        assert_eq!(raw.dimension, TextureViewDimension::D2Array.to_raw());
    }

    #[test]
    fn released_texture_does_not_reach_native() {
        let texture = Texture {
            handle: RawHandle::null("Texture", &procs::TEXTURE_RELEASE),
        };
        assert!(matches!(texture.width(), Err(Error::Released { kind: "Texture" })));
        assert!(matches!(texture.format(), Err(Error::Released { .. })));
        assert!(matches!(
            texture.create_view(&Default::default()),
            Err(Error::Released { .. })
        ));
    }
}
