use std::ptr;

use smallvec::SmallVec;

use crate::{
    conv::SurfaceStatus,
    ffi::{self, procs},
    handle::{impl_handle, RawHandle},
    native, wire, *,
};

/// Handle to a presentable surface.
///
/// A `Surface` represents a platform-specific surface (e.g. a window) onto which rendered images may
/// be presented. A `Surface` may be created with the `Instance::create_surface_*` factories, or
/// with [`Instance::create_surface_from_raw`].
///
/// This type is unique to the native binding. In the WebGPU specification,
/// [`GPUCanvasContext`](https://gpuweb.github.io/gpuweb/#canvas-context)
/// serves a similar role.
#[derive(Debug)]
pub struct Surface {
    pub(crate) handle: RawHandle,
}
static_assertions::assert_impl_all!(Surface: Send, Sync);

impl_handle!(Surface);

/// Describes a [`Surface`] configuration.
///
/// For use with [`Surface::configure`].
pub type SurfaceConfiguration = wgt::SurfaceConfiguration<Vec<TextureFormat>>;
static_assertions::assert_impl_all!(SurfaceConfiguration: Send, Sync);

/// Surface texture that can be rendered to.
///
/// Returned by [`Surface::get_current_texture`]. Draw to it, submit, then call
/// [`Surface::present`].
#[derive(Debug)]
pub struct SurfaceTexture {
    /// Accessible view of the frame.
    pub texture: Texture,
    /// `true` if the acquired buffer can still be used for rendering,
    /// but should be recreated for maximum performance.
    pub suboptimal: bool,
    outdated: bool,
}
static_assertions::assert_impl_all!(SurfaceTexture: Send, Sync);

impl SurfaceTexture {
    /// Returns `true` if the surface reported itself outdated.
    ///
    /// The texture may still be drawn to and presented, but the surface must be
    /// configured again before acquiring the next one.
    pub fn needs_reconfigure(&self) -> bool {
        self.outdated
    }

    /// The [`SurfaceError::NeedsReconfigure`] this texture carries, if any.
    pub fn error(&self) -> Option<SurfaceError> {
        self.outdated.then_some(SurfaceError::NeedsReconfigure)
    }
}

impl Surface {
    /// Returns the capabilities of the surface when used with the given adapter.
    ///
    /// Formats the native library reports without a public name are left out.
    pub fn get_capabilities(&self, adapter: &Adapter) -> Result<SurfaceCapabilities> {
        let surface = self.handle.get()?;
        let adapter = adapter.handle.get()?;
        let mut caps = wire::SurfaceCapabilities::default();
        // SAFETY: `caps` is a valid out-parameter.
        let status = unsafe {
            procs::SURFACE_GET_CAPABILITIES.invoke(&[surface, adapter, ffi::addr_mut(&mut caps)])
        }?;
        if status as u32 != native::status::SUCCESS {
            return Err(Error::Status {
                operation: "Surface::get_capabilities",
            });
        }
        // SAFETY: the native library filled the arrays.
        let (formats, present_modes, alpha_modes) = unsafe {
            (
                wire::read_array(caps.formats, caps.format_count),
                wire::read_array(caps.present_modes, caps.present_mode_count),
                wire::read_array(caps.alpha_modes, caps.alpha_mode_count),
            )
        };
        let usages = conv::texture_usages_from_native(caps.usages);
        // SAFETY: the arrays have been copied out.
        unsafe { procs::SURFACE_CAPABILITIES_FREE_MEMBERS.call_with(&[], caps) }?;
        Ok(SurfaceCapabilities {
            usages,
            formats: formats
                .into_iter()
                .filter_map(conv::texture_format_from_raw)
                .filter(|&f| f != TextureFormat::Undefined)
                .collect(),
            present_modes: present_modes
                .into_iter()
                .filter_map(|m| PresentMode::from_raw(conv::present_mode_from_native(m)))
                .collect(),
            alpha_modes: alpha_modes
                .into_iter()
                .filter_map(|m| CompositeAlphaMode::from_raw(conv::composite_alpha_mode_from_native(m)))
                .collect(),
        })
    }

    /// Return a default `SurfaceConfiguration` from width and height to use for the [`Surface`] with this adapter.
    ///
    /// Returns `None` if the surface isn't supported by this adapter.
    pub fn get_default_config(
        &self,
        adapter: &Adapter,
        width: u32,
        height: u32,
    ) -> Result<Option<SurfaceConfiguration>> {
        let caps = self.get_capabilities(adapter)?;
        let Some(&format) = caps.formats.first() else {
            return Ok(None);
        };
        Ok(Some(SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: PresentMode::Fifo,
            alpha_mode: caps.alpha_modes.first().copied().unwrap_or_default(),
            view_formats: Vec::new(),
        }))
    }

    /// Initializes [`Surface`] for presentation.
    ///
    /// Configuring again replaces the previous configuration.
    pub fn configure(&self, device: &Device, config: &SurfaceConfiguration) -> Result<()> {
        let surface = self.handle.get()?;
        let raw_config = map_configuration(device.handle.get()?, config);
        let view_formats = view_formats(config);
        let raw_config = wire::SurfaceConfiguration {
            view_format_count: view_formats.len(),
            view_formats: wire::array_ptr(&view_formats),
            ..raw_config
        };
        log::debug!(
            "Configuring surface {:#x} as {}x{} {:?}",
            surface,
            config.width,
            config.height,
            config.format
        );
        // SAFETY: the configuration and its view formats live until the call returns.
        unsafe { procs::SURFACE_CONFIGURE.invoke(&[surface, ffi::addr(&raw_config)]) }.map(|_| ())
    }

    /// Removes the configuration, returning the surface to its unconfigured state.
    pub fn unconfigure(&self) -> Result<()> {
        let surface = self.handle.get()?;
        // SAFETY: plain handle argument.
        unsafe { procs::SURFACE_UNCONFIGURE.invoke(&[surface]) }.map(|_| ())
    }

    /// Returns the next texture to be presented by the surface for drawing.
    ///
    /// An outdated surface still yields a texture, flagged through
    /// [`SurfaceTexture::needs_reconfigure`]. Every other failing status is
    /// returned as the matching [`SurfaceError`].
    pub fn get_current_texture(&self) -> Result<SurfaceTexture> {
        let surface = self.handle.get()?;
        let mut raw = wire::SurfaceTexture::default();
        // SAFETY: `raw` is a valid out-parameter.
        unsafe { procs::SURFACE_GET_CURRENT_TEXTURE.invoke(&[surface, ffi::addr_mut(&mut raw)]) }?;
        let (suboptimal, outdated) = match conv::map_surface_status(raw.status) {
            SurfaceStatus::Good { suboptimal } => (suboptimal, false),
            SurfaceStatus::Outdated if raw.texture != 0 => (false, true),
            SurfaceStatus::Outdated => return Err(SurfaceError::NeedsReconfigure.into()),
            SurfaceStatus::Failed(error) => {
                if raw.texture != 0 {
                    drop(RawHandle::retained(raw.texture, "Texture", &procs::TEXTURE_RELEASE));
                }
                return Err(error.into());
            }
        };
        Ok(SurfaceTexture {
            texture: Texture {
                handle: RawHandle::new(raw.texture, "Texture", &procs::TEXTURE_RELEASE)?,
            },
            suboptimal,
            outdated,
        })
    }

    /// Schedule the current texture to be presented on the surface.
    pub fn present(&self) -> Result<()> {
        let surface = self.handle.get()?;
        // SAFETY: plain handle argument.
        let status = unsafe { procs::SURFACE_PRESENT.invoke(&[surface]) }?;
        if status as u32 != native::status::SUCCESS {
            return Err(Error::Status {
                operation: "Surface::present",
            });
        }
        Ok(())
    }
}

fn view_formats(config: &SurfaceConfiguration) -> SmallVec<[u32; 4]> {
    config
        .view_formats
        .iter()
        .map(|&f| conv::map_texture_format(f))
        .collect()
}

/// Everything but the view formats, which must be stored by the caller.
fn map_configuration(device: wire::Handle, config: &SurfaceConfiguration) -> wire::SurfaceConfiguration {
    wire::SurfaceConfiguration {
        next_in_chain: ptr::null(),
        device,
        format: conv::map_texture_format(config.format),
        _pad: 0,
        usage: conv::map_texture_usages(config.usage),
        width: config.width,
        height: config.height,
        view_format_count: 0,
        view_formats: ptr::null(),
        alpha_mode: conv::composite_alpha_mode_to_native(config.alpha_mode.to_raw()),
        present_mode: conv::present_mode_to_native(config.present_mode.to_raw()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration() {
        let config = SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format: TextureFormat::Bgra8UnormSrgb,
            width: 640,
            height: 480,
            present_mode: PresentMode::Mailbox,
            alpha_mode: CompositeAlphaMode::Opaque,
            view_formats: vec![TextureFormat::Bgra8Unorm],
        };
        let raw = map_configuration(0x10, &config);
        assert_eq!(raw.device, 0x10);
        assert_eq!(raw.format, native::texture_format::BGRA8_UNORM_SRGB);
        assert_eq!(raw.usage, TextureUsages::RENDER_ATTACHMENT.bits() as u64);
        assert_eq!((raw.width, raw.height), (640, 480));
        assert_eq!(raw.present_mode, PresentMode::Mailbox.to_raw());
        assert_eq!(raw.alpha_mode, CompositeAlphaMode::Opaque.to_raw());
        assert_eq!(
            view_formats(&config).as_slice(),
            &[native::texture_format::BGRA8_UNORM]
        );
    }

    #[test]
    fn released_surface_does_not_reach_native() {
        let surface = Surface {
            handle: RawHandle::null("Surface", &procs::SURFACE_RELEASE),
        };
        assert!(matches!(
            surface.get_current_texture(),
            Err(Error::Released { kind: "Surface" })
        ));
        assert!(matches!(surface.present(), Err(Error::Released { .. })));
        assert!(matches!(surface.unconfigure(), Err(Error::Released { .. })));
    }
}
