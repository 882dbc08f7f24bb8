//! Surface creation, one factory per windowing system.
//!
//! Every factory builds the matching `SurfaceSource*` fragment and chains it
//! into a surface descriptor. Factories are only compiled for the platforms
//! whose windowing system they target.

use std::{ffi::c_void, ptr};

use raw_window_handle::{HasDisplayHandle, HasWindowHandle, RawDisplayHandle, RawWindowHandle};

use crate::{
    ffi::{self, procs},
    handle::RawHandle,
    native,
    wire::{self, StringView},
    Error, Instance, Label, Result, Surface,
};

impl Instance {
    /// Chains `source` into a surface descriptor and creates the surface.
    ///
    /// # Safety
    ///
    /// `S` must be a `repr(C)` surface source whose first field is its
    /// [`wire::ChainedStruct`].
    unsafe fn create_surface_from_source<S>(&self, source: &S, label: Label<'_>) -> Result<Surface> {
        let instance = self.handle.get()?;
        let desc = wire::SurfaceDescriptor {
            next_in_chain: ptr::from_ref(source).cast(),
            label: StringView::from_label(label),
        };
        // SAFETY: the descriptor and its source live until the call returns.
        let raw = unsafe { procs::INSTANCE_CREATE_SURFACE.invoke(&[instance, ffi::addr(&desc)]) }?;
        Ok(Surface {
            handle: RawHandle::new(raw, "Surface", &procs::SURFACE_RELEASE)?,
        })
    }

    /// Creates a surface from a `CAMetalLayer`.
    ///
    /// # Safety
    ///
    /// `layer` must be a valid `CAMetalLayer` that outlives the surface.
    #[cfg(any(target_os = "macos", target_os = "ios"))]
    pub unsafe fn create_surface_from_metal_layer(
        &self,
        layer: *mut c_void,
        label: Label<'_>,
    ) -> Result<Surface> {
        let source = wire::SurfaceSourceMetalLayer {
            chain: wire::ChainedStruct::new(native::s_type::SURFACE_SOURCE_METAL_LAYER),
            layer,
        };
        // SAFETY: `source` starts with its chain header.
        unsafe { self.create_surface_from_source(&source, label) }
    }

    /// Creates a surface from a Win32 window.
    ///
    /// # Safety
    ///
    /// `hwnd` must be a valid window of the module `hinstance` and outlive the surface.
    #[cfg(windows)]
    pub unsafe fn create_surface_from_windows_hwnd(
        &self,
        hinstance: *mut c_void,
        hwnd: *mut c_void,
        label: Label<'_>,
    ) -> Result<Surface> {
        let source = wire::SurfaceSourceWindowsHwnd {
            chain: wire::ChainedStruct::new(native::s_type::SURFACE_SOURCE_WINDOWS_HWND),
            hinstance,
            hwnd,
        };
        // SAFETY: `source` starts with its chain header.
        unsafe { self.create_surface_from_source(&source, label) }
    }

    /// Creates a surface from an Xlib window.
    ///
    /// # Safety
    ///
    /// `display` must be an open Xlib `Display` and `window` one of its windows,
    /// both outliving the surface.
    #[cfg(all(unix, not(any(target_os = "macos", target_os = "ios", target_os = "android"))))]
    pub unsafe fn create_surface_from_xlib_window(
        &self,
        display: *mut c_void,
        window: u64,
        label: Label<'_>,
    ) -> Result<Surface> {
        let source = wire::SurfaceSourceXlibWindow {
            chain: wire::ChainedStruct::new(native::s_type::SURFACE_SOURCE_XLIB_WINDOW),
            display,
            window,
        };
        // SAFETY: `source` starts with its chain header.
        unsafe { self.create_surface_from_source(&source, label) }
    }

    /// Creates a surface from a Wayland surface.
    ///
    /// # Safety
    ///
    /// `display` must be a connected `wl_display` and `surface` one of its
    /// `wl_surface`s, both outliving the surface.
    #[cfg(all(unix, not(any(target_os = "macos", target_os = "ios", target_os = "android"))))]
    pub unsafe fn create_surface_from_wayland_surface(
        &self,
        display: *mut c_void,
        surface: *mut c_void,
        label: Label<'_>,
    ) -> Result<Surface> {
        let source = wire::SurfaceSourceWaylandSurface {
            chain: wire::ChainedStruct::new(native::s_type::SURFACE_SOURCE_WAYLAND_SURFACE),
            display,
            surface,
        };
        // SAFETY: `source` starts with its chain header.
        unsafe { self.create_surface_from_source(&source, label) }
    }

    /// Creates a surface from an XCB window.
    ///
    /// # Safety
    ///
    /// `connection` must be an open `xcb_connection_t` and `window` one of its
    /// windows, both outliving the surface.
    #[cfg(all(unix, not(any(target_os = "macos", target_os = "ios", target_os = "android"))))]
    pub unsafe fn create_surface_from_xcb_window(
        &self,
        connection: *mut c_void,
        window: u32,
        label: Label<'_>,
    ) -> Result<Surface> {
        let source = wire::SurfaceSourceXcbWindow {
            chain: wire::ChainedStruct::new(native::s_type::SURFACE_SOURCE_XCB_WINDOW),
            connection,
            window,
            _pad: 0,
        };
        // SAFETY: `source` starts with its chain header.
        unsafe { self.create_surface_from_source(&source, label) }
    }

    /// Creates a surface from an `ANativeWindow`.
    ///
    /// # Safety
    ///
    /// `window` must be a valid `ANativeWindow` that outlives the surface.
    #[cfg(target_os = "android")]
    pub unsafe fn create_surface_from_android_native_window(
        &self,
        window: *mut c_void,
        label: Label<'_>,
    ) -> Result<Surface> {
        let source = wire::SurfaceSourceAndroidNativeWindow {
            chain: wire::ChainedStruct::new(native::s_type::SURFACE_SOURCE_ANDROID_NATIVE_WINDOW),
            window,
        };
        // SAFETY: `source` starts with its chain header.
        unsafe { self.create_surface_from_source(&source, label) }
    }

    /// Creates a surface from a raw display and window handle pair.
    ///
    /// Pairs the native library has no source for, and pairs of a windowing
    /// system this platform does not have, fail with [`Error::InvalidArgument`].
    /// AppKit and UIKit views are not accepted; pass their `CAMetalLayer` to
    /// `create_surface_from_metal_layer` instead.
    ///
    /// # Safety
    ///
    /// The handles must be valid and outlive the surface.
    #[allow(unused_variables, unreachable_patterns)]
    pub unsafe fn create_surface_from_raw(
        &self,
        display: RawDisplayHandle,
        window: RawWindowHandle,
    ) -> Result<Surface> {
        log::debug!("Creating surface from {:?}", window);
        // SAFETY: forwarded from the caller.
        unsafe {
            match (display, window) {
                #[cfg(windows)]
                (_, RawWindowHandle::Win32(handle)) => self.create_surface_from_windows_hwnd(
                    handle.hinstance.map_or(ptr::null_mut(), |h| h.get() as *mut c_void),
                    handle.hwnd.get() as *mut c_void,
                    None,
                ),
                #[cfg(all(unix, not(any(target_os = "macos", target_os = "ios", target_os = "android"))))]
                (RawDisplayHandle::Xlib(display), RawWindowHandle::Xlib(handle)) => self
                    .create_surface_from_xlib_window(
                        display.display.map_or(ptr::null_mut(), |d| d.as_ptr()),
                        handle.window as u64,
                        None,
                    ),
                #[cfg(all(unix, not(any(target_os = "macos", target_os = "ios", target_os = "android"))))]
                (RawDisplayHandle::Xcb(display), RawWindowHandle::Xcb(handle)) => self
                    .create_surface_from_xcb_window(
                        display.connection.map_or(ptr::null_mut(), |c| c.as_ptr()),
                        handle.window.get(),
                        None,
                    ),
                #[cfg(all(unix, not(any(target_os = "macos", target_os = "ios", target_os = "android"))))]
                (RawDisplayHandle::Wayland(display), RawWindowHandle::Wayland(handle)) => self
                    .create_surface_from_wayland_surface(
                        display.display.as_ptr(),
                        handle.surface.as_ptr(),
                        None,
                    ),
                #[cfg(target_os = "android")]
                (_, RawWindowHandle::AndroidNdk(handle)) => self
                    .create_surface_from_android_native_window(handle.a_native_window.as_ptr(), None),
                _ => Err(Error::InvalidArgument(
                    "window handle has no surface source on this platform",
                )),
            }
        }
    }

    /// Creates a surface from a window that exposes its raw handles.
    ///
    /// # Safety
    ///
    /// `window` must outlive the surface.
    pub unsafe fn create_surface_unsafe<W>(&self, window: &W) -> Result<Surface>
    where
        W: HasWindowHandle + HasDisplayHandle + ?Sized,
    {
        let display = window
            .display_handle()
            .map_err(|_| Error::InvalidArgument("display handle unavailable"))?;
        let handle = window
            .window_handle()
            .map_err(|_| Error::InvalidArgument("window handle unavailable"))?;
        // SAFETY: forwarded from the caller.
        unsafe { self.create_surface_from_raw(display.as_raw(), handle.as_raw()) }
    }
}

#[cfg(test)]
mod tests {
    use std::ptr::NonNull;

    use raw_window_handle::{
        AppKitWindowHandle, DisplayHandle, RawDisplayHandle, RawWindowHandle, WebDisplayHandle,
        WebWindowHandle,
    };

    use super::*;

    fn released() -> Instance {
        Instance {
            handle: RawHandle::null("Instance", &procs::INSTANCE_RELEASE),
        }
    }

    #[test]
    fn unsupported_handles_are_rejected() {
        let instance = released();
        let result = unsafe {
            instance.create_surface_from_raw(
                RawDisplayHandle::Web(WebDisplayHandle::new()),
                RawWindowHandle::Web(WebWindowHandle::new(1)),
            )
        };
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn appkit_views_need_a_layer() {
        let instance = released();
        let view = NonNull::<u8>::dangling().cast::<c_void>();
        let result = unsafe {
            instance.create_surface_from_raw(
                DisplayHandle::appkit().as_raw(),
                RawWindowHandle::AppKit(AppKitWindowHandle::new(view)),
            )
        };
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[cfg(all(unix, not(any(target_os = "macos", target_os = "ios", target_os = "android"))))]
    #[test]
    fn released_instance_creates_no_surface() {
        let instance = released();
        let result = unsafe { instance.create_surface_from_xlib_window(ptr::null_mut(), 1, None) };
        assert!(matches!(result, Err(Error::Released { kind: "Instance" })));
    }
}
