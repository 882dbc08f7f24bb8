use raw_window_handle::{
    DisplayHandle, HandleError, HasDisplayHandle, HasWindowHandle, RawDisplayHandle,
    RawWindowHandle, WebDisplayHandle, WebWindowHandle, WindowHandle,
};
use wgpu_dyn::Error;

use crate::common::initialize_instance;

/// A window that was closed before the surface was created.
struct ClosedWindow;

impl HasWindowHandle for ClosedWindow {
    fn window_handle(&self) -> Result<WindowHandle<'_>, HandleError> {
        Err(HandleError::Unavailable)
    }
}

impl HasDisplayHandle for ClosedWindow {
    fn display_handle(&self) -> Result<DisplayHandle<'_>, HandleError> {
        Err(HandleError::Unavailable)
    }
}

#[test]
fn closed_window() {
    let Some(instance) = initialize_instance() else {
        return;
    };
    let result = unsafe { instance.create_surface_unsafe(&ClosedWindow) };
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn canvas_handles_have_no_native_surface() {
    let Some(instance) = initialize_instance() else {
        return;
    };
    let result = unsafe {
        instance.create_surface_from_raw(
            RawDisplayHandle::Web(WebDisplayHandle::new()),
            RawWindowHandle::Web(WebWindowHandle::new(7)),
        )
    };
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn released_instance_creates_no_surface() {
    let Some(mut instance) = initialize_instance() else {
        return;
    };
    instance.release();
    let result = unsafe { instance.create_surface_unsafe(&ClosedWindow) };
    // Handle extraction fails before the instance is consulted.
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
    assert!(matches!(
        instance.request_adapter(&Default::default()),
        Err(Error::Released { kind: "Instance" })
    ));
}
