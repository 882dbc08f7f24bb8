use wgpu_dyn::{BackendType, Error, Instance, InstanceDescriptor, InstanceFlags};

use crate::common::{initialize_instance, initialize_test};

#[test]
fn cold_start() {
    let Some(instance) = initialize_instance() else {
        return;
    };
    let adapter = match instance.request_adapter(&Default::default()) {
        Ok(adapter) => adapter,
        Err(e) => {
            log::warn!("Skipping test: no adapter ({e})");
            return;
        }
    };
    let info = adapter.get_info().unwrap();
    log::info!("Adapter: {info:?}");
    assert!(!info.vendor.is_empty() || info.vendor_id != 0);
    assert!(matches!(
        info.backend_type,
        BackendType::D3d12
            | BackendType::Vulkan
            | BackendType::Metal
            | BackendType::OpenGl
            | BackendType::OpenGlEs
            | BackendType::Null
    ));
}

#[test]
fn native_version_is_reported() {
    if initialize_instance().is_none() {
        return;
    }
    let version = wgpu_dyn::native_version().unwrap();
    assert!(version.major > 0 || version.minor > 0);
}

#[test]
fn instance_with_extras() {
    if initialize_instance().is_none() {
        return;
    }
    let instance = Instance::new(&InstanceDescriptor {
        flags: InstanceFlags::VALIDATION,
        ..Default::default()
    })
    .unwrap();
    assert!(!instance.is_released());
}

#[test]
fn concurrent_adapter_requests() {
    let Some(instance) = initialize_instance() else {
        return;
    };
    let requests = (0..8)
        .map(|_| instance.request_adapter_async(&Default::default()).unwrap())
        .collect::<Vec<_>>();
    let adapters = requests
        .into_iter()
        .rev()
        .map(|request| request.wait())
        .collect::<Vec<_>>();
    let ok = adapters.iter().filter(|a| a.is_ok()).count();
    assert!(ok == 0 || ok == adapters.len());
}

#[test]
fn awaiting_a_device() {
    let Some(ctx) = initialize_test() else {
        return;
    };
    let device = pollster::block_on(ctx.adapter.request_device_async(&Default::default()).unwrap())
        .unwrap();
    // Some native builds report an error status for the limits query.
    match device.limits() {
        Ok(limits) => assert!(limits.max_bind_groups >= 4),
        Err(e) => assert!(matches!(e, Error::Status { .. }), "{e}"),
    }
}

#[test]
fn released_objects_do_not_reach_the_library() {
    let Some(mut ctx) = initialize_test() else {
        return;
    };
    ctx.device.release();
    ctx.device.release();
    assert!(ctx.device.is_released());
    assert!(matches!(
        ctx.device.get_queue(),
        Err(Error::Released { kind: "Device" })
    ));
    assert!(matches!(
        ctx.device.push_error_scope(wgpu_dyn::ErrorFilter::Validation),
        Err(Error::Released { .. })
    ));
}
