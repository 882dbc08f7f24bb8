mod common;

use wgpu_dyn::{BufferDescriptor, BufferUsages};

use common::{initialize_instance, initialize_test, leak_tracker};

#[test]
fn one_instance() {
    let _guard = leak_tracker();
    wgpu_dyn::set_debug_mode(true);
    wgpu_dyn::reset_leak_tracker();

    let Some(mut instance) = initialize_instance() else {
        wgpu_dyn::set_debug_mode(false);
        return;
    };
    let report = wgpu_dyn::report_leaks().expect("instance not tracked");
    assert_eq!(report.total, 1);
    assert_eq!(report.kinds.get("Instance"), Some(&1));
    assert_eq!(report.to_string(), "1 leaked: Instance x1");

    instance.release();
    assert_eq!(wgpu_dyn::report_leaks(), None);
    wgpu_dyn::set_debug_mode(false);
}

#[test]
fn whole_device_is_released_on_drop() {
    let _guard = leak_tracker();
    wgpu_dyn::set_debug_mode(true);
    wgpu_dyn::reset_leak_tracker();

    if let Some(ctx) = initialize_test() {
        let buffer = ctx
            .device
            .create_buffer(&BufferDescriptor {
                label: Some("tracked"),
                size: 64,
                usage: BufferUsages::UNIFORM,
                mapped_at_creation: false,
            })
            .unwrap();
        let report = wgpu_dyn::report_leaks().unwrap();
        for kind in ["Instance", "Adapter", "Device", "Queue", "Buffer"] {
            assert_eq!(report.kinds.get(kind), Some(&1), "{kind}");
        }
        assert_eq!(report.total, 5);

        drop(buffer);
        assert_eq!(wgpu_dyn::report_leaks().unwrap().total, 4);
        drop(ctx);
        assert_eq!(wgpu_dyn::report_leaks(), None);
    }
    wgpu_dyn::set_debug_mode(false);
}

#[test]
fn objects_created_untracked_stay_untracked() {
    let _guard = leak_tracker();
    wgpu_dyn::set_debug_mode(false);
    wgpu_dyn::reset_leak_tracker();

    let Some(instance) = initialize_instance() else {
        return;
    };
    wgpu_dyn::set_debug_mode(true);
    assert_eq!(wgpu_dyn::report_leaks(), None);
    drop(instance);
    assert_eq!(wgpu_dyn::report_leaks(), None);
    wgpu_dyn::set_debug_mode(false);
}

#[test]
fn tracking_off_reports_nothing() {
    let _guard = leak_tracker();
    wgpu_dyn::set_debug_mode(false);
    assert!(!wgpu_dyn::debug_mode());
    assert_eq!(wgpu_dyn::report_leaks(), None);
}
