use wgpu_dyn::{BufferDescriptor, BufferUsages, Error, ErrorFilter, ErrorKind};

use crate::common::initialize_test;

#[test]
fn empty_buffer_round_trip() {
    let Some(ctx) = initialize_test() else {
        return;
    };
    ctx.device.push_error_scope(ErrorFilter::Validation).unwrap();
    let _buffer = ctx.device.create_buffer(&BufferDescriptor {
        label: Some("empty"),
        size: 0,
        usage: BufferUsages::UNIFORM,
        mapped_at_creation: false,
    });
    match ctx.device.pop_error_scope().unwrap() {
        None => {}
        Some(Error::Operation(e)) => {
            assert_eq!(e.kind, ErrorKind::Validation);
            assert!(!e.message.is_empty());
        }
        Some(other) => panic!("unexpected scope error {other:?}"),
    }
}

#[test]
fn validation_error_is_captured() {
    let Some(ctx) = initialize_test() else {
        return;
    };
    ctx.device.push_error_scope(ErrorFilter::Validation).unwrap();
    // MAP_READ and MAP_WRITE are mutually exclusive.
    let result = ctx.device.create_buffer(&BufferDescriptor {
        label: Some("invalid"),
        size: 16,
        usage: BufferUsages::MAP_READ | BufferUsages::MAP_WRITE,
        mapped_at_creation: false,
    });
    if let Err(e) = result {
        assert!(matches!(e, Error::CreationFailed { kind: "Buffer" }));
    }
    let error = ctx.device.pop_error_scope().unwrap().expect("no error captured");
    assert!(error.is(ErrorKind::Validation));
    assert!(!error.is(ErrorKind::OutOfMemory));
    assert!(!error.to_string().is_empty());
}

#[test]
fn nested_scopes() {
    let Some(ctx) = initialize_test() else {
        return;
    };
    ctx.device.push_error_scope(ErrorFilter::Validation).unwrap();
    ctx.device.push_error_scope(ErrorFilter::OutOfMemory).unwrap();
    ctx.device.push_error_scope(ErrorFilter::Internal).unwrap();
    for _ in 0..3 {
        assert!(ctx.device.pop_error_scope().unwrap().is_none());
    }
}

#[test]
fn inner_scope_only_sees_its_filter() {
    let Some(ctx) = initialize_test() else {
        return;
    };
    ctx.device.push_error_scope(ErrorFilter::Validation).unwrap();
    ctx.device.push_error_scope(ErrorFilter::OutOfMemory).unwrap();
    let _ = ctx.device.create_buffer(&BufferDescriptor {
        label: None,
        size: 16,
        usage: BufferUsages::MAP_READ | BufferUsages::MAP_WRITE,
        mapped_at_creation: false,
    });
    assert!(ctx.device.pop_error_scope().unwrap().is_none());
    assert!(ctx
        .device
        .pop_error_scope()
        .unwrap()
        .is_some_and(|e| e.is(ErrorKind::Validation)));
}

#[test]
fn awaiting_a_scope() {
    let Some(ctx) = initialize_test() else {
        return;
    };
    ctx.device.push_error_scope(ErrorFilter::Validation).unwrap();
    let request = ctx.device.pop_error_scope_async().unwrap();
    assert!(pollster::block_on(request).unwrap().is_none());
}
