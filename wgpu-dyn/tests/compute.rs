use std::borrow::Cow;

use wgpu_dyn::{
    util::{BufferInitDescriptor, DeviceExt},
    BindGroupDescriptor, BindGroupEntry, Buffer, BufferUsages, CommandEncoderDescriptor,
    ComputePassDescriptor, ComputePipeline, ComputePipelineDescriptor, DispatchIndirectArgs,
    ShaderModuleDescriptor, ShaderSource,
};

use crate::common::{initialize_test, ramp, TestingContext, DOUBLE_SHADER};

fn double_pipeline(ctx: &TestingContext) -> ComputePipeline {
    let module = ctx
        .device
        .create_shader_module(ShaderModuleDescriptor {
            label: Some("double"),
            source: ShaderSource::Wgsl(Cow::Borrowed(DOUBLE_SHADER)),
        })
        .unwrap();
    ctx.device
        .create_compute_pipeline(&ComputePipelineDescriptor {
            label: Some("double"),
            layout: None,
            module: &module,
            entry_point: Some("main"),
            compilation_options: Default::default(),
        })
        .unwrap()
}

fn storage_buffer(ctx: &TestingContext) -> Buffer {
    ctx.device
        .create_buffer_init(&BufferInitDescriptor {
            label: Some("data"),
            contents: bytemuck::cast_slice(&ramp()),
            usage: BufferUsages::STORAGE | BufferUsages::COPY_SRC | BufferUsages::COPY_DST,
        })
        .unwrap()
}

fn read_floats(ctx: &TestingContext, buffer: &Buffer) -> Vec<f32> {
    let bytes = ctx.device.read_buffer(&ctx.queue, buffer, 0, 256).unwrap();
    bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

fn expected() -> Vec<f32> {
    ramp().into_iter().map(|x| x * 2.0).collect()
}

#[test]
fn double_in_place() {
    let Some(ctx) = initialize_test() else {
        return;
    };
    let pipeline = double_pipeline(&ctx);
    let data = storage_buffer(&ctx);
    let layout = pipeline.get_bind_group_layout(0).unwrap();
    let bind_group = ctx
        .device
        .create_bind_group(&BindGroupDescriptor {
            label: None,
            layout: &layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: data.as_entire_binding(),
            }],
        })
        .unwrap();

    let mut encoder = ctx
        .device
        .create_command_encoder(&CommandEncoderDescriptor { label: None })
        .unwrap();
    {
        let mut pass = encoder
            .begin_compute_pass(&ComputePassDescriptor::default())
            .unwrap();
        pass.set_pipeline(&pipeline);
        pass.set_bind_group(0, Some(&bind_group), &[]);
        pass.dispatch_workgroups(1, 1, 1);
        pass.end();
    }
    ctx.queue.submit(Some(encoder.finish().unwrap())).unwrap();

    assert_eq!(read_floats(&ctx, &data), expected());
}

#[test]
fn indirect_dispatch() {
    let Some(ctx) = initialize_test() else {
        return;
    };
    let pipeline = double_pipeline(&ctx);
    let data = storage_buffer(&ctx);
    let indirect = ctx
        .device
        .create_buffer_init(&BufferInitDescriptor {
            label: Some("indirect"),
            contents: DispatchIndirectArgs { x: 1, y: 1, z: 1 }.as_bytes(),
            usage: BufferUsages::INDIRECT,
        })
        .unwrap();
    let layout = pipeline.get_bind_group_layout(0).unwrap();
    let bind_group = ctx
        .device
        .create_bind_group(&BindGroupDescriptor {
            label: None,
            layout: &layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: data.as_entire_binding(),
            }],
        })
        .unwrap();

    let mut encoder = ctx
        .device
        .create_command_encoder(&CommandEncoderDescriptor { label: None })
        .unwrap();
    {
        // Ended by drop.
        let mut pass = encoder
            .begin_compute_pass(&ComputePassDescriptor::default())
            .unwrap();
        pass.set_pipeline(&pipeline);
        pass.set_bind_group(0, Some(&bind_group), &[]);
        pass.dispatch_workgroups_indirect(&indirect, 0);
    }
    ctx.queue.submit(Some(encoder.finish().unwrap())).unwrap();

    assert_eq!(read_floats(&ctx, &data), expected());
}

#[test]
fn write_then_read_back() {
    let Some(ctx) = initialize_test() else {
        return;
    };
    let buffer = ctx
        .device
        .create_buffer(&wgpu_dyn::BufferDescriptor {
            label: Some("scratch"),
            size: 16,
            usage: BufferUsages::COPY_SRC | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
        .unwrap();
    ctx.queue
        .write_buffer(&buffer, 4, &[1, 2, 3, 4, 5, 6, 7, 8])
        .unwrap();
    let bytes = ctx.device.read_buffer(&ctx.queue, &buffer, 0, 16).unwrap();
    assert_eq!(bytes, [0, 0, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 0, 0, 0, 0]);
    assert_eq!(buffer.size().unwrap(), 16);
    assert_eq!(
        buffer.usage().unwrap(),
        BufferUsages::COPY_SRC | BufferUsages::COPY_DST
    );
}

#[test]
fn clear_buffer_zeroes_a_range() {
    let Some(ctx) = initialize_test() else {
        return;
    };
    let data = storage_buffer(&ctx);
    let mut encoder = ctx
        .device
        .create_command_encoder(&CommandEncoderDescriptor { label: None })
        .unwrap();
    encoder.clear_buffer(&data, 0, Some(16));
    ctx.queue.submit(Some(encoder.finish().unwrap())).unwrap();

    let floats = read_floats(&ctx, &data);
    assert_eq!(floats[..4], [0.0; 4]);
    assert_eq!(floats[4..], ramp()[4..]);
}
