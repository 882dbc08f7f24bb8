use std::borrow::Cow;

use wgpu_dyn::{
    util::DeviceExt, Buffer, BufferDescriptor, BufferUsages, Color, ColorTargetState,
    CommandEncoder, CommandEncoderDescriptor, Extent3d, FragmentState, LoadOp, MultisampleState,
    PrimitiveState, RenderBundleDescriptor, RenderBundleEncoderDescriptor,
    RenderPassColorAttachment, RenderPassDescriptor, RenderPipeline, RenderPipelineDescriptor,
    ShaderModuleDescriptor, ShaderSource, StoreOp, TexelCopyBufferInfo, TexelCopyBufferLayout,
    Texture, TextureDescriptor, TextureDimension, TextureFormat, TextureUsages, TextureView,
    VertexState,
};

use crate::common::{initialize_test, TestingContext};

const SIZE: u32 = 4;
const BYTES_PER_ROW: u32 = 256;
const FORMAT: TextureFormat = TextureFormat::Rgba8Unorm;

const FULLSCREEN_SHADER: &str = r#"
@vertex
fn vs_main(@builtin(vertex_index) index: u32) -> @builtin(position) vec4<f32> {
    let uv = vec2<f32>(f32((index << 1u) & 2u), f32(index & 2u));
    return vec4<f32>(uv * 2.0 - 1.0, 0.0, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(0.0, 1.0, 0.0, 1.0);
}
"#;

struct Target {
    texture: Texture,
    view: TextureView,
    readback: Buffer,
}

fn target(ctx: &TestingContext) -> Target {
    let texture = ctx
        .device
        .create_texture(&TextureDescriptor {
            label: Some("target"),
            size: Extent3d {
                width: SIZE,
                height: SIZE,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: TextureDimension::D2,
            format: FORMAT,
            usage: TextureUsages::RENDER_ATTACHMENT | TextureUsages::COPY_SRC,
            view_formats: &[],
        })
        .unwrap();
    let view = texture.create_view(&Default::default()).unwrap();
    let readback = ctx
        .device
        .create_buffer(&BufferDescriptor {
            label: Some("readback"),
            size: u64::from(BYTES_PER_ROW * SIZE),
            usage: BufferUsages::COPY_DST | BufferUsages::COPY_SRC,
            mapped_at_creation: false,
        })
        .unwrap();
    Target {
        texture,
        view,
        readback,
    }
}

fn green_pipeline(ctx: &TestingContext) -> RenderPipeline {
    let module = ctx
        .device
        .create_shader_module(ShaderModuleDescriptor {
            label: Some("fullscreen"),
            source: ShaderSource::Wgsl(Cow::Borrowed(FULLSCREEN_SHADER)),
        })
        .unwrap();
    ctx.device
        .create_render_pipeline(&RenderPipelineDescriptor {
            label: Some("green"),
            layout: None,
            vertex: VertexState {
                module: &module,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[],
            },
            primitive: PrimitiveState::default(),
            depth_stencil: None,
            multisample: MultisampleState::default(),
            fragment: Some(FragmentState {
                module: &module,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(ColorTargetState::from(FORMAT))],
            }),
        })
        .unwrap()
}

fn clear_to_red(view: &TextureView) -> [Option<RenderPassColorAttachment<'_>>; 1] {
    [Some(RenderPassColorAttachment {
        view,
        depth_slice: None,
        resolve_target: None,
        load_op: LoadOp::Clear,
        store_op: StoreOp::Store,
        clear_value: Color::RED,
    })]
}

fn copy_out(encoder: &mut CommandEncoder, target: &Target) {
    encoder.copy_texture_to_buffer(
        target.texture.as_image_copy(),
        TexelCopyBufferInfo {
            buffer: &target.readback,
            layout: TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(BYTES_PER_ROW),
                rows_per_image: Some(SIZE),
            },
        },
        Extent3d {
            width: SIZE,
            height: SIZE,
            depth_or_array_layers: 1,
        },
    );
}

fn pixels(ctx: &TestingContext, target: &Target) -> Vec<[u8; 4]> {
    let bytes = ctx
        .device
        .read_buffer(&ctx.queue, &target.readback, 0, u64::from(BYTES_PER_ROW * SIZE))
        .unwrap();
    bytes
        .chunks_exact(BYTES_PER_ROW as usize)
        .flat_map(|row| row[..(SIZE * 4) as usize].chunks_exact(4))
        .map(|p| [p[0], p[1], p[2], p[3]])
        .collect()
}

#[test]
fn clear_only() {
    let Some(ctx) = initialize_test() else {
        return;
    };
    let target = target(&ctx);
    let mut encoder = ctx
        .device
        .create_command_encoder(&CommandEncoderDescriptor { label: None })
        .unwrap();
    let attachments = clear_to_red(&target.view);
    encoder
        .begin_render_pass(&RenderPassDescriptor {
            label: Some("clear"),
            color_attachments: &attachments,
            ..Default::default()
        })
        .unwrap()
        .end();
    copy_out(&mut encoder, &target);
    ctx.queue.submit(Some(encoder.finish().unwrap())).unwrap();

    assert!(pixels(&ctx, &target).iter().all(|p| *p == [255, 0, 0, 255]));
}

#[test]
fn draw_fullscreen_triangle() {
    let Some(ctx) = initialize_test() else {
        return;
    };
    let target = target(&ctx);
    let pipeline = green_pipeline(&ctx);
    let mut encoder = ctx
        .device
        .create_command_encoder(&CommandEncoderDescriptor { label: None })
        .unwrap();
    let attachments = clear_to_red(&target.view);
    {
        let mut pass = encoder
            .begin_render_pass(&RenderPassDescriptor {
                label: Some("draw"),
                color_attachments: &attachments,
                ..Default::default()
            })
            .unwrap();
        pass.push_debug_group("triangle");
        pass.set_pipeline(&pipeline);
        pass.set_viewport(0.0, 0.0, SIZE as f32, SIZE as f32, 0.0, 1.0);
        pass.set_scissor_rect(0, 0, SIZE, SIZE);
        pass.draw(0..3, 0..1);
        pass.pop_debug_group();
    }
    copy_out(&mut encoder, &target);
    ctx.queue.submit(Some(encoder.finish().unwrap())).unwrap();

    assert!(pixels(&ctx, &target).iter().all(|p| *p == [0, 255, 0, 255]));
}

#[test]
fn replay_a_bundle() {
    let Some(ctx) = initialize_test() else {
        return;
    };
    let target = target(&ctx);
    let pipeline = green_pipeline(&ctx);

    let mut bundle_encoder = ctx
        .device
        .create_render_bundle_encoder(&RenderBundleEncoderDescriptor {
            label: Some("bundle"),
            color_formats: &[Some(FORMAT)],
            depth_stencil: None,
            sample_count: 1,
        })
        .unwrap();
    bundle_encoder.set_pipeline(&pipeline);
    bundle_encoder.draw(0..3, 0..1);
    let bundle = bundle_encoder
        .finish(&RenderBundleDescriptor { label: Some("bundle") })
        .unwrap();

    let mut encoder = ctx
        .device
        .create_command_encoder(&CommandEncoderDescriptor { label: None })
        .unwrap();
    let attachments = clear_to_red(&target.view);
    {
        let mut pass = encoder
            .begin_render_pass(&RenderPassDescriptor {
                label: Some("replay"),
                color_attachments: &attachments,
                ..Default::default()
            })
            .unwrap();
        pass.execute_bundles([&bundle]);
    }
    copy_out(&mut encoder, &target);
    ctx.queue.submit(Some(encoder.finish().unwrap())).unwrap();

    assert!(pixels(&ctx, &target).iter().all(|p| *p == [0, 255, 0, 255]));
}

#[test]
fn texture_getters() {
    let Some(ctx) = initialize_test() else {
        return;
    };
    let target = target(&ctx);
    assert_eq!(target.texture.width().unwrap(), SIZE);
    assert_eq!(target.texture.height().unwrap(), SIZE);
    assert_eq!(target.texture.format().unwrap(), Some(FORMAT));
    assert_eq!(target.texture.dimension().unwrap(), Some(TextureDimension::D2));
    assert_eq!(
        target.texture.usage().unwrap(),
        TextureUsages::RENDER_ATTACHMENT | TextureUsages::COPY_SRC
    );
}
