//! Every native entry point the binding calls, with its call interface.

use std::mem;

use super::{Cif, Procedure, Ret};
use crate::wire;

const fn words(count: u8) -> Cif {
    Cif::words(count, Ret::Void)
}

const fn returns(count: u8) -> Cif {
    Cif::words(count, Ret::Word)
}

const fn returns_u32(count: u8) -> Cif {
    Cif::words(count, Ret::U32)
}

const fn then<T>(words: u8, ret: Ret) -> Cif {
    Cif::aggregate(words, mem::size_of::<T>(), ret)
}

const fn viewport() -> Cif {
    Cif::word_then_f32s(6)
}

macro_rules! procedures {
    ($($ident:ident = $name:literal : $cif:expr;)*) => {
        $(
            pub(crate) static $ident: Procedure =
                Procedure::new($name, concat!($name, "\0").as_bytes(), $cif);
        )*

        #[cfg(test)]
        pub(crate) static ALL: &[&Procedure] = &[$(&$ident),*];
    };
}

procedures! {
    GET_VERSION = "wgpuGetVersion": returns_u32(0);
    SET_LOG_CALLBACK = "wgpuSetLogCallback": words(2);
    SET_LOG_LEVEL = "wgpuSetLogLevel": words(1);
    CREATE_INSTANCE = "wgpuCreateInstance": returns(1);

    INSTANCE_CREATE_SURFACE = "wgpuInstanceCreateSurface": returns(2);
    INSTANCE_PROCESS_EVENTS = "wgpuInstanceProcessEvents": words(1);
    INSTANCE_REQUEST_ADAPTER = "wgpuInstanceRequestAdapter": then::<wire::CallbackInfo>(2, Ret::Word);
    INSTANCE_ADD_REF = "wgpuInstanceAddRef": words(1);
    INSTANCE_RELEASE = "wgpuInstanceRelease": words(1);

    ADAPTER_GET_INFO = "wgpuAdapterGetInfo": returns_u32(2);
    ADAPTER_INFO_FREE_MEMBERS = "wgpuAdapterInfoFreeMembers": then::<wire::AdapterInfo>(0, Ret::Void);
    ADAPTER_GET_LIMITS = "wgpuAdapterGetLimits": returns_u32(2);
    ADAPTER_GET_FEATURES = "wgpuAdapterGetFeatures": words(2);
    SUPPORTED_FEATURES_FREE_MEMBERS = "wgpuSupportedFeaturesFreeMembers": then::<wire::SupportedFeatures>(0, Ret::Void);
    ADAPTER_HAS_FEATURE = "wgpuAdapterHasFeature": returns_u32(2);
    ADAPTER_REQUEST_DEVICE = "wgpuAdapterRequestDevice": then::<wire::CallbackInfo>(2, Ret::Word);
    ADAPTER_RELEASE = "wgpuAdapterRelease": words(1);

    DEVICE_CREATE_BIND_GROUP = "wgpuDeviceCreateBindGroup": returns(2);
    DEVICE_CREATE_BIND_GROUP_LAYOUT = "wgpuDeviceCreateBindGroupLayout": returns(2);
    DEVICE_CREATE_BUFFER = "wgpuDeviceCreateBuffer": returns(2);
    DEVICE_CREATE_COMMAND_ENCODER = "wgpuDeviceCreateCommandEncoder": returns(2);
    DEVICE_CREATE_COMPUTE_PIPELINE = "wgpuDeviceCreateComputePipeline": returns(2);
    DEVICE_CREATE_PIPELINE_LAYOUT = "wgpuDeviceCreatePipelineLayout": returns(2);
    DEVICE_CREATE_QUERY_SET = "wgpuDeviceCreateQuerySet": returns(2);
    DEVICE_CREATE_RENDER_BUNDLE_ENCODER = "wgpuDeviceCreateRenderBundleEncoder": returns(2);
    DEVICE_CREATE_RENDER_PIPELINE = "wgpuDeviceCreateRenderPipeline": returns(2);
    DEVICE_CREATE_SAMPLER = "wgpuDeviceCreateSampler": returns(2);
    DEVICE_CREATE_SHADER_MODULE = "wgpuDeviceCreateShaderModule": returns(2);
    DEVICE_CREATE_TEXTURE = "wgpuDeviceCreateTexture": returns(2);
    DEVICE_DESTROY = "wgpuDeviceDestroy": words(1);
    DEVICE_GET_FEATURES = "wgpuDeviceGetFeatures": words(2);
    DEVICE_GET_LIMITS = "wgpuDeviceGetLimits": returns_u32(2);
    DEVICE_GET_QUEUE = "wgpuDeviceGetQueue": returns(1);
    DEVICE_HAS_FEATURE = "wgpuDeviceHasFeature": returns_u32(2);
    DEVICE_POLL = "wgpuDevicePoll": returns_u32(3);
    DEVICE_POP_ERROR_SCOPE = "wgpuDevicePopErrorScope": then::<wire::CallbackInfo>(1, Ret::Word);
    DEVICE_PUSH_ERROR_SCOPE = "wgpuDevicePushErrorScope": words(2);
    DEVICE_ADD_REF = "wgpuDeviceAddRef": words(1);
    DEVICE_RELEASE = "wgpuDeviceRelease": words(1);

    QUEUE_SUBMIT = "wgpuQueueSubmit": words(3);
    QUEUE_WRITE_BUFFER = "wgpuQueueWriteBuffer": words(5);
    QUEUE_WRITE_TEXTURE = "wgpuQueueWriteTexture": words(6);
    QUEUE_RELEASE = "wgpuQueueRelease": words(1);

    BUFFER_DESTROY = "wgpuBufferDestroy": words(1);
    BUFFER_GET_CONST_MAPPED_RANGE = "wgpuBufferGetConstMappedRange": returns(3);
    BUFFER_GET_MAPPED_RANGE = "wgpuBufferGetMappedRange": returns(3);
    BUFFER_GET_MAP_STATE = "wgpuBufferGetMapState": returns_u32(1);
    BUFFER_GET_SIZE = "wgpuBufferGetSize": returns(1);
    BUFFER_GET_USAGE = "wgpuBufferGetUsage": returns(1);
    BUFFER_MAP_ASYNC = "wgpuBufferMapAsync": then::<wire::CallbackInfo>(4, Ret::Word);
    BUFFER_UNMAP = "wgpuBufferUnmap": words(1);
    BUFFER_RELEASE = "wgpuBufferRelease": words(1);

    TEXTURE_CREATE_VIEW = "wgpuTextureCreateView": returns(2);
    TEXTURE_DESTROY = "wgpuTextureDestroy": words(1);
    TEXTURE_GET_WIDTH = "wgpuTextureGetWidth": returns_u32(1);
    TEXTURE_GET_HEIGHT = "wgpuTextureGetHeight": returns_u32(1);
    TEXTURE_GET_DEPTH_OR_ARRAY_LAYERS = "wgpuTextureGetDepthOrArrayLayers": returns_u32(1);
    TEXTURE_GET_MIP_LEVEL_COUNT = "wgpuTextureGetMipLevelCount": returns_u32(1);
    TEXTURE_GET_SAMPLE_COUNT = "wgpuTextureGetSampleCount": returns_u32(1);
    TEXTURE_GET_DIMENSION = "wgpuTextureGetDimension": returns_u32(1);
    TEXTURE_GET_FORMAT = "wgpuTextureGetFormat": returns_u32(1);
    TEXTURE_GET_USAGE = "wgpuTextureGetUsage": returns(1);
    TEXTURE_RELEASE = "wgpuTextureRelease": words(1);

    TEXTURE_VIEW_RELEASE = "wgpuTextureViewRelease": words(1);
    SAMPLER_RELEASE = "wgpuSamplerRelease": words(1);
    SHADER_MODULE_RELEASE = "wgpuShaderModuleRelease": words(1);
    PIPELINE_LAYOUT_RELEASE = "wgpuPipelineLayoutRelease": words(1);
    BIND_GROUP_LAYOUT_RELEASE = "wgpuBindGroupLayoutRelease": words(1);
    BIND_GROUP_RELEASE = "wgpuBindGroupRelease": words(1);

    COMPUTE_PIPELINE_GET_BIND_GROUP_LAYOUT = "wgpuComputePipelineGetBindGroupLayout": returns(2);
    COMPUTE_PIPELINE_RELEASE = "wgpuComputePipelineRelease": words(1);
    RENDER_PIPELINE_GET_BIND_GROUP_LAYOUT = "wgpuRenderPipelineGetBindGroupLayout": returns(2);
    RENDER_PIPELINE_RELEASE = "wgpuRenderPipelineRelease": words(1);

    COMMAND_ENCODER_BEGIN_COMPUTE_PASS = "wgpuCommandEncoderBeginComputePass": returns(2);
    COMMAND_ENCODER_BEGIN_RENDER_PASS = "wgpuCommandEncoderBeginRenderPass": returns(2);
    COMMAND_ENCODER_CLEAR_BUFFER = "wgpuCommandEncoderClearBuffer": words(4);
    COMMAND_ENCODER_COPY_BUFFER_TO_BUFFER = "wgpuCommandEncoderCopyBufferToBuffer": words(6);
    COMMAND_ENCODER_COPY_BUFFER_TO_TEXTURE = "wgpuCommandEncoderCopyBufferToTexture": words(4);
    COMMAND_ENCODER_COPY_TEXTURE_TO_BUFFER = "wgpuCommandEncoderCopyTextureToBuffer": words(4);
    COMMAND_ENCODER_COPY_TEXTURE_TO_TEXTURE = "wgpuCommandEncoderCopyTextureToTexture": words(4);
    COMMAND_ENCODER_FINISH = "wgpuCommandEncoderFinish": returns(2);
    COMMAND_ENCODER_INSERT_DEBUG_MARKER = "wgpuCommandEncoderInsertDebugMarker": then::<wire::StringView>(1, Ret::Void);
    COMMAND_ENCODER_POP_DEBUG_GROUP = "wgpuCommandEncoderPopDebugGroup": words(1);
    COMMAND_ENCODER_PUSH_DEBUG_GROUP = "wgpuCommandEncoderPushDebugGroup": then::<wire::StringView>(1, Ret::Void);
    COMMAND_ENCODER_RESOLVE_QUERY_SET = "wgpuCommandEncoderResolveQuerySet": words(6);
    COMMAND_ENCODER_WRITE_TIMESTAMP = "wgpuCommandEncoderWriteTimestamp": words(3);
    COMMAND_ENCODER_RELEASE = "wgpuCommandEncoderRelease": words(1);

    COMPUTE_PASS_DISPATCH_WORKGROUPS = "wgpuComputePassEncoderDispatchWorkgroups": words(4);
    COMPUTE_PASS_DISPATCH_WORKGROUPS_INDIRECT = "wgpuComputePassEncoderDispatchWorkgroupsIndirect": words(3);
    COMPUTE_PASS_END = "wgpuComputePassEncoderEnd": words(1);
    COMPUTE_PASS_INSERT_DEBUG_MARKER = "wgpuComputePassEncoderInsertDebugMarker": then::<wire::StringView>(1, Ret::Void);
    COMPUTE_PASS_POP_DEBUG_GROUP = "wgpuComputePassEncoderPopDebugGroup": words(1);
    COMPUTE_PASS_PUSH_DEBUG_GROUP = "wgpuComputePassEncoderPushDebugGroup": then::<wire::StringView>(1, Ret::Void);
    COMPUTE_PASS_SET_BIND_GROUP = "wgpuComputePassEncoderSetBindGroup": words(5);
    COMPUTE_PASS_SET_PIPELINE = "wgpuComputePassEncoderSetPipeline": words(2);
    COMPUTE_PASS_WRITE_TIMESTAMP = "wgpuComputePassEncoderWriteTimestamp": words(3);
    COMPUTE_PASS_RELEASE = "wgpuComputePassEncoderRelease": words(1);

    RENDER_PASS_BEGIN_OCCLUSION_QUERY = "wgpuRenderPassEncoderBeginOcclusionQuery": words(2);
    RENDER_PASS_DRAW = "wgpuRenderPassEncoderDraw": words(5);
    RENDER_PASS_DRAW_INDEXED = "wgpuRenderPassEncoderDrawIndexed": words(6);
    RENDER_PASS_DRAW_INDEXED_INDIRECT = "wgpuRenderPassEncoderDrawIndexedIndirect": words(3);
    RENDER_PASS_DRAW_INDIRECT = "wgpuRenderPassEncoderDrawIndirect": words(3);
    RENDER_PASS_END = "wgpuRenderPassEncoderEnd": words(1);
    RENDER_PASS_END_OCCLUSION_QUERY = "wgpuRenderPassEncoderEndOcclusionQuery": words(1);
    RENDER_PASS_EXECUTE_BUNDLES = "wgpuRenderPassEncoderExecuteBundles": words(3);
    RENDER_PASS_INSERT_DEBUG_MARKER = "wgpuRenderPassEncoderInsertDebugMarker": then::<wire::StringView>(1, Ret::Void);
    RENDER_PASS_POP_DEBUG_GROUP = "wgpuRenderPassEncoderPopDebugGroup": words(1);
    RENDER_PASS_PUSH_DEBUG_GROUP = "wgpuRenderPassEncoderPushDebugGroup": then::<wire::StringView>(1, Ret::Void);
    RENDER_PASS_SET_BIND_GROUP = "wgpuRenderPassEncoderSetBindGroup": words(5);
    RENDER_PASS_SET_BLEND_CONSTANT = "wgpuRenderPassEncoderSetBlendConstant": words(2);
    RENDER_PASS_SET_INDEX_BUFFER = "wgpuRenderPassEncoderSetIndexBuffer": words(5);
    RENDER_PASS_SET_PIPELINE = "wgpuRenderPassEncoderSetPipeline": words(2);
    RENDER_PASS_SET_SCISSOR_RECT = "wgpuRenderPassEncoderSetScissorRect": words(5);
    RENDER_PASS_SET_STENCIL_REFERENCE = "wgpuRenderPassEncoderSetStencilReference": words(2);
    RENDER_PASS_SET_VERTEX_BUFFER = "wgpuRenderPassEncoderSetVertexBuffer": words(5);
    RENDER_PASS_SET_VIEWPORT = "wgpuRenderPassEncoderSetViewport": viewport();
    RENDER_PASS_WRITE_TIMESTAMP = "wgpuRenderPassEncoderWriteTimestamp": words(3);
    RENDER_PASS_RELEASE = "wgpuRenderPassEncoderRelease": words(1);

    RENDER_BUNDLE_ENCODER_DRAW = "wgpuRenderBundleEncoderDraw": words(5);
    RENDER_BUNDLE_ENCODER_DRAW_INDEXED = "wgpuRenderBundleEncoderDrawIndexed": words(6);
    RENDER_BUNDLE_ENCODER_DRAW_INDEXED_INDIRECT = "wgpuRenderBundleEncoderDrawIndexedIndirect": words(3);
    RENDER_BUNDLE_ENCODER_DRAW_INDIRECT = "wgpuRenderBundleEncoderDrawIndirect": words(3);
    RENDER_BUNDLE_ENCODER_FINISH = "wgpuRenderBundleEncoderFinish": returns(2);
    RENDER_BUNDLE_ENCODER_INSERT_DEBUG_MARKER = "wgpuRenderBundleEncoderInsertDebugMarker": then::<wire::StringView>(1, Ret::Void);
    RENDER_BUNDLE_ENCODER_POP_DEBUG_GROUP = "wgpuRenderBundleEncoderPopDebugGroup": words(1);
    RENDER_BUNDLE_ENCODER_PUSH_DEBUG_GROUP = "wgpuRenderBundleEncoderPushDebugGroup": then::<wire::StringView>(1, Ret::Void);
    RENDER_BUNDLE_ENCODER_SET_BIND_GROUP = "wgpuRenderBundleEncoderSetBindGroup": words(5);
    RENDER_BUNDLE_ENCODER_SET_INDEX_BUFFER = "wgpuRenderBundleEncoderSetIndexBuffer": words(5);
    RENDER_BUNDLE_ENCODER_SET_PIPELINE = "wgpuRenderBundleEncoderSetPipeline": words(2);
    RENDER_BUNDLE_ENCODER_SET_VERTEX_BUFFER = "wgpuRenderBundleEncoderSetVertexBuffer": words(5);
    RENDER_BUNDLE_ENCODER_RELEASE = "wgpuRenderBundleEncoderRelease": words(1);

    RENDER_BUNDLE_RELEASE = "wgpuRenderBundleRelease": words(1);
    COMMAND_BUFFER_RELEASE = "wgpuCommandBufferRelease": words(1);

    SURFACE_CONFIGURE = "wgpuSurfaceConfigure": words(2);
    SURFACE_GET_CAPABILITIES = "wgpuSurfaceGetCapabilities": returns_u32(3);
    SURFACE_CAPABILITIES_FREE_MEMBERS = "wgpuSurfaceCapabilitiesFreeMembers": then::<wire::SurfaceCapabilities>(0, Ret::Void);
    SURFACE_GET_CURRENT_TEXTURE = "wgpuSurfaceGetCurrentTexture": words(2);
    SURFACE_PRESENT = "wgpuSurfacePresent": returns_u32(1);
    SURFACE_UNCONFIGURE = "wgpuSurfaceUnconfigure": words(1);
    SURFACE_RELEASE = "wgpuSurfaceRelease": words(1);

    QUERY_SET_DESTROY = "wgpuQuerySetDestroy": words(1);
    QUERY_SET_GET_COUNT = "wgpuQuerySetGetCount": returns_u32(1);
    QUERY_SET_GET_TYPE = "wgpuQuerySetGetType": returns_u32(1);
    QUERY_SET_RELEASE = "wgpuQuerySetRelease": words(1);
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::ffi::ArgShape;

    #[test]
    fn symbols_are_well_formed() {
        let mut seen = HashSet::new();
        for proc in ALL {
            let name = proc.name();
            assert!(name.starts_with("wgpu"), "{name}");
            assert_eq!(proc.symbol.last(), Some(&0), "{name}");
            assert_eq!(&proc.symbol[..proc.symbol.len() - 1], name.as_bytes());
            assert!(seen.insert(name), "{name} declared twice");
        }
    }

    #[test]
    fn shapes() {
        for proc in ALL {
            let name = proc.name();
            if name.ends_with("Release") || name.ends_with("AddRef") || name.ends_with("Destroy") {
                assert_eq!(proc.cif().args, ArgShape::Words(1), "{name}");
                assert_eq!(proc.cif().ret, Ret::Void, "{name}");
            }
            if name.contains("Create") && name != "wgpuCreateInstance" {
                assert_eq!(proc.cif().args, ArgShape::Words(2), "{name}");
                assert_eq!(proc.cif().ret, Ret::Word, "{name}");
            }
            if let ArgShape::WordsThenAggregate { size, .. } = proc.cif().args {
                assert!(size == 16 || size == 40 || name.ends_with("FreeMembers"), "{name}");
            }
        }
        assert_eq!(RENDER_PASS_SET_VIEWPORT.cif().arity(), 7);
        assert_eq!(
            INSTANCE_REQUEST_ADAPTER.cif().args,
            ArgShape::WordsThenAggregate { words: 2, size: 40 }
        );
    }
}
