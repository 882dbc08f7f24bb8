//! A binding to [wgpu-native](https://github.com/gfx-rs/wgpu-native) that is
//! resolved at run time through the platform dynamic loader.
//!
//! Nothing is linked at build time. The first call into the native library
//! opens `wgpu_native` under its conventional platform file name (see
//! [`loader`]); every entry point is then looked up by symbol on first use.
//! If the library cannot be found, every operation fails with
//! [`Error::LibraryNotLoaded`] instead of aborting the process.
//!
//! To start using the API, create an [`Instance`]:
//!
//! ```no_run
//! # fn main() -> wgpu_dyn::Result<()> {
//! let instance = wgpu_dyn::Instance::new(&Default::default())?;
//! let adapter = instance.request_adapter(&Default::default())?;
//! let device = adapter.request_device(&Default::default())?;
//! let queue = device.get_queue()?;
//! # Ok(()) }
//! ```
//!
//! Objects own one native reference each and give it up on drop or on an
//! explicit `release()`. [`set_debug_mode`] turns on a tracker that records
//! every live reference, reported by [`report_leaks`].
//!
//! The crate targets the native library's 24.0 ABI.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs, rust_2018_idioms, unsafe_op_in_unsafe_fn)]

#[cfg(not(target_pointer_width = "64"))]
compile_error!("wgpu-dyn passes every native argument as a 64-bit machine word");

//
//
// Modules
//
//

mod api;
mod callback;
#[allow(missing_docs)]
pub mod conv;
mod error;
mod ffi;
mod handle;
pub mod loader;
pub mod logging;
mod macros;
mod native;
mod platform;
mod request;
pub mod util;
mod wire;

//
//
// Public re-exports
//
//

pub use api::*;
pub use error::{Error, ErrorKind, OperationError, PopErrorScopeError, Result, SurfaceError};
pub use handle::{debug_mode, report_leaks, reset_leak_tracker, set_debug_mode, LeakReport};
pub use request::Request;
pub use wgt::{
    AdapterInfo, AdapterType, AddressMode, BackendType, Backends, BindGroupLayoutEntry,
    BindingType, BlendComponent, BlendFactor, BlendOperation, BlendState, BufferAddress,
    BufferBindingType, BufferMapState, BufferUsages, Color, ColorTargetState, ColorWrites,
    CompareFunction, CompositeAlphaMode, CullMode, DepthBiasState, DepthStencilState,
    DispatchIndirectArgs, DrawIndexedIndirectArgs, DrawIndirectArgs, Dx12Compiler, DynamicOffset,
    ErrorFilter, Extent3d, FeatureName, FilterMode, FrontFace, Gles3MinorVersion, IndexFormat,
    InstanceDescriptor, InstanceFlags, Limits, LoadOp, MapMode, MipmapFilterMode,
    MultisampleState, Origin3d, PowerPreference, PresentMode, PrimitiveState, PrimitiveTopology,
    QueryType, SamplerBindingType, ShaderStages, StencilFaceState, StencilOperation,
    StencilState, StorageTextureAccess, StoreOp, SurfaceCapabilities, TexelCopyBufferLayout,
    TextureAspect, TextureDimension, TextureFormat, TextureSampleType, TextureUsages,
    TextureViewDimension, VertexAttribute, VertexFormat, VertexStepMode, COPY_BUFFER_ALIGNMENT,
    MAP_ALIGNMENT, MAX_COLOR_ATTACHMENTS,
};

/// Version of the loaded native library.
///
/// Loads the library if nothing has tried to yet.
pub fn native_version() -> Result<loader::NativeVersion> {
    loader::version()
}
