use std::ptr;

use crate::{
    callback,
    ffi::{self, procs},
    handle::{impl_handle, RawHandle},
    native,
    request::{self, Completion, Pump},
    wire::{self, StringView},
    *,
};

/// Context for all other native objects.
///
/// This is the first thing you create when using the binding.
/// Its primary use is to create [`Adapter`]s and [`Surface`]s.
///
/// Corresponds to [WebGPU `GPU`](https://gpuweb.github.io/gpuweb/#gpu-interface).
#[derive(Debug)]
pub struct Instance {
    pub(crate) handle: RawHandle,
}
static_assertions::assert_impl_all!(Instance: Send, Sync);

impl_handle!(Instance);

/// Additional information required when requesting an adapter.
///
/// For use with [`Instance::request_adapter`].
///
/// Corresponds to [WebGPU `GPURequestAdapterOptions`](
/// https://gpuweb.github.io/gpuweb/#dictdef-gpurequestadapteroptions).
pub type RequestAdapterOptions<'a> = wgt::RequestAdapterOptions<&'a Surface>;

/// Creates an instance. Same as [`Instance::new`].
pub fn create_instance(desc: &InstanceDescriptor) -> Result<Instance> {
    Instance::new(desc)
}

impl Instance {
    /// Create a new instance.
    ///
    /// The native extras (backends, flags, shader compiler and GLES version) are
    /// attached only when `desc` differs from the default.
    pub fn new(desc: &InstanceDescriptor) -> Result<Self> {
        let extras = wire::InstanceExtras {
            chain: wire::ChainedStruct::new(native::s_type::INSTANCE_EXTRAS),
            backends: conv::map_backends(desc.backends),
            flags: conv::map_instance_flags(desc.flags),
            dx12_shader_compiler: desc.dx12_shader_compiler.to_raw(),
            gles3_minor_version: desc.gles_minor_version.to_raw(),
            dxil_path: StringView::from_label(desc.dxil_path.as_deref()),
            dxc_path: StringView::from_label(desc.dxc_path.as_deref()),
        };
        let raw_desc = wire::InstanceDescriptor {
            next_in_chain: if desc.is_default() {
                ptr::null()
            } else {
                &extras.chain
            },
            ..Default::default()
        };
        // SAFETY: the descriptor and its chain live until the call returns.
        let raw = unsafe { procs::CREATE_INSTANCE.invoke(&[ffi::addr(&raw_desc)]) }?;
        Ok(Self {
            handle: RawHandle::new(raw, "Instance", &procs::INSTANCE_RELEASE)?,
        })
    }

    /// Retrieves an [`Adapter`] which matches the given [`RequestAdapterOptions`],
    /// blocking until the native library answers.
    pub fn request_adapter(&self, options: &RequestAdapterOptions<'_>) -> Result<Adapter> {
        self.request_adapter_async(options)?.wait()
    }

    /// Starts an adapter request and returns it unfinished.
    pub fn request_adapter_async(
        &self,
        options: &RequestAdapterOptions<'_>,
    ) -> Result<Request<'_, Adapter>> {
        let instance = self.handle.get()?;
        let compatible_surface = api::optional_raw(options.compatible_surface.map(|s| &s.handle))?;
        let raw_options = wire::RequestAdapterOptions {
            next_in_chain: ptr::null(),
            feature_level: native::feature_level::CORE,
            power_preference: conv::power_preference_to_native(options.power_preference.to_raw()),
            force_fallback_adapter: conv::map_bool(options.force_fallback_adapter),
            backend_type: conv::backend_type_to_native(options.backend_type.to_raw()),
            compatible_surface,
        };
        // SAFETY: the options live until the call returns and the trampoline
        // completes adapter requests.
        unsafe {
            request::call_async(
                &procs::INSTANCE_REQUEST_ADAPTER,
                &[instance, ffi::addr(&raw_options)],
                &request::ADAPTER_REQUESTS,
                callback::trampolines().request_adapter,
                Pump::Instance(instance),
                instance,
                finish_request_adapter,
            )
        }
    }

    /// Runs pending callbacks.
    ///
    /// Blocking requests do this themselves; call it when polling a
    /// [`Request`] by other means.
    pub fn process_events(&self) -> Result<()> {
        let instance = self.handle.get()?;
        // SAFETY: plain handle argument.
        unsafe { procs::INSTANCE_PROCESS_EVENTS.invoke(&[instance]) }.map(|_| ())
    }
}

fn finish_request_adapter(instance: usize, completion: Completion) -> Result<Adapter> {
    if completion.status != native::request_adapter_status::SUCCESS {
        if completion.value != 0 {
            drop(RawHandle::retained(
                completion.value,
                "Adapter",
                &procs::ADAPTER_RELEASE,
            ));
        }
        return Err(Error::RequestAdapter {
            status: completion.status,
            message: completion.message,
        });
    }
    let handle = RawHandle::new(completion.value, "Adapter", &procs::ADAPTER_RELEASE)?;
    // SAFETY: the request borrows the instance, so it is live.
    unsafe { procs::INSTANCE_ADD_REF.invoke(&[instance]) }?;
    Ok(Adapter {
        handle,
        instance: RawHandle::retained(instance, "Instance", &procs::INSTANCE_RELEASE),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_instance_does_not_reach_native() {
        let instance = Instance {
            handle: RawHandle::null("Instance", &procs::INSTANCE_RELEASE),
        };
        assert!(matches!(
            instance.request_adapter(&RequestAdapterOptions::default()),
            Err(Error::Released { kind: "Instance" })
        ));
        assert!(matches!(
            instance.process_events(),
            Err(Error::Released { kind: "Instance" })
        ));
    }

    #[test]
    fn failed_request_carries_message() {
        let err = finish_request_adapter(
            0,
            Completion {
                status: native::request_adapter_status::UNAVAILABLE,
                value: 0,
                message: "no adapter".to_string(),
            },
        )
        .unwrap_err();
        match err {
            Error::RequestAdapter { status, message } => {
                assert_eq!(status, native::request_adapter_status::UNAVAILABLE);
                assert_eq!(message, "no adapter");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
