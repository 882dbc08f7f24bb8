use std::ptr;

use smallvec::SmallVec;

use crate::{
    callback,
    ffi::{self, procs},
    handle::{impl_handle, RawHandle},
    native,
    request::{self, Completion, Pump},
    wire::{self, StringView},
    *,
};

/// Handle to a physical graphics and/or compute device.
///
/// Adapters can be created using [`Instance::request_adapter`].
///
/// Adapters can be used to open a connection to the corresponding [`Device`]
/// on the host system by using [`Adapter::request_device`].
///
/// Corresponds to [WebGPU `GPUAdapter`](https://gpuweb.github.io/gpuweb/#gpu-adapter).
#[derive(Debug)]
pub struct Adapter {
    pub(crate) handle: RawHandle,
    /// Reference on the instance that pumps device requests.
    pub(crate) instance: RawHandle,
}
static_assertions::assert_impl_all!(Adapter: Send, Sync);

impl_handle!(Adapter);

/// Describes a [`Device`].
///
/// For use with [`Adapter::request_device`].
///
/// Corresponds to [WebGPU `GPUDeviceDescriptor`](
/// https://gpuweb.github.io/gpuweb/#dictdef-gpudevicedescriptor).
pub type DeviceDescriptor<'a> = wgt::DeviceDescriptor<Label<'a>>;
static_assertions::assert_impl_all!(DeviceDescriptor<'_>: Send, Sync);

impl Adapter {
    /// Requests a connection to a physical device, creating a logical device,
    /// and blocks until the native library answers.
    ///
    /// Device loss and uncaptured errors are reported through the log.
    pub fn request_device(&self, desc: &DeviceDescriptor<'_>) -> Result<Device> {
        self.request_device_async(desc)?.wait()
    }

    /// Starts a device request and returns it unfinished.
    pub fn request_device_async(&self, desc: &DeviceDescriptor<'_>) -> Result<Request<'_, Device>> {
        let adapter = self.handle.get()?;
        let instance = self.instance.get()?;
        let features: SmallVec<[u32; 8]> = desc
            .required_features
            .iter()
            .map(|&f| conv::feature_name_to_native(f.to_raw()))
            .collect();
        let limits = desc.required_limits.as_ref().map(wire::Limits::from);
        let trampolines = callback::trampolines();
        let raw_desc = wire::DeviceDescriptor {
            next_in_chain: ptr::null(),
            label: StringView::from_label(desc.label),
            required_feature_count: features.len(),
            required_features: wire::array_ptr(&features),
            required_limits: wire::opt_ptr(limits.as_ref()),
            default_queue: wire::QueueDescriptor {
                next_in_chain: ptr::null(),
                label: StringView::NULL,
            },
            device_lost_callback_info: wire::CallbackInfo {
                mode: native::callback_mode::ALLOW_SPONTANEOUS,
                callback: trampolines.device_lost,
                ..Default::default()
            },
            uncaptured_error_callback_info: wire::UncapturedErrorCallbackInfo {
                callback: trampolines.uncaptured_error,
                ..Default::default()
            },
        };
        // SAFETY: the descriptor and every array it points to live until the call
        // returns; the trampoline completes device requests.
        unsafe {
            request::call_async(
                &procs::ADAPTER_REQUEST_DEVICE,
                &[adapter, ffi::addr(&raw_desc)],
                &request::DEVICE_REQUESTS,
                trampolines.request_device,
                Pump::Instance(instance),
                0,
                finish_request_device,
            )
        }
    }

    /// Get info about the adapter itself.
    pub fn get_info(&self) -> Result<AdapterInfo> {
        let adapter = self.handle.get()?;
        let mut info = wire::AdapterInfo::default();
        // SAFETY: `info` is a valid out-parameter.
        let status = unsafe { procs::ADAPTER_GET_INFO.invoke(&[adapter, ffi::addr_mut(&mut info)]) }?;
        if status as u32 != native::status::SUCCESS {
            return Err(Error::Status {
                operation: "Adapter::get_info",
            });
        }
        // SAFETY: the native library filled the views.
        let result = unsafe {
            AdapterInfo {
                vendor: info.vendor.to_string_lossy(),
                architecture: info.architecture.to_string_lossy(),
                device: info.device.to_string_lossy(),
                description: info.description.to_string_lossy(),
                backend_type: BackendType::from_raw(conv::backend_type_from_native(info.backend_type))
                    .unwrap_or_default(),
                adapter_type: AdapterType::from_raw(conv::adapter_type_from_native(info.adapter_type))
                    .unwrap_or(AdapterType::Unknown),
                vendor_id: info.vendor_id,
                device_id: info.device_id,
            }
        };
        // SAFETY: the strings have been copied out.
        unsafe { procs::ADAPTER_INFO_FREE_MEMBERS.call_with(&[], info) }?;
        Ok(result)
    }

    /// List the "best" limits that are supported by this adapter.
    pub fn limits(&self) -> Result<Limits> {
        let adapter = self.handle.get()?;
        read_limits(&procs::ADAPTER_GET_LIMITS, adapter, "Adapter::limits")
    }

    /// The features which can be used to create devices on this adapter.
    ///
    /// Native features without a public name are left out.
    pub fn features(&self) -> Result<Vec<FeatureName>> {
        let adapter = self.handle.get()?;
        read_features(&procs::ADAPTER_GET_FEATURES, adapter)
    }

    /// Returns `true` if the adapter supports `feature`.
    pub fn has_feature(&self, feature: FeatureName) -> Result<bool> {
        let adapter = self.handle.get()?;
        let raw = conv::feature_name_to_native(feature.to_raw());
        // SAFETY: plain arguments.
        let supported = unsafe { procs::ADAPTER_HAS_FEATURE.invoke(&[adapter, raw as usize]) }?;
        Ok(supported as u32 != native::FALSE)
    }
}

fn finish_request_device(_: usize, completion: Completion) -> Result<Device> {
    if completion.status != native::request_device_status::SUCCESS {
        if completion.value != 0 {
            drop(RawHandle::retained(
                completion.value,
                "Device",
                &procs::DEVICE_RELEASE,
            ));
        }
        return Err(Error::RequestDevice {
            status: completion.status,
            message: completion.message,
        });
    }
    Ok(Device {
        handle: RawHandle::new(completion.value, "Device", &procs::DEVICE_RELEASE)?,
    })
}

/// Reads a limits block through `proc`, shared by adapters and devices.
pub(crate) fn read_limits(
    proc: &'static ffi::Procedure,
    raw: usize,
    operation: &'static str,
) -> Result<Limits> {
    let mut limits = wire::Limits::default();
    // SAFETY: `limits` is a valid out-parameter.
    let status = unsafe { proc.invoke(&[raw, ffi::addr_mut(&mut limits)]) }?;
    if status as u32 != native::status::SUCCESS {
        return Err(Error::Status { operation });
    }
    Ok(Limits::from(&limits))
}

/// Reads a feature list through `proc`, shared by adapters and devices.
pub(crate) fn read_features(proc: &'static ffi::Procedure, raw: usize) -> Result<Vec<FeatureName>> {
    let mut supported = wire::SupportedFeatures::default();
    // SAFETY: `supported` is a valid out-parameter.
    unsafe { proc.invoke(&[raw, ffi::addr_mut(&mut supported)]) }?;
    // SAFETY: the native library filled the array.
    let raw_features = unsafe { wire::read_array(supported.features, supported.feature_count) };
    // SAFETY: the array has been copied out.
    unsafe { procs::SUPPORTED_FEATURES_FREE_MEMBERS.call_with(&[], supported) }?;
    Ok(raw_features
        .into_iter()
        .filter_map(|f| FeatureName::from_raw(conv::feature_name_from_native(f)))
        .filter(|&f| f != FeatureName::Undefined)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn released() -> Adapter {
        Adapter {
            handle: RawHandle::null("Adapter", &procs::ADAPTER_RELEASE),
            instance: RawHandle::null("Instance", &procs::INSTANCE_RELEASE),
        }
    }

    #[test]
    fn released_adapter_does_not_reach_native() {
        let adapter = released();
        assert!(matches!(adapter.get_info(), Err(Error::Released { kind: "Adapter" })));
        assert!(matches!(adapter.limits(), Err(Error::Released { .. })));
        assert!(matches!(adapter.features(), Err(Error::Released { .. })));
        assert!(matches!(
            adapter.has_feature(FeatureName::ShaderF16),
            Err(Error::Released { .. })
        ));
        assert!(matches!(
            adapter.request_device(&DeviceDescriptor::default()),
            Err(Error::Released { kind: "Adapter" })
        ));
    }

    #[test]
    fn failed_device_request() {
        let err = finish_request_device(
            0,
            Completion {
                status: native::request_device_status::ERROR,
                value: 0,
                message: "limits".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::RequestDevice { status: 3, .. }));
    }
}
