use crate::{
    ffi::procs,
    handle::{impl_handle, RawHandle},
    *,
};

/// Handle to a query set.
///
/// It can be created with [`Device::create_query_set`].
///
/// Corresponds to [WebGPU `GPUQuerySet`](https://gpuweb.github.io/gpuweb/#queryset).
#[derive(Debug)]
pub struct QuerySet {
    pub(crate) handle: RawHandle,
}
static_assertions::assert_impl_all!(QuerySet: Send, Sync);

impl_handle!(QuerySet);

/// Describes a [`QuerySet`].
///
/// For use with [`Device::create_query_set`].
///
/// Corresponds to [WebGPU `GPUQuerySetDescriptor`](
/// https://gpuweb.github.io/gpuweb/#dictdef-gpuquerysetdescriptor).
pub type QuerySetDescriptor<'a> = wgt::QuerySetDescriptor<Label<'a>>;
static_assertions::assert_impl_all!(QuerySetDescriptor<'_>: Send, Sync);

impl QuerySet {
    /// Number of queries in the set.
    pub fn count(&self) -> Result<u32> {
        let raw = self.handle.get()?;
        // SAFETY: plain handle argument.
        Ok(unsafe { procs::QUERY_SET_GET_COUNT.invoke(&[raw]) }? as u32)
    }

    /// Kind of the queries in the set.
    ///
    /// Returns `None` for a type the native library reports but this crate does
    /// not know.
    pub fn query_type(&self) -> Result<Option<QueryType>> {
        let raw = self.handle.get()?;
        // SAFETY: plain handle argument.
        let ty = unsafe { procs::QUERY_SET_GET_TYPE.invoke(&[raw]) }? as u32;
        Ok(QueryType::from_raw(conv::query_type_from_native(ty)))
    }

    /// Destroys the native resources immediately, while keeping the handle.
    pub fn destroy(&self) -> Result<()> {
        let raw = self.handle.get()?;
        // SAFETY: plain handle argument.
        unsafe { procs::QUERY_SET_DESTROY.invoke(&[raw]) }.map(|_| ())
    }
}
