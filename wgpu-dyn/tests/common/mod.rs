#![allow(dead_code)]

use parking_lot::{const_mutex, Mutex, MutexGuard};
use wgpu_dyn::{Adapter, Device, Instance, Queue};

/// Initialize the logger for the test runner.
pub fn init_logger() {
    // We don't actually care if it fails
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Everything a GPU test needs.
pub struct TestingContext {
    pub instance: Instance,
    pub adapter: Adapter,
    pub device: Device,
    pub queue: Queue,
}

/// Loads the native library and opens the default adapter and device.
///
/// Returns `None`, after logging why, when the machine cannot run GPU tests.
pub fn initialize_test() -> Option<TestingContext> {
    init_logger();
    let instance = initialize_instance()?;
    let adapter = match instance.request_adapter(&Default::default()) {
        Ok(adapter) => adapter,
        Err(e) => {
            log::warn!("Skipping test: no adapter ({e})");
            return None;
        }
    };
    let device = adapter
        .request_device(&Default::default())
        .expect("adapter refused a default device");
    let queue = device.get_queue().expect("device has no queue");
    Some(TestingContext {
        instance,
        adapter,
        device,
        queue,
    })
}

/// Loads the native library and creates a default instance.
pub fn initialize_instance() -> Option<Instance> {
    init_logger();
    if let Err(e) = wgpu_dyn::loader::init() {
        log::warn!("Skipping test: {e}");
        return None;
    }
    Some(Instance::new(&Default::default()).expect("failed to create an instance"))
}

static LEAK_TRACKER: Mutex<()> = const_mutex(());

/// The leak tracker is process-wide; tests that read it hold this.
pub fn leak_tracker() -> MutexGuard<'static, ()> {
    LEAK_TRACKER.lock()
}

/// Doubles every element of a storage array of 64 floats.
pub const DOUBLE_SHADER: &str = r#"
@group(0) @binding(0)
var<storage, read_write> data: array<f32, 64>;

@compute @workgroup_size(64)
fn main(@builtin(global_invocation_id) id: vec3<u32>) {
    data[id.x] = data[id.x] * 2.0;
}
"#;

/// `[1.0, 2.0, ..., 64.0]`
pub fn ramp() -> Vec<f32> {
    (1..=64).map(|i| i as f32).collect()
}
