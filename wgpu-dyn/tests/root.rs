mod common;

mod compute;
mod error_scope;
mod instance;
mod render;
mod surface;
