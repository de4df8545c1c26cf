//! Schema-binding library generators.

mod ksonnet_lib;

pub use ksonnet_lib::KsonnetLibGenerator;
