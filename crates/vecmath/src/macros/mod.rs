//! Code generation for the tuple and matrix families.
//!
//! Every concrete type is produced by one `macro_rules!` invocation so that the arithmetic of
//! e.g. `Point3f` and `Color3f` cannot drift apart.

#[macro_use]
mod tuple;

#[macro_use]
mod matrix;
