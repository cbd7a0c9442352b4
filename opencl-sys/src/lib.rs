#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::missing_safety_doc)]

pub mod bindings;

#[cfg(not(opencl_linked))]
mod unlinked;

#[cfg(test)]
mod library;
