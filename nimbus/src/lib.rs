#![doc = include_str!("../README.md")]

pub use nimbus_core::*;

pub mod ec2;
