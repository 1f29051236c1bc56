//! Constant values for the stepcrypt engines
//!
//! This crate provides the sizes and round counts shared by the
//! algorithm crate, its tests and any presentation layer built on top.

#![no_std]

pub mod utils;
