//! Framebuffer graphics and refresh transmitter for the Sharp Memory LCD
//!
//! This crate provides:
//! - [`Framebuffer`]: the 400×240 1bpp pixel store
//! - Bit-level drawing on the store (images, strings, rectangles, 24-bit
//!   runs, inversion, fills, checkerboards)
//! - Five fixed-width fonts selected by [`FontId`]
//! - [`Transmitter`]: the LS027B7DH01 line protocol over a write-only SPI
//!   link with a software chip-select
//! - An `embedded-graphics` draw target on the framebuffer
//!
//! # Pixel format
//!
//! Pixel `x` of a row lives in byte `x / 8`, bit `x % 8`, which is the order
//! the panel shifts bits in over its LSB-first link. A cleared bit is a dark
//! pixel, a set bit is white.

#![no_std]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

mod draw_target;
pub mod error;
pub mod font;
pub mod framebuffer;
pub mod graphics;
pub mod protocol;
pub mod transmitter;

// Re-export key types
pub use error::DisplayError;
pub use font::{Font, FontId};
pub use framebuffer::{Framebuffer, HEIGHT, LINE_BYTES, WIDTH};
pub use graphics::{BitOrder, BlitOp, Color, FillValue};
pub use protocol::LINE_FRAME_LEN;
pub use transmitter::{chunk_buffer_len, FullFrameTransmitter, Transmitter};
