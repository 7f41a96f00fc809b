// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a paged product gallery ("carousel") widget for
//! e-commerce product pages, built with the Iced GUI framework.
//!
//! The crate arranges a set of slides into a horizontally paged strip with
//! navigation buttons, pagination bullets, keyboard and drag gestures,
//! responsive breakpoint behavior, and synchronization with a thumbnail
//! strip and a product-variant selector. The core logic lives in pure,
//! unit-testable components (`State`/`Message`/`Effect`); the Iced shell in
//! [`app`] only renders, routes native events, and drives timers.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod product;
pub mod thumbnails;

#[cfg(test)]
pub mod test_utils;
