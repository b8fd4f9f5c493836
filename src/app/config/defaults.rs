// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Image swap**: Delay and dimming applied while the gallery swaps images
//! - **Thumbnails**: Decoded thumbnail size and cache bounds
//! - **Diagnostics**: Capacity of the in-memory diagnostics buffer

// ==========================================================================
// Image Swap Defaults
// ==========================================================================

/// Delay between dimming the main image and committing the new source (ms).
pub const DEFAULT_SWAP_DELAY_MS: u64 = 150;

/// Minimum swap delay (ms). Zero commits on the next update cycle.
pub const MIN_SWAP_DELAY_MS: u64 = 0;

/// Maximum swap delay (ms).
pub const MAX_SWAP_DELAY_MS: u64 = 1_000;

/// Opacity of the main image while a swap is in flight.
pub const DEFAULT_DIM_OPACITY: f32 = 0.7;

/// Lowest allowed dim opacity.
pub const MIN_DIM_OPACITY: f32 = 0.0;

/// Highest allowed dim opacity (no visible dip).
pub const MAX_DIM_OPACITY: f32 = 1.0;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Longest edge, in pixels, of a decoded thumbnail.
pub const DEFAULT_THUMBNAIL_EDGE_PX: u32 = 160;

/// Number of decoded thumbnails kept in memory.
pub const DEFAULT_THUMBNAIL_CACHE_ENTRIES: usize = 64;

/// Minimum thumbnail cache size.
pub const MIN_THUMBNAIL_CACHE_ENTRIES: usize = 8;

/// Maximum thumbnail cache size.
pub const MAX_THUMBNAIL_CACHE_ENTRIES: usize = 512;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events retained in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 4_096;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MAX_SWAP_DELAY_MS >= MIN_SWAP_DELAY_MS);
    assert!(DEFAULT_SWAP_DELAY_MS >= MIN_SWAP_DELAY_MS);
    assert!(DEFAULT_SWAP_DELAY_MS <= MAX_SWAP_DELAY_MS);

    assert!(MIN_DIM_OPACITY >= 0.0);
    assert!(MAX_DIM_OPACITY <= 1.0);
    assert!(DEFAULT_DIM_OPACITY >= MIN_DIM_OPACITY);
    assert!(DEFAULT_DIM_OPACITY <= MAX_DIM_OPACITY);

    assert!(DEFAULT_THUMBNAIL_EDGE_PX > 0);
    assert!(MIN_THUMBNAIL_CACHE_ENTRIES > 0);
    assert!(MAX_THUMBNAIL_CACHE_ENTRIES >= MIN_THUMBNAIL_CACHE_ENTRIES);
    assert!(DEFAULT_THUMBNAIL_CACHE_ENTRIES >= MIN_THUMBNAIL_CACHE_ENTRIES);
    assert!(DEFAULT_THUMBNAIL_CACHE_ENTRIES <= MAX_THUMBNAIL_CACHE_ENTRIES);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
