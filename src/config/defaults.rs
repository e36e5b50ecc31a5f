// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Animation**: Slide lock and detail cross-fade phases
//! - **Images**: Decoded image cache and fetching limits
//! - **Diagnostics**: Event buffer bounds
//! - **Reveal**: Staggered fade-in of the detail view

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// How long navigation stays locked after a slide (ms).
pub const DEFAULT_SLIDE_LOCK_MS: u64 = 600;

/// Delay before the slider/detail views swap (ms).
pub const DEFAULT_DETAIL_MIDPOINT_MS: u64 = 400;

/// Delay between the view swap and the mask being dropped (ms).
pub const DEFAULT_DETAIL_SETTLE_MS: u64 = 50;

/// Minimum allowed phase delay (ms).
pub const MIN_TRANSITION_DELAY_MS: u64 = 1;

/// Maximum allowed phase delay (ms).
pub const MAX_TRANSITION_DELAY_MS: u64 = 5_000;

// ==========================================================================
// Image Defaults
// ==========================================================================

/// Default number of decoded artwork images kept in memory.
pub const DEFAULT_IMAGE_CACHE_CAPACITY: usize = 16;

/// Minimum image cache capacity.
pub const MIN_IMAGE_CACHE_CAPACITY: usize = 1;

/// Maximum image cache capacity.
pub const MAX_IMAGE_CACHE_CAPACITY: usize = 64;

/// Default number of neighbours preloaded on each side of the current artwork.
pub const DEFAULT_PREFETCH_NEIGHBORS: usize = 1;

/// Maximum number of neighbours preloaded on each side.
pub const MAX_PREFETCH_NEIGHBORS: usize = 4;

/// Default per-request timeout for remote images (seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;

/// Minimum request timeout (seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Largest accepted image body (32 MB).
pub const MAX_IMAGE_BYTES: usize = 32 * 1024 * 1024;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events retained.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Start delay of each revealed detail element, in display order (ms).
pub const REVEAL_DELAYS_MS: [u64; 5] = [200, 300, 400, 500, 600];

/// Fade duration of one revealed element (ms).
pub const REVEAL_FADE_MS: u64 = 500;

/// Vertical travel of a revealed element at the start of its fade (px).
pub const REVEAL_TRAVEL_PX: f32 = 16.0;
