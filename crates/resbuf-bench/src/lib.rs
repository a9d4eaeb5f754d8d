//! Benchmark profiles for resbuf lifecycle operations.
//!
//! - [`BUFFER_LENS`]: element counts swept by every benchmark
//! - [`profile_resource`]: a populated resource of a given length

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use resbuf::{Resource, ResourceError};

/// Element counts swept by the lifecycle benchmarks: 10 (the demonstration
/// size) up to 1M (4MB buffers).
pub const BUFFER_LENS: [usize; 4] = [10, 1_000, 100_000, 1_000_000];

/// A resource of `len` elements holding `0..len`.
pub fn profile_resource(len: usize) -> Result<Resource, ResourceError> {
    resbuf::scenario::populated(len)
}
