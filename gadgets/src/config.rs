use serde::{Deserialize, Serialize};

use crate::error::{GadgetError, GadgetResult};

/// Number of windows served by one base point when nothing else is specified.
pub const CHUNKS_PER_BASE_POINT: usize = 62;

/// Tunables of [crate::fixed_base::FixedBaseMul].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedBaseConfig {
    /// Windows sharing a base point. Past that many windows the next base
    /// point of the list takes over.
    pub chunks_per_base_point: usize,
}

impl Default for FixedBaseConfig {
    fn default() -> Self {
        Self {
            chunks_per_base_point: CHUNKS_PER_BASE_POINT,
        }
    }
}

impl FixedBaseConfig {
    pub fn with_chunks_per_base_point(chunks_per_base_point: usize) -> Self {
        Self {
            chunks_per_base_point,
        }
    }

    /// A configuration in which the first base point serves all `num_windows`
    /// windows.
    pub fn single_segment(num_windows: usize) -> Self {
        Self::with_chunks_per_base_point(num_windows.max(1))
    }

    /// Number of base points needed for `num_windows` windows.
    pub fn segments(&self, num_windows: usize) -> GadgetResult<usize> {
        if self.chunks_per_base_point == 0 {
            return Err(GadgetError::EmptySegment);
        }
        Ok(num_windows.div_ceil(self.chunks_per_base_point))
    }
}
