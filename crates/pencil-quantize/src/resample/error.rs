//! Error types for kernel sampling and resampling.

use std::fmt;

use super::{Direction, KernelType};
use crate::buffer::BufferError;

/// Error returned by a single kernel [`sample()`](super::sample) call.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// The kernel is a known identifier without a sampling implementation.
    NotImplemented(KernelType),
    /// A sample coordinate was negative or not finite.
    InvalidCoordinate {
        /// Horizontal sample coordinate
        x: f32,
        /// Vertical sample coordinate
        y: f32,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::NotImplemented(kernel) => {
                write!(f, "kernel type not implemented: {}", kernel)
            }
            KernelError::InvalidCoordinate { x, y } => {
                write!(f, "invalid sample coordinate ({}, {})", x, y)
            }
        }
    }
}

impl std::error::Error for KernelError {}

/// Error type for [`resample()`](super::resample) and [`resize()`](super::resize).
#[derive(Debug, Clone, PartialEq)]
pub enum ResampleError {
    /// A precondition was violated before any work started.
    InvalidParameters(String),
    /// A kernel name did not match any [`KernelType`].
    UnknownKernel(String),
    /// Buffer allocation or copy failed.
    Buffer(BufferError),
    /// A kernel failed during one of the two passes.
    PassFailed {
        /// The pass that failed
        pass: Direction,
        /// The kernel failure
        source: KernelError,
    },
}

impl ResampleError {
    /// True if the failure is an unimplemented kernel.
    ///
    /// This is the one recoverable case: the inputs were valid and the
    /// caller may retry with another kernel.
    pub fn is_not_implemented(&self) -> bool {
        matches!(
            self,
            ResampleError::PassFailed {
                source: KernelError::NotImplemented(_),
                ..
            }
        )
    }
}

impl fmt::Display for ResampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResampleError::InvalidParameters(msg) => {
                write!(f, "invalid resample parameters: {}", msg)
            }
            ResampleError::UnknownKernel(name) => write!(f, "unknown kernel type: {}", name),
            ResampleError::Buffer(err) => write!(f, "buffer error: {}", err),
            ResampleError::PassFailed { pass, source } => {
                write!(f, "{} resample pass failed: {}", pass, source)
            }
        }
    }
}

impl std::error::Error for ResampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResampleError::Buffer(err) => Some(err),
            ResampleError::PassFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<BufferError> for ResampleError {
    fn from(err: BufferError) -> Self {
        ResampleError::Buffer(err)
    }
}
