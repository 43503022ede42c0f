//! The two summation orders.
//!
//! Both visit every cell exactly once and differ only in loop nesting,
//! so they must agree on the total. What changes is the memory stride of
//! the inner loop.

pub mod stride_1;
pub mod stride_n;

use std::fmt;

use crate::grid::Grid;

/// Which loop nesting to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Rows outer, columns inner.
    Stride1,
    /// Columns outer, rows inner.
    StrideN,
}

impl Traversal {
    /// Both traversals, in reporting order.
    pub const ALL: [Traversal; 2] = [Traversal::Stride1, Traversal::StrideN];

    pub fn name(self) -> &'static str {
        match self {
            Traversal::Stride1 => "stride-1",
            Traversal::StrideN => "stride-N",
        }
    }

    /// The summation routine for this order.
    pub fn sum_fn(self) -> fn(&Grid) -> i64 {
        match self {
            Traversal::Stride1 => stride_1::sum_stride_1,
            Traversal::StrideN => stride_n::sum_stride_n,
        }
    }

    pub fn sum(self, grid: &Grid) -> i64 {
        (self.sum_fn())(grid)
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
