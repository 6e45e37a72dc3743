// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::error::Error;
use std::fmt;

use crate::geometry::position::Side;

/// Failures of the entanglement computation. Every variant is fatal for
/// the call that raised it: either the input violates a documented
/// invariant or the merge reached a state it proves impossible. There is
/// no recovery and no partial result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntanglementError {
    /// A trajectory has both endpoints on the same side.
    SameSideEndpoints { side: Side },
    /// A trajectory pivoted on `pivot` ends on a side other than
    /// `pivot.next()` or `pivot.prev()`.
    ForeignEndSide { pivot: Side, end: Side },
    /// The merge drain loop could not make progress. Unreachable for any
    /// input; guards against regressions in the merge itself.
    MergeStalled,
}

impl fmt::Display for EntanglementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntanglementError::SameSideEndpoints { side } => {
                write!(f, "trajectory starts and ends on side {:?}", side)
            }
            EntanglementError::ForeignEndSide { pivot, end } => {
                write!(
                    f,
                    "trajectory pivoted on side {:?} ends on side {:?}",
                    pivot, end
                )
            }
            EntanglementError::MergeStalled => write!(f, "merge drain loop stalled"),
        }
    }
}

impl Error for EntanglementError {}
