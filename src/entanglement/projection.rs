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

use std::cmp::Ordering;

use crate::entanglement::error::EntanglementError;
use crate::geometry::position::Side;
use crate::geometry::trajectory::Trajectory;
use crate::numeric::scalar::Scalar;

/// Reorients every trajectory touching `side` so that it starts there and
/// drops trajectories touching `side` at neither endpoint.
///
/// Pure over the input set; the emitted trajectories are fresh values that
/// never alias the stored ones. A trajectory with both endpoints on `side`
/// violates the instance invariant and is rejected.
pub fn pivot_on_side<T: Scalar>(
    trajectories: &[Trajectory<T>],
    side: Side,
) -> Result<Vec<Trajectory<T>>, EntanglementError> {
    let mut pivot = Vec::new();

    for traj in trajectories {
        if traj.start.side == side && traj.end.side == side {
            return Err(EntanglementError::SameSideEndpoints { side });
        } else if traj.start.side == side {
            pivot.push(*traj);
        } else if traj.end.side == side {
            pivot.push(traj.inverse());
        }
    }

    Ok(pivot)
}

/// Sorts a pivoted sequence by start position, matching the clockwise
/// traversal of the pivot side. Start alphas are pairwise distinct by the
/// distinct-endpoint invariant, so the order is total.
pub fn sort_by_start_alpha<T: Scalar>(pivot: &mut [Trajectory<T>]) {
    pivot.sort_unstable_by(|a, b| {
        a.start
            .alpha
            .partial_cmp(&b.start.alpha)
            .unwrap_or(Ordering::Equal)
    });
}
