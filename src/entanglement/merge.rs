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

use crate::entanglement::error::EntanglementError;
use crate::geometry::position::Side;
use crate::geometry::trajectory::Trajectory;
use crate::numeric::scalar::Scalar;

/// Orders two trajectories pivoted on `side`: `left` comes first when its
/// chord peels off earlier in the clockwise direction. On the pivoted
/// domain every end side is `side.next()` or `side.prev()`, which makes
/// this relation a total order.
///
/// The relation doubles as the crossing rule: for a pair whose starts are
/// already ordered on `side`, the earlier-starting chord crosses the later
/// one exactly when the later one's end comes first under this order.
fn ends_before<T: Scalar>(left: &Trajectory<T>, right: &Trajectory<T>, side: Side) -> bool {
    (left.end.side == side.next() && right.end.side == side.prev())
        || (left.end.side == right.end.side && left.end.alpha < right.end.alpha)
}

/// Suffix probability mass of a sorted right half: for each index `i`, the
/// total probability of `right[i..]` ending on `side.next()` and on
/// `side.prev()` respectively. Any other end side is malformed input.
fn suffix_probabilities<T: Scalar>(
    right: &[Trajectory<T>],
    side: Side,
) -> Result<(Vec<T>, Vec<T>), EntanglementError> {
    let mut suffix_next = vec![T::zero(); right.len() + 1];
    let mut suffix_prev = vec![T::zero(); right.len() + 1];

    for (i, traj) in right.iter().enumerate().rev() {
        let mut next_mass = suffix_next[i + 1];
        let mut prev_mass = suffix_prev[i + 1];

        if traj.end.side == side.next() {
            next_mass += traj.probability;
        } else if traj.end.side == side.prev() {
            prev_mass += traj.probability;
        } else {
            return Err(EntanglementError::ForeignEndSide {
                pivot: side,
                end: traj.end.side,
            });
        }

        suffix_next[i] = next_mass;
        suffix_prev[i] = prev_mass;
    }

    Ok((suffix_next, suffix_prev))
}

/// Sorts the alpha-ordered pivot sequence for `side` under the
/// crosses-before order of `ends_before` and returns the expected
/// crossing contribution accumulated among all pairs whose relative order
/// the sort settles.
///
/// A pair with opposed end sides is counted with full weight `p_a * p_b`;
/// a pair sharing an end side with half weight, since the same pair is
/// seen again, with the same truth value, from the shared end side's own
/// pass. Splitting at the midpoint of the alpha-sorted sequence keeps
/// every left start strictly before every right start, so a left element,
/// at the moment it is emitted, settles its pairs against the whole
/// unmerged right tail at once via the suffix sums.
///
/// `scratch` is a reusable merge buffer: cleared on every merge, it only
/// ever grows to the length of `pivot`.
pub fn merge_and_count<T: Scalar>(
    pivot: &mut [Trajectory<T>],
    scratch: &mut Vec<Trajectory<T>>,
    side: Side,
) -> Result<T, EntanglementError> {
    let n = pivot.len();
    if n <= 1 {
        return Ok(T::zero());
    }

    let mid = n / 2;
    let (left, right) = pivot.split_at_mut(mid);

    let mut expected = merge_and_count(left, scratch, side)?;
    expected += merge_and_count(right, scratch, side)?;

    let (suffix_next, suffix_prev) = suffix_probabilities(right, side)?;
    let half = T::half();
    let next_side = side.next();
    let prev_side = side.prev();

    scratch.clear();
    let mut li = 0;
    let mut ri = 0;

    while li < left.len() && ri < right.len() {
        let l = left[li];
        if ends_before(&l, &right[ri], side) {
            // `l` starts before and ends before every unmerged right
            // element: full crossings against the opposed end side, half
            // crossings against its own.
            let mass = if l.end.side == next_side {
                suffix_next[ri] * half + suffix_prev[ri]
            } else if l.end.side == prev_side {
                suffix_next[ri] + suffix_prev[ri] * half
            } else {
                return Err(EntanglementError::ForeignEndSide {
                    pivot: side,
                    end: l.end.side,
                });
            };
            expected += l.probability * mass;

            scratch.push(l);
            li += 1;
        } else {
            scratch.push(right[ri]);
            ri += 1;
        }
    }

    // Drain the surviving half; cross-half pairs are all settled above.
    while li + ri < n {
        if li == left.len() {
            scratch.push(right[ri]);
            ri += 1;
        } else if ri == right.len() {
            let l = left[li];
            if l.end.side != next_side && l.end.side != prev_side {
                return Err(EntanglementError::ForeignEndSide {
                    pivot: side,
                    end: l.end.side,
                });
            }
            scratch.push(l);
            li += 1;
        } else {
            return Err(EntanglementError::MergeStalled);
        }
    }

    pivot.copy_from_slice(scratch);
    Ok(expected)
}
