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

//! Random valid instances, used by the oracle and scaling tests.

use std::collections::HashSet;

use rand::Rng;

use crate::geometry::position::{Position, Side};
use crate::geometry::trajectory::Trajectory;

/// Draws `n` trajectories with endpoints on two distinct random sides,
/// globally distinct endpoint alphas per side and probabilities in [0, 1].
pub fn random_trajectories<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Trajectory<f64>> {
    let mut used: [HashSet<u64>; 3] = [HashSet::new(), HashSet::new(), HashSet::new()];
    let mut trajectories = Vec::with_capacity(n);

    while trajectories.len() < n {
        let start_side = Side::ALL[rng.random_range(0..3usize)];
        let end_side = if rng.random_range(0..2) == 0 {
            start_side.next()
        } else {
            start_side.prev()
        };

        let start = fresh_position(rng, &mut used, start_side);
        let end = fresh_position(rng, &mut used, end_side);

        trajectories.push(Trajectory::new(start, end, rng.random_range(0.0..=1.0)));
    }

    trajectories
}

fn fresh_position<R: Rng + ?Sized>(
    rng: &mut R,
    used: &mut [HashSet<u64>; 3],
    side: Side,
) -> Position<f64> {
    loop {
        let alpha: f64 = rng.random_range(f64::EPSILON..1.0);
        if used[side.index()].insert(alpha.to_bits()) {
            return Position::new(side, alpha);
        }
    }
}
