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
use crate::entanglement::merge::merge_and_count;
use crate::entanglement::projection::{pivot_on_side, sort_by_start_alpha};
use crate::geometry::position::Side;
use crate::geometry::trajectory::Trajectory;
use crate::numeric::scalar::Scalar;

/// A quantum triangle instance: an immutable set of quark trajectories.
/// The stored set is copied at construction and never mutated, so repeated
/// queries return identical values.
#[derive(Clone, Debug)]
pub struct QuantumTriangleSystem<T: Scalar> {
    trajectories: Vec<Trajectory<T>>,
}

impl<T: Scalar> QuantumTriangleSystem<T> {
    pub fn new(trajectories: Vec<Trajectory<T>>) -> Self {
        Self { trajectories }
    }

    pub fn trajectories(&self) -> &[Trajectory<T>] {
        &self.trajectories
    }

    /// Expected number of entanglements over all trajectory pairs, in
    /// O(n log n): one counting merge sort per triangle side, totals
    /// summed.
    ///
    /// Each crossing pair is counted exactly once across the three passes:
    /// with full weight from the side where the two pivoted orientations
    /// oppose, or as two half weights when the pair shares an end side.
    pub fn expected_entanglements(&self) -> Result<T, EntanglementError> {
        let mut expected = T::zero();
        for side in Side::ALL {
            expected += self.expected_on_side(side)?;
        }
        Ok(expected)
    }

    fn expected_on_side(&self, side: Side) -> Result<T, EntanglementError> {
        let mut pivot = pivot_on_side(&self.trajectories, side)?;
        sort_by_start_alpha(&mut pivot);

        let mut scratch = Vec::with_capacity(pivot.len());
        merge_and_count(&mut pivot, &mut scratch, side)
    }

    /// O(n^2) all-pairs evaluation of the same crossing rule. Reference
    /// oracle for the divide-and-conquer path; not meant for large inputs.
    pub fn expected_entanglements_quadratic(&self) -> Result<T, EntanglementError> {
        let mut expected = T::zero();
        for side in Side::ALL {
            expected += self.quadratic_on_side(side)?;
        }
        Ok(expected)
    }

    fn quadratic_on_side(&self, side: Side) -> Result<T, EntanglementError> {
        let mut pivot = pivot_on_side(&self.trajectories, side)?;
        sort_by_start_alpha(&mut pivot);

        let half = T::half();
        let mut expected = T::zero();

        for (i, first) in pivot.iter().enumerate() {
            for second in &pivot[i + 1..] {
                if first.end.side == side.next() && second.end.side == side.prev() {
                    expected += first.probability * second.probability;
                } else if first.end.side == second.end.side && first.end.alpha < second.end.alpha {
                    expected += first.probability * second.probability * half;
                }
            }
        }

        Ok(expected)
    }
}
