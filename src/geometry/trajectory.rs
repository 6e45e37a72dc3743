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

use crate::geometry::position::Position;
use crate::numeric::scalar::Scalar;

/// A quark trajectory: a straight chord of the triangle from `start` to
/// `end`, with the probability that the quark actually travels it. Input
/// trajectories always have `start.side != end.side`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trajectory<T: Scalar> {
    pub start: Position<T>,
    pub end: Position<T>,
    pub probability: T,
}

impl<T: Scalar> Trajectory<T> {
    pub fn new(start: Position<T>, end: Position<T>, probability: T) -> Self {
        Self {
            start,
            end,
            probability,
        }
    }

    /// The same chord traversed the other way.
    pub fn inverse(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            probability: self.probability,
        }
    }
}
