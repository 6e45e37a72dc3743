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

use crate::numeric::scalar::Scalar;

/// One edge of the equilateral triangle ABC, enumerated in clockwise order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Ab = 0,
    Bc = 1,
    Ca = 2,
}

impl Side {
    pub const ALL: [Side; 3] = [Side::Ab, Side::Bc, Side::Ca];

    /// The side following `self` clockwise, i.e. `(s + 1) mod 3`.
    pub fn next(self) -> Side {
        match self {
            Side::Ab => Side::Bc,
            Side::Bc => Side::Ca,
            Side::Ca => Side::Ab,
        }
    }

    /// The side preceding `self` clockwise, i.e. `(s + 2) mod 3`.
    pub fn prev(self) -> Side {
        self.next().next()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Side> {
        match i {
            0 => Some(Side::Ab),
            1 => Some(Side::Bc),
            2 => Some(Side::Ca),
            _ => None,
        }
    }
}

/// A point on the triangle boundary: one side plus the clockwise fraction
/// `alpha` along it, strictly inside (0, 1). Corners are never trajectory
/// endpoints, and all endpoints of an instance are pairwise distinct.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position<T: Scalar> {
    pub side: Side,
    pub alpha: T,
}

impl<T: Scalar> Position<T> {
    pub fn new(side: Side, alpha: T) -> Self {
        Self { side, alpha }
    }
}
