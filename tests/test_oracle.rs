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

use qtri::entanglement::{QuantumTriangleSystem, merge_and_count, pivot_on_side, sort_by_start_alpha};
use qtri::geometry::{Position, Side, Trajectory};
use qtri::sampling::random_trajectories;

use rand::{Rng, SeedableRng, rngs::StdRng};

const TOL: f64 = 1e-3;

#[test]
fn matches_quadratic_oracle_on_random_instances() {
    for seed in 0..8u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        for &n in &[1usize, 2, 3, 10, 57, 200] {
            let qs = QuantumTriangleSystem::new(random_trajectories(&mut rng, n));

            let fast = qs.expected_entanglements().unwrap();
            let slow = qs.expected_entanglements_quadratic().unwrap();

            assert!(
                (fast - slow).abs() < TOL,
                "seed {} n {}: fast {} vs quadratic {}",
                seed,
                n,
                fast,
                slow
            );
        }
    }
}

#[test]
fn matches_quadratic_oracle_tightly_at_mid_size() {
    // Both paths run in f64, so at this size they agree far below the
    // documented 1e-3 tolerance.
    for seed in 200..220u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let qs = QuantumTriangleSystem::new(random_trajectories(&mut rng, 151));

        let fast = qs.expected_entanglements().unwrap();
        let slow = qs.expected_entanglements_quadratic().unwrap();

        assert!(
            (fast - slow).abs() < 1e-6,
            "seed {}: fast {} vs quadratic {}",
            seed,
            fast,
            slow
        );
    }
}

#[test]
fn matches_oracle_when_all_pairs_share_an_end_side() {
    // Every trajectory runs between sides Ab and Bc with a random
    // direction, so every crossing is detected twice at half weight. This
    // is the double-counting correction exercised in isolation.
    for seed in 100..108u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = 120;

        let mut trajectories = Vec::with_capacity(n);
        for i in 0..n {
            let a = Position::new(Side::Ab, (2 * i + 1) as f64 / (2 * n) as f64);
            let b = Position::new(
                Side::Bc,
                rng.random_range(f64::EPSILON..1.0),
            );
            let p = rng.random_range(0.0..=1.0);
            let forward = Trajectory::new(a, b, p);
            trajectories.push(if rng.random_range(0..2) == 0 {
                forward
            } else {
                forward.inverse()
            });
        }

        let qs = QuantumTriangleSystem::new(trajectories);
        let fast = qs.expected_entanglements().unwrap();
        let slow = qs.expected_entanglements_quadratic().unwrap();

        assert!(
            (fast - slow).abs() < TOL,
            "seed {}: fast {} vs quadratic {}",
            seed,
            fast,
            slow
        );
    }
}

#[test]
fn single_pass_counts_shared_end_side_at_half_weight() {
    // One crossing pair viewed from side Ab alone contributes half of
    // p_i * p_j; the other half belongs to the side Bc pass.
    let trajectories: Vec<Trajectory<f64>> = vec![
        Trajectory::new(
            Position::new(Side::Ab, 0.3),
            Position::new(Side::Bc, 0.8),
            0.5,
        ),
        Trajectory::new(
            Position::new(Side::Ab, 0.5),
            Position::new(Side::Bc, 0.85),
            0.5,
        ),
    ];

    let mut pivot = pivot_on_side(&trajectories, Side::Ab).unwrap();
    sort_by_start_alpha(&mut pivot);

    let mut scratch = Vec::new();
    let on_ab = merge_and_count(&mut pivot, &mut scratch, Side::Ab).unwrap();
    assert!((on_ab - 0.125).abs() < 1e-12, "got {}", on_ab);
}

#[test]
fn single_pass_counts_opposed_end_sides_at_full_weight() {
    // Earlier start heading to next(s), later start heading to prev(s):
    // counted once, in full, from this side only.
    let trajectories: Vec<Trajectory<f64>> = vec![
        Trajectory::new(
            Position::new(Side::Ab, 0.2),
            Position::new(Side::Bc, 0.6),
            0.5,
        ),
        Trajectory::new(
            Position::new(Side::Ab, 0.7),
            Position::new(Side::Ca, 0.4),
            0.5,
        ),
    ];

    let mut pivot = pivot_on_side(&trajectories, Side::Ab).unwrap();
    sort_by_start_alpha(&mut pivot);

    let mut scratch = Vec::new();
    let on_ab = merge_and_count(&mut pivot, &mut scratch, Side::Ab).unwrap();
    assert!((on_ab - 0.25).abs() < 1e-12, "got {}", on_ab);
}

#[test]
fn projection_reorients_and_drops() {
    let trajectories = vec![
        Trajectory::new(
            Position::new(Side::Ab, 0.25),
            Position::new(Side::Bc, 0.5),
            0.9,
        ),
        Trajectory::new(
            Position::new(Side::Ca, 0.3),
            Position::new(Side::Ab, 0.75),
            0.8,
        ),
        Trajectory::new(
            Position::new(Side::Bc, 0.1),
            Position::new(Side::Ca, 0.9),
            0.7,
        ),
    ];

    let pivot = pivot_on_side(&trajectories, Side::Ab).unwrap();
    assert_eq!(pivot.len(), 2);
    assert!(pivot.iter().all(|t| t.start.side == Side::Ab));

    // The Ca -> Ab trajectory is reversed, probability intact.
    let reversed = pivot.iter().find(|t| t.end.side == Side::Ca).unwrap();
    assert_eq!(reversed.start.alpha, 0.75);
    assert_eq!(reversed.end.alpha, 0.3);
    assert_eq!(reversed.probability, 0.8);
}

#[test]
fn merge_leaves_sequence_sorted_by_end_order() {
    let mut rng = StdRng::seed_from_u64(42);
    let trajectories = random_trajectories(&mut rng, 300);

    let mut pivot = pivot_on_side(&trajectories, Side::Bc).unwrap();
    sort_by_start_alpha(&mut pivot);

    let mut scratch = Vec::new();
    merge_and_count(&mut pivot, &mut scratch, Side::Bc).unwrap();

    for pair in pivot.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let ordered = (a.end.side == Side::Bc.next() && b.end.side == Side::Bc.prev())
            || (a.end.side == b.end.side && a.end.alpha < b.end.alpha);
        assert!(ordered, "{:?} not before {:?}", a, b);
    }
}
