// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Integration tests for the softened gravity field

use nbody_core::body::{Body, BodyState};
use nbody_core::force::{ForceField, ForceResolution, GravityField};

fn body(x: f64, y: f64, mass: f64) -> Body {
    Body::new(BodyState::new(x, y, 0.0, 0.0, mass).unwrap(), 200).unwrap()
}

#[test]
fn test_coincident_bodies_give_finite_force() {
    let field = GravityField::new(2.0, 100.0);
    let bodies = [body(10.0, 10.0, 30.0), body(10.0, 10.0, 30.0)];

    let acc = field.accelerations(&bodies);

    // G * m / softening, exactly
    assert_eq!(field.pairwise_magnitude(0.0, 30.0), 2.0 * 30.0 / 100.0);
    for a in &acc {
        assert!(a.is_valid());
        assert_eq!(a.ax(), 0.6);
        assert_eq!(a.ay(), 0.0);
    }
}

#[test]
fn test_coincident_bodies_vector_resolution_is_finite() {
    let field = GravityField::new(1.0, 100.0).with_resolution(ForceResolution::Vector);
    let bodies = [body(0.0, 0.0, 1000.0), body(0.0, 0.0, 1000.0)];

    for a in field.accelerations(&bodies) {
        assert!(a.is_valid());
    }
}

#[test]
fn test_newton_third_law() {
    let field = GravityField::new(1.0, 100.0);
    let bodies = [body(-30.0, 12.0, 2.0), body(45.0, -7.0, 3.0)];

    let acc = field.accelerations(&bodies);
    let net_x = acc[0].ax() * 2.0 + acc[1].ax() * 3.0;
    let net_y = acc[0].ay() * 2.0 + acc[1].ay() * 3.0;

    assert!(net_x.abs() < 1e-15, "net force x = {}", net_x);
    assert!(net_y.abs() < 1e-15, "net force y = {}", net_y);
}

#[test]
fn test_acceleration_independent_of_receiver_mass() {
    let field = GravityField::new(1.0, 100.0);
    let light = field.accelerations(&[body(0.0, 0.0, 1.0), body(100.0, 0.0, 500.0)]);
    let heavy = field.accelerations(&[body(0.0, 0.0, 9000.0), body(100.0, 0.0, 500.0)]);
    assert_eq!(light[0], heavy[0]);
}

#[test]
fn test_softened_inverse_square() {
    let field = GravityField::new(1.0, 100.0);
    let near = field.accelerations(&[body(0.0, 0.0, 1.0), body(100.0, 0.0, 1.0)]);
    let far = field.accelerations(&[body(0.0, 0.0, 1.0), body(200.0, 0.0, 1.0)]);

    // (200² + 100) / (100² + 100)
    let expected = 40_100.0 / 10_100.0;
    let ratio = near[0].ax() / far[0].ax();
    assert!((ratio - expected).abs() < 1e-12, "ratio = {}", ratio);
}

#[test]
fn test_superposition_of_three_bodies() {
    let field = GravityField::new(1.0, 100.0);
    let bodies = [body(0.0, 0.0, 1.0), body(100.0, 0.0, 200.0), body(0.0, -50.0, 80.0)];
    let acc = field.accelerations(&bodies);

    let from_second = 200.0 / (10_000.0 + 100.0);
    let from_third = 80.0 / (2_500.0 + 100.0);
    assert!((acc[0].ax() - from_second).abs() < 1e-12);
    assert!((acc[0].ay() + from_third).abs() < 1e-12);
}

#[test]
fn test_output_order_matches_input() {
    let field = GravityField::new(1.0, 100.0);
    let bodies = [body(-100.0, 0.0, 10.0), body(0.0, 0.0, 10.0), body(100.0, 0.0, 10.0)];
    let acc = field.accelerations(&bodies);

    assert_eq!(acc.len(), 3);
    assert!(acc[0].ax() > 0.0);
    assert!(acc[1].ax().abs() < 1e-15);
    assert!(acc[2].ax() < 0.0);
}
