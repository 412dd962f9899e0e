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
//! Headless run of the star-with-two-planets scene
//!
//! Drives the simulation the way a render loop would: one call per frame,
//! with a [`FrameClock`] turning each frame's duration into fixed steps.
//! Instead of drawing, it prints what a renderer would receive.
//!
//! # Running
//!
//! ```bash
//! # 10 seconds of 60 FPS frames, one physics step per frame
//! cargo run --example orbits --release
//!
//! # Simulate a 144 Hz display at the same simulated speed
//! cargo run --example orbits --release -- --fps 144
//!
//! # Use direct vector normalization instead of atan2
//! RUST_LOG=debug cargo run --example orbits --release -- --vector
//! ```

use std::time::Duration;

use nbody_core::clock::FrameClock;
use nbody_core::force::ForceResolution;
use nbody_core::scene::{sun_earth_mars, Scene};
use nbody_core::SimulationConfig;

/// Canvas size the scene is centred on
const WIDTH: f64 = 1280.0;
const HEIGHT: f64 = 720.0;

struct DemoConfig {
    frames: usize,
    fps: f64,
    time_scale: f64,
    report_every: usize,
    resolution: ForceResolution,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            frames: 600,
            fps: 60.0,
            // 0.1 simulated units per 1/60 s frame
            time_scale: 6.0,
            report_every: 120,
            resolution: ForceResolution::Angular,
        }
    }
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i + 1).map(|s| s.parse::<T>()) {
        Some(Ok(value)) => value,
        _ => {
            eprintln!("Error: {} requires a numeric argument", flag);
            std::process::exit(1);
        }
    }
}

fn parse_args() -> DemoConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = DemoConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--frames" => {
                config.frames = parse_value(&args, i, "--frames");
                i += 2;
            }
            "--fps" => {
                config.fps = parse_value(&args, i, "--fps");
                i += 2;
            }
            "--time-scale" => {
                config.time_scale = parse_value(&args, i, "--time-scale");
                i += 2;
            }
            "--vector" => {
                config.resolution = ForceResolution::Vector;
                i += 1;
            }
            _ => {
                i += 1;
            }
        }
    }

    config
}

fn print_frame(frame: usize, scene: &Scene) {
    println!(
        "frame {:>5}  t = {:>7.1}  steps = {}",
        frame,
        scene.simulation().elapsed(),
        scene.simulation().steps()
    );
    for body in scene.frame() {
        let tail = body
            .trail
            .oldest()
            .map(|p| format!("({:8.2}, {:8.2})", p.x(), p.y()))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<6} {:<11} r={:5.2}  pos=({:8.2}, {:8.2})  trail {:>3} from {}",
            body.name,
            body.color.to_string(),
            body.radius,
            body.position.x(),
            body.position.y(),
            body.trail.len(),
            tail
        );
    }
}

fn main() {
    env_logger::init();

    println!("N-Body Orbits - Headless Demo");
    println!("=============================\n");

    let demo = parse_args();
    if !(demo.fps > 0.0 && demo.fps.is_finite()) {
        eprintln!("Error: --fps must be positive");
        std::process::exit(1);
    }

    let sim_config = SimulationConfig::default().with_resolution(demo.resolution);
    println!("Simulation Configuration:");
    println!("  G = {}", sim_config.gravitational_constant);
    println!("  dt = {}", sim_config.timestep);
    println!("  softening = {}", sim_config.softening);
    println!("  trail capacity = {}", sim_config.trail_capacity);
    println!("  resolution = {:?}", sim_config.resolution);
    println!("  {} frames at {} FPS, time scale {}\n", demo.frames, demo.fps, demo.time_scale);

    let entries = match sun_earth_mars(WIDTH / 2.0, HEIGHT / 2.0) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut clock = FrameClock::new(sim_config.timestep).with_time_scale(demo.time_scale);
    let mut scene = match Scene::new(entries, sim_config) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let frame_time = Duration::from_secs_f64(1.0 / demo.fps);
    for frame in 1..=demo.frames {
        for _ in 0..clock.advance(frame_time) {
            scene.update();
        }

        if frame % demo.report_every == 0 || frame == demo.frames {
            print_frame(frame, &scene);
        }
    }

    let com = scene.simulation().center_of_mass();
    println!("\nCenter of mass: ({:.3}, {:.3})", com.x(), com.y());
}
