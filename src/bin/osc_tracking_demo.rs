//! OSC Tracking Demo
//!
//! Streams a synthetic head and two controllers to an OSC consumer at 90 Hz.
//!
//! ```text
//! osc_tracking_demo [HOST:PORT] [SECONDS]
//! ```

use anyhow::{Context, Result};
use std::net::SocketAddrV4;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use osc_tracking_output::{
    config::OscConfig,
    tracking::{ClockOffset, DeviceId, DevicePose, Quat, Tracking, Vec3},
    OscOutput,
};

const FRAME_RATE_HZ: f32 = 90.0;
const STATS_INTERVAL: Duration = Duration::from_secs(5);

/// Rotation of `angle` radians about +Y
fn yaw(angle: f32) -> Quat {
    let half = angle * 0.5;
    Quat::new(0.0, half.sin(), 0.0, half.cos())
}

/// Controller circling the head at `radius`, `phase` radians ahead
fn orbiting_controller(device: DeviceId, t: f32, radius: f32, phase: f32) -> DevicePose {
    let angle = t + phase;
    DevicePose::new(device)
        .with_position(Vec3::new(radius * angle.cos(), 1.2, radius * angle.sin()))
        .with_orientation(yaw(-angle))
        .with_linear_velocity(Vec3::new(-radius * angle.sin(), 0.0, radius * angle.cos()))
        .with_angular_velocity(Vec3::new(0.0, -1.0, 0.0))
}

fn synthetic_frame(t: f32) -> Tracking {
    let bob = 0.05 * (2.0 * t).sin();
    let head = DevicePose::new(DeviceId::Head)
        .with_position(Vec3::new(0.0, 1.6 + bob, 0.0))
        .with_orientation(yaw(0.3 * t.sin()))
        .with_linear_velocity(Vec3::new(0.0, 0.1 * (2.0 * t).cos(), 0.0))
        .with_angular_velocity(Vec3::new(0.0, 0.3 * t.cos(), 0.0));

    Tracking::new(vec![
        head,
        orbiting_controller(DeviceId::LeftGrip, t, 0.4, 0.0),
        orbiting_controller(DeviceId::RightGrip, t, 0.4, std::f32::consts::PI),
    ])
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting OSC tracking demo");

    let mut config = OscConfig::load_or_default();

    // A target on the command line always enables output
    if let Some(target) = std::env::args().nth(1) {
        let target: SocketAddrV4 = target
            .parse()
            .with_context(|| format!("Invalid target address: {}", target))?;
        config.host = target.ip().to_string();
        config.port = target.port();
        config.enabled = true;
    }

    let duration = std::env::args()
        .nth(2)
        .map(|s| s.parse::<u64>().map(Duration::from_secs))
        .transpose()
        .context("Invalid duration")?;

    if !config.enabled {
        tracing::warn!("OSC output is disabled; pass HOST:PORT or set OSC_ENABLED=1");
    }

    let mut output = OscOutput::from_config(&config);
    let offset = ClockOffset::default();
    let frame_interval = Duration::from_secs_f32(1.0 / FRAME_RATE_HZ);

    tracing::info!(
        "Sending to {}:{} at {} Hz - press Ctrl+C to stop",
        config.host,
        config.port,
        FRAME_RATE_HZ
    );

    let start_time = Instant::now();
    let mut last_stats_time = start_time;
    let mut next_frame = start_time;

    loop {
        let elapsed = start_time.elapsed();
        if duration.is_some_and(|d| elapsed >= d) {
            break;
        }

        output.send_tracking(&synthetic_frame(elapsed.as_secs_f32()), &offset);

        // Periodic stats logging
        if last_stats_time.elapsed() >= STATS_INTERVAL {
            last_stats_time = Instant::now();
            let stats = output.stats();
            tracing::info!(
                "Stats: {} messages sent, {:.1} KB sent, {} failed, {} dropped",
                stats.messages_sent,
                stats.bytes_sent as f64 / 1024.0,
                stats.send_failures,
                stats.messages_dropped
            );
        }

        next_frame += frame_interval;
        let now = Instant::now();
        if next_frame > now {
            std::thread::sleep(next_frame - now);
        } else {
            // Fell behind; don't try to catch up with a burst
            next_frame = now;
        }
    }

    let stats = output.stats();
    tracing::info!(
        "Done: {} messages, {} bytes",
        stats.messages_sent,
        stats.bytes_sent
    );
    Ok(())
}
