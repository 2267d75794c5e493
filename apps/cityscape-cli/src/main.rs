use anyhow::{Context, bail};
use cityscape_assets::city_block;
use cityscape_input::{InputState, KeyBindings};
use cityscape_kernel::FrameLoop;
use cityscape_render::{DebugTextRenderer, Renderer};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cityscape-cli", about = "Headless driver for the cityscape frame loop")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version, crate info and scene statistics
    Info,
    /// Run the frame loop against a synthetic clock and print each frame
    Simulate {
        /// Number of frames to run
        #[arg(short, long, default_value = "10")]
        frames: u32,
        /// Seconds between frames
        #[arg(long, default_value = "0.016")]
        dt: f32,
        /// Key held for the whole run, e.g. KeyW (repeatable)
        #[arg(long)]
        hold: Vec<String>,
        /// Key tapped before a frame, as FRAME:KEY, e.g. 3:KeyL (repeatable)
        #[arg(long)]
        tap: Vec<String>,
        /// JSON key bindings file replacing the defaults
        #[arg(long)]
        bindings: Option<PathBuf>,
    },
}

/// Parse a `FRAME:KEY` tap. Frames are numbered from 1 to `frames`.
fn parse_tap(arg: &str, frames: u32) -> anyhow::Result<(u32, String)> {
    let Some((frame, key)) = arg.split_once(':') else {
        bail!("tap {arg:?} is not FRAME:KEY");
    };
    let frame = frame
        .parse()
        .with_context(|| format!("tap {arg:?} has a bad frame number"))?;
    if !(1..=frames).contains(&frame) {
        bail!("tap {arg:?} is outside frames 1..={frames}");
    }
    if key.is_empty() {
        bail!("tap {arg:?} has no key");
    }
    Ok((frame, key.to_string()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            let mesh = city_block();
            println!("cityscape-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("input: {}", cityscape_input::crate_info());
            println!("render: {}", cityscape_render::crate_info());
            println!("assets: {}", cityscape_assets::crate_info());
            println!(
                "scene: {} vertices, {} triangles",
                mesh.vertices.len(),
                mesh.triangle_count()
            );
            for (key, action) in KeyBindings::default().iter() {
                println!("  {key:<8} {action:?}");
            }
        }
        Commands::Simulate {
            frames,
            dt,
            hold,
            tap,
            bindings,
        } => {
            if dt < 0.0 {
                bail!("--dt must not be negative");
            }
            let bindings = match bindings {
                Some(path) => KeyBindings::load(&path).with_context(|| {
                    format!("failed to load key bindings from {}", path.display())
                })?,
                None => KeyBindings::default(),
            };
            let taps = tap
                .iter()
                .map(|t| parse_tap(t, frames))
                .collect::<anyhow::Result<Vec<_>>>()?;

            tracing::debug!("simulating {frames} frames at dt={dt}");
            let mut input = InputState::new();
            for key in &hold {
                input.handle_key(key, true);
            }

            let mut frame_loop = FrameLoop::with_default_scene();
            let renderer = DebugTextRenderer::new();

            for i in 1..=frames {
                for (_, key) in taps.iter().filter(|(at, _)| *at == i) {
                    input.handle_key(key, true);
                    input.handle_key(key, false);
                }
                let actions = input.frame_actions(&bindings);
                let now = i as f32 * dt;
                match frame_loop.step(now, &actions) {
                    Some(frame) => {
                        println!("frame {i} t={now:.3}s");
                        print!("{}", renderer.render(&frame));
                    }
                    None => {
                        println!("frame {i} t={now:.3}s terminated");
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_parses() {
        assert_eq!(parse_tap("3:KeyL", 10).unwrap(), (3, "KeyL".to_string()));
        assert_eq!(parse_tap("10:KeyL", 10).unwrap().0, 10);
    }

    #[test]
    fn tap_rejects_malformed() {
        assert!(parse_tap("KeyL", 10).is_err());
        assert!(parse_tap("x:KeyL", 10).is_err());
        assert!(parse_tap("4:", 10).is_err());
    }

    #[test]
    fn tap_rejects_frame_outside_run() {
        assert!(parse_tap("0:KeyL", 10).is_err());
        assert!(parse_tap("11:KeyL", 10).is_err());
        assert!(parse_tap("1:KeyL", 0).is_err());
    }
}
