use clap::{Parser, Subcommand};
use glam::Vec3;
use promenade_input::InputState;
use promenade_render::{DebugTextRenderer, RenderView, Renderer};
use promenade_scene::{FloorMesh, Gallery, GroundProbe};
use promenade_sim::{Mover, MoverConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "promenade-cli", about = "Headless tools for the gallery demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate info
    Info,
    /// Run the movement integrator headless and print the trajectory
    Simulate {
        /// Number of frames to step
        #[arg(short, long, default_value = "120")]
        frames: u32,
        /// Seconds per frame
        #[arg(short, long, default_value = "0.016")]
        dt: f32,
        /// Hold the forward key for the whole run
        #[arg(long)]
        hold_forward: bool,
        /// Request a jump at this frame
        #[arg(long)]
        jump_at: Option<u32>,
    },
    /// Describe the gallery scene
    Scene,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("promenade-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("input: {}", promenade_input::crate_info());
            println!("scene: {}", promenade_scene::crate_info());
            println!("render: {}", promenade_render::crate_info());
            println!("assets: {}", promenade_assets::crate_info());
            let config = MoverConfig::default();
            println!(
                "sim: damping={} gravity*mass={} accel={} jump={} floor={}",
                config.damping,
                config.gravity * config.mass,
                config.accel,
                config.jump_impulse,
                config.floor_height
            );
        }
        Commands::Simulate {
            frames,
            dt,
            hold_forward,
            jump_at,
        } => {
            println!("Simulating {frames} frames at dt={dt}s (hold_forward={hold_forward})");

            let gallery = Gallery::build();
            let probe = GroundProbe::new(gallery.standable_surfaces());
            let mut mover = Mover::new(MoverConfig {
                floor_height: gallery.eye_height,
                ..MoverConfig::default()
            });
            let mut input = InputState::new();
            input.forward = hold_forward;

            // Viewer faces -Z at spawn, so control-space forward is -Z and
            // control-space right is +X.
            let mut pos = Vec3::new(0.0, gallery.eye_height, 0.0);
            let mut peak_height = pos.y;

            for frame in 0..frames {
                if jump_at == Some(frame) {
                    input.request_jump();
                }
                // No previous timestamp exists on the very first frame.
                let frame_dt = if frame == 0 { 0.0 } else { dt };
                let grounded = probe.grounded(pos);
                let out = mover.step(frame_dt, &mut input, grounded)?;

                pos.x += out.right;
                pos.z -= out.forward;
                pos.y += out.vertical;
                let (y, clamped) = mover.clamp_to_floor(pos.y);
                pos.y = y;
                peak_height = peak_height.max(pos.y);

                if frame % 10 == 0 {
                    println!(
                        "  frame {frame:>4}: pos=({:.2}, {:.2}, {:.2}) vy={:.1}{}",
                        pos.x,
                        pos.y,
                        pos.z,
                        mover.velocity().y,
                        if clamped { " [floor]" } else { "" }
                    );
                }
            }

            println!(
                "Final: pos=({:.2}, {:.2}, {:.2}) velocity=({:.2}, {:.2}, {:.2}) peak_y={:.2}",
                pos.x,
                pos.y,
                pos.z,
                mover.velocity().x,
                mover.velocity().y,
                mover.velocity().z,
                peak_height
            );
        }
        Commands::Scene => {
            let gallery = Gallery::build();
            let view = RenderView {
                eye: Vec3::new(0.0, gallery.eye_height, 0.0),
                ..RenderView::default()
            };
            print!("{}", DebugTextRenderer::new().render(&gallery, &view));

            let floor = FloorMesh::generate(gallery.floor_seed);
            println!(
                "Floor: {} vertices (seed={})",
                floor.vertex_count(),
                gallery.floor_seed
            );
        }
    }

    Ok(())
}
