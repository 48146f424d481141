//! Stillpoint entry point
//!
//! Headless demo driver: an autopilot holds the presence near the sustainable
//! threshold while the session runs to its win or fail outcome. Useful for
//! balance work (`--tuning`) and determinism checks (`--seed`, `--trace`).

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use stillpoint::consts::TICK_DT;
use stillpoint::sim::{Phase, Simulation, Snapshot};
use stillpoint::{DirectionInput, Tuning};

/// Command-line options
struct Options {
    seed: u64,
    tuning_path: Option<String>,
    trace: bool,
}

impl Options {
    fn parse() -> Self {
        let mut opts = Options {
            seed: 42,
            tuning_path: None,
            trace: false,
        };
        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    if let Some(v) = args.next() {
                        match v.parse() {
                            Ok(seed) => opts.seed = seed,
                            Err(_) => log::warn!("ignoring unparseable seed {v:?}"),
                        }
                    }
                }
                "--tuning" => opts.tuning_path = args.next(),
                "--trace" => opts.trace = true,
                other => log::warn!("ignoring unknown argument {other:?}"),
            }
        }
        opts
    }
}

/// Load tuning from a JSON file, falling back to defaults on any error.
fn load_tuning(path: Option<&str>) -> Tuning {
    let Some(path) = path else {
        return Tuning::default();
    };
    match std::fs::read_to_string(path) {
        Ok(json) => match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("loaded tuning from {path}");
                tuning
            }
            Err(e) => {
                log::warn!("bad tuning file {path}: {e}; using defaults");
                Tuning::default()
            }
        },
        Err(e) => {
            log::warn!("cannot read tuning file {path}: {e}; using defaults");
            Tuning::default()
        }
    }
}

/// Autopilot: ride just under the sustainable threshold, back off under
/// strain. The seeded wander keeps runs varied but reproducible.
struct Autopilot {
    rng: Pcg32,
    wander: f32,
    next_wander_at: f32,
}

impl Autopilot {
    /// Keep this much radius headroom below the threshold
    const SAFETY_MARGIN: f32 = 0.08;

    fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            wander: 0.0,
            next_wander_at: 0.0,
        }
    }

    fn desired_target(&mut self, snap: &Snapshot) -> f32 {
        // Re-roll the wander bias about once a simulated second
        if snap.game_time >= self.next_wander_at {
            self.wander = self.rng.random_range(-0.25..0.25);
            self.next_wander_at = snap.game_time + 1.0;
        }

        let headroom = snap.sustainable_threshold - Self::SAFETY_MARGIN - snap.radius;
        (headroom * 8.0 + self.wander).clamp(-1.0, 1.0)
    }
}

fn main() {
    env_logger::init();

    let opts = Options::parse();
    let tuning = load_tuning(opts.tuning_path.as_deref());
    log::info!("starting session (seed {})", opts.seed);

    let mut sim = Simulation::new(tuning);
    let mut input = DirectionInput::default();
    let mut pilot = Autopilot::new(opts.seed);

    let mut last_status = 0.0_f32;
    let mut last_trace = 0.0_f32;

    loop {
        let snap = sim.snapshot();
        if snap.phase.is_terminal() {
            break;
        }

        input.set_target(pilot.desired_target(&snap));
        input.update(TICK_DT);
        sim.update(TICK_DT, input.direction());

        let snap = sim.snapshot();
        if snap.game_time - last_status >= 10.0 {
            last_status = snap.game_time;
            log::info!(
                "t={:5.1}s radius={:.3} threshold={:.3} clarity={:.3} progress={:.0}%",
                snap.game_time,
                snap.radius,
                snap.sustainable_threshold,
                snap.clarity,
                sim.progress() * 100.0
            );
        }
        if opts.trace && snap.game_time - last_trace >= 1.0 {
            last_trace = snap.game_time;
            match serde_json::to_string(&snap) {
                Ok(line) => println!("{line}"),
                Err(e) => log::warn!("trace serialization failed: {e}"),
            }
        }
    }

    let snap = sim.snapshot();
    match snap.phase {
        Phase::Won => log::info!(
            "session WON in {:.1}s with clarity {:.3}",
            snap.game_time,
            snap.clarity
        ),
        Phase::Failed => log::info!(
            "session FAILED at {:.1}s ({:.0}% through)",
            snap.game_time,
            sim.progress() * 100.0
        ),
        Phase::Playing => unreachable!("loop exits only on terminal phase"),
    }
}
