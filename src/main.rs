use gravbox::{step, Scenario, ScenarioConfig};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Log a snapshot summary every this many steps
    #[arg(short, long, default_value_t = 100)]
    every: u64,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system,
        parameters,
        forces,
    } = &mut scenario;

    log::info!(
        "starting headless run: {} bodies, h0 = {}, t_end = {}",
        system.bodies.len(),
        parameters.h0,
        parameters.t_end
    );

    let mut steps: u64 = 0;
    while system.t < parameters.t_end {
        step(system, forces, parameters);
        steps += 1;

        if steps % args.every == 0 {
            // Read the store the way a renderer would: a copied-out snapshot
            let snap = system.snapshot();
            let kinetic: f64 = snap.iter().map(|b| 0.5 * b.m * b.v.norm_squared()).sum();
            log::info!(
                "t = {:8.3}  steps = {:6}  kinetic energy = {:.6}",
                system.t,
                steps,
                kinetic
            );
        }
    }

    log::info!("run finished after {} steps", steps);

    // Final state table
    for (i, b) in system.snapshot().iter().enumerate() {
        println!(
            "body {:3}: x = ({:9.4}, {:9.4})  v = ({:8.4}, {:8.4})  m = {:7.4}  r = {:6.4}",
            i, b.x.x, b.x.y, b.v.x, b.v.y, b.m, b.radius
        );
    }

    Ok(())
}
