use orbitsim::{run, Scenario, ScenarioConfig, SimOutput};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "earth_jupiter.yaml")]
    file_name: String,

    #[arg(short, default_value = "orbits.csv")]
    out_file: String,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

// one row per simulation instant, both planets side by side
fn write_trajectories(path: &str, out: &SimOutput) -> Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    writeln!(w, "step,x_e,y_e,x_j,y_j,vx_e,vy_e,vx_j,vy_j")?;

    let e_pos = out.earth.positions();
    let e_vel = out.earth.velocities();
    let j_pos = out.jupiter.positions();
    let j_vel = out.jupiter.velocities();

    for i in 0..out.earth.len() {
        writeln!(
            w,
            "{},{},{},{},{},{},{},{},{}",
            i,
            e_pos[i].x, e_pos[i].y, j_pos[i].x, j_pos[i].y,
            e_vel[i].x, e_vel[i].y, j_vel[i].x, j_vel[i].y,
        )?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg);

    let out = run(&scenario)?;

    write_trajectories(&args.out_file, &out)?;

    println!(
        "{} samples written to {} (earth r = {:.4} AU, jupiter r = {:.4} AU at end)",
        out.earth.len(),
        args.out_file,
        out.earth.last_radius(),
        out.jupiter.last_radius(),
    );

    Ok(())
}
