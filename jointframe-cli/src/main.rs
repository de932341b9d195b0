// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use ansi_term::Colour::{Purple, Yellow};
use clap::Parser;
use jointframe_core::{JointChain, JointSpec, Orientation};

mod config;

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Laixer Equipment B.V.")]
#[command(version, propagate_version = true)]
#[command(about = "Robotic joint orientation viewer", long_about = None)]
struct Args {
    /// Configuration file.
    #[arg(short = 'c', long = "config", alias = "conf", value_name = "FILE")]
    config: Option<std::path::PathBuf>,
    /// Joint as [NAME=]AXIS[:ANGLE], repeat for every joint from the base outwards.
    #[arg(short = 'j', long = "joint", value_name = "JOINT")]
    joints: Vec<JointSpec>,
    /// SVG output file.
    #[arg(short, long, value_name = "FILE")]
    output: Option<std::path::PathBuf>,
    /// Do not render the orientation plot.
    #[arg(long)]
    no_plot: bool,
    /// Print every elementary and composed frame.
    #[arg(short, long)]
    all: bool,
    /// Number of decimals when printing matrices.
    #[arg(short, long, value_name = "DIGITS")]
    precision: Option<usize>,
    /// Print frames as JSON.
    #[arg(long)]
    json: bool,
    /// Quiet output (no logging).
    #[arg(long)]
    quiet: bool,
    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    use log::LevelFilter;

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => config::from_file(path)?,
        None => config::Config::default(),
    };

    if !args.joints.is_empty() {
        config.joints = args.joints.clone();
    }
    if let Some(output) = &args.output {
        config.plot.output = output.clone();
    }

    let mut log_config = simplelog::ConfigBuilder::new();
    log_config.set_time_level(LevelFilter::Off);
    log_config.set_thread_level(LevelFilter::Off);
    log_config.set_target_level(LevelFilter::Off);
    log_config.set_location_level(LevelFilter::Off);

    let log_level = if args.quiet {
        LevelFilter::Off
    } else {
        match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    log::trace!("{:#?}", config);

    run(&args, &config)
}

fn run(args: &Args, config: &config::Config) -> anyhow::Result<()> {
    use anyhow::Context;

    let chain = config.joints.iter().cloned().collect::<JointChain>();

    log::debug!("Solving chain of {} joints", chain.len());
    for joint in chain.joints() {
        log::trace!("Joint {}", joint);
    }

    let solution = chain.solve()?;

    for rotation in solution.elementary() {
        log::info!("{} » {}", Purple.paint("Joint"), rotation);
    }

    let effector = match solution.effector() {
        Some(effector) => effector,
        None => {
            log::warn!("Joint chain is empty, nothing to show");
            return Ok(());
        }
    };

    let tolerance = jointframe_core::consts::ROUNDING_TOLERANCE * chain.len() as f64;
    if !effector.matrix().is_proper(tolerance) {
        log::warn!(
            "{} drifted from a proper rotation, orthogonality error {:e}, determinant {}",
            effector.name(),
            effector.matrix().orthogonality_error(),
            effector.matrix().determinant()
        );
    }

    let (roll, pitch, yaw) = effector.matrix().euler_angles();
    log::info!(
        "{} » {} Roll={:.2} Pitch={:.2} Yaw={:.2}",
        Yellow.bold().paint("Frame"),
        effector.name(),
        roll.to_degrees(),
        pitch.to_degrees(),
        yaw.to_degrees()
    );

    let objects: Vec<&dyn Orientation> = if args.all {
        solution
            .elementary()
            .iter()
            .map(|rotation| rotation as &dyn Orientation)
            .chain(
                solution
                    .frames()
                    .iter()
                    .skip(1)
                    .map(|frame| frame as &dyn Orientation),
            )
            .collect()
    } else {
        vec![effector as &dyn Orientation]
    };

    let stdout = std::io::stdout();
    print_objects(&mut stdout.lock(), &objects, args)?;

    if !args.no_plot {
        jointframe_plot::orientation_svg(
            effector.matrix(),
            &config.plot.output,
            &config.plot.options(),
        )
        .map_err(|e| anyhow::anyhow!(e))
        .with_context(|| {
            format!(
                "failed to render orientation plot {}",
                config.plot.output.display()
            )
        })?;

        log::info!(
            "Orientation of {} plotted to {}",
            effector.name(),
            config.plot.output.display()
        );
    }

    Ok(())
}

fn print_objects(
    writer: &mut dyn std::io::Write,
    objects: &[&dyn Orientation],
    args: &Args,
) -> anyhow::Result<()> {
    if args.json {
        let named = objects
            .iter()
            .map(|object| object.named())
            .collect::<Vec<_>>();

        writeln!(writer, "{}", serde_json::to_string_pretty(&named)?)?;
    } else {
        for object in objects {
            object.print_matrix(writer, args.precision)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_joints() {
        let args =
            Args::try_parse_from(["jointframe", "-j", "z:10", "--joint", "R_12=y:-20", "-vv"])
                .unwrap();

        assert_eq!(
            args.joints,
            vec![
                JointSpec::new("z", Some(10.0)),
                JointSpec::new("y", Some(-20.0)).with_name("R_12"),
            ]
        );
        assert_eq!(args.verbose, 2);
        assert!(!args.no_plot);
    }

    #[test]
    fn test_args_malformed_joint() {
        assert!(Args::try_parse_from(["jointframe", "-j", "z:ten"]).is_err());
    }

    #[test]
    fn test_args_output() {
        let args = Args::try_parse_from([
            "jointframe",
            "-o",
            "arm.svg",
            "--no-plot",
            "-a",
            "-p",
            "5",
            "--json",
        ])
        .unwrap();

        assert_eq!(args.output, Some(std::path::PathBuf::from("arm.svg")));
        assert!(args.no_plot);
        assert!(args.all);
        assert_eq!(args.precision, Some(5));
        assert!(args.json);
    }

    #[test]
    fn test_run_without_plot() {
        let args = Args::try_parse_from(["jointframe", "--no-plot", "--all"]).unwrap();

        assert!(run(&args, &config::Config::default()).is_ok());
    }

    #[test]
    fn test_print_objects() {
        let args = Args::try_parse_from(["jointframe", "-p", "2"]).unwrap();
        let rotation = jointframe_core::ElementaryRotation::new("R_01", "z", Some(90.0)).unwrap();

        let mut buffer = Vec::new();
        print_objects(&mut buffer, &[&rotation as &dyn Orientation], &args).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Printing: R_01\n[0.00, -1.00, 0.00]\n[1.00, 0.00, 0.00]\n[0.00, 0.00, 1.00]\n\n"
        );
    }

    #[test]
    fn test_print_objects_json() {
        let args = Args::try_parse_from(["jointframe", "--json"]).unwrap();
        let rotation = jointframe_core::ElementaryRotation::new("R_01", "i", None).unwrap();

        let mut buffer = Vec::new();
        print_objects(&mut buffer, &[&rotation as &dyn Orientation], &args).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["name"], "R_01");
        assert_eq!(value[0]["matrix"][2][2], 1.0);
    }

    #[test]
    fn test_run_invalid_joint() {
        let args = Args::try_parse_from(["jointframe", "--no-plot"]).unwrap();
        let config = config::Config {
            joints: vec![JointSpec::new("q", Some(10.0)).with_name("R_01")],
            ..Default::default()
        };

        let error = run(&args, &config).unwrap_err();
        assert!(error.to_string().contains("R_01"));
    }
}
