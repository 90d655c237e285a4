use anyhow::Result;
use clap::Parser;
use flock_cli::{build_simulator, load_settings, snapshot, Args, Runner};
use flock_shared::{FlockSettings, FrameSnapshot};

fn args(extra: &[&str]) -> Args {
    let mut argv = vec!["flock-cli"];
    argv.extend_from_slice(extra);
    Args::try_parse_from(argv).unwrap()
}

fn run_to_string(extra: &[&str]) -> Result<String> {
    let args = args(extra);
    let settings = load_settings(&args)?;
    let flock = build_simulator(&settings)?;
    let mut runner = Runner::new(flock, args.dt, args.every);

    let mut out = Vec::new();
    runner.run(args.ticks, &mut out)?;
    assert_eq!(runner.flock().ticks(), args.ticks);
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_defaults_without_config() {
    let args = args(&[]);
    assert_eq!(args.ticks, 600);
    assert_eq!(args.every, 1);
    assert!(!args.debug);

    let settings = load_settings(&args).unwrap();
    assert_eq!(settings, FlockSettings::default());
}

#[test]
fn test_command_line_overrides() {
    let settings = load_settings(&args(&["--count", "12", "--seed", "4"])).unwrap();
    assert_eq!(settings.count, 12);
    assert_eq!(settings.seed, Some(4));
}

#[test]
fn test_config_file_with_override() -> Result<()> {
    let path = std::env::temp_dir().join(format!("flock-cli-settings-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{ "count": 9, "width": 320.0, "height": 240.0, "seed": 1 }"#,
    )?;

    let path_arg = path.to_string_lossy().into_owned();
    let settings = load_settings(&args(&["--config", path_arg.as_str(), "--seed", "2"]));
    std::fs::remove_file(&path)?;

    let settings = settings?;
    assert_eq!(settings.count, 9);
    assert_eq!(settings.width, 320.0);
    assert_eq!(settings.seed, Some(2));
    Ok(())
}

#[test]
fn test_missing_config_file_is_an_error() {
    let result = load_settings(&args(&["--config", "/nonexistent/flock.json"]));
    assert!(result.is_err());
}

#[test]
fn test_invalid_radius_is_rejected() {
    let settings = FlockSettings {
        neighbor_radius: -1.0,
        seed: Some(0),
        ..FlockSettings::default()
    };
    assert!(build_simulator(&settings).is_err());
}

#[test]
fn test_negative_speed_is_rejected() {
    let settings = FlockSettings {
        speed: -3.0,
        seed: Some(0),
        ..FlockSettings::default()
    };
    assert!(build_simulator(&settings).is_err());
}

#[test]
fn test_build_spawns_configured_count() {
    let settings = FlockSettings {
        count: 17,
        seed: Some(8),
        ..FlockSettings::default()
    };
    let flock = build_simulator(&settings).unwrap();
    assert_eq!(flock.len(), 17);

    let frame = snapshot(&flock);
    assert_eq!(frame.tick, 0);
    assert_eq!(frame.agents.len(), 17);
    assert_eq!(frame.agents[16].name, "Boid #17");
}

#[test]
fn test_run_writes_sampled_frames() -> Result<()> {
    let output = run_to_string(&["-n", "7", "-s", "3", "-t", "10", "-e", "3"])?;
    let frames: Vec<FrameSnapshot> = output
        .lines()
        .map(serde_json::from_str)
        .collect::<Result<_, _>>()?;

    let ticks: Vec<u64> = frames.iter().map(|f| f.tick).collect();
    assert_eq!(ticks, vec![0, 3, 6, 9, 10]);

    let last = frames.last().unwrap();
    assert_eq!(last.agents.len(), 7);
    assert_eq!(last.agents[0].name, "Boid #1");
    assert!((last.elapsed - 10.0 * f64::from(1.0f32 / 60.0)).abs() < 1e-6);
    for agent in &last.agents {
        assert!(agent.position.x >= -32.0 && agent.position.x <= 832.0);
        assert!(agent.position.y >= -32.0 && agent.position.y <= 632.0);
    }
    Ok(())
}

#[test]
fn test_seeded_runs_produce_identical_output() -> Result<()> {
    let a = run_to_string(&["--seed", "21", "--ticks", "30", "--every", "5"])?;
    let b = run_to_string(&["--seed", "21", "--ticks", "30", "--every", "5"])?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn test_negative_dt_fails_the_run() {
    let result = run_to_string(&["--seed", "1", "--ticks", "3", "--dt=-0.5"]);
    assert!(result.is_err());
}
