use sprite_matte::config;
use sprite_matte::image::io::write_json_file;
use sprite_matte::run_batch;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> sprite_matte::Result<()> {
    let config = config::parse_cli()?;
    let report = run_batch(&config)?;

    println!("{}", report.summary_line());
    if let Some(path) = &config.report {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }
    if let Some(dir) = &config.debug_dir {
        println!("Debug rasters written to {}", dir.display());
    }
    Ok(())
}
