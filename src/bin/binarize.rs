use clap::Parser;
use sprite_matte::config::BinarizeArgs;
use sprite_matte::image::io::{load_rgba_image, save_rgba_image};
use sprite_matte::matte::threshold_alpha;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run(BinarizeArgs::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(args: BinarizeArgs) -> sprite_matte::Result<()> {
    let image = load_rgba_image(&args.input)?;
    let binarized = threshold_alpha(&image, args.threshold);
    save_rgba_image(&binarized, &args.output)?;
    log::info!(
        "{} -> {} ({}x{}, threshold={})",
        args.input.display(),
        args.output.display(),
        binarized.w,
        binarized.h,
        args.threshold
    );
    Ok(())
}
