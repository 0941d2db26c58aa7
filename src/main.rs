mod app;
mod core;
mod platform;
mod runtime;
mod schedule;
mod sky;

use app::page::Page;
use clap::Parser;
use crate::core::cli::Args;
use crate::core::config;
use platform::x11_host::X11Host;
use rand::rngs::StdRng;
use rand::SeedableRng;
use runtime::clock::SystemClock;
use runtime::frame_loop::FrameLoop;
use schedule::navigator::SystemNavigator;
use sky::starfield::Starfield;

fn main() {
    env_logger::init();

    let args = Args::parse();

    let schedule = match args.schedule() {
        Ok(schedule) => schedule,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            eprintln!("night-chapters: {}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "{} chapters from {} every {} ms",
        schedule.total_nodes(),
        schedule.start().to_rfc3339(),
        schedule.interval_ms()
    );

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let sky = Starfield::new(args.stars, rng);
    let navigator = SystemNavigator::new(&args.chapters_root).with_opener(&args.opener);

    let mut page = Page::new(schedule, sky, Box::new(navigator));

    let mut host = match X11Host::open(args.width, args.height, config::WINDOW_TITLE) {
        Ok(host) => host,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("night-chapters: {}", e);
            std::process::exit(1);
        }
    };

    // Runs for the lifetime of the window
    FrameLoop::new(SystemClock).run(&mut page, &mut host);
}
