use wordgrid_core::{run, PositionSettings};

fn main() {
    env_logger::builder()
        .filter_module(
            "wordgrid_core",
            if cfg!(debug_assertions) {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
        )
        .init();

    match run(PositionSettings::default()) {
        Ok(summary) => {
            println!("Positions added to {} levels successfully!", summary.levels);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
