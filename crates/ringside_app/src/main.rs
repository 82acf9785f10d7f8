mod app;
mod effects;
mod input;
mod logging;
mod render;

fn main() {
    logging::initialize(logging::LogDestination::File);
    if let Err(err) = app::run_app() {
        eprintln!("ringside: {err}");
        std::process::exit(1);
    }
}
