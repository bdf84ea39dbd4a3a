mod cli;
mod config;
mod logging;
mod runner;
mod scaffold;
mod util;

fn main() -> anyhow::Result<()> {
    let app = cli::parse();
    logging::init(app.verbose, app.quiet);
    runner::run(app)
}
