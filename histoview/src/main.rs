use clap::Parser;

fn main() {
    extern crate histoview;

    histoview::init_logger();

    if let Err(e) = histoview::run(histoview::Cli::parse(), histoview::load_config()) {
        log::error!("{e:?}");
        std::process::exit(1);
    }
}
