use clap::Parser;
use passkeep::cli::Cli;
use passkeep::error::StoreError;

fn main() {
    let cli = Cli::parse();
    passkeep::util::logging::init(cli.verbose);

    if let Err(err) = cli.run() {
        eprintln!("error: {}", err);
        let code = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<StoreError>())
            .map(StoreError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
