fn main() {
    env_logger::init();

    if let Err(error) = roi_kit::run_cli() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
