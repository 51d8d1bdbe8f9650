fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = julia_viewer::ViewerConfig::from_key_value_args(std::env::args().skip(1))?;
    julia_viewer::run_gui(&config)?;

    Ok(())
}
