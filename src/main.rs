#![allow(non_snake_case)]
use complexity::Examples::maths_examples::maths_examples;
use complexity::Utils::config::{DEFAULT_SETTINGS_PATH, Settings};
use complexity::Utils::logger::init_logging;

/// complexity [settings.toml] [example]
fn main() {
    let mut args = std::env::args().skip(1);
    let config_path = args.next();
    let settings = match Settings::from_cli_arg(config_path.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            let path = config_path.as_deref().unwrap_or(DEFAULT_SETTINGS_PATH);
            eprintln!("cannot load {}: {}", path, err);
            std::process::exit(1);
        }
    };
    if let Err(err) = init_logging(&settings.logging) {
        eprintln!("cannot start logging: {}", err);
    }
    let example = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(0);
    maths_examples(example, &settings);
}
