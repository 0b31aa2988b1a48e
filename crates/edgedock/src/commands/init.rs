use edgedock_core::config;

/// Creates the default configuration file at `~/.config/edgedock/config.toml`.
///
/// The file is commented to explain every option. An existing file is
/// left alone unless `force` is set.
pub fn execute(force: bool) {
    let Some(dir) = config::config_dir() else {
        eprintln!("Error: could not determine home directory.");
        std::process::exit(1);
    };

    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Error: could not create {}: {e}", dir.display());
        std::process::exit(1);
    }

    let path = dir.join("config.toml");
    if path.exists() && !force {
        println!("Already exists: {}", path.display());
        println!("Use --force to overwrite it with the defaults.");
        return;
    }

    match std::fs::write(&path, config::template::generate_config()) {
        Ok(()) => println!("Created {}", path.display()),
        Err(e) => {
            eprintln!("Error: could not write {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}
