use std::fs;

pub fn settings_export() {
    print!("{}", cumber_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        cumber_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: generator.count={}, generator.diversity={}, generator.max_draws={}",
        s.generator.count, s.generator.diversity, s.generator.max_draws
    );
}

/// Install a custom settings file for the rest of the process.
pub fn load_custom(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        cumber_core::settings::init_custom(content),
        "Error in {file}: {}"
    );
}
