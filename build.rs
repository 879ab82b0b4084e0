// Ships unpotted_reminder.toml next to the built library

use std::env;
use std::fs;
use std::path::Path;

const CONFIG_FILE: &str = "unpotted_reminder.toml";

fn main() {
    println!("cargo:rerun-if-changed={CONFIG_FILE}");

    let out_dir = env::var("OUT_DIR").unwrap();

    // target/<profile>/build/<crate>-<hash>/out -> target/<profile>
    let Some(profile_dir) = Path::new(&out_dir).ancestors().nth(3) else {
        panic!("OUT_DIR has no profile directory: {out_dir}");
    };

    let config_src = Path::new(CONFIG_FILE);
    if config_src.exists() {
        fs::copy(config_src, profile_dir.join(CONFIG_FILE)).expect("Failed to copy config file");
    }
}
