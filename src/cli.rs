use crate::release::BumpKind;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "tauri-bump",
    about = "Update the version of a Tauri app in tauri.conf.json and Cargo.toml",
    version,
    author
)]
pub struct Cli {
    /// The type of version increment (major, minor, or patch)
    #[arg(value_enum, value_name = "VERSION_TYPE")]
    pub version_type: BumpKind,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub path: String,

    /// Print each step to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
