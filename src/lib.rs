//! Composite logo generation: the app icon interleaved with rendered text.

pub mod compose;
pub mod config;
pub mod error;
pub mod font;
pub mod layout;

pub use compose::{run, ComposeReport, LogoVariant};
pub use config::{ComposerConfig, Rotation};
pub use error::ComposeError;

/// Shared entry point for the logo binaries. Paths are fixed; any failure
/// exits with status 1.
pub fn run_cli(variant: LogoVariant) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    std::process::exit(exit_status(variant, &ComposerConfig::default()));
}

fn exit_status(variant: LogoVariant, config: &ComposerConfig) -> i32 {
    match run(variant, config) {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("❌ {}", e);
            1
        }
    }
}
