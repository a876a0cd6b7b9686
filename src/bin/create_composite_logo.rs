use checkvibe_logo::LogoVariant;

// "Check" + icon + "ibe"
fn main() {
    checkvibe_logo::run_cli(LogoVariant::Wordmark);
}
