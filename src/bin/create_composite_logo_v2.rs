use checkvibe_logo::LogoVariant;

// Turned icon stands in for "C", upright icon for "V"
fn main() {
    checkvibe_logo::run_cli(LogoVariant::IconLetters);
}
