//! Profile listing command handler.

use crate::config::ResolvedConfig;
use crate::profile::print_profiles;
use crate::ui::Style;

/// Prints the profiles offered for manual selection.
///
/// The backend decides which names it accepts; this list only drives the
/// mode bar and completion.
pub fn run_profiles(config: &ResolvedConfig) {
    print_profiles(&config.profiles, None);
    println!();
    println!(
        "{}",
        Style::hint("Set `profiles` in ~/.config/modechat/config.toml to change this list.")
    );
}
