//! Startup banner and farewell.

use crate::consts::{AUTHOR, REPO};

/// Session details shown under the banner.
pub struct BannerInfo<'a> {
    pub store: &'a str,
    pub saved: usize,
    pub count: usize,
}

/// Print the startup banner with session info.
pub fn print_banner(info: &BannerInfo) {
    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║              A L I B I                ║
   ║     the inventive apology engine      ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   repo      {}
   store     {}
   saved     {}
   batch     {} excuses

   Type the situation you need an excuse for, then your actual reason.
   /help lists commands.
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        REPO,
        info.store,
        info.saved,
        info.count,
    );
}

/// Print the farewell line.
pub fn print_farewell(saved: usize) {
    if saved > 0 {
        println!("{saved} excuses in your collection. use them wisely.");
    }
    println!("goodbye.");
}
