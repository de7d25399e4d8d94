use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use svn_msg_rewrite::ui;

#[derive(clap::Parser)]
#[command(
    name = "svn-msg-rewrite",
    about = "Rewrite a git-svn commit message read from stdin into a clean git message"
)]
struct Args {
    #[arg(short, long, help = "Do not print the revision being rewritten")]
    quiet: bool,

    #[arg(long, help = "Report how the message was rewritten")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("svn-msg-rewrite {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Nothing may reach stdout for a commit without a footer
    let rewrite = match svn_msg_rewrite::rewrite_from(io::stdin().lock()) {
        Ok(rewrite) => rewrite,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if !args.quiet {
        ui::display_revision(&rewrite.revision);
    }
    if args.verbose {
        ui::display_status(&rewrite.outcome.to_string());
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(rewrite.render().as_bytes())?;
    stdout.flush()?;

    Ok(())
}
