use clap::Parser;
use mhist::{run, Cli};

fn main() {
    // mpv and shell pipelines routinely cut our stdout short (`head`,
    // `less` quitting early); a broken pipe should end the process
    // quietly instead of panicking.
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
