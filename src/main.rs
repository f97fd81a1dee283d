use clap::{App, Arg};
use em6502::Config;
use nix::sys::termios::{tcgetattr, tcsetattr, LocalFlags, SetArg};
use nix::unistd::isatty;
use std::error::Error;
use std::process;

const STDIN_FILENO: i32 = 0;

fn main() {
    if let Err(e) = run() {
        println!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let matches = App::new("em6502")
        .about("A 6502 subset emulator with conditional breakpoints")
        .arg(
            Arg::with_name("step")
                .short("s")
                .long("step")
                .help("Starts in single-step mode"),
        )
        .arg(
            Arg::with_name("break")
                .short("b")
                .long("break")
                .takes_value(true)
                .number_of_values(1)
                .multiple(true)
                .help("Adds a breakpoint set, e.g. pc=0x700e*5 or a=0x08,y=0x02"),
        )
        .arg(
            Arg::with_name("PROGRAM")
                .help("Program image: 2 byte little endian load address, then code. Runs the built-in demo when omitted.")
                .index(1),
        )
        .get_matches();

    if isatty(STDIN_FILENO)? {
        disable_input_buffering()?;
    }

    em6502::run(Config {
        program: matches.value_of("PROGRAM").map(String::from),
        step: matches.is_present("step"),
        breakpoints: matches
            .values_of("break")
            .map(|values| values.map(String::from).collect())
            .unwrap_or_else(Vec::new),
    })?;

    Ok(())
}

// The step prompt reads single keys, so line buffering and echo get in the
// way.
fn disable_input_buffering() -> Result<(), nix::Error> {
    let mut termios = tcgetattr(STDIN_FILENO)?;
    termios.local_flags &= !(LocalFlags::ICANON | LocalFlags::ECHO);

    tcsetattr(STDIN_FILENO, SetArg::TCSANOW, &termios)?;

    Ok(())
}
