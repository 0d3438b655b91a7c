//! `ink`: run an Ink program, evaluate inline source, or start a REPL.

use inkc::{parse_args, run, Command};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match parse_args(&args) {
        Ok(Command::Help) => print_usage(),
        Ok(Command::Version) => println!("ink {}", env!("CARGO_PKG_VERSION")),
        Ok(Command::Run(options)) => std::process::exit(run(&options)),
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Ink interpreter");
    println!();
    println!("Usage: ink [options] [file] [args...]");
    println!();
    println!("With no file and no --eval, starts an interactive session.");
    println!();
    println!("Options:");
    println!("  -e, --eval <src>    Evaluate <src> as a program");
    println!("  -r, --repl          Start the REPL after running the program");
    println!("      --no-fatal      Report errors without exiting");
    println!("  -v, --verbose       Log engine activity (or set INK_LOG)");
    println!("  -h, --help          Show this help message");
    println!("      --version       Show version information");
}
