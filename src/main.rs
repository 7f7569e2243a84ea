use kwazam_chess::console::console_top::run_stdio_loop;

fn main() {
    if let Err(err) = run_stdio_loop() {
        eprintln!("console loop failed: {err}");
        std::process::exit(1);
    }
}
