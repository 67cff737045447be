fn main() {
    if let Err(e) = strange_trails::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
