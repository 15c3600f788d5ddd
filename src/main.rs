fn main() {
    if let Err(e) = eightpuzzle::solver() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
