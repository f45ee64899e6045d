fn main() {
    if let Err(err) = repolyzer::run() {
        eprintln!("{}", repolyzer::format_error(&err));
        std::process::exit(1);
    }
}
