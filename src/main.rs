fn main() {
    std::process::exit(content_index::cli::run());
}
