fn main() {
    emet::cli::run();
}
