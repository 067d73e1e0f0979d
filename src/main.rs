fn main() {
    sintagma::cli::run();
}
