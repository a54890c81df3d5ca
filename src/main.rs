fn main() {
    mjp::app::cli::run();
}
