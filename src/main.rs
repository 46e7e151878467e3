fn main() {
    ghflow::app::cli::run();
}
