fn main() {
    dietplan::app::cli::run();
}
