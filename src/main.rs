fn main() {
    sweeper::app::cli::run();
}
