fn main() {
    batchrun::app::logging::init();
    batchrun::app::cli::run();
}
