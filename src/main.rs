fn main() {
    slotdirs::app::cli::run();
}
