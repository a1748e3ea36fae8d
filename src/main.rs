fn main() {
    spatial_wkt::cli::run();
}
