fn main() {
    river_gto::cli::run();
}
