fn main() {
    #[cfg(feature = "cli")]
    unilzw::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("unilzw: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
