fn main() {
    #[cfg(feature = "cli")]
    inf26::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("inf26: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
