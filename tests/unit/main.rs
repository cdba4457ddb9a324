//! Unit tests mirroring the source tree, one file per source file


#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use tessellate::io::cli::Cli;

    // Tests the clap definition is internally consistent
    // Verified by giving two flags the same short name
    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
