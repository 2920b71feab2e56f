use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "casebridge-server",
    about = "casebridge demo daemon - camelCase API over snake_case handlers",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[arg(short, long, env = "CASEBRIDGE_PORT", default_value = "8046")]
    pub port: u16,

    #[arg(long, env = "CASEBRIDGE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(short, long, env = "CASEBRIDGE_CONFIG", help = "Path to casebridge.json")]
    pub config: Option<PathBuf>,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    #[arg(long, help = "Force query normalization on, overriding the config file")]
    pub normalize_inputs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["casebridge-server"]);
        assert_eq!(cli.host, "127.0.0.1");
        assert!(cli.config.is_none());
        assert!(!cli.normalize_inputs);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "casebridge-server",
            "--port",
            "9000",
            "--config",
            "/etc/casebridge.json",
            "--normalize-inputs",
        ]);
        assert_eq!(cli.port, 9000);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/casebridge.json")));
        assert!(cli.normalize_inputs);
    }
}
