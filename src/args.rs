use clap::Parser;
use std::path::PathBuf;

pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, value_name = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Address to bind
    #[arg(long, value_name = "ADDR", default_value = "127.0.0.1")]
    pub bind: String,

    /// Skip the stats provider entirely and serve sample data
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Directory served under /static; also holds accolades_active.json
    #[arg(long, value_name = "DIR", default_value = "./static")]
    pub static_dir: PathBuf,

    /// Season identifier passed to the stats provider
    #[arg(long, value_name = "SEASON", default_value = "2025-26")]
    pub season: String,
}

impl Args {
    pub fn accolades_file(&self) -> PathBuf {
        self.static_dir.join("accolades_active.json")
    }
}
