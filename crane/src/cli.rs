use clap::{ArgAction, Parser};

// `-h` belongs to `--host`, so clap's short help flag is disabled and
// `--help` is declared by hand.
#[derive(Parser, Debug)]
#[command(
    name = "crane",
    version,
    about = "Ansible dynamic inventory backed by a Eureka service registry",
    disable_help_flag = true
)]
pub struct Cli {
    /// Lists the hosts.
    #[arg(long, short = 'l')]
    pub list: bool,

    /// Show information of a given host.
    #[arg(long, short = 'h', value_name = "HOSTNAME")]
    pub host: Option<String>,

    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}
