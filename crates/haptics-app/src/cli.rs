use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

pub const USAGE: &str = "Usage: haptics-viz <WAM IP address>";

/// Haptics Demo: live 3D view of a remote end effector's position.
#[derive(Parser, Debug)]
#[command(name = "haptics-viz", version, about)]
pub struct Args {
    /// Address or host name of the WAM sending positions.
    #[arg(value_name = "WAM IP address")]
    pub host: String,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. debug, haptics=trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

/// What `main` should do after looking at the command line.
#[derive(Debug)]
pub enum Invocation {
    Run(Args),
    /// Help, version or a usage message was printed; exit with this code.
    Exit(ExitCode),
}

pub fn parse() -> Invocation {
    parse_from(std::env::args_os())
}

/// Parse `argv` (program name first).
///
/// A missing or extra positional argument prints [`USAGE`] to stdout (and
/// clap's diagnostic to stderr) and exits successfully without touching the
/// network.
pub fn parse_from<I, T>(argv: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) => Invocation::Run(args),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            Invocation::Exit(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{USAGE}");
            let _ = e.print();
            Invocation::Exit(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(argv: &[&str]) -> Option<Args> {
        match parse_from(argv) {
            Invocation::Run(args) => Some(args),
            Invocation::Exit(_) => None,
        }
    }

    /// Exit code of an invocation that does not run.
    fn exit_code(argv: &[&str]) -> Option<ExitCode> {
        match parse_from(argv) {
            Invocation::Run(_) => None,
            Invocation::Exit(code) => Some(code),
        }
    }

    fn is_success(code: Option<ExitCode>) -> bool {
        code.is_some_and(|c| format!("{c:?}") == format!("{:?}", ExitCode::SUCCESS))
    }

    #[test]
    fn single_host_argument_runs() {
        let args = run(&["haptics-viz", "192.168.1.10"]).unwrap();
        assert_eq!(args.host, "192.168.1.10");
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn host_names_are_accepted() {
        let args = run(&["haptics-viz", "wam.local"]).unwrap();
        assert_eq!(args.host, "wam.local");
    }

    #[test]
    fn missing_host_exits() {
        assert!(is_success(exit_code(&["haptics-viz"])));
    }

    #[test]
    fn extra_positional_exits() {
        assert!(is_success(exit_code(&["haptics-viz", "10.0.0.1", "10.0.0.2"])));
    }

    #[test]
    fn options_are_parsed() {
        let args = run(&[
            "haptics-viz",
            "--config",
            "/tmp/haptics.toml",
            "--log-level",
            "debug",
            "127.0.0.1",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/haptics.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.host, "127.0.0.1");
    }

    #[test]
    fn wrong_argument_count_is_a_clap_error() {
        let err = Args::try_parse_from(["haptics-viz"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(Args::try_parse_from(["haptics-viz", "a", "b"]).is_err());
    }

    #[test]
    fn usage_names_the_binary() {
        assert_eq!(USAGE, "Usage: haptics-viz <WAM IP address>");
    }
}
