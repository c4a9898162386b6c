use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};
use devwatch::{config::WatcherDefaults, logging::LogLevel, project::ProjectParams};

#[derive(Args)]
struct CapabilityArgs {
    /// Build the project on change
    #[arg(short = 'b', long)]
    build: bool,

    /// Don't install the built binary
    #[arg(long)]
    no_bin: bool,

    /// Don't run the project after building
    #[arg(long)]
    no_run: bool,

    /// Don't format sources
    #[arg(long)]
    no_fmt: bool,

    /// Run tests on change
    #[arg(short = 't', long)]
    test: bool,
}

#[derive(Args)]
struct WatcherArgs {
    /// Directory to watch (repeatable; replaces the default "/")
    #[arg(long = "watch", value_name = "DIR", action = clap::ArgAction::Append)]
    paths: Vec<String>,

    /// Directory to ignore (repeatable; replaces the defaults "vendor", "bin")
    #[arg(long, value_name = "DIR", action = clap::ArgAction::Append)]
    ignore: Vec<String>,

    /// File extension to watch (repeatable; replaces the default ".go")
    #[arg(long = "ext", value_name = "EXT", action = clap::ArgAction::Append)]
    exts: Vec<String>,
}

#[derive(Args)]
pub(crate) struct AddArgs {
    /// Project name (defaults to the last component of the path)
    #[arg(short = 'n', long, default_value = "")]
    name: String,

    /// Project directory
    #[arg(short = 'p', long, default_value = "")]
    path: String,

    /// Capability toggles
    #[command(flatten)]
    capabilities: CapabilityArgs,

    /// Watcher settings
    #[command(flatten)]
    watcher: WatcherArgs,

    /// Arguments passed to the project when it runs
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Args)]
#[command(group(ArgGroup::new("target").required(true).args(["name", "project"])))]
pub(crate) struct RemoveArgs {
    /// Name of the project to remove
    #[arg(short = 'n', long, value_name = "NAME")]
    name: Option<String>,

    /// Name of the project to remove, given positionally
    #[arg(value_name = "NAME")]
    project: Option<String>,
}

#[derive(Args)]
pub(crate) struct ListArgs {
    /// Print the projects as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Add a project to the config file (creating the file on first use)
    Add(AddArgs),

    /// Remove a project from the config file
    Remove(RemoveArgs),

    /// List the configured projects
    List(ListArgs),
}

#[derive(Parser)]
#[command(name = "devwatch", version)]
#[command(about = "Keep track of the projects to watch, build, run and test")]
pub(crate) struct Cli {
    /// Path of the config file
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Log verbosity (overrides DEVWATCH_LOG)
    #[arg(long, value_enum, global = true)]
    pub(crate) log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

impl AddArgs {
    pub(crate) fn project_params(&self) -> ProjectParams {
        ProjectParams {
            name: self.name.clone(),
            path: self.path.clone(),
            build: self.capabilities.build,
            no_bin: self.capabilities.no_bin,
            no_run: self.capabilities.no_run,
            no_fmt: self.capabilities.no_fmt,
            test: self.capabilities.test,
            args: self.args.clone(),
        }
    }

    pub(crate) fn watcher_defaults(&self) -> WatcherDefaults {
        WatcherDefaults::default().with_overrides(
            self.watcher.paths.clone(),
            self.watcher.ignore.clone(),
            self.watcher.exts.clone(),
        )
    }
}

impl RemoveArgs {
    pub(crate) fn name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.project.as_deref())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("devwatch").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_add_flags_map_to_params() {
        let cli = parse(&[
            "add", "-n", "api", "-p", "srv/api", "--build", "--no-run", "--test",
        ]);
        let Command::Add(add) = cli.command else {
            panic!("expected add");
        };

        let params = add.project_params();
        assert_eq!(params.name, "api");
        assert_eq!(params.path, "srv/api");
        assert!(params.build);
        assert!(params.no_run);
        assert!(params.test);
        assert!(!params.no_bin);
        assert!(!params.no_fmt);
        assert!(params.args.is_empty());
    }

    #[test]
    fn test_add_trailing_args() {
        let cli = parse(&["add", "-p", "web", "--", "--port", "8080"]);
        let Command::Add(add) = cli.command else {
            panic!("expected add");
        };

        assert_eq!(add.project_params().args, vec!["--port", "8080"]);
    }

    #[test]
    fn test_add_watcher_overrides() {
        let cli = parse(&["add", "--ext", ".rs", "--ext", ".toml", "--watch", "src"]);
        let Command::Add(add) = cli.command else {
            panic!("expected add");
        };

        let defaults = add.watcher_defaults();
        assert_eq!(defaults.exts, vec![".rs", ".toml"]);
        assert_eq!(defaults.paths, vec!["src"]);
        assert_eq!(defaults.ignore, vec!["vendor", "bin"]);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&[
            "list",
            "--json",
            "--config",
            "/tmp/x.toml",
            "--log-level",
            "debug",
        ]);

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.toml")));
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert!(matches!(cli.command, Command::List(ListArgs { json: true })));
    }

    fn remove_name(args: &[&str]) -> String {
        let Command::Remove(remove) = parse(args).command else {
            panic!("expected remove");
        };
        remove.name().to_string()
    }

    #[test]
    fn test_remove_requires_name() {
        let result = Cli::try_parse_from(["devwatch", "remove"]);
        assert!(result.is_err());

        assert_eq!(remove_name(&["remove", "--name", "api"]), "api");
        assert_eq!(remove_name(&["remove", "-n", "api"]), "api");
    }

    #[test]
    fn test_remove_positional_name() {
        assert_eq!(remove_name(&["remove", "api"]), "api");
    }

    #[test]
    fn test_remove_rejects_both_name_forms() {
        let result = Cli::try_parse_from(["devwatch", "remove", "api", "--name", "web"]);
        assert!(result.is_err());
    }
}
