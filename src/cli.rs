mod compare;
mod explain;
mod sort;
mod terminal;
mod verify;

use clap::ArgAction;
use compare::Compare;
use explain::Explain;
use sort::Sort;
use terminal::{ColorChoice, Palette};
use verify::Verify;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// When to colour output
    #[arg(long, value_name = "WHEN", default_value = "auto", global = true)]
    color: ColorChoice,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let palette = Palette::new(self.color.enabled());
        self.command.run(palette)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries command output
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Compare two versions
    ///
    /// Prints the comparison in test-vector form, e.g. `1.0 < 1.1`.
    Compare(Compare),

    /// Sort versions in ascending order
    Sort(Sort),

    /// Show how versions are split into components
    Explain(Explain),

    /// Check comparison test-vector files
    ///
    /// Each non-comment line is `<version> <op> <version>`, where op is one
    /// of `<`, `=` or `>`.
    Verify(Verify),
}

impl Command {
    fn run(self, palette: Palette) -> anyhow::Result<()> {
        match self {
            Self::Compare(command) => command.run(),
            Self::Sort(command) => command.run(),
            Self::Explain(command) => command.run(palette),
            Self::Verify(command) => command.run(palette),
        }
    }
}
