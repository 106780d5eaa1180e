use std::path::PathBuf;

use anyhow::Context;
use flexver::vectors;
use tracing::instrument;

use super::terminal::Palette;

#[derive(Debug, clap::Parser)]
pub struct Verify {
    /// Only print the summary
    #[arg(long, short)]
    quiet: bool,

    /// Test-vector files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

impl Verify {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, palette: Palette) -> anyhow::Result<()> {
        let mut passed = 0;
        let mut failed = 0;

        for path in &self.files {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let cases = vectors::parse(&text)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            tracing::info!("Checking {} vectors from {}", cases.len(), path.display());

            for case in cases {
                let outcome = case.check();
                if outcome.passed() {
                    passed += 1;
                    continue;
                }
                failed += 1;
                if !self.quiet {
                    println!(
                        "{}:{}: expected `{case}`, got `{} {} {}` (reversed: `{} {} {}`)",
                        path.display(),
                        case.line,
                        case.left,
                        palette.failure(vectors::symbol(outcome.forward)),
                        case.right,
                        case.right,
                        palette.failure(vectors::symbol(outcome.reverse)),
                        case.left,
                    );
                }
            }
        }

        let summary = format!("{passed} passed, {failed} failed");
        if failed > 0 {
            println!("{}", palette.failure(&summary));
            anyhow::bail!("{failed} test vector(s) failed");
        }
        println!("{}", palette.success(&summary));
        Ok(())
    }
}
