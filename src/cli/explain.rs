use std::ffi::OsString;

use flexver::{Decomposition, decompose};
use tracing::instrument;

use super::terminal::Palette;

#[derive(Debug, clap::Parser)]
pub struct Explain {
    /// The versions to decompose
    #[arg(required = true)]
    versions: Vec<OsString>,
}

impl Explain {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, palette: Palette) -> anyhow::Result<()> {
        let mut malformed = 0;

        for version in &self.versions {
            let bytes = version.as_encoded_bytes();
            match decompose(bytes) {
                Ok(decomposition) => {
                    let appendix = bytes
                        .iter()
                        .position(|&b| b == b'+')
                        .map(|index| String::from_utf8_lossy(&bytes[index..]));
                    println!(
                        "{}{}",
                        render(&decomposition, palette),
                        palette.dim(appendix.as_deref().unwrap_or_default())
                    );
                    print_components(&decomposition);
                    if let Some(appendix) = appendix {
                        let label = palette.dim(&format!("{:<12}", "appendix"));
                        println!("  {label} {appendix:?}");
                    }
                }
                Err(e) => {
                    malformed += 1;
                    println!("{}", render(e.partial(), palette));
                    print_components(e.partial());
                    println!("  {}", palette.failure(&e.to_string()));
                }
            }
            println!();
        }

        if malformed > 0 {
            anyhow::bail!("{malformed} version(s) could not be fully decomposed");
        }
        Ok(())
    }
}

fn render(decomposition: &Decomposition, palette: Palette) -> String {
    decomposition
        .iter()
        .map(|component| palette.component(component))
        .collect()
}

fn print_components(decomposition: &Decomposition) {
    for component in decomposition {
        println!("  {:<12} {:?}", component.kind().to_string(), component.text());
    }
}
