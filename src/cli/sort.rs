use std::ffi::OsString;

use tracing::instrument;

#[derive(Debug, clap::Parser)]
pub struct Sort {
    /// Print the newest version first
    #[arg(short, long)]
    reverse: bool,

    /// The versions to sort
    #[arg(required = true)]
    versions: Vec<OsString>,
}

impl Sort {
    #[instrument(level = "debug", skip_all, fields(count = self.versions.len()))]
    pub fn run(self) -> anyhow::Result<()> {
        let mut versions: Vec<&[u8]> = self
            .versions
            .iter()
            .map(|version| version.as_encoded_bytes())
            .collect();

        flexver::try_sort(&mut versions)?;
        if self.reverse {
            versions.reverse();
        }

        for version in versions {
            println!("{}", String::from_utf8_lossy(version));
        }
        Ok(())
    }
}
