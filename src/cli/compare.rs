use std::ffi::OsString;

use anyhow::Context;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
pub struct Compare {
    /// The left-hand version
    left: OsString,

    /// The right-hand version
    right: OsString,
}

impl Compare {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self) -> anyhow::Result<()> {
        let ordering = flexver::try_compare(
            self.left.as_encoded_bytes(),
            self.right.as_encoded_bytes(),
        )
        .with_context(|| {
            format!(
                "cannot compare {:?} with {:?}",
                self.left.to_string_lossy(),
                self.right.to_string_lossy()
            )
        })?;

        println!(
            "{} {} {}",
            self.left.to_string_lossy(),
            flexver::vectors::symbol(ordering),
            self.right.to_string_lossy()
        );
        Ok(())
    }
}
