//! `funannotate species`: list pre-trained AUGUSTUS species.

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use crate::config::ENV_AUGUSTUS;
use crate::error::Result;
use crate::io::resources::{self, EntryKind};
use crate::model::{AUGUSTUS_SPECIES_DIR, LISTING_COLUMNS};
use crate::registry::{ReportContext, Step};
use crate::util::{natsort, table};

const MISSING_ENV: &str =
    "Error: Augustus is not properly configured. Please review installation instructions";

/// Species folders under `<config_root>/species`, naturally sorted.
pub fn list_species(config_root: &Path) -> Result<Vec<String>> {
    let dir = config_root.join(AUGUSTUS_SPECIES_DIR);
    resources::ensure_dir(
        &dir,
        format!(
            "Error: AUGUSTUS species folder not found: {}. Please review installation instructions",
            dir.display()
        ),
    )?;
    let mut names = resources::visible_entries(&dir, EntryKind::Dir)?;
    natsort::natural_sort_dedup(&mut names);
    Ok(names)
}

pub fn run(ctx: &ReportContext<'_>, _args: &[OsString], out: &mut dyn Write) -> Result<Step> {
    let root = ctx.config.env.require(ENV_AUGUSTUS, MISSING_ENV)?;
    let names = list_species(&root)?;
    log::debug!("{} AUGUSTUS species under {}", names.len(), root.display());

    writeln!(out, "{}", table::banner("AUGUSTUS species options:", 26))?;
    writeln!(out, "{}", table::list_columns(&names, LISTING_COLUMNS))?;
    Ok(Step::Done)
}
