//! `funannotate outgroups`: list installed BUSCO outgroups, show the BUSCO
//! lineage tree, or hand a new proteome to the outgroup installer.

use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{Config, ENV_DB};
use crate::error::{Result, RouterError};
use crate::help;
use crate::io::resources::{self, EntryKind};
use crate::model::{Script, LISTING_COLUMNS, OUTGROUPS_DIR, OUTGROUP_SUFFIX};
use crate::registry::{ReportContext, Step, DELEGATE_MIN_ARGS};
use crate::util::{argscan, natsort, table};

pub const ADD_SCRIPT: Script = Script::util("add2outgroups.py");

pub const SHOW_OUTGROUPS: &str = "--show_outgroups";
pub const SHOW_BUSCOS: &str = "--show_buscos";
pub const DATABASE_FLAGS: [&str; 2] = ["-d", "--database"];

/// Flags accepted by `outgroups` in add mode; mirrors its help block.
#[derive(Parser, Debug)]
#[command(
    name = "outgroups",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct OutgroupsArgs {
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,
    #[arg(long)]
    pub species: Option<String>,
    #[arg(long = "busco_db")]
    pub busco_db: Option<String>,
    #[arg(long)]
    pub cpus: Option<String>,
    #[arg(long = "show_buscos")]
    pub show_buscos: bool,
    #[arg(long = "show_outgroups")]
    pub show_outgroups: bool,
    #[arg(short = 'd', long = "database")]
    pub database: Option<PathBuf>,
}

/// `-d/--database` wins over `$FUNANNOTATE_DB`.
pub fn database_root(config: &Config, args: &[OsString]) -> Result<PathBuf> {
    match argscan::flag_value(args, &DATABASE_FLAGS) {
        Some(p) => Ok(PathBuf::from(p)),
        None => config.env.require(
            ENV_DB,
            "Funannotate database not configured, set ENV variable or pass -d.",
        ),
    }
}

/// Installed outgroup species: `<db>/outgroups/*`, suffix stripped.
pub fn list_outgroups(db: &Path) -> Result<Vec<String>> {
    let dir = db.join(OUTGROUPS_DIR);
    resources::ensure_dir(
        &dir,
        format!(
            "ERROR: {}/{OUTGROUPS_DIR} folder is not found, run funannotate setup.",
            db.display()
        ),
    )?;
    let mut names: Vec<String> = resources::visible_entries(&dir, EntryKind::Any)?
        .into_iter()
        .map(|n| n.strip_suffix(OUTGROUP_SUFFIX).map(str::to_string).unwrap_or(n))
        .collect();
    natsort::natural_sort_dedup(&mut names);
    Ok(names)
}

pub fn print_outgroups(db: &Path, out: &mut dyn Write) -> Result<()> {
    let names = list_outgroups(db)?;
    writeln!(out, "{}", table::banner("BUSCO Outgroups:", 29))?;
    writeln!(out, "{}", table::list_columns(&names, LISTING_COLUMNS))?;
    writeln!(out)?;
    Ok(())
}

pub fn print_busco_tree(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", table::banner("BUSCO DB tree: (# of models)", 29))?;
    write!(out, "{}", help::BUSCO_TREE)?;
    Ok(())
}

pub fn run(ctx: &ReportContext<'_>, args: &[OsString], out: &mut dyn Write) -> Result<Step> {
    if argscan::has_flag(args, SHOW_OUTGROUPS) {
        let db = database_root(ctx.config, args)?;
        print_outgroups(&db, out)?;
        return Ok(Step::Done);
    }
    if argscan::has_flag(args, SHOW_BUSCOS) {
        print_busco_tree(out)?;
        return Ok(Step::Done);
    }
    if args.len() < DELEGATE_MIN_ARGS {
        return Err(RouterError::InsufficientArguments {
            verb: ctx.verb.to_string(),
            required: DELEGATE_MIN_ARGS,
            given: args.len(),
        });
    }
    // The installer validates its own flags; a local parse only informs the log.
    match OutgroupsArgs::try_parse_from(args) {
        Ok(parsed) => log::debug!(
            "adding outgroup species={:?} input={:?} busco_db={:?} cpus={:?}",
            parsed.species,
            parsed.input,
            parsed.busco_db,
            parsed.cpus
        ),
        Err(e) => log::debug!("outgroups flags not understood locally: {:?}", e.kind()),
    }
    Ok(Step::Forward(ADD_SCRIPT))
}
