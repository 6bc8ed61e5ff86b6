//! `funannotate database`: show the installed database index, or the
//! installed outgroups with `--show_outgroups`.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::ENV_DB;
use crate::error::{Result, RouterError};
use crate::io::dbinfo;
use crate::model::{DB_INFO_FILE, DB_TABLE_ALIGN, DB_TABLE_HEADER, DB_TABLE_MAX_WIDTH};
use crate::registry::{ReportContext, Step};
use crate::subcommands::outgroups;
use crate::util::argscan;
use crate::util::table::{self, Align};

/// Header row plus one display row per installed database.
pub fn database_table(db: &Path) -> Result<Vec<Vec<String>>> {
    let index = db.join(DB_INFO_FILE);
    if !index.is_file() {
        return Err(RouterError::missing_resource(
            &index,
            "Database is not properly configured, re-run funannotate setup",
        ));
    }
    let mut rows: Vec<Vec<String>> = vec![DB_TABLE_HEADER.iter().map(|s| s.to_string()).collect()];
    rows.extend(dbinfo::read_db_info(&index)?);
    Ok(rows)
}

fn print_databases(db: &Path, out: &mut dyn Write) -> Result<()> {
    let rows = database_table(db)?;
    writeln!(
        out,
        "\n{}\n",
        table::bold_underline("Funannotate Databases currently installed:")
    )?;
    writeln!(
        out,
        "{}",
        table::render_table(&rows, &Align::parse_all(DB_TABLE_ALIGN), DB_TABLE_MAX_WIDTH)
    )?;
    writeln!(
        out,
        "\nTo update a database type:\n\tfunannotate setup -i DBNAME -d {} --force\n",
        db.display()
    )?;
    Ok(())
}

/// Tokens other than `--show_outgroups` and `-d/--database` are ignored.
pub fn run(ctx: &ReportContext<'_>, args: &[OsString], out: &mut dyn Write) -> Result<Step> {
    if argscan::has_flag(args, outgroups::SHOW_OUTGROUPS) {
        let db = outgroups::database_root(ctx.config, args)?;
        outgroups::print_outgroups(&db, out)?;
        return Ok(Step::Done);
    }

    let db = match argscan::flag_value(args, &outgroups::DATABASE_FLAGS) {
        Some(p) => PathBuf::from(p),
        None => ctx.config.env.require(
            ENV_DB,
            "$FUNANNOTATE_DB not found, run funannotate setup and export ENV variable",
        )?,
    };
    print_databases(&db, out)?;
    Ok(Step::Done)
}
