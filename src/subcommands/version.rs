//! `funannotate version`

use std::ffi::OsString;
use std::io::Write;

use crate::error::Result;
use crate::model::PROGRAM;
use crate::registry::{ReportContext, Step};

pub fn run(ctx: &ReportContext<'_>, _args: &[OsString], out: &mut dyn Write) -> Result<Step> {
    writeln!(out, "{PROGRAM} v{}", ctx.version)?;
    Ok(Step::Done)
}
