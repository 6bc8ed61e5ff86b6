//! Static verb table: every verb the router knows, its help block, its
//! argument gate, and what it does once the gate passes.

use std::ffi::OsString;
use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::help;
use crate::model::Script;
use crate::subcommands::{database, outgroups, species, version};
use crate::version::Version;

/// Forwarded-token minimum for verbs that hand off to a pipeline script.
pub const DELEGATE_MIN_ARGS: usize = 2;

/// What an in-process report asks the router to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Done,
    /// Hand the same forwarded tokens to a delegate script.
    Forward(Script),
}

/// Read-only state shared with report commands.
pub struct ReportContext<'a> {
    pub config: &'a Config,
    pub version: &'a Version,
    /// Verb as the user typed it (`util gff2tbl` for nested verbs).
    pub verb: &'a str,
}

pub type ReportFn = fn(&ReportContext<'_>, &[OsString], &mut dyn Write) -> Result<Step>;

pub enum Handler {
    Delegate(Script),
    Report(ReportFn),
    /// Nested verb table; the first forwarded token selects the entry.
    Group(Registry),
}

/// Blocks of related verbs in the usage summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Prepare,
    Annotate,
    Manage,
}

pub struct Entry {
    pub verb: &'static str,
    pub summary: &'static str,
    pub section: Section,
    /// Absent for verbs whose gate can never fail.
    pub help: Option<&'static str>,
    pub min_args: usize,
    pub handler: Handler,
}

#[derive(Clone, Copy)]
pub struct Registry {
    entries: &'static [Entry],
}

const fn delegate(
    verb: &'static str,
    summary: &'static str,
    section: Section,
    help: &'static str,
    script: Script,
) -> Entry {
    Entry {
        verb,
        summary,
        section,
        help: Some(help),
        min_args: DELEGATE_MIN_ARGS,
        handler: Handler::Delegate(script),
    }
}

const fn report(
    verb: &'static str,
    summary: &'static str,
    help: Option<&'static str>,
    run: ReportFn,
) -> Entry {
    Entry {
        verb,
        summary,
        section: Section::Manage,
        help,
        min_args: 0,
        handler: Handler::Report(run),
    }
}

/// Nested `util` converters: one token after the sub-verb is enough.
const fn converter(
    verb: &'static str,
    summary: &'static str,
    help: &'static str,
    script: Script,
) -> Entry {
    Entry {
        verb,
        summary,
        section: Section::Manage,
        help: Some(help),
        min_args: 1,
        handler: Handler::Delegate(script),
    }
}

static UTIL: [Entry; 9] = [
    converter(
        "compare",
        "Compare annotations to reference (GFF3 or GBK annotations)",
        help::UTIL_COMPARE,
        Script::util("compare2annotations.py"),
    ),
    converter(
        "tbl2gbk",
        "Convert TBL format to GenBank format",
        help::UTIL_TBL2GBK,
        Script::util("tbl2gbk.py"),
    ),
    converter(
        "gbk2parts",
        "Convert GBK file to individual components",
        help::UTIL_GBK2PARTS,
        Script::util("gbk2parts.py"),
    ),
    converter(
        "gff2proteins",
        "Convert GFF3 + FASTA files to protein FASTA",
        help::UTIL_GFF2PROTEINS,
        Script::util("gff2prot.py"),
    ),
    converter(
        "gff2tbl",
        "Convert GFF3 format to NCBI annotation table (tbl)",
        help::UTIL_GFF2TBL,
        Script::util("gff2tbl.py"),
    ),
    converter(
        "bam2gff3",
        "Convert BAM coord-sorted transcript alignments to GFF3",
        help::UTIL_BAM2GFF3,
        Script::util("bam2gff3.py"),
    ),
    converter(
        "prot2genome",
        "Map proteins to genome generating GFF3 protein alignments",
        help::UTIL_PROT2GENOME,
        Script::bin("funannotate-p2g.py"),
    ),
    converter(
        "stringtie2gff3",
        "Convert GTF (stringTIE) to GFF3 format",
        help::UTIL_STRINGTIE2GFF3,
        Script::util("stringtie2gff.py"),
    ),
    converter(
        "quarry2gff3",
        "Convert CodingQuarry output to proper GFF3 format",
        help::UTIL_QUARRY2GFF3,
        Script::util("codingquarry2gff3.py"),
    ),
];

static STANDARD: [Entry; 19] = [
    delegate(
        "clean",
        "Find/remove small repetitive contigs",
        Section::Prepare,
        help::CLEAN,
        Script::bin("funannotate-contig_cleaner.py"),
    ),
    delegate(
        "sort",
        "Sort by size and rename contig headers",
        Section::Prepare,
        help::SORT,
        Script::bin("funannotate-sort_rename.py"),
    ),
    delegate(
        "mask",
        "Repeatmask genome assembly",
        Section::Prepare,
        help::MASK,
        Script::bin("funannotate-mask.py"),
    ),
    delegate(
        "train",
        "RNA-seq mediated training of Augustus/GeneMark",
        Section::Annotate,
        help::TRAIN,
        Script::bin("funannotate-train.py"),
    ),
    delegate(
        "predict",
        "Run gene prediction pipeline",
        Section::Annotate,
        help::PREDICT,
        Script::bin("funannotate-predict.py"),
    ),
    delegate(
        "fix",
        "Fix annotation errors (generate new GenBank file)",
        Section::Annotate,
        help::FIX,
        Script::util("updateGBK.py"),
    ),
    delegate(
        "update",
        "RNA-seq/PASA mediated gene model refinement",
        Section::Annotate,
        help::UPDATE,
        Script::bin("funannotate-update.py"),
    ),
    delegate(
        "remote",
        "Partial functional annotation using remote servers",
        Section::Annotate,
        help::REMOTE,
        Script::bin("funannotate-remote.py"),
    ),
    delegate(
        "iprscan",
        "InterProScan5 search (Docker or local)",
        Section::Annotate,
        help::IPRSCAN,
        Script::util("funannotate-iprscan.py"),
    ),
    delegate(
        "annotate",
        "Assign functional annotation to gene predictions",
        Section::Annotate,
        help::ANNOTATE,
        Script::bin("funannotate-functional.py"),
    ),
    delegate(
        "compare",
        "Compare funannotated genomes",
        Section::Annotate,
        help::COMPARE,
        Script::bin("funannotate-compare.py"),
    ),
    Entry {
        verb: "util",
        summary: "Format conversion and misc utilities",
        section: Section::Manage,
        help: Some(help::UTIL),
        min_args: 1,
        handler: Handler::Group(Registry { entries: &UTIL }),
    },
    delegate(
        "setup",
        "Setup/Install databases",
        Section::Manage,
        help::SETUP,
        Script::bin("funannotate-setup.py"),
    ),
    delegate(
        "test",
        "Download/Run funannotate installation tests",
        Section::Manage,
        help::TEST,
        Script::bin("funannotate-test.py"),
    ),
    // Always forwards; the checker has useful output with no arguments.
    Entry {
        verb: "check",
        summary: "Check Python, Perl, and External dependencies",
        section: Section::Manage,
        help: None,
        min_args: 0,
        handler: Handler::Delegate(Script::util("check_modules.py")),
    },
    report(
        "species",
        "list pre-trained Augustus species",
        None,
        species::run,
    ),
    report("database", "Manage databases", None, database::run),
    // Gates inside its report, once the listing flags are ruled out.
    report(
        "outgroups",
        "Manage outgroups for funannotate compare",
        Some(help::OUTGROUPS),
        outgroups::run,
    ),
    report(
        "version",
        "Print the funannotate version",
        None,
        version::run,
    ),
];

impl Registry {
    /// The top-level verb table.
    pub fn standard() -> Self {
        Self {
            entries: &STANDARD,
        }
    }

    pub fn lookup(&self, verb: &str) -> Option<&'static Entry> {
        self.entries.iter().find(|e| e.verb == verb)
    }

    pub fn entries(&self) -> &'static [Entry] {
        self.entries
    }

    /// Top-level usage block: header plus one line per verb, with a blank
    /// line between sections.
    pub fn usage(&self, version: &Version) -> String {
        let mut text = help::fill(help::USAGE_HEADER, "", &version.to_string());
        text.push('\n');
        let mut prev: Option<Section> = None;
        for e in self.entries {
            let prefix = match prev {
                None => "Command:     ",
                Some(section) if section != e.section => {
                    text.push('\n');
                    "             "
                }
                Some(_) => "             ",
            };
            text.push_str(&format!("{prefix}{:<14} {}\n", e.verb, e.summary));
            prev = Some(e.section);
        }
        help::framed(&text)
    }
}
