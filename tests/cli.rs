use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use funannotate::version::BASE_VERSION;

/// Router binary pointed at an isolated installation directory, with the
/// database and AUGUSTUS variables cleared.
fn cmd(install: &Path) -> Command {
    let mut cmd = Command::cargo_bin("funannotate").unwrap();
    cmd.env("FUNANNOTATE_INSTALL_DIR", install)
        .env("FUNANNOTATE_PYTHON", "sh")
        .env_remove("FUNANNOTATE_DB")
        .env_remove("AUGUSTUS_CONFIG_PATH")
        .env_remove("RUST_LOG");
    cmd
}

/// Install a shell stand-in for a delegate script that records its
/// arguments one per line into `$ARGS_OUT` and exits with `code`.
fn fake_script(install: &Path, rel: &str, code: i32) {
    let path = install.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        format!("printf '%s\\n' \"$@\" > \"$ARGS_OUT\"\nexit {code}\n"),
    )
    .unwrap();
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    let install = TempDir::new().unwrap();
    cmd(install.path())
        .assert()
        .code(1)
        .stdout(contains("Usage:       funannotate <command> <arguments>"))
        .stdout(contains("outgroups"))
        .stdout(contains("Written by Jon Palmer (2016-2018) nextgenusfs@gmail.com"));
}

#[test]
fn unknown_verb_is_rejected() {
    let install = TempDir::new().unwrap();
    cmd(install.path())
        .arg("frobnicate")
        .assert()
        .code(1)
        .stdout(contains("frobnicate option not recognized"))
        .stdout(contains("Command:     clean"));
}

const CLEAN_HELP: &str = r#"
Usage:       funannotate clean <arguments>
version:     {version}

Description: The script sorts contigs by size, starting with shortest contigs it uses minimap2 or
             Mummer to find contigs duplicated elsewhere, and then removes duplicated contigs.

Arguments:   -i, --input    Multi-fasta genome file (Required)
             -o, --out      Cleaned multi-fasta output file (Required)
             -p, --pident   Percent identity of overlap. Default = 95
             -c, --cov      Percent coverage of overlap. Default = 95
             -m, --minlen   Minimum length of contig to keep. Default = 500
             --exhaustive   Test every contig. Default is to stop at N50 value.
             --method       Program to use to calculate overlaps. Default: minimap2 [minimap2,mummer]

Written by Jon Palmer (2016-2018) nextgenusfs@gmail.com
"#;

#[test]
fn clean_without_arguments_prints_exact_help() {
    let install = TempDir::new().unwrap();
    let expected = CLEAN_HELP.replace("{version}", BASE_VERSION);
    cmd(install.path())
        .arg("clean")
        .assert()
        .code(1)
        .stdout(expected);
}

#[test]
fn one_token_is_below_the_gate() {
    let install = TempDir::new().unwrap();
    cmd(install.path())
        .args(["predict", "-i"])
        .assert()
        .code(1)
        .stdout(contains("Usage:       funannotate predict <arguments>"));
}

#[cfg(unix)]
#[test]
fn clean_forwards_arguments_to_its_script() {
    let install = TempDir::new().unwrap();
    fake_script(install.path(), "bin/funannotate-contig_cleaner.py", 0);
    let record = install.path().join("args.txt");

    cmd(install.path())
        .env("ARGS_OUT", &record)
        .args(["clean", "-i", "genome.fasta", "-o", "out.fasta"])
        .assert()
        .success();

    let seen = fs::read_to_string(&record).unwrap();
    assert_eq!(seen, "-i\ngenome.fasta\n-o\nout.fasta\n");
}

#[cfg(unix)]
#[test]
fn delegate_exit_status_is_passed_through() {
    let install = TempDir::new().unwrap();
    fake_script(install.path(), "util/gff2tbl.py", 5);
    let record = install.path().join("args.txt");

    cmd(install.path())
        .env("ARGS_OUT", &record)
        .args(["util", "gff2tbl", "-g", "genes.gff3"])
        .assert()
        .code(5);

    assert_eq!(fs::read_to_string(&record).unwrap(), "-g\ngenes.gff3\n");
}

#[cfg(unix)]
#[test]
fn non_utf8_tokens_reach_the_script_unchanged() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let install = TempDir::new().unwrap();
    fake_script(install.path(), "bin/funannotate-contig_cleaner.py", 0);
    let record = install.path().join("args.txt");

    cmd(install.path())
        .env("ARGS_OUT", &record)
        .args([
            OsStr::new("clean"),
            OsStr::new("-i"),
            OsStr::from_bytes(b"g\xffenome.fa"),
        ])
        .assert()
        .success();

    assert_eq!(fs::read(&record).unwrap(), b"-i\ng\xffenome.fa\n");
}

#[test]
fn missing_script_fails() {
    let install = TempDir::new().unwrap();
    cmd(install.path())
        .args(["mask", "-i", "genome.fa"])
        .assert()
        .code(1)
        .stdout(contains("funannotate-mask.py not found"));
}

#[test]
fn species_lists_augustus_configs() {
    let install = TempDir::new().unwrap();
    let augustus = TempDir::new().unwrap();
    let species = augustus.path().join("species");
    for name in ["human", "fly", "aspergillus_fumigatus"] {
        fs::create_dir_all(species.join(name)).unwrap();
    }
    fs::write(species.join(".DS_Store"), b"").unwrap();

    let out = cmd(install.path())
        .env("AUGUSTUS_CONFIG_PATH", augustus.path())
        .arg("species")
        .assert()
        .success()
        .stdout(contains("AUGUSTUS species options:"))
        .stdout(contains(".DS_Store").not())
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(out).unwrap();
    let grid: Vec<&str> = text.lines().nth(3).unwrap().split_whitespace().collect();
    assert_eq!(grid, ["aspergillus_fumigatus", "fly", "human"]);
}

#[test]
fn species_without_augustus_env() {
    let install = TempDir::new().unwrap();
    cmd(install.path())
        .arg("species")
        .assert()
        .code(1)
        .stdout(contains("Augustus is not properly configured"));
}

#[test]
fn database_without_env_fails() {
    let install = TempDir::new().unwrap();
    cmd(install.path())
        .arg("database")
        .assert()
        .code(1)
        .stdout(contains("$FUNANNOTATE_DB not found"));
}

#[test]
fn database_table_drops_file_column() {
    let install = TempDir::new().unwrap();
    let db = TempDir::new().unwrap();
    fs::write(
        db.path().join("funannotate-db-info.txt"),
        "pfam\thmmer3\tPfam-A.hmm\t32.0\t2019-08-23\t17929\t8d6a8f1b\n",
    )
    .unwrap();

    cmd(install.path())
        .env("FUNANNOTATE_DB", db.path())
        .arg("database")
        .assert()
        .success()
        .stdout(contains("Md5checksum"))
        .stdout(contains("17929"))
        .stdout(contains("Pfam-A.hmm").not());
}

#[test]
fn database_ignores_stray_tokens() {
    let install = TempDir::new().unwrap();
    let db = TempDir::new().unwrap();
    fs::write(
        db.path().join("funannotate-db-info.txt"),
        "pfam\thmmer3\tPfam-A.hmm\t32.0\t2019-08-23\t17929\t8d6a8f1b\n",
    )
    .unwrap();

    cmd(install.path())
        .env("FUNANNOTATE_DB", db.path())
        .args(["database", "extra"])
        .assert()
        .success()
        .stdout(contains("Funannotate Databases currently installed:"))
        .stdout(contains("17929"));
}

#[test]
fn outgroups_listing_sorts_naturally() {
    let install = TempDir::new().unwrap();
    let db = TempDir::new().unwrap();
    let dir = db.path().join("outgroups");
    fs::create_dir_all(&dir).unwrap();
    for f in ["scaffold_2_buscos.fa", "scaffold_10_buscos.fa", "scaffold_1_buscos.fa"] {
        fs::write(dir.join(f), b"").unwrap();
    }

    let out = cmd(install.path())
        .env("FUNANNOTATE_DB", db.path())
        .args(["database", "--show_outgroups"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(out).unwrap();
    let names: Vec<&str> = text.lines().nth(3).unwrap().split_whitespace().collect();
    assert_eq!(names, ["scaffold_1", "scaffold_2", "scaffold_10"]);
}

#[test]
fn busco_tree_is_static() {
    let install = TempDir::new().unwrap();
    cmd(install.path())
        .args(["outgroups", "--show_buscos"])
        .assert()
        .success()
        .stdout(contains("BUSCO DB tree"))
        .stdout(contains("dikarya (1312)"));
}

#[cfg(unix)]
#[test]
fn busco_tree_is_not_handed_to_the_installer() {
    let install = TempDir::new().unwrap();
    fake_script(install.path(), "util/add2outgroups.py", 0);
    let record = install.path().join("args.txt");

    cmd(install.path())
        .env("ARGS_OUT", &record)
        .args(["outgroups", "--show_buscos", "--cpus"])
        .assert()
        .success()
        .stdout(contains("BUSCO DB tree: (# of models)"));

    assert!(!record.exists());
}

#[test]
fn version_verb() {
    let install = TempDir::new().unwrap();
    cmd(install.path())
        .arg("version")
        .assert()
        .success()
        .stdout(format!("funannotate v{BASE_VERSION}\n"));
}
