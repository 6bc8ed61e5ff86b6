//! Verb routing: gate on argument count, print help, or dispatch to a
//! delegate script or an in-process report.

use std::ffi::OsString;
use std::io::{self, Write};

use crate::config::Config;
use crate::error::RouterError;
use crate::help;
use crate::model::{Invocation, Outcome, Script};
use crate::registry::{Entry, Handler, Registry, ReportContext, Step};
use crate::subcommands::delegate::{DelegateCall, Launcher};
use crate::version::Version;

pub struct Router<'a> {
    registry: Registry,
    config: &'a Config,
    version: Version,
    launcher: &'a dyn Launcher,
}

impl<'a> Router<'a> {
    pub fn new(
        registry: Registry,
        config: &'a Config,
        version: Version,
        launcher: &'a dyn Launcher,
    ) -> Self {
        Self {
            registry,
            config,
            version,
            launcher,
        }
    }

    /// Route one command line. Only failures to write to `out` are errors;
    /// everything else is reported to `out` and folded into the outcome.
    pub fn run(&self, inv: &Invocation, out: &mut dyn Write) -> io::Result<Outcome> {
        let Some(verb) = inv.verb.as_deref() else {
            write!(out, "{}", self.registry.usage(&self.version))?;
            return Ok(Outcome::Usage);
        };
        match self.registry.lookup(verb) {
            Some(entry) => self.dispatch(entry, verb, &inv.rest, out),
            None => {
                log::debug!("unknown verb {verb:?}");
                writeln!(out, "{}", RouterError::UnrecognizedVerb { verb: verb.to_string() })?;
                write!(out, "{}", self.registry.usage(&self.version))?;
                Ok(Outcome::Usage)
            }
        }
    }

    fn dispatch(
        &self,
        entry: &Entry,
        shown_verb: &str,
        rest: &[OsString],
        out: &mut dyn Write,
    ) -> io::Result<Outcome> {
        if rest.len() < entry.min_args {
            log::debug!(
                "{shown_verb}: {} argument(s), gate is {}",
                rest.len(),
                entry.min_args
            );
            return self.print_help(entry, shown_verb, out);
        }

        match &entry.handler {
            Handler::Delegate(script) => self.delegate(script, rest, out),
            Handler::Report(run) => {
                let ctx = ReportContext {
                    config: self.config,
                    version: &self.version,
                    verb: shown_verb,
                };
                match (*run)(&ctx, rest, &mut *out) {
                    Ok(Step::Done) => Ok(Outcome::Success),
                    Ok(Step::Forward(script)) => self.delegate(&script, rest, out),
                    Err(RouterError::InsufficientArguments { .. }) => {
                        self.print_help(entry, shown_verb, out)
                    }
                    Err(e) => self.fail(e, out),
                }
            }
            Handler::Group(nested) => {
                // The group gate guarantees at least one token.
                let sub = rest[0].to_string_lossy();
                match nested.lookup(&sub) {
                    Some(child) => {
                        let shown = format!("{shown_verb} {sub}");
                        self.dispatch(child, &shown, &rest[1..], out)
                    }
                    None => self.print_help(entry, shown_verb, out),
                }
            }
        }
    }

    fn delegate(
        &self,
        script: &Script,
        rest: &[OsString],
        out: &mut dyn Write,
    ) -> io::Result<Outcome> {
        let call = match DelegateCall::build(self.config, script, rest) {
            Ok(call) => call,
            Err(e) => return self.fail(e, out),
        };
        // Anything we printed must land before the child's output.
        out.flush()?;
        match self.launcher.launch(&call) {
            Ok(code) => {
                log::debug!("{} exited with {code}", script.file);
                Ok(Outcome::Delegated(code))
            }
            Err(e) => self.fail(e, out),
        }
    }

    fn print_help(
        &self,
        entry: &Entry,
        shown_verb: &str,
        out: &mut dyn Write,
    ) -> io::Result<Outcome> {
        let text = match entry.help {
            Some(template) => help::render(template, shown_verb, &self.version.to_string()),
            None => self.registry.usage(&self.version),
        };
        write!(out, "{text}")?;
        Ok(Outcome::Usage)
    }

    fn fail(&self, err: RouterError, out: &mut dyn Write) -> io::Result<Outcome> {
        log::debug!("{err:?}");
        writeln!(out, "{err}")?;
        Ok(Outcome::Failure)
    }
}
