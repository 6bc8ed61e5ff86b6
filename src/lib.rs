pub mod cli;
pub mod config;
pub mod error;
pub mod help;
pub mod model;
pub mod registry;
pub mod version;

pub mod io {
    pub mod dbinfo;
    pub mod resources;
}

pub mod util {
    pub mod argscan;
    pub mod logging;
    pub mod natsort;
    pub mod table;
}

pub mod subcommands {
    pub mod database;
    pub mod delegate;
    pub mod outgroups;
    pub mod species;
    pub mod version;
}
