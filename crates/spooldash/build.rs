use std::fs;
use std::path::Path;

use clap::CommandFactory;

// src/cli.rs deliberately depends on nothing but clap and clap_complete,
// so the build script can include it and derive man pages for the whole
// command tree without building the crate itself.
#[path = "src/cli.rs"]
mod cli;

fn main() {
    println!("cargo::rerun-if-changed=src/cli.rs");

    let out_dir = std::env::var_os("OUT_DIR").expect("OUT_DIR not set by Cargo");
    let man_dir = Path::new(&out_dir).join("man");
    fs::create_dir_all(&man_dir).expect("failed to create man output directory");

    // Walk the command tree; subcommand pages get the conventional
    // dashed name (spooldash-spools.1).
    let mut pending = vec![cli::Cli::command()];
    while let Some(cmd) = pending.pop() {
        let name = cmd.get_name().to_owned();
        write_manpage(&cmd, &man_dir.join(format!("{name}.1")));

        for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
            pending.push(sub.clone().name(format!("{name}-{}", sub.get_name())));
        }
    }
}

fn write_manpage(cmd: &clap::Command, path: &Path) {
    let mut page = Vec::new();
    clap_mangen::Man::new(cmd.clone())
        .render(&mut page)
        .unwrap_or_else(|e| panic!("failed to render man page for `{}`: {e}", cmd.get_name()));
    fs::write(path, page).unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
}
