use std::io;
use std::process;

use ordtree::shell::Shell;
use ordtree::tree::Tree;

fn main() {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut tree = Tree::new();

    if let Err(e) = Shell::new(stdin.lock(), stdout.lock()).run(&mut tree) {
        eprintln!("error: {}", e);
        process::exit(1);
    }

    log::info!("exiting with {} values stored", tree.len());
}
