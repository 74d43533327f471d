//! Builds a tree out of the integers given on the command line and prints
//! them back in the requested traversal order.

use std::io::{self, Write};

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use structopt::StructOpt;
use visitor_bst::{BinaryTree, Traversal, Visitor};

#[derive(Debug, StructOpt)]
#[structopt(
    rename_all = "kebab-case",
    setting = structopt::clap::AppSettings::AllowNegativeNumbers
)]
struct Opt {
    /// Traversal to print with: pre, in, post or breadth
    #[structopt(short, long, default_value = "in")]
    traversal: Traversal,
    /// Log more about what the tree is doing. Repeat for more detail
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
    /// Values to insert, in order
    values: Vec<i32>,
}

/// Writes every value it visits followed by a separator.
struct Print<W> {
    traversal: Traversal,
    out: W,
    printed: usize,
    error: Option<io::Error>,
}

impl<W: Write> Visitor<i32> for Print<W> {
    fn traversal(&self) -> Traversal {
        self.traversal
    }

    fn action(&mut self, value: &i32) {
        if self.error.is_some() {
            return;
        }
        match write!(self.out, "{}, ", value) {
            Ok(()) => self.printed += 1,
            Err(e) => self.error = Some(e),
        }
    }
}

/// Prints the tree in `traversal` order as `v, v, ...`, ending the line
/// only if something was printed.
fn print_tree<W: Write>(tree: &BinaryTree<i32>, traversal: Traversal, out: W) -> io::Result<()> {
    let mut visitor = Print {
        traversal,
        out,
        printed: 0,
        error: None,
    };
    tree.traverse_tree(&mut visitor);

    if let Some(e) = visitor.error {
        return Err(e);
    }
    if visitor.printed > 0 {
        writeln!(visitor.out)?;
    }
    visitor.out.flush()
}

/// Builds the tree from `opt` and prints it to `out`. A reader that goes
/// away early (e.g. `| head`) isn't an error.
fn run<W: Write>(opt: &Opt, out: W) -> io::Result<()> {
    let mut tree = BinaryTree::new();
    tree.extend(opt.values.iter().copied());
    log::info!("built a tree of {} values", tree.len());

    match print_tree(&tree, opt.traversal, out) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("output closed before the tree was printed");
            Ok(())
        }
        result => result,
    }
}

fn main() -> io::Result<()> {
    let opt = Opt::from_args();
    initialize_logging(opt.verbose);

    let stdout = io::stdout();
    run(&opt, stdout.lock())
}

fn initialize_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // Only fails if a logger is already installed.
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
