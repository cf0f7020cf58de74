use anyhow::{Context, Result};
use clap::Parser;
use seriatim::iter;
use seriatim::task::sleep;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Directory walker
///
/// Lists everything below a directory breadth-first, reading one directory
/// at a time. Set `RUST_LOG=seriatim=trace` to watch the traversal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The directory to walk
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Stop after this many entries
    #[arg(long, value_name = "COUNT")]
    max_entries: Option<usize>,

    /// Pause before reading each directory
    #[arg(long, value_name = "DURATION")]
    delay: Option<humantime::Duration>,

    /// Print the size of every file found
    #[arg(long)]
    sizes: bool,
}

/// Why the walk ended early.
enum Halt {
    Limit(usize),
    Failed(anyhow::Error),
}

fn read_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        paths.push(entry?.path());
    }
    paths.sort();
    Ok(paths)
}

#[seriatim::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let queue = RefCell::new(VecDeque::from([args.root.clone()]));
    let files = RefCell::new(Vec::new());
    let seen = Cell::new(0);

    let flow = iter::dequeue(&queue, |dir| {
        let (args, queue, files, seen) = (&args, &queue, &files, &seen);
        async move {
            if let Some(delay) = args.delay {
                sleep(*delay).await;
            }
            let entries = match read_entries(&dir) {
                Ok(entries) => entries,
                Err(err) => return ControlFlow::Break(Halt::Failed(err)),
            };
            for path in entries {
                println!("{}", path.display());
                seen.set(seen.get() + 1);
                if path.is_dir() {
                    queue.borrow_mut().push_back(path);
                } else {
                    files.borrow_mut().push(path);
                }
                if args.max_entries.is_some_and(|max| seen.get() >= max) {
                    return ControlFlow::Break(Halt::Limit(seen.get()));
                }
            }
            ControlFlow::Continue(())
        }
    })
    .await;

    match flow {
        ControlFlow::Continue(()) => eprintln!("walked {} entries", seen.get()),
        ControlFlow::Break(Halt::Limit(count)) => eprintln!("stopped after {count} entries"),
        ControlFlow::Break(Halt::Failed(err)) => return Err(err),
    }

    if args.sizes {
        // Files which vanished or can't be read are left out.
        let files = files.into_inner();
        let sizes = iter::map(&files, |path, _| async move {
            std::fs::metadata(path).map(|meta| (path, meta.len()))
        })
        .await;
        for (path, len) in sizes {
            println!("{len:>12} {}", path.display());
        }
    }

    Ok(())
}
