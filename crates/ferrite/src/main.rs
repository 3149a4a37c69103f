use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use ferrite_errors::Renderer;
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
enum Options {
    /// Parse a file and report syntax errors.
    Parse {
        path: Utf8PathBuf,
        /// Also print the syntax tree.
        #[arg(long)]
        dump: bool,
    },
}

fn main() -> anyhow::Result<()> {
    match Options::parse() {
        Options::Parse { path, dump } => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read `{path}`"))?;

            let parse = ferrite_parse::source_file(&text);

            if dump {
                print!("{}", parse.tree().debug_dump());
            }

            let renderer = Renderer::styled();
            for diagnostic in parse.diagnostics() {
                eprintln!("{}", diagnostic.render(&renderer, path.as_str(), &text));
            }

            if !parse.ok() {
                std::process::exit(1);
            }

            Ok(())
        }
    }
}
