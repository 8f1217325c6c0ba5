use clap::Parser;
use remain::{collect, layout, merge, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "remain")]
#[command(about = "Wrap HTML files in a common layout")]
#[command(long_about = "\
RE<MAIN> — wrap HTML files in a common layout

Processes .html files in the target directory by splicing their content into
a shared layout. Each output file is the layout with its <main> tag contents
replaced by the corresponding source file's <main> region (or the whole file,
when it has none). The output directory mirrors the input's structure.

Layout contract:

  _layout.html                       # the shared template
  <html>
    <body>
      <nav>...</nav>
      <main></main>                  # placeholder region, replaced per file
      <footer>...</footer>
    </body>
  </html>

Examples:
  remain                                     Process .html files in the current directory and its subdirectories.
  remain --layout my-layout.html             Use my-layout.html instead of the default _layout.html.
  remain --output publish --input my-site    Process files within my-site and write the results to publish.")]
#[command(version)]
struct Cli {
    /// The path where the tool will look for files
    #[arg(long, default_value = ".")]
    input: PathBuf,

    /// The path to the file which will be used as the common layout
    #[arg(long, default_value = "./_layout.html")]
    layout: PathBuf,

    /// The output path
    #[arg(long, default_value = ".")]
    output: PathBuf,

    /// Fail instead of falling back to the built-in layout when the layout
    /// file cannot be read
    #[arg(long)]
    strict_layout: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let layout = match layout::load(&cli.layout) {
        Ok(layout) => layout,
        Err(err) if cli.strict_layout => return Err(err.into()),
        Err(err) => {
            println!("Warning: {err}; using built-in fallback layout");
            layout::Layout::fallback()
        }
    };

    let collected = collect::collect_html_files(&cli.input);
    if let Some(err) = &collected.walk_error {
        println!("Warning: directory walk aborted early: {err}");
    }
    if collected.files.is_empty() {
        println!("Found no files to process.");
        return Ok(());
    }

    let merger = merge::Merger::new(layout);
    if !merger.layout_has_placeholder() {
        println!("Warning: layout has no <main> region; source content will be dropped");
    }

    let report = merger.merge_all(&collected.files, &cli.input, &cli.output);
    output::print_run_output(&report);

    Ok(())
}
