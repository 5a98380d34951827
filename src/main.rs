use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use covergen::article;
use covergen::audit::{self, AuditOptions};
use covergen::canvas::FitPolicy;
use covergen::compact;
use covergen::fetch;
use covergen::font::{FontConfig, FontLibrary};
use covergen::output;
use covergen::styles::{self, CoverText, StyleAssets, StyleId};
use covergen::{Error, TargetSize};

#[derive(Parser)]
#[command(
    name = "covergen",
    about = "Generate and audit 1000x420 article cover images",
    version
)]
struct Cli {
    /// Repository root that article paths are resolved against
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a cover image for an article
    Generate(GenerateArgs),
    /// Check, and optionally fix, cover image dimensions
    Audit(AuditArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Path to an article folder or markdown file
    #[arg(long)]
    article: String,

    /// Override the title text displayed on the cover
    #[arg(long)]
    title: Option<String>,

    /// Optional subtitle text
    #[arg(long)]
    subtitle: Option<String>,

    /// Optional tagline chip text
    #[arg(long)]
    tagline: Option<String>,

    /// Accent strip label text
    #[arg(long, default_value = "blog.dev")]
    label: String,

    /// Override the output image path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Skip writing a backup copy of the existing image
    #[arg(long)]
    no_backup: bool,

    /// Render the stylised cat mascot badge on the accent strip
    #[arg(long)]
    mascot: bool,

    /// HTTP(S) logo URL; repeat to add multiple logos
    #[arg(long = "logo-url")]
    logo_url: Vec<String>,

    /// Cover style: classic, template, pixel, glass, flow, fun, or random
    #[arg(long, default_value = "classic")]
    style: String,

    /// Seed for the random style pick and jittered decorations
    #[arg(long)]
    seed: Option<u64>,

    /// Use shorter, catchier text (auto-compacts title/subtitle/tagline)
    #[arg(long)]
    compact: bool,
}

#[derive(Args)]
struct AuditArgs {
    /// Optional path to a specific article directory or markdown file
    #[arg(long)]
    article: Option<String>,

    /// Specific image filename to inspect (otherwise auto-detected)
    #[arg(long)]
    image: Option<String>,

    /// Only target the cover declared in article front matter; fall back to
    /// assets/main.png
    #[arg(long)]
    front_matter: bool,

    /// Apply padding/stretch corrections where needed
    #[arg(long)]
    fix: bool,

    /// Stretch images to fit instead of padding
    #[arg(long)]
    stretch: bool,

    /// Skip writing backup copies before fixing
    #[arg(long)]
    no_backup: bool,
}

// The style flag accepts every StyleId plus "random".
enum StyleChoice {
    Random,
    Fixed(StyleId),
}

impl FromStr for StyleChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("random") {
            Ok(StyleChoice::Random)
        } else {
            Ok(StyleChoice::Fixed(s.parse()?))
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Generate(args) => run_generate(&cli.root, args),
        Command::Audit(args) => run_audit(&cli.root, args),
    };
    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run_generate(root: &Path, args: GenerateArgs) -> anyhow::Result<()> {
    // Validate the style before touching the filesystem so a typo cannot
    // leave a backed-up cover behind with nothing written in its place.
    let choice: StyleChoice = args.style.parse()?;

    let article = article::resolve_article(&args.article, root)?;
    let metadata = article::parse_front_matter(article.markdown.as_deref());
    let slug = article
        .dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut title = args
        .title
        .clone()
        .or_else(|| metadata.get("title").cloned())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| article::fallback_title(&slug));
    let mut subtitle = args
        .subtitle
        .clone()
        .or_else(|| metadata.get("description").cloned())
        .filter(|s| !s.is_empty());
    let mut tagline = article::build_tagline(&metadata, args.tagline.as_deref());

    if args.compact {
        let compacted = compact::compact(&title, subtitle.as_deref(), tagline.as_deref());
        title = compacted.title;
        subtitle = compacted.subtitle;
        tagline = compacted.tagline;
    }

    let output_path = match args.output {
        Some(path) if path.is_absolute() => path,
        Some(path) => root.join(path),
        None => article.dir.join("assets").join("main.png"),
    };
    output::ensure_parent(&output_path)?;
    if !args.no_backup {
        if let Some(backup) = output::backup_by_rename(&output_path)? {
            println!("Existing cover moved to backup: {}", describe(&backup, root));
        }
    }

    let assets = StyleAssets {
        logos: fetch::fetch_logos(&args.logo_url),
        mascot: args.mascot,
    };
    let fonts = FontLibrary::resolve(&FontConfig::default());
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let style = match choice {
        StyleChoice::Fixed(style) => style,
        StyleChoice::Random => styles::pick_random(&mut rng),
    };

    let target = TargetSize::default();
    let text = CoverText {
        title: &title,
        subtitle: subtitle.as_deref(),
        tagline: tagline.as_deref(),
        label: &args.label,
    };
    let cover = styles::render(style, &text, &assets, &fonts, target, &mut rng);
    image::DynamicImage::ImageRgba8(cover)
        .to_rgb8()
        .save(&output_path)
        .map_err(|e| Error::Output(format!("Failed to save {}: {e}", output_path.display())))?;

    println!(
        "Saved new cover image -> {} ({}x{}, style={})",
        describe(&output_path, root),
        target.width,
        target.height,
        style
    );
    Ok(())
}

fn run_audit(root: &Path, args: AuditArgs) -> anyhow::Result<()> {
    let options = AuditOptions {
        article: args.article,
        image: args.image.clone(),
        front_matter: args.front_matter,
        fix: args.fix,
        policy: if args.stretch {
            FitPolicy::Stretch
        } else {
            FitPolicy::Pad
        },
        backup: !args.no_backup,
    };
    let report = audit::run(root, &options, TargetSize::default())?;

    if report.checked == 0 && report.missing.is_empty() {
        println!("No images found to inspect.");
        return Ok(());
    }

    let target_desc = args.image.as_deref().unwrap_or("auto-detected PNG");
    println!("Checked {} image(s) targeting {}.", report.checked, target_desc);
    println!("\u{2714} Conforming: {}", report.conforming);
    println!(
        "\u{25b2} Needs attention: {}",
        report.non_conforming.len()
    );
    println!("\u{2716} Errors: {}", report.errored.len());

    if !report.missing.is_empty() {
        println!("\nMissing image(s):");
        for candidate in &report.missing {
            println!("  - {} (expected but not found)", describe(candidate, root));
        }
    }

    if !report.non_conforming.is_empty() {
        println!("\nNon-conforming image(s):");
        for (path, (w, h)) in &report.non_conforming {
            println!("  - {} -> {w}x{h}", describe(path, root));
        }
    }

    if !report.errored.is_empty() {
        println!("\nErrors opening image(s):");
        for (path, message) in &report.errored {
            println!("  - {} :: {message}", describe(path, root));
        }
    }

    if !args.fix {
        if !report.non_conforming.is_empty() {
            println!("\nRun with --fix to correct the listed image(s).");
        }
        return Ok(());
    }

    for fixed in &report.fixed {
        if let Some(backup) = &fixed.backup {
            println!("Backup -> {}", describe(backup, root));
        }
        let (ow, oh) = fixed.original;
        println!(
            "Fixed {}: {ow}x{oh} -> {}x{}",
            describe(&fixed.path, root),
            TargetSize::default().width,
            TargetSize::default().height
        );
    }
    if !report.fixed.is_empty() {
        println!("\nAll requested fixes applied. Re-run without --fix to verify.");
    }
    Ok(())
}

// Paths are reported relative to the repo root when possible.
fn describe(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
