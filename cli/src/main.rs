//! foliomd CLI - Markdown/MDX content inspection tool

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use foliomd::render::{resume_to_text, to_json, JsonFormat};
use foliomd::{Foliomd, SectionKind, SiteConfig};

#[derive(Parser)]
#[command(name = "foliomd")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Inspect Markdown/MDX portfolio content: frontmatter, resumes, collections", long_about = None)]
struct Cli {
    /// Input content file (shows document info)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a document's frontmatter as JSON
    Meta {
        /// Input content file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print a document's body with frontmatter stripped
    Body {
        /// Input content file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Print a whole document (frontmatter + body) as JSON
    Json {
        /// Input content file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Parse a resume into typed sections
    Resume {
        /// Input resume file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output JSON instead of a text summary
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Keep text fields raw (skip the inline markup transform)
        #[arg(long)]
        raw: bool,
    },

    /// Load a blog collection directory and list its posts
    Posts {
        /// Collection root (folders containing index.mdx)
        #[arg(value_name = "DIR")]
        root: PathBuf,

        /// Output JSON instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// Load a project collection directory and list its projects
    Projects {
        /// Collection root (folders containing index.mdx)
        #[arg(value_name = "DIR")]
        root: PathBuf,

        /// Output JSON instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// Validate a site configuration file and print a summary
    Config {
        /// Path to site-config.json
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Meta { input, compact }) => cmd_meta(&input, compact),
        Some(Commands::Body { input }) => cmd_body(&input),
        Some(Commands::Json { input, compact }) => cmd_json(&input, compact),
        Some(Commands::Resume {
            input,
            json,
            compact,
            raw,
        }) => cmd_resume(&input, json, compact, raw),
        Some(Commands::Posts { root, json }) => cmd_posts(&root, json),
        Some(Commands::Projects { root, json }) => cmd_projects(&root, json),
        Some(Commands::Config { input }) => cmd_config(&input),
        None => {
            if let Some(input) = cli.input {
                cmd_info(&input)
            } else {
                println!("{}", "Usage: foliomd <FILE>".yellow());
                println!("       foliomd --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = foliomd::parse_file(input)?;

    println!("{}", input.display().to_string().cyan().bold());
    println!(
        "  frontmatter keys: {}",
        doc.frontmatter.len().to_string().green()
    );
    println!(
        "  body: {} lines, {} bytes",
        doc.body.lines().count().to_string().green(),
        doc.body.len().to_string().green()
    );
    if let Some(title) = doc.frontmatter.str("title") {
        println!("  title: {}", title);
    }
    Ok(())
}

fn cmd_meta(input: &Path, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = foliomd::parse_file(input)?;
    println!("{}", to_json(&doc.frontmatter, json_format(compact))?);
    Ok(())
}

fn cmd_body(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = foliomd::parse_file(input)?;
    println!("{}", doc.body);
    Ok(())
}

fn cmd_json(input: &Path, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = foliomd::parse_file(input)?;
    println!("{}", to_json(&doc, json_format(compact))?);
    Ok(())
}

fn cmd_resume(
    input: &Path,
    json: bool,
    compact: bool,
    raw: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = Foliomd::new();
    if raw {
        builder = builder.raw_text();
    }
    let resume = builder.resume_file(input)?;

    if json {
        println!("{}", to_json(&resume, json_format(compact))?);
        return Ok(());
    }

    for section in &resume.sections {
        let tag = kind_label(section.kind);
        println!("{} {}", tag, section.title.bold());
        for item in &section.items {
            if let Some(title) = &item.title {
                println!("  {}", title.plain_text().green());
            }
            if let (Some(org), Some(date)) = (&item.organization, &item.date) {
                println!("    {} | {}", org.plain_text(), date.plain_text().dimmed());
            }
            if !item.technologies.is_empty() {
                println!("    {}", item.technologies.join(", ").cyan());
            } else {
                for bullet in &item.description {
                    println!("    - {}", bullet.plain_text());
                }
            }
        }
    }
    log::debug!("plain text form:\n{}", resume_to_text(&resume));
    Ok(())
}

fn kind_label(kind: SectionKind) -> colored::ColoredString {
    match kind {
        SectionKind::Experience => "[experience]".blue(),
        SectionKind::Education => "[education]".magenta(),
        SectionKind::Skills => "[skills]".cyan(),
        SectionKind::Projects => "[projects]".yellow(),
        SectionKind::Other => "[other]".normal(),
    }
}

fn cmd_posts(root: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let pb = loading_spinner(json, "Loading blog posts...");
    let posts = foliomd::load_blog_posts(root)?;
    finish_spinner(pb);

    if json {
        println!("{}", to_json(&posts, JsonFormat::Pretty)?);
        return Ok(());
    }

    println!("{} posts", posts.len().to_string().green().bold());
    for post in &posts {
        println!(
            "  {}  {}  {}",
            post.date.dimmed(),
            post.slug.cyan(),
            post.title
        );
    }
    Ok(())
}

fn cmd_projects(root: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let pb = loading_spinner(json, "Loading projects...");
    let projects = foliomd::load_projects(root)?;
    finish_spinner(pb);

    if json {
        println!("{}", to_json(&projects, JsonFormat::Pretty)?);
        return Ok(());
    }

    println!("{} projects", projects.len().to_string().green().bold());
    for project in &projects {
        println!(
            "  {}  {}  [{}]",
            project.slug.cyan(),
            project.title,
            project.tech.join(", ").dimmed()
        );
    }
    Ok(())
}

fn cmd_config(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = SiteConfig::load(input)?;

    println!("{}", "Site configuration OK".green().bold());
    println!("  owner: {} <{}>", config.user_info.name, config.user_info.email);
    println!("  about cards: {}", config.about_me_sections.len());
    println!(
        "  skill groups: {}",
        config.technical_skills_and_expertise_section.len()
    );
    println!("  contact cards: {}", config.contact_section.len());
    Ok(())
}

fn loading_spinner(json: bool, message: &'static str) -> Option<ProgressBar> {
    if json {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message);
    Some(pb)
}

fn finish_spinner(pb: Option<ProgressBar>) {
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
}
