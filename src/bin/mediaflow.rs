use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mediaflow::cli::load_catalog;
use mediaflow::utils::LoggingConfig;
use mediaflow::{
    catalog_exports, import_flow, Category, FlowError, MediatorCatalog, RegistrationReport,
};

#[derive(Parser)]
#[command(name = "mediaflow", version, about = "Mediator catalog CLI", author)]
struct Cli {
    /// 注册表配置文件（mediaflow.json）
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Mediators {
        #[command(subcommand)]
        command: MediatorCommand,
    },
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    Flow {
        #[command(subcommand)]
        command: FlowCommand,
    },
}

#[derive(Subcommand)]
enum MediatorCommand {
    List {
        #[arg(long)]
        category: Option<Category>,
    },
    Show {
        id: String,
    },
}

#[derive(Subcommand)]
enum CatalogCommand {
    Export {
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Subcommand)]
enum FlowCommand {
    Check { file: PathBuf },
}

fn main() -> anyhow::Result<ExitCode> {
    LoggingConfig::init();

    let cli = Cli::parse();
    let (catalog, report) = load_catalog(cli.config.as_deref())?;
    render_failures(&report);

    match cli.command {
        Command::Mediators { command } => match command {
            MediatorCommand::List { category } => handle_list(&catalog, category),
            MediatorCommand::Show { id } => handle_show(&catalog, &id),
        },
        Command::Catalog { command } => match command {
            CatalogCommand::Export { output, pretty } => handle_export(&catalog, output, pretty),
        },
        Command::Flow { command } => match command {
            FlowCommand::Check { file } => handle_flow_check(&catalog, file),
        },
    }
}

fn render_failures(report: &RegistrationReport) {
    for failure in &report.failures {
        eprintln!("warning: module `{}`: {}", failure.module, failure.error);
    }
}

fn handle_list(catalog: &MediatorCatalog, category: Option<Category>) -> anyhow::Result<ExitCode> {
    let descriptors = match category {
        Some(category) => catalog.list_by_category(category),
        None => catalog.list_all(),
    };
    if descriptors.is_empty() {
        println!("No mediators registered");
        return Ok(ExitCode::SUCCESS);
    }

    println!("{:<32} {:<16} {}", "Id", "Category", "Name");
    for descriptor in descriptors {
        println!(
            "{:<32} {:<16} {}",
            descriptor.id,
            descriptor.category.as_str(),
            descriptor.display_name
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_show(catalog: &MediatorCatalog, id: &str) -> anyhow::Result<ExitCode> {
    match catalog.lookup(id) {
        Ok(descriptor) => {
            println!("{}", serde_json::to_string_pretty(descriptor.as_ref())?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn handle_export(
    catalog: &MediatorCatalog,
    output: Option<PathBuf>,
    pretty: bool,
) -> anyhow::Result<ExitCode> {
    let entries = catalog_exports(catalog);
    let content = if pretty {
        serde_json::to_string_pretty(&entries)?
    } else {
        serde_json::to_string(&entries)?
    };

    if let Some(path) = output {
        fs::write(&path, content)?;
        println!("Catalog exported to `{}`", path.display());
    } else {
        println!("{content}");
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_flow_check(catalog: &MediatorCatalog, file: PathBuf) -> anyhow::Result<ExitCode> {
    let content = fs::read_to_string(&file)?;
    match import_flow(catalog, &content) {
        Ok(document) => {
            println!(
                "Flow `{}` OK ({} node(s))",
                document.name,
                document.node_count()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(FlowError::Rejected(report)) => {
            for diagnostic in &report.diagnostics {
                println!("{diagnostic}");
            }
            println!(
                "Flow `{}` rejected: {} problem(s)",
                report.flow,
                report.diagnostics.len()
            );
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}
