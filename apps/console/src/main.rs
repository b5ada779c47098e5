use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docdesk_config::load as load_config;
use docdesk_documents::{Document, DOCUMENTS_COLLECTION};
use docdesk_questions::{Question, QUESTIONS_COLLECTION};
use docdesk_runtime::{seed, telemetry, CoreServices};
use docdesk_users::{User, SESSION_KEY, USERS_COLLECTION};
use tracing::info;

#[derive(Parser)]
#[command(name = "docdesk")]
#[command(about = "Docdesk data store console")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Force-write the bootstrap fixtures into the store
    SeedData,
    /// Dump users, documents, and questions from the store
    DumpData,
    /// Remove all collections and the session marker from the store
    ClearData,
    /// Show collection counts and session state (default)
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing().context("failed to initialise tracing")?;

    let cli = Cli::parse();

    let config = load_config().context("failed to load configuration")?;
    let services = CoreServices::initialise(&config).context("failed to initialise core services")?;

    match cli.command.unwrap_or(Commands::Status) {
        Commands::SeedData => seed_data(&services),
        Commands::DumpData => dump_data(&services).await,
        Commands::ClearData => clear_data(&services),
        Commands::Status => status(&services),
    }
}

fn seed_data(services: &CoreServices) -> Result<()> {
    info!("seeding store with bootstrap fixtures");

    services
        .store
        .save_collection(USERS_COLLECTION, &seed::bootstrap_users())
        .context("failed to seed users")?;
    services
        .store
        .save_collection(DOCUMENTS_COLLECTION, &seed::bootstrap_documents())
        .context("failed to seed documents")?;
    services
        .store
        .save_collection(QUESTIONS_COLLECTION, &seed::bootstrap_questions())
        .context("failed to seed questions")?;

    info!("store seeded");
    Ok(())
}

async fn dump_data(services: &CoreServices) -> Result<()> {
    info!("dumping collections from store");

    let users = services
        .users
        .list()
        .await
        .context("failed to list users")?;

    println!("=== USERS ===");
    if users.is_empty() {
        println!("No users found in store");
    } else {
        println!("Found {} users:", users.len());
        println!("{:<28} {:<20} {:<28} {:<8}", "ID", "Name", "Email", "Role");
        println!("{}", "-".repeat(86));
        for user in users {
            println!(
                "{:<28} {:<20} {:<28} {:<8}",
                user.id,
                user.name,
                user.email,
                String::from(user.role)
            );
        }
    }

    let documents = services
        .documents
        .list()
        .await
        .context("failed to list documents")?;

    println!("\n=== DOCUMENTS ===");
    if documents.is_empty() {
        println!("No documents found in store");
    } else {
        println!("Found {} documents:", documents.len());
        println!(
            "{:<28} {:<30} {:<6} {:<8} {:<10} {:<28}",
            "ID", "Title", "Type", "Size", "Status", "Updated At"
        );
        println!("{}", "-".repeat(112));
        for document in documents {
            println!(
                "{:<28} {:<30} {:<6} {:<8} {:<10} {:<28}",
                document.id,
                document.title,
                document.doc_type,
                document.size,
                String::from(document.status),
                document.updated_at
            );
        }
    }

    let questions = services
        .questions
        .list()
        .await
        .context("failed to list questions")?;

    println!("\n=== QUESTIONS ===");
    if questions.is_empty() {
        println!("No questions found in store");
    } else {
        println!("Found {} questions:", questions.len());
        println!(
            "{:<28} {:<40} {:<10} {:<12} {:<8}",
            "ID", "Title", "Asked By", "Status", "Answers"
        );
        println!("{}", "-".repeat(100));
        for question in questions {
            println!(
                "{:<28} {:<40} {:<10} {:<12} {:<8}",
                question.id,
                question.title,
                question.asked_by,
                String::from(question.status),
                question.answers.len()
            );
        }
    }

    Ok(())
}

fn clear_data(services: &CoreServices) -> Result<()> {
    info!("clearing all collections from store");

    services
        .store
        .remove_collection(USERS_COLLECTION)
        .context("failed to clear users")?;
    services
        .store
        .remove_collection(DOCUMENTS_COLLECTION)
        .context("failed to clear documents")?;
    services
        .store
        .remove_collection(QUESTIONS_COLLECTION)
        .context("failed to clear questions")?;
    services
        .store
        .delete_record(SESSION_KEY)
        .context("failed to clear session marker")?;

    info!("store cleared");
    Ok(())
}

fn status(services: &CoreServices) -> Result<()> {
    let users: Vec<User> = services
        .store
        .load_collection(USERS_COLLECTION)
        .context("failed to read users")?;
    let documents: Vec<Document> = services
        .store
        .load_collection(DOCUMENTS_COLLECTION)
        .context("failed to read documents")?;
    let questions: Vec<Question> = services
        .store
        .load_collection(QUESTIONS_COLLECTION)
        .context("failed to read questions")?;
    let session = services
        .users
        .sessions()
        .current()
        .context("failed to read session marker")?;

    println!("users:     {}", users.len());
    println!("documents: {}", documents.len());
    println!("questions: {}", questions.len());
    match session {
        Some(user) => println!("session:   {} <{}>", user.name, user.email),
        None => println!("session:   none"),
    }

    Ok(())
}
