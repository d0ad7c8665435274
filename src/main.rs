use anyhow::Result;
use mongodb::bson::{doc, Document};
use mongodb::Collection;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use create_admin::config::Config;
use create_admin::db::{self, UpsertOutcome};
use create_admin::{auth, prompt};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "create_admin=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run().await {
        eprintln!("❌ {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;

    let client = db::connect(&config.mongo_url).await?;
    tracing::debug!("MongoDB ping succeeded");

    let database = db::default_database(&client)?;
    tracing::debug!("Target database: {}", database.name());
    let users = db::users_collection(&database);

    println!("=== Create or update admin (only email + password) ===");
    let email = prompt::read_email()?;
    let password = prompt::read_password()?;

    let password_hash = auth::hash_password(&password)?;

    match db::upsert_admin(&users, &email, &password_hash).await? {
        UpsertOutcome::Created { id } => {
            println!("✅ Admin created with _id: {}", id);
            print_confirmation(&users, doc! { "_id": id }).await?;
        }
        UpsertOutcome::Updated => {
            println!("✅ Existing user updated (password replaced).");
            print_confirmation(&users, doc! { "email": &email }).await?;
        }
        UpsertOutcome::Unchanged => {
            println!("⚠️ Update executed but no document was modified (hash may be identical).");
            print_confirmation(&users, doc! { "email": &email }).await?;
        }
    }

    client.shutdown().await;
    Ok(())
}

/// Echo the stored record back so the operator can confirm what was written.
async fn print_confirmation(users: &Collection<Document>, filter: Document) -> Result<()> {
    println!();
    println!("Document in DB (email + password-hash):");
    match db::confirmation_document(users, filter).await? {
        Some(found) => println!("{}", found),
        None => println!("(document not found on re-read)"),
    }
    Ok(())
}
