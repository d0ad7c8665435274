use std::time::Duration;

use anyhow::{anyhow, Result};
use mongodb::{
    bson::{self, doc, oid::ObjectId, Document},
    options::{ClientOptions, FindOneOptions},
    Client, Collection, Database,
};

use crate::error::AdminError;
use crate::models::AdminUser;

/// Bound on both connection establishment and server selection.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Name of the collection holding user documents.
pub const USERS_COLLECTION: &str = "users";

/// Connect to MongoDB and verify the deployment is reachable.
///
/// The driver connects lazily, so a `ping` against the admin database forces
/// a round trip here instead of letting a dead server surface mid-flow.
pub async fn connect(mongo_url: &str) -> Result<Client, AdminError> {
    let mut options = ClientOptions::parse(mongo_url)
        .await
        .map_err(AdminError::Connection)?;
    options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
    options.connect_timeout = Some(SERVER_SELECTION_TIMEOUT);

    let client = Client::with_options(options).map_err(AdminError::Connection)?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 }, None)
        .await
        .map_err(AdminError::Connection)?;

    Ok(client)
}

/// Resolve the database named in the connection string.
pub fn default_database(client: &Client) -> Result<Database, AdminError> {
    client
        .default_database()
        .ok_or(AdminError::DatabaseUnresolved)
}

pub fn users_collection(database: &Database) -> Collection<Document> {
    database.collection::<Document>(USERS_COLLECTION)
}

/// What a provisioning run did to the stored record.
#[derive(Debug)]
pub enum UpsertOutcome {
    /// No record existed; one was inserted with this storage-assigned id.
    Created { id: ObjectId },
    /// A record existed and its fields were replaced.
    Updated,
    /// A record existed but the write modified nothing. Unreachable in
    /// practice with a fresh salt per hash, but the driver reports it and
    /// concurrent writers can produce it.
    Unchanged,
}

/// Insert or update the admin record keyed by email.
///
/// The lookup and the write are separate operations with no transaction
/// around them; two concurrent runs for the same email can race. Accepted
/// for a single-shot operator tool.
pub async fn upsert_admin(
    users: &Collection<Document>,
    email: &str,
    password_hash: &str,
) -> Result<UpsertOutcome> {
    let filter = doc! { "email": email };
    let fields = bson::to_document(&AdminUser::new(email, password_hash))?;

    match users.find_one(filter.clone(), None).await? {
        Some(_) => {
            let result = users
                .update_one(filter, doc! { "$set": fields }, None)
                .await?;
            if result.modified_count > 0 {
                Ok(UpsertOutcome::Updated)
            } else {
                Ok(UpsertOutcome::Unchanged)
            }
        }
        None => {
            let result = users.insert_one(fields, None).await?;
            let id = result
                .inserted_id
                .as_object_id()
                .ok_or_else(|| anyhow!("Inserted _id was not an ObjectId"))?;
            Ok(UpsertOutcome::Created { id })
        }
    }
}

/// Re-read a stored record for operator confirmation, projecting only the
/// email and password hash (the driver includes `_id` by default).
pub async fn confirmation_document(
    users: &Collection<Document>,
    filter: Document,
) -> Result<Option<Document>> {
    let options = FindOneOptions::builder()
        .projection(doc! { "email": 1, "password": 1 })
        .build();

    let found = users.find_one(filter, options).await?;
    Ok(found)
}
