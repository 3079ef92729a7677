//! JSON file store for the school records.
//!
//! Three documents live side by side in the data directory and are always
//! read and written whole.

mod mutator;
mod record_store;
mod resolver;

pub use mutator::*;
pub use record_store::*;
pub use resolver::*;

use std::path::Path;

use crate::errors::AppError;
use crate::models::AdminProfile;

/// Prepare the data directory and seed the admin profile if one is configured
/// and none exists yet.
pub async fn init_data_dir(
    data_dir: &Path,
    bootstrap_admin_id: Option<&str>,
) -> Result<RecordStore, AppError> {
    tokio::fs::create_dir_all(data_dir).await?;
    let store = RecordStore::new(data_dir);

    let admin_path = store.path(Document::Admin);
    let admin_exists = tokio::fs::try_exists(&admin_path).await?;
    match (bootstrap_admin_id, admin_exists) {
        (Some(admin_id), false) => {
            store
                .save_admin(&AdminProfile {
                    admin_id: admin_id.to_string(),
                    profile_pic: None,
                    extra: serde_json::Map::new(),
                })
                .await?;
            tracing::info!("Seeded admin profile at {}", admin_path.display());
        }
        (None, false) => {
            tracing::warn!(
                "No admin profile at {} and SCHOOL_ADMIN_ID is unset; admin login will fail",
                admin_path.display()
            );
        }
        (_, true) => {
            tracing::debug!("Admin profile present at {}", admin_path.display());
        }
    }

    Ok(store)
}
