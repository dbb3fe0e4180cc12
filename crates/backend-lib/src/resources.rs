// ============================
// reshelf-backend-lib/src/resources.rs
// ============================
//! Resource service: CRUD over owned content records with the
//! owner-or-admin gate on mutation.
use std::sync::Arc;

use metrics::counter;
use reshelf_common::{
    CreateResourceRequest, ResourcePublic, ResourceView, Role, UpdateResourceRequest,
};

use crate::error::AppError;
use crate::metrics::{RESOURCE_CREATED, RESOURCE_DELETED};
use crate::models::{Account, Resource, ResourcePatch};
use crate::store::Collection;
use crate::validation::require_field;

/// Display name substituted when a resource's creator account has been
/// deleted. The dangling reference itself is kept as-is.
const UNKNOWN_CREATOR: &str = "Unknown user";

pub struct ResourceService {
    resources: Arc<Collection<Resource>>,
    accounts: Arc<Collection<Account>>,
}

impl ResourceService {
    pub fn new(resources: Arc<Collection<Resource>>, accounts: Arc<Collection<Account>>) -> Self {
        Self { resources, accounts }
    }

    /// Create a resource owned by the caller. `created_by` comes from the
    /// verified token, never from the request body.
    pub async fn create(
        &self,
        caller_id: &str,
        req: CreateResourceRequest,
    ) -> Result<Resource, AppError> {
        let title = require_field(req.title.as_deref(), "please provide a title and description")?;
        let description = require_field(
            req.description.as_deref(),
            "please provide a title and description",
        )?;

        let resource = Resource::new(title, description, caller_id.to_string());
        self.resources.insert(resource.clone()).await;

        counter!(RESOURCE_CREATED).increment(1);
        tracing::info!(resource_id = %resource.id, owner = %caller_id, "resource created");
        Ok(resource)
    }

    /// All resources, newest first, each enriched with the creator's display
    /// name. A missing creator yields a placeholder label instead of failing
    /// the whole list.
    pub async fn list(&self) -> Result<Vec<ResourceView>, AppError> {
        let mut rows = self.resources.find_all().await;
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut views = Vec::with_capacity(rows.len());
        for row in &rows {
            let creator_name = match self.accounts.find_by_id(&row.created_by).await {
                Some(account) => account.name,
                None => UNKNOWN_CREATOR.to_string(),
            };
            views.push(ResourceView {
                resource: ResourcePublic::from(row),
                creator_name,
            });
        }
        Ok(views)
    }

    /// Fetch one resource by id. Readable by any authenticated caller.
    pub async fn get(&self, id: &str) -> Result<Resource, AppError> {
        self.resources
            .find_by_id(id)
            .await
            .ok_or(AppError::NotFound("resource"))
    }

    /// Update a resource. Allowed for its owner or an admin.
    pub async fn update(
        &self,
        caller_id: &str,
        caller_role: Role,
        id: &str,
        req: UpdateResourceRequest,
    ) -> Result<Resource, AppError> {
        let existing = self.get(id).await?;
        Self::check_owner_or_admin(&existing, caller_id, caller_role)?;

        let title = match req.title.as_deref() {
            Some(value) => Some(require_field(Some(value), "title cannot be empty")?),
            None => None,
        };
        let description = match req.description.as_deref() {
            Some(value) => Some(require_field(Some(value), "description cannot be empty")?),
            None => None,
        };

        self.resources
            .update_by_id(id, ResourcePatch { title, description })
            .await
            .ok_or(AppError::NotFound("resource"))
    }

    /// Delete a resource. Same gate as update.
    pub async fn delete(
        &self,
        caller_id: &str,
        caller_role: Role,
        id: &str,
    ) -> Result<(), AppError> {
        let existing = self.get(id).await?;
        Self::check_owner_or_admin(&existing, caller_id, caller_role)?;

        self.resources
            .delete_by_id(id)
            .await
            .ok_or(AppError::NotFound("resource"))?;

        counter!(RESOURCE_DELETED).increment(1);
        tracing::info!(resource_id = %id, "resource deleted");
        Ok(())
    }

    fn check_owner_or_admin(
        resource: &Resource,
        caller_id: &str,
        caller_role: Role,
    ) -> Result<(), AppError> {
        if resource.created_by != caller_id && !caller_role.is_admin() {
            return Err(AppError::Forbidden);
        }
        Ok(())
    }
}
