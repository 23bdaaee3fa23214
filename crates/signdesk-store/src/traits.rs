//! Repository traits implemented by every store backend.

use async_trait::async_trait;

use signdesk_core::result::AppResult;
use signdesk_core::types::{DocumentId, SignatureId, TemplateId, UserId};
use signdesk_entity::document::Document;
use signdesk_entity::signature::Signature;
use signdesk_entity::template::{Template, TemplateCategory};
use signdesk_entity::user::User;

/// A trusted in-place edit applied to a snapshot of a stored document.
///
/// Returning an error aborts the update and leaves the stored record as it was.
pub type DocumentMutation = Box<dyn FnOnce(&mut Document) -> AppResult<()> + Send>;

/// Document persistence keyed by id, with secondary lookup by secure token.
#[async_trait]
pub trait DocumentRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Find a document by id.
    async fn find_by_id(&self, id: DocumentId) -> AppResult<Option<Document>>;

    /// Find the document currently holding a secure token.
    async fn find_by_token(&self, token: &str) -> AppResult<Option<Document>>;

    /// All documents, newest first.
    async fn find_all(&self) -> AppResult<Vec<Document>>;

    /// Insert a new document.
    async fn create(&self, document: Document) -> AppResult<Document>;

    /// Atomically read, mutate, and replace a document.
    ///
    /// Updates to the same id are serialized. `updated_at` is bumped and the
    /// token index follows any change to `secure_token`. Fails with
    /// `NotFound` if the document does not exist.
    async fn update(&self, id: DocumentId, mutation: DocumentMutation) -> AppResult<Document>;

    /// Delete a document. Returns `true` if it existed.
    async fn delete(&self, id: DocumentId) -> AppResult<bool>;
}

/// Read-mostly template catalog.
#[async_trait]
pub trait TemplateRepository: Send + Sync + std::fmt::Debug + 'static {
    /// All templates in catalog order.
    async fn find_all(&self) -> AppResult<Vec<Template>>;

    /// Templates in one category.
    async fn find_by_category(&self, category: TemplateCategory) -> AppResult<Vec<Template>>;

    /// Find a template by id.
    async fn find_by_id(&self, id: TemplateId) -> AppResult<Option<Template>>;

    /// Add a template to the catalog. Used by seeding only.
    async fn create(&self, template: Template) -> AppResult<Template>;
}

/// Standalone signature records.
#[async_trait]
pub trait SignatureRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Find a signature by id.
    async fn find_by_id(&self, id: SignatureId) -> AppResult<Option<Signature>>;

    /// Signatures belonging to a user, newest first.
    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Signature>>;

    /// Insert a signature record.
    async fn create(&self, signature: Signature) -> AppResult<Signature>;
}

/// User accounts with unique usernames.
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by id.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find a user by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Insert a user. Fails with `Conflict` if the username is taken.
    async fn create(&self, user: User) -> AppResult<User>;
}
