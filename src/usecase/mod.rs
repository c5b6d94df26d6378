//! Generic list use case
//!
//! Wraps the list engine with the collaborator seams a deployment wires
//! per entity: authorization, request validation against the entity's
//! configured field whitelist, the storage read, a transactional boundary,
//! and translation of error codes into user-facing messages. The engine
//! itself never sees any of these concerns.

use crate::config::{EntityListConfig, ListSettings};
use crate::core::auth::{AllowAllAuthorizer, AuthContext, AuthPolicy, Authorizer};
use crate::core::collaborators::{IdentityTranslator, NoTransaction, TransactionGuard, Translator};
use crate::core::entity::Data;
use crate::core::error::{ListError, StorageError, UseCaseError, ValidationError};
use crate::core::service::DataService;
use crate::list::{
    FilterRequest, ListDataResult, ListProcessor, PaginationRequest, SearchRequest, SortRequest,
};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// The caller-facing list request: pagination plus up to three optional
/// stages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRequest {
    #[serde(default)]
    pub pagination: PaginationRequest,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterRequest>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortRequest>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchRequest>,
}

impl ListRequest {
    /// Plain page-number request with no filter, sort, or search
    pub fn paged(page: usize, limit: usize) -> Self {
        Self {
            pagination: PaginationRequest::page(page, limit),
            ..Self::default()
        }
    }

    pub fn with_filter(mut self, filter: FilterRequest) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_sort(mut self, sort: SortRequest) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_search(mut self, search: SearchRequest) -> Self {
        self.search = Some(search);
        self
    }
}

/// List-page use case for one entity type.
///
/// Collaborators default to explicit pass-through implementations; inject
/// real ones per deployment with the `with_*` builders.
pub struct ListEntitiesUseCase<T, S>
where
    T: Data,
    S: DataService<T>,
{
    service: Arc<S>,
    config: EntityListConfig,
    settings: ListSettings,
    policy: AuthPolicy,
    authorizer: Arc<dyn Authorizer>,
    translator: Arc<dyn Translator>,
    transaction: Arc<dyn TransactionGuard>,
    _entity: PhantomData<T>,
}

impl<T, S> ListEntitiesUseCase<T, S>
where
    T: Data,
    S: DataService<T>,
{
    /// Build a use case from a storage service and the entity's list
    /// configuration. The policy comes from the configuration, defaulting
    /// to public access.
    pub fn new(service: Arc<S>, config: EntityListConfig) -> Self {
        let policy = config
            .policy
            .as_deref()
            .map(AuthPolicy::parse_policy)
            .unwrap_or(AuthPolicy::Public);
        Self {
            service,
            config,
            settings: ListSettings::default(),
            policy,
            authorizer: Arc::new(AllowAllAuthorizer),
            translator: Arc::new(IdentityTranslator),
            transaction: Arc::new(NoTransaction),
            _entity: PhantomData,
        }
    }

    pub fn with_settings(mut self, settings: ListSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_policy(mut self, policy: AuthPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_authorizer(mut self, authorizer: Arc<dyn Authorizer>) -> Self {
        self.authorizer = authorizer;
        self
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = translator;
        self
    }

    pub fn with_transaction(mut self, transaction: Arc<dyn TransactionGuard>) -> Self {
        self.transaction = transaction;
        self
    }

    /// Authorize, validate, load, and process one list page.
    #[instrument(skip_all, fields(entity = %self.config.entity))]
    pub async fn execute(
        &self,
        context: &AuthContext,
        request: ListRequest,
    ) -> Result<ListDataResult<T>, UseCaseError> {
        self.authorizer
            .authorize(context, &self.policy)
            .await
            .map_err(|e| self.user_error(e.into()))?;

        let request = self
            .validated(request)
            .map_err(|e| self.user_error(e.into()))?;

        let records = self.load_records().await.map_err(|e| self.user_error(e))?;
        debug!(count = records.len(), "records materialized");

        ListProcessor::process(
            records,
            &request.pagination,
            request.filter.as_ref(),
            request.sort.as_ref(),
            request.search.as_ref(),
        )
        .map_err(|e| self.user_error(e))
    }

    /// Reject requests the engine should never see: unknown fields, empty
    /// clause lists, oversized pages. Also fills in the entity's default
    /// search field set when the request leaves it open.
    fn validated(&self, mut request: ListRequest) -> Result<ListRequest, ValidationError> {
        if request.pagination.limit > self.settings.max_limit {
            return Err(ValidationError::LimitTooLarge {
                limit: request.pagination.limit,
                max: self.settings.max_limit,
            });
        }

        if let Some(filter) = &request.filter {
            if filter.filters.is_empty() {
                return Err(ValidationError::EmptyFilter);
            }
            for clause in &filter.filters {
                self.check_field(&clause.field)?;
            }
        }

        if let Some(sort) = &request.sort {
            if sort.fields.is_empty() {
                return Err(ValidationError::EmptySort);
            }
            for sort_field in &sort.fields {
                self.check_field(&sort_field.field)?;
            }
        }

        if let Some(search) = &mut request.search {
            for field in &search.options.search_fields {
                self.check_field(field)?;
            }
            if search.options.search_fields.is_empty() && !self.config.search_fields.is_empty() {
                search.options.search_fields = self.config.search_fields.clone();
            }
        }

        Ok(request)
    }

    fn check_field(&self, field: &str) -> Result<(), ValidationError> {
        if self.config.is_allowed_field(field) {
            Ok(())
        } else {
            Err(ValidationError::UnknownField {
                entity_type: self.config.entity.clone(),
                field: field.to_string(),
            })
        }
    }

    async fn load_records(&self) -> Result<Vec<T>, ListError> {
        self.transaction
            .begin()
            .await
            .map_err(|e| self.storage_error(e))?;

        match self.service.list().await {
            Ok(records) => {
                self.transaction
                    .commit()
                    .await
                    .map_err(|e| self.storage_error(e))?;
                Ok(records)
            }
            Err(e) => {
                if let Err(rollback_err) = self.transaction.rollback().await {
                    warn!(error = %rollback_err, "rollback failed after list error");
                }
                Err(self.storage_error(e))
            }
        }
    }

    fn storage_error(&self, err: anyhow::Error) -> ListError {
        ListError::Storage(StorageError {
            backend: self.config.entity.clone(),
            message: err.to_string(),
        })
    }

    /// Translate an engine error into the user-facing shape
    fn user_error(&self, err: ListError) -> UseCaseError {
        let code = err.error_code();
        UseCaseError {
            code: code.to_string(),
            message: self.translator.translate(code, &err.to_string()),
        }
    }
}
