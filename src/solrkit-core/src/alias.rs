use crate::collection::COLLECTIONS_PATH;
use crate::error::{Result, ValidationError};
use crate::models::{wire_enum, HttpHeaders, HttpMethod, RequestBody};
use crate::request::{QueryString, SolrRequest};

wire_enum! {
    #[derive(Default)]
    pub enum AliasAction: "action" {
        #[default]
        CreateAlias => "CREATEALIAS",
        DeleteAlias => "DELETEALIAS",
        ListAliases => "LISTALIASES",
        /// Known to Solr but not supported by this client
        AliasProp => "ALIASPROP",
    }
}

/// Manage collection aliases
#[derive(Debug, Clone, Default)]
pub struct AliasOperation {
    action: AliasAction,
    name: String,
    collections: Vec<String>,
}

impl AliasOperation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a standard alias `name` pointing to `collections`
    pub fn prepare_create<I, S>(mut self, name: impl Into<String>, collections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.action = AliasAction::CreateAlias;
        self.name = name.into();
        self.collections = collections.into_iter().map(Into::into).collect();
        self
    }

    pub fn prepare_delete(mut self, name: impl Into<String>) -> Self {
        self.action = AliasAction::DeleteAlias;
        self.name = name.into();
        self
    }

    pub fn prepare_list(mut self) -> Self {
        self.action = AliasAction::ListAliases;
        self
    }

    /// Select an action directly, keeping the current name and collections
    pub fn with_action(mut self, action: AliasAction) -> Self {
        self.action = action;
        self
    }

    pub fn action(&self) -> AliasAction {
        self.action
    }

    fn require_name(&self) -> Result<&str> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingParameter("name"));
        }
        Ok(&self.name)
    }
}

impl SolrRequest for AliasOperation {
    fn absolute_path(&self) -> Result<String> {
        Ok(COLLECTIONS_PATH.to_string())
    }

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn http_headers(&self) -> HttpHeaders {
        Vec::new()
    }

    fn http_query_string(&self) -> Result<String> {
        let mut query = QueryString::json();

        match self.action {
            AliasAction::ListAliases => {}
            AliasAction::CreateAlias => {
                if self.collections.is_empty() {
                    return Err(ValidationError::EmptyList("collections"));
                }
                query.push("collections", self.collections.join(","));
                query.push("name", self.require_name()?);
            }
            AliasAction::DeleteAlias => {
                query.push("name", self.require_name()?);
            }
            AliasAction::AliasProp => {
                return Err(ValidationError::unsupported("action", self.action.as_str()));
            }
        }

        query.push("action", self.action);
        Ok(query.finish())
    }

    fn http_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Empty)
    }
}
