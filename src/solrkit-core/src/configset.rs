//! Configset management through the Configsets API.

use std::path::{Path, PathBuf};

use crate::error::{Result, ValidationError};
use crate::models::{wire_enum, HttpHeaders, HttpMethod, RequestBody};
use crate::request::{QueryString, SolrRequest};

pub const CONFIGS_PATH: &str = "/solr/admin/configs";

wire_enum! {
    #[derive(Default)]
    pub enum ConfigsetAction: "action" {
        #[default]
        Create => "CREATE",
        Delete => "DELETE",
        Upload => "UPLOAD",
        List => "LIST",
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigsetOperation {
    action: ConfigsetAction,
    name: String,
    base_config_set: String,
    zip_file: PathBuf,
}

impl ConfigsetOperation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configset `name` as a copy of `base_config_set`
    pub fn prepare_create(
        mut self,
        name: impl Into<String>,
        base_config_set: impl Into<String>,
    ) -> Self {
        self.action = ConfigsetAction::Create;
        self.name = name.into();
        self.base_config_set = base_config_set.into();
        self
    }

    /// Upload a zipped configset, stored under `name`
    pub fn prepare_upload(mut self, name: impl Into<String>, zip_file: impl AsRef<Path>) -> Self {
        self.action = ConfigsetAction::Upload;
        self.name = name.into();
        self.zip_file = zip_file.as_ref().to_path_buf();
        self
    }

    pub fn prepare_list(mut self) -> Self {
        self.action = ConfigsetAction::List;
        self
    }

    pub fn prepare_delete(mut self, name: impl Into<String>) -> Self {
        self.action = ConfigsetAction::Delete;
        self.name = name.into();
        self
    }

    pub fn action(&self) -> ConfigsetAction {
        self.action
    }
}

impl SolrRequest for ConfigsetOperation {
    fn absolute_path(&self) -> Result<String> {
        Ok(CONFIGS_PATH.to_string())
    }

    fn http_method(&self) -> HttpMethod {
        match self.action {
            ConfigsetAction::Upload => HttpMethod::Post,
            _ => HttpMethod::Get,
        }
    }

    // The upload is sent without a content-type; Solr detects the archive itself.
    fn http_headers(&self) -> HttpHeaders {
        Vec::new()
    }

    fn http_query_string(&self) -> Result<String> {
        let mut query = QueryString::json();
        query.push("action", self.action);

        if self.action != ConfigsetAction::List {
            if self.name.is_empty() {
                return Err(ValidationError::MissingParameter("name"));
            }
            query.push("name", &self.name);
        }
        if self.action == ConfigsetAction::Create {
            query.push("baseConfigSet", &self.base_config_set);
        }

        Ok(query.finish())
    }

    fn http_body(&self) -> Result<RequestBody> {
        match self.action {
            ConfigsetAction::Upload => {
                if self.zip_file.as_os_str().is_empty() {
                    return Err(ValidationError::MissingParameter("zip file"));
                }
                Ok(RequestBody::File(self.zip_file.clone()))
            }
            _ => Ok(RequestBody::Empty),
        }
    }
}
