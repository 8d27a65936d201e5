use super::{Catalog, Config, Input, Method, Output};
use crate::ir::CallMethod;

/// What a `CallMethod` currently points at in the catalog.
///
/// A stale reference resolves to less, never to an error: a freshly loaded
/// catalog may no longer contain configs or methods that an older endpoint
/// still names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Unselected,
    ConfigOnly(&'a Config),
    Method(&'a Config, &'a Method),
}

impl Catalog {
    /// Finds a config by exact id.
    pub fn config(&self, id: &str) -> Option<&Config> {
        let found = self.configs.iter().find(|c| c.id == id);
        if found.is_none() && !id.is_empty() {
            log::debug!("Config '{}' is not in the catalog, treating as unselected", id);
        }
        found
    }

    /// Finds a method by config id and exact method name.
    pub fn method(&self, config_id: &str, method_name: &str) -> Option<&Method> {
        self.config(config_id)?.method(method_name)
    }

    pub fn resolve(&self, call: &CallMethod) -> Selection<'_> {
        match self.config(&call.config_id) {
            None => Selection::Unselected,
            Some(config) => match config.method(&call.method_name) {
                Some(method) => Selection::Method(config, method),
                None => Selection::ConfigOnly(config),
            },
        }
    }
}

impl Config {
    pub fn method(&self, name: &str) -> Option<&Method> {
        let found = self.methods.iter().find(|m| m.name == name);
        if found.is_none() && !name.is_empty() {
            log::debug!(
                "Method '{}' is not declared by config '{}', treating as unselected",
                name,
                self.id
            );
        }
        found
    }
}

impl Method {
    pub fn input(&self, name: &str) -> Option<&Input> {
        self.input.iter().find(|i| i.name == name)
    }

    /// The output that a call binds. Only the first declared output is bound.
    pub fn primary_output(&self) -> Option<&Output> {
        self.output.first()
    }
}

impl<'a> Selection<'a> {
    pub fn config(&self) -> Option<&'a Config> {
        match *self {
            Selection::Unselected => None,
            Selection::ConfigOnly(config) | Selection::Method(config, _) => Some(config),
        }
    }

    pub fn method(&self) -> Option<&'a Method> {
        match *self {
            Selection::Method(_, method) => Some(method),
            Selection::Unselected | Selection::ConfigOnly(_) => None,
        }
    }
}
