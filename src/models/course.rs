//! Course module model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseModule {
    pub name: String,
    pub description: String,
}

/// Read-only, ordered module table
///
/// Order is the order of the menu keyboard.
#[derive(Debug, Clone)]
pub struct ModuleCatalog {
    modules: Vec<CourseModule>,
}

impl ModuleCatalog {
    pub fn new(modules: Vec<CourseModule>) -> Self {
        Self { modules }
    }

    /// Look a module up by its exact button label
    pub fn get(&self, name: &str) -> Option<&CourseModule> {
        self.modules.iter().find(|m| m.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|m| m.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Default for ModuleCatalog {
    fn default() -> Self {
        Self::new(crate::content::default_modules())
    }
}
