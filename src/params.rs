//! Session parameter assembly from flags and files

use log::debug;
use std::fs;
use std::path::Path;

use crate::api::{Parameter, PortalError, Result};

/// Ordered parameters where a later value for the same name replaces the earlier one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    parameters: Vec<Parameter>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, keeping the position of an existing name
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.parameters.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.value = value,
            None => self.parameters.push(Parameter { name, value }),
        }
    }

    /// Apply `NAME=VALUE` items
    pub fn apply_literals<S: AsRef<str>>(&mut self, items: &[S]) -> Result<()> {
        for item in items {
            let (name, value) = split_pair(item.as_ref())?;
            self.set(name, value);
        }
        Ok(())
    }

    /// Apply `NAME=PATH` items, the value being the file content
    pub fn apply_files<S: AsRef<str>>(&mut self, items: &[S]) -> Result<()> {
        for item in items {
            let (name, path) = split_pair(item.as_ref())?;
            let content = fs::read_to_string(path).map_err(|e| {
                PortalError::precondition(format!("cannot read parameter data file {}: {}", path, e))
            })?;
            self.set(name, content);
        }
        Ok(())
    }

    /// Apply every pair from dotenv-format files, in file order
    pub fn apply_env_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<()> {
        for path in paths {
            let path = path.as_ref();
            let unreadable = |e: dotenvy::Error| {
                PortalError::precondition(format!(
                    "cannot read parameters data file {}: {}",
                    path.display(),
                    e
                ))
            };

            for pair in dotenvy::from_path_iter(path).map_err(unreadable)? {
                let (name, value) = pair.map_err(unreadable)?;
                self.set(name, value);
            }
            debug!("Loaded parameters from {}", path.display());
        }
        Ok(())
    }

    pub fn as_slice(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn into_vec(self) -> Vec<Parameter> {
        self.parameters
    }
}

/// Assemble parameters from literal flags, single-value files and dotenv files, in that order
pub fn assemble<S: AsRef<str>, P: AsRef<Path>>(
    literals: &[S],
    files: &[S],
    env_files: &[P],
) -> Result<Vec<Parameter>> {
    let mut set = ParameterSet::new();
    set.apply_literals(literals)?;
    set.apply_files(files)?;
    set.apply_env_files(env_files)?;
    Ok(set.into_vec())
}

fn split_pair(item: &str) -> Result<(&str, &str)> {
    item.split_once('=')
        .ok_or_else(|| PortalError::precondition(format!("invalid parameter format {}", item)))
}
