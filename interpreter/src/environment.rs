use anyhow::{anyhow, Result};
use ast::ast::Value;
use std::collections::HashMap;
use std::fmt::Display;

pub type EnvId = usize;

/// one binding frame; frames chain upward through `parent`
#[derive(Debug, Clone)]
pub struct Environment {
    pub variables: HashMap<String, Value>,
    pub parent: Option<EnvId>,
}

impl Environment {
    pub fn new(parent: Option<EnvId>) -> Self {
        Self {
            variables: HashMap::new(),
            parent,
        }
    }
}

/// every frame of one run; frame 0 is the root and lives for the whole run
#[derive(Debug)]
pub struct Environments {
    frames: Vec<Environment>,
}

impl Environments {
    pub fn new() -> Self {
        Self {
            frames: vec![Environment::new(None)],
        }
    }

    pub fn root(&self) -> EnvId {
        0
    }

    pub fn push(&mut self, parent: EnvId) -> EnvId {
        self.frames.push(Environment::new(Some(parent)));
        self.frames.len() - 1
    }

    /// drops every frame at or above `mark`
    pub fn pop_to(&mut self, mark: EnvId) {
        self.frames.truncate(mark);
    }

    pub fn get(&self, env: EnvId, name: &str) -> Result<Value> {
        let mut frame = Some(env);
        while let Some(id) = frame {
            let environment = &self.frames[id];
            if let Some(value) = environment.variables.get(name) {
                return Ok(*value);
            }
            frame = environment.parent;
        }
        Err(anyhow!("variable {} not found", name))
    }

    /// binds in the local frame only, shadowing any enclosing binding of `name`
    pub fn define(&mut self, env: EnvId, name: &str, value: Value) {
        self.frames[env].variables.insert(name.to_string(), value);
    }
}

impl Display for Environments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (id, environment) in self.frames.iter().enumerate() {
            writeln!(f, "Frame#{} parent={:?}", id, environment.parent)?;
            for (name, value) in &environment.variables {
                writeln!(f, "  {} = {}", name, value)?;
            }
        }
        Ok(())
    }
}
