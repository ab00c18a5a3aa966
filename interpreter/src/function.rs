use crate::environment::EnvId;
use ast::ast::Stmt;
use std::fmt::Display;

/// a defined function: its body plus the environment captured at definition
/// time. The capture happens for every definition; only the call protocol
/// decides whether it is used.
#[derive(Debug, Clone)]
pub struct Function {
    pub name: String,
    pub body: Vec<Stmt>,
    pub env: EnvId,
}

impl Function {
    pub fn new(name: String, body: Vec<Stmt>, env: EnvId) -> Self {
        Self { name, body, env }
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "def {}()", self.name)
    }
}
