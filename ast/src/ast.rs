use anyhow::Result;
use std::fmt::Display;

/// handle into the function arena of one run
pub type FnId = usize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Func(FnId),
}

impl Value {
    pub fn int(self) -> Result<i64> {
        match self {
            Value::Int(v) => Ok(v),
            _ => Err(anyhow::anyhow!("integer expected")),
        }
    }

    pub fn func(self) -> Result<FnId> {
        match self {
            Value::Func(id) => Ok(id),
            _ => Err(anyhow::anyhow!("function expected")),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Func(id) => write!(f, "<function #{}>", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Int(i64),
    Var(String),
}

impl Expr {
    pub fn var(name: &str) -> Self {
        Expr::Var(name.to_string())
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Int(v) => write!(f, "{}", v),
            Expr::Var(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assign { name: String, expr: Expr },
    Print(Expr),
    Call(String),
    Def { name: String, body: Vec<Stmt> },
}

impl Stmt {
    pub fn assign(name: &str, expr: Expr) -> Self {
        Stmt::Assign {
            name: name.to_string(),
            expr,
        }
    }

    pub fn print(expr: Expr) -> Self {
        Stmt::Print(expr)
    }

    pub fn call(name: &str) -> Self {
        Stmt::Call(name.to_string())
    }

    pub fn def(name: &str, body: Vec<Stmt>) -> Self {
        Stmt::Def {
            name: name.to_string(),
            body,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Assign { name, expr } => write!(f, "{} = {}", name, expr),
            Stmt::Print(expr) => write!(f, "print({})", expr),
            Stmt::Call(name) => write!(f, "{}()", name),
            Stmt::Def { name, body } => {
                let body = body
                    .iter()
                    .map(|stmt| stmt.to_string())
                    .collect::<Vec<_>>()
                    .join("; ");
                write!(f, "def {}(): {}", name, body)
            }
        }
    }
}

#[derive(Debug)]
pub struct Program(pub Vec<Stmt>);
