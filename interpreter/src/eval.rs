use crate::environment::{EnvId, Environments};
use crate::function::Function;
use anyhow::{anyhow, Result};
use ast::ast::{Expr, FnId, Program, Stmt, Value};
use std::fmt::Display;
use std::io::Write;
use std::str::FromStr;

/// which environment chain a function body resolves names against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopingMode {
    /// the chain rooted at the function's definition
    Static,
    /// the chain rooted at the call site
    Dynamic,
}

impl Display for ScopingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScopingMode::Static => write!(f, "static"),
            ScopingMode::Dynamic => write!(f, "dynamic"),
        }
    }
}

impl FromStr for ScopingMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "static" => Ok(ScopingMode::Static),
            "dynamic" => Ok(ScopingMode::Dynamic),
            _ => Err(anyhow!("unknown scoping mode {}", s)),
        }
    }
}

pub struct Interpreter<W> {
    envs: Environments,
    functions: Vec<Function>,
    output: W,
}

impl<W: Write> Interpreter<W> {
    pub fn new(output: W) -> Self {
        Self {
            envs: Environments::new(),
            functions: Vec::new(),
            output,
        }
    }

    pub fn run(&mut self, program: &Program, mode: ScopingMode) -> Result<Value> {
        let root = self.envs.root();
        program.eval(self, root, mode)
    }

    fn define_function(&mut self, name: &str, body: &[Stmt], env: EnvId) -> FnId {
        self.functions
            .push(Function::new(name.to_string(), body.to_vec(), env));
        self.functions.len() - 1
    }

    /// runs a function body in a fresh frame. The frame's parent is the
    /// captured definition environment under static scoping and the caller's
    /// live frame under dynamic scoping; the frame is popped again on every
    /// exit path.
    fn call(&mut self, id: FnId, call_env: EnvId, mode: ScopingMode) -> Result<Value> {
        let function = self.functions[id].clone();
        let parent = match mode {
            ScopingMode::Static => function.env,
            ScopingMode::Dynamic => call_env,
        };
        let frame = self.envs.push(parent);
        log::debug!("call {} frame #{} parent #{}", function, frame, parent);
        let result = function.body.eval(self, frame, mode);
        self.envs.pop_to(frame);
        result
    }
}

pub trait Eval {
    fn eval<W: Write>(
        &self,
        interpreter: &mut Interpreter<W>,
        env: EnvId,
        mode: ScopingMode,
    ) -> Result<Value>;
}

impl Eval for Expr {
    fn eval<W: Write>(
        &self,
        interpreter: &mut Interpreter<W>,
        env: EnvId,
        _mode: ScopingMode,
    ) -> Result<Value> {
        match self {
            Expr::Int(v) => Ok(Value::Int(*v)),
            Expr::Var(name) => interpreter.envs.get(env, name),
        }
    }
}

impl Eval for Stmt {
    fn eval<W: Write>(
        &self,
        interpreter: &mut Interpreter<W>,
        env: EnvId,
        mode: ScopingMode,
    ) -> Result<Value> {
        log::debug!("execute {}", self);
        match self {
            Stmt::Assign { name, expr } => {
                let value = expr.eval(interpreter, env, mode)?;
                interpreter.envs.define(env, name, value);
                Ok(value)
            }
            Stmt::Print(expr) => {
                let value = expr.eval(interpreter, env, mode)?;
                let Value::Int(v) = value else {
                    return Err(anyhow!("cannot print {}: not an integer", value));
                };
                writeln!(interpreter.output, "{}", v)?;
                Ok(value)
            }
            Stmt::Call(name) => {
                let value = interpreter.envs.get(env, name)?;
                let Value::Func(id) = value else {
                    return Err(anyhow!("'{}' is not a function", name));
                };
                interpreter.call(id, env, mode)
            }
            Stmt::Def { name, body } => {
                let id = interpreter.define_function(name, body, env);
                interpreter.envs.define(env, name, Value::Func(id));
                Ok(Value::Func(id))
            }
        }
    }
}

impl Eval for [Stmt] {
    fn eval<W: Write>(
        &self,
        interpreter: &mut Interpreter<W>,
        env: EnvId,
        mode: ScopingMode,
    ) -> Result<Value> {
        let mut last = Value::Int(0);
        for stmt in self {
            last = stmt.eval(interpreter, env, mode)?;
        }
        Ok(last)
    }
}

impl Eval for Program {
    fn eval<W: Write>(
        &self,
        interpreter: &mut Interpreter<W>,
        env: EnvId,
        mode: ScopingMode,
    ) -> Result<Value> {
        self.0.eval(interpreter, env, mode)
    }
}
