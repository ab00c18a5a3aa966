use crate::eval::{Interpreter, ScopingMode};
use anyhow::Result;
use ast::ast::{Expr, Program, Stmt};
use std::env;
use std::io::stdout;

pub mod environment;
pub mod eval;
pub mod function;

/// x = 10
/// def f():
///     print(x)
/// def g():
///     x = 20
///     f()
/// g()
fn example_program() -> Program {
    Program(vec![
        Stmt::assign("x", Expr::Int(10)),
        Stmt::def("f", vec![Stmt::print(Expr::var("x"))]),
        Stmt::def(
            "g",
            vec![Stmt::assign("x", Expr::Int(20)), Stmt::call("f")],
        ),
        Stmt::call("g"),
    ])
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .without_time()
        .with_max_level(tracing::Level::INFO)
        .with_line_number(true)
        .init();

    let args = env::args().collect::<Vec<_>>();
    let modes = match args.get(1) {
        Some(mode) => vec![mode.parse::<ScopingMode>()?],
        None => vec![ScopingMode::Static, ScopingMode::Dynamic],
    };

    let program = example_program();
    for mode in modes {
        println!("{} scoping output:", mode);
        Interpreter::new(stdout()).run(&program, mode)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Once;

    static INIT: Once = Once::new();

    pub fn setup() {
        INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_test_writer()
                .without_time()
                .with_max_level(tracing::Level::DEBUG)
                .with_line_number(true)
                .init();
        });
    }
}
