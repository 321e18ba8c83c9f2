//! Shared helpers for the integration tests: a compact AST builder standing in
//! for the parser, and an in‑memory sink for `print` output.
#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use rox_interpreter as lox;

use lox::ast::{ClassDecl, Expr, FunctionDecl, LiteralValue, Stmt};
use lox::error::LoxError;
use lox::interpreter::Interpreter;
use lox::token::{Token, TokenType};

/// Cloneable `Write` sink; every clone appends to the same buffer.
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Interpreter wired to a fresh buffer.
pub fn interpreter() -> (Interpreter, SharedBuffer) {
    init_logging();
    let buffer = SharedBuffer::default();
    let interpreter = Interpreter::with_output(Box::new(buffer.clone()));
    (interpreter, buffer)
}

/// Resolve and run `program`, returning the outcome and everything printed.
pub fn run(program: &[Stmt]) -> (Result<(), LoxError>, String) {
    let (mut interpreter, buffer) = interpreter();
    let result = lox::run(&mut interpreter, program);
    (result, buffer.contents())
}

/// Run a program that is expected to succeed and return its output lines.
pub fn output_of(program: &[Stmt]) -> Vec<String> {
    let (result, output) = run(program);
    if let Err(e) = result {
        panic!("program failed: {}\noutput so far:\n{}", e, output);
    }
    output.lines().map(str::to_string).collect()
}

// ── tokens ────────────────────────────────────────────────────────────────

pub fn ident(name: &str) -> Token {
    ident_at(name, 1)
}

pub fn ident_at(name: &str, line: usize) -> Token {
    Token::new(TokenType::IDENTIFIER, name, None, line)
}

pub fn operator(lexeme: &str) -> Token {
    let token_type = match lexeme {
        "+" => TokenType::PLUS,
        "-" => TokenType::MINUS,
        "*" => TokenType::STAR,
        "/" => TokenType::SLASH,
        "!" => TokenType::BANG,
        "==" => TokenType::EQUAL_EQUAL,
        "!=" => TokenType::BANG_EQUAL,
        ">" => TokenType::GREATER,
        ">=" => TokenType::GREATER_EQUAL,
        "<" => TokenType::LESS,
        "<=" => TokenType::LESS_EQUAL,
        "and" => TokenType::AND,
        "or" => TokenType::OR,
        other => panic!("unknown operator {other}"),
    };
    Token::new(token_type, lexeme, None, 1)
}

fn keyword(token_type: TokenType, lexeme: &str) -> Token {
    Token::new(token_type, lexeme, None, 1)
}

// ── expressions ───────────────────────────────────────────────────────────

pub fn num(n: f64) -> Expr {
    Expr::Literal(LiteralValue::Number(n))
}

pub fn string(s: &str) -> Expr {
    Expr::Literal(LiteralValue::Str(s.to_string()))
}

pub fn boolean(b: bool) -> Expr {
    Expr::Literal(if b {
        LiteralValue::True
    } else {
        LiteralValue::False
    })
}

pub fn nil() -> Expr {
    Expr::Literal(LiteralValue::Nil)
}

pub fn var(name: &str) -> Expr {
    Expr::variable(ident(name))
}

pub fn var_at(name: &str, line: usize) -> Expr {
    Expr::variable(ident_at(name, line))
}

pub fn assign(name: &str, value: Expr) -> Expr {
    Expr::assign(ident(name), value)
}

pub fn group(inner: Expr) -> Expr {
    Expr::Grouping(Box::new(inner))
}

pub fn unary(op: &str, right: Expr) -> Expr {
    Expr::Unary {
        operator: operator(op),
        right: Box::new(right),
    }
}

pub fn binary(left: Expr, op: &str, right: Expr) -> Expr {
    Expr::Binary {
        left: Box::new(left),
        operator: operator(op),
        right: Box::new(right),
    }
}

pub fn logical(left: Expr, op: &str, right: Expr) -> Expr {
    Expr::Logical {
        left: Box::new(left),
        operator: operator(op),
        right: Box::new(right),
    }
}

pub fn call(callee: Expr, arguments: Vec<Expr>) -> Expr {
    Expr::Call {
        callee: Box::new(callee),
        paren: keyword(TokenType::RIGHT_PAREN, ")"),
        arguments,
    }
}

pub fn get(object: Expr, name: &str) -> Expr {
    Expr::Get {
        object: Box::new(object),
        name: ident(name),
    }
}

pub fn set(object: Expr, name: &str, value: Expr) -> Expr {
    Expr::Set {
        object: Box::new(object),
        name: ident(name),
        value: Box::new(value),
    }
}

pub fn this() -> Expr {
    Expr::this(keyword(TokenType::THIS, "this"))
}

pub fn super_(method: &str) -> Expr {
    Expr::super_method(keyword(TokenType::SUPER, "super"), ident(method))
}

// ── statements ────────────────────────────────────────────────────────────

pub fn print(expr: Expr) -> Stmt {
    Stmt::Print(expr)
}

pub fn expr(expr: Expr) -> Stmt {
    Stmt::Expression(expr)
}

pub fn var_decl(name: &str, initializer: Expr) -> Stmt {
    Stmt::Var {
        name: ident(name),
        initializer: Some(initializer),
    }
}

pub fn var_uninit(name: &str) -> Stmt {
    Stmt::Var {
        name: ident(name),
        initializer: None,
    }
}

pub fn block(statements: Vec<Stmt>) -> Stmt {
    Stmt::Block(statements)
}

pub fn if_else(condition: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Stmt {
    Stmt::If {
        condition,
        then_branch: Box::new(then_branch),
        else_branch: else_branch.map(Box::new),
    }
}

pub fn while_loop(condition: Expr, body: Stmt) -> Stmt {
    Stmt::While {
        condition,
        body: Box::new(body),
    }
}

pub fn ret(value: Option<Expr>) -> Stmt {
    Stmt::Return {
        keyword: keyword(TokenType::RETURN, "return"),
        value,
    }
}

pub fn method(name: &str, params: &[&str], body: Vec<Stmt>) -> Rc<FunctionDecl> {
    Rc::new(FunctionDecl {
        name: ident(name),
        params: params.iter().map(|p| ident(p)).collect(),
        body,
    })
}

pub fn fun(name: &str, params: &[&str], body: Vec<Stmt>) -> Stmt {
    Stmt::Function(method(name, params, body))
}

pub fn class(name: &str, superclass: Option<&str>, methods: Vec<Rc<FunctionDecl>>) -> Stmt {
    Stmt::Class(ClassDecl::new(ident(name), superclass.map(ident), methods))
}
