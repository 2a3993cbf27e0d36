use std::{fmt, rc::Rc};

/// The root of a parsed source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree (AST) node representing a statement.
///
/// Statements are executed for their effect; they never produce a value.
/// Every variant carries the source line of its first token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `def <name> = <value>;` declares a name in the current scope.
    Def {
        /// The name being declared.
        name:  String,
        /// The initial value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `let <name> = <value>;` rebinds the nearest existing name.
    Let {
        /// The name being assigned.
        name:  String,
        /// The new value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print <expr>;`
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `{ ... }`, executed in its own child scope.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// Conditional statement with an optional `else` branch.
    If {
        /// The condition expression.
        condition:   Expr,
        /// Statement executed if the condition is truthy.
        then_branch: Box<Self>,
        /// Statement executed otherwise, when present.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while (<condition>) <body>`
    While {
        /// The loop condition, evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `call <expr>;` evaluates an expression and discards its value.
    Call {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `return <value>;` leaves the innermost function call.
    Return {
        /// The returned value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
}

/// An abstract syntax tree (AST) node representing an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A binary operation (addition, comparison, etc.).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Call of a function value (e.g. `f(1, 2)`).
    FuncCall {
        /// Expression producing the function being called.
        callee:    Box<Self>,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Reference to a variable by name.
    Name {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An integer literal.
    IntLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A function literal, `fn(a, b) => { ... }`.
    FnLiteral(Rc<FunctionLiteral>),
}

/// A function literal node.
///
/// Runtime function values hold an `Rc` to this node, so every call executes
/// the same body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionLiteral {
    /// The parameter names, in order.
    pub params: Vec<String>,
    /// The body; always a [`Statement::Block`].
    pub body:   Statement,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Real-valued division (`/`)
    Div,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`<>`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Equal => "==",
            NotEqual => "<>",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}
