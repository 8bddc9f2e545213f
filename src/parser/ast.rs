// AST (Abstract Syntax Tree) definitions for the script front-end

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Logical
    And,
    Or,
    // Assignment (right-associative, loosest)
    Assign,
}

impl BinOp {
    /// Source spelling of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::And => "and",
            BinOp::Or => "or",
            BinOp::Assign => "=",
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Plus, // +x
    Neg,  // -x
    Not,  // !x
}

impl UnOp {
    /// Source spelling of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            UnOp::Plus => "+",
            UnOp::Neg => "-",
            UnOp::Not => "!",
        }
    }
}

/// AST nodes representing declarations, statements and expressions
///
/// Every child is owned by its parent; a tree is built once by the parser and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    // Declarations
    VariableDeclaration {
        name: String,
        init: Option<Box<AstNode>>,
    },
    FunctionDeclaration {
        name: String,
        params: Vec<String>,
        body: Vec<AstNode>,
    },

    // Statements
    ReturnStatement {
        value: Box<AstNode>,
    },
    IfStatement {
        condition: Box<AstNode>,
        then_branch: Vec<AstNode>,
        else_branch: Option<Vec<AstNode>>,
    },
    WhileStatement {
        condition: Box<AstNode>,
        body: Vec<AstNode>,
    },
    ForStatement {
        init: Option<Box<AstNode>>,
        condition: Box<AstNode>,
        update: Option<Box<AstNode>>,
        body: Vec<AstNode>,
    },
    Break,
    Continue,

    // Expressions
    BinaryOp {
        op: BinOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
    },
    UnaryOp {
        op: UnOp,
        operand: Box<AstNode>,
    },
    Number(i64),
    String(String),
    Identifier(String),
}

impl AstNode {
    /// Stable, human-readable name of the node variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            AstNode::VariableDeclaration { .. } => "VariableDeclaration",
            AstNode::FunctionDeclaration { .. } => "FunctionDeclaration",
            AstNode::ReturnStatement { .. } => "ReturnStatement",
            AstNode::IfStatement { .. } => "IfStatement",
            AstNode::WhileStatement { .. } => "WhileStatement",
            AstNode::ForStatement { .. } => "ForStatement",
            AstNode::Break => "Break",
            AstNode::Continue => "Continue",
            AstNode::BinaryOp { .. } => "BinaryOp",
            AstNode::UnaryOp { .. } => "UnaryOp",
            AstNode::Number(_) => "Number",
            AstNode::String(_) => "String",
            AstNode::Identifier(_) => "Identifier",
        }
    }

    /// Direct children of this node, in source order.
    ///
    /// For an `if` the condition comes first, then the then-branch, then the
    /// else-branch. For a `for` the order is init, condition, update, body.
    pub fn children(&self) -> Vec<&AstNode> {
        match self {
            AstNode::VariableDeclaration { init, .. } => init.as_deref().into_iter().collect(),
            AstNode::FunctionDeclaration { body, .. } => body.iter().collect(),
            AstNode::ReturnStatement { value } => vec![value.as_ref()],
            AstNode::IfStatement {
                condition,
                then_branch,
                else_branch,
            } => std::iter::once(condition.as_ref())
                .chain(then_branch)
                .chain(else_branch.iter().flatten())
                .collect(),
            AstNode::WhileStatement { condition, body } => {
                std::iter::once(condition.as_ref()).chain(body).collect()
            }
            AstNode::ForStatement {
                init,
                condition,
                update,
                body,
            } => init
                .as_deref()
                .into_iter()
                .chain(std::iter::once(condition.as_ref()))
                .chain(update.as_deref())
                .chain(body)
                .collect(),
            AstNode::BinaryOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            AstNode::UnaryOp { operand, .. } => vec![operand.as_ref()],
            AstNode::Break
            | AstNode::Continue
            | AstNode::Number(_)
            | AstNode::String(_)
            | AstNode::Identifier(_) => Vec::new(),
        }
    }
}

/// Complete program AST
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub nodes: Vec<AstNode>,
}

impl Program {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }
}
